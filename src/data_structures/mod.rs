pub mod cursor;
pub mod linked_list;
pub mod priority_queue;

pub use cursor::{Cursor, CursorMut};
pub use linked_list::{IntoIter, Iter, IterMut, LinkedList};
pub use priority_queue::MinQueue;
