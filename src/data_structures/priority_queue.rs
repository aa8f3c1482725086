use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::fmt::Debug;

/// An entry of a [`MinQueue`], ordered so the cheapest entry is the greatest
#[derive(Debug, Clone, PartialEq, Eq)]
struct Entry<V, P> {
    priority: P,
    item: V,
}

impl<V: Ord, P: Ord> Ord for Entry<V, P> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed on both keys: BinaryHeap pops its maximum
        other
            .priority
            .cmp(&self.priority)
            .then_with(|| other.item.cmp(&self.item))
    }
}

impl<V: Ord, P: Ord> PartialOrd for Entry<V, P> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// A min-priority queue used by the shortest path search
///
/// Pops the item with the lowest priority first. Ties are broken by the
/// smaller item so the pop order is deterministic.
#[derive(Debug)]
pub struct MinQueue<V, P>
where
    V: Ord + Debug,
    P: Ord + Copy + Debug,
{
    /// The underlying binary heap
    heap: BinaryHeap<Entry<V, P>>,
}

impl<V, P> MinQueue<V, P>
where
    V: Ord + Debug,
    P: Ord + Copy + Debug,
{
    /// Creates a new empty queue
    pub fn new() -> Self {
        MinQueue {
            heap: BinaryHeap::new(),
        }
    }

    /// Returns true if the queue is empty
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Returns the number of queued items
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Queues an item with the given priority
    pub fn push(&mut self, item: V, priority: P) {
        self.heap.push(Entry { priority, item });
    }

    /// Removes the item with the lowest priority
    pub fn pop(&mut self) -> Option<(V, P)> {
        self.heap.pop().map(|entry| (entry.item, entry.priority))
    }

    /// Returns the lowest priority item without removing it
    pub fn peek(&self) -> Option<(&V, P)> {
        self.heap.peek().map(|entry| (&entry.item, entry.priority))
    }

    /// Clears the queue
    pub fn clear(&mut self) {
        self.heap.clear();
    }
}

impl<V, P> Default for MinQueue<V, P>
where
    V: Ord + Debug,
    P: Ord + Copy + Debug,
{
    fn default() -> Self {
        MinQueue::new()
    }
}
