use algorithms::{Error, LinkedList};
use rand::Rng;

fn one_to_four() -> LinkedList<i32> {
    let mut list = LinkedList::new();
    list.append(1);
    list.append(2);
    list.append(3);
    list.append(4);
    list
}

#[test]
fn test_size_of_empty_list() {
    let list: LinkedList<i32> = LinkedList::new();
    assert_eq!(list.size(), 0);
    assert!(list.is_empty());
    assert_eq!(list.front(), None);
    assert_eq!(list.to_vec(), Vec::<i32>::new());
}

#[test]
fn test_singleton() {
    let list = LinkedList::singleton(8);
    assert_eq!(list.size(), 1);
    assert_eq!(list[0], 8);
}

#[test]
fn test_construction_round_trip() {
    let mut rng = rand::thread_rng();
    for _ in 0..50 {
        let len = rng.gen_range(0..40);
        let values: Vec<i32> = (0..len).map(|_| rng.gen_range(-50..50)).collect();
        let list = LinkedList::from(values.clone());
        assert_eq!(list.to_vec(), values);
        assert_eq!(list.size(), values.len());
        assert_eq!(list.size() == 0, list.is_empty());
    }
}

#[test]
fn test_equality_comparison() {
    let list1 = LinkedList::singleton(8);
    let list2 = LinkedList::singleton(8);
    assert!(list1 == list2);

    let mut list3 = LinkedList::singleton(8);
    list3.append(9);
    assert!(list1 != list3, "Lists of different length must differ");

    let words1 = LinkedList::singleton("hello".to_string());
    let words2 = LinkedList::singleton("hello".to_string());
    assert_eq!(words1, words2);

    let empty1: LinkedList<i32> = LinkedList::new();
    let empty2: LinkedList<i32> = LinkedList::new();
    assert_eq!(empty1, empty2);
    assert_ne!(empty1, list1);
}

#[test]
fn test_clone_is_independent() {
    let list1 = one_to_four();
    let mut list2 = list1.clone();
    assert_eq!(list1, list2);

    list2.append(5);
    assert_ne!(list1, list2);
    assert_eq!(list1.to_vec(), vec![1, 2, 3, 4]);

    list2[0] = 100;
    assert_eq!(list1[0], 1);
}

#[test]
fn test_clone_from_replaces_contents() {
    let source = LinkedList::from([7, 8]);
    let mut target = one_to_four();
    target.clone_from(&source);
    assert_eq!(target.to_vec(), vec![7, 8]);
    assert_eq!(target.size(), 2);
}

#[test]
fn test_take_empties_source() {
    let mut list1 = one_to_four();
    let list2 = list1.take();
    assert_eq!(list1.size(), 0);
    assert!(list1.is_empty());
    assert_eq!(list2.to_vec(), vec![1, 2, 3, 4]);

    // The emptied source is still usable
    list1.append(1);
    assert_eq!(list1.to_vec(), vec![1]);
}

#[test]
fn test_swap() {
    let mut list1 = one_to_four();
    let mut list2 = LinkedList::singleton(9);
    list1.swap(&mut list2);
    assert_eq!(list1.to_vec(), vec![9]);
    assert_eq!(list2.to_vec(), vec![1, 2, 3, 4]);
    assert_eq!(list1.size(), 1);
    assert_eq!(list2.size(), 4);
}

#[test]
fn test_append_and_square_brackets() {
    let mut list = one_to_four();
    assert_eq!(list[1], 2);
    assert_eq!(list[3], 4);
    list[3] = 5;
    assert_eq!(list[1], 2);
    assert_eq!(list[3], 5);
}

#[test]
fn test_get_out_of_range() {
    let mut list = LinkedList::singleton(2);
    assert!(matches!(
        list.get(83),
        Err(Error::IndexOutOfRange { index: 83, len: 1 })
    ));
    assert!(list.get_mut(1).is_err());
    assert!(LinkedList::<i32>::new().get(0).is_err());
}

#[test]
fn test_get_negative_index() {
    let list = LinkedList::singleton(2);
    // A negative position wraps to a huge usize and is simply out of range
    let index = -10i64 as usize;
    assert!(matches!(list.get(index), Err(Error::IndexOutOfRange { .. })));
}

#[test]
#[should_panic(expected = "index 83 out of range for list of length 1")]
fn test_square_brackets_out_of_range_panics() {
    let list = LinkedList::singleton(2);
    let _value = list[83];
}

#[test]
fn test_insert_out_of_range() {
    let mut list: LinkedList<String> = LinkedList::new();
    assert!(list.insert("hi".to_string(), 3).is_err());
    assert!(list.insert("hi".to_string(), -3i64 as usize).is_err());
    assert!(list.is_empty());
}

#[test]
fn test_append_and_insert() {
    let mut list = one_to_four();
    assert_eq!(list[1], 2);
    assert_eq!(list[2], 3);
    assert_eq!(list[3], 4);

    list.insert(10, 2).unwrap();
    assert_eq!(list[1], 2);
    assert_eq!(list[2], 10);
    assert_eq!(list[4], 4);
    assert_eq!(list.to_vec(), vec![1, 2, 10, 3, 4]);
    assert_eq!(list.size(), 5);
}

#[test]
fn test_insert_at_bounds() {
    let mut list = LinkedList::new();
    list.insert(2, 0).unwrap();
    list.insert(1, 0).unwrap();

    // Inserting at the length appends
    list.insert(3, 2).unwrap();
    assert_eq!(list.to_vec(), vec![1, 2, 3]);

    // One past the length is rejected
    assert!(matches!(
        list.insert(9, 4),
        Err(Error::IndexOutOfRange { index: 4, len: 3 })
    ));
    assert_eq!(list.to_vec(), vec![1, 2, 3]);
}

#[test]
fn test_insert_multiple() {
    let mut list = one_to_four();
    list.insert_multiple(vec![7, 8, 9], 1).unwrap();
    assert_eq!(list.to_vec(), vec![1, 7, 8, 9, 2, 3, 4]);
    assert_eq!(list.size(), 7);

    list.insert_multiple([5, 6], 0).unwrap();
    assert_eq!(list.to_vec(), vec![5, 6, 1, 7, 8, 9, 2, 3, 4]);

    list.insert_multiple([0], list.size()).unwrap();
    assert_eq!(list[list.size() - 1], 0);

    assert!(list.insert_multiple([1, 2], 100).is_err());
    assert_eq!(list.size(), 10);
}

#[test]
fn test_remove_out_of_range() {
    let mut list: LinkedList<String> = LinkedList::new();
    assert!(list.remove(3).is_err());
    assert!(list.remove(0).is_err());
    assert!(list.remove(-3i64 as usize).is_err());

    let mut list = one_to_four();
    assert!(matches!(
        list.remove(4),
        Err(Error::IndexOutOfRange { index: 4, len: 4 })
    ));
    assert_eq!(list.size(), 4);
}

#[test]
fn test_append_and_remove() {
    let mut list = one_to_four();
    assert_eq!(list[2], 3);
    assert_eq!(list.remove(2).unwrap(), 3);
    assert_eq!(list[2], 4);
    assert_eq!(list[1], 2);
    assert_eq!(list.size(), 3);

    assert_eq!(list.remove(0).unwrap(), 1);
    assert_eq!(list.to_vec(), vec![2, 4]);
}

#[test]
fn test_remove_shifts_following_elements() {
    let mut rng = rand::thread_rng();
    for _ in 0..50 {
        let values: Vec<u8> = (0..rng.gen_range(1..30)).map(|_| rng.gen()).collect();
        let index = rng.gen_range(0..values.len());

        let mut list = LinkedList::from(values.clone());
        let removed = list.remove(index).unwrap();

        let mut expected = values.clone();
        assert_eq!(removed, expected.remove(index));
        assert_eq!(list.size(), values.len() - 1);
        assert_eq!(list.to_vec(), expected);
    }
}

#[test]
fn test_remove_range() {
    let mut list = one_to_four();
    assert_eq!(list.remove_range(1, 2).unwrap(), 2);
    assert_eq!(list.to_vec(), vec![1, 4]);
    assert_eq!(list.size(), 2);
}

#[test]
fn test_remove_range_beyond_end_is_tolerated() {
    let mut list = one_to_four();
    assert_eq!(list.remove_range(1, 10).unwrap(), 3);
    assert_eq!(list.to_vec(), vec![1]);
    assert_eq!(list.size(), 1);
}

#[test]
fn test_remove_range_bounds_in_either_order() {
    let mut list = one_to_four();
    assert_eq!(list.remove_range(2, 0).unwrap(), 3);
    assert_eq!(list.to_vec(), vec![4]);

    let mut list = one_to_four();
    assert_eq!(list.remove_range(3, 3).unwrap(), 1);
    assert_eq!(list.to_vec(), vec![1, 2, 3]);
}

#[test]
fn test_remove_range_start_out_of_range() {
    let mut empty: LinkedList<i32> = LinkedList::new();
    assert!(matches!(
        empty.remove_range(0, 5),
        Err(Error::IndexOutOfRange { index: 0, len: 0 })
    ));

    let mut list = one_to_four();
    assert!(list.remove_range(4, 6).is_err());
    assert_eq!(list.size(), 4);
}

#[test]
fn test_append_and_size() {
    let list = one_to_four();
    assert_eq!(list.size(), 4);
    assert_eq!(list.length(), 4);
    assert_eq!(list.len(), 4);
}

#[test]
fn test_append_clear_and_size() {
    let mut list = one_to_four();
    assert_eq!(list.size(), 4);
    list.clear();
    assert_eq!(list.size(), 0);
    list.clear();
    assert_eq!(list.size(), 0);
    assert!(list.is_empty());
}

#[test]
fn test_push_and_pop_front() {
    let mut list = LinkedList::new();
    list.push_front(2);
    list.push_front(1);
    assert_eq!(list.front(), Some(&1));
    if let Some(first) = list.front_mut() {
        *first = 0;
    }
    assert_eq!(list.pop_front(), Some(0));
    assert_eq!(list.pop_front(), Some(2));
    assert_eq!(list.pop_front(), None);
    assert_eq!(list.size(), 0);
}

#[test]
fn test_append_and_iterator() {
    let mut list = one_to_four();
    for element in list.iter_mut() {
        *element += 3;
    }
    assert_eq!(list.to_vec(), vec![4, 5, 6, 7]);

    let iter = list.iter();
    assert_eq!(iter.len(), 4);
    assert_eq!(iter.sum::<i32>(), 22);

    let collected: Vec<i32> = list.into_iter().collect();
    assert_eq!(collected, vec![4, 5, 6, 7]);
}

#[test]
fn test_cursor_walks_to_end() {
    let list = one_to_four();
    let mut seen = Vec::new();
    let mut it = list.begin();
    while it != list.end() {
        seen.push(*it.current().unwrap());
        it.move_next();
    }
    assert_eq!(seen, vec![1, 2, 3, 4]);

    // Advancing past the end stays at the end
    it.move_next();
    assert!(it.is_end());
    assert_eq!(it, list.end());
    assert_eq!(it.current(), None);
}

#[test]
fn test_cursor_equality_is_by_node() {
    // Equal values in different nodes are different positions
    let list = LinkedList::from([7, 7]);
    let first = list.begin();
    let mut second = list.begin();
    second.move_next();
    assert_eq!(first.current(), second.current());
    assert_ne!(first, second);

    let mut again = list.begin();
    again.move_next();
    assert_eq!(second, again);

    let empty: LinkedList<i32> = LinkedList::new();
    assert_eq!(empty.begin(), empty.end());
}

#[test]
fn test_cursor_post_increment() {
    let list = LinkedList::from([1, 2, 3]);
    let mut it = list.begin();
    let before = it.fetch_next();
    assert_eq!(before.current(), Some(&1));
    assert_eq!(it.current(), Some(&2));
    assert_eq!(it.peek_next(), Some(&3));
}

#[test]
fn test_cursor_mut_modifies_elements() {
    let mut list = one_to_four();
    {
        let mut it = list.cursor_mut();
        while !it.is_end() {
            if let Some(element) = it.current_mut() {
                *element *= 10;
            }
            it.move_next();
        }
        it.move_next();
        assert!(it.current().is_none());
    }
    assert_eq!(list.to_vec(), vec![10, 20, 30, 40]);
}

#[test]
fn test_append_and_find() {
    let list = one_to_four();
    assert_eq!(list.find(&3), Some(2));
    assert_eq!(list.find(&1), Some(0));
    assert_eq!(list.find(&5), None);

    let words: LinkedList<String> = ["a", "b", "a"].iter().map(|s| s.to_string()).collect();
    assert_eq!(words.find(&"a".to_string()), Some(0));
    assert_eq!(words.find(&"hey".to_string()), None);
}

#[test]
fn test_find_returns_smallest_matching_index() {
    let mut rng = rand::thread_rng();
    for _ in 0..50 {
        let values: Vec<u8> = (0..rng.gen_range(0..30)).map(|_| rng.gen_range(0..5)).collect();
        let list = LinkedList::from(values.clone());
        for needle in 0..6 {
            assert_eq!(list.find(&needle), values.iter().position(|v| *v == needle));
        }
    }
}

#[test]
fn test_append_map_and_square_brackets() {
    let mut list = one_to_four();
    list.map(|number| number * number);
    assert_eq!(list[1], 4);
    assert_eq!(list[3], 16);

    let offset = 1;
    list.map(|number| number + offset);
    assert_eq!(list.to_vec(), vec![2, 5, 10, 17]);
}

#[test]
fn test_append_filter_and_size() {
    let mut list = one_to_four();
    list.append(5);
    assert_eq!(list.size(), 5);

    let evens = list.filter(|number| number % 2 == 0);
    assert_eq!(evens.size(), 2);
    assert_eq!(evens.to_vec(), vec![2, 4]);

    // The source list is untouched
    assert_eq!(list.to_vec(), vec![1, 2, 3, 4, 5]);
}

#[test]
fn test_append_and_reduce() {
    let mut list = one_to_four();
    list.append(5);
    assert_eq!(list.reduce(|a, b| a + b), 15);
    assert_eq!(list.size(), 5);
}

#[test]
fn test_reduce_nests_from_the_right() {
    // 1 - (2 - (3 - 4)) = -2, where a left fold would give -8
    let list = one_to_four();
    assert_eq!(list.reduce(|a, b| a - b), -2);
    assert_eq!(list.fold_left(0, |acc, n| acc - n), -10);

    let words: LinkedList<String> = ["a", "b", "c"].iter().map(|s| s.to_string()).collect();
    assert_eq!(words.reduce(|a, b| format!("({}{})", a, b)), "(a(bc))");
}

#[test]
fn test_reduce_degenerate_cases() {
    let empty: LinkedList<i32> = LinkedList::new();
    assert_eq!(empty.reduce(|a, b| a + b), 0);

    let single = LinkedList::singleton(42);
    assert_eq!(single.reduce(|_, _| unreachable!()), 42);
}

#[test]
fn test_reverse_is_an_involution() {
    let mut list = one_to_four();
    list.reverse();
    assert_eq!(list.to_vec(), vec![4, 3, 2, 1]);
    assert_eq!(list.size(), 4);
    list.reverse();
    assert_eq!(list.to_vec(), vec![1, 2, 3, 4]);

    let mut empty: LinkedList<i32> = LinkedList::new();
    empty.reverse();
    assert!(empty.is_empty());
}

#[test]
fn test_extend() {
    let mut list = one_to_four();
    let other = LinkedList::from([5, 6]);
    list.extend_from_list(&other);
    assert_eq!(list.to_vec(), vec![1, 2, 3, 4, 5, 6]);
    assert_eq!(other.to_vec(), vec![5, 6]);

    list.extend_from_slice(&[7]);
    list.extend(vec![8, 9]);
    list.extend(&[10]);
    assert_eq!(list.size(), 10);
    assert_eq!(list[9], 10);

    let mut empty = LinkedList::new();
    empty.extend_from_list(&other);
    assert_eq!(empty, other);
}

#[test]
fn test_print_and_display() {
    let list = one_to_four();
    let mut out = Vec::new();
    list.print(&mut out).unwrap();
    assert_eq!(String::from_utf8(out).unwrap(), "1, 2, 3, 4");
    assert_eq!(list.to_string(), "1, 2, 3, 4");
    assert_eq!(format!("{:?}", list), "[1, 2, 3, 4]");

    assert_eq!(LinkedList::singleton("a").to_string(), "a");
    assert_eq!(LinkedList::<i32>::new().to_string(), "");
}

#[test]
fn test_long_list_does_not_overflow_the_stack() {
    let mut list: LinkedList<u32> = (0..1_000_000).collect();
    assert_eq!(list.size(), 1_000_000);

    let copy = list.clone();
    assert_eq!(copy, list);

    list.reverse();
    assert_eq!(list.front(), Some(&999_999));
    assert_eq!(list.find(&0), Some(999_999));

    drop(copy);
    list.clear();
    assert!(list.is_empty());

    let dropped: LinkedList<u32> = (0..1_000_000).collect();
    drop(dropped);
}

#[test]
fn test_serde_round_trip() {
    let list = one_to_four();
    let json = serde_json::to_string(&list).unwrap();
    assert_eq!(json, "[1,2,3,4]");

    let back: LinkedList<i32> = serde_json::from_str(&json).unwrap();
    assert_eq!(back, list);
    assert_eq!(back.size(), 4);
}

#[test]
fn test_error_message() {
    let mut list = one_to_four();
    let err = list.remove(7).unwrap_err();
    assert_eq!(err.to_string(), "index 7 out of range for list of length 4");
}

#[test]
fn test_mutation_after_cursors_are_done() {
    let mut list = LinkedList::from([1, 2, 3]);
    let mut cursor = list.begin();
    cursor.move_next();
    assert_eq!(cursor.current(), Some(&2));

    // The cursor is no longer used, so the list may change again
    list.clear();
    assert!(list.begin().is_end());

    list.extend([4, 5]);
    let seen: Vec<i32> = list.iter().copied().collect();
    list.push_front(3);
    assert_eq!(seen, vec![4, 5]);
    assert_eq!(list.to_vec(), vec![3, 4, 5]);
}
