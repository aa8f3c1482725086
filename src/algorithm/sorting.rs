//! Classic in-memory sorting routines
//!
//! Every algorithm comes in two forms: a plain one for `T: PartialOrd`, and a
//! `_by` form taking an `is_greater(a, b)` predicate that returns true when
//! `a` must come after `b`. Slices of length 0 or 1 are left untouched.

use log::trace;
use rand::Rng;

/// Selects one of the sorting algorithms at runtime
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortAlgorithm {
    Bubble,
    Selection,
    Insertion,
    Shell,
    Quick,
    Merge,
    Heap,
}

impl SortAlgorithm {
    /// Every algorithm, in menu order
    pub const ALL: [SortAlgorithm; 7] = [
        SortAlgorithm::Bubble,
        SortAlgorithm::Selection,
        SortAlgorithm::Insertion,
        SortAlgorithm::Shell,
        SortAlgorithm::Quick,
        SortAlgorithm::Merge,
        SortAlgorithm::Heap,
    ];

    /// Get the name of the algorithm
    pub fn name(&self) -> &'static str {
        match self {
            SortAlgorithm::Bubble => "Bubble sort",
            SortAlgorithm::Selection => "Selection sort",
            SortAlgorithm::Insertion => "Insertion sort",
            SortAlgorithm::Shell => "Shell sort",
            SortAlgorithm::Quick => "Quicksort",
            SortAlgorithm::Merge => "Merge sort",
            SortAlgorithm::Heap => "Heap sort",
        }
    }

    /// Maps a 1-based menu choice to an algorithm
    pub fn from_choice(choice: u32) -> Option<Self> {
        let index = usize::try_from(choice).ok()?.checked_sub(1)?;
        Self::ALL.get(index).copied()
    }

    /// Sorts `slice` in ascending order
    pub fn sort<T: PartialOrd + Clone>(&self, slice: &mut [T]) {
        self.sort_by(slice, |a, b| a > b);
    }

    /// Sorts `slice` so that no element is greater than its successor
    pub fn sort_by<T, F>(&self, slice: &mut [T], is_greater: F)
    where
        T: Clone,
        F: FnMut(&T, &T) -> bool,
    {
        trace!("{} on {} elements", self.name(), slice.len());
        match self {
            SortAlgorithm::Bubble => bubble_sort_by(slice, is_greater),
            SortAlgorithm::Selection => selection_sort_by(slice, is_greater),
            SortAlgorithm::Insertion => insertion_sort_by(slice, is_greater),
            SortAlgorithm::Shell => shell_sort_by(slice, is_greater),
            SortAlgorithm::Quick => quicksort_by(slice, is_greater),
            SortAlgorithm::Merge => merge_sort_by(slice, is_greater),
            SortAlgorithm::Heap => heap_sort_by(slice, is_greater),
        }
    }
}

/// Checks that no element is greater than its successor
pub fn is_sorted_by<T, F>(slice: &[T], mut is_greater: F) -> bool
where
    F: FnMut(&T, &T) -> bool,
{
    slice.windows(2).all(|pair| !is_greater(&pair[0], &pair[1]))
}

/// Checks that `slice` is in ascending order
pub fn is_sorted<T: PartialOrd>(slice: &[T]) -> bool {
    is_sorted_by(slice, |a, b| a > b)
}

/// Fills `values` with random numbers in `1..=max`
pub fn randomize<R: Rng + ?Sized>(values: &mut [i64], max: i64, rng: &mut R) {
    let max = max.max(1);
    for value in values.iter_mut() {
        *value = rng.gen_range(1..=max);
    }
}

/// Creates a vector of `len` random numbers in `1..=max`
pub fn random_array<R: Rng + ?Sized>(len: usize, max: i64, rng: &mut R) -> Vec<i64> {
    let mut values = vec![0; len];
    randomize(&mut values, max, rng);
    values
}

pub fn bubble_sort<T: PartialOrd>(slice: &mut [T]) {
    bubble_sort_by(slice, |a, b| a > b);
}

/// Repeatedly swaps adjacent out-of-order pairs until a pass swaps nothing
pub fn bubble_sort_by<T, F>(slice: &mut [T], mut is_greater: F)
where
    F: FnMut(&T, &T) -> bool,
{
    let mut end = slice.len();
    let mut swapped = true;
    while swapped && end > 1 {
        swapped = false;
        for i in 0..end - 1 {
            if is_greater(&slice[i], &slice[i + 1]) {
                slice.swap(i, i + 1);
                swapped = true;
            }
        }
        // The largest remaining element has bubbled into place
        end -= 1;
    }
}

pub fn selection_sort<T: PartialOrd>(slice: &mut [T]) {
    selection_sort_by(slice, |a, b| a > b);
}

/// Moves the smallest remaining element to the front of the unsorted part
pub fn selection_sort_by<T, F>(slice: &mut [T], mut is_greater: F)
where
    F: FnMut(&T, &T) -> bool,
{
    let len = slice.len();
    for i in 0..len.saturating_sub(1) {
        let mut low = i;
        for j in i + 1..len {
            if is_greater(&slice[low], &slice[j]) {
                low = j;
            }
        }
        slice.swap(low, i);
    }
}

pub fn insertion_sort<T: PartialOrd>(slice: &mut [T]) {
    insertion_sort_by(slice, |a, b| a > b);
}

/// Grows a sorted prefix by sinking each new element into place
pub fn insertion_sort_by<T, F>(slice: &mut [T], mut is_greater: F)
where
    F: FnMut(&T, &T) -> bool,
{
    for i in 1..slice.len() {
        let mut j = i;
        while j > 0 && is_greater(&slice[j - 1], &slice[j]) {
            slice.swap(j - 1, j);
            j -= 1;
        }
    }
}

pub fn shell_sort<T: PartialOrd>(slice: &mut [T]) {
    shell_sort_by(slice, |a, b| a > b);
}

/// Insertion sort over shrinking gaps, halving from `len / 2` down to 1
pub fn shell_sort_by<T, F>(slice: &mut [T], mut is_greater: F)
where
    F: FnMut(&T, &T) -> bool,
{
    let len = slice.len();
    let mut gap = len / 2;
    while gap > 0 {
        for i in gap..len {
            let mut j = i;
            while j >= gap && is_greater(&slice[j - gap], &slice[j]) {
                slice.swap(j - gap, j);
                j -= gap;
            }
        }
        gap /= 2;
    }
}

pub fn quicksort<T: PartialOrd>(slice: &mut [T]) {
    quicksort_by(slice, |a, b| a > b);
}

/// Partitions around the middle element and sorts both sides
///
/// Recursion only descends into the smaller side, so the stack depth stays
/// logarithmic even on adversarial input.
pub fn quicksort_by<T, F>(slice: &mut [T], mut is_greater: F)
where
    F: FnMut(&T, &T) -> bool,
{
    quicksort_range(slice, &mut is_greater);
}

fn quicksort_range<T, F>(mut slice: &mut [T], is_greater: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    while slice.len() > 1 {
        let pivot = partition(slice, is_greater);
        let (left, right) = std::mem::take(&mut slice).split_at_mut(pivot);
        let right = &mut right[1..];
        if left.len() < right.len() {
            quicksort_range(left, is_greater);
            slice = right;
        } else {
            quicksort_range(right, is_greater);
            slice = left;
        }
    }
}

/// Moves the middle element to its final position and returns that position
fn partition<T, F>(slice: &mut [T], is_greater: &mut F) -> usize
where
    F: FnMut(&T, &T) -> bool,
{
    let last = slice.len() - 1;
    slice.swap(slice.len() / 2, last);

    let mut store = 0;
    for i in 0..last {
        if is_greater(&slice[last], &slice[i]) {
            slice.swap(i, store);
            store += 1;
        }
    }
    slice.swap(store, last);
    store
}

pub fn merge_sort<T: PartialOrd + Clone>(slice: &mut [T]) {
    merge_sort_by(slice, |a, b| a > b);
}

/// Top-down stable merge sort using one scratch buffer of the same length
pub fn merge_sort_by<T, F>(slice: &mut [T], mut is_greater: F)
where
    T: Clone,
    F: FnMut(&T, &T) -> bool,
{
    if slice.len() < 2 {
        return;
    }
    let mut scratch = slice.to_vec();
    merge_sort_range(slice, &mut scratch, &mut is_greater);
}

fn merge_sort_range<T, F>(slice: &mut [T], scratch: &mut [T], is_greater: &mut F)
where
    T: Clone,
    F: FnMut(&T, &T) -> bool,
{
    let len = slice.len();
    if len < 2 {
        return;
    }
    let mid = len / 2;
    {
        let (left, right) = slice.split_at_mut(mid);
        let (scratch_left, scratch_right) = scratch.split_at_mut(mid);
        merge_sort_range(left, scratch_left, is_greater);
        merge_sort_range(right, scratch_right, is_greater);
    }
    merge(slice, mid, scratch, is_greater);
}

/// Merges the sorted halves `slice[..mid]` and `slice[mid..]`
fn merge<T, F>(slice: &mut [T], mid: usize, scratch: &mut [T], is_greater: &mut F)
where
    T: Clone,
    F: FnMut(&T, &T) -> bool,
{
    let scratch = &mut scratch[..slice.len()];
    scratch.clone_from_slice(slice);
    let (left, right) = scratch.split_at(mid);

    let (mut l, mut r) = (0, 0);
    for slot in slice.iter_mut() {
        // Ties take from the left half, which keeps the sort stable
        let take_left = r >= right.len() || (l < left.len() && !is_greater(&left[l], &right[r]));
        if take_left {
            slot.clone_from(&left[l]);
            l += 1;
        } else {
            slot.clone_from(&right[r]);
            r += 1;
        }
    }
}

pub fn heap_sort<T: PartialOrd>(slice: &mut [T]) {
    heap_sort_by(slice, |a, b| a > b);
}

/// Builds a max heap, then repeatedly swaps its root behind the heap
pub fn heap_sort_by<T, F>(slice: &mut [T], mut is_greater: F)
where
    F: FnMut(&T, &T) -> bool,
{
    let len = slice.len();
    if len < 2 {
        return;
    }

    for root in (0..len / 2).rev() {
        sift_down(slice, root, len, &mut is_greater);
    }

    for end in (1..len).rev() {
        slice.swap(0, end);
        sift_down(slice, 0, end, &mut is_greater);
    }
}

/// Restores the max-heap property below `root` within `slice[..end]`
fn sift_down<T, F>(slice: &mut [T], mut root: usize, end: usize, is_greater: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    loop {
        let mut child = 2 * root + 1;
        if child >= end {
            break;
        }
        if child + 1 < end && is_greater(&slice[child + 1], &slice[child]) {
            child += 1;
        }
        if !is_greater(&slice[child], &slice[root]) {
            break;
        }
        slice.swap(root, child);
        root = child;
    }
}
