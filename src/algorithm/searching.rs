//! Linear and binary search over slices, and search in a sorted matrix

/// Selects one of the searching algorithms at runtime
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SearchAlgorithm {
    Linear,
    /// Requires the slice to be sorted
    Binary,
}

impl SearchAlgorithm {
    /// Every algorithm, in menu order
    pub const ALL: [SearchAlgorithm; 2] = [SearchAlgorithm::Linear, SearchAlgorithm::Binary];

    /// Get the name of the algorithm
    pub fn name(&self) -> &'static str {
        match self {
            SearchAlgorithm::Linear => "Linear search",
            SearchAlgorithm::Binary => "Binary search",
        }
    }

    /// Maps a 1-based menu choice to an algorithm
    pub fn from_choice(choice: u32) -> Option<Self> {
        match choice {
            1 => Some(SearchAlgorithm::Linear),
            2 => Some(SearchAlgorithm::Binary),
            _ => None,
        }
    }

    /// Returns a position holding `value`, or `None`
    pub fn search<T: PartialOrd>(&self, slice: &[T], value: &T) -> Option<usize> {
        self.search_by(slice, value, |a, b| a > b, |a, b| a == b)
    }

    /// Returns a position holding `value` under the given predicates
    pub fn search_by<T, G, E>(
        &self,
        slice: &[T],
        value: &T,
        is_greater: G,
        are_equal: E,
    ) -> Option<usize>
    where
        G: FnMut(&T, &T) -> bool,
        E: FnMut(&T, &T) -> bool,
    {
        match self {
            SearchAlgorithm::Linear => linear_search_by(slice, value, are_equal),
            SearchAlgorithm::Binary => binary_search_by(slice, value, is_greater, are_equal),
        }
    }
}

/// Returns the first position holding `value`
pub fn linear_search<T: PartialEq>(slice: &[T], value: &T) -> Option<usize> {
    linear_search_by(slice, value, |a, b| a == b)
}

/// Returns the first position whose element `are_equal` to `value`
pub fn linear_search_by<T, E>(slice: &[T], value: &T, mut are_equal: E) -> Option<usize>
where
    E: FnMut(&T, &T) -> bool,
{
    slice.iter().position(|element| are_equal(element, value))
}

/// Returns a position holding `value` in an ascending slice
pub fn binary_search<T: PartialOrd>(slice: &[T], value: &T) -> Option<usize> {
    binary_search_by(slice, value, |a, b| a > b, |a, b| a == b)
}

/// Halves the candidate range `[first, end)` until `value` is found or the
/// range is empty
///
/// `slice` must be sorted so that no element `is_greater` than its
/// successor. With duplicates, any matching position may be returned.
pub fn binary_search_by<T, G, E>(
    slice: &[T],
    value: &T,
    mut is_greater: G,
    mut are_equal: E,
) -> Option<usize>
where
    G: FnMut(&T, &T) -> bool,
    E: FnMut(&T, &T) -> bool,
{
    let mut first = 0;
    let mut end = slice.len();
    while first < end {
        // Same as (first + end) / 2, without the overflow
        let mid = first + (end - first) / 2;
        let candidate = &slice[mid];
        if are_equal(candidate, value) {
            return Some(mid);
        }
        if is_greater(candidate, value) {
            end = mid;
        } else {
            first = mid + 1;
        }
    }
    None
}

/// Returns the `(row, column)` of a cell holding `value` in a sorted matrix
pub fn search_2d<T: PartialOrd>(matrix: &[Vec<T>], value: &T) -> Option<(usize, usize)> {
    search_2d_by(matrix, value, |a, b| a > b, |a, b| a == b)
}

/// Divide and conquer search in a matrix whose rows and columns are both
/// sorted so that no element `is_greater` than its right or lower neighbor
///
/// Comparing against the middle cell of a region rules out one quadrant;
/// the two remaining parts are searched in turn. Rows longer than the
/// shortest row are only searched up to its length. With duplicates, any
/// matching cell may be returned.
pub fn search_2d_by<T, G, E>(
    matrix: &[Vec<T>],
    value: &T,
    mut is_greater: G,
    mut are_equal: E,
) -> Option<(usize, usize)>
where
    G: FnMut(&T, &T) -> bool,
    E: FnMut(&T, &T) -> bool,
{
    let cols = matrix.iter().map(Vec::len).min().unwrap_or(0);

    // Regions are half-open: rows [top, bottom), columns [left, right)
    let mut regions = vec![(0, matrix.len(), 0, cols)];
    while let Some((top, bottom, left, right)) = regions.pop() {
        if top >= bottom || left >= right {
            continue;
        }
        let mid_row = top + (bottom - top) / 2;
        let mid_col = left + (right - left) / 2;
        let candidate = &matrix[mid_row][mid_col];
        if are_equal(candidate, value) {
            return Some((mid_row, mid_col));
        }

        // Pushed in reverse so the first region is searched first
        if is_greater(candidate, value) {
            // Everything right of and below the middle cell is too large
            regions.push((mid_row, bottom, left, mid_col));
            regions.push((top, mid_row, left, right));
        } else {
            // Everything left of and above the middle cell is too small
            regions.push((top, mid_row + 1, mid_col + 1, right));
            regions.push((mid_row + 1, bottom, left, right));
        }
    }
    None
}
