//! Flattening, wrapping and integer ranges.

use std::ops::Range;

/// Concatenates a sequence of sequences, outer order first, then inner
/// order.
///
/// # Examples
///
/// ```
/// use seqcomb::shape::flatten;
///
/// assert_eq!(flatten(vec![vec![1, 2], vec![], vec![3]]), vec![1, 2, 3]);
/// ```
pub fn flatten<I>(sequences: I) -> Vec<<I::Item as IntoIterator>::Item>
where
    I: IntoIterator,
    I::Item: IntoIterator,
{
    sequences.into_iter().flatten().collect()
}

/// Wraps every element in its own singleton vector.
///
/// # Examples
///
/// ```
/// use seqcomb::shape::to_list_of_list;
///
/// assert_eq!(to_list_of_list(vec!["a", "b"]), vec![vec!["a"], vec!["b"]]);
/// ```
pub fn to_list_of_list<I>(sequence: I) -> Vec<Vec<I::Item>>
where
    I: IntoIterator,
{
    sequence.into_iter().map(|element| vec![element]).collect()
}

/// Returns the integers from `start` (inclusive) to `end` (exclusive).
///
/// Empty when `start >= end`. Works for every integer type.
///
/// # Examples
///
/// ```
/// use seqcomb::shape::range;
///
/// assert_eq!(range(-2_i64, 1), vec![-2, -1, 0]);
/// assert!(range(5_u8, 2).is_empty());
/// ```
pub fn range<T>(start: T, end: T) -> Vec<T>
where
    Range<T>: Iterator<Item = T>,
{
    (start..end).collect()
}
