//! Filtering and short-circuiting maps.

use std::convert::identity;

use crate::zip::zip_with_optional;

/// Applies `function` to every element and keeps the present results.
///
/// Absent results are dropped and mapping continues with the next element,
/// so the output is never longer than the input.
///
/// # Examples
///
/// ```
/// use seqcomb::filter_map::map_optional;
///
/// let parsed = map_optional(vec!["1", "two", "3"], |text| text.parse::<i32>().ok());
/// assert_eq!(parsed, vec![1, 3]);
/// ```
pub fn map_optional<I, B, F>(sequence: I, function: F) -> Vec<B>
where
    I: IntoIterator,
    F: FnMut(I::Item) -> Option<B>,
{
    sequence.into_iter().filter_map(function).collect()
}

/// Same result as [`map_optional`], computed by zipping the sequence with
/// itself and ignoring the second element of every pair.
///
/// The iterator of `sequence` must be [`Clone`]. For a borrowed input such
/// as `&xs` that clone only copies a slice iterator, and the elements need
/// not be `Clone`. For an owned `Vec<T>` the clone copies every element,
/// and the copies are then discarded; pass `&xs` instead when `T` is
/// expensive to clone.
///
/// # Examples
///
/// ```
/// use seqcomb::filter_map::{map_optional, map_optional2};
///
/// let values = vec![1, -2, 3];
/// let positive = |value: &i32| (*value > 0).then_some(*value);
/// assert_eq!(map_optional2(&values, positive), map_optional(&values, positive));
/// ```
pub fn map_optional2<I, B, F>(sequence: I, mut function: F) -> Vec<B>
where
    I: IntoIterator,
    I::IntoIter: Clone,
    F: FnMut(I::Item) -> Option<B>,
{
    let elements = sequence.into_iter();
    zip_with_optional(elements.clone(), elements, |element, _| function(element))
}

/// Keeps the present values of a sequence of options, in order.
///
/// # Examples
///
/// ```
/// use seqcomb::filter_map::cat_optional;
///
/// assert_eq!(cat_optional(vec![None, Some('a'), None, Some('b')]), vec!['a', 'b']);
/// ```
pub fn cat_optional<I, T>(sequence: I) -> Vec<T>
where
    I: IntoIterator<Item = Option<T>>,
{
    map_optional(sequence, identity)
}

/// Applies `function` in order and stops at the first absent result.
///
/// Returns the present results collected before that point. Elements after
/// the first absence are never passed to `function`.
///
/// # Examples
///
/// ```
/// use seqcomb::filter_map::take_while_optional;
///
/// let digits = take_while_optional("12a3".chars(), |character| character.to_digit(10));
/// assert_eq!(digits, vec![1, 2]);
/// ```
pub fn take_while_optional<I, B, F>(sequence: I, function: F) -> Vec<B>
where
    I: IntoIterator,
    F: FnMut(I::Item) -> Option<B>,
{
    sequence.into_iter().map_while(function).collect()
}
