//! All-or-nothing traversal.
//!
//! [`traverse`] turns "apply a fallible function to every element" into a
//! single optional result: either every element maps, or the whole
//! operation yields `None`. Processing stops at the first failure.

use std::convert::identity;

/// Applies `function` to every element and collects the results if all of
/// them are present.
///
/// Returns `None` as soon as `function` yields `None`; later elements are
/// not visited. An empty sequence traverses to `Some(vec![])`.
///
/// # Arguments
///
/// * `sequence` - The elements to map
/// * `function` - A function that transforms each element to an `Option<B>`
///
/// # Returns
///
/// `Some` if all elements succeed, `None` otherwise.
///
/// # Examples
///
/// ```
/// use seqcomb::filter_map::traverse;
///
/// let parse = |text: &str| text.parse::<u8>().ok();
/// assert_eq!(traverse(vec!["1", "2", "3"], parse), Some(vec![1, 2, 3]));
/// assert_eq!(traverse(vec!["1", "256", "3"], parse), None);
/// ```
pub fn traverse<I, B, F>(sequence: I, function: F) -> Option<Vec<B>>
where
    I: IntoIterator,
    F: FnMut(I::Item) -> Option<B>,
{
    sequence.into_iter().map(function).collect()
}

/// Turns a sequence of options inside out.
///
/// `Some` of all values if no element is `None`, otherwise `None`.
///
/// # Examples
///
/// ```
/// use seqcomb::filter_map::sequence;
///
/// assert_eq!(sequence(vec![Some(1), Some(2)]), Some(vec![1, 2]));
/// assert_eq!(sequence(vec![Some(1), None]), None);
/// ```
pub fn sequence<I, T>(sequence: I) -> Option<Vec<T>>
where
    I: IntoIterator<Item = Option<T>>,
{
    traverse(sequence, identity)
}

/// Applies `function` to every element and collects the results if all of
/// them are `Ok`, otherwise returns the first `Err`.
///
/// # Examples
///
/// ```
/// use seqcomb::filter_map::traverse_result;
///
/// fn parse_positive(text: &str) -> Result<i32, String> {
///     match text.parse::<i32>() {
///         Ok(number) if number > 0 => Ok(number),
///         Ok(number) => Err(format!("{number} is not positive")),
///         Err(error) => Err(error.to_string()),
///     }
/// }
///
/// assert_eq!(traverse_result(vec!["4", "2"], parse_positive), Ok(vec![4, 2]));
/// assert_eq!(
///     traverse_result(vec!["4", "-1", "0"], parse_positive),
///     Err(String::from("-1 is not positive"))
/// );
/// ```
///
/// # Errors
///
/// Returns the first error produced by `function`.
pub fn traverse_result<I, B, E, F>(sequence: I, function: F) -> Result<Vec<B>, E>
where
    I: IntoIterator,
    F: FnMut(I::Item) -> Result<B, E>,
{
    sequence.into_iter().map(function).collect()
}

/// Turns a sequence of results inside out.
///
/// # Examples
///
/// ```
/// use seqcomb::filter_map::sequence_result;
///
/// let all_ok: Vec<Result<i32, &str>> = vec![Ok(1), Ok(2)];
/// assert_eq!(sequence_result(all_ok), Ok(vec![1, 2]));
///
/// let with_error: Vec<Result<i32, &str>> = vec![Ok(1), Err("first"), Err("second")];
/// assert_eq!(sequence_result(with_error), Err("first"));
/// ```
///
/// # Errors
///
/// Returns the first `Err` element.
pub fn sequence_result<I, T, E>(sequence: I) -> Result<Vec<T>, E>
where
    I: IntoIterator<Item = Result<T, E>>,
{
    traverse_result(sequence, identity)
}
