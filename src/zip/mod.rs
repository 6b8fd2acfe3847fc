//! Positional combination of two sequences.
//!
//! - [`zip_with_optional`]: Combine pairs, keeping only the present results
//! - [`zip_with`]: Combine pairs, keeping every result
//! - [`map_with_index`]: Combine each element with its zero-based position
//!
//! Pairing always stops at the shorter input. Surplus elements of the longer
//! input are ignored and never reach the combining function.
//!
//! # Examples
//!
//! ```rust
//! use seqcomb::zip::{map_with_index, zip_with};
//!
//! let sums = zip_with(vec![1, 2, 3], vec![10, 20], |left, right| left + right);
//! assert_eq!(sums, vec![11, 22]);
//!
//! let labelled = map_with_index(vec!["x", "y", "z"], |element, index| (index, element));
//! assert_eq!(labelled, vec![(0, "x"), (1, "y"), (2, "z")]);
//! ```

/// Pairs the elements of two sequences positionally and keeps the present
/// results of `function`.
///
/// At most `min(|left|, |right|)` pairs are formed and `function` is called
/// once per pair, in order.
///
/// # Type Parameters
///
/// * `L` - The left sequence
/// * `R` - The right sequence
/// * `B` - The type of the kept results
/// * `F` - The combining function
///
/// # Arguments
///
/// * `left` - Supplies the first argument of every pair
/// * `right` - Supplies the second argument of every pair
/// * `function` - Combines a pair, returning `None` to drop it
///
/// # Returns
///
/// The `Some` results of `function`, in pair order.
///
/// # Examples
///
/// ```
/// use seqcomb::zip::zip_with_optional;
///
/// let quotients = zip_with_optional(vec![10, 9, 8], vec![2, 0, 4, 1], |dividend, divisor| {
///     if divisor == 0 { None } else { Some(dividend / divisor) }
/// });
/// assert_eq!(quotients, vec![5, 2]);
/// ```
pub fn zip_with_optional<L, R, B, F>(left: L, right: R, mut function: F) -> Vec<B>
where
    L: IntoIterator,
    R: IntoIterator,
    F: FnMut(L::Item, R::Item) -> Option<B>,
{
    left.into_iter()
        .zip(right)
        .filter_map(|(left_element, right_element)| function(left_element, right_element))
        .collect()
}

/// Pairs the elements of two sequences positionally and keeps every result
/// of `function`.
///
/// This is [`zip_with_optional`] with each result wrapped in `Some`.
///
/// # Examples
///
/// ```
/// use seqcomb::zip::zip_with;
///
/// let names = vec!["ada", "grace"];
/// let ages = vec![36, 85, 99];
/// let people = zip_with(&names, &ages, |name, age| format!("{name}:{age}"));
/// assert_eq!(people, vec!["ada:36", "grace:85"]);
/// ```
pub fn zip_with<L, R, B, F>(left: L, right: R, mut function: F) -> Vec<B>
where
    L: IntoIterator,
    R: IntoIterator,
    F: FnMut(L::Item, R::Item) -> B,
{
    zip_with_optional(left, right, |left_element, right_element| {
        Some(function(left_element, right_element))
    })
}

/// Applies `function` to every element together with its zero-based index.
///
/// The indices never run short, so the result has exactly one entry per
/// element.
///
/// # Examples
///
/// ```
/// use seqcomb::zip::map_with_index;
///
/// let scaled = map_with_index(vec![5, 5, 5], |element, index| element * index);
/// assert_eq!(scaled, vec![0, 5, 10]);
/// ```
pub fn map_with_index<I, B, F>(sequence: I, function: F) -> Vec<B>
where
    I: IntoIterator,
    F: FnMut(I::Item, usize) -> B,
{
    zip_with(sequence, 0_usize.., function)
}
