//! Safe retrieval of the ends of a sequence.
//!
//! - [`head_option`]: The first element, if any
//! - [`last_option`]: The last element, if any
//!
//! Both functions are total: an empty sequence yields `None` rather than
//! panicking the way indexing would.
//!
//! # Examples
//!
//! ```rust
//! use seqcomb::access::{head_option, last_option};
//!
//! let values = vec![1, 2, 3];
//! assert_eq!(head_option(&values), Some(&1));
//! assert_eq!(last_option(&values), Some(&3));
//!
//! let empty: Vec<i32> = Vec::new();
//! assert_eq!(head_option(empty), None);
//! ```

/// Returns the first element of the sequence, or `None` if it is empty.
///
/// # Examples
///
/// ```
/// use seqcomb::access::head_option;
///
/// assert_eq!(head_option(vec!["a", "b"]), Some("a"));
/// assert_eq!(head_option(Vec::<&str>::new()), None);
/// ```
#[inline]
pub fn head_option<I>(sequence: I) -> Option<I::Item>
where
    I: IntoIterator,
{
    sequence.into_iter().next()
}

/// Returns the last element of the sequence, or `None` if it is empty.
///
/// Constant time for slices and vectors, linear for general iterators.
///
/// # Examples
///
/// ```
/// use seqcomb::access::last_option;
///
/// assert_eq!(last_option(&[1, 2, 3]), Some(&3));
/// assert_eq!(last_option(0..0), None);
/// ```
#[inline]
pub fn last_option<I>(sequence: I) -> Option<I::Item>
where
    I: IntoIterator,
{
    sequence.into_iter().last()
}
