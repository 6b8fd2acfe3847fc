//! Mapping with functions that may produce no value.
//!
//! The functions in this module differ in what they do when the mapping
//! function returns `None`:
//!
//! | Function                  | On `None`                        | Result            |
//! |---------------------------|----------------------------------|-------------------|
//! | [`map_optional`]          | drop the element, continue       | `Vec<B>`          |
//! | [`take_while_optional`]   | stop, keep the prefix            | `Vec<B>`          |
//! | [`traverse`]              | stop, discard everything         | `Option<Vec<B>>`  |
//!
//! [`cat_optional`] and [`sequence`] are the identity-function forms of
//! [`map_optional`] and [`traverse`]. [`traverse_result`] and
//! [`sequence_result`] carry the first error instead of `None`.
//!
//! # Examples
//!
//! ```rust
//! use seqcomb::filter_map::{cat_optional, map_optional, sequence, take_while_optional, traverse};
//!
//! let halve = |number: &i32| (number % 2 == 0).then(|| number / 2);
//! let numbers = vec![2, 4, 5, 6];
//!
//! assert_eq!(map_optional(&numbers, halve), vec![1, 2, 3]);
//! assert_eq!(take_while_optional(&numbers, halve), vec![1, 2]);
//! assert_eq!(traverse(&numbers, halve), None);
//! assert_eq!(traverse(&numbers[..2], halve), Some(vec![1, 2]));
//!
//! assert_eq!(cat_optional(vec![Some(1), None, Some(3)]), vec![1, 3]);
//! assert_eq!(sequence(vec![Some(1), Some(2)]), Some(vec![1, 2]));
//! assert_eq!(sequence(vec![Some(1), None]), None);
//! ```

mod map_optional;
mod traverse;

pub use map_optional::{cat_optional, map_optional, map_optional2, take_while_optional};
pub use traverse::{sequence, sequence_result, traverse, traverse_result};
