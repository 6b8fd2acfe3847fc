//! Grouping and reshaping of sequences.
//!
//! - [`group_by`]: Split into runs of consecutive elements related to the
//!   first element of their run
//! - [`group`]: Split into runs of consecutive equal elements
//! - [`flatten`]: Concatenate a sequence of sequences
//! - [`to_list_of_list`]: Wrap every element in its own singleton
//! - [`range`]: The integers of a half-open interval
//!
//! # Laws
//!
//! - **Partition**: `flatten(group_by(xs, p)) == xs` for every `xs` and `p`
//! - **Non-empty runs**: every run produced by [`group_by`] has at least
//!   one element
//! - **Singletons**: `flatten(to_list_of_list(xs)) == xs`
//!
//! # Examples
//!
//! ```rust
//! use seqcomb::shape::{flatten, group, range, to_list_of_list};
//!
//! let runs = group(vec![1, 1, 2, 2, 2, 3]);
//! assert_eq!(runs, vec![vec![1, 1], vec![2, 2, 2], vec![3]]);
//! assert_eq!(flatten(runs), vec![1, 1, 2, 2, 2, 3]);
//!
//! assert_eq!(to_list_of_list(vec![1, 2]), vec![vec![1], vec![2]]);
//! assert_eq!(range(0, 3), vec![0, 1, 2]);
//! assert!(range(3, 3).is_empty());
//! ```

mod group;
mod layout;

pub use group::{group, group_by};
pub use layout::{flatten, range, to_list_of_list};
