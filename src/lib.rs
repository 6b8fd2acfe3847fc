//! # seqcomb
//!
//! Sequence combinators for Rust: optional-aware mapping, folds and scans
//! with early termination, grouping, zipping, and traversal between
//! "collection of optionals" and "optional collection".
//!
//! ## Overview
//!
//! Every function is a small, pure transformation. Inputs are taken as
//! [`IntoIterator`], so owned vectors, borrowed slices and iterator adapters
//! all work; outputs are freshly allocated `Vec`s or `Option`s.
//!
//! - **Optional Access**: `head_option`, `last_option`
//! - **Optional-Filtering Map**: `map_optional`, `take_while_optional`,
//!   `traverse`, `sequence`, ...
//! - **Fold/Scan Family**: `scan_left_while`, `reduce_while` and their
//!   unseeded `*_from_first` forms
//! - **Zip Family**: `zip_with_optional`, `zip_with`, `map_with_index`
//! - **Grouping & Shape**: `group_by`, `group`, `flatten`,
//!   `to_list_of_list`, `range`
//!
//! ## Feature Flags
//!
//! - `access`: Optional Access
//! - `filter_map`: Optional-Filtering Map (enables `zip`)
//! - `fold`: Fold/Scan Family
//! - `zip`: Zip Family
//! - `shape`: Grouping & Shape
//! - `full`: Enable all features (the same set as `default`)
//!
//! ## Example
//!
//! ```rust
//! use seqcomb::prelude::*;
//!
//! let words = vec!["1", "2", "x", "4"];
//!
//! assert_eq!(map_optional(&words, |word| word.parse::<i32>().ok()), vec![1, 2, 4]);
//! assert_eq!(take_while_optional(&words, |word| word.parse::<i32>().ok()), vec![1, 2]);
//! assert_eq!(traverse(&words, |word| word.parse::<i32>().ok()), None);
//!
//! let running = scan_left_while(vec![1, 2, 3, 4], 0, |element, total| total + element, |total| *total < 5);
//! assert_eq!(running, vec![0, 1, 3, 6]);
//!
//! assert_eq!(group(vec![1, 1, 2, 2, 2, 3]), vec![vec![1, 1], vec![2, 2, 2], vec![3]]);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports every combinator of the enabled modules.
///
/// # Usage
///
/// ```rust
/// use seqcomb::prelude::*;
/// ```
pub mod prelude {

    #[cfg(feature = "access")]
    pub use crate::access::*;

    #[cfg(feature = "filter_map")]
    pub use crate::filter_map::*;

    #[cfg(feature = "fold")]
    pub use crate::fold::*;

    #[cfg(feature = "zip")]
    pub use crate::zip::*;

    #[cfg(feature = "shape")]
    pub use crate::shape::*;
}

#[cfg(feature = "access")]
pub mod access;

#[cfg(feature = "filter_map")]
pub mod filter_map;

#[cfg(feature = "fold")]
pub mod fold;

#[cfg(feature = "zip")]
pub mod zip;

#[cfg(feature = "shape")]
pub mod shape;
