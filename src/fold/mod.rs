//! Left-to-right accumulation with early termination.
//!
//! The scans return every intermediate accumulator; the reductions return
//! only the last one. Each comes in two forms:
//!
//! - **Seeded** ([`scan_left_while`], [`reduce_while`], ...): the caller
//!   supplies the initial accumulator, which is always the first output.
//! - **From first** ([`scan_left_while_from_first`],
//!   [`reduce_while_from_first`], ...): the first element is the initial
//!   accumulator and the fold runs over the rest. An empty input produces
//!   an empty scan or `None`.
//!
//! The step function receives the element first and the current
//! accumulator second: `function(element, &accumulator)`.
//!
//! # Early Termination
//!
//! The `*_while` forms check `predicate` on every newly computed
//! accumulator. The first accumulator that fails the predicate is still
//! part of the result, and no further element is processed:
//!
//! ```text
//! scan_left_while([1, 2, 3, 4], 0, +, |v| v < 5)
//!   0 -> 1 (ok) -> 3 (ok) -> 6 (fails, kept, stop)
//!   == [0, 1, 3, 6]
//! ```
//!
//! # Laws
//!
//! - `scan_left(xs, seed, f).len() == xs.len() + 1`
//! - `scan_left(xs, seed, f)[0] == seed`
//! - `last(scan_left_while(xs, seed, f, p)) == reduce_while(xs, seed, f, p)`
//!
//! # Examples
//!
//! ```rust
//! use seqcomb::fold::{reduce_while, scan_left, scan_left_from_first, scan_left_while};
//!
//! let add = |element: i32, total: &i32| total + element;
//!
//! assert_eq!(scan_left(vec![1, 2, 3], 0, add), vec![0, 1, 3, 6]);
//! assert_eq!(scan_left_from_first(vec![1, 2, 3], add), vec![1, 3, 6]);
//! assert_eq!(scan_left_while(vec![1, 2, 3, 4], 0, add, |total| *total < 5), vec![0, 1, 3, 6]);
//! assert_eq!(reduce_while(vec![1, 2, 3, 4], 0, add, |total| *total < 5), 6);
//! ```

mod reduce;
mod scan;

pub use reduce::{reduce_left, reduce_left_from_first, reduce_while, reduce_while_from_first};
pub use scan::{scan_left, scan_left_from_first, scan_left_while, scan_left_while_from_first};
