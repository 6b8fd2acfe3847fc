//! Property-based tests for optional-filtering maps.
//!
//! 1. **Length bound**: `map_optional(xs, f).len() <= xs.len()`, with
//!    equality exactly when `f` is never absent.
//! 2. **Self-zip equivalence**: `map_optional2(xs, f) == map_optional(xs, f)`.
//! 3. **Traverse presence**: `traverse(xs, f)` is `Some` iff `f` is present
//!    on every element, and then equals the element-wise application.
//! 4. **Prefix**: `take_while_optional(xs, f)` is a prefix of
//!    `map_optional(xs, f)`.

#![forbid(unsafe_code)]

use proptest::prelude::*;
use seqcomb::filter_map::{
    cat_optional, map_optional, map_optional2, sequence, take_while_optional, traverse,
};

fn halve_even(number: &i32) -> Option<i32> {
    (number % 2 == 0).then(|| number / 2)
}

proptest! {
    #[test]
    fn prop_map_optional_length_bound(elements in prop::collection::vec(any::<i32>(), 0..50)) {
        let mapped = map_optional(&elements, halve_even);
        let all_present = elements.iter().all(|number| halve_even(number).is_some());

        prop_assert!(mapped.len() <= elements.len());
        prop_assert_eq!(mapped.len() == elements.len(), all_present);
    }

    #[test]
    fn prop_map_optional2_equals_map_optional(elements in prop::collection::vec(any::<i32>(), 0..50)) {
        prop_assert_eq!(map_optional2(&elements, halve_even), map_optional(&elements, halve_even));
    }

    #[test]
    fn prop_traverse_present_iff_all_present(elements in prop::collection::vec(any::<i32>(), 0..20)) {
        let traversed = traverse(&elements, halve_even);
        let all_present = elements.iter().all(|number| halve_even(number).is_some());

        prop_assert_eq!(traversed.is_some(), all_present);
        if let Some(values) = traversed {
            let expected: Vec<i32> = elements.iter().map(|number| number / 2).collect();
            prop_assert_eq!(values, expected);
        }
    }

    #[test]
    fn prop_sequence_agrees_with_cat_optional(elements in prop::collection::vec(any::<Option<u8>>(), 0..20)) {
        let sequenced = sequence(elements.clone());
        let present = cat_optional(elements.clone());

        match sequenced {
            Some(values) => prop_assert_eq!(values, present),
            None => prop_assert!(present.len() < elements.len()),
        }
    }

    #[test]
    fn prop_take_while_optional_is_prefix_of_map_optional(elements in prop::collection::vec(any::<i32>(), 0..50)) {
        let prefix = take_while_optional(&elements, halve_even);
        let mapped = map_optional(&elements, halve_even);

        prop_assert!(mapped.starts_with(&prefix));
    }
}
