//! Unit tests for optional-filtering maps and traversals.

use rstest::rstest;
use seqcomb::filter_map::{
    cat_optional, map_optional, map_optional2, sequence, sequence_result, take_while_optional,
    traverse, traverse_result,
};

fn parse(text: &str) -> Option<i32> {
    text.parse().ok()
}

// =============================================================================
// map_optional / map_optional2
// =============================================================================

#[rstest]
#[case(vec!["1", "2", "3"], vec![1, 2, 3])]
#[case(vec!["1", "x", "3"], vec![1, 3])]
#[case(vec!["x", "y"], vec![])]
#[case(vec![], vec![])]
fn map_optional_drops_absent_results(#[case] input: Vec<&str>, #[case] expected: Vec<i32>) {
    assert_eq!(map_optional(input.clone(), parse), expected);
    assert_eq!(map_optional2(input, parse), expected);
}

#[rstest]
fn map_optional_continues_after_absence() {
    let mut visited = Vec::new();
    let result = map_optional(vec![1, 2, 3], |number| {
        visited.push(number);
        (number != 2).then_some(number)
    });
    assert_eq!(result, vec![1, 3]);
    assert_eq!(visited, vec![1, 2, 3]);
}

#[rstest]
fn map_optional2_visits_each_element_once() {
    let mut calls = 0;
    let result = map_optional2(&[5, 6, 7], |number| {
        calls += 1;
        Some(number * 2)
    });
    assert_eq!(result, vec![10, 12, 14]);
    assert_eq!(calls, 3);
}

// =============================================================================
// cat_optional
// =============================================================================

#[rstest]
fn cat_optional_keeps_present_values_in_order() {
    let values = vec![Some("a"), None, Some("b"), None, Some("c")];
    assert_eq!(cat_optional(values), vec!["a", "b", "c"]);
}

#[rstest]
fn cat_optional_of_borrowed_options() {
    let values = vec![Some(1), None, Some(2)];
    let present: Vec<&i32> = cat_optional(values.iter().map(Option::as_ref));
    assert_eq!(present, vec![&1, &2]);
}

// =============================================================================
// take_while_optional
// =============================================================================

#[rstest]
#[case(vec!["1", "2", "x", "4"], vec![1, 2])]
#[case(vec!["x", "2"], vec![])]
#[case(vec!["1", "2"], vec![1, 2])]
#[case(vec![], vec![])]
fn take_while_optional_stops_at_first_absence(#[case] input: Vec<&str>, #[case] expected: Vec<i32>) {
    assert_eq!(take_while_optional(input, parse), expected);
}

#[rstest]
fn take_while_optional_differs_from_map_optional() {
    let input = vec!["1", "x", "3"];
    assert_eq!(take_while_optional(input.clone(), parse), vec![1]);
    assert_eq!(map_optional(input, parse), vec![1, 3]);
}

// =============================================================================
// traverse / sequence
// =============================================================================

#[rstest]
#[case(vec!["1", "2", "3"], Some(vec![1, 2, 3]))]
#[case(vec!["1", "x", "3"], None)]
#[case(vec!["x"], None)]
#[case(vec![], Some(vec![]))]
fn traverse_is_all_or_nothing(#[case] input: Vec<&str>, #[case] expected: Option<Vec<i32>>) {
    assert_eq!(traverse(input, parse), expected);
}

#[rstest]
fn traverse_fails_when_only_last_is_absent() {
    assert_eq!(traverse(vec!["1", "2", "x"], parse), None);
}

#[rstest]
fn sequence_examples() {
    assert_eq!(sequence(vec![Some(1), Some(2)]), Some(vec![1, 2]));
    assert_eq!(sequence(vec![Some(1), None]), None);
    assert_eq!(sequence(vec![None::<i32>]), None);
}

// =============================================================================
// traverse_result / sequence_result
// =============================================================================

#[rstest]
fn traverse_result_collects_when_all_ok() {
    let result: Result<Vec<i32>, std::num::ParseIntError> =
        traverse_result(vec!["4", "5"], str::parse::<i32>);
    assert_eq!(result, Ok(vec![4, 5]));
}

#[rstest]
fn traverse_result_returns_first_error() {
    let result = traverse_result(vec![1, -1, -2], |number| {
        if number > 0 {
            Ok(number)
        } else {
            Err(format!("bad {number}"))
        }
    });
    assert_eq!(result, Err(String::from("bad -1")));
}

#[rstest]
fn sequence_result_returns_first_error() {
    let values: Vec<Result<i32, char>> = vec![Ok(1), Err('a'), Ok(3), Err('b')];
    assert_eq!(sequence_result(values), Err('a'));
}
