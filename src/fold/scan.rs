//! Running accumulations.

use std::mem;

/// Produces the running accumulations of `function` over the sequence,
/// stopping after the first accumulator that fails `predicate`.
///
/// The output always starts with `seed`; `predicate` is never applied to
/// it. Each new accumulator is appended before it is checked, so the first
/// failing value is the last element of the output. If `predicate` always
/// holds, the output has `|sequence| + 1` elements.
///
/// # Type Parameters
///
/// * `I` - The input sequence
/// * `B` - The accumulator type, which may differ from the element type
/// * `F` - The step function, called as `function(element, &accumulator)`
/// * `P` - The predicate checked on every new accumulator
///
/// # Arguments
///
/// * `sequence` - The elements to fold, left to right
/// * `seed` - The initial accumulator, always the first output
/// * `function` - Computes the next accumulator from an element and the current one
/// * `predicate` - Returns `false` to stop after the accumulator it was given
///
/// # Returns
///
/// Between 1 and `|sequence| + 1` accumulators, in the order they were computed.
///
/// # Examples
///
/// ```
/// use seqcomb::fold::scan_left_while;
///
/// let running = scan_left_while(vec![1, 2, 3, 4], 0, |element, total| total + element, |total| *total < 5);
/// assert_eq!(running, vec![0, 1, 3, 6]);
///
/// // The seed is emitted even when nothing else is.
/// let only_seed = scan_left_while(Vec::<i32>::new(), 100, |element, total| total + element, |_| false);
/// assert_eq!(only_seed, vec![100]);
/// ```
pub fn scan_left_while<I, B, F, P>(sequence: I, seed: B, mut function: F, mut predicate: P) -> Vec<B>
where
    I: IntoIterator,
    F: FnMut(I::Item, &B) -> B,
    P: FnMut(&B) -> bool,
{
    let mut accumulations = Vec::new();
    let mut accumulator = seed;
    for element in sequence {
        let next = function(element, &accumulator);
        let keep_going = predicate(&next);
        accumulations.push(mem::replace(&mut accumulator, next));
        if !keep_going {
            break;
        }
    }
    accumulations.push(accumulator);
    accumulations
}

/// Produces every running accumulation of `function`, starting with `seed`.
///
/// The output has `|sequence| + 1` elements.
///
/// # Examples
///
/// ```
/// use seqcomb::fold::scan_left;
///
/// let prefixes = scan_left(vec!['a', 'b'], String::new(), |character, prefix| format!("{prefix}{character}"));
/// assert_eq!(prefixes, vec!["", "a", "ab"]);
/// ```
pub fn scan_left<I, B, F>(sequence: I, seed: B, function: F) -> Vec<B>
where
    I: IntoIterator,
    F: FnMut(I::Item, &B) -> B,
{
    scan_left_while(sequence, seed, function, |_| true)
}

/// [`scan_left_while`] seeded with the first element and run over the rest.
///
/// An empty sequence has nothing to seed with and yields an empty output.
///
/// # Examples
///
/// ```
/// use seqcomb::fold::scan_left_while_from_first;
///
/// let products = scan_left_while_from_first(vec![2, 3, 4, 5], |element, product| product * element, |product| *product < 20);
/// assert_eq!(products, vec![2, 6, 24]);
/// assert!(scan_left_while_from_first(Vec::<i32>::new(), |element, product| product * element, |_| true).is_empty());
/// ```
pub fn scan_left_while_from_first<I, F, P>(sequence: I, function: F, predicate: P) -> Vec<I::Item>
where
    I: IntoIterator,
    F: FnMut(I::Item, &I::Item) -> I::Item,
    P: FnMut(&I::Item) -> bool,
{
    let mut elements = sequence.into_iter();
    elements
        .next()
        .map_or_else(Vec::new, |first| scan_left_while(elements, first, function, predicate))
}

/// [`scan_left`] seeded with the first element and run over the rest.
///
/// # Examples
///
/// ```
/// use seqcomb::fold::scan_left_from_first;
///
/// assert_eq!(scan_left_from_first(vec![3_i32, 1, 4, 1, 5], |element, best| element.max(*best)), vec![3, 3, 4, 4, 5]);
/// ```
pub fn scan_left_from_first<I, F>(sequence: I, function: F) -> Vec<I::Item>
where
    I: IntoIterator,
    F: FnMut(I::Item, &I::Item) -> I::Item,
{
    scan_left_while_from_first(sequence, function, |_| true)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scan_left_while_does_not_visit_after_stop() {
        let mut visited = Vec::new();
        let result = scan_left_while(
            vec![1, 2, 3, 4],
            0,
            |element, total| {
                visited.push(element);
                total + element
            },
            |total| *total < 3,
        );
        assert_eq!(result, vec![0, 1, 3]);
        assert_eq!(visited, vec![1, 2]);
    }

    #[test]
    fn test_scan_left_while_stop_on_first_step() {
        let result = scan_left_while(vec![10, 20], 0, |element, total| total + element, |total| *total < 5);
        assert_eq!(result, vec![0, 10]);
    }

    #[test]
    fn test_scan_left_while_predicate_never_sees_seed() {
        let mut checked = Vec::new();
        let _ = scan_left_while(
            vec![1, 1],
            -1,
            |element, total| total + element,
            |total| {
                checked.push(*total);
                true
            },
        );
        assert_eq!(checked, vec![0, 1]);
    }

    #[test]
    fn test_scan_left_with_element_first_argument_order() {
        let result = scan_left(vec![1, 2], 10, |element, accumulator| element - accumulator);
        // 1 - 10 = -9, then 2 - (-9) = 11
        assert_eq!(result, vec![10, -9, 11]);
    }

    #[test]
    fn test_scan_left_from_first_singleton() {
        assert_eq!(scan_left_from_first(vec![42], |element, total| total + element), vec![42]);
    }
}
