//! Reductions to a single accumulator.
//!
//! Each reduction returns the value its corresponding scan would end with,
//! without building the intermediate vector.

/// Folds the sequence from `seed`, stopping after the first accumulator
/// that fails `predicate`, and returns the last accumulator reached.
///
/// This is the last element of
/// [`scan_left_while`](crate::fold::scan_left_while) with the same
/// arguments. An empty sequence reduces to `seed`.
///
/// # Type Parameters
///
/// * `I` - The input sequence
/// * `B` - The accumulator type
/// * `F` - The step function, called as `function(element, &accumulator)`
/// * `P` - The predicate checked on every new accumulator
///
/// # Arguments
///
/// * `sequence` - The elements to fold, left to right
/// * `seed` - The initial accumulator
/// * `function` - Computes the next accumulator from an element and the current one
/// * `predicate` - Returns `false` to stop after the accumulator it was given
///
/// # Returns
///
/// The first accumulator that fails `predicate`, or the accumulator after
/// the whole sequence has been consumed.
///
/// # Examples
///
/// ```
/// use seqcomb::fold::reduce_while;
///
/// let budget = reduce_while(vec![30, 50, 40, 10], 0, |cost, spent| spent + cost, |spent| *spent <= 100);
/// assert_eq!(budget, 120);
/// ```
pub fn reduce_while<I, B, F, P>(sequence: I, seed: B, mut function: F, mut predicate: P) -> B
where
    I: IntoIterator,
    F: FnMut(I::Item, &B) -> B,
    P: FnMut(&B) -> bool,
{
    let mut accumulator = seed;
    for element in sequence {
        accumulator = function(element, &accumulator);
        if !predicate(&accumulator) {
            break;
        }
    }
    accumulator
}

/// [`reduce_while`] seeded with the first element and run over the rest.
///
/// Returns `None` for an empty sequence.
///
/// # Examples
///
/// ```
/// use seqcomb::fold::reduce_while_from_first;
///
/// let concatenated = reduce_while_from_first(
///     vec![String::from("a"), String::from("b"), String::from("c")],
///     |element, text| format!("{text}{element}"),
///     |text| text.len() < 2,
/// );
/// assert_eq!(concatenated, Some(String::from("ab")));
/// assert_eq!(reduce_while_from_first(Vec::<String>::new(), |element, _| element, |_| true), None);
/// ```
pub fn reduce_while_from_first<I, F, P>(sequence: I, function: F, predicate: P) -> Option<I::Item>
where
    I: IntoIterator,
    F: FnMut(I::Item, &I::Item) -> I::Item,
    P: FnMut(&I::Item) -> bool,
{
    let mut elements = sequence.into_iter();
    elements
        .next()
        .map(|first| reduce_while(elements, first, function, predicate))
}

/// Folds the whole sequence from `seed`.
///
/// # Examples
///
/// ```
/// use seqcomb::fold::reduce_left;
///
/// assert_eq!(reduce_left(vec![1, 2, 3], 0, |element, total| total + element), 6);
/// ```
pub fn reduce_left<I, B, F>(sequence: I, seed: B, function: F) -> B
where
    I: IntoIterator,
    F: FnMut(I::Item, &B) -> B,
{
    reduce_while(sequence, seed, function, |_| true)
}

/// Folds the whole sequence, seeded with its first element.
///
/// # Examples
///
/// ```
/// use seqcomb::fold::reduce_left_from_first;
///
/// assert_eq!(reduce_left_from_first(vec![4_i32, 9, 2], |element, best| element.max(*best)), Some(9));
/// assert_eq!(reduce_left_from_first(Vec::<i32>::new(), |element, best| element.max(*best)), None);
/// ```
pub fn reduce_left_from_first<I, F>(sequence: I, function: F) -> Option<I::Item>
where
    I: IntoIterator,
    F: FnMut(I::Item, &I::Item) -> I::Item,
{
    reduce_while_from_first(sequence, function, |_| true)
}
