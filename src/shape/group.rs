//! Adjacent-run partitioning.

use std::mem;

/// Splits the sequence into maximal runs of consecutive elements.
///
/// Every run has an anchor, its first element. An element joins the
/// current run when `predicate(element, anchor)` holds; otherwise it starts
/// a new run and becomes that run's anchor. Elements are compared with the
/// anchor, never with their immediate predecessor, which matters when
/// `predicate` is not transitive.
///
/// An empty sequence yields no runs.
///
/// # Type Parameters
///
/// * `I` - The input sequence
/// * `P` - The grouping predicate
///
/// # Arguments
///
/// * `sequence` - The elements to partition
/// * `predicate` - Called as `predicate(element, anchor)`; `true` keeps
///   `element` in the anchor's run
///
/// # Returns
///
/// Non-empty runs whose concatenation is the input, in input order.
///
/// # Examples
///
/// ```
/// use seqcomb::shape::group_by;
///
/// // Buckets of width two, anchored at the first member of each bucket.
/// let buckets = group_by(vec![1, 2, 3, 4, 7], |element, anchor| element - anchor <= 1);
/// assert_eq!(buckets, vec![vec![1, 2], vec![3, 4], vec![7]]);
/// ```
pub fn group_by<I, P>(sequence: I, mut predicate: P) -> Vec<Vec<I::Item>>
where
    I: IntoIterator,
    P: FnMut(&I::Item, &I::Item) -> bool,
{
    let mut runs = Vec::new();
    let mut elements = sequence.into_iter();
    let Some(first) = elements.next() else {
        return runs;
    };

    let mut current = vec![first];
    for element in elements {
        if !predicate(&element, &current[0]) {
            runs.push(mem::take(&mut current));
        }
        current.push(element);
    }
    runs.push(current);
    runs
}

/// Splits the sequence into runs of consecutive equal elements.
///
/// # Examples
///
/// ```
/// use seqcomb::shape::group;
///
/// assert_eq!(group("aabccc".chars()), vec![vec!['a', 'a'], vec!['b'], vec!['c', 'c', 'c']]);
/// ```
pub fn group<I>(sequence: I) -> Vec<Vec<I::Item>>
where
    I: IntoIterator,
    I::Item: PartialEq,
{
    group_by(sequence, |element, anchor| element == anchor)
}
