//! Sorted-sequence primitives
//!
//! Small generic helpers over slices that are sorted by some key. The
//! signature engine is built from these; none of them know about units.

use std::cmp::Ordering;

/// Linear merge of two sequences sorted by `cmp`
///
/// Elements that compare equal are handed to `combine`, which may drop the
/// pair by returning `None`. Unmatched elements are cloned through. If both
/// inputs are strictly sorted the output is strictly sorted too.
pub fn merge_sorted_by<T, C, F>(left: &[T], right: &[T], mut cmp: C, mut combine: F) -> Vec<T>
where
    T: Clone,
    C: FnMut(&T, &T) -> Ordering,
    F: FnMut(&T, &T) -> Option<T>,
{
    let mut out = Vec::with_capacity(left.len() + right.len());
    let (mut l, mut r) = (0, 0);

    while l < left.len() && r < right.len() {
        match cmp(&left[l], &right[r]) {
            Ordering::Equal => {
                out.extend(combine(&left[l], &right[r]));
                l += 1;
                r += 1;
            }
            Ordering::Less => {
                out.push(left[l].clone());
                l += 1;
            }
            Ordering::Greater => {
                out.push(right[r].clone());
                r += 1;
            }
        }
    }

    out.extend_from_slice(&left[l..]);
    out.extend_from_slice(&right[r..]);
    out
}

/// Apply `f` to each element, keeping the `Some` results in order
pub fn filter_map<T, U, F>(items: &[T], f: F) -> Vec<U>
where
    F: FnMut(&T) -> Option<U>,
{
    items.iter().filter_map(f).collect()
}

/// Clone the elements matching `keep`, preserving order
pub fn filter<T, F>(items: &[T], mut keep: F) -> Vec<T>
where
    T: Clone,
    F: FnMut(&T) -> bool,
{
    items.iter().filter(|item| keep(item)).cloned().collect()
}

/// Sort by `cmp`, then fold runs of equal elements with `combine`
///
/// A run whose fold yields `None` is removed entirely. When a fold drops
/// part-way through a run, the next equal element starts it again. The sort
/// is stable, so the fold follows input order within a run.
pub fn sort_and_coalesce_by<T, C, F>(mut items: Vec<T>, mut cmp: C, mut combine: F) -> Vec<T>
where
    T: Clone,
    C: FnMut(&T, &T) -> Ordering,
    F: FnMut(T, T) -> Option<T>,
{
    items.sort_by(&mut cmp);

    let mut out = Vec::with_capacity(items.len());
    let mut iter = items.into_iter().peekable();

    while let Some(head) = iter.next() {
        let key = head.clone();
        let mut acc = Some(head);
        while let Some(next) = iter.next_if(|next| cmp(&key, next) == Ordering::Equal) {
            acc = match acc {
                Some(acc) => combine(acc, next),
                None => Some(next),
            };
        }
        out.extend(acc);
    }

    out
}

/// Position of the first adjacent pair that is not strictly increasing
pub fn first_unordered_by<T, C>(items: &[T], mut cmp: C) -> Option<usize>
where
    C: FnMut(&T, &T) -> Ordering,
{
    items
        .windows(2)
        .position(|pair| cmp(&pair[0], &pair[1]) != Ordering::Less)
}
