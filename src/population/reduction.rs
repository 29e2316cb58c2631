//! Best-solution reduction
//!
//! Scans candidates and keeps the first one with minimal fitness. Every
//! "pick the best" decision in the crate goes through [`leftmost_min`], so
//! ties resolve the same way everywhere: the earliest candidate wins.

use crate::error::{SearchError, SearchOutcome};
use crate::fitness::traits::Objective;
use crate::genome::point::Point;

/// Index of the first minimal value
///
/// A later value replaces the running best only if it is strictly lower.
/// NaN never wins. Returns `None` for an empty iterator.
pub fn leftmost_min<I>(values: I) -> Option<usize>
where
    I: IntoIterator<Item = f64>,
{
    let mut iter = values.into_iter().enumerate();
    let (mut best_idx, mut best) = iter.next()?;
    for (idx, value) in iter {
        if value < best || (best.is_nan() && !value.is_nan()) {
            best = value;
            best_idx = idx;
        }
    }
    Some(best_idx)
}

/// Return the point with minimal objective value
///
/// Ties keep the first occurrence.
///
/// # Errors
/// `SearchError::InvalidInput` if `candidates` is empty.
pub fn find_best_solution<'a, O>(candidates: &'a [Point], objective: &O) -> SearchOutcome<&'a Point>
where
    O: Objective + ?Sized,
{
    leftmost_min(candidates.iter().map(|p| objective.evaluate(p)))
        .map(|idx| &candidates[idx])
        .ok_or_else(|| SearchError::InvalidInput("cannot reduce an empty candidate set".to_string()))
}
