#![forbid(unsafe_code)]

//! Fractional position allocation, collision detection, renormalization.
//!
//! This is the algorithmic heart of the crate. When an item is dragged to a
//! new slot, [`allocate`] computes a key for it without touching any other
//! item: the midpoint of its new neighbors, half of the first key when moved
//! to the front, or a fixed [`SpacingConfig::step`] past the last key when
//! moved to the end. Repeated midpoint bisection halves the local gap each
//! time, so eventually two adjacent keys become numerically indistinguishable;
//! [`needs_renormalization`] detects that, and [`renormalize`] reassigns
//! evenly spaced keys to the whole list, resetting the bisection budget.
//!
//! # Invariants
//!
//! 1. `allocate` never mutates its input and, absent a collision, returns a
//!    key strictly between the moved item's new neighbors.
//! 2. `renormalize` is index-stable: item `i` of the input is item `i` of the
//!    output, with position `(i + 1) * step`.
//! 3. The no-movement check ([`is_noop`]) and the gap check
//!    ([`needs_renormalization`]) are independent predicates; they have
//!    different recovery actions (emit nothing vs. renormalize) and callers
//!    evaluate them in that order.

use crate::item::OrderItem;
use crate::position::Position;

/// Default spacing between keys on append and renormalization.
pub const DEFAULT_STEP: f64 = 16_384.0;

/// Default minimum trustworthy gap between adjacent keys.
pub const DEFAULT_THRESHOLD: f64 = 0.1;

/// Tuning knobs for allocation and collision detection.
///
/// The defaults allow fourteen-ish midpoint bisections in the same region
/// (`16384 → 0.1` is 17 halvings) before a renormalization fires, and an
/// effectively unbounded number of appends.
#[derive(Clone, Debug, PartialEq)]
pub struct SpacingConfig {
    /// Gap used when appending and when renormalizing.
    pub step: f64,
    /// Smallest gap between adjacent keys that is still trustworthy.
    pub threshold: f64,
}

impl Default for SpacingConfig {
    fn default() -> Self {
        Self {
            step: DEFAULT_STEP,
            threshold: DEFAULT_THRESHOLD,
        }
    }
}

impl SpacingConfig {
    /// Override the append/renormalization step.
    ///
    /// # Panics
    ///
    /// Panics if `step` is not finite and positive.
    #[must_use]
    pub fn with_step(mut self, step: f64) -> Self {
        assert!(
            step.is_finite() && step > 0.0,
            "step must be finite and positive"
        );
        self.step = step;
        self
    }

    /// Override the collision threshold.
    ///
    /// # Panics
    ///
    /// Panics if `threshold` is not finite and non-negative.
    #[must_use]
    pub fn with_threshold(mut self, threshold: f64) -> Self {
        assert!(
            threshold.is_finite() && threshold >= 0.0,
            "threshold must be finite and non-negative"
        );
        self.threshold = threshold;
        self
    }
}

/// Compute the key for an item that has been moved to `moved_index`.
///
/// `items` must already be in post-move display order (the moved item sits at
/// `moved_index`, still carrying its old key). Neighbors are read, nothing is
/// written:
///
/// - both neighbors present → midpoint of their keys;
/// - moved to the front → half of the next key;
/// - moved to the end → previous key plus [`SpacingConfig::step`];
/// - single-item list → the item's own key, unchanged.
///
/// # Panics
///
/// Panics if `items` is empty or `moved_index` is out of range. Callers
/// (the coordinator) validate both before calling.
#[must_use]
pub fn allocate(items: &[OrderItem], moved_index: usize, cfg: &SpacingConfig) -> Position {
    assert!(!items.is_empty(), "allocate on empty list");
    assert!(
        moved_index < items.len(),
        "moved_index {moved_index} out of range for {} items",
        items.len()
    );

    let prev = moved_index
        .checked_sub(1)
        .map(|i| items[i].position.value());
    let next = items.get(moved_index + 1).map(|it| it.position.value());

    match (prev, next) {
        (Some(p), Some(n)) => Position::from_finite((p + n) / 2.0),
        (None, Some(n)) => Position::from_finite(n / 2.0),
        (Some(p), None) => Position::from_finite(p + cfg.step),
        (None, None) => items[moved_index].position,
    }
}

/// Whether an allocation made no progress.
///
/// True when the candidate equals the item's prior key, either because the
/// item was dropped back where it came from or because floating-point
/// precision in that region is exhausted and the midpoint collapsed onto the
/// original. The correct recovery is to emit nothing.
#[must_use]
pub fn is_noop(candidate: Position, prior: Position) -> bool {
    candidate == prior
}

/// Whether a candidate key sits too close to either of its new neighbors.
///
/// A gap at or below [`SpacingConfig::threshold`] (including a zero gap, when
/// bisection has produced a duplicate key) means further moves in this region
/// would produce unstable or duplicate keys, so the whole list must be
/// renormalized instead of keeping the local fix.
#[must_use]
pub fn needs_renormalization(
    candidate: Position,
    prev: Option<Position>,
    next: Option<Position>,
    cfg: &SpacingConfig,
) -> bool {
    prev.is_some_and(|p| candidate.gap(p) <= cfg.threshold)
        || next.is_some_and(|n| candidate.gap(n) <= cfg.threshold)
}

/// Whether a sorted list already carries an untrustworthy adjacent gap.
///
/// Bisection damage is not always repaired by the move that reveals it: an
/// item can be dragged *away* from a collapsed region, leaving two keys
/// within the threshold of each other. Such a list is renormalized at the
/// next reorder rather than waiting for a drop into the degenerate region.
#[must_use]
pub fn has_degenerate_gap(items: &[OrderItem], cfg: &SpacingConfig) -> bool {
    items
        .windows(2)
        .any(|pair| pair[0].position.gap(pair[1].position) <= cfg.threshold)
}

/// Reassign evenly spaced keys to every item.
///
/// Item at index `i` receives `(i + 1) * step`. Relative order and all
/// display attributes are preserved; every item is touched, not only the one
/// that moved. Pure: returns a new vector.
#[must_use]
pub fn renormalize(items: &[OrderItem], cfg: &SpacingConfig) -> Vec<OrderItem> {
    #[cfg(feature = "tracing")]
    tracing::debug!(len = items.len(), step = cfg.step, "renormalizing positions");

    items
        .iter()
        .enumerate()
        .map(|(i, item)| item.with_position(Position::from_finite((i as f64 + 1.0) * cfg.step)))
        .collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
