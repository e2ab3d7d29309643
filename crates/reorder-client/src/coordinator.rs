#![forbid(unsafe_code)]

//! Reorder coordinator: the drag-end decision policy.
//!
//! On every drag the coordinator relocates the item in its working copy,
//! asks the allocator for a key, and decides between three outcomes:
//!
//! 1. **No-op** — the drag ended where it started, or the allocated key
//!    equals the prior one. Nothing is emitted.
//! 2. **Single update** — the key fits cleanly between its new neighbors.
//!    Only the moved item is written.
//! 3. **Renormalize** — the gap to a neighbor is at or below the threshold.
//!    Every item gets a fresh evenly spaced key and a bulk write is emitted.
//!
//! The working list is updated immediately and unconditionally (optimistic),
//! regardless of what the persistence collaborator later does with the
//! returned instruction. The coordinator itself performs no I/O.
//!
//! # Invariants
//!
//! 1. After `on_drag_end` returns, the working list is fully sorted by
//!    position and matches display order, whichever branch fired.
//! 2. `Ok(None)` means the stored keys already describe the displayed
//!    order; nothing needs to be written.

use core::fmt;

use reorder_core::{
    ItemId, OrderedList, SpacingConfig, allocate, has_degenerate_gap, is_noop,
    needs_renormalization,
};

use crate::instruction::{PositionUpdate, UpdateInstruction};

/// Orchestrates allocation, collision detection and renormalization over an
/// in-memory working list.
#[derive(Clone, Debug)]
pub struct ReorderCoordinator {
    list: OrderedList,
    cfg: SpacingConfig,
}

impl ReorderCoordinator {
    /// Create a coordinator with default spacing.
    #[must_use]
    pub fn new(list: OrderedList) -> Self {
        Self::with_config(list, SpacingConfig::default())
    }

    /// Create a coordinator with custom spacing.
    #[must_use]
    pub fn with_config(list: OrderedList, cfg: SpacingConfig) -> Self {
        Self { list, cfg }
    }

    /// The current working list (always sorted).
    #[must_use]
    pub fn list(&self) -> &OrderedList {
        &self.list
    }

    /// The spacing configuration in effect.
    #[must_use]
    pub fn config(&self) -> &SpacingConfig {
        &self.cfg
    }

    /// Replace the working list wholesale (e.g. after a refetch).
    pub fn replace_list(&mut self, list: OrderedList) {
        self.list = list;
    }

    /// Handle the end of a drag gesture: the item with `id` was dropped at
    /// display index `to_index`.
    ///
    /// Returns the instruction the persistence collaborator should execute,
    /// or `None` when the stored order already matches. The working list is
    /// updated before this returns.
    ///
    /// # Errors
    ///
    /// [`ReorderError::UnknownItem`] if `id` is not in the list,
    /// [`ReorderError::IndexOutOfBounds`] if `to_index` is past the end.
    pub fn on_drag_end(
        &mut self,
        id: &ItemId,
        to_index: usize,
    ) -> Result<Option<UpdateInstruction>, ReorderError> {
        // Degenerate input: an empty list has nothing to move.
        if self.list.is_empty() {
            return Ok(None);
        }

        let from = self
            .list
            .index_of(id)
            .ok_or_else(|| ReorderError::UnknownItem(id.clone()))?;
        let len = self.list.len();
        if to_index >= len {
            return Err(ReorderError::IndexOutOfBounds {
                index: to_index,
                len,
            });
        }

        #[cfg(feature = "tracing")]
        let _span = tracing::debug_span!(
            "drag_end",
            item = %id,
            from,
            to = to_index,
        )
        .entered();

        // Dropped back on its own slot: emitting a midpoint recomputation
        // here would jitter the key without changing the order.
        if from == to_index {
            return Ok(None);
        }

        let prior = self.list.get(from).map(|it| it.position);
        // A list that already carries a sub-threshold gap gets cleaned up by
        // this drag even if the moved item lands nowhere near it.
        let degenerate = has_degenerate_gap(self.list.items(), &self.cfg);
        self.list.move_item(from, to_index);

        let candidate = allocate(self.list.items(), to_index, &self.cfg);
        if prior.is_some_and(|p| is_noop(candidate, p)) {
            return Ok(None);
        }

        let prev = to_index
            .checked_sub(1)
            .and_then(|i| self.list.get(i))
            .map(|it| it.position);
        let next = self.list.get(to_index + 1).map(|it| it.position);

        if degenerate || needs_renormalization(candidate, prev, next, &self.cfg) {
            self.list = self.list.renormalized(&self.cfg);
            return Ok(Some(UpdateInstruction::bulk_from_items(self.list.items())));
        }

        self.list.set_position(to_index, candidate);
        Ok(Some(UpdateInstruction::Single(PositionUpdate::new(
            id.clone(),
            candidate,
        ))))
    }

    /// Explicit user-triggered full reset: every item gets `(index+1)*step`
    /// in the current display order, unconditionally.
    #[must_use]
    pub fn reset(&mut self) -> UpdateInstruction {
        self.list = self.list.renormalized(&self.cfg);
        UpdateInstruction::bulk_from_items(self.list.items())
    }
}

/// Errors from [`ReorderCoordinator::on_drag_end`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReorderError {
    /// The dragged id is not in the working list.
    UnknownItem(ItemId),
    /// The drop index is past the end of the list.
    IndexOutOfBounds {
        /// The requested drop index.
        index: usize,
        /// The list length at the time of the drag.
        len: usize,
    },
}

impl fmt::Display for ReorderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownItem(id) => write!(f, "unknown item: {id}"),
            Self::IndexOutOfBounds { index, len } => {
                write!(f, "drop index {index} out of bounds for {len} items")
            }
        }
    }
}

impl std::error::Error for ReorderError {}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
