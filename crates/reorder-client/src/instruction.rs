#![forbid(unsafe_code)]

//! Persistence instructions emitted by the coordinator.
//!
//! The coordinator performs no I/O; its only output besides the updated
//! working list is an [`UpdateInstruction`] describing what the persistence
//! collaborator should write: one item's new key, or every key after a
//! renormalization.

use reorder_core::{ItemId, OrderItem, Position};

/// One item's new sort key.
#[derive(Clone, Debug, PartialEq)]
pub struct PositionUpdate {
    /// Item to update.
    pub id: ItemId,
    /// Its new key.
    pub position: Position,
}

impl PositionUpdate {
    /// Create an update.
    #[must_use]
    pub fn new(id: ItemId, position: Position) -> Self {
        Self { id, position }
    }
}

impl From<&OrderItem> for PositionUpdate {
    fn from(item: &OrderItem) -> Self {
        Self {
            id: item.id.clone(),
            position: item.position,
        }
    }
}

/// What the persistence collaborator should write after a drag.
#[derive(Clone, Debug, PartialEq)]
pub enum UpdateInstruction {
    /// Only the moved item's key changed.
    Single(PositionUpdate),
    /// A renormalization touched every item; write all keys.
    Bulk(Vec<PositionUpdate>),
}

impl UpdateInstruction {
    /// Bulk instruction covering every item of a list, in display order.
    #[must_use]
    pub fn bulk_from_items(items: &[OrderItem]) -> Self {
        Self::Bulk(items.iter().map(PositionUpdate::from).collect())
    }

    /// True for the renormalization (every-item) variant.
    #[must_use]
    pub fn is_bulk(&self) -> bool {
        matches!(self, Self::Bulk(_))
    }

    /// The contained updates, one for `Single`, all for `Bulk`.
    #[must_use]
    pub fn updates(&self) -> &[PositionUpdate] {
        match self {
            Self::Single(update) => core::slice::from_ref(update),
            Self::Bulk(updates) => updates,
        }
    }

    /// Number of item writes this instruction implies.
    #[must_use]
    pub fn len(&self) -> usize {
        self.updates().len()
    }

    /// Whether the instruction carries no writes (an empty bulk).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.updates().is_empty()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
