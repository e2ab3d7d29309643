#![forbid(unsafe_code)]

//! Ordered working copy of a list.
//!
//! [`OrderedList`] owns the in-memory sequence between a drag and the backing
//! store's acknowledgment. Construction validates the invariants the spacing
//! algorithms rely on; mutation happens in the two-step shape the coordinator
//! needs (relocate, then rewrite exactly one key — or renormalize the lot).
//!
//! # Invariants
//!
//! 1. After construction and after every completed operation, items are
//!    sorted by strictly increasing position.
//! 2. Ids are unique within the list.
//! 3. All positions are finite and positive (guaranteed by [`Position`]
//!    itself).
//!
//! Between [`move_item`](OrderedList::move_item) and the following
//! [`set_position`](OrderedList::set_position) or
//! [`renormalized`](OrderedList::renormalized) call the moved item still
//! carries its old key, so the sequence is transiently "sorted except for the
//! moved placeholder" — exactly the post-move display order the allocator is
//! specified against.

use std::collections::HashSet;
use std::fmt;

use crate::item::{ItemId, OrderItem};
use crate::position::Position;
use crate::spacing::{self, SpacingConfig};

/// A sequence of [`OrderItem`]s ordered by ascending position.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct OrderedList {
    items: Vec<OrderItem>,
}

impl OrderedList {
    /// Build a list from items in any order.
    ///
    /// Sorts by position and validates uniqueness of ids and positions.
    ///
    /// # Errors
    ///
    /// [`ListError::DuplicateId`] if two items share an id,
    /// [`ListError::DuplicatePosition`] if two items share a key.
    pub fn from_items(mut items: Vec<OrderItem>) -> Result<Self, ListError> {
        let mut seen = HashSet::with_capacity(items.len());
        for item in &items {
            if !seen.insert(item.id.clone()) {
                return Err(ListError::DuplicateId(item.id.clone()));
            }
        }

        items.sort_by(|a, b| a.position.cmp(&b.position));

        for pair in items.windows(2) {
            if pair[0].position == pair[1].position {
                return Err(ListError::DuplicatePosition {
                    a: pair[0].id.clone(),
                    b: pair[1].id.clone(),
                });
            }
        }

        Ok(Self { items })
    }

    /// The items in display order.
    #[must_use]
    pub fn items(&self) -> &[OrderItem] {
        &self.items
    }

    /// Consume the list, yielding the items in display order.
    #[must_use]
    pub fn into_items(self) -> Vec<OrderItem> {
        self.items
    }

    /// Number of items.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the list is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Item at `index`, if in range.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&OrderItem> {
        self.items.get(index)
    }

    /// Display index of the item with the given id.
    #[must_use]
    pub fn index_of(&self, id: &ItemId) -> Option<usize> {
        self.items.iter().position(|it| &it.id == id)
    }

    /// Relocate the item at `from` to `to`, keeping its key.
    ///
    /// This produces the post-move display order the allocator reads. The
    /// list is transiently unsorted until the caller rewrites the moved
    /// item's key (or renormalizes).
    ///
    /// # Panics
    ///
    /// Panics if `from` or `to` is out of range.
    pub fn move_item(&mut self, from: usize, to: usize) {
        assert!(from < self.items.len(), "from index out of range");
        assert!(to < self.items.len(), "to index out of range");
        let item = self.items.remove(from);
        self.items.insert(to, item);
    }

    /// Rewrite the key of the item at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of range. Debug builds also assert that the
    /// list is strictly sorted afterwards — the coordinator only calls this
    /// with a collision-free allocated key.
    pub fn set_position(&mut self, index: usize, position: Position) {
        assert!(index < self.items.len(), "index out of range");
        self.items[index].position = position;
        debug_assert!(
            self.is_strictly_sorted(),
            "set_position broke the sort invariant"
        );
    }

    /// New list with evenly respaced keys, current display order preserved.
    ///
    /// Valid by construction (positive step ⇒ strictly increasing distinct
    /// keys), so unlike [`from_items`](Self::from_items) this cannot fail.
    #[must_use]
    pub fn renormalized(&self, cfg: &SpacingConfig) -> Self {
        Self {
            items: spacing::renormalize(&self.items, cfg),
        }
    }

    /// Whether positions are strictly increasing.
    #[must_use]
    pub fn is_strictly_sorted(&self) -> bool {
        self.items
            .windows(2)
            .all(|pair| pair[0].position < pair[1].position)
    }
}

/// Errors from [`OrderedList`] construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListError {
    /// Two items share an id.
    DuplicateId(ItemId),
    /// Two items share a sort key; relative order would be undefined.
    DuplicatePosition {
        /// First offending item.
        a: ItemId,
        /// Second offending item.
        b: ItemId,
    },
}

impl fmt::Display for ListError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicateId(id) => write!(f, "duplicate item id: {id}"),
            Self::DuplicatePosition { a, b } => {
                write!(f, "items {a} and {b} share the same position")
            }
        }
    }
}

impl std::error::Error for ListError {}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
