#![forbid(unsafe_code)]

//! Boundary traits toward the backing store.
//!
//! The coordinator never talks to storage; a [`ReorderSession`] does, through
//! these two seams. Implementations are external collaborators — a GraphQL
//! client, a REST call, a database handle, or an in-memory double in tests.
//! The core treats every call as fire-and-forget: a failed write is reported
//! and logged, never retried, and never blocks the next drag.
//!
//! [`ReorderSession`]: crate::session::ReorderSession

use core::fmt;

use reorder_core::{ItemId, OrderItem, Position};

use crate::instruction::PositionUpdate;

/// Source of the full list at session start (and after a reset).
pub trait ListSource {
    /// Fetch every item, in any order.
    ///
    /// # Errors
    ///
    /// [`PortError`] if the store cannot be reached or rejects the request.
    fn fetch(&self) -> Result<Vec<OrderItem>, PortError>;
}

/// Write access to the stored positions.
pub trait PersistencePort {
    /// Persist one item's new key. Echoes the updated item's id and key,
    /// like a mutation response.
    ///
    /// # Errors
    ///
    /// [`PortError`] if the write is rejected or the store is unreachable.
    fn update_position(&mut self, id: &ItemId, position: Position)
    -> Result<PositionUpdate, PortError>;

    /// Ask the store to reassign every position server-side. The caller is
    /// expected to refetch afterwards.
    ///
    /// # Errors
    ///
    /// [`PortError`] if the reset is rejected or the store is unreachable.
    fn reset_all(&mut self) -> Result<(), PortError>;
}

/// Errors crossing the persistence boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PortError {
    /// The store cannot be reached at all.
    Unavailable,
    /// The store answered with an error.
    Remote(String),
}

impl PortError {
    /// Create a remote error with the given message.
    #[must_use]
    pub fn remote(message: impl Into<String>) -> Self {
        Self::Remote(message.into())
    }
}

impl fmt::Display for PortError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unavailable => write!(f, "store unavailable"),
            Self::Remote(msg) => write!(f, "store error: {msg}"),
        }
    }
}

impl std::error::Error for PortError {}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
