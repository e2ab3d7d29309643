#![forbid(unsafe_code)]

//! Session glue: fetch, drag, dispatch, reset.
//!
//! A [`ReorderSession`] wires the coordinator to the persistence boundary.
//! It owns the working list (through the coordinator), an [`AckTracker`] for
//! the speculative/acknowledged split, and the [`PersistencePort`] the
//! instructions are dispatched to.
//!
//! Dispatch is fire-and-forget: a failed write is logged and recorded as
//! divergence, never retried, and never surfaces on the drag path — the
//! local view is deliberately left ahead of the store. Only `start` and
//! `reset` (where there is no usable local state without the store) return
//! boundary errors.

use core::fmt;

use reorder_core::{ItemId, ListError, OrderedList, SpacingConfig};

use crate::ack::AckTracker;
use crate::coordinator::{ReorderCoordinator, ReorderError};
use crate::instruction::UpdateInstruction;
use crate::port::{ListSource, PersistencePort, PortError};

/// Drag-to-store session over a persistence port.
#[derive(Debug)]
pub struct ReorderSession<P: PersistencePort> {
    coordinator: ReorderCoordinator,
    acks: AckTracker,
    port: P,
    seq: u64,
}

impl<P: PersistencePort> ReorderSession<P> {
    /// Fetch the list from `source` and begin a session over `port`.
    ///
    /// # Errors
    ///
    /// [`SessionError::Port`] if the fetch fails, [`SessionError::List`] if
    /// the fetched data violates the list invariants (duplicate ids or
    /// positions; non-finite or non-positive keys are rejected earlier, at
    /// [`Position`] construction).
    ///
    /// [`Position`]: reorder_core::Position
    pub fn start<S: ListSource>(source: &S, port: P) -> Result<Self, SessionError> {
        Self::start_with_config(source, port, SpacingConfig::default())
    }

    /// Like [`start`](Self::start), with custom spacing.
    pub fn start_with_config<S: ListSource>(
        source: &S,
        port: P,
        cfg: SpacingConfig,
    ) -> Result<Self, SessionError> {
        let items = source.fetch()?;
        let list = OrderedList::from_items(items)?;
        Ok(Self {
            coordinator: ReorderCoordinator::with_config(list, cfg),
            acks: AckTracker::new(),
            port,
            seq: 0,
        })
    }

    /// The current working list (optimistic, possibly ahead of the store).
    #[must_use]
    pub fn list(&self) -> &OrderedList {
        self.coordinator.list()
    }

    /// The speculative/acknowledged tracking state.
    #[must_use]
    pub fn acks(&self) -> &AckTracker {
        &self.acks
    }

    /// Handle a drag-end gesture and dispatch whatever it produced.
    ///
    /// The working list is updated synchronously before any dispatch; write
    /// failures are absorbed (logged, tracked as divergence).
    ///
    /// # Errors
    ///
    /// Only coordinator errors ([`ReorderError`]) — never port failures.
    pub fn drag_end(&mut self, id: &ItemId, to_index: usize) -> Result<(), ReorderError> {
        let Some(instruction) = self.coordinator.on_drag_end(id, to_index)? else {
            return Ok(());
        };
        self.acks.record_instruction(&instruction);
        self.dispatch(&instruction);
        Ok(())
    }

    /// Explicit full reset: server-side reassignment, then refetch.
    ///
    /// # Errors
    ///
    /// [`SessionError::Port`] if `reset_all` or the refetch fails (the local
    /// list is left as-is), [`SessionError::List`] if the refetched data is
    /// invalid.
    pub fn reset<S: ListSource>(&mut self, source: &S) -> Result<(), SessionError> {
        self.port.reset_all()?;
        let items = source.fetch()?;
        let list = OrderedList::from_items(items)?;
        self.coordinator.replace_list(list);
        // Fresh authoritative state; stale divergence records would lie.
        self.acks.clear();
        self.seq = 0;
        Ok(())
    }

    fn dispatch(&mut self, instruction: &UpdateInstruction) {
        for update in instruction.updates() {
            match self.port.update_position(&update.id, update.position) {
                Ok(echo) => {
                    self.seq += 1;
                    self.acks.acknowledge(&echo.id, echo.position, self.seq);
                }
                Err(_err) => {
                    // Optimistic state stays ahead of the store; the item
                    // remains divergent until a later write settles it.
                    #[cfg(feature = "tracing")]
                    tracing::warn!(item = %update.id, error = %_err, "position write failed");
                }
            }
        }
    }
}

/// Errors from session start and reset.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionError {
    /// The boundary call failed.
    Port(PortError),
    /// The fetched list violates the ordering invariants.
    List(ListError),
}

impl From<PortError> for SessionError {
    fn from(err: PortError) -> Self {
        Self::Port(err)
    }
}

impl From<ListError> for SessionError {
    fn from(err: ListError) -> Self {
        Self::List(err)
    }
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Port(err) => write!(f, "persistence failure: {err}"),
            Self::List(err) => write!(f, "invalid list from store: {err}"),
        }
    }
}

impl std::error::Error for SessionError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Port(err) => Some(err),
            Self::List(err) => Some(err),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
