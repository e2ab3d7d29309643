#![forbid(unsafe_code)]

//! Drag-reorder orchestration over `reorder-core`.
//!
//! The pieces around the pure spacing algorithms: the
//! [`ReorderCoordinator`] implements the drag-end decision policy (no-op,
//! single-item update, or full renormalization) over an optimistic working
//! list; [`UpdateInstruction`] is its only output toward storage; the
//! [`port`] traits are the seams a real backend implements; and
//! [`ReorderSession`] wires it all together with [`AckTracker`] keeping the
//! speculative and acknowledged views apart.
//!
//! Structured logging is available behind the `tracing` feature: a
//! `drag_end` span per gesture, a debug event per renormalization, and a
//! warning per absorbed write failure.

pub mod ack;
pub mod coordinator;
pub mod instruction;
pub mod port;
pub mod session;

pub use ack::{AckTracker, Confirmed};
pub use coordinator::{ReorderCoordinator, ReorderError};
pub use instruction::{PositionUpdate, UpdateInstruction};
pub use port::{ListSource, PersistencePort, PortError};
pub use session::{ReorderSession, SessionError};
