#![forbid(unsafe_code)]

//! Fractional position allocation for reorderable lists.
//!
//! Items in a list each carry a floating-point sort key ("position"). Moving
//! an item only rewrites *that item's* key — the midpoint of its new
//! neighbors, half of the first key, or a fixed step past the last — so a
//! drag costs one write instead of a full rewrite of the stored order.
//! Repeated bisection in one region eventually exhausts the numeric gap;
//! when two adjacent keys come within a configurable threshold the whole
//! list is renormalized to evenly spaced keys.
//!
//! This crate is the pure core: types ([`Position`], [`OrderItem`],
//! [`OrderedList`]) and the spacing functions ([`allocate`],
//! [`needs_renormalization`], [`renormalize`]). Orchestration and the
//! persistence boundary live in `reorder-client`.

pub mod item;
pub mod list;
pub mod position;
pub mod spacing;

pub use item::{ItemId, OrderItem};
pub use list::{ListError, OrderedList};
pub use position::{Position, PositionError};
pub use spacing::{
    DEFAULT_STEP, DEFAULT_THRESHOLD, SpacingConfig, allocate, has_degenerate_gap, is_noop,
    needs_renormalization, renormalize,
};
