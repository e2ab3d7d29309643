#![forbid(unsafe_code)]

//! Validated floating-point sort keys.
//!
//! A [`Position`] is the fractional sort key that determines an item's place
//! in an ordered list. Keys are plain `f64` values underneath, but the
//! constructor rejects NaN, infinite, and non-positive inputs, so that every
//! `Position` in circulation compares totally (`Eq` and `Ord` are sound) and
//! midpoint arithmetic downstream stays inside the domain.
//!
//! # Invariants
//!
//! 1. The wrapped value is always finite (no NaN, no ±∞).
//! 2. The wrapped value is strictly positive. Keys are assigned as
//!    `(i + 1) * step` and only ever shrink by halving, so they approach zero
//!    without reaching it; halving a positive key always lands *below* it,
//!    which the allocator's front-move rule relies on.

use core::fmt;

/// A positive, finite floating-point sort key.
///
/// # Examples
///
/// ```
/// # use reorder_core::position::Position;
/// let a = Position::new(16_384.0)?;
/// let b = Position::new(32_768.0)?;
/// assert!(a < b);
/// assert!(Position::new(f64::NAN).is_err());
/// assert!(Position::new(0.0).is_err());
/// # Ok::<(), reorder_core::position::PositionError>(())
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Position(f64);

impl Position {
    /// Create a position from a raw value.
    ///
    /// # Errors
    ///
    /// Returns [`PositionError::NotFinite`] if `value` is NaN or infinite,
    /// [`PositionError::NotPositive`] if `value` is zero or negative.
    pub fn new(value: f64) -> Result<Self, PositionError> {
        if !value.is_finite() {
            Err(PositionError::NotFinite(value))
        } else if value <= 0.0 {
            Err(PositionError::NotPositive(value))
        } else {
            Ok(Self(value))
        }
    }

    /// Construct from a value already known to be in the key domain.
    ///
    /// Callers in this crate only produce candidates from arithmetic on
    /// positive inputs (midpoints, halvings, fixed positive offsets), which
    /// stays positive and finite for any realistic key range.
    pub(crate) fn from_finite(value: f64) -> Self {
        debug_assert!(
            value.is_finite() && value > 0.0,
            "position arithmetic produced {value}"
        );
        Self(value)
    }

    /// The raw key value.
    #[must_use]
    pub fn value(self) -> f64 {
        self.0
    }

    /// Absolute distance to another position.
    #[must_use]
    pub fn gap(self, other: Position) -> f64 {
        (self.0 - other.0).abs()
    }
}

// Positions are never NaN, so the partial comparisons are total.
impl Eq for Position {}

impl PartialOrd for Position {
    fn partial_cmp(&self, other: &Self) -> Option<core::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Position {
    fn cmp(&self, other: &Self) -> core::cmp::Ordering {
        self.0.total_cmp(&other.0)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Errors from [`Position`] construction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PositionError {
    /// The input was NaN or infinite; such keys cannot be ordered.
    NotFinite(f64),
    /// The input was zero or negative, outside the key domain.
    NotPositive(f64),
}

impl fmt::Display for PositionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFinite(v) => write!(f, "position must be finite, got {v}"),
            Self::NotPositive(v) => write!(f, "position must be positive, got {v}"),
        }
    }
}

impl std::error::Error for PositionError {}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
