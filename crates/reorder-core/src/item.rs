#![forbid(unsafe_code)]

//! List items and their identifiers.

use core::fmt;

use crate::position::Position;

/// Opaque stable identifier for an [`OrderItem`].
///
/// Unique within a list, immutable once created. The contents are whatever
/// the backing store uses (UUIDs, database keys); this crate never inspects
/// them beyond equality.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ItemId(String);

impl ItemId {
    /// Create an id from any string-like value.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The id as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ItemId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for ItemId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A single entry in an ordered list.
///
/// Only `id` and `position` participate in ordering. `label`, `color` and
/// `fg_color` are opaque display attributes carried through untouched for
/// whatever renders the list.
#[derive(Clone, Debug, PartialEq)]
pub struct OrderItem {
    /// Stable identifier, unique within the list.
    pub id: ItemId,
    /// Fractional sort key; strictly increasing in display order.
    pub position: Position,
    /// Display label (opaque to the algorithm).
    pub label: String,
    /// Background color (opaque to the algorithm).
    pub color: String,
    /// Optional foreground color (opaque to the algorithm).
    pub fg_color: Option<String>,
}

impl OrderItem {
    /// Create an item with empty display attributes.
    #[must_use]
    pub fn new(id: impl Into<ItemId>, position: Position) -> Self {
        Self {
            id: id.into(),
            position,
            label: String::new(),
            color: String::new(),
            fg_color: None,
        }
    }

    /// Set the display label.
    #[must_use]
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    /// Set the background color.
    #[must_use]
    pub fn color(mut self, color: impl Into<String>) -> Self {
        self.color = color.into();
        self
    }

    /// Set the foreground color.
    #[must_use]
    pub fn fg_color(mut self, color: impl Into<String>) -> Self {
        self.fg_color = Some(color.into());
        self
    }

    /// Copy of this item with a different sort key.
    #[must_use]
    pub fn with_position(&self, position: Position) -> Self {
        Self {
            position,
            ..self.clone()
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn pos(v: f64) -> Position {
        Position::new(v).unwrap()
    }

    #[test]
    fn id_conversions() {
        let a = ItemId::new("clx-1");
        let b: ItemId = "clx-1".into();
        let c: ItemId = String::from("clx-1").into();
        assert_eq!(a, b);
        assert_eq!(b, c);
        assert_eq!(a.as_str(), "clx-1");
        assert_eq!(a.to_string(), "clx-1");
    }

    #[test]
    fn item_builder() {
        let item = OrderItem::new("a", pos(16_384.0))
            .label("First")
            .color("#1e293b")
            .fg_color("#f8fafc");
        assert_eq!(item.id, ItemId::new("a"));
        assert_eq!(item.label, "First");
        assert_eq!(item.color, "#1e293b");
        assert_eq!(item.fg_color.as_deref(), Some("#f8fafc"));
    }

    #[test]
    fn with_position_keeps_attributes() {
        let item = OrderItem::new("a", pos(1.0)).label("keep me");
        let moved = item.with_position(pos(2.0));
        assert_eq!(moved.id, item.id);
        assert_eq!(moved.label, "keep me");
        assert_eq!(moved.position, pos(2.0));
    }
}
