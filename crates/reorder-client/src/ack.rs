#![forbid(unsafe_code)]

//! Two-phase tracking of speculative vs. acknowledged keys.
//!
//! The working list is mutated optimistically: the local view moves before
//! the store answers, and acknowledgments may arrive out of order (or never,
//! on failure). [`AckTracker`] keeps both phases per item:
//!
//! - **pending** — the last key the coordinator computed locally;
//! - **confirmed** — the last key the store acknowledged, tagged with a
//!   sequence number so late arrivals cannot overwrite newer confirmations.
//!
//! The coordinator always reads and writes pending; confirmations merge in
//! arrival order, preferring the highest sequence number per item. Pending
//! state is never rolled back — a failed write simply leaves the item
//! divergent until a later write or reset settles it.

use std::collections::HashMap;

use reorder_core::{ItemId, Position};

use crate::instruction::{PositionUpdate, UpdateInstruction};

/// A store-acknowledged key with its arrival sequence.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Confirmed {
    /// The acknowledged key.
    pub position: Position,
    /// Monotonic arrival sequence; higher wins.
    pub seq: u64,
}

#[derive(Clone, Debug, PartialEq)]
struct Slot {
    pending: Position,
    confirmed: Option<Confirmed>,
}

/// Per-item speculative/acknowledged key tracking.
#[derive(Clone, Debug, Default)]
pub struct AckTracker {
    slots: HashMap<ItemId, Slot>,
}

impl AckTracker {
    /// Empty tracker.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one locally computed key as pending.
    pub fn record_pending(&mut self, update: &PositionUpdate) {
        self.slots
            .entry(update.id.clone())
            .and_modify(|slot| slot.pending = update.position)
            .or_insert(Slot {
                pending: update.position,
                confirmed: None,
            });
    }

    /// Record every key an instruction is about to write as pending.
    pub fn record_instruction(&mut self, instruction: &UpdateInstruction) {
        for update in instruction.updates() {
            self.record_pending(update);
        }
    }

    /// Merge a store acknowledgment.
    ///
    /// Returns `false` when the acknowledgment was stale (an equal or higher
    /// sequence is already recorded for the item) and was ignored. An
    /// acknowledgment for an item never recorded as pending creates the slot
    /// with pending equal to the confirmed key.
    pub fn acknowledge(&mut self, id: &ItemId, position: Position, seq: u64) -> bool {
        let slot = self.slots.entry(id.clone()).or_insert(Slot {
            pending: position,
            confirmed: None,
        });
        if slot.confirmed.is_some_and(|c| c.seq >= seq) {
            return false;
        }
        slot.confirmed = Some(Confirmed { position, seq });
        true
    }

    /// Last locally computed key for an item.
    #[must_use]
    pub fn pending(&self, id: &ItemId) -> Option<Position> {
        self.slots.get(id).map(|slot| slot.pending)
    }

    /// Last acknowledged key for an item.
    #[must_use]
    pub fn confirmed(&self, id: &ItemId) -> Option<Confirmed> {
        self.slots.get(id).and_then(|slot| slot.confirmed)
    }

    /// Whether an item's pending key has been acknowledged exactly.
    #[must_use]
    pub fn is_settled(&self, id: &ItemId) -> bool {
        self.slots
            .get(id)
            .is_some_and(|slot| slot.confirmed.is_some_and(|c| c.position == slot.pending))
    }

    /// Items whose local view is ahead of (or different from) the store.
    #[must_use]
    pub fn divergent(&self) -> Vec<ItemId> {
        let mut out: Vec<ItemId> = self
            .slots
            .iter()
            .filter(|(_, slot)| {
                slot.confirmed
                    .is_none_or(|c| c.position != slot.pending)
            })
            .map(|(id, _)| id.clone())
            .collect();
        out.sort();
        out
    }

    /// Number of tracked items.
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Whether nothing is tracked yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Forget everything (e.g. after a reset refetch).
    pub fn clear(&mut self) {
        self.slots.clear();
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

    fn id(s: &str) -> ItemId {
        ItemId::new(s)
    }

    #[test]
    fn pending_then_acknowledge_settles() {
        let mut acks = AckTracker::new();
        acks.record_pending(&PositionUpdate::new(id("a"), pos(8_192.0)));
        assert!(!acks.is_settled(&id("a")));
        assert_eq!(acks.divergent(), vec![id("a")]);

        assert!(acks.acknowledge(&id("a"), pos(8_192.0), 1));
        assert!(acks.is_settled(&id("a")));
        assert!(acks.divergent().is_empty());
    }

    #[test]
    fn later_seq_wins_regardless_of_arrival_order() {
        let mut acks = AckTracker::new();
        acks.record_pending(&PositionUpdate::new(id("a"), pos(3.0)));

        // seq 2 arrives first, then the stale seq 1.
        assert!(acks.acknowledge(&id("a"), pos(3.0), 2));
        assert!(!acks.acknowledge(&id("a"), pos(2.0), 1));
        assert_eq!(acks.confirmed(&id("a")).unwrap().position, pos(3.0));
        assert_eq!(acks.confirmed(&id("a")).unwrap().seq, 2);
    }

    #[test]
    fn equal_seq_is_stale() {
        let mut acks = AckTracker::new();
        assert!(acks.acknowledge(&id("a"), pos(1.0), 5));
        assert!(!acks.acknowledge(&id("a"), pos(9.0), 5));
        assert_eq!(acks.confirmed(&id("a")).unwrap().position, pos(1.0));
    }

    #[test]
    fn failed_write_leaves_item_divergent() {
        let mut acks = AckTracker::new();
        acks.record_pending(&PositionUpdate::new(id("a"), pos(1.0)));
        acks.record_pending(&PositionUpdate::new(id("b"), pos(2.0)));
        // Only a's write succeeded.
        acks.acknowledge(&id("a"), pos(1.0), 1);
        assert_eq!(acks.divergent(), vec![id("b")]);
    }

    #[test]
    fn newer_pending_after_confirmation_diverges_again() {
        let mut acks = AckTracker::new();
        acks.record_pending(&PositionUpdate::new(id("a"), pos(1.0)));
        acks.acknowledge(&id("a"), pos(1.0), 1);
        assert!(acks.is_settled(&id("a")));

        acks.record_pending(&PositionUpdate::new(id("a"), pos(5.0)));
        assert!(!acks.is_settled(&id("a")));
        assert_eq!(acks.divergent(), vec![id("a")]);
    }

    #[test]
    fn record_instruction_covers_bulk() {
        let mut acks = AckTracker::new();
        let instr = UpdateInstruction::Bulk(vec![
            PositionUpdate::new(id("a"), pos(16_384.0)),
            PositionUpdate::new(id("b"), pos(32_768.0)),
        ]);
        acks.record_instruction(&instr);
        assert_eq!(acks.len(), 2);
        assert_eq!(acks.pending(&id("b")), Some(pos(32_768.0)));
    }

    #[test]
    fn clear_forgets_all_slots() {
        let mut acks = AckTracker::new();
        acks.record_pending(&PositionUpdate::new(id("a"), pos(1.0)));
        acks.clear();
        assert!(acks.is_empty());
        assert_eq!(acks.pending(&id("a")), None);
    }
}
