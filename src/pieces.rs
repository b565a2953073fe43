//! Per-side list of occupied positions.
//!
//! Iteration follows insertion order. Move generation walks pieces in this
//! order, so search tie-breaking is reproducible only as long as the order
//! is preserved, including across capture and undo.

use std::collections::HashSet;

use crate::types::Pos;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PieceSet {
    positions: Vec<Pos>,
}

impl PieceSet {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = Pos> + '_ {
        self.positions.iter().copied()
    }

    pub fn as_slice(&self) -> &[Pos] {
        &self.positions
    }

    pub fn contains(&self, pos: Pos) -> bool {
        self.positions.contains(&pos)
    }

    /// Slot of `pos` in iteration order.
    pub fn slot_of(&self, pos: Pos) -> Option<usize> {
        self.positions.iter().position(|&p| p == pos)
    }

    pub fn add(&mut self, pos: Pos) {
        self.positions.push(pos);
    }

    /// Put `pos` back at a slot previously returned by [`PieceSet::remove`].
    pub fn insert_at(&mut self, slot: usize, pos: Pos) {
        let slot = slot.min(self.positions.len());
        self.positions.insert(slot, pos);
    }

    /// Remove `pos`, returning the slot it occupied.
    pub fn remove(&mut self, pos: Pos) -> Option<usize> {
        let slot = self.slot_of(pos)?;
        self.positions.remove(slot);
        Some(slot)
    }

    /// Replace `from` with `to` in place, keeping its slot.
    /// Returns `false` if `from` is not in the set.
    pub fn relocate(&mut self, from: Pos, to: Pos) -> bool {
        match self.slot_of(from) {
            Some(slot) => {
                self.positions[slot] = to;
                true
            }
            None => false,
        }
    }

    /// First position present in both sets, if any.
    pub fn intersection_with(&self, other: &PieceSet) -> Option<Pos> {
        let mine: HashSet<Pos> = self.positions.iter().copied().collect();
        other.iter().find(|p| mine.contains(p))
    }

    pub fn intersects(&self, other: &PieceSet) -> bool {
        self.intersection_with(other).is_some()
    }
}
