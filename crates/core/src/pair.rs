//! Pair module - merge and subtract rules
//!
//! - **Merge**: two equal tiles `v` both clear, scoring `2v`.
//! - **Subtract**: unequal tiles; the larger becomes `|a - b|`, the smaller clears,
//!   scoring `|a - b|`.
//!
//! [`PairPreview::evaluate`] is the single place that decides whether a pair is resolvable and
//! what it does, so the engine and any "what would happen" query always agree.

use arrayvec::ArrayVec;

use crate::grid::Grid;
use crate::types::Coord;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PairKind {
    Merge,
    Subtract,
}

/// Score for combining two tile values
pub fn pair_score(a: u32, b: u32) -> u32 {
    if a == b {
        a.saturating_mul(2)
    } else {
        a.abs_diff(b)
    }
}

/// Outcome of resolving a pair, computed without touching the grid
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PairPreview {
    pub a: Coord,
    pub b: Coord,
    pub kind: PairKind,
    /// Cells that end up empty (both for a merge, the smaller tile for a subtract)
    pub cleared: ArrayVec<Coord, 2>,
    /// Cell that keeps a tile and its new value (subtract only)
    pub survivor: Option<(Coord, u32)>,
    pub score_delta: u32,
}

impl PairPreview {
    /// Returns `None` if either position is out of bounds or in the out zone, the positions
    /// are not edge-adjacent, or either cell is empty.
    pub fn evaluate(grid: &Grid, a: Coord, b: Coord) -> Option<Self> {
        if !grid.in_bounds(a) || !grid.in_bounds(b) {
            return None;
        }
        if !a.is_adjacent(b) {
            return None;
        }
        if grid.in_out_zone(a) || grid.in_out_zone(b) {
            return None;
        }

        let va = grid.cell(a.x, a.y)?;
        let vb = grid.cell(b.x, b.y)?;

        let mut cleared = ArrayVec::new();
        if va == vb {
            cleared.push(a);
            cleared.push(b);
            return Some(Self {
                a,
                b,
                kind: PairKind::Merge,
                cleared,
                survivor: None,
                score_delta: pair_score(va, vb),
            });
        }

        let diff = va.abs_diff(vb);
        let (winner, loser) = if va > vb { (a, b) } else { (b, a) };
        cleared.push(loser);
        Some(Self {
            a,
            b,
            kind: PairKind::Subtract,
            cleared,
            survivor: Some((winner, diff)),
            score_delta: diff,
        })
    }

    /// Write the outcome into the grid. Gravity is the caller's job.
    pub fn apply(&self, grid: &mut Grid) {
        for c in &self.cleared {
            grid.set(c.x, c.y, None);
        }
        if let Some((c, value)) = self.survivor {
            grid.set(c.x, c.y, Some(value));
        }
    }
}
