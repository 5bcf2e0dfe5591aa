use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::types::Cell;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SnapshotError {
    #[error("snapshot is {found_w}x{found_h}, engine grid is {expected_w}x{expected_h}")]
    DimensionMismatch {
        expected_w: usize,
        expected_h: usize,
        found_w: usize,
        found_h: usize,
    },
    #[error("snapshot has {found} out-zone rows, engine has {expected}")]
    OutZoneMismatch { expected: usize, found: usize },
    #[error("snapshot holds {found} cells, expected {expected}")]
    CellCount { expected: usize, found: usize },
    #[error("snapshot holds a zero-valued tile at index {index}")]
    ZeroTile { index: usize },
    #[error("snapshot is marked in play but its out zone holds a tile at index {index}")]
    OutZoneOccupied { index: usize },
}

/// Detached copy of an engine's observable state.
///
/// `cells` uses the grid layout: `x + y * width`, `y = 0` at the bottom.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub width: usize,
    pub height: usize,
    pub out_zone_rows: usize,
    pub cells: Vec<Cell>,
    pub score: u32,
    pub moves: u32,
    pub moves_until_rise: u32,
    pub game_over: bool,
    /// Increments on every new game
    pub session_id: u32,
    pub seed: u32,
}

impl GameSnapshot {
    pub fn cell(&self, x: usize, y: usize) -> Cell {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.cells.get(y * self.width + x).copied().flatten()
    }

    /// Returns false if out of bounds
    pub fn set(&mut self, x: usize, y: usize, cell: Cell) -> bool {
        if x >= self.width || y >= self.height {
            return false;
        }
        match self.cells.get_mut(y * self.width + x) {
            Some(slot) => {
                *slot = cell;
                true
            }
            None => false,
        }
    }

    pub fn playable(&self) -> bool {
        !self.game_over
    }

    /// Shape and consistency checks against an engine grid of the given dimensions.
    pub(crate) fn check_against(
        &self,
        width: usize,
        height: usize,
        out_zone_rows: usize,
    ) -> Result<(), SnapshotError> {
        if self.width != width || self.height != height {
            return Err(SnapshotError::DimensionMismatch {
                expected_w: width,
                expected_h: height,
                found_w: self.width,
                found_h: self.height,
            });
        }
        if self.out_zone_rows != out_zone_rows {
            return Err(SnapshotError::OutZoneMismatch {
                expected: out_zone_rows,
                found: self.out_zone_rows,
            });
        }
        if self.cells.len() != width * height {
            return Err(SnapshotError::CellCount {
                expected: width * height,
                found: self.cells.len(),
            });
        }
        if let Some(index) = self.cells.iter().position(|c| *c == Some(0)) {
            return Err(SnapshotError::ZeroTile { index });
        }
        if self.playable() {
            let out_zone_start = height.saturating_sub(out_zone_rows) * width;
            if let Some(offset) = self.cells[out_zone_start..].iter().position(|c| c.is_some()) {
                return Err(SnapshotError::OutZoneOccupied {
                    index: out_zone_start + offset,
                });
            }
        }
        Ok(())
    }
}
