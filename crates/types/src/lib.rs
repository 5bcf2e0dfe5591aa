//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the engine.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (core logic, autoplay policies, presentation layers).
//!
//! # Board Dimensions
//!
//! The default board matches the classic layout:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `DEFAULT_WIDTH` | 5 | Columns (indexed 0-4) |
//! | `DEFAULT_HEIGHT` | 9 | Total rows including the out zone |
//! | `DEFAULT_OUT_ZONE_ROWS` | 1 | Reserved rows at the top |
//! | `DEFAULT_INITIAL_FILLED_ROWS` | 4 | Rows filled on a new game |
//! | `DEFAULT_MIN_VALUE` | 1 | Smallest generated tile |
//! | `DEFAULT_MAX_VALUE` | 20 | Largest generated tile |
//! | `DEFAULT_RISE_INTERVAL` | 5 | Moves between row rises |
//!
//! # Coordinates
//!
//! `(x, y)` with `y` increasing upward: `y = 0` is the bottom row, where fresh rows enter.
//! Coordinates are signed so that callers can hand in anything (stale clicks, neighbours of an
//! edge cell) and get a rejection instead of a panic.
//!
//! # Examples
//!
//! ```
//! use tile_rise_types::{Coord, DEFAULT_WIDTH};
//!
//! let a = Coord::new(0, 0);
//! let b = Coord::new(1, 0);
//! assert!(a.is_adjacent(b));
//! assert!(!a.is_adjacent(Coord::new(1, 1)));
//! assert_eq!(a.manhattan(Coord::new(2, 3)), 5);
//!
//! assert_eq!(DEFAULT_WIDTH, 5);
//! ```

use std::fmt;

/// Board width in cells (5 columns)
pub const DEFAULT_WIDTH: usize = 5;

/// Total board height in cells, out zone included (8 playable + 1)
pub const DEFAULT_HEIGHT: usize = 9;

/// Rows at the top of the board that end the game when occupied
pub const DEFAULT_OUT_ZONE_ROWS: usize = 1;

/// Rows of random tiles placed at the bottom on a new game
pub const DEFAULT_INITIAL_FILLED_ROWS: usize = 4;

/// Smallest tile value produced by the generator
pub const DEFAULT_MIN_VALUE: u32 = 1;

/// Largest tile value produced by the generator
pub const DEFAULT_MAX_VALUE: u32 = 20;

/// Successful moves between row rises (0 disables rising)
pub const DEFAULT_RISE_INTERVAL: u32 = 5;

/// Seed used when a fixed seed is requested without an explicit value
pub const DEFAULT_SEED: u32 = 12345;

/// A single board cell: `None` is empty, `Some(v)` is a tile with positive value `v`.
pub type Cell = Option<u32>;

/// A board position. `y = 0` is the lowest row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Coord {
    pub x: i32,
    pub y: i32,
}

impl Coord {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Manhattan distance between two positions
    pub fn manhattan(self, other: Coord) -> u32 {
        self.x.abs_diff(other.x).saturating_add(self.y.abs_diff(other.y))
    }

    /// True when the two positions share an edge (Manhattan distance exactly 1)
    pub fn is_adjacent(self, other: Coord) -> bool {
        self.manhattan(other) == 1
    }

    /// Position shifted by `(dx, dy)`; saturates instead of overflowing.
    pub fn offset(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x.saturating_add(dx),
            y: self.y.saturating_add(dy),
        }
    }

    /// The four edge-sharing neighbours: right, left, up, down.
    pub fn neighbors4(self) -> [Coord; 4] {
        [
            self.offset(1, 0),
            self.offset(-1, 0),
            self.offset(0, 1),
            self.offset(0, -1),
        ]
    }
}

impl From<(i32, i32)> for Coord {
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Session phase. The only transitions are `Playing -> GameOver` (an out-zone cell became
/// occupied) and `* -> Playing` (a new game).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Phase {
    #[default]
    Playing,
    GameOver,
}

impl Phase {
    /// Parse phase from string (case-insensitive, accepts `game_over` and `gameOver`)
    ///
    /// # Examples
    ///
    /// ```
    /// use tile_rise_types::Phase;
    ///
    /// assert_eq!(Phase::parse("playing"), Some(Phase::Playing));
    /// assert_eq!(Phase::parse("gameOver"), Some(Phase::GameOver));
    /// assert_eq!(Phase::parse("paused"), None);
    /// ```
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().replace('_', "").as_str() {
            "playing" => Some(Phase::Playing),
            "gameover" => Some(Phase::GameOver),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Phase::Playing => "playing",
            Phase::GameOver => "game_over",
        }
    }
}
