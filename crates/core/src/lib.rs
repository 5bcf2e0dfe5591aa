//! Core game logic module - pure, deterministic, and testable
//!
//! This crate contains the board rules, state management and notification wiring.
//! It has **no dependencies** on rendering, input devices, timers or networking, making it:
//!
//! - **Deterministic**: Same seed and same pairs produce identical games
//! - **Testable**: Every rule is reachable through a plain method call
//! - **Portable**: Any presentation layer can drive it (terminal, GUI, headless bots)
//!
//! # Module Structure
//!
//! - [`grid`]: flat-buffer board with gravity, row rise and out-zone checks
//! - [`pair`]: merge/subtract rules and side-effect-free pair previews
//! - [`engine`]: [`GridEngine`], the session state machine
//! - [`events`]: per-engine subscriber lists for score, board and game-over notifications
//! - [`rng`]: seeded LCG and the tile value source
//! - [`snapshot`]: detached, serializable copies of engine state
//! - [`config`]: construction-time settings and validation
//!
//! # Game Rules
//!
//! - Pick two edge-adjacent tiles in the play zone.
//! - Equal tiles **merge**: both clear, score `+2v`.
//! - Unequal tiles **subtract**: the larger becomes the difference, the smaller clears, score
//!   `+diff`.
//! - Tiles fall to fill gaps (per column, order preserved). The out zone never falls.
//! - Every `rise_interval` moves all rows shift up and a fresh row enters at the bottom.
//! - Any tile in the out zone ends the game.
//!
//! # Example
//!
//! ```
//! use tile_rise_core::{EngineConfig, GridEngine};
//! use tile_rise_types::Coord;
//!
//! let config = EngineConfig {
//!     min_value: 3,
//!     max_value: 3,
//!     ..EngineConfig::seeded(12345)
//! };
//! let mut engine = GridEngine::new(config).unwrap();
//!
//! // Two equal tiles merge and clear
//! assert!(engine.try_resolve_pair(Coord::new(0, 0), Coord::new(1, 0)));
//! assert_eq!(engine.score(), 6);
//!
//! // Diagonal pairs are rejected and change nothing
//! assert!(!engine.try_resolve_pair(Coord::new(2, 0), Coord::new(3, 1)));
//! assert_eq!(engine.moves(), 1);
//! ```
//!
//! # Threading
//!
//! The engine is synchronous and takes `&mut self` for every mutation. Notifications run
//! inline before the mutating call returns. Handlers are `Send`, so a multi-threaded host can
//! put the whole engine behind one `Mutex`.

pub mod config;
pub mod engine;
pub mod events;
pub mod grid;
pub mod pair;
pub mod rng;
pub mod snapshot;

pub use tile_rise_types as types;

// Re-export commonly used types for convenience
pub use config::{ConfigError, EngineConfig};
pub use engine::GridEngine;
pub use events::SubscriptionId;
pub use grid::Grid;
pub use pair::{pair_score, PairKind, PairPreview};
pub use rng::{SeedMode, SimpleRng, ValueSource};
pub use snapshot::{GameSnapshot, SnapshotError};
