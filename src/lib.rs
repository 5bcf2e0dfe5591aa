//! Tile Rise (workspace facade crate).
//!
//! Re-exports the workspace crates under one name, `tile_rise::{core,types,config,autoplay}`,
//! and hosts the argument handling of the headless `tile-rise` runner.

pub use tile_rise_autoplay as autoplay;
pub use tile_rise_config as config;
pub use tile_rise_core as core;
pub use tile_rise_types as types;

pub mod cli;
