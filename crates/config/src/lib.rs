//! Configuration loading from tile-rise.toml.
//!
//! # Configuration Priority
//!
//! Settings are loaded with the following priority (highest to lowest):
//! 1. Environment variables (`TILE_RISE_<KEY>`)
//! 2. tile-rise.toml
//! 3. Built-in defaults
//!
//! # Example file
//!
//! ```toml
//! width = 5
//! height = 9
//! out_zone_rows = 1
//! initial_filled_rows = 4
//! min_value = 1
//! max_value = 20
//! rise_interval = 5
//! use_fixed_seed = true
//! seed = 12345
//! ```
//!
//! # Environment Variable Override Pattern
//!
//! ```text
//! TILE_RISE_<KEY>=value
//!
//! Examples:
//!     TILE_RISE_WIDTH=6
//!     TILE_RISE_RISE_INTERVAL=3
//!     TILE_RISE_USE_FIXED_SEED=1
//!     TILE_RISE_SEED=42
//! ```

mod loader;

pub use loader::{
    apply_env_overrides, apply_overrides_from, load_config, load_from_path, parse_config,
    CONFIG_PATH_VAR, CONFIG_SEARCH_PATHS,
};
pub use tile_rise_core::EngineConfig;

#[cfg(test)]
mod tests;
