//! Engine configuration.
//!
//! Fixed at construction time. Loading from files and the environment lives in the
//! `tile-rise-config` crate; this module only defines the shape, defaults and validation.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::rng::SeedMode;
use crate::types::{
    DEFAULT_HEIGHT, DEFAULT_INITIAL_FILLED_ROWS, DEFAULT_MAX_VALUE, DEFAULT_MIN_VALUE,
    DEFAULT_OUT_ZONE_ROWS, DEFAULT_RISE_INTERVAL, DEFAULT_SEED, DEFAULT_WIDTH,
};

/// Rejected configuration
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("grid width must be at least 1")]
    ZeroWidth,
    #[error("grid height must be at least 1")]
    ZeroHeight,
    #[error("grid {width}x{height} is too large")]
    TooLarge { width: usize, height: usize },
    #[error("tile values must be positive (min_value={min}, max_value={max})")]
    NonPositiveValue { min: u32, max: u32 },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub width: usize,
    /// Total rows, out zone included
    pub height: usize,
    pub out_zone_rows: usize,
    pub initial_filled_rows: usize,
    pub min_value: u32,
    pub max_value: u32,
    /// Moves between rises; 0 never rises
    pub rise_interval: u32,
    pub use_fixed_seed: bool,
    pub seed: u32,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            out_zone_rows: DEFAULT_OUT_ZONE_ROWS,
            initial_filled_rows: DEFAULT_INITIAL_FILLED_ROWS,
            min_value: DEFAULT_MIN_VALUE,
            max_value: DEFAULT_MAX_VALUE,
            rise_interval: DEFAULT_RISE_INTERVAL,
            use_fixed_seed: false,
            seed: DEFAULT_SEED,
        }
    }
}

impl EngineConfig {
    /// Default board with a fixed seed
    pub fn seeded(seed: u32) -> Self {
        Self {
            use_fixed_seed: true,
            seed,
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width == 0 {
            return Err(ConfigError::ZeroWidth);
        }
        if self.height == 0 {
            return Err(ConfigError::ZeroHeight);
        }
        let fits_coords = self.width <= i32::MAX as usize && self.height <= i32::MAX as usize;
        if !fits_coords || self.width.checked_mul(self.height).is_none() {
            return Err(ConfigError::TooLarge {
                width: self.width,
                height: self.height,
            });
        }
        if self.min_value == 0 || self.max_value == 0 {
            return Err(ConfigError::NonPositiveValue {
                min: self.min_value,
                max: self.max_value,
            });
        }
        Ok(())
    }

    pub fn play_height(&self) -> usize {
        self.height.saturating_sub(self.out_zone_rows)
    }

    pub fn seed_mode(&self) -> SeedMode {
        if self.use_fixed_seed {
            SeedMode::Fixed(self.seed)
        } else {
            SeedMode::Entropy
        }
    }
}
