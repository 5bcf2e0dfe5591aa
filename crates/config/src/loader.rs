//! Configuration loading logic.
//!
//! Handles loading config from files and applying environment variable overrides.

use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use tile_rise_core::EngineConfig;

/// Standard locations to search for tile-rise.toml
pub const CONFIG_SEARCH_PATHS: &[&str] = &[
    "tile-rise.toml",    // Current directory
    "../tile-rise.toml", // Parent directory (when running from a subdirectory)
];

/// Environment variable naming an explicit config file
pub const CONFIG_PATH_VAR: &str = "TILE_RISE_CONFIG";

/// Load the engine configuration.
///
/// Searches in the following order:
/// 1. Path specified by the TILE_RISE_CONFIG environment variable
/// 2. Current directory (tile-rise.toml)
/// 3. Parent directory (../tile-rise.toml)
///
/// After loading, environment variable overrides are applied.
pub fn load_config() -> EngineConfig {
    if let Ok(path) = std::env::var(CONFIG_PATH_VAR) {
        let path = PathBuf::from(&path);
        if path.exists() {
            info!("Loading config from {}: {}", CONFIG_PATH_VAR, path.display());
            return load_from_path(&path);
        }
        warn!(
            "{}={} not found, searching defaults",
            CONFIG_PATH_VAR,
            path.display()
        );
    }

    for path_str in CONFIG_SEARCH_PATHS {
        let path = Path::new(path_str);
        if path.exists() {
            info!("Loading config from {}", path.display());
            return load_from_path(path);
        }
    }

    debug!("No tile-rise.toml found, using built-in defaults");
    apply_env_overrides(EngineConfig::default())
}

/// Load configuration from a specific path, falling back to defaults if it cannot be read
/// or parsed.
pub fn load_from_path(path: &Path) -> EngineConfig {
    match std::fs::read_to_string(path) {
        Ok(content) => match parse_config(&content) {
            Ok(config) => apply_env_overrides(config),
            Err(e) => {
                warn!("Failed to parse {}: {}, using defaults", path.display(), e);
                apply_env_overrides(EngineConfig::default())
            }
        },
        Err(e) => {
            warn!("Failed to read {}: {}, using defaults", path.display(), e);
            apply_env_overrides(EngineConfig::default())
        }
    }
}

/// Parse a TOML document. Missing keys take their defaults.
pub fn parse_config(content: &str) -> Result<EngineConfig, toml::de::Error> {
    toml::from_str(content)
}

/// Macro to reduce env override boilerplate
macro_rules! env_override {
    // Parseable field (usize, u32, ...)
    ($lookup:expr, $config:expr, $field:ident, $key:expr) => {
        if let Some(raw) = $lookup($key) {
            match raw.trim().parse() {
                Ok(v) => $config.$field = v,
                Err(_) => warn!("Ignoring {}={:?}: not a valid value", $key, raw),
            }
        }
    };
    // Flag field: "1"/"true"/"yes" or "0"/"false"/"no"
    ($lookup:expr, $config:expr, $field:ident, $key:expr, flag) => {
        if let Some(raw) = $lookup($key) {
            match parse_flag(&raw) {
                Some(v) => $config.$field = v,
                None => warn!("Ignoring {}={:?}: expected true/false", $key, raw),
            }
        }
    };
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

/// Apply environment variable overrides to a configuration.
///
/// Environment variables follow the pattern: TILE_RISE_<KEY>
pub fn apply_env_overrides(config: EngineConfig) -> EngineConfig {
    apply_overrides_from(config, |key| std::env::var(key).ok())
}

/// Apply overrides read through `lookup` instead of the process environment.
pub fn apply_overrides_from(
    mut config: EngineConfig,
    lookup: impl Fn(&str) -> Option<String>,
) -> EngineConfig {
    env_override!(lookup, config, width, "TILE_RISE_WIDTH");
    env_override!(lookup, config, height, "TILE_RISE_HEIGHT");
    env_override!(lookup, config, out_zone_rows, "TILE_RISE_OUT_ZONE_ROWS");
    env_override!(
        lookup,
        config,
        initial_filled_rows,
        "TILE_RISE_INITIAL_FILLED_ROWS"
    );
    env_override!(lookup, config, min_value, "TILE_RISE_MIN_VALUE");
    env_override!(lookup, config, max_value, "TILE_RISE_MAX_VALUE");
    env_override!(lookup, config, rise_interval, "TILE_RISE_RISE_INTERVAL");
    env_override!(lookup, config, use_fixed_seed, "TILE_RISE_USE_FIXED_SEED", flag);
    env_override!(lookup, config, seed, "TILE_RISE_SEED");
    config
}
