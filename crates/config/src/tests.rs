//! Tests for the configuration module.

use std::collections::HashMap;

use super::*;

fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |key: &str| map.get(key).cloned()
}

#[test]
fn test_parse_full_file() {
    let config = parse_config(
        r#"
width = 6
height = 10
out_zone_rows = 2
initial_filled_rows = 3
min_value = 2
max_value = 9
rise_interval = 3
use_fixed_seed = true
seed = 42
"#,
    )
    .unwrap();

    assert_eq!(config.width, 6);
    assert_eq!(config.height, 10);
    assert_eq!(config.out_zone_rows, 2);
    assert_eq!(config.initial_filled_rows, 3);
    assert_eq!(config.min_value, 2);
    assert_eq!(config.max_value, 9);
    assert_eq!(config.rise_interval, 3);
    assert!(config.use_fixed_seed);
    assert_eq!(config.seed, 42);
}

#[test]
fn test_parse_partial_file_keeps_defaults() {
    let config = parse_config("rise_interval = 0\n").unwrap();
    assert_eq!(config.rise_interval, 0);
    assert_eq!(config, EngineConfig {
        rise_interval: 0,
        ..EngineConfig::default()
    });
}

#[test]
fn test_parse_rejects_wrong_types() {
    assert!(parse_config("width = \"wide\"\n").is_err());
}

#[test]
fn test_overrides_apply() {
    let lookup = lookup_from(&[
        ("TILE_RISE_WIDTH", "7"),
        ("TILE_RISE_RISE_INTERVAL", "3"),
        ("TILE_RISE_USE_FIXED_SEED", "1"),
        ("TILE_RISE_SEED", " 99 "),
    ]);

    let config = apply_overrides_from(EngineConfig::default(), lookup);
    assert_eq!(config.width, 7);
    assert_eq!(config.rise_interval, 3);
    assert!(config.use_fixed_seed);
    assert_eq!(config.seed, 99);
    assert_eq!(config.height, 9);
}

#[test]
fn test_bad_overrides_are_ignored() {
    let lookup = lookup_from(&[
        ("TILE_RISE_HEIGHT", "-3"),
        ("TILE_RISE_USE_FIXED_SEED", "maybe"),
    ]);

    let config = apply_overrides_from(EngineConfig::default(), lookup);
    assert_eq!(config, EngineConfig::default());
}

#[test]
fn test_load_from_missing_path_falls_back() {
    let path = std::env::temp_dir().join("tile-rise-missing-config-does-not-exist.toml");
    let config = load_from_path(&path);
    assert_eq!(config.width, EngineConfig::default().width);
}

#[test]
fn test_load_from_path_reads_file() {
    let path = std::env::temp_dir().join(format!(
        "tile-rise-config-test-{}.toml",
        std::process::id()
    ));
    std::fs::write(&path, "width = 8\nmax_value = 12\n").unwrap();

    let config = load_from_path(&path);
    let _ = std::fs::remove_file(&path);

    assert_eq!(config.width, 8);
    assert_eq!(config.max_value, 12);
}
