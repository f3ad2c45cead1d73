use std::collections::HashMap;
use std::path::PathBuf;
use std::time::Duration;

use pixel_blaster::config::*;
use pixel_blaster::consts::FPS;

fn vars_from(pairs: &[(&str, &str)]) -> HashMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

fn config_from(pairs: &[(&str, &str)]) -> AppConfig {
    let vars = vars_from(pairs);
    AppConfig::from_lookup(|key| vars.get(key).cloned())
}

fn log_file_from(pairs: &[(&str, &str)]) -> PathBuf {
    let vars = vars_from(pairs);
    log_file_from_lookup(|key| vars.get(key).cloned())
}

#[test]
fn empty_environment_gives_defaults() {
    assert_eq!(config_from(&[]), AppConfig::default());
    assert_eq!(AppConfig::default().fps, FPS);
    assert_eq!(AppConfig::default().seed, None);
}

#[test]
fn values_are_read_from_the_environment() {
    let config = config_from(&[
        (ENV_FPS, "30"),
        (ENV_ASSETS, "/opt/blaster/assets"),
        (ENV_SEED, "1234"),
    ]);
    assert_eq!(config.fps, 30);
    assert_eq!(config.asset_dir, PathBuf::from("/opt/blaster/assets"));
    assert_eq!(config.seed, Some(1234));
}

#[test]
fn bad_values_fall_back_to_defaults() {
    for fps in ["0", "999", "fast", "-5"] {
        assert_eq!(config_from(&[(ENV_FPS, fps)]).fps, FPS);
    }
    assert_eq!(config_from(&[(ENV_SEED, "abc")]).seed, None);
    assert_eq!(
        config_from(&[(ENV_ASSETS, "  ")]).asset_dir,
        PathBuf::from(DEFAULT_ASSET_DIR)
    );
}

#[test]
fn frame_duration_follows_fps() {
    let config = config_from(&[(ENV_FPS, "50")]);
    assert_eq!(config.frame_duration(), Duration::from_millis(20));
}

#[test]
fn log_file_is_read_separately() {
    assert_eq!(log_file_from(&[]), PathBuf::from(DEFAULT_LOG_FILE));
    assert_eq!(
        log_file_from(&[(ENV_LOG, "/tmp/blaster.log")]),
        PathBuf::from("/tmp/blaster.log")
    );
    assert_eq!(log_file_from(&[(ENV_LOG, "")]), PathBuf::from(DEFAULT_LOG_FILE));
    // The game configuration does not care about the log file.
    assert_eq!(config_from(&[(ENV_LOG, "/tmp/blaster.log")]), AppConfig::default());
}
