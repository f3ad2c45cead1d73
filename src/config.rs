//! Runtime configuration read from the environment.
//!
//! Only presentation and bootstrap knobs live here; gameplay constants are
//! fixed in `consts`.

use std::env;
use std::path::PathBuf;
use std::time::Duration;

use crate::consts::FPS;

pub const ENV_FPS: &str = "PIXEL_BLASTER_FPS";
pub const ENV_ASSETS: &str = "PIXEL_BLASTER_ASSETS";
pub const ENV_LOG: &str = "PIXEL_BLASTER_LOG";
pub const ENV_SEED: &str = "PIXEL_BLASTER_SEED";

pub const DEFAULT_ASSET_DIR: &str = "assets";
pub const DEFAULT_LOG_FILE: &str = "pixel_blaster.log";
pub const MAX_FPS: u32 = 240;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppConfig {
    /// Ticks (and frames) per second.
    pub fps: u32,
    /// Directory holding sprites and sound clips.
    pub asset_dir: PathBuf,
    /// Fixed RNG seed for a reproducible run.
    pub seed: Option<u64>,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            fps: FPS,
            asset_dir: PathBuf::from(DEFAULT_ASSET_DIR),
            seed: None,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from an arbitrary key lookup. Bad values fall back to defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let fps = match lookup(ENV_FPS) {
            None => defaults.fps,
            Some(raw) => match raw.trim().parse::<u32>() {
                Ok(fps) if (1..=MAX_FPS).contains(&fps) => fps,
                _ => {
                    log::warn!(
                        "{}={:?} is not in 1..={}; using {}",
                        ENV_FPS,
                        raw,
                        MAX_FPS,
                        defaults.fps
                    );
                    defaults.fps
                }
            },
        };

        let seed = lookup(ENV_SEED).and_then(|raw| match raw.trim().parse::<u64>() {
            Ok(seed) => Some(seed),
            Err(_) => {
                log::warn!("{}={:?} is not a u64; using a random seed", ENV_SEED, raw);
                None
            }
        });

        AppConfig {
            fps,
            asset_dir: non_empty(lookup(ENV_ASSETS)).unwrap_or(defaults.asset_dir),
            seed,
        }
    }

    /// Length of one tick.
    pub fn frame_duration(&self) -> Duration {
        Duration::from_secs(1) / self.fps.max(1)
    }
}

/// Log file location. Read on its own, before `AppConfig`, so that the
/// configuration warnings land in the log.
pub fn log_file_from_env() -> PathBuf {
    log_file_from_lookup(|key| env::var(key).ok())
}

pub fn log_file_from_lookup(lookup: impl Fn(&str) -> Option<String>) -> PathBuf {
    non_empty(lookup(ENV_LOG)).unwrap_or_else(|| PathBuf::from(DEFAULT_LOG_FILE))
}

fn non_empty(value: Option<String>) -> Option<PathBuf> {
    value.filter(|v| !v.trim().is_empty()).map(PathBuf::from)
}
