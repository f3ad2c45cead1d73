//! Sprites and sound clips, resolved by name once at startup.
//!
//! Every asset is required. A missing or malformed file stops the launch with
//! `GameError::ResourceUnavailable`; nothing is silently replaced.

use std::fs;
use std::path::{Path, PathBuf};

use crate::entities::AudioCue;
use crate::error::GameError;

pub const SPRITE_EXT: &str = "txt";
pub const SOUND_EXT: &str = "snd";

/// Most bell pulses a single clip may ask for.
pub const MAX_PULSES: u8 = 5;

/// Character art drawn centred on an entity.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Sprite {
    pub lines: Vec<String>,
}

impl Sprite {
    pub fn width(&self) -> usize {
        self.lines
            .iter()
            .map(|l| l.chars().count())
            .max()
            .unwrap_or(0)
    }

    pub fn height(&self) -> usize {
        self.lines.len()
    }
}

/// A terminal sound: a number of bell pulses.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SoundClip {
    pub pulses: u8,
}

#[derive(Clone, Debug)]
pub struct Assets {
    pub player: Sprite,
    pub meteorite: Sprite,
    pub enemy: Sprite,
    pub laser: SoundClip,
    pub explode: SoundClip,
    pub lose: SoundClip,
}

impl Assets {
    pub fn load(dir: &Path) -> Result<Self, GameError> {
        let assets = Assets {
            player: load_sprite(dir, "player")?,
            meteorite: load_sprite(dir, "meteorite")?,
            enemy: load_sprite(dir, "enemy")?,
            laser: load_sound(dir, "laser")?,
            explode: load_sound(dir, "explode")?,
            lose: load_sound(dir, "lose")?,
        };
        log::info!("assets loaded from {}", dir.display());
        Ok(assets)
    }

    pub fn sound(&self, cue: AudioCue) -> SoundClip {
        match cue {
            AudioCue::Laser => self.laser,
            AudioCue::Explode => self.explode,
            AudioCue::Lose => self.lose,
        }
    }
}

fn asset_path(dir: &Path, name: &str, ext: &str) -> PathBuf {
    dir.join(format!("{name}.{ext}"))
}

fn read_asset(name: &str, path: &Path) -> Result<String, GameError> {
    fs::read_to_string(path)
        .map_err(|e| GameError::unavailable(name, path.to_path_buf(), e.to_string()))
}

pub fn load_sprite(dir: &Path, name: &str) -> Result<Sprite, GameError> {
    let path = asset_path(dir, name, SPRITE_EXT);
    let text = read_asset(name, &path)?;

    let mut lines: Vec<String> = text.lines().map(|l| l.trim_end().to_string()).collect();
    while lines.last().is_some_and(|l| l.is_empty()) {
        lines.pop();
    }
    if lines.iter().all(|l| l.trim().is_empty()) {
        return Err(GameError::unavailable(name, path, "sprite is empty"));
    }
    Ok(Sprite { lines })
}

pub fn load_sound(dir: &Path, name: &str) -> Result<SoundClip, GameError> {
    let path = asset_path(dir, name, SOUND_EXT);
    let text = read_asset(name, &path)?;

    match text.trim().parse::<u8>() {
        Ok(pulses) if (1..=MAX_PULSES).contains(&pulses) => Ok(SoundClip { pulses }),
        _ => Err(GameError::unavailable(
            name,
            path,
            format!("expected a pulse count in 1..={MAX_PULSES}, found {:?}", text.trim()),
        )),
    }
}
