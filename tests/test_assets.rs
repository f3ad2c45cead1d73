use std::fs;
use std::path::Path;

use pixel_blaster::assets::{load_sound, load_sprite, Assets, SoundClip};
use pixel_blaster::entities::AudioCue;
use pixel_blaster::GameError;

use tempfile::tempdir;

fn write_full_set(dir: &Path) {
    fs::write(dir.join("player.txt"), " ^\n/A\\\n\n").unwrap();
    fs::write(dir.join("meteorite.txt"), "(o)\n").unwrap();
    fs::write(dir.join("enemy.txt"), "\\V/\n").unwrap();
    fs::write(dir.join("laser.snd"), "1\n").unwrap();
    fs::write(dir.join("explode.snd"), "2").unwrap();
    fs::write(dir.join("lose.snd"), " 3 ").unwrap();
}

fn unavailable_name(err: GameError) -> String {
    match err {
        GameError::ResourceUnavailable { name, .. } => name,
        other => panic!("expected ResourceUnavailable, got {other:?}"),
    }
}

#[test]
fn loads_a_complete_asset_directory() {
    let dir = tempdir().unwrap();
    write_full_set(dir.path());

    let assets = Assets::load(dir.path()).unwrap();

    assert_eq!(assets.player.lines, vec![" ^", "/A\\"]);
    assert_eq!(assets.player.width(), 3);
    assert_eq!(assets.player.height(), 2);
    assert_eq!(assets.sound(AudioCue::Laser), SoundClip { pulses: 1 });
    assert_eq!(assets.sound(AudioCue::Explode), SoundClip { pulses: 2 });
    assert_eq!(assets.sound(AudioCue::Lose), SoundClip { pulses: 3 });
}

#[test]
fn shipped_assets_load() {
    let dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("assets");
    assert!(Assets::load(&dir).is_ok());
}

#[test]
fn missing_asset_is_fatal() {
    let dir = tempdir().unwrap();
    write_full_set(dir.path());
    fs::remove_file(dir.path().join("enemy.txt")).unwrap();

    let err = Assets::load(dir.path()).unwrap_err();
    assert_eq!(unavailable_name(err), "enemy");
}

#[test]
fn missing_directory_is_fatal() {
    let dir = tempdir().unwrap();
    let err = Assets::load(&dir.path().join("nope")).unwrap_err();
    assert_eq!(unavailable_name(err), "player");
}

#[test]
fn blank_sprite_is_rejected() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("player.txt"), "   \n\n").unwrap();
    let err = load_sprite(dir.path(), "player").unwrap_err();
    assert!(err.to_string().contains("sprite is empty"));
}

#[test]
fn malformed_sounds_are_rejected() {
    let dir = tempdir().unwrap();
    for bad in ["loud", "0", "6", ""] {
        fs::write(dir.path().join("laser.snd"), bad).unwrap();
        let err = load_sound(dir.path(), "laser").unwrap_err();
        assert_eq!(unavailable_name(err), "laser");
    }
}
