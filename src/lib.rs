//! Pixel Blaster - a top-down arcade shooter for the terminal.
//!
//! Library modules:
//! - `entities`: game entity types and their per-tick motion rules
//! - `collision`: axis-aligned box intersection
//! - `compute`: the simulation state machine (`Game`)
//! - `input`: terminal events to edge-triggered input frames
//! - `viewport`: world pixels <-> terminal cells
//! - `assets`: sprites and sound clips resolved at startup
//! - `config`: runtime configuration from the environment

pub mod assets;
pub mod collision;
pub mod compute;
pub mod config;
pub mod entities;
pub mod error;
pub mod input;
pub mod viewport;

pub use compute::Game;
pub use error::GameError;

/// World constants. Difficulty is fixed; only the leveling formula scales it.
pub mod consts {
    /// World size in pixels
    pub const WORLD_WIDTH: i32 = 600;
    pub const WORLD_HEIGHT: i32 = 800;

    /// Default fixed tick rate
    pub const FPS: u32 = 60;

    /// Background population
    pub const STAR_COUNT: usize = 100;
    pub const PLANET_COUNT: usize = 3;

    /// Obstacle population floors at level 1
    pub const INITIAL_METEORITES: usize = 5;
    pub const INITIAL_ENEMIES: usize = 3;

    /// Score needed per level: level N ends at N * KILLS_TO_LEVEL_UP
    pub const KILLS_TO_LEVEL_UP: u32 = 10;
    pub const METEORITE_SCORE: u32 = 1;
    pub const ENEMY_SCORE: u32 = 2;

    /// Player ship
    pub const PLAYER_SIZE: i32 = 40;
    pub const PLAYER_START_X: i32 = WORLD_WIDTH / 2;
    pub const PLAYER_START_Y: i32 = WORLD_HEIGHT - 60;

    /// Projectiles
    pub const BULLET_WIDTH: i32 = 4;
    pub const BULLET_HEIGHT: i32 = 10;
    pub const PLAYER_BULLET_SPEED: i32 = -10;
    pub const ENEMY_BULLET_SPEED: i32 = 5;

    /// Obstacles
    pub const METEORITE_SIZE: i32 = 50;
    pub const ENEMY_SIZE: i32 = 50;
    pub const ENEMY_MIN_SPEED: i32 = 2;
    pub const ENEMY_MAX_SPEED: i32 = 4;
    pub const ENEMY_SHOOT_MIN: i32 = 60;
    pub const ENEMY_SHOOT_MAX: i32 = 120;
}
