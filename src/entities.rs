//! Game entity types and their per-tick motion rules.
//!
//! Entities never reference each other or any presentation resource; all
//! randomness comes through an injected `Rng`.

use rand::Rng;

use crate::collision::{Point, Rect};
use crate::consts::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameStatus {
    Playing,
    GameOver,
}

/// Sound cues queued by the simulation for the presentation layer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AudioCue {
    /// Player fired.
    Laser,
    /// A player bullet destroyed an obstacle.
    Explode,
    /// The player was hit.
    Lose,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

pub const WHITE: Rgb = Rgb(255, 255, 255);

pub const STAR_COLORS: [Rgb; 3] = [Rgb(255, 255, 255), Rgb(200, 200, 255), Rgb(255, 200, 200)];

pub const PLANET_COLORS: [Rgb; 4] = [
    Rgb(180, 180, 255),
    Rgb(255, 180, 180),
    Rgb(180, 255, 180),
    Rgb(200, 200, 100),
];

fn pick<T: Copy>(rng: &mut impl Rng, items: &[T]) -> T {
    items[rng.gen_range(0..items.len())]
}

// ── Background ────────────────────────────────────────────────────────────────

#[derive(Clone, Debug)]
pub struct Star {
    pub rect: Rect,
    pub color: Rgb,
    pub speed: i32,
}

impl Star {
    pub fn spawn(rng: &mut impl Rng) -> Self {
        let size = rng.gen_range(1..=3);
        Star {
            rect: Rect::new(
                rng.gen_range(0..=WORLD_WIDTH),
                rng.gen_range(0..=WORLD_HEIGHT),
                size,
                size,
            ),
            color: pick(rng, &STAR_COLORS),
            speed: rng.gen_range(1..=3),
        }
    }

    /// Drift down; once below the bottom edge, reappear at the top.
    pub fn advance(&mut self, rng: &mut impl Rng) {
        self.rect.y += self.speed;
        if self.rect.y > WORLD_HEIGHT {
            self.rect.y = 0;
            self.rect.x = rng.gen_range(0..=WORLD_WIDTH);
        }
    }
}

/// A slow, translucent disc drifting behind everything else.
#[derive(Clone, Debug)]
pub struct Planet {
    /// Centre column in world pixels.
    pub x: i32,
    /// Centre row; fractional because planets move less than a pixel per tick.
    pub y: f32,
    pub radius: i32,
    pub color: Rgb,
    /// Opacity, 0 (invisible) ..= 255 (solid).
    pub alpha: u8,
    pub speed: f32,
}

impl Planet {
    pub fn spawn(rng: &mut impl Rng) -> Self {
        Planet {
            x: rng.gen_range(0..=WORLD_WIDTH),
            y: rng.gen_range(-WORLD_HEIGHT..=0) as f32,
            radius: rng.gen_range(30..=60),
            color: pick(rng, &PLANET_COLORS),
            alpha: rng.gen_range(100..=180),
            speed: rng.gen_range(0.1..0.4),
        }
    }

    /// Drift down; once fully below the bottom edge, restart above the top.
    pub fn advance(&mut self, rng: &mut impl Rng) {
        self.y += self.speed;
        if self.y - self.radius as f32 > WORLD_HEIGHT as f32 {
            self.y = -(self.radius as f32) * 2.0;
            self.x = rng.gen_range(0..=WORLD_WIDTH);
        }
    }
}

// ── Projectiles ───────────────────────────────────────────────────────────────

#[derive(Clone, Debug)]
pub struct Bullet {
    pub rect: Rect,
    pub color: Rgb,
    /// Pixels per tick; negative travels up.
    pub velocity: i32,
}

impl Bullet {
    /// A shot whose top edge is centred on (`x`, `y`).
    pub fn new(x: i32, y: i32, velocity: i32) -> Self {
        Bullet {
            rect: Rect::new(x - BULLET_WIDTH / 2, y, BULLET_WIDTH, BULLET_HEIGHT),
            color: WHITE,
            velocity,
        }
    }

    pub fn player(x: i32, y: i32) -> Self {
        Self::new(x, y, PLAYER_BULLET_SPEED)
    }

    pub fn enemy(x: i32, y: i32) -> Self {
        Self::new(x, y, ENEMY_BULLET_SPEED)
    }

    pub fn advance(&mut self) {
        self.rect.y += self.velocity;
    }
}

// ── Obstacles ─────────────────────────────────────────────────────────────────

#[derive(Clone, Debug)]
pub struct Meteorite {
    pub rect: Rect,
}

impl Meteorite {
    pub fn spawn(rng: &mut impl Rng) -> Self {
        let center = Point::new(
            rng.gen_range(0..=WORLD_WIDTH - METEORITE_SIZE),
            rng.gen_range(0..=WORLD_HEIGHT - 300),
        );
        Meteorite {
            rect: Rect::centered(center, METEORITE_SIZE, METEORITE_SIZE),
        }
    }

    /// Per-tick hook. Meteorites hang still for now.
    pub fn update(&mut self) {}
}

#[derive(Clone, Debug)]
pub struct Enemy {
    pub rect: Rect,
    /// Downward pixels per tick.
    pub speed: i32,
    pub bullets: Vec<Bullet>,
    /// Ticks until the next shot.
    pub shoot_timer: i32,
}

impl Enemy {
    /// A fresh enemy just above the top edge.
    pub fn spawn(rng: &mut impl Rng) -> Self {
        let center = Point::new(rng.gen_range(0..=WORLD_WIDTH - ENEMY_SIZE), -ENEMY_SIZE);
        Enemy {
            rect: Rect::centered(center, ENEMY_SIZE, ENEMY_SIZE),
            speed: rng.gen_range(ENEMY_MIN_SPEED..=ENEMY_MAX_SPEED),
            bullets: Vec::new(),
            shoot_timer: rng.gen_range(ENEMY_SHOOT_MIN..=ENEMY_SHOOT_MAX),
        }
    }

    /// Move down, count down to the next shot, and move owned bullets.
    ///
    /// Leaving the screen is not handled here: the simulation decides when an
    /// enemy is gone so that replacement stays in one place.
    pub fn advance(&mut self, rng: &mut impl Rng) {
        self.rect.y += self.speed;

        self.shoot_timer -= 1;
        if self.shoot_timer <= 0 {
            self.bullets
                .push(Bullet::enemy(self.rect.center_x(), self.rect.bottom()));
            self.shoot_timer = rng.gen_range(ENEMY_SHOOT_MIN..=ENEMY_SHOOT_MAX);
        }

        for bullet in &mut self.bullets {
            bullet.advance();
        }
        self.bullets.retain(|b| b.rect.top() <= WORLD_HEIGHT);
    }

    /// True once the whole box is below the bottom edge.
    pub fn has_escaped(&self) -> bool {
        self.rect.top() > WORLD_HEIGHT
    }
}

// ── Player ────────────────────────────────────────────────────────────────────

#[derive(Clone, Debug)]
pub struct Player {
    pub rect: Rect,
    pub bullets: Vec<Bullet>,
}

impl Default for Player {
    fn default() -> Self {
        Self::new()
    }
}

impl Player {
    pub fn new() -> Self {
        Player {
            rect: Rect::centered(
                Point::new(PLAYER_START_X, PLAYER_START_Y),
                PLAYER_SIZE,
                PLAYER_SIZE,
            ),
            bullets: Vec::new(),
        }
    }

    /// Centre the ship on the pointer. Not clamped: the ship may leave the
    /// screen along with the pointer.
    pub fn set_position(&mut self, pointer: Point) {
        self.rect.set_center(pointer);
    }

    /// Launch one bullet from the nose of the ship. No cooldown; the caller
    /// decides how often this runs.
    pub fn fire(&mut self, cues: &mut Vec<AudioCue>) {
        self.bullets
            .push(Bullet::player(self.rect.center_x(), self.rect.top()));
        cues.push(AudioCue::Laser);
    }

    /// Move every bullet and drop those that reached the top edge.
    pub fn advance_bullets(&mut self) {
        for bullet in &mut self.bullets {
            bullet.advance();
        }
        self.bullets.retain(|b| b.rect.top() > 0);
    }
}
