//! The simulation state machine.
//!
//! `Game` owns every entity collection plus score, level and status, and
//! advances them one fixed tick at a time. It never touches the terminal:
//! sounds leave as queued `AudioCue`s and the display reads state by
//! reference.

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::collision::{Point, Rect};
use crate::consts::*;
use crate::entities::{AudioCue, Enemy, GameStatus, Meteorite, Planet, Player, Star};
use crate::input::InputFrame;

#[derive(Debug)]
pub struct Game {
    pub player: Player,
    pub meteorites: Vec<Meteorite>,
    pub enemies: Vec<Enemy>,
    pub stars: Vec<Star>,
    pub planets: Vec<Planet>,
    pub score: u32,
    pub level: u32,
    pub status: GameStatus,
    running: bool,
    cues: Vec<AudioCue>,
    rng: StdRng,
}

impl Game {
    /// A fresh round driven by a seeded RNG.
    pub fn new(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    pub fn with_rng(rng: StdRng) -> Self {
        let mut game = Game {
            player: Player::new(),
            meteorites: Vec::new(),
            enemies: Vec::new(),
            stars: Vec::new(),
            planets: Vec::new(),
            score: 0,
            level: 1,
            status: GameStatus::Playing,
            running: true,
            cues: Vec::new(),
            rng,
        };
        game.reset();
        game
    }

    /// Rebuild every collection and counter as on construction. The RNG
    /// stream carries on, so the new round gets a new layout.
    pub fn reset(&mut self) {
        let rng = &mut self.rng;
        self.player = Player::new();
        self.meteorites = (0..INITIAL_METEORITES).map(|_| Meteorite::spawn(rng)).collect();
        self.enemies = (0..INITIAL_ENEMIES).map(|_| Enemy::spawn(rng)).collect();
        self.stars = (0..STAR_COUNT).map(|_| Star::spawn(rng)).collect();
        self.planets = (0..PLANET_COUNT).map(|_| Planet::spawn(rng)).collect();
        self.score = 0;
        self.level = 1;
        self.status = GameStatus::Playing;
        self.cues.clear();
        log::info!(
            "new round: {} meteorites, {} enemies",
            self.meteorites.len(),
            self.enemies.len()
        );
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Ask the loop driver to stop after the current iteration.
    pub fn quit(&mut self) {
        self.running = false;
    }

    /// Take the cues queued since the last call.
    pub fn drain_cues(&mut self) -> Vec<AudioCue> {
        std::mem::take(&mut self.cues)
    }

    /// Fire one player bullet. Ignored once the round is lost.
    pub fn fire(&mut self) {
        if self.status == GameStatus::Playing {
            self.player.fire(&mut self.cues);
        }
    }

    /// Start over after a loss. Returns `false` (and changes nothing) while
    /// the round is still being played.
    pub fn restart(&mut self) -> bool {
        if self.status != GameStatus::GameOver {
            log::debug!("restart ignored: round still in progress");
            return false;
        }
        self.reset();
        true
    }

    /// Apply one loop iteration's input: quit, fire, restart, then tick.
    pub fn step(&mut self, input: &InputFrame) {
        if input.quit {
            self.quit();
        }
        if input.fire {
            self.fire();
        }
        if input.restart {
            self.restart();
        }
        if self.status == GameStatus::Playing {
            self.update(input.pointer);
        }
    }

    /// One `Lose` cue per lethal collision; the round ends on the first.
    fn lose(&mut self) {
        if self.status == GameStatus::Playing {
            log::info!("game over: score {}, level {}", self.score, self.level);
        }
        self.cues.push(AudioCue::Lose);
        self.status = GameStatus::GameOver;
    }

    /// Index of the first player bullet overlapping `target`.
    fn first_bullet_hitting(&self, target: &Rect) -> Option<usize> {
        self.player
            .bullets
            .iter()
            .position(|b| b.rect.intersects(target))
    }

    // ── Per-tick update ──────────────────────────────────────────────────────

    /// Advance the simulation by one tick. Does nothing after a loss.
    pub fn update(&mut self, pointer: Point) {
        if self.status == GameStatus::GameOver {
            return;
        }

        // ── 1. Player ────────────────────────────────────────────────────────
        self.player.set_position(pointer);
        self.player.advance_bullets();

        // ── 2. Background ────────────────────────────────────────────────────
        for star in &mut self.stars {
            star.advance(&mut self.rng);
        }
        for planet in &mut self.planets {
            planet.advance(&mut self.rng);
        }

        // ── 3. Meteorites ────────────────────────────────────────────────────
        self.update_meteorites();

        // ── 4. Enemies ───────────────────────────────────────────────────────
        self.update_enemies();

        // ── 5. Leveling ──────────────────────────────────────────────────────
        while self.score >= self.level * KILLS_TO_LEVEL_UP {
            self.level += 1;
            let meteorite = Meteorite::spawn(&mut self.rng);
            self.meteorites.push(meteorite);
            let enemy = Enemy::spawn(&mut self.rng);
            self.enemies.push(enemy);
            log::info!("level up: {} (score {})", self.level, self.score);
        }
    }

    /// Snapshot pass over the meteorites. Destroyed ones are dropped from the
    /// rebuilt list and replacements are appended after the survivors.
    fn update_meteorites(&mut self) {
        let snapshot = std::mem::take(&mut self.meteorites);
        let mut survivors = Vec::with_capacity(snapshot.len());
        let mut destroyed = 0;

        for mut meteorite in snapshot {
            meteorite.update();

            if meteorite.rect.intersects(&self.player.rect) {
                self.lose();
                survivors.push(meteorite);
                continue;
            }

            if let Some(hit) = self.first_bullet_hitting(&meteorite.rect) {
                self.cues.push(AudioCue::Explode);
                self.player.bullets.remove(hit);
                self.score += METEORITE_SCORE;
                destroyed += 1;
                continue;
            }

            survivors.push(meteorite);
        }

        for _ in 0..destroyed {
            survivors.push(Meteorite::spawn(&mut self.rng));
        }
        self.meteorites = survivors;
    }

    /// Snapshot pass over the enemies. Escaped and destroyed enemies are
    /// replaced; only destroyed ones score.
    fn update_enemies(&mut self) {
        let snapshot = std::mem::take(&mut self.enemies);
        let mut survivors = Vec::with_capacity(snapshot.len());
        let mut replaced = 0;

        for mut enemy in snapshot {
            enemy.advance(&mut self.rng);

            if enemy.has_escaped() {
                log::debug!("enemy escaped at x={}", enemy.rect.x);
                replaced += 1;
                continue;
            }

            if enemy.rect.intersects(&self.player.rect) {
                self.lose();
            }
            if enemy
                .bullets
                .iter()
                .any(|b| b.rect.intersects(&self.player.rect))
            {
                self.lose();
            }

            if let Some(hit) = self.first_bullet_hitting(&enemy.rect) {
                self.cues.push(AudioCue::Explode);
                self.player.bullets.remove(hit);
                self.score += ENEMY_SCORE;
                replaced += 1;
                continue;
            }

            survivors.push(enemy);
        }

        for _ in 0..replaced {
            survivors.push(Enemy::spawn(&mut self.rng));
        }
        self.enemies = survivors;
    }
}
