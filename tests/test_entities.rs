use pixel_blaster::collision::{Point, Rect};
use pixel_blaster::consts::*;
use pixel_blaster::entities::*;

use rand::rngs::StdRng;
use rand::SeedableRng;

fn seeded_rng() -> StdRng {
    StdRng::seed_from_u64(42)
}

// ── Spawning ──────────────────────────────────────────────────────────────────

#[test]
fn spawned_entities_respect_their_ranges() {
    let mut rng = seeded_rng();
    for _ in 0..200 {
        let star = Star::spawn(&mut rng);
        assert!((1..=3).contains(&star.rect.w));
        assert_eq!(star.rect.w, star.rect.h);
        assert!((1..=3).contains(&star.speed));
        assert!(STAR_COLORS.contains(&star.color));

        let planet = Planet::spawn(&mut rng);
        assert!((30..=60).contains(&planet.radius));
        assert!((100..=180).contains(&planet.alpha));
        assert!(planet.speed >= 0.1 && planet.speed < 0.4);
        assert!(planet.y >= -(WORLD_HEIGHT as f32) && planet.y <= 0.0);
        assert!(PLANET_COLORS.contains(&planet.color));

        let meteorite = Meteorite::spawn(&mut rng);
        let c = meteorite.rect.center();
        assert!((0..=WORLD_WIDTH - METEORITE_SIZE).contains(&c.x));
        assert!((0..=WORLD_HEIGHT - 300).contains(&c.y));
        assert_eq!(meteorite.rect.w, METEORITE_SIZE);

        let enemy = Enemy::spawn(&mut rng);
        assert_eq!(enemy.rect.center_y(), -ENEMY_SIZE);
        assert!((ENEMY_MIN_SPEED..=ENEMY_MAX_SPEED).contains(&enemy.speed));
        assert!((ENEMY_SHOOT_MIN..=ENEMY_SHOOT_MAX).contains(&enemy.shoot_timer));
        assert!(enemy.bullets.is_empty());
    }
}

// ── Background motion ─────────────────────────────────────────────────────────

#[test]
fn star_wraps_to_top_after_leaving_bottom() {
    let mut rng = seeded_rng();
    let mut star = Star {
        rect: Rect::new(10, WORLD_HEIGHT, 1, 1),
        color: WHITE,
        speed: 1,
    };
    star.advance(&mut rng);
    assert_eq!(star.rect.y, 0);
    assert!((0..=WORLD_WIDTH).contains(&star.rect.x));
}

#[test]
fn star_on_bottom_edge_keeps_falling() {
    let mut rng = seeded_rng();
    let mut star = Star {
        rect: Rect::new(10, WORLD_HEIGHT - 1, 1, 1),
        color: WHITE,
        speed: 1,
    };
    star.advance(&mut rng);
    assert_eq!(star.rect.y, WORLD_HEIGHT);
    assert_eq!(star.rect.x, 10);
}

#[test]
fn planet_wraps_above_the_top_once_fully_gone() {
    let mut rng = seeded_rng();
    let mut planet = Planet {
        x: 100,
        y: 830.0,
        radius: 30,
        color: PLANET_COLORS[0],
        alpha: 150,
        speed: 0.5,
    };
    planet.advance(&mut rng);
    assert_eq!(planet.y, -60.0);

    planet.y = 829.0;
    planet.advance(&mut rng);
    assert_eq!(planet.y, 829.5);
}

// ── Projectiles ───────────────────────────────────────────────────────────────

#[test]
fn bullet_box_is_centred_on_its_origin() {
    let b = Bullet::player(100, 50);
    assert_eq!(b.rect, Rect::new(98, 50, BULLET_WIDTH, BULLET_HEIGHT));
    assert_eq!(b.color, WHITE);
    assert!(b.velocity < 0);
    assert!(Bullet::enemy(100, 50).velocity > 0);
}

#[test]
fn player_bullets_are_culled_without_skipping() {
    let mut player = Player::new();
    for y in [5, 10, 15, 200] {
        player.bullets.push(Bullet::player(50, y));
    }
    player.advance_bullets();
    let tops: Vec<i32> = player.bullets.iter().map(|b| b.rect.top()).collect();
    assert_eq!(tops, vec![5, 190]);
}

// ── Obstacles ─────────────────────────────────────────────────────────────────

#[test]
fn meteorite_update_is_a_no_op() {
    let mut m = Meteorite {
        rect: Rect::new(1, 2, 50, 50),
    };
    m.update();
    assert_eq!(m.rect, Rect::new(1, 2, 50, 50));
}

#[test]
fn enemy_moves_down_and_counts_down() {
    let mut rng = seeded_rng();
    let mut enemy = Enemy {
        rect: Rect::new(100, 100, 50, 50),
        speed: 3,
        bullets: Vec::new(),
        shoot_timer: 5,
    };
    enemy.advance(&mut rng);
    assert_eq!(enemy.rect.y, 103);
    assert_eq!(enemy.shoot_timer, 4);
    assert!(enemy.bullets.is_empty());
}

#[test]
fn enemy_fires_from_its_belly_when_timer_expires() {
    let mut rng = seeded_rng();
    let mut enemy = Enemy {
        rect: Rect::new(100, 100, 50, 50),
        speed: 2,
        bullets: Vec::new(),
        shoot_timer: 1,
    };
    enemy.advance(&mut rng);

    assert_eq!(enemy.bullets.len(), 1);
    let b = &enemy.bullets[0];
    assert_eq!(b.rect.center_x(), enemy.rect.center_x());
    // Spawned at the bottom edge (152), then moved with the others.
    assert_eq!(b.rect.top(), 152 + ENEMY_BULLET_SPEED);
    assert_eq!(b.velocity, ENEMY_BULLET_SPEED);
    assert!((ENEMY_SHOOT_MIN..=ENEMY_SHOOT_MAX).contains(&enemy.shoot_timer));
}

#[test]
fn enemy_bullets_below_the_screen_are_dropped() {
    let mut rng = seeded_rng();
    let mut enemy = Enemy {
        rect: Rect::new(0, 0, 50, 50),
        speed: 2,
        bullets: vec![
            Bullet::enemy(10, WORLD_HEIGHT - 2),
            Bullet::enemy(20, WORLD_HEIGHT - 5),
        ],
        shoot_timer: 100,
    };
    enemy.advance(&mut rng);
    assert_eq!(enemy.bullets.len(), 1);
    assert_eq!(enemy.bullets[0].rect.top(), WORLD_HEIGHT);
}

#[test]
fn enemy_below_screen_is_flagged_not_removed() {
    let mut rng = seeded_rng();
    let mut enemy = Enemy {
        rect: Rect::new(0, WORLD_HEIGHT, 50, 50),
        speed: 2,
        bullets: Vec::new(),
        shoot_timer: 100,
    };
    assert!(!enemy.has_escaped());
    enemy.advance(&mut rng);
    assert!(enemy.has_escaped());
}

// ── Player ────────────────────────────────────────────────────────────────────

#[test]
fn player_is_not_clamped_to_the_screen() {
    let mut player = Player::new();
    player.set_position(Point::new(WORLD_WIDTH + 500, -300));
    assert_eq!(player.rect.center(), Point::new(WORLD_WIDTH + 500, -300));
    assert_eq!(player.rect.w, PLAYER_SIZE);
}

#[test]
fn player_fire_queues_one_cue_per_shot() {
    let mut player = Player::new();
    let mut cues = Vec::new();
    player.fire(&mut cues);
    player.fire(&mut cues);
    assert_eq!(player.bullets.len(), 2);
    assert_eq!(cues, vec![AudioCue::Laser, AudioCue::Laser]);
}
