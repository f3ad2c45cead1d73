//! Rendering and sound layer — all terminal output lives here.
//!
//! Each function receives a mutable writer and an immutable view of the
//! game.  Nothing here mutates simulation state; this module only turns it
//! into terminal commands.

use std::io::Write;

use crossterm::{
    cursor,
    style::{self, Color, Print},
    terminal,
    QueueableCommand,
};
use pixel_blaster::assets::{Assets, Sprite};
use pixel_blaster::collision::{Point, Rect};
use pixel_blaster::entities::{AudioCue, Bullet, GameStatus, Planet, Rgb, Star};
use pixel_blaster::viewport::Viewport;
use pixel_blaster::Game;

// ── Colour palette ────────────────────────────────────────────────────────────

const C_HUD: Color = Color::White;
const C_PLAYER: Color = Color::Cyan;
const C_METEORITE: Color = Color::DarkYellow;
const C_ENEMY: Color = Color::Red;
const C_BULLET_ENEMY: Color = Color::Magenta;
const C_GAME_OVER: Color = Color::White;
const C_HINT: Color = Color::DarkGrey;

fn rgb(c: Rgb) -> Color {
    Color::Rgb { r: c.0, g: c.1, b: c.2 }
}

/// Planet tint darkened by its translucency against the black sky.
fn blend(c: Rgb, alpha: u8) -> Color {
    let scale = |v: u8| (v as u16 * alpha as u16 / 255) as u8;
    Color::Rgb {
        r: scale(c.0),
        g: scale(c.1),
        b: scale(c.2),
    }
}

// ── Public entry points ───────────────────────────────────────────────────────

/// Render one complete frame.
pub fn render<W: Write>(
    out: &mut W,
    game: &Game,
    assets: &Assets,
    vp: &Viewport,
) -> std::io::Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;

    for star in &game.stars {
        draw_star(out, vp, star)?;
    }
    for planet in &game.planets {
        draw_planet(out, vp, planet)?;
    }
    for meteorite in &game.meteorites {
        draw_sprite(out, vp, &assets.meteorite, meteorite.rect.center(), C_METEORITE)?;
    }

    draw_sprite(out, vp, &assets.player, game.player.rect.center(), C_PLAYER)?;
    for bullet in &game.player.bullets {
        draw_bullet(out, vp, bullet, '|', rgb(bullet.color))?;
    }

    for enemy in &game.enemies {
        draw_sprite(out, vp, &assets.enemy, enemy.rect.center(), C_ENEMY)?;
        for bullet in &enemy.bullets {
            draw_bullet(out, vp, bullet, '!', C_BULLET_ENEMY)?;
        }
    }

    draw_hud(out, game, vp)?;
    if game.status == GameStatus::GameOver {
        draw_game_over(out, game, vp)?;
    }

    // Park cursor in a harmless spot and flush
    out.queue(style::ResetColor)?;
    out.queue(cursor::MoveTo(0, 0))?;
    out.flush()?;
    Ok(())
}

/// Ring the terminal bell for each cue. Fire-and-forget: the bytes go out
/// with the next flush and nothing waits on them.
pub fn play<W: Write>(out: &mut W, assets: &Assets, cues: &[AudioCue]) -> std::io::Result<()> {
    for cue in cues {
        let clip = assets.sound(*cue);
        for _ in 0..clip.pulses {
            out.queue(Print('\x07'))?;
        }
    }
    Ok(())
}

// ── Background ────────────────────────────────────────────────────────────────

fn draw_star<W: Write>(out: &mut W, vp: &Viewport, star: &Star) -> std::io::Result<()> {
    let Some((col, row)) = vp.to_cell(star.rect.x, star.rect.y) else {
        return Ok(());
    };
    let glyph = match star.rect.w {
        1 => '.',
        2 => '+',
        _ => '*',
    };
    out.queue(cursor::MoveTo(col, row))?;
    out.queue(style::SetForegroundColor(rgb(star.color)))?;
    out.queue(Print(glyph))?;
    Ok(())
}

/// Fill every cell whose centre lies inside the planet's disc.
fn draw_planet<W: Write>(out: &mut W, vp: &Viewport, planet: &Planet) -> std::io::Result<()> {
    let center = Point::new(planet.x, planet.y.round() as i32);
    let r = planet.radius;
    let bounds = Rect::centered(center, 2 * r, 2 * r);
    let Some((c0, r0, c1, r1)) = vp.cell_span(&bounds) else {
        return Ok(());
    };

    out.queue(style::SetForegroundColor(blend(planet.color, planet.alpha)))?;
    for row in r0..=r1 {
        for col in c0..=c1 {
            let p = vp.to_world(col, row);
            let (dx, dy) = ((p.x - center.x) as i64, (p.y - center.y) as i64);
            if dx * dx + dy * dy <= (r as i64) * (r as i64) {
                out.queue(cursor::MoveTo(col, row))?;
                out.queue(Print('░'))?;
            }
        }
    }
    Ok(())
}

// ── Entities ──────────────────────────────────────────────────────────────────

/// Draw `sprite` centred on world point `center`, clipped to the playfield.
/// Spaces are transparent.
fn draw_sprite<W: Write>(
    out: &mut W,
    vp: &Viewport,
    sprite: &Sprite,
    center: Point,
    color: Color,
) -> std::io::Result<()> {
    let (cx, cy) = vp.project(center.x, center.y);
    let left = cx - sprite.width() as i32 / 2;
    let top = cy - sprite.height() as i32 / 2;

    out.queue(style::SetForegroundColor(color))?;
    for (dy, line) in sprite.lines.iter().enumerate() {
        let row = top + dy as i32;
        for (dx, ch) in line.chars().enumerate() {
            let col = left + dx as i32;
            if ch == ' ' || !vp.contains_cell(col, row) {
                continue;
            }
            out.queue(cursor::MoveTo(col as u16, row as u16))?;
            out.queue(Print(ch))?;
        }
    }
    Ok(())
}

fn draw_bullet<W: Write>(
    out: &mut W,
    vp: &Viewport,
    bullet: &Bullet,
    glyph: char,
    color: Color,
) -> std::io::Result<()> {
    let c = bullet.rect.center();
    let (col, row) = vp.project(c.x, c.y);
    if vp.contains_cell(col, row) {
        out.queue(cursor::MoveTo(col as u16, row as u16))?;
        out.queue(style::SetForegroundColor(color))?;
        out.queue(Print(glyph))?;
    }
    Ok(())
}

// ── HUD (row 0) ───────────────────────────────────────────────────────────────

fn draw_hud<W: Write>(out: &mut W, game: &Game, vp: &Viewport) -> std::io::Result<()> {
    out.queue(cursor::MoveTo(1, 0))?;
    out.queue(style::SetForegroundColor(C_HUD))?;
    out.queue(Print(format!("Score: {}  Level: {}", game.score, game.level)))?;

    let hint = "Mouse: Move   Click: Shoot   Q: Quit";
    let hx = vp.cols.saturating_sub(hint.chars().count() as u16 + 1);
    out.queue(cursor::MoveTo(hx, 0))?;
    out.queue(style::SetForegroundColor(C_HINT))?;
    out.queue(Print(hint))?;
    Ok(())
}

// ── Game-over overlay ─────────────────────────────────────────────────────────

fn draw_game_over<W: Write>(out: &mut W, game: &Game, vp: &Viewport) -> std::io::Result<()> {
    let lines = [
        "You lose! Press R to retry.".to_string(),
        format!("Score: {}  Level: {}", game.score, game.level),
        "Q - Quit".to_string(),
    ];

    let cx = vp.cols / 2;
    let start_row = vp.rows / 2;
    out.queue(style::SetForegroundColor(C_GAME_OVER))?;
    for (i, line) in lines.iter().enumerate() {
        let col = cx.saturating_sub(line.chars().count() as u16 / 2);
        out.queue(cursor::MoveTo(col, start_row + i as u16))?;
        out.queue(Print(line))?;
    }
    Ok(())
}
