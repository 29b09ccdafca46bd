/// Rendering layer — all terminal I/O lives here.
///
/// Each function receives a mutable writer and an immutable view of the
/// world.  No game logic is performed; this module only projects logical
/// pixels onto terminal cells and translates state into terminal
/// commands.

use std::io::Write;

use crossterm::{
    cursor,
    style::{self, Color, Print},
    terminal, QueueableCommand,
};

use boss_battle::constants::{BOSS_MAX_HEALTH, CANVAS_HEIGHT, CANVAS_WIDTH};
use boss_battle::entities::{GameStatus, Rect, SpriteId, World};

use crate::sprites::{Sprite, SpriteSet};

// ── Projection ────────────────────────────────────────────────────────────────

/// Logical pixels per terminal cell.  The 1:2 cell aspect keeps the
/// 800×600 canvas visually proportionate.
pub const CELL_W: i32 = 10;
pub const CELL_H: i32 = 20;

/// Playfield size in cells.
pub const GRID_COLS: u16 = (CANVAS_WIDTH / CELL_W) as u16;
pub const GRID_ROWS: u16 = (CANVAS_HEIGHT / CELL_H) as u16;

/// The HUD occupies the row above the playfield, the controls hint the
/// row below it.
const TOP_MARGIN: u16 = 1;
pub const MIN_COLS: u16 = GRID_COLS;
pub const MIN_ROWS: u16 = GRID_ROWS + 2;

// ── Colour palette ────────────────────────────────────────────────────────────

const C_HUD_SCORE: Color = Color::Yellow;
const C_HINT: Color = Color::DarkGrey;
const C_BAR_FILL: Color = Color::Green;
const C_BAR_EMPTY: Color = Color::Red;
const C_BAR_FRAME: Color = Color::White;

fn col(x: i32) -> i32 {
    x.div_euclid(CELL_W)
}

fn row(y: i32) -> i32 {
    y.div_euclid(CELL_H)
}

// ── Public entry point ────────────────────────────────────────────────────────

/// Render one complete frame.
pub fn render<W: Write>(out: &mut W, world: &World, sprites: &SpriteSet) -> std::io::Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;

    for enemy in &world.enemies {
        draw_sprite(out, sprites.get(SpriteId::Enemy), &enemy.rect)?;
    }
    for bullet in &world.player_bullets {
        draw_sprite(out, sprites.get(SpriteId::PlayerBullet), &bullet.rect)?;
    }
    for bullet in &world.boss_bullets {
        draw_sprite(out, sprites.get(SpriteId::BossBullet), &bullet.rect)?;
    }
    if let Some(boss) = &world.boss {
        draw_sprite(out, sprites.get(SpriteId::Boss), &boss.rect)?;
    }
    draw_sprite(out, sprites.get(SpriteId::Player), &world.player.rect)?;

    draw_hud(out, world)?;
    if let Some(boss) = &world.boss {
        draw_health_bar(out, boss.health)?;
    }
    draw_controls_hint(out)?;

    if world.status == GameStatus::GameOver {
        draw_game_over(out, world)?;
    }

    // Park cursor in a harmless spot and flush
    out.queue(style::ResetColor)?;
    out.queue(cursor::MoveTo(0, GRID_ROWS + TOP_MARGIN))?;
    out.flush()?;
    Ok(())
}

// ── Sprites ───────────────────────────────────────────────────────────────────

/// Draw a sprite anchored at the top-left of its box, clipped to the
/// playfield.  ' ' cells are transparent.
fn draw_sprite<W: Write>(out: &mut W, sprite: &Sprite, rect: &Rect) -> std::io::Result<()> {
    let base_col = col(rect.x);
    let base_row = row(rect.y);

    out.queue(style::SetForegroundColor(sprite.color))?;
    for (r, line) in sprite.rows.iter().enumerate() {
        let cell_row = base_row + r as i32;
        if cell_row < 0 || cell_row >= GRID_ROWS as i32 {
            continue;
        }
        for (c, &ch) in line.iter().enumerate() {
            if ch == ' ' {
                continue;
            }
            let cell_col = base_col + c as i32;
            if cell_col < 0 || cell_col >= GRID_COLS as i32 {
                continue;
            }
            out.queue(cursor::MoveTo(
                cell_col as u16,
                cell_row as u16 + TOP_MARGIN,
            ))?;
            out.queue(Print(ch))?;
        }
    }
    Ok(())
}

// ── HUD (row 0) ───────────────────────────────────────────────────────────────

fn draw_hud<W: Write>(out: &mut W, world: &World) -> std::io::Result<()> {
    out.queue(cursor::MoveTo(1, 0))?;
    out.queue(style::SetForegroundColor(C_HUD_SCORE))?;
    out.queue(Print(format!("Score:{:>6}", world.score)))?;
    Ok(())
}

/// Proportional boss health bar with an outline, centred near the top of
/// the playfield.
fn draw_health_bar<W: Write>(out: &mut W, health: i32) -> std::io::Result<()> {
    const BAR_CELLS: i32 = 30;
    let filled = (health.max(0) * BAR_CELLS / BOSS_MAX_HEALTH) as usize;
    let left = GRID_COLS / 2 - BAR_CELLS as u16 / 2;

    out.queue(cursor::MoveTo(left - 1, TOP_MARGIN))?;
    out.queue(style::SetForegroundColor(C_BAR_FRAME))?;
    out.queue(Print("["))?;
    out.queue(style::SetForegroundColor(C_BAR_FILL))?;
    out.queue(Print("█".repeat(filled)))?;
    out.queue(style::SetForegroundColor(C_BAR_EMPTY))?;
    out.queue(Print("░".repeat(BAR_CELLS as usize - filled)))?;
    out.queue(style::SetForegroundColor(C_BAR_FRAME))?;
    out.queue(Print("]"))?;
    Ok(())
}

// ── Controls hint (last row) ──────────────────────────────────────────────────

fn draw_controls_hint<W: Write>(out: &mut W) -> std::io::Result<()> {
    out.queue(cursor::MoveTo(1, GRID_ROWS + TOP_MARGIN))?;
    out.queue(style::SetForegroundColor(C_HINT))?;
    out.queue(Print("← → / A D : Move   SPACE : Shoot   Q : Quit"))?;
    Ok(())
}

// ── Game-over overlay ─────────────────────────────────────────────────────────

fn draw_game_over<W: Write>(out: &mut W, world: &World) -> std::io::Result<()> {
    let lines: &[(&str, Color)] = &[
        ("╔════════════════════╗", Color::Red),
        ("║    GAME  OVER      ║", Color::Red),
        ("╚════════════════════╝", Color::Red),
    ];
    let score_line = format!("Final Score: {:>6}", world.score);
    let hint = "Press any key to exit";

    let cx = GRID_COLS / 2;
    let total_rows = lines.len() as u16 + 2;
    let start_row = (GRID_ROWS / 2 + TOP_MARGIN).saturating_sub(total_rows / 2);

    for (i, (msg, color)) in lines.iter().enumerate() {
        let row = start_row + i as u16;
        let col = cx.saturating_sub(msg.chars().count() as u16 / 2);
        out.queue(cursor::MoveTo(col, row))?;
        out.queue(style::SetForegroundColor(*color))?;
        out.queue(Print(*msg))?;
    }

    let score_row = start_row + lines.len() as u16;
    let col = cx.saturating_sub(score_line.chars().count() as u16 / 2);
    out.queue(cursor::MoveTo(col, score_row))?;
    out.queue(style::SetForegroundColor(Color::Yellow))?;
    out.queue(Print(&score_line))?;

    let col = cx.saturating_sub(hint.chars().count() as u16 / 2);
    out.queue(cursor::MoveTo(col, score_row + 1))?;
    out.queue(style::SetForegroundColor(Color::White))?;
    out.queue(Print(hint))?;

    Ok(())
}
