/// Sprite assets — text-art loading, scaling, and placeholder fallback.
///
/// Ship art lives in plain text files under `assets/`; each line is one
/// row of cells.  A missing or unreadable file degrades to a solid block
/// of the entity's footprint and color, and the session carries on.
/// Bullets are drawn from built-in glyphs, not loaded art.

use std::fs;
use std::path::Path;

use crossterm::style::Color;

use boss_battle::constants::{
    BOSS_HEIGHT, BOSS_WIDTH, ENEMY_HEIGHT, ENEMY_WIDTH, PLAYER_HEIGHT, PLAYER_WIDTH,
};
use boss_battle::entities::SpriteId;

use crate::display::{CELL_H, CELL_W};

pub struct Sprite {
    /// Cell rows; ' ' cells are transparent.
    pub rows: Vec<Vec<char>>,
    pub color: Color,
}

/// Entity size in logical pixels → footprint in terminal cells.
fn footprint(w: i32, h: i32) -> (usize, usize) {
    (((w / CELL_W).max(1)) as usize, ((h / CELL_H).max(1)) as usize)
}

/// Nearest-neighbour resample of `art` to exactly `cols` × `rows` cells.
fn scale(art: &[Vec<char>], cols: usize, rows: usize) -> Vec<Vec<char>> {
    let src_h = art.len();
    let src_w = art.iter().map(|r| r.len()).max().unwrap_or(0);
    (0..rows)
        .map(|r| {
            let sr = r * src_h / rows;
            (0..cols)
                .map(|c| {
                    let sc = c * src_w / cols;
                    art[sr].get(sc).copied().unwrap_or(' ')
                })
                .collect()
        })
        .collect()
}

/// Solid block of the requested footprint — the stand-in for a missing
/// asset.
fn placeholder(cols: usize, rows: usize, color: Color) -> Sprite {
    Sprite {
        rows: vec![vec!['█'; cols]; rows],
        color,
    }
}

fn load_art(path: &Path, (cols, rows): (usize, usize), color: Color) -> Sprite {
    let art: Vec<Vec<char>> = match fs::read_to_string(path) {
        Ok(text) => text.lines().map(|l| l.chars().collect()).collect(),
        Err(_) => return placeholder(cols, rows, color),
    };
    if art.is_empty() || art.iter().all(|r| r.is_empty()) {
        return placeholder(cols, rows, color);
    }
    Sprite {
        rows: scale(&art, cols, rows),
        color,
    }
}

/// One loaded sprite per `SpriteId`.
pub struct SpriteSet {
    player: Sprite,
    enemy: Sprite,
    boss: Sprite,
    player_bullet: Sprite,
    boss_bullet: Sprite,
}

impl SpriteSet {
    pub fn load(dir: &Path) -> SpriteSet {
        SpriteSet {
            player: load_art(
                &dir.join("player.txt"),
                footprint(PLAYER_WIDTH, PLAYER_HEIGHT),
                Color::Green,
            ),
            enemy: load_art(
                &dir.join("enemy.txt"),
                footprint(ENEMY_WIDTH, ENEMY_HEIGHT),
                Color::Red,
            ),
            boss: load_art(
                &dir.join("boss.txt"),
                footprint(BOSS_WIDTH, BOSS_HEIGHT),
                Color::Magenta,
            ),
            player_bullet: Sprite {
                rows: vec![vec!['║']],
                color: Color::White,
            },
            boss_bullet: Sprite {
                rows: vec![vec!['●']],
                color: Color::Red,
            },
        }
    }

    pub fn get(&self, id: SpriteId) -> &Sprite {
        match id {
            SpriteId::Player => &self.player,
            SpriteId::Enemy => &self.enemy,
            SpriteId::Boss => &self.boss,
            SpriteId::PlayerBullet => &self.player_bullet,
            SpriteId::BossBullet => &self.boss_bullet,
        }
    }
}
