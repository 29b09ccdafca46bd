/// Pure game-logic functions.
///
/// Every public function takes an immutable reference to the current
/// `World` (plus, where needed, an injected RNG handle and the session
/// clock in milliseconds) and returns a brand-new `World`.  Side effects
/// are limited to the RNG, so a seeded generator replays a step exactly.

use rand::Rng;

use crate::constants::*;
use crate::entities::{
    Boss, BossBullet, Enemy, FrameEvent, GameStatus, InputState, Player, PlayerBullet, Rect,
    World,
};

// ── Constructors ─────────────────────────────────────────────────────────────

/// Build the session start state: player docked bottom-center, a full
/// enemy wave overhead, empty skies otherwise.
pub fn init_world(rng: &mut impl Rng) -> World {
    World {
        player: Player {
            rect: Rect::from_center(PLAYER_SPAWN_X, PLAYER_SPAWN_Y, PLAYER_WIDTH, PLAYER_HEIGHT),
        },
        enemies: (0..ENEMY_COUNT).map(|_| spawn_enemy(rng)).collect(),
        player_bullets: Vec::new(),
        boss_bullets: Vec::new(),
        boss: None,
        score: 0,
        status: GameStatus::Playing,
        frame: 0,
    }
}

/// A fresh enemy entering from above the canvas at a random column, with
/// its own fall speed.
pub fn spawn_enemy(rng: &mut impl Rng) -> Enemy {
    let cx = rng.gen_range(ENEMY_SPAWN_X_MIN..ENEMY_SPAWN_X_MAX);
    let cy = rng.gen_range(ENEMY_SPAWN_Y_MIN..ENEMY_SPAWN_Y_MAX);
    Enemy {
        rect: Rect::from_center(cx, cy, ENEMY_WIDTH, ENEMY_HEIGHT),
        speed: rng.gen_range(ENEMY_SPEED_MIN..ENEMY_SPEED_MAX),
    }
}

fn spawn_boss(now_ms: u64) -> Boss {
    Boss {
        rect: Rect::from_center(BOSS_SPAWN_X, BOSS_SPAWN_Y, BOSS_WIDTH, BOSS_HEIGHT),
        health: BOSS_MAX_HEALTH,
        dir: 1,
        steps: 0,
        last_shot_ms: now_ms,
    }
}

// ── Input-driven state transitions (pure) ────────────────────────────────────

/// Fire one bullet from the nose of the ship.  Called once per discrete
/// fire event; there is no cooldown and no cap.
pub fn player_shoot(world: &World) -> World {
    let bullet = PlayerBullet {
        rect: Rect {
            x: world.player.rect.center_x() - PLAYER_BULLET_WIDTH / 2,
            y: world.player.rect.top() - PLAYER_BULLET_HEIGHT,
            w: PLAYER_BULLET_WIDTH,
            h: PLAYER_BULLET_HEIGHT,
        },
    };
    let mut player_bullets = world.player_bullets.clone();
    player_bullets.push(bullet);
    World {
        player_bullets,
        ..world.clone()
    }
}

// ── Per-entity steppers ──────────────────────────────────────────────────────

/// Horizontal-only movement from the held-key snapshot.  The edge check
/// runs before the step, so a ship already at the wall stays put.
fn step_player(player: &Player, input: &InputState) -> Player {
    let mut rect = player.rect;
    if input.left && rect.left() > 0 {
        rect.x -= PLAYER_SPEED;
    }
    if input.right && rect.right() < CANVAS_WIDTH {
        rect.x += PLAYER_SPEED;
    }
    Player { rect }
}

/// Fall; after leaving the canvas uncaught, re-enter from the top at a
/// fresh random column.  Same object, same speed — no replacement spawn.
fn step_enemy(enemy: &Enemy, rng: &mut impl Rng) -> Enemy {
    let mut rect = enemy.rect;
    rect.y += enemy.speed;
    if rect.top() > CANVAS_HEIGHT {
        let cx = rng.gen_range(ENEMY_SPAWN_X_MIN..ENEMY_SPAWN_X_MAX);
        let cy = rng.gen_range(ENEMY_SPAWN_Y_MIN..ENEMY_SPAWN_Y_MAX);
        rect = Rect::from_center(cx, cy, ENEMY_WIDTH, ENEMY_HEIGHT);
    }
    Enemy {
        rect,
        speed: enemy.speed,
    }
}

/// Advance the boss one frame; returns the volley it fired, if any.
///
/// While the top edge is above the patrol ceiling the boss only sinks —
/// no strafing, no firing.  On patrol it strafes, turns every
/// `BOSS_TURN_STEPS` steps, and hard-bounces off either wall; both turn
/// mechanisms are plain negations, so hitting both in one frame cancels
/// out.  The fire clock compares real elapsed time against the
/// frame-derived interval, so the cadence follows the configured FPS.
fn step_boss(boss: &Boss, now_ms: u64) -> (Boss, Vec<BossBullet>) {
    let mut boss = boss.clone();

    if boss.rect.y < BOSS_PATROL_Y {
        boss.rect.y += BOSS_SPEED;
        return (boss, Vec::new());
    }

    boss.rect.x += BOSS_SPEED * boss.dir;
    boss.steps += 1;
    if boss.steps > BOSS_TURN_STEPS {
        boss.dir = -boss.dir;
        boss.steps = 0;
    }
    if boss.rect.right() > CANVAS_WIDTH || boss.rect.left() < 0 {
        boss.dir = -boss.dir;
    }

    if now_ms.saturating_sub(boss.last_shot_ms) > BOSS_FIRE_INTERVAL_MS {
        boss.last_shot_ms = now_ms;
        let volley = boss_volley(&boss);
        return (boss, volley);
    }
    (boss, Vec::new())
}

/// Three bullets at once, from fixed muzzles along the boss's lower edge.
fn boss_volley(boss: &Boss) -> Vec<BossBullet> {
    let rect = &boss.rect;
    [
        rect.left() + BOSS_MUZZLE_INSET,
        rect.center_x(),
        rect.right() - BOSS_MUZZLE_INSET,
    ]
    .iter()
    .map(|&cx| BossBullet {
        rect: Rect {
            x: cx - BOSS_BULLET_WIDTH / 2,
            y: rect.bottom(),
            w: BOSS_BULLET_WIDTH,
            h: BOSS_BULLET_HEIGHT,
        },
    })
    .collect()
}

// ── Per-frame tick ───────────────────────────────────────────────────────────

/// Advance the simulation by one frame, in fixed order: boss trigger,
/// entity movement, player-bullet-vs-target resolution, boss-bullet-vs-
/// player, body contact.  Returns the next state plus the transition
/// events raised along the way.  Movement and collision both use this
/// frame's positions; nothing is destroyed mid-scan — collision passes
/// mark indices first and rebuild the collections afterwards.
pub fn tick(
    world: &World,
    input: &InputState,
    now_ms: u64,
    rng: &mut impl Rng,
) -> (World, Vec<FrameEvent>) {
    let mut events = Vec::new();
    let frame = world.frame + 1;

    // ── 1. Boss trigger ──────────────────────────────────────────────────────
    // Checked against last frame's score, so a threshold-crossing kill
    // brings the boss in on the following frame.  After a defeat the score
    // still clears the threshold and the next encounter begins the same way.
    let mut enemies = world.enemies.clone();
    let mut boss = world.boss.clone();
    let mut score = world.score;
    if boss.is_none() && score >= BOSS_SCORE_TRIGGER {
        enemies.clear();
        boss = Some(spawn_boss(now_ms));
        events.push(FrameEvent::BossSpawned);
    }

    // ── 2. Advance every entity exactly once ─────────────────────────────────
    let player = step_player(&world.player, input);

    let enemies: Vec<Enemy> = enemies.iter().map(|e| step_enemy(e, rng)).collect();

    let mut boss_bullets: Vec<BossBullet> = world
        .boss_bullets
        .iter()
        .filter_map(|b| {
            let rect = Rect {
                y: b.rect.y + BOSS_BULLET_SPEED,
                ..b.rect
            };
            if rect.top() > CANVAS_HEIGHT {
                None
            } else {
                Some(BossBullet { rect })
            }
        })
        .collect();

    // A volley fired this frame starts moving next frame.
    let boss = boss.map(|b| {
        let (b, volley) = step_boss(&b, now_ms);
        boss_bullets.extend(volley);
        b
    });

    let player_bullets: Vec<PlayerBullet> = world
        .player_bullets
        .iter()
        .filter_map(|b| {
            let rect = Rect {
                y: b.rect.y - PLAYER_BULLET_SPEED,
                ..b.rect
            };
            if rect.bottom() < 0 {
                None
            } else {
                Some(PlayerBullet { rect })
            }
        })
        .collect();

    // ── 3. Player bullets vs. targets ────────────────────────────────────────
    let mut used_bullets: Vec<usize> = Vec::new();

    let (enemies, boss) = match boss {
        // Boss mode: every overlapping bullet is consumed and costs one
        // health point, so N simultaneous hits cost N.
        Some(mut the_boss) => {
            for (bi, bullet) in player_bullets.iter().enumerate() {
                if bullet.rect.intersects(&the_boss.rect) {
                    used_bullets.push(bi);
                    the_boss.health = (the_boss.health - 1).max(0);
                }
            }
            if the_boss.health <= 0 {
                score += BOSS_DEFEAT_BONUS;
                boss_bullets.clear();
                events.push(FrameEvent::BossDefeated);
                let wave: Vec<Enemy> = (0..ENEMY_COUNT).map(|_| spawn_enemy(rng)).collect();
                (wave, None)
            } else {
                (enemies, Some(the_boss))
            }
        }
        // Wave mode: scan bullets outer, enemies inner, in collection
        // order.  The first not-yet-destroyed enemy a bullet overlaps
        // consumes it; each kill scores one point and spawns one fresh
        // replacement, keeping the pool size constant.
        None => {
            let mut killed: Vec<usize> = Vec::new();
            for (bi, bullet) in player_bullets.iter().enumerate() {
                for (ei, enemy) in enemies.iter().enumerate() {
                    if !killed.contains(&ei) && bullet.rect.intersects(&enemy.rect) {
                        killed.push(ei);
                        used_bullets.push(bi);
                        break;
                    }
                }
            }
            score += killed.len() as u32;
            let mut enemies: Vec<Enemy> = enemies
                .iter()
                .enumerate()
                .filter(|(i, _)| !killed.contains(i))
                .map(|(_, e)| e.clone())
                .collect();
            for _ in 0..killed.len() {
                enemies.push(spawn_enemy(rng));
            }
            (enemies, None)
        }
    };

    let player_bullets: Vec<PlayerBullet> = player_bullets
        .iter()
        .enumerate()
        .filter(|(i, _)| !used_bullets.contains(i))
        .map(|(_, b)| b.clone())
        .collect();

    // ── 4. Boss bullets vs. player — one hit is fatal ────────────────────────
    let mut status = world.status.clone();
    let live = boss_bullets.len();
    boss_bullets.retain(|b| !b.rect.intersects(&player.rect));
    if boss_bullets.len() < live && status == GameStatus::Playing {
        status = GameStatus::GameOver;
        events.push(FrameEvent::PlayerKilled);
    }

    // ── 5. Body contact ──────────────────────────────────────────────────────
    let mut enemies = enemies;
    match &boss {
        Some(the_boss) => {
            if the_boss.rect.intersects(&player.rect) && status == GameStatus::Playing {
                status = GameStatus::GameOver;
                events.push(FrameEvent::PlayerKilled);
            }
        }
        None => {
            let live = enemies.len();
            enemies.retain(|e| !e.rect.intersects(&player.rect));
            if enemies.len() < live && status == GameStatus::Playing {
                status = GameStatus::GameOver;
                events.push(FrameEvent::PlayerKilled);
            }
        }
    }

    (
        World {
            player,
            enemies,
            player_bullets,
            boss_bullets,
            boss,
            score,
            status,
            frame,
        },
        events,
    )
}
