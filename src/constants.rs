/// Compile-time game configuration. Everything tunable lives here;
/// nothing is read from the environment or from files at runtime.

/// Logical canvas, in pixels. The display layer projects this onto
/// terminal cells; the core never sees cell coordinates.
pub const CANVAS_WIDTH: i32 = 800;
pub const CANVAS_HEIGHT: i32 = 600;

/// Target frame rate of the session loop.
pub const FPS: u64 = 60;

/// Real-time budget of one frame, in milliseconds.
pub const MS_PER_FRAME: f64 = 1000.0 / FPS as f64;

// ── Player ───────────────────────────────────────────────────────────────────

pub const PLAYER_WIDTH: i32 = 60;
pub const PLAYER_HEIGHT: i32 = 60;

/// Horizontal speed, px/frame.
pub const PLAYER_SPEED: i32 = 7;

/// Spawn point (box center): bottom-center of the canvas.
pub const PLAYER_SPAWN_X: i32 = CANVAS_WIDTH / 2;
pub const PLAYER_SPAWN_Y: i32 = CANVAS_HEIGHT - 50;

// ── Enemies ──────────────────────────────────────────────────────────────────

pub const ENEMY_WIDTH: i32 = 40;
pub const ENEMY_HEIGHT: i32 = 40;

/// Wave-mode pool size; held constant by 1:1 replacement spawns.
pub const ENEMY_COUNT: usize = 5;

/// Fall-speed range, px/frame — rolled once per enemy at creation.
pub const ENEMY_SPEED_MIN: i32 = 2;
pub const ENEMY_SPEED_MAX: i32 = 5; // exclusive

/// Horizontal entry band (box center); keeps spawns clear of the walls.
pub const ENEMY_SPAWN_X_MIN: i32 = 20;
pub const ENEMY_SPAWN_X_MAX: i32 = CANVAS_WIDTH - 20; // exclusive

/// Vertical entry band (box center), above the visible canvas.
pub const ENEMY_SPAWN_Y_MIN: i32 = -150;
pub const ENEMY_SPAWN_Y_MAX: i32 = -50; // exclusive

// ── Boss ─────────────────────────────────────────────────────────────────────

pub const BOSS_WIDTH: i32 = 150;
pub const BOSS_HEIGHT: i32 = 150;
pub const BOSS_MAX_HEALTH: i32 = 50;

/// Speed of both the descent and the patrol strafe, px/frame.
pub const BOSS_SPEED: i32 = 2;

/// Score at which the boss replaces the enemy wave.
pub const BOSS_SCORE_TRIGGER: u32 = 15;

/// Score bonus awarded for defeating the boss.
pub const BOSS_DEFEAT_BONUS: u32 = 10;

/// Spawn point (box center), above the visible canvas.
pub const BOSS_SPAWN_X: i32 = CANVAS_WIDTH / 2;
pub const BOSS_SPAWN_Y: i32 = -150;

/// Top edge below which the boss stops descending and starts patrolling.
pub const BOSS_PATROL_Y: i32 = 50;

/// Patrol steps after which the boss reverses direction on its own.
pub const BOSS_TURN_STEPS: u32 = 100;

/// Fire cadence, expressed in frames.
pub const BOSS_FIRE_RATE: u64 = 30;

/// Real-time gap required between volleys. Derived from the frame budget,
/// so retuning FPS retunes the cadence unless BOSS_FIRE_RATE is re-derived.
pub const BOSS_FIRE_INTERVAL_MS: u64 = (MS_PER_FRAME * BOSS_FIRE_RATE as f64) as u64;

/// Horizontal inset of the two outer muzzles from the boss's corners.
pub const BOSS_MUZZLE_INSET: i32 = 20;

// ── Bullets ──────────────────────────────────────────────────────────────────

pub const PLAYER_BULLET_WIDTH: i32 = 5;
pub const PLAYER_BULLET_HEIGHT: i32 = 15;
pub const PLAYER_BULLET_SPEED: i32 = 10;

pub const BOSS_BULLET_WIDTH: i32 = 8;
pub const BOSS_BULLET_HEIGHT: i32 = 8;
pub const BOSS_BULLET_SPEED: i32 = 5;
