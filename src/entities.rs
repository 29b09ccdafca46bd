/// All game entity types — data plus box geometry, no game logic.

/// Axis-aligned bounding box in logical pixels; `x`/`y` is the top-left
/// corner.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl Rect {
    pub fn new(x: i32, y: i32, w: i32, h: i32) -> Rect {
        Rect { x, y, w, h }
    }

    pub fn from_center(cx: i32, cy: i32, w: i32, h: i32) -> Rect {
        Rect {
            x: cx - w / 2,
            y: cy - h / 2,
            w,
            h,
        }
    }

    pub fn left(&self) -> i32 {
        self.x
    }

    pub fn right(&self) -> i32 {
        self.x + self.w
    }

    pub fn top(&self) -> i32 {
        self.y
    }

    pub fn bottom(&self) -> i32 {
        self.y + self.h
    }

    pub fn center_x(&self) -> i32 {
        self.x + self.w / 2
    }

    pub fn center_y(&self) -> i32 {
        self.y + self.h / 2
    }

    /// Strict overlap test — boxes that only share an edge do not collide.
    pub fn intersects(&self, other: &Rect) -> bool {
        self.x < other.right()
            && other.x < self.right()
            && self.y < other.bottom()
            && other.y < self.bottom()
    }
}

/// Handle to an entity's visual representation. Resolved to an actual
/// sprite by the display layer only; the core never touches pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SpriteId {
    Player,
    Enemy,
    Boss,
    PlayerBullet,
    BossBullet,
}

// ── Ship, enemies, boss ───────────────────────────────────────────────────────

#[derive(Clone, Debug)]
pub struct Player {
    pub rect: Rect,
}

#[derive(Clone, Debug)]
pub struct Enemy {
    pub rect: Rect,
    /// Fall speed, px/frame — rolled once at creation and kept across
    /// top-of-screen re-entries.
    pub speed: i32,
}

#[derive(Clone, Debug)]
pub struct Boss {
    pub rect: Rect,
    pub health: i32,
    /// Horizontal patrol direction, +1 or −1.
    pub dir: i32,
    /// Patrol steps taken since the last scheduled turn.
    pub steps: u32,
    /// Session time of the last volley, in milliseconds.
    pub last_shot_ms: u64,
}

// ── Projectiles ───────────────────────────────────────────────────────────────

#[derive(Clone, Debug)]
pub struct PlayerBullet {
    pub rect: Rect,
}

#[derive(Clone, Debug)]
pub struct BossBullet {
    pub rect: Rect,
}

// ── Input & session bookkeeping ───────────────────────────────────────────────

/// Held-key snapshot for level-triggered movement. Fire and quit arrive
/// as discrete edge events, never through this snapshot.
#[derive(Clone, Copy, Debug, Default)]
pub struct InputState {
    pub left: bool,
    pub right: bool,
}

#[derive(Clone, Debug, PartialEq)]
pub enum GameStatus {
    Playing,
    GameOver,
}

/// State transitions raised by a single tick, for the caller to report.
#[derive(Clone, Debug, PartialEq)]
pub enum FrameEvent {
    BossSpawned,
    BossDefeated,
    PlayerKilled,
}

// ── Master game state ─────────────────────────────────────────────────────────

/// The entire session state. Cloneable so the pure update functions can
/// return a new copy without mutating the original.
#[derive(Clone, Debug)]
pub struct World {
    pub player: Player,
    /// Wave-mode pool; stays empty for the whole lifetime of a boss.
    pub enemies: Vec<Enemy>,
    pub player_bullets: Vec<PlayerBullet>,
    pub boss_bullets: Vec<BossBullet>,
    /// The boss, while boss mode is active.
    pub boss: Option<Boss>,
    pub score: u32,
    pub status: GameStatus,
    pub frame: u64,
}

impl World {
    /// True while a boss encounter is running. Never true together with a
    /// populated enemy pool.
    pub fn boss_active(&self) -> bool {
        self.boss.is_some()
    }
}
