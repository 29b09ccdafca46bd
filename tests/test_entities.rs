use boss_battle::entities::*;

// ── Rect geometry ─────────────────────────────────────────────────────────────

#[test]
fn rect_edge_accessors() {
    let r = Rect::new(10, 20, 30, 40);
    assert_eq!(r.left(), 10);
    assert_eq!(r.right(), 40);
    assert_eq!(r.top(), 20);
    assert_eq!(r.bottom(), 60);
    assert_eq!(r.center_x(), 25);
    assert_eq!(r.center_y(), 40);
}

#[test]
fn rect_from_center_round_trips() {
    let r = Rect::from_center(100, 200, 40, 60);
    assert_eq!(r, Rect::new(80, 170, 40, 60));
    assert_eq!(r.center_x(), 100);
    assert_eq!(r.center_y(), 200);
}

#[test]
fn rect_overlap_is_symmetric() {
    let a = Rect::new(0, 0, 10, 10);
    let b = Rect::new(5, 5, 10, 10);
    assert!(a.intersects(&b));
    assert!(b.intersects(&a));
}

#[test]
fn rect_disjoint_boxes_do_not_collide() {
    let a = Rect::new(0, 0, 10, 10);
    let b = Rect::new(20, 20, 5, 5);
    assert!(!a.intersects(&b));
}

#[test]
fn rect_touching_edges_do_not_collide() {
    let a = Rect::new(0, 0, 10, 10);
    assert!(!a.intersects(&Rect::new(10, 0, 10, 10))); // shared vertical edge
    assert!(!a.intersects(&Rect::new(0, 10, 10, 10))); // shared horizontal edge
}

#[test]
fn rect_containment_counts_as_overlap() {
    let outer = Rect::new(0, 0, 100, 100);
    let inner = Rect::new(40, 40, 10, 10);
    assert!(outer.intersects(&inner));
    assert!(inner.intersects(&outer));
}

// ── Enums & state ─────────────────────────────────────────────────────────────

#[test]
fn entity_clone_and_eq() {
    // Enums derive PartialEq — equality comparisons must work
    assert_eq!(SpriteId::Player, SpriteId::Player);
    assert_ne!(SpriteId::Enemy, SpriteId::Boss);
    assert_eq!(GameStatus::Playing, GameStatus::Playing);
    assert_ne!(GameStatus::Playing, GameStatus::GameOver);
    assert_eq!(FrameEvent::BossSpawned, FrameEvent::BossSpawned);
    assert_ne!(FrameEvent::BossDefeated, FrameEvent::PlayerKilled);

    // Clone must produce an equal value
    let id = SpriteId::BossBullet;
    assert_eq!(id.clone(), SpriteId::BossBullet);
}

#[test]
fn world_boss_active_tracks_boss_presence() {
    let mut w = World {
        player: Player { rect: Rect::from_center(400, 550, 60, 60) },
        enemies: Vec::new(),
        player_bullets: Vec::new(),
        boss_bullets: Vec::new(),
        boss: None,
        score: 0,
        status: GameStatus::Playing,
        frame: 0,
    };
    assert!(!w.boss_active());
    w.boss = Some(Boss {
        rect: Rect::from_center(400, -150, 150, 150),
        health: 50,
        dir: 1,
        steps: 0,
        last_shot_ms: 0,
    });
    assert!(w.boss_active());
}

#[test]
fn world_clone_is_independent() {
    let original = World {
        player: Player { rect: Rect::from_center(400, 550, 60, 60) },
        enemies: Vec::new(),
        player_bullets: Vec::new(),
        boss_bullets: Vec::new(),
        boss: None,
        score: 0,
        status: GameStatus::Playing,
        frame: 0,
    };
    let mut cloned = original.clone();

    // Mutating the clone must not affect the original
    cloned.player.rect.x = 99;
    cloned.score = 999;
    cloned.enemies.push(Enemy {
        rect: Rect::from_center(100, 100, 40, 40),
        speed: 2,
    });

    assert_eq!(original.player.rect.x, 370);
    assert_eq!(original.score, 0);
    assert!(original.enemies.is_empty());
}
