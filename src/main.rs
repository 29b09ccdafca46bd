mod display;
mod sprites;

use std::collections::HashMap;
use std::io::{stdout, BufWriter, Write};
use std::path::Path;
use std::sync::mpsc;
use std::thread;
use std::time::{Duration, Instant};

use anyhow::{bail, Context, Result};
use crossterm::{
    cursor,
    event::{
        self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers,
        KeyboardEnhancementFlags, PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
    },
    terminal, ExecutableCommand,
};
use rand::thread_rng;

use boss_battle::compute::{init_world, player_shoot, tick};
use boss_battle::constants::FPS;
use boss_battle::entities::{FrameEvent, GameStatus, InputState, World};

use crate::sprites::SpriteSet;

const FRAME: Duration = Duration::from_millis(1000 / FPS); // ≈60 FPS

/// A key is considered "held" if its last press/repeat event arrived within
/// this many frames.  Covers terminals that don't emit key-release events:
/// the OS key-repeat rate is ≥ 15 Hz, so a window of 8 frames (≈133 ms) is
/// always refreshed before expiry.
const HOLD_WINDOW: u64 = 8;

/// Returns true if `key` was seen within the last `HOLD_WINDOW` frames.
fn is_held(key_frame: &HashMap<KeyCode, u64>, key: &KeyCode, frame: u64) -> bool {
    key_frame
        .get(key)
        .map(|&last| frame.saturating_sub(last) <= HOLD_WINDOW)
        .unwrap_or(false)
}

// ── Game loop ─────────────────────────────────────────────────────────────────

enum ExitReason {
    Quit,
    PlayerKilled,
}

/// Input model: movement is level-triggered — a `key_frame` map records
/// the frame number of the last press/repeat event for every key, and each
/// frame the keys still "fresh" (within `HOLD_WINDOW`) feed the held-key
/// snapshot.  Firing is edge-triggered: exactly one bullet per discrete
/// Space press, with no cooldown and no per-frame autofire while held.
///
/// Works on two classes of terminal:
/// * **Keyboard-enhancement capable** (Ghostty, kitty, etc.): proper
///   `Press` / `Repeat` / `Release` events → keys are removed on release.
/// * **Classic terminals**: only `Press` events (OS key-repeat shows as
///   repeated `Press`).  Keys expire naturally after `HOLD_WINDOW` frames
///   of silence, which is shorter than the OS repeat interval, so a key
///   stays live while it is actively generating repeats.
fn game_loop<W: Write>(
    out: &mut W,
    world: &mut World,
    sprites: &SpriteSet,
    rx: &mpsc::Receiver<Event>,
) -> std::io::Result<(ExitReason, u32)> {
    let mut rng = thread_rng();
    let session_start = Instant::now();

    // Maps each held key → the frame it was last seen (press or repeat).
    let mut key_frame: HashMap<KeyCode, u64> = HashMap::new();
    let mut frame: u64 = 0;
    let mut bosses_down: u32 = 0;

    loop {
        let frame_start = Instant::now();
        frame += 1;

        // ── Drain all pending input events (non-blocking) ─────────────────────
        while let Ok(Event::Key(KeyEvent { code, kind, modifiers, .. })) = rx.try_recv() {
            match kind {
                // Press: record key + handle one-shot actions
                KeyEventKind::Press => {
                    key_frame.insert(code.clone(), frame);
                    match code {
                        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                            return Ok((ExitReason::Quit, bosses_down));
                        }
                        KeyCode::Char('c')
                            if modifiers.contains(KeyModifiers::CONTROL) =>
                        {
                            return Ok((ExitReason::Quit, bosses_down));
                        }
                        // One bullet per discrete press — never per frame held.
                        KeyCode::Char(' ')
                            if world.status == GameStatus::Playing =>
                        {
                            *world = player_shoot(world);
                        }
                        _ => {}
                    }
                }
                // Repeat: refresh timestamp so key stays "held"
                KeyEventKind::Repeat => {
                    key_frame.insert(code.clone(), frame);
                }
                // Release: remove key immediately (keyboard-enhancement path)
                KeyEventKind::Release => {
                    key_frame.remove(&code);
                }
            }
        }

        if world.status == GameStatus::Playing {
            let input = InputState {
                left: is_held(&key_frame, &KeyCode::Left, frame)
                    || is_held(&key_frame, &KeyCode::Char('a'), frame)
                    || is_held(&key_frame, &KeyCode::Char('A'), frame),
                right: is_held(&key_frame, &KeyCode::Right, frame)
                    || is_held(&key_frame, &KeyCode::Char('d'), frame)
                    || is_held(&key_frame, &KeyCode::Char('D'), frame),
            };

            let now_ms = session_start.elapsed().as_millis() as u64;
            let (next, events) = tick(world, &input, now_ms, &mut rng);
            *world = next;
            for ev in events {
                if ev == FrameEvent::BossDefeated {
                    bosses_down += 1;
                }
            }
        }

        display::render(out, world, sprites)?;

        if world.status == GameStatus::GameOver {
            // Leave the final frame up until a key is pressed.
            wait_for_key(rx);
            return Ok((ExitReason::PlayerKilled, bosses_down));
        }

        let elapsed = frame_start.elapsed();
        if elapsed < FRAME {
            thread::sleep(FRAME - elapsed);
        }
    }
}

fn wait_for_key(rx: &mpsc::Receiver<Event>) {
    while let Ok(ev) = rx.recv() {
        if let Event::Key(KeyEvent {
            kind: KeyEventKind::Press,
            ..
        }) = ev
        {
            break;
        }
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    let (cols, rows) = terminal::size().context("query terminal size")?;
    if cols < display::MIN_COLS || rows < display::MIN_ROWS {
        bail!(
            "terminal too small: need {}x{} cells, have {}x{}",
            display::MIN_COLS,
            display::MIN_ROWS,
            cols,
            rows
        );
    }

    let sprites = SpriteSet::load(Path::new("assets"));

    let raw_out = stdout();
    let mut out = BufWriter::new(raw_out);

    terminal::enable_raw_mode().context("enable raw mode")?;
    out.execute(terminal::EnterAlternateScreen)?;
    out.execute(cursor::Hide)?;

    // Request key-release (and key-repeat) events from the terminal.
    // Ghostty / kitty-protocol terminals support this; others fall back gracefully.
    let keyboard_enhanced = out
        .execute(PushKeyboardEnhancementFlags(
            KeyboardEnhancementFlags::REPORT_EVENT_TYPES,
        ))
        .is_ok();

    // Dedicate a thread exclusively to blocking event reads, sending them
    // through a channel so the game loop never has to block on I/O.
    let (tx, rx) = mpsc::channel::<Event>();
    thread::spawn(move || loop {
        match event::read() {
            Ok(ev) => {
                if tx.send(ev).is_err() {
                    break; // receiver dropped → program exiting
                }
            }
            Err(_) => break,
        }
    });

    let mut world = init_world(&mut thread_rng());
    let result = game_loop(&mut out, &mut world, &sprites, &rx);

    // Always restore the terminal
    if keyboard_enhanced {
        let _ = out.execute(PopKeyboardEnhancementFlags);
    }
    let _ = out.execute(cursor::Show);
    let _ = out.execute(terminal::LeaveAlternateScreen);
    let _ = terminal::disable_raw_mode();

    let (reason, bosses_down) = result.context("session loop failed")?;
    if bosses_down > 0 {
        println!("BOSS DEFEATED! You win!");
    }
    match reason {
        ExitReason::PlayerKilled => println!("Game over! Final score: {}", world.score),
        ExitReason::Quit => println!("Final score: {}", world.score),
    }
    Ok(())
}
