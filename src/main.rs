//! Angler Raid entry point
//!
//! Headless native runner: plays a scripted session against a recording
//! surface and logs what happened. Useful for balance checks and profiling.
//!
//! Run with `--help` for the flags.

use std::path::PathBuf;

use angler_raid::audio::LogAudio;
use angler_raid::consts::*;
use angler_raid::input::{Key, KeySet};
use angler_raid::renderer::DrawCommand;
use angler_raid::sim::{Outcome, TickInput};
use angler_raid::{Game, Settings};
use clap::Parser;

/// Frame time of a 60 Hz display (ms)
const FRAME_MS: f32 = 1000.0 / 60.0;

#[derive(Parser, Debug)]
#[command(name = "angler-raid")]
#[command(about = "Plays a scripted headless Angler Raid session and prints a summary")]
struct Cli {
    /// Session seed
    #[arg(long, default_value_t = 0xA46_1E4)]
    seed: u64,
    /// Frames to simulate at 60 Hz
    #[arg(long, default_value_t = 3600)]
    frames: u32,
    /// JSON settings file
    #[arg(long)]
    settings: Option<PathBuf>,
    /// Print the effective settings as JSON and exit
    #[arg(long)]
    print_settings: bool,
}

/// Simple pilot: keep firing, weave up and down, drift forward now and then
fn scripted_keys(frame: u32) -> KeySet {
    let mut keys = KeySet::new();
    keys.press(Key::Fire);
    if (frame / 90) % 2 == 0 {
        keys.press(Key::Down);
    } else {
        keys.press(Key::Up);
    }
    if (frame / 240) % 3 == 1 {
        keys.press(Key::Right);
    }
    keys
}

fn main() {
    env_logger::init();
    let args = Cli::parse();

    let settings = match &args.settings {
        Some(path) => Settings::load(path),
        None => Settings::default(),
    };

    if args.print_settings {
        match settings.to_json() {
            Ok(json) => println!("{json}"),
            Err(e) => log::error!("Could not serialize settings: {}", e),
        }
        return;
    }

    log::info!(
        "Angler Raid (headless) starting, seed {}, {} frames",
        args.seed,
        args.frames
    );

    let mut game = Game::new(
        PLAYFIELD_WIDTH,
        PLAYFIELD_HEIGHT,
        settings,
        Box::new(LogAudio),
        args.seed,
    );
    let mut commands: Vec<DrawCommand> = Vec::new();
    let mut total_commands = 0usize;
    let mut sessions = 1u32;
    let mut now_ms = 0.0f64;

    for frame in 0..args.frames {
        now_ms += FRAME_MS as f64;

        commands.clear();
        game.render(&mut commands);
        total_commands += commands.len();

        let input = TickInput {
            keys: scripted_keys(frame),
            now_ms,
            toggle_debug: false,
        };
        game.advance(&input, FRAME_MS);

        if game.can_restart(now_ms) {
            let state = game.state();
            let outcome = match state.outcome() {
                Some(Outcome::Won) => "won",
                _ => "lost",
            };
            println!(
                "session {sessions}: {outcome} with score {} after {:.1}s",
                state.score,
                state.game_time * 0.001
            );
            game.reset();
            sessions += 1;
        }
    }

    let state = game.state();
    println!(
        "final session {sessions}: score {}, time {:.1}s, enemies {}, ammo {:.1}/{}",
        state.score,
        state.game_time * 0.001,
        state.enemies.len(),
        state.ammo.current(),
        state.ammo.max()
    );
    println!(
        "{} frames, {:.1} draw commands/frame",
        args.frames,
        total_commands as f64 / args.frames.max(1) as f64
    );
}
