//! Cluedo Engine
//!
//! Headless demo: sets up a seeded game on the canonical board, walks a few
//! suspects around, and replays the same moves to verify determinism.

use anyhow::{ensure, Context, Result};
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use cluedo::{
    Direction, Game, GameConfig, SuspectName, VERSION, BOARD_ROWS, BOARD_COLS,
    core::hash::StateHash,
};

/// Game id the demo seed is derived from when `CLUEDO_SEED` is unset.
const DEMO_GAME_ID: [u8; 16] = *b"cluedo-demo-0001";

/// Scripted walk: Scarlet enters the Lounge, Mustard heads east, White
/// walks into the Ballroom.
const SCRIPT: &[(SuspectName, Direction)] = &[
    (SuspectName::Scarlet, Direction::North),
    (SuspectName::Scarlet, Direction::North),
    (SuspectName::Scarlet, Direction::North),
    (SuspectName::Scarlet, Direction::North),
    (SuspectName::Scarlet, Direction::North),
    (SuspectName::Scarlet, Direction::North),
    (SuspectName::Scarlet, Direction::West),
    (SuspectName::Scarlet, Direction::South),
    (SuspectName::Scarlet, Direction::South),
    (SuspectName::Scarlet, Direction::East), // wall: room interior edge
    (SuspectName::Mustard, Direction::East),
    (SuspectName::Mustard, Direction::West),
    (SuspectName::Mustard, Direction::West), // out of bounds
    (SuspectName::White, Direction::South),
    (SuspectName::White, Direction::West),
    (SuspectName::White, Direction::West),
    (SuspectName::White, Direction::South),
    (SuspectName::White, Direction::South),
    (SuspectName::White, Direction::South),
    (SuspectName::White, Direction::South),
    (SuspectName::White, Direction::East),
];

fn main() -> Result<()> {
    // Initialize logging
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .context("failed to set tracing subscriber")?;

    info!("Cluedo Engine v{}", VERSION);
    info!("Board: {} x {}", BOARD_ROWS, BOARD_COLS);

    let mut config = GameConfig::for_game(&DEMO_GAME_ID, &SuspectName::ALL);
    if let Ok(value) = std::env::var("CLUEDO_SEED") {
        config.rng_seed = value
            .parse::<u64>()
            .with_context(|| format!("CLUEDO_SEED is not a number: {value:?}"))?;
    }

    let hash = demo_game(&config)?;

    // Verify determinism by replaying
    info!("=== Verifying Determinism ===");
    let replay_hash = run_script(&config)?.compute_hash();
    info!("Replay State Hash: {}", hex::encode(replay_hash));

    ensure!(hash == replay_hash, "determinism failure: hashes differ");
    info!("DETERMINISM VERIFIED: Hashes match!");
    Ok(())
}

/// Play the scripted game with logging and return its final hash.
fn demo_game(config: &GameConfig) -> Result<StateHash> {
    info!("=== Starting Demo Game ===");
    info!("RNG Seed: {}", config.rng_seed);

    let mut game = run_script(config)?;

    for event in game.take_events() {
        info!("event {}", serde_json::to_string(&event)?);
    }

    if let Some(solution) = game.solution() {
        info!(
            "Solution: {} with the {} in the {}",
            solution.suspect,
            solution.weapon,
            game.board()
                .room(solution.room)
                .map_or("unknown room", |r| r.name.as_str())
        );
    }

    for player in game.players() {
        info!(
            "{} at {} on {:?}, holding {} cards",
            player.name(),
            player.position,
            game.covered_field(player.name())?,
            player.cards.len()
        );
    }

    info!("=== Board ===");
    for line in game.board().render().lines() {
        info!("{}", line);
    }

    let hash = game.compute_hash();
    info!("Final State Hash: {}", hex::encode(hash));

    game.finish()?;
    info!("Game {:?} after {} moves", game.status(), game.move_count());
    Ok(hash)
}

/// Set up a six-player game and apply the script. Rejected moves are logged
/// and skipped.
fn run_script(config: &GameConfig) -> Result<Game> {
    let mut game = Game::canonical(&SuspectName::ALL, config.clone())
        .context("failed to build canonical game")?;
    game.init().context("setup failed")?;

    let roll = game.roll_dice()?;
    info!("{:?} rolled {}", game.current_player(), roll);

    for &(suspect, direction) in SCRIPT {
        match game.move_player(suspect, direction) {
            Ok(outcome) => info!(
                "{} {} -> {} {:?}{}",
                suspect,
                outcome.from,
                outcome.to,
                outcome.kind,
                if outcome.consumes_turn { "" } else { " (free)" }
            ),
            Err(err) => warn!("{} rejected: {}", suspect, err),
        }
    }
    Ok(game)
}
