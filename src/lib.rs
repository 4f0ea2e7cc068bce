//! # Cluedo Engine
//!
//! Deterministic board engine for a Cluedo-style deduction game: the movement
//! state machine over corridors, doors, rooms and secret passages, and the
//! setup that places weapons, draws the solution and deals the cards.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                      CLUEDO ENGINE                           │
//! ├─────────────────────────────────────────────────────────────┤
//! │  core/           - Deterministic primitives                  │
//! │  ├── position.rs - Grid positions and compass directions     │
//! │  ├── rng.rs      - RandomSource trait, Xorshift128+ PRNG     │
//! │  └── hash.rs     - State hashing for replay checks           │
//! │                                                              │
//! │  game/           - Game logic (deterministic)                │
//! │  ├── field.rs    - Cell types and map tokens                 │
//! │  ├── room.rs     - Rooms and secret passages                 │
//! │  ├── suspect.rs  - Suspects, weapons, players, notebooks     │
//! │  ├── card.rs     - Cards and the hidden solution             │
//! │  ├── board.rs    - Grid, rooms, occupancy, weapon placement  │
//! │  ├── map.rs      - Canonical mansion layout                  │
//! │  ├── movement.rs - Movement state machine                    │
//! │  ├── setup.rs    - Solution draw and card deal               │
//! │  ├── events.rs   - Event log                                 │
//! │  └── state.rs    - Game lifecycle                            │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Determinism Guarantee
//!
//! - No HashMap (uses BTreeMap for sorted iteration)
//! - No system time dependencies
//! - All randomness from an injected [`RandomSource`], seeded Xorshift128+
//!   by default
//!
//! Given the same seed and the same moves, two games end in the same state
//! and produce the same [`Game::compute_hash`].

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

pub mod core;
pub mod error;
pub mod game;

// Re-export commonly used types
pub use crate::core::position::{Direction, Position};
pub use crate::core::rng::{DeterministicRng, RandomSource};
pub use error::{GameError, GameResult};
pub use game::field::Field;
pub use game::movement::{MoveKind, MoveOutcome};
pub use game::state::{Game, GameConfig, GameStatus};
pub use game::suspect::{SuspectName, Weapon};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Rows of the canonical board
pub const BOARD_ROWS: usize = game::map::CANONICAL_ROWS;

/// Columns of the canonical board
pub const BOARD_COLS: usize = game::map::CANONICAL_COLS;
