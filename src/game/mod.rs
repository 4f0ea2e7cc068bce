//! Game Logic Module
//!
//! All game code. 100% deterministic given the random source.
//!
//! ## Module Structure
//!
//! - `field`: Cell types and map tokens
//! - `room`: Rooms and secret passages
//! - `suspect`: Suspects, weapons, player state
//! - `card`: Cards and the solution
//! - `board`: Grid, occupancy, weapon placement
//! - `map`: Canonical board layout
//! - `movement`: Movement state machine
//! - `setup`: Solution draw and card deal
//! - `events`: Game events for replay/logging
//! - `state`: Game lifecycle

pub mod field;
pub mod room;
pub mod suspect;
pub mod card;
pub mod board;
pub mod map;
pub mod movement;
pub mod setup;
pub mod events;
pub mod state;

// Re-export key types
pub use board::Board;
pub use card::{Card, CardValue, Solution};
pub use events::{GameEvent, GameEventData};
pub use movement::{MoveKind, MoveOutcome};
pub use state::{Game, GameConfig, GameStatus};
