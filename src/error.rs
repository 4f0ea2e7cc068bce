//! Error types for board setup and movement.
//!
//! Every fallible engine operation returns [`GameResult`]. A failed move
//! leaves the game untouched, so callers can surface the message verbatim
//! and ask for another direction.

use crate::core::position::{Direction, Position};
use crate::game::field::Field;
use crate::game::state::GameStatus;
use crate::game::suspect::SuspectName;

/// Errors produced by the engine.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    /// The step would leave the board.
    #[error("cannot move {direction} from {position}: out of bounds")]
    OutOfBounds {
        /// Where the suspect stood.
        position: Position,
        /// Requested direction.
        direction: Direction,
    },

    /// The target cell cannot be entered from here in this direction.
    #[error("cannot move onto {field:?} at {position}: wall")]
    Wall {
        /// The rejected target cell.
        position: Position,
        /// Logical field at the target.
        field: Field,
    },

    /// Another suspect stands on the target corridor cell.
    #[error("field {position} is already taken")]
    FieldTaken {
        /// The occupied cell.
        position: Position,
    },

    /// A direction string could not be parsed.
    #[error("invalid direction: {0:?}")]
    InvalidDirection(String),

    /// A door or room cell is not part of any room definition.
    #[error("no room contains {position}")]
    RoomNotFound {
        /// The cell that should belong to a room.
        position: Position,
    },

    /// A teleport cell has no outbound link.
    #[error("no teleport starts at {position}")]
    TeleportNotFound {
        /// The teleport cell.
        position: Position,
    },

    /// Setup could not complete.
    #[error("setup failed: {0}")]
    Setup(String),

    /// Board map input is malformed.
    #[error("invalid board map: {0}")]
    InvalidMap(String),

    /// No player plays this suspect.
    #[error("no player plays {0}")]
    PlayerNotFound(SuspectName),

    /// Operation not allowed in the current game status.
    #[error("game is {actual:?}, expected {expected:?}")]
    InvalidStatus {
        /// Status the operation requires.
        expected: GameStatus,
        /// Status the game is in.
        actual: GameStatus,
    },
}

/// Result alias used across the engine.
pub type GameResult<T> = Result<T, GameError>;
