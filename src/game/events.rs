//! Game Events
//!
//! Events generated during setup and play for replay and logging.

use serde::{Serialize, Deserialize};

use crate::core::position::Position;
use crate::game::movement::{MoveKind, MoveOutcome};
use crate::game::room::RoomId;
use crate::game::state::GameStatus;
use crate::game::suspect::{SuspectName, Weapon};

/// Game event data.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEventData {
    /// Game status changed
    StatusChanged {
        old_status: GameStatus,
        new_status: GameStatus,
    },

    /// A weapon was placed in a room during setup
    WeaponPlaced {
        weapon: Weapon,
        room: RoomId,
    },

    /// A player was dealt their hand
    CardsDealt {
        player: SuspectName,
        count: u32,
    },

    /// Setup finished and the first player was drawn
    GameStarted {
        first_player: SuspectName,
        players: Vec<SuspectName>,
    },

    /// Dice were rolled
    DiceRolled {
        total: u32,
    },

    /// A suspect moved
    Moved {
        suspect: SuspectName,
        from: Position,
        to: Position,
        kind: MoveKind,
        consumes_turn: bool,
    },
}

/// A game event with its position in the log.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameEvent {
    /// Monotonic sequence number within one game
    pub sequence: u32,

    /// Suspect involved, if any
    pub suspect: Option<SuspectName>,

    /// Event data
    pub data: GameEventData,
}

impl GameEvent {
    /// Create a new event.
    pub fn new(sequence: u32, data: GameEventData) -> Self {
        let suspect = match &data {
            GameEventData::CardsDealt { player, .. } => Some(*player),
            GameEventData::GameStarted { first_player, .. } => Some(*first_player),
            GameEventData::Moved { suspect, .. } => Some(*suspect),
            _ => None,
        };

        Self {
            sequence,
            suspect,
            data,
        }
    }

    /// Create status changed event.
    pub fn status_changed(sequence: u32, old_status: GameStatus, new_status: GameStatus) -> Self {
        Self::new(
            sequence,
            GameEventData::StatusChanged {
                old_status,
                new_status,
            },
        )
    }

    /// Create moved event from an applied move.
    pub fn moved(sequence: u32, outcome: &MoveOutcome) -> Self {
        Self::new(
            sequence,
            GameEventData::Moved {
                suspect: outcome.suspect,
                from: outcome.from,
                to: outcome.to,
                kind: outcome.kind,
                consumes_turn: outcome.consumes_turn,
            },
        )
    }
}
