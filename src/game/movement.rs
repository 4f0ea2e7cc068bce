//! Movement State Machine
//!
//! A move is resolved in two steps. [`plan_move`] is pure: it reads the board
//! and the mover, classifies the `(current field, target field)` pair and
//! either rejects the move or returns a [`MoveOutcome`]. [`apply_move`] then
//! commits that outcome. A rejected move therefore never touches any state.
//!
//! Transition table (`d` is the requested direction):
//!
//! | current      | target            | condition                         | kind           | turn |
//! |--------------|-------------------|-----------------------------------|----------------|------|
//! | any          | Void              |                                   | `Wall`         |      |
//! | Corridor     | Corridor          |                                   | `Step`         | yes  |
//! | Corridor     | Door(t)           | `d == t`                          | `EnterRoom`    | yes  |
//! | Door(t)      | Corridor          | `d == t.opposite()`               | `LeaveRoom`    | yes  |
//! | Door(a)      | Door(b), other room | `d == b && d == a.opposite()`   | `CrossDoorway` | no   |
//! | room cell    | Door/Room, same room |                                | `Reposition`   | no   |
//! | room cell    | Teleport, same room | passage registered at target    | `Teleport`     | no   |
//! | anything else |                  |                                   | `Wall`         |      |
//!
//! Corridor targets with a suspect on them fail `FieldTaken` once the move is
//! otherwise legal. Room cells are shared.

use serde::{Serialize, Deserialize};
use tracing::trace;

use crate::core::position::{Direction, Position};
use crate::error::{GameError, GameResult};
use crate::game::board::Board;
use crate::game::field::Field;
use crate::game::room::RoomId;
use crate::game::suspect::{PlayerState, SuspectName};

/// What kind of step a move was.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MoveKind {
    /// Corridor to corridor
    Step,
    /// Corridor onto a door, entering its room
    EnterRoom(RoomId),
    /// Door back out onto the corridor
    LeaveRoom(RoomId),
    /// Through a shared doorway into the adjoining room
    CrossDoorway {
        /// Room left
        from: RoomId,
        /// Room entered
        to: RoomId,
    },
    /// Free repositioning inside a room
    Reposition(RoomId),
    /// Through a secret passage
    Teleport {
        /// Room left
        from: RoomId,
        /// Room arrived in
        to: RoomId,
    },
}

impl MoveKind {
    /// Corridor and door traversals use up movement; anything inside rooms is free.
    #[inline]
    pub fn consumes_turn(self) -> bool {
        matches!(self, MoveKind::Step | MoveKind::EnterRoom(_) | MoveKind::LeaveRoom(_))
    }
}

/// A legal move, ready to be applied.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveOutcome {
    /// Who moves
    pub suspect: SuspectName,
    /// Direction requested
    pub direction: Direction,
    /// Classification
    pub kind: MoveKind,
    /// Cell left
    pub from: Position,
    /// Cell ended on (a passage's arrival cell for teleports)
    pub to: Position,
    /// Whether the move uses up movement budget
    pub consumes_turn: bool,
}

/// Decide whether `player` may step in `direction` and where it ends up.
pub fn plan_move(
    board: &Board,
    player: &PlayerState,
    direction: Direction,
) -> GameResult<MoveOutcome> {
    let from = player.position;
    let out_of_bounds = GameError::OutOfBounds {
        position: from,
        direction,
    };

    let current = board.field_at(from).ok_or(out_of_bounds.clone())?;
    let candidate = from
        .step(direction, board.rows(), board.cols())
        .ok_or(out_of_bounds.clone())?;
    let target = board.field_at(candidate).ok_or(out_of_bounds)?;

    let wall = GameError::Wall {
        position: candidate,
        field: target,
    };

    let (kind, to) = match (current, target) {
        (_, Field::Void) => return Err(wall),
        (_, Field::Occupied) => return Err(GameError::FieldTaken { position: candidate }),

        (Field::Corridor, Field::Corridor) => (MoveKind::Step, candidate),

        (Field::Corridor, Field::Door(tag)) if direction == tag => {
            (MoveKind::EnterRoom(room_id_at(board, candidate)?), candidate)
        }

        (Field::Door(tag), Field::Corridor) if direction == tag.opposite() => {
            (MoveKind::LeaveRoom(room_id_at(board, from)?), candidate)
        }

        (current, Field::Door(_) | Field::Room(_)) if current.is_room_cell() => {
            let here = room_id_at(board, from)?;
            let there = room_id_at(board, candidate)?;
            if here == there {
                (MoveKind::Reposition(here), candidate)
            } else {
                match (current, target) {
                    (Field::Door(out), Field::Door(into))
                        if direction == into && direction == out.opposite() =>
                    {
                        (MoveKind::CrossDoorway { from: here, to: there }, candidate)
                    }
                    _ => return Err(wall),
                }
            }
        }

        (current, Field::Teleport) if current.is_room_cell() => {
            let here = room_id_at(board, from)?;
            let room = board
                .room_at(candidate)
                .ok_or(GameError::RoomNotFound { position: candidate })?;
            if room.id != here {
                return Err(wall);
            }
            let passage = room
                .teleport_from(candidate)
                .ok_or(GameError::TeleportNotFound { position: candidate })?;
            (
                MoveKind::Teleport {
                    from: here,
                    to: passage.destination_room,
                },
                passage.destination_position,
            )
        }

        _ => return Err(wall),
    };

    if board.is_taken(to) {
        return Err(GameError::FieldTaken { position: to });
    }

    Ok(MoveOutcome {
        suspect: player.name(),
        direction,
        kind,
        from,
        to,
        consumes_turn: kind.consumes_turn(),
    })
}

/// Commit a planned move: occupancy, room occupants and the player's position.
pub fn apply_move(board: &mut Board, player: &mut PlayerState, outcome: &MoveOutcome) {
    let name = player.name();

    board.vacate(name, outcome.from);
    board.place(name, outcome.to);

    match outcome.kind {
        MoveKind::EnterRoom(id) => {
            if let Some(room) = board.room_mut(id) {
                room.occupants.insert(name);
            }
        }
        MoveKind::LeaveRoom(id) => {
            if let Some(room) = board.room_mut(id) {
                room.occupants.remove(&name);
            }
        }
        MoveKind::CrossDoorway { from, to } | MoveKind::Teleport { from, to } => {
            if let Some(room) = board.room_mut(from) {
                room.occupants.remove(&name);
            }
            if let Some(room) = board.room_mut(to) {
                room.occupants.insert(name);
            }
        }
        MoveKind::Step | MoveKind::Reposition(_) => {}
    }

    player.position = outcome.to;
    trace!("{} moved {} {} -> {} ({:?})", name, outcome.direction, outcome.from, outcome.to, outcome.kind);
}

fn room_id_at(board: &Board, position: Position) -> GameResult<RoomId> {
    board
        .room_at(position)
        .map(|r| r.id)
        .ok_or(GameError::RoomNotFound { position })
}
