//! Board Fields
//!
//! The logical type of a single grid cell and its one-character map token.
//!
//! | token      | field                                 |
//! |------------|---------------------------------------|
//! | `C`        | corridor                              |
//! | `N E S W`  | door, entered travelling that way     |
//! | `1`-`9`, `a`-`z` | interior of room 1..35          |
//! | `T`        | teleport                              |
//! | `0`        | void                                  |
//! | `P`        | occupied corridor (rendered view only)|

use serde::{Serialize, Deserialize};

use crate::core::position::Direction;
use crate::game::room::RoomId;

/// Logical type of one board cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Field {
    /// Open corridor, one suspect at a time.
    Corridor,
    /// Doorway of a room, tagged with the direction one travels to pass
    /// through it from the corridor side.
    Door(Direction),
    /// Room interior.
    Room(RoomId),
    /// Impassable filler.
    Void,
    /// Secret passage entrance inside a room.
    Teleport,
    /// Corridor covered by a suspect marker. Never stored in the logical
    /// grid; only produced by the rendered view.
    Occupied,
}

impl Field {
    /// Parse a map token.
    pub fn from_token(token: char) -> Option<Field> {
        match token {
            'C' => Some(Field::Corridor),
            '0' => Some(Field::Void),
            'T' => Some(Field::Teleport),
            'P' => Some(Field::Occupied),
            'N' | 'E' | 'S' | 'W' => Direction::from_token(token).map(Field::Door),
            '1'..='9' | 'a'..='z' => token
                .to_digit(36)
                .map(|id| Field::Room(RoomId(id as u8))),
            _ => None,
        }
    }

    /// Map token for this field.
    pub fn token(self) -> char {
        match self {
            Field::Corridor => 'C',
            Field::Door(direction) => direction.token(),
            Field::Room(id) => char::from_digit(u32::from(id.0), 36).unwrap_or('?'),
            Field::Void => '0',
            Field::Teleport => 'T',
            Field::Occupied => 'P',
        }
    }

    /// Door, interior or teleport: cells that belong to a room and may be
    /// shared by several suspects.
    #[inline]
    pub fn is_room_cell(self) -> bool {
        matches!(self, Field::Door(_) | Field::Room(_) | Field::Teleport)
    }
}
