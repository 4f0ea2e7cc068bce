//! Rooms and Secret Passages

use std::collections::BTreeSet;
use std::fmt;

use serde::{Serialize, Deserialize};

use crate::core::position::Position;
use crate::game::suspect::{SuspectName, Weapon};

/// Room identifier, matching the room's token on the board map.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct RoomId(pub u8);

impl fmt::Display for RoomId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "room {}", self.0)
    }
}

/// Directed passage from a cell in one room to a cell in another.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Teleport {
    /// Room the passage starts in
    pub source_room: RoomId,
    /// Teleport cell inside `source_room`
    pub source_position: Position,
    /// Room the passage leads to
    pub destination_room: RoomId,
    /// Arrival cell inside `destination_room`
    pub destination_position: Position,
}

/// A named room on the board.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Room {
    /// Identifier (board token)
    pub id: RoomId,

    /// Display name
    pub name: String,

    /// Every cell of the room: interior, doors and teleports
    pub positions: BTreeSet<Position>,

    /// Suspects currently inside
    pub occupants: BTreeSet<SuspectName>,

    /// Outbound secret passages
    pub teleports: Vec<Teleport>,

    /// Weapons placed here at setup
    pub weapons: Vec<Weapon>,
}

impl Room {
    /// Create an empty room. Positions are filled in when the board is built.
    pub fn new(id: RoomId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            positions: BTreeSet::new(),
            occupants: BTreeSet::new(),
            teleports: Vec::new(),
            weapons: Vec::new(),
        }
    }

    /// Check whether a cell belongs to this room.
    #[inline]
    pub fn contains(&self, position: Position) -> bool {
        self.positions.contains(&position)
    }

    /// Outbound passage starting at `position`, if any.
    pub fn teleport_from(&self, position: Position) -> Option<&Teleport> {
        self.teleports.iter().find(|t| t.source_position == position)
    }

    /// Check whether a suspect is inside.
    #[inline]
    pub fn has_occupant(&self, suspect: SuspectName) -> bool {
        self.occupants.contains(&suspect)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_teleport_lookup() {
        let mut room = Room::new(RoomId(1), "Kitchen");
        room.positions.insert(Position::new(1, 0));
        room.teleports.push(Teleport {
            source_room: RoomId(1),
            source_position: Position::new(1, 0),
            destination_room: RoomId(9),
            destination_position: Position::new(24, 23),
        });

        assert!(room.contains(Position::new(1, 0)));
        assert_eq!(
            room.teleport_from(Position::new(1, 0)).map(|t| t.destination_room),
            Some(RoomId(9))
        );
        assert!(room.teleport_from(Position::new(1, 1)).is_none());
    }
}
