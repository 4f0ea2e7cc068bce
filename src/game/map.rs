//! Canonical Board Layout
//!
//! The standard 25 x 24 mansion: nine rooms, four secret passages, six
//! suspects on their start cells and six weapons.
//!
//! Map tokens are described in [`crate::game::field`].

use crate::core::position::Position;
use crate::error::GameResult;
use crate::game::board::{Board, PassageSpec};
use crate::game::room::{Room, RoomId};
use crate::game::suspect::{Suspect, SuspectName, Weapon};

/// Row count of the canonical board.
pub const CANONICAL_ROWS: usize = 25;

/// Column count of the canonical board.
pub const CANONICAL_COLS: usize = 24;

/// The canonical map, one string per row.
pub const CANONICAL_MAP: [&str; CANONICAL_ROWS] = [
    "000000000C0000C000000000",
    "T111110CCC2222CC0033333T",
    "111111CC22222222CC333333",
    "111111CC22222222CC333333",
    "111111CC22222222CCE33333",
    "111111CCE222222WCCC33333",
    "1111N1CC22222222CCCCCCCC",
    "0CCCCCCC2N2222N2CCCCCCC0",
    "0CCCCCCCCCCCCCCCCC555555",
    "44444CCCCCCCCCCCCCE55555",
    "44444444CC00000CCC555555",
    "44444444CC00000CCC555555",
    "4444444WCC00000CCC5555N5",
    "44444444CC00000CCCCCCCCC",
    "44444444CC00000CC777S777",
    "444444N4CC00000CC7777777",
    "0CCCCCCCCC00000CCE777777",
    "CCCCCCCCCCCCCCCCC7777777",
    "CCCCCCCCC88SS88CC7777777",
    "666666SCC888888CCCCCCCCC",
    "6666666CC88888WCCCCCCCCC",
    "6666666CC888888CCS999999",
    "6666666CC888888CC9999999",
    "6666666CC888888CC9999999",
    "T666666C088888800999999T",
];

/// Room ids and names, in id order.
pub const CANONICAL_ROOMS: [(u8, &str); 9] = [
    (1, "Kitchen"),
    (2, "Ballroom"),
    (3, "Conservatory"),
    (4, "Dining Room"),
    (5, "Billiard Room"),
    (6, "Lounge"),
    (7, "Library"),
    (8, "Hall"),
    (9, "Study"),
];

/// Secret passages: Kitchen <-> Study and Conservatory <-> Lounge.
/// Each passage lands on the partner teleport cell.
pub const CANONICAL_PASSAGES: [PassageSpec; 4] = [
    (Position::new(1, 0), Position::new(24, 23)),
    (Position::new(24, 23), Position::new(1, 0)),
    (Position::new(1, 23), Position::new(24, 0)),
    (Position::new(24, 0), Position::new(1, 23)),
];

/// Fresh, empty room definitions for the canonical board.
pub fn canonical_rooms() -> Vec<Room> {
    CANONICAL_ROOMS
        .iter()
        .map(|(id, name)| Room::new(RoomId(*id), *name))
        .collect()
}

/// The six suspects with their start cells and colours.
pub fn canonical_suspects() -> Vec<Suspect> {
    vec![
        Suspect::new(SuspectName::Scarlet, Position::new(24, 7), "#690500"),
        Suspect::new(SuspectName::White, Position::new(0, 9), "#cccccc"),
        Suspect::new(SuspectName::Green, Position::new(0, 14), "#083d00"),
        Suspect::new(SuspectName::Plum, Position::new(19, 23), "#370080"),
        Suspect::new(SuspectName::Peacock, Position::new(6, 23), "#003c52"),
        Suspect::new(SuspectName::Mustard, Position::new(17, 0), "#bf7900"),
    ]
}

/// Build the canonical board with all six weapons (not yet placed).
pub fn canonical_board() -> GameResult<Board> {
    Board::from_rows(
        &CANONICAL_MAP,
        canonical_rooms(),
        &CANONICAL_PASSAGES,
        Weapon::ALL.to_vec(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::field::Field;

    #[test]
    fn test_canonical_board_builds() {
        let board = canonical_board().unwrap();
        assert_eq!(board.rows(), CANONICAL_ROWS);
        assert_eq!(board.cols(), CANONICAL_COLS);
        assert_eq!(board.rooms().len(), 9);
        assert_eq!(board.weapons().len(), 6);
    }

    #[test]
    fn test_suspects_start_on_corridors() {
        let board = canonical_board().unwrap();
        for suspect in canonical_suspects() {
            assert_eq!(
                board.field_at(suspect.starting_position),
                Some(Field::Corridor),
                "{} starts off-corridor",
                suspect.name
            );
        }
    }

    #[test]
    fn test_every_room_has_a_door() {
        let board = canonical_board().unwrap();
        for room in board.rooms() {
            let doors = room
                .positions
                .iter()
                .filter(|p| matches!(board.field_at(**p), Some(Field::Door(_))))
                .count();
            assert!(doors > 0, "{} has no door", room.name);
        }
    }

    #[test]
    fn test_passages_connect_corner_rooms() {
        let board = canonical_board().unwrap();
        let kitchen = board.room(RoomId(1)).unwrap();
        let passage = kitchen.teleport_from(Position::new(1, 0)).unwrap();
        assert_eq!(passage.destination_room, RoomId(9));
        assert_eq!(passage.destination_position, Position::new(24, 23));

        let lounge = board.room(RoomId(6)).unwrap();
        let passage = lounge.teleport_from(Position::new(24, 0)).unwrap();
        assert_eq!(passage.destination_room, RoomId(3));
    }

    #[test]
    fn test_render_matches_map_when_empty() {
        let board = canonical_board().unwrap();
        assert_eq!(board.render(), CANONICAL_MAP.join("\n"));
    }
}
