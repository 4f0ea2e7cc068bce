//! Setup invariants on the canonical board and on small custom boards.

#![allow(missing_docs)]
#![allow(clippy::unwrap_used)]

use std::collections::BTreeSet;

use cluedo::core::rng::derive_game_seed;
use cluedo::game::board::Board;
use cluedo::game::card::CardValue;
use cluedo::game::map::canonical_suspects;
use cluedo::game::room::{Room, RoomId};
use cluedo::{Game, GameConfig, GameError, GameStatus, SuspectName, Weapon};

fn started(seed: u64, seats: &[SuspectName]) -> Game {
    let config = GameConfig {
        rng_seed: seed,
        ..GameConfig::default()
    };
    let mut game = Game::canonical(seats, config).unwrap();
    game.init().unwrap();
    game
}

#[test]
fn test_one_weapon_per_room() {
    for seed in 0..50 {
        let game = started(seed, &SuspectName::ALL);
        let board = game.board();

        let mut rooms = BTreeSet::new();
        for weapon in Weapon::ALL {
            let room = board.weapon_room(weapon).unwrap();
            assert!(rooms.insert(room), "seed {seed}: two weapons in {room}");
        }
        for room in board.rooms() {
            assert!(room.weapons.len() <= 1);
        }
    }
}

#[test]
fn test_solution_cards_are_never_dealt() {
    for seed in 0..50 {
        let game = started(seed, &SuspectName::ALL);
        let solution = *game.solution().unwrap();

        let flagged: Vec<CardValue> = game
            .deck()
            .iter()
            .filter(|c| c.is_solution)
            .map(|c| c.value)
            .collect();
        assert_eq!(flagged.len(), 3);
        for value in solution.cards() {
            assert!(flagged.contains(&value));
            assert!(game.players().iter().all(|p| !p.holds(value)));
        }
    }
}

#[test]
fn test_every_other_card_held_once() {
    let game = started(77, &SuspectName::ALL);
    let solution = *game.solution().unwrap();

    for card in game.deck() {
        let holders = game.players().iter().filter(|p| p.holds(card.value)).count();
        let expected = usize::from(!solution.contains(card.value));
        assert_eq!(holders, expected, "{} held {} times", card.value, holders);
    }
}

#[test]
fn test_hands_are_balanced() {
    for count in 1..=6 {
        let seats = &SuspectName::ALL[..count];
        let game = started(count as u64, seats);

        let sizes: Vec<usize> = game.players().iter().map(|p| p.cards.len()).collect();
        let min = *sizes.iter().min().unwrap();
        let max = *sizes.iter().max().unwrap();
        assert!(max - min <= 1, "{count} players got {sizes:?}");
        assert_eq!(sizes.iter().sum::<usize>(), 18);
    }
}

#[test]
fn test_notebooks_start_with_own_hand_crossed_out() {
    let game = started(5, &SuspectName::ALL[..3]);
    for player in game.players() {
        for card in &player.cards {
            assert!(!player.notebook.is_possible(card.value));
        }
        assert_eq!(player.notebook.possible().count(), 21 - player.cards.len());
    }
}

#[test]
fn test_same_seed_same_setup() {
    let a = started(31337, &SuspectName::ALL);
    let b = started(31337, &SuspectName::ALL);

    assert_eq!(a.solution(), b.solution());
    assert_eq!(a.current_player(), b.current_player());
    assert_eq!(a.compute_hash(), b.compute_hash());
    for (pa, pb) in a.players().iter().zip(b.players()) {
        assert_eq!(pa.cards, pb.cards);
    }
}

#[test]
fn test_solutions_vary_with_seed() {
    let solutions: BTreeSet<_> = (0..40)
        .map(|seed| {
            let game = started(seed, &SuspectName::ALL);
            let s = game.solution().unwrap();
            (s.suspect, s.weapon, s.room)
        })
        .collect();
    assert!(solutions.len() > 10);
}

#[test]
fn test_too_many_weapons() {
    let rows = ["11C22"];
    let board = Board::from_rows(
        &rows,
        vec![Room::new(RoomId(1), "Cellar"), Room::new(RoomId(2), "Attic")],
        &[],
        vec![Weapon::Rope, Weapon::Dagger, Weapon::Wrench],
    )
    .unwrap();
    let mut suspects = canonical_suspects();
    for suspect in &mut suspects {
        suspect.starting_position = cluedo::Position::new(0, 2);
    }

    let mut game = Game::new(board, suspects, &[SuspectName::Green], GameConfig::default()).unwrap();
    let err = game.init().unwrap_err();

    assert!(matches!(err, GameError::Setup(_)));
    assert_eq!(game.status(), GameStatus::Created);
    assert!(game.solution().is_none());
    assert!(game.take_events().is_empty());
}

#[test]
fn test_start_cells_must_be_free() {
    let rows = ["11C22"];
    let board = Board::from_rows(
        &rows,
        vec![Room::new(RoomId(1), "Cellar"), Room::new(RoomId(2), "Attic")],
        &[],
        vec![Weapon::Rope],
    )
    .unwrap();
    let mut suspects = canonical_suspects();
    for suspect in &mut suspects {
        suspect.starting_position = cluedo::Position::new(0, 2);
    }

    let result = Game::new(
        board,
        suspects,
        &[SuspectName::Green, SuspectName::Plum],
        GameConfig::default(),
    );
    assert!(matches!(result, Err(GameError::InvalidMap(_))));
}

#[test]
fn test_seed_derivation() {
    let id = [7u8; 16];
    let names = ["Scarlet", "White", "Green"];

    assert_eq!(derive_game_seed(&id, &names), derive_game_seed(&id, &names));
    assert_ne!(
        derive_game_seed(&id, &names),
        derive_game_seed(&id, &["White", "Scarlet", "Green"])
    );
    assert_ne!(derive_game_seed(&id, &names), derive_game_seed(&[8u8; 16], &names));
}
