//! Property-based tests for setup and movement.
//!
//! Run with: cargo test --release properties

#![allow(missing_docs)]
#![allow(clippy::unwrap_used)]

use proptest::prelude::*;

use cluedo::{
    DeterministicRng, Direction, Field, Game, GameConfig, Position, RandomSource, SuspectName,
};

fn direction() -> impl Strategy<Value = Direction> {
    prop_oneof![
        Just(Direction::North),
        Just(Direction::East),
        Just(Direction::South),
        Just(Direction::West),
    ]
}

fn suspect() -> impl Strategy<Value = SuspectName> {
    (0usize..6).prop_map(|i| SuspectName::ALL[i])
}

fn started(seed: u64, players: usize) -> Game {
    let config = GameConfig {
        rng_seed: seed,
        ..GameConfig::default()
    };
    let mut game = Game::canonical(&SuspectName::ALL[..players], config).unwrap();
    game.init().unwrap();
    game
}

/// Occupancy map, room occupant lists and player positions agree.
fn assert_consistent(game: &Game) {
    let board = game.board();
    for player in game.players() {
        let position = player.position;
        assert!(board.occupants_at(position).any(|n| n == player.name()));

        let field = board.field_at(position).unwrap();
        assert!(field == Field::Corridor || field.is_room_cell());

        for room in board.rooms() {
            assert_eq!(room.contains(position), room.has_occupant(player.name()));
        }
    }
    for (position, _) in board.occupancy() {
        if board.field_at(position) == Some(Field::Corridor) {
            assert_eq!(board.occupants_at(position).count(), 1);
        }
    }
    assert_eq!(board.occupancy().count(), game.players().len());
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    /// Inclusive bounds: every draw lands in [min, max].
    #[test]
    fn prop_uniform_int_inclusive(seed in any::<u64>(), min in 0usize..1000, span in 0usize..50) {
        let mut rng = DeterministicRng::new(seed);
        let max = min + span;
        for _ in 0..20 {
            let value = rng.uniform_int(min, max);
            prop_assert!(value >= min && value <= max);
        }
    }

    /// Shuffling permutes without losing or duplicating items.
    #[test]
    fn prop_shuffle_is_permutation(seed in any::<u64>(), len in 0usize..40) {
        let mut rng = DeterministicRng::new(seed);
        let mut items: Vec<usize> = (0..len).collect();
        rng.shuffle(&mut items);
        items.sort_unstable();
        prop_assert_eq!(items, (0..len).collect::<Vec<_>>());
    }

    /// Every non-solution card is dealt exactly once and hands differ by at most one.
    #[test]
    fn prop_deal_partitions_deck(seed in any::<u64>(), players in 1usize..=6) {
        let game = started(seed, players);
        let solution = *game.solution().unwrap();

        for card in game.deck() {
            let holders = game.players().iter().filter(|p| p.holds(card.value)).count();
            prop_assert_eq!(holders, usize::from(!solution.contains(card.value)));
            prop_assert_eq!(card.is_solution, solution.contains(card.value));
        }

        let sizes: Vec<usize> = game.players().iter().map(|p| p.cards.len()).collect();
        let spread = sizes.iter().max().unwrap() - sizes.iter().min().unwrap();
        prop_assert!(spread <= 1);
    }

    /// Random walks keep the board consistent; rejected moves change nothing.
    #[test]
    fn prop_random_walk_atomic(
        seed in any::<u64>(),
        moves in prop::collection::vec((suspect(), direction()), 1..120)
    ) {
        let mut game = started(seed, 6);

        for (name, direction) in moves {
            let hash = game.compute_hash();
            let render = game.board().render();
            let position = game.player(name).unwrap().position;

            match game.move_player(name, direction) {
                Ok(outcome) => {
                    prop_assert_eq!(outcome.from, position);
                    prop_assert_eq!(game.player(name).unwrap().position, outcome.to);
                }
                Err(_) => {
                    prop_assert_eq!(game.compute_hash(), hash);
                    prop_assert_eq!(game.board().render(), render);
                    prop_assert_eq!(game.player(name).unwrap().position, position);
                }
            }
            assert_consistent(&game);
        }
    }

    /// A legal corridor step followed by the opposite step restores the board.
    #[test]
    fn prop_corridor_round_trip(seed in any::<u64>(), name in suspect(), direction in direction()) {
        let mut game = started(seed, 6);
        let start = game.player(name).unwrap().position;
        let before = game.board().render();

        let first = game.move_player(name, direction);
        prop_assume!(matches!(first, Ok(ref o) if o.kind == cluedo::MoveKind::Step));

        game.move_player(name, direction.opposite()).unwrap();
        prop_assert_eq!(game.player(name).unwrap().position, start);
        prop_assert_eq!(game.covered_field(name).unwrap(), Field::Corridor);
        prop_assert_eq!(game.board().render(), before);
    }

    /// Out-of-grid steps are always reported as such.
    #[test]
    fn prop_edges_are_out_of_bounds(row in 0usize..25, col in 0usize..24, direction in direction()) {
        let position = Position::new(row, col);
        let outside = position.step(direction, 25, 24).is_none();
        let expected = match direction {
            Direction::North => row == 0,
            Direction::South => row == 24,
            Direction::West => col == 0,
            Direction::East => col == 23,
        };
        prop_assert_eq!(outside, expected);
    }
}
