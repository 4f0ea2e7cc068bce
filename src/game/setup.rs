//! Game Setup
//!
//! Places the weapons, draws the hidden solution, deals the remaining cards
//! and draws the starting player. All randomness comes from the injected
//! [`RandomSource`].

use serde::{Serialize, Deserialize};
use tracing::debug;

use crate::core::rng::RandomSource;
use crate::error::{GameError, GameResult};
use crate::game::board::Board;
use crate::game::card::{Card, CardValue, Solution};
use crate::game::room::RoomId;
use crate::game::suspect::{Notebook, PlayerState, SuspectName, Weapon};

/// Setup configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SetupConfig {
    /// Room draws allowed per weapon before placement gives up
    pub max_placement_attempts: u32,
}

impl Default for SetupConfig {
    fn default() -> Self {
        Self {
            max_placement_attempts: 256,
        }
    }
}

/// Everything setup decided.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SetupOutcome {
    /// The hidden triple
    pub solution: Solution,

    /// Every card in play, solution cards flagged
    pub deck: Vec<Card>,

    /// Room each weapon was placed in
    pub placements: Vec<(Weapon, RoomId)>,

    /// Number of cards dealt to each player, by player index
    pub hand_sizes: Vec<usize>,

    /// Index of the player who moves first
    pub first_player: usize,
}

/// Run setup over a board and its players.
///
/// Fails with [`GameError::Setup`] when any of suspects, weapons, rooms or
/// players is empty, or when weapons cannot be placed. Nothing is changed on
/// failure.
pub fn initialize<R: RandomSource>(
    board: &mut Board,
    suspects: &[SuspectName],
    players: &mut [PlayerState],
    rng: &mut R,
    config: &SetupConfig,
) -> GameResult<SetupOutcome> {
    if suspects.is_empty() {
        return Err(GameError::Setup("no suspects".into()));
    }
    if board.weapons().is_empty() {
        return Err(GameError::Setup("no weapons".into()));
    }
    if board.rooms().is_empty() {
        return Err(GameError::Setup("no rooms".into()));
    }
    if players.is_empty() {
        return Err(GameError::Setup("no players".into()));
    }

    let placements = board.distribute_weapons(rng, config.max_placement_attempts)?;

    let solution = choose_solution(board, suspects, rng)?;
    debug!("Solution drawn");

    let deck: Vec<CardValue> = suspects
        .iter()
        .map(|s| CardValue::Suspect(*s))
        .chain(board.weapons().iter().map(|w| CardValue::Weapon(*w)))
        .chain(board.rooms().iter().map(|r| CardValue::Room(r.id)))
        .collect();

    let full_deck: Vec<Card> = deck
        .iter()
        .map(|value| Card {
            value: *value,
            is_solution: solution.contains(*value),
        })
        .collect();

    let mut remainder: Vec<Card> = full_deck.iter().copied().filter(|c| !c.is_solution).collect();
    rng.shuffle(&mut remainder);

    for player in players.iter_mut() {
        player.cards.clear();
        player.notebook = Notebook::new(deck.iter().copied());
    }

    let count = players.len();
    let mut hand_sizes = vec![0; count];
    for (i, card) in remainder.into_iter().enumerate() {
        players[i % count].receive(card);
        hand_sizes[i % count] += 1;
    }
    for (player, size) in players.iter().zip(&hand_sizes) {
        debug!("Dealt {} cards to {}", size, player.name());
    }

    let first_player = rng
        .choose_index(count)
        .ok_or_else(|| GameError::Setup("no players".into()))?;
    debug!("{} moves first", players[first_player].name());

    Ok(SetupOutcome {
        solution,
        deck: full_deck,
        placements,
        hand_sizes,
        first_player,
    })
}

/// Three independent uniform draws: suspect, weapon, room.
fn choose_solution<R: RandomSource>(
    board: &Board,
    suspects: &[SuspectName],
    rng: &mut R,
) -> GameResult<Solution> {
    let missing = || GameError::Setup("cannot draw a solution from an empty list".into());

    let suspect = suspects[rng.choose_index(suspects.len()).ok_or_else(missing)?];
    let weapon = board.weapons()[rng.choose_index(board.weapons().len()).ok_or_else(missing)?];
    let room = board.rooms()[rng.choose_index(board.rooms().len()).ok_or_else(missing)?].id;

    Ok(Solution {
        suspect,
        weapon,
        room,
    })
}

// =============================================================================
// TESTS
// =============================================================================
