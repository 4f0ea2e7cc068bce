//! Game State
//!
//! [`Game`] owns everything one game needs: board, players, solution, deck,
//! random source and the pending event log. It is a plain value with no
//! shared or global state, so independent games can coexist.

use serde::{Serialize, Deserialize};
use tracing::{debug, trace};

use crate::core::hash::{compute_state_hash, StateHash, StateHasher};
use crate::core::position::Direction;
use crate::core::rng::{derive_game_seed, DeterministicRng, RandomSource};
use crate::error::{GameError, GameResult};
use crate::game::board::Board;
use crate::game::card::{Card, CardValue, Solution};
use crate::game::events::{GameEvent, GameEventData};
use crate::game::field::Field;
use crate::game::map::{canonical_board, canonical_suspects};
use crate::game::movement::{apply_move, plan_move, MoveOutcome};
use crate::game::setup::{initialize, SetupConfig};
use crate::game::suspect::{PlayerState, Suspect, SuspectName};

// =============================================================================
// STATUS & CONFIG
// =============================================================================

/// Lifecycle of a game.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[repr(u8)]
pub enum GameStatus {
    /// Board and players exist, setup not yet run
    #[default]
    Created = 0,
    /// Setup done, suspects may move
    Playing = 1,
    /// Game over
    Ended = 2,
}

/// Game configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Seed for the default random source
    pub rng_seed: u64,
    /// Setup configuration
    pub setup: SetupConfig,
    /// Dice summed by [`Game::roll_dice`]
    pub dice_count: u8,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            rng_seed: 0,
            setup: SetupConfig::default(),
            dice_count: 2,
        }
    }
}

impl GameConfig {
    /// Default configuration seeded from a game id and the seating order.
    pub fn for_game(game_id: &[u8; 16], seats: &[SuspectName]) -> Self {
        let names: Vec<&str> = seats.iter().map(|s| s.as_str()).collect();
        Self {
            rng_seed: derive_game_seed(game_id, &names),
            ..Self::default()
        }
    }
}

// =============================================================================
// GAME
// =============================================================================

/// Complete state of one game.
#[derive(Clone, Debug)]
pub struct Game<R: RandomSource = DeterministicRng> {
    /// Configuration
    pub config: GameConfig,

    status: GameStatus,
    board: Board,

    /// Every suspect in the game, played or not
    suspects: Vec<Suspect>,

    /// Players in seating order (deal order)
    players: Vec<PlayerState>,

    solution: Option<Solution>,
    deck: Vec<Card>,
    current_player: Option<SuspectName>,

    /// Successful moves so far
    move_count: u32,

    rng: R,

    next_event: u32,
    pending_events: Vec<GameEvent>,
}

impl Game<DeterministicRng> {
    /// Create a game seeded from `config.rng_seed`.
    pub fn new(
        board: Board,
        suspects: Vec<Suspect>,
        seats: &[SuspectName],
        config: GameConfig,
    ) -> GameResult<Self> {
        let rng = DeterministicRng::new(config.rng_seed);
        Self::with_rng(board, suspects, seats, config, rng)
    }

    /// Create a game on the canonical board with the canonical suspects.
    pub fn canonical(seats: &[SuspectName], config: GameConfig) -> GameResult<Self> {
        Self::new(canonical_board()?, canonical_suspects(), seats, config)
    }
}

impl<R: RandomSource> Game<R> {
    /// Create a game with an explicit random source.
    ///
    /// Each seat gets a player standing on its suspect's start cell.
    pub fn with_rng(
        mut board: Board,
        suspects: Vec<Suspect>,
        seats: &[SuspectName],
        config: GameConfig,
        rng: R,
    ) -> GameResult<Self> {
        let mut players: Vec<PlayerState> = Vec::with_capacity(seats.len());

        for &seat in seats {
            if players.iter().any(|p| p.name() == seat) {
                return Err(GameError::Setup(format!("{seat} is seated twice")));
            }
            let suspect = suspects
                .iter()
                .find(|s| s.name == seat)
                .cloned()
                .ok_or(GameError::PlayerNotFound(seat))?;
            let start = suspect.starting_position;

            match board.field_at(start) {
                Some(Field::Corridor) if !board.is_taken(start) => {}
                Some(field) if field.is_room_cell() => {}
                _ => {
                    return Err(GameError::InvalidMap(format!(
                        "{seat} cannot start at {start}"
                    )))
                }
            }

            board.place(seat, start);
            if let Some(id) = board.room_at(start).map(|r| r.id) {
                if let Some(room) = board.room_mut(id) {
                    room.occupants.insert(seat);
                }
            }
            players.push(PlayerState::new(suspect));
        }

        Ok(Self {
            config,
            status: GameStatus::Created,
            board,
            suspects,
            players,
            solution: None,
            deck: Vec::new(),
            current_player: None,
            move_count: 0,
            rng,
            next_event: 0,
            pending_events: Vec::new(),
        })
    }

    /// Run setup and start the game (`Created -> Playing`).
    pub fn init(&mut self) -> GameResult<()> {
        self.expect_status(GameStatus::Created)?;

        let names: Vec<SuspectName> = self.suspects.iter().map(|s| s.name).collect();
        let outcome = initialize(
            &mut self.board,
            &names,
            &mut self.players,
            &mut self.rng,
            &self.config.setup,
        )?;

        for (weapon, room) in &outcome.placements {
            self.push_event(GameEventData::WeaponPlaced {
                weapon: *weapon,
                room: *room,
            });
        }
        for (i, size) in outcome.hand_sizes.iter().enumerate() {
            let player = self.players[i].name();
            self.push_event(GameEventData::CardsDealt {
                player,
                count: *size as u32,
            });
        }

        let first = self.players[outcome.first_player].name();
        self.solution = Some(outcome.solution);
        self.deck = outcome.deck;
        self.current_player = Some(first);

        let players = self.players.iter().map(PlayerState::name).collect();
        self.push_event(GameEventData::GameStarted {
            first_player: first,
            players,
        });
        self.set_status(GameStatus::Playing);
        Ok(())
    }

    /// Move a suspect one cell.
    ///
    /// On error nothing changes.
    pub fn move_player(&mut self, name: SuspectName, direction: Direction) -> GameResult<MoveOutcome> {
        self.expect_status(GameStatus::Playing)?;

        let idx = self.player_index(name)?;
        let outcome = match plan_move(&self.board, &self.players[idx], direction) {
            Ok(outcome) => outcome,
            Err(err) => {
                trace!("{} cannot move {}: {}", name, direction, err);
                return Err(err);
            }
        };
        apply_move(&mut self.board, &mut self.players[idx], &outcome);

        self.move_count += 1;
        let event = GameEvent::moved(self.next_event, &outcome);
        self.next_event += 1;
        self.pending_events.push(event);
        Ok(outcome)
    }

    /// Roll `config.dice_count` six-sided dice and return the sum.
    pub fn roll_dice(&mut self) -> GameResult<u32> {
        self.expect_status(GameStatus::Playing)?;

        let total: u32 = (0..self.config.dice_count)
            .map(|_| self.rng.uniform_int(1, 6) as u32)
            .sum();
        self.push_event(GameEventData::DiceRolled { total });
        Ok(total)
    }

    /// End the game (`Playing -> Ended`).
    pub fn finish(&mut self) -> GameResult<()> {
        self.expect_status(GameStatus::Playing)?;
        self.set_status(GameStatus::Ended);
        Ok(())
    }

    // =========================================================================
    // QUERIES
    // =========================================================================

    /// Current status.
    #[inline]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// The board.
    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// All suspects, played or not.
    pub fn suspects(&self) -> &[Suspect] {
        &self.suspects
    }

    /// Players in seating order.
    pub fn players(&self) -> &[PlayerState] {
        &self.players
    }

    /// Player of a suspect.
    pub fn player(&self, name: SuspectName) -> Option<&PlayerState> {
        self.players.iter().find(|p| p.name() == name)
    }

    /// Logical field under a suspect's marker.
    pub fn covered_field(&self, name: SuspectName) -> GameResult<Field> {
        let player = self.player(name).ok_or(GameError::PlayerNotFound(name))?;
        self.board
            .field_at(player.position)
            .ok_or_else(|| GameError::InvalidMap(format!("{name} stands off the board")))
    }

    /// The hidden solution, once setup has run.
    ///
    /// Not guarded by game end: callers decide who may see it.
    pub fn solution(&self) -> Option<&Solution> {
        self.solution.as_ref()
    }

    /// Every card in play, solution cards flagged. Empty before setup.
    pub fn deck(&self) -> &[Card] {
        &self.deck
    }

    /// Suspect drawn to move first.
    pub fn current_player(&self) -> Option<SuspectName> {
        self.current_player
    }

    /// Successful moves so far.
    pub fn move_count(&self) -> u32 {
        self.move_count
    }

    /// Compute hash of current state for replay verification.
    pub fn compute_hash(&self) -> StateHash {
        compute_state_hash(self.move_count, self.config.rng_seed, |hasher| {
            hasher.update_u8(self.status as u8);

            // Players in seating order
            for player in &self.players {
                hasher.update_u8(player.name() as u8);
                hasher.update_position(player.position);
                hasher.update_u32(player.cards.len() as u32);
                for card in &player.cards {
                    hash_card(hasher, card.value);
                }
            }

            // Occupancy (BTreeMap order)
            for (position, name) in self.board.occupancy() {
                hasher.update_position(position);
                hasher.update_u8(name as u8);
            }

            for room in self.board.rooms() {
                hasher.update_u8(room.id.0);
                hasher.update_str(&room.name);
                for occupant in &room.occupants {
                    hasher.update_u8(*occupant as u8);
                }
                for weapon in &room.weapons {
                    hasher.update_u8(*weapon as u8);
                }
            }

            hasher.update_bool(self.solution.is_some());
            if let Some(solution) = &self.solution {
                for card in solution.cards() {
                    hash_card(hasher, card);
                }
            }
        })
    }

    /// Take pending events (consumes them).
    pub fn take_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.pending_events)
    }

    // =========================================================================
    // INTERNALS
    // =========================================================================

    fn push_event(&mut self, data: GameEventData) {
        self.pending_events.push(GameEvent::new(self.next_event, data));
        self.next_event += 1;
    }

    fn set_status(&mut self, new_status: GameStatus) {
        let old_status = self.status;
        self.status = new_status;
        debug!("Game status {:?} -> {:?}", old_status, new_status);
        self.push_event(GameEventData::StatusChanged {
            old_status,
            new_status,
        });
    }

    fn expect_status(&self, expected: GameStatus) -> GameResult<()> {
        if self.status == expected {
            Ok(())
        } else {
            Err(GameError::InvalidStatus {
                expected,
                actual: self.status,
            })
        }
    }

    fn player_index(&self, name: SuspectName) -> GameResult<usize> {
        self.players
            .iter()
            .position(|p| p.name() == name)
            .ok_or(GameError::PlayerNotFound(name))
    }
}

fn hash_card(hasher: &mut StateHasher, value: CardValue) {
    match value {
        CardValue::Suspect(name) => {
            hasher.update_u8(0);
            hasher.update_u8(name as u8);
        }
        CardValue::Weapon(weapon) => {
            hasher.update_u8(1);
            hasher.update_u8(weapon as u8);
        }
        CardValue::Room(id) => {
            hasher.update_u8(2);
            hasher.update_u8(id.0);
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================
