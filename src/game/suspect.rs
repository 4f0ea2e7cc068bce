//! Suspects, Weapons and Players
//!
//! A [`Suspect`] is an immutable character identity; a [`PlayerState`] is the
//! per-game record of whoever plays that suspect.

use std::collections::BTreeSet;
use std::fmt;

use serde::{Serialize, Deserialize};

use crate::core::position::Position;
use crate::game::card::{Card, CardValue};

// =============================================================================
// SUSPECTS
// =============================================================================

/// The six suspects.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum SuspectName {
    /// Miss Scarlet
    Scarlet = 0,
    /// Mrs White
    White = 1,
    /// Reverend Green
    Green = 2,
    /// Professor Plum
    Plum = 3,
    /// Mrs Peacock
    Peacock = 4,
    /// Colonel Mustard
    Mustard = 5,
}

impl SuspectName {
    /// All suspects in seating order.
    pub const ALL: [SuspectName; 6] = [
        SuspectName::Scarlet,
        SuspectName::White,
        SuspectName::Green,
        SuspectName::Plum,
        SuspectName::Peacock,
        SuspectName::Mustard,
    ];

    /// Display name.
    pub fn as_str(self) -> &'static str {
        match self {
            SuspectName::Scarlet => "Scarlet",
            SuspectName::White => "White",
            SuspectName::Green => "Green",
            SuspectName::Plum => "Plum",
            SuspectName::Peacock => "Peacock",
            SuspectName::Mustard => "Mustard",
        }
    }
}

impl fmt::Display for SuspectName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Character identity: who, where they start, and their marker colour.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Suspect {
    /// Name
    pub name: SuspectName,
    /// Start cell
    pub starting_position: Position,
    /// Marker colour (`#rrggbb`)
    pub colour: String,
}

impl Suspect {
    /// Create a suspect.
    pub fn new(name: SuspectName, starting_position: Position, colour: impl Into<String>) -> Self {
        Self {
            name,
            starting_position,
            colour: colour.into(),
        }
    }
}

// =============================================================================
// WEAPONS
// =============================================================================

/// The six weapons.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Weapon {
    /// Rope
    Rope = 0,
    /// Dagger
    Dagger = 1,
    /// Wrench
    Wrench = 2,
    /// Pistol
    Pistol = 3,
    /// Candlestick
    Candlestick = 4,
    /// Lead pipe
    LeadPipe = 5,
}

impl Weapon {
    /// All weapons.
    pub const ALL: [Weapon; 6] = [
        Weapon::Rope,
        Weapon::Dagger,
        Weapon::Wrench,
        Weapon::Pistol,
        Weapon::Candlestick,
        Weapon::LeadPipe,
    ];

    /// Display name.
    pub fn as_str(self) -> &'static str {
        match self {
            Weapon::Rope => "Rope",
            Weapon::Dagger => "Dagger",
            Weapon::Wrench => "Wrench",
            Weapon::Pistol => "Pistol",
            Weapon::Candlestick => "Candlestick",
            Weapon::LeadPipe => "Lead Pipe",
        }
    }
}

impl fmt::Display for Weapon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// PLAYER STATE
// =============================================================================

/// Deduction notes: every card the player has not yet ruled out.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notebook {
    possible: BTreeSet<CardValue>,
}

impl Notebook {
    /// Start with every card still possible.
    pub fn new(cards: impl IntoIterator<Item = CardValue>) -> Self {
        Self {
            possible: cards.into_iter().collect(),
        }
    }

    /// Rule a card out. Returns false if it was already ruled out.
    pub fn cross_out(&mut self, card: CardValue) -> bool {
        self.possible.remove(&card)
    }

    /// Check whether a card could still be part of the solution.
    pub fn is_possible(&self, card: CardValue) -> bool {
        self.possible.contains(&card)
    }

    /// Cards still possible, in card order.
    pub fn possible(&self) -> impl Iterator<Item = &CardValue> {
        self.possible.iter()
    }
}

/// State of a single player in the game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerState {
    /// The suspect this player moves
    pub character: Suspect,

    /// Current cell
    pub position: Position,

    /// Cards dealt to this player
    pub cards: Vec<Card>,

    /// Cards not yet ruled out
    pub notebook: Notebook,
}

impl PlayerState {
    /// Create a player standing on the suspect's start cell.
    pub fn new(character: Suspect) -> Self {
        let position = character.starting_position;
        Self {
            character,
            position,
            cards: Vec::new(),
            notebook: Notebook::default(),
        }
    }

    /// Suspect name (player identity).
    #[inline]
    pub fn name(&self) -> SuspectName {
        self.character.name
    }

    /// Take a dealt card; it is crossed out of the notebook.
    pub fn receive(&mut self, card: Card) {
        self.notebook.cross_out(card.value);
        self.cards.push(card);
    }

    /// Check whether the player holds a card.
    pub fn holds(&self, value: CardValue) -> bool {
        self.cards.iter().any(|c| c.value == value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::room::RoomId;

    #[test]
    fn test_new_player_starts_on_start_cell() {
        let suspect = Suspect::new(SuspectName::Plum, Position::new(19, 23), "#370080");
        let player = PlayerState::new(suspect);
        assert_eq!(player.position, Position::new(19, 23));
        assert_eq!(player.name(), SuspectName::Plum);
        assert!(player.cards.is_empty());
    }

    #[test]
    fn test_receive_crosses_out() {
        let suspect = Suspect::new(SuspectName::Green, Position::new(0, 14), "#083d00");
        let mut player = PlayerState::new(suspect);
        player.notebook = Notebook::new([
            CardValue::Weapon(Weapon::Rope),
            CardValue::Room(RoomId(3)),
        ]);

        player.receive(Card::new(CardValue::Weapon(Weapon::Rope)));

        assert!(player.holds(CardValue::Weapon(Weapon::Rope)));
        assert!(!player.notebook.is_possible(CardValue::Weapon(Weapon::Rope)));
        assert!(player.notebook.is_possible(CardValue::Room(RoomId(3))));
        assert_eq!(player.notebook.possible().count(), 1);
    }

    #[test]
    fn test_names() {
        assert_eq!(Weapon::LeadPipe.to_string(), "Lead Pipe");
        assert_eq!(SuspectName::Mustard.to_string(), "Mustard");
    }
}
