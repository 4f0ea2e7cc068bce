//! Cards and the Hidden Solution

use std::fmt;

use serde::{Serialize, Deserialize};

use crate::game::room::RoomId;
use crate::game::suspect::{SuspectName, Weapon};

/// What a card shows.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum CardValue {
    /// A suspect card
    Suspect(SuspectName),
    /// A weapon card
    Weapon(Weapon),
    /// A room card
    Room(RoomId),
}

impl fmt::Display for CardValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CardValue::Suspect(name) => write!(f, "suspect {name}"),
            CardValue::Weapon(weapon) => write!(f, "weapon {weapon}"),
            CardValue::Room(id) => write!(f, "{id}"),
        }
    }
}

/// A playable card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    /// Face value
    pub value: CardValue,
    /// Set exactly for the three solution cards
    pub is_solution: bool,
}

impl Card {
    /// A regular (non-solution) card.
    pub const fn new(value: CardValue) -> Self {
        Self {
            value,
            is_solution: false,
        }
    }
}

/// The hidden suspect/weapon/room triple. Fixed once chosen.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Solution {
    /// Culprit
    pub suspect: SuspectName,
    /// Murder weapon
    pub weapon: Weapon,
    /// Scene
    pub room: RoomId,
}

impl Solution {
    /// The three solution cards.
    pub fn cards(&self) -> [CardValue; 3] {
        [
            CardValue::Suspect(self.suspect),
            CardValue::Weapon(self.weapon),
            CardValue::Room(self.room),
        ]
    }

    /// Check whether a card is part of the solution.
    pub fn contains(&self, value: CardValue) -> bool {
        self.cards().contains(&value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_solution_contains_exactly_its_cards() {
        let solution = Solution {
            suspect: SuspectName::White,
            weapon: Weapon::Dagger,
            room: RoomId(4),
        };

        assert!(solution.contains(CardValue::Suspect(SuspectName::White)));
        assert!(solution.contains(CardValue::Weapon(Weapon::Dagger)));
        assert!(solution.contains(CardValue::Room(RoomId(4))));
        assert!(!solution.contains(CardValue::Suspect(SuspectName::Plum)));
        assert!(!solution.contains(CardValue::Room(RoomId(5))));
    }
}
