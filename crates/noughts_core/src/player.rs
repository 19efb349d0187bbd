//! Players and setup validation.

use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::error::{SetupError, SetupRule};
use crate::types::Symbol;

/// A participant: display name and marker symbol.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Getters)]
pub struct Player {
    /// Display name.
    name: String,
    /// Marker placed on the board.
    #[getter(copy)]
    symbol: Symbol,
}

impl Player {
    /// Creates a player, normalizing the symbol to uppercase.
    ///
    /// No validation happens here; use [`Roster::from_entries`] for user input.
    pub fn new(name: impl Into<String>, symbol: char) -> Self {
        Self {
            name: name.into(),
            symbol: Symbol::new(symbol),
        }
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.name, self.symbol)
    }
}

/// Position of a player in turn order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlayerSlot {
    /// Moves first.
    First,
    /// Moves second.
    Second,
}

impl PlayerSlot {
    /// Turn index of this slot (0 or 1).
    pub fn index(self) -> usize {
        match self {
            Self::First => 0,
            Self::Second => 1,
        }
    }
}

impl std::fmt::Display for PlayerSlot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.index() + 1)
    }
}

/// Raw, unvalidated player details as typed by a user.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerEntry {
    /// Name as entered.
    pub name: String,
    /// Symbol as entered.
    pub symbol: String,
}

impl PlayerEntry {
    /// Creates an entry from anything string-like.
    pub fn new(name: impl Into<String>, symbol: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            symbol: symbol.into(),
        }
    }

    /// Checks name and symbol rules for a single entry.
    fn validate(&self, slot: PlayerSlot) -> Result<Player, SetupError> {
        let fail = |rule| SetupError::new(slot, rule);

        let name = self.name.trim();
        if name.is_empty() {
            return Err(fail(SetupRule::EmptyName));
        }
        if !name.chars().all(char::is_alphabetic) {
            return Err(fail(SetupRule::NonAlphabeticName));
        }

        let upper = self.symbol.trim().to_uppercase();
        let mut chars = upper.chars();
        let symbol = match (chars.next(), chars.next()) {
            (Some(c), None) => c,
            _ => return Err(fail(SetupRule::SymbolLength)),
        };
        if !symbol.is_alphabetic() {
            return Err(fail(SetupRule::NonAlphabeticSymbol));
        }

        Ok(Player::new(name, symbol))
    }
}

/// The two participants of a game, in turn order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Roster {
    players: [Player; 2],
}

impl Roster {
    /// Validates both entries and builds a roster.
    ///
    /// Nothing is produced unless both players pass every rule.
    ///
    /// # Errors
    ///
    /// Returns the first [`SetupError`] found, checking the first player
    /// before the second and the duplicate-symbol rule last.
    #[instrument]
    pub fn from_entries(first: &PlayerEntry, second: &PlayerEntry) -> Result<Self, SetupError> {
        let p1 = first.validate(PlayerSlot::First)?;
        let p2 = second.validate(PlayerSlot::Second)?;

        if p1.symbol() == p2.symbol() {
            return Err(SetupError::new(
                PlayerSlot::Second,
                SetupRule::DuplicateSymbol {
                    symbol: p2.symbol(),
                },
            ));
        }

        debug!(first = %p1, second = %p2, "Roster validated");
        Ok(Self { players: [p1, p2] })
    }

    /// Player at turn index 0 or 1.
    pub fn get(&self, index: usize) -> Option<&Player> {
        self.players.get(index)
    }

    /// Player for the given slot.
    pub fn slot(&self, slot: PlayerSlot) -> &Player {
        &self.players[slot.index()]
    }

    /// First player.
    pub fn first(&self) -> &Player {
        self.slot(PlayerSlot::First)
    }

    /// Second player.
    pub fn second(&self) -> &Player {
        self.slot(PlayerSlot::Second)
    }

    /// Both players in turn order.
    pub fn iter(&self) -> impl Iterator<Item = &Player> {
        self.players.iter()
    }
}

impl Default for Roster {
    /// Placeholder players used before setup.
    fn default() -> Self {
        Self {
            players: [Player::new("Player 1", 'X'), Player::new("Player 2", 'O')],
        }
    }
}
