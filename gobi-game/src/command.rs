use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One player-issued command per prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Command {
    Drink,
    MoveModerate,
    MoveFast,
    Rest,
    UseBandage,
    Status,
    Save,
    Quit,
}

impl Command {
    /// Menu order.
    pub const ALL: [Self; 8] = [
        Self::Drink,
        Self::MoveModerate,
        Self::MoveFast,
        Self::Rest,
        Self::UseBandage,
        Self::Status,
        Self::Save,
        Self::Quit,
    ];

    #[must_use]
    pub const fn key(self) -> char {
        match self {
            Self::Drink => 'A',
            Self::MoveModerate => 'B',
            Self::MoveFast => 'C',
            Self::Rest => 'D',
            Self::UseBandage => 'E',
            Self::Status => 'F',
            Self::Save => 'S',
            Self::Quit => 'Q',
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Drink => "Drink water",
            Self::MoveModerate => "Move - Moderate",
            Self::MoveFast => "Move - Full speed",
            Self::Rest => "Rest (Camel recovers, officers close in)",
            Self::UseBandage => "Use bandage (restore player health)",
            Self::Status => "Status and Inventory",
            Self::Save => "Save game",
            Self::Quit => "Quit (forfeit)",
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}) {}", self.key(), self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown command `{0}`")]
pub struct UnknownCommand(pub String);

impl FromStr for Command {
    type Err = UnknownCommand;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let mut chars = trimmed.chars();
        let (Some(first), None) = (chars.next(), chars.next()) else {
            return Err(UnknownCommand(trimmed.to_string()));
        };
        let key = first.to_ascii_uppercase();
        Self::ALL
            .into_iter()
            .find(|command| command.key() == key)
            .ok_or_else(|| UnknownCommand(trimmed.to_string()))
    }
}
