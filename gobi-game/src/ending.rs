use serde::{Deserialize, Serialize};
use std::fmt;

use crate::constants::{STAMINA_MAX, THIRST_MAX, TOTAL_DISTANCE};
use crate::state::GameState;

/// Ways a session can end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Ending {
    /// Thirst reached its maximum
    DiedOfThirst,
    /// The camel collapsed from fatigue
    Stranded,
    /// The officers closed the gap
    Captured,
    /// Player health reached zero
    DiedOfWounds,
    /// The far side of the desert was reached
    Escaped,
    /// The player quit
    Forfeit,
}

impl Ending {
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::DiedOfThirst => "died_of_thirst",
            Self::Stranded => "stranded",
            Self::Captured => "captured",
            Self::DiedOfWounds => "died_of_wounds",
            Self::Escaped => "escaped",
            Self::Forfeit => "forfeit",
        }
    }

    #[must_use]
    pub const fn is_victory(self) -> bool {
        matches!(self, Self::Escaped)
    }

    #[must_use]
    pub const fn headline(self) -> &'static str {
        match self {
            Self::DiedOfThirst => "You died of thirst. The desert claims you.",
            Self::Stranded => "Your camel collapses from exhaustion. You are stranded.",
            Self::Captured => "The officers have caught you! You are arrested.",
            Self::DiedOfWounds => "You succumbed to your wounds and the harsh desert.",
            Self::Escaped => "You crossed the Great Gobi and escaped to freedom!",
            Self::Forfeit => "You gave up the journey. Game over.",
        }
    }
}

impl fmt::Display for Ending {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Evaluate terminal conditions in priority order; the first that holds wins.
#[must_use]
pub fn check_terminal(state: &GameState) -> Option<Ending> {
    if state.player.thirst >= THIRST_MAX {
        Some(Ending::DiedOfThirst)
    } else if state.camel.stamina >= STAMINA_MAX {
        Some(Ending::Stranded)
    } else if state.officers.has_caught_up() {
        Some(Ending::Captured)
    } else if state.player.health <= 0 {
        Some(Ending::DiedOfWounds)
    } else if state.player.distance >= TOTAL_DISTANCE {
        Some(Ending::Escaped)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::difficulty::Difficulty;

    #[test]
    fn fresh_state_is_not_terminal() {
        assert_eq!(check_terminal(&GameState::new(Difficulty::Normal)), None);
    }

    #[test]
    fn thirst_outranks_everything() {
        let mut state = GameState::new(Difficulty::Normal);
        state.player.thirst = 5;
        state.camel.stamina = 100;
        state.officers.distance_behind = -3.0;
        state.player.health = 0;
        state.player.distance = 250;
        assert_eq!(check_terminal(&state), Some(Ending::DiedOfThirst));
    }

    #[test]
    fn priority_order_is_respected() {
        let mut state = GameState::new(Difficulty::Normal);
        state.player.distance = 210;
        state.player.health = 0;
        state.officers.distance_behind = 0.0;
        state.camel.stamina = 100;
        assert_eq!(check_terminal(&state), Some(Ending::Stranded));
        state.camel.stamina = 99;
        assert_eq!(check_terminal(&state), Some(Ending::Captured));
        state.officers.distance_behind = 0.5;
        assert_eq!(check_terminal(&state), Some(Ending::DiedOfWounds));
        state.player.health = 1;
        assert_eq!(check_terminal(&state), Some(Ending::Escaped));
        assert!(Ending::Escaped.is_victory());
    }
}
