use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Session difficulty. Fixed at game start and never changed afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum Difficulty {
    Easy,
    #[default]
    Normal,
    Hard,
}

impl Difficulty {
    pub const ALL: [Self; 3] = [Self::Easy, Self::Normal, Self::Hard];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Easy => "EASY",
            Self::Normal => "NORMAL",
            Self::Hard => "HARD",
        }
    }

    /// Fraction of the player's travel the officers cover per km.
    #[must_use]
    pub const fn officer_speed(self) -> f64 {
        match self {
            Self::Easy => 0.08,
            Self::Normal => 0.12,
            Self::Hard => 0.16,
        }
    }

    #[must_use]
    pub const fn score_multiplier(self) -> f64 {
        match self {
            Self::Easy => 1.0,
            Self::Normal => 1.5,
            Self::Hard => 2.0,
        }
    }

    /// Scales the ceilings of the random event buckets.
    #[must_use]
    pub const fn chance_modifier(self) -> f64 {
        match self {
            Self::Easy => 0.8,
            Self::Normal => 1.0,
            Self::Hard => 1.2,
        }
    }

    /// Head start the player has over the officers, in km.
    #[must_use]
    pub const fn starting_gap(self) -> f64 {
        match self {
            Self::Easy => 25.0,
            Self::Normal => 20.0,
            Self::Hard => 15.0,
        }
    }

    #[must_use]
    pub const fn blurb(self) -> &'static str {
        match self {
            Self::Easy => "Officers are slower. More forgiving events.",
            Self::Normal => "Balanced challenge.",
            Self::Hard => "Officers are fast. Events harsher. Scores doubled.",
        }
    }

    /// Resolve the numbered menu entry (`1`, `2`, `3`) shown at startup.
    #[must_use]
    pub fn from_menu_choice(choice: &str) -> Option<Self> {
        match choice.trim() {
            "1" => Some(Self::Easy),
            "2" => Some(Self::Normal),
            "3" => Some(Self::Hard),
            _ => None,
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Difficulty {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "EASY" => Ok(Self::Easy),
            "NORMAL" => Ok(Self::Normal),
            "HARD" => Ok(Self::Hard),
            _ => Err(()),
        }
    }
}

impl From<Difficulty> for String {
    fn from(value: Difficulty) -> Self {
        value.as_str().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn menu_choices_map_in_order() {
        assert_eq!(Difficulty::from_menu_choice("1"), Some(Difficulty::Easy));
        assert_eq!(Difficulty::from_menu_choice(" 2 "), Some(Difficulty::Normal));
        assert_eq!(Difficulty::from_menu_choice("3"), Some(Difficulty::Hard));
        assert_eq!(Difficulty::from_menu_choice("4"), None);
    }

    #[test]
    fn tags_parse_case_insensitively() {
        for difficulty in Difficulty::ALL {
            let lower = difficulty.as_str().to_lowercase();
            assert_eq!(lower.parse::<Difficulty>(), Ok(difficulty));
        }
        assert!("brutal".parse::<Difficulty>().is_err());
    }

    #[test]
    fn harder_difficulties_chase_faster_and_pay_more() {
        assert!(Difficulty::Hard.officer_speed() > Difficulty::Normal.officer_speed());
        assert!(Difficulty::Normal.officer_speed() > Difficulty::Easy.officer_speed());
        assert!(Difficulty::Hard.score_multiplier() > Difficulty::Easy.score_multiplier());
        assert!(Difficulty::Hard.starting_gap() < Difficulty::Easy.starting_gap());
    }
}
