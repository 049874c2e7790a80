//! Achievement tags and the add-only set that tracks them.
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use crate::constants::{HOARDER_WATER, PRISTINE_HEALTH, TOTAL_DISTANCE, TOUGH_RIDE_STAMINA};
use crate::state::GameState;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Achievement {
    #[serde(rename = "Hydrated")]
    Hydrated,
    #[serde(rename = "Found Oasis")]
    FoundOasis,
    #[serde(rename = "Escape!")]
    Escape,
    #[serde(rename = "Hoarder")]
    Hoarder,
    #[serde(rename = "Oasis Seeker")]
    OasisSeeker,
    #[serde(rename = "Tough Ride")]
    ToughRide,
    #[serde(rename = "Pristine")]
    Pristine,
}

impl Achievement {
    pub const ALL: [Self; 7] = [
        Self::Hydrated,
        Self::FoundOasis,
        Self::Escape,
        Self::Hoarder,
        Self::OasisSeeker,
        Self::ToughRide,
        Self::Pristine,
    ];

    /// Player-facing name, also used as the persisted tag.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Hydrated => "Hydrated",
            Self::FoundOasis => "Found Oasis",
            Self::Escape => "Escape!",
            Self::Hoarder => "Hoarder",
            Self::OasisSeeker => "Oasis Seeker",
            Self::ToughRide => "Tough Ride",
            Self::Pristine => "Pristine",
        }
    }
}

impl fmt::Display for Achievement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Achievement {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|achievement| achievement.label() == s)
            .ok_or(())
    }
}

/// Unordered, add-only collection of unlocked achievements.
///
/// Entries are never removed once unlocked.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AchievementSet(BTreeSet<Achievement>);

impl AchievementSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Unlock an achievement. Returns `true` when it was not already held.
    pub fn unlock(&mut self, achievement: Achievement) -> bool {
        self.0.insert(achievement)
    }

    #[must_use]
    pub fn contains(&self, achievement: Achievement) -> bool {
        self.0.contains(&achievement)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = Achievement> + '_ {
        self.0.iter().copied()
    }

    /// Labels sorted alphabetically, for status and summary output.
    #[must_use]
    pub fn sorted_labels(&self) -> Vec<&'static str> {
        let mut labels: Vec<&'static str> = self.iter().map(Achievement::label).collect();
        labels.sort_unstable();
        labels
    }
}

impl FromIterator<Achievement> for AchievementSet {
    fn from_iter<T: IntoIterator<Item = Achievement>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Unlock every threshold achievement the current state qualifies for.
///
/// Idempotent. Callers that need the newly unlocked entries diff the set.
pub fn evaluate_achievements(state: &mut GameState) {
    let player = &state.player;
    let camel = &state.camel;
    let qualifying = [
        (player.distance >= TOTAL_DISTANCE, Achievement::Escape),
        (player.inventory.water >= HOARDER_WATER, Achievement::Hoarder),
        (player.oasis_found >= 1, Achievement::OasisSeeker),
        (camel.stamina < TOUGH_RIDE_STAMINA, Achievement::ToughRide),
        (
            player.health >= PRISTINE_HEALTH && camel.health >= PRISTINE_HEALTH,
            Achievement::Pristine,
        ),
    ];

    for (earned, achievement) in qualifying {
        if earned {
            state.player.achievements.unlock(achievement);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::difficulty::Difficulty;

    #[test]
    fn labels_round_trip_through_from_str() {
        for achievement in Achievement::ALL {
            assert_eq!(achievement.label().parse::<Achievement>(), Ok(achievement));
        }
        assert!("Speedrunner".parse::<Achievement>().is_err());
    }

    #[test]
    fn unlock_reports_only_new_entries() {
        let mut set = AchievementSet::new();
        assert!(set.unlock(Achievement::Hydrated));
        assert!(!set.unlock(Achievement::Hydrated));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn sorted_labels_are_alphabetical() {
        let set: AchievementSet = [
            Achievement::ToughRide,
            Achievement::Escape,
            Achievement::Hoarder,
        ]
        .into_iter()
        .collect();
        assert_eq!(set.sorted_labels(), vec!["Escape!", "Hoarder", "Tough Ride"]);
    }

    #[test]
    fn fresh_state_earns_tough_ride_and_pristine() {
        let mut state = GameState::new(Difficulty::Normal);
        evaluate_achievements(&mut state);
        let once = state.player.achievements.clone();
        assert_eq!(
            once.iter().collect::<Vec<_>>(),
            vec![Achievement::ToughRide, Achievement::Pristine]
        );
        evaluate_achievements(&mut state);
        assert_eq!(state.player.achievements, once);
    }

    #[test]
    fn thresholds_unlock_their_achievements() {
        let mut state = GameState::new(Difficulty::Hard);
        state.player.distance = TOTAL_DISTANCE;
        state.player.inventory.water = HOARDER_WATER;
        state.player.oasis_found = 1;
        state.camel.stamina = 50;
        state.player.health = 40;
        evaluate_achievements(&mut state);

        let achievements = &state.player.achievements;
        assert!(achievements.contains(Achievement::Escape));
        assert!(achievements.contains(Achievement::Hoarder));
        assert!(achievements.contains(Achievement::OasisSeeker));
        assert!(!achievements.contains(Achievement::ToughRide));
        assert!(!achievements.contains(Achievement::Pristine));
    }

    #[test]
    fn serializes_as_label_list() {
        let set: AchievementSet = [Achievement::FoundOasis].into_iter().collect();
        let json = serde_json::to_string(&set).unwrap();
        assert_eq!(json, r#"["Found Oasis"]"#);
    }
}
