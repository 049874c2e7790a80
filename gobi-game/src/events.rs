//! Random desert events and the roll table that selects them.
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::achievements::Achievement;
use crate::constants::{
    BANDIT_CAMEL_DAMAGE, BANDIT_DAMAGE, BANDIT_MAX_STOLEN, BANDIT_THEFT_CHANCE,
    CACHE_BANDAGE_CHANCE, CACHE_WATER, EVENT_ROLL, OASIS_WATER, SANDSTORM_DAMAGE,
    SANDSTORM_FATIGUE, SANDSTORM_THIRST, SICKNESS_FATIGUE,
};
use crate::dice::Dice;
use crate::difficulty::Difficulty;
use crate::numbers::{i32_to_u32, scaled_ceiling, u32_to_i32};
use crate::state::GameState;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventKind {
    Oasis,
    SupplyCache,
    Sandstorm,
    Bandits,
    CamelSickness,
}

impl EventKind {
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Oasis => "oasis",
            Self::SupplyCache => "supply_cache",
            Self::Sandstorm => "sandstorm",
            Self::Bandits => "bandits",
            Self::CamelSickness => "camel_sickness",
        }
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// One slice of the d100 roll: `floor..=floor(base_ceiling * modifier)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EventBucket {
    pub kind: EventKind,
    pub floor: i32,
    pub base_ceiling: i32,
}

impl EventBucket {
    #[must_use]
    pub fn ceiling(self, difficulty: Difficulty) -> i32 {
        scaled_ceiling(self.base_ceiling, difficulty.chance_modifier())
    }

    #[must_use]
    pub fn matches(self, roll: i32, difficulty: Difficulty) -> bool {
        roll >= self.floor && roll <= self.ceiling(difficulty)
    }
}

/// Buckets in priority order; the first match wins.
///
/// Floors stay fixed while ceilings scale, so on EASY some rolls land in
/// gaps between buckets and produce no event.
pub const EVENT_TABLE: [EventBucket; 5] = [
    EventBucket {
        kind: EventKind::Oasis,
        floor: 1,
        base_ceiling: 3,
    },
    EventBucket {
        kind: EventKind::SupplyCache,
        floor: 4,
        base_ceiling: 8,
    },
    EventBucket {
        kind: EventKind::Sandstorm,
        floor: 9,
        base_ceiling: 18,
    },
    EventBucket {
        kind: EventKind::Bandits,
        floor: 19,
        base_ceiling: 27,
    },
    EventBucket {
        kind: EventKind::CamelSickness,
        floor: 28,
        base_ceiling: 32,
    },
];

/// Map a d100 roll to the event it triggers on the given difficulty.
#[must_use]
pub fn classify_roll(roll: i32, difficulty: Difficulty) -> Option<EventKind> {
    EVENT_TABLE
        .iter()
        .find(|bucket| bucket.matches(roll, difficulty))
        .map(|bucket| bucket.kind)
}

/// What a resolved event did to the party.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum EventOutcome {
    Oasis,
    SupplyCache {
        water: u32,
        bandage: bool,
    },
    Sandstorm {
        thirst: i32,
        fatigue: i32,
        damage: i32,
    },
    Bandits {
        stolen: u32,
        damage: i32,
        camel_damage: i32,
    },
    CamelSickness {
        fatigue: i32,
    },
}

impl EventOutcome {
    #[must_use]
    pub const fn kind(self) -> EventKind {
        match self {
            Self::Oasis => EventKind::Oasis,
            Self::SupplyCache { .. } => EventKind::SupplyCache,
            Self::Sandstorm { .. } => EventKind::Sandstorm,
            Self::Bandits { .. } => EventKind::Bandits,
            Self::CamelSickness { .. } => EventKind::CamelSickness,
        }
    }

    #[must_use]
    pub fn message(self) -> String {
        match self {
            Self::Oasis => "You found a hidden oasis! Water refilled & camel rested.".to_string(),
            Self::SupplyCache { water, bandage } => {
                if bandage {
                    format!("You discovered a small supply cache: +{water} water and a bandage.")
                } else {
                    format!("You discovered a small supply cache: +{water} water.")
                }
            }
            Self::Sandstorm { .. } => "A sandstorm lashes you. Thirst and camel fatigue \
                                       increase, and you suffer some damage."
                .to_string(),
            Self::Bandits { stolen, .. } => {
                format!("Bandits attacked! You lose {stolen} water and take damage.")
            }
            Self::CamelSickness { .. } => {
                "Your camel looks ill. It will recover slowly unless you rest.".to_string()
            }
        }
    }
}

/// Draw a d100 and resolve whichever event it selects.
pub fn roll_event<D>(state: &mut GameState, dice: &mut D) -> Option<EventOutcome>
where
    D: Dice + ?Sized,
{
    let roll = dice.int(EVENT_ROLL.0, EVENT_ROLL.1);
    let outcome = resolve_event(state, roll, dice);
    log::debug!(
        "event roll {roll} on {} -> {}",
        state.difficulty,
        outcome.map_or("none", |event| event.kind().key())
    );
    outcome
}

/// Apply the event selected by `roll`, drawing any follow-up amounts from `dice`.
pub fn resolve_event<D>(state: &mut GameState, roll: i32, dice: &mut D) -> Option<EventOutcome>
where
    D: Dice + ?Sized,
{
    let kind = classify_roll(roll, state.difficulty)?;
    let outcome = match kind {
        EventKind::Oasis => {
            state.player.oasis_found = state.player.oasis_found.saturating_add(1);
            state.player.quench();
            state.camel.rest_fully();
            state.player.inventory.water = OASIS_WATER;
            state.player.achievements.unlock(Achievement::FoundOasis);
            EventOutcome::Oasis
        }
        EventKind::SupplyCache => {
            let water = i32_to_u32(dice.int(CACHE_WATER.0, CACHE_WATER.1));
            state.player.inventory.add_water(water);
            let bandage = dice.chance(CACHE_BANDAGE_CHANCE);
            if bandage {
                state.player.inventory.add_bandage();
            }
            EventOutcome::SupplyCache { water, bandage }
        }
        EventKind::Sandstorm => {
            let thirst = dice.int(SANDSTORM_THIRST.0, SANDSTORM_THIRST.1);
            let fatigue = dice.int(SANDSTORM_FATIGUE.0, SANDSTORM_FATIGUE.1);
            state.player.add_thirst(thirst);
            state.camel.tire(fatigue);
            let damage = dice.int(SANDSTORM_DAMAGE.0, SANDSTORM_DAMAGE.1);
            state.player.wound(damage);
            EventOutcome::Sandstorm {
                thirst,
                fatigue,
                damage,
            }
        }
        EventKind::Bandits => {
            let mut stolen = 0;
            if state.player.inventory.water > 0 && dice.chance(BANDIT_THEFT_CHANCE) {
                let most = state.player.inventory.water.min(BANDIT_MAX_STOLEN);
                let take = i32_to_u32(dice.int(1, u32_to_i32(most)));
                stolen = state.player.inventory.lose_water(take);
            }
            let damage = dice.int(BANDIT_DAMAGE.0, BANDIT_DAMAGE.1);
            state.player.wound(damage);
            let camel_damage = dice.int(BANDIT_CAMEL_DAMAGE.0, BANDIT_CAMEL_DAMAGE.1);
            state.camel.injure(camel_damage);
            EventOutcome::Bandits {
                stolen,
                damage,
                camel_damage,
            }
        }
        EventKind::CamelSickness => {
            state.camel.sick = true;
            let fatigue = dice.int(SICKNESS_FATIGUE.0, SICKNESS_FATIGUE.1);
            state.camel.tire(fatigue);
            EventOutcome::CamelSickness { fatigue }
        }
    };
    Some(outcome)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dice::ScriptedDice;

    fn kinds_for(difficulty: Difficulty) -> Vec<Option<EventKind>> {
        (1..=100).map(|roll| classify_roll(roll, difficulty)).collect()
    }

    #[test]
    fn normal_buckets_are_contiguous() {
        let kinds = kinds_for(Difficulty::Normal);
        assert!(kinds[0..3].iter().all(|k| *k == Some(EventKind::Oasis)));
        assert!(kinds[3..8].iter().all(|k| *k == Some(EventKind::SupplyCache)));
        assert!(kinds[8..18].iter().all(|k| *k == Some(EventKind::Sandstorm)));
        assert!(kinds[18..27].iter().all(|k| *k == Some(EventKind::Bandits)));
        assert!(kinds[27..32].iter().all(|k| *k == Some(EventKind::CamelSickness)));
        assert!(kinds[32..].iter().all(Option::is_none));
    }

    #[test]
    fn easy_truncation_leaves_gaps() {
        let d = Difficulty::Easy;
        assert_eq!(classify_roll(2, d), Some(EventKind::Oasis));
        assert_eq!(classify_roll(3, d), None);
        assert_eq!(classify_roll(4, d), Some(EventKind::SupplyCache));
        assert_eq!(classify_roll(6, d), Some(EventKind::SupplyCache));
        assert_eq!(classify_roll(7, d), None);
        assert_eq!(classify_roll(8, d), None);
        assert_eq!(classify_roll(9, d), Some(EventKind::Sandstorm));
        assert_eq!(classify_roll(14, d), Some(EventKind::Sandstorm));
        assert_eq!(classify_roll(15, d), None);
        assert_eq!(classify_roll(19, d), Some(EventKind::Bandits));
        assert_eq!(classify_roll(21, d), Some(EventKind::Bandits));
        assert_eq!(classify_roll(22, d), None);
        assert_eq!(classify_roll(28, d), None);
    }

    #[test]
    fn hard_buckets_widen_in_priority_order() {
        let d = Difficulty::Hard;
        assert_eq!(classify_roll(3, d), Some(EventKind::Oasis));
        assert_eq!(classify_roll(9, d), Some(EventKind::SupplyCache));
        assert_eq!(classify_roll(10, d), Some(EventKind::Sandstorm));
        assert_eq!(classify_roll(21, d), Some(EventKind::Sandstorm));
        assert_eq!(classify_roll(22, d), Some(EventKind::Bandits));
        assert_eq!(classify_roll(32, d), Some(EventKind::Bandits));
        assert_eq!(classify_roll(33, d), Some(EventKind::CamelSickness));
        assert_eq!(classify_roll(38, d), Some(EventKind::CamelSickness));
        assert_eq!(classify_roll(39, d), None);
    }

    #[test]
    fn oasis_restores_party() {
        let mut state = GameState::new(Difficulty::Normal);
        state.player.thirst = 4;
        state.camel.stamina = 80;
        state.player.inventory.water = 0;
        let mut dice = ScriptedDice::new().with_ints([1]);

        let outcome = roll_event(&mut state, &mut dice);

        assert_eq!(outcome, Some(EventOutcome::Oasis));
        assert_eq!(state.player.thirst, 0);
        assert_eq!(state.player.inventory.water, 5);
        assert_eq!(state.camel.stamina, 0);
        assert_eq!(state.player.oasis_found, 1);
        assert!(state.player.achievements.contains(Achievement::FoundOasis));
    }

    #[test]
    fn supply_cache_can_add_bandage() {
        let mut state = GameState::new(Difficulty::Normal);
        let mut dice = ScriptedDice::new().with_ints([3]).with_chances([true]);
        let outcome = resolve_event(&mut state, 5, &mut dice);
        assert_eq!(
            outcome,
            Some(EventOutcome::SupplyCache {
                water: 3,
                bandage: true
            })
        );
        assert_eq!(state.player.inventory.water, 8);
        assert_eq!(state.player.inventory.bandages, 2);
    }

    #[test]
    fn bandits_cannot_steal_from_empty_flask() {
        let mut state = GameState::new(Difficulty::Normal);
        state.player.inventory.water = 0;
        let mut dice = ScriptedDice::new().with_ints([25, 15]).with_chances([true]);
        let outcome = resolve_event(&mut state, 20, &mut dice);
        assert_eq!(
            outcome,
            Some(EventOutcome::Bandits {
                stolen: 0,
                damage: 25,
                camel_damage: 15
            })
        );
        assert_eq!(state.player.inventory.water, 0);
        assert_eq!(state.player.health, 75);
        assert_eq!(state.camel.health, 85);
    }

    #[test]
    fn bandits_steal_at_most_what_is_carried() {
        let mut state = GameState::new(Difficulty::Normal);
        state.player.inventory.water = 2;
        let mut dice = ScriptedDice::new()
            .with_ints([3, 5, 0])
            .with_chances([true]);
        let outcome = resolve_event(&mut state, 19, &mut dice);
        assert!(matches!(
            outcome,
            Some(EventOutcome::Bandits { stolen: 2, .. })
        ));
        assert_eq!(state.player.inventory.water, 0);
    }

    #[test]
    fn sandstorm_and_sickness_clamp() {
        let mut state = GameState::new(Difficulty::Normal);
        state.player.thirst = 4;
        state.camel.stamina = 95;
        state.player.health = 3;
        let mut dice = ScriptedDice::new().with_ints([2, 20, 10, 25]);
        resolve_event(&mut state, 12, &mut dice);
        assert_eq!(state.player.thirst, 5);
        assert_eq!(state.camel.stamina, 100);
        assert_eq!(state.player.health, 0);

        let outcome = resolve_event(&mut state, 30, &mut dice);
        assert_eq!(outcome, Some(EventOutcome::CamelSickness { fatigue: 25 }));
        assert!(state.camel.sick);
        assert!(state.within_bounds());
    }

    #[test]
    fn quiet_roll_changes_nothing() {
        let mut state = GameState::new(Difficulty::Normal);
        let before = state.clone();
        let mut dice = ScriptedDice::new();
        assert_eq!(resolve_event(&mut state, 77, &mut dice), None);
        assert_eq!(state, before);
    }
}
