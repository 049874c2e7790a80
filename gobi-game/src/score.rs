//! Score calculation. Pure function of the state and its multiplier.
use serde::{Deserialize, Serialize};

use crate::constants::{
    SCORE_PER_ACHIEVEMENT, SCORE_PER_KM, SCORE_PER_OASIS, SCORE_PER_WATER, STAMINA_MAX,
};
use crate::numbers::{floor_f64_to_u32, i32_to_u32};
use crate::state::GameState;

/// Individual contributions to the raw (pre-multiplier) score.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub distance: u32,
    pub water: u32,
    pub health: u32,
    pub camel: u32,
    pub oasis: u32,
    pub achievements: u32,
    pub multiplier: f64,
}

impl ScoreBreakdown {
    #[must_use]
    pub fn of(state: &GameState) -> Self {
        let player = &state.player;
        let achievement_count = u32::try_from(player.achievements.len()).unwrap_or(u32::MAX);
        Self {
            distance: player.distance.saturating_mul(SCORE_PER_KM),
            water: player.inventory.water.saturating_mul(SCORE_PER_WATER),
            health: i32_to_u32(player.health),
            camel: i32_to_u32(STAMINA_MAX - state.camel.stamina),
            oasis: player.oasis_found.saturating_mul(SCORE_PER_OASIS),
            achievements: achievement_count.saturating_mul(SCORE_PER_ACHIEVEMENT),
            multiplier: state.score_multiplier,
        }
    }

    #[must_use]
    pub fn raw(&self) -> u32 {
        self.distance
            .saturating_add(self.water)
            .saturating_add(self.health)
            .saturating_add(self.camel)
            .saturating_add(self.oasis)
            .saturating_add(self.achievements)
    }

    #[must_use]
    pub fn total(&self) -> u32 {
        floor_f64_to_u32(f64::from(self.raw()) * self.multiplier)
    }
}

/// `floor(multiplier * (10*km + 20*water + health + (100 - fatigue) + 150*oases + 100*achievements))`
#[must_use]
pub fn calculate_score(state: &GameState) -> u32 {
    ScoreBreakdown::of(state).total()
}
