//! End game result calculation
use serde::{Deserialize, Serialize};

use crate::ending::Ending;
use crate::score::ScoreBreakdown;
use crate::state::GameState;

/// Complete summary of a finished run for the game-over screen
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultSummary {
    pub ending: Ending,
    pub headline: String,
    pub difficulty: String,
    pub days: u32,
    pub distance: u32,
    pub health: i32,
    pub camel_stamina: i32,
    pub camel_health: i32,
    pub water: u32,
    pub oases: u32,
    pub achievements: Vec<String>,
    pub breakdown: ScoreBreakdown,
    pub score: u32,
}

impl ResultSummary {
    #[must_use]
    pub const fn is_victory(&self) -> bool {
        self.ending.is_victory()
    }
}

/// Build the summary for a state whose final achievements and score are settled.
#[must_use]
pub fn result_summary(state: &GameState, ending: Ending, days: u32) -> ResultSummary {
    let player = &state.player;
    ResultSummary {
        ending,
        headline: ending.headline().to_string(),
        difficulty: state.difficulty.to_string(),
        days,
        distance: player.distance,
        health: player.health,
        camel_stamina: state.camel.stamina,
        camel_health: state.camel.health,
        water: player.inventory.water,
        oases: player.oasis_found,
        achievements: player
            .achievements
            .sorted_labels()
            .into_iter()
            .map(str::to_string)
            .collect(),
        breakdown: ScoreBreakdown::of(state),
        score: player.score,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::achievements::Achievement;
    use crate::difficulty::Difficulty;

    #[test]
    fn summary_copies_final_numbers() {
        let mut state = GameState::new(Difficulty::Hard);
        state.player.distance = 205;
        state.player.achievements.unlock(Achievement::Escape);
        state.player.achievements.unlock(Achievement::Hydrated);
        state.player.score = 4_321;

        let summary = result_summary(&state, Ending::Escaped, 17);

        assert!(summary.is_victory());
        assert_eq!(summary.days, 17);
        assert_eq!(summary.distance, 205);
        assert_eq!(summary.difficulty, "HARD");
        assert_eq!(summary.achievements, vec!["Escape!", "Hydrated"]);
        assert_eq!(summary.score, 4_321);
        assert_eq!(summary.headline, Ending::Escaped.headline());
    }
}
