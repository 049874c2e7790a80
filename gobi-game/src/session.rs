//! Turn engine: owns one escape attempt and advances it command by command.
use serde::Serialize;

use crate::achievements::{Achievement, AchievementSet, evaluate_achievements};
use crate::actions::{self, ActionResult};
use crate::command::Command;
use crate::constants::TOTAL_DISTANCE;
use crate::dice::{Dice, SessionRng};
use crate::difficulty::Difficulty;
use crate::ending::{Ending, check_terminal};
use crate::events::{EventOutcome, roll_event};
use crate::map::progress_bar;
use crate::result::{ResultSummary, result_summary};
use crate::score::calculate_score;
use crate::snapshot::SaveSnapshot;
use crate::state::GameState;

/// Everything a front end needs to narrate one applied command.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TurnReport {
    pub command: Command,
    pub day: u32,
    pub narration: Option<String>,
    pub event: Option<EventOutcome>,
    /// `false` for read-only commands and no-op actions.
    pub consumed_day: bool,
    pub unlocked: Vec<Achievement>,
    pub ending: Option<Ending>,
}

impl TurnReport {
    fn idle(command: Command, day: u32, ending: Option<Ending>) -> Self {
        Self {
            command,
            day,
            narration: None,
            event: None,
            consumed_day: false,
            unlocked: Vec::new(),
            ending,
        }
    }
}

/// Read-only view for the status screen.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatusReport {
    pub day: u32,
    pub difficulty: Difficulty,
    pub distance: u32,
    pub total_distance: u32,
    pub health: i32,
    pub thirst: i32,
    pub camel_stamina: i32,
    pub camel_health: i32,
    pub camel_sick: bool,
    pub water: u32,
    pub bandages: u32,
    pub officers_behind: f64,
    pub score: u32,
    pub achievements: Vec<&'static str>,
    pub progress_bar: String,
}

pub struct GameSession<D = SessionRng> {
    state: GameState,
    dice: D,
    day: u32,
    ending: Option<Ending>,
}

impl GameSession<SessionRng> {
    /// Fresh game on OS entropy.
    #[must_use]
    pub fn new(difficulty: Difficulty) -> Self {
        Self::with_dice(GameState::new(difficulty), SessionRng::from_entropy())
    }

    /// Continue a restored game on OS entropy.
    #[must_use]
    pub fn resume(state: GameState) -> Self {
        Self::with_dice(state, SessionRng::from_entropy())
    }
}

impl<D: Dice> GameSession<D> {
    #[must_use]
    pub fn with_dice(state: GameState, dice: D) -> Self {
        Self {
            state,
            dice,
            day: 1,
            ending: None,
        }
    }

    #[must_use]
    pub const fn state(&self) -> &GameState {
        &self.state
    }

    #[must_use]
    pub const fn dice(&self) -> &D {
        &self.dice
    }

    #[must_use]
    pub const fn day(&self) -> u32 {
        self.day
    }

    #[must_use]
    pub const fn ending(&self) -> Option<Ending> {
        self.ending
    }

    #[must_use]
    pub const fn is_over(&self) -> bool {
        self.ending.is_some()
    }

    /// Apply a single command and report what happened.
    ///
    /// Once the session has ended every command is ignored.
    pub fn apply(&mut self, command: Command) -> TurnReport {
        if self.ending.is_some() {
            return TurnReport::idle(command, self.day, self.ending);
        }

        let before = self.state.player.achievements.clone();
        let day = self.day;
        let result = match command {
            Command::Status | Command::Save => return TurnReport::idle(command, day, None),
            Command::Quit => {
                self.finish(Ending::Forfeit);
                return TurnReport {
                    unlocked: newly_unlocked(&before, &self.state.player.achievements),
                    ..TurnReport::idle(command, day, self.ending)
                };
            }
            Command::Drink => actions::drink(&mut self.state),
            Command::MoveModerate => actions::move_moderate(&mut self.state, &mut self.dice),
            Command::MoveFast => actions::move_fast(&mut self.state, &mut self.dice),
            Command::Rest => actions::rest(&mut self.state, &mut self.dice),
            Command::UseBandage => actions::use_bandage(&mut self.state, &mut self.dice),
        };

        let ActionResult {
            narration,
            consumed_day,
            event_roll,
        } = result;
        if !consumed_day {
            return TurnReport {
                narration: Some(narration),
                ..TurnReport::idle(command, day, None)
            };
        }

        let event = if event_roll.attempt(&mut self.dice) {
            roll_event(&mut self.state, &mut self.dice)
        } else {
            None
        };

        if let Some(ending) = check_terminal(&self.state) {
            self.finish(ending);
        } else {
            evaluate_achievements(&mut self.state);
            self.state.player.score = calculate_score(&self.state);
            self.day = self.day.saturating_add(1);
        }

        log::debug!(
            "day {day}: {command:?} -> {} km, thirst {}, fatigue {}, officers {:.1} km behind",
            self.state.player.distance,
            self.state.player.thirst,
            self.state.camel.stamina,
            self.state.officers.distance_behind
        );

        TurnReport {
            command,
            day,
            narration: Some(narration),
            event,
            consumed_day: true,
            unlocked: newly_unlocked(&before, &self.state.player.achievements),
            ending: self.ending,
        }
    }

    fn finish(&mut self, ending: Ending) {
        if ending == Ending::Escaped {
            self.state.player.achievements.unlock(Achievement::Escape);
        }
        evaluate_achievements(&mut self.state);
        self.state.player.score = calculate_score(&self.state);
        self.ending = Some(ending);
        log::info!(
            "session ended on day {}: {ending} with score {}",
            self.day,
            self.state.player.score
        );
    }

    #[must_use]
    pub fn status(&self) -> StatusReport {
        let player = &self.state.player;
        StatusReport {
            day: self.day,
            difficulty: self.state.difficulty,
            distance: player.distance,
            total_distance: TOTAL_DISTANCE,
            health: player.health,
            thirst: player.thirst,
            camel_stamina: self.state.camel.stamina,
            camel_health: self.state.camel.health,
            camel_sick: self.state.camel.sick,
            water: player.inventory.water,
            bandages: player.inventory.bandages,
            officers_behind: self.state.officers.distance_behind,
            score: player.score,
            achievements: player.achievements.sorted_labels(),
            progress_bar: progress_bar(&self.state),
        }
    }

    #[must_use]
    pub fn snapshot(&self) -> SaveSnapshot {
        SaveSnapshot::capture(&self.state)
    }

    /// Final summary, available once the session has ended.
    #[must_use]
    pub fn summary(&self) -> Option<ResultSummary> {
        self.ending
            .map(|ending| result_summary(&self.state, ending, self.day))
    }
}

fn newly_unlocked(before: &AchievementSet, after: &AchievementSet) -> Vec<Achievement> {
    after
        .iter()
        .filter(|achievement| !before.contains(*achievement))
        .collect()
}
