//! Per-day actions. Each one mutates the state and reports what happened;
//! random events and ending checks are left to the session.
use crate::achievements::Achievement;
use crate::constants::{
    BANDAGE_HEAL, FAST_EVENT_CHANCE, FAST_FATIGUE, FAST_PURSUIT_FACTOR, FAST_THIRST,
    FAST_TRAVEL_KM, MODERATE_FATIGUE, MODERATE_PURSUIT_FACTOR, MODERATE_TRAVEL_KM,
    REST_EVENT_CHANCE, REST_PURSUIT_DAYS, REST_PURSUIT_SCALE, REST_RECOVERY,
};
use crate::dice::Dice;
use crate::numbers::i32_to_u32;
use crate::state::GameState;

/// How likely a random event is after an action.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EventRoll {
    Never,
    Always,
    Chance(f64),
}

impl EventRoll {
    /// Decide whether the event roll happens, consuming a draw only for `Chance`.
    pub fn attempt<D>(self, dice: &mut D) -> bool
    where
        D: Dice + ?Sized,
    {
        match self {
            Self::Never => false,
            Self::Always => true,
            Self::Chance(probability) => dice.chance(probability),
        }
    }
}

/// Result of a single action before events and endings are considered.
#[derive(Debug, Clone, PartialEq)]
pub struct ActionResult {
    pub narration: String,
    /// `false` for no-ops such as drinking from an empty flask.
    pub consumed_day: bool,
    pub event_roll: EventRoll,
}

impl ActionResult {
    fn day(narration: String, event_roll: EventRoll) -> Self {
        Self {
            narration,
            consumed_day: true,
            event_roll,
        }
    }

    /// Refused action. The day is not consumed, so no event roll or end-of-day check follows.
    fn no_op(narration: &str) -> Self {
        Self {
            narration: narration.to_string(),
            consumed_day: false,
            event_roll: EventRoll::Never,
        }
    }
}

pub fn drink(state: &mut GameState) -> ActionResult {
    if !state.player.inventory.take_water() {
        return ActionResult::no_op("You have no water left!");
    }
    state.player.quench();
    state.player.achievements.unlock(Achievement::Hydrated);
    ActionResult::day(
        "You drink a bottle of water. Thirst reset.".to_string(),
        EventRoll::Never,
    )
}

pub fn move_moderate<D>(state: &mut GameState, dice: &mut D) -> ActionResult
where
    D: Dice + ?Sized,
{
    let travel = dice.int(MODERATE_TRAVEL_KM.0, MODERATE_TRAVEL_KM.1);
    state.player.advance(i32_to_u32(travel));
    state.player.add_thirst(1);
    state
        .camel
        .tire(dice.int(MODERATE_FATIGUE.0, MODERATE_FATIGUE.1));
    let factor = dice.real(MODERATE_PURSUIT_FACTOR.0, MODERATE_PURSUIT_FACTOR.1);
    state
        .officers
        .close_in(f64::from(travel) * state.officer_speed * factor);
    ActionResult::day(
        format!("You travel {travel} km at a steady pace."),
        EventRoll::Always,
    )
}

pub fn move_fast<D>(state: &mut GameState, dice: &mut D) -> ActionResult
where
    D: Dice + ?Sized,
{
    let travel = dice.int(FAST_TRAVEL_KM.0, FAST_TRAVEL_KM.1);
    state.player.advance(i32_to_u32(travel));
    state.player.add_thirst(dice.int(FAST_THIRST.0, FAST_THIRST.1));
    state.camel.tire(dice.int(FAST_FATIGUE.0, FAST_FATIGUE.1));
    let factor = dice.real(FAST_PURSUIT_FACTOR.0, FAST_PURSUIT_FACTOR.1);
    state
        .officers
        .close_in(f64::from(travel) * state.officer_speed * factor);
    ActionResult::day(
        format!(
            "You dash full speed for {travel} km! The camel strains but you gain distance."
        ),
        EventRoll::Chance(FAST_EVENT_CHANCE),
    )
}

pub fn rest<D>(state: &mut GameState, dice: &mut D) -> ActionResult
where
    D: Dice + ?Sized,
{
    let recovered = dice.int(REST_RECOVERY.0, REST_RECOVERY.1);
    state.camel.recover(recovered);
    state.player.add_thirst(1);
    let days = dice.int(REST_PURSUIT_DAYS.0, REST_PURSUIT_DAYS.1);
    state
        .officers
        .fall_back(f64::from(days) * state.officer_speed * REST_PURSUIT_SCALE);
    ActionResult::day(
        format!(
            "You rest for the day. The camel recovers {recovered} stamina (fatigue reduced)."
        ),
        EventRoll::Chance(REST_EVENT_CHANCE),
    )
}

pub fn use_bandage<D>(state: &mut GameState, dice: &mut D) -> ActionResult
where
    D: Dice + ?Sized,
{
    if !state.player.inventory.take_bandage() {
        return ActionResult::no_op("No bandages available.");
    }
    let heal = dice.int(BANDAGE_HEAL.0, BANDAGE_HEAL.1);
    state.player.heal(heal);
    ActionResult::day(
        format!("You use a bandage and stabilize yourself (+{heal} health)."),
        EventRoll::Never,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::difficulty::Difficulty;
    use crate::dice::ScriptedDice;

    #[test]
    fn drink_resets_thirst_and_unlocks_hydrated() {
        let mut state = GameState::new(Difficulty::Normal);
        state.player.thirst = 4;
        let result = drink(&mut state);
        assert!(result.consumed_day);
        assert_eq!(state.player.thirst, 0);
        assert_eq!(state.player.inventory.water, 4);
        assert!(state.player.achievements.contains(Achievement::Hydrated));
    }

    #[test]
    fn drink_with_empty_flask_changes_nothing() {
        let mut state = GameState::new(Difficulty::Normal);
        state.player.inventory.water = 0;
        state.player.thirst = 3;
        let before = state.clone();
        let result = drink(&mut state);
        assert!(!result.consumed_day);
        assert_eq!(result.narration, "You have no water left!");
        assert_eq!(state, before);
    }

    #[test]
    fn moderate_move_applies_draws() {
        let mut state = GameState::new(Difficulty::Normal);
        let mut dice = ScriptedDice::new().with_ints([10, 7]).with_reals([1.0]);
        let result = move_moderate(&mut state, &mut dice);
        assert_eq!(result.event_roll, EventRoll::Always);
        assert_eq!(state.player.distance, 10);
        assert_eq!(state.player.thirst, 1);
        assert_eq!(state.camel.stamina, 7);
        // 20 - 10 * 0.12 * 1.0
        assert!((state.officers.distance_behind - 18.8).abs() < 1e-9);
    }

    #[test]
    fn fast_move_costs_more() {
        let mut state = GameState::new(Difficulty::Hard);
        let mut dice = ScriptedDice::new()
            .with_ints([20, 2, 25])
            .with_reals([0.5]);
        let result = move_fast(&mut state, &mut dice);
        assert_eq!(result.event_roll, EventRoll::Chance(0.6));
        assert_eq!(state.player.distance, 20);
        assert_eq!(state.player.thirst, 2);
        assert_eq!(state.camel.stamina, 25);
        // 15 - 20 * 0.16 * 0.5
        assert!((state.officers.distance_behind - 13.4).abs() < 1e-9);
    }

    #[test]
    fn rest_recovers_camel_and_lets_officers_fall_back() {
        let mut state = GameState::new(Difficulty::Easy);
        state.camel.stamina = 15;
        let mut dice = ScriptedDice::new().with_ints([30, 10]);
        let result = rest(&mut state, &mut dice);
        assert_eq!(result.event_roll, EventRoll::Chance(0.12));
        assert_eq!(state.camel.stamina, 0);
        assert_eq!(state.player.thirst, 1);
        // 25 + 10 * 0.08 * 10
        assert!((state.officers.distance_behind - 33.0).abs() < 1e-9);
    }

    #[test]
    fn bandage_heals_up_to_cap() {
        let mut state = GameState::new(Difficulty::Normal);
        state.player.health = 85;
        let mut dice = ScriptedDice::new().with_ints([30]);
        assert!(use_bandage(&mut state, &mut dice).consumed_day);
        assert_eq!(state.player.health, 100);
        assert_eq!(state.player.inventory.bandages, 0);

        let before = state.clone();
        let result = use_bandage(&mut state, &mut dice);
        assert!(!result.consumed_day);
        assert_eq!(state, before);
    }

    #[test]
    fn event_roll_only_draws_for_chance() {
        let mut dice = ScriptedDice::new().with_chances([true]);
        assert!(EventRoll::Always.attempt(&mut dice));
        assert!(!EventRoll::Never.attempt(&mut dice));
        assert!(EventRoll::Chance(0.12).attempt(&mut dice));
        assert!(!EventRoll::Chance(0.12).attempt(&mut dice));
    }
}
