use serde::{Deserialize, Serialize};

use crate::achievements::AchievementSet;
use crate::constants::{
    CAMEL_HEALTH_MAX, HEALTH_MAX, HEALTH_MIN, PURSUIT_MAX, PURSUIT_MIN, STAMINA_MAX, STAMINA_MIN,
    STARTING_BANDAGES, STARTING_WATER, THIRST_MAX, THIRST_MIN,
};
use crate::difficulty::Difficulty;

/// Supplies carried by the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Inventory {
    pub water: u32,
    pub bandages: u32,
}

impl Default for Inventory {
    fn default() -> Self {
        Self {
            water: STARTING_WATER,
            bandages: STARTING_BANDAGES,
        }
    }
}

impl Inventory {
    /// Consume one water if any is left.
    pub fn take_water(&mut self) -> bool {
        if self.water == 0 {
            return false;
        }
        self.water -= 1;
        true
    }

    /// Consume one bandage if any is left.
    pub fn take_bandage(&mut self) -> bool {
        if self.bandages == 0 {
            return false;
        }
        self.bandages -= 1;
        true
    }

    pub fn add_water(&mut self, amount: u32) {
        self.water = self.water.saturating_add(amount);
    }

    /// Remove up to `amount` water, returning how much was actually lost.
    pub fn lose_water(&mut self, amount: u32) -> u32 {
        let lost = amount.min(self.water);
        self.water -= lost;
        lost
    }

    pub fn add_bandage(&mut self) {
        self.bandages = self.bandages.saturating_add(1);
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    /// 0 is quenched, 5 is fatal.
    pub thirst: i32,
    pub health: i32,
    /// Kilometres traveled; never decreases.
    pub distance: u32,
    pub inventory: Inventory,
    pub score: u32,
    pub achievements: AchievementSet,
    pub oasis_found: u32,
}

impl Default for Player {
    fn default() -> Self {
        Self {
            thirst: THIRST_MIN,
            health: HEALTH_MAX,
            distance: 0,
            inventory: Inventory::default(),
            score: 0,
            achievements: AchievementSet::new(),
            oasis_found: 0,
        }
    }
}

impl Player {
    pub fn add_thirst(&mut self, amount: i32) {
        self.thirst = self.thirst.saturating_add(amount).clamp(THIRST_MIN, THIRST_MAX);
    }

    pub const fn quench(&mut self) {
        self.thirst = THIRST_MIN;
    }

    pub fn heal(&mut self, amount: i32) {
        self.health = self.health.saturating_add(amount).clamp(HEALTH_MIN, HEALTH_MAX);
    }

    pub fn wound(&mut self, amount: i32) {
        self.health = self.health.saturating_sub(amount).clamp(HEALTH_MIN, HEALTH_MAX);
    }

    pub fn advance(&mut self, km: u32) {
        self.distance = self.distance.saturating_add(km);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Camel {
    /// Fatigue: 0 is fully rested, 100 means the camel collapses.
    pub stamina: i32,
    pub health: i32,
    pub sick: bool,
}

impl Default for Camel {
    fn default() -> Self {
        Self {
            stamina: STAMINA_MIN,
            health: CAMEL_HEALTH_MAX,
            sick: false,
        }
    }
}

impl Camel {
    pub fn tire(&mut self, amount: i32) {
        self.stamina = self.stamina.saturating_add(amount).clamp(STAMINA_MIN, STAMINA_MAX);
    }

    pub fn recover(&mut self, amount: i32) {
        self.stamina = self.stamina.saturating_sub(amount).clamp(STAMINA_MIN, STAMINA_MAX);
    }

    pub const fn rest_fully(&mut self) {
        self.stamina = STAMINA_MIN;
    }

    pub fn injure(&mut self, amount: i32) {
        self.health = self.health.saturating_sub(amount).clamp(0, CAMEL_HEALTH_MAX);
    }
}

/// The officers chasing the player.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Pursuit {
    /// Kilometres behind the player; zero or below means caught.
    pub distance_behind: f64,
}

impl Pursuit {
    #[must_use]
    pub fn new(distance_behind: f64) -> Self {
        Self {
            distance_behind: clamp_pursuit(distance_behind),
        }
    }

    pub fn close_in(&mut self, km: f64) {
        self.distance_behind = clamp_pursuit(self.distance_behind - km);
    }

    pub fn fall_back(&mut self, km: f64) {
        self.distance_behind = clamp_pursuit(self.distance_behind + km);
    }

    #[must_use]
    pub fn has_caught_up(&self) -> bool {
        self.distance_behind <= 0.0
    }
}

impl Default for Pursuit {
    fn default() -> Self {
        Self::new(Difficulty::default().starting_gap())
    }
}

pub(crate) fn clamp_pursuit(value: f64) -> f64 {
    if value.is_nan() {
        return PURSUIT_MIN;
    }
    value.clamp(PURSUIT_MIN, PURSUIT_MAX)
}

/// Complete mutable state of one escape attempt.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    pub player: Player,
    pub camel: Camel,
    pub officers: Pursuit,
    pub difficulty: Difficulty,
    /// Carried separately from `difficulty` so restored saves keep their own tuning.
    pub officer_speed: f64,
    pub score_multiplier: f64,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(Difficulty::default())
    }
}

impl GameState {
    #[must_use]
    pub fn new(difficulty: Difficulty) -> Self {
        Self {
            player: Player::default(),
            camel: Camel::default(),
            officers: Pursuit::new(difficulty.starting_gap()),
            difficulty,
            officer_speed: difficulty.officer_speed(),
            score_multiplier: difficulty.score_multiplier(),
        }
    }

    /// Whether every bounded stat is inside its documented range.
    #[must_use]
    pub fn within_bounds(&self) -> bool {
        (THIRST_MIN..=THIRST_MAX).contains(&self.player.thirst)
            && (HEALTH_MIN..=HEALTH_MAX).contains(&self.player.health)
            && (STAMINA_MIN..=STAMINA_MAX).contains(&self.camel.stamina)
            && (0..=CAMEL_HEALTH_MAX).contains(&self.camel.health)
            && (PURSUIT_MIN..=PURSUIT_MAX).contains(&self.officers.distance_behind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_state_uses_difficulty_tuning() {
        let state = GameState::new(Difficulty::Hard);
        assert_eq!(state.player.inventory.water, 5);
        assert_eq!(state.player.inventory.bandages, 1);
        assert!((state.officers.distance_behind - 15.0).abs() < f64::EPSILON);
        assert!((state.officer_speed - 0.16).abs() < f64::EPSILON);
        assert!((state.score_multiplier - 2.0).abs() < f64::EPSILON);
        assert!(state.within_bounds());
    }

    #[test]
    fn player_mutators_clamp() {
        let mut player = Player::default();
        player.add_thirst(9);
        assert_eq!(player.thirst, THIRST_MAX);
        player.add_thirst(-20);
        assert_eq!(player.thirst, THIRST_MIN);
        player.wound(250);
        assert_eq!(player.health, HEALTH_MIN);
        player.heal(400);
        assert_eq!(player.health, HEALTH_MAX);
    }

    #[test]
    fn camel_mutators_clamp() {
        let mut camel = Camel::default();
        camel.tire(130);
        assert_eq!(camel.stamina, STAMINA_MAX);
        camel.recover(500);
        assert_eq!(camel.stamina, STAMINA_MIN);
        camel.injure(101);
        assert_eq!(camel.health, 0);
    }

    #[test]
    fn pursuit_clamps_both_ends() {
        let mut officers = Pursuit::new(10.0);
        officers.close_in(400.0);
        assert!((officers.distance_behind - PURSUIT_MIN).abs() < f64::EPSILON);
        assert!(officers.has_caught_up());
        officers.fall_back(5_000.0);
        assert!((officers.distance_behind - PURSUIT_MAX).abs() < f64::EPSILON);
        assert!(!officers.has_caught_up());
    }

    #[test]
    fn inventory_never_goes_negative() {
        let mut inventory = Inventory {
            water: 2,
            bandages: 0,
        };
        assert_eq!(inventory.lose_water(3), 2);
        assert_eq!(inventory.water, 0);
        assert!(!inventory.take_water());
        assert!(!inventory.take_bandage());
        inventory.add_bandage();
        assert!(inventory.take_bandage());
        assert_eq!(inventory.bandages, 0);
    }
}
