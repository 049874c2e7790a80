//! Centralized balance and tuning constants for the Gobi Escape turn engine.
//!
//! Keeping them together means gameplay can only be adjusted through code
//! changes reviewed in version control.

// Journey ------------------------------------------------------------------
pub const TOTAL_DISTANCE: u32 = 200;
pub const MAP_WIDTH: usize = 40;

// Player -------------------------------------------------------------------
pub const THIRST_MIN: i32 = 0;
pub const THIRST_MAX: i32 = 5;
pub const HEALTH_MIN: i32 = 0;
pub const HEALTH_MAX: i32 = 100;
pub const STARTING_WATER: u32 = 5;
pub const STARTING_BANDAGES: u32 = 1;

// Camel --------------------------------------------------------------------
pub const STAMINA_MIN: i32 = 0;
pub const STAMINA_MAX: i32 = 100;
pub const CAMEL_HEALTH_MAX: i32 = 100;

// Pursuit ------------------------------------------------------------------
pub const PURSUIT_MIN: f64 = -50.0;
pub const PURSUIT_MAX: f64 = 1_000.0;

// Actions ------------------------------------------------------------------
pub(crate) const MODERATE_TRAVEL_KM: (i32, i32) = (5, 12);
pub(crate) const MODERATE_FATIGUE: (i32, i32) = (5, 12);
pub(crate) const MODERATE_PURSUIT_FACTOR: (f64, f64) = (0.8, 1.2);
pub(crate) const FAST_TRAVEL_KM: (i32, i32) = (10, 20);
pub(crate) const FAST_THIRST: (i32, i32) = (1, 2);
pub(crate) const FAST_FATIGUE: (i32, i32) = (10, 25);
pub(crate) const FAST_PURSUIT_FACTOR: (f64, f64) = (0.4, 1.0);
pub(crate) const FAST_EVENT_CHANCE: f64 = 0.6;
pub(crate) const REST_RECOVERY: (i32, i32) = (10, 30);
pub(crate) const REST_PURSUIT_DAYS: (i32, i32) = (7, 14);
pub(crate) const REST_PURSUIT_SCALE: f64 = 10.0;
pub(crate) const REST_EVENT_CHANCE: f64 = 0.12;
pub(crate) const BANDAGE_HEAL: (i32, i32) = (10, 30);

// Random events ------------------------------------------------------------
pub(crate) const EVENT_ROLL: (i32, i32) = (1, 100);
pub(crate) const OASIS_WATER: u32 = 5;
pub(crate) const CACHE_WATER: (i32, i32) = (1, 3);
pub(crate) const CACHE_BANDAGE_CHANCE: f64 = 0.3;
pub(crate) const SANDSTORM_THIRST: (i32, i32) = (1, 2);
pub(crate) const SANDSTORM_FATIGUE: (i32, i32) = (5, 20);
pub(crate) const SANDSTORM_DAMAGE: (i32, i32) = (0, 10);
pub(crate) const BANDIT_THEFT_CHANCE: f64 = 0.7;
pub(crate) const BANDIT_MAX_STOLEN: u32 = 3;
pub(crate) const BANDIT_DAMAGE: (i32, i32) = (5, 25);
pub(crate) const BANDIT_CAMEL_DAMAGE: (i32, i32) = (0, 15);
pub(crate) const SICKNESS_FATIGUE: (i32, i32) = (10, 25);

// Scoring ------------------------------------------------------------------
pub(crate) const SCORE_PER_KM: u32 = 10;
pub(crate) const SCORE_PER_WATER: u32 = 20;
pub(crate) const SCORE_PER_OASIS: u32 = 150;
pub(crate) const SCORE_PER_ACHIEVEMENT: u32 = 100;

// Achievements -------------------------------------------------------------
pub(crate) const HOARDER_WATER: u32 = 10;
pub(crate) const TOUGH_RIDE_STAMINA: i32 = 20;
pub(crate) const PRISTINE_HEALTH: i32 = 90;
