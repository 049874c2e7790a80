//! On-disk save schema.
//!
//! Kept separate from [`GameState`] so the file format can be lenient: every
//! field has a default, unknown keys are ignored, and values are clamped back
//! into range when the live state is rebuilt.
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::achievements::{Achievement, AchievementSet};
use crate::constants::{
    CAMEL_HEALTH_MAX, HEALTH_MAX, HEALTH_MIN, STAMINA_MAX, STAMINA_MIN, STARTING_BANDAGES,
    STARTING_WATER, THIRST_MAX, THIRST_MIN,
};
use crate::difficulty::Difficulty;
use crate::error::SnapshotError;
use crate::numbers::{clamp_i64_to_i32, clamp_i64_to_u32};
use crate::state::{Camel, GameState, Inventory, Player, Pursuit, clamp_pursuit};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SaveSnapshot {
    #[serde(default)]
    pub player: PlayerRecord,
    #[serde(default)]
    pub camel: CamelRecord,
    #[serde(default)]
    pub officers: OfficersRecord,
    #[serde(default = "SaveSnapshot::default_difficulty")]
    pub difficulty: String,
    #[serde(default = "SaveSnapshot::default_officer_speed")]
    pub officer_speed: f64,
    #[serde(default = "SaveSnapshot::default_multiplier")]
    pub diff_multiplier: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerRecord {
    #[serde(default)]
    pub thirst: i64,
    #[serde(default = "PlayerRecord::default_health")]
    pub health: i64,
    #[serde(default)]
    pub distance: i64,
    #[serde(default)]
    pub inventory: InventoryRecord,
    #[serde(default)]
    pub score: i64,
    #[serde(default)]
    pub oasis_found: i64,
    #[serde(default, deserialize_with = "lenient_labels")]
    pub achievements: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InventoryRecord {
    #[serde(default = "InventoryRecord::default_water")]
    pub water: i64,
    #[serde(default = "InventoryRecord::default_bandage")]
    pub bandage: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CamelRecord {
    #[serde(default)]
    pub stamina: i64,
    #[serde(default = "CamelRecord::default_health")]
    pub health: i64,
    #[serde(default)]
    pub sickness: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OfficersRecord {
    #[serde(default = "OfficersRecord::default_distance_behind")]
    pub distance_behind: f64,
}

impl SaveSnapshot {
    fn default_difficulty() -> String {
        Difficulty::default().to_string()
    }

    const fn default_officer_speed() -> f64 {
        Difficulty::Normal.officer_speed()
    }

    const fn default_multiplier() -> f64 {
        Difficulty::Normal.score_multiplier()
    }

    /// Copy the live state into the save schema.
    #[must_use]
    pub fn capture(state: &GameState) -> Self {
        let player = &state.player;
        Self {
            player: PlayerRecord {
                thirst: i64::from(player.thirst),
                health: i64::from(player.health),
                distance: i64::from(player.distance),
                inventory: InventoryRecord {
                    water: i64::from(player.inventory.water),
                    bandage: i64::from(player.inventory.bandages),
                },
                score: i64::from(player.score),
                oasis_found: i64::from(player.oasis_found),
                achievements: player
                    .achievements
                    .iter()
                    .map(|achievement| achievement.label().to_string())
                    .collect(),
            },
            camel: CamelRecord {
                stamina: i64::from(state.camel.stamina),
                health: i64::from(state.camel.health),
                sickness: state.camel.sick,
            },
            officers: OfficersRecord {
                distance_behind: state.officers.distance_behind,
            },
            difficulty: state.difficulty.to_string(),
            officer_speed: state.officer_speed,
            diff_multiplier: state.score_multiplier,
        }
    }

    /// Rebuild a live state, clamping every value into its valid range.
    #[must_use]
    pub fn restore(&self) -> GameState {
        let difficulty = self.difficulty.parse().unwrap_or_else(|()| {
            log::warn!(
                "unknown difficulty `{}` in save, using {}",
                self.difficulty,
                Difficulty::default()
            );
            Difficulty::default()
        });

        let mut achievements = AchievementSet::new();
        for label in &self.player.achievements {
            match label.parse::<Achievement>() {
                Ok(achievement) => {
                    achievements.unlock(achievement);
                }
                Err(()) => log::warn!("ignoring unknown achievement `{label}` in save"),
            }
        }

        let record = &self.player;
        GameState {
            player: Player {
                thirst: clamp_i64_to_i32(record.thirst, THIRST_MIN, THIRST_MAX),
                health: clamp_i64_to_i32(record.health, HEALTH_MIN, HEALTH_MAX),
                distance: clamp_i64_to_u32(record.distance),
                inventory: Inventory {
                    water: clamp_i64_to_u32(record.inventory.water),
                    bandages: clamp_i64_to_u32(record.inventory.bandage),
                },
                score: clamp_i64_to_u32(record.score),
                achievements,
                oasis_found: clamp_i64_to_u32(record.oasis_found),
            },
            camel: Camel {
                stamina: clamp_i64_to_i32(self.camel.stamina, STAMINA_MIN, STAMINA_MAX),
                health: clamp_i64_to_i32(self.camel.health, 0, CAMEL_HEALTH_MAX),
                sick: self.camel.sickness,
            },
            officers: Pursuit {
                distance_behind: clamp_pursuit(self.officers.distance_behind),
            },
            difficulty,
            officer_speed: finite_or(self.officer_speed, difficulty.officer_speed()),
            score_multiplier: finite_or(self.diff_multiplier, difficulty.score_multiplier()),
        }
    }

    /// # Errors
    ///
    /// Returns an error if the snapshot cannot be encoded.
    pub fn to_json(&self) -> Result<String, SnapshotError> {
        serde_json::to_string_pretty(self).map_err(SnapshotError::Encode)
    }

    /// # Errors
    ///
    /// Returns an error if the text is not a JSON object matching the schema.
    pub fn from_json(json: &str) -> Result<Self, SnapshotError> {
        serde_json::from_str(json).map_err(SnapshotError::Decode)
    }
}

impl Default for SaveSnapshot {
    fn default() -> Self {
        Self::capture(&GameState::default())
    }
}

impl PlayerRecord {
    const fn default_health() -> i64 {
        HEALTH_MAX as i64
    }
}

impl Default for PlayerRecord {
    fn default() -> Self {
        Self {
            thirst: 0,
            health: Self::default_health(),
            distance: 0,
            inventory: InventoryRecord::default(),
            score: 0,
            oasis_found: 0,
            achievements: Vec::new(),
        }
    }
}

impl InventoryRecord {
    const fn default_water() -> i64 {
        STARTING_WATER as i64
    }

    const fn default_bandage() -> i64 {
        STARTING_BANDAGES as i64
    }
}

impl Default for InventoryRecord {
    fn default() -> Self {
        Self {
            water: Self::default_water(),
            bandage: Self::default_bandage(),
        }
    }
}

impl CamelRecord {
    const fn default_health() -> i64 {
        CAMEL_HEALTH_MAX as i64
    }
}

impl Default for CamelRecord {
    fn default() -> Self {
        Self {
            stamina: 0,
            health: Self::default_health(),
            sickness: false,
        }
    }
}

impl OfficersRecord {
    const fn default_distance_behind() -> f64 {
        Difficulty::Normal.starting_gap()
    }
}

impl Default for OfficersRecord {
    fn default() -> Self {
        Self {
            distance_behind: Self::default_distance_behind(),
        }
    }
}

fn finite_or(value: f64, fallback: f64) -> f64 {
    if value.is_finite() { value } else { fallback }
}

/// Accept any JSON for the achievement list, keeping only string entries.
fn lenient_labels<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Array(items) => items
            .into_iter()
            .filter_map(|item| item.as_str().map(str::to_string))
            .collect(),
        _ => Vec::new(),
    })
}
