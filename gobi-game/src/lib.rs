//! Gobi Escape Game Engine
//!
//! Platform-agnostic turn engine for the Gobi Escape desert survival game.
//! This crate provides all game mechanics without console or file I/O.

pub mod achievements;
pub mod actions;
pub mod command;
pub mod constants;
pub mod dice;
pub mod difficulty;
pub mod ending;
pub mod error;
pub mod events;
pub mod map;
pub mod numbers;
pub mod result;
pub mod score;
pub mod session;
pub mod snapshot;
pub mod state;

// Re-export commonly used types
pub use achievements::{Achievement, AchievementSet, evaluate_achievements};
pub use actions::{ActionResult, EventRoll};
pub use command::{Command, UnknownCommand};
pub use constants::{MAP_WIDTH, TOTAL_DISTANCE};
pub use dice::{CountingRng, Dice, ScriptedDice, SessionRng};
pub use difficulty::Difficulty;
pub use ending::{Ending, check_terminal};
pub use error::SnapshotError;
pub use events::{EVENT_TABLE, EventBucket, EventKind, EventOutcome, classify_roll, roll_event};
pub use map::progress_bar;
pub use result::{ResultSummary, result_summary};
pub use score::{ScoreBreakdown, calculate_score};
pub use session::{GameSession, StatusReport, TurnReport};
pub use snapshot::SaveSnapshot;
pub use state::{Camel, GameState, Inventory, Player, Pursuit};

/// Trait for abstracting the single save slot.
/// Platform-specific implementations should provide this
pub trait GameStorage {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Human-readable location of the slot, for player-facing messages.
    fn describe(&self) -> String {
        String::from("save slot")
    }

    /// Whether a save currently exists.
    fn has_save(&self) -> bool;

    /// Overwrite the save slot with a snapshot
    ///
    /// # Errors
    ///
    /// Returns an error if the snapshot cannot be written.
    fn save_snapshot(&self, snapshot: &SaveSnapshot) -> Result<(), Self::Error>;

    /// Read the save slot
    ///
    /// # Errors
    ///
    /// Returns an error if the slot exists but cannot be read or decoded.
    fn load_snapshot(&self) -> Result<Option<SaveSnapshot>, Self::Error>;

    /// Delete the save slot
    ///
    /// # Errors
    ///
    /// Returns an error if the save cannot be deleted.
    fn delete_save(&self) -> Result<(), Self::Error>;
}

/// Main game engine tying sessions to a save slot
pub struct GameEngine<S>
where
    S: GameStorage,
{
    storage: S,
}

impl<S> GameEngine<S>
where
    S: GameStorage,
{
    /// Create a new game engine backed by the provided storage
    pub const fn new(storage: S) -> Self {
        Self { storage }
    }

    #[must_use]
    pub const fn storage(&self) -> &S {
        &self.storage
    }

    /// Start a fresh session at the given difficulty
    #[must_use]
    pub fn new_session(&self, difficulty: Difficulty) -> GameSession {
        log::info!("starting new {difficulty} game");
        GameSession::new(difficulty)
    }

    #[must_use]
    pub fn has_save(&self) -> bool {
        self.storage.has_save()
    }

    /// Save a session's current state
    ///
    /// # Errors
    ///
    /// Returns an error if the snapshot cannot be saved.
    pub fn save_session<D: Dice>(&self, session: &GameSession<D>) -> Result<(), S::Error> {
        self.storage.save_snapshot(&session.snapshot())
    }

    /// Restore the saved state, if any
    ///
    /// # Errors
    ///
    /// Returns an error if the save exists but cannot be read.
    pub fn load_state(&self) -> Result<Option<GameState>, S::Error> {
        Ok(self
            .storage
            .load_snapshot()?
            .map(|snapshot| snapshot.restore()))
    }

    /// Resume the saved session, if any
    ///
    /// # Errors
    ///
    /// Returns an error if the save exists but cannot be read.
    pub fn load_session(&self) -> Result<Option<GameSession>, S::Error> {
        Ok(self.load_state()?.map(GameSession::resume))
    }

    /// Delete the save slot
    ///
    /// # Errors
    ///
    /// Returns an error if the save cannot be deleted.
    pub fn delete_save(&self) -> Result<(), S::Error> {
        self.storage.delete_save()
    }
}
