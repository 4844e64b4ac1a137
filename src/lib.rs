//! Dino Run - a terminal side-scroller
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, obstacles, collisions)
//! - `render`: Frame composition against an abstract render target
//! - `platform`: Terminal surface and key input
//! - `settings`: Player configuration
//! - `highscores`: Persisted leaderboard

pub mod highscores;
pub mod platform;
pub mod render;
pub mod settings;
pub mod sim;

pub use highscores::HighScores;
pub use settings::{ConfigError, Settings};

/// Game configuration constants
pub mod consts {
    /// Target frames (and simulation ticks) per second
    pub const FPS: u32 = 60;

    /// Rows in the play area, ground line included
    pub const PLAY_AREA_HEIGHT: i32 = 20;
    /// Screen row where the play area starts
    pub const PLAY_AREA_TOP: u16 = 5;
    /// Row the actor and obstacles stand on (top row of a 4-tall sprite)
    pub const GROUND_ROW: i32 = PLAY_AREA_HEIGHT - 5;

    /// Actor sprite dimensions and fixed column
    pub const ACTOR_HEIGHT: i32 = 4;
    pub const ACTOR_WIDTH: i32 = 9;
    pub const ACTOR_LEFT: i32 = 40;
    /// Velocity applied by a jump (cells/tick, upward)
    pub const ACTOR_MAX_UPWARD_VELOCITY: f32 = 3.0;

    /// Level defaults
    pub const DEFAULT_GRAVITY: f32 = -0.40;
    pub const DEFAULT_SPAWN_VARIABILITY: u32 = 10;
    /// Fallback when the terminal size can't be queried
    pub const DEFAULT_PLAY_AREA_WIDTH: i32 = 80;
}
