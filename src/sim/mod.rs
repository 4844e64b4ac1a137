//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One tick per frame, no wall-clock time
//! - Injected RNG only
//! - Obstacles iterate front (leftmost) to back
//! - No rendering or platform dependencies

pub mod actor;
pub mod error;
pub mod geometry;
pub mod level;
pub mod obstacle;
pub mod spawner;
pub mod state;
pub mod tick;

pub use actor::{Actor, AnimationPhase};
pub use error::SimError;
pub use geometry::{Hitbox, overlaps};
pub use level::Level;
pub use obstacle::{Obstacle, ObstacleSet, ObstacleTemplate};
pub use spawner::{RandomSource, try_spawn};
pub use state::{SimPhase, Simulation};
pub use tick::{InputAction, TickResult};
