//! Per-session level parameters

use serde::{Deserialize, Serialize};

use super::error::SimError;
use super::obstacle::ObstacleTemplate;
use crate::consts::*;

/// Spawn spacing, physics and scroll parameters for one play session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Level {
    pub number: u32,
    /// Obstacle set capacity
    pub max_obstacles: usize,
    /// The newest obstacle must be at least this far from the right edge
    /// before another can spawn
    pub min_obstacle_distance: i32,
    /// Past this distance from the right edge a spawn is only a dice roll away
    pub max_obstacle_distance: i32,
    /// Dice size for the spacing roll (higher = longer random gaps)
    pub spawn_variability: u32,
    /// Cells/tick², negative pulls the actor down
    pub gravity: f32,
    /// Columns every obstacle moves left per tick
    pub scroll_speed: i32,
    pub play_area_width: i32,
}

impl Level {
    /// Derive the standard parameters for level `number` on a play area
    /// `play_area_width` columns wide.
    pub fn new(number: u32, play_area_width: i32) -> Result<Self, SimError> {
        if number == 0 {
            return Err(SimError::InvalidLevel("level number starts at 1"));
        }
        // Capacity and scroll speed are both twice the level number
        let doubled = i32::try_from(number)
            .ok()
            .and_then(|n| n.checked_mul(2))
            .ok_or(SimError::InvalidLevel("level number too large"))?;
        let level = Self {
            number,
            max_obstacles: doubled as usize,
            min_obstacle_distance: play_area_width / doubled,
            max_obstacle_distance: play_area_width,
            spawn_variability: DEFAULT_SPAWN_VARIABILITY,
            gravity: DEFAULT_GRAVITY,
            scroll_speed: doubled,
            play_area_width,
        };
        level.validate()?;
        Ok(level)
    }

    /// Check the invariants the simulation relies on
    pub fn validate(&self) -> Result<(), SimError> {
        if self.max_obstacles == 0 {
            return Err(SimError::InvalidLevel("max_obstacles must be positive"));
        }
        if self.play_area_width <= 0 {
            return Err(SimError::InvalidLevel("play area width must be positive"));
        }
        if self.spawn_variability == 0 {
            return Err(SimError::InvalidLevel("spawn variability must be at least 1"));
        }
        if self.gravity.is_nan() || self.gravity >= 0.0 {
            return Err(SimError::InvalidLevel("gravity must be negative"));
        }
        if self.scroll_speed <= 0 {
            return Err(SimError::InvalidLevel("scroll speed must be positive"));
        }
        if self.min_obstacle_distance < 0 || self.max_obstacle_distance < self.min_obstacle_distance
        {
            return Err(SimError::InvalidLevel(
                "obstacle distances must satisfy 0 <= min <= max",
            ));
        }
        // Otherwise a fresh spawn could land left of the previous obstacle
        if self.min_obstacle_distance <= ObstacleTemplate::widest() + 1 {
            return Err(SimError::InvalidLevel(
                "play area too narrow for this level's obstacle spacing",
            ));
        }
        Ok(())
    }
}
