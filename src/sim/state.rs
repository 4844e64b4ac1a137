//! Simulation state and lifecycle
//!
//! Everything a frame needs lives in one `Simulation` value owned by the
//! caller. There is no process-wide state.

use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::actor::Actor;
use super::level::Level;
use super::obstacle::{Obstacle, ObstacleSet};
use super::spawner::RandomSource;
use crate::consts::GROUND_ROW;

/// Run state. `Ended` is terminal until [`Simulation::reset`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SimPhase {
    Running,
    Ended,
}

/// One play session
#[derive(Debug, Clone)]
pub struct Simulation<R: RandomSource = Pcg32> {
    pub(super) level: Level,
    pub(super) actor: Actor,
    pub(super) obstacles: ObstacleSet,
    pub(super) rng: R,
    pub(super) phase: SimPhase,
    /// Ticks survived this run
    pub(super) ticks: u64,
    /// Obstacles that scrolled off the left edge this run
    pub(super) cleared: u64,
}

impl Simulation<Pcg32> {
    /// Seeded session using the default PCG generator
    pub fn with_seed(level: Level, seed: u64) -> Self {
        Self::new(level, Pcg32::seed_from_u64(seed))
    }
}

impl<R: RandomSource> Simulation<R> {
    /// Actor on the ground, no obstacles
    pub fn new(level: Level, rng: R) -> Self {
        log::info!(
            "Starting level {} ({} columns, up to {} obstacles)",
            level.number,
            level.play_area_width,
            level.max_obstacles
        );
        Self {
            actor: Actor::new(GROUND_ROW),
            obstacles: ObstacleSet::with_capacity(level.max_obstacles),
            level,
            rng,
            phase: SimPhase::Running,
            ticks: 0,
            cleared: 0,
        }
    }

    /// Start a fresh run on the same level. The RNG stream carries on.
    pub fn reset(&mut self) {
        log::info!("Resetting after {} ticks, score {}", self.ticks, self.cleared);
        self.actor = Actor::new(GROUND_ROW);
        self.obstacles.clear();
        self.phase = SimPhase::Running;
        self.ticks = 0;
        self.cleared = 0;
    }

    pub fn level(&self) -> &Level {
        &self.level
    }

    pub fn actor(&self) -> &Actor {
        &self.actor
    }

    /// Active obstacles, front (leftmost) to back
    pub fn obstacles(&self) -> impl Iterator<Item = &Obstacle> {
        self.obstacles.iter()
    }

    pub fn obstacle_count(&self) -> usize {
        self.obstacles.len()
    }

    pub fn phase(&self) -> SimPhase {
        self.phase
    }

    pub fn is_ended(&self) -> bool {
        self.phase == SimPhase::Ended
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Obstacles cleared this run
    pub fn score(&self) -> u64 {
        self.cleared
    }
}
