//! Per-frame simulation tick
//!
//! Core game loop step that advances the simulation deterministically.

use super::geometry::overlaps;
use super::spawner::{RandomSource, try_spawn};
use super::state::{SimPhase, Simulation};

/// Input commands for a single tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputAction {
    Jump,
    /// Ignored by the simulation; the caller ends the session
    Quit,
}

/// Outcome of one tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickResult {
    Continue,
    Collided,
}

impl<R: RandomSource> Simulation<R> {
    /// Advance the simulation by one tick.
    ///
    /// Once a collision has happened every call returns `Collided` without
    /// touching state, until [`Simulation::reset`].
    pub fn step(&mut self, input: Option<InputAction>) -> TickResult {
        if self.phase == SimPhase::Ended {
            return TickResult::Collided;
        }

        if input == Some(InputAction::Jump) {
            self.actor.jump();
        }

        self.actor.integrate_physics(&self.level);

        if let Some(gone) = self.obstacles.scroll_and_prune(&self.level) {
            self.cleared += 1;
            log::debug!("Obstacle cleared at column {}", gone.hitbox.left);
        }

        // Checked after scrolling so an obstacle moving into the actor this
        // tick is caught
        let actor_box = self.actor.hitbox;
        if self
            .obstacles
            .iter()
            .any(|obstacle| overlaps(&actor_box, &obstacle.hitbox))
        {
            self.phase = SimPhase::Ended;
            log::info!(
                "Collision after {} ticks, score {}",
                self.ticks,
                self.cleared
            );
            return TickResult::Collided;
        }

        let spawned = try_spawn(&self.obstacles, &self.level, &mut self.rng).and_then(
            |obstacle| match obstacle {
                Some(obstacle) => self.obstacles.append(obstacle),
                None => Ok(()),
            },
        );
        if let Err(err) = spawned {
            log::error!("Spawner produced an obstacle the set cannot take: {err}");
            panic!("obstacle spawn guard failed: {err}");
        }

        self.ticks += 1;
        TickResult::Continue
    }
}
