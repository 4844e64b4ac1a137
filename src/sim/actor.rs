//! The player's dinosaur

use serde::{Deserialize, Serialize};

use super::geometry::Hitbox;
use super::level::Level;
use crate::consts::*;

/// Which of the two run-cycle frames is showing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum AnimationPhase {
    #[default]
    A,
    B,
}

impl AnimationPhase {
    pub fn toggled(self) -> Self {
        match self {
            AnimationPhase::A => AnimationPhase::B,
            AnimationPhase::B => AnimationPhase::A,
        }
    }
}

const FRAME_A: [&str; ACTOR_HEIGHT as usize] = [
    "    :+++-",
    "    -*=. ",
    " --=**:  ",
    "  -+-.   ",
];

const FRAME_B: [&str; ACTOR_HEIGHT as usize] = [
    "    :+++-",
    "    -*=. ",
    " --=**:  ",
    "  .+--   ",
];

/// The player entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Actor {
    pub hitbox: Hitbox,
    /// Cells per tick, positive = rising
    pub vertical_velocity: f32,
    /// Velocity a jump sets
    pub max_upward_velocity: f32,
    /// `hitbox.top` while standing
    pub ground_row: i32,
    pub phase: AnimationPhase,
}

impl Actor {
    /// Create an actor standing on `ground_row` at the default column
    pub fn new(ground_row: i32) -> Self {
        Self {
            hitbox: Hitbox::new(ACTOR_HEIGHT, ACTOR_WIDTH, ground_row, ACTOR_LEFT),
            vertical_velocity: 0.0,
            max_upward_velocity: ACTOR_MAX_UPWARD_VELOCITY,
            ground_row,
            phase: AnimationPhase::A,
        }
    }

    pub fn is_grounded(&self) -> bool {
        self.hitbox.top == self.ground_row && self.vertical_velocity == 0.0
    }

    /// Launch upward.
    ///
    /// There is no grounded check: calling this mid-air restarts the arc.
    /// Callers that want single jumps filter with [`Actor::is_grounded`].
    pub fn jump(&mut self) {
        self.vertical_velocity = self.max_upward_velocity;
    }

    /// Advance vertical motion by one tick
    pub fn integrate_physics(&mut self, level: &Level) {
        self.phase = self.phase.toggled();

        // Both branches round toward zero
        let displacement = if self.vertical_velocity > 0.0 {
            self.vertical_velocity.floor()
        } else {
            self.vertical_velocity.ceil()
        } as i32;
        self.hitbox.top -= displacement;

        if self.hitbox.top > self.ground_row {
            self.hitbox.top = self.ground_row;
        }

        // Landing kills any residual velocity outright
        if self.hitbox.top != self.ground_row {
            self.vertical_velocity += level.gravity;
        } else {
            self.vertical_velocity = 0.0;
        }
    }

    /// Glyph rows for the current animation phase, top to bottom
    pub fn current_frame(&self) -> &'static [&'static str] {
        match self.phase {
            AnimationPhase::A => &FRAME_A,
            AnimationPhase::B => &FRAME_B,
        }
    }
}
