//! Obstacle spawning policy
//!
//! Two distance tiers keep spacing organic: an obstacle never spawns while the
//! newest one is still within `min_obstacle_distance` of the right edge, and
//! once the newest one is past `play_area_width - max_obstacle_distance` a
//! spawn only needs a lucky roll, so gaps are varied but bounded.

use rand::Rng;
use rand_pcg::Pcg32;

use super::error::SimError;
use super::level::Level;
use super::obstacle::{Obstacle, ObstacleSet, ObstacleTemplate};
use crate::consts::GROUND_ROW;

/// Uniform integer source injected into the simulation
pub trait RandomSource {
    /// Uniform draw in `[0, bound)`. `bound` is always at least 1.
    fn next(&mut self, bound: u32) -> u32;
}

impl RandomSource for Pcg32 {
    fn next(&mut self, bound: u32) -> u32 {
        self.random_range(0..bound)
    }
}

/// Decide whether an obstacle spawns this tick, and build it if so.
///
/// Errors only when the drawn template fails obstacle validation.
pub fn try_spawn<R: RandomSource + ?Sized>(
    set: &ObstacleSet,
    level: &Level,
    rng: &mut R,
) -> Result<Option<Obstacle>, SimError> {
    if set.len() >= level.max_obstacles {
        return Ok(None);
    }

    if let Some(newest) = set.back() {
        let left = newest.hitbox.left;
        if left > level.play_area_width - level.min_obstacle_distance {
            return Ok(None);
        }
        if left > level.play_area_width - level.max_obstacle_distance
            && rng.next(level.spawn_variability) > 0
        {
            return Ok(None);
        }
    }

    let template = ObstacleTemplate::ALL[rng.next(ObstacleTemplate::ALL.len() as u32) as usize];
    let left = level.play_area_width - (template.width() + 1);
    log::debug!("Spawning {:?} at column {}", template, left);
    Obstacle::from_template(template, GROUND_ROW, left).map(Some)
}

#[cfg(test)]
pub(crate) mod tests {
    use std::collections::VecDeque;

    use super::*;

    /// Replays scripted draws, then falls back to zero
    #[derive(Debug, Default)]
    pub(crate) struct ScriptedRng {
        pub draws: VecDeque<u32>,
        pub bounds: Vec<u32>,
    }

    impl ScriptedRng {
        pub(crate) fn new(draws: &[u32]) -> Self {
            Self {
                draws: draws.iter().copied().collect(),
                bounds: Vec::new(),
            }
        }
    }

    impl RandomSource for ScriptedRng {
        fn next(&mut self, bound: u32) -> u32 {
            self.bounds.push(bound);
            self.draws.pop_front().unwrap_or(0) % bound
        }
    }

    fn level() -> Level {
        Level::new(1, 120).unwrap()
    }

    fn narrow_at(left: i32) -> Obstacle {
        Obstacle::from_template(ObstacleTemplate::Narrow, GROUND_ROW, left).unwrap()
    }

    #[test]
    fn test_first_spawn_is_unconditional() {
        let level = level();
        let set = ObstacleSet::with_capacity(level.max_obstacles);
        let mut rng = ScriptedRng::new(&[2]);

        let obstacle = try_spawn(&set, &level, &mut rng).unwrap().unwrap();
        assert_eq!(obstacle.hitbox.width, 15);
        assert_eq!(obstacle.hitbox.left, 120 - 16);
        assert_eq!(obstacle.hitbox.top, GROUND_ROW);
        // Only the template draw happened
        assert_eq!(rng.bounds, vec![3]);
    }

    #[test]
    fn test_template_draw_mapping() {
        let level = level();
        let set = ObstacleSet::with_capacity(level.max_obstacles);
        let widths: Vec<i32> = (0..3)
            .map(|draw| {
                let mut rng = ScriptedRng::new(&[draw]);
                try_spawn(&set, &level, &mut rng).unwrap().unwrap().hitbox.width
            })
            .collect();
        assert_eq!(widths, vec![9, 6, 15]);
    }

    #[test]
    fn test_no_spawn_near_right_edge() {
        let level = level();
        let mut set = ObstacleSet::with_capacity(level.max_obstacles);
        // 120 - 60 = 60: anything right of column 60 is too close
        set.append(narrow_at(61)).unwrap();

        let mut rng = ScriptedRng::new(&[0, 0]);
        assert!(try_spawn(&set, &level, &mut rng).unwrap().is_none());
        assert!(rng.bounds.is_empty());
    }

    #[test]
    fn test_spacing_roll() {
        let level = level();
        let mut set = ObstacleSet::with_capacity(level.max_obstacles);
        set.append(narrow_at(60)).unwrap();

        // Non-zero roll: skip
        let mut rng = ScriptedRng::new(&[7]);
        assert!(try_spawn(&set, &level, &mut rng).unwrap().is_none());
        assert_eq!(rng.bounds, vec![10]);

        // Zero roll: spawn, then template draw
        let mut rng = ScriptedRng::new(&[0, 1]);
        let obstacle = try_spawn(&set, &level, &mut rng).unwrap().unwrap();
        assert_eq!(obstacle.hitbox.width, 6);
        assert_eq!(rng.bounds, vec![10, 3]);
    }

    #[test]
    fn test_spawn_guaranteed_past_max_distance() {
        let mut level = level();
        level.max_obstacle_distance = 100;
        let mut set = ObstacleSet::with_capacity(level.max_obstacles);
        // 120 - 100 = 20: at or left of column 20 no roll is needed
        set.append(narrow_at(20)).unwrap();

        let mut rng = ScriptedRng::new(&[1]);
        let obstacle = try_spawn(&set, &level, &mut rng).unwrap().unwrap();
        assert_eq!(obstacle.hitbox.width, 6);
        assert_eq!(rng.bounds, vec![3]);
    }

    #[test]
    fn test_no_spawn_at_capacity() {
        let level = level();
        let mut set = ObstacleSet::with_capacity(level.max_obstacles);
        set.append(narrow_at(5)).unwrap();
        set.append(narrow_at(10)).unwrap();

        let mut rng = ScriptedRng::new(&[0, 0]);
        assert!(try_spawn(&set, &level, &mut rng).unwrap().is_none());

        // The level's limit applies even to a roomier set
        let mut roomy = ObstacleSet::with_capacity(5);
        roomy.append(narrow_at(5)).unwrap();
        roomy.append(narrow_at(10)).unwrap();
        assert!(try_spawn(&roomy, &level, &mut rng).unwrap().is_none());
        assert!(rng.bounds.is_empty());
    }

    #[test]
    fn test_pcg_source_stays_in_bounds() {
        use rand::SeedableRng;

        let mut rng = Pcg32::seed_from_u64(7);
        for bound in 1..20 {
            for _ in 0..50 {
                assert!(rng.next(bound) < bound);
            }
        }
    }
}
