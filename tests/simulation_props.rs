use dino_run::sim::{Hitbox, InputAction, Level, Simulation, TickResult, overlaps};
use proptest::prelude::*;

fn inputs(jumps: &[bool]) -> impl Iterator<Item = Option<InputAction>> + '_ {
    jumps.iter().map(|&j| j.then_some(InputAction::Jump))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn actor_never_sinks_and_lands_still(
        seed in any::<u64>(),
        number in 1u32..4,
        width in 110i32..200,
        jumps in proptest::collection::vec(prop::bool::weighted(0.1), 1..600),
    ) {
        let level = Level::new(number, width).unwrap();
        let mut sim = Simulation::with_seed(level, seed);

        for input in inputs(&jumps) {
            sim.step(input);
            let actor = sim.actor();
            prop_assert!(actor.hitbox.top <= actor.ground_row);
            if actor.hitbox.top == actor.ground_row {
                prop_assert_eq!(actor.vertical_velocity, 0.0);
            }
        }
    }

    #[test]
    fn obstacles_bounded_ordered_and_pruned_from_front(
        seed in any::<u64>(),
        number in 1u32..4,
        width in 110i32..200,
        jumps in proptest::collection::vec(prop::bool::weighted(0.1), 1..600),
    ) {
        let level = Level::new(number, width).unwrap();
        let speed = level.scroll_speed;
        let max = level.max_obstacles;
        let mut sim = Simulation::with_seed(level, seed);

        for input in inputs(&jumps) {
            let was_ended = sim.is_ended();
            let before: Vec<i32> = sim.obstacles().map(|o| o.hitbox.left).collect();
            let result = sim.step(input);
            let after: Vec<i32> = sim.obstacles().map(|o| o.hitbox.left).collect();

            prop_assert!(after.len() <= max);
            prop_assert!(after.windows(2).all(|w| w[0] < w[1]));

            if was_ended {
                prop_assert_eq!(result, TickResult::Collided);
                prop_assert_eq!(&after, &before);
                continue;
            }

            let mut scrolled: Vec<i32> = before.iter().map(|l| l - speed).collect();
            if scrolled.first().is_some_and(|&l| l <= 0) {
                scrolled.remove(0);
            }
            // Survivors keep their order; at most one fresh spawn at the back
            prop_assert!(after.len() == scrolled.len() || after.len() == scrolled.len() + 1);
            prop_assert_eq!(&after[..scrolled.len()], &scrolled[..]);
            if result == TickResult::Collided {
                prop_assert_eq!(after.len(), scrolled.len());
            }
        }
    }

    #[test]
    fn grazing_the_top_row_never_collides(
        height in 1i32..8,
        width in 1i32..16,
        other_height in 1i32..8,
        other_width in 1i32..16,
        top in -20i32..20,
        left in -20i32..20,
        dx in -10i32..10,
    ) {
        let obstacle = Hitbox::new(other_height, other_width, top, left + dx);
        let grazing = Hitbox::new(height, width, top - height, left);
        prop_assert!(!overlaps(&grazing, &obstacle));

        let sunk = Hitbox::new(height, width, top - height + 1, left);
        let horizontal = sunk.right() >= obstacle.left && sunk.left < obstacle.right();
        prop_assert_eq!(overlaps(&sunk, &obstacle), horizontal);
    }
}
