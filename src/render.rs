//! Frame composition
//!
//! Draws a simulation snapshot onto any [`RenderTarget`]. Coordinates are
//! play-area cells; the target decides where the play area sits on screen.

use std::io;

use crate::consts::PLAY_AREA_HEIGHT;
use crate::sim::{RandomSource, Simulation};

/// Glyph used for the ground line
pub const GROUND_GLYPH: char = '~';

/// A surface that accepts text at (row, column) and shows it on `present`
pub trait RenderTarget {
    /// Erase the previous frame
    fn clear(&mut self) -> io::Result<()>;
    /// Draw `text` starting at (`row`, `col`). Off-surface cells are dropped.
    fn draw_str(&mut self, row: i32, col: i32, text: &str) -> io::Result<()>;
    /// Show everything drawn since the last `clear`
    fn present(&mut self) -> io::Result<()>;
}

/// Draw one frame: ground, actor, obstacles and the HUD line
pub fn draw_frame<R, T>(sim: &Simulation<R>, best: Option<u64>, target: &mut T) -> io::Result<()>
where
    R: RandomSource,
    T: RenderTarget + ?Sized,
{
    target.clear()?;

    let width = sim.level().play_area_width.max(0) as usize;
    let ground: String = std::iter::repeat_n(GROUND_GLYPH, width).collect();
    target.draw_str(PLAY_AREA_HEIGHT - 1, 0, &ground)?;

    let actor = sim.actor();
    for (i, row) in actor.current_frame().iter().enumerate() {
        target.draw_str(actor.hitbox.top + i as i32, actor.hitbox.left, row)?;
    }

    for obstacle in sim.obstacles() {
        for (i, row) in obstacle.glyph_rows.iter().enumerate() {
            target.draw_str(obstacle.hitbox.top + i as i32, obstacle.hitbox.left, row)?;
        }
    }

    target.draw_str(0, 0, &hud_line(sim.level().number, sim.score(), best))?;

    target.present()
}

/// Overlay shown once the actor has hit something
pub fn draw_game_over<T: RenderTarget + ?Sized>(
    target: &mut T,
    score: u64,
    rank: Option<usize>,
) -> io::Result<()> {
    let row = PLAY_AREA_HEIGHT / 2 - 3;
    target.draw_str(row, 2, "GAME OVER")?;
    target.draw_str(row + 1, 2, &format!("Score: {score}"))?;
    if let Some(rank) = rank {
        target.draw_str(row + 2, 2, &format!("New high score! Rank #{rank}"))?;
    }
    target.draw_str(row + 3, 2, "Press r to restart, any other key to quit")?;
    target.present()
}

fn hud_line(level: u32, score: u64, best: Option<u64>) -> String {
    match best {
        Some(best) => format!("Level {level}  Score {score}  Best {best}"),
        None => format!("Level {level}  Score {score}"),
    }
}
