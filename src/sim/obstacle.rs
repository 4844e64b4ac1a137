//! Obstacles and the bounded queue that holds them

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use super::error::SimError;
use super::geometry::Hitbox;
use super::level::Level;

/// Rows in every obstacle template
pub const TEMPLATE_HEIGHT: usize = 4;

/// The fixed cactus shapes the spawner picks from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ObstacleTemplate {
    Narrow,
    Medium,
    WideCompound,
}

impl ObstacleTemplate {
    /// Indexed by the spawner's template draw
    pub const ALL: [ObstacleTemplate; 3] = [
        ObstacleTemplate::Medium,
        ObstacleTemplate::Narrow,
        ObstacleTemplate::WideCompound,
    ];

    /// Glyph rows, top to bottom
    pub fn rows(self) -> &'static [&'static str; TEMPLATE_HEIGHT] {
        match self {
            ObstacleTemplate::Narrow => &[
                "  %% .",
                "=:@@+#",
                " #@@= ",
                " .%%. ",
            ],
            ObstacleTemplate::Medium => &[
                "   -@% +-",
                "-% =@@*# ",
                "=@#%@@   ",
                "   +@@   ",
            ],
            ObstacleTemplate::WideCompound => &[
                "   -@% +-  %% .",
                "-% =@@*# =:@@+#",
                "=@#%@@    #@@= ",
                "   +@@    .%%. ",
            ],
        }
    }

    pub fn width(self) -> i32 {
        self.rows()[0].chars().count() as i32
    }

    pub fn height(self) -> i32 {
        TEMPLATE_HEIGHT as i32
    }

    pub fn widest() -> i32 {
        Self::ALL.iter().map(|t| t.width()).max().unwrap_or(0)
    }
}

/// A scrolling obstacle
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Obstacle {
    pub hitbox: Hitbox,
    /// One string per hitbox row
    pub glyph_rows: Vec<String>,
}

impl Obstacle {
    /// Build an obstacle from a template with its top-left corner at (`top`, `left`)
    pub fn from_template(
        template: ObstacleTemplate,
        top: i32,
        left: i32,
    ) -> Result<Self, SimError> {
        Self::from_rows(template.rows(), template.height(), top, left)
    }

    /// Build an obstacle from arbitrary glyph rows.
    ///
    /// Every row must be as wide as the first; the hitbox is sized from them.
    pub fn from_rows<S: AsRef<str>>(
        rows: &[S],
        height: i32,
        top: i32,
        left: i32,
    ) -> Result<Self, SimError> {
        if height <= 0 || rows.len() != height as usize {
            return Err(SimError::MalformedObstacle {
                rows: rows.len(),
                height,
            });
        }
        let expected = rows[0].as_ref().chars().count();
        for (row, text) in rows.iter().enumerate() {
            let width = text.as_ref().chars().count();
            if width != expected || width == 0 {
                return Err(SimError::RaggedObstacle {
                    row,
                    width,
                    expected,
                });
            }
        }

        Ok(Self {
            hitbox: Hitbox::new(height, expected as i32, top, left),
            glyph_rows: rows.iter().map(|row| row.as_ref().to_string()).collect(),
        })
    }
}

/// Active obstacles in arrival order.
///
/// The front is always the obstacle furthest left, since everything spawns at
/// the right edge and scrolls at the same speed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ObstacleSet {
    obstacles: VecDeque<Obstacle>,
    capacity: usize,
}

impl ObstacleSet {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            obstacles: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.obstacles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.obstacles.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.obstacles.len() >= self.capacity
    }

    /// Most advanced (leftmost) obstacle
    pub fn front(&self) -> Option<&Obstacle> {
        self.obstacles.front()
    }

    /// Most recently spawned (rightmost) obstacle
    pub fn back(&self) -> Option<&Obstacle> {
        self.obstacles.back()
    }

    /// Front to back
    pub fn iter(&self) -> impl Iterator<Item = &Obstacle> {
        self.obstacles.iter()
    }

    pub fn clear(&mut self) {
        self.obstacles.clear();
    }

    /// Add a newly spawned obstacle at the back
    pub fn append(&mut self, obstacle: Obstacle) -> Result<(), SimError> {
        if self.is_full() {
            return Err(SimError::CapacityExceeded {
                capacity: self.capacity,
            });
        }
        self.obstacles.push_back(obstacle);
        Ok(())
    }

    /// Scroll everything left, then drop the front obstacle once it reaches
    /// the left edge. Returns the removed obstacle, if any.
    pub fn scroll_and_prune(&mut self, level: &Level) -> Option<Obstacle> {
        for obstacle in &mut self.obstacles {
            obstacle.hitbox.left -= level.scroll_speed;
        }

        if self.obstacles.front()?.hitbox.left <= 0 {
            self.obstacles.pop_front()
        } else {
            None
        }
    }
}
