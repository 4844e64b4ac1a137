use thiserror::Error;

/// Contract violations inside the simulation core.
///
/// Collisions are not errors; they come back as [`super::TickResult::Collided`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SimError {
    #[error("obstacle set is full (capacity {capacity})")]
    CapacityExceeded { capacity: usize },

    #[error("obstacle has {rows} glyph rows but a hitbox height of {height}")]
    MalformedObstacle { rows: usize, height: i32 },

    #[error("obstacle glyph row {row} is {width} cells wide, expected {expected}")]
    RaggedObstacle {
        row: usize,
        width: usize,
        expected: usize,
    },

    #[error("invalid level: {0}")]
    InvalidLevel(&'static str),
}
