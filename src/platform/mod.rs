//! Platform abstraction layer
//!
//! Handles the outside world the simulation never sees:
//! - Key input
//! - The terminal surface

pub mod input;
pub mod terminal;

pub use input::{InputSource, KeyAction, KeyMap};
pub use terminal::Terminal;
