//! Key input mapping

use std::io;

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::settings::Settings;
use crate::sim::InputAction;

/// What a key press means to the game loop
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    Jump,
    Quit,
    Restart,
    /// Any other key; only meaningful while waiting on the game-over screen
    Other,
}

impl KeyAction {
    /// The simulation's view of this key, if it has one
    pub fn as_input(self) -> Option<InputAction> {
        match self {
            KeyAction::Jump => Some(InputAction::Jump),
            KeyAction::Quit => Some(InputAction::Quit),
            KeyAction::Restart | KeyAction::Other => None,
        }
    }
}

/// Source of key actions, polled once per frame
pub trait InputSource {
    /// Non-blocking: the most relevant key pressed since the last poll
    fn poll(&mut self) -> io::Result<Option<KeyAction>>;
    /// Block until a key is pressed
    fn wait(&mut self) -> io::Result<KeyAction>;
}

/// Translates terminal key events using the configured jump keys
#[derive(Debug, Clone)]
pub struct KeyMap {
    jump_keys: Vec<char>,
}

impl KeyMap {
    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            jump_keys: settings.jump_keys.clone(),
        }
    }

    /// `None` for key releases and repeats the game doesn't care about
    pub fn translate(&self, event: &KeyEvent) -> Option<KeyAction> {
        if event.kind == KeyEventKind::Release {
            return None;
        }

        let ctrl = event.modifiers.contains(KeyModifiers::CONTROL);
        let action = match event.code {
            KeyCode::Char('z') | KeyCode::Char('c') if ctrl => KeyAction::Quit,
            KeyCode::Char('q') | KeyCode::Esc => KeyAction::Quit,
            KeyCode::Up => KeyAction::Jump,
            KeyCode::Char(c) if self.jump_keys.contains(&c) => KeyAction::Jump,
            KeyCode::Char('r') => KeyAction::Restart,
            _ => KeyAction::Other,
        };
        Some(action)
    }
}

/// Several keys may arrive within one frame; quitting wins, then jumping
pub fn merge(current: Option<KeyAction>, next: KeyAction) -> Option<KeyAction> {
    let priority = |action: KeyAction| match action {
        KeyAction::Quit => 3,
        KeyAction::Jump => 2,
        KeyAction::Restart => 1,
        KeyAction::Other => 0,
    };
    match current {
        Some(existing) if priority(existing) >= priority(next) => Some(existing),
        _ => Some(next),
    }
}
