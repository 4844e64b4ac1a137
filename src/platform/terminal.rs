//! Terminal surface backed by crossterm
//!
//! Raw mode and the alternate screen are entered on construction and left on
//! drop, so a panic inside the game loop still restores the user's shell.

use std::io::{self, Stdout, Write};
use std::time::Duration;

use crossterm::event::{self, Event};
use crossterm::{cursor, execute, queue, style, terminal};

use super::input::{InputSource, KeyAction, KeyMap, merge};
use crate::consts::PLAY_AREA_TOP;
use crate::render::RenderTarget;

pub struct Terminal {
    out: Stdout,
    keys: KeyMap,
    cols: u16,
    rows: u16,
}

impl Terminal {
    pub fn new(keys: KeyMap) -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        let mut out = io::stdout();
        execute!(
            out,
            terminal::EnterAlternateScreen,
            cursor::Hide,
            terminal::DisableLineWrap,
        )?;
        let (cols, rows) = terminal::size()?;
        log::info!("Terminal is {cols}x{rows}");
        Ok(Self {
            out,
            keys,
            cols,
            rows,
        })
    }

    /// Width in columns
    pub fn width(&self) -> u16 {
        self.cols
    }
}

impl RenderTarget for Terminal {
    fn clear(&mut self) -> io::Result<()> {
        queue!(self.out, terminal::Clear(terminal::ClearType::All))
    }

    fn draw_str(&mut self, row: i32, col: i32, text: &str) -> io::Result<()> {
        if let Some((row, col, visible)) = clip(self.cols, self.rows, row, col, text) {
            queue!(self.out, cursor::MoveTo(col, row), style::Print(visible))?;
        }
        Ok(())
    }

    fn present(&mut self) -> io::Result<()> {
        self.out.flush()
    }
}

impl InputSource for Terminal {
    fn poll(&mut self) -> io::Result<Option<KeyAction>> {
        let mut action = None;
        while event::poll(Duration::ZERO)? {
            match event::read()? {
                Event::Key(key) => {
                    if let Some(next) = self.keys.translate(&key) {
                        action = merge(action, next);
                    }
                }
                Event::Resize(cols, rows) => {
                    log::debug!("Terminal resized to {cols}x{rows}");
                    self.cols = cols;
                    self.rows = rows;
                }
                _ => {}
            }
        }
        Ok(action)
    }

    fn wait(&mut self) -> io::Result<KeyAction> {
        loop {
            if let Event::Key(key) = event::read()? {
                if let Some(action) = self.keys.translate(&key) {
                    return Ok(action);
                }
            }
        }
    }
}

/// Map a play-area position to the screen and cut `text` to what fits
fn clip(cols: u16, rows: u16, row: i32, col: i32, text: &str) -> Option<(u16, u16, &str)> {
    let screen_row = row + i32::from(PLAY_AREA_TOP);
    if row < 0 || screen_row >= i32::from(rows) || col >= i32::from(cols) {
        return None;
    }

    // Drop leading cells left of the screen, and trailing ones right of it
    let skip = (-col).max(0) as usize;
    let start = col.max(0);
    let room = (i32::from(cols) - start) as usize;
    let begin = text.char_indices().nth(skip).map(|(i, _)| i)?;
    let visible = &text[begin..];
    let end = visible
        .char_indices()
        .nth(room)
        .map(|(i, _)| i)
        .unwrap_or(visible.len());
    Some((screen_row as u16, start as u16, &visible[..end]))
}

impl Drop for Terminal {
    fn drop(&mut self) {
        let _ = execute!(
            self.out,
            terminal::LeaveAlternateScreen,
            cursor::Show,
            terminal::EnableLineWrap,
        );
        let _ = terminal::disable_raw_mode();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clip_offsets_rows() {
        assert_eq!(clip(80, 30, 0, 3, "abc"), Some((PLAY_AREA_TOP, 3, "abc")));
        assert_eq!(clip(80, 30, -1, 3, "abc"), None);
        assert_eq!(clip(80, 30, 25, 3, "abc"), None);
    }

    #[test]
    fn test_clip_cuts_at_edges() {
        assert_eq!(clip(10, 30, 1, -2, "abcdef"), Some((PLAY_AREA_TOP + 1, 0, "cdef")));
        assert_eq!(clip(10, 30, 1, 7, "abcdef"), Some((PLAY_AREA_TOP + 1, 7, "abc")));
        assert_eq!(clip(10, 30, 1, -6, "abcdef"), None);
        assert_eq!(clip(10, 30, 1, 10, "abcdef"), None);
    }
}
