//! Braille loading spinner.

use ratatui::{style::Style, text::Span};

/// Animation frames, advanced once per UI tick.
pub const SPINNER_FRAMES: [char; 10] = ['⠋', '⠙', '⠹', '⠸', '⠼', '⠴', '⠦', '⠧', '⠇', '⠏'];

/// A loading spinner that is `size` glyph cells wide.
///
/// Each cell runs one frame ahead of the previous one, so wider spinners
/// read as a moving wave.
#[derive(Debug, Clone, Copy)]
pub struct Spinner {
    tick: u64,
    size: u16,
}

impl Spinner {
    #[must_use]
    pub const fn new(tick: u64, size: u16) -> Self {
        Self { tick, size }
    }

    /// Frame for cell `offset` at the current tick.
    #[must_use]
    pub fn frame(&self, offset: u16) -> char {
        let len = SPINNER_FRAMES.len() as u64;
        let index = self.tick.wrapping_add(u64::from(offset)) % len;
        SPINNER_FRAMES[index as usize]
    }

    /// The spinner as a single styled span. A zero size still shows one cell.
    #[must_use]
    pub fn to_span(&self, style: Style) -> Span<'static> {
        let glyphs: String = (0..self.size.max(1)).map(|i| self.frame(i)).collect();
        Span::styled(glyphs, style)
    }
}
