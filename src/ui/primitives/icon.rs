use crossterm::style::{Color, Stylize};

use crate::ui::theme::{self, Glyph};

/// Status markers used at the start of rendered lines
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    Success,
    Error,
    Warning,
    Busy,
    Abandoned,
    Change,
    Watch,
    Deps,
}

impl Icon {
    fn glyph(self) -> (Glyph, Color) {
        use theme::colors;
        match self {
            Icon::Success => (theme::SUCCESS, colors::SUCCESS),
            Icon::Error => (theme::ERROR, colors::ERROR),
            Icon::Warning => (theme::WARNING, colors::WARNING),
            Icon::Busy => (theme::BUSY, colors::WARNING),
            Icon::Abandoned => (theme::ABANDONED, colors::DIM),
            Icon::Change => (theme::CHANGE, colors::DIM),
            Icon::Watch => (theme::WATCH, colors::INFO),
            Icon::Deps => (theme::DEPS, colors::INFO),
        }
    }

    pub fn colored(self, supports_color: bool, supports_unicode: bool) -> String {
        let (glyph, color) = self.glyph();
        let symbol = glyph.pick(supports_unicode);
        if supports_color {
            symbol.with(color).to_string()
        } else {
            symbol.to_string()
        }
    }
}
