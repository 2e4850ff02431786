use crossterm::style::Color;

/// Palette shared by every rendered line.
///
/// Anything printed by the binary takes its color from `colors` and its
/// symbol from one of the `Glyph` constants below.
pub mod colors {
    use super::Color;

    pub const SUCCESS: Color = Color::Green;
    pub const ERROR: Color = Color::Red;
    pub const WARNING: Color = Color::Yellow;
    pub const INFO: Color = Color::Cyan;
    pub const DIM: Color = Color::DarkGrey;
}

/// A symbol with a fallback for terminals that can't show unicode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Glyph {
    pub unicode: &'static str,
    pub ascii: &'static str,
}

impl Glyph {
    pub const fn pick(&self, unicode: bool) -> &'static str {
        if unicode {
            self.unicode
        } else {
            self.ascii
        }
    }
}

pub const SUCCESS: Glyph = Glyph { unicode: "✓", ascii: "[OK]" };
pub const ERROR: Glyph = Glyph { unicode: "✗", ascii: "[FAIL]" };
pub const WARNING: Glyph = Glyph { unicode: "⚠", ascii: "[WARN]" };
/// A generation is analyzing and running.
pub const BUSY: Glyph = Glyph { unicode: "●", ascii: "[..]" };
/// A run was abandoned by a newer generation.
pub const ABANDONED: Glyph = Glyph { unicode: "○", ascii: "[ ]" };
/// A relevant file changed.
pub const CHANGE: Glyph = Glyph { unicode: "↳", ascii: "[>]" };

// Command identifiers (used in headers).
pub const WATCH: Glyph = Glyph { unicode: "⟳", ascii: "[~]" };
pub const DEPS: Glyph = Glyph { unicode: "🔍", ascii: "[DEPS]" };
