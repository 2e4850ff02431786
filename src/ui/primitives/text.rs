use crossterm::style::Stylize;

use crate::ui::theme::colors;

/// Secondary text: timestamps, directories.
pub fn dim(text: &str, supports_color: bool) -> String {
    if supports_color {
        text.with(colors::DIM).to_string()
    } else {
        text.to_string()
    }
}

/// Bold info-colored text for command titles.
pub fn title(text: &str, supports_color: bool) -> String {
    if supports_color {
        text.with(colors::INFO).bold().to_string()
    } else {
        text.to_string()
    }
}
