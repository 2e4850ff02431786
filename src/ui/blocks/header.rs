use std::fmt::Write;

use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text;

/// Title line plus `Label: value` rows printed before a command's output
#[derive(Debug, Clone)]
pub struct CommandHeader {
    icon: Icon,
    title: &'static str,
    rows: Vec<(&'static str, String)>,
}

impl CommandHeader {
    pub fn new(icon: Icon, title: &'static str) -> Self {
        Self {
            icon,
            title,
            rows: Vec::new(),
        }
    }

    pub fn row(mut self, label: &'static str, value: impl Into<String>) -> Self {
        self.rows.push((label, value.into()));
        self
    }

    pub fn render(&self, supports_color: bool, supports_unicode: bool) -> String {
        let mut out = format!(
            "{} {}\n",
            self.icon.colored(supports_color, supports_unicode),
            text::title(self.title, supports_color)
        );
        for (label, value) in &self.rows {
            let _ = writeln!(out, "{}: {}", label, value);
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rows_follow_title_in_order() {
        let header = CommandHeader::new(Icon::Watch, "depwatch watch")
            .row("Entrypoint", "main.toit")
            .row("Device", "desk");

        assert_eq!(
            header.render(false, false),
            "[~] depwatch watch\nEntrypoint: main.toit\nDevice: desk\n"
        );
    }
}
