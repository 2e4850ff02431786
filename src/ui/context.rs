use crate::ui::terminal::TerminalCapabilities;
use depwatch::config::{ColorMode, Config};
use depwatch::presentation::ColorWhen;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UiContext {
    pub json: bool,
    pub verbose: u8,
    pub color: bool,
    pub unicode: bool,
}

impl UiContext {
    pub fn new(json: bool, verbose: u8, cli_color: Option<ColorWhen>, config: &Config) -> Self {
        Self::from_caps(json, verbose, cli_color, config, TerminalCapabilities::detect())
    }

    pub(crate) fn from_caps(
        json: bool,
        verbose: u8,
        cli_color: Option<ColorWhen>,
        config: &Config,
        caps: TerminalCapabilities,
    ) -> Self {
        let unicode = config.output.unicode && caps.supports_unicode;

        let mode = match cli_color {
            Some(when) => ColorMode::from(when),
            None => config.output.color,
        };
        let color = match mode {
            ColorMode::Never => false,
            ColorMode::Always => true,
            ColorMode::Auto => !json && caps.supports_color && !caps.is_ci,
        };

        Self {
            json,
            verbose,
            color,
            unicode,
        }
    }
}
