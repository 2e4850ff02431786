use is_terminal::IsTerminal;

/// Environment variables set by common CI providers.
const CI_MARKERS: &[&str] = &["CI", "GITHUB_ACTIONS", "GITLAB_CI", "BUILDKITE", "JENKINS_HOME"];

/// What stdout can display
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TerminalCapabilities {
    pub supports_color: bool,
    pub supports_unicode: bool,
    pub is_ci: bool,
}

impl TerminalCapabilities {
    pub fn detect() -> Self {
        Self::from_env(|key| std::env::var(key).ok(), std::io::stdout().is_terminal())
    }

    fn from_env(var: impl Fn(&str) -> Option<String>, stdout_is_tty: bool) -> Self {
        let dumb = var("TERM").is_some_and(|term| term.eq_ignore_ascii_case("dumb"));

        Self {
            supports_color: stdout_is_tty && !dumb && var("NO_COLOR").is_none(),
            supports_unicode: !dumb && utf8_locale(&var),
            is_ci: CI_MARKERS.iter().any(|key| var(key).is_some()),
        }
    }
}

/// The first non-empty locale variable decides; none set means UTF-8.
fn utf8_locale(var: &impl Fn(&str) -> Option<String>) -> bool {
    match ["LC_ALL", "LC_CTYPE", "LANG"]
        .iter()
        .find_map(|key| var(key).filter(|v| !v.is_empty()))
    {
        Some(locale) => {
            let locale = locale.to_ascii_lowercase();
            locale.contains("utf-8") || locale.contains("utf8")
        }
        None => true,
    }
}
