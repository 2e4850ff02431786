use crate::ui::blocks::header::CommandHeader;
use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text;
use depwatch::application::watch::WatchEvent;

pub fn render_watch_header(
    entrypoint: &str,
    device: &str,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    CommandHeader::new(Icon::Watch, "depwatch watch")
        .row("Entrypoint", entrypoint)
        .row("Device", device)
        .row("Hint", "Press Ctrl+C to stop")
        .render(supports_color, supports_unicode)
}

/// Events only shown with `-v`
pub fn is_detail(event: &WatchEvent) -> bool {
    matches!(
        event,
        WatchEvent::GenerationStarted { .. } | WatchEvent::DependenciesUpdated { .. }
    )
}

pub fn render_watch_event(
    timestamp: &str,
    event: &WatchEvent,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let prefix = text::dim(&format!("[{}]", timestamp), supports_color);
    let icon = |icon: Icon| icon.colored(supports_color, supports_unicode);

    match event {
        WatchEvent::WatchStarted { entrypoint, .. } => {
            format!("{} {} Watching: {}\n", prefix, icon(Icon::Watch), entrypoint)
        }
        WatchEvent::FileModified { path } => {
            format!("{} {} File modified '{}'\n", prefix, icon(Icon::Change), path)
        }
        WatchEvent::GenerationStarted { generation } => format!(
            "{} {} Generation {}: analyzing and running\n",
            prefix,
            icon(Icon::Busy),
            generation
        ),
        WatchEvent::DependenciesUpdated {
            paths, directories, ..
        } => format!(
            "{} {} Tracking {} {} in {} {}\n",
            prefix,
            icon(Icon::Success),
            paths,
            plural(*paths, "file", "files"),
            directories,
            plural(*directories, "directory", "directories"),
        ),
        WatchEvent::AnalysisFailed {
            message,
            kept_previous,
            ..
        } => {
            let fallback = if *kept_previous {
                "keeping previous dependencies"
            } else {
                "watching the entrypoint directory"
            };
            format!(
                "{} {} Analysis failed: {} ({})\n",
                prefix,
                icon(Icon::Warning),
                message,
                fallback
            )
        }
        WatchEvent::RunFinished { .. } => {
            format!("{} {} Run finished\n", prefix, icon(Icon::Success))
        }
        WatchEvent::RunFailed { message, .. } => {
            format!("{} {} Run failed: {}\n", prefix, icon(Icon::Error), message)
        }
        WatchEvent::RunCancelled { .. } => {
            format!("{} {} Run cancelled\n", prefix, icon(Icon::Abandoned))
        }
        WatchEvent::Error { message } => {
            format!("{} {} Error: {}\n", prefix, icon(Icon::Error), message)
        }
        WatchEvent::Shutdown => format!("\n{} {} Watch stopped.\n", prefix, icon(Icon::Watch)),
    }
}

fn plural(n: usize, one: &'static str, many: &'static str) -> &'static str {
    if n == 1 {
        one
    } else {
        many
    }
}
