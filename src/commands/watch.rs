use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{bail, Context, Result};
use depwatch::application::watch::{Entrypoint, EventSink, LoopExit, WatchEvent};
use depwatch::config::Config;
use depwatch::domain::ports::RunRequest;
use depwatch::domain::value_objects::{CancelToken, Device};
use depwatch::presentation::{factory, ColorWhen};

use crate::ui::context::UiContext;
use crate::ui::output::print_config_warnings;
use crate::ui::views::watch::{is_detail, render_watch_event, render_watch_header};

/// Flags of `depwatch watch` that override the `[runner]` config section
#[derive(Debug, Default)]
pub struct RunFlags {
    pub device: Option<String>,
    pub assets: Option<PathBuf>,
    pub optimization_level: Option<u8>,
}

pub fn cmd_watch(
    file: &Path,
    flags: RunFlags,
    config_path: Option<&Path>,
    json: bool,
    verbose: u8,
    color: Option<ColorWhen>,
) -> Result<()> {
    let cwd = std::env::current_dir().context("can't determine working directory")?;
    let (config, warnings) = Config::discover(config_path, &cwd)?;
    print_config_warnings(&warnings);
    let ui = UiContext::new(json, verbose, color, &config);

    let entrypoint = Entrypoint::resolve(file)?;
    let request = run_request(&entrypoint, flags, &config);

    if !json {
        print!(
            "{}",
            render_watch_header(
                &entrypoint.path().display().to_string(),
                &request.device.to_string(),
                ui.color,
                ui.unicode
            )
        );
    }

    let session = factory::create_watch_use_case(&config, &entrypoint, request, event_sink(ui))?;

    // Set up Ctrl+C handler
    let root = CancelToken::new();
    let interrupt = root.clone();
    ctrlc::set_handler(move || interrupt.cancel()).context("failed to set Ctrl+C handler")?;

    match session.use_case.start(session.signals, root) {
        LoopExit::Cancelled => Ok(()),
        LoopExit::ChannelClosed => bail!("file watcher stopped unexpectedly"),
    }
}

/// CLI flags first, then config
fn run_request(entrypoint: &Entrypoint, flags: RunFlags, config: &Config) -> RunRequest {
    let device = flags.device.or_else(|| config.runner.device.clone());
    RunRequest::new(entrypoint.path().to_path_buf())
        .with_device(Device::from_selection(device.as_deref()))
        .with_assets(flags.assets.or_else(|| config.runner.assets.clone()))
        .with_optimization_level(flags.optimization_level.or(config.runner.optimization_level))
}

fn event_sink(ui: UiContext) -> EventSink {
    Arc::new(move |event: WatchEvent| {
        if ui.json {
            println!("{}", event.to_json());
            return;
        }
        if is_detail(&event) && ui.verbose == 0 {
            return;
        }

        let timestamp = chrono::Local::now().format("%H:%M:%S").to_string();
        let rendered = render_watch_event(&timestamp, &event, ui.color, ui.unicode);
        if event.is_error() {
            eprint!("{rendered}");
        } else {
            print!("{rendered}");
        }
    })
}
