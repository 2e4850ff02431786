use std::path::Path;

use anyhow::{Context, Result};
use depwatch::application::watch::Entrypoint;
use depwatch::application::DepsUseCase;
use depwatch::config::Config;
use depwatch::presentation::{factory, ColorWhen};

use crate::ui::context::UiContext;
use crate::ui::output::print_config_warnings;
use crate::ui::views::deps::render_deps;

pub fn cmd_deps(
    file: &Path,
    config_path: Option<&Path>,
    json: bool,
    color: Option<ColorWhen>,
) -> Result<()> {
    let cwd = std::env::current_dir().context("can't determine working directory")?;
    let (config, warnings) = Config::discover(config_path, &cwd)?;
    print_config_warnings(&warnings);
    let ui = UiContext::new(json, 0, color, &config);

    let entrypoint = Entrypoint::resolve(file)?;
    let analyzer = factory::create_analyzer(&config);
    let result = DepsUseCase::new(&analyzer)
        .execute(entrypoint.path())
        .with_context(|| format!("can't analyze '{}'", entrypoint.path().display()))?;

    if json {
        let mut value = serde_json::to_value(&result)?;
        if let Some(obj) = value.as_object_mut() {
            obj.insert("command".to_string(), serde_json::json!("deps"));
            obj.insert(
                "entrypoint".to_string(),
                serde_json::json!(entrypoint.path().display().to_string()),
            );
        }
        println!("{}", serde_json::to_string(&value)?);
    } else {
        print!("{}", render_deps(entrypoint.path(), &result, ui.color, ui.unicode));
    }

    Ok(())
}
