use std::path::Path;

use crate::ui::blocks::header::CommandHeader;
use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text;
use depwatch::application::DepsResult;

pub fn render_deps(
    entrypoint: &Path,
    result: &DepsResult,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let mut out = CommandHeader::new(Icon::Deps, "depwatch deps")
        .row("Entrypoint", entrypoint.display().to_string())
        .render(supports_color, supports_unicode);

    out.push_str(&format!("\nFiles ({}):\n", result.paths.len()));
    for path in &result.paths {
        out.push_str(&format!("  {}\n", path.display()));
    }

    out.push_str(&format!("\nDirectories ({}):\n", result.directories.len()));
    if result.fell_back {
        out.push_str(&format!(
            "  {} no dependencies reported, watching the entrypoint directory\n",
            Icon::Warning.colored(supports_color, supports_unicode)
        ));
    }
    for dir in &result.directories {
        out.push_str(&format!(
            "  {}\n",
            text::dim(&dir.display().to_string(), supports_color)
        ));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn lists_files_then_directories() {
        let result = DepsResult {
            paths: vec![PathBuf::from("/p/main.toit"), PathBuf::from("/p/lib/a.toit")],
            directories: vec![PathBuf::from("/p"), PathBuf::from("/p/lib")],
            fell_back: false,
        };
        let rendered = render_deps(Path::new("main.toit"), &result, false, false);
        insta::assert_snapshot!(rendered.trim_end(), @r"
        [DEPS] depwatch deps
        Entrypoint: main.toit

        Files (2):
          /p/main.toit
          /p/lib/a.toit

        Directories (2):
          /p
          /p/lib
        ");
    }

    #[test]
    fn notes_fallback_directory() {
        let result = DepsResult {
            paths: vec![],
            directories: vec![PathBuf::from("/p")],
            fell_back: true,
        };
        let rendered = render_deps(Path::new("main.toit"), &result, false, false);
        assert!(rendered.contains("Files (0):"));
        assert!(rendered.contains("[WARN] no dependencies reported, watching the entrypoint directory"));
    }
}
