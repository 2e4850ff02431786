use depwatch::config::ConfigWarning;

pub fn print_config_warnings(warnings: &[ConfigWarning]) {
    for w in warnings {
        if let Some(line) = w.line {
            eprintln!("⚠ Unknown config key '{}' in {}:{}", w.key, w.file.display(), line);
        } else {
            eprintln!("⚠ Unknown config key '{}' in {}", w.key, w.file.display());
        }

        if let Some(suggestion) = &w.suggestion {
            eprintln!("   Did you mean '{}'?\n", suggestion);
        }
    }
}
