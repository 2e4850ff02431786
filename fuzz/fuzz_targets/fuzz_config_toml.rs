#![no_main]

use std::path::Path;

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(content) = std::str::from_utf8(data) {
        // Config parsing and unknown-key collection should never panic
        let _ = toml::from_str::<depwatch::Config>(content);
        if let Ok((config, _warnings)) =
            depwatch::config::parse_with_warnings(content, Path::new("depwatch.toml"))
        {
            let _ = config.validate(Path::new("depwatch.toml"));
            let _ = config.runner_template().expand(&[("entrypoint", Some("main.toit".into()))]);
        }
    }
});
