#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let report = String::from_utf8_lossy(data);
    let paths = depwatch::application::watch::parse_dependency_report(&report);
    assert!(paths.windows(2).all(|w| w[0] < w[1]));
});
