//! Property tests for dependency report parsing.

use proptest::prelude::*;

use depwatch::application::watch::parse_dependency_report;

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Parsing never panics and yields sorted, unique, existing paths.
    #[test]
    fn property_parse_never_panics(report in "(?s).{0,512}") {
        let paths = parse_dependency_report(&report);

        prop_assert!(paths.windows(2).all(|w| w[0] < w[1]));
        prop_assert!(paths.iter().all(|p| p.exists()));
    }

    /// PROPERTY: Decoration (whitespace, one trailing colon) doesn't change the result.
    #[test]
    fn property_decoration_is_ignored(
        picks in proptest::collection::vec((0usize..3, any::<bool>(), " {0,3}", " {0,3}"), 0..12)
    ) {
        let dir = tempfile::tempdir().unwrap();
        let files: Vec<_> = ["a.toit", "b.toit", "c.toit"]
            .iter()
            .map(|name| {
                let path = dir.path().join(name);
                std::fs::write(&path, "").unwrap();
                path
            })
            .collect();

        let mut plain = String::new();
        let mut decorated = String::new();
        for (index, colon, lead, trail) in &picks {
            let path = files[*index].display().to_string();
            plain.push_str(&format!("{}\n", path));
            let suffix = if *colon { ":" } else { "" };
            decorated.push_str(&format!("{}{}{}{}\n", lead, path, suffix, trail));
        }

        prop_assert_eq!(
            parse_dependency_report(&plain),
            parse_dependency_report(&decorated)
        );
    }
}
