//! Environment variable validation
//!
//! A bad `DEPWATCH_*` value never aborts startup: the validator prints a
//! warning (with a typo suggestion when one is close) and keeps the value the
//! configuration already had.

use std::io::Write;

/// Validator for one environment variable
pub struct EnvVarValidator<'a> {
    var_name: &'a str,
    valid_values: &'a [&'a str],
}

impl<'a> EnvVarValidator<'a> {
    pub fn new(var_name: &'a str, valid_values: &'a [&'a str]) -> Self {
        Self {
            var_name,
            valid_values,
        }
    }

    /// Parse `value`, or warn on `writer` and return `fallback`
    pub fn parse_with_writer<T, F, W>(&self, value: &str, parser: F, fallback: T, writer: &mut W) -> T
    where
        F: Fn(&str) -> Option<T>,
        W: Write,
    {
        if let Some(parsed) = parser(value) {
            return parsed;
        }

        let _ = writeln!(
            writer,
            "Warning: Invalid {} value '{}'{}",
            self.var_name,
            value,
            self.suggest(value)
        );
        let _ = writeln!(writer, "Valid values: {}", self.valid_values.join(", "));
        fallback
    }

    fn suggest(&self, value: &str) -> String {
        let input = value.trim().to_lowercase();
        self.valid_values
            .iter()
            .map(|valid| (*valid, levenshtein(&input, valid)))
            .min_by_key(|(_, dist)| *dist)
            .filter(|(_, dist)| (1..=2).contains(dist))
            .map(|(valid, _)| format!(". Did you mean '{}'?", valid))
            .unwrap_or_default()
    }
}

/// Levenshtein distance for typo detection, shared with config key checks
pub fn levenshtein(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();

    if a.is_empty() {
        return b.len();
    }

    let mut prev: Vec<usize> = (0..=b.len()).collect();
    let mut curr = vec![0; b.len() + 1];

    for (i, ac) in a.iter().enumerate() {
        curr[0] = i + 1;
        for (j, bc) in b.iter().enumerate() {
            let cost = usize::from(ac != bc);
            curr[j + 1] = (prev[j + 1] + 1).min(curr[j] + 1).min(prev[j] + cost);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[b.len()]
}
