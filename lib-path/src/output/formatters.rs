//! Concrete output formatter implementations.

use std::collections::BTreeSet;

use super::OutputFormatter;
use crate::error::{Error, Result};

/// Formatter printing one path per line.
///
/// No trailing newline is added; an empty set renders as an empty string.
pub struct PlainFormatter;

impl OutputFormatter for PlainFormatter {
    fn format(&self, paths: &BTreeSet<String>) -> Result<String> {
        Ok(paths
            .iter()
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join("\n"))
    }
}

/// Formatter for JSON output.
pub struct JsonFormatter;

impl OutputFormatter for JsonFormatter {
    fn format(&self, paths: &BTreeSet<String>) -> Result<String> {
        serde_json::to_string_pretty(paths).map_err(|e| Error::Validation {
            field: "json_output".to_string(),
            message: format!("failed to serialize to JSON: {e}"),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> BTreeSet<String> {
        ["//main/share/b.txt", "/tmp/a.txt", "c:/data/x"]
            .into_iter()
            .map(String::from)
            .collect()
    }

    #[test]
    fn test_plain_formatter() {
        let output = PlainFormatter.format(&sample()).unwrap();
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines, vec!["//main/share/b.txt", "/tmp/a.txt", "c:/data/x"]);
    }

    #[test]
    fn test_plain_formatter_empty() {
        assert_eq!(PlainFormatter.format(&BTreeSet::new()).unwrap(), "");
    }

    #[test]
    fn test_json_formatter() {
        let output = JsonFormatter.format(&sample()).unwrap();

        let parsed: Vec<String> = serde_json::from_str(&output).unwrap();
        assert_eq!(parsed.len(), 3);
        assert_eq!(parsed[0], "//main/share/b.txt");

        // pretty-printed
        assert!(output.contains('\n'));
    }

    #[test]
    fn test_json_formatter_empty() {
        let output = JsonFormatter.format(&BTreeSet::new()).unwrap();
        let parsed: Vec<String> = serde_json::from_str(&output).unwrap();
        assert!(parsed.is_empty());
    }
}
