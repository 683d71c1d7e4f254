//! Prediction-file checker
//!
//! Expected shape, one item per line, numbered from 1 without gaps:
//!
//! ```text
//! 1. Factual,Positive,Past,Certain
//! 2. 추론형,미정,현재,불확실
//! ```
//!
//! Checks are exhaustive rather than fail-fast: every line is inspected and
//! every violated check on a line is reported.

use std::fmt;
use std::path::Path;
use std::sync::OnceLock;

use regex::Regex;

use crate::error::Result;
use crate::labels::{Certainty, DiscourseType, Label, Polarity, Tense};

/// One problem found in a prediction file. Line numbers are 1-based.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationIssue {
    /// The file has no lines at all.
    Empty,
    /// The line does not match `<n>. <Type>,<Polarity>,<Tense>,<Certainty>`.
    Format { line: usize, text: String },
    /// The numeric prefix is not the line's position. `actual` keeps the
    /// prefix digits (leading zeros dropped) so oversized numbers still report.
    Numbering { line: usize, expected: usize, actual: String },
    /// A space sits next to a comma.
    Spacing { line: usize, text: String },
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationIssue::Empty => write!(f, "file is empty"),
            ValidationIssue::Format { line, text } => {
                write!(f, "line {}: malformed prediction '{}'", line, text)
            }
            ValidationIssue::Numbering { line, expected, actual } => write!(
                f,
                "line {}: numbering mismatch, expected {}, found {}",
                line, expected, actual
            ),
            ValidationIssue::Spacing { line, text } => {
                write!(f, "line {}: whitespace around comma in '{}'", line, text)
            }
        }
    }
}

fn alternatives<L: Label>() -> String {
    L::ALL
        .iter()
        .flat_map(|l| [l.english(), l.korean()])
        .map(regex::escape)
        .collect::<Vec<_>>()
        .join("|")
}

fn line_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        let pattern = format!(
            r"^\d+\. ({}),({}),({}),({})$",
            alternatives::<DiscourseType>(),
            alternatives::<Polarity>(),
            alternatives::<Tense>(),
            alternatives::<Certainty>()
        );
        Regex::new(&pattern).expect("label alternation is a valid regex")
    })
}

/// Canonical digits of an integer prefix, of any length. `None` if `prefix`
/// is not an unsigned decimal integer.
fn digits(prefix: &str) -> Option<&str> {
    let unsigned = prefix.strip_prefix('+').unwrap_or(prefix);
    if unsigned.is_empty() || !unsigned.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    match unsigned.trim_start_matches('0') {
        "" => Some("0"),
        trimmed => Some(trimmed),
    }
}

/// Check every line; an empty result means the file is valid.
pub fn validate_lines<S: AsRef<str>>(lines: &[S]) -> Vec<ValidationIssue> {
    if lines.is_empty() {
        return vec![ValidationIssue::Empty];
    }

    let mut issues = Vec::new();
    for (idx, line) in lines.iter().enumerate() {
        let line = line.as_ref();
        let number = idx + 1;

        if !line_pattern().is_match(line) {
            issues.push(ValidationIssue::Format {
                line: number,
                text: line.to_string(),
            });
        }

        // skipped when no numeric prefix can be split off
        if let Some(actual) = line.split_once(". ").and_then(|(prefix, _)| digits(prefix)) {
            if actual != number.to_string() {
                issues.push(ValidationIssue::Numbering {
                    line: number,
                    expected: number,
                    actual: actual.to_string(),
                });
            }
        }

        if line.contains(", ") || line.contains(" ,") {
            issues.push(ValidationIssue::Spacing {
                line: number,
                text: line.to_string(),
            });
        }
    }

    tracing::debug!("Validated {} lines, {} issues", lines.len(), issues.len());
    issues
}

/// Read a prediction file into lines, without line terminators.
pub fn read_lines(path: impl AsRef<Path>) -> Result<Vec<String>> {
    let content = std::fs::read_to_string(path)?;
    Ok(content.lines().map(str::to_string).collect())
}

pub fn validate_file(path: impl AsRef<Path>) -> Result<Vec<ValidationIssue>> {
    let lines = read_lines(path)?;
    Ok(validate_lines(&lines))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spacing_count(issues: &[ValidationIssue]) -> usize {
        issues
            .iter()
            .filter(|i| matches!(i, ValidationIssue::Spacing { .. }))
            .count()
    }

    #[test]
    fn test_valid_lines_have_no_issues() {
        let lines = [
            "1. Factual,Positive,Past,Certain",
            "2. Inferential,Neutral,Present,Uncertain",
        ];
        assert!(validate_lines(&lines).is_empty());
    }

    #[test]
    fn test_korean_labels_are_valid() {
        let lines = ["1. 사실형,긍정,과거,확실", "2. 예측형,미정,미래,불확실"];
        assert!(validate_lines(&lines).is_empty());
    }

    #[test]
    fn test_numbering_gap_is_one_issue() {
        let lines = [
            "1. Factual,Positive,Past,Certain",
            "3. Inferential,Neutral,Present,Uncertain",
        ];
        assert_eq!(
            validate_lines(&lines),
            vec![ValidationIssue::Numbering { line: 2, expected: 2, actual: "3".into() }]
        );
    }

    #[test]
    fn test_space_after_comma_is_one_spacing_issue() {
        let lines = ["1. Factual, Positive,Past,Certain"];
        let issues = validate_lines(&lines);
        assert_eq!(spacing_count(&issues), 1);
        assert!(issues
            .iter()
            .all(|i| !matches!(i, ValidationIssue::Numbering { .. })));
        // the grammar check fails independently of the spacing check
        assert!(issues.contains(&ValidationIssue::Format {
            line: 1,
            text: lines[0].to_string()
        }));
    }

    #[test]
    fn test_space_before_comma_is_flagged() {
        let issues = validate_lines(&["1. Factual ,Positive,Past,Certain"]);
        assert_eq!(spacing_count(&issues), 1);
    }

    #[test]
    fn test_empty_input_is_one_issue() {
        let lines: [&str; 0] = [];
        assert_eq!(validate_lines(&lines), vec![ValidationIssue::Empty]);
    }

    #[test]
    fn test_unknown_label_is_format_issue() {
        let issues = validate_lines(&["1. Factual,Positive,Later,Certain"]);
        assert_eq!(issues.len(), 1);
        assert!(matches!(issues[0], ValidationIssue::Format { line: 1, .. }));
    }

    #[test]
    fn test_missing_prefix_skips_numbering_check() {
        let issues = validate_lines(&["Factual,Positive,Past,Certain"]);
        assert_eq!(issues.len(), 1);
        assert!(matches!(issues[0], ValidationIssue::Format { .. }));
    }

    #[test]
    fn test_all_lines_are_checked() {
        let lines = [
            "1. Factual,Positive,Past,Certain",
            "garbage",
            "7. Factual,Positive,Past,Certain",
            "4. Factual,Positive,Past,Certain",
        ];
        let issues = validate_lines(&lines);
        assert_eq!(
            issues,
            vec![
                ValidationIssue::Format { line: 2, text: "garbage".to_string() },
                ValidationIssue::Numbering { line: 3, expected: 3, actual: "7".into() },
            ]
        );
    }

    #[test]
    fn test_oversized_number_is_numbering_issue() {
        let line = "99999999999999999999. Factual,Positive,Past,Certain";
        assert_eq!(
            validate_lines(&[line]),
            vec![ValidationIssue::Numbering {
                line: 1,
                expected: 1,
                actual: "99999999999999999999".into(),
            }]
        );
    }

    #[test]
    fn test_leading_zeros_match_position() {
        let lines = ["01. Factual,Positive,Past,Certain", "002. Factual,Positive,Past,Certain"];
        assert!(validate_lines(&lines).is_empty());

        let issues = validate_lines(&["0. Factual,Positive,Past,Certain"]);
        assert_eq!(
            issues,
            vec![ValidationIssue::Numbering { line: 1, expected: 1, actual: "0".into() }]
        );
    }

    #[test]
    fn test_issue_messages() {
        assert_eq!(ValidationIssue::Empty.to_string(), "file is empty");
        assert_eq!(
            ValidationIssue::Numbering { line: 2, expected: 2, actual: "3".into() }.to_string(),
            "line 2: numbering mismatch, expected 2, found 3"
        );
        assert_eq!(
            ValidationIssue::Spacing { line: 1, text: "1. a, b".into() }.to_string(),
            "line 1: whitespace around comma in '1. a, b'"
        );
    }
}
