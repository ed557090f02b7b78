pub mod errors;

use serde::{Deserialize, Serialize};
use std::path::Path;

pub use errors::{BatchError, ErrorKind, LocateError, Result, NO_MATCH_MESSAGE};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Language {
    JavaScript,
    TypeScript,
    Tsx,
}

impl Language {
    pub fn from_extension(ext: &str) -> Self {
        static EXTENSION_MAP: &[(&[&str], Language)] = &[
            (&["js", "jsx", "mjs", "cjs"], Language::JavaScript),
            (&["ts", "mts", "cts"], Language::TypeScript),
            (&["tsx"], Language::Tsx),
        ];

        EXTENSION_MAP
            .iter()
            .find(|(exts, _)| exts.contains(&ext))
            .map(|(_, lang)| *lang)
            .unwrap_or(Language::JavaScript)
    }

    /// Files without a recognised extension are parsed as JavaScript.
    pub fn from_path(path: &Path) -> Self {
        path.extension()
            .and_then(|ext| ext.to_str())
            .map(Self::from_extension)
            .unwrap_or(Language::JavaScript)
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Language::JavaScript => "JavaScript",
            Language::TypeScript => "TypeScript",
            Language::Tsx => "TSX",
        };
        write!(f, "{}", name)
    }
}

/// Inclusive, 1-indexed range of source lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LineSpan {
    pub start_line: usize,
    pub end_line: usize,
}

impl LineSpan {
    pub fn new(start_line: usize, end_line: usize) -> Self {
        debug_assert!(start_line >= 1 && start_line <= end_line);
        Self {
            start_line,
            end_line,
        }
    }

    pub fn contains(&self, line: usize) -> bool {
        self.start_line <= line && line <= self.end_line
    }

    pub fn line_count(&self) -> usize {
        self.end_line - self.start_line + 1
    }
}

/// Verbatim source of a located test declaration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestBlockMatch {
    pub text: String,
    pub start_line: usize,
    pub end_line: usize,
}

impl TestBlockMatch {
    pub fn span(&self) -> LineSpan {
        LineSpan::new(self.start_line, self.end_line)
    }

    /// Range label used in the batch output, e.g. `start: 10 end: 14`.
    pub fn range_label(&self) -> String {
        format!("start: {} end: {}", self.start_line, self.end_line)
    }
}

/// Serialisable view of a locate outcome: either the match or `{ "error": ... }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum LocateReport {
    Found(TestBlockMatch),
    Failed { error: String },
}

impl From<&Result<TestBlockMatch>> for LocateReport {
    fn from(outcome: &Result<TestBlockMatch>) -> Self {
        match outcome {
            Ok(found) => LocateReport::Found(found.clone()),
            Err(e) => LocateReport::Failed {
                error: e.to_string(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_language_from_path() {
        assert_eq!(
            Language::from_path(&PathBuf::from("a/b.test.js")),
            Language::JavaScript
        );
        assert_eq!(
            Language::from_path(&PathBuf::from("spec.ts")),
            Language::TypeScript
        );
        assert_eq!(Language::from_path(&PathBuf::from("App.tsx")), Language::Tsx);
        assert_eq!(
            Language::from_path(&PathBuf::from("Makefile")),
            Language::JavaScript
        );
    }

    #[test]
    fn test_line_span_contains_is_inclusive() {
        let span = LineSpan::new(10, 14);
        assert!(span.contains(10));
        assert!(span.contains(14));
        assert!(!span.contains(9));
        assert!(!span.contains(15));
        assert_eq!(span.line_count(), 5);
    }

    #[test]
    fn test_report_serialises_error_shape() {
        let outcome: Result<TestBlockMatch> = Err(LocateError::malformed("line must be positive"));
        let json = serde_json::to_string(&LocateReport::from(&outcome)).unwrap();
        assert_eq!(json, r#"{"error":"Malformed input: line must be positive"}"#);
    }

    #[test]
    fn test_report_serialises_match_shape() {
        let outcome: Result<TestBlockMatch> = Ok(TestBlockMatch {
            text: "it('x', () => {});".to_string(),
            start_line: 3,
            end_line: 3,
        });
        let json = serde_json::to_string(&LocateReport::from(&outcome)).unwrap();
        assert_eq!(
            json,
            r#"{"text":"it('x', () => {});","start_line":3,"end_line":3}"#
        );
    }
}
