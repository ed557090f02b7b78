//! Locating the test declaration that encloses a source line.
//!
//! The walk is pre-order and returns on the first hit: a node is classified
//! before any of its descendants, so an outer `describe.only(...)` wins over
//! an `it(...)` nested inside it even though the inner call is the smaller
//! enclosing block. Top-level statements are tried in source order.

pub mod recognizer;

pub use recognizer::{is_test_declaration, recognize, Recognition};

use crate::core::{LocateError, Result, TestBlockMatch};
use crate::io::{FileSystem, RealFileSystem};
use crate::source::{SourceDocument, DEFAULT_EXPECT_ERROR_MARKER};
use crate::syntax::{parse_document, SyntaxNode, SyntaxTree};
use std::path::Path;
use tracing::{debug, trace};

/// Options for loading a source before locating.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocateOptions {
    /// Token stripped from the source before parsing.
    pub marker: String,
}

impl Default for LocateOptions {
    fn default() -> Self {
        Self {
            marker: DEFAULT_EXPECT_ERROR_MARKER.to_string(),
        }
    }
}

/// Load `path` and find the test declaration enclosing `target_line`.
pub fn locate(path: &Path, target_line: usize, options: &LocateOptions) -> Result<TestBlockMatch> {
    locate_with(&RealFileSystem, path, target_line, options)
}

pub fn locate_with<F: FileSystem + ?Sized>(
    fs: &F,
    path: &Path,
    target_line: usize,
    options: &LocateOptions,
) -> Result<TestBlockMatch> {
    if target_line == 0 {
        return Err(LocateError::malformed("target line must be a positive integer"));
    }
    let document = SourceDocument::load_with(fs, path, &options.marker)?;
    find_test_block(&document, target_line)
}

/// Parse `document` and search its top-level statements in order.
pub fn find_test_block(document: &SourceDocument, target_line: usize) -> Result<TestBlockMatch> {
    let tree = parse_document(document)?;
    find_in_tree(&tree, document, target_line).ok_or_else(|| LocateError::NoMatch {
        path: document.path().to_path_buf(),
        line: target_line,
    })
}

pub fn find_in_tree(
    tree: &SyntaxTree,
    document: &SourceDocument,
    target_line: usize,
) -> Option<TestBlockMatch> {
    tree.statements
        .iter()
        .find_map(|statement| extract_test_block(statement, target_line, document))
}

/// Pre-order search below `node` for a test declaration containing `target_line`.
///
/// Children are visited even when `node` itself does not contain the line.
pub fn extract_test_block(
    node: &SyntaxNode,
    target_line: usize,
    document: &SourceDocument,
) -> Option<TestBlockMatch> {
    let span = node.span();
    if span.contains(target_line) {
        if let Some(rule) = recognize(node) {
            debug!(
                ?rule,
                start_line = span.start_line,
                end_line = span.end_line,
                "test declaration encloses line {}",
                target_line
            );
            if let Some(found) = format_test_block(document, span.start_line, span.end_line) {
                return Some(found);
            }
            trace!("declaration range is outside the document, continuing");
        }
    }

    node.children()
        .into_iter()
        .find_map(|child| extract_test_block(child, target_line, document))
}

/// Verbatim lines `start_line..=end_line` of `document` as a match.
pub fn format_test_block(
    document: &SourceDocument,
    start_line: usize,
    end_line: usize,
) -> Option<TestBlockMatch> {
    let text = document.slice_lines(start_line, end_line)?;
    Some(TestBlockMatch {
        text,
        start_line,
        end_line,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ErrorKind;
    use crate::testkit::MemoryFileSystem;
    use indoc::indoc;
    use pretty_assertions::assert_eq;

    fn locate_in(source: &str, line: usize) -> Result<TestBlockMatch> {
        locate_in_file("suite.test.js", source, line)
    }

    fn locate_in_file(name: &str, source: &str, line: usize) -> Result<TestBlockMatch> {
        let document = SourceDocument::from_source(name, source, DEFAULT_EXPECT_ERROR_MARKER);
        find_test_block(&document, line)
    }

    fn range(found: &TestBlockMatch) -> (usize, usize) {
        (found.start_line, found.end_line)
    }

    const SUITE: &str = indoc! {"
        import { sum } from './sum';

        describe('sum', () => {
          beforeEach(() => {
            jest.resetModules();
          });

          it('adds numbers', () => {
            expect(sum(1, 2)).toBe(3);
          });
        });
    "};

    #[test]
    fn test_finds_enclosing_it_call() {
        let found = locate_in(SUITE, 9).unwrap();
        assert_eq!((found.start_line, found.end_line), (8, 10));
        assert_eq!(
            found.text,
            "  it('adds numbers', () => {\n    expect(sum(1, 2)).toBe(3);\n  });"
        );
    }

    #[test]
    fn test_finds_hook() {
        let found = locate_in(SUITE, 5).unwrap();
        assert_eq!((found.start_line, found.end_line), (4, 6));
    }

    #[test]
    fn test_plain_describe_line_has_no_match() {
        let err = locate_in(SUITE, 7).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NoMatch);
    }

    #[test]
    fn test_import_line_has_no_match() {
        let err = locate_in(SUITE, 1).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NoMatch);
    }

    #[test]
    fn test_outer_describe_only_wins_over_nested_it() {
        let source = indoc! {"
            describe.only('focused', () => { it('inner', () => {}); });
        "};
        let found = locate_in(source, 1).unwrap();
        assert_eq!(found.text, "describe.only('focused', () => { it('inner', () => {}); });");
    }

    #[test]
    fn test_outer_it_wins_over_inner_helper_binding() {
        let source = indoc! {"
            it('outer', () => {
              const helper = () => 1;
              expect(helper()).toBe(1);
            });
        "};
        let found = locate_in(source, 2).unwrap();
        assert_eq!((found.start_line, found.end_line), (1, 4));
    }

    #[test]
    fn test_helper_binding_inside_plain_describe() {
        let source = indoc! {"
            describe('helpers', () => {
              const build = function (name) {
                return { name };
              };
            });
        "};
        let found = locate_in(source, 3).unwrap();
        assert_eq!((found.start_line, found.end_line), (2, 4));
        assert!(found.text.starts_with("  const build = function"));
    }

    #[test]
    fn test_single_line_spy_binding() {
        let source = indoc! {"
            const api = require('./api');
            const obj = { method() {} };

            describe('spies', () => {
              let other;

              const spy = jest.spyOn(obj, 'method');
            });
        "};
        let found = locate_in(source, 7).unwrap();
        assert_eq!((found.start_line, found.end_line), (7, 7));
        assert_eq!(found.text, "  const spy = jest.spyOn(obj, 'method');");
    }

    #[test]
    fn test_first_top_level_statement_wins() {
        let source = indoc! {"
            test('one', () => {});
            test('two', () => {});
        "};
        assert_eq!(locate_in(source, 2).unwrap().start_line, 2);
        assert_eq!(locate_in(source, 1).unwrap().start_line, 1);
    }

    #[test]
    fn test_marker_does_not_break_parsing() {
        let source = indoc! {"
            it('flags types', () => {
              // $ExpectError
              takesString(1);
            });
        "};
        let found = locate_in(source, 3).unwrap();
        assert_eq!(found.text.lines().nth(1), Some("  // "));
    }

    #[test]
    fn test_zero_line_is_malformed() {
        let fs = MemoryFileSystem::new().with_file("/a.test.js", "it('a', () => {});");
        let err = locate_with(&fs, Path::new("/a.test.js"), 0, &LocateOptions::default())
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MalformedInput);
    }

    #[test]
    fn test_missing_file_reported() {
        let fs = MemoryFileSystem::new();
        let err = locate_with(&fs, Path::new("/gone.test.js"), 3, &LocateOptions::default())
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::FileNotFound);
    }

    #[test]
    fn test_parse_error_reported_not_panicking() {
        let fs = MemoryFileSystem::new().with_file("/bad.test.ts", "it('a', () => {\n  let = ;\n");
        let err = locate_with(&fs, Path::new("/bad.test.ts"), 1, &LocateOptions::default())
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Parse);
    }

    #[test]
    fn test_line_past_end_has_no_match() {
        let err = locate_in(SUITE, 500).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NoMatch);
    }

    #[test]
    fn test_parenthesized_function_bindings() {
        let expression = "const helper = (function () {\n  return 1;\n});\n";
        assert_eq!(range(&locate_in(expression, 2).unwrap()), (1, 3));

        let arrow = "const h = (() => {\n  return 1;\n});\n";
        assert_eq!(range(&locate_in(arrow, 2).unwrap()), (1, 3));

        let spy = "const o = { m() {} };\nconst spy = (jest.spyOn(o, 'm'));\n";
        assert_eq!(range(&locate_in(spy, 2).unwrap()), (2, 2));
    }

    #[test]
    fn test_type_assertion_wrappers_are_transparent() {
        let source = indoc! {"
            type Fn = () => number;
            const asserted = (() => {
              return 1;
            }) as Fn;
            const checked = function () {
              return 2;
            } satisfies Fn;
            const obj = { m() {} };
            const spy = jest.spyOn(obj, 'm')!;
        "};
        assert_eq!(range(&locate_in_file("helpers.test.ts", source, 3).unwrap()), (2, 4));
        assert_eq!(range(&locate_in_file("helpers.test.ts", source, 6).unwrap()), (5, 7));
        assert_eq!(range(&locate_in_file("helpers.test.ts", source, 9).unwrap()), (9, 9));
    }

    #[test]
    fn test_carriage_return_only_file() {
        let source = "import a from 'a';\rit('x', () => {\r  a();\r});\r";
        let found = locate_in(source, 3).unwrap();
        assert_eq!(range(&found), (2, 4));
        assert_eq!(found.text, "it('x', () => {\n  a();\n});");
    }

    #[test]
    fn test_deeply_nested_source_is_a_parse_error() {
        let sum = vec!["'a'"; 50_000].join(" + ");
        let source = format!("it('long', () => {{\n  const s = {sum};\n}});\n");
        let fs = MemoryFileSystem::new().with_file("/deep.test.js", &source);
        let err = locate_with(&fs, Path::new("/deep.test.js"), 2, &LocateOptions::default())
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Parse);
    }
}
