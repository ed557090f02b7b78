use super::lower::lower_children;
use super::SyntaxTree;
use crate::core::{Language, LocateError, Result};
use crate::source::SourceDocument;
use tracing::debug;
use tree_sitter::{Node, Parser, Tree};

/// Deepest concrete tree accepted for lowering.
pub const MAX_NESTING_DEPTH: usize = 2048;

/// First syntax error found in a concrete tree, 1-indexed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyntaxError {
    pub line: usize,
    pub column: usize,
    pub message: String,
}

/// Parse a loaded document into top-level statements.
///
/// JavaScript that does not parse with the JavaScript grammar is retried with
/// the TSX grammar, which accepts JSX together with type annotations. The
/// error of the primary grammar is reported if both attempts fail.
pub fn parse_document(document: &SourceDocument) -> Result<SyntaxTree> {
    let language = document.language();
    let primary = match parse_source(document.text(), language) {
        Ok(tree) => return Ok(tree),
        Err(e) => e,
    };

    if language == Language::JavaScript {
        debug!(
            path = %document.path().display(),
            line = primary.line,
            "JavaScript grammar rejected source, retrying with TSX"
        );
        if let Ok(tree) = parse_source(document.text(), Language::Tsx) {
            return Ok(tree);
        }
    }

    Err(LocateError::parse(
        document.path(),
        primary.line,
        primary.column,
        primary.message,
    ))
}

pub fn parse_source(source: &str, language: Language) -> std::result::Result<SyntaxTree, SyntaxError> {
    let tree = parse_tree(source, language)?;
    let root = tree.root_node();

    // Lowering and the locator walk recurse once per level
    if let Some(node) = first_node_deeper_than(root, MAX_NESTING_DEPTH) {
        return Err(syntax_error(
            node,
            format!("nesting deeper than {} levels", MAX_NESTING_DEPTH),
        ));
    }

    if root.has_error() {
        return Err(first_error(root, source).unwrap_or_else(|| SyntaxError {
            line: 1,
            column: 1,
            message: "invalid syntax".to_string(),
        }));
    }

    Ok(SyntaxTree {
        language,
        statements: lower_children(root, source.as_bytes()),
    })
}

fn parse_tree(source: &str, language: Language) -> std::result::Result<Tree, SyntaxError> {
    let grammar: tree_sitter::Language = match language {
        Language::JavaScript => tree_sitter_javascript::LANGUAGE.into(),
        Language::TypeScript => tree_sitter_typescript::LANGUAGE_TYPESCRIPT.into(),
        Language::Tsx => tree_sitter_typescript::LANGUAGE_TSX.into(),
    };

    let mut parser = Parser::new();
    parser.set_language(&grammar).map_err(|e| SyntaxError {
        line: 1,
        column: 1,
        message: format!("Failed to set {} language: {}", language, e),
    })?;

    parser.parse(source, None).ok_or_else(|| SyntaxError {
        line: 1,
        column: 1,
        message: format!("Failed to parse {} code", language),
    })
}

/// Iterative pre-order walk returning the first node below `limit` levels.
fn first_node_deeper_than(root: Node, limit: usize) -> Option<Node> {
    let mut cursor = root.walk();
    let mut depth = 0;
    loop {
        if depth > limit {
            return Some(cursor.node());
        }
        if cursor.goto_first_child() {
            depth += 1;
            continue;
        }
        while !cursor.goto_next_sibling() {
            if !cursor.goto_parent() {
                return None;
            }
            depth -= 1;
        }
    }
}

fn first_error(node: Node, source: &str) -> Option<SyntaxError> {
    if node.is_missing() {
        return Some(syntax_error(node, format!("missing `{}`", node.kind())));
    }
    if node.is_error() {
        let snippet = node
            .utf8_text(source.as_bytes())
            .unwrap_or_default()
            .lines()
            .next()
            .unwrap_or_default();
        let snippet: String = snippet.chars().take(24).collect();
        return Some(syntax_error(node, format!("unexpected `{}`", snippet)));
    }

    let mut cursor = node.walk();
    let children: Vec<Node> = node.children(&mut cursor).collect();
    children
        .into_iter()
        .filter(|child| child.has_error())
        .find_map(|child| first_error(child, source))
}

fn syntax_error(node: Node, what: String) -> SyntaxError {
    let position = node.start_position();
    let line = position.row + 1;
    let column = position.column + 1;
    SyntaxError {
        line,
        column,
        message: format!("{} at line {}, column {}", what, line, column),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::syntax::{FunctionForm, SyntaxNode};
    use indoc::indoc;

    fn parse_js(source: &str) -> SyntaxTree {
        parse_source(source, Language::JavaScript).expect("source should parse")
    }

    fn expression(statement: &SyntaxNode) -> &SyntaxNode {
        match statement {
            SyntaxNode::Other {
                kind: "expression_statement",
                children,
                ..
            } => &children[0],
            other => panic!("expected expression statement, got {:?}", other),
        }
    }

    fn nested_concatenation(terms: usize) -> String {
        let sum = vec!["'a'"; terms].join(" + ");
        format!("it('long', () => {{\n  const s = {sum};\n}});\n")
    }

    #[test]
    fn test_deep_nesting_is_a_syntax_error() {
        let err = parse_source(&nested_concatenation(50_000), Language::JavaScript).unwrap_err();
        assert_eq!(err.line, 2);
        assert!(
            err.message.starts_with("nesting deeper than 2048 levels"),
            "{}",
            err.message
        );
    }

    #[test]
    fn test_moderate_nesting_still_lowers() {
        let tree = parse_js(&nested_concatenation(200));
        assert_eq!(tree.statements.len(), 1);
    }

    #[test]
    fn test_parenthesized_initializer_is_unwrapped() {
        let tree = parse_js("const helper = (function () {\n  return 1;\n});\n");
        let declarator = tree.statements[0].children()[0];
        match declarator {
            SyntaxNode::Declarator {
                init: Some(init), ..
            } => assert!(matches!(
                init.as_ref(),
                SyntaxNode::Function {
                    form: FunctionForm::Expression,
                    ..
                }
            )),
            other => panic!("expected declarator, got {:?}", other),
        }
    }

    #[test]
    fn test_lowers_identifier_call() {
        let tree = parse_js("it('works', () => {\n  expect(1).toBe(1);\n});\n");
        assert_eq!(tree.statements.len(), 1);

        match expression(&tree.statements[0]) {
            SyntaxNode::Call {
                span,
                callee,
                arguments,
            } => {
                assert_eq!((span.start_line, span.end_line), (1, 3));
                assert_eq!(callee.identifier_name(), Some("it"));
                assert_eq!(arguments.len(), 2);
                assert!(matches!(
                    arguments[1],
                    SyntaxNode::Function {
                        form: FunctionForm::Arrow,
                        ..
                    }
                ));
            }
            other => panic!("expected call, got {:?}", other),
        }
    }

    #[test]
    fn test_lowers_member_callee() {
        let tree = parse_js("describe.only('suite', function () {});");
        match expression(&tree.statements[0]) {
            SyntaxNode::Call { callee, .. } => {
                assert_eq!(callee.member_path(), Some(("describe", "only")));
            }
            other => panic!("expected call, got {:?}", other),
        }
    }

    #[test]
    fn test_lowers_declarator_with_initializer() {
        let tree = parse_js("const helper = function () { return 1; };");
        let declaration = &tree.statements[0];
        let declarator = declaration.children()[0];
        match declarator {
            SyntaxNode::Declarator { binding, init, .. } => {
                assert_eq!(binding.identifier_name(), Some("helper"));
                assert!(matches!(
                    init.as_deref(),
                    Some(SyntaxNode::Function {
                        form: FunctionForm::Expression,
                        ..
                    })
                ));
            }
            other => panic!("expected declarator, got {:?}", other),
        }
    }

    #[test]
    fn test_comments_are_not_nodes() {
        let tree = parse_js(indoc! {"
            // leading comment
            /* block */
            import x from 'x';
        "});
        assert_eq!(tree.statements.len(), 1);
        assert!(matches!(
            tree.statements[0],
            SyntaxNode::Other {
                kind: "import_statement",
                ..
            }
        ));
    }

    #[test]
    fn test_invalid_syntax_reports_position() {
        let err = parse_source("it('broken', () => {\n  const = ;\n});\n", Language::JavaScript)
            .unwrap_err();
        assert_eq!(err.line, 2);
        assert!(err.message.contains("line 2"), "{}", err.message);
    }

    #[test]
    fn test_flow_annotations_fall_back_to_tsx() {
        let document = SourceDocument::from_source(
            "fixture.js",
            "function add(a: number, b: number): number {\n  return a + b;\n}\n",
            "",
        );
        let tree = parse_document(&document).expect("TSX fallback should accept annotations");
        assert_eq!(tree.language, Language::Tsx);
    }

    #[test]
    fn test_typescript_sources_use_typescript_grammar() {
        let document = SourceDocument::from_source(
            "spec.ts",
            "const spy: jest.SpyInstance = jest.spyOn(api, 'get');\n",
            "",
        );
        let tree = parse_document(&document).unwrap();
        assert_eq!(tree.language, Language::TypeScript);
        assert_eq!(tree.statements.len(), 1);
    }

    #[test]
    fn test_parse_document_reports_path() {
        let document = SourceDocument::from_source("bad.ts", "let = = =;\n", "");
        match parse_document(&document).unwrap_err() {
            LocateError::Parse { path, line, .. } => {
                assert_eq!(path, std::path::PathBuf::from("bad.ts"));
                assert_eq!(line, 1);
            }
            other => panic!("expected parse error, got {:?}", other),
        }
    }
}
