use super::{FunctionForm, SyntaxNode};
use crate::core::LineSpan;
use tree_sitter::Node;

/// Nodes that only wrap the expression they contain.
const WRAPPER_KINDS: &[&str] = &[
    "parenthesized_expression",
    "as_expression",
    "satisfies_expression",
    "non_null_expression",
];

pub(super) fn lower(node: Node, source: &[u8]) -> SyntaxNode {
    let span = span_of(node);
    match node.kind() {
        "call_expression" => lower_call(node, source, span),
        "member_expression" => lower_member(node, source, span),
        "identifier" => SyntaxNode::Identifier {
            span,
            name: node_text(node, source).to_string(),
        },
        "variable_declarator" => lower_declarator(node, source, span),
        "function_expression" | "function" | "generator_function" => SyntaxNode::Function {
            span,
            form: FunctionForm::Expression,
            children: lower_children(node, source),
        },
        "arrow_function" => SyntaxNode::Function {
            span,
            form: FunctionForm::Arrow,
            children: lower_children(node, source),
        },
        kind => SyntaxNode::Other {
            span,
            kind,
            children: lower_children(node, source),
        },
    }
}

pub(super) fn lower_children(node: Node, source: &[u8]) -> Vec<SyntaxNode> {
    let mut cursor = node.walk();
    node.named_children(&mut cursor)
        .filter(|child| !child.is_extra())
        .map(|child| lower(child, source))
        .collect()
}

fn lower_call(node: Node, source: &[u8], span: LineSpan) -> SyntaxNode {
    let Some(function) = node.child_by_field_name("function") else {
        return other(node, source, span);
    };

    let arguments = match node.child_by_field_name("arguments") {
        Some(args) if args.kind() == "arguments" => lower_children(args, source),
        // Tagged templates carry a template string instead of an argument list
        Some(template) => vec![lower(template, source)],
        None => Vec::new(),
    };

    SyntaxNode::Call {
        span,
        callee: Box::new(lower(function, source)),
        arguments,
    }
}

fn lower_member(node: Node, source: &[u8], span: LineSpan) -> SyntaxNode {
    let Some(object) = node.child_by_field_name("object") else {
        return other(node, source, span);
    };
    let property = node
        .child_by_field_name("property")
        .map(|p| node_text(p, source).to_string());

    SyntaxNode::Member {
        span,
        object: Box::new(lower(object, source)),
        property,
    }
}

fn lower_declarator(node: Node, source: &[u8], span: LineSpan) -> SyntaxNode {
    let Some(name) = node.child_by_field_name("name") else {
        return other(node, source, span);
    };
    let init = node
        .child_by_field_name("value")
        .map(|value| Box::new(lower(unwrap_expression(value), source)));

    SyntaxNode::Declarator {
        span,
        binding: Box::new(lower(name, source)),
        init,
    }
}

/// Strip parentheses and TypeScript type assertions around an initializer.
fn unwrap_expression(mut node: Node) -> Node {
    while WRAPPER_KINDS.contains(&node.kind()) {
        let mut cursor = node.walk();
        let inner = node
            .named_children(&mut cursor)
            .find(|child| !child.is_extra());
        match inner {
            Some(inner) => node = inner,
            None => break,
        }
    }
    node
}

fn other(node: Node, source: &[u8], span: LineSpan) -> SyntaxNode {
    SyntaxNode::Other {
        span,
        kind: node.kind(),
        children: lower_children(node, source),
    }
}

fn span_of(node: Node) -> LineSpan {
    let start = node.start_position().row + 1;
    let end = node.end_position().row + 1;
    LineSpan::new(start, end.max(start))
}

fn node_text<'a>(node: Node, source: &'a [u8]) -> &'a str {
    node.utf8_text(source).unwrap_or_default()
}
