//! Typed syntax tree for JavaScript/TypeScript sources.
//!
//! tree-sitter produces a concrete syntax tree with string node kinds. The
//! locator only cares about a handful of shapes (calls, member access,
//! identifiers, variable declarators, function values), so [`lower`] turns the
//! concrete tree into [`SyntaxNode`] variants that carry exactly the fields
//! each shape needs. Everything else becomes [`SyntaxNode::Other`] and keeps
//! its children so the traversal can still descend into it.

mod lower;
mod parser;

pub use parser::{parse_document, parse_source, SyntaxError};

use crate::core::{Language, LineSpan};

/// How a function value was written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FunctionForm {
    /// `function () {}` or `function* () {}`
    Expression,
    /// `() => {}`
    Arrow,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyntaxNode {
    Call {
        span: LineSpan,
        callee: Box<SyntaxNode>,
        arguments: Vec<SyntaxNode>,
    },
    Member {
        span: LineSpan,
        object: Box<SyntaxNode>,
        property: Option<String>,
    },
    Identifier {
        span: LineSpan,
        name: String,
    },
    Declarator {
        span: LineSpan,
        binding: Box<SyntaxNode>,
        init: Option<Box<SyntaxNode>>,
    },
    Function {
        span: LineSpan,
        form: FunctionForm,
        children: Vec<SyntaxNode>,
    },
    Other {
        span: LineSpan,
        kind: &'static str,
        children: Vec<SyntaxNode>,
    },
}

impl SyntaxNode {
    pub fn span(&self) -> LineSpan {
        match self {
            SyntaxNode::Call { span, .. }
            | SyntaxNode::Member { span, .. }
            | SyntaxNode::Identifier { span, .. }
            | SyntaxNode::Declarator { span, .. }
            | SyntaxNode::Function { span, .. }
            | SyntaxNode::Other { span, .. } => *span,
        }
    }

    /// Child nodes in declaration order.
    pub fn children(&self) -> Vec<&SyntaxNode> {
        match self {
            SyntaxNode::Call {
                callee, arguments, ..
            } => std::iter::once(callee.as_ref())
                .chain(arguments.iter())
                .collect(),
            SyntaxNode::Member { object, .. } => vec![object.as_ref()],
            SyntaxNode::Identifier { .. } => Vec::new(),
            SyntaxNode::Declarator { binding, init, .. } => std::iter::once(binding.as_ref())
                .chain(init.as_deref())
                .collect(),
            SyntaxNode::Function { children, .. } | SyntaxNode::Other { children, .. } => {
                children.iter().collect()
            }
        }
    }

    pub fn identifier_name(&self) -> Option<&str> {
        match self {
            SyntaxNode::Identifier { name, .. } => Some(name),
            _ => None,
        }
    }

    /// `(object, property)` for `object.property` where the object is a plain identifier.
    pub fn member_path(&self) -> Option<(&str, &str)> {
        match self {
            SyntaxNode::Member {
                object, property, ..
            } => Some((object.identifier_name()?, property.as_deref()?)),
            _ => None,
        }
    }
}

/// Top-level statements of one parsed source, in source order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyntaxTree {
    pub language: Language,
    pub statements: Vec<SyntaxNode>,
}
