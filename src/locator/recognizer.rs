//! Classification of syntax nodes as test declarations.

use crate::syntax::SyntaxNode;

/// Plain callee names that open a test or hook block.
pub const TEST_CALLEES: &[&str] = &[
    "it",
    "test",
    "beforeEach",
    "afterEach",
    "xit",
    "xdescribe",
    "fdescribe",
];

/// Properties accepted on `describe.<property>(...)`.
pub const DESCRIBE_MODIFIERS: &[&str] = &["only", "skip"];

/// Which recognition rule a node satisfied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Recognition {
    /// `it(...)`, `test(...)`, hooks and their focused/skipped forms
    TestCall,
    /// `describe.only(...)` / `describe.skip(...)`
    DescribeModifier,
    /// `const helper = () => {...}`
    FunctionBinding,
    /// `const spy = jest.spyOn(...)`
    SpyBinding,
}

pub fn recognize(node: &SyntaxNode) -> Option<Recognition> {
    match node {
        SyntaxNode::Call { callee, .. } => recognize_call(callee),
        SyntaxNode::Declarator {
            init: Some(init), ..
        } => recognize_initializer(init),
        _ => None,
    }
}

pub fn is_test_declaration(node: &SyntaxNode) -> bool {
    recognize(node).is_some()
}

fn recognize_call(callee: &SyntaxNode) -> Option<Recognition> {
    if let Some(name) = callee.identifier_name() {
        return TEST_CALLEES
            .contains(&name)
            .then_some(Recognition::TestCall);
    }
    match callee.member_path() {
        Some(("describe", property)) if DESCRIBE_MODIFIERS.contains(&property) => {
            Some(Recognition::DescribeModifier)
        }
        _ => None,
    }
}

fn recognize_initializer(init: &SyntaxNode) -> Option<Recognition> {
    match init {
        SyntaxNode::Function { .. } => Some(Recognition::FunctionBinding),
        SyntaxNode::Call { callee, .. } if callee.member_path() == Some(("jest", "spyOn")) => {
            Some(Recognition::SpyBinding)
        }
        _ => None,
    }
}
