//! Indented CST dump, shared by tests and the CLI.

use std::fmt::Write;

use rowan::NodeOrToken;

use super::cst::SyntaxNode;

/// Renders `node` as an indented tree: node kinds bare, tokens with their
/// text. Trivia tokens are omitted unless `with_trivia` is set.
pub fn dump_cst(node: &SyntaxNode, with_trivia: bool) -> String {
    let mut out = String::new();
    format_node(node, 0, with_trivia, &mut out).expect("String write never fails");
    out
}

fn format_node(
    node: &SyntaxNode,
    indent: usize,
    with_trivia: bool,
    w: &mut String,
) -> std::fmt::Result {
    writeln!(w, "{}{:?}", "  ".repeat(indent), node.kind())?;
    for child in node.children_with_tokens() {
        match child {
            NodeOrToken::Node(n) => format_node(&n, indent + 1, with_trivia, w)?,
            NodeOrToken::Token(t) => {
                if with_trivia || !t.kind().is_trivia() {
                    writeln!(w, "{}{:?} {:?}", "  ".repeat(indent + 1), t.kind(), t.text())?;
                }
            }
        }
    }
    Ok(())
}
