//! Parser infrastructure for Java-flavored sources.
//!
//! # Architecture
//!
//! This parser produces a lossless concrete syntax tree (CST) via Rowan's green tree builder.
//! Key design decisions borrowed from rust-analyzer, rnix-parser, and taplo:
//!
//! - Zero-copy parsing: tokens carry spans, text sliced only when building tree nodes
//! - Event buffer with markers: grammar code records events; the tree is built afterwards
//! - Transactional rollback: a marker checkpoints (events, cursor, diagnostics) and a
//!   speculative parse is erased by truncating all three
//! - Trivia replay: whitespace/comments attach immediately before the next real token,
//!   so elided zero-width nodes never capture surrounding comments
//!
//! # Recovery Strategy
//!
//! The parser is resilient - it always produces a tree. Recovery follows these rules:
//!
//! 1. Missing expected tokens emit a diagnostic but don't consume (parent may handle)
//! 2. Runs of unrecognized tokens group into one `Error` node with one diagnostic
//! 3. Every loop consumes at least one token per iteration, so progress is guaranteed
//! 4. Worst case, a file of garbage degrades to a single file-spanning error node

pub mod ast;
pub mod cst;
pub mod dump;
pub mod lexer;

mod core;
mod grammar;

#[cfg(test)]
mod tests;

pub use cst::{SyntaxElement, SyntaxKind, SyntaxNode, SyntaxToken};

pub use self::core::Parser;

use crate::Diagnostics;
use lexer::lex;

/// Parse result containing the green tree.
///
/// The tree is always complete - diagnostics are returned separately.
/// Error nodes in the tree represent recovery points.
#[derive(Debug, Clone)]
pub struct Parse {
    green: rowan::GreenNode,
    diagnostics: Diagnostics,
}

impl Parse {
    pub fn green(&self) -> &rowan::GreenNode {
        &self.green
    }

    /// Creates a typed view over the immutable green tree.
    /// This is cheap - SyntaxNode is a thin wrapper with parent pointers.
    pub fn syntax(&self) -> SyntaxNode {
        SyntaxNode::new_root(self.green.clone())
    }

    pub fn diagnostics(&self) -> &Diagnostics {
        &self.diagnostics
    }

    pub fn into_diagnostics(self) -> Diagnostics {
        self.diagnostics
    }

    /// Indented tree dump without trivia tokens.
    pub fn dump(&self) -> String {
        dump::dump_cst(&self.syntax(), false)
    }

    /// Indented tree dump including whitespace and comments.
    pub fn dump_full(&self) -> String {
        dump::dump_cst(&self.syntax(), true)
    }
}

/// Parses one source file: package clause, import list, declarations.
/// Never fails; malformed input yields error nodes plus diagnostics.
pub fn parse_file(source: &str) -> Parse {
    let mut parser = Parser::new(source, lex(source));
    parser.parse_file();
    let (green, diagnostics) = parser.finish();
    Parse { green, diagnostics }
}

/// Parses one standalone pattern (the reusable sub-grammar consumed by
/// type-test and branch-label contexts). Trailing input is preserved under
/// a single grouped error.
pub fn parse_pattern(source: &str) -> Parse {
    let mut parser = Parser::new(source, lex(source));
    parser.parse_pattern_fragment();
    let (green, diagnostics) = parser.finish();
    Parse { green, diagnostics }
}
