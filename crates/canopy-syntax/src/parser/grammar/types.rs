//! Type reference surface: just enough structure to delimit patterns and
//! the dotted references in package/import statements. The full type grammar
//! lives with the expression parser, outside this crate.

use crate::diagnostics::DiagnosticKind;
use crate::parser::Parser;
use crate::parser::core::CompletedMarker;
use crate::parser::cst::SyntaxKind;
use crate::parser::cst::token_sets::PRIMITIVE_TYPES;

impl Parser<'_> {
    /// Dotted reference: `a.b.c`, with `a.b.*` allowed for imports.
    /// Returns `None` without consuming anything when not at an identifier.
    pub(crate) fn parse_qualified_name(&mut self, allow_star: bool) -> Option<CompletedMarker> {
        if !self.at(SyntaxKind::Ident) {
            return None;
        }
        let m = self.start();
        self.bump();
        while self.at(SyntaxKind::Dot) {
            match self.nth(1) {
                SyntaxKind::Ident => {
                    self.bump();
                    self.bump();
                }
                SyntaxKind::Star if allow_star => {
                    self.bump();
                    self.bump();
                    break;
                }
                _ => {
                    self.bump();
                    self.error(DiagnosticKind::ExpectedIdentifier);
                    break;
                }
            }
        }
        Some(m.complete(self, SyntaxKind::TypeReference))
    }

    /// Primitive or dotted class type, optional generic arguments, array
    /// dims wrapped retroactively. Returns `None` without consuming anything
    /// when the cursor cannot start a type.
    pub(crate) fn parse_type_ref(&mut self) -> Option<CompletedMarker> {
        let mut result = if self.at_set(PRIMITIVE_TYPES) {
            let m = self.start();
            self.bump();
            m.complete(self, SyntaxKind::TypeReference)
        } else if self.at(SyntaxKind::Ident) {
            let m = self.start();
            self.bump();
            loop {
                if self.at(SyntaxKind::Dot) && self.nth(1) == SyntaxKind::Ident {
                    self.bump();
                    self.bump();
                } else if self.at(SyntaxKind::Lt) {
                    // `Map<K, V>.Entry` keeps looping after the arguments
                    self.parse_type_argument_list();
                } else {
                    break;
                }
            }
            m.complete(self, SyntaxKind::TypeReference)
        } else {
            return None;
        };

        while self.at(SyntaxKind::LBracket) && self.nth(1) == SyntaxKind::RBracket {
            let m = result.precede(self);
            self.bump();
            self.bump();
            result = m.complete(self, SyntaxKind::ArrayType);
        }
        Some(result)
    }

    /// `<...>` consumed by angle-bracket depth, bailing at tokens that can
    /// only mean the argument list was left unclosed.
    fn parse_type_argument_list(&mut self) {
        let m = self.start();
        self.bump(); // '<'
        let mut depth = 1u32;
        while !self.eof() {
            match self.current() {
                SyntaxKind::Lt => {
                    depth += 1;
                    self.bump();
                }
                SyntaxKind::Gt => {
                    depth -= 1;
                    self.bump();
                    if depth == 0 {
                        break;
                    }
                }
                SyntaxKind::Semicolon
                | SyntaxKind::LParen
                | SyntaxKind::RParen
                | SyntaxKind::LBrace
                | SyntaxKind::RBrace => break,
                _ => self.bump(),
            }
        }
        m.complete(self, SyntaxKind::TypeArgumentList);
    }
}
