//! Top-level declaration surface: modifier lists, annotations, and the
//! class/interface/enum/record headers with balanced-brace bodies. Member
//! parsing is out of scope; bodies are preserved token-for-token.

use super::RECORD_KEYWORD;
use crate::diagnostics::DiagnosticKind;
use crate::parser::Parser;
use crate::parser::core::CompletedMarker;
use crate::parser::cst::token_sets::{DECLARATION_KEYWORDS, MODIFIER_KEYWORDS};
use crate::parser::cst::{SyntaxKind, TokenSet};

impl Parser<'_> {
    /// Keyword modifiers from `keywords` plus annotations. An empty list is
    /// abandoned rather than left as a zero-width node.
    pub(crate) fn parse_modifier_list(&mut self, keywords: TokenSet) -> Option<CompletedMarker> {
        let m = self.start();
        let mut any = false;
        loop {
            if self.at_set(keywords) {
                self.bump();
                any = true;
            } else if self.at(SyntaxKind::At) && self.nth(1) != SyntaxKind::KwInterface {
                self.parse_annotation();
                any = true;
            } else {
                break;
            }
        }
        if any {
            Some(m.complete(self, SyntaxKind::ModifierList))
        } else {
            m.abandon(self);
            None
        }
    }

    /// `@Name`, `@a.b.Name`, optionally with a balanced `(...)` argument
    /// blob. Argument expressions are preserved as raw tokens.
    pub(crate) fn parse_annotation(&mut self) {
        let m = self.start();
        self.bump(); // '@'
        if self.at(SyntaxKind::Ident) {
            self.bump();
            while self.at(SyntaxKind::Dot) && self.nth(1) == SyntaxKind::Ident {
                self.bump();
                self.bump();
            }
        } else {
            self.error(DiagnosticKind::ExpectedIdentifier);
        }
        if self.at(SyntaxKind::LParen) {
            self.bump();
            let mut depth = 1u32;
            while !self.eof() {
                match self.current() {
                    SyntaxKind::LParen => depth += 1,
                    SyntaxKind::RParen => {
                        depth -= 1;
                        if depth == 0 {
                            break;
                        }
                    }
                    _ => {}
                }
                self.bump();
            }
            self.expect(SyntaxKind::RParen, DiagnosticKind::ExpectedRParen);
        }
        m.complete(self, SyntaxKind::Annotation);
    }

    pub(crate) fn at_type_declaration_start(&self) -> bool {
        self.at_set(MODIFIER_KEYWORDS)
            || self.at(SyntaxKind::At)
            || self.at_set(DECLARATION_KEYWORDS)
            || self.at_contextual_record()
    }

    fn at_contextual_record(&self) -> bool {
        self.at(SyntaxKind::Ident)
            && self.current_text() == RECORD_KEYWORD
            && self.nth(1) == SyntaxKind::Ident
    }

    /// Parses one type declaration. Returns false only when nothing at all
    /// was consumed (the caller then advances to guarantee progress).
    pub(crate) fn parse_type_declaration(&mut self) -> bool {
        let m = self.start();
        let had_modifiers = self.parse_modifier_list(MODIFIER_KEYWORDS).is_some();

        if self.at_set(DECLARATION_KEYWORDS) {
            self.bump();
        } else if self.at(SyntaxKind::At) && self.nth(1) == SyntaxKind::KwInterface {
            self.bump();
            self.bump();
        } else if self.at_contextual_record() {
            self.bump();
        } else {
            // Dangling modifier list: keep it in the tree as a top-level
            // construct of its own and let the caller resume.
            self.error(DiagnosticKind::ExpectedDeclaration);
            m.abandon(self);
            return had_modifiers;
        }

        self.expect(SyntaxKind::Ident, DiagnosticKind::ExpectedIdentifier);
        self.parse_declaration_header();
        if self.at(SyntaxKind::LBrace) {
            self.parse_class_body();
        } else {
            self.error(DiagnosticKind::ExpectedLBrace);
        }
        m.complete(self, SyntaxKind::ClassDeclaration);
        true
    }

    /// Everything between the name and the body (type parameters, extends,
    /// implements, record components) is preserved as raw tokens.
    fn parse_declaration_header(&mut self) {
        while !self.eof() {
            match self.current() {
                SyntaxKind::LBrace
                | SyntaxKind::RBrace
                | SyntaxKind::Semicolon
                | SyntaxKind::KwClass
                | SyntaxKind::KwInterface
                | SyntaxKind::KwEnum
                | SyntaxKind::KwPackage
                | SyntaxKind::KwImport => break,
                _ => self.bump(),
            }
        }
    }

    fn parse_class_body(&mut self) {
        let m = self.start();
        self.bump(); // '{'
        let mut depth = 1u32;
        loop {
            if self.eof() {
                self.error(DiagnosticKind::UnclosedBody);
                break;
            }
            match self.current() {
                SyntaxKind::LBrace => depth += 1,
                SyntaxKind::RBrace => {
                    depth -= 1;
                    if depth == 0 {
                        break;
                    }
                }
                _ => {}
            }
            self.bump();
        }
        self.eat(SyntaxKind::RBrace);
        m.complete(self, SyntaxKind::ClassBody);
    }
}
