//! File-level structure: package clause, import list, declaration sequence.
//!
//! This level never gives up. Unrecognized tokens accumulate into pending
//! runs that close as a single grouped error once something recognizable
//! (or EOF) is reached, so a file of pure garbage degrades to one
//! file-spanning error node instead of a diagnostic per token.

use crate::diagnostics::DiagnosticKind;
use crate::parser::Parser;
use crate::parser::core::Marker;
use crate::parser::cst::{SyntaxKind, TokenSet};

impl Parser<'_> {
    pub(crate) fn parse_file(&mut self) {
        let m = self.start();
        self.parse_package_clause();
        self.parse_import_list(|p| p.at_type_declaration_start());
        self.parse_declarations();
        m.complete(self, SyntaxKind::JavaFile);
    }

    /// Speculative: an annotation-only modifier list may precede `package`.
    /// When the keyword is absent the whole attempt rolls back, leaving no
    /// node at all (the annotations belong to the first declaration).
    fn parse_package_clause(&mut self) {
        let m = self.start();
        self.parse_modifier_list(TokenSet::EMPTY);
        if !self.at(SyntaxKind::KwPackage) {
            m.rollback_to(self);
            return;
        }
        self.bump();
        if self.parse_qualified_name(false).is_none() {
            self.error(DiagnosticKind::ExpectedIdentifier);
        }
        self.expect(SyntaxKind::Semicolon, DiagnosticKind::ExpectedSemicolon);
        m.complete(self, SyntaxKind::PackageStatement);
    }

    /// Imports until `stop` says the first non-import construct begins.
    /// Stray `;` tokens are consumed silently; anything else unrecognized
    /// joins a pending run closed as one grouped error. A list with zero
    /// imports is rolled back and re-emitted as a zero-width node so it
    /// occupies no text range - trivia replay then binds any comments that
    /// preceded it to the first real declaration instead.
    pub(crate) fn parse_import_list(&mut self, stop: impl Fn(&Parser<'_>) -> bool) {
        let m = self.start();
        let mut pending: Option<Marker> = None;
        let mut imports = 0usize;

        while !self.eof() {
            if self.at(SyntaxKind::KwImport) {
                self.close_pending(&mut pending);
                self.parse_import_statement();
                imports += 1;
                continue;
            }
            if self.at(SyntaxKind::Semicolon) {
                self.close_pending(&mut pending);
                self.bump();
                continue;
            }
            if stop(self) {
                break;
            }
            if pending.is_none() {
                pending = Some(self.start());
            }
            self.bump();
        }
        self.close_pending(&mut pending);

        if imports == 0 {
            m.rollback_to(self);
            let empty = self.start();
            empty.complete(self, SyntaxKind::ImportList);
        } else {
            m.complete(self, SyntaxKind::ImportList);
        }
    }

    fn parse_import_statement(&mut self) {
        let m = self.start();
        self.bump(); // 'import'
        let is_static = self.eat(SyntaxKind::KwStatic);
        if self.parse_qualified_name(true).is_none() {
            self.error(DiagnosticKind::ExpectedIdentifier);
        }
        self.expect(SyntaxKind::Semicolon, DiagnosticKind::ExpectedSemicolon);
        let kind = if is_static {
            SyntaxKind::ImportStaticStatement
        } else {
            SyntaxKind::ImportStatement
        };
        m.complete(self, kind);
    }

    fn parse_declarations(&mut self) {
        let mut pending: Option<Marker> = None;
        while !self.eof() {
            if self.at(SyntaxKind::Semicolon) {
                self.close_pending(&mut pending);
                self.bump();
                continue;
            }
            if self.at_type_declaration_start() {
                self.close_pending(&mut pending);
                if self.parse_type_declaration() {
                    continue;
                }
            }
            if pending.is_none() {
                pending = Some(self.start());
            }
            self.bump();
        }
        self.close_pending(&mut pending);
    }

    fn close_pending(&mut self, pending: &mut Option<Marker>) {
        if let Some(run) = pending.take() {
            run.complete_with_error(self, DiagnosticKind::UnexpectedToken);
        }
    }
}
