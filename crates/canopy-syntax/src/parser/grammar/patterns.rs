//! The pattern sub-grammar: type-test, parenthesized, and record
//! deconstruction patterns, reusable from any pattern context.
//!
//! Callers always probe with [`Parser::is_pattern`] before committing to
//! [`Parser::parse_pattern`]. The probe is a full speculative parse that is
//! unconditionally rolled back, so total work per call site is bounded by
//! twice one successful parse.

use super::WHEN_KEYWORD;
use crate::diagnostics::DiagnosticKind;
use crate::parser::Parser;
use crate::parser::core::{CompletedMarker, Marker};
use crate::parser::cst::SyntaxKind;
use crate::parser::cst::token_sets::PATTERN_MODIFIERS;

impl Parser<'_> {
    /// Pure feasibility probe: speculatively parses modifiers + type +
    /// (binding identifier | component list opener), then rolls everything
    /// back. True iff a type reference is followed by an identifier, or by
    /// `(` with no modifier present. Leaves no observable residue.
    pub(crate) fn is_pattern(&mut self) -> bool {
        let m = self.start();
        let feasible = self.try_pattern();
        m.rollback_to(self);
        feasible
    }

    fn try_pattern(&mut self) -> bool {
        while self.at(SyntaxKind::LParen) {
            self.bump();
        }
        let had_modifiers = self.parse_modifier_list(PATTERN_MODIFIERS).is_some();
        if self.parse_type_ref().is_none() {
            return false;
        }
        self.at(SyntaxKind::Ident) || (self.at(SyntaxKind::LParen) && !had_modifiers)
    }

    /// Builds one pattern. Precondition: [`Parser::is_pattern`] would return
    /// true at this position (not re-checked).
    pub(crate) fn parse_pattern(&mut self) -> CompletedMarker {
        self.parse_primary_pattern()
    }

    fn parse_primary_pattern(&mut self) -> CompletedMarker {
        if self.at(SyntaxKind::LParen) {
            let m = self.start();
            self.bump();
            self.parse_primary_pattern();
            self.expect(SyntaxKind::RParen, DiagnosticKind::ExpectedRParen);
            return m.complete(self, SyntaxKind::ParenthesizedPattern);
        }
        self.parse_type_or_deconstruction_pattern()
    }

    fn parse_type_or_deconstruction_pattern(&mut self) -> CompletedMarker {
        let m = self.start();
        let had_modifiers = self.parse_modifier_list(PATTERN_MODIFIERS).is_some();

        if self.parse_type_ref().is_none() {
            // Only reachable when the caller skipped the probe.
            self.error(DiagnosticKind::ExpectedPattern);
            return m.complete(self, SyntaxKind::TypeTestPattern);
        }

        if self.at(SyntaxKind::LParen) && !had_modifiers {
            self.parse_deconstruction_list();
            // An identifier spelled `when` is NOT a binding here: after a
            // deconstruction pattern it introduces the guard clause. After a
            // plain type test the same spelling binds as an ordinary name.
            // The truly ambiguous case is unsupported upstream as well.
            if self.at(SyntaxKind::Ident) && self.current_text() != WHEN_KEYWORD {
                let v = self.start();
                self.bump();
                v.complete(self, SyntaxKind::DeconstructionPatternVariable);
            }
            return m.complete(self, SyntaxKind::DeconstructionPattern);
        }

        if self.at(SyntaxKind::Ident) {
            let v = self.start();
            self.bump();
            v.complete(self, SyntaxKind::PatternVariable);
        }
        m.complete(self, SyntaxKind::TypeTestPattern)
    }

    /// `(component, component, ...)` with each component one of: unnamed
    /// `_`, a nested pattern (probed first), or a best-effort bare type.
    fn parse_deconstruction_list(&mut self) {
        let m = self.start();
        self.bump(); // '('
        loop {
            if self.eof() || self.at(SyntaxKind::RParen) {
                break;
            }
            self.parse_deconstruction_component();
            if self.eof() || self.at(SyntaxKind::RParen) {
                break;
            }
            self.expect(SyntaxKind::Comma, DiagnosticKind::ExpectedComma);
        }
        self.expect(SyntaxKind::RParen, DiagnosticKind::ExpectedRParen);
        m.complete(self, SyntaxKind::DeconstructionList);
    }

    fn parse_deconstruction_component(&mut self) {
        // The unnamed wildcard is checked before anything else.
        if self.at(SyntaxKind::Underscore) {
            let u = self.start();
            self.bump();
            u.complete(self, SyntaxKind::UnnamedPattern);
            return;
        }
        if self.is_pattern() {
            self.parse_pattern();
            return;
        }
        // Not a pattern: a bare type still yields a usable partial tree.
        self.error(DiagnosticKind::ExpectedPattern);
        if self.parse_type_ref().is_none() {
            // Guaranteed progress: swallow one token as an error.
            let e = self.start();
            self.bump();
            e.complete(self, SyntaxKind::Error);
        }
    }

    /// Root production for the standalone pattern entry point: one pattern,
    /// then any trailing tokens grouped under a single error.
    pub(crate) fn parse_pattern_fragment(&mut self) {
        let m = self.start();
        if self.is_pattern() {
            self.parse_pattern();
        } else if !self.eof() {
            self.error(DiagnosticKind::ExpectedPattern);
        }
        let mut pending: Option<Marker> = None;
        while !self.eof() {
            if pending.is_none() {
                pending = Some(self.start());
            }
            self.bump();
        }
        if let Some(run) = pending {
            run.complete_with_error(self, DiagnosticKind::UnexpectedToken);
        }
        m.complete(self, SyntaxKind::Fragment);
    }
}
