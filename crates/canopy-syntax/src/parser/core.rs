//! Parser state machine and the transactional marker primitives.
//!
//! Nodes are not built directly: grammar code records a flat list of
//! [`Event`]s, and [`Parser::finish`] replays them into Rowan's green tree
//! builder. The indirection is what makes full backtracking cheap - a
//! [`Marker`] is a checkpoint over (event length, cursor position,
//! diagnostic count), and `rollback_to` simply truncates all three. No
//! partial state is ever observable after a rollback.
//!
//! Trivia (whitespace, comments) is invisible to the cursor and re-attached
//! during replay, immediately before the next real token. A node that ends
//! up zero-width therefore never captures surrounding trivia: comments ahead
//! of an elided node bind to whichever node owns the next real token.

use std::cell::Cell;

use rowan::{GreenNode, GreenNodeBuilder, TextRange, TextSize};

use super::cst::{SyntaxKind, TokenSet};
use super::lexer::{Token, token_text};
use crate::diagnostics::{DiagnosticKind, Diagnostics};

/// One step of tree construction, replayed in [`Parser::finish`].
#[derive(Debug)]
pub(crate) enum Event {
    /// Opens a node. `forward_parent` points at a later `Start` that must
    /// open first (created by [`CompletedMarker::precede`]).
    Start {
        kind: SyntaxKind,
        forward_parent: Option<usize>,
    },
    /// Consumes the next non-trivia token, with its pending leading trivia.
    Token,
    /// Closes the innermost open node.
    Finish,
    /// An abandoned or rolled-over slot; skipped during replay.
    Tombstone,
}

/// Handle over an open span. Must be finalized exactly once via
/// [`Marker::complete`], [`Marker::abandon`], [`Marker::rollback_to`], or
/// [`Marker::complete_with_error`].
pub(crate) struct Marker {
    event_idx: usize,
    pos: usize,
    diag_len: usize,
    last_diagnostic_pos: Option<TextSize>,
    finalized: bool,
}

impl Marker {
    /// Closes the span, labels it `kind`, folds it into the enclosing span.
    pub(crate) fn complete(mut self, p: &mut Parser<'_>, kind: SyntaxKind) -> CompletedMarker {
        self.finalized = true;
        p.events[self.event_idx] = Event::Start {
            kind,
            forward_parent: None,
        };
        p.events.push(Event::Finish);
        CompletedMarker {
            event_idx: self.event_idx,
        }
    }

    /// Discards the marker without labeling; tokens consumed since the mark
    /// reattach directly to the enclosing span.
    pub(crate) fn abandon(mut self, p: &mut Parser<'_>) {
        self.finalized = true;
        if self.event_idx == p.events.len() - 1 {
            p.events.pop();
        }
        // Otherwise the Tombstone placeholder stays and is skipped in replay.
    }

    /// Transactional rollback: restores the cursor to the mark position and
    /// erases every token, nested marker, and diagnostic produced since.
    pub(crate) fn rollback_to(mut self, p: &mut Parser<'_>) {
        self.finalized = true;
        p.events.truncate(self.event_idx);
        p.pos = self.pos;
        p.diagnostics.truncate(self.diag_len);
        p.last_diagnostic_pos = self.last_diagnostic_pos;
    }

    /// Closes the span as one `Error` node carrying a single diagnostic that
    /// covers the whole run of consumed tokens. Used to group a stretch of
    /// unparsable input under one message instead of one per token.
    pub(crate) fn complete_with_error(
        self,
        p: &mut Parser<'_>,
        kind: DiagnosticKind,
    ) -> CompletedMarker {
        let start = p
            .tokens
            .get(self.pos)
            .map_or_else(|| p.eof_offset(), |t| t.span.start());
        let end = p.last_non_trivia_end().unwrap_or(start);
        let range = TextRange::new(start, end.max(start));
        p.diagnostics.report(kind, range).emit();
        self.complete(p, SyntaxKind::Error)
    }
}

impl Drop for Marker {
    fn drop(&mut self) {
        if !self.finalized && !std::thread::panicking() {
            panic!("marker dropped without complete/abandon/rollback");
        }
    }
}

/// A closed span that can still be wrapped retroactively.
#[derive(Debug, Clone, Copy)]
pub(crate) struct CompletedMarker {
    event_idx: usize,
}

impl CompletedMarker {
    /// Opens a new marker positioned immediately before this span's start,
    /// used to wrap or relabel an already-parsed region.
    pub(crate) fn precede(self, p: &mut Parser<'_>) -> Marker {
        let new = p.start();
        match &mut p.events[self.event_idx] {
            Event::Start { forward_parent, .. } => *forward_parent = Some(new.event_idx),
            _ => unreachable!("precede target must be a start event"),
        }
        new
    }
}

pub struct Parser<'src> {
    pub(crate) source: &'src str,
    pub(crate) tokens: Vec<Token>,
    /// Raw token index; always positioned at a non-trivia token (or EOF).
    pub(crate) pos: usize,
    pub(crate) events: Vec<Event>,
    pub(crate) diagnostics: Diagnostics,
    last_diagnostic_pos: Option<TextSize>,
    debug_fuel: Cell<u32>,
}

impl<'src> Parser<'src> {
    pub fn new(source: &'src str, tokens: Vec<Token>) -> Self {
        let mut p = Self {
            source,
            tokens,
            pos: 0,
            events: Vec::with_capacity(64),
            diagnostics: Diagnostics::new(),
            last_diagnostic_pos: None,
            debug_fuel: Cell::new(256),
        };
        p.skip_trivia();
        p
    }

    /// Begins a new open span at the current cursor position. No side effect
    /// on the cursor.
    pub(crate) fn start(&mut self) -> Marker {
        let event_idx = self.events.len();
        self.events.push(Event::Tombstone);
        Marker {
            event_idx,
            pos: self.pos,
            diag_len: self.diagnostics.len(),
            last_diagnostic_pos: self.last_diagnostic_pos,
            finalized: false,
        }
    }

    pub(crate) fn eof(&self) -> bool {
        self.pos >= self.tokens.len()
    }

    pub(crate) fn eof_offset(&self) -> TextSize {
        TextSize::from(self.source.len() as u32)
    }

    pub(crate) fn current(&self) -> SyntaxKind {
        self.ensure_progress();
        self.tokens
            .get(self.pos)
            .map_or(SyntaxKind::Error, |t| t.kind)
    }

    /// LL(k) lookahead past trivia. `nth(0)` == `current()`.
    pub(crate) fn nth(&self, n: usize) -> SyntaxKind {
        self.ensure_progress();
        let mut seen = 0;
        let mut pos = self.pos;
        while pos < self.tokens.len() {
            let kind = self.tokens[pos].kind;
            if !kind.is_trivia() {
                if seen == n {
                    return kind;
                }
                seen += 1;
            }
            pos += 1;
        }
        SyntaxKind::Error
    }

    pub(crate) fn at(&self, kind: SyntaxKind) -> bool {
        self.current() == kind
    }

    pub(crate) fn at_set(&self, set: TokenSet) -> bool {
        set.contains(self.current())
    }

    /// Text of the current token; empty at EOF.
    pub(crate) fn current_text(&self) -> &'src str {
        self.tokens
            .get(self.pos)
            .map_or("", |t| token_text(self.source, t))
    }

    pub(crate) fn current_span(&self) -> TextRange {
        self.tokens
            .get(self.pos)
            .map_or_else(|| TextRange::empty(self.eof_offset()), |t| t.span)
    }

    /// Consumes the current token into the tree.
    pub(crate) fn bump(&mut self) {
        assert!(!self.eof(), "bump called at EOF");
        self.debug_fuel.set(256);
        self.events.push(Event::Token);
        self.pos += 1;
        self.skip_trivia();
    }

    pub(crate) fn eat(&mut self, kind: SyntaxKind) -> bool {
        if self.at(kind) {
            self.bump();
            true
        } else {
            false
        }
    }

    /// On mismatch: emit diagnostic but don't consume (parent may handle).
    pub(crate) fn expect(&mut self, kind: SyntaxKind, diagnostic: DiagnosticKind) -> bool {
        if self.eat(kind) {
            return true;
        }
        self.error(diagnostic);
        false
    }

    pub(crate) fn error(&mut self, kind: DiagnosticKind) {
        let range = self.current_span();
        if !self.should_report(range.start()) {
            return;
        }
        self.diagnostics.report(kind, range).emit();
    }

    pub(crate) fn error_msg(&mut self, kind: DiagnosticKind, message: impl Into<String>) {
        let range = self.current_span();
        if !self.should_report(range.start()) {
            return;
        }
        self.diagnostics.report(kind, range).message(message).emit();
    }

    /// End offset of the last consumed non-trivia token.
    pub(crate) fn last_non_trivia_end(&self) -> Option<TextSize> {
        self.tokens[..self.pos]
            .iter()
            .rev()
            .find(|t| !t.kind.is_trivia())
            .map(|t| t.span.end())
    }

    /// Replays the recorded events into a green tree. Every raw token,
    /// trivia included, is emitted exactly once in document order.
    pub(crate) fn finish(self) -> (GreenNode, Diagnostics) {
        let Parser {
            source,
            tokens,
            mut events,
            diagnostics,
            ..
        } = self;

        let mut builder = GreenNodeBuilder::new();
        let mut cursor = 0usize;
        let mut depth = 0u32;
        let mut forward_parents: Vec<SyntaxKind> = Vec::new();

        let emit = |builder: &mut GreenNodeBuilder<'_>, token: &Token| {
            builder.token(token.kind.into(), token_text(source, token));
        };

        for i in 0..events.len() {
            match std::mem::replace(&mut events[i], Event::Tombstone) {
                Event::Start {
                    kind,
                    forward_parent,
                } => {
                    // Collect the forward-parent chain; outermost wrappers
                    // were recorded last, so they open in reverse order.
                    forward_parents.push(kind);
                    let mut next = forward_parent;
                    while let Some(idx) = next {
                        match std::mem::replace(&mut events[idx], Event::Tombstone) {
                            Event::Start {
                                kind,
                                forward_parent,
                            } => {
                                forward_parents.push(kind);
                                next = forward_parent;
                            }
                            _ => unreachable!("forward parent must be a start event"),
                        }
                    }
                    for kind in forward_parents.drain(..).rev() {
                        builder.start_node(kind.into());
                        depth += 1;
                    }
                }
                Event::Finish => {
                    depth -= 1;
                    if depth == 0 {
                        // Trailing trivia belongs inside the root.
                        while cursor < tokens.len() {
                            debug_assert!(tokens[cursor].kind.is_trivia());
                            emit(&mut builder, &tokens[cursor]);
                            cursor += 1;
                        }
                    }
                    builder.finish_node();
                }
                Event::Token => {
                    while tokens[cursor].kind.is_trivia() {
                        emit(&mut builder, &tokens[cursor]);
                        cursor += 1;
                    }
                    emit(&mut builder, &tokens[cursor]);
                    cursor += 1;
                }
                Event::Tombstone => {}
            }
        }

        (builder.finish(), diagnostics)
    }

    fn skip_trivia(&mut self) {
        while self.pos < self.tokens.len() && self.tokens[self.pos].kind.is_trivia() {
            self.pos += 1;
        }
    }

    /// One diagnostic per position: a probe that re-parses after commit, or a
    /// rule that both expects and recovers, must not double-report.
    fn should_report(&mut self, pos: TextSize) -> bool {
        if self.last_diagnostic_pos == Some(pos) {
            return false;
        }
        self.last_diagnostic_pos = Some(pos);
        true
    }

    #[inline]
    fn ensure_progress(&self) {
        assert!(
            self.debug_fuel.get() != 0,
            "parser is stuck: too many lookaheads"
        );
        self.debug_fuel.set(self.debug_fuel.get() - 1);
    }
}
