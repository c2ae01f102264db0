//! Minimal token stream with error tracking for the constant parser.
//!
//! Provides lookahead, expectation, recovery and span slicing helpers over
//! an iterator of lexical tokens.

use std::iter::Peekable;

use chumsky::error::Simple;
use log::warn;

use crate::{Span, SyntaxKind};

pub(super) struct TokenStream<'a, I>
where
    I: Iterator<Item = (SyntaxKind, Span)>,
{
    iter: Peekable<I>,
    src: &'a str,
    pub(super) errors: Vec<Simple<SyntaxKind>>,
}

impl<'a, I> TokenStream<'a, I>
where
    I: Iterator<Item = (SyntaxKind, Span)>,
{
    pub(super) fn new(iter: I, src: &'a str) -> Self {
        Self {
            iter: iter.peekable(),
            src,
            errors: Vec::new(),
        }
    }

    pub(super) fn next_tok(&mut self) -> Option<(SyntaxKind, Span)> {
        self.iter.next()
    }

    pub(super) fn peek_kind(&mut self) -> Option<SyntaxKind> {
        self.iter.peek().map(|(k, _)| *k)
    }

    pub(super) fn peek_span(&mut self) -> Option<Span> {
        self.iter.peek().map(|(_, sp)| sp.clone())
    }

    pub(super) fn expect(&mut self, kind: SyntaxKind) -> bool {
        if self.peek_kind() == Some(kind) {
            self.next_tok();
            true
        } else {
            let span = self.peek_span().unwrap_or_else(|| self.eof_span());
            self.push_error(span, format!("expected {kind:?}"));
            false
        }
    }

    /// Skip tokens until one of `stops` is next, leaving it unconsumed.
    pub(super) fn skip_until(&mut self, stops: &[SyntaxKind]) {
        while let Some(kind) = self.peek_kind() {
            if stops.contains(&kind) {
                break;
            }
            if let Some((kind, span)) = self.next_tok() {
                warn!("skipping {kind:?} at {span:?} while recovering");
            }
        }
    }

    /// Report every remaining token as unexpected.
    pub(super) fn drain_unexpected_tokens(&mut self) {
        while let Some((kind, span)) = self.next_tok() {
            self.push_error(span, format!("unexpected token: {kind:?}"));
        }
    }

    pub(super) fn push_error(&mut self, span: Span, msg: impl Into<String>) {
        self.errors.push(Simple::custom(span, msg.into()));
    }

    pub(super) fn slice(&self, span: &Span) -> &'a str {
        self.src
            .get(span.clone())
            .unwrap_or_else(|| panic!("lexer produced invalid span"))
    }

    pub(super) fn eof_span(&self) -> Span {
        self.src.len()..self.src.len()
    }
}
