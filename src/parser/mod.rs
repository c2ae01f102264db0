//! Parser for literal constant expressions.
//!
//! This module turns source text such as `-128`, `0x7AB7`, `L'x'` or a
//! brace-enclosed initializer list into evaluated [`ConstExpr`] nodes. The
//! tokenizer guarantees well-formed literal text; the parser strips signs
//! and quotes, hands the remainder to the evaluators in [`crate::literal`],
//! and turns their errors into positioned diagnostics. A range error on one
//! element of an initializer list does not stop the remaining elements from
//! being evaluated.

use chumsky::error::Simple;

use crate::config::TierTable;
use crate::literal::{
    CharWidth, NumberConstant, Sign, evaluate_char_literal, evaluate_number,
    evaluate_string_literal,
};
use crate::{Span, SyntaxKind, tokenize_without_trivia};

pub mod ast;
mod token_stream;

use ast::{ConstExpr, Constant};
use token_stream::TokenStream;

/// Result of parsing an initializer.
#[derive(Debug)]
pub struct Parsed {
    constants: Vec<ConstExpr>,
    errors: Vec<Simple<SyntaxKind>>,
}

impl Parsed {
    /// Constants that evaluated successfully, in source order.
    #[must_use]
    pub fn constants(&self) -> &[ConstExpr] {
        &self.constants
    }

    /// Diagnostics collected during parsing and evaluation.
    #[must_use]
    pub fn errors(&self) -> &[Simple<SyntaxKind>] {
        &self.errors
    }
}

/// Parse and evaluate a single, optionally signed, literal.
///
/// # Errors
/// Returns every diagnostic when the source is not exactly one literal or
/// the literal fails to evaluate.
#[must_use = "discarding the Result will ignore parse errors"]
pub fn parse_constant(src: &str, tiers: &TierTable) -> Result<ConstExpr, Vec<Simple<SyntaxKind>>> {
    let mut parser = ConstParser::new(tokenize_without_trivia(src).into_iter(), src, tiers);
    let expr = parser.parse_element();
    parser.ts.drain_unexpected_tokens();
    match expr {
        Some(expr) if parser.ts.errors.is_empty() => Ok(expr),
        _ => Err(parser.ts.errors),
    }
}

/// Parse an initializer: a single literal or a brace-enclosed list.
///
/// List elements are separated by commas and may end with a trailing comma.
/// Elements that fail to evaluate are reported and skipped.
///
/// # Examples
///
/// ```
/// use litfold::config::TierTable;
/// use litfold::parser::parse_initializer;
///
/// let parsed = parse_initializer("{ 1, -1, 1.5, 'a' }", &TierTable::default());
/// assert!(parsed.errors().is_empty());
/// let rendered: Vec<String> = parsed
///     .constants()
///     .iter()
///     .map(|c| c.value().to_sexpr())
///     .collect();
/// assert_eq!(rendered, ["(u8 1)", "(i8 -1)", "(f32 0x3fc00000)", "(char u8 97)"]);
/// ```
#[must_use]
pub fn parse_initializer(src: &str, tiers: &TierTable) -> Parsed {
    let mut parser = ConstParser::new(tokenize_without_trivia(src).into_iter(), src, tiers);
    let constants = if parser.ts.peek_kind() == Some(SyntaxKind::T_LBRACE) {
        parser.parse_list()
    } else {
        parser.parse_element().into_iter().collect()
    };
    parser.ts.drain_unexpected_tokens();
    Parsed {
        constants,
        errors: parser.ts.errors,
    }
}

struct ConstParser<'a, I>
where
    I: Iterator<Item = (SyntaxKind, Span)>,
{
    ts: TokenStream<'a, I>,
    tiers: &'a TierTable,
}

impl<'a, I> ConstParser<'a, I>
where
    I: Iterator<Item = (SyntaxKind, Span)>,
{
    fn new(tokens: I, src: &'a str, tiers: &'a TierTable) -> Self {
        Self {
            ts: TokenStream::new(tokens, src),
            tiers,
        }
    }

    fn parse_list(&mut self) -> Vec<ConstExpr> {
        self.ts.next_tok(); // '{' already peeked
        let mut items = Vec::new();
        loop {
            match self.ts.peek_kind() {
                Some(SyntaxKind::T_RBRACE) => {
                    self.ts.next_tok();
                    break;
                }
                None => {
                    self.ts.expect(SyntaxKind::T_RBRACE);
                    break;
                }
                Some(_) => {}
            }
            match self.parse_element() {
                Some(item) => items.push(item),
                None => self
                    .ts
                    .skip_until(&[SyntaxKind::T_COMMA, SyntaxKind::T_RBRACE]),
            }
            if !matches!(
                self.ts.peek_kind(),
                Some(SyntaxKind::T_COMMA | SyntaxKind::T_RBRACE) | None
            ) {
                self.ts.expect(SyntaxKind::T_COMMA);
                self.ts
                    .skip_until(&[SyntaxKind::T_COMMA, SyntaxKind::T_RBRACE]);
            }
            if self.ts.peek_kind() == Some(SyntaxKind::T_COMMA) {
                self.ts.next_tok();
            }
        }
        items
    }

    fn parse_element(&mut self) -> Option<ConstExpr> {
        let Some((kind, span)) = self.ts.next_tok() else {
            self.ts.push_error(self.ts.eof_span(), "expected a constant");
            return None;
        };
        let sign = match kind {
            SyntaxKind::T_PLUS => Sign::Plus,
            SyntaxKind::T_MINUS => Sign::Minus,
            _ => return self.evaluate(Sign::None, kind, span.clone(), span),
        };
        let Some((literal_kind, literal_span)) = self.ts.next_tok() else {
            self.ts
                .push_error(self.ts.eof_span(), "expected a numeric literal after sign");
            return None;
        };
        if !literal_kind.is_numeric() {
            self.ts
                .push_error(literal_span, "a sign must precede a numeric literal");
            return None;
        }
        let full = span.start..literal_span.end;
        self.evaluate(sign, literal_kind, literal_span, full)
    }

    fn evaluate(
        &mut self,
        sign: Sign,
        kind: SyntaxKind,
        text_span: Span,
        full_span: Span,
    ) -> Option<ConstExpr> {
        let text = self.ts.slice(&text_span);
        let value = match kind {
            SyntaxKind::T_INT | SyntaxKind::T_FLOAT => {
                match evaluate_number(sign, text, self.tiers) {
                    Ok(NumberConstant::Int(int)) => Ok(Constant::Int(int)),
                    Ok(NumberConstant::Float(float)) => Ok(Constant::Float(float)),
                    Err(err) => Err(err.to_string()),
                }
            }
            SyntaxKind::T_CHAR | SyntaxKind::T_WIDE_CHAR => {
                let width = width_of(kind);
                quoted_body(text, width, '\'')
                    .and_then(|body| evaluate_char_literal(body, width).map_err(|e| e.to_string()))
                    .map(Constant::Char)
            }
            SyntaxKind::T_STRING | SyntaxKind::T_WIDE_STRING => {
                let width = width_of(kind);
                quoted_body(text, width, '"')
                    .and_then(|body| {
                        evaluate_string_literal(body, width).map_err(|e| e.to_string())
                    })
                    .map(Constant::Str)
            }
            SyntaxKind::N_ERROR => Err(format!("unrecognised input '{text}'")),
            other => Err(format!("expected a constant, found {other:?}")),
        };
        match value {
            Ok(value) => Some(ConstExpr::new(full_span, value)),
            Err(msg) => {
                self.ts.push_error(full_span, msg);
                None
            }
        }
    }
}

fn width_of(kind: SyntaxKind) -> CharWidth {
    if matches!(kind, SyntaxKind::T_WIDE_CHAR | SyntaxKind::T_WIDE_STRING) {
        CharWidth::Wide
    } else {
        CharWidth::Narrow
    }
}

/// Strip the optional `L` prefix and the surrounding quotes.
fn quoted_body(text: &str, width: CharWidth, quote: char) -> Result<&str, String> {
    let unprefixed = match width {
        CharWidth::Wide => text.strip_prefix('L').unwrap_or(text),
        CharWidth::Narrow => text,
    };
    unprefixed
        .strip_prefix(quote)
        .and_then(|rest| rest.strip_suffix(quote))
        .ok_or_else(|| format!("unterminated literal {text}"))
}
