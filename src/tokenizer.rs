//! Lexical analysis for constant expressions.
//!
//! This module exposes `tokenize_with_trivia` and `tokenize_without_trivia`
//! which convert raw source text into a sequence of `(SyntaxKind, Span)`
//! pairs. It uses the `logos` crate to recognise tokens. Integer tokens only
//! match digits valid for their base, so the evaluators never see malformed
//! digit text: an octal literal holding `8` or `9`, such as `089`, lexes as a
//! single `N_ERROR` token. `089.5` is still a float.

use logos::Logos;

use crate::SyntaxKind;

/// Byte range for a token within the source.
pub type Span = std::ops::Range<usize>;

#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
enum Token {
    #[regex(r"[ \t\r\n]+")]
    Whitespace,
    #[regex(r"/\*([^*]|\*[^/])*\*/", priority = 2)]
    #[regex(r"//[^\n]*")]
    Comment,
    #[regex(r"0[xX][0-9a-fA-F]+|0[bB][01]+|0[0-7]*|[1-9][0-9]*")]
    Int,
    #[regex(r"[0-9]+\.[0-9]*|\.[0-9]+")]
    Float,
    #[regex(r"0[0-7]*[89][0-9]*")]
    MalformedOctal,
    #[regex(r"'([^'\\\n]|\\.)*'")]
    Char,
    #[regex(r"L'([^'\\\n]|\\.)*'")]
    WideChar,
    #[regex(r#""([^"\\\n]|\\.)*""#)]
    String,
    #[regex(r#"L"([^"\\\n]|\\.)*""#)]
    WideString,
    #[token("+")]
    Plus,
    #[token("-")]
    Minus,
    #[token(",")]
    Comma,
    #[token("{")]
    LBrace,
    #[token("}")]
    RBrace,
}

#[must_use]
fn tokenize_impl(src: &str) -> Vec<(SyntaxKind, Span)> {
    let mut lexer = Token::lexer(src);
    let mut out = Vec::new();
    while let Some(result) = lexer.next() {
        let span = lexer.span();
        let Ok(token) = result else {
            out.push((SyntaxKind::N_ERROR, span));
            continue;
        };
        let kind = match token {
            Token::MalformedOctal => SyntaxKind::N_ERROR,
            Token::Whitespace => SyntaxKind::T_WHITESPACE,
            Token::Comment => SyntaxKind::T_COMMENT,
            Token::Int => SyntaxKind::T_INT,
            Token::Float => SyntaxKind::T_FLOAT,
            Token::Char => SyntaxKind::T_CHAR,
            Token::WideChar => SyntaxKind::T_WIDE_CHAR,
            Token::String => SyntaxKind::T_STRING,
            Token::WideString => SyntaxKind::T_WIDE_STRING,
            Token::Plus => SyntaxKind::T_PLUS,
            Token::Minus => SyntaxKind::T_MINUS,
            Token::Comma => SyntaxKind::T_COMMA,
            Token::LBrace => SyntaxKind::T_LBRACE,
            Token::RBrace => SyntaxKind::T_RBRACE,
        };
        out.push((kind, span));
    }
    out
}

/// Tokenise the source, excluding whitespace and comments.
///
/// # Examples
///
/// ```rust
/// use litfold::{SyntaxKind, tokenize_without_trivia};
///
/// let tokens = tokenize_without_trivia("{ -1, 2.5 }");
/// assert!(!tokens.iter().any(|(k, _)| k.is_trivia()));
/// assert_eq!(tokens.len(), 6);
/// ```
#[must_use]
pub fn tokenize_without_trivia(src: &str) -> Vec<(SyntaxKind, Span)> {
    tokenize_impl(src)
        .into_iter()
        .filter(|(k, _)| !k.is_trivia())
        .collect()
}

/// Tokenise the source, keeping whitespace and comment tokens.
///
/// # Examples
///
/// ```rust
/// use litfold::{SyntaxKind, tokenize_with_trivia};
///
/// let tokens = tokenize_with_trivia("0x1F /* mask */");
/// assert_eq!(tokens[0].0, SyntaxKind::T_INT);
/// assert_eq!(tokens.len(), 3);
/// ```
#[must_use]
pub fn tokenize_with_trivia(src: &str) -> Vec<(SyntaxKind, Span)> {
    tokenize_impl(src)
}
