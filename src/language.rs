//! Syntax kinds for constant expressions.
//!
//! `SyntaxKind` tags every token the tokenizer can produce. Literal kinds
//! carry the hint the evaluators need: integer, float, character, string
//! and their wide variants.

/// Every token kind in a constant expression.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[expect(non_camel_case_types, reason = "token naming mirrors grammar terminals")]
pub enum SyntaxKind {
    // Trivia
    T_WHITESPACE,
    T_COMMENT,
    // Literals
    T_INT,
    T_FLOAT,
    T_CHAR,
    T_WIDE_CHAR,
    T_STRING,
    T_WIDE_STRING,
    // Punctuation
    T_PLUS,
    T_MINUS,
    T_COMMA,
    T_LBRACE,
    T_RBRACE,
    // Special
    N_ERROR,
}

impl SyntaxKind {
    /// Returns `true` for whitespace and comments.
    #[must_use]
    pub const fn is_trivia(self) -> bool {
        matches!(self, Self::T_WHITESPACE | Self::T_COMMENT)
    }

    /// Returns `true` for numeric literal tokens, the only ones a sign may
    /// precede.
    #[must_use]
    pub const fn is_numeric(self) -> bool {
        matches!(self, Self::T_INT | Self::T_FLOAT)
    }

    /// Returns `true` for any literal token.
    #[must_use]
    pub const fn is_literal(self) -> bool {
        matches!(
            self,
            Self::T_INT
                | Self::T_FLOAT
                | Self::T_CHAR
                | Self::T_WIDE_CHAR
                | Self::T_STRING
                | Self::T_WIDE_STRING
        )
    }
}
