//! Constant-expression nodes.
//!
//! A [`ConstExpr`] pairs an evaluated [`Constant`] with the source span of
//! the literal it came from, sign included. Later phases read these nodes
//! but never mutate them.

use crate::Span;
use crate::literal::{CharWidth, FloatConstant, IntegerConstant, StringConstant};

/// The evaluated value of a literal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Constant {
    /// An integer literal narrowed through the tier table.
    Int(IntegerConstant),
    /// A floating literal typed single or double precision.
    Float(FloatConstant),
    /// A character literal's single code unit.
    Char(IntegerConstant),
    /// A string literal's code units, zero terminated.
    Str(StringConstant),
}

impl Constant {
    /// Render the constant as a compact S-expression.
    ///
    /// ```
    /// use litfold::config::IntType;
    /// use litfold::literal::IntegerConstant;
    /// use litfold::parser::ast::Constant;
    ///
    /// let constant = Constant::Int(IntegerConstant::new(IntType::unsigned(8), 255));
    /// assert_eq!(constant.to_sexpr(), "(u8 255)");
    /// ```
    #[must_use]
    pub fn to_sexpr(&self) -> String {
        match self {
            Self::Int(int) => int.to_string(),
            Self::Float(float) => float.to_string(),
            Self::Char(ch) => format!("(char {} {})", ch.ty(), ch.bits()),
            Self::Str(string) => {
                let prefix = match string.width() {
                    CharWidth::Narrow => "str",
                    CharWidth::Wide => "wstr",
                };
                let units: Vec<String> = string.units().iter().map(u32::to_string).collect();
                format!("({prefix} {})", units.join(" "))
            }
        }
    }
}

/// An evaluated literal with its source span.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConstExpr {
    span: Span,
    value: Constant,
}

impl ConstExpr {
    pub(crate) fn new(span: Span, value: Constant) -> Self {
        Self { span, value }
    }

    /// Byte range of the literal, including any leading sign.
    #[must_use]
    pub fn span(&self) -> &Span {
        &self.span
    }

    #[must_use]
    pub fn value(&self) -> &Constant {
        &self.value
    }
}
