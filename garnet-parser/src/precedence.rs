//! Binding precedence of tokens.

use crate::lexer::{Token, TokenType};

/// Precedence levels, weakest first. The derived `Ord` is the binding order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Precedence {
    Lowest,
    Ternary,
    Assignment,
    Equality,
    LessGreater,
    Sum,
    Product,
    Dot,
    Prefix,
    Call,
}

impl Token {
    /// Returns the precedence with which this token continues an expression.
    /// Depends on nothing but the token itself.
    pub fn precedence(&self) -> Precedence {
        match self.token_type {
            TokenType::Plus | TokenType::Minus => Precedence::Sum,
            // a signed literal after an operand continues it as `+`/`-`, an unsigned one never does
            TokenType::Integer | TokenType::Float => {
                if self.has_sign {
                    Precedence::Sum
                } else {
                    Precedence::Lowest
                }
            }
            TokenType::Multiply | TokenType::Divide => Precedence::Product,
            TokenType::Equal => Precedence::Assignment,
            TokenType::EqualEqual => Precedence::Equality,
            TokenType::LessThan
            | TokenType::LessThanOrEqual
            | TokenType::GreaterThan
            | TokenType::GreaterThanOrEqual => Precedence::LessGreater,
            TokenType::LParen => Precedence::Call,
            TokenType::Dot => Precedence::Dot,
            TokenType::TernaryQuestion | TokenType::TernaryColon => Precedence::Ternary,
            _ => Precedence::Lowest,
        }
    }
}
