//! The grammar: which handler parses an expression starting with, or continued by, a token type.

use super::*;

/// Null denotation. Parses an expression that starts with the current token.
pub(crate) type PrefixHandler<'a> = fn(&mut Parser<'a>, &mut Locals) -> ParseResult<Node>;
/// Left denotation. Continues the already parsed left hand side with the current token.
pub(crate) type InfixHandler<'a> = fn(&mut Parser<'a>, Node, &mut Locals) -> ParseResult<Node>;

pub(crate) fn prefix_handler<'a>(token_type: TokenType) -> Option<PrefixHandler<'a>> {
    let handler: PrefixHandler<'a> = match token_type {
        TokenType::Def => Parser::parse_def,
        TokenType::True | TokenType::False => Parser::parse_bool,
        TokenType::Nil => Parser::parse_nil,
        TokenType::Identifier => Parser::parse_identifier,
        TokenType::LParen => Parser::parse_group,
        TokenType::Integer | TokenType::Float => Parser::parse_lit,
        TokenType::Symbol => Parser::parse_symbol,
        TokenType::String => Parser::parse_string,
        _ => return None,
    };
    Some(handler)
}

/// Only consulted for tokens whose precedence is above the current minimum.
pub(crate) fn infix_handler<'a>(token_type: TokenType) -> Option<InfixHandler<'a>> {
    let handler: InfixHandler<'a> = match token_type {
        TokenType::Equal => Parser::parse_assignment_expression,
        TokenType::LParen => Parser::parse_call_expression_with_parens,
        TokenType::Plus
        | TokenType::Minus
        | TokenType::Multiply
        | TokenType::Divide
        | TokenType::EqualEqual
        | TokenType::LessThan
        | TokenType::LessThanOrEqual
        | TokenType::GreaterThan
        | TokenType::GreaterThanOrEqual => Parser::parse_infix_expression,
        // only reached when signed, see `Token::precedence`
        TokenType::Integer | TokenType::Float => Parser::parse_signed_literal_expression,
        TokenType::Dot => Parser::parse_send_expression,
        TokenType::TernaryQuestion => Parser::parse_ternary_expression,
        _ => return None,
    };
    Some(handler)
}

/// Returns `true` if `token` can start the first argument of a call written without parentheses (`puts 1`).
/// A signed number is excluded so that `a -1` stays a subtraction.
pub(crate) fn begins_bare_argument(token: &Token) -> bool {
    match token.token_type {
        TokenType::Identifier
        | TokenType::String
        | TokenType::Symbol
        | TokenType::True
        | TokenType::False
        | TokenType::Nil => true,
        TokenType::Integer | TokenType::Float => !token.has_sign,
        _ => false,
    }
}
