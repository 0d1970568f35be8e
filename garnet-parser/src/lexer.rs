use garnet_source::{Position, Source, SyntaxError};
use logos::Logos;
use std::fmt;
use tracing::debug;

#[derive(Debug, Logos, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenType {
    // literals
    // NOTE: a sign glued to the digits is part of the literal (`a -1` lexes as `a`, `-1`)
    #[regex(r"[+-]?[0-9]+")]
    Integer,
    #[regex(r"[+-]?[0-9]+\.[0-9]+")]
    Float,
    #[regex(r#""([^"\\]|\\.)*""#)]
    #[regex(r"'[^']*'")]
    String,
    #[regex(r":[a-zA-Z_][a-zA-Z0-9_]*[?!]?")]
    Symbol,
    #[token("true")]
    True,
    #[token("false")]
    False,
    #[token("nil")]
    Nil,

    // identifiers
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*[?!]?")]
    Identifier,

    // keywords
    #[token("def")]
    Def,
    #[token("end")]
    End,

    // binary operators
    // - arithmetics
    #[token("+")]
    Plus,
    #[token("-")]
    Minus,
    #[token("*")]
    Multiply,
    #[token("/")]
    Divide,
    // - assignment
    #[token("=")]
    Equal,
    // - equality
    #[token("==")]
    EqualEqual,
    // - ordering
    #[token("<")]
    LessThan,
    #[token("<=")]
    LessThanOrEqual,
    #[token(">")]
    GreaterThan,
    #[token(">=")]
    GreaterThanOrEqual,

    // punctuation
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token(",")]
    Comma,
    #[token(".")]
    Dot,
    #[token("?")]
    TernaryQuestion,
    #[token(":")]
    TernaryColon,
    #[token("\n")]
    #[token(";")]
    Eol,

    // misc
    #[regex(r"[ \t\r\f]+", logos::skip)]
    #[regex(r"#[^\n]*", logos::skip)] // line comments
    #[error]
    Error,

    /// Only generated after the last token produced by the lexer.
    Eof,
}

impl TokenType {
    /// The message a binary operator sends to its left operand, or `None` if not a binary operator.
    pub fn operator_name(&self) -> Option<&'static str> {
        match self {
            TokenType::Plus => Some("+"),
            TokenType::Minus => Some("-"),
            TokenType::Multiply => Some("*"),
            TokenType::Divide => Some("/"),
            TokenType::EqualEqual => Some("=="),
            TokenType::LessThan => Some("<"),
            TokenType::LessThanOrEqual => Some("<="),
            TokenType::GreaterThan => Some(">"),
            TokenType::GreaterThanOrEqual => Some(">="),
            _ => None,
        }
    }
}

impl fmt::Display for TokenType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let description = match self {
            TokenType::Integer => "integer",
            TokenType::Float => "float",
            TokenType::String => "string",
            TokenType::Symbol => "symbol",
            TokenType::True => "`true`",
            TokenType::False => "`false`",
            TokenType::Nil => "`nil`",
            TokenType::Identifier => "identifier",
            TokenType::Def => "`def`",
            TokenType::End => "`end`",
            TokenType::Plus => "`+`",
            TokenType::Minus => "`-`",
            TokenType::Multiply => "`*`",
            TokenType::Divide => "`/`",
            TokenType::Equal => "`=`",
            TokenType::EqualEqual => "`==`",
            TokenType::LessThan => "`<`",
            TokenType::LessThanOrEqual => "`<=`",
            TokenType::GreaterThan => "`>`",
            TokenType::GreaterThanOrEqual => "`>=`",
            TokenType::LParen => "`(`",
            TokenType::RParen => "`)`",
            TokenType::Comma => "`,`",
            TokenType::Dot => "`.`",
            TokenType::TernaryQuestion => "`?`",
            TokenType::TernaryColon => "`:`",
            TokenType::Eol => "end-of-line",
            TokenType::Error => "invalid token",
            TokenType::Eof => "end-of-input",
        };
        f.write_str(description)
    }
}

/// A lexed token. Immutable once produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub token_type: TokenType,
    /// Token text. Strings and symbols hold their contents without quotes or colon.
    pub literal: String,
    pub line: usize,
    pub column: usize,
    /// Set for numeric literals written with an explicit `+` or `-`.
    pub has_sign: bool,
}

impl Token {
    pub fn new(token_type: TokenType, literal: impl Into<String>, position: Position) -> Self {
        let literal = literal.into();
        let has_sign = matches!(token_type, TokenType::Integer | TokenType::Float)
            && (literal.starts_with('-') || literal.starts_with('+'));
        Self {
            token_type,
            literal,
            line: position.line,
            column: position.column,
            has_sign,
        }
    }

    pub fn position(&self) -> Position {
        Position::new(self.line, self.column)
    }

    pub fn is_eof(&self) -> bool {
        self.token_type == TokenType::Eof
    }

    /// Human readable form used in error messages.
    pub fn describe(&self) -> String {
        match self.token_type {
            TokenType::Eol | TokenType::Eof => self.token_type.to_string(),
            TokenType::String => format!("string {:?}", self.literal),
            TokenType::Symbol => format!("`:{}`", self.literal),
            _ => format!("`{}`", self.literal),
        }
    }
}

/// Lexes the whole `source` up front.
/// Unrecognised input is reported to `source.errors` and skipped.
/// The returned tokens always end with a [`TokenType::Eof`] token.
pub fn lex(source: &Source) -> Vec<Token> {
    let mut lexer = TokenType::lexer(source.content);
    let mut tokens = Vec::new();

    while let Some(token_type) = lexer.next() {
        let slice = lexer.slice();
        let position = source.position_of(lexer.span().start);
        let literal = match token_type {
            TokenType::Error => {
                let message = if slice.starts_with('"') || slice.starts_with('\'') {
                    "Unterminated string literal".to_string()
                } else {
                    format!("Unexpected character `{}`", slice)
                };
                source
                    .errors
                    .add_error(SyntaxError::new(message, position).with_token(slice));
                continue;
            }
            TokenType::String if slice.starts_with('"') => unescape(&slice[1..slice.len() - 1]),
            TokenType::String => slice[1..slice.len() - 1].to_string(),
            TokenType::Symbol => slice[1..].to_string(),
            _ => slice.to_string(),
        };
        tokens.push(Token::new(token_type, literal, position));
    }

    tokens.push(Token::new(
        TokenType::Eof,
        "",
        source.position_of(source.content.len()),
    ));
    debug!(count = tokens.len(), "lexed source");
    tokens
}

/// Resolves backslash escapes in a double quoted string body.
fn unescape(body: &str) -> String {
    let mut result = String::with_capacity(body.len());
    let mut chars = body.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            result.push(c);
            continue;
        }
        match chars.next() {
            Some('n') => result.push('\n'),
            Some('t') => result.push('\t'),
            Some('0') => result.push('\0'),
            Some(other) => result.push(other),
            None => result.push('\\'),
        }
    }
    result
}
