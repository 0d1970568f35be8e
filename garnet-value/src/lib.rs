pub mod pretty;
pub mod sexp;
pub mod symbol;

pub use sexp::Sexp;
pub use symbol::{Env, Symbol};

use std::fmt;

/// A host value. AST leaves wrap these and serialization produces them.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Nil,
    True,
    False,
    Integer(i64),
    Float(f64),
    String(String),
    Symbol(Symbol),
    Sexp(Sexp),
}

impl Value {
    /// Attempts to cast the `Value` into a `&str` or `None` if wrong type.
    pub fn cast_to_str(&self) -> Option<&str> {
        match self {
            Self::String(string) => Some(string),
            _ => None,
        }
    }

    pub fn cast_to_integer(&self) -> Option<i64> {
        match self {
            Self::Integer(val) => Some(*val),
            _ => None,
        }
    }

    pub fn cast_to_symbol(&self) -> Option<&Symbol> {
        match self {
            Self::Symbol(symbol) => Some(symbol),
            _ => None,
        }
    }

    pub fn cast_to_sexp(&self) -> Option<&Sexp> {
        match self {
            Self::Sexp(sexp) => Some(sexp),
            _ => None,
        }
    }

    pub fn is_nil(&self) -> bool {
        matches!(self, Self::Nil)
    }
}

impl From<bool> for Value {
    fn from(val: bool) -> Self {
        if val {
            Value::True
        } else {
            Value::False
        }
    }
}

impl From<Symbol> for Value {
    fn from(symbol: Symbol) -> Self {
        Value::Symbol(symbol)
    }
}

impl From<Sexp> for Value {
    fn from(sexp: Sexp) -> Self {
        Value::Sexp(sexp)
    }
}

/// Formats the value the way Ruby's `inspect` does.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Nil => write!(f, "nil"),
            Value::True => write!(f, "true"),
            Value::False => write!(f, "false"),
            Value::Integer(val) => write!(f, "{}", val),
            Value::Float(val) => fmt_float(f, *val),
            Value::String(val) => fmt_string(f, val),
            Value::Symbol(symbol) => write!(f, "{}", symbol),
            Value::Sexp(sexp) => write!(f, "{}", sexp),
        }
    }
}

/// Ruby switches to exponent notation outside `1e-4 <= |val| < 1e16`, e.g. `1.0e+20`.
fn fmt_float(f: &mut fmt::Formatter<'_>, val: f64) -> fmt::Result {
    if val.is_nan() {
        return write!(f, "NaN");
    }
    if val.is_sign_negative() {
        write!(f, "-")?;
    }
    let val = val.abs();
    if val.is_infinite() {
        return write!(f, "Infinity");
    }

    // shortest round-tripping digits, e.g. `1.2345e2`
    let scientific = format!("{:e}", val);
    let (mantissa, exponent) = match scientific.split_once('e') {
        Some((mantissa, exponent)) => (mantissa, exponent.parse::<i32>().unwrap_or(0)),
        None => (scientific.as_str(), 0),
    };
    let digits: String = mantissa.chars().filter(|c| *c != '.').collect();

    if exponent < -4 || exponent > 15 {
        let mantissa = if mantissa.contains('.') {
            mantissa.to_string()
        } else {
            format!("{}.0", mantissa)
        };
        let sign = if exponent < 0 { '-' } else { '+' };
        return write!(f, "{}e{}{:02}", mantissa, sign, exponent.abs());
    }

    if exponent < 0 {
        let zeros = "0".repeat((-exponent - 1) as usize);
        write!(f, "0.{}{}", zeros, digits)
    } else {
        let point = exponent as usize + 1;
        if digits.len() <= point {
            write!(f, "{}{}.0", digits, "0".repeat(point - digits.len()))
        } else {
            write!(f, "{}.{}", &digits[..point], &digits[point..])
        }
    }
}

/// Double quoted with Ruby's escapes. Other control characters become `\uXXXX`.
fn fmt_string(f: &mut fmt::Formatter<'_>, val: &str) -> fmt::Result {
    write!(f, "\"")?;
    let mut chars = val.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '"' => write!(f, "\\\"")?,
            '\\' => write!(f, "\\\\")?,
            '\n' => write!(f, "\\n")?,
            '\t' => write!(f, "\\t")?,
            '\r' => write!(f, "\\r")?,
            '\u{0c}' => write!(f, "\\f")?,
            '\u{0b}' => write!(f, "\\v")?,
            '\u{08}' => write!(f, "\\b")?,
            '\u{07}' => write!(f, "\\a")?,
            '\u{1b}' => write!(f, "\\e")?,
            // `#{`, `#$` and `#@` would interpolate
            '#' if matches!(chars.peek(), Some('{') | Some('$') | Some('@')) => {
                write!(f, "\\#")?
            }
            c if c.is_control() => write!(f, "\\u{:04X}", c as u32)?,
            c => write!(f, "{}", c)?,
        }
    }
    write!(f, "\"")
}
