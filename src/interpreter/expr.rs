use std::fmt;

use phf::phf_map;
use serde::{Deserialize, Serialize};

use crate::interpreter::error::Error;
use crate::unsupported;

#[derive(PartialEq, Eq, Clone, Copy, Debug, Hash, Serialize, Deserialize)]
#[serde(into = "String")]
#[serde(try_from = "String")]
pub enum Keyword {
    Add,
    Subtract,
    Multiply,
    Divide,
    GreaterThan,
    GreaterEqual,
    LessThan,
    LessEqual,
    Equal,
    Let,
    Set,
    Begin,
    If,
    While,
}

pub static KEYWORDS: phf::Map<&'static str, Keyword> = phf_map! {
    "+" => Keyword::Add,
    "-" => Keyword::Subtract,
    "*" => Keyword::Multiply,
    "/" => Keyword::Divide,
    ">" => Keyword::GreaterThan,
    ">=" => Keyword::GreaterEqual,
    "<" => Keyword::LessThan,
    "<=" => Keyword::LessEqual,
    "=" => Keyword::Equal,
    "let" => Keyword::Let,
    "set" => Keyword::Set,
    "begin" => Keyword::Begin,
    "if" => Keyword::If,
    "while" => Keyword::While,
};

impl Keyword {
    pub fn token(&self) -> &'static str {
        match self {
            Keyword::Add => "+",
            Keyword::Subtract => "-",
            Keyword::Multiply => "*",
            Keyword::Divide => "/",
            Keyword::GreaterThan => ">",
            Keyword::GreaterEqual => ">=",
            Keyword::LessThan => "<",
            Keyword::LessEqual => "<=",
            Keyword::Equal => "=",
            Keyword::Let => "let",
            Keyword::Set => "set",
            Keyword::Begin => "begin",
            Keyword::If => "if",
            Keyword::While => "while",
        }
    }
}

impl From<Keyword> for String {
    fn from(keyword: Keyword) -> String { keyword.token().to_string() }
}

impl TryFrom<String> for Keyword {
    type Error = String;

    fn try_from(token: String) -> Result<Keyword, String> {
        KEYWORDS.get(token.as_str()).copied().ok_or_else(|| format!("unknown keyword: {:?}", token))
    }
}

impl fmt::Display for Keyword {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result { write!(f, "{}", self.token()) }
}

/// An already-parsed expression tree. `StringLiteral` keeps the quote
/// delimiters of its external representation; they are stripped on evaluation.
#[derive(PartialEq, Clone)]
pub enum Expression {
    Number(i64),
    StringLiteral(String),
    Identifier(String),
    Form { head: Keyword, operands: Vec<Expression> },
}

/// True iff the token is a quote-delimited string literal.
pub fn is_string_literal_token(token: &str) -> bool {
    token.len() >= 2 && token.starts_with('"') && token.ends_with('"')
}

// Keywords are reserved words, so `let`, `while` etc. never classify as
// identifiers even though they match the letter/digit/underscore pattern.
pub fn is_identifier_token(token: &str) -> bool {
    if KEYWORDS.contains_key(token) {
        return false;
    }
    let mut chars = token.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() => chars.all(|c| c.is_ascii_alphanumeric() || c == '_'),
        _ => false,
    }
}

impl Expression {
    /// Classify a bare token into a string literal or an identifier.
    pub fn atom(token: &str) -> Result<Expression, Error> {
        if is_string_literal_token(token) {
            Ok(Expression::StringLiteral(token.to_string()))
        } else if is_identifier_token(token) {
            Ok(Expression::Identifier(token.to_string()))
        } else {
            unsupported!("not a string literal or identifier: {:?}", token)
        }
    }

    pub fn is_number(&self) -> bool { matches!(self, Expression::Number(_)) }

    pub fn is_string_literal(&self) -> bool {
        matches!(self, Expression::StringLiteral(text) if is_string_literal_token(text))
    }

    pub fn is_identifier(&self) -> bool {
        matches!(self, Expression::Identifier(name) if is_identifier_token(name))
    }

    pub fn is_form(&self, keyword: Keyword) -> bool {
        matches!(self, Expression::Form { head, .. } if *head == keyword)
    }

    pub fn is_addition(&self) -> bool { self.is_form(Keyword::Add) }

    pub fn is_subtraction(&self) -> bool { self.is_form(Keyword::Subtract) }

    pub fn is_multiplication(&self) -> bool { self.is_form(Keyword::Multiply) }

    pub fn is_division(&self) -> bool { self.is_form(Keyword::Divide) }

    pub fn is_greater_than(&self) -> bool { self.is_form(Keyword::GreaterThan) }

    pub fn is_greater_equal(&self) -> bool { self.is_form(Keyword::GreaterEqual) }

    pub fn is_less_than(&self) -> bool { self.is_form(Keyword::LessThan) }

    pub fn is_less_equal(&self) -> bool { self.is_form(Keyword::LessEqual) }

    pub fn is_equal(&self) -> bool { self.is_form(Keyword::Equal) }

    pub fn is_let(&self) -> bool { self.is_form(Keyword::Let) }

    pub fn is_set(&self) -> bool { self.is_form(Keyword::Set) }

    pub fn is_block(&self) -> bool { self.is_form(Keyword::Begin) }

    pub fn is_conditional(&self) -> bool { self.is_form(Keyword::If) }

    pub fn is_while(&self) -> bool { self.is_form(Keyword::While) }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Expression::Number(n) => write!(f, "{}", n),
            Expression::StringLiteral(text) => write!(f, "{}", text),
            Expression::Identifier(name) => write!(f, "{}", name),
            Expression::Form { head, operands } => {
                write!(f, "({}", head.token())?;
                for operand in operands {
                    write!(f, " {}", operand)?;
                }
                write!(f, ")")
            }
        }
    }
}

impl fmt::Debug for Expression {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result { write!(f, "{}", self) }
}
