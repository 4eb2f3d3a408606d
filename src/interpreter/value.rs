use std::fmt;

use serde::{Deserialize, Serialize};

use crate::interpreter::error::Error;
use crate::type_mismatch;

#[derive(PartialEq, Clone, Serialize, Deserialize)]
#[serde(tag = "type", content = "value")]
pub enum Value {
    Integer(i64),
    Boolean(bool),
    String(String),

    /// The "no value" result of an empty block or a loop whose body never ran.
    Unit,
}

impl std::ops::Add for Value {
    type Output = Result<Value, Error>;

    fn add(self, rhs: Self) -> Self::Output {
        match (self, rhs) {
            (Value::Integer(a), Value::Integer(b)) => match a.checked_add(b) {
                Some(n) => Ok(Value::Integer(n)),
                None => type_mismatch!("cannot `+` {} and {}, result overflows", a, b),
            },
            (a, b) => type_mismatch!("cannot `+` {:?} and {:?}", a, b),
        }
    }
}

impl std::ops::Sub for Value {
    type Output = Result<Value, Error>;

    fn sub(self, rhs: Self) -> Self::Output {
        match (self, rhs) {
            (Value::Integer(a), Value::Integer(b)) => match a.checked_sub(b) {
                Some(n) => Ok(Value::Integer(n)),
                None => type_mismatch!("cannot `-` {} and {}, result overflows", a, b),
            },
            (a, b) => type_mismatch!("cannot `-` {:?} and {:?}", a, b),
        }
    }
}

impl std::ops::Mul for Value {
    type Output = Result<Value, Error>;

    fn mul(self, rhs: Self) -> Self::Output {
        match (self, rhs) {
            (Value::Integer(a), Value::Integer(b)) => match a.checked_mul(b) {
                Some(n) => Ok(Value::Integer(n)),
                None => type_mismatch!("cannot `*` {} and {}, result overflows", a, b),
            },
            (a, b) => type_mismatch!("cannot `*` {:?} and {:?}", a, b),
        }
    }
}

impl std::ops::Div for Value {
    type Output = Result<Value, Error>;

    // Truncating integer division. checked_div also rejects MIN / -1,
    // whose quotient does not fit in an i64.
    fn div(self, rhs: Self) -> Self::Output {
        match (self, rhs) {
            (Value::Integer(_), Value::Integer(0)) => Err(Error::DivisionByZero),
            (Value::Integer(a), Value::Integer(b)) => match a.checked_div(b) {
                Some(n) => Ok(Value::Integer(n)),
                None => type_mismatch!("cannot `/` {} and {}, result overflows", a, b),
            },
            (a, b) => type_mismatch!("cannot `/` {:?} and {:?}", a, b),
        }
    }
}

impl Value {
    pub fn greater_than(&self, rhs: &Value) -> Result<Value, Error> {
        match (self, rhs) {
            (Value::Integer(a), Value::Integer(b)) => Ok(Value::Boolean(a > b)),
            (a, b) => type_mismatch!("cannot `>` {:?} and {:?}", a, b),
        }
    }

    pub fn greater_equal(&self, rhs: &Value) -> Result<Value, Error> {
        match (self, rhs) {
            (Value::Integer(a), Value::Integer(b)) => Ok(Value::Boolean(a >= b)),
            (a, b) => type_mismatch!("cannot `>=` {:?} and {:?}", a, b),
        }
    }

    pub fn less_than(&self, rhs: &Value) -> Result<Value, Error> {
        match (self, rhs) {
            (Value::Integer(a), Value::Integer(b)) => Ok(Value::Boolean(a < b)),
            (a, b) => type_mismatch!("cannot `<` {:?} and {:?}", a, b),
        }
    }

    pub fn less_equal(&self, rhs: &Value) -> Result<Value, Error> {
        match (self, rhs) {
            (Value::Integer(a), Value::Integer(b)) => Ok(Value::Boolean(a <= b)),
            (a, b) => type_mismatch!("cannot `<=` {:?} and {:?}", a, b),
        }
    }

    pub fn equal(&self, rhs: &Value) -> Result<Value, Error> {
        match (self, rhs) {
            (Value::Integer(a), Value::Integer(b)) => Ok(Value::Boolean(a == b)),
            (a, b) => type_mismatch!("cannot `=` {:?} and {:?}", a, b),
        }
    }

    // Only `false` and "no value" are falsy; zero and "" are truthy.
    pub fn is_truthy(&self) -> bool { !matches!(self, Value::Boolean(false) | Value::Unit) }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Value::Integer(n) => write!(f, "{}", n),
            Value::Boolean(b) => write!(f, "{}", b),
            Value::String(s) => write!(f, "{}", s),
            Value::Unit => write!(f, "nil"),
        }
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Value::String(s) => write!(f, "\"{}\"", s),
            _ => write!(f, "{}", self),
        }
    }
}
