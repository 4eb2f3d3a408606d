use std::fmt;

#[derive(PartialEq, Clone, Debug)]
pub enum Error {
    UnsupportedExpression(String),
    UndefinedVariable(String),
    AssignmentToUndefinedVariable(String),
    DivisionByZero,
    TypeMismatch(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::UnsupportedExpression(what) => write!(f, "unsupported expression: {}", what),
            Error::UndefinedVariable(name) => write!(f, "undefined variable: {:?}", name),
            Error::AssignmentToUndefinedVariable(name) => write!(f, "can't set an undefined variable: {:?}", name),
            Error::DivisionByZero => write!(f, "division by zero"),
            Error::TypeMismatch(what) => write!(f, "type mismatch: {}", what),
        }
    }
}

impl std::error::Error for Error {}

#[macro_export]
macro_rules! unsupported {
    ($($arg:tt)*) => (
        return Err($crate::interpreter::Error::UnsupportedExpression(format!($($arg)*)))
    )
}

#[macro_export]
macro_rules! type_mismatch {
    ($($arg:tt)*) => (
        return Err($crate::interpreter::Error::TypeMismatch(format!($($arg)*)))
    )
}
