//! Cynix: a tree-walking evaluator for a minimal S-expression language.
//!
//! There is no lexer or parser here; input arrives as an already-parsed
//! [`Expression`] tree (or as its JSON rendition, see [`interpreter::json`]).
//! Evaluation is a single recursive pass over the tree against a lexical
//! scope chain of [`Env`]s.

pub mod interpreter;

pub use interpreter::{evaluate, Env, Error, Expression, Interpreter, Keyword, Value};
