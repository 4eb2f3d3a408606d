pub mod env;
pub mod error;
pub mod eval;
pub mod expr;
pub mod json;
pub mod value;


use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

pub use env::Env;
pub use error::Error;
pub use eval::evaluate;
pub use expr::{Expression, Keyword};
pub use value::Value;

/// An evaluation session. It owns the root environment; every evaluation
/// runs against an explicit scope, and the root is built once per session.
pub struct Interpreter {
    root: Rc<RefCell<Env>>,
}

impl Interpreter {
    pub fn new() -> Interpreter { Interpreter { root: Env::new_root() } }

    pub fn with_globals(globals: HashMap<String, Value>) -> Interpreter {
        Interpreter { root: Env::new(globals, None) }
    }

    pub fn root(&self) -> &Rc<RefCell<Env>> { &self.root }

    pub fn run(&self, expression: &Expression) -> Result<Value, Error> { evaluate(expression, &self.root) }
}

impl Default for Interpreter {
    fn default() -> Self { Interpreter::new() }
}
