use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;

use crate::interpreter::error::Error;
use crate::interpreter::value::Value;

#[derive(PartialEq)]
pub struct Env {
    pub parent: Option<Rc<RefCell<Env>>>,
    pub values: HashMap<String, Value>,
}

impl fmt::Debug for Env {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.parent {
            Some(ref parent) => write!(f, "<Env {:?}>", parent.borrow()),
            None => write!(f, "<Env>"),
        }
    }
}

impl Env {
    pub fn new(values: HashMap<String, Value>, parent: Option<Rc<RefCell<Env>>>) -> Rc<RefCell<Env>> {
        Rc::new(RefCell::new(Env { parent, values }))
    }

    pub fn new_root() -> Rc<RefCell<Env>> { Env::new(HashMap::new(), None) }

    pub fn new_child(parent: Rc<RefCell<Env>>) -> Rc<RefCell<Env>> { Env::new(HashMap::new(), Some(parent)) }

    // Define a variable at the current level.
    // A definition shadows a same-named binding at a higher level; it never
    // touches it.
    pub fn define(&mut self, name: String, value: Value) { self.values.insert(name, value); }

    /// Assign to an existing variable at any level in the chain, nearest
    /// enclosing binding first. Never creates a binding.
    pub fn assign(scope: &Rc<RefCell<Env>>, name: &str, value: Value) -> Result<(), Error> {
        let mut current = scope.clone();
        loop {
            if current.borrow().values.contains_key(name) {
                current.borrow_mut().values.insert(name.to_string(), value);
                return Ok(());
            }
            let parent = current.borrow().parent.clone();
            match parent {
                Some(parent) => current = parent,
                None => return Err(Error::AssignmentToUndefinedVariable(name.to_string())),
            }
        }
    }

    /// Look a variable up, walking the chain from the innermost scope outward.
    pub fn lookup(scope: &Rc<RefCell<Env>>, name: &str) -> Result<Value, Error> {
        let mut current = scope.clone();
        loop {
            if let Some(value) = current.borrow().values.get(name) {
                return Ok(value.clone());
            }
            let parent = current.borrow().parent.clone();
            match parent {
                Some(parent) => current = parent,
                None => return Err(Error::UndefinedVariable(name.to_string())),
            }
        }
    }
}
