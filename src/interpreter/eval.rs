use std::cell::RefCell;
use std::rc::Rc;

use tracing::trace;

use crate::interpreter::env::Env;
use crate::interpreter::error::Error;
use crate::interpreter::expr::{self, Expression, Keyword};
use crate::interpreter::value::Value;
use crate::unsupported;

/// Reduce an expression to a value in the given scope.
pub fn evaluate(expression: &Expression, scope: &Rc<RefCell<Env>>) -> Result<Value, Error> {
    match expression {
        Expression::Number(n) => Ok(Value::Integer(*n)),
        Expression::StringLiteral(text) => {
            if !expr::is_string_literal_token(text) {
                unsupported!("malformed string literal: {:?}", text);
            }
            Ok(Value::String(text[1..text.len() - 1].to_string()))
        }
        Expression::Identifier(name) => Env::lookup(scope, name),
        Expression::Form { head, operands } => evaluate_form(*head, operands, scope),
    }
}

fn evaluate_form(head: Keyword, operands: &[Expression], scope: &Rc<RefCell<Env>>) -> Result<Value, Error> {
    trace!("({} ...) with {} operand(s)", head, operands.len());
    match head {
        Keyword::Add => {
            let (lhs, rhs) = evaluate_pair(head, operands, scope)?;
            lhs + rhs
        }
        Keyword::Subtract => {
            let (lhs, rhs) = evaluate_pair(head, operands, scope)?;
            lhs - rhs
        }
        Keyword::Multiply => {
            let (lhs, rhs) = evaluate_pair(head, operands, scope)?;
            lhs * rhs
        }
        Keyword::Divide => {
            let (lhs, rhs) = evaluate_pair(head, operands, scope)?;
            lhs / rhs
        }

        Keyword::GreaterThan => {
            let (lhs, rhs) = evaluate_pair(head, operands, scope)?;
            lhs.greater_than(&rhs)
        }
        Keyword::GreaterEqual => {
            let (lhs, rhs) = evaluate_pair(head, operands, scope)?;
            lhs.greater_equal(&rhs)
        }
        Keyword::LessThan => {
            let (lhs, rhs) = evaluate_pair(head, operands, scope)?;
            lhs.less_than(&rhs)
        }
        Keyword::LessEqual => {
            let (lhs, rhs) = evaluate_pair(head, operands, scope)?;
            lhs.less_equal(&rhs)
        }
        Keyword::Equal => {
            let (lhs, rhs) = evaluate_pair(head, operands, scope)?;
            lhs.equal(&rhs)
        }

        // `let` defines in the current scope, shadowing any outer binding.
        Keyword::Let => match operands {
            [Expression::Identifier(name), value] => {
                let value = evaluate(value, scope)?;
                scope.borrow_mut().define(name.clone(), value.clone());
                Ok(value)
            }
            _ => unsupported!("`let` expects an identifier and a value, got {} operand(s)", operands.len()),
        },

        // `set` mutates the nearest enclosing binding; it never creates one.
        Keyword::Set => match operands {
            [Expression::Identifier(name), value] => {
                let value = evaluate(value, scope)?;
                Env::assign(scope, name, value.clone())?;
                Ok(value)
            }
            _ => unsupported!("`set` expects an identifier and a value, got {} operand(s)", operands.len()),
        },

        // A block runs in a fresh child scope; its bindings do not survive it.
        Keyword::Begin => {
            let block_scope = Env::new_child(scope.clone());
            evaluate_sequence(operands, &block_scope)
        }

        Keyword::If => match operands {
            [condition, consequent, alternate] => {
                if evaluate(condition, scope)?.is_truthy() {
                    evaluate(consequent, scope)
                } else {
                    evaluate(alternate, scope)
                }
            }
            _ => unsupported!("`if` expects a condition and two branches, got {} operand(s)", operands.len()),
        },

        Keyword::While => match operands {
            [condition, body] => {
                let mut result = Value::Unit;
                while evaluate(condition, scope)?.is_truthy() {
                    result = evaluate(body, scope)?;
                }
                Ok(result)
            }
            _ => unsupported!("`while` expects a condition and a body, got {} operand(s)", operands.len()),
        },
    }
}

// Binary operators: both operands are always evaluated, left before right.
fn evaluate_pair(head: Keyword, operands: &[Expression], scope: &Rc<RefCell<Env>>) -> Result<(Value, Value), Error> {
    match operands {
        [lhs, rhs] => Ok((evaluate(lhs, scope)?, evaluate(rhs, scope)?)),
        _ => unsupported!("`{}` expects 2 operands, got {}", head, operands.len()),
    }
}

/// Evaluate a block's expressions left to right, keeping the most recent
/// value. An empty block produces "no value".
fn evaluate_sequence(expressions: &[Expression], scope: &Rc<RefCell<Env>>) -> Result<Value, Error> {
    let mut result = Value::Unit;
    for expression in expressions {
        result = evaluate(expression, scope)?;
    }
    Ok(result)
}
