use std::{cell::RefCell, collections::HashMap, rc::Rc};

use crate::interpreter::value::core::Value;

/// Shared handle to an [`Environment`].
///
/// Environments are shared between the evaluator and every closure that
/// captured them, so they live behind `Rc<RefCell<_>>`. A function value
/// holding its defining environment can end up stored inside that same
/// environment; the resulting cycle is tolerated, since an interpreter run
/// is short-lived.
pub type SharedEnv = Rc<RefCell<Environment>>;

/// A mapping from names to values with an optional outer scope.
///
/// Lookups walk outward through the chain until the name is found or the
/// chain is exhausted. Insertions only ever touch the innermost scope:
/// there is no assignment to an outer frame, and an inner binding shadows
/// an outer one without replacing it.
///
/// # Example
/// ```
/// use aspen::interpreter::value::{core::Value, environment::Environment};
///
/// let globals = Environment::global();
/// globals.borrow_mut().set("x", Value::Integer(1));
///
/// let inner = Environment::enclosed(globals.clone());
/// inner.borrow_mut().set("y", Value::Integer(2));
///
/// assert_eq!(inner.borrow().get("x"), Some(Value::Integer(1)));
/// assert_eq!(globals.borrow().get("y"), None);
/// ```
#[derive(Debug, Default)]
pub struct Environment {
    bindings: HashMap<String, Value>,
    outer:    Option<SharedEnv>,
}

impl Environment {
    /// Creates a fresh root environment with no outer scope.
    #[must_use]
    pub fn global() -> SharedEnv {
        Rc::new(RefCell::new(Self::default()))
    }

    /// Creates an environment nested inside `outer`.
    ///
    /// This is how function calls get their frame: the new environment
    /// holds the parameter bindings, and lookups that miss fall through to
    /// the function's captured scope.
    #[must_use]
    pub fn enclosed(outer: SharedEnv) -> SharedEnv {
        Rc::new(RefCell::new(Self { bindings: HashMap::new(),
                                    outer:    Some(outer), }))
    }

    /// Looks up a name, walking outward through the scope chain.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<Value> {
        if let Some(value) = self.bindings.get(name) {
            return Some(value.clone());
        }
        self.outer.as_ref().and_then(|outer| outer.borrow().get(name))
    }

    /// Binds a name in this scope, shadowing any outer binding of the same
    /// name.
    pub fn set(&mut self, name: impl Into<String>, value: Value) {
        self.bindings.insert(name.into(), value);
    }
}
