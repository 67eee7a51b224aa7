use std::{collections::HashMap, rc::Rc};

use crate::{
    ast::Block,
    error::RuntimeError,
    interpreter::{evaluator::builtin::BuiltinDef, value::environment::SharedEnv},
};

/// Represents a runtime value in the interpreter.
///
/// This enum models the closed set of types a program can produce. Compound
/// payloads sit behind `Rc`, so binding or passing a value shares it rather
/// than copying it; nothing at the language level mutates a value in place,
/// and identity only changes by rebinding a name.
#[derive(Debug, Clone)]
pub enum Value {
    /// A 64-bit signed integer. Arithmetic wraps on overflow.
    Integer(i64),
    /// A boolean value (`true` or `false`).
    Bool(bool),
    /// The null value, produced by an `if` whose condition fails with no
    /// `else` branch, and by function bodies that end without a value.
    Null,
    /// A string of raw bytes. `+` concatenates; no other operator applies.
    Str(Rc<str>),
    /// An array of values. Elements may be of mixed kinds.
    Array(Rc<Vec<Value>>),
    /// A hash map from hashable keys to arbitrary values.
    Hash(Rc<HashMap<HashKey, Value>>),
    /// A user function closed over the environment it was defined in.
    Function(Rc<Function>),
    /// A native function from the built-in table.
    Builtin(&'static BuiltinDef),
    /// Carrier wrapping the operand of `return` while it travels out of
    /// nested blocks. Unwrapped by the program and by function calls; never
    /// visible as a program result.
    Return(Rc<Value>),
}

/// A user-defined function value: its parameters, its body, and the
/// environment it captured at the point of definition.
///
/// Calls bind arguments in a fresh environment whose outer scope is the
/// captured one, which is what makes closures work: the defining
/// environment stays reachable for as long as the function value lives.
#[derive(Clone)]
pub struct Function {
    /// Parameter names, in declaration order.
    pub parameters: Vec<String>,
    /// The function body.
    pub body:       Block,
    /// The defining environment.
    pub env:        SharedEnv,
}

// The captured environment may itself hold this function, so the derived
// Debug impl would recurse forever. Print everything but the environment.
impl std::fmt::Debug for Function {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Function")
         .field("parameters", &self.parameters)
         .field("body", &self.body)
         .finish_non_exhaustive()
    }
}

/// The value kinds usable as hash keys: integers, booleans and strings.
///
/// `HashKey` is the hashable projection of [`Value`], in the same way a set
/// element type projects a value enum that cannot itself implement `Hash`.
/// Converting any other kind is a runtime error.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum HashKey {
    /// An integer key.
    Integer(i64),
    /// A boolean key.
    Bool(bool),
    /// A string key.
    Str(Rc<str>),
}

impl TryFrom<&Value> for HashKey {
    type Error = RuntimeError;

    fn try_from(value: &Value) -> Result<Self, RuntimeError> {
        match value {
            Value::Integer(n) => Ok(Self::Integer(*n)),
            Value::Bool(b) => Ok(Self::Bool(*b)),
            Value::Str(s) => Ok(Self::Str(Rc::clone(s))),
            other => Err(RuntimeError::UnusableHashKey { kind: other.kind() }),
        }
    }
}

impl std::fmt::Display for HashKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Integer(n) => write!(f, "{n}"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Str(s) => write!(f, "{s}"),
        }
    }
}

impl Value {
    /// Returns the diagnostic name of this value's kind, as used in runtime
    /// error messages.
    ///
    /// # Example
    /// ```
    /// use aspen::interpreter::value::core::Value;
    ///
    /// assert_eq!(Value::Integer(1).kind(), "Integer");
    /// assert_eq!(Value::Null.kind(), "Null");
    /// ```
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Integer(_) => "Integer",
            Self::Bool(_) => "Boolean",
            Self::Null => "Null",
            Self::Str(_) => "String",
            Self::Array(_) => "Array",
            Self::Hash(_) => "Hash",
            Self::Function(_) => "Function",
            Self::Builtin(_) => "BuiltIn",
            Self::Return(_) => "ReturnValue",
        }
    }

    /// Tells whether this value steers an `if` into its consequence branch.
    ///
    /// Integers are truthy when non-zero, booleans are themselves, and
    /// every other kind is falsy.
    #[must_use]
    pub const fn is_truthy(&self) -> bool {
        match self {
            Self::Integer(n) => *n != 0,
            Self::Bool(b) => *b,
            _ => false,
        }
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::Str(value.into())
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::Str(value.into())
    }
}

impl From<Vec<Self>> for Value {
    fn from(value: Vec<Self>) -> Self {
        Self::Array(Rc::new(value))
    }
}

/// Structural equality over values of the same kind. Functions and
/// built-ins never compare equal, not even to themselves; reference
/// identity is not exposed.
impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Integer(left), Self::Integer(right)) => left == right,
            (Self::Bool(left), Self::Bool(right)) => left == right,
            (Self::Null, Self::Null) => true,
            (Self::Str(left), Self::Str(right)) => left == right,
            (Self::Array(left), Self::Array(right)) => left == right,
            (Self::Hash(left), Self::Hash(right)) => left == right,
            (Self::Return(left), Self::Return(right)) => left == right,
            _ => false,
        }
    }
}

impl std::fmt::Display for Value {
    /// Writes the printable form of the value: integers in decimal, strings
    /// as their raw bytes, arrays as `[1,2,3,]`, hashes as `[k: v,]` in
    /// sorted key order, functions as `fn(params) { body }`.
    ///
    /// # Example
    /// ```
    /// use aspen::interpreter::value::core::Value;
    ///
    /// let array = Value::from(vec![Value::from(1), Value::from(2)]);
    ///
    /// assert_eq!(array.to_string(), "[1,2,]");
    /// assert_eq!(Value::Null.to_string(), "null");
    /// ```
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Integer(n) => write!(f, "{n}"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Null => write!(f, "null"),
            Self::Str(s) => write!(f, "{s}"),
            Self::Array(elements) => {
                write!(f, "[")?;
                for element in elements.iter() {
                    write!(f, "{element},")?;
                }
                write!(f, "]")
            },
            Self::Hash(table) => {
                // Key order in the map is arbitrary; sort so the printed
                // form is stable.
                let mut pairs: Vec<_> = table.iter().collect();
                pairs.sort_by(|(left, _), (right, _)| left.cmp(right));

                write!(f, "[")?;
                for (key, value) in pairs {
                    write!(f, "{key}: {value},")?;
                }
                write!(f, "]")
            },
            Self::Function(function) => {
                write!(f, "fn({}) {}", function.parameters.join(", "), function.body)
            },
            Self::Builtin(_) => write!(f, "builtin function"),
            Self::Return(inner) => write!(f, "{inner}"),
        }
    }
}
