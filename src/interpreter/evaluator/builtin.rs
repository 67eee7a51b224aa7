use std::rc::Rc;

use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::core::{EvalResult, apply_function},
        value::core::Value,
    },
};

/// Type alias for builtin function handlers.
///
/// A builtin receives its evaluated arguments by value and returns a fresh
/// result; none of the builtins mutate their inputs.
pub type BuiltinFn = fn(Vec<Value>) -> EvalResult<Value>;

/// Defines the builtin functions by generating their lookup table.
///
/// Each entry provides a name, the exact number of arguments the builtin
/// accepts, and a function pointer implementing it. Arity is checked at the
/// call site before the pointer is invoked.
macro_rules! builtin_functions {
    (
        $(
            $name:literal => {
                arity: $arity:expr,
                func: $func:expr $(,)?
            }
        ),* $(,)?
    ) => {
        /// A named native function and the argument count it expects.
        #[derive(Debug)]
        pub struct BuiltinDef {
            /// Name the function is registered under.
            pub name:  &'static str,
            /// Exact number of arguments the function takes.
            pub arity: usize,
            /// The native implementation.
            pub func:  BuiltinFn,
        }
        static BUILTIN_TABLE: &[BuiltinDef] = &[
            $(
                BuiltinDef { name: $name, arity: $arity, func: $func },
            )*
        ];
    };
}

builtin_functions! {
    "len"   => { arity: 1, func: len },
    "first" => { arity: 1, func: first },
    "last"  => { arity: 1, func: last },
    "rest"  => { arity: 1, func: rest },
    "push"  => { arity: 2, func: push },
    "map"   => { arity: 2, func: map },
}

/// Resolves a name against the builtin table.
///
/// Consulted by identifier evaluation only after the environment chain has
/// been exhausted, so a user binding named `len` shadows the builtin.
#[must_use]
pub fn lookup(name: &str) -> Option<Value> {
    BUILTIN_TABLE.iter()
                 .find(|builtin| builtin.name == name)
                 .map(Value::Builtin)
}

/// `len(x)`: byte count of a string, element count of an array.
fn len(arguments: Vec<Value>) -> EvalResult<Value> {
    match arguments.as_slice() {
        [Value::Str(s)] => Ok(Value::Integer(i64::try_from(s.len()).unwrap_or(i64::MAX))),
        [Value::Array(elements)] => {
            Ok(Value::Integer(i64::try_from(elements.len()).unwrap_or(i64::MAX)))
        },
        [other] => Err(argument_not_supported("len", other)),
        _ => Err(RuntimeError::WrongNumberOfArguments),
    }
}

/// `first(array)`: the head element.
fn first(arguments: Vec<Value>) -> EvalResult<Value> {
    match arguments.as_slice() {
        [Value::Array(elements)] => {
            elements.first()
                    .cloned()
                    .ok_or_else(|| empty_array("first"))
        },
        [other] => Err(argument_not_supported("first", other)),
        _ => Err(RuntimeError::WrongNumberOfArguments),
    }
}

/// `last(array)`: the tail element.
fn last(arguments: Vec<Value>) -> EvalResult<Value> {
    match arguments.as_slice() {
        [Value::Array(elements)] => {
            elements.last()
                    .cloned()
                    .ok_or_else(|| empty_array("last"))
        },
        [other] => Err(argument_not_supported("last", other)),
        _ => Err(RuntimeError::WrongNumberOfArguments),
    }
}

/// `rest(array)`: a new array holding everything but the head.
fn rest(arguments: Vec<Value>) -> EvalResult<Value> {
    match arguments.as_slice() {
        [Value::Array(elements)] => {
            if elements.is_empty() {
                return Err(empty_array("rest"));
            }
            Ok(Value::Array(Rc::new(elements[1..].to_vec())))
        },
        [other] => Err(argument_not_supported("rest", other)),
        _ => Err(RuntimeError::WrongNumberOfArguments),
    }
}

/// `push(array, value)`: a new array with `value` appended. The input
/// array is left untouched.
fn push(arguments: Vec<Value>) -> EvalResult<Value> {
    match arguments.as_slice() {
        [Value::Array(elements), value] => {
            let mut extended = elements.as_ref().clone();
            extended.push(value.clone());
            Ok(Value::Array(Rc::new(extended)))
        },
        [other, _] => Err(argument_not_supported("push", other)),
        _ => Err(RuntimeError::WrongNumberOfArguments),
    }
}

/// `map(array, fn)`: a new array of `fn(element)` for each element, in
/// order. The mapper must be a user function of one parameter; the first
/// failing application aborts the whole map.
fn map(arguments: Vec<Value>) -> EvalResult<Value> {
    match arguments.as_slice() {
        [Value::Array(elements), mapper @ Value::Function(function)] => {
            if function.parameters.len() != 1 {
                return Err(RuntimeError::InvalidArgument {
                    details: "map expects a function of one argument".to_string(),
                });
            }
            let mut mapped = Vec::with_capacity(elements.len());
            for element in elements.iter() {
                mapped.push(apply_function(mapper, vec![element.clone()])?);
            }
            Ok(Value::Array(Rc::new(mapped)))
        },
        [Value::Array(_), other] => Err(RuntimeError::InvalidArgument {
            details: format!("map expects a function of one argument, got {}", other.kind()),
        }),
        [other, _] => Err(argument_not_supported("map", other)),
        _ => Err(RuntimeError::WrongNumberOfArguments),
    }
}

fn argument_not_supported(name: &str, argument: &Value) -> RuntimeError {
    RuntimeError::InvalidArgument { details: format!("argument to {name} not supported: {}",
                                                     argument.kind()), }
}

fn empty_array(name: &str) -> RuntimeError {
    RuntimeError::InvalidArgument { details: format!("{name} of empty array") }
}
