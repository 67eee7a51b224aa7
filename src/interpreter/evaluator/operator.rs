use crate::{
    ast::{InfixOperator, PrefixOperator},
    error::RuntimeError,
    interpreter::{
        evaluator::core::EvalResult,
        value::core::{HashKey, Value},
    },
};

/// Applies a prefix operator to an evaluated operand.
///
/// `-` negates integers and rejects everything else. `!` negates booleans;
/// applied to any other kind it yields `false`, it does not consult
/// truthiness.
pub fn eval_prefix(op: PrefixOperator, right: &Value) -> EvalResult<Value> {
    match op {
        PrefixOperator::Not => Ok(Value::Bool(match right {
                                      Value::Bool(b) => !b,
                                      _ => false,
                                  })),
        PrefixOperator::Negate => match right {
            Value::Integer(value) => Ok(Value::Integer(value.wrapping_neg())),
            other => Err(RuntimeError::UnknownPrefixOperator { op,
                                                               kind: other.kind() }),
        },
    }
}

/// Applies an infix operator to two evaluated operands.
///
/// Integer pairs get the full arithmetic and comparison set. String pairs
/// support `+` as concatenation. Beyond that, only `==` and `!=` apply,
/// using structural equality; values of different kinds are unequal rather
/// than an error. Every remaining pairing is an operator/type mismatch.
pub fn eval_infix(op: InfixOperator, left: &Value, right: &Value) -> EvalResult<Value> {
    match (left, right) {
        (Value::Integer(l), Value::Integer(r)) => eval_integer_infix(op, *l, *r),
        (Value::Str(l), Value::Str(r)) if op == InfixOperator::Add => {
            Ok(Value::Str(format!("{l}{r}").into()))
        },
        _ => match op {
            InfixOperator::Eq => Ok(Value::Bool(left == right)),
            InfixOperator::NotEq => Ok(Value::Bool(left != right)),
            _ => Err(RuntimeError::TypeMismatch { left: left.kind(),
                                                  op,
                                                  right: right.kind() }),
        },
    }
}

/// Integer arithmetic and comparison. Arithmetic wraps on overflow;
/// division truncates toward zero and rejects a zero divisor.
fn eval_integer_infix(op: InfixOperator, left: i64, right: i64) -> EvalResult<Value> {
    match op {
        InfixOperator::Add => Ok(Value::Integer(left.wrapping_add(right))),
        InfixOperator::Sub => Ok(Value::Integer(left.wrapping_sub(right))),
        InfixOperator::Mul => Ok(Value::Integer(left.wrapping_mul(right))),
        InfixOperator::Div => {
            if right == 0 {
                Err(RuntimeError::DivisionByZero)
            } else {
                Ok(Value::Integer(left.wrapping_div(right)))
            }
        },
        InfixOperator::Lt => Ok(Value::Bool(left < right)),
        InfixOperator::Gt => Ok(Value::Bool(left > right)),
        InfixOperator::Eq => Ok(Value::Bool(left == right)),
        InfixOperator::NotEq => Ok(Value::Bool(left != right)),
    }
}

/// Applies the index operator to an evaluated target and index.
///
/// Arrays take integer indices within `0..len`. Hashes take any hashable
/// key and yield `null` for absent keys. Indexing anything else is an
/// error.
pub fn eval_index(target: &Value, index: &Value) -> EvalResult<Value> {
    match (target, index) {
        (Value::Array(elements), Value::Integer(i)) => {
            usize::try_from(*i).ok()
                               .and_then(|idx| elements.get(idx))
                               .cloned()
                               .ok_or(RuntimeError::IndexOutOfBounds { index: *i,
                                                                       size:  elements.len(), })
        },
        (Value::Array(_), other) => Err(RuntimeError::IndexNotInteger { kind: other.kind() }),
        (Value::Hash(table), key) => {
            let key = HashKey::try_from(key)?;
            Ok(table.get(&key).cloned().unwrap_or(Value::Null))
        },
        (other, _) => Err(RuntimeError::IndexNotSupported { kind: other.kind() }),
    }
}
