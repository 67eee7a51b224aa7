use std::{collections::HashMap, rc::Rc};

use crate::{
    ast::{Block, Expr, Program, Statement},
    error::RuntimeError,
    interpreter::{
        evaluator::{builtin, operator},
        value::{
            core::{Function, HashKey, Value},
            environment::{Environment, SharedEnv},
        },
    },
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or the
/// `RuntimeError` that stopped the program. The first failing
/// sub-evaluation short-circuits everything above it via `?`.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Evaluates a whole program against an environment.
///
/// Statements run in order. A `return` reaching the top level has its
/// carrier unwrapped here, so the carrier itself is never a program
/// result. `None` means the final statement produced nothing to show, as
/// a trailing `let` does.
pub fn eval_program(program: &Program, env: &SharedEnv) -> EvalResult<Option<Value>> {
    let mut result = None;

    for statement in &program.statements {
        match eval_statement(statement, env)? {
            Some(Value::Return(inner)) => return Ok(Some(inner.as_ref().clone())),
            outcome => result = outcome,
        }
    }

    Ok(result)
}

/// Evaluates the statements of a block.
///
/// Unlike [`eval_program`], a `return` carrier is passed through intact:
/// only the function call that entered the body may unwrap it. That
/// asymmetry is what lets `return` escape arbitrarily nested blocks.
///
/// Blocks do not open a scope of their own; `let` inside a block binds in
/// the frame of the enclosing function or program.
pub fn eval_block(block: &Block, env: &SharedEnv) -> EvalResult<Option<Value>> {
    let mut result = None;

    for statement in &block.statements {
        let outcome = eval_statement(statement, env)?;
        if matches!(outcome, Some(Value::Return(_))) {
            return Ok(outcome);
        }
        result = outcome;
    }

    Ok(result)
}

/// Evaluates a single statement.
///
/// `let` binds in the innermost scope and yields nothing; `return` wraps
/// its operand in the carrier; an expression statement yields the
/// expression's value.
pub fn eval_statement(statement: &Statement, env: &SharedEnv) -> EvalResult<Option<Value>> {
    match statement {
        Statement::Let { name, value } => {
            let value = eval_expression(value, env)?;
            env.borrow_mut().set(name.clone(), value);
            Ok(None)
        },
        Statement::Return { value } => {
            let value = eval_expression(value, env)?;
            Ok(Some(Value::Return(Rc::new(value))))
        },
        Statement::Expression { expr } => Ok(Some(eval_expression(expr, env)?)),
    }
}

/// Evaluates an expression to a value.
///
/// Sub-expressions are evaluated strictly left to right, and the first
/// failure propagates without further work.
pub fn eval_expression(expr: &Expr, env: &SharedEnv) -> EvalResult<Value> {
    match expr {
        Expr::Identifier { name } => eval_identifier(name, env),
        Expr::IntegerLiteral { value } => Ok(Value::Integer(*value)),
        Expr::StringLiteral { value } => Ok(Value::Str(value.as_str().into())),
        Expr::BooleanLiteral { value } => Ok(Value::Bool(*value)),
        Expr::Prefix { op, right } => {
            let right = eval_expression(right, env)?;
            operator::eval_prefix(*op, &right)
        },
        Expr::Infix { left, op, right } => {
            let left = eval_expression(left, env)?;
            let right = eval_expression(right, env)?;
            operator::eval_infix(*op, &left, &right)
        },
        Expr::If { condition,
                   consequence,
                   alternative, } => eval_if(condition, consequence, alternative.as_ref(), env),
        Expr::FunctionLiteral { parameters, body } => {
            Ok(Value::Function(Rc::new(Function { parameters: parameters.clone(),
                                                  body:       body.clone(),
                                                  env:        env.clone(), })))
        },
        Expr::Call { function, arguments } => eval_call(function, arguments, env),
        Expr::ArrayLiteral { elements } => {
            let mut values = Vec::with_capacity(elements.len());
            for element in elements {
                values.push(eval_expression(element, env)?);
            }
            Ok(Value::Array(Rc::new(values)))
        },
        Expr::Index { left, index } => {
            let target = eval_expression(left, env)?;
            let index = eval_expression(index, env)?;
            operator::eval_index(&target, &index)
        },
        Expr::HashLiteral { pairs } => {
            let mut table = HashMap::with_capacity(pairs.len());
            for (key_expr, value_expr) in pairs {
                let key = HashKey::try_from(&eval_expression(key_expr, env)?)?;
                let value = eval_expression(value_expr, env)?;
                table.insert(key, value);
            }
            Ok(Value::Hash(Rc::new(table)))
        },
    }
}

/// Resolves a name: the environment chain first, then the builtin table.
fn eval_identifier(name: &str, env: &SharedEnv) -> EvalResult<Value> {
    if let Some(value) = env.borrow().get(name) {
        return Ok(value);
    }
    builtin::lookup(name).ok_or_else(|| RuntimeError::IdentifierNotFound { name: name.to_string() })
}

/// Evaluates an `if` expression: the chosen block's value, or `null` when
/// the condition fails and no `else` exists, or when the chosen block ends
/// without a value.
fn eval_if(condition: &Expr,
           consequence: &Block,
           alternative: Option<&Block>,
           env: &SharedEnv)
           -> EvalResult<Value> {
    let condition = eval_expression(condition, env)?;

    if condition.is_truthy() {
        Ok(eval_block(consequence, env)?.unwrap_or(Value::Null))
    } else if let Some(alternative) = alternative {
        Ok(eval_block(alternative, env)?.unwrap_or(Value::Null))
    } else {
        Ok(Value::Null)
    }
}

/// Evaluates a call expression.
///
/// The callee is evaluated and checked first; arguments are only evaluated
/// once it is known to be callable.
fn eval_call(function: &Expr, arguments: &[Expr], env: &SharedEnv) -> EvalResult<Value> {
    let callee = eval_expression(function, env)?;
    if !matches!(callee, Value::Function(_) | Value::Builtin(_)) {
        return Err(RuntimeError::NotAFunction { kind: callee.kind() });
    }

    let mut args = Vec::with_capacity(arguments.len());
    for argument in arguments {
        args.push(eval_expression(argument, env)?);
    }

    apply_function(&callee, args)
}

/// Invokes a callable value with already-evaluated arguments.
///
/// A user function gets a fresh environment enclosing its *defining*
/// environment, never the calling one, with parameters bound by
/// position. A `return` out of the body is unwrapped here; a body that
/// ends without a value yields `null`. Builtins are invoked directly and
/// their result returned verbatim.
pub(crate) fn apply_function(callee: &Value, arguments: Vec<Value>) -> EvalResult<Value> {
    match callee {
        Value::Function(function) => {
            if arguments.len() != function.parameters.len() {
                return Err(RuntimeError::WrongNumberOfArguments);
            }

            let call_env = Environment::enclosed(function.env.clone());
            for (parameter, argument) in function.parameters.iter().zip(arguments) {
                call_env.borrow_mut().set(parameter.clone(), argument);
            }

            match eval_block(&function.body, &call_env)? {
                Some(Value::Return(inner)) => Ok(inner.as_ref().clone()),
                Some(value) => Ok(value),
                None => Ok(Value::Null),
            }
        },
        Value::Builtin(builtin) => {
            if arguments.len() != builtin.arity {
                return Err(RuntimeError::WrongNumberOfArguments);
            }
            (builtin.func)(arguments)
        },
        other => Err(RuntimeError::NotAFunction { kind: other.kind() }),
    }
}
