//! # aspen
//!
//! aspen is a tree-walking interpreter for a small, dynamically typed
//! scripting language with integers, booleans, strings, arrays, hash maps
//! and first-class closures.
//!
//! Source text flows through three stages: the lexer turns bytes into
//! tokens, the Pratt parser turns tokens into an AST, and the evaluator
//! walks the AST against a lexically scoped environment chain. Runtime
//! failures are ordinary values of the run: the program's result is either
//! a value or the error that stopped it.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
)]
#![allow(clippy::missing_errors_doc)]

use crate::interpreter::{
    evaluator::core::eval_program,
    lexer::Lexer,
    parser::core::Parser,
    value::{core::Value, environment::Environment},
};

pub use crate::{error::InterpretError, interpreter::value::environment::SharedEnv};

/// Defines the structure of parsed code.
///
/// This module declares the `Expr` and `Statement` enums and related types
/// that represent the syntactic structure of source code as a tree. The
/// AST is built by the parser and traversed by the evaluator.
///
/// # Responsibilities
/// - Defines expression and statement types for all language constructs.
/// - Implements `Display` to re-print a tree as canonical source.
pub mod ast;
/// Provides unified error types for parsing and evaluation.
///
/// This module defines all errors that can be raised while lexing, parsing
/// or evaluating code. Parse errors and runtime errors are kept apart: the
/// former are accumulated and reported together before evaluation, the
/// latter short-circuit a running program and become its result.
///
/// # Responsibilities
/// - Defines error enums for syntax and runtime failure modes.
/// - Renders the exact user-visible message strings.
/// - Integrates with the standard error traits.
pub mod error;
/// Orchestrates the entire process of code execution.
///
/// This module ties together lexing, parsing, evaluation, value
/// representation and the environment chain to provide a complete runtime
/// for source code evaluation.
///
/// # Responsibilities
/// - Coordinates all core components: lexer, parser, evaluator, values.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;

/// Creates a fresh root environment for a program run.
///
/// The environment starts empty; builtin functions are not bindings but a
/// fallback table consulted when lookup fails, so user code may shadow
/// them freely.
#[must_use]
pub fn new_environment() -> SharedEnv {
    Environment::global()
}

/// Lexes, parses and evaluates `source` against `env`.
///
/// When the source has syntax errors they are all returned together and
/// evaluation is not attempted. Otherwise the program runs to completion
/// or to its first runtime error. `Ok(None)` means the program ended
/// without a value to show (for example, a trailing `let`).
///
/// Bindings persist in `env` across calls, which is what a REPL relies on.
///
/// # Examples
/// ```
/// use aspen::{evaluate, new_environment};
///
/// let env = new_environment();
/// let result = evaluate("let add = fn(a, b) { a + b }; add(2, 3)", &env).unwrap();
///
/// assert_eq!(result.unwrap().to_string(), "5");
/// ```
///
/// Runtime failures carry the message the embedder prints:
/// ```
/// use aspen::{evaluate, new_environment};
///
/// let env = new_environment();
/// let error = evaluate("foobar", &env).unwrap_err();
///
/// assert_eq!(error.to_string(), "Error: identifier not found: foobar");
/// ```
pub fn evaluate(source: &str, env: &SharedEnv) -> Result<Option<Value>, InterpretError> {
    let mut parser = Parser::new(Lexer::new(source));
    let program = parser.parse_program();

    if !parser.errors().is_empty() {
        return Err(InterpretError::Parse(parser.into_errors()));
    }

    eval_program(&program, env).map_err(InterpretError::Runtime)
}
