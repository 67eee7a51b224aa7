/// Parsing errors.
///
/// Defines all error types that can occur while turning source text into an
/// AST. Parse errors are collected by the parser; the offending statement is
/// discarded and parsing continues past it.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised during evaluation: unbound
/// identifiers, operator/type mismatches, bad indexing, arity mismatches and
/// the like. A runtime error short-circuits evaluation and becomes the
/// program's result.
pub mod runtime_error;

pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;

/// The failure side of a full lex-parse-evaluate run.
///
/// The two phases are distinct: when parsing fails, evaluation is never
/// attempted and all accumulated syntax errors are reported together. A
/// runtime failure only ever carries the single error that stopped the
/// program.
#[derive(Debug)]
pub enum InterpretError {
    /// One or more syntax errors; evaluation was skipped.
    Parse(Vec<ParseError>),
    /// The program itself failed while running.
    Runtime(RuntimeError),
}

impl std::fmt::Display for InterpretError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parse(errors) => {
                let mut first = true;
                for error in errors {
                    if !first {
                        writeln!(f)?;
                    }
                    write!(f, "{error}")?;
                    first = false;
                }
                Ok(())
            },
            Self::Runtime(error) => write!(f, "{error}"),
        }
    }
}

impl std::error::Error for InterpretError {}
