use crate::ast::{InfixOperator, PrefixOperator};

#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during evaluation.
///
/// A runtime error is the evaluated program's result: the evaluator refuses
/// to operate on a failed sub-evaluation, so the first failure propagates
/// untouched to the top of the program. Its `Display` form is what the
/// embedder prints, already carrying the `Error: ` prefix.
pub enum RuntimeError {
    /// Looked up a name bound neither in the environment chain nor in the
    /// built-in table.
    IdentifierNotFound {
        /// The unbound name.
        name: String,
    },
    /// Applied a prefix operator to an operand kind it does not support.
    UnknownPrefixOperator {
        /// The operator.
        op:   PrefixOperator,
        /// Kind name of the operand.
        kind: &'static str,
    },
    /// Applied an infix operator to an operand kind pairing it does not
    /// support.
    TypeMismatch {
        /// Kind name of the left operand.
        left:  &'static str,
        /// The operator.
        op:    InfixOperator,
        /// Kind name of the right operand.
        right: &'static str,
    },
    /// Called a value that is neither a function nor a built-in.
    NotAFunction {
        /// Kind name of the callee.
        kind: &'static str,
    },
    /// A call supplied more or fewer arguments than the callee declares.
    WrongNumberOfArguments,
    /// An array index outside `0..len`.
    IndexOutOfBounds {
        /// The requested index.
        index: i64,
        /// The array length.
        size:  usize,
    },
    /// Indexed an array with a non-integer.
    IndexNotInteger {
        /// Kind name of the index value.
        kind: &'static str,
    },
    /// Indexed a value that is neither an array nor a hash.
    IndexNotSupported {
        /// Kind name of the indexed value.
        kind: &'static str,
    },
    /// Used a value kind that cannot key a hash (only integers, booleans
    /// and strings can).
    UnusableHashKey {
        /// Kind name of the offending key.
        kind: &'static str,
    },
    /// Integer division by zero.
    DivisionByZero,
    /// A built-in function received an argument it cannot work with.
    InvalidArgument {
        /// Ready-made description of the problem.
        details: String,
    },
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::IdentifierNotFound { name } => {
                write!(f, "Error: identifier not found: {name}")
            },
            Self::UnknownPrefixOperator { op, kind } => {
                write!(f, "Error: unknown operator: {op} {kind}")
            },
            // The misspelling is load-bearing: embedders match on the exact
            // message text.
            Self::TypeMismatch { left, op, right } => {
                write!(f, "Error: unkown operator {left} {op} {right}")
            },
            Self::NotAFunction { kind } => write!(f, "Error: not a function: {kind}"),
            Self::WrongNumberOfArguments => write!(f, "Error: wrong number of arguments"),
            Self::IndexOutOfBounds { index, size } => {
                write!(f, "Error: index({index}) exceeds array size({size})")
            },
            Self::IndexNotInteger { kind } => {
                write!(f, "Error: index should be integer, got {kind}")
            },
            Self::IndexNotSupported { kind } => {
                write!(f, "Error: index operator not supported: {kind}")
            },
            Self::UnusableHashKey { kind } => {
                write!(f, "Error: unusable as hash key: {kind}")
            },
            Self::DivisionByZero => write!(f, "Error: division by zero"),
            Self::InvalidArgument { details } => write!(f, "Error: {details}"),
        }
    }
}

impl std::error::Error for RuntimeError {}
