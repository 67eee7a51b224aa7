/// The parser engine: the `Parser` type, the precedence ladder and the
/// expression loop that drives prefix and infix rules.
pub mod core;
/// Prefix and infix rules for every expression form: literals, operators,
/// conditionals, functions, calls, arrays, hashes and indexing.
pub mod expression;
/// Statement-level grammar: `let`, `return`, expression statements and
/// brace-delimited blocks.
pub mod statement;
