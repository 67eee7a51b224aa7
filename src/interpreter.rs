/// The evaluator module executes AST nodes and computes results.
///
/// The evaluator walks the AST depth-first, evaluates expressions and
/// statements against an environment chain, applies operators and function
/// calls, and produces the program's result value. It is the core execution
/// engine of the interpreter.
///
/// # Responsibilities
/// - Evaluates AST nodes with strict left-to-right sub-expression order.
/// - Handles bindings, closures, control flow and the builtin library.
/// - Short-circuits on the first runtime error and propagates `return`
///   through nested blocks.
pub mod evaluator;
/// The lexer module tokenizes source code for further parsing.
///
/// The lexer reads the raw source text and produces a stream of tokens,
/// each corresponding to a meaningful language element such as an integer,
/// identifier, operator, delimiter, or keyword. This is the first stage of
/// interpretation.
///
/// # Responsibilities
/// - Converts the input character stream into tokens on demand.
/// - Handles integer and string literals, identifiers, keywords and the
///   one- and two-character operators.
/// - Surfaces unrecognized input as illegal tokens rather than failing.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// The parser is a Pratt (precedence-climbing) parser: each token kind has
/// a prefix rule and possibly an infix rule with a binding power, and an
/// expression is parsed by running the prefix rule and then folding in
/// every infix whose power exceeds the current one.
///
/// # Responsibilities
/// - Converts tokens into structured AST nodes (expressions, statements).
/// - Enforces the grammar, accumulating errors without halting.
/// - Resolves operator precedence and associativity.
pub mod parser;
/// The value module defines the runtime data types for evaluation.
///
/// This module declares the value types produced during execution
/// (integers, booleans, strings, arrays, hashes, functions and the builtin
/// and control-flow markers) together with the environment realizing
/// lexical scope.
///
/// # Responsibilities
/// - Defines the `Value` enum and all supported value variants.
/// - Implements structural equality, hash-key projection and the printable
///   `inspect` form.
/// - Provides the shared, chainable `Environment`.
pub mod value;
