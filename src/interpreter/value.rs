/// The `Value` enum and its supporting types: the hashable key projection,
/// the function value, structural equality and the printable form.
pub mod core;
/// The environment chain realizing lexical scope, shared between the
/// evaluator and the closures that capture it.
pub mod environment;
