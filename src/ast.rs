use std::fmt::{self, Display, Formatter};

/// An abstract syntax tree (AST) node representing an expression in the
/// language.
///
/// `Expr` covers all expression forms: literals, identifiers, prefix and
/// infix operations, conditionals, function literals, calls, array and hash
/// literals, and indexing. Every variant is built by the parser and consumed
/// read-only by the evaluator.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// Reference to a binding by name.
    Identifier {
        /// Name of the binding.
        name: String,
    },
    /// A 64-bit signed integer literal.
    IntegerLiteral {
        /// The literal value.
        value: i64,
    },
    /// A string literal. Escape sequences are not processed.
    StringLiteral {
        /// The literal contents, without the surrounding quotes.
        value: String,
    },
    /// A boolean literal: `true` or `false`.
    BooleanLiteral {
        /// The literal value.
        value: bool,
    },
    /// A prefix operation such as `-x` or `!ready`.
    Prefix {
        /// The operator to apply.
        op:    PrefixOperator,
        /// The operand expression.
        right: Box<Expr>,
    },
    /// An infix operation such as `a + b` or `x == y`.
    Infix {
        /// Left operand.
        left:  Box<Expr>,
        /// The operator.
        op:    InfixOperator,
        /// Right operand.
        right: Box<Expr>,
    },
    /// A conditional expression: `if (cond) { … } else { … }`.
    /// The `else` branch is optional; a false condition without one yields
    /// `null`.
    If {
        /// The condition steering the branch choice.
        condition:   Box<Expr>,
        /// Block evaluated when the condition is truthy.
        consequence: Block,
        /// Block evaluated otherwise, when present.
        alternative: Option<Block>,
    },
    /// A function literal: `fn(a, b) { a + b }`. Evaluating it produces a
    /// closure over the environment it appears in.
    FunctionLiteral {
        /// Parameter names, in declaration order.
        parameters: Vec<String>,
        /// The function body.
        body:       Block,
    },
    /// A call expression: `add(1, 2)`. The callee is an arbitrary
    /// expression.
    Call {
        /// Expression producing the callee.
        function:  Box<Expr>,
        /// Argument expressions, evaluated left to right.
        arguments: Vec<Expr>,
    },
    /// An array literal: `[1, "two", fn(x) { x }]`. May be empty.
    ArrayLiteral {
        /// Element expressions, evaluated left to right.
        elements: Vec<Expr>,
    },
    /// An index expression: `arr[0]` or `table["key"]`.
    Index {
        /// Expression producing the indexed value.
        left:  Box<Expr>,
        /// Expression producing the index or key.
        index: Box<Expr>,
    },
    /// A hash literal: `{"a": 1, 2: "b"}`. Keys and values are arbitrary
    /// expressions; pairs are evaluated in source order.
    HashLiteral {
        /// Key/value expression pairs.
        pairs: Vec<(Expr, Expr)>,
    },
}

/// Represents a top-level statement.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    /// A binding introduced with `let`.
    Let {
        /// The name being bound.
        name:  String,
        /// The bound expression.
        value: Expr,
    },
    /// A `return` statement. Escapes the enclosing function from arbitrarily
    /// nested blocks.
    Return {
        /// The returned expression.
        value: Expr,
    },
    /// A standalone expression evaluated for its result.
    Expression {
        /// The expression to evaluate.
        expr: Expr,
    },
}

/// A brace-delimited sequence of statements, as used by `if` branches and
/// function bodies.
#[derive(Debug, Clone, PartialEq)]
pub struct Block {
    /// Statements inside the block.
    pub statements: Vec<Statement>,
}

/// A parsed program: the ordered sequence of top-level statements.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Program {
    /// Statements in source order.
    pub statements: Vec<Statement>,
}

/// Represents a prefix operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum PrefixOperator {
    /// Arithmetic negation (`-x`).
    Negate,
    /// Logical NOT (`!x`).
    Not,
}

/// Represents an infix operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum InfixOperator {
    /// Addition (`+`); also string concatenation.
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Division (`/`)
    Div,
    /// Less than (`<`)
    Lt,
    /// Greater than (`>`)
    Gt,
    /// Equal to (`==`)
    Eq,
    /// Not equal to (`!=`)
    NotEq,
}

impl Display for PrefixOperator {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let operator = match self {
            Self::Negate => "-",
            Self::Not => "!",
        };
        write!(f, "{operator}")
    }
}

impl Display for InfixOperator {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let operator = match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Lt => "<",
            Self::Gt => ">",
            Self::Eq => "==",
            Self::NotEq => "!=",
        };
        write!(f, "{operator}")
    }
}

// The Display impls below re-print a node as canonical source. The printed
// form parses back to a structurally equal tree, which the parser tests
// rely on; infix and prefix nodes are fully parenthesized so the original
// grouping survives the trip.

impl Display for Expr {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Identifier { name } => write!(f, "{name}"),
            Self::IntegerLiteral { value } => write!(f, "{value}"),
            Self::StringLiteral { value } => write!(f, "\"{value}\""),
            Self::BooleanLiteral { value } => write!(f, "{value}"),
            Self::Prefix { op, right } => write!(f, "({op}{right})"),
            Self::Infix { left, op, right } => write!(f, "({left} {op} {right})"),
            Self::If { condition,
                       consequence,
                       alternative, } => {
                write!(f, "if ({condition}) {consequence}")?;
                if let Some(alternative) = alternative {
                    write!(f, " else {alternative}")?;
                }
                Ok(())
            },
            Self::FunctionLiteral { parameters, body } => {
                write!(f, "fn({}) {body}", parameters.join(", "))
            },
            Self::Call { function, arguments } => {
                write!(f, "{function}({})", join_expressions(arguments))
            },
            Self::ArrayLiteral { elements } => write!(f, "[{}]", join_expressions(elements)),
            Self::Index { left, index } => write!(f, "({left}[{index}])"),
            Self::HashLiteral { pairs } => {
                let pairs = pairs.iter()
                                 .map(|(key, value)| format!("{key}: {value}"))
                                 .collect::<Vec<_>>()
                                 .join(", ");
                write!(f, "{{{pairs}}}")
            },
        }
    }
}

impl Display for Statement {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Let { name, value } => write!(f, "let {name} = {value};"),
            Self::Return { value } => write!(f, "return {value};"),
            Self::Expression { expr } => write!(f, "{expr};"),
        }
    }
}

impl Display for Block {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if self.statements.is_empty() {
            return write!(f, "{{ }}");
        }
        write!(f, "{{ {} }}", join_statements(&self.statements))
    }
}

impl Display for Program {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", join_statements(&self.statements))
    }
}

fn join_expressions(expressions: &[Expr]) -> String {
    expressions.iter()
               .map(ToString::to_string)
               .collect::<Vec<_>>()
               .join(", ")
}

fn join_statements(statements: &[Statement]) -> String {
    statements.iter()
              .map(ToString::to_string)
              .collect::<Vec<_>>()
              .join(" ")
}
