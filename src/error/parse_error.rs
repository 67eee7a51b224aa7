#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while parsing.
///
/// Parse errors are accumulated by the parser rather than aborting it: the
/// statement containing the error is discarded and parsing resumes at the
/// next token.
pub enum ParseError {
    /// The token after the current one was not the required kind.
    UnexpectedToken {
        /// Diagnostic name of the required token kind.
        expected: String,
        /// Diagnostic name of the token actually found.
        found:    String,
    },
    /// A token appeared in expression position that cannot begin an
    /// expression. This is also how illegal byte sequences surface, since
    /// the lexer itself never fails.
    NoPrefixParseFn {
        /// Diagnostic name of the offending token kind.
        token: String,
    },
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnexpectedToken { expected, found } => {
                write!(f, "expected next token to be {expected}, got {found} instead")
            },
            Self::NoPrefixParseFn { token } => {
                write!(f, "no prefix parse function for {token} found")
            },
        }
    }
}

impl std::error::Error for ParseError {}
