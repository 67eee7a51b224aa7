use logos::Logos;

/// Represents a lexical token in the source input.
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// This enum defines all recognized tokens in the language.
#[derive(Logos, Debug, PartialEq, Clone)]
#[logos(skip r"[ \t\r\n]+")]
pub enum Token {
    /// Identifier tokens; variable or function names such as `x` or `square`.
    /// Identifiers are maximal runs of ASCII letters and underscores.
    #[regex(r"[A-Za-z_]+", |lex| lex.slice().to_string())]
    Identifier(String),
    /// Integer literal tokens, such as `42`. Literals that do not fit a
    /// signed 64-bit integer fail to lex and surface as [`Token::Illegal`].
    #[regex(r"[0-9]+", parse_integer)]
    Integer(i64),
    /// String literal tokens, such as `"hello"`. No escape sequences are
    /// processed; a string missing its closing quote runs to end of input.
    #[regex(r#""[^"]*"?"#, trim_quotes)]
    Str(String),
    /// `fn`
    #[token("fn")]
    Function,
    /// `let`
    #[token("let")]
    Let,
    /// `true`
    #[token("true")]
    True,
    /// `false`
    #[token("false")]
    False,
    /// `if`
    #[token("if")]
    If,
    /// `else`
    #[token("else")]
    Else,
    /// `return`
    #[token("return")]
    Return,
    /// `=`
    #[token("=")]
    Assign,
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `!`
    #[token("!")]
    Bang,
    /// `/`
    #[token("/")]
    Slash,
    /// `*`
    #[token("*")]
    Asterisk,
    /// `<`
    #[token("<")]
    Lt,
    /// `>`
    #[token(">")]
    Gt,
    /// `==`
    #[token("==")]
    Eq,
    /// `!=`
    #[token("!=")]
    NotEq,
    /// `,`
    #[token(",")]
    Comma,
    /// `;`
    #[token(";")]
    Semicolon,
    /// `:`
    #[token(":")]
    Colon,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `{`
    #[token("{")]
    LBrace,
    /// `}`
    #[token("}")]
    RBrace,
    /// `[`
    #[token("[")]
    LBracket,
    /// `]`
    #[token("]")]
    RBracket,

    /// A byte sequence no rule matches. Never produced by the generated
    /// matcher; [`Lexer::next_token`] builds it from rejected input, and the
    /// parser reports it when it reaches expression position.
    Illegal(String),
    /// End of input. Returned indefinitely once the source is exhausted.
    Eof,
}

/// Parses an integer literal from the current token slice.
///
/// # Returns
/// - `Some(i64)`: The parsed value if it fits a signed 64-bit integer.
/// - `None`: Otherwise, which makes the slice an illegal token.
fn parse_integer(lex: &logos::Lexer<Token>) -> Option<i64> {
    lex.slice().parse().ok()
}

/// Strips the surrounding quotes from a string literal slice.
///
/// The leading quote is always present; the trailing quote is absent when
/// the literal runs to end of input.
fn trim_quotes(lex: &logos::Lexer<Token>) -> String {
    let body = &lex.slice()[1..];
    body.strip_suffix('"').unwrap_or(body).to_string()
}

impl std::fmt::Display for Token {
    /// Writes the diagnostic name of the token kind, as used in parse error
    /// messages ("expected next token to be Assign, got Plus instead").
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Identifier(_) => "Identifier",
            Self::Integer(_) => "Integer",
            Self::Str(_) => "String",
            Self::Function => "Function",
            Self::Let => "Let",
            Self::True => "True",
            Self::False => "False",
            Self::If => "If",
            Self::Else => "Else",
            Self::Return => "Return",
            Self::Assign => "Assign",
            Self::Plus => "Plus",
            Self::Minus => "Minus",
            Self::Bang => "Bang",
            Self::Slash => "Slash",
            Self::Asterisk => "Asterisk",
            Self::Lt => "LT",
            Self::Gt => "GT",
            Self::Eq => "EQ",
            Self::NotEq => "NEQ",
            Self::Comma => "Comma",
            Self::Semicolon => "Semicolon",
            Self::Colon => "Colon",
            Self::LParen => "LParen",
            Self::RParen => "RParen",
            Self::LBrace => "LBrace",
            Self::RBrace => "RBrace",
            Self::LBracket => "LBracket",
            Self::RBracket => "RBracket",
            Self::Illegal(_) => "Illegal",
            Self::Eof => "EOF",
        };
        write!(f, "{name}")
    }
}

/// Pulls tokens from a source string one at a time.
///
/// The lexer itself never fails: input no rule matches is handed to the
/// parser as [`Token::Illegal`], and once the source is exhausted every
/// further call yields [`Token::Eof`].
///
/// # Example
/// ```
/// use aspen::interpreter::lexer::{Lexer, Token};
///
/// let mut lexer = Lexer::new("let five = 5;");
///
/// assert_eq!(lexer.next_token(), Token::Let);
/// assert_eq!(lexer.next_token(), Token::Identifier("five".to_string()));
/// assert_eq!(lexer.next_token(), Token::Assign);
/// assert_eq!(lexer.next_token(), Token::Integer(5));
/// assert_eq!(lexer.next_token(), Token::Semicolon);
/// assert_eq!(lexer.next_token(), Token::Eof);
/// assert_eq!(lexer.next_token(), Token::Eof);
/// ```
pub struct Lexer<'a> {
    inner: logos::Lexer<'a, Token>,
}

impl<'a> Lexer<'a> {
    /// Creates a lexer over the given source text.
    #[must_use]
    pub fn new(source: &'a str) -> Self {
        Self { inner: Token::lexer(source) }
    }

    /// Returns the next token in the source.
    pub fn next_token(&mut self) -> Token {
        match self.inner.next() {
            Some(Ok(token)) => token,
            Some(Err(())) => Token::Illegal(self.inner.slice().to_string()),
            None => Token::Eof,
        }
    }
}
