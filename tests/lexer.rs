use aspen::interpreter::lexer::{Lexer, Token};

/// Collects tokens until (and including) the first `Eof`.
fn tokenize(source: &str) -> Vec<Token> {
    let mut lexer = Lexer::new(source);
    let mut tokens = Vec::new();
    loop {
        let token = lexer.next_token();
        let done = token == Token::Eof;
        tokens.push(token);
        if done {
            return tokens;
        }
    }
}

fn identifier(name: &str) -> Token {
    Token::Identifier(name.to_string())
}

#[test]
fn tokenizes_a_representative_program() {
    let source = "let five = 5;\n\
                  let add = fn(x, y) { x + y; };\n\
                  if (five < 10) { return true; } else { return false; }\n\
                  [1, 2][0];\n\
                  {\"key\": \"value\"};\n\
                  5 == 5; 5 != 6; !-/*5;";

    let expected = [Token::Let,
                    identifier("five"),
                    Token::Assign,
                    Token::Integer(5),
                    Token::Semicolon,
                    Token::Let,
                    identifier("add"),
                    Token::Assign,
                    Token::Function,
                    Token::LParen,
                    identifier("x"),
                    Token::Comma,
                    identifier("y"),
                    Token::RParen,
                    Token::LBrace,
                    identifier("x"),
                    Token::Plus,
                    identifier("y"),
                    Token::Semicolon,
                    Token::RBrace,
                    Token::Semicolon,
                    Token::If,
                    Token::LParen,
                    identifier("five"),
                    Token::Lt,
                    Token::Integer(10),
                    Token::RParen,
                    Token::LBrace,
                    Token::Return,
                    Token::True,
                    Token::Semicolon,
                    Token::RBrace,
                    Token::Else,
                    Token::LBrace,
                    Token::Return,
                    Token::False,
                    Token::Semicolon,
                    Token::RBrace,
                    Token::LBracket,
                    Token::Integer(1),
                    Token::Comma,
                    Token::Integer(2),
                    Token::RBracket,
                    Token::LBracket,
                    Token::Integer(0),
                    Token::RBracket,
                    Token::Semicolon,
                    Token::LBrace,
                    Token::Str("key".to_string()),
                    Token::Colon,
                    Token::Str("value".to_string()),
                    Token::RBrace,
                    Token::Semicolon,
                    Token::Integer(5),
                    Token::Eq,
                    Token::Integer(5),
                    Token::Semicolon,
                    Token::Integer(5),
                    Token::NotEq,
                    Token::Integer(6),
                    Token::Semicolon,
                    Token::Bang,
                    Token::Minus,
                    Token::Slash,
                    Token::Asterisk,
                    Token::Integer(5),
                    Token::Semicolon,
                    Token::Eof];

    assert_eq!(tokenize(source), expected);
}

#[test]
fn end_of_input_is_idempotent() {
    let mut lexer = Lexer::new("1");
    assert_eq!(lexer.next_token(), Token::Integer(1));
    for _ in 0..5 {
        assert_eq!(lexer.next_token(), Token::Eof);
    }

    let mut empty = Lexer::new("");
    assert_eq!(empty.next_token(), Token::Eof);
    assert_eq!(empty.next_token(), Token::Eof);
}

#[test]
fn keywords_are_not_identifiers() {
    assert_eq!(tokenize("fn let true false if else return"),
               [Token::Function,
                Token::Let,
                Token::True,
                Token::False,
                Token::If,
                Token::Else,
                Token::Return,
                Token::Eof]);
    // A keyword prefix does not make an identifier a keyword.
    assert_eq!(tokenize("fnx lets"), [identifier("fnx"), identifier("lets"), Token::Eof]);
}

#[test]
fn identifiers_are_letter_runs_only() {
    assert_eq!(tokenize("foo_bar _x"),
               [identifier("foo_bar"), identifier("_x"), Token::Eof]);
    // Digits end an identifier; `abc1` is two tokens.
    assert_eq!(tokenize("abc1"), [identifier("abc"), Token::Integer(1), Token::Eof]);
}

#[test]
fn two_character_operators_win_over_their_prefixes() {
    assert_eq!(tokenize("== = != !"),
               [Token::Eq, Token::Assign, Token::NotEq, Token::Bang, Token::Eof]);
    assert_eq!(tokenize("===="), [Token::Eq, Token::Eq, Token::Eof]);
}

#[test]
fn string_literals() {
    assert_eq!(tokenize("\"hello\""), [Token::Str("hello".to_string()), Token::Eof]);
    assert_eq!(tokenize("\"\""), [Token::Str(String::new()), Token::Eof]);
    assert_eq!(tokenize("\"with space\""),
               [Token::Str("with space".to_string()), Token::Eof]);
    // Escape sequences are not processed; the backslash is two raw bytes.
    assert_eq!(tokenize(r#""a\nb""#), [Token::Str("a\\nb".to_string()), Token::Eof]);
}

#[test]
fn unterminated_strings_run_to_end_of_input() {
    assert_eq!(tokenize("\"abc"), [Token::Str("abc".to_string()), Token::Eof]);
    assert_eq!(tokenize("\""), [Token::Str(String::new()), Token::Eof]);
}

#[test]
fn unrecognized_input_becomes_illegal_tokens() {
    assert_eq!(tokenize("@"), [Token::Illegal("@".to_string()), Token::Eof]);
    assert_eq!(tokenize("1 @ 2"),
               [Token::Integer(1),
                Token::Illegal("@".to_string()),
                Token::Integer(2),
                Token::Eof]);
    // An integer literal that overflows 64 bits is rejected by its
    // callback and surfaces as illegal input too.
    assert_eq!(tokenize("9223372036854775808"),
               [Token::Illegal("9223372036854775808".to_string()), Token::Eof]);
}

#[test]
fn all_whitespace_kinds_are_skipped() {
    assert_eq!(tokenize(" \t1\r\n+\n2 "),
               [Token::Integer(1), Token::Plus, Token::Integer(2), Token::Eof]);
}
