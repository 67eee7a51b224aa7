use crate::{
    ast::{Expr, InfixOperator, PrefixOperator},
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::core::{ParseResult, Parser, Precedence},
    },
};

impl Parser<'_> {
    /// Parses the prefix form at the current token: a literal, an
    /// identifier, a prefix operator, a grouped expression, or one of the
    /// compound literal forms.
    ///
    /// A token with no prefix rule is a syntax error; this is where illegal
    /// byte sequences from the lexer surface too.
    pub(in crate::interpreter::parser) fn parse_prefix(&mut self) -> ParseResult<Expr> {
        match &self.cur_token {
            Token::Identifier(name) => Ok(Expr::Identifier { name: name.clone() }),
            Token::Integer(value) => Ok(Expr::IntegerLiteral { value: *value }),
            Token::Str(value) => Ok(Expr::StringLiteral { value: value.clone() }),
            Token::True => Ok(Expr::BooleanLiteral { value: true }),
            Token::False => Ok(Expr::BooleanLiteral { value: false }),
            Token::Bang => self.parse_prefix_expression(PrefixOperator::Not),
            Token::Minus => self.parse_prefix_expression(PrefixOperator::Negate),
            Token::LParen => self.parse_grouped_expression(),
            Token::If => self.parse_if_expression(),
            Token::Function => self.parse_function_literal(),
            Token::LBracket => self.parse_array_literal(),
            Token::LBrace => self.parse_hash_literal(),
            other => Err(ParseError::NoPrefixParseFn { token: other.to_string() }),
        }
    }

    /// Parses the operand of a prefix operator at `Prefix` precedence, so
    /// that `-a + b` groups as `(-a) + b`.
    fn parse_prefix_expression(&mut self, op: PrefixOperator) -> ParseResult<Expr> {
        self.advance();
        let right = self.parse_expression(Precedence::Prefix)?;
        Ok(Expr::Prefix { op,
                          right: Box::new(right) })
    }

    /// Parses `( expression )`. Grouping leaves no node behind; the inner
    /// expression is returned as-is.
    fn parse_grouped_expression(&mut self) -> ParseResult<Expr> {
        self.advance();
        let expr = self.parse_expression(Precedence::Lowest)?;
        self.expect_peek(&Token::RParen)?;
        Ok(expr)
    }

    /// Parses `if (condition) { … }` with an optional `else { … }`.
    fn parse_if_expression(&mut self) -> ParseResult<Expr> {
        self.expect_peek(&Token::LParen)?;
        self.advance();
        let condition = self.parse_expression(Precedence::Lowest)?;
        self.expect_peek(&Token::RParen)?;

        self.expect_peek(&Token::LBrace)?;
        let consequence = self.parse_block()?;

        let alternative = if self.peek_token == Token::Else {
            self.advance();
            self.expect_peek(&Token::LBrace)?;
            Some(self.parse_block()?)
        } else {
            None
        };

        Ok(Expr::If { condition: Box::new(condition),
                      consequence,
                      alternative })
    }

    /// Parses `fn(a, b) { … }`.
    fn parse_function_literal(&mut self) -> ParseResult<Expr> {
        self.expect_peek(&Token::LParen)?;
        let parameters = self.parse_function_parameters()?;
        self.expect_peek(&Token::LBrace)?;
        let body = self.parse_block()?;

        Ok(Expr::FunctionLiteral { parameters, body })
    }

    /// Parses the comma-separated identifier list of a function literal,
    /// ending on `)`. An empty list is allowed.
    fn parse_function_parameters(&mut self) -> ParseResult<Vec<String>> {
        let mut parameters = Vec::new();

        if self.peek_token == Token::RParen {
            self.advance();
            return Ok(parameters);
        }

        parameters.push(self.expect_identifier()?);
        while self.peek_token == Token::Comma {
            self.advance();
            parameters.push(self.expect_identifier()?);
        }
        self.expect_peek(&Token::RParen)?;

        Ok(parameters)
    }

    /// Parses `[a, b, c]`. The empty literal `[]` is allowed.
    fn parse_array_literal(&mut self) -> ParseResult<Expr> {
        let elements = self.parse_expression_list(&Token::RBracket)?;
        Ok(Expr::ArrayLiteral { elements })
    }

    /// Parses `{key: value, …}` where both sides of each pair are full
    /// expressions. The empty literal `{}` and a trailing comma are both
    /// allowed.
    fn parse_hash_literal(&mut self) -> ParseResult<Expr> {
        let mut pairs = Vec::new();

        while self.peek_token != Token::RBrace {
            self.advance();
            let key = self.parse_expression(Precedence::Lowest)?;
            self.expect_peek(&Token::Colon)?;
            self.advance();
            let value = self.parse_expression(Precedence::Lowest)?;
            pairs.push((key, value));

            if self.peek_token != Token::RBrace {
                self.expect_peek(&Token::Comma)?;
            }
        }
        self.expect_peek(&Token::RBrace)?;

        Ok(Expr::HashLiteral { pairs })
    }

    /// Parses the right-hand side of a binary operator. The right operand
    /// is parsed at the operator's own precedence, making every binary
    /// operator left-associative.
    pub(in crate::interpreter::parser) fn parse_infix_expression(&mut self,
                                                                 op: InfixOperator,
                                                                 left: Expr)
                                                                 -> ParseResult<Expr> {
        let precedence = Precedence::of(&self.cur_token);
        self.advance();
        let right = self.parse_expression(precedence)?;

        Ok(Expr::Infix { left: Box::new(left),
                         op,
                         right: Box::new(right) })
    }

    /// Parses the argument list of a call expression; the callee has
    /// already been parsed.
    pub(in crate::interpreter::parser) fn parse_call_expression(&mut self,
                                                                function: Expr)
                                                                -> ParseResult<Expr> {
        let arguments = self.parse_expression_list(&Token::RParen)?;
        Ok(Expr::Call { function: Box::new(function),
                        arguments })
    }

    /// Parses `[index]` after an already-parsed target expression.
    pub(in crate::interpreter::parser) fn parse_index_expression(&mut self,
                                                                 left: Expr)
                                                                 -> ParseResult<Expr> {
        self.advance();
        let index = self.parse_expression(Precedence::Lowest)?;
        self.expect_peek(&Token::RBracket)?;

        Ok(Expr::Index { left:  Box::new(left),
                         index: Box::new(index), })
    }

    /// Parses a comma-separated expression list until `closing`, which is
    /// consumed. Shared by array literals and call argument lists; an
    /// immediately encountered closing token produces an empty list.
    fn parse_expression_list(&mut self, closing: &Token) -> ParseResult<Vec<Expr>> {
        let mut items = Vec::new();

        if self.peek_token == *closing {
            self.advance();
            return Ok(items);
        }

        self.advance();
        items.push(self.parse_expression(Precedence::Lowest)?);
        while self.peek_token == Token::Comma {
            self.advance();
            self.advance();
            items.push(self.parse_expression(Precedence::Lowest)?);
        }
        self.expect_peek(closing)?;

        Ok(items)
    }
}
