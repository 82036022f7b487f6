use crate::ast::{ASTNode, BinaryOperator};
use crate::error::ParseError;
use crate::lexer::Lexer;
use crate::token::Token;

/// Deepest tree, and deepest parenthesis nesting, the parser will build.
/// Both the parser and the evaluator recurse once per level.
pub const MAX_DEPTH: usize = 256;

/// A subtree together with its depth in nodes.
type Subtree = (ASTNode, usize);

/// Recursive-descent parser for
///
/// ```text
/// expr   := term (('+' | '-') term)*
/// term   := factor (('*' | '/') factor)*
/// factor := NUMBER | IDENTIFIER | '(' expr ')'
/// ```
pub struct Parser {
    lexer: Lexer,
    current_token: Token,
    current_pos: usize,
    nesting: usize,
}

impl Parser {
    pub fn new(mut lexer: Lexer) -> Result<Self, ParseError> {
        let current_token = lexer.get_next_token()?;
        let current_pos = lexer.token_start();
        Ok(Parser {
            lexer,
            current_token,
            current_pos,
            nesting: 0,
        })
    }

    fn eat(&mut self, token_type: Token) -> Result<(), ParseError> {
        if std::mem::discriminant(&self.current_token) == std::mem::discriminant(&token_type) {
            self.current_token = self.lexer.get_next_token()?;
            self.current_pos = self.lexer.token_start();
            Ok(())
        } else {
            Err(self.unexpected())
        }
    }

    fn unexpected(&self) -> ParseError {
        match &self.current_token {
            Token::Eof => ParseError::UnexpectedEnd,
            token => ParseError::UnexpectedToken {
                token: token.to_string(),
                position: self.current_pos,
            },
        }
    }

    /// Error for a token left over where an operator or the end was expected.
    fn leftover(&self) -> ParseError {
        match &self.current_token {
            Token::RParen => ParseError::UnmatchedCloseParen {
                position: self.current_pos,
            },
            Token::Number(_) | Token::Id(_) | Token::LParen => ParseError::MissingOperator {
                token: self.current_token.to_string(),
                position: self.current_pos,
            },
            _ => self.unexpected(),
        }
    }

    /// Parses a whole expression; input left after it is an error.
    pub fn parse(&mut self) -> Result<ASTNode, ParseError> {
        if self.current_token == Token::Eof {
            return Err(ParseError::EmptyExpression);
        }

        let (node, _) = self.expr()?;
        if self.current_token == Token::Eof {
            Ok(node)
        } else {
            Err(self.leftover())
        }
    }

    fn combine(
        op: BinaryOperator,
        left: Subtree,
        right: Subtree,
        position: usize,
    ) -> Result<Subtree, ParseError> {
        let depth = left.1.max(right.1) + 1;
        if depth > MAX_DEPTH {
            return Err(ParseError::TooDeep { position });
        }
        Ok((ASTNode::binary(op, left.0, right.0), depth))
    }

    fn expr(&mut self) -> Result<Subtree, ParseError> {
        let mut node = self.term()?;

        loop {
            let op = match self.current_token {
                Token::Plus => BinaryOperator::Add,
                Token::Minus => BinaryOperator::Sub,
                _ => break,
            };
            let op_pos = self.current_pos;
            self.eat(self.current_token.clone())?;
            node = Self::combine(op, node, self.term()?, op_pos)?;
        }

        Ok(node)
    }

    fn term(&mut self) -> Result<Subtree, ParseError> {
        let mut node = self.factor()?;

        loop {
            let op = match self.current_token {
                Token::Multiply => BinaryOperator::Mul,
                Token::Divide => BinaryOperator::Div,
                _ => break,
            };
            let op_pos = self.current_pos;
            self.eat(self.current_token.clone())?;
            node = Self::combine(op, node, self.factor()?, op_pos)?;
        }

        Ok(node)
    }

    fn factor(&mut self) -> Result<Subtree, ParseError> {
        match self.current_token.clone() {
            Token::Number(value) => {
                self.eat(Token::Number(0.0))?;
                Ok((ASTNode::Literal(value), 1))
            }
            Token::Id(name) => {
                self.eat(Token::Id(String::new()))?;
                Ok((ASTNode::Variable(name), 1))
            }
            Token::LParen => {
                let open_pos = self.current_pos;
                if self.nesting >= MAX_DEPTH {
                    return Err(ParseError::TooDeep { position: open_pos });
                }
                self.eat(Token::LParen)?;
                self.nesting += 1;
                let node = self.expr()?;
                self.nesting -= 1;
                match self.current_token {
                    Token::RParen => {
                        self.eat(Token::RParen)?;
                        Ok(node)
                    }
                    Token::Eof => Err(ParseError::UnclosedParen { position: open_pos }),
                    _ => Err(self.leftover()),
                }
            }
            _ => Err(self.unexpected()),
        }
    }
}
