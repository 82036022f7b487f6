use crate::error::ParseError;
use crate::token::Token;

pub struct Lexer {
    text: Vec<char>,
    pos: usize,
    current_char: Option<char>,
    token_start: usize,
}

impl Lexer {
    pub fn new(text: &str) -> Self {
        let chars: Vec<char> = text.chars().collect();
        let current_char = chars.first().copied();
        Lexer {
            text: chars,
            pos: 0,
            current_char,
            token_start: 0,
        }
    }

    /// Offset of the first character of the token returned last.
    pub fn token_start(&self) -> usize {
        self.token_start
    }

    fn advance(&mut self) {
        self.pos += 1;
        self.current_char = self.text.get(self.pos).copied();
    }

    fn peek(&self) -> Option<char> {
        self.text.get(self.pos + 1).copied()
    }

    fn skip_whitespace(&mut self) {
        while let Some(ch) = self.current_char {
            if ch.is_whitespace() {
                self.advance();
            } else {
                break;
            }
        }
    }

    fn number(&mut self) -> Result<f64, ParseError> {
        let start = self.pos;
        let mut literal = String::new();
        self.digits(&mut literal);

        // A trailing '.' with no digit after it is left for the caller to reject.
        if self.current_char == Some('.') && self.peek().is_some_and(|ch| ch.is_ascii_digit()) {
            literal.push('.');
            self.advance();
            self.digits(&mut literal);
        }

        match literal.parse::<f64>() {
            Ok(value) if value.is_finite() => Ok(value),
            _ => Err(ParseError::InvalidNumber {
                literal,
                position: start,
            }),
        }
    }

    fn digits(&mut self, out: &mut String) {
        while let Some(ch) = self.current_char {
            if ch.is_ascii_digit() {
                out.push(ch);
                self.advance();
            } else {
                break;
            }
        }
    }

    fn id(&mut self) -> String {
        let mut result = String::new();
        while let Some(ch) = self.current_char {
            if ch.is_alphanumeric() || ch == '_' {
                result.push(ch);
                self.advance();
            } else {
                break;
            }
        }
        result
    }

    pub fn get_next_token(&mut self) -> Result<Token, ParseError> {
        self.skip_whitespace();
        self.token_start = self.pos;

        let Some(ch) = self.current_char else {
            return Ok(Token::Eof);
        };

        if ch.is_ascii_digit() {
            return Ok(Token::Number(self.number()?));
        }

        if ch.is_alphabetic() || ch == '_' {
            return Ok(Token::Id(self.id()));
        }

        let token = match ch {
            '+' => Token::Plus,
            '-' => Token::Minus,
            '*' => Token::Multiply,
            '/' => Token::Divide,
            '(' => Token::LParen,
            ')' => Token::RParen,
            _ => {
                return Err(ParseError::InvalidCharacter {
                    ch,
                    position: self.pos,
                });
            }
        };

        self.advance();
        Ok(token)
    }
}
