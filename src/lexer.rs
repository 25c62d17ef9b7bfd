use once_cell::sync::Lazy;
use regex::Regex;
use tracing::trace;

use crate::token::{Token, TokenKind};

// 記号・改行・空白以外の文字の連続
static TEXT_RUN_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[^\n\r #*\-`~]+").unwrap());

#[derive(Debug, Clone)]
pub struct Lexer<'a> {
    input: &'a str,
    position: usize,
}

impl<'a> Lexer<'a> {
    pub fn new(input: &'a str) -> Self {
        Lexer { input, position: 0 }
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn next_token(&mut self) -> Token {
        self.skip_carriage_return();

        let Some(c) = self.current_char() else {
            return Token::new(TokenKind::EndOfInput, "");
        };

        let token = match TokenKind::from_symbol(c) {
            Some(kind) => {
                self.position += c.len_utf8();
                Token::new(kind, c)
            }
            None => {
                let rest = &self.input[self.position..];
                let len = TEXT_RUN_REGEX
                    .find(rest)
                    .map(|m| m.end())
                    .unwrap_or(c.len_utf8());
                self.position += len;
                Token::new(TokenKind::Text, &rest[..len])
            }
        };
        trace!(kind = ?token.kind, text = %token.text, "token");

        token
    }

    fn current_char(&self) -> Option<char> {
        self.input[self.position..].chars().next()
    }

    // CRは読み飛ばす(LFはトークンになる)
    fn skip_carriage_return(&mut self) {
        while self.current_char() == Some('\r') {
            self.position += 1;
        }
    }
}

impl Iterator for Lexer<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        let token = self.next_token();
        if token.kind == TokenKind::EndOfInput {
            None
        } else {
            Some(token)
        }
    }
}

pub fn tokenize(input: &str) -> Vec<Token> {
    Lexer::new(input).collect()
}
