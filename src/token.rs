use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
}

impl Token {
    pub(crate) fn new(kind: TokenKind, text: impl Into<String>) -> Self {
        Token {
            kind,
            text: text.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TokenKind {
    Hash,
    Space,
    Asterisk,
    Hyphen,
    Backquote,
    Tilde,
    LineBreak,
    Text,
    EndOfInput,
}

impl TokenKind {
    // 1文字で完結する記号
    pub(crate) fn from_symbol(c: char) -> Option<TokenKind> {
        match c {
            '#' => Some(TokenKind::Hash),
            ' ' => Some(TokenKind::Space),
            '*' => Some(TokenKind::Asterisk),
            '-' => Some(TokenKind::Hyphen),
            '`' => Some(TokenKind::Backquote),
            '~' => Some(TokenKind::Tilde),
            '\n' => Some(TokenKind::LineBreak),
            _ => None,
        }
    }
}
