mod code;
mod emphasis;
mod list_item;

use std::mem;

use tracing::{debug, warn};

use crate::{
    ast::{Block, Document, HeadingLevel, Inline},
    error::ParseError,
    lexer::Lexer,
    token::{Token, TokenKind},
};

// 見出しの中だけ `-` はテキスト扱い
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Context {
    Heading,
    ListItem,
    Paragraph,
}

pub struct Parser<'a> {
    lexer: Lexer<'a>,
    cur_token: Token,
    peek_token: Token,
    line: usize,
    errors: Vec<ParseError>,
}

impl<'a> Parser<'a> {
    pub fn new(mut lexer: Lexer<'a>) -> Self {
        let cur_token = lexer.next_token();
        let peek_token = lexer.next_token();

        Parser {
            lexer,
            cur_token,
            peek_token,
            line: 1,
            errors: vec![],
        }
    }

    pub fn into_errors(self) -> Vec<ParseError> {
        self.errors
    }

    pub fn parse_document(&mut self) -> Document {
        let mut document = Document::default();

        while !self.cur_is(TokenKind::EndOfInput) {
            if let Some(block) = self.parse_block() {
                document.blocks.push(block);
            }

            // ブロック間の空白か改行を1つ読み飛ばす
            if self.cur_is(TokenKind::Space) || self.cur_is(TokenKind::LineBreak) {
                self.next_token();
            }
        }
        debug!(
            blocks = document.blocks.len(),
            errors = self.errors.len(),
            "parsed document"
        );

        document
    }

    fn parse_block(&mut self) -> Option<Block> {
        match self.cur_token.kind {
            TokenKind::Hash => Some(self.parse_heading()),
            TokenKind::Hyphen => Some(self.parse_bullet_list()),
            TokenKind::LineBreak => None,
            _ => self.parse_paragraph(),
        }
    }

    // 見出し
    fn parse_heading(&mut self) -> Block {
        let mut count = 1;
        while self.expect_peek(TokenKind::Hash) {
            count += 1;
        }

        // '#'の後に空白がなくても見出しとして扱う
        self.expect_peek(TokenKind::Space);
        self.next_token();

        let contents = self.parse_inline_content(Context::Heading);

        Block::Heading {
            level: HeadingLevel::from_run(count),
            contents,
        }
    }

    // パラグラフ
    fn parse_paragraph(&mut self) -> Option<Block> {
        if self.cur_is(TokenKind::Backquote) && self.peek_is(TokenKind::Backquote) {
            return Some(self.parse_code_block());
        }

        let mut contents = vec![];
        while !(self.cur_is(TokenKind::EndOfInput) || self.cur_is_block_start()) {
            contents.extend(self.parse_inline_content(Context::Paragraph));

            if self.cur_is(TokenKind::LineBreak)
                || self.cur_is(TokenKind::Text)
                || self.cur_is(TokenKind::Space)
            {
                self.next_token();
            }
        }

        if contents.is_empty() {
            None
        } else {
            Some(Block::Paragraph { contents })
        }
    }

    pub(crate) fn parse_inline_content(&mut self, context: Context) -> Vec<Inline> {
        let mut contents = vec![];

        while self.cur_is_inline(context) {
            let inline = match self.cur_token.kind {
                TokenKind::Asterisk => self.parse_emphasis(),
                TokenKind::Backquote => self.parse_inline_code(),
                TokenKind::Tilde => self.parse_strikethrough(),
                _ => {
                    let text = self.parse_inline_text();
                    self.next_token();
                    text
                }
            };
            contents.push(inline);

            // 見出しは改行で終わる
            if context == Context::Heading && self.cur_is(TokenKind::LineBreak) {
                self.next_token();
                return contents;
            }

            if !self.cur_is_inline(context) {
                self.next_token();
            }

            if self.cur_is(TokenKind::LineBreak) && self.peek_is_keyword() {
                return contents;
            }
        }

        contents
    }

    fn parse_inline_text(&self) -> Inline {
        Inline::Text(self.cur_token.text.clone())
    }

    fn next_token(&mut self) {
        if self.cur_is(TokenKind::LineBreak) {
            self.line += 1;
        }
        let peek_token = self.lexer.next_token();
        self.cur_token = mem::replace(&mut self.peek_token, peek_token);
    }

    fn cur_is(&self, kind: TokenKind) -> bool {
        self.cur_token.kind == kind
    }

    fn peek_is(&self, kind: TokenKind) -> bool {
        self.peek_token.kind == kind
    }

    // peekが期待通りの場合だけトークンを進める
    fn expect_peek(&mut self, kind: TokenKind) -> bool {
        if self.peek_is(kind) {
            self.next_token();
            true
        } else {
            false
        }
    }

    fn cur_is_block_start(&self) -> bool {
        self.cur_is(TokenKind::Hash) || self.cur_is(TokenKind::Hyphen)
    }

    fn cur_is_inline(&self, context: Context) -> bool {
        match self.cur_token.kind {
            TokenKind::Asterisk
            | TokenKind::Backquote
            | TokenKind::Tilde
            | TokenKind::Text
            | TokenKind::Space => true,
            TokenKind::Hyphen => context == Context::Heading,
            _ => false,
        }
    }

    fn peek_is_keyword(&self) -> bool {
        matches!(
            self.peek_token.kind,
            TokenKind::Hash
                | TokenKind::Hyphen
                | TokenKind::Asterisk
                | TokenKind::Backquote
                | TokenKind::Tilde
                | TokenKind::Text
        )
    }

    fn report(&mut self, error: ParseError) {
        warn!(%error, "recoverable parse error");
        self.errors.push(error);
    }
}

pub fn parse(input: &str) -> (Document, Vec<ParseError>) {
    let mut parser = Parser::new(Lexer::new(input));
    let document = parser.parse_document();

    (document, parser.into_errors())
}
