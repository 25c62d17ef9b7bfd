use super::Parser;
use crate::{
    ast::{Block, Inline},
    error::{ParseError, SpanKind},
    token::TokenKind,
};

// 閉じフェンスとして扱うバッククォートの個数
const FENCE_LENGTH: usize = 3;

impl Parser<'_> {
    // インラインコード
    pub(super) fn parse_inline_code(&mut self) -> Inline {
        let line = self.line;
        self.next_token(); // skip '`'

        let contents = self.parse_span_text(TokenKind::Backquote, SpanKind::InlineCode, line);
        self.next_token(); // skip '`'

        Inline::InlineCode { contents }
    }

    // コードブロック
    pub(super) fn parse_code_block(&mut self) -> Block {
        let line = self.line;
        while self.cur_is(TokenKind::Backquote) {
            self.next_token();
        }

        // 行の残りは言語名
        let mut language = String::new();
        while !(self.cur_is(TokenKind::LineBreak) || self.cur_is(TokenKind::EndOfInput)) {
            language.push_str(&self.cur_token.text);
            self.next_token();
        }
        self.next_token(); // skip '\n'

        let language = Inline::text(language.trim());
        let mut lines = vec![];
        loop {
            while !self.cur_is(TokenKind::Backquote) {
                if self.cur_is(TokenKind::EndOfInput) {
                    self.report(ParseError::UnterminatedCodeBlock { line });
                    return Block::CodeBlock { language, lines };
                }
                lines.push(self.parse_inline_text());
                self.next_token();
            }

            let mut fence = vec![];
            while self.cur_is(TokenKind::Backquote) {
                fence.push(self.parse_inline_text());
                self.next_token();
            }

            // 3個ちょうどでなければ本文の一部
            if fence.len() == FENCE_LENGTH {
                break;
            }
            lines.extend(fence);
        }

        Block::CodeBlock { language, lines }
    }
}
