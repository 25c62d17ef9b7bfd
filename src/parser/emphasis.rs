use super::Parser;
use crate::{
    ast::{EmphasisLevel, Inline},
    error::{ParseError, SpanKind},
    token::TokenKind,
};

impl Parser<'_> {
    // 強調
    pub(super) fn parse_emphasis(&mut self) -> Inline {
        let line = self.line;
        let count = self.parse_opening_run(TokenKind::Asterisk);
        let contents = self.parse_span_text(TokenKind::Asterisk, SpanKind::Emphasis, line);
        self.skip_closing_run(TokenKind::Asterisk, count);

        Inline::Emphasis {
            level: EmphasisLevel::from_run(count),
            contents,
        }
    }

    // 打ち消し
    pub(super) fn parse_strikethrough(&mut self) -> Inline {
        let line = self.line;
        let count = self.parse_opening_run(TokenKind::Tilde);
        let contents = self.parse_span_text(TokenKind::Tilde, SpanKind::Strikethrough, line);
        self.skip_closing_run(TokenKind::Tilde, count);

        Inline::Strikethrough { contents }
    }

    fn parse_opening_run(&mut self, delimiter: TokenKind) -> usize {
        let mut count = 1;
        while self.expect_peek(delimiter) {
            count += 1;
        }
        self.next_token();

        count
    }

    // 入力が尽きたらエラーを記録して打ち切る
    pub(super) fn parse_span_text(
        &mut self,
        closing: TokenKind,
        kind: SpanKind,
        line: usize,
    ) -> Vec<Inline> {
        let mut contents = vec![];
        while !self.cur_is(closing) {
            if self.cur_is(TokenKind::EndOfInput) {
                self.report(ParseError::UnterminatedSpan { kind, line });
                break;
            }
            contents.push(self.parse_inline_text());
            self.next_token();
        }

        contents
    }

    // 閉じ側は開き側の個数まで読み飛ばす
    fn skip_closing_run(&mut self, delimiter: TokenKind, count: usize) {
        let mut skipped = 0;
        while skipped < count && self.cur_is(delimiter) {
            self.next_token();
            skipped += 1;
        }
    }
}
