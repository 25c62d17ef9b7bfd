use super::{Context, Parser};
use crate::{
    ast::{Block, Inline},
    token::TokenKind,
};

impl Parser<'_> {
    // リスト(--で始まる場合は水平線)
    pub(super) fn parse_bullet_list(&mut self) -> Block {
        if self.cur_is(TokenKind::Hyphen) && self.peek_is(TokenKind::Hyphen) {
            return self.parse_horizontal_rule();
        }

        let mut items = vec![self.parse_list_item()];
        while self.cur_is(TokenKind::Hyphen) && !self.peek_is(TokenKind::Hyphen) {
            items.push(self.parse_list_item());
        }

        Block::BulletList { items }
    }

    // 水平線
    fn parse_horizontal_rule(&mut self) -> Block {
        while self.cur_is(TokenKind::Hyphen) {
            self.next_token();
        }
        if self.cur_is(TokenKind::LineBreak) {
            self.next_token();
        }

        Block::HorizontalRule
    }

    fn parse_list_item(&mut self) -> Vec<Inline> {
        if self.cur_is(TokenKind::Hyphen) {
            self.next_token(); // skip '-'
        }
        if self.cur_is(TokenKind::Space) {
            self.next_token(); // skip ' '
        }

        let contents = self.parse_inline_content(Context::ListItem);

        // 次の項目の'-'は残しておく
        if !self.cur_is(TokenKind::Hyphen) {
            self.next_token();
        }

        contents
    }
}
