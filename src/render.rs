use std::fmt::Write;

use crate::ast::{Block, Document, EmphasisLevel, Inline};

pub trait ToHtml {
    fn write_html(&self, out: &mut String);

    fn to_html(&self) -> String {
        let mut out = String::new();
        self.write_html(&mut out);
        out
    }
}

impl ToHtml for [Inline] {
    fn write_html(&self, out: &mut String) {
        for inline in self {
            inline.write_html(out);
        }
    }
}

// エスケープはしない
impl ToHtml for Inline {
    fn write_html(&self, out: &mut String) {
        match self {
            Inline::Emphasis { level, contents } => {
                let (open, close) = match level {
                    EmphasisLevel::Italic => ("<em>", "</em>"),
                    EmphasisLevel::Bold => ("<strong>", "</strong>"),
                    EmphasisLevel::BoldItalic => ("<strong><em>", "</em></strong>"),
                };
                out.push_str(open);
                contents.write_html(out);
                out.push_str(close);
            }
            Inline::InlineCode { contents } => {
                out.push_str("<code>");
                contents.write_html(out);
                out.push_str("</code>");
            }
            Inline::Strikethrough { contents } => {
                out.push_str("<s>");
                contents.write_html(out);
                out.push_str("</s>");
            }
            Inline::Text(content) => out.push_str(content),
        }
    }
}

impl ToHtml for Block {
    fn write_html(&self, out: &mut String) {
        match self {
            Block::Heading { level, contents } => {
                let level = level.as_u8();
                let _ = write!(out, "<h{}>", level);
                contents.write_html(out);
                let _ = writeln!(out, "</h{}>", level);
            }
            Block::BulletList { items } => {
                out.push_str("<p>\n<ul>\n");
                for item in items {
                    out.push_str("<li>");
                    item.write_html(out);
                    out.push_str("</li>\n");
                }
                out.push_str("</ul>\n</p>\n");
            }
            Block::Paragraph { contents } => {
                out.push_str("<p>");
                contents.write_html(out);
                out.push_str("</p>\n");
            }
            Block::CodeBlock { language, lines } => {
                out.push_str("<pre class=\"language-");
                language.write_html(out);
                out.push_str("\">\n<code>\n");
                lines.write_html(out);
                out.push_str("</code>\n</pre>\n");
            }
            Block::HorizontalRule => out.push_str("<hr/>\n"),
        }
    }
}

impl ToHtml for Document {
    fn write_html(&self, out: &mut String) {
        for block in &self.blocks {
            block.write_html(out);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::ToHtml;
    use crate::ast::{Block, Document, EmphasisLevel, HeadingLevel, Inline};

    #[test]
    fn render_emphasis_levels() {
        // 強調
        let cases = [
            (EmphasisLevel::Italic, "<em>x</em>"),
            (EmphasisLevel::Bold, "<strong>x</strong>"),
            (EmphasisLevel::BoldItalic, "<strong><em>x</em></strong>"),
        ];
        for (level, expected) in cases {
            let node = Inline::Emphasis {
                level,
                contents: vec![Inline::text("x")],
            };
            assert_eq!(node.to_html(), expected);
        }
    }

    #[test]
    fn render_heading() {
        let node = Block::Heading {
            level: HeadingLevel::H3,
            contents: vec![
                Inline::text("a"),
                Inline::Strikethrough {
                    contents: vec![Inline::text("b")],
                },
            ],
        };
        assert_eq!(node.to_html(), "<h3>a<s>b</s></h3>\n");
    }

    #[test]
    fn render_heading_tags_follow_level() {
        let cases = [
            (HeadingLevel::H1, "<h1>t</h1>\n"),
            (HeadingLevel::H2, "<h2>t</h2>\n"),
            (HeadingLevel::H6, "<h6>t</h6>\n"),
        ];
        for (level, expected) in cases {
            let node = Block::Heading {
                level,
                contents: vec![Inline::text("t")],
            };
            assert_eq!(node.to_html(), expected);
        }
    }

    #[test]
    fn render_bullet_list() {
        // リスト
        let node = Block::BulletList {
            items: vec![
                vec![Inline::text("a")],
                vec![Inline::InlineCode {
                    contents: vec![Inline::text("b")],
                }],
            ],
        };
        assert_eq!(
            node.to_html(),
            "<p>\n<ul>\n<li>a</li>\n<li><code>b</code></li>\n</ul>\n</p>\n"
        );
    }

    #[test]
    fn render_code_block_without_language() {
        // コードブロック
        let node = Block::CodeBlock {
            language: Inline::text(""),
            lines: vec![Inline::text("x"), Inline::text("\n")],
        };
        assert_eq!(
            node.to_html(),
            "<pre class=\"language-\">\n<code>\nx\n</code>\n</pre>\n"
        );
    }

    #[test]
    fn render_does_not_escape() {
        let node = Block::Paragraph {
            contents: vec![Inline::text("<b>&</b>")],
        };
        assert_eq!(node.to_html(), "<p><b>&</b></p>\n");
    }

    #[test]
    fn render_is_idempotent() {
        let document = Document {
            blocks: vec![
                Block::HorizontalRule,
                Block::Paragraph {
                    contents: vec![Inline::text("p")],
                },
            ],
        };
        let first = document.to_html();
        assert_eq!(first, "<hr/>\n<p>p</p>\n");
        assert_eq!(document.to_html(), first);
    }
}
