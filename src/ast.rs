use serde::Serialize;

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Document {
    pub blocks: Vec<Block>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Block {
    Heading {
        level: HeadingLevel,
        contents: Vec<Inline>,
    },
    BulletList {
        items: Vec<Vec<Inline>>,
    },
    Paragraph {
        contents: Vec<Inline>,
    },
    CodeBlock {
        language: Inline,
        lines: Vec<Inline>,
    },
    HorizontalRule,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Inline {
    Emphasis {
        level: EmphasisLevel,
        contents: Vec<Inline>,
    },
    InlineCode {
        contents: Vec<Inline>,
    },
    Strikethrough {
        contents: Vec<Inline>,
    },
    Text(String),
}

impl Inline {
    pub fn text(content: impl Into<String>) -> Self {
        Inline::Text(content.into())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum HeadingLevel {
    H1,
    H2,
    H3,
    H4,
    H5,
    H6,
}

impl HeadingLevel {
    // 7個以上の'#'はh6として扱う
    pub(crate) fn from_run(count: usize) -> Self {
        match count {
            0 | 1 => HeadingLevel::H1,
            2 => HeadingLevel::H2,
            3 => HeadingLevel::H3,
            4 => HeadingLevel::H4,
            5 => HeadingLevel::H5,
            _ => HeadingLevel::H6,
        }
    }

    pub fn as_u8(self) -> u8 {
        match self {
            HeadingLevel::H1 => 1,
            HeadingLevel::H2 => 2,
            HeadingLevel::H3 => 3,
            HeadingLevel::H4 => 4,
            HeadingLevel::H5 => 5,
            HeadingLevel::H6 => 6,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum EmphasisLevel {
    Italic,
    Bold,
    BoldItalic,
}

impl EmphasisLevel {
    // 4個以上の'*'は太字斜体として扱う
    pub(crate) fn from_run(count: usize) -> Self {
        match count {
            0 | 1 => EmphasisLevel::Italic,
            2 => EmphasisLevel::Bold,
            _ => EmphasisLevel::BoldItalic,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{EmphasisLevel, HeadingLevel};

    #[test]
    fn heading_level_saturates() {
        assert_eq!(HeadingLevel::from_run(1), HeadingLevel::H1);
        assert_eq!(HeadingLevel::from_run(6), HeadingLevel::H6);
        assert_eq!(HeadingLevel::from_run(9), HeadingLevel::H6);
        assert_eq!(HeadingLevel::from_run(4).as_u8(), 4);
    }

    #[test]
    fn emphasis_level_saturates() {
        assert_eq!(EmphasisLevel::from_run(1), EmphasisLevel::Italic);
        assert_eq!(EmphasisLevel::from_run(2), EmphasisLevel::Bold);
        assert_eq!(EmphasisLevel::from_run(3), EmphasisLevel::BoldItalic);
        assert_eq!(EmphasisLevel::from_run(5), EmphasisLevel::BoldItalic);
    }
}
