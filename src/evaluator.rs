use serde::Serialize;
use tracing::debug;

use crate::{
    ast::{Block, Document},
    error::ConvertError,
    render::ToHtml,
    stylesheet::StyleSheet,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum FragmentKind {
    Heading,
    List,
    CodeBlock,
    Paragraph,
    HorizontalRule,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Fragment {
    pub kind: FragmentKind,
    pub value: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct EvaluatedDocument {
    pub fragments: Vec<Fragment>,
}

pub fn evaluate(document: &Document) -> EvaluatedDocument {
    let fragments = document
        .blocks
        .iter()
        .map(evaluate_block)
        .collect::<Vec<_>>();
    debug!(fragments = fragments.len(), "evaluated document");

    EvaluatedDocument { fragments }
}

pub fn evaluate_block(block: &Block) -> Fragment {
    let kind = match block {
        Block::Heading { .. } => FragmentKind::Heading,
        Block::BulletList { .. } => FragmentKind::List,
        Block::CodeBlock { .. } => FragmentKind::CodeBlock,
        Block::Paragraph { .. } => FragmentKind::Paragraph,
        Block::HorizontalRule => FragmentKind::HorizontalRule,
    };

    Fragment {
        kind,
        value: block.to_html(),
    }
}

impl EvaluatedDocument {
    pub fn inspect(&self) -> String {
        self.fragments
            .iter()
            .map(|fragment| fragment.value.as_str())
            .collect()
    }

    pub fn render(&self, stylesheet: &dyn StyleSheet) -> Result<String, ConvertError> {
        let css = stylesheet.load()?;

        let mut out = String::new();
        out.push_str("<!DOCTYPE html>\n");
        out.push_str("<html>\n");
        out.push_str("<head>\n");
        out.push_str("<meta charset=\"utf-8\">\n");
        out.push_str(
            "<meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n",
        );
        out.push_str("<style>\n");
        out.push_str(&css);
        if !css.is_empty() && !css.ends_with('\n') {
            out.push('\n');
        }
        out.push_str("</style>\n");
        out.push_str("</head>\n");
        out.push_str("<body for=\"html-export\" class=\"body\">\n");
        out.push_str(&self.inspect());
        out.push_str("</body>\n");
        out.push_str("</html>\n");

        Ok(out)
    }
}
