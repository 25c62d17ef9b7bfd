pub mod ast;
pub mod converter;
pub mod error;
pub mod evaluator;
pub mod lexer;
pub mod parser;
pub mod render;
pub mod repl;
pub mod stylesheet;
pub mod token;

pub use ast::{Block, Document, EmphasisLevel, HeadingLevel, Inline};
pub use converter::{convert, ConvertOptions, Converter};
pub use error::{ConvertError, ParseError};
pub use evaluator::{evaluate, EvaluatedDocument, Fragment, FragmentKind};
pub use lexer::{tokenize, Lexer};
pub use parser::{parse, Parser};
pub use render::ToHtml;
pub use stylesheet::{FileStyleSheet, InlineStyleSheet, StyleSheet};
pub use token::{Token, TokenKind};

pub fn markdown_to_html(input: &str) -> String {
    let (document, _) = parse(input);
    evaluate(&document).inspect()
}
