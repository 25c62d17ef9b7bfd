use std::{
    io::{self, BufRead, Write},
    path::PathBuf,
};

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::{
    error::ConvertError,
    evaluator::evaluate,
    parser::parse,
    stylesheet::{FileStyleSheet, StyleSheet, DEFAULT_STYLESHEET_PATH},
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConvertOptions {
    pub stylesheet: PathBuf,
    pub fragment: bool,
    pub strict: bool,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        ConvertOptions {
            stylesheet: PathBuf::from(DEFAULT_STYLESHEET_PATH),
            fragment: false,
            strict: false,
        }
    }
}

pub struct Converter {
    stylesheet: Box<dyn StyleSheet>,
    fragment: bool,
    strict: bool,
}

impl Converter {
    pub fn new(stylesheet: impl StyleSheet + 'static) -> Self {
        Converter {
            stylesheet: Box::new(stylesheet),
            fragment: false,
            strict: false,
        }
    }

    pub fn from_options(options: &ConvertOptions) -> Self {
        Converter::new(FileStyleSheet::new(options.stylesheet.clone()))
            .fragment(options.fragment)
            .strict(options.strict)
    }

    pub fn fragment(mut self, fragment: bool) -> Self {
        self.fragment = fragment;
        self
    }

    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    pub fn convert_str(&self, input: &str) -> Result<String, ConvertError> {
        let (document, errors) = parse(input);
        if self.strict && !errors.is_empty() {
            return Err(ConvertError::Malformed(errors));
        }

        let evaluated = evaluate(&document);
        if self.fragment {
            Ok(evaluated.inspect())
        } else {
            evaluated.render(self.stylesheet.as_ref())
        }
    }

    pub fn convert<R: BufRead, W: Write>(
        &self,
        reader: R,
        mut writer: W,
    ) -> Result<(), ConvertError> {
        let input = read_input(reader)?;
        let html = self.convert_str(&input)?;
        writer.write_all(html.as_bytes())?;
        writer.flush()?;
        info!(input = input.len(), output = html.len(), "converted document");

        Ok(())
    }
}

pub fn read_input<R: BufRead>(reader: R) -> io::Result<String> {
    let mut input = String::new();
    for line in reader.lines() {
        input.push_str(&line?);
        input.push('\n');
    }
    debug!(bytes = input.len(), "read input");

    Ok(input)
}

pub fn convert<R: BufRead, W: Write>(
    reader: R,
    writer: W,
    stylesheet: impl StyleSheet + 'static,
) -> Result<(), ConvertError> {
    Converter::new(stylesheet).convert(reader, writer)
}
