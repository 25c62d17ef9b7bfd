use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::PathBuf,
};

use tracing::debug;

use crate::error::ConvertError;

pub const DEFAULT_STYLESHEET_PATH: &str = "res/minimark.css";

pub trait StyleSheet {
    fn load(&self) -> Result<String, ConvertError>;
}

#[derive(Debug, Clone)]
pub struct FileStyleSheet {
    path: PathBuf,
}

impl FileStyleSheet {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        FileStyleSheet { path: path.into() }
    }
}

impl Default for FileStyleSheet {
    fn default() -> Self {
        FileStyleSheet::new(DEFAULT_STYLESHEET_PATH)
    }
}

impl StyleSheet for FileStyleSheet {
    fn load(&self) -> Result<String, ConvertError> {
        let error = |source| ConvertError::StyleSheet {
            path: self.path.clone(),
            source,
        };

        let file = File::open(&self.path).map_err(error)?;
        let mut css = String::new();
        for line in BufReader::new(file).lines() {
            css.push_str(&line.map_err(error)?);
            css.push('\n');
        }
        debug!(path = %self.path.display(), bytes = css.len(), "loaded stylesheet");

        Ok(css)
    }
}

#[derive(Debug, Clone, Default)]
pub struct InlineStyleSheet {
    css: String,
}

impl InlineStyleSheet {
    pub fn new(css: impl Into<String>) -> Self {
        InlineStyleSheet { css: css.into() }
    }
}

impl StyleSheet for InlineStyleSheet {
    fn load(&self) -> Result<String, ConvertError> {
        Ok(self.css.clone())
    }
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::{FileStyleSheet, InlineStyleSheet, StyleSheet};
    use crate::error::ConvertError;

    #[test]
    fn file_stylesheet_reads_bundled_css() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("res/minimark.css");
        let css = FileStyleSheet::new(path).load().unwrap();
        assert!(css.contains("body"));
        assert!(css.ends_with('\n'));
    }

    #[test]
    fn missing_file_is_an_error() {
        let stylesheet = FileStyleSheet::new("does/not/exist.css");
        match stylesheet.load() {
            Err(ConvertError::StyleSheet { path, .. }) => {
                assert_eq!(path, Path::new("does/not/exist.css"))
            }
            other => panic!("expected stylesheet error, got {:?}", other),
        }
    }

    #[test]
    fn inline_stylesheet_is_verbatim() {
        let stylesheet = InlineStyleSheet::new("p { color: red; }");
        assert_eq!(stylesheet.load().unwrap(), "p { color: red; }");
    }
}
