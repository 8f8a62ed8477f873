//! A file loaded into memory as an ordered list of lines.

use std::fs;
use std::path::{Path, PathBuf};

use log::debug;

use crate::error::SourceError;
use crate::office::{extract_text_from_docx, extract_text_from_odt, extract_text_from_pdf};

/// The fully buffered contents of one file.
///
/// Lines keep file order with their terminators stripped; empty lines are
/// kept. Words are derived on demand by splitting every line at whitespace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextSource {
    path: PathBuf,
    lines: Vec<String>,
}

impl TextSource {
    /// Reads `path` into memory.
    ///
    /// `.docx`, `.odt` and `.pdf` files go through the matching extractor,
    /// everything else is read as UTF-8 text.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SourceError> {
        let path = path.as_ref();
        let text = read_text(path)?;
        let source = Self::from_text(path, &text);
        debug!(
            "loaded {} ({} lines)",
            path.display(),
            source.line_count()
        );
        Ok(source)
    }

    /// Builds a source from text already in memory.
    pub fn from_text(path: impl Into<PathBuf>, text: &str) -> Self {
        TextSource {
            path: path.into(),
            lines: text.lines().map(String::from).collect(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Every whitespace-delimited word, line by line.
    pub fn words(&self) -> Vec<&str> {
        self.lines
            .iter()
            .flat_map(|line| line.split_whitespace())
            .collect()
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }
}

fn read_text(path: &Path) -> Result<String, SourceError> {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase);
    let extract: fn(&Path) -> Result<String, String> = match extension.as_deref() {
        Some("docx") => extract_text_from_docx,
        Some("odt") => extract_text_from_odt,
        Some("pdf") => extract_text_from_pdf,
        _ => {
            return fs::read_to_string(path)
                .map_err(|e| SourceError::from_io(path.to_path_buf(), e));
        }
    };

    // Extractors only report strings; tell a missing document apart first.
    if !path.exists() {
        return Err(SourceError::NotFound {
            path: path.to_path_buf(),
        });
    }
    extract(path).map_err(|reason| SourceError::Malformed {
        path: path.to_path_buf(),
        reason,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn lines_strip_terminators_and_keep_blank_lines() {
        let source = TextSource::from_text("mem", "one two\n\nthree\n");
        assert_eq!(source.lines(), ["one two", "", "three"]);
        assert_eq!(source.line_count(), 3);
    }

    #[test]
    fn last_line_without_newline_is_kept() {
        let source = TextSource::from_text("mem", "a\nb");
        assert_eq!(source.lines(), ["a", "b"]);
    }

    #[test]
    fn empty_text_has_no_lines() {
        let source = TextSource::from_text("mem", "");
        assert_eq!(source.line_count(), 0);
        assert!(source.words().is_empty());
    }

    #[test]
    fn words_follow_line_then_token_order() {
        let source = TextSource::from_text("mem", "  alpha\tbeta \n\ngamma\n");
        assert_eq!(source.words(), vec!["alpha", "beta", "gamma"]);
    }

    #[test]
    fn load_reads_file_from_disk() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "level\nhello\n").unwrap();
        let source = TextSource::load(file.path()).unwrap();
        assert_eq!(source.lines(), ["level", "hello"]);
        assert_eq!(source.path(), file.path());
    }

    #[test]
    fn load_missing_file_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let err = TextSource::load(dir.path().join("nope.txt")).unwrap_err();
        assert!(matches!(err, SourceError::NotFound { .. }));

        let err = TextSource::load(dir.path().join("nope.docx")).unwrap_err();
        assert!(matches!(err, SourceError::NotFound { .. }));
    }

    #[test]
    fn load_non_utf8_file_is_unreadable() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(&[0xff, 0xfe, 0x00, 0x80]).unwrap();
        let err = TextSource::load(file.path()).unwrap_err();
        assert!(matches!(err, SourceError::Unreadable { .. }));
    }

    #[test]
    fn broken_document_is_malformed() {
        let mut file = tempfile::Builder::new().suffix(".docx").tempfile().unwrap();
        file.write_all(b"definitely not a zip archive").unwrap();
        let err = TextSource::load(file.path()).unwrap_err();
        assert!(matches!(err, SourceError::Malformed { .. }));
    }
}
