//! Where an invocation's results are collected and where they end up.

use std::fs::File;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Append-only text collected during one invocation.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Accumulator {
    text: String,
}

impl Accumulator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `line` followed by a newline.
    pub fn push_line(&mut self, line: impl AsRef<str>) {
        self.text.push_str(line.as_ref());
        self.text.push('\n');
    }

    pub fn push_lines<I, S>(&mut self, lines: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for line in lines {
            self.push_line(line);
        }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

/// The console, or a file opened by `-o`.
#[derive(Debug, Default)]
pub enum Destination {
    #[default]
    Console,
    File { path: PathBuf, file: File },
}

impl Destination {
    /// Creates or truncates `path` for writing.
    pub fn open(path: impl AsRef<Path>) -> io::Result<Self> {
        let path = path.as_ref();
        let file = File::create(path)?;
        Ok(Destination::File {
            path: path.to_path_buf(),
            file,
        })
    }

    pub fn path(&self) -> Option<&Path> {
        match self {
            Destination::Console => None,
            Destination::File { path, .. } => Some(path),
        }
    }

    /// Writes `text` verbatim and releases the destination. `console` stands
    /// in for standard output.
    pub fn write<W: Write>(self, console: &mut W, text: &str) -> io::Result<()> {
        match self {
            Destination::Console => {
                console.write_all(text.as_bytes())?;
                console.flush()
            }
            Destination::File { mut file, .. } => {
                file.write_all(text.as_bytes())?;
                file.flush()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn accumulator_terminates_every_line() {
        let mut acc = Accumulator::new();
        assert!(acc.is_empty());
        acc.push_line("Lines in file: 3");
        acc.push_lines(["a", "b"]);
        assert_eq!(acc.as_str(), "Lines in file: 3\na\nb\n");
    }

    #[test]
    fn console_destination_writes_to_console() {
        let mut console = Vec::new();
        Destination::Console.write(&mut console, "hi\n").unwrap();
        assert_eq!(console, b"hi\n");
    }

    #[test]
    fn file_destination_truncates_and_writes() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.txt");
        fs::write(&path, "old content that is longer\n").unwrap();

        let destination = Destination::open(&path).unwrap();
        assert_eq!(destination.path(), Some(path.as_path()));
        let mut console = Vec::new();
        destination.write(&mut console, "new\n").unwrap();

        assert!(console.is_empty());
        assert_eq!(fs::read_to_string(&path).unwrap(), "new\n");
    }

    #[test]
    fn open_in_missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        assert!(Destination::open(dir.path().join("no/such/dir.txt")).is_err());
    }
}
