//! Flag-driven text statistics.
//!
//! A [`TextSource`] holds a file's lines; the [`stats`] and [`filters`]
//! functions turn it into counts and word lists; the [`Interpreter`] reads a
//! flag sequence such as `-f notes.txt -n -s`, runs each flag in order and
//! writes the collected output to the console or to the file named by `-o`.
//!
//! # Example
//! ```
//! use text_stats::{FlagRegistry, Interpreter};
//!
//! let dir = tempfile::tempdir().unwrap();
//! let path = dir.path().join("notes.txt");
//! std::fs::write(&path, "level 42\nhello noon\n").unwrap();
//!
//! let args = vec![
//!     "-f".to_string(),
//!     path.to_string_lossy().into_owned(),
//!     "-n".to_string(),
//!     "-p".to_string(),
//!     "noon".to_string(),
//! ];
//! let mut interpreter = Interpreter::new(FlagRegistry::standard(), Vec::new());
//! interpreter.execute(args).unwrap();
//!
//! let printed = String::from_utf8(interpreter.into_console()).unwrap();
//! assert_eq!(printed, "Lines in file: 2\nPalindroms found:\nnoon\n");
//! ```

pub mod error;
pub mod filters;
pub mod interpreter;
pub mod office;
pub mod output;
pub mod registry;
pub mod source;
pub mod stats;
pub mod tokens;

pub use error::{CommandError, SourceError};
pub use interpreter::{HELP_TEXT, Interpreter, MAX_BATCH_DEPTH, Settings};
pub use office::{extract_text_from_docx, extract_text_from_odt, extract_text_from_pdf};
pub use output::{Accumulator, Destination};
pub use registry::{FlagRegistry, Opcode};
pub use source::TextSource;
pub use tokens::TokenStream;
