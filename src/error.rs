//! Error types for loading text sources and interpreting flag sequences.

use std::io;
use std::path::PathBuf;

/// Failure to turn a path into a [`crate::TextSource`].
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    #[error("file not found: {}", path.display())]
    NotFound { path: PathBuf },

    #[error("cannot read {}: {source}", path.display())]
    Unreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("cannot extract text from {}: {reason}", path.display())]
    Malformed { path: PathBuf, reason: String },
}

impl SourceError {
    pub(crate) fn from_io(path: PathBuf, err: io::Error) -> Self {
        match err.kind() {
            io::ErrorKind::NotFound => SourceError::NotFound { path },
            _ => SourceError::Unreadable { path, source: err },
        }
    }
}

/// Errors raised while dispatching one invocation.
#[derive(Debug, thiserror::Error)]
pub enum CommandError {
    #[error("unknown flag `{0}`")]
    UnknownFlag(String),

    #[error("flag `{flag}` expects an argument")]
    MissingArgument { flag: String },

    #[error("-i should be the only specified flag")]
    InputFlagNotAlone,

    #[error("flag `{flag}` needs a file, specify one with -f first")]
    NoFileLoaded { flag: String },

    #[error(transparent)]
    File(SourceError),

    #[error("wrong input file provided: {0}")]
    InputFileMissing(#[source] SourceError),

    #[error("cannot open output file {}: {source}", path.display())]
    Output {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("input files nested deeper than {limit} levels (at depth {depth})")]
    RecursionLimitExceeded { depth: usize, limit: usize },
}

impl CommandError {
    /// True for malformed flag sequences: an unknown flag, or a flag
    /// missing its argument.
    pub fn is_parse_error(&self) -> bool {
        matches!(
            self,
            CommandError::UnknownFlag(_) | CommandError::MissingArgument { .. }
        )
    }
}
