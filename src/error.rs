use std::io;
use std::path::PathBuf;

use crate::common::io_error_msg;

/// Every failure in the encode/decode tools. All of them are terminal:
/// the binaries report the error on stderr and exit non-zero.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Wrong argument count or shape. Carries the usage line to print.
    #[error("{0}")]
    Usage(String),

    /// A file could not be opened, read, created or written.
    #[error("{}: {}", .path.display(), io_error_msg(.source))]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Decode input held a byte outside {alphabet, '=', '\n'}, an alphabet
    /// symbol after padding began, or a dangling single-symbol group.
    #[error("Invalid input file")]
    InvalidInput { offset: usize, byte: Option<u8> },
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Error::Io {
            path: path.into(),
            source,
        }
    }

    /// Process exit status for this error.
    pub fn exit_code(&self) -> i32 {
        1
    }
}
