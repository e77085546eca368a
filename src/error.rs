use std::io;
use std::process::ExitCode;
use thiserror::Error;

/// Result type for bridge operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur during one invocation exchange
#[derive(Error, Debug)]
pub enum Error {
    #[error("malformed request document: {0}")]
    Decode(#[source] serde_json::Error),

    #[error("request document is not a JSON object")]
    NotAnObject,

    #[error("cannot encode response envelope: {0}")]
    Encode(#[source] serde_json::Error),

    #[error("response envelope is {len} bytes, more than the length marker can describe")]
    FrameTooLarge { len: usize },

    #[error("short write: expected {expected} bytes, wrote {written}")]
    ShortWrite { expected: usize, written: usize },

    #[error("cannot read request stream: {0}")]
    Read(#[source] io::Error),

    #[error("cannot write response stream: {0}")]
    Write(#[source] io::Error),

    #[error("cannot flush response stream: {0}")]
    Flush(#[source] io::Error),

    #[error("captured output is {len} bytes, too short to carry a length marker")]
    TruncatedFrame { len: usize },

    #[error("length marker declares {declared} bytes but only {available} precede it")]
    MarkerMismatch { declared: usize, available: usize },
}

impl Error {
    /// Process exit code reported to the host.
    ///
    /// The host distinguishes failure classes by code alone: 2 means the
    /// request never decoded (the handler was not invoked), 3 means framing
    /// went wrong (any output already written must be discarded), 4 means
    /// the underlying streams failed. A panicking handler exits with the
    /// runtime's own panic code, distinct from all of these.
    pub fn exit_code(&self) -> ExitCode {
        let code: u8 = match self {
            Self::Decode(_) | Self::NotAnObject => 2,
            Self::Encode(_)
            | Self::FrameTooLarge { .. }
            | Self::ShortWrite { .. }
            | Self::TruncatedFrame { .. }
            | Self::MarkerMismatch { .. } => 3,
            Self::Read(_) | Self::Write(_) | Self::Flush(_) => 4,
        };
        ExitCode::from(code)
    }
}
