use std::error::Error;
use std::fmt::{Display, Formatter};
use std::io;

/// Custom error type for everything that can go wrong while computing an XOR checksum
#[derive(Debug)]
pub enum XorError {
    /// The requested word width is not one of 8, 16, 32 or 64
    InvalidWidth(i64),
    /// The input file could not be opened for reading
    Open { path: String, source: io::Error },
    /// Reading from the input failed before the end of the stream was reached
    Read { path: String, source: io::Error },
}

impl Error for XorError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            XorError::InvalidWidth(_) => None,
            XorError::Open { source, .. } | XorError::Read { source, .. } => Some(source),
        }
    }
}

impl Display for XorError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            XorError::InvalidWidth(width) => write!(f, "size must be one of <8, 16, 32, 64>: {}", width),
            XorError::Open { path, source } => write!(f, "failed to open '{}': {}", path, source),
            XorError::Read { path, source } => write!(f, "failed to read data from file '{}': {}", path, source),
        }
    }
}
