//! Error handling types shared by every nanocc pipeline stage.
//!
//! All stages report failure the same way: a descriptive,
//! human-readable message with no structured error code. The compiler
//! never tracks source positions, so [`Error`] carries only the
//! message; diagnostics name the offending literal text instead.
//!
//! # Examples
//!
//! ```rust
//! use nanocc_syntax::error::{Result, error};
//!
//! fn parse_digit(s: &str) -> Result<u32> {
//!     match s.chars().next().and_then(|c| c.to_digit(10)) {
//!         Some(d) => Ok(d),
//!         None => error(format!("illegal token \"{}\"", s)),
//!     }
//! }
//! ```

use std::fmt;

/// An error raised by a nanocc pipeline stage.
///
/// Errors are fatal and non-recoverable within the pipeline: a stage
/// either returns a fully valid output structure or fails outright,
/// and the message propagates unchanged to the driver.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Error {
    /// Human-readable error message.
    pub msg: String,
}

impl Error {
    /// Creates a new error with the given message.
    pub fn new(msg: impl Into<String>) -> Self {
        Self { msg: msg.into() }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.msg)
    }
}

impl std::error::Error for Error {}

impl From<String> for Error {
    fn from(s: String) -> Self {
        Error::new(s)
    }
}
impl From<&str> for Error {
    fn from(s: &str) -> Self {
        Error::new(s)
    }
}

/// A specialized `Result` type for nanocc operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Convenience function to create an error result.
///
/// Shorthand for `Err(Error::new(msg))`.
pub fn error<T>(msg: impl Into<String>) -> Result<T> {
    Err(Error::new(msg))
}
