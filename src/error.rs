//! Error types for the checked encoding layer
//!
//! The core encoder never fails; these errors are only produced by the
//! checked entry points that validate a call before encoding it.

/// Errors reported by the checked encoding entry points
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// Buffer too small for the encoded record
    ShortBuffer,
    /// Format string ends inside a directive
    MalformedFormat,
    /// Format string asks for more arguments than were supplied
    MissingArgument,
    /// Argument kind does not match the directive that consumes it
    ArgumentMismatch,
    /// Arguments left over after the format string was fully scanned
    ExcessArguments,
}

impl Error {
    /// Returns a human-readable description of the error
    pub const fn description(&self) -> &'static str {
        match self {
            Error::ShortBuffer => "buffer too small for encoded record",
            Error::MalformedFormat => "format string ends inside a directive",
            Error::MissingArgument => "format string requires more arguments",
            Error::ArgumentMismatch => "argument kind does not match directive",
            Error::ExcessArguments => "more arguments than directives",
        }
    }
}

#[cfg(feature = "std")]
impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.description())
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

/// Result type alias for deferfmt operations
pub type Result<T> = core::result::Result<T, Error>;
