//! Error types.

use thiserror::Error;

use crate::record::AddressFamily;

/// Result alias for nameserver enumeration.
pub type Result<T> = std::result::Result<T, ScanError>;

/// Errors returned by nameserver enumeration.
#[derive(Debug, Error)]
pub enum ScanError {
    /// The resolver configuration file could not be opened or read.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A statically configured server's address family is not enabled.
    #[error("nameserver family {family} is not enabled")]
    UnsupportedFamily {
        /// The configured server's family.
        family: AddressFamily,
    },

    /// The visitor stopped enumeration early; carries its status code.
    #[error("enumeration aborted by visitor (status {0})")]
    Aborted(i32),
}

impl ScanError {
    /// Maps the error to a C-style process status code.
    ///
    /// I/O failures become the negated OS error code (`-EIO` when the
    /// underlying error carries none), [`ScanError::UnsupportedFamily`]
    /// becomes `-ENOSYS`, and [`ScanError::Aborted`] yields the visitor's
    /// code verbatim. Success has no error and maps to `0`.
    #[must_use]
    pub fn status_code(&self) -> i32 {
        match self {
            Self::Io(e) => -e.raw_os_error().unwrap_or(libc::EIO),
            Self::UnsupportedFamily { .. } => -libc::ENOSYS,
            Self::Aborted(code) => *code,
        }
    }
}
