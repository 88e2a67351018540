//! Error types for the XDR codec
//!
//! Every failure falls into one of four kinds (see [`ErrorKind`]):
//! conversion, truncation, format, or residual data. Callers that only care
//! about the category can classify with [`Error::kind`] instead of matching
//! every variant.

use std::fmt;

use thiserror::Error;

/// Result type alias for codec operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while encoding or decoding XDR values
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A value cannot be represented in the form the operation requires,
    /// e.g. text outside the configured charset or a length that does not
    /// fit the u32 prefix
    #[error("{op}: cannot convert {input}")]
    Conversion {
        /// Name of the failing operation
        op: &'static str,
        /// Truncated diagnostic of the offending value
        input: String,
    },

    /// Fewer bytes remain in the source than a fixed-width read requires
    #[error("data len ({available}) less than needed ({needed})")]
    Truncated {
        /// Bytes available from the cursor to the end of the source
        available: usize,
        /// Bytes the read requires
        needed: usize,
    },

    /// A fixed array was encoded with the wrong number of items
    #[error("fixed array size mismatch: declared {declared}, got {actual}")]
    ArraySize {
        /// Length the caller declared
        declared: usize,
        /// Number of items actually supplied
        actual: usize,
    },

    /// A list continuation marker was neither 0 nor 1
    #[error("0 or 1 expected, got {0}")]
    BadMarker(u32),

    /// The source buffer still has unconsumed bytes at the completion check
    #[error("unextracted data remains: {remaining} bytes past position {position}")]
    Residual {
        /// Cursor position at the time of the check
        position: usize,
        /// Unconsumed bytes after the cursor
        remaining: usize,
    },
}

/// Coarse classification of [`Error`] variants
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Value not representable in the required form
    Conversion,
    /// Source buffer exhausted mid-read
    Truncation,
    /// Structural rule violated (array size, list marker)
    Format,
    /// Buffer not fully consumed
    Residual,
}

impl Error {
    /// Returns the kind of this error
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Error::Conversion { .. } => ErrorKind::Conversion,
            Error::Truncated { .. } => ErrorKind::Truncation,
            Error::ArraySize { .. } | Error::BadMarker(_) => ErrorKind::Format,
            Error::Residual { .. } => ErrorKind::Residual,
        }
    }

    /// Build a conversion error with a bounded diagnostic of the bad input
    pub(crate) fn conversion(op: &'static str, input: &dyn fmt::Debug) -> Self {
        const MAX_DIAG: usize = 24;

        let mut repr = format!("{input:?}");
        if repr.len() > MAX_DIAG {
            let cut = repr
                .char_indices()
                .map(|(i, _)| i)
                .take_while(|&i| i <= MAX_DIAG)
                .last()
                .unwrap_or(0);
            repr.truncate(cut);
            repr.push_str("...");
        }
        Error::Conversion { op, input: repr }
    }
}
