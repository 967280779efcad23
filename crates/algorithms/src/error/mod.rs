//! Error handling for the pairing engine

#[cfg(not(feature = "std"))]
use alloc::borrow::Cow;
#[cfg(feature = "std")]
use std::borrow::Cow;

use core::fmt;

use bnpair_api::{Error as CoreError, Result as CoreResult};

/// The error type for pairing-engine operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Parameter validation error
    Parameter {
        /// Name of the invalid parameter
        name: Cow<'static, str>,
        /// Reason why the parameter is invalid
        reason: Cow<'static, str>,
    },

    /// Length validation error, raised for truncated encodings
    Length {
        /// Context where the length error occurred
        context: &'static str,
        /// Expected length in bytes
        expected: usize,
        /// Actual length in bytes
        actual: usize,
    },

    /// Decoded coordinates are not on the curve, or a tag byte is invalid
    MalformedPoint {
        /// Group whose encoding was rejected
        context: &'static str,
    },

    /// A square root was requested for a non-residue
    NoSquareRoot {
        /// Operation that needed the square root
        context: &'static str,
    },

    /// An operation that needs an affine point received a projective one
    NotAffine {
        /// Operation whose precondition failed
        context: &'static str,
    },

    /// A message does not fit below p^12 and cannot be mapped into GT
    MessageTooLarge {
        /// Bit length of the rejected message
        bits: u64,
        /// Largest bit length that always fits
        max_bits: u64,
    },

    /// Fallback for other errors
    Other(&'static str),
}

impl Error {
    /// Shorthand to create a Parameter error
    pub fn param<N: Into<Cow<'static, str>>, R: Into<Cow<'static, str>>>(
        name: N,
        reason: R,
    ) -> Self {
        Error::Parameter {
            name: name.into(),
            reason: reason.into(),
        }
    }
}

/// Result type for pairing-engine operations
pub type Result<T> = core::result::Result<T, Error>;

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Parameter { name, reason } => {
                write!(f, "Invalid parameter '{}': {}", name, reason)
            },
            Error::Length { context, expected, actual } => {
                write!(f, "Not enough data for {}: expected {} bytes, got {}",
                    context, expected, actual)
            },
            Error::MalformedPoint { context } => {
                write!(f, "Malformed {} point", context)
            },
            Error::NoSquareRoot { context } => {
                write!(f, "No square root found in {}", context)
            },
            Error::NotAffine { context } => {
                write!(f, "{} needs a point in affine coordinates", context)
            },
            Error::MessageTooLarge { bits, max_bits } => {
                write!(f, "Message of {} bits is bigger than the GT modulus ({} bits), use key encapsulation",
                    bits, max_bits)
            },
            Error::Other(msg) => write!(f, "{}", msg),
        }
    }
}

// Implement std::error::Error when std is available
#[cfg(feature = "std")]
impl std::error::Error for Error {}

// Implement conversion to CoreError
impl From<Error> for CoreError {
    fn from(err: Error) -> Self {
        match err {
            Error::Parameter { name, reason } => CoreError::InvalidParameter {
                context: match name {
                    Cow::Borrowed(s) => s,
                    Cow::Owned(_) => "parameter",
                },
                #[cfg(feature = "std")]
                message: reason.into_owned(),
            },
            Error::Length { context, expected, actual } => CoreError::InvalidLength {
                context,
                expected,
                actual,
            },
            Error::MalformedPoint { context } => CoreError::InvalidPoint {
                context,
                #[cfg(feature = "std")]
                message: "malformed point".to_string(),
            },
            Error::NoSquareRoot { context } => CoreError::NoSquareRoot {
                context,
                #[cfg(feature = "std")]
                message: "no square root".to_string(),
            },
            Error::NotAffine { context } => CoreError::InvalidPoint {
                context,
                #[cfg(feature = "std")]
                message: "point must be in affine coordinates".to_string(),
            },
            Error::MessageTooLarge { bits, max_bits } => {
                #[cfg(not(feature = "std"))]
                let _ = (bits, max_bits);
                CoreError::MessageTooLarge {
                    context: "map_message_to_gt",
                    #[cfg(feature = "std")]
                    message: format!("{} bits exceeds {} bits", bits, max_bits),
                }
            },
            Error::Other(msg) => CoreError::Other {
                context: "bn256",
                #[cfg(feature = "std")]
                message: msg.to_string(),
            },
        }
    }
}

/// Convert an engine result to a core result with additional context
#[inline]
pub fn to_core_result<T>(r: Result<T>, ctx: &'static str) -> CoreResult<T> {
    r.map_err(|e| CoreError::from(e).with_context(ctx))
}

// Re-export core error handling traits for convenience
pub use bnpair_api::error::ResultExt;

// Include the validation submodule
pub mod validate;
