//! Error type definitions for pairing operations

#[cfg(feature = "std")]
use std::string::String;

/// Primary error type for pairing operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Invalid length error with context
    InvalidLength {
        context: &'static str,
        expected: usize,
        actual: usize,
    },

    /// Invalid parameter error
    InvalidParameter {
        context: &'static str,
        #[cfg(feature = "std")]
        message: String,
    },

    /// Encoded point is not on its curve or carries a bad tag
    InvalidPoint {
        context: &'static str,
        #[cfg(feature = "std")]
        message: String,
    },

    /// A square root was requested for a non-residue
    NoSquareRoot {
        context: &'static str,
        #[cfg(feature = "std")]
        message: String,
    },

    /// A message is too large to be embedded into GT directly
    MessageTooLarge {
        context: &'static str,
        #[cfg(feature = "std")]
        message: String,
    },

    /// Other error
    Other {
        context: &'static str,
        #[cfg(feature = "std")]
        message: String,
    },
}

/// Result type for pairing operations
pub type Result<T> = core::result::Result<T, Error>;

impl Error {
    /// Add context to an existing error
    pub fn with_context(self, context: &'static str) -> Self {
        match self {
            Self::InvalidLength { expected, actual, .. } => Self::InvalidLength {
                context,
                expected,
                actual,
            },
            Self::InvalidParameter { .. } => Self::InvalidParameter {
                context,
                #[cfg(feature = "std")]
                message: String::new(),
            },
            Self::InvalidPoint { .. } => Self::InvalidPoint {
                context,
                #[cfg(feature = "std")]
                message: String::new(),
            },
            Self::NoSquareRoot { .. } => Self::NoSquareRoot {
                context,
                #[cfg(feature = "std")]
                message: String::new(),
            },
            Self::MessageTooLarge { .. } => Self::MessageTooLarge {
                context,
                #[cfg(feature = "std")]
                message: String::new(),
            },
            Self::Other { .. } => Self::Other {
                context,
                #[cfg(feature = "std")]
                message: String::new(),
            },
        }
    }

    /// Add a message to an existing error (when std is available)
    #[cfg(feature = "std")]
    pub fn with_message(self, message: impl Into<String>) -> Self {
        let message = message.into();
        match self {
            Self::InvalidLength { context, expected, actual } => Self::InvalidLength {
                context,
                expected,
                actual,
            },
            Self::InvalidParameter { context, .. } => Self::InvalidParameter { context, message },
            Self::InvalidPoint { context, .. } => Self::InvalidPoint { context, message },
            Self::NoSquareRoot { context, .. } => Self::NoSquareRoot { context, message },
            Self::MessageTooLarge { context, .. } => Self::MessageTooLarge { context, message },
            Self::Other { context, .. } => Self::Other { context, message },
        }
    }
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::InvalidLength { context, expected, actual } => {
                write!(f, "{}: invalid length (expected {}, got {})",
                    context, expected, actual)
            },
            #[cfg(feature = "std")]
            Self::InvalidParameter { context, message } => {
                write!(f, "{}: {}", context, message)
            },
            #[cfg(not(feature = "std"))]
            Self::InvalidParameter { context } => {
                write!(f, "Invalid parameter: {}", context)
            },
            #[cfg(feature = "std")]
            Self::InvalidPoint { context, message } => {
                write!(f, "Invalid point: {}: {}", context, message)
            },
            #[cfg(not(feature = "std"))]
            Self::InvalidPoint { context } => {
                write!(f, "Invalid point: {}", context)
            },
            #[cfg(feature = "std")]
            Self::NoSquareRoot { context, message } => {
                write!(f, "No square root: {}: {}", context, message)
            },
            #[cfg(not(feature = "std"))]
            Self::NoSquareRoot { context } => {
                write!(f, "No square root: {}", context)
            },
            #[cfg(feature = "std")]
            Self::MessageTooLarge { context, message } => {
                write!(f, "Message too large: {}: {}", context, message)
            },
            #[cfg(not(feature = "std"))]
            Self::MessageTooLarge { context } => {
                write!(f, "Message too large: {}", context)
            },
            #[cfg(feature = "std")]
            Self::Other { context, message } => {
                write!(f, "{}: {}", context, message)
            },
            #[cfg(not(feature = "std"))]
            Self::Other { context } => {
                write!(f, "Error: {}", context)
            },
        }
    }
}
