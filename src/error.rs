/* src/error.rs */

use thiserror::Error;

/// Result type alias for operations that may fail with `IpError`.
pub type Result<T> = std::result::Result<T, IpError>;

/// Errors that can occur while reading an address.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum IpError {
    /// The text is not a strict dotted-quad IPv4 address.
    #[error("Malformed IPv4 address {input:?}: {reason}")]
    MalformedAddress { input: String, reason: Malformed },
}

/// Why a dotted-quad was rejected.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Malformed {
    #[error("expected 4 parts, found {0}")]
    PartCount(usize),

    #[error("octet must be 1 to 3 characters, found {0}")]
    OctetLength(usize),

    #[error("octet contains a non-digit character")]
    NonDigit,

    /// Octal or decimal is ambiguous for `010`, so it is refused outright.
    #[error("octet has a leading zero")]
    LeadingZero,

    #[error("octet value {0} exceeds 255")]
    OutOfRange(u16),
}

impl IpError {
    pub(crate) fn malformed(input: &str, reason: Malformed) -> Self {
        IpError::MalformedAddress {
            input: input.to_string(),
            reason,
        }
    }

    /// The rejection reason.
    pub fn reason(&self) -> Malformed {
        match self {
            IpError::MalformedAddress { reason, .. } => *reason,
        }
    }
}
