//! Library-wide error and result types.

use std::fmt;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// All errors the library can produce.
///
/// Error messages are kept intentionally terse; callers that need richer
/// context should wrap `Error` in their own type. Every kind is recoverable
/// by the caller: no operation panics on malformed input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// A key, IV or buffer does not have the expected size.
    InvalidInputLength,
    /// Malformed encoding: bad point prefix, non-hex input, broken Base64.
    InvalidEncoding,
    /// A public key decodes to coordinates that fail the curve equation.
    PointNotOnCurve,
    /// A private key or ephemeral scalar is outside [1, n−2].
    ScalarOutOfRange,
    /// The KDF produced an all-zero mask (mandatory reject per GB/T 32918.4).
    KdfAllZero,
    /// A GCM tag or SM2 C3 checksum did not match. No plaintext is exposed.
    AuthenticationFailed,
    /// Block-mode decryption encountered malformed PKCS#7 padding.
    PaddingInvalid,
    /// Rejection sampling exceeded its attempt budget.
    RetryBudgetExhausted,
    /// Modular inverse of zero or a non-coprime value was requested.
    InversionFailed,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidInputLength => write!(f, "invalid input length"),
            Error::InvalidEncoding => write!(f, "invalid encoding"),
            Error::PointNotOnCurve => write!(f, "point is not on the curve"),
            Error::ScalarOutOfRange => write!(f, "scalar out of range"),
            Error::KdfAllZero => write!(f, "KDF produced an all-zero mask"),
            Error::AuthenticationFailed => write!(f, "authentication failed"),
            Error::PaddingInvalid => write!(f, "invalid padding"),
            Error::RetryBudgetExhausted => write!(f, "retry budget exhausted"),
            Error::InversionFailed => write!(f, "no modular inverse exists"),
        }
    }
}

impl std::error::Error for Error {}
