#![allow(clippy::module_name_repetitions)]
use std::num::TryFromIntError;

#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum UuidConstructionError {
    #[error(transparent)]
    IntegerConversion(#[from] TryFromIntError),

    #[error("The timestamp provided is too low.")]
    TimestampBeforeEpoch,

    #[error("The timestamp provided is too high.")]
    TimestampOverflow,
}

#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DurationToTicksError {
    #[error("The duration is too long to be represented as a 60-bit tick count.")]
    TimestampOverflow,
}

impl From<DurationToTicksError> for UuidConstructionError {
    fn from(error: DurationToTicksError) -> Self {
        match error {
            DurationToTicksError::TimestampOverflow => Self::TimestampOverflow,
        }
    }
}

/// Errors produced while parsing the canonical 36-character textual form.
///
/// Only the strict DCE 1.1 grammar is accepted: exactly 36 bytes, hyphens
/// at positions 8, 13, 18 and 23, hexadecimal digits everywhere else. The
/// convenience spellings (braces, `urn:uuid:`, no-hyphen) are rejected.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum UuidParseError {
    #[error("a UUID string must be exactly 36 characters long")]
    InvalidLength,

    #[error("hyphens must appear only at positions 8, 13, 18 and 23")]
    InvalidHyphenPlacement,

    #[error("'{ch}' at position {idx} is not a hexadecimal digit")]
    InvalidCharacter { ch: char, idx: usize },
}

/// The five-kind error taxonomy exposed at the facade boundary.
///
/// This mirrors the original C library's `uuid_rc_t`, but carries a
/// descriptive payload instead of collapsing every failure into a bare
/// code: callers that only care about the kind can match on the variant,
/// while `error_code` recovers the original discriminant for the
/// `error_string` lookup table.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum UuidError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("out of memory")]
    OutOfMemory,

    #[error("system error: {0}")]
    SystemError(String),

    #[error("internal error: {0}")]
    InternalError(String),
}

impl From<UuidParseError> for UuidError {
    fn from(error: UuidParseError) -> Self {
        Self::InvalidArgument(error.to_string())
    }
}

impl From<UuidConstructionError> for UuidError {
    fn from(error: UuidConstructionError) -> Self {
        Self::SystemError(error.to_string())
    }
}

/// The bare discriminant behind a [`UuidError`], matching `uuid_rc_t`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    Ok,
    InvalidArgument,
    OutOfMemory,
    SystemError,
    InternalError,
}

impl UuidError {
    #[must_use]
    pub const fn code(&self) -> ErrorCode {
        match self {
            Self::InvalidArgument(_) => ErrorCode::InvalidArgument,
            Self::OutOfMemory => ErrorCode::OutOfMemory,
            Self::SystemError(_) => ErrorCode::SystemError,
            Self::InternalError(_) => ErrorCode::InternalError,
        }
    }
}

/// Returns the static, human-readable string for an error code.
///
/// Unlike `uuid_error()` in the original, which returns `NULL` for the
/// internal-error code, every kind here maps to a real string; a facade
/// surface that can fail internally should still be able to describe why.
#[must_use]
pub const fn error_string(code: ErrorCode) -> &'static str {
    match code {
        ErrorCode::Ok => "success",
        ErrorCode::InvalidArgument => "invalid argument",
        ErrorCode::OutOfMemory => "out of memory",
        ErrorCode::SystemError => "system error",
        ErrorCode::InternalError => "internal error",
    }
}
