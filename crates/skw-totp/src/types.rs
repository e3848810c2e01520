use serde::{Serialize, Deserialize};
use thiserror::Error;

pub const DEFAULT_SECRET_LEN: usize = 16;
pub const MIN_SECRET_LEN: usize = 16;
pub const MAX_SECRET_LEN: usize = 128;

pub const DEFAULT_CODE_LEN: usize = 6;
pub const MIN_CODE_LEN: usize = 6;
// truncated values are below 2^31 < 10^10
pub const MAX_CODE_LEN: usize = 10;

pub const DEFAULT_STEP: Timestamp = 30; // seconds, default by GA
pub const DEFAULT_DISCREPANCY: u64 = 1;
pub const MAX_DISCREPANCY: u64 = 10;

/// seconds since unix epoch
pub type Timestamp = u64;
/// `floor(timestamp / step)`, the HOTP counter
pub type TimeSlice = u64;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LengthField {
    Secret,
    Code,
}

impl std::fmt::Display for LengthField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LengthField::Secret => write!(f, "secret length must be within [{MIN_SECRET_LEN}, {MAX_SECRET_LEN}]"),
            LengthField::Code => write!(f, "code length must be within [{MIN_CODE_LEN}, {MAX_CODE_LEN}]"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TotpError {
    #[error("invalid length {len}: {field}")]
    InvalidLength { field: LengthField, len: usize },

    #[error("secure randomness unavailable: {0}")]
    RandomnessUnavailable(String),

    #[error("invalid base32 character {0:?}")]
    InvalidBase32Character(char),

    #[error("malformed base32 input")]
    MalformedBase32,

    #[error("invalid config: {0}")]
    InvalidConfig(String),
}

impl TotpError {
    pub fn is_invalid_length(&self) -> bool {
        matches!(self, TotpError::InvalidLength { .. })
    }
}
