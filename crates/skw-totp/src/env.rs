use std::str::FromStr;

use crate::codec::DecodeMode;
use crate::config::TotpConfig;
use crate::types::TotpError;

pub const CODE_LENGTH_VAR: &str = "TOTP_CODE_LENGTH";
pub const STEP_VAR: &str = "TOTP_STEP_SECONDS";
pub const DISCREPANCY_VAR: &str = "TOTP_DISCREPANCY";
pub const STRICT_BASE32_VAR: &str = "TOTP_STRICT_BASE32";

impl TotpConfig {
    /// Reads overrides from the process environment (and `.env` once
    /// `dotenv::dotenv()` has run). Unset variables keep their defaults.
    pub fn from_env() -> Result<Self, TotpError> {
        Self::from_lookup(|key| dotenv::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, TotpError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = TotpConfig::default();

        if let Some(code_length) = parse_var::<usize, _>(&lookup, CODE_LENGTH_VAR)? {
            config = config.with_code_length(code_length)?;
        }
        if let Some(step) = parse_var::<u64, _>(&lookup, STEP_VAR)? {
            config = config.with_step(step)?;
        }
        if let Some(discrepancy) = parse_var::<u64, _>(&lookup, DISCREPANCY_VAR)? {
            config = config.with_discrepancy(discrepancy)?;
        }
        if let Some(strict) = parse_var::<bool, _>(&lookup, STRICT_BASE32_VAR)? {
            config = config.with_decode_mode(
                if strict { DecodeMode::Strict } else { DecodeMode::Lenient }
            );
        }

        Ok(config)
    }
}

fn parse_var<T, F>(lookup: &F, key: &str) -> Result<Option<T>, TotpError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        None => Ok(None),
        Some(raw) => raw
            .trim()
            .parse::<T>()
            .map(Some)
            .map_err(|e| TotpError::InvalidConfig(format!("{key}={raw:?}: {e}"))),
    }
}
