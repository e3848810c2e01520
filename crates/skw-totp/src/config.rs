use serde::{Serialize, Deserialize};

use crate::codec::{Base32Codec, DecodeMode};
use crate::code::{CodeGenerator, validate_code_length};
use crate::types::{
    TotpError, Timestamp,
    DEFAULT_CODE_LEN, DEFAULT_STEP, DEFAULT_DISCREPANCY, MAX_DISCREPANCY,
};

/// Immutable TOTP settings. Every `with_*` call returns a new value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TotpConfig {
    code_length: usize,
    step: Timestamp,
    discrepancy: u64,
    decode_mode: DecodeMode,
}

impl Default for TotpConfig {
    fn default() -> Self {
        Self {
            code_length: DEFAULT_CODE_LEN,
            step: DEFAULT_STEP,
            discrepancy: DEFAULT_DISCREPANCY,
            decode_mode: DecodeMode::Lenient,
        }
    }
}

impl TotpConfig {
    pub fn with_code_length(self, code_length: usize) -> Result<Self, TotpError> {
        validate_code_length(code_length)?;
        Ok(Self { code_length, ..self })
    }

    pub fn with_step(self, step: Timestamp) -> Result<Self, TotpError> {
        if step == 0 {
            return Err(TotpError::InvalidConfig("step must be at least one second".to_string()));
        }
        Ok(Self { step, ..self })
    }

    pub fn with_discrepancy(self, discrepancy: u64) -> Result<Self, TotpError> {
        if discrepancy > MAX_DISCREPANCY {
            return Err(TotpError::InvalidConfig(
                format!("discrepancy {discrepancy} exceeds {MAX_DISCREPANCY} steps")
            ));
        }
        Ok(Self { discrepancy, ..self })
    }

    pub fn with_decode_mode(self, decode_mode: DecodeMode) -> Self {
        Self { decode_mode, ..self }
    }

    pub fn code_length(&self) -> usize { self.code_length }
    pub fn step(&self) -> Timestamp { self.step }
    pub fn discrepancy(&self) -> u64 { self.discrepancy }
    pub fn decode_mode(&self) -> DecodeMode { self.decode_mode }

    pub fn codec(&self) -> Base32Codec {
        Base32Codec::new(self.decode_mode)
    }

    pub fn code_generator(&self) -> Result<CodeGenerator, TotpError> {
        CodeGenerator::new(self.code_length, self.codec())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn defaults() {
        let config = TotpConfig::default();
        assert_eq!(config.code_length(), 6);
        assert_eq!(config.step(), 30);
        assert_eq!(config.discrepancy(), 1);
        assert_eq!(config.decode_mode(), DecodeMode::Lenient);
    }

    #[test]
    fn builders_validate() {
        assert!(TotpConfig::default().with_code_length(5).unwrap_err().is_invalid_length());
        assert!(TotpConfig::default().with_step(0).is_err());
        assert!(TotpConfig::default().with_code_length(11).unwrap_err().is_invalid_length());
        assert!(TotpConfig::default().with_discrepancy(MAX_DISCREPANCY + 1).is_err());
        assert!(TotpConfig::default().with_discrepancy(u64::MAX).is_err());
        assert!(TotpConfig::default().with_discrepancy(MAX_DISCREPANCY).is_ok());

        let config = TotpConfig::default()
            .with_code_length(8).unwrap()
            .with_step(60).unwrap()
            .with_discrepancy(2).unwrap()
            .with_decode_mode(DecodeMode::Strict);

        assert_eq!(config.code_length(), 8);
        assert_eq!(config.step(), 60);
        assert_eq!(config.discrepancy(), 2);
        assert_eq!(config.codec(), Base32Codec::strict());
        assert_eq!(config.code_generator().unwrap().code_length(), 8);
    }

    #[test]
    fn builders_do_not_touch_the_original() {
        let base = TotpConfig::default();
        let _longer = base.with_code_length(10).unwrap();
        assert_eq!(base.code_length(), 6);
    }

    #[test]
    fn serde() {
        let config = TotpConfig::default().with_code_length(7).unwrap();
        let encoded = serde_json::to_string(&config).unwrap();
        let decoded: TotpConfig = serde_json::from_str(&encoded).unwrap();
        assert_eq!(config, decoded);
    }
}
