use hmacsha1::hmac_sha1;
use serde::{Serialize, Deserialize};

use crate::codec::Base32Codec;
use crate::types::{TotpError, LengthField, TimeSlice, DEFAULT_CODE_LEN, MIN_CODE_LEN, MAX_CODE_LEN};

/// HOTP over a time slice counter (RFC 4226 / RFC 6238, HMAC-SHA1).
///
/// The code length is fixed at construction; derive a new generator with
/// [`CodeGenerator::with_code_length`] to issue codes of another length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodeGenerator {
    code_length: usize,
    codec: Base32Codec,
}

impl Default for CodeGenerator {
    fn default() -> Self {
        Self {
            code_length: DEFAULT_CODE_LEN,
            codec: Base32Codec::default(),
        }
    }
}

impl CodeGenerator {
    pub fn new(code_length: usize, codec: Base32Codec) -> Result<Self, TotpError> {
        validate_code_length(code_length)?;
        Ok(Self { code_length, codec })
    }

    pub fn with_code_length(self, code_length: usize) -> Result<Self, TotpError> {
        Self::new(code_length, self.codec)
    }

    pub fn code_length(&self) -> usize {
        self.code_length
    }

    pub fn codec(&self) -> &Base32Codec {
        &self.codec
    }

    pub fn get_code(&self, secret: &str, time_slice: TimeSlice) -> Result<String, TotpError> {
        let key = self.codec.decode(secret)?;
        Ok(self.get_code_raw(&key, time_slice))
    }

    /// Same as [`CodeGenerator::get_code`] with an already decoded key.
    pub fn get_code_raw(&self, key: &[u8], time_slice: TimeSlice) -> String {
        let hash = hmac_sha1(key, &counter(time_slice));
        let code = truncate(&hash) as u64;

        // code_length <= MAX_CODE_LEN, so the power always fits
        let modulus = u32::try_from(self.code_length)
            .ok()
            .and_then(|len| 10_u64.checked_pow(len));
        let code = match modulus {
            Some(modulus) => code % modulus,
            None => code,
        };

        format!("{:0>width$}", code, width = self.code_length)
    }
}

/// 8 byte big-endian counter: high 4 bytes zero, low 4 bytes the slice.
/// Slices at or above 2^32 wrap onto their low 32 bits.
fn counter(time_slice: TimeSlice) -> [u8; 8] {
    let mut buf = [0u8; 8];
    buf[4..].copy_from_slice(&(time_slice as u32).to_be_bytes());
    buf
}

pub fn validate_code_length(code_length: usize) -> Result<(), TotpError> {
    if !(MIN_CODE_LEN..=MAX_CODE_LEN).contains(&code_length) {
        return Err(TotpError::InvalidLength { field: LengthField::Code, len: code_length });
    }
    Ok(())
}

/// dynamic truncation
fn truncate(hash: &[u8; 20]) -> u32 {
    let offset = (hash[hash.len() - 1] & 0x0F) as usize;
    let mut truncated_hash: [u8; 4] = Default::default();
    truncated_hash.copy_from_slice(&hash[offset..offset + 4]);

    u32::from_be_bytes(truncated_hash) & 0x7FFF_FFFF
}
