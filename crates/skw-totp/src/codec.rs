//! RFC 4648 Base32 for shared secrets.
//!
//! Encoding goes through the `base32` crate with full bit-stream packing, so
//! `decode(encode(b)) == b`. Decoding normalizes first (upper-case, `=` removed)
//! and then handles characters outside `A-Z2-7` according to the [`DecodeMode`].
//!
//! [`Base32Codec::encode_per_byte`] is the legacy secret rendering: one output
//! character per input byte, taken from the byte's low 5 bits. It is NOT the
//! inverse of `decode` and is only used to render freshly drawn random secrets.

use serde::{Serialize, Deserialize};
use base32::Alphabet;

use crate::types::TotpError;

pub const ALPHABET: &[u8; 32] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ234567";
const PADDING: char = '=';

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum DecodeMode {
    /// unknown characters are skipped
    #[default]
    Lenient,
    /// unknown characters fail the decode
    Strict,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Base32Codec {
    mode: DecodeMode,
}

impl Base32Codec {
    pub fn new(mode: DecodeMode) -> Self {
        Self { mode }
    }

    pub fn lenient() -> Self {
        Self::new(DecodeMode::Lenient)
    }

    pub fn strict() -> Self {
        Self::new(DecodeMode::Strict)
    }

    pub fn mode(&self) -> DecodeMode {
        self.mode
    }

    pub fn encode(&self, bytes: &[u8]) -> String {
        base32::encode(Alphabet::RFC4648 { padding: false }, bytes)
    }

    pub fn encode_per_byte(&self, bytes: &[u8]) -> String {
        bytes
            .iter()
            .map(|b| ALPHABET[(b & 0x1F) as usize] as char)
            .collect()
    }

    pub fn decode(&self, text: &str) -> Result<Vec<u8>, TotpError> {
        let normalized = self.normalize(text)?;

        // `normalized` only holds alphabet characters here
        base32::decode(Alphabet::RFC4648 { padding: false }, &normalized)
            .ok_or(TotpError::MalformedBase32)
    }

    fn normalize(&self, text: &str) -> Result<String, TotpError> {
        let mut out = String::with_capacity(text.len());
        let mut dropped = 0usize;

        for c in text.chars().filter(|c| *c != PADDING) {
            let upper = c.to_ascii_uppercase();
            if upper.is_ascii() && ALPHABET.contains(&(upper as u8)) {
                out.push(upper);
                continue;
            }

            match self.mode {
                DecodeMode::Strict => return Err(TotpError::InvalidBase32Character(c)),
                DecodeMode::Lenient => dropped += 1,
            }
        }

        if dropped > 0 {
            log::warn!("base32 decode skipped {} unknown character(s)", dropped);
        }

        Ok(out)
    }
}
