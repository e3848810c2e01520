use rand::{rngs::OsRng, CryptoRng, RngCore};

use crate::codec::Base32Codec;
use crate::types::{TotpError, LengthField, MIN_SECRET_LEN, MAX_SECRET_LEN};

/// Draws fresh shared secrets.
///
/// Each random byte is rendered as one Base32 character (low 5 bits), so a
/// secret of `length` characters carries `5 * length` bits of entropy.
pub struct SecretGenerator<R = OsRng> {
    rng: R,
    codec: Base32Codec,
}

impl SecretGenerator {
    pub fn from_os_rng() -> Self {
        Self::new(OsRng)
    }
}

impl Default for SecretGenerator {
    fn default() -> Self {
        Self::from_os_rng()
    }
}

impl<R: RngCore + CryptoRng> SecretGenerator<R> {
    pub fn new(rng: R) -> Self {
        Self { rng, codec: Base32Codec::default() }
    }

    pub fn create_secret(&mut self, length: usize) -> Result<String, TotpError> {
        validate_secret_length(length)?;

        let mut random_material = vec![0u8; length];
        self.rng
            .try_fill_bytes(&mut random_material)
            .map_err(|e| TotpError::RandomnessUnavailable(e.to_string()))?;

        log::debug!("created a new secret of {} characters", length);
        Ok(self.codec.encode_per_byte(&random_material))
    }
}

pub fn validate_secret_length(length: usize) -> Result<(), TotpError> {
    if !(MIN_SECRET_LEN..=MAX_SECRET_LEN).contains(&length) {
        return Err(TotpError::InvalidLength { field: LengthField::Secret, len: length });
    }
    Ok(())
}

#[cfg(test)]
mod test {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};
    use crate::codec::ALPHABET;
    use crate::types::DEFAULT_SECRET_LEN;

    struct BrokenRng;

    impl RngCore for BrokenRng {
        fn next_u32(&mut self) -> u32 { 0 }
        fn next_u64(&mut self) -> u64 { 0 }
        fn fill_bytes(&mut self, _dest: &mut [u8]) {}
        fn try_fill_bytes(&mut self, _dest: &mut [u8]) -> Result<(), rand::Error> {
            Err(rand::Error::new("entropy source offline"))
        }
    }
    impl CryptoRng for BrokenRng {}

    #[test]
    fn length_bounds() {
        let mut generator = SecretGenerator::from_os_rng();

        assert!(generator.create_secret(15).unwrap_err().is_invalid_length());
        assert!(generator.create_secret(129).unwrap_err().is_invalid_length());
        assert_eq!(generator.create_secret(16).unwrap().len(), 16);
        assert_eq!(generator.create_secret(128).unwrap().len(), 128);
        assert_eq!(generator.create_secret(DEFAULT_SECRET_LEN).unwrap().len(), DEFAULT_SECRET_LEN);
    }

    #[test]
    fn secrets_use_the_alphabet() {
        let mut generator = SecretGenerator::from_os_rng();
        let secret = generator.create_secret(64).unwrap();
        assert!(secret.bytes().all(|c| ALPHABET.contains(&c)));
    }

    #[test]
    fn secrets_differ() {
        let mut generator = SecretGenerator::from_os_rng();
        assert_ne!(generator.create_secret(32).unwrap(), generator.create_secret(32).unwrap());
    }

    #[test]
    fn seeded_rng_is_reproducible() {
        let a = SecretGenerator::new(StdRng::seed_from_u64(7)).create_secret(20).unwrap();
        let b = SecretGenerator::new(StdRng::seed_from_u64(7)).create_secret(20).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn rng_failure_propagates() {
        let err = SecretGenerator::new(BrokenRng).create_secret(16).unwrap_err();
        assert!(matches!(err, TotpError::RandomnessUnavailable(_)));
    }
}
