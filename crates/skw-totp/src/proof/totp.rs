use serde::{Serialize, Deserialize};

use super::ProofSystem;

use crate::clock::{Clock, SystemClock};
use crate::config::TotpConfig;
use crate::types::{Timestamp, TotpError};
use crate::utils::time_slice;
use crate::verify::Verifier;

pub const RANDOM_MATERIAL_LEN: usize = 20;

pub type TotpRandomMaterial = [u8; RANDOM_MATERIAL_LEN];

#[derive(Debug)]
pub struct TotpProofSystem();

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TotpVerifier {
    secret: String,
    config: TotpConfig,
}

impl TotpVerifier {
    pub fn secret(&self) -> &str {
        &self.secret
    }

    pub fn config(&self) -> &TotpConfig {
        &self.config
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TotpProof {
    pub code: String,
}

impl TotpProof {
    pub fn new(code: &str) -> Self {
        Self { code: code.to_string() }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TotpProofError {
    BadSecret(TotpError),
    InvalidProof,
}

impl From<TotpError> for TotpProofError {
    fn from(e: TotpError) -> Self {
        TotpProofError::BadSecret(e)
    }
}

impl TotpProofSystem {
    pub fn verify_proof_with_clock<C: Clock>(
        proof: &TotpProof,
        verifier: &TotpVerifier,
        clock: C,
    ) -> Result<(), TotpProofError> {
        let config = verifier.config;
        let v = Verifier::with_clock(config.code_generator()?, clock, config.step());

        if v.verify_code(&verifier.secret, &proof.code, config.discrepancy()) {
            Ok(())
        } else {
            Err(TotpProofError::InvalidProof)
        }
    }
}

impl ProofSystem for TotpProofSystem {
    type Proof = TotpProof;
    type Verifier = TotpVerifier;
    type RandomMaterial = TotpRandomMaterial;
    type Config = TotpConfig;

    type Err = TotpProofError;

    fn generate_verifier(random_material: Self::RandomMaterial, config: Self::Config) -> Result<Self::Verifier, Self::Err> {
        let secret = config.codec().encode(&random_material);
        Ok(TotpVerifier { secret, config })
    }

    fn generate_proof(verifier: &Self::Verifier, time: Timestamp) -> Result<Self::Proof, Self::Err> {
        let config = verifier.config;
        let code = config
            .code_generator()?
            .get_code(&verifier.secret, time_slice(time, config.step()))?;

        Ok(TotpProof { code })
    }

    fn verify_proof(proof: &Self::Proof, verifier: &Self::Verifier) -> Result<(), Self::Err> {
        Self::verify_proof_with_clock(proof, verifier, SystemClock)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::clock::FixedClock;
    use crate::utils::unix_now;

    #[test]
    fn smoke_test() {
        let random: TotpRandomMaterial = *b"12345678901234567890";
        let verifier = TotpProofSystem::generate_verifier(random, TotpConfig::default()).unwrap();
        assert_eq!(verifier.secret(), "GEZDGNBVGY3TQOJQGEZDGNBVGY3TQOJQ");

        let proof = TotpProofSystem::generate_proof(&verifier, unix_now()).unwrap();
        assert!(TotpProofSystem::verify_proof(&proof, &verifier).is_ok(), "valid proof");
    }

    #[test]
    fn pinned_clock() {
        let config = TotpConfig::default().with_code_length(8).unwrap();
        let verifier = TotpProofSystem::generate_verifier(*b"12345678901234567890", config).unwrap();

        let proof = TotpProofSystem::generate_proof(&verifier, 59).unwrap();
        assert_eq!(proof, TotpProof::new("94287082"));

        assert!(TotpProofSystem::verify_proof_with_clock(&proof, &verifier, FixedClock(75)).is_ok());
        assert_eq!(
            TotpProofSystem::verify_proof_with_clock(&proof, &verifier, FixedClock(3_000)),
            Err(TotpProofError::InvalidProof)
        );
    }

    #[test]
    fn verifier_serde() {
        let verifier = TotpProofSystem::generate_verifier([7u8; 20], TotpConfig::default()).unwrap();
        let encoded = serde_json::to_vec(&verifier).unwrap();
        let decoded: TotpVerifier = serde_json::from_slice(&encoded).unwrap();
        assert_eq!(verifier, decoded);
    }
}
