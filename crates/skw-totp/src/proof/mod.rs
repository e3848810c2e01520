use std::fmt::Debug;

use crate::types::Timestamp;

pub mod totp;

/// Challenge/response seam for an outer auth service: it issues a verifier
/// from random material, the holder produces a proof, the service checks it.
pub trait ProofSystem {
    type Proof;
    type Verifier;
    type RandomMaterial;
    type Config;

    type Err: Debug;

    fn generate_verifier(random_material: Self::RandomMaterial, config: Self::Config) -> Result<Self::Verifier, Self::Err>;
    fn generate_proof(verifier: &Self::Verifier, time: Timestamp) -> Result<Self::Proof, Self::Err>;
    fn verify_proof(proof: &Self::Proof, verifier: &Self::Verifier) -> Result<(), Self::Err>;
}
