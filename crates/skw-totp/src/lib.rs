//! Time-based one time passwords (RFC 6238) compatible with Google Authenticator.
//!
//! - [`SecretGenerator`] draws a shared secret and renders it as Base32 text
//! - [`CodeGenerator`] derives the HOTP code of a time slice (HMAC-SHA1, dynamic truncation)
//! - [`Verifier`] accepts a code within a window of slices around "now"
//!
//! [`TotpAuth`] bundles the three under one [`TotpConfig`] and [`Clock`].

pub mod types;
pub mod utils;
pub mod clock;
pub mod codec;
pub mod secret;
pub mod code;
pub mod verify;
pub mod config;
pub mod env;
pub mod auth;
pub mod provisioning;
pub mod proof;

// re-exports - traits
pub use clock::Clock;
pub use proof::ProofSystem;

// re-exports
pub use types::{TotpError, LengthField, Timestamp, TimeSlice};
pub use clock::{SystemClock, FixedClock};
pub use codec::{Base32Codec, DecodeMode};
pub use secret::SecretGenerator;
pub use code::CodeGenerator;
pub use verify::Verifier;
pub use config::TotpConfig;
pub use auth::TotpAuth;
pub use provisioning::{key_uri, qr_code_url, QrOptions, ErrorCorrection};
pub use proof::totp::{TotpProofSystem, TotpProof, TotpVerifier, TotpProofError, TotpRandomMaterial};
