//! A light implementation of Google Authenticator

use crate::clock::{Clock, SystemClock};
use crate::code::CodeGenerator;
use crate::config::TotpConfig;
use crate::secret::SecretGenerator;
use crate::types::{TotpError, Timestamp, TimeSlice};
use crate::utils::time_slice;
use crate::verify::Verifier;

#[derive(Debug, Clone)]
pub struct TotpAuth<C = SystemClock> {
    config: TotpConfig,
    verifier: Verifier<C>,
}

impl TotpAuth {
    pub fn new(config: TotpConfig) -> Result<Self, TotpError> {
        Self::with_clock(config, SystemClock)
    }
}

impl<C: Clock> TotpAuth<C> {
    pub fn with_clock(config: TotpConfig, clock: C) -> Result<Self, TotpError> {
        let verifier = Verifier::with_clock(config.code_generator()?, clock, config.step());
        Ok(Self { config, verifier })
    }

    pub fn config(&self) -> &TotpConfig {
        &self.config
    }

    pub fn generator(&self) -> &CodeGenerator {
        self.verifier.generator()
    }

    pub fn create_secret(&self, length: usize) -> Result<String, TotpError> {
        SecretGenerator::from_os_rng().create_secret(length)
    }

    pub fn current_time_slice(&self) -> TimeSlice {
        self.verifier.current_time_slice()
    }

    pub fn time_slice_of(&self, time: Timestamp) -> TimeSlice {
        time_slice(time, self.config.step())
    }

    pub fn get_code(&self, secret: &str) -> Result<String, TotpError> {
        self.get_code_at(secret, self.current_time_slice())
    }

    pub fn get_code_at(&self, secret: &str, time_slice: TimeSlice) -> Result<String, TotpError> {
        self.generator().get_code(secret, time_slice)
    }

    /// Verifies with the configured discrepancy against the clock.
    pub fn verify_code(&self, secret: &str, code: &str) -> bool {
        self.verifier.verify_code(secret, code, self.config.discrepancy())
    }

    pub fn verify_code_with(
        &self,
        secret: &str,
        code: &str,
        discrepancy: u64,
        time_slice: Option<TimeSlice>,
    ) -> bool {
        let t = time_slice.unwrap_or_else(|| self.current_time_slice());
        self.verifier.verify_code_at(secret, code, discrepancy, t)
    }
}
