use crate::clock::{Clock, SystemClock};
use crate::code::CodeGenerator;
use crate::types::{Timestamp, TimeSlice, DEFAULT_STEP, MAX_DISCREPANCY};
use crate::utils::constant_time_eq;

/// Checks candidate codes against a window of time slices around "now".
#[derive(Debug, Clone)]
pub struct Verifier<C = SystemClock> {
    generator: CodeGenerator,
    clock: C,
    step: Timestamp,
}

impl Verifier {
    pub fn new(generator: CodeGenerator) -> Self {
        Self::with_clock(generator, SystemClock, DEFAULT_STEP)
    }
}

impl<C: Clock> Verifier<C> {
    pub fn with_clock(generator: CodeGenerator, clock: C, step: Timestamp) -> Self {
        Self { generator, clock, step: step.max(1) }
    }

    pub fn generator(&self) -> &CodeGenerator {
        &self.generator
    }

    pub fn current_time_slice(&self) -> TimeSlice {
        self.clock.current_time_slice(self.step)
    }

    pub fn verify_code(&self, secret: &str, code: &str, discrepancy: u64) -> bool {
        self.verify_code_at(secret, code, discrepancy, self.current_time_slice())
    }

    /// Accepts `code` if it matches any slice in
    /// `[time_slice - discrepancy, time_slice + discrepancy]`. Slices below zero
    /// do not exist and are skipped; `discrepancy` is capped at
    /// [`MAX_DISCREPANCY`]. Every failure, including an undecodable secret, is
    /// reported as `false`.
    pub fn verify_code_at(
        &self,
        secret: &str,
        code: &str,
        discrepancy: u64,
        time_slice: TimeSlice,
    ) -> bool {
        self.verify_with(secret, code, discrepancy, time_slice, |key, tm| {
            self.generator.get_code_raw(key, tm)
        })
    }

    fn verify_with<F>(
        &self,
        secret: &str,
        code: &str,
        discrepancy: u64,
        time_slice: TimeSlice,
        mut code_at: F,
    ) -> bool
    where
        F: FnMut(&[u8], TimeSlice) -> String,
    {
        if code.len() != self.generator.code_length() {
            return false;
        }

        let key = match self.generator.codec().decode(secret) {
            Ok(key) => key,
            Err(e) => {
                log::debug!("rejecting code for undecodable secret: {}", e);
                return false;
            }
        };

        if discrepancy > MAX_DISCREPANCY {
            log::warn!("discrepancy {} capped at {}", discrepancy, MAX_DISCREPANCY);
        }
        let discrepancy = discrepancy.min(MAX_DISCREPANCY);

        let lower_bound = time_slice.saturating_sub(discrepancy);
        let upper_bound = time_slice.saturating_add(discrepancy);
        log::trace!("verifying code over slices {}..={}", lower_bound, upper_bound);

        for tm in lower_bound..=upper_bound {
            if constant_time_eq(&code_at(&key, tm), code) {
                return true;
            }
        }

        false
    }
}
