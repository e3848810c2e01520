use serde::{Serialize, Deserialize};

use crate::types::{Timestamp, TimeSlice};
use crate::utils::{unix_now, time_slice};

/// Source of "now". Injected into [`crate::TotpAuth`] and [`crate::Verifier`]
/// so tests can pin time instead of reading the wall clock.
pub trait Clock {
    fn now(&self) -> Timestamp;

    fn current_time_slice(&self, step: Timestamp) -> TimeSlice {
        time_slice(self.now(), step)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Timestamp {
        unix_now()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FixedClock(pub Timestamp);

impl Clock for FixedClock {
    fn now(&self) -> Timestamp {
        self.0
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now(&self) -> Timestamp {
        (**self).now()
    }
}
