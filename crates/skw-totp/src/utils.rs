use std::time::{SystemTime, UNIX_EPOCH};
use subtle::ConstantTimeEq;

use crate::types::{Timestamp, TimeSlice};

/// wall clock seconds since epoch. A clock set before the epoch reads as 0.
pub fn unix_now() -> Timestamp {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}

pub fn time_slice(time: Timestamp, step: Timestamp) -> TimeSlice {
    time / step.max(1)
}

/// Constant time over equal length inputs; length is public (it is the code length).
pub fn constant_time_eq(a: &str, b: &str) -> bool {
    a.as_bytes().ct_eq(b.as_bytes()).into()
}
