use chrono::Utc;

use crate::model::Timestamp;

pub trait Clock {
    fn now(&self) -> Timestamp;
}

/// Wall clock. Epoch seconds are zone independent; local time only matters
/// when rendering reports.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Timestamp {
        Utc::now().timestamp()
    }
}

#[cfg(test)]
pub(crate) use manual::ManualClock;
