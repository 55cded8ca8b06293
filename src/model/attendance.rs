use strum_macros::{Display, EnumString};

/// Seconds since the Unix epoch.
pub type Timestamp = i64;

#[derive(Debug, Copy, Clone, Eq, PartialEq, Display, EnumString)]
pub enum Direction {
    #[strum(serialize = "IN")]
    In,
    #[strum(serialize = "OUT")]
    Out,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct AttendanceRecord {
    pub timestamp: Timestamp,
    pub direction: Direction,
}

impl AttendanceRecord {
    pub fn clock_in(timestamp: Timestamp) -> Self {
        Self {
            timestamp,
            direction: Direction::In,
        }
    }

    pub fn clock_out(timestamp: Timestamp) -> Self {
        Self {
            timestamp,
            direction: Direction::Out,
        }
    }

    pub fn is_clock_in(&self) -> bool {
        self.direction == Direction::In
    }
}
