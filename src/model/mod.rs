pub mod attendance;
pub mod employee;
pub mod roster;

pub use attendance::{AttendanceRecord, Direction, Timestamp};
pub use employee::{Employee, EmployeeId};
pub use roster::{IdPolicy, Roster};
