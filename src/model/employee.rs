use super::attendance::{AttendanceRecord, Direction, Timestamp};

pub type EmployeeId = u32;

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Employee {
    pub id: EmployeeId,
    pub name: String,
    pub designation: String,
    pub department: String,
    records: Vec<AttendanceRecord>,
}

impl Employee {
    pub fn new(
        id: EmployeeId,
        name: impl Into<String>,
        designation: impl Into<String>,
        department: impl Into<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            designation: designation.into(),
            department: department.into(),
            records: Vec::new(),
        }
    }

    /// Records in the order they were appended.
    pub fn records(&self) -> &[AttendanceRecord] {
        &self.records
    }

    pub fn add_clock_in(&mut self, timestamp: Timestamp) {
        self.records.push(AttendanceRecord::clock_in(timestamp));
    }

    pub fn add_clock_out(&mut self, timestamp: Timestamp) {
        self.records.push(AttendanceRecord::clock_out(timestamp));
    }

    /// Used by the store loader; records are never removed once pushed.
    pub(crate) fn push_record(&mut self, record: AttendanceRecord) {
        self.records.push(record);
    }

    /// More IN than OUT records. Not an alternation check: two IN records
    /// in a row still count as clocked in.
    pub fn is_clocked_in(&self) -> bool {
        let ins = self.records.iter().filter(|r| r.is_clock_in()).count();
        ins > self.records.len() - ins
    }

    pub fn last_clock_in(&self) -> Option<Timestamp> {
        self.last_of(Direction::In)
    }

    pub fn last_clock_out(&self) -> Option<Timestamp> {
        self.last_of(Direction::Out)
    }

    // Last by position, not by time.
    fn last_of(&self, direction: Direction) -> Option<Timestamp> {
        self.records
            .iter()
            .rev()
            .find(|r| r.direction == direction)
            .map(|r| r.timestamp)
    }
}
