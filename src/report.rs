use std::fmt;

use chrono::{DateTime, TimeZone};
use strum_macros::Display;
use tracing::warn;

use crate::model::{AttendanceRecord, Direction, Employee, Timestamp};

const NOT_AVAILABLE: &str = "N/A";
const SECONDS_PER_HOUR: f64 = 3600.0;

#[derive(Debug, Copy, Clone, Eq, PartialEq, Display)]
pub enum Remark {
    #[strum(serialize = "Short Attendance")]
    ShortAttendance,
    #[strum(serialize = "Half Day")]
    HalfDay,
    #[strum(serialize = "Full Day")]
    FullDay,
}

impl Remark {
    pub fn classify(hours: f64) -> Self {
        if hours < 4.0 {
            Remark::ShortAttendance
        } else if hours < 8.0 {
            Remark::HalfDay
        } else {
            Remark::FullDay
        }
    }
}

/// Hours between the OUT record at `index` and whatever record sits right
/// before it. `None` for IN records and for an OUT with no predecessor.
pub fn working_hours(records: &[AttendanceRecord], index: usize) -> Option<f64> {
    let record = records.get(index)?;
    if record.direction != Direction::Out {
        return None;
    }
    let previous = records.get(index.checked_sub(1)?)?;
    Some(record.timestamp.saturating_sub(previous.timestamp) as f64 / SECONDS_PER_HOUR)
}

#[derive(Debug, Clone, PartialEq)]
pub struct ReportRow {
    pub direction: Direction,
    pub timestamp: Timestamp,
    pub working_hours: Option<f64>,
    pub remark: Option<Remark>,
}

pub fn report_rows(employee: &Employee) -> Vec<ReportRow> {
    let records = employee.records();
    records
        .iter()
        .enumerate()
        .map(|(i, record)| {
            let hours = working_hours(records, i);
            if record.direction == Direction::Out && hours.is_none() {
                warn!(
                    employee_id = employee.id,
                    timestamp = record.timestamp,
                    "Clock out without a preceding record, working hours unavailable"
                );
            }
            ReportRow {
                direction: record.direction,
                timestamp: record.timestamp,
                working_hours: hours,
                remark: hours.map(Remark::classify),
            }
        })
        .collect()
}

pub fn render_employee_report<Tz>(employee: &Employee, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: fmt::Display,
{
    let mut out = format!(
        "Attendance Report for Employee ID: {}\nName: {}\nDesignation: {}\nDepartment: {}\n\n",
        employee.id, employee.name, employee.designation, employee.department
    );
    out.push_str(&format!(
        "{:<4}{:>12}{:>10}{:>15}{:>15}{:>20}\n",
        "Type", "Date", "Day", "Time", "Working Hours", "Remark"
    ));
    out.push_str(&"-".repeat(76));
    out.push('\n');

    for row in report_rows(employee) {
        let (date, day, time) = match localize(tz, row.timestamp) {
            Some(dt) => (
                dt.format("%d-%m-%Y").to_string(),
                dt.format("%A").to_string(),
                dt.format("%H:%M:%S").to_string(),
            ),
            None => na3(),
        };
        out.push_str(&format!(
            "{:<4}{:>12}{:>10}{:>15}",
            row.direction.to_string(),
            date,
            day,
            time
        ));
        match (row.direction, row.working_hours, row.remark) {
            (Direction::Out, Some(hours), Some(remark)) => {
                out.push_str(&format!("{:>15.2}{:>20}", hours, remark.to_string()));
            }
            (Direction::Out, _, _) => out.push_str(&format!("{NOT_AVAILABLE:>15}")),
            (Direction::In, _, _) => {}
        }
        out.push('\n');
    }
    out
}

pub fn render_roster_listing<Tz>(employees: &[Employee], tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: fmt::Display,
{
    let mut out = String::from("List of All Users:\n");
    out.push_str(&format!(
        "{:>5}{:>15}{:>20}{:>20}{:>22}{:>22}\n",
        "ID", "Name", "Designation", "Department", "Last Clock In", "Last Clock Out"
    ));
    out.push_str(&"-".repeat(104));
    out.push('\n');

    for emp in employees {
        out.push_str(&format!(
            "{:>5}{:>15}{:>20}{:>20}{:>22}{:>22}\n",
            emp.id,
            emp.name,
            emp.designation,
            emp.department,
            format_moment(tz, emp.last_clock_in()),
            format_moment(tz, emp.last_clock_out()),
        ));
    }
    out
}

fn format_moment<Tz>(tz: &Tz, timestamp: Option<Timestamp>) -> String
where
    Tz: TimeZone,
    Tz::Offset: fmt::Display,
{
    timestamp
        .and_then(|ts| localize(tz, ts))
        .map(|dt| dt.format("%d-%m-%Y %H:%M:%S").to_string())
        .unwrap_or_else(|| NOT_AVAILABLE.to_string())
}

fn localize<Tz: TimeZone>(tz: &Tz, timestamp: Timestamp) -> Option<DateTime<Tz>> {
    tz.timestamp_opt(timestamp, 0).earliest()
}

fn na3() -> (String, String, String) {
    (
        NOT_AVAILABLE.to_string(),
        NOT_AVAILABLE.to_string(),
        NOT_AVAILABLE.to_string(),
    )
}
