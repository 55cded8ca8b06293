use std::io::{BufRead, Write};

use anyhow::Result;
use tracing::{info, instrument, warn};

use super::{AppState, read_id};
use crate::model::Direction;
use crate::utils::clock::Clock;
use crate::utils::console::Console;

#[instrument(name = "clock_in", skip_all)]
pub fn clock_in<C, R, W, E>(state: &mut AppState<C>, console: &mut Console<R, W, E>) -> Result<()>
where
    C: Clock,
    R: BufRead,
    W: Write,
    E: Write,
{
    record(state, console, Direction::In)
}

#[instrument(name = "clock_out", skip_all)]
pub fn clock_out<C, R, W, E>(state: &mut AppState<C>, console: &mut Console<R, W, E>) -> Result<()>
where
    C: Clock,
    R: BufRead,
    W: Write,
    E: Write,
{
    record(state, console, Direction::Out)
}

// No state check: a second clock in (or a clock out with nothing open) is
// still appended, only logged.
fn record<C, R, W, E>(
    state: &mut AppState<C>,
    console: &mut Console<R, W, E>,
    direction: Direction,
) -> Result<()>
where
    C: Clock,
    R: BufRead,
    W: Write,
    E: Write,
{
    let (prompt, verb) = match direction {
        Direction::In => ("Enter employee ID to clock in: ", "in"),
        Direction::Out => ("Enter employee ID to clock out: ", "out"),
    };
    let Some(id) = read_id(console, prompt)? else {
        return Ok(());
    };

    let now = state.clock.now();
    let Some(employee) = state.roster.find_mut(id) else {
        info!(employee_id = id, "Clock {verb} requested for unknown employee");
        console.say("Employee not found.")?;
        return Ok(());
    };

    match direction {
        Direction::In => {
            if employee.is_clocked_in() {
                warn!(employee_id = id, "Clock in while already clocked in");
            }
            employee.add_clock_in(now);
        }
        Direction::Out => {
            if !employee.is_clocked_in() {
                warn!(employee_id = id, "Clock out without an open clock in");
            }
            employee.add_clock_out(now);
        }
    }
    let name = employee.name.clone();

    info!(employee_id = id, timestamp = now, "Clocked {verb}");
    console.say(format!("Clocked {verb} successfully for employee {name}"))?;

    state.persist(console)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::test_support::harness;
    use crate::model::AttendanceRecord;
    use crate::utils::clock::ManualClock;
    use crate::utils::console::TestConsole;

    const T0: i64 = 1_700_000_000;

    #[test]
    fn clock_in_and_out_append_records() {
        let mut h = harness(ManualClock::at(T0));
        h.state.roster.register("Alice", "Engineer", "R&D");
        let mut console = TestConsole::scripted("1 1");

        clock_in(&mut h.state, &mut console).unwrap();
        assert!(h.state.roster.find(1).unwrap().is_clocked_in());

        h.state.clock.set(T0 + 3600);
        clock_out(&mut h.state, &mut console).unwrap();

        let emp = h.state.roster.find(1).unwrap();
        assert!(!emp.is_clocked_in());
        assert_eq!(
            emp.records(),
            &[
                AttendanceRecord::clock_in(T0),
                AttendanceRecord::clock_out(T0 + 3600)
            ]
        );
        let out = console.stdout();
        assert!(out.contains("Clocked in successfully for employee Alice"));
        assert!(out.contains("Clocked out successfully for employee Alice"));
        assert_eq!(h.stored(), h.state.roster.employees());
    }

    #[test]
    fn duplicate_clock_in_is_still_recorded() {
        let mut h = harness(ManualClock::sequence([T0, T0 + 60]));
        h.state.roster.register("Alice", "Engineer", "R&D");
        let mut console = TestConsole::scripted("1 1");

        clock_in(&mut h.state, &mut console).unwrap();
        clock_in(&mut h.state, &mut console).unwrap();

        let emp = h.state.roster.find(1).unwrap();
        assert_eq!(emp.records().len(), 2);
        assert!(emp.is_clocked_in());
        assert_eq!(h.stored()[0].records().len(), 2);
    }

    #[test]
    fn clock_out_without_clock_in_is_still_recorded() {
        let mut h = harness(ManualClock::at(T0));
        h.state.roster.register("Alice", "Engineer", "R&D");
        let mut console = TestConsole::scripted("1");

        clock_out(&mut h.state, &mut console).unwrap();

        let emp = h.state.roster.find(1).unwrap();
        assert_eq!(emp.records(), &[AttendanceRecord::clock_out(T0)]);
        assert!(!emp.is_clocked_in());
    }

    #[test]
    fn unknown_employee_is_reported_without_mutation() {
        let mut h = harness(ManualClock::at(T0));
        h.state.roster.register("Alice", "Engineer", "R&D");
        let mut console = TestConsole::scripted("9 9");

        clock_in(&mut h.state, &mut console).unwrap();
        clock_out(&mut h.state, &mut console).unwrap();

        assert_eq!(console.stdout().matches("Employee not found.").count(), 2);
        assert!(h.state.roster.find(1).unwrap().records().is_empty());
        // Nothing was persisted, so the store was never written.
        assert!(!h.state.store.exists());
    }

    #[test]
    fn clock_in_targets_first_employee_with_reused_id() {
        let mut h = harness(ManualClock::at(T0));
        for name in ["a", "b", "c"] {
            h.state.roster.register(name, "x", "y");
        }
        h.state.roster.remove(2);
        h.state.roster.register("d", "x", "y");
        let mut console = TestConsole::scripted("3");

        clock_in(&mut h.state, &mut console).unwrap();

        let employees = h.state.roster.employees();
        assert_eq!(employees[1].name, "c");
        assert_eq!(employees[1].records().len(), 1);
        assert!(employees[2].records().is_empty());
    }
}
