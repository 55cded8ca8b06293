use std::io::{BufRead, Write};

use anyhow::Result;
use chrono::Local;

use super::{AppState, read_id};
use crate::report::render_employee_report;
use crate::utils::clock::Clock;
use crate::utils::console::Console;

pub fn employee_report<C, R, W, E>(state: &AppState<C>, console: &mut Console<R, W, E>) -> Result<()>
where
    C: Clock,
    R: BufRead,
    W: Write,
    E: Write,
{
    let Some(id) = read_id(console, "Enter employee ID to generate report: ")? else {
        return Ok(());
    };

    match state.roster.find(id) {
        Some(employee) => {
            let report = render_employee_report(employee, &Local);
            write!(console.out, "{report}")?;
        }
        None => console.say("Employee not found.")?,
    }
    Ok(())
}
