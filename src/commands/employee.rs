use std::io::{BufRead, Write};

use anyhow::Result;
use chrono::Local;
use tracing::{info, instrument, warn};

use super::{AppState, read_id};
use crate::report::render_roster_listing;
use crate::utils::clock::Clock;
use crate::utils::console::Console;

/// Register a new user from three prompted tokens.
#[instrument(name = "register_user", skip_all)]
pub fn register<C, R, W, E>(state: &mut AppState<C>, console: &mut Console<R, W, E>) -> Result<()>
where
    C: Clock,
    R: BufRead,
    W: Write,
    E: Write,
{
    let Some(name) = console.prompt("Enter name: ")? else {
        return Ok(());
    };
    let Some(designation) = console.prompt("Enter designation: ")? else {
        return Ok(());
    };
    let Some(department) = console.prompt("Enter department: ")? else {
        return Ok(());
    };

    let Some(id) = state.roster.register(&name, &designation, &department) else {
        warn!(%name, "No employee id left to assign");
        console.complain("Error: No employee ID available for a new user.")?;
        return Ok(());
    };
    info!(employee_id = id, %name, "User registered");
    console.say(format!("New user registered with ID: {id}"))?;

    state.persist(console)
}

#[instrument(name = "delete_user", skip_all)]
pub fn delete<C, R, W, E>(state: &mut AppState<C>, console: &mut Console<R, W, E>) -> Result<()>
where
    C: Clock,
    R: BufRead,
    W: Write,
    E: Write,
{
    let Some(id) = read_id(console, "Enter ID of the user to delete: ")? else {
        return Ok(());
    };

    match state.roster.remove(id) {
        Some(removed) => {
            info!(
                employee_id = id,
                records = removed.records().len(),
                "User deleted"
            );
            console.say(format!("User with ID {id} deleted successfully."))?;
            state.persist(console)
        }
        None => {
            info!(employee_id = id, "Delete requested for unknown user");
            console.say("User not found.")?;
            Ok(())
        }
    }
}

pub fn list<C, R, W, E>(state: &AppState<C>, console: &mut Console<R, W, E>) -> Result<()>
where
    C: Clock,
    R: BufRead,
    W: Write,
    E: Write,
{
    let listing = render_roster_listing(state.roster.employees(), &Local);
    write!(console.out, "{listing}")?;
    Ok(())
}
