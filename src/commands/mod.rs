use std::io::{BufRead, Write};

use anyhow::Result;
use tracing::error;

use crate::model::{EmployeeId, Roster};
use crate::store::FileStore;
use crate::utils::clock::{Clock, SystemClock};
use crate::utils::console::Console;

pub mod attendance;
pub mod employee;
pub mod report;

/// Everything the menu handlers work on.
pub struct AppState<C = SystemClock> {
    pub roster: Roster,
    pub store: FileStore,
    pub clock: C,
}

impl<C: Clock> AppState<C> {
    pub fn new(roster: Roster, store: FileStore, clock: C) -> Self {
        Self {
            roster,
            store,
            clock,
        }
    }

    /// Writes the whole roster back to the store. A failed write is reported
    /// but the in-memory change is kept.
    pub fn persist<R, W, E>(&self, console: &mut Console<R, W, E>) -> Result<()>
    where
        R: BufRead,
        W: Write,
        E: Write,
    {
        if let Err(e) = self.store.save(self.roster.employees()) {
            error!(error = %e, "Failed to persist roster");
            console.complain("Error: Unable to open file for writing.")?;
        }
        Ok(())
    }
}

/// `None` when input ran out or the token is not an id; the latter is
/// reported to the user.
fn read_id<R, W, E>(console: &mut Console<R, W, E>, message: &str) -> Result<Option<EmployeeId>>
where
    R: BufRead,
    W: Write,
    E: Write,
{
    let Some(token) = console.prompt(message)? else {
        return Ok(None);
    };
    match token.parse::<EmployeeId>() {
        Ok(id) => Ok(Some(id)),
        Err(_) => {
            console.say("Invalid employee ID.")?;
            Ok(None)
        }
    }
}
