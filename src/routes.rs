use std::io::{BufRead, Write};

use anyhow::Result;
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter, FromRepr};
use tracing::{debug, info};

use crate::commands::{AppState, attendance, employee, report};
use crate::utils::clock::Clock;
use crate::utils::console::Console;

#[derive(Debug, Copy, Clone, Eq, PartialEq, Display, EnumIter, FromRepr)]
#[repr(u8)]
pub enum MenuChoice {
    #[strum(serialize = "Register New User")]
    Register = 1,
    #[strum(serialize = "Delete User")]
    Delete = 2,
    #[strum(serialize = "Clock In")]
    ClockIn = 3,
    #[strum(serialize = "Clock Out")]
    ClockOut = 4,
    #[strum(serialize = "Generate Attendance Report")]
    Report = 5,
    #[strum(serialize = "List All Users")]
    List = 6,
    #[strum(serialize = "Exit")]
    Exit = 7,
}

impl MenuChoice {
    pub fn parse(token: &str) -> Option<Self> {
        token.parse::<u8>().ok().and_then(Self::from_repr)
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Flow {
    Continue,
    Exit,
}

pub fn dispatch<C, R, W, E>(
    choice: MenuChoice,
    state: &mut AppState<C>,
    console: &mut Console<R, W, E>,
) -> Result<Flow>
where
    C: Clock,
    R: BufRead,
    W: Write,
    E: Write,
{
    debug!(?choice, "Dispatching menu choice");
    match choice {
        MenuChoice::Register => employee::register(state, console)?,
        MenuChoice::Delete => employee::delete(state, console)?,
        MenuChoice::ClockIn => attendance::clock_in(state, console)?,
        MenuChoice::ClockOut => attendance::clock_out(state, console)?,
        MenuChoice::Report => report::employee_report(state, console)?,
        MenuChoice::List => employee::list(state, console)?,
        MenuChoice::Exit => {
            console.say("Exiting...")?;
            return Ok(Flow::Exit);
        }
    }
    Ok(Flow::Continue)
}

/// Menu loop. Returns on Exit or when input is closed; the roster is
/// already persisted after every change, so nothing is saved here.
pub fn run<C, R, W, E>(state: &mut AppState<C>, console: &mut Console<R, W, E>) -> Result<()>
where
    C: Clock,
    R: BufRead,
    W: Write,
    E: Write,
{
    loop {
        console.say("\nEmployee Attendance Management System")?;
        for choice in MenuChoice::iter() {
            console.say(format!("{}. {choice}", choice as u8))?;
        }

        let Some(token) = console.prompt("Enter your choice: ")? else {
            info!("Input closed, leaving menu");
            return Ok(());
        };

        match MenuChoice::parse(&token) {
            Some(choice) => {
                if dispatch(choice, state, console)? == Flow::Exit {
                    return Ok(());
                }
            }
            None => {
                debug!(%token, "Invalid menu choice");
                console.say("Invalid choice. Please try again.")?;
            }
        }
    }
}
