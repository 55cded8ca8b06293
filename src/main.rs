use std::io;

use anyhow::{Context, Result};
use tracing::{error, info};
use tracing_appender::rolling;

mod commands;
mod config;
mod error;
mod model;
mod report;
mod routes;
mod store;
mod utils;

use commands::AppState;
use config::Config;
use error::StoreError;
use model::Roster;
use store::FileStore;
use utils::clock::SystemClock;
use utils::console::Console;

fn main() -> Result<()> {
    let config = Config::from_env().context("Failed to load configuration")?;

    // Rolling daily log; the terminal belongs to the menu.
    let file_appender = rolling::daily(&config.log_dir, "attendance.log");
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::fmt()
        .with_writer(non_blocking)
        .with_max_level(config.log_level)
        .with_ansi(false)
        .with_target(false)
        .with_level(true)
        .with_thread_ids(false)
        .with_thread_names(false)
        .init();

    info!(
        store = %config.store_path.display(),
        id_policy = %config.id_policy,
        "Attendance tracker starting..."
    );

    let store = FileStore::new(&config.store_path);
    if !store.exists() {
        eprintln!("No previous data found. Creating a new file.");
    }

    let roster = match store.load() {
        Ok(employees) => Roster::from_employees(employees, config.id_policy),
        Err(e @ StoreError::Bootstrap { .. }) => {
            error!(error = %e, "Could not create store, starting with an empty roster");
            eprintln!("Error: Unable to create file for writing.");
            Roster::new(config.id_policy)
        }
        Err(e) => {
            error!(error = %e, "Refusing to start with an unreadable store");
            return Err(e).context("Failed to load employee data");
        }
    };
    if roster.is_empty() {
        info!(store = %store.path().display(), "Starting with an empty roster");
    } else {
        info!(employees = roster.len(), "Roster ready");
    }
    let mut state = AppState::new(roster, store, SystemClock);

    let stdin = io::stdin();
    let mut console = Console::new(stdin.lock(), io::stdout(), io::stderr());
    routes::run(&mut state, &mut console)?;

    info!("Attendance tracker stopped");
    Ok(())
}
