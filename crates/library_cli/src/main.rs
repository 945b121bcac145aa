//! Interactive library catalog entry point.
//!
//! # Responsibility
//! - Wire in-memory repositories into the `Library` facade.
//! - Initialize logging with fixed defaults and run the console menu.

mod menu;

use library_core::{default_log_level, init_logging, Book, InMemoryRepository, Library, Member};
use log::{error, info};
use menu::LibraryService;
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

const LOG_SUBDIR: &str = "library_catalog/logs";

fn log_dir() -> PathBuf {
    std::env::temp_dir().join(LOG_SUBDIR)
}

fn main() -> ExitCode {
    if let Err(err) = init_logging(default_log_level(), &log_dir()) {
        // Logging is diagnostics only; the catalog still works without it.
        eprintln!("warning: logging disabled: {err}");
    }
    info!(
        "event=cli_start module=cli status=ok version={}",
        library_core::core_version()
    );

    let library = Library::new(
        InMemoryRepository::<Book>::new(),
        InMemoryRepository::<Member>::new(),
    );
    let mut service = LibraryService::new(library);

    let stdin = io::stdin();
    let stdout = io::stdout();
    match service.run(&mut stdin.lock(), &mut stdout.lock()) {
        Ok(()) => {
            info!("event=cli_exit module=cli status=ok");
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!("event=cli_exit module=cli status=error error={err}");
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
