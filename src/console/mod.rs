//! Interactive console front end.
//!
//! This module provides the menu-driven [`Console`] session, its command line
//! definition, and [`run`], which wires both to the process's stdin and stdout.

mod args;
mod session;

pub use args::{Cli, ReportFormat};
pub use session::{Console, MenuChoice};

use std::io;

use tracing::{info, info_span, warn};
use tracing_subscriber::EnvFilter;
use uuid::Uuid;

use crate::error::{PayrollError, PayrollResult};

/// Parses arguments, installs logging, and runs a session on stdin/stdout.
pub fn run() -> PayrollResult<()> {
    let cli = Cli::parse_args();
    init_logging(&cli.log_level)?;

    let settings = cli.settings()?;

    let session_id = Uuid::new_v4();
    let _span = info_span!("payroll_session", session_id = %session_id).entered();
    info!(format = ?cli.format, "Starting payroll session");

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut console = Console::new(stdin.lock(), stdout.lock(), settings).with_format(cli.format);
    console.run()?;

    info!(records = console.registry().len(), "Payroll session finished");
    Ok(())
}

/// Sends log output to stderr so the report on stdout stays clean.
///
/// A directive that does not parse is an error rather than a silent fallback.
fn init_logging(directive: &str) -> PayrollResult<()> {
    let filter = log_filter(directive)?;
    if let Err(e) = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init()
    {
        warn!(error = %e, "Logging was already initialized, keeping existing subscriber");
    }
    Ok(())
}

/// Parses a `--log-level` directive into a filter.
fn log_filter(directive: &str) -> PayrollResult<EnvFilter> {
    EnvFilter::try_new(directive).map_err(|e| PayrollError::InvalidLogFilter {
        directive: directive.to_string(),
        message: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_filter_accepts_level_and_target_directives() {
        assert!(log_filter("warn").is_ok());
        assert!(log_filter("employee_payroll=debug,info").is_ok());
    }

    #[test]
    fn test_log_filter_rejects_malformed_directive() {
        match log_filter("employee_payroll=loud") {
            Err(PayrollError::InvalidLogFilter { directive, .. }) => {
                assert_eq!(directive, "employee_payroll=loud");
            }
            other => panic!("Expected InvalidLogFilter error, got {:?}", other),
        }
    }
}
