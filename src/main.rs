//! Employee payroll entry point.
//!
//! Delegates everything to [`console::run`], prints errors to stderr and
//! exits non-zero on failure.

use employee_payroll::console;

fn main() {
    if let Err(e) = console::run() {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}
