//! Settings for the payroll console.
//!
//! Settings are optional: without a file the defaults from
//! [`PayrollSettings::default`] apply.
//!
//! # Example
//!
//! ```no_run
//! use employee_payroll::config::ConfigLoader;
//!
//! let settings = ConfigLoader::load("./payroll.yaml").unwrap();
//! println!("Report title: {}", settings.report_title);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{DEFAULT_REPORT_TITLE, PayrollSettings};
