//! Settings types for the payroll console.
//!
//! These structures are deserialized from an optional YAML settings file.
//! Every field has a default, so an empty file is valid.

use serde::Deserialize;

use crate::models::DEFAULT_CURRENCY_SYMBOL;

/// Heading printed above the payroll report.
pub const DEFAULT_REPORT_TITLE: &str = "------ Employee Payroll Report ------";

/// Display settings for the payroll report.
///
/// # Example
///
/// ```
/// use employee_payroll::config::PayrollSettings;
///
/// let settings = PayrollSettings::default();
/// assert_eq!(settings.currency_symbol, "$");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PayrollSettings {
    /// Symbol printed in front of every monetary amount.
    pub currency_symbol: String,
    /// Heading printed above the report.
    pub report_title: String,
}

impl Default for PayrollSettings {
    fn default() -> Self {
        Self {
            currency_symbol: DEFAULT_CURRENCY_SYMBOL.to_string(),
            report_title: DEFAULT_REPORT_TITLE.to_string(),
        }
    }
}
