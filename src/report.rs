//! Payroll report generation.
//!
//! The report walks the registry in insertion order and emits each record's
//! display lines. It never sorts, filters or totals.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::config::PayrollSettings;
use crate::models::{DEFAULT_CURRENCY_SYMBOL, EmploymentCategory, PayTerms};
use crate::registry::Registry;

/// Returns one block of display lines per record, in insertion order.
///
/// # Examples
///
/// ```
/// use employee_payroll::models::PayTerms;
/// use employee_payroll::registry::Registry;
/// use employee_payroll::report::generate_report;
/// use rust_decimal::Decimal;
///
/// let mut registry = Registry::new();
/// registry
///     .add("E1", "Ann", PayTerms::FullTime { monthly_salary: Decimal::new(3000, 0) })
///     .unwrap();
///
/// let blocks = generate_report(&registry);
/// assert_eq!(blocks[0][1], "Fixed Monthly Salary: $3000");
/// ```
pub fn generate_report(registry: &Registry) -> Vec<Vec<String>> {
    generate_report_with(registry, DEFAULT_CURRENCY_SYMBOL)
}

/// Like [`generate_report`], with an explicit currency symbol.
pub fn generate_report_with(registry: &Registry, currency_symbol: &str) -> Vec<Vec<String>> {
    registry
        .all_records()
        .iter()
        .map(|record| record.describe_with(currency_symbol))
        .collect()
}

/// Renders the full text report: the title, then each block followed by a blank line.
pub fn render_report(registry: &Registry, settings: &PayrollSettings) -> String {
    let mut out = String::new();
    out.push('\n');
    out.push_str(&settings.report_title);
    out.push('\n');

    for block in generate_report_with(registry, &settings.currency_symbol) {
        for line in block {
            out.push_str(&line);
            out.push('\n');
        }
        out.push('\n');
    }
    out
}

/// A single employee's line in a [`PayrollReport`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportEntry {
    /// The employee ID.
    pub id: String,
    /// The employee name.
    pub name: String,
    /// The pay parameters the salary was computed from, serialized inline
    /// with their `category` tag.
    #[serde(flatten)]
    pub terms: PayTerms,
    /// The computed salary.
    pub salary: Decimal,
}

impl ReportEntry {
    /// Returns the employment category.
    pub fn category(&self) -> EmploymentCategory {
        self.terms.category()
    }
}

/// A serializable snapshot of the payroll at one point in time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PayrollReport {
    /// Unique identifier for this report.
    pub report_id: Uuid,
    /// When the report was generated.
    pub generated_at: DateTime<Utc>,
    /// One entry per record, in insertion order.
    pub entries: Vec<ReportEntry>,
}

impl PayrollReport {
    /// Builds a snapshot of every record in the registry.
    pub fn from_registry(registry: &Registry) -> Self {
        let entries = registry
            .all_records()
            .iter()
            .map(|record| ReportEntry {
                id: record.id().to_string(),
                name: record.name().to_string(),
                terms: record.terms().clone(),
                salary: record.compute_salary(),
            })
            .collect();

        Self {
            report_id: Uuid::new_v4(),
            generated_at: Utc::now(),
            entries,
        }
    }
}
