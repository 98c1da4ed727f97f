//! Employee record model and related types.
//!
//! This module defines the [`EmployeeRecord`] struct, the [`PayTerms`] tagged
//! variant carrying each category's pay parameters, and the
//! [`EmploymentCategory`] enum used to pick a variant.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Currency symbol used when no settings override it.
pub const DEFAULT_CURRENCY_SYMBOL: &str = "$";

/// Represents the category of employment arrangement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmploymentCategory {
    /// Paid a fixed monthly salary.
    FullTime,
    /// Paid an hourly wage for the hours worked.
    PartTime,
    /// Paid a fixed amount per completed project.
    Contractual,
}

impl EmploymentCategory {
    /// Returns a human-readable label for the category.
    pub fn label(&self) -> &'static str {
        match self {
            EmploymentCategory::FullTime => "Full-time",
            EmploymentCategory::PartTime => "Part-time",
            EmploymentCategory::Contractual => "Contractual",
        }
    }
}

/// The category-specific pay parameters of an employee.
///
/// Each variant carries exactly the fields its salary formula needs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "category", rename_all = "snake_case")]
pub enum PayTerms {
    /// Fixed monthly salary.
    FullTime {
        /// The salary paid each month.
        monthly_salary: Decimal,
    },
    /// Hourly wage multiplied by hours worked.
    PartTime {
        /// The wage paid per hour.
        hourly_wage: Decimal,
        /// The number of hours worked.
        hours_worked: u32,
    },
    /// Payment per project multiplied by projects completed.
    Contractual {
        /// The amount paid per project.
        payment_per_project: Decimal,
        /// The number of projects completed.
        projects_completed: u32,
    },
}

impl PayTerms {
    /// Returns the employment category these terms belong to.
    pub fn category(&self) -> EmploymentCategory {
        match self {
            PayTerms::FullTime { .. } => EmploymentCategory::FullTime,
            PayTerms::PartTime { .. } => EmploymentCategory::PartTime,
            PayTerms::Contractual { .. } => EmploymentCategory::Contractual,
        }
    }

    /// Computes the salary these terms pay, or `None` if the product does not
    /// fit in a [`Decimal`].
    ///
    /// # Examples
    ///
    /// ```
    /// use employee_payroll::models::PayTerms;
    /// use rust_decimal::Decimal;
    ///
    /// let terms = PayTerms::PartTime {
    ///     hourly_wage: Decimal::MAX,
    ///     hours_worked: 2,
    /// };
    /// assert_eq!(terms.checked_salary(), None);
    /// ```
    pub fn checked_salary(&self) -> Option<Decimal> {
        match *self {
            PayTerms::FullTime { monthly_salary } => Some(monthly_salary),
            PayTerms::PartTime {
                hourly_wage,
                hours_worked,
            } => hourly_wage.checked_mul(Decimal::from(hours_worked)),
            PayTerms::Contractual {
                payment_per_project,
                projects_completed,
            } => payment_per_project.checked_mul(Decimal::from(projects_completed)),
        }
    }

    /// Computes the salary these terms pay.
    ///
    /// Never panics: a product beyond the decimal range saturates at
    /// [`Decimal::MAX`] / [`Decimal::MIN`]. The registry refuses such terms,
    /// so stored records always carry an exact salary.
    ///
    /// # Examples
    ///
    /// ```
    /// use employee_payroll::models::PayTerms;
    /// use rust_decimal::Decimal;
    ///
    /// let terms = PayTerms::PartTime {
    ///     hourly_wage: Decimal::new(15, 0),
    ///     hours_worked: 40,
    /// };
    /// assert_eq!(terms.salary(), Decimal::new(600, 0));
    /// ```
    pub fn salary(&self) -> Decimal {
        match *self {
            PayTerms::FullTime { monthly_salary } => monthly_salary,
            PayTerms::PartTime {
                hourly_wage,
                hours_worked,
            } => hourly_wage.saturating_mul(Decimal::from(hours_worked)),
            PayTerms::Contractual {
                payment_per_project,
                projects_completed,
            } => payment_per_project.saturating_mul(Decimal::from(projects_completed)),
        }
    }
}

/// Formats a monetary amount for display, e.g. `$3000` or `$15.5`.
pub fn format_amount(currency_symbol: &str, amount: Decimal) -> String {
    format!("{}{}", currency_symbol, amount.normalize())
}

/// One employee's stored data and category.
///
/// Records are fixed once created; the registry hands out shared references
/// only, and fields are exposed through accessors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeRecord {
    id: String,
    name: String,
    #[serde(flatten)]
    terms: PayTerms,
}

impl EmployeeRecord {
    /// Creates a record. Uniqueness is the registry's concern, not this type's.
    pub fn new(id: impl Into<String>, name: impl Into<String>, terms: PayTerms) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            terms,
        }
    }

    /// Returns the employee ID.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Returns the employee name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the category-specific pay parameters.
    pub fn terms(&self) -> &PayTerms {
        &self.terms
    }

    /// Returns the employment category.
    pub fn category(&self) -> EmploymentCategory {
        self.terms.category()
    }

    /// Computes the employee's salary from the stored fields.
    pub fn compute_salary(&self) -> Decimal {
        self.terms.salary()
    }

    /// Produces the display lines for this record using the default `$` symbol.
    ///
    /// # Examples
    ///
    /// ```
    /// use employee_payroll::models::{EmployeeRecord, PayTerms};
    /// use rust_decimal::Decimal;
    ///
    /// let ann = EmployeeRecord::new(
    ///     "E1",
    ///     "Ann",
    ///     PayTerms::FullTime { monthly_salary: Decimal::new(3000, 0) },
    /// );
    /// assert_eq!(
    ///     ann.describe(),
    ///     vec!["Employee: Ann (ID: E1)", "Fixed Monthly Salary: $3000"]
    /// );
    /// ```
    pub fn describe(&self) -> Vec<String> {
        self.describe_with(DEFAULT_CURRENCY_SYMBOL)
    }

    /// Produces the display lines for this record with the given currency symbol.
    ///
    /// Full-time records show the fixed salary only. Part-time and contractual
    /// records show their inputs followed by the computed total.
    pub fn describe_with(&self, currency_symbol: &str) -> Vec<String> {
        let mut lines = vec![format!("Employee: {} (ID: {})", self.name, self.id)];

        match self.terms {
            PayTerms::FullTime { monthly_salary } => {
                lines.push(format!(
                    "Fixed Monthly Salary: {}",
                    format_amount(currency_symbol, monthly_salary)
                ));
                return lines;
            }
            PayTerms::PartTime {
                hourly_wage,
                hours_worked,
            } => {
                lines.push(format!(
                    "Hourly Wage: {}",
                    format_amount(currency_symbol, hourly_wage)
                ));
                lines.push(format!("Hours Worked: {}", hours_worked));
            }
            PayTerms::Contractual {
                payment_per_project,
                projects_completed,
            } => {
                lines.push(format!(
                    "Contract Payment Per Project: {}",
                    format_amount(currency_symbol, payment_per_project)
                ));
                lines.push(format!("Projects Completed: {}", projects_completed));
            }
        }

        lines.push(format!(
            "Total Salary: {}",
            format_amount(currency_symbol, self.compute_salary())
        ));
        lines
    }
}
