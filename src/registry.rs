//! In-memory employee registry.
//!
//! The [`Registry`] keeps records in insertion order together with the sets of
//! IDs and names already in use. IDs and names are compared exactly: case
//! matters and nothing is trimmed.

use std::collections::HashSet;

use tracing::{info, warn};

use crate::error::{PayrollError, PayrollResult};
use crate::models::{EmployeeRecord, PayTerms};

/// The collection of all employee records plus uniqueness indexes.
///
/// # Example
///
/// ```
/// use employee_payroll::models::PayTerms;
/// use employee_payroll::registry::Registry;
/// use rust_decimal::Decimal;
///
/// let mut registry = Registry::new();
/// registry
///     .add("E1", "Ann", PayTerms::FullTime { monthly_salary: Decimal::new(3000, 0) })
///     .unwrap();
///
/// assert!(!registry.is_id_available("E1"));
/// assert!(registry.is_name_available("Bob"));
/// assert_eq!(registry.len(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Registry {
    records: Vec<EmployeeRecord>,
    ids: HashSet<String>,
    names: HashSet<String>,
}

impl Registry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if no record uses `id`.
    pub fn is_id_available(&self, id: &str) -> bool {
        !self.ids.contains(id)
    }

    /// Returns true if no record uses `name`.
    pub fn is_name_available(&self, name: &str) -> bool {
        !self.names.contains(name)
    }

    /// Adds a new record at the end of the registry.
    ///
    /// Name validity is checked by the caller before this point; this method
    /// only guards uniqueness and that the salary is representable. On any
    /// error nothing is stored.
    ///
    /// # Errors
    ///
    /// - [`PayrollError::DuplicateId`] if `id` is already registered
    /// - [`PayrollError::DuplicateName`] if `name` is already registered
    /// - [`PayrollError::SalaryOverflow`] if the terms multiply out past the
    ///   decimal range
    pub fn add(
        &mut self,
        id: impl Into<String>,
        name: impl Into<String>,
        terms: PayTerms,
    ) -> PayrollResult<&EmployeeRecord> {
        let id = id.into();
        let name = name.into();

        if !self.is_id_available(&id) {
            warn!(id = %id, "Rejected record with duplicate ID");
            return Err(PayrollError::DuplicateId { id });
        }
        if !self.is_name_available(&name) {
            warn!(name = %name, "Rejected record with duplicate name");
            return Err(PayrollError::DuplicateName { name });
        }

        let Some(salary) = terms.checked_salary() else {
            warn!(id = %id, "Rejected record with unrepresentable salary");
            return Err(PayrollError::SalaryOverflow { id });
        };

        info!(
            id = %id,
            name = %name,
            category = terms.category().label(),
            salary = %salary,
            "Added employee record"
        );

        self.ids.insert(id.clone());
        self.names.insert(name.clone());
        self.records.push(EmployeeRecord::new(id, name, terms));

        Ok(&self.records[self.records.len() - 1])
    }

    /// Returns all records in insertion order.
    pub fn all_records(&self) -> &[EmployeeRecord] {
        &self.records
    }

    /// Looks up a record by ID.
    pub fn get(&self, id: &str) -> Option<&EmployeeRecord> {
        self.records.iter().find(|r| r.id() == id)
    }

    /// Returns the number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns true if the registry holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
