//! Core data models for the employee payroll.
//!
//! This module contains the employee record and its pay terms.

mod employee;

pub use employee::{
    DEFAULT_CURRENCY_SYMBOL, EmployeeRecord, EmploymentCategory, PayTerms, format_amount,
};
