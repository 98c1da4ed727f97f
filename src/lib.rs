//! Employee payroll for full-time, part-time and contractual staff.
//!
//! This crate records employees, validates operator input, computes each
//! employee's salary under their category's rule, and prints a payroll report.

#![warn(missing_docs)]

pub mod config;
pub mod console;
pub mod error;
pub mod models;
pub mod registry;
pub mod report;
pub mod validation;
