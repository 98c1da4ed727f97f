//! CLI argument definitions using clap.

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

use crate::config::{ConfigLoader, PayrollSettings};
use crate::error::PayrollResult;

/// How the payroll report is printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ReportFormat {
    /// One block of lines per employee.
    #[default]
    Text,
    /// A pretty-printed JSON snapshot.
    Json,
}

/// Interactive payroll for full-time, part-time and contractual employees
#[derive(Parser, Debug)]
#[command(name = "employee-payroll")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to a YAML settings file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Currency symbol shown before amounts (overrides the settings file)
    #[arg(long)]
    pub currency_symbol: Option<String>,

    /// Report output format
    #[arg(long, value_enum, default_value_t = ReportFormat::Text)]
    pub format: ReportFormat,

    /// Log filter directive, e.g. "info" or "employee_payroll=debug"
    #[arg(long, default_value = "warn")]
    pub log_level: String,
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }

    /// Resolves the effective settings: file first, then flag overrides.
    pub fn settings(&self) -> PayrollResult<PayrollSettings> {
        let mut settings = ConfigLoader::load_or_default(self.config.as_ref())?;
        if let Some(symbol) = &self.currency_symbol {
            settings.currency_symbol = symbol.clone();
        }
        Ok(settings)
    }
}
