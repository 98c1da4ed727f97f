//! The interactive menu loop.
//!
//! [`Console`] reads operator input line by line, re-prompts until each field
//! is acceptable, and only then adds the record to its [`Registry`].

use std::io::{BufRead, Write};

use rust_decimal::Decimal;
use tracing::{debug, warn};

use crate::config::PayrollSettings;
use crate::error::{PayrollError, PayrollResult};
use crate::models::{EmploymentCategory, PayTerms};
use crate::registry::Registry;
use crate::report::{PayrollReport, render_report};
use crate::validation::{is_valid_name, parse_amount, parse_non_negative_integer};

use super::args::ReportFormat;

const MENU: &str = "\nMenu\
    \n1 - Full-time Employee\
    \n2 - Part-time Employee\
    \n3 - Contractual Employee\
    \n4 - Display Payroll Report\
    \n5 - Exit\
    \nEnter your choice: ";

/// A menu command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    /// Add an employee of the given category.
    Add(EmploymentCategory),
    /// Print the payroll report.
    Report,
    /// Leave the menu loop.
    Exit,
}

impl MenuChoice {
    /// Maps the operator's input to a command. Returns `None` for anything
    /// other than `1` through `5`.
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            "1" => Some(MenuChoice::Add(EmploymentCategory::FullTime)),
            "2" => Some(MenuChoice::Add(EmploymentCategory::PartTime)),
            "3" => Some(MenuChoice::Add(EmploymentCategory::Contractual)),
            "4" => Some(MenuChoice::Report),
            "5" => Some(MenuChoice::Exit),
            _ => None,
        }
    }
}

/// Interactive payroll session over any line-based input and output.
///
/// # Example
///
/// ```
/// use employee_payroll::config::PayrollSettings;
/// use employee_payroll::console::Console;
/// use std::io::Cursor;
///
/// let input = Cursor::new("1\nE1\nAnn\n3000\n5\n");
/// let mut output = Vec::new();
///
/// let mut console = Console::new(input, &mut output, PayrollSettings::default());
/// console.run().unwrap();
/// assert_eq!(console.registry().len(), 1);
/// ```
pub struct Console<R, W> {
    input: R,
    output: W,
    registry: Registry,
    settings: PayrollSettings,
    format: ReportFormat,
}

impl<R: BufRead, W: Write> Console<R, W> {
    /// Creates a session with an empty registry and text reports.
    pub fn new(input: R, output: W, settings: PayrollSettings) -> Self {
        Self {
            input,
            output,
            registry: Registry::new(),
            settings,
            format: ReportFormat::Text,
        }
    }

    /// Sets the report output format.
    pub fn with_format(mut self, format: ReportFormat) -> Self {
        self.format = format;
        self
    }

    /// Returns the records entered so far.
    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Ends the session, handing back the registry.
    pub fn into_registry(self) -> Registry {
        self.registry
    }

    /// Runs the menu loop until the operator exits or input ends.
    ///
    /// # Errors
    ///
    /// - [`PayrollError::InputClosed`] if input ends halfway through adding
    ///   an employee; the partial record is discarded
    /// - [`PayrollError::Io`] if the console cannot be read or written
    pub fn run(&mut self) -> PayrollResult<()> {
        loop {
            self.write(MENU)?;

            let Some(token) = self.read_token()? else {
                debug!("Input ended at menu, exiting");
                return Ok(());
            };

            let choice = MenuChoice::parse(&token);
            debug!(input = %token, ?choice, "Menu selection");

            match choice {
                Some(MenuChoice::Add(category)) => self.add_employee(category)?,
                Some(MenuChoice::Report) => self.print_report()?,
                Some(MenuChoice::Exit) => {
                    self.write("Exiting program...\n")?;
                    return Ok(());
                }
                None => self.write("Invalid choice! Try again.\n")?,
            }
        }
    }

    /// Collects every field for one employee, then adds the record.
    fn add_employee(&mut self, category: EmploymentCategory) -> PayrollResult<()> {
        let id = self.read_id()?;
        let name = self.read_name()?;

        let terms = match category {
            EmploymentCategory::FullTime => PayTerms::FullTime {
                monthly_salary: self.read_amount("Enter Salary: ")?,
            },
            EmploymentCategory::PartTime => {
                let hourly_wage = self.read_amount("Enter Hourly Wage: ")?;
                let hours_worked = self.read_count("Enter Hours Worked: ", hourly_wage)?;
                PayTerms::PartTime {
                    hourly_wage,
                    hours_worked,
                }
            }
            EmploymentCategory::Contractual => {
                let payment_per_project = self.read_amount("Enter Payment Per Project: ")?;
                let projects_completed =
                    self.read_count("Enter Projects Completed: ", payment_per_project)?;
                PayTerms::Contractual {
                    payment_per_project,
                    projects_completed,
                }
            }
        };

        self.registry.add(id, name, terms)?;
        Ok(())
    }

    fn read_id(&mut self) -> PayrollResult<String> {
        self.write("Enter ID: ")?;
        loop {
            let id = self.expect_token("Enter ID: ")?;
            if self.registry.is_id_available(&id) {
                return Ok(id);
            }
            warn!(id = %id, "Duplicate ID entered");
            self.write("Duplicate ID. Enter another ID: ")?;
        }
    }

    fn read_name(&mut self) -> PayrollResult<String> {
        self.write("Enter Name: ")?;
        loop {
            let name = self
                .read_line()?
                .ok_or_else(|| PayrollError::InputClosed {
                    prompt: "Enter Name: ".to_string(),
                })?;
            if is_valid_name(&name) && self.registry.is_name_available(&name) {
                return Ok(name);
            }
            warn!(name = %name, "Invalid or duplicate name entered");
            self.write("Invalid or duplicate name. Enter again: ")?;
        }
    }

    fn read_amount(&mut self, prompt: &str) -> PayrollResult<Decimal> {
        loop {
            self.write(prompt)?;
            let token = self.expect_token(prompt)?;
            match parse_amount(&token) {
                Ok(amount) => return Ok(amount),
                Err(e) => {
                    warn!(error = %e, "Rejected amount");
                    self.write("Invalid input. Please enter a number.\n")?;
                }
            }
        }
    }

    /// Reads a count that, multiplied by `rate`, still fits in a `Decimal`.
    fn read_count(&mut self, prompt: &str, rate: Decimal) -> PayrollResult<u32> {
        loop {
            self.write(prompt)?;
            let token = self.expect_token(prompt)?;
            match parse_non_negative_integer(&token) {
                Ok(count) if rate.checked_mul(Decimal::from(count)).is_some() => {
                    return Ok(count);
                }
                Ok(count) => warn!(count, rate = %rate, "Rejected count, salary overflows"),
                Err(e) => warn!(error = %e, "Rejected count"),
            }
            self.write("Invalid input. Please enter a valid positive number.\n")?;
        }
    }

    fn print_report(&mut self) -> PayrollResult<()> {
        match self.format {
            ReportFormat::Text => {
                let rendered = render_report(&self.registry, &self.settings);
                self.write(&rendered)
            }
            ReportFormat::Json => {
                let report = PayrollReport::from_registry(&self.registry);
                serde_json::to_writer_pretty(&mut self.output, &report)
                    .map_err(std::io::Error::from)?;
                self.write("\n")
            }
        }
    }

    /// Reads one line with its terminator removed. `None` means end of input.
    fn read_line(&mut self) -> PayrollResult<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        if line.ends_with('\n') {
            line.pop();
            if line.ends_with('\r') {
                line.pop();
            }
        }
        Ok(Some(line))
    }

    /// Reads the first whitespace-delimited token, skipping blank lines.
    fn read_token(&mut self) -> PayrollResult<Option<String>> {
        while let Some(line) = self.read_line()? {
            if let Some(token) = line.split_whitespace().next() {
                return Ok(Some(token.to_string()));
            }
        }
        Ok(None)
    }

    fn expect_token(&mut self, prompt: &str) -> PayrollResult<String> {
        self.read_token()?.ok_or_else(|| PayrollError::InputClosed {
            prompt: prompt.to_string(),
        })
    }

    fn write(&mut self, text: &str) -> PayrollResult<()> {
        self.output.write_all(text.as_bytes())?;
        self.output.flush()?;
        Ok(())
    }
}
