//! HR vertical slice: new-hire records and their first-time orientation.
//!
//! An [`Employee`] validates its own fields and writes one line per
//! orientation step to the [`EmployeeReportService`] it owns. Printing or
//! persisting the report is left to the caller.

mod employee;
mod error;
mod report;

pub use employee::Employee;
pub use error::{HrResult, ValidationError};
pub use report::EmployeeReportService;
