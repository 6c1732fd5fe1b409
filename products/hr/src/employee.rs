use std::fmt;

use chrono::{DateTime, Local};
use serde::Serialize;

use crate::error::{HrResult, ValidationError};
use crate::report::EmployeeReportService;

const SSN_MIN_LEN: usize = 9;
const SSN_MAX_LEN: usize = 11;
const REPORT_DATE_FORMAT: &str = "%-m/%-d/%Y";
const CRLF: &str = "\n";

/// A new hire and their progress through first-time orientation.
///
/// Names and ssn are validated on every assignment. The four status flags are
/// plain booleans: [`do_first_time_orientation`](Self::do_first_time_orientation)
/// sets them in order, but callers may flip any of them directly.
#[derive(Clone, Debug, Serialize)]
pub struct Employee {
    first_name: String,
    last_name: String,
    ssn: String,
    met_with_hr: bool,
    met_dept_staff: bool,
    reviewed_dept_policies: bool,
    moved_in: bool,
    cube_id: Option<String>,
    orientation_date: Option<DateTime<Local>>,
    report_service: EmployeeReportService,
}

impl Employee {
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        ssn: impl Into<String>,
    ) -> HrResult<Self> {
        Ok(Self {
            first_name: validate_first_name(first_name.into())?,
            last_name: validate_last_name(last_name.into())?,
            ssn: validate_ssn(ssn.into())?,
            met_with_hr: false,
            met_dept_staff: false,
            reviewed_dept_policies: false,
            moved_in: false,
            cube_id: None,
            orientation_date: None,
            report_service: EmployeeReportService::new(),
        })
    }

    /// Runs the full orientation stamped with the current local time.
    pub fn do_first_time_orientation(&mut self, cube_id: &str) -> HrResult<()> {
        self.do_first_time_orientation_at(cube_id, Local::now())
    }

    /// Runs HR meeting, staff meeting, policy review and cubicle move, in that
    /// order, each stamped with `at`.
    ///
    /// The cube id is checked before any step runs, so a rejected call leaves
    /// the record and its report untouched. Repeated calls append four more
    /// report lines and overwrite the orientation date.
    pub fn do_first_time_orientation_at(
        &mut self,
        cube_id: &str,
        at: DateTime<Local>,
    ) -> HrResult<()> {
        let cube_id = validate_cube_id(cube_id.to_owned())?;
        self.orientation_date = Some(at);
        self.meet_with_hr_for_benefit_and_salary_info()?;
        self.meet_department_staff()?;
        self.review_dept_policies()?;
        self.move_into_cubicle(&cube_id)
    }

    fn meet_with_hr_for_benefit_and_salary_info(&mut self) -> HrResult<()> {
        let date = self.formatted_date()?;
        self.met_with_hr = true;
        self.record(&format!("met with Hr on {date}"));
        Ok(())
    }

    fn meet_department_staff(&mut self) -> HrResult<()> {
        let date = self.formatted_date()?;
        self.met_dept_staff = true;
        self.record(&format!("met with Dept. Staff on {date}"));
        Ok(())
    }

    /// Records a policy review. Policies change, so this may be repeated;
    /// every call appends a report line.
    ///
    /// Fails with [`ValidationError::OrientationDate`] when no orientation
    /// date has been set yet.
    pub fn review_dept_policies(&mut self) -> HrResult<()> {
        let date = self.formatted_date()?;
        self.reviewed_dept_policies = true;
        self.record(&format!("reviewed Dept policies on {date}"));
        Ok(())
    }

    /// Moves the employee into `cube_id` and records it.
    ///
    /// Fails without side effects on an empty cube id or a missing
    /// orientation date.
    pub fn move_into_cubicle(&mut self, cube_id: &str) -> HrResult<()> {
        let cube_id = validate_cube_id(cube_id.to_owned())?;
        let date = self.formatted_date()?;
        self.record(&format!("moved into cubicle {cube_id} on {date}"));
        self.cube_id = Some(cube_id);
        self.moved_in = true;
        Ok(())
    }

    fn formatted_date(&self) -> HrResult<String> {
        self.orientation_date
            .map(|date| date.format(REPORT_DATE_FORMAT).to_string())
            .ok_or(ValidationError::OrientationDate)
    }

    fn record(&mut self, event: &str) {
        let line = format!("{} {} {event}{CRLF}", self.first_name, self.last_name);
        self.report_service.add_data(line);
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn set_first_name(&mut self, first_name: impl Into<String>) -> HrResult<()> {
        self.first_name = validate_first_name(first_name.into())?;
        Ok(())
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    pub fn set_last_name(&mut self, last_name: impl Into<String>) -> HrResult<()> {
        self.last_name = validate_last_name(last_name.into())?;
        Ok(())
    }

    pub fn ssn(&self) -> &str {
        &self.ssn
    }

    /// Only the length is checked (9 to 11 characters, hyphens allowed).
    pub fn set_ssn(&mut self, ssn: impl Into<String>) -> HrResult<()> {
        self.ssn = validate_ssn(ssn.into())?;
        Ok(())
    }

    pub fn met_with_hr(&self) -> bool {
        self.met_with_hr
    }

    pub fn set_met_with_hr(&mut self, met_with_hr: bool) {
        self.met_with_hr = met_with_hr;
    }

    pub fn met_dept_staff(&self) -> bool {
        self.met_dept_staff
    }

    pub fn set_met_dept_staff(&mut self, met_dept_staff: bool) {
        self.met_dept_staff = met_dept_staff;
    }

    pub fn reviewed_dept_policies(&self) -> bool {
        self.reviewed_dept_policies
    }

    pub fn set_reviewed_dept_policies(&mut self, reviewed_dept_policies: bool) {
        self.reviewed_dept_policies = reviewed_dept_policies;
    }

    pub fn moved_in(&self) -> bool {
        self.moved_in
    }

    pub fn set_moved_in(&mut self, moved_in: bool) {
        self.moved_in = moved_in;
    }

    pub fn cube_id(&self) -> Option<&str> {
        self.cube_id.as_deref()
    }

    pub fn set_cube_id(&mut self, cube_id: impl Into<String>) -> HrResult<()> {
        self.cube_id = Some(validate_cube_id(cube_id.into())?);
        Ok(())
    }

    pub fn orientation_date(&self) -> Option<DateTime<Local>> {
        self.orientation_date
    }

    pub fn set_orientation_date(&mut self, orientation_date: DateTime<Local>) {
        self.orientation_date = Some(orientation_date);
    }

    pub fn report_service(&self) -> &EmployeeReportService {
        &self.report_service
    }

    /// Swaps in a different accumulator; the previous one is dropped.
    pub fn set_report_service(&mut self, report_service: EmployeeReportService) {
        self.report_service = report_service;
    }
}

impl fmt::Display for Employee {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "EmployeeInfo{{SSN={}, Last_Name={}, First_Name={}}}",
            self.ssn, self.last_name, self.first_name
        )
    }
}

fn validate_first_name(value: String) -> HrResult<String> {
    require(value, ValidationError::FirstName)
}

fn validate_last_name(value: String) -> HrResult<String> {
    require(value, ValidationError::LastName)
}

fn validate_cube_id(value: String) -> HrResult<String> {
    require(value, ValidationError::CubeId)
}

fn validate_ssn(value: String) -> HrResult<String> {
    let len = value.chars().count();
    if (SSN_MIN_LEN..=SSN_MAX_LEN).contains(&len) {
        Ok(value)
    } else {
        Err(ValidationError::Ssn { len })
    }
}

fn require(value: String, err: ValidationError) -> HrResult<String> {
    if value.is_empty() { Err(err) } else { Ok(value) }
}
