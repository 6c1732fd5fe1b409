use chrono::{DateTime, Local, TimeZone};
use products_hr::{Employee, EmployeeReportService, ValidationError};

fn hire() -> Employee {
    Employee::new("Jane", "Doe", "123456789").unwrap()
}

fn at(year: i32, month: u32, day: u32) -> DateTime<Local> {
    Local
        .with_ymd_and_hms(year, month, day, 12, 0, 0)
        .single()
        .unwrap()
}

#[test]
fn construction_keeps_valid_fields() {
    for ssn in ["123456789", "123-456789", "123-45-6789"] {
        let employee = Employee::new("Ada", "Lovelace", ssn).unwrap();
        assert_eq!(employee.first_name(), "Ada");
        assert_eq!(employee.last_name(), "Lovelace");
        assert_eq!(employee.ssn(), ssn);
    }
}

#[test]
fn construction_rejects_each_missing_field() {
    let err = Employee::new("", "Doe", "123456789").unwrap_err();
    assert_eq!(err, ValidationError::FirstName);
    assert!(err.to_string().contains("first name"));

    let err = Employee::new("Jane", "", "123456789").unwrap_err();
    assert_eq!(err, ValidationError::LastName);
    assert!(err.to_string().contains("last name"));

    let err = Employee::new("Jane", "Doe", "").unwrap_err();
    assert_eq!(err, ValidationError::Ssn { len: 0 });
    assert!(err.to_string().contains("ssn"));
}

#[test]
fn ssn_length_bounds_are_inclusive() {
    let mut employee = hire();
    assert_eq!(employee.set_ssn("12345678"), Err(ValidationError::Ssn { len: 8 }));
    assert!(employee.set_ssn("123456789").is_ok());
    assert!(employee.set_ssn("123-45-6789").is_ok());
    assert_eq!(
        employee.set_ssn("123-45-67890"),
        Err(ValidationError::Ssn { len: 12 })
    );
    assert_eq!(employee.ssn(), "123-45-6789");
}

#[test]
fn cube_id_setter_requires_value() {
    let mut employee = hire();
    assert_eq!(employee.set_cube_id(""), Err(ValidationError::CubeId));
    assert_eq!(employee.cube_id(), None);

    employee.set_cube_id("C-101").unwrap();
    assert_eq!(employee.cube_id(), Some("C-101"));
}

#[test]
fn first_time_orientation_runs_all_steps_in_order() {
    let mut employee = hire();
    let when = at(2024, 9, 3);
    employee.do_first_time_orientation_at("C-200", when).unwrap();

    assert!(employee.met_with_hr());
    assert!(employee.met_dept_staff());
    assert!(employee.reviewed_dept_policies());
    assert!(employee.moved_in());
    assert_eq!(employee.cube_id(), Some("C-200"));
    assert_eq!(employee.orientation_date(), Some(when));

    let lines: Vec<_> = employee.report_service().lines().collect();
    assert_eq!(
        lines,
        [
            "Jane Doe met with Hr on 9/3/2024",
            "Jane Doe met with Dept. Staff on 9/3/2024",
            "Jane Doe reviewed Dept policies on 9/3/2024",
            "Jane Doe moved into cubicle C-200 on 9/3/2024",
        ]
    );
    assert!(employee.report_service().report_text().ends_with('\n'));
}

#[test]
fn orientation_with_system_clock_sets_a_date() {
    let mut employee = hire();
    employee.do_first_time_orientation("C-200").unwrap();

    let date = employee.orientation_date().unwrap();
    let stamp = date.format("%-m/%-d/%Y").to_string();
    assert_eq!(employee.report_service().lines().count(), 4);
    assert!(employee.report_service().lines().all(|line| line.ends_with(&stamp)));
}

#[test]
fn rejected_orientation_changes_nothing() {
    let mut employee = hire();
    assert_eq!(
        employee.do_first_time_orientation_at("", at(2024, 1, 2)),
        Err(ValidationError::CubeId)
    );
    assert!(!employee.met_with_hr());
    assert_eq!(employee.orientation_date(), None);
    assert!(employee.report_service().is_empty());
}

#[test]
fn repeated_orientation_appends_and_restamps() {
    let mut employee = hire();
    employee.do_first_time_orientation_at("C-1", at(2024, 1, 2)).unwrap();
    employee.do_first_time_orientation_at("C-2", at(2024, 11, 20)).unwrap();

    let lines: Vec<_> = employee.report_service().lines().collect();
    assert_eq!(lines.len(), 8);
    assert!(lines[3].ends_with("cubicle C-1 on 1/2/2024"));
    assert!(lines[7].ends_with("cubicle C-2 on 11/20/2024"));
    assert_eq!(employee.orientation_date(), Some(at(2024, 11, 20)));
    assert_eq!(employee.cube_id(), Some("C-2"));
}

#[test]
fn policy_review_appends_every_time() {
    let mut employee = hire();
    employee.do_first_time_orientation_at("C-200", at(2024, 9, 3)).unwrap();
    employee.review_dept_policies().unwrap();

    let lines: Vec<_> = employee.report_service().lines().collect();
    assert_eq!(lines.len(), 5);
    assert_eq!(lines[4], "Jane Doe reviewed Dept policies on 9/3/2024");
    assert!(employee.reviewed_dept_policies());
}

#[test]
fn single_steps_need_an_orientation_date() {
    let mut employee = hire();
    assert_eq!(
        employee.review_dept_policies(),
        Err(ValidationError::OrientationDate)
    );
    assert_eq!(
        employee.move_into_cubicle("C-7"),
        Err(ValidationError::OrientationDate)
    );
    assert!(!employee.reviewed_dept_policies());
    assert!(!employee.moved_in());
    assert_eq!(employee.cube_id(), None);
    assert!(employee.report_service().is_empty());

    employee.set_orientation_date(at(2025, 12, 31));
    employee.move_into_cubicle("C-7").unwrap();
    assert_eq!(
        employee.report_service().report_text(),
        "Jane Doe moved into cubicle C-7 on 12/31/2025\n"
    );
}

#[test]
fn move_rejects_empty_cube_before_checking_date() {
    let mut employee = hire();
    assert_eq!(employee.move_into_cubicle(""), Err(ValidationError::CubeId));
}

#[test]
fn status_flags_are_independent() {
    let mut employee = hire();
    employee.set_moved_in(true);
    assert!(employee.moved_in());
    assert!(!employee.met_with_hr());

    employee.set_met_dept_staff(true);
    employee.set_met_dept_staff(false);
    employee.set_reviewed_dept_policies(true);
    employee.set_met_with_hr(true);
    assert!(!employee.met_dept_staff());
    assert!(employee.reviewed_dept_policies());
    assert!(employee.met_with_hr());
    assert!(employee.report_service().is_empty());
}

#[test]
fn report_service_can_be_replaced() {
    let mut employee = hire();
    employee.do_first_time_orientation_at("C-200", at(2024, 9, 3)).unwrap();

    let mut fresh = EmployeeReportService::new();
    fresh.add_data("transferred\n");
    employee.set_report_service(fresh);
    employee.review_dept_policies().unwrap();

    assert_eq!(
        employee.report_service().report_text(),
        "transferred\nJane Doe reviewed Dept policies on 9/3/2024\n"
    );
}

#[test]
fn renamed_employee_reports_under_new_name() {
    let mut employee = hire();
    employee.set_orientation_date(at(2024, 9, 3));
    employee.set_last_name("Roe").unwrap();
    employee.review_dept_policies().unwrap();
    assert_eq!(
        employee.report_service().report_text(),
        "Jane Roe reviewed Dept policies on 9/3/2024\n"
    );
    assert_eq!(
        employee.to_string(),
        "EmployeeInfo{SSN=123456789, Last_Name=Roe, First_Name=Jane}"
    );
}

#[test]
fn snapshot_serializes_state_and_report() {
    let mut employee = hire();
    employee.do_first_time_orientation_at("C-200", at(2024, 9, 3)).unwrap();

    let json = serde_json::to_value(&employee).unwrap();
    assert_eq!(json["first_name"], "Jane");
    assert_eq!(json["cube_id"], "C-200");
    assert_eq!(json["moved_in"], true);
    assert!(json["orientation_date"].as_str().unwrap().starts_with("2024-09-03T12:00:00"));
    assert_eq!(
        json["report_service"]["report"],
        employee.report_service().report_text()
    );
}
