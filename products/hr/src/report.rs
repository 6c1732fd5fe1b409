use serde::{Deserialize, Serialize};

/// Append-only text log of orientation events.
///
/// Lines are stored exactly as handed to [`add_data`](Self::add_data); the
/// caller supplies any trailing newline.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeReportService {
    report: String,
}

impl EmployeeReportService {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_data(&mut self, data: impl AsRef<str>) {
        self.report.push_str(data.as_ref());
    }

    pub fn report_text(&self) -> &str {
        &self.report
    }

    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.report.lines()
    }

    pub fn is_empty(&self) -> bool {
        self.report.is_empty()
    }
}
