use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::calendar::shift_years;

/// Applicants younger than this at issue receive the shorter minor validity.
pub const MINOR_AGE_THRESHOLD: i32 = 16;

/// How long an issued document stays valid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValidityWindow {
    FiveYears,
    TenYears,
}

impl ValidityWindow {
    pub const fn for_age_at_issue(age_at_issue: i32) -> Self {
        if age_at_issue < MINOR_AGE_THRESHOLD {
            ValidityWindow::FiveYears
        } else {
            ValidityWindow::TenYears
        }
    }

    pub const fn years(self) -> i32 {
        match self {
            ValidityWindow::FiveYears => 5,
            ValidityWindow::TenYears => 10,
        }
    }

    pub fn expires_on(self, issue_date: NaiveDate) -> NaiveDate {
        shift_years(issue_date, self.years())
    }
}

/// Last valid day of a document issued on `issue_date` to someone `age_at_issue` years old.
pub fn expiration_date(issue_date: NaiveDate, age_at_issue: i32) -> NaiveDate {
    ValidityWindow::for_age_at_issue(age_at_issue).expires_on(issue_date)
}
