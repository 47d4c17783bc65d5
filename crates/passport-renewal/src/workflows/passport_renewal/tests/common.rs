use std::sync::Arc;

use axum::response::Response;
use chrono::NaiveDate;
use serde_json::Value;

use crate::clock::FixedClock;
use crate::workflows::passport_renewal::domain::{
    ApplicantProfile, DocumentStatus, PassportHoldings, PassportRecord, RenewalCase, YesNo,
};
use crate::workflows::passport_renewal::intake::{PassportIntake, RenewalIntake};
use crate::workflows::passport_renewal::service::RenewalEligibilityService;

pub(super) fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid date")
}

/// Reference day every scenario is evaluated on.
pub(super) fn today() -> NaiveDate {
    date(2025, 6, 15)
}

pub(super) fn adult_dob() -> NaiveDate {
    date(1990, 3, 1)
}

pub(super) fn record(status: DocumentStatus, issue_date: Option<NaiveDate>) -> PassportRecord {
    PassportRecord {
        status,
        issue_date,
        has_reported_lost_or_stolen: false,
        is_older_than_15_years: None,
    }
}

pub(super) fn lost_without_date(older_than_15_years: Option<YesNo>) -> PassportRecord {
    PassportRecord {
        status: DocumentStatus::Lost,
        issue_date: None,
        has_reported_lost_or_stolen: false,
        is_older_than_15_years: older_than_15_years,
    }
}

pub(super) fn case(
    date_of_birth: NaiveDate,
    book: Option<PassportRecord>,
    card: Option<PassportRecord>,
) -> RenewalCase {
    RenewalCase {
        applicant: ApplicantProfile { date_of_birth },
        book,
        card,
    }
}

pub(super) fn book_only(date_of_birth: NaiveDate, book: PassportRecord) -> RenewalCase {
    case(date_of_birth, Some(book), None)
}

pub(super) fn service() -> RenewalEligibilityService<FixedClock> {
    RenewalEligibilityService::new(Arc::new(FixedClock::new(today())))
}

pub(super) fn intake() -> RenewalIntake {
    RenewalIntake {
        date_of_birth: "03/01/1990".to_string(),
        has_passport_card_or_book: PassportHoldings::Book,
        passport_book: Some(PassportIntake {
            status: DocumentStatus::Yes,
            issue_date: Some("06/15/2022".to_string()),
            has_reported_lost_or_stolen: false,
            is_older_than_15_years: Some(YesNo::No),
        }),
        passport_card: None,
    }
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
