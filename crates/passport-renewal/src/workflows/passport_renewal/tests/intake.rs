use super::common::*;
use crate::workflows::passport_renewal::domain::{DocumentKind, DocumentStatus, PassportHoldings};
use crate::workflows::passport_renewal::intake::{
    parse_form_date, DisclosureRequest, IntakeError, PassportIntake,
};

#[test]
fn form_dates_must_be_strict_mm_dd_yyyy() {
    assert_eq!(parse_form_date("02/29/2024"), Ok(date(2024, 2, 29)));
    assert_eq!(parse_form_date("12/31/1999"), Ok(date(1999, 12, 31)));

    for malformed in [
        "1/5/2020",
        "2020-01-05",
        "02/30/2020",
        "13/01/2020",
        "02/29/2023",
        "01/05/20",
        "01-05-2020",
        " 12/31/1999 ",
        "12/31/1999\n",
        "",
    ] {
        assert!(
            parse_form_date(malformed).is_err(),
            "expected '{malformed}' to be rejected"
        );
    }
}

#[test]
fn intake_produces_typed_case() {
    let case = intake().into_case(today()).expect("intake is valid");

    assert_eq!(case.applicant.date_of_birth, date(1990, 3, 1));
    assert_eq!(case.holdings(), PassportHoldings::Book);
    let book = case.book.expect("book captured");
    assert_eq!(book.status, DocumentStatus::Yes);
    assert_eq!(book.issue_date, Some(date(2022, 6, 15)));
}

#[test]
fn intake_rejects_malformed_birth_date() {
    let mut intake = intake();
    intake.date_of_birth = "3/1/1990".to_string();

    match intake.into_case(today()) {
        Err(IntakeError::InvalidDate { field, value }) => {
            assert_eq!(field, "date_of_birth");
            assert_eq!(value, "3/1/1990");
        }
        other => panic!("expected invalid date, got {other:?}"),
    }
}

#[test]
fn intake_requires_details_for_claimed_documents() {
    let mut intake = intake();
    intake.has_passport_card_or_book = PassportHoldings::Both;

    match intake.into_case(today()) {
        Err(IntakeError::MissingDocument(DocumentKind::Card)) => {}
        other => panic!("expected missing card details, got {other:?}"),
    }
}

#[test]
fn intake_ignores_sections_for_unclaimed_documents() {
    let mut intake = intake();
    intake.has_passport_card_or_book = PassportHoldings::None;
    intake.passport_card = Some(PassportIntake {
        status: DocumentStatus::Stolen,
        issue_date: Some("not a date".to_string()),
        has_reported_lost_or_stolen: false,
        is_older_than_15_years: None,
    });

    let case = intake.into_case(today()).expect("unclaimed sections ignored");
    assert_eq!(case.holdings(), PassportHoldings::None);
}

#[test]
fn blank_issue_date_is_treated_as_unknown() {
    let mut intake = intake();
    if let Some(book) = intake.passport_book.as_mut() {
        book.status = DocumentStatus::Lost;
        book.issue_date = Some("   ".to_string());
    }

    let case = intake.into_case(today()).expect("blank date allowed");
    assert_eq!(case.book.and_then(|book| book.issue_date), None);
}

#[test]
fn intake_rejects_future_and_inverted_dates() {
    let mut future_birth = intake();
    future_birth.date_of_birth = "01/01/2030".to_string();
    assert_eq!(
        future_birth.into_case(today()),
        Err(IntakeError::DateInFuture {
            field: "date_of_birth"
        })
    );

    let mut future_issue = intake();
    if let Some(book) = future_issue.passport_book.as_mut() {
        book.issue_date = Some("07/01/2025".to_string());
    }
    assert_eq!(
        future_issue.into_case(today()),
        Err(IntakeError::DateInFuture {
            field: "passport_book.issue_date"
        })
    );

    let mut inverted = intake();
    if let Some(book) = inverted.passport_book.as_mut() {
        book.issue_date = Some("01/01/1985".to_string());
    }
    assert_eq!(
        inverted.into_case(today()),
        Err(IntakeError::IssuedBeforeBirth {
            field: "passport_book.issue_date"
        })
    );
}

#[test]
fn padded_issue_date_is_rejected() {
    let mut intake = intake();
    if let Some(book) = intake.passport_book.as_mut() {
        book.issue_date = Some(" 06/15/2022".to_string());
    }

    assert!(matches!(
        intake.into_case(today()),
        Err(IntakeError::InvalidDate {
            field: "passport_book.issue_date",
            ..
        })
    ));
}

#[test]
fn intake_payload_uses_form_vocabulary() {
    let payload = serde_json::json!({
        "date_of_birth": "03/01/1990",
        "has_passport_card_or_book": "both",
        "passport_book": {
            "status": "damaged",
            "issue_date": "06/15/2022",
            "is_older_than_15_years": "no"
        },
        "passport_card": {
            "status": "stolen",
            "has_reported_lost_or_stolen": true
        }
    });

    let intake: crate::workflows::passport_renewal::RenewalIntake =
        serde_json::from_value(payload).expect("payload deserializes");
    let case = intake.into_case(today()).expect("payload valid");

    assert_eq!(case.holdings(), PassportHoldings::Both);
    let card = case.card.expect("card captured");
    assert_eq!(card.status, DocumentStatus::Stolen);
    assert!(card.has_reported_lost_or_stolen);
    assert_eq!(card.issue_date, None);
}

#[test]
fn disclosure_request_parses_form_dates() {
    let request = DisclosureRequest {
        date_of_birth: "03/01/1990".to_string(),
        issue_date: "06/15/2024".to_string(),
        is_book_lost: true,
        today: None,
    };
    assert_eq!(
        request.dates(today()),
        Ok((date(1990, 3, 1), date(2024, 6, 15)))
    );

    let malformed = DisclosureRequest {
        issue_date: "2024-06-15".to_string(),
        ..request
    };
    assert!(matches!(
        malformed.dates(today()),
        Err(IntakeError::InvalidDate {
            field: "issue_date",
            ..
        })
    ));
}

#[test]
fn disclosure_request_rejects_dates_after_today() {
    let future_issue = DisclosureRequest {
        date_of_birth: "03/01/1990".to_string(),
        issue_date: "01/01/2030".to_string(),
        is_book_lost: true,
        today: None,
    };
    assert_eq!(
        future_issue.dates(today()),
        Err(IntakeError::DateInFuture {
            field: "issue_date"
        })
    );

    let future_birth = DisclosureRequest {
        date_of_birth: "01/01/2030".to_string(),
        ..future_issue.clone()
    };
    assert_eq!(
        future_birth.dates(today()),
        Err(IntakeError::DateInFuture {
            field: "date_of_birth"
        })
    );

    let inverted = DisclosureRequest {
        issue_date: "01/01/1985".to_string(),
        ..future_issue
    };
    assert_eq!(
        inverted.dates(today()),
        Err(IntakeError::IssuedBeforeBirth {
            field: "issue_date"
        })
    );
}
