//! Section gates for the renewal form.
//!
//! Each predicate is a pure function of the validated case and the reference day.

use chrono::NaiveDate;

use super::super::domain::{DocumentStatus, PassportRecord, RenewalCase};
use super::calendar::{age_at_issue, age_on, is_within_years};
use super::disclosure::{determine_questions, DisclosureDecision};
use super::validity::MINOR_AGE_THRESHOLD;

/// Documents issued longer ago than this no longer count as recent for adult applicants.
pub const ADULT_DOCUMENT_LOOKBACK_YEARS: i32 = 15;
/// Lookback used while the applicant is still a minor.
pub const MINOR_DOCUMENT_LOOKBACK_YEARS: i32 = 5;

/// Whether the lost/stolen reporting section is required.
pub fn should_show_lost_stolen_info(case: &RenewalCase, today: NaiveDate) -> bool {
    let book_needs_report = case.book.as_ref().is_some_and(|book| {
        needs_loss_report(book)
            && match book.issue_date {
                Some(issued) => is_within_years(issued, ADULT_DOCUMENT_LOOKBACK_YEARS, today),
                None => !book.declared_older_than_15_years(),
            }
    });

    let card_needs_report = case.card.as_ref().is_some_and(needs_loss_report);

    book_needs_report || card_needs_report
}

fn needs_loss_report(record: &PassportRecord) -> bool {
    record.status.is_lost_or_stolen() && !record.has_reported_lost_or_stolen
}

/// Highest disclosure across in-hand documents recent enough to count, if any qualify.
pub fn name_change_decision(case: &RenewalCase, today: NaiveDate) -> Option<DisclosureDecision> {
    let date_of_birth = case.applicant.date_of_birth;
    let lookback = if age_on(date_of_birth, today) >= MINOR_AGE_THRESHOLD {
        ADULT_DOCUMENT_LOOKBACK_YEARS
    } else {
        MINOR_DOCUMENT_LOOKBACK_YEARS
    };

    case.documents()
        .filter(|(_, record)| record.status == DocumentStatus::Yes)
        .filter_map(|(_, record)| record.issue_date.map(|issued| (record, issued)))
        .filter(|(_, issued)| is_within_years(*issued, lookback, today))
        .map(|(record, issued)| {
            determine_questions(
                date_of_birth,
                issued,
                record.status.is_lost_or_stolen(),
                today,
            )
        })
        .max()
}

/// Whether the name-change section is required.
pub fn should_show_name_change_info(case: &RenewalCase, today: NaiveDate) -> bool {
    matches!(
        name_change_decision(case, today),
        Some(decision) if decision != DisclosureDecision::NoQuestions
    )
}

/// Whether the parent information section is required.
///
/// Hidden when no document is held, and when every held document is in hand, was issued
/// at 16 or older, and at least one of them is not older than 15 years.
pub fn should_show_parent_info(case: &RenewalCase, today: NaiveDate) -> bool {
    if case.book.is_none() && case.card.is_none() {
        return false;
    }

    let date_of_birth = case.applicant.date_of_birth;
    let all_adult_in_hand = case.documents().all(|(_, record)| {
        record.status.is_in_hand()
            && record
                .issue_date
                .is_some_and(|issued| age_at_issue(date_of_birth, issued) >= MINOR_AGE_THRESHOLD)
    });
    let all_older_than_15_years = case
        .documents()
        .all(|(_, record)| is_older_than_15_years(record, today));

    !(all_adult_in_hand && !all_older_than_15_years)
}

/// Prefers the issue date; falls back to the applicant's own answer.
pub fn is_older_than_15_years(record: &PassportRecord, today: NaiveDate) -> bool {
    match record.issue_date {
        Some(issued) => !is_within_years(issued, ADULT_DOCUMENT_LOOKBACK_YEARS, today),
        None => record.declared_older_than_15_years(),
    }
}
