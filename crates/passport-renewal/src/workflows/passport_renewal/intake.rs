use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::domain::{
    ApplicantProfile, DocumentKind, DocumentStatus, PassportHoldings, PassportRecord,
    RenewalCase, YesNo,
};

/// Format used by every date input on the renewal form.
pub const FORM_DATE_FORMAT: &str = "%m/%d/%Y";

/// Renewal form payload as submitted by the browser.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenewalIntake {
    pub date_of_birth: String,
    pub has_passport_card_or_book: PassportHoldings,
    #[serde(default)]
    pub passport_book: Option<PassportIntake>,
    #[serde(default)]
    pub passport_card: Option<PassportIntake>,
}

/// Form section describing one previously issued document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PassportIntake {
    pub status: DocumentStatus,
    #[serde(default)]
    pub issue_date: Option<String>,
    #[serde(default)]
    pub has_reported_lost_or_stolen: bool,
    #[serde(default)]
    pub is_older_than_15_years: Option<YesNo>,
}

/// Reasons a submitted form cannot be evaluated.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IntakeError {
    #[error("{field} must be a valid MM/DD/YYYY date (found '{value}')")]
    InvalidDate { field: &'static str, value: String },
    #[error("form reports a {} but no details were provided", .0.label())]
    MissingDocument(DocumentKind),
    #[error("{field} cannot be in the future")]
    DateInFuture { field: &'static str },
    #[error("{field} is before the applicant's date of birth")]
    IssuedBeforeBirth { field: &'static str },
}

/// Parse a strict `MM/DD/YYYY` date: two-digit month and day, four-digit year.
pub fn parse_form_date(raw: &str) -> Result<NaiveDate, String> {
    let bytes = raw.as_bytes();
    let well_formed = bytes.len() == 10
        && bytes[2] == b'/'
        && bytes[5] == b'/'
        && bytes
            .iter()
            .enumerate()
            .all(|(index, byte)| index == 2 || index == 5 || byte.is_ascii_digit());

    if !well_formed {
        return Err(format!("'{raw}' is not formatted as MM/DD/YYYY"));
    }

    NaiveDate::parse_from_str(raw, FORM_DATE_FORMAT)
        .map_err(|err| format!("'{raw}' is not a calendar date ({err})"))
}

impl RenewalIntake {
    /// Validate the payload against `today` and produce a typed case.
    pub fn into_case(self, today: NaiveDate) -> Result<RenewalCase, IntakeError> {
        let date_of_birth = form_date("date_of_birth", &self.date_of_birth)?;
        not_after("date_of_birth", date_of_birth, today)?;

        let holdings = self.has_passport_card_or_book;
        let book = held_document(
            DocumentKind::Book,
            holdings,
            self.passport_book,
            date_of_birth,
            today,
        )?;
        let card = held_document(
            DocumentKind::Card,
            holdings,
            self.passport_card,
            date_of_birth,
            today,
        )?;

        Ok(RenewalCase {
            applicant: ApplicantProfile { date_of_birth },
            book,
            card,
        })
    }
}

fn held_document(
    kind: DocumentKind,
    holdings: PassportHoldings,
    section: Option<PassportIntake>,
    date_of_birth: NaiveDate,
    today: NaiveDate,
) -> Result<Option<PassportRecord>, IntakeError> {
    if !holdings.includes(kind) {
        return Ok(None);
    }

    let section = section.ok_or(IntakeError::MissingDocument(kind))?;
    let field = match kind {
        DocumentKind::Book => "passport_book.issue_date",
        DocumentKind::Card => "passport_card.issue_date",
    };

    let issue_date = match section.issue_date.as_deref() {
        Some(raw) if !raw.trim().is_empty() => Some(form_date(field, raw)?),
        _ => None,
    };

    if let Some(issued) = issue_date {
        check_issue_date(field, date_of_birth, issued, today)?;
    }

    Ok(Some(PassportRecord {
        status: section.status,
        issue_date,
        has_reported_lost_or_stolen: section.has_reported_lost_or_stolen,
        is_older_than_15_years: section.is_older_than_15_years,
    }))
}

/// Reject an issue date that lies after `today` or before the applicant was born.
pub fn check_issue_date(
    field: &'static str,
    date_of_birth: NaiveDate,
    issue_date: NaiveDate,
    today: NaiveDate,
) -> Result<(), IntakeError> {
    not_after(field, issue_date, today)?;
    if issue_date < date_of_birth {
        return Err(IntakeError::IssuedBeforeBirth { field });
    }
    Ok(())
}

fn not_after(field: &'static str, value: NaiveDate, today: NaiveDate) -> Result<(), IntakeError> {
    if value > today {
        return Err(IntakeError::DateInFuture { field });
    }
    Ok(())
}

fn form_date(field: &'static str, raw: &str) -> Result<NaiveDate, IntakeError> {
    parse_form_date(raw).map_err(|_| IntakeError::InvalidDate {
        field,
        value: raw.to_string(),
    })
}

/// Inputs for evaluating a single document against the decision table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisclosureRequest {
    pub date_of_birth: String,
    pub issue_date: String,
    #[serde(default)]
    pub is_book_lost: bool,
    #[serde(default)]
    pub today: Option<NaiveDate>,
}

impl DisclosureRequest {
    /// Parsed `(date_of_birth, issue_date)`, validated against `today`.
    pub fn dates(&self, today: NaiveDate) -> Result<(NaiveDate, NaiveDate), IntakeError> {
        let date_of_birth = form_date("date_of_birth", &self.date_of_birth)?;
        not_after("date_of_birth", date_of_birth, today)?;
        let issue_date = form_date("issue_date", &self.issue_date)?;
        check_issue_date("issue_date", date_of_birth, issue_date, today)?;
        Ok((date_of_birth, issue_date))
    }
}
