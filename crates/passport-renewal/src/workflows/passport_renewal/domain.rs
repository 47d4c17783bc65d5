use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Physical document types an applicant may have held.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentKind {
    Book,
    Card,
}

impl DocumentKind {
    pub const fn label(self) -> &'static str {
        match self {
            DocumentKind::Book => "passport book",
            DocumentKind::Card => "passport card",
        }
    }
}

/// Condition of a previously issued document as reported on the form.
///
/// `Yes` means the applicant still has the document in hand and undamaged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentStatus {
    Yes,
    Damaged,
    Lost,
    Stolen,
}

impl DocumentStatus {
    pub const fn is_lost_or_stolen(self) -> bool {
        matches!(self, DocumentStatus::Lost | DocumentStatus::Stolen)
    }

    pub const fn is_in_hand(self) -> bool {
        matches!(self, DocumentStatus::Yes | DocumentStatus::Damaged)
    }

    pub const fn label(self) -> &'static str {
        match self {
            DocumentStatus::Yes => "yes",
            DocumentStatus::Damaged => "damaged",
            DocumentStatus::Lost => "lost",
            DocumentStatus::Stolen => "stolen",
        }
    }
}

/// Yes/no radio answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum YesNo {
    Yes,
    No,
}

/// One document the applicant previously held, as captured by the intake form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PassportRecord {
    pub status: DocumentStatus,
    /// Lost or stolen documents can be reported without a known issue date.
    pub issue_date: Option<NaiveDate>,
    pub has_reported_lost_or_stolen: bool,
    /// Applicant's own answer, only consulted when no issue date is known.
    pub is_older_than_15_years: Option<YesNo>,
}

impl PassportRecord {
    pub fn in_hand(issue_date: NaiveDate) -> Self {
        Self {
            status: DocumentStatus::Yes,
            issue_date: Some(issue_date),
            has_reported_lost_or_stolen: false,
            is_older_than_15_years: None,
        }
    }

    pub fn declared_older_than_15_years(&self) -> bool {
        self.is_older_than_15_years == Some(YesNo::Yes)
    }
}

/// Identity facts needed by the age-based rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApplicantProfile {
    pub date_of_birth: NaiveDate,
}

/// Which previous documents the applicant reports holding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PassportHoldings {
    Book,
    Card,
    Both,
    None,
}

impl PassportHoldings {
    pub const fn includes(self, kind: DocumentKind) -> bool {
        matches!(
            (self, kind),
            (PassportHoldings::Both, _)
                | (PassportHoldings::Book, DocumentKind::Book)
                | (PassportHoldings::Card, DocumentKind::Card)
        )
    }
}

/// Validated renewal case data consumed by the eligibility rules.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenewalCase {
    pub applicant: ApplicantProfile,
    pub book: Option<PassportRecord>,
    pub card: Option<PassportRecord>,
}

impl RenewalCase {
    pub fn holdings(&self) -> PassportHoldings {
        match (&self.book, &self.card) {
            (Some(_), Some(_)) => PassportHoldings::Both,
            (Some(_), None) => PassportHoldings::Book,
            (None, Some(_)) => PassportHoldings::Card,
            (None, None) => PassportHoldings::None,
        }
    }

    pub fn document(&self, kind: DocumentKind) -> Option<&PassportRecord> {
        match kind {
            DocumentKind::Book => self.book.as_ref(),
            DocumentKind::Card => self.card.as_ref(),
        }
    }

    /// Held documents, book first.
    pub fn documents(&self) -> impl Iterator<Item = (DocumentKind, &PassportRecord)> + '_ {
        [DocumentKind::Book, DocumentKind::Card]
            .into_iter()
            .filter_map(move |kind| self.document(kind).map(|record| (kind, record)))
    }
}
