use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::calendar::{age_at_issue, is_within_years, normalize_date, shift_years};
use super::validity::{ValidityWindow, MINOR_AGE_THRESHOLD};

/// A lost book issued at most this many years ago surfaces every question.
pub const RECENT_ISSUE_YEARS: i32 = 2;
/// Years after expiration during which the name-change question is still asked.
pub const GRACE_WINDOW_YEARS: i32 = 5;

/// Number of follow-up questions the renewal form must display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DisclosureDecision {
    NoQuestions,
    NameChangeOnly,
    NameChangeAndCorrections,
    AllQuestions,
}

impl DisclosureDecision {
    pub const fn count(self) -> u8 {
        match self {
            DisclosureDecision::NoQuestions => 0,
            DisclosureDecision::NameChangeOnly => 1,
            DisclosureDecision::NameChangeAndCorrections => 2,
            DisclosureDecision::AllQuestions => 3,
        }
    }

    pub const fn questions(self) -> &'static [FollowUpQuestion] {
        const ALL: [FollowUpQuestion; 3] = [
            FollowUpQuestion::NameChange,
            FollowUpQuestion::DataCorrection,
            FollowUpQuestion::LostDocumentDetails,
        ];
        match self {
            DisclosureDecision::NoQuestions => &[],
            DisclosureDecision::NameChangeOnly => &[FollowUpQuestion::NameChange],
            DisclosureDecision::NameChangeAndCorrections => {
                &[FollowUpQuestion::NameChange, FollowUpQuestion::DataCorrection]
            }
            DisclosureDecision::AllQuestions => &ALL,
        }
    }
}

/// Follow-up questions that the decision table can switch on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FollowUpQuestion {
    NameChange,
    DataCorrection,
    LostDocumentDetails,
}

impl FollowUpQuestion {
    pub const fn label(self) -> &'static str {
        match self {
            FollowUpQuestion::NameChange => "Has your name changed since the document was issued?",
            FollowUpQuestion::DataCorrection => {
                "Does the document contain a printing error or incorrect data?"
            }
            FollowUpQuestion::LostDocumentDetails => {
                "Describe how and when the document was lost or stolen."
            }
        }
    }
}

/// Derived dates and flags every rule is evaluated against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisclosureFacts {
    pub today: NaiveDate,
    pub issue_date: NaiveDate,
    pub age_at_issue: i32,
    pub validity: ValidityWindow,
    pub expiration_date: NaiveDate,
    pub grace_ends_on: NaiveDate,
    pub is_book_lost: bool,
    pub issued_within_recent_window: bool,
}

impl DisclosureFacts {
    pub fn derive(
        date_of_birth: NaiveDate,
        issue_date: NaiveDate,
        is_book_lost: bool,
        today: NaiveDate,
    ) -> Self {
        let date_of_birth = normalize_date(&date_of_birth);
        let issue_date = normalize_date(&issue_date);
        let today = normalize_date(&today);

        let age_at_issue = age_at_issue(date_of_birth, issue_date);
        let validity = ValidityWindow::for_age_at_issue(age_at_issue);
        let expiration_date = validity.expires_on(issue_date);

        Self {
            today,
            issue_date,
            age_at_issue,
            validity,
            expiration_date,
            grace_ends_on: shift_years(expiration_date, GRACE_WINDOW_YEARS),
            is_book_lost,
            issued_within_recent_window: is_within_years(issue_date, RECENT_ISSUE_YEARS, today),
        }
    }

    fn is_expired(&self) -> bool {
        self.today > self.expiration_date
    }
}

/// One row of the decision table.
#[derive(Clone, Copy)]
pub struct DisclosureRule {
    pub name: &'static str,
    pub decision: DisclosureDecision,
    applies: fn(&DisclosureFacts) -> bool,
}

impl fmt::Debug for DisclosureRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DisclosureRule")
            .field("name", &self.name)
            .field("decision", &self.decision)
            .finish()
    }
}

impl DisclosureRule {
    pub fn matches(&self, facts: &DisclosureFacts) -> bool {
        (self.applies)(facts)
    }
}

/// Rule reported when nothing in [`DISCLOSURE_RULES`] matches.
pub const FULLY_LAPSED_RULE: &str = "fully_lapsed";

/// Evaluated top-down; the first match wins. A recently issued lost book is checked
/// before validity, so it takes precedence even when the book has not expired.
pub const DISCLOSURE_RULES: &[DisclosureRule] = &[
    DisclosureRule {
        name: "recent_lost_book",
        decision: DisclosureDecision::AllQuestions,
        applies: recent_lost_book,
    },
    DisclosureRule {
        name: "still_valid",
        decision: DisclosureDecision::NameChangeAndCorrections,
        applies: still_valid,
    },
    DisclosureRule {
        name: "lapsed_minor_passport",
        decision: DisclosureDecision::NoQuestions,
        applies: lapsed_minor_passport,
    },
    DisclosureRule {
        name: "within_grace_window",
        decision: DisclosureDecision::NameChangeOnly,
        applies: within_grace_window,
    },
];

fn recent_lost_book(facts: &DisclosureFacts) -> bool {
    facts.is_book_lost && facts.issued_within_recent_window
}

fn still_valid(facts: &DisclosureFacts) -> bool {
    !facts.is_expired()
}

fn lapsed_minor_passport(facts: &DisclosureFacts) -> bool {
    facts.age_at_issue < MINOR_AGE_THRESHOLD && facts.is_expired()
}

fn within_grace_window(facts: &DisclosureFacts) -> bool {
    facts.is_expired() && facts.today <= facts.grace_ends_on
}

/// Decision plus the facts and rule that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DisclosureOutcome {
    pub decision: DisclosureDecision,
    pub question_count: u8,
    pub rule: &'static str,
    pub age_at_issue: i32,
    pub validity: ValidityWindow,
    pub expiration_date: NaiveDate,
    pub grace_ends_on: NaiveDate,
}

impl DisclosureOutcome {
    pub fn questions(&self) -> &'static [FollowUpQuestion] {
        self.decision.questions()
    }
}

pub fn evaluate_disclosure(
    date_of_birth: NaiveDate,
    issue_date: NaiveDate,
    is_book_lost: bool,
    today: NaiveDate,
) -> DisclosureOutcome {
    let facts = DisclosureFacts::derive(date_of_birth, issue_date, is_book_lost, today);

    let (rule, decision) = DISCLOSURE_RULES
        .iter()
        .find(|rule| rule.matches(&facts))
        .map(|rule| (rule.name, rule.decision))
        .unwrap_or((FULLY_LAPSED_RULE, DisclosureDecision::NoQuestions));

    DisclosureOutcome {
        decision,
        question_count: decision.count(),
        rule,
        age_at_issue: facts.age_at_issue,
        validity: facts.validity,
        expiration_date: facts.expiration_date,
        grace_ends_on: facts.grace_ends_on,
    }
}

/// How many follow-up questions to show for one previously issued document.
pub fn determine_questions(
    date_of_birth: NaiveDate,
    issue_date: NaiveDate,
    is_book_lost: bool,
    today: NaiveDate,
) -> DisclosureDecision {
    evaluate_disclosure(date_of_birth, issue_date, is_book_lost, today).decision
}
