use chrono::NaiveDate;
use serde::Serialize;

use super::domain::{DocumentKind, DocumentStatus, PassportHoldings, RenewalCase};
use super::eligibility::{
    evaluate_disclosure, should_show_lost_stolen_info, should_show_name_change_info,
    should_show_parent_info, DisclosureDecision, DisclosureOutcome, FollowUpQuestion,
};

/// Decision table result for one held document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DocumentAssessment {
    pub kind: DocumentKind,
    pub status: DocumentStatus,
    /// Absent when the applicant could not supply an issue date.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disclosure: Option<DisclosureOutcome>,
}

/// Everything the form layer needs to decide what to render for a case.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenewalFormPlan {
    pub today: NaiveDate,
    pub holdings: PassportHoldings,
    pub documents: Vec<DocumentAssessment>,
    pub disclosure: DisclosureDecision,
    pub question_count: u8,
    pub questions: Vec<FollowUpQuestion>,
    pub show_parent_info: bool,
    pub show_name_change_info: bool,
    pub show_lost_stolen_info: bool,
}

impl RenewalFormPlan {
    pub fn assessment(&self, kind: DocumentKind) -> Option<&DocumentAssessment> {
        self.documents.iter().find(|assessment| assessment.kind == kind)
    }

    pub fn sections_label(&self) -> String {
        let mut sections = Vec::new();
        if self.show_parent_info {
            sections.push("parent info");
        }
        if self.show_name_change_info {
            sections.push("name change");
        }
        if self.show_lost_stolen_info {
            sections.push("lost/stolen report");
        }

        if sections.is_empty() {
            "none".to_string()
        } else {
            sections.join(", ")
        }
    }
}

/// Evaluate every rule for `case` as of `today`.
///
/// The overall disclosure is the highest decision across held documents; each document
/// counts as lost when its own status is lost or stolen.
pub fn build_form_plan(case: &RenewalCase, today: NaiveDate) -> RenewalFormPlan {
    let date_of_birth = case.applicant.date_of_birth;

    let documents: Vec<DocumentAssessment> = case
        .documents()
        .map(|(kind, record)| DocumentAssessment {
            kind,
            status: record.status,
            disclosure: record.issue_date.map(|issued| {
                evaluate_disclosure(
                    date_of_birth,
                    issued,
                    record.status.is_lost_or_stolen(),
                    today,
                )
            }),
        })
        .collect();

    let disclosure = documents
        .iter()
        .filter_map(|assessment| assessment.disclosure.map(|outcome| outcome.decision))
        .max()
        .unwrap_or(DisclosureDecision::NoQuestions);

    RenewalFormPlan {
        today,
        holdings: case.holdings(),
        documents,
        disclosure,
        question_count: disclosure.count(),
        questions: disclosure.questions().to_vec(),
        show_parent_info: should_show_parent_info(case, today),
        show_name_change_info: should_show_name_change_info(case, today),
        show_lost_stolen_info: should_show_lost_stolen_info(case, today),
    }
}
