use super::common::*;
use crate::workflows::passport_renewal::domain::{DocumentKind, DocumentStatus, PassportHoldings};
use crate::workflows::passport_renewal::eligibility::{DisclosureDecision, FollowUpQuestion};
use crate::workflows::passport_renewal::plan::build_form_plan;

#[test]
fn plan_takes_highest_disclosure_across_documents() {
    let case = case(
        adult_dob(),
        Some(record(DocumentStatus::Lost, Some(date(2024, 9, 1)))),
        Some(record(DocumentStatus::Yes, Some(date(2012, 6, 15)))),
    );

    let plan = build_form_plan(&case, today());

    assert_eq!(plan.holdings, PassportHoldings::Both);
    assert_eq!(plan.disclosure, DisclosureDecision::AllQuestions);
    assert_eq!(plan.question_count, 3);
    assert_eq!(
        plan.questions,
        vec![
            FollowUpQuestion::NameChange,
            FollowUpQuestion::DataCorrection,
            FollowUpQuestion::LostDocumentDetails,
        ]
    );

    let card = plan.assessment(DocumentKind::Card).expect("card assessed");
    assert_eq!(
        card.disclosure.map(|outcome| outcome.decision),
        Some(DisclosureDecision::NameChangeOnly)
    );
    assert!(plan.show_lost_stolen_info);
    assert!(plan.show_parent_info);
    assert!(plan.show_name_change_info);
}

#[test]
fn undated_documents_are_listed_without_disclosure() {
    let case = book_only(adult_dob(), lost_without_date(None));

    let plan = build_form_plan(&case, today());

    let book = plan.assessment(DocumentKind::Book).expect("book assessed");
    assert_eq!(book.status, DocumentStatus::Lost);
    assert!(book.disclosure.is_none());
    assert_eq!(plan.disclosure, DisclosureDecision::NoQuestions);
    assert!(plan.questions.is_empty());
    assert_eq!(plan.sections_label(), "parent info, lost/stolen report");
}

#[test]
fn plan_for_case_without_documents_is_empty() {
    let plan = build_form_plan(&case(adult_dob(), None, None), today());

    assert_eq!(plan.holdings, PassportHoldings::None);
    assert!(plan.documents.is_empty());
    assert_eq!(plan.question_count, 0);
    assert_eq!(plan.sections_label(), "none");
}

#[test]
fn service_uses_clock_unless_overridden() {
    let service = service();
    let case = book_only(adult_dob(), record(DocumentStatus::Yes, Some(date(2015, 6, 15))));

    let on_clock = service.plan(&case, None);
    let later = service.plan(&case, Some(date(2025, 6, 16)));

    assert_eq!(on_clock.today, today());
    assert_eq!(on_clock.disclosure, DisclosureDecision::NameChangeAndCorrections);
    assert_eq!(later.disclosure, DisclosureDecision::NameChangeOnly);
}

#[test]
fn service_evaluates_intake_on_clock_day() {
    let plan = service()
        .evaluate_intake(intake(), None)
        .expect("intake evaluates");

    assert_eq!(plan.today, today());
    assert_eq!(plan.disclosure, DisclosureDecision::NameChangeAndCorrections);
    assert!(!plan.show_parent_info);
    assert!(plan.show_name_change_info);
    assert!(!plan.show_lost_stolen_info);
}
