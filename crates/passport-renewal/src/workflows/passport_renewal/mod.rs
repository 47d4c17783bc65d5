//! Passport renewal eligibility: which follow-up questions and form sections apply to a
//! returning applicant, based on their previously issued book and card.

pub mod domain;
pub mod eligibility;
pub mod intake;
pub mod plan;
pub mod router;
pub mod service;

#[cfg(test)]
mod tests;

pub use domain::{
    ApplicantProfile, DocumentKind, DocumentStatus, PassportHoldings, PassportRecord,
    RenewalCase, YesNo,
};
pub use eligibility::{
    determine_questions, evaluate_disclosure, DisclosureDecision, DisclosureOutcome,
    FollowUpQuestion, ValidityWindow,
};
pub use intake::{
    check_issue_date, parse_form_date, DisclosureRequest, IntakeError, PassportIntake,
    RenewalIntake,
};
pub use plan::{build_form_plan, DocumentAssessment, RenewalFormPlan};
pub use router::{renewal_router, DisclosureView, EligibilityRequest};
pub use service::RenewalEligibilityService;
