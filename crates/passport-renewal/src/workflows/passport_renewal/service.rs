use std::sync::Arc;

use chrono::NaiveDate;
use tracing::{debug, warn};

use crate::clock::Clock;

use super::domain::RenewalCase;
use super::eligibility::{evaluate_disclosure, DisclosureOutcome};
use super::intake::{IntakeError, RenewalIntake};
use super::plan::{build_form_plan, RenewalFormPlan};

/// Service combining intake validation with the eligibility rules.
///
/// Plans are derived on every call and never stored.
pub struct RenewalEligibilityService<C> {
    clock: Arc<C>,
}

impl<C> RenewalEligibilityService<C>
where
    C: Clock + 'static,
{
    pub fn new(clock: Arc<C>) -> Self {
        Self { clock }
    }

    pub fn today(&self) -> NaiveDate {
        self.clock.today()
    }

    /// Build the form plan for an already validated case.
    pub fn plan(&self, case: &RenewalCase, today: Option<NaiveDate>) -> RenewalFormPlan {
        let today = today.unwrap_or_else(|| self.clock.today());
        let plan = build_form_plan(case, today);

        debug!(
            %today,
            holdings = ?plan.holdings,
            questions = plan.question_count,
            parent_info = plan.show_parent_info,
            name_change = plan.show_name_change_info,
            lost_stolen = plan.show_lost_stolen_info,
            "renewal form plan built"
        );

        plan
    }

    /// Validate a submitted form and build its plan.
    pub fn evaluate_intake(
        &self,
        intake: RenewalIntake,
        today: Option<NaiveDate>,
    ) -> Result<RenewalFormPlan, IntakeError> {
        let today = today.unwrap_or_else(|| self.clock.today());
        let case = intake.into_case(today).map_err(|error| {
            warn!(%error, "renewal intake rejected");
            error
        })?;

        Ok(self.plan(&case, Some(today)))
    }

    /// Run the decision table for a single document.
    pub fn disclosure(
        &self,
        date_of_birth: NaiveDate,
        issue_date: NaiveDate,
        is_book_lost: bool,
        today: Option<NaiveDate>,
    ) -> DisclosureOutcome {
        let today = today.unwrap_or_else(|| self.clock.today());
        let outcome = evaluate_disclosure(date_of_birth, issue_date, is_book_lost, today);

        debug!(
            %today,
            rule = outcome.rule,
            questions = outcome.question_count,
            "disclosure rule matched"
        );

        outcome
    }
}
