use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Router,
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::clock::Clock;

use super::eligibility::{DisclosureOutcome, FollowUpQuestion};
use super::intake::{DisclosureRequest, IntakeError, RenewalIntake};
use super::service::RenewalEligibilityService;

/// Renewal form body plus an optional evaluation date override (`YYYY-MM-DD`).
#[derive(Debug, Clone, Deserialize)]
pub struct EligibilityRequest {
    #[serde(flatten)]
    pub intake: RenewalIntake,
    #[serde(default)]
    pub today: Option<NaiveDate>,
}

/// Single-document decision with the questions it unlocks.
#[derive(Debug, Clone, Serialize)]
pub struct DisclosureView {
    pub today: NaiveDate,
    #[serde(flatten)]
    pub outcome: DisclosureOutcome,
    pub questions: Vec<FollowUpQuestion>,
}

/// Router builder exposing the renewal evaluator over HTTP.
pub fn renewal_router<C>(service: Arc<RenewalEligibilityService<C>>) -> Router
where
    C: Clock + 'static,
{
    Router::new()
        .route("/api/v1/renewals/eligibility", post(eligibility_handler::<C>))
        .route("/api/v1/renewals/disclosure", post(disclosure_handler::<C>))
        .with_state(service)
}

pub(crate) async fn eligibility_handler<C>(
    State(service): State<Arc<RenewalEligibilityService<C>>>,
    axum::Json(request): axum::Json<EligibilityRequest>,
) -> Response
where
    C: Clock + 'static,
{
    match service.evaluate_intake(request.intake, request.today) {
        Ok(plan) => (StatusCode::OK, axum::Json(plan)).into_response(),
        Err(error) => intake_rejection(error),
    }
}

pub(crate) async fn disclosure_handler<C>(
    State(service): State<Arc<RenewalEligibilityService<C>>>,
    axum::Json(request): axum::Json<DisclosureRequest>,
) -> Response
where
    C: Clock + 'static,
{
    let today = request.today.unwrap_or_else(|| service.today());
    let (date_of_birth, issue_date) = match request.dates(today) {
        Ok(dates) => dates,
        Err(error) => return intake_rejection(error),
    };

    let outcome = service.disclosure(date_of_birth, issue_date, request.is_book_lost, Some(today));
    let view = DisclosureView {
        today,
        outcome,
        questions: outcome.questions().to_vec(),
    };

    (StatusCode::OK, axum::Json(view)).into_response()
}

fn intake_rejection(error: IntakeError) -> Response {
    let payload = json!({
        "error": error.to_string(),
    });
    (StatusCode::UNPROCESSABLE_ENTITY, axum::Json(payload)).into_response()
}
