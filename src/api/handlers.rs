//! HTTP request handlers for the PayShare engine API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::post,
};
use chrono::Utc;
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{PayCalculation, calculate_household, compute_with_audit};
use crate::models::{AuditTrace, Expense, PersonInput};

use super::request::{HouseholdRequest, PersonRequest};
use super::response::{
    ApiError, ApiErrorResponse, EarnerReport, HouseholdResponse, PayslipResponse,
    financials_display,
};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/calculate", post(calculate_handler))
        .route("/household", post(household_handler))
        .with_state(state)
}

/// Handler for POST /calculate.
///
/// Computes one earner's take-home pay with its audit trail.
async fn calculate_handler(
    State(state): State<AppState>,
    payload: Result<Json<PersonRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing payslip request");

    let input: PersonInput = match payload {
        Ok(Json(req)) => req.into(),
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    let start_time = Instant::now();
    let calculation = compute_with_audit(&input, state.statutory());
    let duration_us = start_time.elapsed().as_micros() as u64;

    info!(
        correlation_id = %correlation_id,
        net_income = %calculation.financials.net_income,
        duration_us,
        "Payslip calculated"
    );

    let report = earner_report(calculation, state.currency_symbol(), duration_us);
    let response = PayslipResponse {
        calculation_id: correlation_id,
        timestamp: Utc::now(),
        engine_version: env!("CARGO_PKG_VERSION").to_string(),
        financials: report.financials,
        display: report.display,
        audit_trace: report.audit_trace,
    };

    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        Json(response),
    )
        .into_response()
}

/// Handler for POST /household.
///
/// Computes both earners' pay and splits the expense list between them.
async fn household_handler(
    State(state): State<AppState>,
    payload: Result<Json<HouseholdRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing household request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    let person1: PersonInput = request.person1.into();
    let person2: PersonInput = request.person2.into();
    let expenses: Vec<Expense> = request.expenses.into_iter().map(Into::into).collect();

    let start_time = Instant::now();
    let result = calculate_household(&person1, &person2, &expenses, state.statutory());
    let duration_us = start_time.elapsed().as_micros() as u64;

    for warning in &result.warnings {
        warn!(
            correlation_id = %correlation_id,
            code = %warning.code,
            "{}",
            warning.message
        );
    }
    info!(
        correlation_id = %correlation_id,
        expenses_count = expenses.len(),
        household_remaining = %result.apportionment.household.household_remaining,
        duration_us,
        "Household calculated"
    );

    let symbol = state.currency_symbol();
    let response = HouseholdResponse {
        calculation_id: correlation_id,
        timestamp: Utc::now(),
        engine_version: env!("CARGO_PKG_VERSION").to_string(),
        person1: earner_report(result.person1, symbol, duration_us),
        person2: earner_report(result.person2, symbol, duration_us),
        apportionment: result.apportionment,
        warnings: result.warnings,
    };

    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        Json(response),
    )
        .into_response()
}

fn earner_report(calculation: PayCalculation, symbol: &str, duration_us: u64) -> EarnerReport {
    EarnerReport {
        display: financials_display(&calculation.financials, symbol),
        financials: calculation.financials,
        audit_trace: AuditTrace {
            steps: calculation.audit_steps,
            warnings: Vec::new(),
            duration_us,
        },
    }
}

fn rejection_response(correlation_id: Uuid, rejection: JsonRejection) -> Response {
    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            if body_text.contains("missing field") || body_text.contains("unknown variant") {
                ApiError::validation_error(body_text)
            } else {
                ApiError::malformed_json(body_text)
            }
        }
        JsonRejection::JsonSyntaxError(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "JSON syntax error"
            );
            ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
        }
        JsonRejection::MissingJsonContentType(_) => {
            ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
        }
        _ => ApiError::malformed_json("Failed to parse request body"),
    };

    ApiErrorResponse::bad_request(error).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConfigLoader;
    use axum::body::Body;
    use axum::http::Request;
    use rust_decimal::Decimal;
    use tower::ServiceExt;

    fn create_test_state() -> AppState {
        let config = ConfigLoader::load("./config/ph2024").expect("Failed to load config");
        AppState::new(config)
    }

    async fn post_json(uri: &str, body: &str) -> Response {
        create_router(create_test_state())
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri(uri)
                    .header("Content-Type", "application/json")
                    .body(Body::from(body.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap()
    }

    async fn body_json<T: serde::de::DeserializeOwned>(response: Response) -> T {
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&body).unwrap()
    }

    #[tokio::test]
    async fn test_calculate_returns_payslip() {
        let response = post_json(
            "/calculate",
            r#"{"gross_income": 30000, "apply_gov_benefits": true}"#,
        )
        .await;

        assert_eq!(response.status(), StatusCode::OK);
        let content_type = response.headers().get("content-type").unwrap();
        assert_eq!(content_type, "application/json");

        let result: PayslipResponse = body_json(response).await;
        assert_eq!(result.financials.net_income, Decimal::from(26_670));
        assert_eq!(result.display["net_income"], "₱26,670.00");
        assert_eq!(result.audit_trace.steps.len(), 7);
        assert_eq!(result.engine_version, env!("CARGO_PKG_VERSION"));
    }

    #[tokio::test]
    async fn test_calculate_huge_income_returns_200() {
        let body = r#"{
            "gross_income": "70000000000000000000000000000",
            "taxable_allowance": "70000000000000000000000000000",
            "apply_gov_benefits": true
        }"#;

        let response = post_json("/calculate", body).await;

        assert_eq!(response.status(), StatusCode::OK);
        let result: PayslipResponse = body_json(response).await;
        assert_eq!(result.financials.total_gross, Decimal::MAX);
        assert!(result.display["total_gross"].starts_with("₱79,228,162,514,264,337,593,543,950,335"));
    }

    #[tokio::test]
    async fn test_household_huge_amounts_return_200() {
        let body = r#"{
            "person1": {"gross_income": "70000000000000000000000000000"},
            "person2": {"gross_income": "70000000000000000000000000000"},
            "expenses": [
                {"id": "a", "amount": "70000000000000000000000000000", "assigned_to": "person1"},
                {"id": "b", "amount": "70000000000000000000000000000", "assigned_to": "person1"},
                {"id": "c", "amount": "70000000000000000000000000000", "assigned_to": "equitable"}
            ]
        }"#;

        let response = post_json("/household", body).await;

        assert_eq!(response.status(), StatusCode::OK);
        let result: HouseholdResponse = body_json(response).await;
        assert_eq!(result.apportionment.household.household_net_income, Decimal::MAX);
        assert_eq!(result.apportionment.household.total_expenses, Decimal::MAX);
    }

    #[tokio::test]
    async fn test_calculate_malformed_json_returns_400() {
        let response = post_json("/calculate", "{invalid json").await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let error: ApiError = body_json(response).await;
        assert_eq!(error.code, "MALFORMED_JSON");
    }

    #[tokio::test]
    async fn test_calculate_unknown_income_type_returns_400() {
        let response = post_json("/calculate", r#"{"income_type": "weekly"}"#).await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let error: ApiError = body_json(response).await;
        assert_eq!(error.code, "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_household_returns_apportionment() {
        let body = r#"{
            "person1": {"gross_income": "30000", "apply_gov_benefits": true},
            "person2": {"gross_income": "30000", "apply_gov_benefits": true},
            "expenses": [
                {"id": "rent", "name": "Rent", "amount": "20000", "assigned_to": "equal"}
            ]
        }"#;

        let response = post_json("/household", body).await;

        assert_eq!(response.status(), StatusCode::OK);
        let result: HouseholdResponse = body_json(response).await;
        assert_eq!(result.apportionment.person1.shared_contribution, Decimal::from(10_000));
        assert_eq!(result.apportionment.person2.remaining, Decimal::from(16_670));
        assert_eq!(result.person1.display["net_income"], "₱26,670.00");
        assert!(result.warnings.is_empty());
    }

    #[tokio::test]
    async fn test_household_missing_expense_id_returns_400() {
        let body = r#"{"expenses": [{"name": "Rent", "amount": 1, "assigned_to": "equal"}]}"#;

        let response = post_json("/household", body).await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let error: ApiError = body_json(response).await;
        assert_eq!(error.code, "VALIDATION_ERROR");
        assert!(error.message.contains("missing field"));
    }
}
