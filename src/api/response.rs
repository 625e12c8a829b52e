//! Response types for the PayShare engine API.
//!
//! This module defines the success bodies for both endpoints and the error
//! response structures used by the HTTP layer.

use std::collections::BTreeMap;

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::{
    ApportionmentResult, AuditTrace, AuditWarning, PersonFinancials, format_currency,
};

/// One earner's computed figures, display strings and audit trail.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EarnerReport {
    /// The computed financial breakdown.
    pub financials: PersonFinancials,
    /// Currency-formatted copies of the main figures.
    pub display: BTreeMap<String, String>,
    /// The rule-by-rule audit trail.
    pub audit_trace: AuditTrace,
}

/// Response body for `POST /calculate`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PayslipResponse {
    /// Unique identifier for this calculation.
    pub calculation_id: Uuid,
    /// When the calculation was performed.
    pub timestamp: DateTime<Utc>,
    /// Version of the engine that produced the result.
    pub engine_version: String,
    /// The computed financial breakdown.
    pub financials: PersonFinancials,
    /// Currency-formatted copies of the main figures.
    pub display: BTreeMap<String, String>,
    /// The rule-by-rule audit trail.
    pub audit_trace: AuditTrace,
}

/// Response body for `POST /household`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HouseholdResponse {
    /// Unique identifier for this calculation.
    pub calculation_id: Uuid,
    /// When the calculation was performed.
    pub timestamp: DateTime<Utc>,
    /// Version of the engine that produced the result.
    pub engine_version: String,
    /// The first earner's report.
    pub person1: EarnerReport,
    /// The second earner's report.
    pub person2: EarnerReport,
    /// How the expenses were split.
    pub apportionment: ApportionmentResult,
    /// Deficits and unallocated expenses.
    #[serde(default)]
    pub warnings: Vec<AuditWarning>,
}

/// Formats the headline figures of a payslip for display.
pub fn financials_display(financials: &PersonFinancials, symbol: &str) -> BTreeMap<String, String> {
    let fields: [(&str, Decimal); 12] = [
        ("monthly_gross", financials.monthly_gross),
        ("night_diff_pay", financials.night_diff_pay),
        ("total_gross", financials.total_gross),
        ("sss", financials.sss),
        ("philhealth", financials.philhealth),
        ("pagibig", financials.pagibig),
        ("total_contributions", financials.total_contributions),
        ("taxable_income", financials.taxable_income),
        ("annual_taxable_income", financials.annual_taxable_income),
        ("withholding_tax", financials.withholding_tax),
        ("total_deductions", financials.total_deductions),
        ("net_income", financials.net_income),
    ];

    fields
        .into_iter()
        .map(|(name, amount)| (name.to_string(), format_currency(amount, symbol)))
        .collect()
}

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
        }
    }

    /// Creates a validation error response.
    pub fn validation_error(message: impl Into<String>) -> Self {
        Self::new("VALIDATION_ERROR", message)
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }
}

/// API error with HTTP status code.
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl ApiErrorResponse {
    /// Wraps an error as `400 Bad Request`.
    pub fn bad_request(error: ApiError) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            error,
        }
    }
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_api_error_serialization() {
        let error = ApiError::new("TEST_ERROR", "Test message");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"code\":\"TEST_ERROR\""));
        assert!(json.contains("\"message\":\"Test message\""));
    }

    #[test]
    fn test_bad_request_status() {
        let response = ApiErrorResponse::bad_request(ApiError::malformed_json("bad"));
        assert_eq!(response.status, StatusCode::BAD_REQUEST);
        assert_eq!(response.error.code, "MALFORMED_JSON");
    }

    #[test]
    fn test_financials_display_formats_currency() {
        let financials = PersonFinancials {
            net_income: dec("26670"),
            sss: dec("1350"),
            withholding_tax: dec("1030.004"),
            ..PersonFinancials::default()
        };

        let display = financials_display(&financials, "₱");

        assert_eq!(display["net_income"], "₱26,670.00");
        assert_eq!(display["sss"], "₱1,350.00");
        assert_eq!(display["withholding_tax"], "₱1,030.00");
        assert_eq!(display["night_diff_pay"], "₱0.00");
        assert_eq!(display.len(), 12);
    }
}
