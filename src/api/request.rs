//! Request types for the PayShare engine API.
//!
//! The wire types here are the presentation layer's view of the input
//! records. Monetary fields are coerced rather than rejected: numbers and
//! numeric strings are accepted, anything else (including a missing field or
//! `null`) becomes zero, and negative amounts are raised to zero.

use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::models::{Assignment, Expense, IncomeType, PersonInput};

/// Request body for the `/calculate` endpoint, and each earner of a
/// `/household` request.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PersonRequest {
    /// Declared gross income.
    #[serde(deserialize_with = "coerce_amount")]
    pub gross_income: Decimal,
    /// `monthly` or `yearly`.
    pub income_type: IncomeType,
    /// Monthly taxable allowance.
    #[serde(deserialize_with = "coerce_amount")]
    pub taxable_allowance: Decimal,
    /// Monthly non-taxable allowance.
    #[serde(deserialize_with = "coerce_amount")]
    pub non_taxable_allowance: Decimal,
    /// Master switch for contributions and withholding tax.
    pub apply_gov_benefits: bool,
    /// Whether night differential applies.
    pub apply_night_diff: bool,
    /// Night-shift hours per working day.
    #[serde(deserialize_with = "coerce_amount")]
    pub night_diff_hours_per_day: Decimal,
    /// Night differential markup in percent.
    #[serde(deserialize_with = "coerce_amount")]
    pub night_diff_rate: Decimal,
}

impl From<PersonRequest> for PersonInput {
    fn from(req: PersonRequest) -> Self {
        PersonInput {
            gross_income: req.gross_income,
            income_type: req.income_type,
            taxable_allowance: req.taxable_allowance,
            non_taxable_allowance: req.non_taxable_allowance,
            apply_gov_benefits: req.apply_gov_benefits,
            apply_night_diff: req.apply_night_diff,
            night_diff_hours_per_day: req.night_diff_hours_per_day,
            night_diff_rate: req.night_diff_rate,
        }
    }
}

/// A household expense as submitted by the client.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExpenseRequest {
    /// Unique identifier for the expense.
    pub id: String,
    /// Display name.
    #[serde(default)]
    pub name: String,
    /// Monthly amount.
    #[serde(default, deserialize_with = "coerce_amount")]
    pub amount: Decimal,
    /// `equal`, `equitable`, `person1` or `person2`.
    pub assigned_to: Assignment,
}

impl From<ExpenseRequest> for Expense {
    fn from(req: ExpenseRequest) -> Self {
        Expense::new(req.id, req.name, req.amount, req.assigned_to)
    }
}

/// Request body for the `/household` endpoint.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct HouseholdRequest {
    /// The first earner.
    pub person1: PersonRequest,
    /// The second earner.
    pub person2: PersonRequest,
    /// The shared expense list.
    pub expenses: Vec<ExpenseRequest>,
}

fn coerce_amount<'de, D>(deserializer: D) -> Result<Decimal, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(coerce_value(&value))
}

fn coerce_value(value: &Value) -> Decimal {
    let parsed = match value {
        Value::Number(n) => parse_decimal(&n.to_string()),
        Value::String(s) => parse_decimal(&s.trim().replace(',', "")),
        _ => None,
    };
    parsed.unwrap_or(Decimal::ZERO).max(Decimal::ZERO)
}

fn parse_decimal(text: &str) -> Option<Decimal> {
    Decimal::from_str(text)
        .or_else(|_| Decimal::from_scientific(text))
        .ok()
}
