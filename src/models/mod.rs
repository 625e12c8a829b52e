//! Core data models for the take-home pay engine.
//!
//! This module contains the input records supplied by callers, the derived
//! records the engine produces, and the audit trail types.

mod apportionment;
mod audit;
mod expense;
mod financials;
mod money;
mod person;

pub use apportionment::{ApportionmentResult, EarnerShare, HouseholdSummary};
pub use audit::{AuditStep, AuditTrace, AuditWarning};
pub use expense::{Assignment, Expense, Person};
pub use financials::PersonFinancials;
pub use money::format_currency;
pub use person::{IncomeType, PersonInput};
