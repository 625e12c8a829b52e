//! Expense apportionment result models.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::Person;

/// One earner's side of an expense apportionment.
///
/// `remaining` may be negative; a deficit is reported, never clamped.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct EarnerShare {
    /// The earner's monthly net income.
    pub net_income: Decimal,
    /// The earner's fraction of household net income (0 when household net ≤ 0).
    pub income_share: Decimal,
    /// Expenses assigned wholly to this earner.
    pub individual_expenses: Decimal,
    /// This earner's portion of equal and equitable expenses.
    pub shared_contribution: Decimal,
    /// `individual_expenses + shared_contribution`.
    pub total_responsibility: Decimal,
    /// `net_income - total_responsibility`.
    pub remaining: Decimal,
}

/// Household-wide totals.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct HouseholdSummary {
    /// Combined net income of both earners.
    pub household_net_income: Decimal,
    /// Sum of all expense amounts.
    pub total_expenses: Decimal,
    /// `household_net_income - total_expenses`.
    pub household_remaining: Decimal,
}

/// The complete apportionment of an expense list between two earners.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ApportionmentResult {
    /// The first earner's share.
    pub person1: EarnerShare,
    /// The second earner's share.
    pub person2: EarnerShare,
    /// Household totals.
    pub household: HouseholdSummary,
}

impl ApportionmentResult {
    /// Returns the share for the given earner.
    pub fn share(&self, person: Person) -> &EarnerShare {
        match person {
            Person::First => &self.person1,
            Person::Second => &self.person2,
        }
    }

    /// Returns the combined responsibility of both earners.
    pub fn total_responsibility(&self) -> Decimal {
        self.person1
            .total_responsibility
            .saturating_add(self.person2.total_responsibility)
    }
}
