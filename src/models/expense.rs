//! Household expense model.
//!
//! Each [`Expense`] carries an [`Assignment`] that decides how it is split
//! between the two earners. On the wire the assignment is one of the strings
//! `"equal"`, `"equitable"`, `"person1"` or `"person2"`.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One of the two earners in a household.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Person {
    /// The first earner.
    First,
    /// The second earner.
    Second,
}

/// How an expense is split between the two earners.
///
/// # Example
///
/// ```
/// use payshare_engine::models::{Assignment, Person};
///
/// let assignment: Assignment = serde_json::from_str("\"person2\"").unwrap();
/// assert_eq!(assignment, Assignment::Fixed(Person::Second));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "AssignmentTag", into = "AssignmentTag")]
pub enum Assignment {
    /// Split evenly, half to each earner.
    Equal,
    /// Split in proportion to each earner's share of household net income.
    Equitable,
    /// Paid in full by one earner.
    Fixed(Person),
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
enum AssignmentTag {
    Equal,
    Equitable,
    Person1,
    Person2,
}

impl From<AssignmentTag> for Assignment {
    fn from(tag: AssignmentTag) -> Self {
        match tag {
            AssignmentTag::Equal => Assignment::Equal,
            AssignmentTag::Equitable => Assignment::Equitable,
            AssignmentTag::Person1 => Assignment::Fixed(Person::First),
            AssignmentTag::Person2 => Assignment::Fixed(Person::Second),
        }
    }
}

impl From<Assignment> for AssignmentTag {
    fn from(assignment: Assignment) -> Self {
        match assignment {
            Assignment::Equal => AssignmentTag::Equal,
            Assignment::Equitable => AssignmentTag::Equitable,
            Assignment::Fixed(Person::First) => AssignmentTag::Person1,
            Assignment::Fixed(Person::Second) => AssignmentTag::Person2,
        }
    }
}

/// A single household expense.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Expense {
    /// Unique identifier for the expense.
    pub id: String,
    /// Display name (e.g., "Rent").
    pub name: String,
    /// Monthly amount.
    #[serde(default)]
    pub amount: Decimal,
    /// Split policy.
    pub assigned_to: Assignment,
}

impl Expense {
    /// Creates a new expense.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        amount: Decimal,
        assigned_to: Assignment,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            amount,
            assigned_to,
        }
    }
}
