//! Expense apportionment between two earners.
//!
//! Each expense is dispatched on its [`Assignment`]:
//! - `Fixed(person)`: the full amount is that earner's individual expense
//! - `Equal`: half to each earner's shared contribution
//! - `Equitable`: split by each earner's share of household net income
//!
//! When household net income is zero or negative both income shares are
//! zero, so equitable expenses are assigned to nobody.

use rust_decimal::Decimal;

use crate::models::{
    ApportionmentResult, Assignment, EarnerShare, Expense, HouseholdSummary, Person,
};

/// Returns each earner's fraction of household net income.
///
/// Both weights are zero when the household's combined net income is not
/// positive.
///
/// # Examples
///
/// ```
/// use payshare_engine::calculation::income_weights;
/// use rust_decimal::Decimal;
///
/// let (w1, w2) = income_weights(Decimal::from(30_000), Decimal::from(10_000));
/// assert_eq!(w1, Decimal::new(75, 2));
/// assert_eq!(w2, Decimal::new(25, 2));
///
/// let (w1, w2) = income_weights(Decimal::ZERO, Decimal::ZERO);
/// assert_eq!((w1, w2), (Decimal::ZERO, Decimal::ZERO));
/// ```
pub fn income_weights(net1: Decimal, net2: Decimal) -> (Decimal, Decimal) {
    let household_net = net1.saturating_add(net2);
    if household_net <= Decimal::ZERO {
        return (Decimal::ZERO, Decimal::ZERO);
    }
    (net1 / household_net, net2 / household_net)
}

#[derive(Default)]
struct Tally {
    individual: Decimal,
    shared: Decimal,
}

impl Tally {
    fn into_share(self, net_income: Decimal, income_share: Decimal) -> EarnerShare {
        let total_responsibility = self.individual.saturating_add(self.shared);
        EarnerShare {
            net_income,
            income_share,
            individual_expenses: self.individual,
            shared_contribution: self.shared,
            total_responsibility,
            remaining: net_income.saturating_sub(total_responsibility),
        }
    }
}

fn total_amount(expenses: &[Expense]) -> Decimal {
    expenses
        .iter()
        .fold(Decimal::ZERO, |total, e| total.saturating_add(e.amount))
}

/// Splits an expense list between two earners.
///
/// The expense list is only read. The result does not depend on the order of
/// the expenses.
///
/// # Examples
///
/// ```
/// use payshare_engine::calculation::apportion;
/// use payshare_engine::models::{Assignment, Expense, Person};
/// use rust_decimal::Decimal;
///
/// let expenses = vec![
///     Expense::new("rent", "Rent", Decimal::from(400), Assignment::Equitable),
///     Expense::new("gym", "Gym", Decimal::from(50), Assignment::Fixed(Person::Second)),
/// ];
///
/// let result = apportion(&expenses, Decimal::from(30_000), Decimal::from(10_000));
/// assert_eq!(result.person1.shared_contribution, Decimal::from(300));
/// assert_eq!(result.person2.shared_contribution, Decimal::from(100));
/// assert_eq!(result.person2.individual_expenses, Decimal::from(50));
/// ```
pub fn apportion(expenses: &[Expense], net1: Decimal, net2: Decimal) -> ApportionmentResult {
    let (w1, w2) = income_weights(net1, net2);
    let mut first = Tally::default();
    let mut second = Tally::default();

    for expense in expenses {
        let amount = expense.amount;
        match expense.assigned_to {
            Assignment::Fixed(Person::First) => {
                first.individual = first.individual.saturating_add(amount);
            }
            Assignment::Fixed(Person::Second) => {
                second.individual = second.individual.saturating_add(amount);
            }
            Assignment::Equal => {
                let half = amount / Decimal::TWO;
                first.shared = first.shared.saturating_add(half);
                second.shared = second.shared.saturating_add(half);
            }
            Assignment::Equitable => {
                first.shared = first.shared.saturating_add(amount.saturating_mul(w1));
                second.shared = second.shared.saturating_add(amount.saturating_mul(w2));
            }
        }
    }

    let household_net_income = net1.saturating_add(net2);
    let total_expenses = total_amount(expenses);

    ApportionmentResult {
        person1: first.into_share(net1, w1),
        person2: second.into_share(net2, w2),
        household: HouseholdSummary {
            household_net_income,
            total_expenses,
            household_remaining: household_net_income.saturating_sub(total_expenses),
        },
    }
}
