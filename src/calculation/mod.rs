//! Calculation logic for the PayShare engine.
//!
//! This module contains the statutory pay rules that turn a gross salary into
//! take-home pay (income normalisation, night differential, SSS, PhilHealth,
//! Pag-IBIG and withholding tax), the pay pipeline that chains them, and the
//! apportionment of household expenses between two earners.

mod apportionment;
mod health_insurance;
mod household;
mod housing_fund;
mod monthly_gross;
mod night_differential;
mod pay_calculator;
mod social_insurance;
mod withholding_tax;

pub use apportionment::{apportion, income_weights};
pub use health_insurance::{HealthInsuranceResult, calculate_health_insurance};
pub use household::{HouseholdResult, calculate_household};
pub use housing_fund::{HousingFundResult, calculate_housing_fund};
pub use monthly_gross::{MONTHS_PER_YEAR, MonthlyGrossResult, normalize_monthly_gross};
pub use night_differential::{
    NIGHT_DIFFERENTIAL_REF, NightDifferentialResult, calculate_night_differential,
};
pub use pay_calculator::{PayCalculation, compute, compute_with_audit};
pub use social_insurance::{SocialInsuranceResult, calculate_social_insurance};
pub use withholding_tax::{
    WithholdingTaxResult, annual_tax, calculate_withholding_tax, find_bracket,
};
