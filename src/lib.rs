//! Take-Home Pay and Household Expense Engine
//!
//! This crate computes an earner's monthly take-home pay under Philippine
//! statutory payroll rules (SSS, PhilHealth, Pag-IBIG and the annual income
//! tax table) and apportions a shared household expense list between two
//! earners.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
pub mod telemetry;
