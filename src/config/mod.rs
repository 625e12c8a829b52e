//! Configuration loading and management for the take-home pay engine.
//!
//! This module provides the statutory schedule (contribution rates, caps,
//! floors, the work pattern and the annual tax table), loadable from YAML
//! files or taken from the built-in default.
//!
//! # Example
//!
//! ```no_run
//! use payshare_engine::config::ConfigLoader;
//!
//! let loader = ConfigLoader::load("./config/ph2024").unwrap();
//! println!("Loaded schedule: {}", loader.config().metadata().name);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{
    HealthInsuranceConfig, HousingFundConfig, ScheduleMetadata, SocialInsuranceConfig,
    StatutoryConfig, StatutoryFile, TaxBracket, TaxTable, WorkSchedule,
};
