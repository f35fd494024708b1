//! Application service layer for ESP sizing.
//!
//! Ties the modeling crates together for one well case: conditions
//! (inflow, demand, system head, pump curve, operating point, electrical
//! cascade), sensitivity scenarios, design checks and gas screening. Used by
//! the CLI; contains no numerical models of its own.

pub mod case;
pub mod error;
pub mod gas;
pub mod scenario;
pub mod service;
pub mod validation;

pub use case::{
    DEFAULT_FREQUENCY_HZ, DesignInputs, PumpSelection, WellCase, load_case, load_case_json,
    load_case_yaml,
};
pub use error::{AppError, AppResult};
pub use gas::{GasScreening, screen_gas};
pub use scenario::{ScenarioKey, ScenarioOverrides, ScenarioResult, ScenarioSet, run_scenarios};
pub use service::{
    Conditions, DesignElectrical, Hydraulics, compute_conditions, compute_hydraulics,
    electrical_for_design, pump_curve_for, selected_pump_curve,
};
pub use validation::{
    CheckResult, CheckStatus, OverallStatus, ValidationReport, torsional_stress_mpa,
    validate_design,
};
