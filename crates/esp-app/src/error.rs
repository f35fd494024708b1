//! Error types for the esp-app service layer.

use std::path::PathBuf;

/// Application error wrapping the backend crates. Domain-input errors abort a
/// request; equipment and electrical failures never reach this type, they are
/// reported as warnings instead.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Failed to read case file: {path}")]
    CaseFileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to write output file: {path}")]
    OutputWrite {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Unsupported case file extension: {0}")]
    UnsupportedFormat(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Inflow error: {0}")]
    Inflow(#[from] esp_inflow::InflowError),

    #[error("Fluid error: {0}")]
    Fluid(#[from] esp_fluids::FluidError),

    #[error("Component error: {0}")]
    Component(#[from] esp_components::ComponentError),

    #[error("Solver error: {0}")]
    Solver(#[from] esp_solver::SolverError),

    #[error("Catalog error: {0}")]
    Catalog(#[from] esp_catalog::CatalogError),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for esp-app operations.
pub type AppResult<T> = Result<T, AppError>;
