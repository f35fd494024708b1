//! esp-catalog: read-only equipment catalog (pumps, motors, cables).
//!
//! Catalog files are YAML or JSON with normalized field names. Loading
//! validates ids and numeric sanity before the catalog is handed out.

pub mod repository;
pub mod schema;
pub mod validate;

pub use repository::{EquipmentCatalog, EquipmentKind, InMemoryCatalog};
pub use schema::{CATALOG_VERSION, CatalogFile};
pub use validate::{ValidationError, validate_catalog};

use std::path::Path;

pub type CatalogResult<T> = Result<T, CatalogError>;

#[derive(thiserror::Error, Debug)]
pub enum CatalogError {
    #[error("{kind} '{id}' not found in catalog")]
    NotFound { kind: EquipmentKind, id: String },

    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Unsupported catalog file extension: {0}")]
    UnsupportedFormat(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub fn load_yaml(path: &Path) -> CatalogResult<InMemoryCatalog> {
    let content = std::fs::read_to_string(path)?;
    let file: CatalogFile = serde_yaml::from_str(&content)?;
    InMemoryCatalog::from_file(file)
}

pub fn load_json(path: &Path) -> CatalogResult<InMemoryCatalog> {
    let content = std::fs::read_to_string(path)?;
    let file: CatalogFile = serde_json::from_str(&content)?;
    InMemoryCatalog::from_file(file)
}

/// Load by extension: `.yaml`/`.yml` or `.json`.
pub fn load_path(path: &Path) -> CatalogResult<InMemoryCatalog> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase)
        .unwrap_or_default();
    let catalog = match ext.as_str() {
        "yaml" | "yml" => load_yaml(path)?,
        "json" => load_json(path)?,
        other => return Err(CatalogError::UnsupportedFormat(other.to_string())),
    };
    tracing::info!(
        path = %path.display(),
        pumps = catalog.pump_count(),
        motors = catalog.motor_count(),
        cables = catalog.cable_count(),
        "catalog loaded"
    );
    Ok(catalog)
}

pub fn save_yaml(path: &Path, file: &CatalogFile) -> CatalogResult<()> {
    validate_catalog(file)?;
    let content = serde_yaml::to_string(file)?;
    std::fs::write(path, content)?;
    Ok(())
}

pub fn save_json(path: &Path, file: &CatalogFile) -> CatalogResult<()> {
    validate_catalog(file)?;
    let content = serde_json::to_string_pretty(file)?;
    std::fs::write(path, content)?;
    Ok(())
}
