//! Catalog file schema.

use esp_components::PumpCoefficientSet;
use esp_electrical::{CableSpecs, MotorSpecs};
use serde::{Deserialize, Serialize};

pub const CATALOG_VERSION: u32 = 1;

fn default_version() -> u32 {
    CATALOG_VERSION
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct CatalogFile {
    #[serde(default = "default_version")]
    pub version: u32,
    #[serde(default)]
    pub pumps: Vec<PumpCoefficientSet>,
    #[serde(default)]
    pub motors: Vec<MotorSpecs>,
    #[serde(default)]
    pub cables: Vec<CableSpecs>,
}
