//! Read-only catalog access.

use crate::schema::CatalogFile;
use crate::validate::validate_catalog;
use crate::{CatalogError, CatalogResult};
use esp_components::PumpCoefficientSet;
use esp_electrical::{CableLookup, CableSpecs, MotorSpecs};
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EquipmentKind {
    Pump,
    Motor,
    Cable,
}

impl fmt::Display for EquipmentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            EquipmentKind::Pump => "Pump",
            EquipmentKind::Motor => "Motor",
            EquipmentKind::Cable => "Cable",
        };
        f.write_str(s)
    }
}

/// Injected equipment repository. Implementations are shared read-only.
pub trait EquipmentCatalog: Send + Sync {
    fn pump_by_id(&self, id: &str) -> Option<&PumpCoefficientSet>;
    fn motor_by_id(&self, id: &str) -> Option<&MotorSpecs>;
    fn cable_by_id(&self, id: &str) -> Option<&CableSpecs>;

    fn require_pump(&self, id: &str) -> CatalogResult<&PumpCoefficientSet> {
        self.pump_by_id(id).ok_or_else(|| CatalogError::NotFound {
            kind: EquipmentKind::Pump,
            id: id.to_string(),
        })
    }

    fn require_motor(&self, id: &str) -> CatalogResult<&MotorSpecs> {
        self.motor_by_id(id).ok_or_else(|| CatalogError::NotFound {
            kind: EquipmentKind::Motor,
            id: id.to_string(),
        })
    }
}

impl CableLookup for dyn EquipmentCatalog + '_ {
    fn cable(&self, id: &str) -> Option<&CableSpecs> {
        self.cable_by_id(id)
    }
}

/// Catalog held in memory, keyed by id.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCatalog {
    pumps: BTreeMap<String, PumpCoefficientSet>,
    motors: BTreeMap<String, MotorSpecs>,
    cables: BTreeMap<String, CableSpecs>,
}

impl InMemoryCatalog {
    /// Validate and index a catalog file.
    pub fn from_file(file: CatalogFile) -> CatalogResult<Self> {
        validate_catalog(&file)?;
        Ok(Self {
            pumps: file.pumps.into_iter().map(|p| (p.id.clone(), p)).collect(),
            motors: file.motors.into_iter().map(|m| (m.id.clone(), m)).collect(),
            cables: file.cables.into_iter().map(|c| (c.id.clone(), c)).collect(),
        })
    }

    pub fn pumps(&self) -> impl Iterator<Item = &PumpCoefficientSet> {
        self.pumps.values()
    }

    pub fn motors(&self) -> impl Iterator<Item = &MotorSpecs> {
        self.motors.values()
    }

    pub fn cables(&self) -> impl Iterator<Item = &CableSpecs> {
        self.cables.values()
    }

    pub fn pump_count(&self) -> usize {
        self.pumps.len()
    }

    pub fn motor_count(&self) -> usize {
        self.motors.len()
    }

    pub fn cable_count(&self) -> usize {
        self.cables.len()
    }

    /// Back to the file form, ordered by id.
    pub fn to_file(&self) -> CatalogFile {
        CatalogFile {
            version: crate::schema::CATALOG_VERSION,
            pumps: self.pumps.values().cloned().collect(),
            motors: self.motors.values().cloned().collect(),
            cables: self.cables.values().cloned().collect(),
        }
    }
}

impl EquipmentCatalog for InMemoryCatalog {
    fn pump_by_id(&self, id: &str) -> Option<&PumpCoefficientSet> {
        self.pumps.get(id)
    }

    fn motor_by_id(&self, id: &str) -> Option<&MotorSpecs> {
        self.motors.get(id)
    }

    fn cable_by_id(&self, id: &str) -> Option<&CableSpecs> {
        self.cables.get(id)
    }
}

impl CableLookup for InMemoryCatalog {
    fn cable(&self, id: &str) -> Option<&CableSpecs> {
        self.cables.get(id)
    }
}
