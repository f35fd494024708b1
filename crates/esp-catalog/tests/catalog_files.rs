//! Loading catalogs from disk.

use esp_catalog::{
    CatalogError, CatalogFile, EquipmentCatalog, ValidationError, load_path, save_json, save_yaml,
};
use std::io::Write;

const YAML: &str = r#"
version: 1
pumps:
  - id: P-400
    min_flow_m3d: 60
    max_flow_m3d: 220
    nominal_rpm: 3500
    head_coefficients: [12.0, -0.01, -0.0002]
    power_coefficients: [140.0, 0.9, -0.001]
motors:
  - id: M-150
    hp_nominal: 150
    voltage_nominal_v: 2300
    frequency_nominal_hz: 60
    efficiency: 86
    power_factor: 0.84
    motor_type: PM
cables:
  - id: RND-2
    resistance_ohm_per_km_20c: 0.56
    temp_coefficient_per_c: 0.00393
"#;

fn write_temp(suffix: &str, content: &str) -> tempfile::NamedTempFile {
    let mut f = tempfile::Builder::new().suffix(suffix).tempfile().unwrap();
    f.write_all(content.as_bytes()).unwrap();
    f
}

#[test]
fn loads_yaml_catalog() {
    let f = write_temp(".yaml", YAML);
    let cat = load_path(f.path()).unwrap();
    let pump = cat.pump_by_id("P-400").unwrap();
    assert_eq!(pump.head_coefficients.len(), 3);
    assert!(pump.efficiency_coefficients.is_empty());
    let motor = cat.motor_by_id("M-150").unwrap();
    assert_eq!(motor.motor_type, esp_electrical::MotorType::PermanentMagnet);
    assert!(motor.is_complete);
    assert!(cat.cable_by_id("RND-2").is_some());
}

#[test]
fn json_round_trip() {
    let f = write_temp(".yaml", YAML);
    let cat = load_path(f.path()).unwrap();
    let dir = tempfile::tempdir().unwrap();
    let json_path = dir.path().join("catalog.json");
    save_json(&json_path, &cat.to_file()).unwrap();
    let again = load_path(&json_path).unwrap();
    assert_eq!(cat.to_file(), again.to_file());

    let yaml_path = dir.path().join("catalog.yml");
    save_yaml(&yaml_path, &again.to_file()).unwrap();
    assert_eq!(load_path(&yaml_path).unwrap().to_file(), cat.to_file());
}

#[test]
fn duplicate_ids_rejected_on_load() {
    let doubled = r#"
cables:
  - { id: C, resistance_ohm_per_km_20c: 1.0, temp_coefficient_per_c: 0.004 }
  - { id: C, resistance_ohm_per_km_20c: 2.0, temp_coefficient_per_c: 0.004 }
"#;
    let f = write_temp(".yaml", doubled);
    assert!(matches!(
        load_path(f.path()),
        Err(CatalogError::Validation(ValidationError::DuplicateId { .. }))
    ));
}

#[test]
fn unknown_extension() {
    let f = write_temp(".csv", "id,r\n");
    assert!(matches!(
        load_path(f.path()),
        Err(CatalogError::UnsupportedFormat(_))
    ));
}

#[test]
fn invalid_pump_rejected_on_save() {
    let file: CatalogFile = serde_yaml::from_str(
        r#"
pumps:
  - { id: BAD, min_flow_m3d: 10, max_flow_m3d: 0, head_coefficients: [1.0], power_coefficients: [] }
"#,
    )
    .unwrap();
    let dir = tempfile::tempdir().unwrap();
    assert!(save_json(&dir.path().join("x.json"), &file).is_err());
}
