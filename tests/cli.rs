use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

const CONTRACTORS: &str = r#"[
    {"id": "550e8400-e29b-41d4-a716-446655440001", "code": "CTR-001", "name": "Constructora Andes",
     "rut": "76.086.428-5", "personType": "empresa", "status": "Activo", "specialty": "Obra gruesa",
     "createdAt": "2024-03-01T10:00:00Z"},
    {"id": "550e8400-e29b-41d4-a716-446655440002", "code": "CTR-002", "name": "Juan Pérez",
     "rut": "12.345.678-5", "personType": "natural", "status": "Inactivo", "specialty": "Electricidad",
     "createdAt": "2024-03-02T10:00:00Z"},
    {"id": "550e8400-e29b-41d4-a716-446655440003", "code": "CTR-003", "name": "Ñandú Montajes",
     "rut": "77.111.222-3", "personType": "empresa", "status": "Activo", "specialty": "Estructuras",
     "createdAt": "2024-03-03T10:00:00Z"}
]"#;

const QUOTE: &str = r#"[
    {"kind": "section", "description": "Obra gruesa"},
    {"description": "Excavación", "unitValue": 1000, "quantity": 1, "utilityPercent": 10, "taxPercent": 19}
]"#;

fn data_dir() -> TempDir {
    let temp_dir = TempDir::new().unwrap();
    let data = temp_dir.path().join("data");
    fs::create_dir_all(&data).unwrap();
    fs::write(data.join("contractors.json"), CONTRACTORS).unwrap();
    temp_dir
}

fn quotebook(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("quotebook").unwrap();
    cmd.env_remove("QUOTEBOOK_DATA_DIR").arg("--data-dir").arg(dir.path());
    cmd
}

#[test]
fn test_contractors_filtered_by_type() {
    let dir = data_dir();
    quotebook(&dir)
        .args(["contractors", "--type", "empresa", "--status", "activo"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Constructora Andes"))
        .stdout(predicate::str::contains("Ñandú Montajes"))
        .stdout(predicate::str::contains("Juan Pérez").not())
        .stdout(predicate::str::contains("(filters active)"));
}

#[test]
fn test_contractors_json_sorted_desc() {
    let dir = data_dir();
    let output = quotebook(&dir)
        .args(["contractors", "--sort", "name", "--desc", "--format", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["count"], 3);
    assert_eq!(value["items"][0]["name"], "Ñandú Montajes");
    assert_eq!(value["items"][2]["name"], "Constructora Andes");
    assert_eq!(value["hasActiveFilters"], false);
}

#[test]
fn test_missing_data_files_list_nothing() {
    let dir = TempDir::new().unwrap();
    quotebook(&dir)
        .arg("providers")
        .assert()
        .success()
        .stdout(predicate::str::contains("No providers found."));
}

#[test]
fn test_unknown_sort_field_fails() {
    let dir = data_dir();
    quotebook(&dir)
        .args(["contractors", "--sort", "altura"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("altura"));
}

#[test]
fn test_quote() {
    let dir = data_dir();
    let file = dir.path().join("quote.json");
    fs::write(&file, QUOTE).unwrap();

    quotebook(&dir)
        .arg("quote")
        .arg(&file)
        .assert()
        .success()
        .stdout(predicate::str::contains("OBRA GRUESA"))
        .stdout(predicate::str::contains("1309"))
        .stdout(predicate::str::contains("Header summary"));
}

#[test]
fn test_rut() {
    let dir = TempDir::new().unwrap();
    quotebook(&dir)
        .args(["rut", "76086428-5"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Person type: empresa"));

    quotebook(&dir).args(["rut", "76086428-1"]).assert().failure();
}

#[test]
fn test_config_uses_data_dir_and_settings() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("config.json"), r#"{"default_tax_percent": 10}"#).unwrap();

    quotebook(&dir)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("Default tax:     10%"))
        .stdout(predicate::str::contains("Page size:       50"));
}
