//! 설정 파일 로드/저장과 JSON 필드명 회귀 테스트.
use pci_projection::config::{load_or_default, Config, ConfigError, ReportFormat};
use pci_projection::{calculate_projections, ModelConstants, SurfaceInputs};

#[test]
fn missing_file_writes_defaults() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("config.toml");
    let cfg = load_or_default(&path).expect("defaults");
    assert_eq!(cfg, Config::default());
    assert!(path.exists());

    let again = load_or_default(&path).expect("reload");
    assert_eq!(again, cfg);
}

#[test]
fn partial_model_table_overrides_only_named_constants() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("config.toml");
    std::fs::write(
        &path,
        "[model]\nsafety_floor = 70.0\nasphalt_cost_per_mile = 20000.0\n\n[report]\nformat = \"json\"\n",
    )
    .expect("write");
    let cfg = load_or_default(&path).expect("load");
    assert_eq!(cfg.model.safety_floor, 70.0);
    assert_eq!(cfg.model.asphalt_cost_per_mile, 20_000.0);
    assert_eq!(
        cfg.model.concrete_decay_rate,
        ModelConstants::default().concrete_decay_rate
    );
    assert_eq!(cfg.report.format, ReportFormat::Json);
}

#[test]
fn invalid_constants_are_rejected() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[model]\nconcrete_decay_rate = -2.0\n").expect("write");
    let err = load_or_default(&path).expect_err("negative rate");
    assert!(matches!(err, ConfigError::Invalid(_)), "{err}");
}

#[test]
fn malformed_toml_is_a_parse_error() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[model\nsafety_floor = ").expect("write");
    assert!(matches!(load_or_default(&path), Err(ConfigError::Serde(_))));
}

#[test]
fn json_uses_documented_field_names() {
    let inputs: SurfaceInputs = serde_json::from_str(
        r#"{"asphaltMiles": 12.5, "concreteMiles": 3.0, "asphaltPCI": 71.0, "concretePCI": 88.0, "annualBudget": 40000.0}"#,
    )
    .expect("inputs json");
    assert_eq!(inputs.asphalt_pci, 71.0);
    assert_eq!(inputs.concrete_miles, 3.0);

    let res = calculate_projections(&inputs).expect("valid");
    let value = serde_json::to_value(&res).expect("serialize");
    assert!(value.get("suggestedBudget").is_some());
    let first = &value["projections"][0];
    assert_eq!(first["year"], 0);
    assert_eq!(first["asphaltNoMaintenance"], 71.0);
    assert_eq!(first["concreteWithMaintenance"], 88.0);
    assert_eq!(value["projections"].as_array().map(Vec::len), Some(6));
}
