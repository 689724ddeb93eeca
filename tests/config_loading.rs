//! Config Loading Tests
//!
//! Load TOML files from disk through `DashboardConfig::load_from_file` and
//! check that validation catches broken files.

use std::io::Write;

use petrotech_demo::config::{ConfigError, DashboardConfig};
use petrotech_demo::navigation::Section;
use petrotech_demo::types::Formation;

fn write_config(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

#[test]
fn partial_file_keeps_defaults() {
    let file = write_config(
        r#"
[server]
addr = "127.0.0.1:9000"

[timing]
risk_analysis_ms = 500
"#,
    );
    let config = DashboardConfig::load_from_file(file.path()).unwrap();

    assert_eq!(config.server.addr, "127.0.0.1:9000");
    assert_eq!(config.timing.risk_analysis_ms, 500);
    assert_eq!(config.timing.well_log_analysis_ms, 2000);
    assert_eq!(config.bands.len(), 3);
    assert!(config.schema.enabled);
}

#[test]
fn custom_bands_replace_defaults() {
    let file = write_config(
        r#"
[[bands]]
formation = "Shale"
depth_start_ft = 1000.0
depth_end_ft = 1100.0
gamma = { min = 90.0, max = 120.0 }
resistivity = { min = 1.0, max = 2.0 }
porosity = { min = 4.0, max = 8.0 }
"#,
    );
    let config = DashboardConfig::load_from_file(file.path()).unwrap();

    assert_eq!(config.bands.len(), 1);
    assert_eq!(config.bands[0].formation, Formation::Shale);
    assert_eq!(config.bands[0].sample_count(), 10);
}

#[test]
fn markup_sections_round_trip_through_file() {
    let mut config = DashboardConfig::default();
    config.markup.sections = vec![Section::Dashboard, Section::GeoSteering];
    config.simulation.seed = Some(99);
    let file = write_config(&config.to_toml().unwrap());

    let loaded = DashboardConfig::load_from_file(file.path()).unwrap();
    assert_eq!(loaded.markup.sections, vec![Section::Dashboard, Section::GeoSteering]);
    assert_eq!(loaded.simulation.seed, Some(99));
}

#[test]
fn invalid_values_are_rejected() {
    let file = write_config(
        r#"
[timing]
metrics_interval_secs = 0

[markup]
sections = ["dashboard"]
active_section = "well-logs"
"#,
    );
    let err = DashboardConfig::load_from_file(file.path()).unwrap_err();

    match err {
        ConfigError::Validation(errors) => {
            assert_eq!(errors.len(), 2, "{errors:?}");
            assert!(errors.iter().any(|e| e.contains("metrics_interval_secs")));
            assert!(errors.iter().any(|e| e.contains("active_section")));
        }
        other => panic!("expected validation error, got {other}"),
    }
}

#[test]
fn malformed_toml_is_a_parse_error() {
    let file = write_config("[server\naddr = ");
    let err = DashboardConfig::load_from_file(file.path()).unwrap_err();
    assert!(matches!(err, ConfigError::Parse { .. }));
}

#[test]
fn missing_file_is_an_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = DashboardConfig::load_from_file(&dir.path().join("absent.toml")).unwrap_err();
    assert!(matches!(err, ConfigError::Io { .. }));
}
