//! Dashboard Configuration - demo timings, markup surface and formation bands
//!
//! Every struct implements `Default` with the values of the reference demo,
//! so running without a config file reproduces the stock dashboard.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;
use tracing::{info, warn};

use super::defaults;
use crate::navigation::Section;
use crate::page::element_ids;
use crate::types::{Formation, FormationBand, MeasurementRange};

/// Environment variable naming an explicit config file.
pub const CONFIG_ENV_VAR: &str = "PETROTECH_CONFIG";

/// Config file looked up in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "dashboard.toml";

// ============================================================================
// Top-Level Config
// ============================================================================

/// Root configuration for a dashboard instance.
///
/// Load with `DashboardConfig::load()` which searches:
/// 1. `$PETROTECH_CONFIG` env var
/// 2. `./dashboard.toml`
/// 3. Built-in defaults
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardConfig {
    /// HTTP server configuration
    #[serde(default)]
    pub server: ServerConfig,

    /// Startup schema registration
    #[serde(default)]
    pub schema: SchemaConfig,

    /// Polling periods, action delays and toast lifetimes
    #[serde(default)]
    pub timing: TimingConfig,

    /// Random source
    #[serde(default)]
    pub simulation: SimulationConfig,

    /// Page surface: which sections and elements exist
    #[serde(default)]
    pub markup: MarkupConfig,

    /// Formation bands used by the well-log generator
    #[serde(default = "default_bands")]
    pub bands: Vec<FormationBand>,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            schema: SchemaConfig::default(),
            timing: TimingConfig::default(),
            simulation: SimulationConfig::default(),
            markup: MarkupConfig::default(),
            bands: default_bands(),
        }
    }
}

impl DashboardConfig {
    /// Load configuration using the standard search order:
    /// 1. `$PETROTECH_CONFIG` environment variable
    /// 2. `./dashboard.toml` in the current working directory
    /// 3. Built-in defaults
    pub fn load() -> Self {
        if let Ok(path) = std::env::var(CONFIG_ENV_VAR) {
            let p = PathBuf::from(&path);
            if p.exists() {
                match Self::load_from_file(&p) {
                    Ok(config) => {
                        info!(
                            path = %p.display(),
                            "Loaded dashboard config from {}", CONFIG_ENV_VAR
                        );
                        return config;
                    }
                    Err(e) => {
                        warn!(
                            path = %p.display(),
                            error = %e,
                            "Failed to load config from {}, falling back", CONFIG_ENV_VAR
                        );
                    }
                }
            } else {
                warn!(path = %path, "{} points to non-existent file, falling back", CONFIG_ENV_VAR);
            }
        }

        let local = Path::new(DEFAULT_CONFIG_FILE);
        if local.exists() {
            match Self::load_from_file(local) {
                Ok(config) => {
                    info!(path = DEFAULT_CONFIG_FILE, "Loaded dashboard config");
                    return config;
                }
                Err(e) => {
                    warn!(error = %e, "Failed to load {}, using defaults", DEFAULT_CONFIG_FILE);
                }
            }
        }

        info!("No dashboard config found, using built-in defaults");
        Self::default()
    }

    /// Load and validate a specific TOML file.
    pub fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Self = toml::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize to pretty TOML (e.g. to write a starter config).
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Check every section and report all problems at once.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut errors = Vec::new();

        if self.server.addr.trim().is_empty() {
            errors.push("server.addr must not be empty".to_string());
        }

        if self.schema.timeout_secs == 0 {
            errors.push("schema.timeout_secs must be > 0".to_string());
        }

        let t = &self.timing;
        for (name, value) in [
            ("timing.metrics_interval_secs", t.metrics_interval_secs),
            ("timing.well_log_interval_secs", t.well_log_interval_secs),
            ("timing.risk_interval_secs", t.risk_interval_secs),
        ] {
            if value == 0 {
                errors.push(format!("{name} must be > 0"));
            }
        }

        let m = &self.markup;
        if m.sections.is_empty() {
            errors.push("markup.sections must list at least one section".to_string());
        } else if !m.sections.contains(&m.active_section) {
            errors.push(format!(
                "markup.active_section '{}' is not listed in markup.sections",
                m.active_section
            ));
        }
        if m.gauge_width <= 0.0 || m.gauge_height <= 0.0 {
            errors.push("markup gauge dimensions must be > 0".to_string());
        }

        if self.bands.is_empty() {
            errors.push("at least one formation band is required".to_string());
        }
        for (i, band) in self.bands.iter().enumerate() {
            let name = format!("bands[{i}] ({})", band.formation);
            Self::check_band_depths(band, &name, &mut errors);
            Self::check_range(&band.gamma, &name, "gamma", &mut errors);
            Self::check_range(&band.resistivity, &name, "resistivity", &mut errors);
            Self::check_range(&band.porosity, &name, "porosity", &mut errors);
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(ConfigError::Validation(errors))
        }
    }

    fn check_band_depths(band: &FormationBand, name: &str, errors: &mut Vec<String>) {
        let (start, end, step) = (band.depth_start_ft, band.depth_end_ft, band.step_ft);
        if !start.is_finite() || !end.is_finite() {
            errors.push(format!("{name}: depths must be finite"));
            return;
        }
        if end <= start {
            errors.push(format!("{name}: depth_end_ft ({end}) must be > depth_start_ft ({start})"));
        }
        if !step.is_finite() || step <= 0.0 {
            errors.push(format!("{name}: step_ft must be finite and > 0"));
            return;
        }
        if end + step == end || start + step == start {
            errors.push(format!("{name}: step_ft ({step}) is below the depth resolution"));
        } else if band.sample_count() > defaults::MAX_SAMPLES_PER_BAND {
            errors.push(format!(
                "{name}: {} samples exceeds the limit of {}",
                band.sample_count(),
                defaults::MAX_SAMPLES_PER_BAND
            ));
        }
    }

    fn check_range(range: &MeasurementRange, band: &str, field: &str, errors: &mut Vec<String>) {
        if !range.min.is_finite() || !range.max.is_finite() {
            errors.push(format!("{band}: {field} range must be finite"));
        } else if range.max < range.min {
            errors.push(format!(
                "{band}: {field} max ({:.3}) must be >= min ({:.3})",
                range.max, range.min
            ));
        }
    }
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Config I/O error ({}): {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Config parse error ({}): {source}", path.display())]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
    #[error("Config serialization error: {0}")]
    Serialize(#[from] toml::ser::Error),
    #[error("Config validation failed: {}", .0.join("; "))]
    Validation(Vec<String>),
}

// ============================================================================
// Server
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_server_addr")]
    pub addr: String,
}

fn default_server_addr() -> String {
    defaults::SERVER_ADDR.to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            addr: default_server_addr(),
        }
    }
}

// ============================================================================
// Schema Registration
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SchemaConfig {
    /// Register table schemas at startup
    #[serde(default = "default_true")]
    pub enabled: bool,
    /// Collaborator base URL; `None` targets this server's own registry
    #[serde(default)]
    pub base_url: Option<String>,
    #[serde(default = "default_schema_timeout")]
    pub timeout_secs: u64,
}

fn default_true() -> bool {
    true
}
fn default_schema_timeout() -> u64 {
    defaults::SCHEMA_HTTP_TIMEOUT_SECS
}

impl Default for SchemaConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            base_url: None,
            timeout_secs: default_schema_timeout(),
        }
    }
}

impl SchemaConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

// ============================================================================
// Timing
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimingConfig {
    #[serde(default = "default_metrics_interval")]
    pub metrics_interval_secs: u64,
    #[serde(default = "default_well_log_interval")]
    pub well_log_interval_secs: u64,
    #[serde(default = "default_risk_interval")]
    pub risk_interval_secs: u64,
    #[serde(default = "default_well_log_analysis_ms")]
    pub well_log_analysis_ms: u64,
    #[serde(default = "default_risk_analysis_ms")]
    pub risk_analysis_ms: u64,
    #[serde(default = "default_route_optimization_ms")]
    pub route_optimization_ms: u64,
    #[serde(default = "default_notification_visible_ms")]
    pub notification_visible_ms: u64,
    #[serde(default = "default_notification_exit_ms")]
    pub notification_exit_ms: u64,
}

fn default_metrics_interval() -> u64 {
    defaults::METRICS_INTERVAL_SECS
}

fn default_well_log_interval() -> u64 {
    defaults::WELL_LOG_POLL_INTERVAL_SECS
}

fn default_risk_interval() -> u64 {
    defaults::RISK_POLL_INTERVAL_SECS
}

fn default_well_log_analysis_ms() -> u64 {
    defaults::WELL_LOG_ANALYSIS_DELAY_MS
}

fn default_risk_analysis_ms() -> u64 {
    defaults::RISK_ANALYSIS_DELAY_MS
}

fn default_route_optimization_ms() -> u64 {
    defaults::ROUTE_OPTIMIZATION_DELAY_MS
}

fn default_notification_visible_ms() -> u64 {
    defaults::NOTIFICATION_VISIBLE_MS
}

fn default_notification_exit_ms() -> u64 {
    defaults::NOTIFICATION_EXIT_MS
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            metrics_interval_secs: default_metrics_interval(),
            well_log_interval_secs: default_well_log_interval(),
            risk_interval_secs: default_risk_interval(),
            well_log_analysis_ms: default_well_log_analysis_ms(),
            risk_analysis_ms: default_risk_analysis_ms(),
            route_optimization_ms: default_route_optimization_ms(),
            notification_visible_ms: default_notification_visible_ms(),
            notification_exit_ms: default_notification_exit_ms(),
        }
    }
}

impl TimingConfig {
    pub fn metrics_interval(&self) -> Duration {
        Duration::from_secs(self.metrics_interval_secs)
    }

    pub fn well_log_interval(&self) -> Duration {
        Duration::from_secs(self.well_log_interval_secs)
    }

    pub fn risk_interval(&self) -> Duration {
        Duration::from_secs(self.risk_interval_secs)
    }

    pub fn notification_visible(&self) -> Duration {
        Duration::from_millis(self.notification_visible_ms)
    }

    pub fn notification_exit(&self) -> Duration {
        Duration::from_millis(self.notification_exit_ms)
    }
}

// ============================================================================
// Simulation
// ============================================================================

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Fixed RNG seed for reproducible demos; entropy-seeded when unset
    #[serde(default)]
    pub seed: Option<u64>,
}

// ============================================================================
// Markup
// ============================================================================

/// The page surface the dashboard writes into.
///
/// Elements not listed here are treated as absent: chart adapters stay
/// inert and text writes are dropped.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MarkupConfig {
    #[serde(default = "default_sections")]
    pub sections: Vec<Section>,
    #[serde(default = "default_active_section")]
    pub active_section: Section,
    /// Element IDs present in the page
    #[serde(default = "default_elements")]
    pub elements: Vec<String>,
    /// Items of the formation analysis panel
    #[serde(default = "default_formation_items")]
    pub formation_items: Vec<Formation>,
    /// Initial text of the geo-steering recommendation lines
    #[serde(default = "default_recommendations")]
    pub recommendations: Vec<String>,
    #[serde(default = "default_gauge_width")]
    pub gauge_width: f64,
    #[serde(default = "default_gauge_height")]
    pub gauge_height: f64,
    #[serde(default)]
    pub buttons: ButtonLabels,
}

fn default_sections() -> Vec<Section> {
    Section::ALL.to_vec()
}
fn default_active_section() -> Section {
    Section::Dashboard
}
fn default_elements() -> Vec<String> {
    element_ids::ALL.iter().map(ToString::to_string).collect()
}
fn default_formation_items() -> Vec<Formation> {
    vec![Formation::Sandstone, Formation::Shale, Formation::Limestone]
}
fn default_recommendations() -> Vec<String> {
    vec![
        "Maintain current trajectory".to_string(),
        "Monitor formation changes".to_string(),
        "Target zone ahead".to_string(),
    ]
}
fn default_gauge_width() -> f64 {
    defaults::GAUGE_CANVAS_WIDTH
}
fn default_gauge_height() -> f64 {
    defaults::GAUGE_CANVAS_HEIGHT
}

impl Default for MarkupConfig {
    fn default() -> Self {
        Self {
            sections: default_sections(),
            active_section: default_active_section(),
            elements: default_elements(),
            formation_items: default_formation_items(),
            recommendations: default_recommendations(),
            gauge_width: default_gauge_width(),
            gauge_height: default_gauge_height(),
            buttons: ButtonLabels::default(),
        }
    }
}

/// Idle labels of the action buttons
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ButtonLabels {
    #[serde(default = "default_well_log_label")]
    pub well_log_analysis: String,
    #[serde(default = "default_risk_label")]
    pub risk_analysis: String,
    #[serde(default = "default_route_label")]
    pub optimize_route: String,
}

fn default_well_log_label() -> String {
    "Run AI Analysis".to_string()
}
fn default_risk_label() -> String {
    "Update Risk Analysis".to_string()
}
fn default_route_label() -> String {
    "Optimize Route".to_string()
}

impl Default for ButtonLabels {
    fn default() -> Self {
        Self {
            well_log_analysis: default_well_log_label(),
            risk_analysis: default_risk_label(),
            optimize_route: default_route_label(),
        }
    }
}

// ============================================================================
// Formation Bands
// ============================================================================

/// The three stock bands: Sandstone over Shale over Limestone.
pub fn default_bands() -> Vec<FormationBand> {
    vec![
        FormationBand {
            formation: Formation::Sandstone,
            depth_start_ft: 2150.0,
            depth_end_ft: 2340.0,
            step_ft: defaults::WELL_LOG_STEP_FT,
            gamma: MeasurementRange::new(30.0, 60.0),
            resistivity: MeasurementRange::new(5.0, 15.0),
            porosity: MeasurementRange::new(15.0, 25.0),
        },
        FormationBand {
            formation: Formation::Shale,
            depth_start_ft: 2340.0,
            depth_end_ft: 2480.0,
            step_ft: defaults::WELL_LOG_STEP_FT,
            gamma: MeasurementRange::new(100.0, 150.0),
            resistivity: MeasurementRange::new(1.0, 3.0),
            porosity: MeasurementRange::new(5.0, 12.0),
        },
        FormationBand {
            formation: Formation::Limestone,
            depth_start_ft: 2480.0,
            depth_end_ft: 2650.0,
            step_ft: defaults::WELL_LOG_STEP_FT,
            gamma: MeasurementRange::new(20.0, 40.0),
            resistivity: MeasurementRange::new(50.0, 200.0),
            porosity: MeasurementRange::new(8.0, 18.0),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_validate() {
        let config = DashboardConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.bands.len(), 3);
        assert_eq!(config.timing.risk_analysis_ms, 1_500);
    }

    #[test]
    fn test_empty_toml_yields_defaults() {
        let config: DashboardConfig = toml::from_str("").unwrap();
        assert_eq!(config.server.addr, defaults::SERVER_ADDR);
        assert_eq!(config.markup.active_section, Section::Dashboard);
        assert_eq!(config.bands, default_bands());
    }

    #[test]
    fn test_partial_toml_overrides() {
        let config: DashboardConfig = toml::from_str(
            r#"
            [timing]
            risk_interval_secs = 5

            [markup]
            sections = ["dashboard", "drilling-risk"]
            active_section = "drilling-risk"

            [simulation]
            seed = 42
            "#,
        )
        .unwrap();
        assert_eq!(config.timing.risk_interval_secs, 5);
        assert_eq!(config.timing.metrics_interval_secs, 30);
        assert_eq!(config.markup.active_section, Section::DrillingRisk);
        assert_eq!(config.simulation.seed, Some(42));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validation_collects_all_errors() {
        let mut config = DashboardConfig::default();
        config.timing.risk_interval_secs = 0;
        config.markup.sections = vec![Section::Dashboard];
        config.markup.active_section = Section::GeoSteering;
        config.bands[1].depth_end_ft = config.bands[1].depth_start_ft;
        config.bands[2].gamma = MeasurementRange::new(40.0, 20.0);

        match config.validate() {
            Err(ConfigError::Validation(errors)) => {
                assert_eq!(errors.len(), 4, "{errors:?}");
            }
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    fn band_errors(config: &DashboardConfig) -> Vec<String> {
        match config.validate() {
            Err(ConfigError::Validation(errors)) => errors,
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn test_step_below_depth_resolution_rejected() {
        let mut config = DashboardConfig::default();
        config.bands[0].depth_start_ft = 1.0e20;
        config.bands[0].depth_end_ft = 1.0e20 + 1.0e6;

        let errors = band_errors(&config);
        assert_eq!(errors.len(), 1, "{errors:?}");
        assert!(errors[0].contains("below the depth resolution"));
    }

    #[test]
    fn test_oversized_band_rejected() {
        let mut config = DashboardConfig::default();
        config.bands[0].step_ft = 1.0e-6;

        let errors = band_errors(&config);
        assert_eq!(errors.len(), 1, "{errors:?}");
        assert!(errors[0].contains("exceeds the limit of 100000"));

        // Right at the limit is fine
        config.bands[0].step_ft = (config.bands[0].depth_end_ft - config.bands[0].depth_start_ft)
            / defaults::MAX_SAMPLES_PER_BAND as f64;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_non_finite_band_values_rejected() {
        let mut config = DashboardConfig::default();
        config.bands[0].depth_end_ft = f64::INFINITY;
        config.bands[1].step_ft = f64::NAN;
        config.bands[2].step_ft = f64::INFINITY;

        let errors = band_errors(&config);
        assert_eq!(errors.len(), 3, "{errors:?}");
        assert!(errors[0].contains("depths must be finite"));
        assert!(errors[1].contains("step_ft must be finite"));
        assert!(errors[2].contains("step_ft must be finite"));
    }

    #[test]
    fn test_toml_roundtrip_keeps_bands() {
        let config = DashboardConfig::default();
        let text = config.to_toml().unwrap();
        let parsed: DashboardConfig = toml::from_str(&text).unwrap();
        assert_eq!(parsed.bands, config.bands);
    }
}
