//! Table schema registration
//!
//! At startup the dashboard announces three table schemas to a backing
//! store. Registration is fire-and-forget: schemas go out in order, the first
//! transport failure ends the sequence, and the outcome is only logged. The
//! dashboard always runs on local synthetic data either way.
//!
//! `SchemaRegistry` is the in-process store the HTTP API exposes, so a
//! default run registers against itself.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;
use tokio::sync::RwLock;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

// ============================================================================
// Schema Types
// ============================================================================

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    Text,
    Number,
    Datetime,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FieldSpec {
    pub name: String,
    #[serde(rename = "type")]
    pub field_type: FieldType,
    #[serde(default)]
    pub description: String,
}

fn field(name: &str, field_type: FieldType, description: &str) -> FieldSpec {
    FieldSpec {
        name: name.to_string(),
        field_type,
        description: description.to_string(),
    }
}

/// Body of a registration request
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TableSchema {
    pub name: String,
    pub fields: Vec<FieldSpec>,
}

impl TableSchema {
    pub fn well_logs() -> Self {
        use FieldType::{Number, Text};
        Self {
            name: "well_logs".to_string(),
            fields: vec![
                field("id", Text, "Unique identifier"),
                field("depth", Number, "Depth in feet"),
                field("gamma_ray", Number, "Gamma ray reading (API units)"),
                field("resistivity", Number, "Resistivity (Ω·m)"),
                field("porosity", Number, "Porosity percentage"),
                field("formation", Text, "AI-identified formation"),
                field("confidence", Number, "AI confidence score"),
            ],
        }
    }

    pub fn risk_assessments() -> Self {
        use FieldType::{Datetime, Number, Text};
        Self {
            name: "risk_assessments".to_string(),
            fields: vec![
                field("id", Text, "Unique identifier"),
                field("timestamp", Datetime, "Assessment time"),
                field("overall_risk", Text, "Overall risk level"),
                field("equipment_risk", Number, "Equipment failure risk %"),
                field("wellbore_risk", Number, "Wellbore instability risk %"),
                field("circulation_risk", Number, "Lost circulation risk %"),
                field("blowout_risk", Number, "Kick/blowout risk %"),
            ],
        }
    }

    pub fn geosteering_data() -> Self {
        use FieldType::{Number, Text};
        Self {
            name: "geosteering_data".to_string(),
            fields: vec![
                field("id", Text, "Unique identifier"),
                field("depth", Number, "Current depth"),
                field("azimuth", Number, "Azimuth angle"),
                field("inclination", Number, "Inclination angle"),
                field("target_distance", Number, "Distance to target"),
                field("ai_recommendation", Text, "AI steering recommendation"),
            ],
        }
    }

    /// The three schemas in registration order
    pub fn all() -> Vec<Self> {
        vec![Self::well_logs(), Self::risk_assessments(), Self::geosteering_data()]
    }
}

// ============================================================================
// Sinks
// ============================================================================

#[derive(Debug, Error)]
pub enum SchemaError {
    #[error("failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),
    #[error("schema '{name}' could not be sent: {source}")]
    Transport {
        name: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("schema sink unavailable: {0}")]
    Unavailable(String),
}

/// Destination for schema registrations
#[async_trait]
pub trait SchemaSink: Send + Sync {
    /// Send one schema. Only transport failures are errors.
    async fn register(&self, schema: &TableSchema) -> Result<(), SchemaError>;
}

/// POSTs schemas as JSON to `{base_url}/api/schema/{name}`
#[derive(Debug, Clone)]
pub struct HttpSchemaSink {
    http: reqwest::Client,
    base_url: String,
}

impl HttpSchemaSink {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, SchemaError> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(SchemaError::Client)?;
        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn endpoint(&self, name: &str) -> String {
        format!("{}/api/schema/{}", self.base_url, name)
    }
}

#[async_trait]
impl SchemaSink for HttpSchemaSink {
    async fn register(&self, schema: &TableSchema) -> Result<(), SchemaError> {
        let resp = self
            .http
            .post(self.endpoint(&schema.name))
            .json(schema)
            .send()
            .await
            .map_err(|source| SchemaError::Transport {
                name: schema.name.clone(),
                source,
            })?;
        // Status is not checked; any response counts as delivered
        debug!(schema = %schema.name, status = %resp.status(), "Schema sent");
        Ok(())
    }
}

/// In-memory schema store behind `POST /api/schema/{name}`
#[derive(Debug, Clone, Default)]
pub struct SchemaRegistry {
    tables: Arc<RwLock<BTreeMap<String, TableSchema>>>,
}

impl SchemaRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `schema`, replacing any previous one with the same name.
    /// Returns `true` if the name was new.
    pub async fn insert(&self, schema: TableSchema) -> bool {
        self.tables
            .write()
            .await
            .insert(schema.name.clone(), schema)
            .is_none()
    }

    pub async fn get(&self, name: &str) -> Option<TableSchema> {
        self.tables.read().await.get(name).cloned()
    }

    pub async fn list(&self) -> Vec<TableSchema> {
        self.tables.read().await.values().cloned().collect()
    }
}

#[async_trait]
impl SchemaSink for SchemaRegistry {
    async fn register(&self, schema: &TableSchema) -> Result<(), SchemaError> {
        self.insert(schema.clone()).await;
        Ok(())
    }
}

// ============================================================================
// Registration
// ============================================================================

/// Send every schema in order, stopping at the first failure.
///
/// Returns the number of schemas sent before the failure, if any.
pub async fn register_all(
    sink: &dyn SchemaSink,
    schemas: &[TableSchema],
) -> Result<usize, (usize, SchemaError)> {
    for (sent, schema) in schemas.iter().enumerate() {
        sink.register(schema).await.map_err(|e| (sent, e))?;
    }
    Ok(schemas.len())
}

/// Run registration in the background and log the outcome.
pub fn spawn_startup_registration(sink: Arc<dyn SchemaSink>) -> JoinHandle<()> {
    tokio::spawn(async move {
        match register_all(sink.as_ref(), &TableSchema::all()).await {
            Ok(count) => info!(count, "Table schemas created successfully"),
            Err((sent, e)) => {
                warn!(sent, error = %e, "Using demo data - schemas may already exist");
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    /// Records names and fails on the given call index
    struct RecordingSink {
        seen: Mutex<Vec<String>>,
        fail_at: Option<usize>,
    }

    impl RecordingSink {
        fn new(fail_at: Option<usize>) -> Self {
            Self {
                seen: Mutex::new(Vec::new()),
                fail_at,
            }
        }
    }

    #[async_trait]
    impl SchemaSink for RecordingSink {
        async fn register(&self, schema: &TableSchema) -> Result<(), SchemaError> {
            let mut seen = self.seen.lock().unwrap();
            if self.fail_at == Some(seen.len()) {
                return Err(SchemaError::Unavailable("connection refused".to_string()));
            }
            seen.push(schema.name.clone());
            Ok(())
        }
    }

    #[test]
    fn test_schema_field_lists() {
        let names: Vec<_> = TableSchema::geosteering_data()
            .fields
            .into_iter()
            .map(|f| f.name)
            .collect();
        assert_eq!(
            names,
            ["id", "depth", "azimuth", "inclination", "target_distance", "ai_recommendation"]
        );
        assert_eq!(TableSchema::risk_assessments().fields[1].field_type, FieldType::Datetime);
        assert_eq!(TableSchema::well_logs().fields.len(), 7);
    }

    #[test]
    fn test_field_serializes_type_key() {
        let json = serde_json::to_value(&TableSchema::well_logs().fields[0]).unwrap();
        assert_eq!(json["type"], "text");
        assert_eq!(json["name"], "id");
    }

    #[tokio::test]
    async fn test_register_all_in_order() {
        let sink = RecordingSink::new(None);
        let sent = tokio_test::assert_ok!(register_all(&sink, &TableSchema::all()).await);
        assert_eq!(sent, 3);
        assert_eq!(
            *sink.seen.lock().unwrap(),
            ["well_logs", "risk_assessments", "geosteering_data"]
        );
    }

    #[tokio::test]
    async fn test_first_failure_stops_sequence() {
        let sink = RecordingSink::new(Some(1));
        let (sent, err) = register_all(&sink, &TableSchema::all()).await.unwrap_err();
        assert_eq!(sent, 1);
        assert!(matches!(err, SchemaError::Unavailable(_)));
        assert_eq!(*sink.seen.lock().unwrap(), ["well_logs"]);
    }

    #[tokio::test]
    async fn test_registry_sink() {
        let registry = SchemaRegistry::new();
        spawn_startup_registration(Arc::new(registry.clone())).await.unwrap();

        assert_eq!(registry.list().await.len(), 3);
        assert!(registry.get("risk_assessments").await.is_some());
        assert!(!registry.insert(TableSchema::well_logs()).await);
    }

    #[test]
    fn test_http_endpoint_trims_slash() {
        let sink = HttpSchemaSink::new("http://127.0.0.1:8080/", Duration::from_secs(1)).unwrap();
        assert_eq!(sink.endpoint("well_logs"), "http://127.0.0.1:8080/api/schema/well_logs");
    }
}
