use super::{
    Artifact, ArtifactLocation, Graph, Invocation, LogicalLocation, Message, SarifResult, Tool,
};
use crate::node::sarif_node;
use crate::structural::PropertyBag;
use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use uuid::Uuid;

pub const SARIF_VERSION: &str = "2.1.0";
pub const SARIF_SCHEMA_URI: &str = "https://json.schemastore.org/sarif-2.1.0.json";

sarif_node! {
    /// Root of a SARIF document.
    pub struct SarifLog => SarifLog {
        #[serde(rename = "$schema")]
        pub schema: Option<String>,
        pub version: Option<String>,
        pub runs: Option<Vec<Run>>,
        pub properties: Option<PropertyBag>,
    }
}

impl SarifLog {
    /// An empty 2.1.0 log holding the given runs.
    pub fn with_runs(runs: Vec<Run>) -> Self {
        Self {
            schema: Some(SARIF_SCHEMA_URI.to_string()),
            version: Some(SARIF_VERSION.to_string()),
            runs: Some(runs),
            properties: None,
        }
    }
}

sarif_node! {
    /// A single invocation of a single analysis tool and the results it produced.
    pub struct Run => Run {
        pub tool: Option<Tool>,
        pub invocations: Option<Vec<Invocation>>,
        /// Maps a `uriBaseId` to the absolute location it stood for when the log was written.
        pub original_uri_base_ids: Option<IndexMap<String, ArtifactLocation>>,
        pub artifacts: Option<Vec<Artifact>>,
        pub logical_locations: Option<Vec<LogicalLocation>>,
        pub graphs: Option<Vec<Graph>>,
        pub results: Option<Vec<SarifResult>>,
        pub automation_details: Option<RunAutomationDetails>,
        pub version_control_provenance: Option<Vec<VersionControlDetails>>,
        pub language: Option<String>,
        pub column_kind: Option<String>,
        pub baseline_guid: Option<Uuid>,
        pub properties: Option<PropertyBag>,
    }
}

sarif_node! {
    pub struct RunAutomationDetails => RunAutomationDetails {
        pub description: Option<Message>,
        pub id: Option<String>,
        pub guid: Option<Uuid>,
        pub correlation_guid: Option<Uuid>,
        pub properties: Option<PropertyBag>,
    }
}

sarif_node! {
    pub struct VersionControlDetails => VersionControlDetails {
        pub repository_uri: Option<String>,
        pub revision_id: Option<String>,
        pub branch: Option<String>,
        pub revision_tag: Option<String>,
        pub as_of_time_utc: Option<DateTime<Utc>>,
        pub mapped_to: Option<ArtifactLocation>,
        pub properties: Option<PropertyBag>,
    }
}
