use super::{
    ArtifactLocation, CodeFlow, Fix, Graph, Location, Message, PhysicalLocation,
    ReportingDescriptorReference, Stack,
};
use crate::node::sarif_node;
use crate::structural::PropertyBag;
use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use uuid::Uuid;

sarif_node! {
    /// A single finding reported by the tool. Named `SarifResult` to keep
    /// clear of `std::result::Result`; its kind is `NodeKind::Result`.
    pub struct SarifResult => Result {
        pub rule_id: Option<String>,
        pub rule_index: Option<i64>,
        pub rule: Option<ReportingDescriptorReference>,
        pub kind: Option<String>,
        pub level: Option<String>,
        pub message: Option<Message>,
        pub analysis_target: Option<ArtifactLocation>,
        pub locations: Option<Vec<Location>>,
        pub guid: Option<Uuid>,
        pub correlation_guid: Option<Uuid>,
        pub occurrence_count: Option<i64>,
        pub partial_fingerprints: Option<IndexMap<String, String>>,
        pub fingerprints: Option<IndexMap<String, String>>,
        pub stacks: Option<Vec<Stack>>,
        pub code_flows: Option<Vec<CodeFlow>>,
        pub graphs: Option<Vec<Graph>>,
        pub related_locations: Option<Vec<Location>>,
        pub suppressions: Option<Vec<Suppression>>,
        pub baseline_state: Option<String>,
        pub rank: Option<f64>,
        pub fixes: Option<Vec<Fix>>,
        pub provenance: Option<ResultProvenance>,
        pub properties: Option<PropertyBag>,
    }
}

impl SarifResult {
    pub fn new(rule_id: &str, text: &str) -> Self {
        Self {
            rule_id: Some(rule_id.to_string()),
            message: Some(Message::text(text)),
            ..Self::default()
        }
    }
}

sarif_node! {
    pub struct Suppression => Suppression {
        pub guid: Option<Uuid>,
        pub kind: Option<String>,
        pub status: Option<String>,
        pub justification: Option<String>,
        pub location: Option<Location>,
        pub properties: Option<PropertyBag>,
    }
}

sarif_node! {
    pub struct ResultProvenance => ResultProvenance {
        pub first_detection_time_utc: Option<DateTime<Utc>>,
        pub last_detection_time_utc: Option<DateTime<Utc>>,
        pub first_detection_run_guid: Option<Uuid>,
        pub last_detection_run_guid: Option<Uuid>,
        pub invocation_index: Option<i64>,
        pub conversion_sources: Option<Vec<PhysicalLocation>>,
        pub properties: Option<PropertyBag>,
    }
}
