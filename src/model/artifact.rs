use super::{Message, MultiformatMessageString, Region};
use crate::node::sarif_node;
use crate::structural::PropertyBag;
use chrono::{DateTime, Utc};
use indexmap::IndexMap;

sarif_node! {
    /// A file or other artifact analyzed by the tool.
    pub struct Artifact => Artifact {
        pub location: Option<ArtifactLocation>,
        pub parent_index: Option<i64>,
        pub offset: Option<i64>,
        pub length: Option<i64>,
        pub roles: Option<Vec<String>>,
        pub mime_type: Option<String>,
        pub contents: Option<ArtifactContent>,
        pub encoding: Option<String>,
        pub source_language: Option<String>,
        /// Digest algorithm name to digest value.
        pub hashes: Option<IndexMap<String, String>>,
        pub last_modified_time_utc: Option<DateTime<Utc>>,
        pub description: Option<Message>,
        pub properties: Option<PropertyBag>,
    }
}

sarif_node! {
    /// The location of an artifact. A relative `uri` is resolved against the
    /// location named by `uri_base_id`.
    pub struct ArtifactLocation => ArtifactLocation {
        pub uri: Option<String>,
        pub uri_base_id: Option<String>,
        pub index: Option<i64>,
        pub description: Option<Message>,
        pub properties: Option<PropertyBag>,
    }
}

impl ArtifactLocation {
    pub fn from_uri(uri: &str) -> Self {
        Self {
            uri: Some(uri.to_string()),
            ..Self::default()
        }
    }
}

sarif_node! {
    pub struct ArtifactContent => ArtifactContent {
        pub text: Option<String>,
        /// Base64-encoded bytes.
        pub binary: Option<String>,
        pub rendered: Option<MultiformatMessageString>,
        pub properties: Option<PropertyBag>,
    }
}

sarif_node! {
    /// A proposed fix: a set of changes to one or more artifacts.
    pub struct Fix => Fix {
        pub description: Option<Message>,
        pub artifact_changes: Option<Vec<ArtifactChange>>,
        pub properties: Option<PropertyBag>,
    }
}

sarif_node! {
    pub struct ArtifactChange => ArtifactChange {
        pub artifact_location: Option<ArtifactLocation>,
        pub replacements: Option<Vec<Replacement>>,
        pub properties: Option<PropertyBag>,
    }
}

sarif_node! {
    pub struct Replacement => Replacement {
        pub deleted_region: Option<Region>,
        pub inserted_content: Option<ArtifactContent>,
        pub properties: Option<PropertyBag>,
    }
}
