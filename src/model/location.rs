use super::{ArtifactContent, ArtifactLocation, Message};
use crate::node::sarif_node;
use crate::structural::PropertyBag;

sarif_node! {
    /// A location relevant to a result: physical, logical, or both.
    pub struct Location => Location {
        pub id: Option<i64>,
        pub physical_location: Option<PhysicalLocation>,
        pub logical_locations: Option<Vec<LogicalLocation>>,
        pub message: Option<Message>,
        pub annotations: Option<Vec<Region>>,
        pub properties: Option<PropertyBag>,
    }
}

sarif_node! {
    pub struct PhysicalLocation => PhysicalLocation {
        pub address: Option<Address>,
        pub artifact_location: Option<ArtifactLocation>,
        pub region: Option<Region>,
        /// A wider region around `region`, for display.
        pub context_region: Option<Region>,
        pub properties: Option<PropertyBag>,
    }
}

sarif_node! {
    /// A contiguous portion of an artifact. Text regions use one-based lines
    /// and columns; binary regions use byte offsets.
    pub struct Region => Region {
        pub start_line: Option<i64>,
        pub start_column: Option<i64>,
        pub end_line: Option<i64>,
        pub end_column: Option<i64>,
        pub char_offset: Option<i64>,
        pub char_length: Option<i64>,
        pub byte_offset: Option<i64>,
        pub byte_length: Option<i64>,
        pub snippet: Option<ArtifactContent>,
        pub message: Option<Message>,
        pub source_language: Option<String>,
        pub properties: Option<PropertyBag>,
    }
}

impl Region {
    pub fn lines(start_line: i64, end_line: i64) -> Self {
        Self {
            start_line: Some(start_line),
            end_line: Some(end_line),
            ..Self::default()
        }
    }
}

sarif_node! {
    pub struct Address => Address {
        pub absolute_address: Option<i64>,
        pub relative_address: Option<i64>,
        pub length: Option<i64>,
        pub kind: Option<String>,
        pub name: Option<String>,
        pub fully_qualified_name: Option<String>,
        pub offset_from_parent: Option<i64>,
        pub index: Option<i64>,
        pub parent_index: Option<i64>,
        pub properties: Option<PropertyBag>,
    }
}

sarif_node! {
    pub struct LogicalLocation => LogicalLocation {
        pub name: Option<String>,
        pub index: Option<i64>,
        pub fully_qualified_name: Option<String>,
        pub decorated_name: Option<String>,
        pub parent_index: Option<i64>,
        pub kind: Option<String>,
        pub properties: Option<PropertyBag>,
    }
}
