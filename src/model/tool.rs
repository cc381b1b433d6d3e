use super::MultiformatMessageString;
use crate::node::sarif_node;
use crate::structural::PropertyBag;
use indexmap::IndexMap;
use uuid::Uuid;

sarif_node! {
    /// The analysis tool that produced a run: its driver and any extensions.
    pub struct Tool => Tool {
        pub driver: Option<ToolComponent>,
        pub extensions: Option<Vec<ToolComponent>>,
        pub properties: Option<PropertyBag>,
    }
}

sarif_node! {
    pub struct ToolComponent => ToolComponent {
        pub guid: Option<Uuid>,
        pub name: Option<String>,
        pub organization: Option<String>,
        pub full_name: Option<String>,
        pub version: Option<String>,
        pub semantic_version: Option<String>,
        pub information_uri: Option<String>,
        pub global_message_strings: Option<IndexMap<String, MultiformatMessageString>>,
        pub notifications: Option<Vec<ReportingDescriptor>>,
        pub rules: Option<Vec<ReportingDescriptor>>,
        pub properties: Option<PropertyBag>,
    }
}

sarif_node! {
    /// Identifies a tool component by name, index into `tool.extensions`, or guid.
    pub struct ToolComponentReference => ToolComponentReference {
        pub name: Option<String>,
        pub index: Option<i64>,
        pub guid: Option<Uuid>,
        pub properties: Option<PropertyBag>,
    }
}

sarif_node! {
    /// Metadata for a rule or notification.
    pub struct ReportingDescriptor => ReportingDescriptor {
        pub id: Option<String>,
        pub deprecated_ids: Option<Vec<String>>,
        pub guid: Option<Uuid>,
        pub name: Option<String>,
        pub short_description: Option<MultiformatMessageString>,
        pub full_description: Option<MultiformatMessageString>,
        pub message_strings: Option<IndexMap<String, MultiformatMessageString>>,
        pub default_configuration: Option<ReportingConfiguration>,
        pub help_uri: Option<String>,
        pub help: Option<MultiformatMessageString>,
        pub properties: Option<PropertyBag>,
    }
}

sarif_node! {
    pub struct ReportingDescriptorReference => ReportingDescriptorReference {
        pub id: Option<String>,
        pub index: Option<i64>,
        pub guid: Option<Uuid>,
        pub tool_component: Option<ToolComponentReference>,
        pub properties: Option<PropertyBag>,
    }
}

sarif_node! {
    pub struct ReportingConfiguration => ReportingConfiguration {
        pub enabled: Option<bool>,
        pub level: Option<String>,
        pub rank: Option<f64>,
        pub parameters: Option<PropertyBag>,
        pub properties: Option<PropertyBag>,
    }
}

impl ToolComponent {
    pub fn named(name: &str) -> Self {
        Self {
            name: Some(name.to_string()),
            ..Self::default()
        }
    }
}
