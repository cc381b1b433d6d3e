use super::{Location, Message, MultiformatMessageString, Stack};
use crate::node::sarif_node;
use crate::structural::PropertyBag;
use chrono::{DateTime, Utc};
use indexmap::IndexMap;

sarif_node! {
    pub struct CodeFlow => CodeFlow {
        pub message: Option<Message>,
        pub thread_flows: Option<Vec<ThreadFlow>>,
        pub properties: Option<PropertyBag>,
    }
}

sarif_node! {
    /// The sequence of code locations visited by one thread.
    pub struct ThreadFlow => ThreadFlow {
        pub id: Option<String>,
        pub message: Option<Message>,
        pub initial_state: Option<IndexMap<String, MultiformatMessageString>>,
        pub immutable_state: Option<IndexMap<String, MultiformatMessageString>>,
        pub locations: Option<Vec<ThreadFlowLocation>>,
        pub properties: Option<PropertyBag>,
    }
}

sarif_node! {
    pub struct ThreadFlowLocation => ThreadFlowLocation {
        pub index: Option<i64>,
        pub location: Option<Location>,
        pub stack: Option<Stack>,
        pub kinds: Option<Vec<String>>,
        pub module: Option<String>,
        pub state: Option<IndexMap<String, MultiformatMessageString>>,
        pub nesting_level: Option<i64>,
        pub execution_order: Option<i64>,
        pub execution_time_utc: Option<DateTime<Utc>>,
        pub importance: Option<String>,
        pub properties: Option<PropertyBag>,
    }
}
