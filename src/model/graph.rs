use super::{Location, Message};
use crate::node::sarif_node;
use crate::structural::PropertyBag;

sarif_node! {
    /// A network of nodes and directed edges describing some aspect of the code.
    pub struct Graph => Graph {
        pub description: Option<Message>,
        pub nodes: Option<Vec<GraphNode>>,
        pub edges: Option<Vec<Edge>>,
        pub properties: Option<PropertyBag>,
    }
}

sarif_node! {
    /// A node in a [`Graph`]; the schema calls this type `node`.
    pub struct GraphNode => Node {
        pub id: Option<String>,
        pub label: Option<Message>,
        pub location: Option<Location>,
        pub children: Option<Vec<GraphNode>>,
        pub properties: Option<PropertyBag>,
    }
}

sarif_node! {
    pub struct Edge => Edge {
        pub id: Option<String>,
        pub label: Option<Message>,
        pub source_node_id: Option<String>,
        pub target_node_id: Option<String>,
        pub properties: Option<PropertyBag>,
    }
}
