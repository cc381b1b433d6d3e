//! Node types of the SARIF object model.
//!
//! Each type is declared once with [`sarif_node!`](crate::node), which derives
//! its equality, hashing, canonical encoding and rewriting walk from the
//! declared field list.

mod artifact;
mod flow;
mod graph;
mod invocation;
mod location;
mod log;
mod message;
mod result;
mod tool;

pub use artifact::{Artifact, ArtifactChange, ArtifactContent, ArtifactLocation, Fix, Replacement};
pub use flow::{CodeFlow, ThreadFlow, ThreadFlowLocation};
pub use graph::{Edge, Graph, GraphNode};
pub use invocation::{ExceptionData, Invocation, Notification, Stack, StackFrame};
pub use location::{Address, Location, LogicalLocation, PhysicalLocation, Region};
pub use log::{Run, RunAutomationDetails, SARIF_SCHEMA_URI, SARIF_VERSION, SarifLog, VersionControlDetails};
pub use message::{Message, MultiformatMessageString};
pub use result::{ResultProvenance, SarifResult, Suppression};
pub use tool::{
    ReportingConfiguration, ReportingDescriptor, ReportingDescriptorReference, Tool,
    ToolComponent, ToolComponentReference,
};
