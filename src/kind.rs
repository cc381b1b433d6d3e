use crate::error::SarifError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Discriminant for every concrete node type in the object model.
///
/// The variant names are the SARIF schema type names. Adding a node type means
/// adding a variant here; every `match` over `NodeKind` or `AnyNode` then
/// fails to compile until the new kind is handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(u16)]
pub enum NodeKind {
    SarifLog,
    Run,
    Tool,
    ToolComponent,
    ToolComponentReference,
    ReportingDescriptor,
    ReportingDescriptorReference,
    ReportingConfiguration,
    Message,
    MultiformatMessageString,
    Invocation,
    Notification,
    ExceptionData,
    Stack,
    StackFrame,
    Artifact,
    ArtifactLocation,
    ArtifactContent,
    Result,
    Location,
    PhysicalLocation,
    Region,
    Address,
    LogicalLocation,
    CodeFlow,
    ThreadFlow,
    ThreadFlowLocation,
    Graph,
    Node,
    Edge,
    Suppression,
    Fix,
    ArtifactChange,
    Replacement,
    RunAutomationDetails,
    VersionControlDetails,
    ResultProvenance,
}

impl NodeKind {
    pub const ALL: [NodeKind; 37] = [
        NodeKind::SarifLog,
        NodeKind::Run,
        NodeKind::Tool,
        NodeKind::ToolComponent,
        NodeKind::ToolComponentReference,
        NodeKind::ReportingDescriptor,
        NodeKind::ReportingDescriptorReference,
        NodeKind::ReportingConfiguration,
        NodeKind::Message,
        NodeKind::MultiformatMessageString,
        NodeKind::Invocation,
        NodeKind::Notification,
        NodeKind::ExceptionData,
        NodeKind::Stack,
        NodeKind::StackFrame,
        NodeKind::Artifact,
        NodeKind::ArtifactLocation,
        NodeKind::ArtifactContent,
        NodeKind::Result,
        NodeKind::Location,
        NodeKind::PhysicalLocation,
        NodeKind::Region,
        NodeKind::Address,
        NodeKind::LogicalLocation,
        NodeKind::CodeFlow,
        NodeKind::ThreadFlow,
        NodeKind::ThreadFlowLocation,
        NodeKind::Graph,
        NodeKind::Node,
        NodeKind::Edge,
        NodeKind::Suppression,
        NodeKind::Fix,
        NodeKind::ArtifactChange,
        NodeKind::Replacement,
        NodeKind::RunAutomationDetails,
        NodeKind::VersionControlDetails,
        NodeKind::ResultProvenance,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            NodeKind::SarifLog => "SarifLog",
            NodeKind::Run => "Run",
            NodeKind::Tool => "Tool",
            NodeKind::ToolComponent => "ToolComponent",
            NodeKind::ToolComponentReference => "ToolComponentReference",
            NodeKind::ReportingDescriptor => "ReportingDescriptor",
            NodeKind::ReportingDescriptorReference => "ReportingDescriptorReference",
            NodeKind::ReportingConfiguration => "ReportingConfiguration",
            NodeKind::Message => "Message",
            NodeKind::MultiformatMessageString => "MultiformatMessageString",
            NodeKind::Invocation => "Invocation",
            NodeKind::Notification => "Notification",
            NodeKind::ExceptionData => "ExceptionData",
            NodeKind::Stack => "Stack",
            NodeKind::StackFrame => "StackFrame",
            NodeKind::Artifact => "Artifact",
            NodeKind::ArtifactLocation => "ArtifactLocation",
            NodeKind::ArtifactContent => "ArtifactContent",
            NodeKind::Result => "Result",
            NodeKind::Location => "Location",
            NodeKind::PhysicalLocation => "PhysicalLocation",
            NodeKind::Region => "Region",
            NodeKind::Address => "Address",
            NodeKind::LogicalLocation => "LogicalLocation",
            NodeKind::CodeFlow => "CodeFlow",
            NodeKind::ThreadFlow => "ThreadFlow",
            NodeKind::ThreadFlowLocation => "ThreadFlowLocation",
            NodeKind::Graph => "Graph",
            NodeKind::Node => "Node",
            NodeKind::Edge => "Edge",
            NodeKind::Suppression => "Suppression",
            NodeKind::Fix => "Fix",
            NodeKind::ArtifactChange => "ArtifactChange",
            NodeKind::Replacement => "Replacement",
            NodeKind::RunAutomationDetails => "RunAutomationDetails",
            NodeKind::VersionControlDetails => "VersionControlDetails",
            NodeKind::ResultProvenance => "ResultProvenance",
        }
    }

    /// Stable numeric tag, written into canonical encodings.
    pub fn tag(self) -> u16 {
        self as u16
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for NodeKind {
    type Err = SarifError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NodeKind::ALL
            .iter()
            .copied()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| SarifError::UnknownKind(s.to_string()))
    }
}
