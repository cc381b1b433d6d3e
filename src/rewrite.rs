//! Rewriting traversal. Children go through [`Rewriter::visit`], so
//! overriding it observes every node; call [`dispatch`] to continue.

use crate::error::SarifError;
use crate::model::*;
use crate::node::AnyNode;
use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use uuid::Uuid;

/// A value that can be carried through a rewrite. Nodes hand themselves to
/// the rewriter; containers rewrite their elements; scalars pass through.
pub trait Rewrite: Sized {
    fn rewrite<R: Rewriter + ?Sized>(self, rewriter: &mut R) -> Self;
}

macro_rules! impl_scalar_rewrite {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Rewrite for $ty {
                fn rewrite<R: Rewriter + ?Sized>(self, _rewriter: &mut R) -> Self {
                    self
                }
            }
        )*
    };
}

impl_scalar_rewrite!(String, bool, i64, f64, DateTime<Utc>, Uuid, serde_json::Value);

impl<T: Rewrite> Rewrite for Option<T> {
    fn rewrite<R: Rewriter + ?Sized>(self, rewriter: &mut R) -> Self {
        self.map(|value| value.rewrite(rewriter))
    }
}

impl<T: Rewrite> Rewrite for Vec<T> {
    fn rewrite<R: Rewriter + ?Sized>(self, rewriter: &mut R) -> Self {
        self.into_iter().map(|item| item.rewrite(rewriter)).collect()
    }
}

impl<T: Rewrite> Rewrite for IndexMap<String, T> {
    fn rewrite<R: Rewriter + ?Sized>(self, rewriter: &mut R) -> Self {
        self.into_iter()
            .map(|(key, value)| (key, value.rewrite(rewriter)))
            .collect()
    }
}

impl Rewrite for AnyNode {
    fn rewrite<R: Rewriter + ?Sized>(self, rewriter: &mut R) -> Self {
        rewriter.visit(self)
    }
}

pub trait Rewriter {
    /// Entry point for every node. The default dispatches on the node's kind.
    fn visit(&mut self, node: AnyNode) -> AnyNode {
        dispatch(self, node)
    }

    fn visit_sarif_log(&mut self, node: SarifLog) -> SarifLog {
        node.walk(self)
    }

    fn visit_run(&mut self, node: Run) -> Run {
        node.walk(self)
    }

    fn visit_tool(&mut self, node: Tool) -> Tool {
        node.walk(self)
    }

    fn visit_tool_component(&mut self, node: ToolComponent) -> ToolComponent {
        node.walk(self)
    }

    fn visit_tool_component_reference(
        &mut self,
        node: ToolComponentReference,
    ) -> ToolComponentReference {
        node.walk(self)
    }

    fn visit_reporting_descriptor(&mut self, node: ReportingDescriptor) -> ReportingDescriptor {
        node.walk(self)
    }

    fn visit_reporting_descriptor_reference(
        &mut self,
        node: ReportingDescriptorReference,
    ) -> ReportingDescriptorReference {
        node.walk(self)
    }

    fn visit_reporting_configuration(
        &mut self,
        node: ReportingConfiguration,
    ) -> ReportingConfiguration {
        node.walk(self)
    }

    fn visit_message(&mut self, node: Message) -> Message {
        node.walk(self)
    }

    fn visit_multiformat_message_string(
        &mut self,
        node: MultiformatMessageString,
    ) -> MultiformatMessageString {
        node.walk(self)
    }

    fn visit_invocation(&mut self, node: Invocation) -> Invocation {
        node.walk(self)
    }

    fn visit_notification(&mut self, node: Notification) -> Notification {
        node.walk(self)
    }

    fn visit_exception_data(&mut self, node: ExceptionData) -> ExceptionData {
        node.walk(self)
    }

    fn visit_stack(&mut self, node: Stack) -> Stack {
        node.walk(self)
    }

    fn visit_stack_frame(&mut self, node: StackFrame) -> StackFrame {
        node.walk(self)
    }

    fn visit_artifact(&mut self, node: Artifact) -> Artifact {
        node.walk(self)
    }

    fn visit_artifact_location(&mut self, node: ArtifactLocation) -> ArtifactLocation {
        node.walk(self)
    }

    fn visit_artifact_content(&mut self, node: ArtifactContent) -> ArtifactContent {
        node.walk(self)
    }

    fn visit_result(&mut self, node: SarifResult) -> SarifResult {
        node.walk(self)
    }

    fn visit_location(&mut self, node: Location) -> Location {
        node.walk(self)
    }

    fn visit_physical_location(&mut self, node: PhysicalLocation) -> PhysicalLocation {
        node.walk(self)
    }

    fn visit_region(&mut self, node: Region) -> Region {
        node.walk(self)
    }

    fn visit_address(&mut self, node: Address) -> Address {
        node.walk(self)
    }

    fn visit_logical_location(&mut self, node: LogicalLocation) -> LogicalLocation {
        node.walk(self)
    }

    fn visit_code_flow(&mut self, node: CodeFlow) -> CodeFlow {
        node.walk(self)
    }

    fn visit_thread_flow(&mut self, node: ThreadFlow) -> ThreadFlow {
        node.walk(self)
    }

    fn visit_thread_flow_location(&mut self, node: ThreadFlowLocation) -> ThreadFlowLocation {
        node.walk(self)
    }

    fn visit_graph(&mut self, node: Graph) -> Graph {
        node.walk(self)
    }

    fn visit_graph_node(&mut self, node: GraphNode) -> GraphNode {
        node.walk(self)
    }

    fn visit_edge(&mut self, node: Edge) -> Edge {
        node.walk(self)
    }

    fn visit_suppression(&mut self, node: Suppression) -> Suppression {
        node.walk(self)
    }

    fn visit_fix(&mut self, node: Fix) -> Fix {
        node.walk(self)
    }

    fn visit_artifact_change(&mut self, node: ArtifactChange) -> ArtifactChange {
        node.walk(self)
    }

    fn visit_replacement(&mut self, node: Replacement) -> Replacement {
        node.walk(self)
    }

    fn visit_run_automation_details(&mut self, node: RunAutomationDetails) -> RunAutomationDetails {
        node.walk(self)
    }

    fn visit_version_control_details(
        &mut self,
        node: VersionControlDetails,
    ) -> VersionControlDetails {
        node.walk(self)
    }

    fn visit_result_provenance(&mut self, node: ResultProvenance) -> ResultProvenance {
        node.walk(self)
    }
}

/// Routes a node to the kind-specific routine of `rewriter`.
pub fn dispatch<R: Rewriter + ?Sized>(rewriter: &mut R, node: AnyNode) -> AnyNode {
    match node {
        AnyNode::SarifLog(n) => AnyNode::SarifLog(rewriter.visit_sarif_log(n)),
        AnyNode::Run(n) => AnyNode::Run(rewriter.visit_run(n)),
        AnyNode::Tool(n) => AnyNode::Tool(rewriter.visit_tool(n)),
        AnyNode::ToolComponent(n) => AnyNode::ToolComponent(rewriter.visit_tool_component(n)),
        AnyNode::ToolComponentReference(n) => {
            AnyNode::ToolComponentReference(rewriter.visit_tool_component_reference(n))
        }
        AnyNode::ReportingDescriptor(n) => {
            AnyNode::ReportingDescriptor(rewriter.visit_reporting_descriptor(n))
        }
        AnyNode::ReportingDescriptorReference(n) => {
            AnyNode::ReportingDescriptorReference(rewriter.visit_reporting_descriptor_reference(n))
        }
        AnyNode::ReportingConfiguration(n) => {
            AnyNode::ReportingConfiguration(rewriter.visit_reporting_configuration(n))
        }
        AnyNode::Message(n) => AnyNode::Message(rewriter.visit_message(n)),
        AnyNode::MultiformatMessageString(n) => {
            AnyNode::MultiformatMessageString(rewriter.visit_multiformat_message_string(n))
        }
        AnyNode::Invocation(n) => AnyNode::Invocation(rewriter.visit_invocation(n)),
        AnyNode::Notification(n) => AnyNode::Notification(rewriter.visit_notification(n)),
        AnyNode::ExceptionData(n) => AnyNode::ExceptionData(rewriter.visit_exception_data(n)),
        AnyNode::Stack(n) => AnyNode::Stack(rewriter.visit_stack(n)),
        AnyNode::StackFrame(n) => AnyNode::StackFrame(rewriter.visit_stack_frame(n)),
        AnyNode::Artifact(n) => AnyNode::Artifact(rewriter.visit_artifact(n)),
        AnyNode::ArtifactLocation(n) => {
            AnyNode::ArtifactLocation(rewriter.visit_artifact_location(n))
        }
        AnyNode::ArtifactContent(n) => AnyNode::ArtifactContent(rewriter.visit_artifact_content(n)),
        AnyNode::Result(n) => AnyNode::Result(rewriter.visit_result(n)),
        AnyNode::Location(n) => AnyNode::Location(rewriter.visit_location(n)),
        AnyNode::PhysicalLocation(n) => {
            AnyNode::PhysicalLocation(rewriter.visit_physical_location(n))
        }
        AnyNode::Region(n) => AnyNode::Region(rewriter.visit_region(n)),
        AnyNode::Address(n) => AnyNode::Address(rewriter.visit_address(n)),
        AnyNode::LogicalLocation(n) => AnyNode::LogicalLocation(rewriter.visit_logical_location(n)),
        AnyNode::CodeFlow(n) => AnyNode::CodeFlow(rewriter.visit_code_flow(n)),
        AnyNode::ThreadFlow(n) => AnyNode::ThreadFlow(rewriter.visit_thread_flow(n)),
        AnyNode::ThreadFlowLocation(n) => {
            AnyNode::ThreadFlowLocation(rewriter.visit_thread_flow_location(n))
        }
        AnyNode::Graph(n) => AnyNode::Graph(rewriter.visit_graph(n)),
        AnyNode::Node(n) => AnyNode::Node(rewriter.visit_graph_node(n)),
        AnyNode::Edge(n) => AnyNode::Edge(rewriter.visit_edge(n)),
        AnyNode::Suppression(n) => AnyNode::Suppression(rewriter.visit_suppression(n)),
        AnyNode::Fix(n) => AnyNode::Fix(rewriter.visit_fix(n)),
        AnyNode::ArtifactChange(n) => AnyNode::ArtifactChange(rewriter.visit_artifact_change(n)),
        AnyNode::Replacement(n) => AnyNode::Replacement(rewriter.visit_replacement(n)),
        AnyNode::RunAutomationDetails(n) => {
            AnyNode::RunAutomationDetails(rewriter.visit_run_automation_details(n))
        }
        AnyNode::VersionControlDetails(n) => {
            AnyNode::VersionControlDetails(rewriter.visit_version_control_details(n))
        }
        AnyNode::ResultProvenance(n) => {
            AnyNode::ResultProvenance(rewriter.visit_result_provenance(n))
        }
    }
}

/// Rewrites a graph from its root. A missing root has no kind to dispatch
/// on and is rejected.
pub fn rewrite_root<R: Rewriter + ?Sized>(
    rewriter: &mut R,
    root: Option<AnyNode>,
) -> Result<AnyNode, SarifError> {
    let root = root.ok_or(SarifError::NullRoot)?;
    tracing::debug!(kind = %root.kind(), "rewriting graph");
    Ok(rewriter.visit(root))
}
