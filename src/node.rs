use crate::digest::Canonical;
use crate::error::SarifError;
use crate::kind::NodeKind;
use crate::model::*;
use crate::rewrite::Rewriter;
use crate::structural::Structural;

/// Behaviour shared by every concrete node type.
pub trait SarifNode: Clone + Structural + Canonical + Sized {
    const KIND: NodeKind;

    fn kind(&self) -> NodeKind {
        Self::KIND
    }

    fn into_any(self) -> AnyNode;

    fn from_any(node: AnyNode) -> Result<Self, SarifError>;

    /// Copies every owned child, sequence and map; nothing is shared with `self`.
    fn deep_clone(&self) -> Self {
        self.clone()
    }

    /// Copy-constructs from another instance of the same kind. A missing
    /// source is rejected rather than defaulted.
    fn copy_from(source: Option<&Self>) -> Result<Self, SarifError> {
        source.map(Self::deep_clone).ok_or(SarifError::NullSource(Self::KIND))
    }
}

/// Declares a node struct from its field list and derives, from that same
/// list, its kind, structural equality and hash, canonical encoding and the
/// default rewriting walk.
///
/// Every field must be an `Option`; `None` is the schema's "absent" and is
/// never written when serializing.
macro_rules! sarif_node {
    (
        $(#[$meta:meta])*
        pub struct $name:ident => $kind:ident {
            $(
                $(#[$field_meta:meta])*
                pub $field:ident : $ty:ty,
            )+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Default, ::serde::Serialize, ::serde::Deserialize)]
        #[serde(rename_all = "camelCase")]
        pub struct $name {
            $(
                $(#[$field_meta])*
                #[serde(default, skip_serializing_if = "Option::is_none")]
                pub $field: $ty,
            )+
        }

        impl $name {
            /// Rewrites every child node, sequence element and map value of
            /// this node and returns it. Scalars are left untouched.
            pub fn walk<R: $crate::rewrite::Rewriter + ?Sized>(self, rewriter: &mut R) -> Self {
                Self {
                    $( $field: $crate::rewrite::Rewrite::rewrite(self.$field, rewriter), )+
                }
            }
        }

        impl $crate::node::SarifNode for $name {
            const KIND: $crate::kind::NodeKind = $crate::kind::NodeKind::$kind;

            fn into_any(self) -> $crate::node::AnyNode {
                $crate::node::AnyNode::$kind(self)
            }

            fn from_any(node: $crate::node::AnyNode) -> ::std::result::Result<Self, $crate::error::SarifError> {
                match node {
                    $crate::node::AnyNode::$kind(inner) => Ok(inner),
                    other => Err($crate::error::SarifError::KindMismatch {
                        expected: $crate::kind::NodeKind::$kind,
                        found: other.kind(),
                    }),
                }
            }
        }

        impl $crate::structural::Structural for $name {
            fn structural_eq(&self, other: &Self) -> bool {
                if ::std::ptr::eq(self, other) {
                    return true;
                }
                $(
                    if !$crate::structural::Structural::structural_eq(&self.$field, &other.$field) {
                        return false;
                    }
                )+
                true
            }

            fn structural_hash(&self) -> i32 {
                let mut acc = $crate::structural::HashAccumulator::new();
                $( $crate::structural::Structural::fold_into(&self.$field, &mut acc); )+
                acc.finish()
            }
        }

        impl PartialEq for $name {
            fn eq(&self, other: &Self) -> bool {
                $crate::structural::Structural::structural_eq(self, other)
            }
        }

        impl Eq for $name {}

        impl ::std::hash::Hash for $name {
            fn hash<H: ::std::hash::Hasher>(&self, state: &mut H) {
                state.write_i32($crate::structural::Structural::structural_hash(self));
            }
        }

        impl $crate::digest::Canonical for $name {
            fn write_canonical(&self, buf: &mut Vec<u8>) {
                buf.extend_from_slice(&$crate::kind::NodeKind::$kind.tag().to_be_bytes());
                $( $crate::digest::Canonical::write_canonical(&self.$field, buf); )+
            }
        }

        impl $crate::rewrite::Rewrite for $name {
            fn rewrite<R: $crate::rewrite::Rewriter + ?Sized>(self, rewriter: &mut R) -> Self {
                let rewritten = rewriter.visit($crate::node::AnyNode::$kind(self));
                match <Self as $crate::node::SarifNode>::from_any(rewritten) {
                    Ok(node) => node,
                    Err(err) => panic!("rewriter broke the object model: {}", err),
                }
            }
        }

        impl From<$name> for $crate::node::AnyNode {
            fn from(node: $name) -> Self {
                $crate::node::AnyNode::$kind(node)
            }
        }
    };
}

pub(crate) use sarif_node;

macro_rules! any_node {
    ($($kind:ident($ty:ident)),+ $(,)?) => {
        /// A node of any kind. The variant is the node's kind.
        #[derive(Debug, Clone, PartialEq, Eq, Hash)]
        pub enum AnyNode {
            $( $kind($ty), )+
        }

        impl AnyNode {
            pub fn kind(&self) -> NodeKind {
                match self {
                    $( AnyNode::$kind(_) => NodeKind::$kind, )+
                }
            }

            /// An empty node of the given kind, every field absent.
            pub fn default_for(kind: NodeKind) -> AnyNode {
                match kind {
                    $( NodeKind::$kind => AnyNode::$kind($ty::default()), )+
                }
            }

            pub fn walk<R: Rewriter + ?Sized>(self, rewriter: &mut R) -> AnyNode {
                match self {
                    $( AnyNode::$kind(node) => AnyNode::$kind(node.walk(rewriter)), )+
                }
            }
        }

        impl Structural for AnyNode {
            fn structural_eq(&self, other: &Self) -> bool {
                match (self, other) {
                    $( (AnyNode::$kind(l), AnyNode::$kind(r)) => l.structural_eq(r), )+
                    _ => false,
                }
            }

            fn structural_hash(&self) -> i32 {
                match self {
                    $( AnyNode::$kind(node) => node.structural_hash(), )+
                }
            }
        }

        impl Canonical for AnyNode {
            fn write_canonical(&self, buf: &mut Vec<u8>) {
                match self {
                    $( AnyNode::$kind(node) => node.write_canonical(buf), )+
                }
            }
        }
    };
}

any_node! {
    SarifLog(SarifLog),
    Run(Run),
    Tool(Tool),
    ToolComponent(ToolComponent),
    ToolComponentReference(ToolComponentReference),
    ReportingDescriptor(ReportingDescriptor),
    ReportingDescriptorReference(ReportingDescriptorReference),
    ReportingConfiguration(ReportingConfiguration),
    Message(Message),
    MultiformatMessageString(MultiformatMessageString),
    Invocation(Invocation),
    Notification(Notification),
    ExceptionData(ExceptionData),
    Stack(Stack),
    StackFrame(StackFrame),
    Artifact(Artifact),
    ArtifactLocation(ArtifactLocation),
    ArtifactContent(ArtifactContent),
    Result(SarifResult),
    Location(Location),
    PhysicalLocation(PhysicalLocation),
    Region(Region),
    Address(Address),
    LogicalLocation(LogicalLocation),
    CodeFlow(CodeFlow),
    ThreadFlow(ThreadFlow),
    ThreadFlowLocation(ThreadFlowLocation),
    Graph(Graph),
    Node(GraphNode),
    Edge(Edge),
    Suppression(Suppression),
    Fix(Fix),
    ArtifactChange(ArtifactChange),
    Replacement(Replacement),
    RunAutomationDetails(RunAutomationDetails),
    VersionControlDetails(VersionControlDetails),
    ResultProvenance(ResultProvenance),
}
