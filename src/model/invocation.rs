use super::{ArtifactLocation, Location, Message, ReportingDescriptorReference};
use crate::node::sarif_node;
use crate::structural::PropertyBag;
use chrono::{DateTime, Utc};
use indexmap::IndexMap;

sarif_node! {
    /// The runtime environment of one execution of the analysis tool.
    pub struct Invocation => Invocation {
        pub command_line: Option<String>,
        pub arguments: Option<Vec<String>>,
        pub start_time_utc: Option<DateTime<Utc>>,
        pub end_time_utc: Option<DateTime<Utc>>,
        pub execution_successful: Option<bool>,
        pub exit_code: Option<i64>,
        pub machine: Option<String>,
        pub account: Option<String>,
        pub process_id: Option<i64>,
        pub working_directory: Option<ArtifactLocation>,
        pub environment_variables: Option<IndexMap<String, String>>,
        pub tool_execution_notifications: Option<Vec<Notification>>,
        pub tool_configuration_notifications: Option<Vec<Notification>>,
        pub properties: Option<PropertyBag>,
    }
}

sarif_node! {
    /// A condition met by the tool during its execution, as opposed to a result.
    pub struct Notification => Notification {
        pub locations: Option<Vec<Location>>,
        pub message: Option<Message>,
        pub level: Option<String>,
        pub thread_id: Option<i64>,
        pub time_utc: Option<DateTime<Utc>>,
        pub exception: Option<ExceptionData>,
        pub descriptor: Option<ReportingDescriptorReference>,
        pub associated_rule: Option<ReportingDescriptorReference>,
        pub properties: Option<PropertyBag>,
    }
}

sarif_node! {
    pub struct ExceptionData => ExceptionData {
        pub kind: Option<String>,
        pub message: Option<String>,
        pub stack: Option<Stack>,
        pub inner_exceptions: Option<Vec<ExceptionData>>,
        pub properties: Option<PropertyBag>,
    }
}

sarif_node! {
    /// A call stack, innermost frame first.
    pub struct Stack => Stack {
        pub message: Option<Message>,
        pub frames: Option<Vec<StackFrame>>,
        pub properties: Option<PropertyBag>,
    }
}

sarif_node! {
    pub struct StackFrame => StackFrame {
        pub location: Option<Location>,
        pub module: Option<String>,
        pub thread_id: Option<i64>,
        pub parameters: Option<Vec<String>>,
        pub properties: Option<PropertyBag>,
    }
}
