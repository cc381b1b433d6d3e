#![allow(dead_code)]

use chrono::{DateTime, TimeZone, Utc};
use indexmap::IndexMap;
use sarif_tree::model::*;
use sarif_tree::structural::PropertyBag;
use serde_json::json;
use uuid::Uuid;

pub fn timestamp() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 5, 17, 9, 30, 0).unwrap()
}

pub fn bag(entries: &[(&str, serde_json::Value)]) -> PropertyBag {
    entries
        .iter()
        .map(|(k, v)| (k.to_string(), v.clone()))
        .collect()
}

pub fn string_map(entries: &[(&str, &str)]) -> IndexMap<String, String> {
    entries
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

pub fn mfm(text: &str) -> MultiformatMessageString {
    MultiformatMessageString {
        text: Some(text.to_string()),
        ..Default::default()
    }
}

pub fn region(start_line: i64, end_line: i64) -> Region {
    Region {
        snippet: Some(ArtifactContent {
            text: Some("let x = y;".to_string()),
            ..Default::default()
        }),
        ..Region::lines(start_line, end_line)
    }
}

pub fn location(uri: &str, line: i64) -> Location {
    Location {
        physical_location: Some(PhysicalLocation {
            artifact_location: Some(ArtifactLocation::from_uri(uri)),
            region: Some(region(line, line)),
            ..Default::default()
        }),
        message: Some(Message::text("here")),
        ..Default::default()
    }
}

pub fn stack() -> Stack {
    Stack {
        message: Some(Message::text("call stack")),
        frames: Some(vec![
            StackFrame {
                location: Some(location("file:///repo/src/lib.rs", 10)),
                module: Some("core".to_string()),
                thread_id: Some(1),
                parameters: Some(vec!["a".to_string(), "b".to_string()]),
                properties: None,
            },
            StackFrame {
                location: Some(location("file:///repo/src/main.rs", 3)),
                ..Default::default()
            },
        ]),
        properties: None,
    }
}

fn rule() -> ReportingDescriptor {
    ReportingDescriptor {
        id: Some("R001".to_string()),
        name: Some("NoUnsafe".to_string()),
        short_description: Some(mfm("Avoid unsafe code")),
        message_strings: Some(
            [("default".to_string(), mfm("Unsafe block in {0}"))]
                .into_iter()
                .collect(),
        ),
        default_configuration: Some(ReportingConfiguration {
            enabled: Some(true),
            level: Some("warning".to_string()),
            rank: Some(42.5),
            parameters: Some(bag(&[("maxDepth", json!(3))])),
            properties: None,
        }),
        help_uri: Some("https://example.com/rules/R001".to_string()),
        ..Default::default()
    }
}

fn invocation() -> Invocation {
    Invocation {
        command_line: Some("scanner --all".to_string()),
        arguments: Some(vec!["--all".to_string()]),
        start_time_utc: Some(timestamp()),
        execution_successful: Some(true),
        exit_code: Some(0),
        working_directory: Some(ArtifactLocation::from_uri("file:///repo/")),
        environment_variables: Some(string_map(&[("HOME", "/home/ci"), ("CI", "1")])),
        tool_execution_notifications: Some(vec![Notification {
            message: Some(Message::text("parser crashed")),
            level: Some("error".to_string()),
            time_utc: Some(timestamp()),
            exception: Some(ExceptionData {
                kind: Some("ParseError".to_string()),
                message: Some("unexpected token".to_string()),
                stack: Some(stack()),
                inner_exceptions: Some(vec![ExceptionData {
                    kind: Some("IoError".to_string()),
                    ..Default::default()
                }]),
                properties: None,
            }),
            descriptor: Some(ReportingDescriptorReference {
                id: Some("N001".to_string()),
                ..Default::default()
            }),
            ..Default::default()
        }]),
        ..Default::default()
    }
}

fn graph() -> Graph {
    Graph {
        description: Some(Message::text("call graph")),
        nodes: Some(vec![
            GraphNode {
                id: Some("n1".to_string()),
                label: Some(Message::text("main")),
                location: Some(location("file:///repo/src/main.rs", 1)),
                children: Some(vec![GraphNode {
                    id: Some("n1.1".to_string()),
                    ..Default::default()
                }]),
                properties: None,
            },
            GraphNode {
                id: Some("n2".to_string()),
                ..Default::default()
            },
        ]),
        edges: Some(vec![Edge {
            id: Some("e1".to_string()),
            source_node_id: Some("n1".to_string()),
            target_node_id: Some("n2".to_string()),
            ..Default::default()
        }]),
        properties: None,
    }
}

pub fn result() -> SarifResult {
    let mut primary = location("file:///repo/src/lib.rs", 12);
    primary.logical_locations = Some(vec![LogicalLocation {
        name: Some("parse".to_string()),
        fully_qualified_name: Some("crate::parse".to_string()),
        kind: Some("function".to_string()),
        ..Default::default()
    }]);
    if let Some(physical) = primary.physical_location.as_mut() {
        physical.address = Some(Address {
            absolute_address: Some(4096),
            kind: Some("instruction".to_string()),
            ..Default::default()
        });
    }

    SarifResult {
        rule: Some(ReportingDescriptorReference {
            id: Some("R001".to_string()),
            index: Some(0),
            tool_component: Some(ToolComponentReference {
                name: Some("scanner".to_string()),
                ..Default::default()
            }),
            ..Default::default()
        }),
        level: Some("warning".to_string()),
        locations: Some(vec![primary]),
        partial_fingerprints: Some(string_map(&[("primaryLocationLineHash", "abc:1")])),
        stacks: Some(vec![stack()]),
        code_flows: Some(vec![CodeFlow {
            message: Some(Message::text("tainted data")),
            thread_flows: Some(vec![ThreadFlow {
                id: Some("t1".to_string()),
                initial_state: Some(
                    [("x".to_string(), mfm("tainted"))].into_iter().collect(),
                ),
                locations: Some(vec![
                    ThreadFlowLocation {
                        location: Some(location("file:///repo/src/lib.rs", 5)),
                        execution_order: Some(1),
                        ..Default::default()
                    },
                    ThreadFlowLocation {
                        location: Some(location("file:///repo/src/lib.rs", 12)),
                        execution_time_utc: Some(timestamp()),
                        importance: Some("essential".to_string()),
                        ..Default::default()
                    },
                ]),
                ..Default::default()
            }]),
            properties: None,
        }]),
        graphs: Some(vec![graph()]),
        related_locations: Some(vec![location("file:///elsewhere/lib.rs", 7)]),
        suppressions: Some(vec![Suppression {
            kind: Some("inSource".to_string()),
            justification: Some("false positive".to_string()),
            ..Default::default()
        }]),
        rank: Some(77.0),
        fixes: Some(vec![Fix {
            description: Some(Message::text("remove unsafe")),
            artifact_changes: Some(vec![ArtifactChange {
                artifact_location: Some(ArtifactLocation::from_uri("file:///repo/src/lib.rs")),
                replacements: Some(vec![Replacement {
                    deleted_region: Some(region(12, 12)),
                    inserted_content: Some(ArtifactContent {
                        text: Some("safe();".to_string()),
                        ..Default::default()
                    }),
                    properties: None,
                }]),
                properties: None,
            }]),
            properties: None,
        }]),
        provenance: Some(ResultProvenance {
            first_detection_time_utc: Some(timestamp()),
            conversion_sources: Some(vec![PhysicalLocation {
                artifact_location: Some(ArtifactLocation::from_uri("file:///repo/raw.xml")),
                ..Default::default()
            }]),
            ..Default::default()
        }),
        properties: Some(bag(&[("confidence", json!("high")), ("tags", json!(["security"]))])),
        ..SarifResult::new("R001", "Unsafe block in parse")
    }
}

pub fn run() -> Run {
    Run {
        tool: Some(Tool {
            driver: Some(ToolComponent {
                version: Some("1.2.3".to_string()),
                rules: Some(vec![rule()]),
                ..ToolComponent::named("scanner")
            }),
            extensions: Some(vec![ToolComponent::named("scanner-plugin")]),
            properties: None,
        }),
        invocations: Some(vec![invocation()]),
        artifacts: Some(vec![Artifact {
            location: Some(ArtifactLocation::from_uri("file:///repo/src/lib.rs")),
            length: Some(2048),
            roles: Some(vec!["analysisTarget".to_string()]),
            contents: Some(ArtifactContent {
                text: Some("fn main() {}".to_string()),
                ..Default::default()
            }),
            hashes: Some(string_map(&[("sha-256", "deadbeef")])),
            last_modified_time_utc: Some(timestamp()),
            ..Default::default()
        }]),
        results: Some(vec![result()]),
        automation_details: Some(RunAutomationDetails {
            id: Some("nightly/2024-05-17".to_string()),
            guid: Some(Uuid::nil()),
            ..Default::default()
        }),
        version_control_provenance: Some(vec![VersionControlDetails {
            repository_uri: Some("https://example.com/repo.git".to_string()),
            revision_id: Some("b1946ac".to_string()),
            branch: Some("main".to_string()),
            as_of_time_utc: Some(timestamp()),
            mapped_to: Some(ArtifactLocation::from_uri("file:///repo/")),
            ..Default::default()
        }]),
        column_kind: Some("utf16CodeUnits".to_string()),
        properties: Some(bag(&[("owner", json!("security-team"))])),
        ..Default::default()
    }
}

/// A log that contains at least one node of every kind.
pub fn sample_log() -> SarifLog {
    SarifLog {
        properties: Some(bag(&[("generatedBy", json!({"name": "fixture", "version": 1}))])),
        ..SarifLog::with_runs(vec![run()])
    }
}
