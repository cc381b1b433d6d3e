mod common;

use sarif_tree::model::*;
use sarif_tree::rewrite::Rewrite;
use sarif_tree::visitors::{GuidInserter, KindCounter, RebaseUriRewriter};
use sarif_tree::{NodeKind, SarifError, Structural};
use uuid::Uuid;

fn run_with_locations(uris: &[&str]) -> Run {
    Run {
        artifacts: Some(
            uris.iter()
                .map(|uri| Artifact {
                    location: Some(ArtifactLocation::from_uri(uri)),
                    ..Default::default()
                })
                .collect(),
        ),
        ..Default::default()
    }
}

fn artifact_locations(run: &Run) -> Vec<&ArtifactLocation> {
    run.artifacts
        .iter()
        .flatten()
        .filter_map(|a| a.location.as_ref())
        .collect()
}

#[test]
fn rebase_makes_uris_under_the_base_relative() -> Result<(), Box<dyn std::error::Error>> {
    let mut rebaser = RebaseUriRewriter::new("SRCROOT", "file:///repo/")?;
    let run = run_with_locations(&["file:///repo/src/lib.rs", "file:///repo/README.md"]);

    let run = run.rewrite(&mut rebaser);
    let locations = artifact_locations(&run);

    assert_eq!(locations[0].uri.as_deref(), Some("src/lib.rs"));
    assert_eq!(locations[0].uri_base_id.as_deref(), Some("SRCROOT"));
    assert_eq!(locations[1].uri.as_deref(), Some("README.md"));
    assert_eq!(rebaser.rebased(), 2);
    Ok(())
}

#[test]
fn rebase_leaves_other_uris_alone() -> Result<(), Box<dyn std::error::Error>> {
    let mut rebaser = RebaseUriRewriter::new("SRCROOT", "file:///repo/")?;
    let mut run = run_with_locations(&[
        "file:///elsewhere/lib.rs",
        "file:///repository/lib.rs",
        "src/already_relative.rs",
        "file:///repo/src/main.rs",
    ]);
    if let Some(artifacts) = run.artifacts.as_mut() {
        if let Some(location) = artifacts[3].location.as_mut() {
            location.uri_base_id = Some("OTHER".to_string());
        }
    }

    let run = run.rewrite(&mut rebaser);
    let locations = artifact_locations(&run);

    assert_eq!(locations[0].uri.as_deref(), Some("file:///elsewhere/lib.rs"));
    assert_eq!(locations[1].uri.as_deref(), Some("file:///repository/lib.rs"));
    assert_eq!(locations[2].uri.as_deref(), Some("src/already_relative.rs"));
    assert_eq!(locations[3].uri.as_deref(), Some("file:///repo/src/main.rs"));
    assert_eq!(locations[3].uri_base_id.as_deref(), Some("OTHER"));
    assert!(locations[..3].iter().all(|l| l.uri_base_id.is_none()));
    assert_eq!(rebaser.rebased(), 0);
    Ok(())
}

#[test]
fn rebase_records_the_base_on_each_run() -> Result<(), Box<dyn std::error::Error>> {
    let mut rebaser = RebaseUriRewriter::new("SRCROOT", "file:///repo")?;
    let log = SarifLog::with_runs(vec![run_with_locations(&[]), Run::default()]);

    let log = log.rewrite(&mut rebaser);

    for run in log.runs.iter().flatten() {
        let bases = run.original_uri_base_ids.as_ref().ok_or("no base ids")?;
        assert_eq!(bases["SRCROOT"].uri.as_deref(), Some("file:///repo/"));
    }
    Ok(())
}

#[test]
fn rebase_keeps_recorded_bases_absolute() -> Result<(), Box<dyn std::error::Error>> {
    let mut rebaser = RebaseUriRewriter::new("REPO", "file:///repo/")?;
    let run = Run {
        original_uri_base_ids: Some(
            [
                ("SRCROOT".to_string(), ArtifactLocation::from_uri("file:///repo/")),
                ("TESTS".to_string(), ArtifactLocation::from_uri("file:///repo/tests/")),
            ]
            .into_iter()
            .collect(),
        ),
        ..run_with_locations(&["file:///repo/src/lib.rs"])
    };

    let run = run.rewrite(&mut rebaser);
    let bases = run.original_uri_base_ids.as_ref().ok_or("no base ids")?;

    assert_eq!(bases.len(), 3);
    assert_eq!(bases["SRCROOT"], ArtifactLocation::from_uri("file:///repo/"));
    assert_eq!(bases["TESTS"], ArtifactLocation::from_uri("file:///repo/tests/"));
    assert_eq!(bases["REPO"].uri.as_deref(), Some("file:///repo/"));
    assert_eq!(artifact_locations(&run)[0].uri.as_deref(), Some("src/lib.rs"));
    assert_eq!(rebaser.rebased(), 1);
    Ok(())
}

#[test]
fn rebase_base_gets_a_trailing_slash() -> Result<(), Box<dyn std::error::Error>> {
    let rebaser = RebaseUriRewriter::new("SRCROOT", "https://example.com/code/project")?;
    assert_eq!(
        rebaser.base_uri().as_str(),
        "https://example.com/code/project/"
    );
    Ok(())
}

#[test]
fn rebase_rejects_bad_bases() {
    assert!(matches!(
        RebaseUriRewriter::new("", "file:///repo/"),
        Err(SarifError::InvalidInput(_))
    ));
    assert!(matches!(
        RebaseUriRewriter::new("SRCROOT", "not a uri"),
        Err(SarifError::InvalidUri(_))
    ));
    assert!(matches!(
        RebaseUriRewriter::new("SRCROOT", "mailto:dev@example.com"),
        Err(SarifError::InvalidUri(_))
    ));
}

#[test]
fn rebase_reaches_deeply_nested_locations() -> Result<(), Box<dyn std::error::Error>> {
    let mut rebaser = RebaseUriRewriter::new("SRCROOT", "file:///repo/")?;
    let log = common::sample_log().rewrite(&mut rebaser);

    let result = &log.runs.as_ref().ok_or("no runs")?[0]
        .results
        .as_ref()
        .ok_or("no results")?[0];
    let frame_location = result.stacks.as_ref().ok_or("no stacks")?[0]
        .frames
        .as_ref()
        .ok_or("no frames")?[0]
        .location
        .as_ref()
        .and_then(|l| l.physical_location.as_ref())
        .and_then(|p| p.artifact_location.as_ref())
        .ok_or("no artifact location")?;

    assert_eq!(frame_location.uri.as_deref(), Some("src/lib.rs"));
    assert_eq!(frame_location.uri_base_id.as_deref(), Some("SRCROOT"));
    assert!(rebaser.rebased() > 1);
    Ok(())
}

#[test]
fn guid_inserter_fills_missing_guids() {
    let run = Run {
        results: Some(vec![
            SarifResult::new("R1", "first"),
            SarifResult::new("R2", "second"),
        ]),
        ..Default::default()
    };
    let mut inserter = GuidInserter::new();
    let run = run.rewrite(&mut inserter);

    let guids: Vec<Uuid> = run
        .results
        .iter()
        .flatten()
        .filter_map(|r| r.guid)
        .collect();
    assert_eq!(guids.len(), 2);
    assert_ne!(guids[0], guids[1]);
    assert_eq!(inserter.inserted(), 2);
}

#[test]
fn guid_inserter_keeps_existing_guids() {
    let existing = SarifResult {
        guid: Some(Uuid::nil()),
        ..SarifResult::new("R1", "first")
    };
    let mut inserter = GuidInserter::new();
    let rewritten = existing.clone().rewrite(&mut inserter);

    assert_eq!(rewritten.guid, Some(Uuid::nil()));
    assert!(rewritten.structural_eq(&existing));
    assert_eq!(inserter.inserted(), 0);
}

#[test]
fn kind_counter_tallies_nodes() {
    let mut counter = KindCounter::new();
    let location = common::location("file:///a.rs", 3);
    let _ = location.rewrite(&mut counter);

    // Location, PhysicalLocation, ArtifactLocation, Region, the snippet
    // ArtifactContent and the Message.
    assert_eq!(counter.count(NodeKind::Location), 1);
    assert_eq!(counter.count(NodeKind::PhysicalLocation), 1);
    assert_eq!(counter.count(NodeKind::ArtifactLocation), 1);
    assert_eq!(counter.count(NodeKind::Region), 1);
    assert_eq!(counter.count(NodeKind::ArtifactContent), 1);
    assert_eq!(counter.count(NodeKind::Message), 1);
    assert_eq!(counter.count(NodeKind::Run), 0);
    assert_eq!(counter.total(), 6);
    assert_eq!(counter.counts().len(), 6);
}
