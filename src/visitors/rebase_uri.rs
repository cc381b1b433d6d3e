use crate::error::SarifError;
use crate::model::{ArtifactLocation, Run};
use crate::rewrite::Rewriter;
use url::Url;

/// Makes absolute artifact URIs under a base relative to it.
///
/// Each rebased `ArtifactLocation` gets `uriBaseId = base_name`, and each run
/// records the base under `originalUriBaseIds` so consumers can resolve the
/// relative URIs again. Locations that already carry a `uriBaseId`, relative
/// URIs, and URIs outside the base are left alone.
#[derive(Debug, Clone)]
pub struct RebaseUriRewriter {
    base_name: String,
    base_uri: Url,
    rebased: usize,
}

impl RebaseUriRewriter {
    pub fn new(base_name: &str, base_uri: &str) -> Result<Self, SarifError> {
        if base_name.is_empty() {
            return Err(SarifError::InvalidInput(
                "base name must not be empty".to_string(),
            ));
        }

        let mut base = Url::parse(base_uri)
            .map_err(|e| SarifError::InvalidUri(format!("{}: {}", base_uri, e)))?;
        if base.cannot_be_a_base() {
            return Err(SarifError::InvalidUri(format!(
                "{}: not a hierarchical URI",
                base_uri
            )));
        }
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }

        Ok(Self {
            base_name: base_name.to_string(),
            base_uri: base,
            rebased: 0,
        })
    }

    pub fn base_uri(&self) -> &Url {
        &self.base_uri
    }

    /// Number of artifact locations rewritten so far.
    pub fn rebased(&self) -> usize {
        self.rebased
    }

    fn relativize(&self, uri: &str) -> Option<String> {
        let target = Url::parse(uri).ok()?;
        if !target.as_str().starts_with(self.base_uri.as_str()) {
            return None;
        }
        self.base_uri.make_relative(&target)
    }
}

impl Rewriter for RebaseUriRewriter {
    fn visit_artifact_location(&mut self, node: ArtifactLocation) -> ArtifactLocation {
        let mut node = node.walk(self);
        if node.uri_base_id.is_some() {
            return node;
        }

        let relative = node.uri.as_deref().and_then(|uri| self.relativize(uri));
        if let Some(relative) = relative {
            tracing::trace!(from = ?node.uri, to = %relative, base = %self.base_name, "rebased uri");
            node.uri = Some(relative);
            node.uri_base_id = Some(self.base_name.clone());
            self.rebased += 1;
        }
        node
    }

    fn visit_run(&mut self, mut node: Run) -> Run {
        // Recorded bases stay absolute.
        let bases = node.original_uri_base_ids.take();
        let mut node = node.walk(self);
        node.original_uri_base_ids
            .insert(bases.unwrap_or_default())
            .insert(
                self.base_name.clone(),
                ArtifactLocation::from_uri(self.base_uri.as_str()),
            );
        node
    }
}
