use crate::model::SarifResult;
use crate::rewrite::Rewriter;
use uuid::Uuid;

/// Gives every result that lacks one a fresh random guid.
#[derive(Debug, Default, Clone)]
pub struct GuidInserter {
    inserted: usize,
}

impl GuidInserter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn inserted(&self) -> usize {
        self.inserted
    }
}

impl Rewriter for GuidInserter {
    fn visit_result(&mut self, node: SarifResult) -> SarifResult {
        let mut node = node.walk(self);
        if node.guid.is_none() {
            let guid = Uuid::new_v4();
            tracing::trace!(%guid, rule_id = ?node.rule_id, "assigned result guid");
            node.guid = Some(guid);
            self.inserted += 1;
        }
        node
    }
}
