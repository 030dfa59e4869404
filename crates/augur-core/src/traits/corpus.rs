use crate::models::{HexagramId, HexagramRecord};

/// Read-only hexagram reference data. May be partially populated.
pub trait IHexagramCorpus: Send + Sync {
    fn get(&self, id: HexagramId) -> Option<HexagramRecord>;

    /// Number of records present.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Record for `id`, or a synthesized placeholder when missing.
    fn resolve(&self, id: HexagramId) -> (HexagramRecord, bool) {
        match self.get(id) {
            Some(record) => (record, false),
            None => (HexagramRecord::placeholder(id), true),
        }
    }
}
