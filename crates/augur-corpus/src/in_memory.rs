use std::collections::HashMap;

use augur_core::errors::{AugurError, AugurResult};
use augur_core::models::{HexagramId, HexagramRecord};
use augur_core::traits::IHexagramCorpus;

/// A corpus held in memory. May cover only part of the sequence; missing
/// ids resolve to placeholders.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCorpus {
    records: HashMap<HexagramId, HexagramRecord>,
}

impl InMemoryCorpus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from records. Later duplicates replace earlier ones.
    pub fn from_records(records: impl IntoIterator<Item = HexagramRecord>) -> Self {
        Self {
            records: records.into_iter().map(|r| (r.id, r)).collect(),
        }
    }

    /// Load a JSON array of records.
    ///
    /// Rejects duplicate ids and records whose trigrams disagree with the
    /// King Wen composition of their id.
    pub fn from_json(json: &str) -> AugurResult<Self> {
        let parsed: Vec<HexagramRecord> = serde_json::from_str(json)?;
        let mut records = HashMap::with_capacity(parsed.len());
        for record in parsed {
            let expected = record.id.trigrams();
            if (record.upper, record.lower) != expected {
                return Err(AugurError::ConfigError(format!(
                    "hexagram {} declares {}/{} but is {}/{}",
                    record.id,
                    record.upper.name(),
                    record.lower.name(),
                    expected.0.name(),
                    expected.1.name()
                )));
            }
            let id = record.id;
            if records.insert(id, record).is_some() {
                return Err(AugurError::ConfigError(format!(
                    "hexagram {id} appears more than once"
                )));
            }
        }
        tracing::debug!(records = records.len(), "loaded hexagram corpus from json");
        Ok(Self { records })
    }

    pub fn insert(&mut self, record: HexagramRecord) {
        self.records.insert(record.id, record);
    }
}

impl IHexagramCorpus for InMemoryCorpus {
    fn get(&self, id: HexagramId) -> Option<HexagramRecord> {
        self.records.get(&id).cloned()
    }

    fn len(&self) -> usize {
        self.records.len()
    }
}
