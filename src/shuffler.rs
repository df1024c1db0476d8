//! src/shuffler.rs
use crate::mapper::MappedPair;
use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupedEntry {
    word: String,
    counts: Vec<u64>,
}

impl GroupedEntry {
    pub fn new(word: String, counts: Vec<u64>) -> Self {
        GroupedEntry { word, counts }
    }

    pub fn word(&self) -> &str {
        &self.word
    }

    pub fn counts(&self) -> &[u64] {
        &self.counts
    }

    pub fn into_parts(self) -> (String, Vec<u64>) {
        (self.word, self.counts)
    }
}

/// Groups mapped pairs by word. Runs sequentially on the calling task,
/// between the two parallel stages, so the accumulating map is never touched
/// concurrently. Invariant: the counts across all groups add up to the
/// number of input pairs.
#[tracing::instrument(name = "Shuffle mapped pairs", skip_all, fields(pairs = pairs.len()))]
pub fn shuffle(pairs: Vec<MappedPair>) -> Vec<GroupedEntry> {
    let mut groups: HashMap<String, Vec<u64>> = HashMap::new();
    for pair in pairs {
        let (word, count) = pair.into_parts();
        groups.entry(word).or_default().push(count);
    }
    groups
        .into_iter()
        .map(|(word, counts)| GroupedEntry::new(word, counts))
        .collect()
}
