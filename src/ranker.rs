//! src/ranker.rs
use crate::reducer::ReducedEntry;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankedEntry {
    rank: usize,
    word: String,
    total: u64,
}

impl RankedEntry {
    pub fn new(rank: usize, word: String, total: u64) -> Self {
        RankedEntry { rank, word, total }
    }

    pub fn rank(&self) -> usize {
        self.rank
    }

    pub fn word(&self) -> &str {
        &self.word
    }

    pub fn total(&self) -> u64 {
        self.total
    }
}

/// Sorts reduced entries descending by total and returns the top `top_n`,
/// ranked from 1. Ties are broken by ascending lexicographic order on the
/// word so repeated runs produce identical output. Fewer distinct words than
/// `top_n` returns them all.
#[tracing::instrument(name = "Rank reduced entries", skip_all, fields(entries = entries.len(), top_n))]
pub fn rank(entries: Vec<ReducedEntry>, top_n: usize) -> Vec<RankedEntry> {
    let mut entries = entries;
    entries.sort_unstable_by(|a, b| {
        b.total()
            .cmp(&a.total())
            .then_with(|| a.word().cmp(b.word()))
    });
    entries.truncate(top_n);
    entries
        .into_iter()
        .enumerate()
        .map(|(i, entry)| {
            let (word, total) = entry.into_parts();
            RankedEntry::new(i + 1, word, total)
        })
        .collect()
}
