//! src/render.rs
use crate::ranker::RankedEntry;

/// External collaborator that accepts the ranked top-N list. The pipeline
/// has no dependency on how results are displayed.
pub trait ResultsConsumer {
    fn present(&self, entries: &[RankedEntry]) -> anyhow::Result<()>;
}

/// Horizontal bar chart on stdout, one row per ranked word, bar length
/// proportional to the count and scaled to `width`.
pub struct ConsoleChart {
    width: usize,
}

impl ConsoleChart {
    pub fn new(width: usize) -> Self {
        ConsoleChart {
            width: width.max(1),
        }
    }

    pub fn render(&self, entries: &[RankedEntry]) -> String {
        let Some(max_total) = entries.iter().map(RankedEntry::total).max() else {
            return String::new();
        };
        let word_width = entries
            .iter()
            .map(|e| e.word().chars().count())
            .max()
            .unwrap_or(0);
        let mut out = String::new();
        for entry in entries {
            let bar_len = ((entry.total() as usize * self.width) / max_total as usize).max(1);
            out.push_str(&format!(
                "{:>3}. {:<word_width$} {} {}\n",
                entry.rank(),
                entry.word(),
                "█".repeat(bar_len),
                entry.total(),
            ));
        }
        out
    }
}

impl Default for ConsoleChart {
    fn default() -> Self {
        ConsoleChart::new(40)
    }
}

impl ResultsConsumer for ConsoleChart {
    fn present(&self, entries: &[RankedEntry]) -> anyhow::Result<()> {
        if entries.is_empty() {
            println!("No words to display.");
            return Ok(());
        }
        print!("{}", self.render(entries));
        Ok(())
    }
}
