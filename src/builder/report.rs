//! Insertion-ordered per-module build report.

use std::fmt;
use std::time::Duration;

/// Outcome of a single module build.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Ok,
    Failure,
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Ok => write!(f, "OK"),
            Outcome::Failure => write!(f, "FAILURE"),
        }
    }
}

/// One report line: a module, how its build went and how long it took.
#[derive(Debug, Clone)]
pub struct ReportEntry {
    pub module: String,
    pub outcome: Outcome,
    pub elapsed: Duration,
}

impl ReportEntry {
    /// Render as `<module padded to 30> --> <outcome> - Execution time: HH:mm:ss`.
    pub fn render(&self) -> String {
        format!(
            "{:<30} --> {} - Execution time: {}",
            self.module,
            self.outcome,
            format_elapsed(self.elapsed)
        )
    }
}

/// Build report owned by a single orchestration run.
///
/// Entries iterate in insertion order, which matches the configured module
/// order.
#[derive(Debug, Default)]
pub struct BuildReport {
    entries: Vec<ReportEntry>,
}

impl BuildReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, module: impl Into<String>, outcome: Outcome, elapsed: Duration) {
        self.entries.push(ReportEntry {
            module: module.into(),
            outcome,
            elapsed,
        });
    }

    pub fn entries(&self) -> &[ReportEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Print the report to stdout, one line per module.
    pub fn print(&self) {
        println!();
        for entry in &self.entries {
            println!("{}", entry.render());
        }
    }
}

fn format_elapsed(elapsed: Duration) -> String {
    let total = elapsed.as_secs();
    format!(
        "{:02}:{:02}:{:02}",
        total / 3600,
        (total % 3600) / 60,
        total % 60
    )
}
