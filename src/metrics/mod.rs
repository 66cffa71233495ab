pub mod compare;
pub mod document;
pub mod extract;

pub use compare::{advantage, winner, Advantage, Direction, Winner};
pub use document::{MetricValues, MetricsDocument};
pub use extract::{extract_metrics, ExtractedMetrics};

use std::fmt;

/// The two services being compared. Order matters: Go is always the
/// first series / column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum System {
    Go,
    Java,
}

impl System {
    pub const ALL: [System; 2] = [System::Go, System::Java];

    /// Short label used in tables and winner cells.
    pub fn name(self) -> &'static str {
        match self {
            Self::Go => "Go",
            Self::Java => "Java",
        }
    }

    /// Legend / column header naming the stack under test.
    pub fn display_name(self) -> &'static str {
        match self {
            Self::Go => "Go (Fiber)",
            Self::Java => "Java (Virtual Threads)",
        }
    }

    /// Category label for the two-bar throughput and reliability panels.
    pub fn axis_label(self) -> &'static str {
        match self {
            Self::Go => "Go (Fiber)",
            Self::Java => "Java",
        }
    }
}

impl fmt::Display for System {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
