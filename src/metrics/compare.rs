use std::fmt;

use super::System;

/// Which way a metric should move for a system to count as better.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Latency, error rate
    LowerIsBetter,
    /// Throughput, request volume
    HigherIsBetter,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Winner {
    System(System),
    /// One side measured zero, so there is nothing meaningful to compare.
    NotApplicable,
}

impl Winner {
    /// Table cell text: `🏆 Go`, `🏆 Java` or `N/A`.
    pub fn trophy_label(self) -> String {
        match self {
            Self::System(system) => format!("🏆 {system}"),
            Self::NotApplicable => "N/A".into(),
        }
    }
}

impl fmt::Display for Winner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::System(system) => write!(f, "{system}"),
            Self::NotApplicable => f.write_str("N/A"),
        }
    }
}

/// Ratio of the better value over the worse one.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Advantage {
    Factor(f64),
    NotApplicable,
}

impl fmt::Display for Advantage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Factor(ratio) => write!(f, "{ratio:.0}x"),
            Self::NotApplicable => f.write_str("N/A"),
        }
    }
}

/// Decide who wins one metric. A tie goes to Java: Go has to be strictly
/// better.
pub fn winner(go: f64, java: f64, direction: Direction) -> Winner {
    if go == 0.0 || java == 0.0 {
        return Winner::NotApplicable;
    }

    let go_better = match direction {
        Direction::LowerIsBetter => go < java,
        Direction::HigherIsBetter => go > java,
    };

    if go_better {
        Winner::System(System::Go)
    } else {
        Winner::System(System::Java)
    }
}

/// Larger ÷ smaller. Direction does not matter here: the factor describes
/// the gap, `winner` says who is on the good side of it.
pub fn advantage(go: f64, java: f64) -> Advantage {
    if go == 0.0 || java == 0.0 {
        return Advantage::NotApplicable;
    }
    Advantage::Factor(go.max(java) / go.min(java))
}
