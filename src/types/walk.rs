//! Walk vocabulary: directions, stop conditions, and resumption results.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Direction of travel along the graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    /// Toward predecessors: symbols are prepended.
    Left,
    /// Toward successors: symbols are appended.
    Right,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Left => write!(f, "left"),
            Direction::Right => write!(f, "right"),
        }
    }
}

/// Why a walk stopped.
///
/// Every walk terminates with exactly one of these; there is no "still
/// going" state because walks run to completion before returning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StopReason {
    /// No graph-present neighbor in the direction of travel.
    DeadEnd,
    /// Two or more unvisited graph-present neighbors; continuing would
    /// mean guessing a branch.
    Fork,
    /// Graph-present neighbors exist but all were already visited, as at
    /// the close of a circular contig or a palindromic self-loop.
    Cycle,
}

impl fmt::Display for StopReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StopReason::DeadEnd => write!(f, "dead_end"),
            StopReason::Fork => write!(f, "fork"),
            StopReason::Cycle => write!(f, "cycle"),
        }
    }
}

/// Outcome of a resumption walk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Extension {
    /// Newly accepted symbols in sequence order: for a rightward walk the
    /// extended contig is `window + appended`, for a leftward walk it is
    /// `appended + window`.
    pub appended: String,
    /// Why the walk stopped.
    pub stop: StopReason,
}

impl Extension {
    /// Number of steps the walk advanced.
    pub fn steps(&self) -> usize {
        self.appended.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direction_display() {
        assert_eq!(Direction::Left.to_string(), "left");
        assert_eq!(Direction::Right.to_string(), "right");
    }

    #[test]
    fn test_stop_reason_serde_uses_snake_case() {
        let json = serde_json::to_string(&StopReason::DeadEnd).unwrap();
        assert_eq!(json, "\"dead_end\"");
    }

    #[test]
    fn test_extension_steps_counts_symbols() {
        let ext = Extension {
            appended: "ACGT".to_string(),
            stop: StopReason::Fork,
        };
        assert_eq!(ext.steps(), 4);
    }
}
