/*!
 * Scheduling Policies
 * The closed set of policy variants and their string forms
 */

use crate::core::types::Ticks;
use std::fmt;

/// Scheduling policy selector
///
/// Quantum-based variants carry their own time quantum, so a constructed
/// `Policy` is self-contained and the algorithms take no extra parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Policy {
    /// First-Come-First-Served, non-preemptive
    Fcfs,
    /// Shortest-Job-First, non-preemptive
    Sjf,
    /// Priority scheduling (lower value first), non-preemptive
    Priority,
    /// Round-Robin with fixed time quantum
    RoundRobin { quantum: Ticks },
    /// Shortest-Remaining-Time-First, preemptive at tick granularity
    Srtf,
    /// Two-class multilevel queue keyed on priority == 1
    MultilevelQueue,
    /// Two-level feedback queue with a single demotion path
    MultilevelFeedback { quantum: Ticks },
}

impl Policy {
    /// Registration list of all policies, in the fixed run order
    pub fn all(quantum: Ticks) -> [Policy; 7] {
        [
            Policy::Fcfs,
            Policy::Sjf,
            Policy::Priority,
            Policy::RoundRobin { quantum },
            Policy::Srtf,
            Policy::MultilevelQueue,
            Policy::MultilevelFeedback { quantum },
        ]
    }

    /// Parse from string representation; quantum-based variants bind the
    /// supplied quantum
    pub fn parse(s: &str, quantum: Ticks) -> Result<Self, String> {
        match s.to_lowercase().as_str() {
            "fcfs" => Ok(Self::Fcfs),
            "sjf" => Ok(Self::Sjf),
            "priority" | "prio" => Ok(Self::Priority),
            "round_robin" | "roundrobin" | "rr" => Ok(Self::RoundRobin { quantum }),
            "srtf" => Ok(Self::Srtf),
            "multilevel_queue" | "mlq" => Ok(Self::MultilevelQueue),
            "multilevel_feedback" | "mlfq" => Ok(Self::MultilevelFeedback { quantum }),
            _ => Err(format!(
                "Invalid policy '{}'. Valid: fcfs, sjf, priority, round_robin, srtf, \
                 multilevel_queue, multilevel_feedback",
                s
            )),
        }
    }

    /// Human-readable label used in reports
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Fcfs => "FCFS",
            Self::Sjf => "SJF",
            Self::Priority => "Priority",
            Self::RoundRobin { .. } => "Round Robin",
            Self::Srtf => "SRTF",
            Self::MultilevelQueue => "Multilevel Queue",
            Self::MultilevelFeedback { .. } => "Multilevel Feedback Queue",
        }
    }
}

impl fmt::Display for Policy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
