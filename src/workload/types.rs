/*!
 * Workload Types
 * Process record and the workload document
 */

use crate::core::types::{Pid, Priority, SignedTicks, Ticks};
use serde::{Deserialize, Serialize};

/// A single process in the simulated workload
///
/// `pid` is an opaque external identifier; uniqueness is the caller's
/// responsibility. `burst` and `arrival` are immutable inputs, the
/// remaining fields are simulation state mutated by a policy run.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Process {
    pub pid: Pid,
    pub burst: Ticks,
    pub arrival: Ticks,
    #[serde(default)]
    pub priority: Priority,

    /// Execution time still owed; reaches 0 exactly at completion
    #[serde(skip)]
    pub remaining: Ticks,
    /// Derived output, set once completion time is known
    #[serde(skip)]
    pub waiting: SignedTicks,
    /// Derived output, `waiting + burst` by definition
    #[serde(skip)]
    pub turnaround: SignedTicks,
}

impl Process {
    /// Create a process with pristine simulation state
    pub fn new(pid: Pid, burst: Ticks, arrival: Ticks, priority: Priority) -> Self {
        Self {
            pid,
            burst,
            arrival,
            priority,
            remaining: burst,
            waiting: 0,
            turnaround: 0,
        }
    }

    /// Restore pristine simulation state before a policy run
    pub(crate) fn reset(&mut self) {
        self.remaining = self.burst;
        self.waiting = 0;
        self.turnaround = 0;
    }

    /// Record derived times from the completion time base
    ///
    /// `waiting = base - arrival`, `turnaround = waiting + burst`. Does not
    /// touch `remaining`; quantum-based policies zero it themselves.
    pub(crate) fn record_completion(&mut self, base: Ticks) {
        self.waiting = base as SignedTicks - self.arrival as SignedTicks;
        self.turnaround = self.waiting + self.burst as SignedTicks;
    }

    pub fn is_complete(&self) -> bool {
        self.remaining == 0
    }
}

/// A full simulation input: the process set plus the time quantum shared
/// by Round-Robin and Multilevel Feedback
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Workload {
    pub time_quantum: Ticks,
    pub processes: Vec<Process>,
}
