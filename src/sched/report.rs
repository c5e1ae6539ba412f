/*!
 * Policy Reports
 * Per-policy result rows and derived aggregates
 */

use super::policy::Policy;
use crate::core::types::{Pid, SignedTicks, Ticks};
use crate::workload::Process;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One result row: the derived times of a single process
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TimingRow {
    pub pid: Pid,
    pub waiting: SignedTicks,
    pub turnaround: SignedTicks,
}

/// The outcome of running one policy over the workload.
///
/// Rows appear in the order the policy left its collection, which is not
/// necessarily input order (Multilevel Queue in particular reorders).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PolicyReport {
    pub policy: String,
    pub rows: Vec<TimingRow>,
    pub avg_waiting: f64,
    pub avg_turnaround: f64,
    /// Final value of the policy's time counter (includes SRTF idle ticks)
    pub makespan: Ticks,
}

impl PolicyReport {
    pub(super) fn from_run(policy: Policy, processes: &[Process], makespan: Ticks) -> Self {
        let rows: Vec<TimingRow> = processes
            .iter()
            .map(|p| TimingRow {
                pid: p.pid,
                waiting: p.waiting,
                turnaround: p.turnaround,
            })
            .collect();

        let count = rows.len() as f64;
        let avg_waiting = rows.iter().map(|r| r.waiting as f64).sum::<f64>() / count;
        let avg_turnaround = rows.iter().map(|r| r.turnaround as f64).sum::<f64>() / count;

        Self {
            policy: policy.label().to_string(),
            rows,
            avg_waiting,
            avg_turnaround,
            makespan,
        }
    }
}

impl fmt::Display for PolicyReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} Scheduling Results:", self.policy)?;
        for row in &self.rows {
            writeln!(
                f,
                "Process {} - Waiting Time: {}, Turnaround Time: {}",
                row.pid, row.waiting, row.turnaround
            )?;
        }
        write!(
            f,
            "Average Waiting Time: {:.2}, Average Turnaround Time: {:.2}, Makespan: {}",
            self.avg_waiting, self.avg_turnaround, self.makespan
        )
    }
}
