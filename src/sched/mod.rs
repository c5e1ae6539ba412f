/*!
 * Scheduling Simulator
 * Runs each policy against a pristine clone of one workload
 */

use crate::core::types::WorkloadResult;
use crate::workload::Workload;
use log::info;

mod feedback;
mod nonpreemptive;
mod round_robin;
mod srtf;

pub mod policy;
pub mod report;

pub use policy::Policy;
pub use report::{PolicyReport, TimingRow};

/// What-if runner over a validated workload.
///
/// Every run clones the workload's process vector and resets its simulation
/// state, so each policy sees identical pristine input regardless of what
/// ran before it.
#[derive(Debug)]
pub struct Simulator {
    workload: Workload,
}

impl Simulator {
    /// Create a simulator; the workload is validated up front
    pub fn new(workload: Workload) -> WorkloadResult<Self> {
        workload.validate()?;
        Ok(Self { workload })
    }

    pub fn workload(&self) -> &Workload {
        &self.workload
    }

    /// Run a single policy over a pristine clone of the process set
    pub fn run(&self, policy: Policy) -> PolicyReport {
        let mut processes = self.workload.processes.clone();
        for process in &mut processes {
            process.reset();
        }

        let makespan = match policy {
            Policy::Fcfs => nonpreemptive::fcfs(&mut processes),
            Policy::Sjf => nonpreemptive::sjf(&mut processes),
            Policy::Priority => nonpreemptive::priority(&mut processes),
            Policy::RoundRobin { quantum } => round_robin::round_robin(&mut processes, quantum),
            Policy::Srtf => srtf::srtf(&mut processes),
            Policy::MultilevelQueue => nonpreemptive::multilevel_queue(&mut processes),
            Policy::MultilevelFeedback { quantum } => {
                feedback::multilevel_feedback(&mut processes, quantum)
            }
        };

        let report = PolicyReport::from_run(policy, &processes, makespan);
        info!(
            "{} complete: makespan {}, avg waiting {:.2}, avg turnaround {:.2}",
            policy, report.makespan, report.avg_waiting, report.avg_turnaround
        );
        report
    }

    /// Run every policy in the fixed registration order
    pub fn run_all(&self) -> Vec<PolicyReport> {
        Policy::all(self.workload.time_quantum)
            .into_iter()
            .map(|policy| self.run(policy))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::workload::Process;

    fn simulator(processes: Vec<Process>, quantum: u64) -> Simulator {
        Simulator::new(Workload {
            time_quantum: quantum,
            processes,
        })
        .unwrap()
    }

    /// The worked example: {id=1,burst=5,arrival=0}, {id=2,burst=3,arrival=1},
    /// {id=3,burst=8,arrival=2}, quantum 2.
    fn example() -> Simulator {
        simulator(
            vec![
                Process::new(1, 5, 0, 0),
                Process::new(2, 3, 1, 0),
                Process::new(3, 8, 2, 0),
            ],
            2,
        )
    }

    fn waits(report: &PolicyReport) -> Vec<(u32, i64)> {
        report.rows.iter().map(|r| (r.pid, r.waiting)).collect()
    }

    #[test]
    fn test_fcfs_example() {
        let report = example().run(Policy::Fcfs);
        assert_eq!(waits(&report), vec![(1, 0), (2, 4), (3, 6)]);
        assert_eq!(report.makespan, 16); // sum of bursts, no idle gaps
    }

    #[test]
    fn test_sjf_orders_by_burst_and_ignores_arrival() {
        let report = example().run(Policy::Sjf);
        // Order 2,1,3; process 2 starts at counter 0 but arrived at 1,
        // so its waiting time is negative under the no-idle-gap semantics.
        assert_eq!(waits(&report), vec![(2, -1), (1, 3), (3, 6)]);
    }

    #[test]
    fn test_priority_orders_by_value() {
        let sim = simulator(
            vec![
                Process::new(1, 4, 0, 3),
                Process::new(2, 2, 0, 1),
                Process::new(3, 6, 0, 2),
            ],
            2,
        );
        let report = sim.run(Policy::Priority);
        let pids: Vec<u32> = report.rows.iter().map(|r| r.pid).collect();
        assert_eq!(pids, vec![2, 3, 1]);
        assert_eq!(waits(&report), vec![(2, 0), (3, 2), (1, 8)]);
    }

    #[test]
    fn test_round_robin_example() {
        let report = example().run(Policy::RoundRobin { quantum: 2 });
        // Completions: p2 at tick 9, p1 at 12, p3 at 16.
        assert_eq!(waits(&report), vec![(1, 12), (2, 8), (3, 14)]);
        assert_eq!(report.makespan, 16);
    }

    #[test]
    fn test_srtf_example() {
        let report = example().run(Policy::Srtf);
        // p2 preempts p1 at tick 1 and finishes at 4; p1 resumes and
        // finishes at 8; p3 runs last and finishes at 16.
        assert_eq!(waits(&report), vec![(1, 8), (2, 3), (3, 14)]);
        assert_eq!(report.makespan, 16);
    }

    #[test]
    fn test_srtf_idles_until_first_arrival() {
        let sim = simulator(vec![Process::new(7, 2, 3, 0)], 2);
        let report = sim.run(Policy::Srtf);
        assert_eq!(waits(&report), vec![(7, 2)]);
        assert_eq!(report.makespan, 5); // 3 idle ticks + 2 run ticks
    }

    #[test]
    fn test_multilevel_queue_partitions_on_priority_one() {
        let sim = simulator(
            vec![
                Process::new(1, 4, 0, 2),
                Process::new(2, 3, 0, 1),
                Process::new(3, 2, 0, 1),
                Process::new(4, 5, 0, 3),
            ],
            2,
        );
        let report = sim.run(Policy::MultilevelQueue);
        // High class (priority 1) first in original order, then the rest.
        assert_eq!(waits(&report), vec![(2, 0), (3, 3), (1, 5), (4, 9)]);
    }

    #[test]
    fn test_multilevel_feedback_single_demotion() {
        let sim = simulator(
            vec![
                Process::new(1, 5, 0, 0),
                Process::new(2, 2, 0, 0),
                Process::new(3, 3, 0, 0),
            ],
            2,
        );
        let report = sim.run(Policy::MultilevelFeedback { quantum: 2 });
        // p2 completes in the high pass; p1 and p3 are demoted once and run
        // to completion atomically in demotion order.
        assert_eq!(waits(&report), vec![(1, 9), (2, 4), (3, 10)]);
        assert_eq!(report.makespan, 10);
    }

    #[test]
    fn test_runs_are_isolated() {
        let sim = example();
        let first = sim.run(Policy::RoundRobin { quantum: 2 });
        // A quantum-based run consumes `remaining` in its own clone only;
        // a later preemptive run must see pristine input.
        let srtf = sim.run(Policy::Srtf);
        let again = sim.run(Policy::RoundRobin { quantum: 2 });
        assert_eq!(first, again);
        assert_eq!(srtf, sim.run(Policy::Srtf));
    }

    #[test]
    fn test_workload_accessor_exposes_validated_input() {
        let sim = example();
        assert_eq!(sim.workload().time_quantum, 2);
        assert_eq!(sim.workload().processes.len(), 3);
    }

    #[test]
    fn test_run_all_covers_every_policy_in_order() {
        let reports = example().run_all();
        let labels: Vec<&str> = reports.iter().map(|r| r.policy.as_str()).collect();
        assert_eq!(
            labels,
            [
                "FCFS",
                "SJF",
                "Priority",
                "Round Robin",
                "SRTF",
                "Multilevel Queue",
                "Multilevel Feedback Queue"
            ]
        );
    }
}
