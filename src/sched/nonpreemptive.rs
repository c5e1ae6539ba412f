/*!
 * Non-Preemptive Policies
 * FCFS, SJF, Priority, and Multilevel Queue over a shared cumulative counter
 */

use crate::core::types::Ticks;
use crate::workload::Process;

/// Run processes to completion in their current order.
///
/// The counter starts at 0 and never inserts idle time: each process has
/// its times recorded from the counter value before its burst is charged.
/// A process that arrives after the running total therefore gets a negative
/// waiting time; that is the documented semantics, not an error.
fn run_in_order(processes: &mut [Process]) -> Ticks {
    let mut total: Ticks = 0;
    for process in processes.iter_mut() {
        process.record_completion(total);
        total += process.burst;
    }
    total
}

/// First-Come-First-Served: ascending arrival, stable for equal arrivals
pub(super) fn fcfs(processes: &mut [Process]) -> Ticks {
    processes.sort_by_key(|p| p.arrival);
    run_in_order(processes)
}

/// Shortest-Job-First: ascending burst, stable for equal bursts.
///
/// Arrival time is not an eligibility gate once the order is fixed; this
/// deviates from the textbook definition on purpose.
pub(super) fn sjf(processes: &mut [Process]) -> Ticks {
    processes.sort_by_key(|p| p.burst);
    run_in_order(processes)
}

/// Priority: ascending priority value, stable for ties. Arrival is ignored,
/// same deviation as SJF.
pub(super) fn priority(processes: &mut [Process]) -> Ticks {
    processes.sort_by_key(|p| p.priority);
    run_in_order(processes)
}

/// Multilevel Queue: binary partition on `priority == 1`.
///
/// The high class runs first FCFS-style, the low class continues the same
/// counter. The collection is reordered high-then-low, original relative
/// order kept within each class, and the report follows that order.
pub(super) fn multilevel_queue(processes: &mut Vec<Process>) -> Ticks {
    let (high, low): (Vec<Process>, Vec<Process>) =
        processes.drain(..).partition(|p| p.priority == 1);

    processes.extend(high);
    processes.extend(low);
    run_in_order(processes)
}
