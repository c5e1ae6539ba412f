/*!
 * Round-Robin
 * Quantum-sliced FIFO dispatch over an index queue
 */

use crate::core::types::Ticks;
use crate::workload::Process;
use log::debug;
use std::collections::VecDeque;

/// Round-Robin with a fixed time quantum.
///
/// Every process is assumed present at time 0 and enters the ready queue in
/// input order. The queue holds indices into the process vector, never
/// references. An unfinished process is charged exactly one quantum per pass;
/// the final dispatch is charged its remaining time and records completion
/// from the post-advance counter.
pub(super) fn round_robin(processes: &mut [Process], quantum: Ticks) -> Ticks {
    let mut queue: VecDeque<usize> = (0..processes.len()).collect();
    let mut total: Ticks = 0;
    let mut dispatches: u64 = 0;

    while let Some(idx) = queue.pop_front() {
        let process = &mut processes[idx];
        dispatches += 1;

        if process.remaining > quantum {
            process.remaining -= quantum;
            total += quantum;
            queue.push_back(idx);
        } else {
            total += process.remaining;
            process.record_completion(total);
            process.remaining = 0;
        }
    }

    debug!(
        "round robin finished: {} dispatches over {} ticks (quantum {})",
        dispatches, total, quantum
    );
    total
}
