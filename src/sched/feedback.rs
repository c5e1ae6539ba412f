/*!
 * Multilevel Feedback Queue
 * Two levels, one quantum-sliced pass, single demotion path
 */

use crate::core::types::Ticks;
use crate::workload::Process;
use log::debug;
use std::collections::VecDeque;

/// Two-level feedback scheme: every process starts in the high FIFO queue
/// (input order) and gets at most one quantum there. A process that still
/// owes time is demoted to the low queue exactly once; after the high queue
/// drains, the low queue runs each survivor to completion atomically, in
/// demotion order, with no further slicing. There is no promotion.
pub(super) fn multilevel_feedback(processes: &mut [Process], quantum: Ticks) -> Ticks {
    let mut high: VecDeque<usize> = (0..processes.len()).collect();
    let mut low: VecDeque<usize> = VecDeque::new();
    let mut total: Ticks = 0;

    while let Some(idx) = high.pop_front() {
        let process = &mut processes[idx];

        if process.remaining > quantum {
            process.remaining -= quantum;
            total += quantum;
            low.push_back(idx);
        } else {
            total += process.remaining;
            process.record_completion(total);
            process.remaining = 0;
        }
    }

    debug!(
        "high pass done at tick {}: {} processes demoted",
        total,
        low.len()
    );

    while let Some(idx) = low.pop_front() {
        let process = &mut processes[idx];
        total += process.remaining;
        process.record_completion(total);
        process.remaining = 0;
    }

    total
}
