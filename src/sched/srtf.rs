/*!
 * Shortest-Remaining-Time-First
 * Preemptive unit-tick simulation
 */

use crate::core::types::Ticks;
use crate::workload::Process;
use log::debug;

/// SRTF: at every tick, run the eligible process with the least remaining
/// time for exactly one tick.
///
/// Eligible means `arrival <= now` and not complete. Ties go to the first
/// process encountered in collection order (the collection is sorted by
/// arrival up front, stable for equal arrivals). A tick with no eligible
/// process advances time without running anyone.
pub(super) fn srtf(processes: &mut [Process]) -> Ticks {
    processes.sort_by_key(|p| p.arrival);

    let mut now: Ticks = 0;
    let mut completed = 0;
    let mut idle_ticks: u64 = 0;

    while completed < processes.len() {
        let mut current: Option<usize> = None;
        for (i, process) in processes.iter().enumerate() {
            if process.arrival <= now && !process.is_complete() {
                let shorter = match current {
                    None => true,
                    Some(c) => process.remaining < processes[c].remaining,
                };
                if shorter {
                    current = Some(i);
                }
            }
        }

        match current {
            Some(i) => {
                let process = &mut processes[i];
                process.remaining -= 1;
                now += 1;
                if process.remaining == 0 {
                    process.record_completion(now);
                    completed += 1;
                }
            }
            None => {
                // Nobody has arrived yet
                now += 1;
                idle_ticks += 1;
            }
        }
    }

    debug!("srtf finished after {} ticks ({} idle)", now, idle_ticks);
    now
}
