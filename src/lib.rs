/*!
 * schedsim
 * Offline CPU scheduling what-if calculator: runs seven policies over one
 * static workload and reports per-process waiting and turnaround times
 */

pub mod core;
pub mod sched;
pub mod workload;

// Re-exports
pub use crate::core::errors::WorkloadError;
pub use crate::core::types::{Pid, Priority, SignedTicks, Ticks};
pub use crate::sched::{Policy, PolicyReport, Simulator, TimingRow};
pub use crate::workload::{Process, Workload};
