/*!
 * Core Types
 * Common types used across the simulator
 */

/// Process ID type
pub type Pid = u32;

/// Simulated time in abstract ticks
pub type Ticks = u64;

/// Signed tick count for derived times
///
/// Waiting time can go negative under the cumulative-counter semantics
/// (no idle-gap insertion), so derived times are signed.
pub type SignedTicks = i64;

/// Priority level (lower value = higher priority)
pub type Priority = i32;

/// Common result type for workload operations
pub type WorkloadResult<T> = Result<T, super::errors::WorkloadError>;
