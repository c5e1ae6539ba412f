/*!
 * Error Types
 * Centralized error handling with thiserror, miette, and serde support
 */

use crate::core::types::{Pid, Ticks};
use miette::Diagnostic;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Workload boundary errors with serialization support
///
/// All validation happens before any policy runs; the policy algorithms
/// themselves trust the workload they are handed.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Diagnostic)]
#[serde(tag = "error_type", content = "details", rename_all = "snake_case")]
pub enum WorkloadError {
    #[error("Process {pid}: {reason}")]
    #[diagnostic(
        code(workload::invalid_process_parameters),
        help("Burst time must be greater than zero.")
    )]
    InvalidProcessParameters { pid: Pid, reason: String },

    #[error("Invalid time quantum: {0}")]
    #[diagnostic(
        code(workload::invalid_quantum),
        help("Round-Robin and Multilevel Feedback never terminate with a zero quantum.")
    )]
    InvalidQuantum(Ticks),

    #[error("Workload contains no processes")]
    #[diagnostic(
        code(workload::empty),
        help("Provide at least one process descriptor.")
    )]
    Empty,

    #[error("Failed to parse workload: {0}")]
    #[diagnostic(
        code(workload::parse_failed),
        help("Expected a JSON document with a time_quantum field and a processes array.")
    )]
    ParseFailed(String),
}
