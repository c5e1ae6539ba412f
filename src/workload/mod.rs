/*!
 * Workload Module
 * Input model: process records, the workload document, and boundary validation
 */

mod validation;

pub mod types;

pub use types::{Process, Workload};

use crate::core::errors::WorkloadError;
use crate::core::types::{Ticks, WorkloadResult};
use log::info;

impl Workload {
    /// Build a workload from parts, validating at the boundary
    pub fn new(processes: Vec<Process>, time_quantum: Ticks) -> WorkloadResult<Self> {
        let workload = Self {
            time_quantum,
            processes,
        };
        workload.validate()?;
        Ok(workload)
    }

    /// Parse and validate a JSON workload document
    pub fn from_json(input: &str) -> WorkloadResult<Self> {
        let mut workload: Self =
            serde_json::from_str(input).map_err(|e| WorkloadError::ParseFailed(e.to_string()))?;
        workload.validate()?;
        // The document carries inputs only; start simulation state pristine.
        for process in &mut workload.processes {
            process.reset();
        }
        info!(
            "Workload loaded: {} processes, time quantum {}",
            workload.processes.len(),
            workload.time_quantum
        );
        Ok(workload)
    }

    /// Fail fast on malformed input before any policy runs
    pub fn validate(&self) -> WorkloadResult<()> {
        validation::validate_workload(self)
    }
}
