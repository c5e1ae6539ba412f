/*!
 * Workload Validation
 * Boundary checks performed once, before any policy runs
 */

use super::types::Workload;
use crate::core::errors::WorkloadError;
use crate::core::types::WorkloadResult;

pub(super) fn validate_workload(workload: &Workload) -> WorkloadResult<()> {
    if workload.processes.is_empty() {
        return Err(WorkloadError::Empty);
    }

    if workload.time_quantum == 0 {
        return Err(WorkloadError::InvalidQuantum(workload.time_quantum));
    }

    for process in &workload.processes {
        if process.burst == 0 {
            return Err(WorkloadError::InvalidProcessParameters {
                pid: process.pid,
                reason: "burst time must be greater than zero".to_string(),
            });
        }
    }

    Ok(())
}
