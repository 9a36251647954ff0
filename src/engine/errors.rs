//! Boundary signals from stepping
//!
//! These are not faults: the timeline is finite and stepping past either end
//! is rejected with no state change. Callers gate their controls on
//! `is_at_start` / `is_at_end` and treat an `Err` as "nothing happened".

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum StepError {
    /// No earlier state to return to
    #[error("already at the start of the traversal")]
    AtStart,

    /// The last step has already been applied
    #[error("already at the end of the traversal")]
    AtEnd,
}
