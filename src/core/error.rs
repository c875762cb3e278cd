//! Error types for the workflow core.

use thiserror::Error;

use super::session::WorkflowState;

/// Errors raised by workflow transitions.
///
/// Both variants are recoverable: the TUI surfaces them as status-bar
/// notices and leaves the session untouched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WorkflowError {
    /// The Hub was opened before a blueprint was approved.
    #[error("Hub is locked until a communication blueprint is approved. Run the AI Structure Wizard to continue.")]
    LockedResource,

    /// An operation was invoked from a state that does not permit it.
    ///
    /// Views only offer legal actions, so hitting this is a contract
    /// violation by the caller, not something a user can normally reach.
    #[error("cannot {action} from the {state} view")]
    InvalidTransition {
        /// Human-readable name of the attempted operation.
        action: &'static str,
        /// State the session was in when the operation was attempted.
        state: WorkflowState,
    },
}
