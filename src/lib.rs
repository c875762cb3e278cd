//! # Huddle
//!
//! Terminal team workspace prototype - chat, structure wizard, and file hub
//! in your terminal.
//!
//! Huddle models the flow from an unstructured chat workspace to an
//! organized one: answer the AI Structure Wizard, review the recommended
//! communication blueprint, preview the changeset, and approve it to unlock
//! the consolidated File Hub.
//!
//! ## Quick Start
//!
//! ```bash
//! # Install
//! cargo install huddle
//!
//! # Open the workspace
//! huddle
//! ```

#![forbid(unsafe_code)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
// Allow common patterns that are intentional in this codebase
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_const_for_fn)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::option_if_let_else)]
#![allow(clippy::map_unwrap_or)]
#![allow(clippy::match_same_arms)]
#![allow(clippy::too_many_lines)]
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::struct_excessive_bools)]
#![allow(clippy::derivable_impls)]
#![allow(clippy::use_self)]

pub mod app;
pub mod core;
pub mod tui;

// Re-export commonly used types
pub use app::App;
pub use core::{
    Action, Config, Session, Snapshot, WizardAnswers, WorkflowError, WorkflowState,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application name
pub const APP_NAME: &str = "huddle";
