//! Core types and functionality for Huddle.
//!
//! This module contains the workflow state machine and the seeded data it
//! drives: the session controller, wizard answers and step gating, the
//! blueprint generator, the changeset, and the workspace/Hub catalogs.

mod blueprint;
mod changeset;
mod config;
mod error;
mod hub;
mod session;
mod wizard;
mod workspace;

pub use blueprint::{
    generate, CoreChannel, Rationale, RecommendationSummary, Subgroup, Workstream,
    CORE_CHANNELS, NAMING_EXAMPLE, NAMING_PATTERN, RATIONALES, SUBGROUPS, WORKSTREAMS,
};
pub use changeset::{
    changes_of, summary_counts, ChangeEntry, ChangeKind, CurrentChannel, CHANGES,
    CURRENT_CHANNELS,
};
pub use config::{Config, CustomColorsConfig, UiConfig};
pub use error::WorkflowError;
pub use hub::{
    filter_files, linked_sources, total_files, AuditEntry, FileFilter, FileKind, HubFile,
    HubSource, HubTab, SourceStatus, TagRule, AUDIT_LOG, CHANNEL_FILTERS, DEDUPE_COLLAPSED,
    FILES, SOURCES, TAG_RULES,
};
pub use session::{Action, Session, Snapshot, WorkflowState};
pub use wizard::{
    can_advance, Activity, CommunitySize, ImportProvider, ModerationCapacity, WizardAnswers,
    WizardStep, CHANNEL_BUDGET_DEFAULT, CHANNEL_BUDGET_MAX, CHANNEL_BUDGET_MIN,
};
pub use workspace::{
    ChannelEntry, Committee, DirectMessage, Message, Thread, APPROVED_CHANNELS, BASE_CHANNELS,
    COMMITTEES, CURRENT_USER, DIRECT_MESSAGES, GENERAL_TOPIC, WORKSPACE_NAME,
    WORKSTREAM_CHANNELS,
};
