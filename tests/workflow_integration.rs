//! Workflow Integration Tests
//!
//! Drives the session state machine end-to-end through the public API,
//! covering the full wizard-to-blueprint-to-changeset path and the Hub
//! lock/unlock behavior.

use huddle::core::{
    can_advance, generate, Action, Activity, CommunitySize, ModerationCapacity, Session,
    WizardAnswers, WizardStep, WorkflowError, WorkflowState,
};

fn filled_answers() -> WizardAnswers {
    let mut answers = WizardAnswers::default();
    answers.community_size = Some(CommunitySize::From25To100);
    answers.toggle_activity(Activity::Projects);
    answers.toggle_activity(Activity::Events);
    answers.moderation_capacity = Some(ModerationCapacity::Medium);
    answers
}

/// Run a session up to an approved workspace.
fn approved_session() -> Session {
    let mut session = Session::new();
    session.open_wizard().unwrap();
    session.complete_wizard(filled_answers()).unwrap();
    session.approve_blueprint().unwrap();
    session.apply_change_set().unwrap();
    session
}

#[test]
fn test_full_approval_flow() {
    let mut session = Session::new();
    assert_eq!(session.state(), WorkflowState::Chat);
    assert!(!session.approved());

    session.open_wizard().unwrap();
    assert_eq!(session.state(), WorkflowState::Wizard);

    session.complete_wizard(filled_answers()).unwrap();
    assert_eq!(session.state(), WorkflowState::Recommendation);
    let summary = session.summary().copied().unwrap();
    assert_eq!(summary.channels, 9);
    assert_eq!(summary.subgroups, 3);

    session.approve_blueprint().unwrap();
    assert_eq!(session.state(), WorkflowState::ChangeSet);
    assert!(!session.approved(), "approval lands when the changeset is applied");

    session.apply_change_set().unwrap();
    assert_eq!(session.state(), WorkflowState::Chat);
    assert!(session.approved());

    session.open_hub().unwrap();
    assert_eq!(session.state(), WorkflowState::Hub);
}

#[test]
fn test_hub_locked_until_approved() {
    let mut session = Session::new();
    let err = session.open_hub().unwrap_err();
    assert!(matches!(err, WorkflowError::LockedResource));
    assert!(err.to_string().contains("AI Structure Wizard"));
    assert_eq!(session.state(), WorkflowState::Chat);
}

#[test]
fn test_approval_is_permanent() {
    let mut session = approved_session();

    // Re-running the wizard and bailing out never clears the flag.
    session.open_hub().unwrap();
    session.back().unwrap();
    session.open_wizard().unwrap();
    session.cancel_wizard().unwrap();
    assert!(session.approved());
    session.open_hub().unwrap();
    assert_eq!(session.state(), WorkflowState::Hub);
}

#[test]
fn test_cancel_discards_answers() {
    let mut session = Session::new();
    session.open_wizard().unwrap();
    session.answers_mut().community_size = Some(CommunitySize::Over300);
    session.cancel_wizard().unwrap();
    assert_eq!(session.state(), WorkflowState::Chat);
    assert!(session.answers().community_size.is_none());
}

#[test]
fn test_back_edges() {
    let mut session = Session::new();
    session.open_wizard().unwrap();
    session.complete_wizard(filled_answers()).unwrap();

    // Recommendation backs out to chat, summary retained.
    session.back().unwrap();
    assert_eq!(session.state(), WorkflowState::Chat);
    assert!(session.summary().is_some());

    // Changeset backs out to the recommendation view.
    session.open_wizard().unwrap();
    session.complete_wizard(filled_answers()).unwrap();
    session.approve_blueprint().unwrap();
    session.back().unwrap();
    assert_eq!(session.state(), WorkflowState::Recommendation);
}

#[test]
fn test_chat_has_no_back_edge() {
    let mut session = Session::new();
    let err = session.back().unwrap_err();
    assert!(matches!(err, WorkflowError::InvalidTransition { .. }));
}

#[test]
fn test_illegal_dispatch_leaves_session_unchanged() {
    let mut session = Session::new();
    session.open_wizard().unwrap();
    session.answers_mut().community_size = Some(CommunitySize::Under25);

    // Approving from the wizard is illegal.
    let err = session.dispatch(Action::ApproveBlueprint).unwrap_err();
    assert!(matches!(err, WorkflowError::InvalidTransition { .. }));
    assert_eq!(session.state(), WorkflowState::Wizard);
    assert_eq!(session.answers().community_size, Some(CommunitySize::Under25));
    assert!(session.summary().is_none());
}

#[test]
fn test_open_hub_outside_chat_is_invalid() {
    let mut session = Session::new();
    session.open_wizard().unwrap();
    let err = session.open_hub().unwrap_err();
    assert!(matches!(err, WorkflowError::InvalidTransition { .. }));
    assert_eq!(session.state(), WorkflowState::Wizard);
}

#[test]
fn test_apply_change_set_is_idempotent_across_runs() {
    let mut session = approved_session();

    session.open_wizard().unwrap();
    session.complete_wizard(filled_answers()).unwrap();
    session.approve_blueprint().unwrap();
    session.apply_change_set().unwrap();
    assert!(session.approved());
}

#[test]
fn test_rerun_overwrites_summary() {
    let mut session = Session::new();
    session.open_wizard().unwrap();
    session.complete_wizard(filled_answers()).unwrap();
    let first = session.summary().copied().unwrap();

    session.back().unwrap();
    session.open_wizard().unwrap();
    session.complete_wizard(filled_answers()).unwrap();
    let second = session.summary().copied().unwrap();

    // The generator is constant, so reruns produce the same summary.
    assert_eq!(first, second);
    assert_eq!(second, generate(&filled_answers()));
}

#[test]
fn test_step_gating() {
    let empty = WizardAnswers::default();
    assert!(!can_advance(WizardStep::Basics, &empty));
    assert!(can_advance(WizardStep::Import, &empty));
    assert!(can_advance(WizardStep::Review, &empty));

    let filled = filled_answers();
    assert!(can_advance(WizardStep::Basics, &filled));
}

#[test]
fn test_snapshot_serializes() {
    let session = approved_session();
    let json = serde_json::to_value(session.snapshot()).unwrap();
    assert_eq!(json["state"], "chat");
    assert_eq!(json["approved"], true);
    assert_eq!(json["summary"]["channels"], 9);
}
