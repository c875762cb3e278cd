//! The workflow session: single source of truth for the app's state machine.
//!
//! One [`Session`] owns the current [`WorkflowState`], the accumulated
//! wizard answers, the generated recommendation and the permanent approval
//! flag. Every transition goes through [`Session::dispatch`], which holds
//! the complete legal-transition table; the named operations are thin
//! wrappers over it.
//!
//! The state graph is a star around `Chat`: one linear sub-chain
//! (`Wizard -> Recommendation -> ChangeSet`) and one locked spoke (`Hub`,
//! reachable only after a changeset has been applied).

use serde::Serialize;

use super::blueprint::{self, RecommendationSummary};
use super::error::WorkflowError;
use super::wizard::WizardAnswers;

/// Which view is active. Exactly one at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum WorkflowState {
    Chat,
    Wizard,
    Recommendation,
    ChangeSet,
    Hub,
}

impl WorkflowState {
    /// Lowercase name used in error messages and logs.
    pub fn name(self) -> &'static str {
        match self {
            Self::Chat => "chat",
            Self::Wizard => "wizard",
            Self::Recommendation => "recommendation",
            Self::ChangeSet => "changeset",
            Self::Hub => "hub",
        }
    }

    /// The state's single-step back edge, if it has one.
    pub fn back_edge(self) -> Option<Self> {
        match self {
            Self::Chat => None,
            Self::Wizard | Self::Recommendation | Self::Hub => Some(Self::Chat),
            Self::ChangeSet => Some(Self::Recommendation),
        }
    }
}

impl std::fmt::Display for WorkflowState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// A user-triggered transition request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Open the structure wizard from chat.
    OpenWizard,
    /// Finish the wizard with the accumulated answers.
    CompleteWizard(WizardAnswers),
    /// Abandon the wizard, discarding its answers.
    CancelWizard,
    /// Accept the blueprint and move to the changeset preview.
    ApproveBlueprint,
    /// Apply the changeset, permanently unlocking the Hub.
    ApplyChangeSet,
    /// Open the Hub dashboard (lock-checked).
    OpenHub,
    /// Navigate back along a defined back edge.
    BackTo(WorkflowState),
}

impl Action {
    /// Human-readable name used in `InvalidTransition` errors.
    fn name(&self) -> &'static str {
        match self {
            Self::OpenWizard => "open the wizard",
            Self::CompleteWizard(_) => "complete the wizard",
            Self::CancelWizard => "cancel the wizard",
            Self::ApproveBlueprint => "approve the blueprint",
            Self::ApplyChangeSet => "apply the changeset",
            Self::OpenHub => "open the Hub",
            Self::BackTo(_) => "go back",
        }
    }
}

/// Read-only view of the session handed to renderers.
#[derive(Debug, Clone, Serialize)]
pub struct Snapshot {
    pub state: WorkflowState,
    pub answers: WizardAnswers,
    pub summary: Option<RecommendationSummary>,
    pub approved: bool,
}

/// One user's workflow session.
///
/// Lives for the duration of the running UI; nothing survives a restart.
#[derive(Debug, Clone)]
pub struct Session {
    state: WorkflowState,
    answers: WizardAnswers,
    summary: Option<RecommendationSummary>,
    approved: bool,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    /// A fresh session in the chat view with nothing approved.
    pub fn new() -> Self {
        Self {
            state: WorkflowState::Chat,
            answers: WizardAnswers::default(),
            summary: None,
            approved: false,
        }
    }

    pub fn state(&self) -> WorkflowState {
        self.state
    }

    pub fn answers(&self) -> &WizardAnswers {
        &self.answers
    }

    /// Mutable access for the wizard view while it accumulates answers.
    pub fn answers_mut(&mut self) -> &mut WizardAnswers {
        &mut self.answers
    }

    pub fn summary(&self) -> Option<&RecommendationSummary> {
        self.summary.as_ref()
    }

    /// Whether a blueprint has been approved this session. Never resets.
    pub fn approved(&self) -> bool {
        self.approved
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            state: self.state,
            answers: self.answers.clone(),
            summary: self.summary,
            approved: self.approved,
        }
    }

    /// Apply a transition, or fail leaving the session untouched.
    ///
    /// This is the only place transitions happen; the table below is the
    /// complete state machine.
    pub fn dispatch(&mut self, action: Action) -> Result<(), WorkflowError> {
        use WorkflowState as S;

        match (self.state, action) {
            (S::Chat, Action::OpenWizard) => {
                self.answers = WizardAnswers::default();
                self.enter(S::Wizard);
            }
            (S::Wizard, Action::CompleteWizard(answers)) => {
                // Overwrites any summary from an earlier run.
                self.summary = Some(blueprint::generate(&answers));
                self.answers = answers;
                self.enter(S::Recommendation);
            }
            (S::Wizard, Action::CancelWizard) => {
                self.answers = WizardAnswers::default();
                self.enter(S::Chat);
            }
            (S::Recommendation, Action::ApproveBlueprint) => {
                // Two-phase approval: the permanent flag waits for the
                // changeset to be applied.
                self.enter(S::ChangeSet);
            }
            (S::ChangeSet, Action::ApplyChangeSet) => {
                // Idempotent on the flag: re-applying still navigates.
                self.approved = true;
                self.enter(S::Chat);
            }
            (S::Chat, Action::OpenHub) => {
                if !self.approved {
                    return Err(WorkflowError::LockedResource);
                }
                self.enter(S::Hub);
            }
            (state, Action::BackTo(target)) => {
                if state.back_edge() != Some(target) {
                    return Err(WorkflowError::InvalidTransition { action: "go back", state });
                }
                self.enter(target);
            }
            (state, action) => {
                return Err(WorkflowError::InvalidTransition { action: action.name(), state });
            }
        }

        Ok(())
    }

    fn enter(&mut self, state: WorkflowState) {
        tracing::debug!(from = %self.state, to = %state, "workflow transition");
        self.state = state;
    }

    // --- Named operations (spec'd surface over dispatch) ---

    /// Chat -> Wizard, resetting answers to defaults.
    pub fn open_wizard(&mut self) -> Result<(), WorkflowError> {
        self.dispatch(Action::OpenWizard)
    }

    /// Wizard -> Recommendation, generating and storing the summary.
    pub fn complete_wizard(&mut self, answers: WizardAnswers) -> Result<(), WorkflowError> {
        self.dispatch(Action::CompleteWizard(answers))
    }

    /// Wizard -> Chat, discarding all accumulated answers.
    pub fn cancel_wizard(&mut self) -> Result<(), WorkflowError> {
        self.dispatch(Action::CancelWizard)
    }

    /// Recommendation -> ChangeSet.
    pub fn approve_blueprint(&mut self) -> Result<(), WorkflowError> {
        self.dispatch(Action::ApproveBlueprint)
    }

    /// ChangeSet -> Chat, permanently setting the approval flag.
    pub fn apply_change_set(&mut self) -> Result<(), WorkflowError> {
        self.dispatch(Action::ApplyChangeSet)
    }

    /// Chat -> Hub, or `LockedResource` while unapproved.
    pub fn open_hub(&mut self) -> Result<(), WorkflowError> {
        self.dispatch(Action::OpenHub)
    }

    /// Navigate to `target` along the current state's back edge.
    pub fn back_to(&mut self, target: WorkflowState) -> Result<(), WorkflowError> {
        self.dispatch(Action::BackTo(target))
    }

    /// Navigate back along the current state's back edge, if it has one.
    pub fn back(&mut self) -> Result<(), WorkflowError> {
        match self.state.back_edge() {
            Some(target) => self.dispatch(Action::BackTo(target)),
            None => {
                Err(WorkflowError::InvalidTransition { action: "go back", state: self.state })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::wizard::{Activity, CommunitySize, ModerationCapacity};

    fn filled_answers() -> WizardAnswers {
        let mut answers = WizardAnswers::default();
        answers.community_size = Some(CommunitySize::From25To100);
        answers.toggle_activity(Activity::Projects);
        answers.moderation_capacity = Some(ModerationCapacity::Medium);
        answers
    }

    #[test]
    fn test_starts_in_chat_unapproved() {
        let session = Session::new();
        assert_eq!(session.state(), WorkflowState::Chat);
        assert!(!session.approved());
        assert!(session.summary().is_none());
    }

    #[test]
    fn test_wizard_to_recommendation() {
        let mut session = Session::new();
        session.open_wizard().unwrap();
        assert_eq!(session.state(), WorkflowState::Wizard);

        session.complete_wizard(filled_answers()).unwrap();
        assert_eq!(session.state(), WorkflowState::Recommendation);
        assert!(session.summary().is_some());
    }

    #[test]
    fn test_cancel_discards_answers() {
        let mut session = Session::new();
        session.open_wizard().unwrap();
        session.answers_mut().toggle_activity(Activity::Research);
        session.answers_mut().set_channel_budget(17);

        session.cancel_wizard().unwrap();
        assert_eq!(session.state(), WorkflowState::Chat);

        session.open_wizard().unwrap();
        assert_eq!(session.answers(), &WizardAnswers::default());
    }

    #[test]
    fn test_full_approval_flow() {
        let mut session = Session::new();
        session.open_wizard().unwrap();
        session.complete_wizard(filled_answers()).unwrap();
        session.approve_blueprint().unwrap();
        assert_eq!(session.state(), WorkflowState::ChangeSet);
        assert!(!session.approved(), "flag only flips when the changeset is applied");

        session.apply_change_set().unwrap();
        assert_eq!(session.state(), WorkflowState::Chat);
        assert!(session.approved());
    }

    #[test]
    fn test_hub_locked_until_approved() {
        let mut session = Session::new();
        assert_eq!(session.open_hub(), Err(WorkflowError::LockedResource));
        assert_eq!(session.state(), WorkflowState::Chat, "state unchanged on lock failure");
    }

    #[test]
    fn test_hub_unlocks_after_approval() {
        let mut session = Session::new();
        session.open_wizard().unwrap();
        session.complete_wizard(filled_answers()).unwrap();
        session.approve_blueprint().unwrap();
        session.apply_change_set().unwrap();

        session.open_hub().unwrap();
        assert_eq!(session.state(), WorkflowState::Hub);

        session.back_to(WorkflowState::Chat).unwrap();
        assert_eq!(session.state(), WorkflowState::Chat);
        assert!(session.approved(), "approval never resets");
    }

    #[test]
    fn test_illegal_actions_leave_session_unchanged() {
        let mut session = Session::new();
        let before = session.snapshot();

        let illegal = [
            Action::CompleteWizard(WizardAnswers::default()),
            Action::CancelWizard,
            Action::ApproveBlueprint,
            Action::ApplyChangeSet,
            Action::BackTo(WorkflowState::Hub),
        ];
        for action in illegal {
            let err = session.dispatch(action).unwrap_err();
            assert!(matches!(err, WorkflowError::InvalidTransition { .. }));
            assert_eq!(session.state(), before.state);
            assert_eq!(session.approved(), before.approved);
        }
    }

    #[test]
    fn test_back_edges() {
        let mut session = Session::new();
        session.open_wizard().unwrap();
        session.back().unwrap();
        assert_eq!(session.state(), WorkflowState::Chat);

        // ChangeSet backs into Recommendation, not Chat.
        session.open_wizard().unwrap();
        session.complete_wizard(filled_answers()).unwrap();
        session.approve_blueprint().unwrap();
        assert_eq!(
            session.back_to(WorkflowState::Chat),
            Err(WorkflowError::InvalidTransition {
                action: "go back",
                state: WorkflowState::ChangeSet
            })
        );
        session.back().unwrap();
        assert_eq!(session.state(), WorkflowState::Recommendation);
    }

    #[test]
    fn test_back_from_chat_is_invalid() {
        let mut session = Session::new();
        assert!(matches!(
            session.back(),
            Err(WorkflowError::InvalidTransition { state: WorkflowState::Chat, .. })
        ));
    }

    #[test]
    fn test_open_hub_from_non_chat_is_invalid() {
        let mut session = Session::new();
        session.open_wizard().unwrap();
        assert!(matches!(
            session.open_hub(),
            Err(WorkflowError::InvalidTransition { state: WorkflowState::Wizard, .. })
        ));
    }

    #[test]
    fn test_apply_change_set_idempotent_on_flag() {
        let mut session = Session::new();
        session.open_wizard().unwrap();
        session.complete_wizard(filled_answers()).unwrap();
        session.approve_blueprint().unwrap();
        session.apply_change_set().unwrap();
        assert!(session.approved());

        // Run the pipeline again; the flag stays true throughout.
        session.open_wizard().unwrap();
        session.complete_wizard(filled_answers()).unwrap();
        assert!(session.approved());
        session.approve_blueprint().unwrap();
        session.apply_change_set().unwrap();
        assert!(session.approved());
    }

    #[test]
    fn test_completing_again_overwrites_summary() {
        let mut session = Session::new();
        session.open_wizard().unwrap();
        session.complete_wizard(filled_answers()).unwrap();
        let first = *session.summary().unwrap();

        session.back_to(WorkflowState::Chat).unwrap();
        session.open_wizard().unwrap();
        session.complete_wizard(filled_answers()).unwrap();
        assert_eq!(*session.summary().unwrap(), first);
    }

    #[test]
    fn test_snapshot_serializes() {
        let session = Session::new();
        let json = serde_json::to_value(session.snapshot()).unwrap();
        assert_eq!(json["state"], "chat");
        assert_eq!(json["approved"], false);
        assert!(json["summary"].is_null());
    }
}
