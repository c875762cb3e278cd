//! Application state and lifecycle management.
//!
//! This module contains the `App` struct that wraps the workflow
//! [`Session`] with per-view UI state (compose box, wizard form focus,
//! Hub filters) and translates user intents into session dispatches.

use crate::core::{
    can_advance, linked_sources, Activity, CommunitySize, Config, FileFilter, HubTab,
    ImportProvider, ModerationCapacity, Session, Thread, WizardStep, WorkflowError,
    WorkflowState, CHANNEL_FILTERS,
};
use crate::tui::Theme;

/// Main application state.
///
/// The `App` struct is the central state container for Huddle. It manages:
/// - The workflow session (which view is active, wizard answers, approval)
/// - The chat thread and compose box
/// - Per-view UI state (wizard focus, Hub filters, scroll offsets)
/// - Application lifecycle (running/quit)
#[derive(Debug)]
pub struct App {
    /// The workflow session: view state machine plus accumulated data
    pub session: Session,

    /// The #general message thread
    pub thread: Thread,

    /// Current compose-box input
    pub compose: String,

    /// Cursor position in the compose box
    pub cursor_position: usize,

    /// Wizard form state (step, field focus)
    pub wizard: WizardForm,

    /// Hub dashboard view state (tab, filters, toggles)
    pub hub: HubView,

    /// Whether the rationale panel is open on the recommendation view
    pub show_rationale: bool,

    /// Scroll offset for the recommendation blueprint body
    pub reco_scroll: usize,

    /// Scroll offset for the changeset preview
    pub changeset_scroll: usize,

    /// Whether the application should quit
    pub should_quit: bool,

    /// Status message to display (if any)
    pub status_message: Option<String>,

    /// Application configuration
    pub config: Config,

    /// Current UI theme
    pub theme: Theme,
}

/// UI state for the wizard dialog.
///
/// The answers themselves live in the session; this only tracks where the
/// user is in the form.
#[derive(Debug, Clone)]
pub struct WizardForm {
    /// Current step
    pub step: WizardStep,
    /// Focused field index within the step
    pub focus: usize,
    /// Highlighted activity in the step-1 checklist
    pub activity_cursor: usize,
}

impl Default for WizardForm {
    fn default() -> Self {
        Self { step: WizardStep::Basics, focus: 0, activity_cursor: 0 }
    }
}

impl WizardForm {
    /// Number of focusable fields on a step.
    pub fn field_count(step: WizardStep) -> usize {
        match step {
            // size, activities, moderation, channel budget
            WizardStep::Basics => 4,
            // import toggle, provider
            WizardStep::Import => 2,
            // read-only review
            WizardStep::Review => 0,
        }
    }
}

/// UI state for the Hub dashboard.
#[derive(Debug, Clone)]
pub struct HubView {
    /// Active tab
    pub tab: HubTab,
    /// Search query on the Files tab
    pub query: String,
    /// Source filter index: 0 = all, then linked sources in order
    pub source_idx: usize,
    /// Channel filter index: 0 = all, then `CHANNEL_FILTERS` in order
    pub channel_idx: usize,
    /// Highlighted row in the filtered file list
    pub selected: usize,
    /// Whether the file detail panel is open
    pub show_detail: bool,
    /// Hash-only dedupe rule toggle
    pub dedupe_enabled: bool,
    /// Similarity dedupe toggle (disabled in the UI, kept for the switch)
    pub similarity_enabled: bool,
}

impl Default for HubView {
    fn default() -> Self {
        Self {
            tab: HubTab::Overview,
            query: String::new(),
            source_idx: 0,
            channel_idx: 0,
            selected: 0,
            show_detail: false,
            dedupe_enabled: true,
            similarity_enabled: false,
        }
    }
}

impl HubView {
    /// The file filter implied by the current toolbar state.
    pub fn file_filter(&self) -> FileFilter {
        let sources = linked_sources();
        FileFilter {
            query: self.query.clone(),
            source: self.source_idx.checked_sub(1).and_then(|i| sources.get(i)).map(|s| s.name),
            channel: self.channel_idx.checked_sub(1).and_then(|i| CHANNEL_FILTERS.get(i)).copied(),
        }
    }

    /// Label for the source filter dropdown.
    pub fn source_label(&self) -> &'static str {
        self.source_idx
            .checked_sub(1)
            .and_then(|i| linked_sources().get(i).map(|s| s.name))
            .unwrap_or("All Sources")
    }

    /// Label for the channel filter dropdown.
    pub fn channel_label(&self) -> &'static str {
        self.channel_idx
            .checked_sub(1)
            .and_then(|i| CHANNEL_FILTERS.get(i).copied())
            .unwrap_or("All Channels")
    }

    fn cycle_source(&mut self, forward: bool) {
        let len = linked_sources().len() + 1;
        self.source_idx = if forward {
            (self.source_idx + 1) % len
        } else {
            (self.source_idx + len - 1) % len
        };
        self.selected = 0;
    }

    fn cycle_channel(&mut self, forward: bool) {
        let len = CHANNEL_FILTERS.len() + 1;
        self.channel_idx = if forward {
            (self.channel_idx + 1) % len
        } else {
            (self.channel_idx + len - 1) % len
        };
        self.selected = 0;
    }
}

impl App {
    /// Create a new application instance.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be parsed.
    pub fn new() -> anyhow::Result<Self> {
        let config = Config::load()?;
        let theme = Self::resolve_theme(&config);
        let show_rationale = config.ui.show_rationale;

        Ok(Self {
            session: Session::new(),
            thread: Thread::seeded(),
            compose: String::new(),
            cursor_position: 0,
            wizard: WizardForm::default(),
            hub: HubView::default(),
            show_rationale,
            reco_scroll: 0,
            changeset_scroll: 0,
            should_quit: false,
            status_message: None,
            config,
            theme,
        })
    }

    /// Resolve theme from configuration.
    fn resolve_theme(config: &Config) -> Theme {
        let mut theme = Theme::by_name(&config.ui.theme).unwrap_or_default();
        if let Some(ref custom) = config.ui.custom_colors {
            theme.apply_overrides(custom);
        }
        theme
    }

    /// Create a new application instance for testing (with minimal setup).
    #[cfg(test)]
    pub fn new_test() -> Self {
        Self {
            session: Session::new(),
            thread: Thread::seeded(),
            compose: String::new(),
            cursor_position: 0,
            wizard: WizardForm::default(),
            hub: HubView::default(),
            show_rationale: true,
            reco_scroll: 0,
            changeset_scroll: 0,
            should_quit: false,
            status_message: None,
            config: Config::default(),
            theme: Theme::default(),
        }
    }

    /// Which view is active.
    pub fn state(&self) -> WorkflowState {
        self.session.state()
    }

    // --- Compose box editing ---

    // `cursor_position` is a byte offset into `compose`, always on a char
    // boundary.

    /// Handle a character input (typing in the compose box).
    pub fn enter_char(&mut self, c: char) {
        self.compose.insert(self.cursor_position, c);
        self.cursor_position += c.len_utf8();
    }

    /// Delete the character before the cursor (backspace).
    pub fn delete_char(&mut self) {
        if let Some(c) = self.compose[..self.cursor_position].chars().next_back() {
            self.cursor_position -= c.len_utf8();
            self.compose.remove(self.cursor_position);
        }
    }

    /// Move cursor left one character.
    pub fn move_cursor_left(&mut self) {
        if let Some(c) = self.compose[..self.cursor_position].chars().next_back() {
            self.cursor_position -= c.len_utf8();
        }
    }

    /// Move cursor right one character.
    pub fn move_cursor_right(&mut self) {
        if let Some(c) = self.compose[self.cursor_position..].chars().next() {
            self.cursor_position += c.len_utf8();
        }
    }

    /// Cursor position in characters, for on-screen placement.
    pub fn cursor_column(&self) -> usize {
        self.compose[..self.cursor_position].chars().count()
    }

    /// Send the compose box contents to the thread.
    pub fn send_message(&mut self) {
        self.thread.send(&self.compose.clone());
        self.compose.clear();
        self.cursor_position = 0;
    }

    // --- Workflow transitions (dispatched through the session) ---

    /// Open the structure wizard from chat.
    pub fn open_wizard(&mut self) {
        if self.session.open_wizard().is_ok() {
            self.wizard = WizardForm::default();
            self.clear_status();
        }
    }

    /// Cancel the wizard, discarding answers.
    pub fn cancel_wizard(&mut self) {
        let _ = self.session.cancel_wizard();
    }

    /// Advance the wizard, or generate recommendations from the last step.
    ///
    /// A no-op while the current step's required fields are incomplete: the
    /// Continue button is disabled, not rejected.
    pub fn wizard_continue(&mut self) {
        if !can_advance(self.wizard.step, self.session.answers()) {
            return;
        }
        match self.wizard.step.next() {
            Some(next) => {
                self.wizard.step = next;
                self.wizard.focus = 0;
            }
            None => {
                let answers = self.session.answers().clone();
                if self.session.complete_wizard(answers).is_ok() {
                    self.show_rationale = self.config.ui.show_rationale;
                    self.reco_scroll = 0;
                }
            }
        }
    }

    /// Step back inside the wizard. Never validated, never clears answers.
    pub fn wizard_back_step(&mut self) {
        if let Some(prev) = self.wizard.step.prev() {
            self.wizard.step = prev;
            self.wizard.focus = 0;
        }
    }

    /// Whether the Continue button is enabled for the current step.
    pub fn wizard_can_continue(&self) -> bool {
        can_advance(self.wizard.step, self.session.answers())
    }

    /// Move field focus down within the step.
    pub fn wizard_focus_next(&mut self) {
        let count = WizardForm::field_count(self.wizard.step);
        if count > 0 {
            self.wizard.focus = (self.wizard.focus + 1).min(count - 1);
        }
    }

    /// Move field focus up within the step.
    pub fn wizard_focus_prev(&mut self) {
        self.wizard.focus = self.wizard.focus.saturating_sub(1);
    }

    /// Adjust the focused field left/right (cycle options, nudge slider).
    pub fn wizard_adjust(&mut self, forward: bool) {
        match (self.wizard.step, self.wizard.focus) {
            (WizardStep::Basics, 0) => {
                let answers = self.session.answers_mut();
                answers.community_size =
                    Some(cycle(&CommunitySize::ALL, answers.community_size, forward));
            }
            (WizardStep::Basics, 1) => {
                let len = Activity::ALL.len();
                self.wizard.activity_cursor = if forward {
                    (self.wizard.activity_cursor + 1) % len
                } else {
                    (self.wizard.activity_cursor + len - 1) % len
                };
            }
            (WizardStep::Basics, 2) => {
                let answers = self.session.answers_mut();
                answers.moderation_capacity =
                    Some(cycle(&ModerationCapacity::ALL, answers.moderation_capacity, forward));
            }
            (WizardStep::Basics, 3) => {
                let answers = self.session.answers_mut();
                let budget = answers.channel_budget;
                answers.set_channel_budget(if forward {
                    budget.saturating_add(1)
                } else {
                    budget.saturating_sub(1)
                });
            }
            (WizardStep::Import, 0) => {
                self.session.answers_mut().import_workspace ^= true;
            }
            (WizardStep::Import, 1) => {
                let answers = self.session.answers_mut();
                if answers.import_workspace {
                    answers.import_provider =
                        Some(cycle(&ImportProvider::ALL, answers.import_provider, forward));
                }
            }
            _ => {}
        }
    }

    /// Toggle the focused checkbox (activity or import switch).
    pub fn wizard_toggle(&mut self) {
        match (self.wizard.step, self.wizard.focus) {
            (WizardStep::Basics, 1) => {
                let activity = Activity::ALL[self.wizard.activity_cursor];
                self.session.answers_mut().toggle_activity(activity);
            }
            (WizardStep::Import, 0) => {
                self.session.answers_mut().import_workspace ^= true;
            }
            _ => {}
        }
    }

    /// Approve the blueprint, moving to the changeset preview.
    pub fn approve_blueprint(&mut self) {
        if self.session.approve_blueprint().is_ok() {
            self.changeset_scroll = 0;
        }
    }

    /// Apply the changeset, permanently unlocking the Hub.
    pub fn apply_change_set(&mut self) {
        if self.session.apply_change_set().is_ok() {
            self.set_status("Blueprint approved. Hub is now unlocked.");
        }
    }

    /// Open the Hub, surfacing the lock notice if it is still locked.
    pub fn open_hub(&mut self) {
        match self.session.open_hub() {
            Ok(()) => self.clear_status(),
            Err(err @ WorkflowError::LockedResource) => self.set_status(err.to_string()),
            Err(err @ WorkflowError::InvalidTransition { .. }) => {
                // Unreachable through the UI; surfaced rather than ignored.
                self.set_status(err.to_string());
            }
        }
    }

    /// Navigate back along the current view's back edge.
    pub fn go_back(&mut self) {
        let _ = self.session.back();
    }

    /// Toggle the rationale side panel on the recommendation view.
    pub fn toggle_rationale(&mut self) {
        self.show_rationale = !self.show_rationale;
    }

    // --- Hub view ---

    /// Switch Hub tabs.
    pub fn hub_next_tab(&mut self) {
        self.hub.tab = self.hub.tab.next();
        self.hub.show_detail = false;
    }

    pub fn hub_prev_tab(&mut self) {
        self.hub.tab = self.hub.tab.prev();
        self.hub.show_detail = false;
    }

    /// Cycle the Files source filter.
    pub fn hub_cycle_source(&mut self, forward: bool) {
        self.hub.cycle_source(forward);
    }

    /// Cycle the Files channel filter.
    pub fn hub_cycle_channel(&mut self, forward: bool) {
        self.hub.cycle_channel(forward);
    }

    /// Type into the Files search box.
    pub fn hub_search_char(&mut self, c: char) {
        self.hub.query.push(c);
        self.hub.selected = 0;
    }

    pub fn hub_search_backspace(&mut self) {
        self.hub.query.pop();
        self.hub.selected = 0;
    }

    /// Move the file selection, clamped to the filtered list.
    pub fn hub_select_next(&mut self) {
        let count = crate::core::filter_files(&self.hub.file_filter()).len();
        if count > 0 {
            self.hub.selected = (self.hub.selected + 1).min(count - 1);
        }
    }

    pub fn hub_select_prev(&mut self) {
        self.hub.selected = self.hub.selected.saturating_sub(1);
    }

    /// Open or close the detail panel for the highlighted file.
    pub fn hub_toggle_detail(&mut self) {
        let count = crate::core::filter_files(&self.hub.file_filter()).len();
        if count > 0 {
            self.hub.show_detail = !self.hub.show_detail;
        }
    }

    /// Toggle the hash-dedupe rule (Rules tab).
    pub fn hub_toggle_dedupe(&mut self) {
        self.hub.dedupe_enabled = !self.hub.dedupe_enabled;
    }

    // --- Status & lifecycle ---

    /// Set a status message to display.
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    /// Clear the status message.
    pub fn clear_status(&mut self) {
        self.status_message = None;
    }

    /// Request the application to quit.
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Perform periodic updates (called on tick).
    pub fn tick(&mut self) {}
}

/// Cycle an option through a fixed catalog; `None` starts at the ends.
fn cycle<T: Copy + PartialEq>(all: &[T], current: Option<T>, forward: bool) -> T {
    let len = all.len();
    match current.and_then(|v| all.iter().position(|x| *x == v)) {
        Some(idx) if forward => all[(idx + 1) % len],
        Some(idx) => all[(idx + len - 1) % len],
        None if forward => all[0],
        None => all[len - 1],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::WorkflowState;

    fn fill_basics(app: &mut App) {
        let answers = app.session.answers_mut();
        answers.community_size = Some(CommunitySize::From25To100);
        answers.toggle_activity(Activity::Projects);
        answers.moderation_capacity = Some(ModerationCapacity::Medium);
    }

    #[test]
    fn test_app_creation() {
        let app = App::new_test();
        assert_eq!(app.state(), WorkflowState::Chat);
        assert!(app.compose.is_empty());
        assert!(!app.should_quit);
    }

    #[test]
    fn test_compose_and_send() {
        let mut app = App::new_test();
        for c in "hello team".chars() {
            app.enter_char(c);
        }
        assert_eq!(app.compose, "hello team");

        let before = app.thread.messages().len();
        app.send_message();
        assert_eq!(app.thread.messages().len(), before + 1);
        assert!(app.compose.is_empty());
        assert_eq!(app.cursor_position, 0);
    }

    #[test]
    fn test_compose_handles_multibyte_input() {
        let mut app = App::new_test();
        app.enter_char('é');
        app.enter_char('a');
        assert_eq!(app.compose, "éa");

        app.delete_char();
        app.delete_char();
        assert!(app.compose.is_empty());
        assert_eq!(app.cursor_position, 0);
    }

    #[test]
    fn test_compose_cursor_moves_by_characters() {
        let mut app = App::new_test();
        for c in "café".chars() {
            app.enter_char(c);
        }
        assert_eq!(app.cursor_column(), 4);

        app.move_cursor_left();
        app.move_cursor_left();
        assert_eq!(app.cursor_column(), 2);

        // Inserting mid-string lands between 'a' and 'f'.
        app.enter_char('ü');
        assert_eq!(app.compose, "caüfé");

        app.move_cursor_right();
        app.move_cursor_right();
        assert_eq!(app.cursor_column(), 5);
        // Already at the end; a further move is a no-op.
        app.move_cursor_right();
        assert_eq!(app.cursor_column(), 5);
    }

    #[test]
    fn test_wizard_continue_blocked_until_basics() {
        let mut app = App::new_test();
        app.open_wizard();
        assert!(!app.wizard_can_continue());

        app.wizard_continue();
        assert_eq!(app.wizard.step, WizardStep::Basics, "continue is a no-op while gated");

        fill_basics(&mut app);
        assert!(app.wizard_can_continue());
        app.wizard_continue();
        assert_eq!(app.wizard.step, WizardStep::Import);
    }

    #[test]
    fn test_wizard_full_run() {
        let mut app = App::new_test();
        app.open_wizard();
        fill_basics(&mut app);
        app.wizard_continue();
        app.wizard_continue();
        assert_eq!(app.wizard.step, WizardStep::Review);
        app.wizard_continue();
        assert_eq!(app.state(), WorkflowState::Recommendation);
        assert!(app.session.summary().is_some());
    }

    #[test]
    fn test_wizard_back_never_clears() {
        let mut app = App::new_test();
        app.open_wizard();
        fill_basics(&mut app);
        app.wizard_continue();
        app.wizard_back_step();
        assert_eq!(app.wizard.step, WizardStep::Basics);
        assert!(app.session.answers().basics_complete());
    }

    #[test]
    fn test_wizard_adjust_cycles_size() {
        let mut app = App::new_test();
        app.open_wizard();
        app.wizard.focus = 0;
        app.wizard_adjust(true);
        assert_eq!(app.session.answers().community_size, Some(CommunitySize::Under25));
        app.wizard_adjust(true);
        assert_eq!(app.session.answers().community_size, Some(CommunitySize::From25To100));
        app.wizard_adjust(false);
        assert_eq!(app.session.answers().community_size, Some(CommunitySize::Under25));
    }

    #[test]
    fn test_wizard_toggle_activity() {
        let mut app = App::new_test();
        app.open_wizard();
        app.wizard.focus = 1;
        app.wizard_toggle();
        assert!(app.session.answers().core_activities.contains(&Activity::Projects));
        app.wizard_toggle();
        assert!(app.session.answers().core_activities.is_empty());
    }

    #[test]
    fn test_budget_nudge_clamped() {
        let mut app = App::new_test();
        app.open_wizard();
        app.wizard.focus = 3;
        for _ in 0..30 {
            app.wizard_adjust(true);
        }
        assert_eq!(app.session.answers().channel_budget, 20);
        for _ in 0..30 {
            app.wizard_adjust(false);
        }
        assert_eq!(app.session.answers().channel_budget, 4);
    }

    #[test]
    fn test_locked_hub_sets_status() {
        let mut app = App::new_test();
        app.open_hub();
        assert_eq!(app.state(), WorkflowState::Chat);
        assert!(app.status_message.as_deref().unwrap_or_default().contains("Hub is locked"));
    }

    #[test]
    fn test_apply_change_set_status() {
        let mut app = App::new_test();
        app.open_wizard();
        fill_basics(&mut app);
        app.wizard_continue();
        app.wizard_continue();
        app.wizard_continue();
        app.approve_blueprint();
        app.apply_change_set();
        assert_eq!(app.state(), WorkflowState::Chat);
        assert!(app.session.approved());
        assert!(app
            .status_message
            .as_deref()
            .unwrap_or_default()
            .contains("Hub is now unlocked"));

        app.open_hub();
        assert_eq!(app.state(), WorkflowState::Hub);
    }

    #[test]
    fn test_hub_filter_cycling() {
        let mut app = App::new_test();
        assert_eq!(app.hub.source_label(), "All Sources");
        app.hub_cycle_source(true);
        assert_eq!(app.hub.source_label(), "Google Drive");
        app.hub_cycle_source(false);
        assert_eq!(app.hub.source_label(), "All Sources");

        app.hub_cycle_channel(true);
        assert_eq!(app.hub.channel_label(), "workstreams");
    }

    #[test]
    fn test_hub_search_resets_selection() {
        let mut app = App::new_test();
        app.hub_select_next();
        assert_eq!(app.hub.selected, 1);
        app.hub_search_char('x');
        assert_eq!(app.hub.selected, 0);
    }

    #[test]
    fn test_cycle_helper() {
        assert_eq!(cycle(&[1, 2, 3], None, true), 1);
        assert_eq!(cycle(&[1, 2, 3], None, false), 3);
        assert_eq!(cycle(&[1, 2, 3], Some(3), true), 1);
        assert_eq!(cycle(&[1, 2, 3], Some(1), false), 3);
    }
}
