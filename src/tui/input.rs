//! Input handling for the TUI.
//!
//! Processes keyboard events and updates application state. Each workflow
//! view has its own handler; global shortcuts (Ctrl+C) are checked first.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::core::{HubTab, WizardStep, WorkflowState};
use crate::App;

/// Handle keyboard events.
pub fn handle_events(key: KeyEvent, app: &mut App) {
    // Windows terminals report both press and release events
    if key.kind != KeyEventKind::Press {
        return;
    }

    // Ctrl+C always quits
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        app.quit();
        return;
    }

    match app.state() {
        WorkflowState::Chat => handle_chat(key, app),
        WorkflowState::Wizard => handle_wizard(key, app),
        WorkflowState::Recommendation => handle_recommendation(key, app),
        WorkflowState::ChangeSet => handle_change_set(key, app),
        WorkflowState::Hub => handle_hub(key, app),
    }
}

/// Handle input in the chat view.
fn handle_chat(key: KeyEvent, app: &mut App) {
    match key.code {
        // Open the structure wizard
        KeyCode::Char('w') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.open_wizard();
        }

        // Open the Hub (shows the lock notice while unapproved)
        KeyCode::Char('h') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.open_hub();
        }

        // Send the compose box
        KeyCode::Enter => {
            app.send_message();
        }

        // Compose-box editing
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.clear_status();
            app.enter_char(c);
        }
        KeyCode::Backspace => {
            app.delete_char();
        }
        KeyCode::Left => {
            app.move_cursor_left();
        }
        KeyCode::Right => {
            app.move_cursor_right();
        }

        // Esc clears the status notice first, then quits
        KeyCode::Esc => {
            if app.status_message.is_some() {
                app.clear_status();
            } else {
                app.quit();
            }
        }

        _ => {}
    }
}

/// Handle input in the wizard dialog.
fn handle_wizard(key: KeyEvent, app: &mut App) {
    match key.code {
        // Cancel: close the wizard, discard answers
        KeyCode::Esc => {
            app.cancel_wizard();
        }

        // Continue (or Generate Recommendations from the review step)
        KeyCode::Enter => {
            app.wizard_continue();
        }

        // Back one step (no-op on the first step)
        KeyCode::Backspace => {
            app.wizard_back_step();
        }

        // Field focus
        KeyCode::Down | KeyCode::Tab => {
            app.wizard_focus_next();
        }
        KeyCode::Up | KeyCode::BackTab => {
            app.wizard_focus_prev();
        }

        // Cycle the focused field's value
        KeyCode::Right => {
            app.wizard_adjust(true);
        }
        KeyCode::Left => {
            app.wizard_adjust(false);
        }

        // Toggle the highlighted checkbox
        KeyCode::Char(' ') => {
            app.wizard_toggle();
        }

        // j/k move the activity cursor on the checklist row
        KeyCode::Char('j') if app.wizard.step == WizardStep::Basics && app.wizard.focus == 1 => {
            app.wizard_adjust(true);
        }
        KeyCode::Char('k') if app.wizard.step == WizardStep::Basics && app.wizard.focus == 1 => {
            app.wizard_adjust(false);
        }

        _ => {}
    }
}

/// Handle input on the recommendation view.
fn handle_recommendation(key: KeyEvent, app: &mut App) {
    match key.code {
        // Back to chat, summary retained
        KeyCode::Esc => {
            app.go_back();
        }

        // Approve the blueprint
        KeyCode::Enter => {
            app.approve_blueprint();
        }

        // Toggle the rationale panel
        KeyCode::Char('r') => {
            app.toggle_rationale();
        }

        // Scroll the blueprint body
        KeyCode::Down | KeyCode::Char('j') => {
            app.reco_scroll = app.reco_scroll.saturating_add(1);
        }
        KeyCode::Up | KeyCode::Char('k') => {
            app.reco_scroll = app.reco_scroll.saturating_sub(1);
        }

        _ => {}
    }
}

/// Handle input on the changeset preview.
fn handle_change_set(key: KeyEvent, app: &mut App) {
    match key.code {
        // Back to the recommendation view
        KeyCode::Esc => {
            app.go_back();
        }

        // Apply the changes, unlocking the Hub
        KeyCode::Enter => {
            app.apply_change_set();
        }

        KeyCode::Down | KeyCode::Char('j') => {
            app.changeset_scroll = app.changeset_scroll.saturating_add(1);
        }
        KeyCode::Up | KeyCode::Char('k') => {
            app.changeset_scroll = app.changeset_scroll.saturating_sub(1);
        }

        _ => {}
    }
}

/// Handle input on the Hub dashboard.
fn handle_hub(key: KeyEvent, app: &mut App) {
    match key.code {
        // Close the detail panel first, then back to chat
        KeyCode::Esc => {
            if app.hub.show_detail {
                app.hub.show_detail = false;
            } else {
                app.go_back();
            }
        }

        // Tab switching
        KeyCode::Tab => {
            app.hub_next_tab();
        }
        KeyCode::BackTab => {
            app.hub_prev_tab();
        }

        // Files tab: search, filters, selection, detail
        KeyCode::Char(c)
            if app.hub.tab == HubTab::Files && !key.modifiers.contains(KeyModifiers::CONTROL) =>
        {
            app.hub_search_char(c);
        }
        KeyCode::Backspace if app.hub.tab == HubTab::Files => {
            app.hub_search_backspace();
        }
        KeyCode::Right if app.hub.tab == HubTab::Files => {
            if key.modifiers.contains(KeyModifiers::SHIFT) {
                app.hub_cycle_channel(true);
            } else {
                app.hub_cycle_source(true);
            }
        }
        KeyCode::Left if app.hub.tab == HubTab::Files => {
            if key.modifiers.contains(KeyModifiers::SHIFT) {
                app.hub_cycle_channel(false);
            } else {
                app.hub_cycle_source(false);
            }
        }
        KeyCode::Down if app.hub.tab == HubTab::Files => {
            app.hub_select_next();
        }
        KeyCode::Up if app.hub.tab == HubTab::Files => {
            app.hub_select_prev();
        }
        KeyCode::Enter if app.hub.tab == HubTab::Files => {
            app.hub_toggle_detail();
        }

        // Rules tab: toggle the hash-dedupe rule
        KeyCode::Char('d') if app.hub.tab == HubTab::Rules => {
            app.hub_toggle_dedupe();
        }

        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEvent;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    #[test]
    fn test_ctrl_c_quits_everywhere() {
        let mut app = App::new_test();
        handle_events(ctrl('c'), &mut app);
        assert!(app.should_quit);
    }

    #[test]
    fn test_typing_goes_to_compose() {
        let mut app = App::new_test();
        handle_events(press(KeyCode::Char('h')), &mut app);
        handle_events(press(KeyCode::Char('i')), &mut app);
        assert_eq!(app.compose, "hi");
    }

    #[test]
    fn test_ctrl_w_opens_wizard() {
        let mut app = App::new_test();
        handle_events(ctrl('w'), &mut app);
        assert_eq!(app.state(), WorkflowState::Wizard);
    }

    #[test]
    fn test_ctrl_h_shows_lock_notice() {
        let mut app = App::new_test();
        handle_events(ctrl('h'), &mut app);
        assert_eq!(app.state(), WorkflowState::Chat);
        assert!(app.status_message.is_some());
    }

    #[test]
    fn test_esc_cancels_wizard() {
        let mut app = App::new_test();
        handle_events(ctrl('w'), &mut app);
        handle_events(press(KeyCode::Esc), &mut app);
        assert_eq!(app.state(), WorkflowState::Chat);
    }

    #[test]
    fn test_space_toggles_activity() {
        let mut app = App::new_test();
        handle_events(ctrl('w'), &mut app);
        handle_events(press(KeyCode::Down), &mut app); // focus the activities row
        handle_events(press(KeyCode::Char(' ')), &mut app);
        assert_eq!(app.session.answers().core_activities.len(), 1);
    }

    #[test]
    fn test_hub_tab_switching() {
        let mut app = App::new_test();
        // Force an approved session so the Hub opens.
        let _ = app.session.open_wizard();
        app.session.answers_mut().community_size =
            Some(crate::core::CommunitySize::From25To100);
        app.session.answers_mut().toggle_activity(crate::core::Activity::Projects);
        app.session.answers_mut().moderation_capacity =
            Some(crate::core::ModerationCapacity::Medium);
        let answers = app.session.answers().clone();
        let _ = app.session.complete_wizard(answers);
        let _ = app.session.approve_blueprint();
        let _ = app.session.apply_change_set();
        app.open_hub();
        assert_eq!(app.state(), WorkflowState::Hub);

        handle_events(press(KeyCode::Tab), &mut app);
        assert_eq!(app.hub.tab, HubTab::Files);
        handle_events(press(KeyCode::BackTab), &mut app);
        assert_eq!(app.hub.tab, HubTab::Overview);
    }
}
