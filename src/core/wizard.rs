//! Wizard answers and per-step admission control.
//!
//! The wizard collects `WizardAnswers` over three steps. Step gating is
//! advisory: the view consults [`can_advance`] before offering Continue,
//! so an incomplete step is never submitted in the first place.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Community size bracket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CommunitySize {
    #[serde(rename = "<25")]
    Under25,
    #[serde(rename = "25-100")]
    From25To100,
    #[serde(rename = "100-300")]
    From100To300,
    #[serde(rename = "300+")]
    Over300,
}

impl CommunitySize {
    /// All brackets in display order.
    pub const ALL: [Self; 4] =
        [Self::Under25, Self::From25To100, Self::From100To300, Self::Over300];

    /// Display label, matching the selector options.
    pub fn label(self) -> &'static str {
        match self {
            Self::Under25 => "<25",
            Self::From25To100 => "25-100",
            Self::From100To300 => "100-300",
            Self::Over300 => "300+",
        }
    }
}

/// Core activity the community runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Activity {
    Projects,
    Events,
    Recruiting,
    Support,
    Research,
}

impl Activity {
    /// The fixed activity catalog in display order.
    pub const ALL: [Self; 5] =
        [Self::Projects, Self::Events, Self::Recruiting, Self::Support, Self::Research];

    pub fn label(self) -> &'static str {
        match self {
            Self::Projects => "Projects",
            Self::Events => "Events",
            Self::Recruiting => "Recruiting",
            Self::Support => "Support",
            Self::Research => "Research",
        }
    }
}

/// How much moderation capacity the team has.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModerationCapacity {
    Low,
    Medium,
    High,
}

impl ModerationCapacity {
    pub const ALL: [Self; 3] = [Self::Low, Self::Medium, Self::High];

    pub fn label(self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
        }
    }
}

/// Workspace import provider, meaningful only when import is enabled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ImportProvider {
    Slack,
    Discord,
}

impl ImportProvider {
    pub const ALL: [Self; 2] = [Self::Slack, Self::Discord];

    pub fn label(self) -> &'static str {
        match self {
            Self::Slack => "Slack",
            Self::Discord => "Discord",
        }
    }
}

/// Lower bound of the channel budget slider.
pub const CHANNEL_BUDGET_MIN: u8 = 4;
/// Upper bound of the channel budget slider.
pub const CHANNEL_BUDGET_MAX: u8 = 20;
/// Slider default.
pub const CHANNEL_BUDGET_DEFAULT: u8 = 10;

/// Answers accumulated across the wizard steps.
///
/// Created fresh each time the wizard opens and discarded on cancel.
/// Frozen into the recommendation input when the wizard completes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WizardAnswers {
    /// Community size bracket, unset until chosen.
    pub community_size: Option<CommunitySize>,
    /// Selected core activities. A set: no duplicates, order irrelevant.
    pub core_activities: BTreeSet<Activity>,
    /// Moderation capacity, unset until chosen.
    pub moderation_capacity: Option<ModerationCapacity>,
    /// Channel budget, clamped to `[4, 20]`.
    pub channel_budget: u8,
    /// Whether to import the current workspace (read-only).
    pub import_workspace: bool,
    /// Import provider, meaningful only if `import_workspace` is true.
    pub import_provider: Option<ImportProvider>,
}

impl Default for WizardAnswers {
    fn default() -> Self {
        Self {
            community_size: None,
            core_activities: BTreeSet::new(),
            moderation_capacity: None,
            channel_budget: CHANNEL_BUDGET_DEFAULT,
            import_workspace: false,
            import_provider: None,
        }
    }
}

impl WizardAnswers {
    /// Toggle an activity on or off.
    pub fn toggle_activity(&mut self, activity: Activity) {
        if !self.core_activities.remove(&activity) {
            self.core_activities.insert(activity);
        }
    }

    /// Set the channel budget, clamped to the slider range.
    pub fn set_channel_budget(&mut self, budget: u8) {
        self.channel_budget = budget.clamp(CHANNEL_BUDGET_MIN, CHANNEL_BUDGET_MAX);
    }

    /// Whether every required step-1 field has been filled in.
    pub fn basics_complete(&self) -> bool {
        self.community_size.is_some()
            && !self.core_activities.is_empty()
            && self.moderation_capacity.is_some()
    }
}

/// The three wizard steps, in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum WizardStep {
    /// Size, activities, moderation, channel budget.
    Basics,
    /// Optional workspace import.
    Import,
    /// Read-only summary before generating.
    Review,
}

impl WizardStep {
    /// Total number of steps, for the progress indicator.
    pub const COUNT: usize = 3;

    /// 1-based step index for display ("Step 2 of 3").
    pub fn index(self) -> usize {
        match self {
            Self::Basics => 1,
            Self::Import => 2,
            Self::Review => 3,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Self::Basics => "Community Basics",
            Self::Import => "Import Current Workspace",
            Self::Review => "Review Your Settings",
        }
    }

    /// The next step, or `None` from the final step.
    pub fn next(self) -> Option<Self> {
        match self {
            Self::Basics => Some(Self::Import),
            Self::Import => Some(Self::Review),
            Self::Review => None,
        }
    }

    /// The previous step, or `None` from the first step.
    pub fn prev(self) -> Option<Self> {
        match self {
            Self::Basics => None,
            Self::Import => Some(Self::Basics),
            Self::Review => Some(Self::Import),
        }
    }
}

/// Whether the user may leave `step` going forward.
///
/// Only the first step has required fields; import is optional and review
/// always allows generation. Backward navigation is never validated.
pub fn can_advance(step: WizardStep, answers: &WizardAnswers) -> bool {
    match step {
        WizardStep::Basics => answers.basics_complete(),
        WizardStep::Import | WizardStep::Review => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete_answers() -> WizardAnswers {
        let mut answers = WizardAnswers::default();
        answers.community_size = Some(CommunitySize::From25To100);
        answers.toggle_activity(Activity::Projects);
        answers.moderation_capacity = Some(ModerationCapacity::Medium);
        answers
    }

    #[test]
    fn test_defaults() {
        let answers = WizardAnswers::default();
        assert_eq!(answers.channel_budget, 10);
        assert!(answers.core_activities.is_empty());
        assert!(!answers.import_workspace);
        assert!(answers.community_size.is_none());
        assert!(answers.import_provider.is_none());
    }

    #[test]
    fn test_step_one_requires_all_fields() {
        let mut answers = WizardAnswers::default();
        assert!(!can_advance(WizardStep::Basics, &answers));

        answers.community_size = Some(CommunitySize::Under25);
        assert!(!can_advance(WizardStep::Basics, &answers));

        answers.toggle_activity(Activity::Events);
        assert!(!can_advance(WizardStep::Basics, &answers));

        answers.moderation_capacity = Some(ModerationCapacity::High);
        assert!(can_advance(WizardStep::Basics, &answers));
    }

    #[test]
    fn test_empty_activities_blocks_step_one() {
        let mut answers = complete_answers();
        // Toggling the only activity off must re-lock the step.
        answers.toggle_activity(Activity::Projects);
        assert!(answers.core_activities.is_empty());
        assert!(!can_advance(WizardStep::Basics, &answers));
    }

    #[test]
    fn test_later_steps_always_advance() {
        let answers = WizardAnswers::default();
        assert!(can_advance(WizardStep::Import, &answers));
        assert!(can_advance(WizardStep::Review, &answers));
    }

    #[test]
    fn test_activity_toggle_is_a_set() {
        let mut answers = WizardAnswers::default();
        answers.toggle_activity(Activity::Support);
        answers.toggle_activity(Activity::Support);
        assert!(answers.core_activities.is_empty());

        answers.toggle_activity(Activity::Support);
        answers.toggle_activity(Activity::Research);
        assert_eq!(answers.core_activities.len(), 2);
    }

    #[test]
    fn test_channel_budget_clamped() {
        let mut answers = WizardAnswers::default();
        answers.set_channel_budget(2);
        assert_eq!(answers.channel_budget, CHANNEL_BUDGET_MIN);
        answers.set_channel_budget(99);
        assert_eq!(answers.channel_budget, CHANNEL_BUDGET_MAX);
        answers.set_channel_budget(12);
        assert_eq!(answers.channel_budget, 12);
    }

    #[test]
    fn test_step_order() {
        assert_eq!(WizardStep::Basics.next(), Some(WizardStep::Import));
        assert_eq!(WizardStep::Import.next(), Some(WizardStep::Review));
        assert_eq!(WizardStep::Review.next(), None);
        assert_eq!(WizardStep::Basics.prev(), None);
        assert_eq!(WizardStep::Review.prev(), Some(WizardStep::Import));
    }
}
