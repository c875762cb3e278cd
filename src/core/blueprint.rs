//! The recommended communication blueprint.
//!
//! [`generate`] maps wizard answers to a [`RecommendationSummary`]. The
//! mapping is currently a constant: the prototype always proposes the same
//! nine-channel structure no matter what the wizard collected. The rest of
//! this module is the blueprint body the recommendation view renders.

use serde::Serialize;

use super::wizard::WizardAnswers;

/// Headline counts for a generated blueprint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RecommendationSummary {
    /// Proposed channel count.
    pub channels: u32,
    /// Proposed subgroup (committee) count.
    pub subgroups: u32,
    /// Channels marked for archival.
    pub archive_candidates: u32,
    /// Channels the proposal consumes from the budget.
    pub channel_budget_used: u32,
    /// Budget ceiling shown next to the usage bar.
    pub channel_budget_max: u32,
}

/// Generate the blueprint summary for a completed wizard run.
///
/// Deterministic and total over all reachable answers. The output is fixed:
/// the input is only logged, not consulted. A real derivation (channel count
/// scaling with community size and budget) is a possible future replacement,
/// but nothing in the app may assume one exists.
pub fn generate(answers: &WizardAnswers) -> RecommendationSummary {
    tracing::debug!(
        size = ?answers.community_size,
        activities = answers.core_activities.len(),
        budget = answers.channel_budget,
        "generating blueprint recommendation"
    );

    RecommendationSummary {
        channels: 9,
        subgroups: 3,
        archive_candidates: 2,
        channel_budget_used: 9,
        channel_budget_max: 10,
    }
}

/// A proposed core channel with its access note.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct CoreChannel {
    pub name: &'static str,
    /// Short access/permission note shown as a badge.
    pub access: &'static str,
}

/// A proposed project workstream channel.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Workstream {
    pub name: &'static str,
    pub description: &'static str,
}

/// A proposed committee with its member channels.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Subgroup {
    pub name: &'static str,
    pub members: u32,
    pub channels: &'static [&'static str],
}

/// One entry in the rationale side panel.
#[derive(Debug, Clone, Copy)]
pub struct Rationale {
    pub title: &'static str,
    pub detail: &'static str,
}

/// Core channels the blueprint proposes.
pub const CORE_CHANNELS: [CoreChannel; 4] = [
    CoreChannel { name: "announcements", access: "write: officers" },
    CoreChannel { name: "general", access: "all" },
    CoreChannel { name: "random", access: "all" },
    CoreChannel { name: "help-desk", access: "officers triage" },
];

/// Proposed workstream channels.
pub const WORKSTREAMS: [Workstream; 3] = [
    Workstream {
        name: "workstreams/app-redesign",
        description: "Mobile app redesign project",
    },
    Workstream { name: "workstreams/website", description: "Company website overhaul" },
    Workstream {
        name: "workstreams/outreach",
        description: "Community outreach initiatives",
    },
];

/// Proposed committees.
pub const SUBGROUPS: [Subgroup; 3] = [
    Subgroup {
        name: "Design Committee",
        members: 12,
        channels: &["committees/design", "design-critique"],
    },
    Subgroup {
        name: "Development Committee",
        members: 15,
        channels: &["committees/development", "dev-standup"],
    },
    Subgroup { name: "Marketing Committee", members: 9, channels: &["committees/marketing"] },
];

/// Why the blueprint looks the way it does.
pub const RATIONALES: [Rationale; 5] = [
    Rationale {
        title: "Announcements is write-limited to officers to reduce noise",
        detail: "Based on your moderation capacity and community size",
    },
    Rationale {
        title: "Workstreams created because you reported >=3 concurrent initiatives",
        detail: "Projects activity selected in core activities",
    },
    Rationale {
        title: "Committees exceed size threshold; subgroups improve focus",
        detail: "Community size 25-100 with specialized roles",
    },
    Rationale {
        title: "2 channels inactive >45 days are marked for archival",
        detail: "Optimizing channel budget utilization",
    },
    Rationale {
        title: "Naming rules promote consistency and discoverability",
        detail: "Following <org>-<topic>-<scope> pattern",
    },
];

/// Channel naming rule the blueprint enforces.
pub const NAMING_PATTERN: &str = "<org>-<topic>-<scope>";
/// Worked example of the naming rule.
pub const NAMING_EXAMPLE: &str = "dt-design-critique";

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::wizard::{Activity, CommunitySize, ModerationCapacity};

    #[test]
    fn test_generator_is_constant() {
        let empty = WizardAnswers::default();

        let mut filled = WizardAnswers::default();
        filled.community_size = Some(CommunitySize::Over300);
        filled.toggle_activity(Activity::Research);
        filled.moderation_capacity = Some(ModerationCapacity::Low);
        filled.set_channel_budget(20);

        // The prototype generator ignores its input entirely.
        assert_eq!(generate(&empty), generate(&filled));
    }

    #[test]
    fn test_summary_counts() {
        let summary = generate(&WizardAnswers::default());
        assert_eq!(summary.channels, 9);
        assert_eq!(summary.subgroups, 3);
        assert_eq!(summary.archive_candidates, 2);
        assert_eq!(summary.channel_budget_used, 9);
        assert_eq!(summary.channel_budget_max, 10);
    }

    #[test]
    fn test_summary_matches_blueprint_body() {
        let summary = generate(&WizardAnswers::default());
        assert_eq!(summary.subgroups as usize, SUBGROUPS.len());

        // help-desk + 3 workstreams + 5 committee channels = 9 proposed.
        let committee_channels: usize = SUBGROUPS.iter().map(|s| s.channels.len()).sum();
        assert_eq!(summary.channels as usize, 1 + WORKSTREAMS.len() + committee_channels);
    }

    #[test]
    fn test_serializes_to_json() {
        let summary = generate(&WizardAnswers::default());
        let json = serde_json::to_value(summary).unwrap();
        assert_eq!(json["channels"], 9);
        assert_eq!(json["channel_budget_max"], 10);
    }
}
