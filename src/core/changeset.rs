//! The changeset implied by an approved blueprint.
//!
//! Concrete create/rename/archive/move operations the preview shows before
//! final approval. Nothing here mutates anything: approval only flips the
//! session flag, the workspace itself is seeded data.

use serde::Serialize;

/// Kind of change applied to a channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeKind {
    Create,
    Rename,
    Archive,
    Move,
}

impl ChangeKind {
    /// All kinds in summary-row order.
    pub const ALL: [Self; 4] = [Self::Create, Self::Rename, Self::Archive, Self::Move];

    pub fn label(self) -> &'static str {
        match self {
            Self::Create => "create",
            Self::Rename => "rename",
            Self::Archive => "archive",
            Self::Move => "move",
        }
    }
}

/// One pending change with its rationale.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ChangeEntry {
    pub kind: ChangeKind,
    /// Channel name; renames and moves use "from -> to" form.
    pub name: &'static str,
    pub rationale: &'static str,
}

/// The full change list for the canned blueprint.
pub const CHANGES: [ChangeEntry; 11] = [
    ChangeEntry {
        kind: ChangeKind::Create,
        name: "workstreams/app-redesign",
        rationale: "new project structure",
    },
    ChangeEntry {
        kind: ChangeKind::Create,
        name: "workstreams/website",
        rationale: "new project structure",
    },
    ChangeEntry {
        kind: ChangeKind::Create,
        name: "workstreams/outreach",
        rationale: "new project structure",
    },
    ChangeEntry {
        kind: ChangeKind::Create,
        name: "committees/design",
        rationale: "subgroup organization",
    },
    ChangeEntry {
        kind: ChangeKind::Create,
        name: "committees/development",
        rationale: "subgroup organization",
    },
    ChangeEntry {
        kind: ChangeKind::Rename,
        name: "marketing -> committees/marketing",
        rationale: "naming rule",
    },
    ChangeEntry { kind: ChangeKind::Archive, name: "old-projects", rationale: "inactive 45d" },
    ChangeEntry { kind: ChangeKind::Archive, name: "temp-channel", rationale: "inactive 45d" },
    ChangeEntry {
        kind: ChangeKind::Move,
        name: "design-critique -> committees/design",
        rationale: "subgroup organization",
    },
    ChangeEntry {
        kind: ChangeKind::Move,
        name: "dev-standup -> committees/development",
        rationale: "subgroup organization",
    },
    ChangeEntry {
        kind: ChangeKind::Move,
        name: "client-feedback -> workstreams/app-redesign",
        rationale: "project alignment",
    },
];

/// Changes of one kind.
pub fn changes_of(kind: ChangeKind) -> impl Iterator<Item = &'static ChangeEntry> {
    CHANGES.iter().filter(move |c| c.kind == kind)
}

/// Per-kind counts for the change summary row.
pub fn summary_counts() -> [(ChangeKind, usize); 4] {
    ChangeKind::ALL.map(|kind| (kind, changes_of(kind).count()))
}

/// A channel in the current structure, annotated with its pending change.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct CurrentChannel {
    pub name: &'static str,
    /// `None` when the channel survives untouched.
    pub pending: Option<ChangeKind>,
}

/// The "Current" column of the preview.
pub const CURRENT_CHANNELS: [CurrentChannel; 8] = [
    CurrentChannel { name: "general", pending: None },
    CurrentChannel { name: "announcements", pending: None },
    CurrentChannel { name: "random", pending: None },
    CurrentChannel { name: "development", pending: None },
    CurrentChannel { name: "design", pending: None },
    CurrentChannel { name: "marketing", pending: Some(ChangeKind::Rename) },
    CurrentChannel { name: "old-projects", pending: Some(ChangeKind::Archive) },
    CurrentChannel { name: "temp-channel", pending: Some(ChangeKind::Archive) },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_counts() {
        let counts = summary_counts();
        assert_eq!(counts[0], (ChangeKind::Create, 5));
        assert_eq!(counts[1], (ChangeKind::Rename, 1));
        assert_eq!(counts[2], (ChangeKind::Archive, 2));
        assert_eq!(counts[3], (ChangeKind::Move, 3));
    }

    #[test]
    fn test_counts_cover_every_change() {
        let total: usize = summary_counts().iter().map(|(_, n)| n).sum();
        assert_eq!(total, CHANGES.len());
    }

    #[test]
    fn test_archive_count_matches_recommendation() {
        use crate::core::blueprint::generate;
        use crate::core::wizard::WizardAnswers;

        let summary = generate(&WizardAnswers::default());
        assert_eq!(
            summary.archive_candidates as usize,
            changes_of(ChangeKind::Archive).count()
        );
    }

    #[test]
    fn test_current_annotations_match_change_list() {
        let archived: Vec<_> = CURRENT_CHANNELS
            .iter()
            .filter(|c| c.pending == Some(ChangeKind::Archive))
            .map(|c| c.name)
            .collect();
        assert_eq!(archived, ["old-projects", "temp-channel"]);
    }
}
