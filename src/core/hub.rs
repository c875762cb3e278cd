//! Hub dashboard data and file filtering.
//!
//! The Hub is the file-consolidation dashboard unlocked by an approved
//! blueprint. Sources, files, rules and audit entries are seeded; the only
//! behavior is the Files tab filter (title substring, source, channel tag)
//! and the dedupe-rule toggles. Linking a source is a label-only flow, no
//! OAuth or sync happens.

/// Dashboard tabs in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HubTab {
    Overview,
    Files,
    Sources,
    Rules,
    Audits,
}

impl HubTab {
    pub const ALL: [Self; 5] =
        [Self::Overview, Self::Files, Self::Sources, Self::Rules, Self::Audits];

    pub fn title(self) -> &'static str {
        match self {
            Self::Overview => "Overview",
            Self::Files => "Files",
            Self::Sources => "Sources",
            Self::Rules => "Rules",
            Self::Audits => "Audits",
        }
    }

    /// The tab to the right, wrapping around.
    pub fn next(self) -> Self {
        let idx = Self::ALL.iter().position(|t| *t == self).unwrap_or(0);
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }

    /// The tab to the left, wrapping around.
    pub fn prev(self) -> Self {
        let idx = Self::ALL.iter().position(|t| *t == self).unwrap_or(0);
        Self::ALL[(idx + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

/// Link state of an external file source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceStatus {
    Linked,
    Linking,
    Unlinked,
    Reauth,
}

impl SourceStatus {
    pub fn label(self) -> &'static str {
        match self {
            Self::Linked => "linked",
            Self::Linking => "linking",
            Self::Unlinked => "unlinked",
            Self::Reauth => "reauth",
        }
    }
}

/// An external file-storage source.
#[derive(Debug, Clone, Copy)]
pub struct HubSource {
    pub name: &'static str,
    pub status: SourceStatus,
    pub last_sync: &'static str,
    pub files_count: u32,
}

/// File kinds, for the type glyph.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
    Pdf,
    Figma,
    Sketch,
    Markdown,
    Notion,
}

/// A consolidated file entry.
#[derive(Debug, Clone, Copy)]
pub struct HubFile {
    pub title: &'static str,
    pub kind: FileKind,
    pub source: &'static str,
    pub tags: &'static [&'static str],
    pub duplicates: u32,
    pub modified: &'static str,
    pub size: &'static str,
}

/// An automatic tagging rule.
#[derive(Debug, Clone, Copy)]
pub struct TagRule {
    pub condition: &'static str,
    pub tag: &'static str,
}

/// An audit-log entry.
#[derive(Debug, Clone, Copy)]
pub struct AuditEntry {
    pub what: &'static str,
    pub when: &'static str,
}

/// Duplicates collapsed by the (mock) content-hash pass.
pub const DEDUPE_COLLAPSED: u32 = 12;

pub const SOURCES: [HubSource; 5] = [
    HubSource {
        name: "Google Drive",
        status: SourceStatus::Linked,
        last_sync: "2 min ago",
        files_count: 1247,
    },
    HubSource {
        name: "Dropbox",
        status: SourceStatus::Linking,
        last_sync: "Syncing...",
        files_count: 0,
    },
    HubSource {
        name: "OneDrive",
        status: SourceStatus::Unlinked,
        last_sync: "Never",
        files_count: 0,
    },
    HubSource {
        name: "Notion",
        status: SourceStatus::Linked,
        last_sync: "5 min ago",
        files_count: 89,
    },
    HubSource {
        name: "GitHub",
        status: SourceStatus::Reauth,
        last_sync: "1 hour ago",
        files_count: 156,
    },
];

pub const FILES: [HubFile; 6] = [
    HubFile {
        title: "Mobile App Redesign Brief.pdf",
        kind: FileKind::Pdf,
        source: "Google Drive",
        tags: &["workstreams/app-redesign"],
        duplicates: 2,
        modified: "2 hours ago",
        size: "2.4 MB",
    },
    HubFile {
        title: "Homepage wireframes.fig",
        kind: FileKind::Figma,
        source: "Dropbox",
        tags: &["workstreams/website"],
        duplicates: 0,
        modified: "1 day ago",
        size: "18.2 MB",
    },
    HubFile {
        title: "client-pitch.md",
        kind: FileKind::Markdown,
        source: "GitHub",
        tags: &["committees/marketing"],
        duplicates: 0,
        modified: "3 days ago",
        size: "45 KB",
    },
    HubFile {
        title: "Meeting Notes - 2025-09-20",
        kind: FileKind::Notion,
        source: "Notion",
        tags: &["#general"],
        duplicates: 1,
        modified: "1 week ago",
        size: "12 KB",
    },
    HubFile {
        title: "Design System Components.sketch",
        kind: FileKind::Sketch,
        source: "Google Drive",
        tags: &["committees/design"],
        duplicates: 3,
        modified: "2 weeks ago",
        size: "156 MB",
    },
    HubFile {
        title: "API Documentation.pdf",
        kind: FileKind::Pdf,
        source: "GitHub",
        tags: &["committees/development"],
        duplicates: 0,
        modified: "3 weeks ago",
        size: "890 KB",
    },
];

pub const TAG_RULES: [TagRule; 3] = [
    TagRule {
        condition: "path contains /workstreams/app-redesign",
        tag: "workstreams/app-redesign",
    },
    TagRule { condition: "path contains /design/", tag: "committees/design" },
    TagRule { condition: "filename contains \"meeting\"", tag: "#general" },
];

pub const AUDIT_LOG: [AuditEntry; 3] = [
    AuditEntry { what: "Google Drive full sync completed", when: "2 min ago" },
    AuditEntry { what: "Auto-tagged 89 files based on path rules", when: "1 hour ago" },
    AuditEntry { what: "Deduplication rules updated", when: "2 hours ago" },
];

/// Channel filter options for the Files toolbar.
pub const CHANNEL_FILTERS: [&str; 3] = ["workstreams", "committees", "general"];

/// Active filters on the Files tab. Empty filter matches everything.
#[derive(Debug, Clone, Default)]
pub struct FileFilter {
    /// Case-insensitive title substring.
    pub query: String,
    /// Exact source name, or `None` for all sources.
    pub source: Option<&'static str>,
    /// Channel/subgroup fragment matched against tags, or `None` for all.
    pub channel: Option<&'static str>,
}

impl FileFilter {
    fn matches(&self, file: &HubFile) -> bool {
        let matches_query = self.query.is_empty()
            || file.title.to_lowercase().contains(&self.query.to_lowercase());
        let matches_source = self.source.map_or(true, |source| file.source == source);
        let matches_channel = self
            .channel
            .map_or(true, |channel| file.tags.iter().any(|tag| tag.contains(channel)));
        matches_query && matches_source && matches_channel
    }
}

/// Files passing the filter, in catalog order.
pub fn filter_files(filter: &FileFilter) -> Vec<&'static HubFile> {
    FILES.iter().filter(|file| filter.matches(file)).collect()
}

/// Sources currently linked.
pub fn linked_sources() -> Vec<&'static HubSource> {
    SOURCES.iter().filter(|s| s.status == SourceStatus::Linked).collect()
}

/// Total file count across linked sources only.
pub fn total_files() -> u32 {
    linked_sources().iter().map(|s| s.files_count).sum()
}
