//! Seeded workspace data: sidebar catalogs and the #general thread.
//!
//! Everything here is mock data for the prototype. The sidebar swaps from
//! the flat pre-approval channel list to the structured layout (core
//! channels + workstreams + committees) once a blueprint is approved.

use chrono::Local;
use once_cell::sync::Lazy;

/// Workspace display name.
pub const WORKSPACE_NAME: &str = "Design Team Hub";
/// The signed-in user.
pub const CURRENT_USER: &str = "Emma Rodriguez";
/// Topic line for the #general header.
pub const GENERAL_TOPIC: &str = "Team-wide announcements and work-based matters";

/// A sidebar channel row.
#[derive(Debug, Clone, Copy)]
pub struct ChannelEntry {
    pub name: &'static str,
    pub unread: u32,
}

/// A committee group in the approved sidebar.
#[derive(Debug, Clone, Copy)]
pub struct Committee {
    pub name: &'static str,
    pub members: u32,
    pub channels: &'static [ChannelEntry],
}

/// A direct-message row.
#[derive(Debug, Clone, Copy)]
pub struct DirectMessage {
    pub name: &'static str,
    pub initials: &'static str,
    pub online: bool,
    pub unread: u32,
}

/// Channels shown before a blueprint is approved.
pub const BASE_CHANNELS: [ChannelEntry; 6] = [
    ChannelEntry { name: "general", unread: 0 },
    ChannelEntry { name: "announcements", unread: 2 },
    ChannelEntry { name: "random", unread: 0 },
    ChannelEntry { name: "development", unread: 5 },
    ChannelEntry { name: "design", unread: 1 },
    ChannelEntry { name: "marketing", unread: 0 },
];

/// Core channels shown after approval.
pub const APPROVED_CHANNELS: [ChannelEntry; 3] = [
    ChannelEntry { name: "announcements", unread: 2 },
    ChannelEntry { name: "general", unread: 0 },
    ChannelEntry { name: "random", unread: 0 },
];

/// Workstream channels shown after approval.
pub const WORKSTREAM_CHANNELS: [ChannelEntry; 3] = [
    ChannelEntry { name: "workstreams/app-redesign", unread: 3 },
    ChannelEntry { name: "workstreams/website", unread: 1 },
    ChannelEntry { name: "workstreams/outreach", unread: 0 },
];

/// Committees shown after approval.
pub const COMMITTEES: [Committee; 3] = [
    Committee {
        name: "Design Committee",
        members: 12,
        channels: &[
            ChannelEntry { name: "committees/design", unread: 2 },
            ChannelEntry { name: "design-critique", unread: 1 },
        ],
    },
    Committee {
        name: "Development Committee",
        members: 15,
        channels: &[
            ChannelEntry { name: "committees/development", unread: 4 },
            ChannelEntry { name: "dev-standup", unread: 0 },
        ],
    },
    Committee {
        name: "Marketing Committee",
        members: 9,
        channels: &[ChannelEntry { name: "committees/marketing", unread: 1 }],
    },
];

/// Direct-message list.
pub const DIRECT_MESSAGES: [DirectMessage; 5] = [
    DirectMessage { name: "Emma Rodriguez", initials: "ER", online: true, unread: 0 },
    DirectMessage { name: "David Kim", initials: "DK", online: true, unread: 2 },
    DirectMessage { name: "Maria Santos", initials: "MS", online: false, unread: 0 },
    DirectMessage { name: "Alex Thompson", initials: "AT", online: true, unread: 1 },
    DirectMessage { name: "Jordan Lee", initials: "JL", online: false, unread: 0 },
];

/// One chat message in a thread.
#[derive(Debug, Clone)]
pub struct Message {
    pub author: String,
    pub initials: String,
    pub timestamp: String,
    pub body: String,
    pub bot: bool,
}

impl Message {
    fn seeded(author: &str, initials: &str, timestamp: &str, body: &str, bot: bool) -> Self {
        Self {
            author: author.to_string(),
            initials: initials.to_string(),
            timestamp: timestamp.to_string(),
            body: body.to_string(),
            bot,
        }
    }
}

static SEED_MESSAGES: Lazy<Vec<Message>> = Lazy::new(|| {
    vec![
        Message::seeded(
            "Emma Rodriguez",
            "ER",
            "9:15 AM",
            "Good morning team! Just wanted to remind everyone about our quarterly \
             planning meeting this Friday at 2 PM. Please have your project proposals \
             ready.",
            false,
        ),
        Message::seeded(
            "David Kim",
            "DK",
            "9:22 AM",
            "Thanks for the reminder Emma! I've been working on the mobile app redesign \
             proposal. Should have the mockups ready by Thursday.",
            false,
        ),
        Message::seeded(
            "SlackBot",
            "SB",
            "9:30 AM",
            "Reminder: Team standup starts in 30 minutes in the conference room",
            true,
        ),
        Message::seeded(
            "Maria Santos",
            "MS",
            "10:45 AM",
            "Great job on the client presentation yesterday @David Kim! The feedback was \
             really positive",
            false,
        ),
        Message::seeded(
            "Alex Thompson",
            "AT",
            "11:02 AM",
            "Hey everyone, I'll be working from home tomorrow due to a doctor's \
             appointment. Will be available on Slack as usual though!",
            false,
        ),
        Message::seeded(
            "Emma Rodriguez",
            "ER",
            "11:15 AM",
            "No problem Alex! Hope everything goes well. Don't forget to update your \
             calendar status",
            false,
        ),
    ]
});

/// The #general message thread.
///
/// Seeded with mock history; sent messages append with a wall-clock
/// timestamp. Nothing is persisted.
#[derive(Debug, Clone)]
pub struct Thread {
    messages: Vec<Message>,
}

impl Default for Thread {
    fn default() -> Self {
        Self::seeded()
    }
}

impl Thread {
    /// The thread with its mock history.
    pub fn seeded() -> Self {
        Self { messages: SEED_MESSAGES.clone() }
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    /// Append a message from the signed-in user. Blank input is dropped.
    pub fn send(&mut self, body: &str) {
        let body = body.trim();
        if body.is_empty() {
            return;
        }
        self.messages.push(Message {
            author: CURRENT_USER.to_string(),
            initials: initials_of(CURRENT_USER),
            timestamp: clock_now(),
            body: body.to_string(),
            bot: false,
        });
    }
}

/// "9:05 AM"-style clock time for a freshly sent message.
fn clock_now() -> String {
    Local::now().format("%l:%M %p").to_string().trim().to_string()
}

/// Uppercase initials from a display name ("Emma Rodriguez" -> "ER").
fn initials_of(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|word| word.chars().next())
        .take(2)
        .collect::<String>()
        .to_uppercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeded_thread() {
        let thread = Thread::seeded();
        assert_eq!(thread.messages().len(), 6);
        assert!(thread.messages()[2].bot);
        assert_eq!(thread.messages()[0].author, "Emma Rodriguez");
    }

    #[test]
    fn test_send_appends() {
        let mut thread = Thread::seeded();
        thread.send("Shipping the new sidebar today");
        let last = thread.messages().last().unwrap();
        assert_eq!(last.author, CURRENT_USER);
        assert_eq!(last.initials, "ER");
        assert_eq!(last.body, "Shipping the new sidebar today");
        assert!(!last.bot);
    }

    #[test]
    fn test_send_ignores_blank() {
        let mut thread = Thread::seeded();
        thread.send("   ");
        assert_eq!(thread.messages().len(), 6);
    }

    #[test]
    fn test_initials() {
        assert_eq!(initials_of("Emma Rodriguez"), "ER");
        assert_eq!(initials_of("Cher"), "C");
        assert_eq!(initials_of("Jean claude van damme"), "JC");
    }

    #[test]
    fn test_committee_channel_totals() {
        let total: usize = COMMITTEES.iter().map(|c| c.channels.len()).sum();
        assert_eq!(total, 5);
    }
}
