//! UI rendering for the TUI.
//!
//! Handles layout and widget rendering using ratatui. Each workflow view
//! gets its own draw function; the wizard renders as an overlay on top of
//! the chat view, the rest are full-screen takeovers.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Gauge, List, ListItem, Padding, Paragraph, Tabs, Wrap},
    Frame,
};

use crate::core::{
    changes_of, filter_files, linked_sources, summary_counts, total_files, Activity, ChangeKind,
    CommunitySize, HubTab, ImportProvider, ModerationCapacity, SourceStatus, WizardStep,
    WorkflowState, AUDIT_LOG, APPROVED_CHANNELS, BASE_CHANNELS, CHANNEL_BUDGET_MAX,
    CHANNEL_BUDGET_MIN, COMMITTEES, CORE_CHANNELS, CURRENT_CHANNELS, CURRENT_USER,
    DEDUPE_COLLAPSED, DIRECT_MESSAGES, GENERAL_TOPIC, NAMING_EXAMPLE, NAMING_PATTERN, RATIONALES,
    SOURCES, SUBGROUPS, TAG_RULES, WORKSPACE_NAME, WORKSTREAMS, WORKSTREAM_CHANNELS,
};
use crate::App;

/// Draw the main UI.
pub fn draw(frame: &mut Frame, app: &App) {
    match app.state() {
        WorkflowState::Chat => draw_chat(frame, app),
        WorkflowState::Wizard => {
            // The wizard is a dialog over the chat view.
            draw_chat(frame, app);
            draw_wizard_overlay(frame, app);
        }
        WorkflowState::Recommendation => draw_recommendation(frame, app),
        WorkflowState::ChangeSet => draw_change_set(frame, app),
        WorkflowState::Hub => draw_hub(frame, app),
    }
}

// --- Chat view ---

fn draw_chat(frame: &mut Frame, app: &App) {
    let area = frame.area();

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(28), // Sidebar
            Constraint::Min(40),    // Message pane
        ])
        .split(area);

    draw_sidebar(frame, app, columns[0]);

    let main = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Channel header
            Constraint::Min(5),    // Messages
            Constraint::Length(3), // Compose box
            Constraint::Length(1), // Status bar
        ])
        .split(columns[1]);

    draw_channel_header(frame, app, main[0]);
    draw_messages(frame, app, main[1]);
    draw_compose(frame, app, main[2]);
    draw_status_bar(frame, app, main[3]);
}

/// Draw the workspace sidebar: channels, apps, direct messages.
///
/// Before approval the channel list is the flat legacy one; after approval
/// it shows the structured layout the blueprint created.
fn draw_sidebar(frame: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;
    let approved = app.session.approved();

    let mut items: Vec<ListItem> = Vec::new();

    // Workspace header
    items.push(ListItem::new(Line::from(vec![Span::styled(
        WORKSPACE_NAME,
        Style::default().fg(theme.text).add_modifier(Modifier::BOLD),
    )])));
    items.push(ListItem::new(Line::from(vec![
        Span::styled("● ", Style::default().fg(theme.secondary)),
        Span::styled(CURRENT_USER, Style::default().fg(theme.text_dim)),
    ])));
    items.push(ListItem::new(""));

    if approved {
        push_section(&mut items, theme, "Channels");
        for entry in &APPROVED_CHANNELS {
            push_channel(&mut items, theme, entry.name, entry.unread, false);
        }

        push_section(&mut items, theme, "Workstreams");
        for entry in &WORKSTREAM_CHANNELS {
            push_channel(&mut items, theme, entry.name, entry.unread, false);
        }

        push_section(&mut items, theme, "Committees");
        for committee in &COMMITTEES {
            items.push(ListItem::new(Line::from(vec![
                Span::styled(committee.name, Style::default().fg(theme.text)),
                Span::styled(
                    format!(" ({})", committee.members),
                    Style::default().fg(theme.text_muted),
                ),
            ])));
            for entry in committee.channels {
                push_channel(&mut items, theme, entry.name, entry.unread, true);
            }
        }
    } else {
        push_section(&mut items, theme, "Channels");
        for entry in &BASE_CHANNELS {
            push_channel(&mut items, theme, entry.name, entry.unread, false);
        }
    }

    // Apps section with the Hub entry and its lock state
    push_section(&mut items, theme, "Apps");
    let (hub_suffix, hub_style) = if approved {
        ("", Style::default().fg(theme.text))
    } else {
        (" [locked]", Style::default().fg(theme.text_muted))
    };
    items.push(ListItem::new(Line::from(vec![
        Span::styled("File Hub", hub_style),
        Span::styled(hub_suffix, Style::default().fg(theme.warning)),
    ])));

    push_section(&mut items, theme, "Direct messages");
    for dm in &DIRECT_MESSAGES {
        let dot = if dm.online { "● " } else { "○ " };
        let dot_color = if dm.online { theme.secondary } else { theme.text_muted };
        let mut spans = vec![
            Span::styled(dot, Style::default().fg(dot_color)),
            Span::styled(dm.name, Style::default().fg(theme.text)),
        ];
        if dm.unread > 0 {
            spans.push(Span::styled(
                format!(" {}", dm.unread),
                Style::default().fg(theme.accent).add_modifier(Modifier::BOLD),
            ));
        }
        items.push(ListItem::new(Line::from(spans)));
    }

    if !approved {
        items.push(ListItem::new(""));
        items.push(ListItem::new(Line::from(Span::styled(
            "Ctrl+W: Structure Wizard",
            Style::default().fg(theme.primary),
        ))));
    }

    let sidebar = List::new(items).block(
        Block::default()
            .borders(Borders::RIGHT)
            .border_style(Style::default().fg(theme.border))
            .padding(Padding::horizontal(1)),
    );

    frame.render_widget(sidebar, area);
}

fn push_section(items: &mut Vec<ListItem<'static>>, theme: &crate::tui::Theme, title: &'static str) {
    items.push(ListItem::new(""));
    items.push(ListItem::new(Line::from(Span::styled(
        title.to_uppercase(),
        Style::default().fg(theme.text_muted).add_modifier(Modifier::BOLD),
    ))));
}

fn push_channel(
    items: &mut Vec<ListItem<'static>>,
    theme: &crate::tui::Theme,
    name: &'static str,
    unread: u32,
    indent: bool,
) {
    let pad = if indent { "  " } else { "" };
    let name_style = if unread > 0 {
        Style::default().fg(theme.text).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(theme.text_dim)
    };
    let mut spans = vec![
        Span::styled(format!("{pad}# "), Style::default().fg(theme.text_muted)),
        Span::styled(name, name_style),
    ];
    if unread > 0 {
        spans.push(Span::styled(
            format!(" {unread}"),
            Style::default().fg(theme.accent).add_modifier(Modifier::BOLD),
        ));
    }
    items.push(ListItem::new(Line::from(spans)));
}

fn draw_channel_header(frame: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;
    let header = Paragraph::new(vec![
        Line::from(vec![
            Span::styled("# general", Style::default().fg(theme.text).add_modifier(Modifier::BOLD)),
            Span::styled("  24 members", Style::default().fg(theme.text_muted)),
        ]),
        Line::from(Span::styled(GENERAL_TOPIC, Style::default().fg(theme.text_dim))),
    ]);
    frame.render_widget(header, area);
}

fn draw_messages(frame: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;

    let items: Vec<ListItem> = app
        .thread
        .messages()
        .iter()
        .map(|msg| {
            let author_color = if msg.bot { theme.accent } else { theme.primary };
            let mut lines = vec![Line::from(vec![
                Span::styled(
                    format!("[{}] ", msg.initials),
                    Style::default().fg(theme.text_muted),
                ),
                Span::styled(
                    msg.author.clone(),
                    Style::default().fg(author_color).add_modifier(Modifier::BOLD),
                ),
                Span::styled(format!("  {}", msg.timestamp), Style::default().fg(theme.text_muted)),
            ])];
            lines.push(Line::from(Span::styled(
                msg.body.clone(),
                Style::default().fg(theme.text),
            )));
            lines.push(Line::from(""));
            ListItem::new(lines)
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::TOP)
            .border_style(Style::default().fg(theme.border))
            .padding(Padding::horizontal(1)),
    );

    frame.render_widget(list, area);
}

fn draw_compose(frame: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;

    let input = Paragraph::new(app.compose.as_str())
        .style(Style::default().fg(theme.text))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme.border))
                .title(" Message #general ")
                .title_style(Style::default().fg(theme.text_muted)),
        );
    frame.render_widget(input, area);

    if app.state() == WorkflowState::Chat {
        frame.set_cursor_position((area.x + 1 + app.cursor_column() as u16, area.y + 1));
    }
}

fn draw_status_bar(frame: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;

    let line = if let Some(ref message) = app.status_message {
        Line::from(Span::styled(
            message.as_str(),
            Style::default().fg(theme.warning).add_modifier(Modifier::BOLD),
        ))
    } else {
        Line::from(vec![
            Span::styled("Enter", Style::default().fg(theme.primary)),
            Span::styled(" send  ", Style::default().fg(theme.text_muted)),
            Span::styled("Ctrl+W", Style::default().fg(theme.primary)),
            Span::styled(" wizard  ", Style::default().fg(theme.text_muted)),
            Span::styled("Ctrl+H", Style::default().fg(theme.primary)),
            Span::styled(" hub  ", Style::default().fg(theme.text_muted)),
            Span::styled("Esc", Style::default().fg(theme.primary)),
            Span::styled(" quit", Style::default().fg(theme.text_muted)),
        ])
    };

    frame.render_widget(Paragraph::new(line), area);
}

// --- Wizard overlay ---

fn draw_wizard_overlay(frame: &mut Frame, app: &App) {
    let theme = &app.theme;
    let area = centered_rect(64, 22, frame.area());

    frame.render_widget(Clear, area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.primary))
        .title(" AI Structure Wizard ")
        .title_style(Style::default().fg(theme.primary).add_modifier(Modifier::BOLD))
        .padding(Padding::uniform(1));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let step = app.wizard.step;
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Step label
            Constraint::Length(1), // Progress gauge
            Constraint::Min(5),    // Step body
            Constraint::Length(2), // Footer hints
        ])
        .split(inner);

    let label = Paragraph::new(Line::from(vec![
        Span::styled(
            format!("Step {} of {}", step.index(), WizardStep::COUNT),
            Style::default().fg(theme.text_muted),
        ),
        Span::styled(
            format!("  {}", step.title()),
            Style::default().fg(theme.text).add_modifier(Modifier::BOLD),
        ),
    ]));
    frame.render_widget(label, chunks[0]);

    let progress = Gauge::default()
        .gauge_style(Style::default().fg(theme.primary))
        .ratio(step.index() as f64 / WizardStep::COUNT as f64)
        .label("");
    frame.render_widget(progress, chunks[1]);

    match step {
        WizardStep::Basics => draw_wizard_basics(frame, app, chunks[2]),
        WizardStep::Import => draw_wizard_import(frame, app, chunks[2]),
        WizardStep::Review => draw_wizard_review(frame, app, chunks[2]),
    }

    let mut footer = vec![
        Span::styled("Enter", Style::default().fg(theme.primary)),
        Span::styled(
            if step == WizardStep::Review { " generate  " } else { " continue  " },
            Style::default().fg(theme.text_muted),
        ),
        Span::styled("Backspace", Style::default().fg(theme.primary)),
        Span::styled(" back  ", Style::default().fg(theme.text_muted)),
        Span::styled("Esc", Style::default().fg(theme.primary)),
        Span::styled(" cancel", Style::default().fg(theme.text_muted)),
    ];
    if !app.wizard_can_continue() {
        footer.push(Span::styled(
            "   complete the required fields to continue",
            Style::default().fg(theme.warning),
        ));
    }
    frame.render_widget(
        Paragraph::new(Line::from(footer)).wrap(Wrap { trim: true }),
        chunks[3],
    );
}

fn field_style(app: &App, index: usize) -> Style {
    if app.wizard.focus == index {
        Style::default().fg(app.theme.primary).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(app.theme.text)
    }
}

fn option_label<T: Copy>(value: Option<T>, label: fn(T) -> &'static str) -> &'static str {
    value.map_or("(choose with Left/Right)", label)
}

fn draw_wizard_basics(frame: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;
    let answers = app.session.answers();

    let mut lines = vec![
        Line::from(vec![
            Span::styled("Community size: ", field_style(app, 0)),
            Span::styled(
                option_label(answers.community_size, CommunitySize::label),
                Style::default().fg(theme.text_dim),
            ),
        ]),
        Line::from(Span::styled("Core activities:", field_style(app, 1))),
    ];

    for (idx, activity) in Activity::ALL.iter().enumerate() {
        let checked = answers.core_activities.contains(activity);
        let cursor = app.wizard.focus == 1 && app.wizard.activity_cursor == idx;
        let marker = if checked { "[x] " } else { "[ ] " };
        let style = if cursor {
            Style::default().fg(theme.primary).add_modifier(Modifier::BOLD)
        } else if checked {
            Style::default().fg(theme.text)
        } else {
            Style::default().fg(theme.text_dim)
        };
        lines.push(Line::from(Span::styled(
            format!("  {marker}{}", activity.label()),
            style,
        )));
    }

    lines.push(Line::from(vec![
        Span::styled("Moderation capacity: ", field_style(app, 2)),
        Span::styled(
            option_label(answers.moderation_capacity, ModerationCapacity::label),
            Style::default().fg(theme.text_dim),
        ),
    ]));
    lines.push(Line::from(vec![
        Span::styled("Channel budget: ", field_style(app, 3)),
        Span::styled(
            format!(
                "{} (between {CHANNEL_BUDGET_MIN} and {CHANNEL_BUDGET_MAX})",
                answers.channel_budget
            ),
            Style::default().fg(theme.text_dim),
        ),
    ]));

    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), area);
}

fn draw_wizard_import(frame: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;
    let answers = app.session.answers();

    let toggle = if answers.import_workspace { "[x]" } else { "[ ]" };
    let provider = if answers.import_workspace {
        option_label(answers.import_provider, ImportProvider::label)
    } else {
        "(enable import first)"
    };

    let lines = vec![
        Line::from(vec![
            Span::styled(format!("{toggle} "), field_style(app, 0)),
            Span::styled("Import an existing workspace", field_style(app, 0)),
        ]),
        Line::from(vec![
            Span::styled("Provider: ", field_style(app, 1)),
            Span::styled(provider, Style::default().fg(theme.text_dim)),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            "Import is a dry run: existing channels are analyzed for the \
             changeset preview, nothing is copied.",
            Style::default().fg(theme.text_muted),
        )),
    ];

    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), area);
}

fn draw_wizard_review(frame: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;
    let answers = app.session.answers();

    let activities: Vec<&str> =
        answers.core_activities.iter().map(|a| a.label()).collect();
    let import = if answers.import_workspace {
        option_label(answers.import_provider, ImportProvider::label)
    } else {
        "no"
    };

    let lines = vec![
        review_line(theme, "Community size", option_label(answers.community_size, CommunitySize::label)),
        review_line(theme, "Core activities", &activities.join(", ")),
        review_line(
            theme,
            "Moderation capacity",
            option_label(answers.moderation_capacity, ModerationCapacity::label),
        ),
        review_line(theme, "Channel budget", &answers.channel_budget.to_string()),
        review_line(theme, "Import workspace", import),
        Line::from(""),
        Line::from(Span::styled(
            "Press Enter to generate a recommended communication blueprint.",
            Style::default().fg(theme.text_dim),
        )),
    ];

    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), area);
}

fn review_line<'a>(theme: &crate::tui::Theme, label: &'a str, value: &str) -> Line<'a> {
    Line::from(vec![
        Span::styled(format!("{label}: "), Style::default().fg(theme.text_muted)),
        Span::styled(value.to_string(), Style::default().fg(theme.text)),
    ])
}

// --- Recommendation view ---

fn draw_recommendation(frame: &mut Frame, app: &App) {
    let theme = &app.theme;
    let area = frame.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Header
            Constraint::Length(3), // Summary cards
            Constraint::Min(8),    // Blueprint body (+ rationale panel)
            Constraint::Length(2), // Footer
        ])
        .split(area);

    let header = Paragraph::new(vec![Line::from(vec![
        Span::styled(
            "Recommended Communication Blueprint",
            Style::default().fg(theme.text).add_modifier(Modifier::BOLD),
        ),
        Span::styled("  v1 Draft", Style::default().fg(theme.accent)),
    ])]);
    frame.render_widget(header, chunks[0]);

    draw_summary_cards(frame, app, chunks[1]);

    let body_area = if app.show_rationale {
        let split = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(62), Constraint::Percentage(38)])
            .split(chunks[2]);
        draw_rationale_panel(frame, app, split[1]);
        split[0]
    } else {
        chunks[2]
    };
    draw_blueprint_body(frame, app, body_area);

    let footer = Paragraph::new(vec![
        Line::from(Span::styled(
            "All recommendations are previews; nothing changes until you approve.",
            Style::default().fg(theme.text_muted),
        )),
        Line::from(vec![
            Span::styled("Enter", Style::default().fg(theme.primary)),
            Span::styled(" approve & preview changes  ", Style::default().fg(theme.text_muted)),
            Span::styled("r", Style::default().fg(theme.primary)),
            Span::styled(" rationale  ", Style::default().fg(theme.text_muted)),
            Span::styled("Esc", Style::default().fg(theme.primary)),
            Span::styled(" back to chat", Style::default().fg(theme.text_muted)),
        ]),
    ]);
    frame.render_widget(footer, chunks[3]);
}

fn draw_summary_cards(frame: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;
    let Some(summary) = app.session.summary() else {
        return;
    };

    let cards: [(String, &str); 4] = [
        (summary.channels.to_string(), "Channels"),
        (summary.subgroups.to_string(), "Subgroups"),
        (summary.archive_candidates.to_string(), "Archive candidates"),
        (
            format!("{}/{}", summary.channel_budget_used, summary.channel_budget_max),
            "Budget used",
        ),
    ];

    let slots = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, 4); 4])
        .split(area);

    for ((value, label), slot) in cards.iter().zip(slots.iter()) {
        let card = Paragraph::new(Line::from(vec![
            Span::styled(
                value.clone(),
                Style::default().fg(theme.primary).add_modifier(Modifier::BOLD),
            ),
            Span::styled(format!(" {label}"), Style::default().fg(theme.text_dim)),
        ]))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme.border)),
        );
        frame.render_widget(card, *slot);
    }
}

fn draw_blueprint_body(frame: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;

    let mut lines: Vec<Line> = Vec::new();

    lines.push(section_line(theme, "Core channels"));
    for channel in &CORE_CHANNELS {
        lines.push(Line::from(vec![
            Span::styled(format!("  # {}", channel.name), Style::default().fg(theme.text)),
            Span::styled(format!("  [{}]", channel.access), Style::default().fg(theme.text_muted)),
        ]));
    }

    lines.push(Line::from(""));
    lines.push(section_line(theme, "Workstreams"));
    for ws in &WORKSTREAMS {
        lines.push(Line::from(vec![
            Span::styled(format!("  # {}", ws.name), Style::default().fg(theme.text)),
            Span::styled(format!("  {}", ws.description), Style::default().fg(theme.text_dim)),
        ]));
    }

    lines.push(Line::from(""));
    lines.push(section_line(theme, "Committees"));
    for group in &SUBGROUPS {
        lines.push(Line::from(vec![
            Span::styled(format!("  {}", group.name), Style::default().fg(theme.text)),
            Span::styled(
                format!(" ({} members)", group.members),
                Style::default().fg(theme.text_muted),
            ),
        ]));
        for channel in group.channels {
            lines.push(Line::from(Span::styled(
                format!("    # {channel}"),
                Style::default().fg(theme.text_dim),
            )));
        }
    }

    lines.push(Line::from(""));
    lines.push(section_line(theme, "Naming rules"));
    lines.push(Line::from(vec![
        Span::styled(format!("  {NAMING_PATTERN}"), Style::default().fg(theme.text)),
        Span::styled(format!("  e.g. {NAMING_EXAMPLE}"), Style::default().fg(theme.text_muted)),
    ]));

    let body = Paragraph::new(lines)
        .scroll((app.reco_scroll as u16, 0))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme.border))
                .padding(Padding::horizontal(1)),
        );
    frame.render_widget(body, area);
}

fn draw_rationale_panel(frame: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;

    let mut lines: Vec<Line> = vec![Line::from(Span::styled(
        "High confidence",
        Style::default().fg(theme.success).add_modifier(Modifier::BOLD),
    ))];

    for rationale in &RATIONALES {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            rationale.title,
            Style::default().fg(theme.text),
        )));
        lines.push(Line::from(Span::styled(
            format!("  {}", rationale.detail),
            Style::default().fg(theme.text_muted),
        )));
    }

    let panel = Paragraph::new(lines).wrap(Wrap { trim: true }).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.border))
            .title(" Why these recommendations ")
            .title_style(Style::default().fg(theme.text_dim))
            .padding(Padding::horizontal(1)),
    );
    frame.render_widget(panel, area);
}

fn section_line(theme: &crate::tui::Theme, title: &'static str) -> Line<'static> {
    Line::from(Span::styled(
        title,
        Style::default().fg(theme.primary).add_modifier(Modifier::BOLD),
    ))
}

// --- Changeset preview ---

fn draw_change_set(frame: &mut Frame, app: &App) {
    let theme = &app.theme;
    let area = frame.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Header + counts
            Constraint::Min(8),    // Current vs proposed
            Constraint::Length(2), // Footer
        ])
        .split(area);

    let mut counts_spans = vec![Span::styled(
        "Change Set Preview   ",
        Style::default().fg(theme.text).add_modifier(Modifier::BOLD),
    )];
    for (kind, count) in summary_counts() {
        counts_spans.push(Span::styled(
            format!("{} {}  ", count, kind.label()),
            Style::default().fg(kind_color(theme, kind)),
        ));
    }
    frame.render_widget(Paragraph::new(Line::from(counts_spans)), chunks[0]);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(chunks[1]);

    // Current structure, annotated with what will happen to each channel
    let current_items: Vec<ListItem> = CURRENT_CHANNELS
        .iter()
        .map(|channel| {
            let mut spans = vec![Span::styled(
                format!("# {}", channel.name),
                Style::default().fg(theme.text),
            )];
            if let Some(kind) = channel.pending {
                spans.push(Span::styled(
                    format!("  [{}]", kind.label()),
                    Style::default().fg(kind_color(theme, kind)),
                ));
            }
            ListItem::new(Line::from(spans))
        })
        .collect();
    let current = List::new(current_items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.border))
            .title(" Current ")
            .title_style(Style::default().fg(theme.text_dim))
            .padding(Padding::horizontal(1)),
    );
    frame.render_widget(current, columns[0]);

    // Proposed changes grouped by kind
    let mut lines: Vec<Line> = Vec::new();
    for kind in ChangeKind::ALL {
        lines.push(Line::from(Span::styled(
            kind.label().to_uppercase(),
            Style::default().fg(kind_color(theme, kind)).add_modifier(Modifier::BOLD),
        )));
        for change in changes_of(kind) {
            lines.push(Line::from(vec![
                Span::styled(format!("  {}", change.name), Style::default().fg(theme.text)),
                Span::styled(
                    format!("  {}", change.rationale),
                    Style::default().fg(theme.text_muted),
                ),
            ]));
        }
        lines.push(Line::from(""));
    }
    let proposed = Paragraph::new(lines)
        .scroll((app.changeset_scroll as u16, 0))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme.border))
                .title(" Proposed ")
                .title_style(Style::default().fg(theme.text_dim))
                .padding(Padding::horizontal(1)),
        );
    frame.render_widget(proposed, columns[1]);

    let footer = Paragraph::new(Line::from(vec![
        Span::styled("Enter", Style::default().fg(theme.primary)),
        Span::styled(" apply changes  ", Style::default().fg(theme.text_muted)),
        Span::styled("Esc", Style::default().fg(theme.primary)),
        Span::styled(" back to blueprint", Style::default().fg(theme.text_muted)),
    ]));
    frame.render_widget(footer, chunks[2]);
}

fn kind_color(theme: &crate::tui::Theme, kind: ChangeKind) -> ratatui::style::Color {
    match kind {
        ChangeKind::Create => theme.success,
        ChangeKind::Rename => theme.accent,
        ChangeKind::Archive => theme.warning,
        ChangeKind::Move => theme.primary,
    }
}

// --- Hub dashboard ---

fn draw_hub(frame: &mut Frame, app: &App) {
    let theme = &app.theme;
    let area = frame.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Tabs
            Constraint::Min(6),    // Tab content
            Constraint::Length(1), // Footer
        ])
        .split(area);

    let titles: Vec<Line> = HubTab::ALL.iter().map(|t| Line::from(t.title())).collect();
    let selected = HubTab::ALL.iter().position(|t| *t == app.hub.tab).unwrap_or(0);
    let tabs = Tabs::new(titles)
        .select(selected)
        .style(Style::default().fg(theme.text_dim))
        .highlight_style(Style::default().fg(theme.primary).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme.border))
                .title(" File Hub ")
                .title_style(Style::default().fg(theme.text).add_modifier(Modifier::BOLD)),
        );
    frame.render_widget(tabs, chunks[0]);

    match app.hub.tab {
        HubTab::Overview => draw_hub_overview(frame, app, chunks[1]),
        HubTab::Files => draw_hub_files(frame, app, chunks[1]),
        HubTab::Sources => draw_hub_sources(frame, app, chunks[1]),
        HubTab::Rules => draw_hub_rules(frame, app, chunks[1]),
        HubTab::Audits => draw_hub_audits(frame, app, chunks[1]),
    }

    let footer = Paragraph::new(Line::from(vec![
        Span::styled("Tab", Style::default().fg(theme.primary)),
        Span::styled(" switch tab  ", Style::default().fg(theme.text_muted)),
        Span::styled("Esc", Style::default().fg(theme.primary)),
        Span::styled(" back to chat", Style::default().fg(theme.text_muted)),
    ]));
    frame.render_widget(footer, chunks[2]);
}

fn draw_hub_overview(frame: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;

    let lines = vec![
        Line::from(vec![
            Span::styled(
                total_files().to_string(),
                Style::default().fg(theme.primary).add_modifier(Modifier::BOLD),
            ),
            Span::styled(" files across ", Style::default().fg(theme.text_dim)),
            Span::styled(
                linked_sources().len().to_string(),
                Style::default().fg(theme.primary).add_modifier(Modifier::BOLD),
            ),
            Span::styled(" linked sources", Style::default().fg(theme.text_dim)),
        ]),
        Line::from(vec![
            Span::styled(
                DEDUPE_COLLAPSED.to_string(),
                Style::default().fg(theme.primary).add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                " duplicates collapsed by content hash",
                Style::default().fg(theme.text_dim),
            ),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            "Files from every linked source are consolidated here, auto-tagged \
             by channel, and deduplicated.",
            Style::default().fg(theme.text_muted),
        )),
    ];

    let overview = Paragraph::new(lines).wrap(Wrap { trim: true }).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.border))
            .padding(Padding::uniform(1)),
    );
    frame.render_widget(overview, area);
}

fn draw_hub_files(frame: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Search + filters toolbar
            Constraint::Min(3),    // File list (+ detail)
        ])
        .split(area);

    let toolbar = Paragraph::new(Line::from(vec![
        Span::styled("Search: ", Style::default().fg(theme.text_muted)),
        Span::styled(app.hub.query.as_str(), Style::default().fg(theme.text)),
        Span::styled("█", Style::default().fg(theme.text_muted)),
        Span::styled("   Source: ", Style::default().fg(theme.text_muted)),
        Span::styled(app.hub.source_label(), Style::default().fg(theme.primary)),
        Span::styled("   Channel: ", Style::default().fg(theme.text_muted)),
        Span::styled(app.hub.channel_label(), Style::default().fg(theme.primary)),
    ]))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.border)),
    );
    frame.render_widget(toolbar, chunks[0]);

    let files = filter_files(&app.hub.file_filter());

    let list_area = if app.hub.show_detail {
        let split = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
            .split(chunks[1]);
        if let Some(file) = files.get(app.hub.selected) {
            draw_file_detail(frame, app, file, split[1]);
        }
        split[0]
    } else {
        chunks[1]
    };

    let items: Vec<ListItem> = files
        .iter()
        .enumerate()
        .map(|(idx, file)| {
            let selected = idx == app.hub.selected;
            let style = if selected {
                Style::default().fg(theme.text).bg(theme.selected_bg)
            } else {
                Style::default().fg(theme.text)
            };
            let mut spans = vec![
                Span::styled(file.title, style.add_modifier(Modifier::BOLD)),
                Span::styled(format!("  {}", file.source), Style::default().fg(theme.text_dim)),
                Span::styled(format!("  {}", file.modified), Style::default().fg(theme.text_muted)),
            ];
            if file.duplicates > 0 {
                spans.push(Span::styled(
                    format!("  {} dupes", file.duplicates),
                    Style::default().fg(theme.warning),
                ));
            }
            ListItem::new(Line::from(spans))
        })
        .collect();

    let title = format!(" {} files ", files.len());
    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.border))
            .title(title)
            .title_style(Style::default().fg(theme.text_dim))
            .padding(Padding::horizontal(1)),
    );
    frame.render_widget(list, list_area);
}

fn draw_file_detail(frame: &mut Frame, app: &App, file: &crate::core::HubFile, area: Rect) {
    let theme = &app.theme;

    let tags = file.tags.join(", ");
    let lines = vec![
        Line::from(Span::styled(
            file.title,
            Style::default().fg(theme.text).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        detail_line(theme, "Source", file.source),
        detail_line(theme, "Tags", &tags),
        detail_line(theme, "Modified", file.modified),
        detail_line(theme, "Size", file.size),
        detail_line(theme, "Duplicates", &file.duplicates.to_string()),
    ];

    let detail = Paragraph::new(lines).wrap(Wrap { trim: true }).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.primary))
            .title(" Details ")
            .title_style(Style::default().fg(theme.text_dim))
            .padding(Padding::horizontal(1)),
    );
    frame.render_widget(detail, area);
}

fn detail_line<'a>(theme: &crate::tui::Theme, label: &'a str, value: &str) -> Line<'a> {
    Line::from(vec![
        Span::styled(format!("{label}: "), Style::default().fg(theme.text_muted)),
        Span::styled(value.to_string(), Style::default().fg(theme.text)),
    ])
}

fn draw_hub_sources(frame: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;

    let items: Vec<ListItem> = SOURCES
        .iter()
        .map(|source| {
            let status_color = match source.status {
                SourceStatus::Linked => theme.success,
                SourceStatus::Linking => theme.accent,
                SourceStatus::Unlinked => theme.text_muted,
                SourceStatus::Reauth => theme.warning,
            };
            ListItem::new(Line::from(vec![
                Span::styled(source.name, Style::default().fg(theme.text)),
                Span::styled(
                    format!("  [{}]", source.status.label()),
                    Style::default().fg(status_color),
                ),
                Span::styled(
                    format!("  {} files  last sync {}", source.files_count, source.last_sync),
                    Style::default().fg(theme.text_muted),
                ),
            ]))
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.border))
            .title(" Linked sources ")
            .title_style(Style::default().fg(theme.text_dim))
            .padding(Padding::horizontal(1)),
    );
    frame.render_widget(list, area);
}

fn draw_hub_rules(frame: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;

    let dedupe = if app.hub.dedupe_enabled { "[x]" } else { "[ ]" };
    let similarity = if app.hub.similarity_enabled { "[x]" } else { "[ ]" };

    let mut lines = vec![
        Line::from(Span::styled(
            "Deduplication",
            Style::default().fg(theme.primary).add_modifier(Modifier::BOLD),
        )),
        Line::from(vec![
            Span::styled(format!("  {dedupe} "), Style::default().fg(theme.text)),
            Span::styled("Collapse exact duplicates (content hash)", Style::default().fg(theme.text)),
            Span::styled("  press d to toggle", Style::default().fg(theme.text_muted)),
        ]),
        Line::from(vec![
            Span::styled(format!("  {similarity} "), Style::default().fg(theme.text_muted)),
            Span::styled(
                "Collapse near-duplicates (similarity)  coming soon",
                Style::default().fg(theme.text_muted),
            ),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            "Auto-tagging",
            Style::default().fg(theme.primary).add_modifier(Modifier::BOLD),
        )),
    ];

    for rule in &TAG_RULES {
        lines.push(Line::from(vec![
            Span::styled(format!("  if {} ", rule.condition), Style::default().fg(theme.text)),
            Span::styled(format!("-> {}", rule.tag), Style::default().fg(theme.secondary)),
        ]));
    }

    let rules = Paragraph::new(lines).wrap(Wrap { trim: true }).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.border))
            .padding(Padding::uniform(1)),
    );
    frame.render_widget(rules, area);
}

fn draw_hub_audits(frame: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;

    let items: Vec<ListItem> = AUDIT_LOG
        .iter()
        .map(|entry| {
            ListItem::new(Line::from(vec![
                Span::styled(entry.what, Style::default().fg(theme.text)),
                Span::styled(format!("  {}", entry.when), Style::default().fg(theme.text_muted)),
            ]))
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.border))
            .title(" Audit log ")
            .title_style(Style::default().fg(theme.text_dim))
            .padding(Padding::horizontal(1)),
    );
    frame.render_widget(list, area);
}

// --- Shared helpers ---

/// Center a fixed-size rect inside `area`, clamped to fit.
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered_rect_fits() {
        let area = Rect::new(0, 0, 100, 40);
        let rect = centered_rect(64, 22, area);
        assert_eq!(rect.width, 64);
        assert_eq!(rect.height, 22);
        assert_eq!(rect.x, 18);
        assert_eq!(rect.y, 9);
    }

    #[test]
    fn test_centered_rect_clamps_to_small_terminals() {
        let area = Rect::new(0, 0, 40, 10);
        let rect = centered_rect(64, 22, area);
        assert_eq!(rect.width, 40);
        assert_eq!(rect.height, 10);
    }
}
