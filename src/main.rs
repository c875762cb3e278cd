//! Huddle - terminal team workspace prototype.
//!
//! Opens the interactive workspace by default; subcommands print the
//! blueprint and changeset catalogs for scripting.

use std::io;

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{generate, Shell};
use serde::Serialize;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use huddle::core::{
    generate as generate_blueprint, summary_counts, ChangeKind, WizardAnswers, CHANGES,
    CORE_CHANNELS, NAMING_EXAMPLE, NAMING_PATTERN, SUBGROUPS, WORKSTREAMS,
};
use huddle::tui::{run_tui, Theme};
use huddle::App;

/// Terminal team workspace prototype - chat, structure wizard, and file hub
#[derive(Parser)]
#[command(name = "huddle")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    command: Option<Commands>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Color theme (overrides the config file)
    #[arg(short, long, global = true)]
    theme: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Open the interactive workspace (default)
    Run,

    /// Print the recommended communication blueprint
    Blueprint {
        /// Output format (text, json)
        #[arg(short, long, default_value = "text")]
        format: String,
    },

    /// Print the changeset the blueprint would apply
    Changeset {
        /// Output format (text, json)
        #[arg(short, long, default_value = "text")]
        format: String,
    },

    /// List available color themes
    Themes,

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        shell: Shell,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Setup logging
    let filter = if cli.verbose { EnvFilter::new("debug") } else { EnvFilter::new("warn") };

    tracing_subscriber::registry().with(fmt::layer().with_target(false)).with(filter).init();

    match cli.command {
        None | Some(Commands::Run) => {
            cmd_run(cli.theme.as_deref())?;
        }
        Some(Commands::Blueprint { format }) => {
            cmd_blueprint(&format)?;
        }
        Some(Commands::Changeset { format }) => {
            cmd_changeset(&format)?;
        }
        Some(Commands::Themes) => {
            cmd_themes();
        }
        Some(Commands::Completions { shell }) => {
            cmd_completions(shell);
        }
    }

    Ok(())
}

/// Open the interactive workspace.
fn cmd_run(theme_override: Option<&str>) -> Result<()> {
    let mut app = App::new()?;

    if let Some(name) = theme_override {
        match Theme::by_name(name) {
            Some(theme) => app.theme = theme,
            None => {
                anyhow::bail!(
                    "unknown theme '{}' (available: {})",
                    name,
                    Theme::available_themes().join(", ")
                );
            }
        }
    }

    run_tui(app)
}

#[derive(Serialize)]
struct BlueprintReport {
    summary: huddle::core::RecommendationSummary,
    core_channels: Vec<huddle::core::CoreChannel>,
    workstreams: Vec<huddle::core::Workstream>,
    subgroups: Vec<huddle::core::Subgroup>,
    naming_pattern: &'static str,
    naming_example: &'static str,
}

/// Print the blueprint catalog.
fn cmd_blueprint(format: &str) -> Result<()> {
    let summary = generate_blueprint(&WizardAnswers::default());

    match format {
        "json" => {
            let report = BlueprintReport {
                summary,
                core_channels: CORE_CHANNELS.to_vec(),
                workstreams: WORKSTREAMS.to_vec(),
                subgroups: SUBGROUPS.to_vec(),
                naming_pattern: NAMING_PATTERN,
                naming_example: NAMING_EXAMPLE,
            };
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        _ => {
            println!("Recommended Communication Blueprint (v1 Draft)");
            println!(
                "{} channels, {} subgroups, {} archive candidates, budget {}/{}",
                summary.channels,
                summary.subgroups,
                summary.archive_candidates,
                summary.channel_budget_used,
                summary.channel_budget_max
            );
            println!();
            println!("Core channels:");
            for channel in &CORE_CHANNELS {
                println!("  #{:<16} [{}]", channel.name, channel.access);
            }
            println!();
            println!("Workstreams:");
            for ws in &WORKSTREAMS {
                println!("  #{:<28} {}", ws.name, ws.description);
            }
            println!();
            println!("Committees:");
            for group in &SUBGROUPS {
                println!("  {} ({} members)", group.name, group.members);
                for channel in group.channels {
                    println!("    #{channel}");
                }
            }
            println!();
            println!("Naming: {NAMING_PATTERN} (e.g. {NAMING_EXAMPLE})");
        }
    }

    Ok(())
}

#[derive(Serialize)]
struct ChangesetReport {
    counts: Vec<ChangeCount>,
    changes: Vec<ChangeRow>,
}

#[derive(Serialize)]
struct ChangeCount {
    kind: &'static str,
    count: usize,
}

#[derive(Serialize)]
struct ChangeRow {
    kind: &'static str,
    name: &'static str,
    rationale: &'static str,
}

/// Print the changeset catalog.
fn cmd_changeset(format: &str) -> Result<()> {
    match format {
        "json" => {
            let report = ChangesetReport {
                counts: summary_counts()
                    .iter()
                    .map(|(kind, count)| ChangeCount { kind: kind.label(), count: *count })
                    .collect(),
                changes: CHANGES
                    .iter()
                    .map(|change| ChangeRow {
                        kind: change.kind.label(),
                        name: change.name,
                        rationale: change.rationale,
                    })
                    .collect(),
            };
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        _ => {
            println!("Change Set Preview");
            for (kind, count) in summary_counts() {
                println!("  {:<8} {}", kind.label(), count);
            }
            println!();
            for kind in ChangeKind::ALL {
                println!("{}:", kind.label());
                for change in CHANGES.iter().filter(|c| c.kind == kind) {
                    println!("  {:<36} {}", change.name, change.rationale);
                }
            }
        }
    }

    Ok(())
}

/// List the built-in themes.
fn cmd_themes() {
    println!("Available themes:");
    for name in Theme::available_themes() {
        println!("  {name}");
    }
}

/// Generate shell completions.
fn cmd_completions(shell: Shell) {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    generate(shell, &mut cmd, name, &mut io::stdout());
}
