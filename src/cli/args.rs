//! CLI argument definitions using clap

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand, ValueEnum, ValueHint};

use crate::application::services::DiagramKind;

/// AI Upskill program visuals: radial process diagrams, pie charts and a staffing calculator
#[derive(Parser, Debug)]
#[command(name = "upskill")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Increase log verbosity (-d info, -dd debug, -ddd trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub debug: u8,

    /// Config file (default: ./.upskill.toml when present)
    #[arg(short, long, global = true, value_hint = ValueHint::FilePath)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Render a diagram as SVG
    Render {
        /// Diagram to render
        #[arg(value_enum)]
        kind: DiagramArg,

        /// Interaction event, replayed in order: hover=NAME, unhover, click=NAME, background
        #[arg(short, long = "event", value_name = "EVENT")]
        events: Vec<String>,

        /// Job family for the skills diagram (slug or label)
        #[arg(short, long)]
        role: Option<String>,

        /// Output file (default: <output_dir>/upskill-<kind>.svg); `-` writes to stdout
        #[arg(short, long, value_hint = ValueHint::FilePath)]
        output: Option<PathBuf>,
    },

    /// Compute streams and staff for a participant count
    Staffing {
        /// Number of participants (clamped to 10..=1000)
        #[arg(conflicts_with_all = ["slider", "presets"], allow_negative_numbers = true)]
        participants: Option<i64>,

        /// Slider position 0..=100 instead of a count
        #[arg(short, long, conflicts_with = "presets")]
        slider: Option<f64>,

        /// Show the quick-select presets side by side
        #[arg(short, long)]
        presets: bool,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// List process steps in sequence order
    Steps,

    /// Show the steps connected to a step
    Highlight {
        /// Step name
        name: String,
    },

    /// Show AI skills per job family
    Skills {
        /// Job family (slug or label); all when omitted
        role: Option<String>,
    },

    /// Show the core team and stream structure
    Team,

    /// Manage settings
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },

    /// Generate shell completions
    Completion {
        /// Shell type
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show merged config
    Show,

    /// Print config template
    Template,

    /// Create config template file
    Init {
        /// Create global config
        #[arg(short, long)]
        global: bool,
    },

    /// Show config paths
    Path,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiagramArg {
    /// Radial process diagram
    Radial,
    /// Process steps as a pie ring
    Pie,
    /// AI skills donut of one job family
    Skills,
}

impl From<DiagramArg> for DiagramKind {
    fn from(arg: DiagramArg) -> Self {
        match arg {
            DiagramArg::Radial => DiagramKind::Radial,
            DiagramArg::Pie => DiagramKind::Pie,
            DiagramArg::Skills => DiagramKind::Skills,
        }
    }
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Toml,
}
