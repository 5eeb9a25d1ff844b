//! Command execution

use std::io;
use std::path::Path;

use clap::CommandFactory;
use clap_complete::{generate, Shell};
use itertools::Itertools;
use termtree::Tree;
use tracing::{debug, instrument};

use crate::application::services::{DiagramRequest, StaffingInput, StaffingReport, StaffingService};
use crate::application::IoResultExt;
use crate::cli::args::{Cli, Commands, ConfigCommands, DiagramArg, OutputFormat};
use crate::cli::output;
use crate::cli::{CliError, CliResult};
use crate::config::{global_config_dir, global_config_path, local_config_path, Settings};
use crate::data::{
    process_steps, role_skills, sequence_order, skills_for, CORE_TEAM_OVERVIEW, CORE_TEAM_ROLES, PROGRAM_OVERVIEW,
    PROGRAM_TITLE, STREAM_OVERVIEW,
};
use crate::domain::staffing::{DEFAULT_PARTICIPANTS, QUICK_SELECT};
use crate::domain::{find_step, highlight_set_for, AiArea, DomainError, RoleSkills, SkillRole};
use crate::infrastructure::di::ServiceContainer;
use crate::infrastructure::InfraError;

/// Execute the parsed command line.
pub fn execute(cli: &Cli) -> CliResult<()> {
    match &cli.command {
        Some(Commands::Render {
            kind,
            events,
            role,
            output,
        }) => {
            let container = load_container(cli)?;
            cmd_render(&container, *kind, events, role.as_deref(), output.as_deref())
        }
        Some(Commands::Staffing {
            participants,
            slider,
            presets,
            format,
        }) => cmd_staffing(*participants, *slider, *presets, *format),
        Some(Commands::Steps) => cmd_steps(),
        Some(Commands::Highlight { name }) => cmd_highlight(name),
        Some(Commands::Skills { role }) => cmd_skills(role.as_deref()),
        Some(Commands::Team) => cmd_team(),
        Some(Commands::Config { command }) => cmd_config(cli, command),
        Some(Commands::Completion { shell }) => cmd_completion(*shell),
        None => Err(CliError::Usage(
            "no command given, see `upskill --help`".into(),
        )),
    }
}

fn load_container(cli: &Cli) -> CliResult<ServiceContainer> {
    let settings = Settings::load(cli.config.as_deref())?;
    Ok(ServiceContainer::new(settings))
}

// ============================================================
// Diagrams
// ============================================================

#[instrument(skip(container))]
fn cmd_render(
    container: &ServiceContainer,
    kind: DiagramArg,
    events: &[String],
    role: Option<&str>,
    out: Option<&Path>,
) -> CliResult<()> {
    let mut request = DiagramRequest::new(kind.into()).with_events(events)?;
    if let Some(role) = role {
        request = request.with_role(role.parse::<SkillRole>()?);
    }

    let service = container.diagram_service();
    let diagram = service.render(&request)?;
    debug!("cmd_render: state={:?} revision={}", diagram.state, diagram.revision);
    for event in &diagram.ignored_events {
        output::warning(&format!("event '{event}' did not change the diagram state"));
    }

    if out == Some(Path::new("-")) {
        print!("{}", diagram.svg);
        return Ok(());
    }

    let path = service.write(&diagram, out)?;
    output::action("Wrote", &path.display());
    Ok(())
}

// ============================================================
// Staffing
// ============================================================

#[instrument]
fn cmd_staffing(participants: Option<i64>, slider: Option<f64>, presets: bool, format: OutputFormat) -> CliResult<()> {
    let service = StaffingService::new();

    if presets {
        let reports = service.table(&QUICK_SELECT);
        match format {
            OutputFormat::Toml => output::info(&service.table_to_toml(&reports)?),
            OutputFormat::Text => {
                output::header("Staffing presets");
                for report in &reports {
                    let r = &report.result;
                    output::detail(&format!(
                        "{:>5} participants: {:>3} streams, {:>3} stream managers, {:>3} tech leads, {:>4} staff",
                        r.participants, r.streams, r.stream_managers, r.tech_leads, r.total_staff
                    ));
                }
            }
        }
        return Ok(());
    }

    let input = match (participants, slider) {
        (Some(_), Some(_)) => {
            return Err(CliError::Usage(
                "give either a participant count or --slider, not both".into(),
            ))
        }
        (None, Some(position)) => {
            if !(0.0..=100.0).contains(&position) {
                output::warning(&format!("slider position {position} is outside 0..=100"));
            }
            StaffingInput::Slider(position)
        }
        (Some(count), None) => StaffingInput::Participants(count),
        (None, None) => StaffingInput::Participants(i64::from(DEFAULT_PARTICIPANTS)),
    };

    let report = service.report(input);
    if report.clamped {
        let (min, max) = service.range();
        output::warning(&format!(
            "participants must be within {min}..={max}, using {}",
            report.result.participants
        ));
    }

    match format {
        OutputFormat::Toml => output::info(&service.to_toml(&report)?),
        OutputFormat::Text => print_staffing(&report),
    }
    Ok(())
}

fn print_staffing(report: &StaffingReport) {
    let r = &report.result;
    output::header(&format!("Staffing for {} participants", r.participants));
    output::detail(&format!("Core team:          {}", r.core_team));
    output::detail(&format!(
        "Upskill streams:    {} (up to {} mentees each)",
        r.streams, r.mentees_per_stream
    ));
    output::detail(&format!("Stream managers:    {}", r.stream_managers));
    output::detail(&format!("Tech leads:         {}", r.tech_leads));
    output::success(&format!("Total staff: {}", r.total_staff));
    output::detail(&format!(
        "Average mentees per stream: {}",
        report.average_mentees_per_stream
    ));
    if let Some(last) = report.last_stream_mentees {
        output::detail(&format!("Last stream holds {last} mentees"));
    }
    output::detail(&format!("Slider position: {:.2}", report.slider_position));
}

// ============================================================
// Process
// ============================================================

#[instrument]
fn cmd_steps() -> CliResult<()> {
    let steps = process_steps();
    output::header(PROGRAM_TITLE);
    output::info(PROGRAM_OVERVIEW);
    output::info("");

    for step in sequence_order(&steps) {
        output::info(&format!(
            "{:>2}. {} [{}] ({})",
            step.step_number, step.name, step.role, step.phase
        ));
        if !step.connects_to.is_empty() {
            let next = step.connects_to.iter().join(", ");
            output::detail(&format!("→ {next}"));
        }
    }
    Ok(())
}

#[instrument]
fn cmd_highlight(name: &str) -> CliResult<()> {
    let steps = process_steps();
    let step = find_step(&steps, name).ok_or_else(|| DomainError::UnknownStep(name.to_string()))?;

    let connected = highlight_set_for(&steps, name);
    output::header(&format!("{} [{}]", step.name, step.role));
    if connected.is_empty() {
        output::detail("no connected steps");
        return Ok(());
    }
    for other in &connected {
        let outgoing = step.connects(other);
        let incoming = find_step(&steps, other).is_some_and(|s| s.connects(name));
        let arrow = match (incoming, outgoing) {
            (true, true) => "↔",
            (true, false) => "←",
            _ => "→",
        };
        output::detail(&format!("{arrow} {other}"));
    }
    Ok(())
}

// ============================================================
// Skills & team
// ============================================================

fn skills_tree(entry: &RoleSkills) -> Tree<String> {
    let areas = AiArea::ALL.into_iter().filter_map(|area| {
        let skills = entry.skills_in(area).map(|s| Tree::new(s.name.to_string())).collect_vec();
        (!skills.is_empty()).then(|| Tree::new(format!("{} ({})", area, skills.len())).with_leaves(skills))
    });
    Tree::new(entry.role.label().to_string()).with_leaves(areas)
}

#[instrument]
fn cmd_skills(role: Option<&str>) -> CliResult<()> {
    match role {
        Some(role) => {
            let role: SkillRole = role.parse()?;
            output::info(&skills_tree(skills_for(role)));
        }
        None => {
            let tree = Tree::new("AI skills by role".to_string()).with_leaves(role_skills().iter().map(skills_tree));
            output::info(&tree);
        }
    }
    Ok(())
}

#[instrument]
fn cmd_team() -> CliResult<()> {
    output::header("Core team");
    output::info(CORE_TEAM_OVERVIEW);
    for role in CORE_TEAM_ROLES {
        output::success_detail(role.name);
        output::detail(&format!("  {}", role.description));
    }
    output::info("");
    output::header("Upskill streams");
    output::info(STREAM_OVERVIEW);
    Ok(())
}

// ============================================================
// Config
// ============================================================

#[instrument(skip(cli))]
fn cmd_config(cli: &Cli, command: &ConfigCommands) -> CliResult<()> {
    match command {
        ConfigCommands::Show => {
            let settings = Settings::load(cli.config.as_deref())?;
            output::info(&settings.to_toml()?);
        }
        ConfigCommands::Template => output::info(&Settings::template()),
        ConfigCommands::Init { global } => {
            let path = if *global {
                global_config_path()
                    .ok_or_else(|| CliError::Usage("cannot determine global config directory".into()))?
            } else {
                local_config_path()
            };
            let container = ServiceContainer::new(Settings::default());
            if container.fs.exists(&path) {
                return Err(CliError::Usage(format!(
                    "config already exists: {}",
                    path.display()
                )));
            }
            container
                .fs
                .ensure_parent(&path)
                .with_path_context("create config directory", &path)?;
            container
                .fs
                .write(&path, &Settings::template())
                .with_path_context("write config template", &path)?;
            output::action("Created", &path.display());
        }
        ConfigCommands::Path => {
            match global_config_dir() {
                Some(dir) => output::action("Global config dir", &dir.display()),
                None => output::warning("cannot determine global config directory"),
            }
            if let Some(path) = global_config_path() {
                output::detail(&format!(
                    "{} ({})",
                    path.display(),
                    if path.exists() { "present" } else { "absent" }
                ));
            }
            let local = cli.config.clone().unwrap_or_else(local_config_path);
            output::action("Local config", &local.display());
            output::detail(if local.exists() { "present" } else { "absent" });
        }
    }
    Ok(())
}

// ============================================================
// Completion
// ============================================================

fn cmd_completion(shell: Shell) -> CliResult<()> {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    let mut stdout = io::stdout();
    generate(shell, &mut cmd, name, &mut stdout);
    io::Write::flush(&mut stdout).map_err(|e| InfraError::io("flush completion script", e))?;
    Ok(())
}
