//! Configuration management with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Global config: `$XDG_CONFIG_HOME/upskill/upskill.toml`
//! 3. Local config: `--config <file>`, or `./.upskill.toml` when present
//! 4. Environment variables: `UPSKILL_*` prefix, `__` between sections
//!    (`UPSKILL_RADIAL__RADIUS=300`)

use std::path::{Path, PathBuf};

use config::{Config, ConfigError, Environment, File, FileFormat};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::application::ApplicationError;
use crate::domain::{expand_env_vars, AiArea, Point, Role};

/// Logical canvas of the radial process diagram.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct RadialCanvas {
    pub width: f64,
    pub height: f64,
    pub center_x: f64,
    pub center_y: f64,
    /// Radius of the circle the nodes sit on
    pub radius: f64,
    pub node_radius: f64,
    /// Center disc holding the title and the details view
    pub exclusion_radius: f64,
}

impl Default for RadialCanvas {
    fn default() -> Self {
        Self {
            width: 1000.0,
            height: 900.0,
            center_x: 500.0,
            center_y: 450.0,
            radius: 280.0,
            node_radius: 35.0,
            exclusion_radius: 180.0,
        }
    }
}

impl RadialCanvas {
    pub fn center(&self) -> Point {
        Point::new(self.center_x, self.center_y)
    }
}

/// Logical canvas shared by the process pie and the skills donut.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct PieCanvas {
    pub width: f64,
    pub height: f64,
    pub center_x: f64,
    pub center_y: f64,
    /// Inner edge of the skills donut's area ring
    pub hole_radius: f64,
    /// Boundary between the inner and the outer ring
    pub inner_radius: f64,
    pub outer_radius: f64,
}

impl Default for PieCanvas {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 700.0,
            center_x: 400.0,
            center_y: 350.0,
            hole_radius: 60.0,
            inner_radius: 150.0,
            outer_radius: 280.0,
        }
    }
}

impl PieCanvas {
    pub fn center(&self) -> Point {
        Point::new(self.center_x, self.center_y)
    }
}

/// Colours, as `#rrggbb`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Palette {
    pub contributor: String,
    pub team_manager: String,
    pub highlight: String,
    pub edge: String,
    pub background: String,
    pub title: String,
    pub text: String,
    /// Terminal steps of the workflow
    pub completed: String,
    pub fundamentals: String,
    pub sdlc: String,
    pub solution: String,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            contributor: "#4A90E2".into(),
            team_manager: "#FFC107".into(),
            highlight: "#00D9FF".into(),
            edge: "#666666".into(),
            background: "#1a1a2e".into(),
            title: "#6B46C1".into(),
            text: "#ffffff".into(),
            completed: "#10B981".into(),
            fundamentals: "#4A90E2".into(),
            sdlc: "#50C878".into(),
            solution: "#FF6B6B".into(),
        }
    }
}

impl Palette {
    pub fn role(&self, role: Role) -> &str {
        match role {
            Role::Contributor => &self.contributor,
            Role::TeamManager => &self.team_manager,
        }
    }

    pub fn area(&self, area: AiArea) -> &str {
        match area {
            AiArea::Fundamentals => &self.fundamentals,
            AiArea::DrivenSdlc => &self.sdlc,
            AiArea::DrivenSoftwareSolution => &self.solution,
        }
    }
}

/// Unified configuration for upskill.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Settings {
    /// Directory rendered diagrams are written to (default: current directory)
    pub output_dir: PathBuf,
    pub radial: RadialCanvas,
    pub pie: PieCanvas,
    pub palette: Palette,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("."),
            radial: RadialCanvas::default(),
            pie: PieCanvas::default(),
            palette: Palette::default(),
        }
    }
}

/// Get the XDG config directory for upskill.
pub fn global_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "upskill").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the global config file.
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("upskill.toml"))
}

/// Local config picked up from the working directory.
pub fn local_config_path() -> PathBuf {
    PathBuf::from(".upskill.toml")
}

impl Settings {
    /// Load settings with layered precedence.
    ///
    /// An explicit `config_file` must exist; without one, `./.upskill.toml` is
    /// used if present.
    pub fn load(config_file: Option<&Path>) -> Result<Self, ApplicationError> {
        let defaults = toml::to_string(&Self::default()).map_err(|e| ApplicationError::Config {
            message: format!("serialize defaults: {e}"),
        })?;

        let mut builder = Config::builder().add_source(File::from_str(&defaults, FileFormat::Toml));

        if let Some(global_path) = global_config_path() {
            if global_path.exists() {
                debug!("load: global config {}", global_path.display());
                builder = builder.add_source(File::from(global_path).required(false));
            }
        }

        match config_file {
            Some(path) => {
                if !path.exists() {
                    return Err(ApplicationError::Config {
                        message: format!("config file not found: {}", path.display()),
                    });
                }
                debug!("load: explicit config {}", path.display());
                builder = builder.add_source(File::from(path).format(FileFormat::Toml).required(true));
            }
            None => {
                let local = local_config_path();
                if local.exists() {
                    debug!("load: local config {}", local.display());
                    builder = builder.add_source(File::from(local).format(FileFormat::Toml).required(false));
                }
            }
        }

        builder = builder.add_source(
            Environment::with_prefix("UPSKILL")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let config = builder.build().map_err(config_err)?;
        let mut settings: Self = config.try_deserialize().map_err(config_err)?;

        settings.expand_paths();
        settings.validate()?;

        Ok(settings)
    }

    /// Expand shell variables and tilde in path-like fields.
    fn expand_paths(&mut self) {
        let expanded = expand_env_vars(self.output_dir.to_string_lossy().as_ref());
        self.output_dir = PathBuf::from(expanded);
    }

    /// Reject geometry that cannot be drawn.
    fn validate(&self) -> Result<(), ApplicationError> {
        let radial = &self.radial;
        let pie = &self.pie;
        let checks = [
            (radial.width > 0.0 && radial.height > 0.0, "radial canvas must have a positive size"),
            (radial.radius > 0.0, "radial.radius must be positive"),
            (radial.node_radius > 0.0, "radial.node_radius must be positive"),
            (pie.width > 0.0 && pie.height > 0.0, "pie canvas must have a positive size"),
            (
                0.0 <= pie.hole_radius && pie.hole_radius < pie.inner_radius && pie.inner_radius < pie.outer_radius,
                "pie radii must satisfy 0 <= hole_radius < inner_radius < outer_radius",
            ),
        ];
        match checks.iter().find(|(ok, _)| !ok) {
            Some((_, message)) => Err(ApplicationError::Config {
                message: message.to_string(),
            }),
            None => Ok(()),
        }
    }

    /// Show the effective configuration as TOML.
    pub fn to_toml(&self) -> Result<String, ApplicationError> {
        toml::to_string_pretty(self).map_err(|e| ApplicationError::Config {
            message: format!("serialize config: {e}"),
        })
    }

    /// Generate a template config file.
    pub fn template() -> String {
        r##"# upskill configuration
#
# Locations (by precedence, lowest to highest):
#   Global: ~/.config/upskill/upskill.toml
#   Local:  ./.upskill.toml or --config <file>
#   Env:    UPSKILL_* environment variables, e.g. UPSKILL_RADIAL__RADIUS=300

# Directory rendered SVG files are written to
# output_dir = "."

[radial]
# width = 1000.0
# height = 900.0
# center_x = 500.0
# center_y = 450.0
# radius = 280.0
# node_radius = 35.0
# exclusion_radius = 180.0

[pie]
# width = 800.0
# height = 700.0
# center_x = 400.0
# center_y = 350.0
# hole_radius = 60.0
# inner_radius = 150.0
# outer_radius = 280.0

[palette]
# contributor = "#4A90E2"
# team_manager = "#FFC107"
# highlight = "#00D9FF"
# edge = "#666666"
# background = "#1a1a2e"
# title = "#6B46C1"
# text = "#ffffff"
# completed = "#10B981"
# fundamentals = "#4A90E2"
# sdlc = "#50C878"
# solution = "#FF6B6B"
"##
        .to_string()
    }
}

fn config_err(e: ConfigError) -> ApplicationError {
    ApplicationError::Config {
        message: e.to_string(),
    }
}
