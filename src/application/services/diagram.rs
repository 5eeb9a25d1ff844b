//! Diagram service
//!
//! Replays interaction events against the shared process table, composes the
//! requested view and writes it out as SVG.

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::sync::Arc;

use tracing::{debug, info};

use crate::application::{ApplicationError, ApplicationResult, IoResultExt};
use crate::config::Settings;
use crate::data::{chart_steps, process_steps, skills_for, ALTERNATE_ROUTES, PROGRAM_TITLE};
use crate::domain::{Event, InteractionState, InteractionStore, ProcessStep, SkillRole};
use crate::infrastructure::traits::FileSystem;
use crate::render::{compose_process_pie, compose_radial, compose_skills_donut, to_svg, RadialView};

/// Which view to render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiagramKind {
    Radial,
    Pie,
    Skills,
}

impl DiagramKind {
    /// File name used when no output path is given.
    pub fn default_file_name(&self, role: Option<SkillRole>) -> String {
        match (self, role) {
            (DiagramKind::Radial, _) => "upskill-radial.svg".into(),
            (DiagramKind::Pie, _) => "upskill-pie.svg".into(),
            (DiagramKind::Skills, Some(role)) => format!("upskill-skills-{}.svg", role.slug()),
            (DiagramKind::Skills, None) => "upskill-skills.svg".into(),
        }
    }
}

impl fmt::Display for DiagramKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            DiagramKind::Radial => "radial",
            DiagramKind::Pie => "pie",
            DiagramKind::Skills => "skills",
        };
        f.write_str(name)
    }
}

/// Input of a render.
#[derive(Debug, Clone, PartialEq)]
pub struct DiagramRequest {
    pub kind: DiagramKind,
    /// Pointer events replayed from the idle state, in order.
    pub events: Vec<Event>,
    /// Job family of the skills donut.
    pub role: Option<SkillRole>,
}

impl DiagramRequest {
    pub fn new(kind: DiagramKind) -> Self {
        Self {
            kind,
            events: Vec::new(),
            role: None,
        }
    }

    /// Parse `hover=<name>`-style event strings.
    pub fn with_events<S: AsRef<str>>(mut self, events: &[S]) -> ApplicationResult<Self> {
        for raw in events {
            self.events.push(Event::from_str(raw.as_ref())?);
        }
        Ok(self)
    }

    pub fn with_role(mut self, role: SkillRole) -> Self {
        self.role = Some(role);
        self
    }
}

/// Result of a render, before it is written anywhere.
#[derive(Debug, Clone)]
pub struct RenderedDiagram {
    pub kind: DiagramKind,
    pub role: Option<SkillRole>,
    pub svg: String,
    /// State after replaying the events.
    pub state: InteractionState,
    /// Number of state changes the events caused.
    pub revision: u64,
    /// Events that left the state untouched.
    pub ignored_events: Vec<Event>,
}

/// Service composing and writing diagrams.
pub struct DiagramService {
    fs: Arc<dyn FileSystem>,
    settings: Arc<Settings>,
    steps: Vec<ProcessStep>,
}

impl DiagramService {
    /// Create a new diagram service over the built-in process table.
    pub fn new(fs: Arc<dyn FileSystem>, settings: Arc<Settings>) -> Self {
        Self::with_steps(fs, settings, process_steps())
    }

    /// Create a diagram service over a custom process table.
    pub fn with_steps(fs: Arc<dyn FileSystem>, settings: Arc<Settings>, steps: Vec<ProcessStep>) -> Self {
        Self { fs, settings, steps }
    }

    /// Compose the requested view as SVG.
    pub fn render(&self, request: &DiagramRequest) -> ApplicationResult<RenderedDiagram> {
        debug!("render: kind={}, {} events", request.kind, request.events.len());

        // The pie has no segment for the completion marker.
        let steps = match request.kind {
            DiagramKind::Pie => chart_steps(&self.steps),
            DiagramKind::Radial | DiagramKind::Skills => self.steps.clone(),
        };

        let mut store = InteractionStore::new();
        let ignored_events: Vec<Event> = store.replay(&request.events, &steps).into_iter().cloned().collect();
        for event in &ignored_events {
            debug!("render: event '{}' left state unchanged", event);
        }

        let settings = &self.settings;
        let scene = match request.kind {
            DiagramKind::Radial => compose_radial(&RadialView {
                steps: &steps,
                state: store.state(),
                canvas: &settings.radial,
                palette: &settings.palette,
                title: PROGRAM_TITLE,
                alternates: ALTERNATE_ROUTES,
            }),
            DiagramKind::Pie => compose_process_pie(
                &steps,
                store.state(),
                &settings.pie,
                &settings.palette,
                PROGRAM_TITLE,
            ),
            DiagramKind::Skills => {
                let role = request.role.ok_or_else(|| ApplicationError::InvalidRequest {
                    message: "the skills diagram needs a role".into(),
                })?;
                compose_skills_donut(skills_for(role), &settings.pie, &settings.palette)
            }
        };

        Ok(RenderedDiagram {
            kind: request.kind,
            role: request.role,
            svg: to_svg(&scene),
            state: store.state().clone(),
            revision: store.revision(),
            ignored_events,
        })
    }

    /// Where `diagram` is written when no explicit path is given.
    pub fn default_output_path(&self, diagram: &RenderedDiagram) -> PathBuf {
        self.settings
            .output_dir
            .join(diagram.kind.default_file_name(diagram.role))
    }

    /// Write `diagram` to `output`, or to the configured output directory.
    ///
    /// Missing parent directories are created.
    pub fn write(&self, diagram: &RenderedDiagram, output: Option<&Path>) -> ApplicationResult<PathBuf> {
        let path = output
            .map(Path::to_path_buf)
            .unwrap_or_else(|| self.default_output_path(diagram));

        if self.fs.is_dir(&path) {
            return Err(ApplicationError::InvalidRequest {
                message: format!("output path is a directory: {}", path.display()),
            });
        }
        self.fs
            .ensure_parent(&path)
            .with_path_context("create output directory", &path)?;
        self.fs
            .write(&path, &diagram.svg)
            .with_path_context("write diagram", &path)?;

        info!("write: {} diagram -> {}", diagram.kind, path.display());
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::traits::RealFileSystem;

    fn service() -> DiagramService {
        DiagramService::new(Arc::new(RealFileSystem), Arc::new(Settings::default()))
    }

    #[test]
    fn given_skills_without_role_when_rendering_then_rejects_request() {
        let result = service().render(&DiagramRequest::new(DiagramKind::Skills));
        assert!(matches!(result, Err(ApplicationError::InvalidRequest { .. })));
    }

    #[test]
    fn given_malformed_event_when_building_request_then_returns_domain_error() {
        let result = DiagramRequest::new(DiagramKind::Radial).with_events(&["drag=1"]);
        assert!(matches!(result, Err(ApplicationError::Domain(_))));
    }

    #[test]
    fn given_repeated_click_when_rendering_then_second_click_is_ignored() {
        let request = DiagramRequest::new(DiagramKind::Radial)
            .with_events(&["click=Apply to program", "click=Apply to program"])
            .unwrap();

        let diagram = service().render(&request).unwrap();

        assert_eq!(diagram.revision, 1);
        assert_eq!(diagram.ignored_events.len(), 1);
        assert_eq!(diagram.state, InteractionState::Selected("Apply to program".into()));
    }

    #[test]
    fn given_kind_and_role_when_naming_output_then_uses_role_slug() {
        assert_eq!(
            DiagramKind::Skills.default_file_name(Some(SkillRole::QaTestAutomation)),
            "upskill-skills-qa.svg"
        );
        assert_eq!(DiagramKind::Radial.default_file_name(None), "upskill-radial.svg");
    }
}
