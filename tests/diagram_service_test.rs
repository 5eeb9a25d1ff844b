//! Tests for DiagramService

use std::sync::Arc;

use tempfile::TempDir;

use upskill::application::services::{DiagramKind, DiagramRequest, DiagramService};
use upskill::application::ApplicationError;
use upskill::config::Settings;
use upskill::domain::SkillRole;
use upskill::infrastructure::di::ServiceContainer;
use upskill::infrastructure::traits::RealFileSystem;

fn service_writing_to(dir: &TempDir) -> DiagramService {
    let settings = Settings {
        output_dir: dir.path().join("out"),
        ..Settings::default()
    };
    ServiceContainer::with_deps(settings, Arc::new(RealFileSystem)).diagram_service()
}

#[test]
fn given_no_output_path_when_writing_then_creates_output_dir_and_default_file() {
    let temp = TempDir::new().unwrap();
    let service = service_writing_to(&temp);
    let diagram = service.render(&DiagramRequest::new(DiagramKind::Radial)).unwrap();

    let path = service.write(&diagram, None).unwrap();

    assert_eq!(path, temp.path().join("out").join("upskill-radial.svg"));
    let written = std::fs::read_to_string(&path).unwrap();
    assert!(written.starts_with("<svg"));
    assert_eq!(written, diagram.svg);
}

#[test]
fn given_explicit_nested_path_when_writing_then_creates_parents() {
    let temp = TempDir::new().unwrap();
    let service = service_writing_to(&temp);
    let diagram = service.render(&DiagramRequest::new(DiagramKind::Pie)).unwrap();
    let target = temp.path().join("a").join("b").join("pie.svg");

    let path = service.write(&diagram, Some(&target)).unwrap();

    assert_eq!(path, target);
    assert!(target.exists());
}

#[test]
fn given_directory_as_output_when_writing_then_rejects_request() {
    let temp = TempDir::new().unwrap();
    let service = service_writing_to(&temp);
    let diagram = service.render(&DiagramRequest::new(DiagramKind::Pie)).unwrap();

    let result = service.write(&diagram, Some(temp.path()));

    assert!(matches!(result, Err(ApplicationError::InvalidRequest { .. })));
}

#[test]
fn given_click_event_when_rendering_radial_then_marks_selection_and_shows_details() {
    let temp = TempDir::new().unwrap();
    let service = service_writing_to(&temp);
    let request = DiagramRequest::new(DiagramKind::Radial)
        .with_events(&["click=Send knowledge check"])
        .unwrap();

    let diagram = service.render(&request).unwrap();

    assert!(diagram.svg.contains("<g id=\"node-6\" class=\"node team-manager active\">"));
    assert!(diagram.svg.contains("class=\"node contributor connected\""));
    assert!(diagram.svg.contains("Team Manager sends a knowledge check"));
    assert!(diagram.ignored_events.is_empty());
}

#[test]
fn given_unknown_step_event_when_rendering_then_reported_as_ignored() {
    let temp = TempDir::new().unwrap();
    let service = service_writing_to(&temp);
    let request = DiagramRequest::new(DiagramKind::Radial)
        .with_events(&["hover=No such step"])
        .unwrap();

    let diagram = service.render(&request).unwrap();

    assert_eq!(diagram.revision, 0);
    assert_eq!(diagram.ignored_events.len(), 1);
    assert!(!diagram.svg.contains(" active\""));
}

#[test]
fn given_role_when_rendering_skills_then_writes_role_named_file() {
    let temp = TempDir::new().unwrap();
    let service = service_writing_to(&temp);
    let request = DiagramRequest::new(DiagramKind::Skills).with_role(SkillRole::QaTestAutomation);

    let diagram = service.render(&request).unwrap();
    let path = service.write(&diagram, None).unwrap();

    assert!(path.ends_with("upskill-skills-qa.svg"));
    assert!(diagram.svg.contains("id=\"area-sdlc\""));
    assert!(diagram.svg.contains("id=\"legend\""));
}

#[test]
fn given_pie_when_rendering_then_has_one_segment_per_step_without_completion_marker() {
    let temp = TempDir::new().unwrap();
    let service = service_writing_to(&temp);

    let diagram = service.render(&DiagramRequest::new(DiagramKind::Pie)).unwrap();

    assert_eq!(diagram.svg.matches("class=\"segment ").count(), 10);
    assert!(!diagram.svg.contains("Workflow Completed"));
}

#[test]
fn given_completion_marker_event_when_rendering_pie_then_event_is_ignored() {
    let temp = TempDir::new().unwrap();
    let service = service_writing_to(&temp);
    let request = DiagramRequest::new(DiagramKind::Pie)
        .with_events(&["hover=Workflow Completed", "hover=Apply to program"])
        .unwrap();

    let diagram = service.render(&request).unwrap();

    assert_eq!(diagram.ignored_events.len(), 1);
    assert_eq!(diagram.revision, 1);
}
