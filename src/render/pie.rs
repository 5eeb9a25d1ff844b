//! Ring charts: the process pie and the per-role AI skills donut.

use itertools::Itertools;
use tracing::debug;

use crate::config::{Palette, PieCanvas};
use crate::domain::geometry::polar;
use crate::domain::{ring_sectors, AiArea, InteractionState, Point, ProcessStep, RoleSkills, Sector};
use crate::render::color::{adjust_brightness, variation};
use crate::render::scene::{text_lines, Element, Group, Scene, Style, Text, TextAnchor};
use crate::render::text::{truncate, wrap_words, LABEL_CHARS};

/// Brightness shifts cycled through the process segments of one role.
pub const PROCESS_VARIATIONS: [f64; 11] = [0.0, 15.0, -15.0, 25.0, -25.0, 10.0, -10.0, 20.0, -20.0, 5.0, -5.0];

/// Brightness shifts cycled through the skills of one area.
pub const SKILL_VARIATIONS: [f64; 5] = [0.0, 20.0, -20.0, 40.0, -40.0];

const RING_GAP: f64 = 5.0;
const OUTSIDE_LABEL_GAP: f64 = 20.0;
const DIMMED_OPACITY: f64 = 0.3;

/// Process steps as equal segments of one ring around a title disc.
///
/// The active step and its neighbours are brightened and outlined; the other
/// segments fade while a step is active.
pub fn compose_process_pie(
    steps: &[ProcessStep],
    state: &InteractionState,
    canvas: &PieCanvas,
    palette: &Palette,
    title: &str,
) -> Scene {
    let center = canvas.center();
    let mut scene = Scene::new(canvas.width, canvas.height, palette.background.clone());

    let weights = vec![1.0; steps.len()];
    let sectors = ring_sectors(&weights, center, canvas.inner_radius + RING_GAP, canvas.outer_radius);
    debug!("compose_process_pie: {} segments", sectors.len());

    let active = state.active().is_some();
    for (index, (step, sector)) in steps.iter().zip(&sectors).enumerate() {
        let color = variation(palette.role(step.role), &PROCESS_VARIATIONS, index);
        let emphasized = state.emphasizes(steps, &step.name);

        let mut style = if emphasized {
            Style::filled(adjust_brightness(&color, 30.0)).with_stroke("#ffffff", 3.0)
        } else {
            Style::filled(color).with_stroke(palette.background.clone(), 1.0)
        };
        if active && !emphasized {
            style = style.with_opacity(DIMMED_OPACITY);
        }

        let mut group = Group::new()
            .with_id(format!("segment-{}", step.step_number))
            .with_class("segment")
            .with_class(step.role.css_class());
        group.push(Element::Path {
            d: sector.path(),
            style,
        });
        group.push(Element::Text(
            Text::new(sector.centroid(), step.step_number.to_string(), 14.0, palette.text.clone()).bold(),
        ));
        group.push(outside_label(sector, &step.name, 10.0, palette));
        scene.push(Element::Group(group));
    }

    scene.push(Element::Group(title_disc(
        center,
        canvas.inner_radius,
        title,
        &palette.title,
        palette,
    )));
    scene
}

/// Skills of one job family: AI areas on the inner ring, weighted by skill
/// count, and the skills themselves on the outer ring.
pub fn compose_skills_donut(entry: &RoleSkills, canvas: &PieCanvas, palette: &Palette) -> Scene {
    let center = canvas.center();
    let mut scene = Scene::new(canvas.width, canvas.height, palette.background.clone());

    let areas: Vec<(AiArea, Vec<_>)> = AiArea::ALL
        .into_iter()
        .map(|area| (area, entry.skills_in(area).collect_vec()))
        .filter(|(_, skills)| !skills.is_empty())
        .collect();
    debug!(
        "compose_skills_donut: {} with {} skills in {} areas",
        entry.role,
        entry.skills.len(),
        areas.len()
    );

    let area_weights = areas.iter().map(|(_, skills)| skills.len() as f64).collect_vec();
    let area_sectors = ring_sectors(&area_weights, center, canvas.hole_radius, canvas.inner_radius);
    for ((area, skills), sector) in areas.iter().zip(&area_sectors) {
        let mut group = Group::new().with_id(area_slug(*area)).with_class("area");
        group.push(Element::Path {
            d: sector.path(),
            style: Style::filled(palette.area(*area)).with_stroke(palette.background.clone(), 2.0),
        });
        let lines = wrap_words(&format!("{} ({})", area.label(), skills.len()), 14);
        group.children.extend(centered_lines(&lines, sector.centroid(), 11.0, palette));
        scene.push(Element::Group(group));
    }

    // Outer ring keeps the inner ring's area order so each skill sits over its area.
    let skills = areas.iter().flat_map(|(area, skills)| skills.iter().enumerate().map(move |(i, s)| (*area, i, *s)));
    let skill_count = areas.iter().map(|(_, skills)| skills.len()).sum();
    let skill_sectors = ring_sectors(
        &vec![1.0; skill_count],
        center,
        canvas.inner_radius + RING_GAP,
        canvas.outer_radius,
    );
    let mut ring = Group::new().with_id("skills");
    for ((area, index_in_area, skill), sector) in skills.zip(&skill_sectors) {
        ring.push(Element::Path {
            d: sector.path(),
            style: Style::filled(variation(palette.area(area), &SKILL_VARIATIONS, index_in_area))
                .with_stroke(palette.background.clone(), 1.0),
        });
        ring.push(outside_label(sector, skill.name, 9.0, palette));
    }
    scene.push(Element::Group(ring));

    let mut title = Group::new().with_id("title");
    title.children.extend(centered_lines(
        &wrap_words(entry.role.label(), 12),
        center,
        12.0,
        palette,
    ));
    scene.push(Element::Group(title));

    scene.push(Element::Group(area_legend(&areas, palette)));
    scene
}

fn area_slug(area: AiArea) -> &'static str {
    match area {
        AiArea::Fundamentals => "area-fundamentals",
        AiArea::DrivenSdlc => "area-sdlc",
        AiArea::DrivenSoftwareSolution => "area-solution",
    }
}

/// Label just outside a sector, on the side it points to.
fn outside_label(sector: &Sector, name: &str, size: f64, palette: &Palette) -> Element {
    let angle = sector.mid_angle();
    let position = polar(sector.center, sector.outer + OUTSIDE_LABEL_GAP, angle);
    let anchor = match angle.cos() {
        c if c > 0.1 => TextAnchor::Start,
        c if c < -0.1 => TextAnchor::End,
        _ => TextAnchor::Middle,
    };
    Element::Text(Text::new(position, truncate(name, LABEL_CHARS), size, palette.text.clone()).anchored(anchor))
}

/// Lines centered vertically and horizontally on `center`.
fn centered_lines(lines: &[String], center: Point, size: f64, palette: &Palette) -> Vec<Element> {
    let line_height = size * 1.2;
    let first = Point::new(center.x, center.y - (lines.len() as f64 - 1.0) * line_height / 2.0);
    text_lines(
        lines,
        first,
        line_height,
        &Text::new(first, "", size, palette.text.clone()).bold(),
    )
}

fn title_disc(center: Point, radius: f64, title: &str, fill: &str, palette: &Palette) -> Group {
    let mut group = Group::new().with_id("title");
    group.push(Element::Circle {
        center,
        radius,
        style: Style::filled(fill).with_stroke(palette.background.clone(), 2.0),
    });
    group
        .children
        .extend(centered_lines(&wrap_words(title, 12), center, 18.0, palette));
    group
}

fn area_legend(areas: &[(AiArea, Vec<&crate::domain::Skill>)], palette: &Palette) -> Group {
    let mut group = Group::new().with_id("legend");
    for (index, (area, _)) in areas.iter().enumerate() {
        let y = 30.0 + index as f64 * 22.0;
        group.push(Element::Circle {
            center: Point::new(30.0, y),
            radius: 7.0,
            style: Style::filled(palette.area(*area)),
        });
        group.push(Element::Text(
            Text::new(Point::new(45.0, y), area.label(), 12.0, palette.text.clone()).anchored(TextAnchor::Start),
        ));
    }
    group
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{chart_steps, process_steps, skills_for, PROGRAM_TITLE};
    use crate::domain::SkillRole;

    fn segment_style(scene: &Scene, number: u32) -> Style {
        let group = scene.group(&format!("segment-{number}")).expect("segment");
        match &group.children[0] {
            Element::Path { style, .. } => style.clone(),
            other => panic!("expected path, got {other:?}"),
        }
    }

    #[test]
    fn given_idle_state_when_composing_pie_then_one_segment_per_step() {
        let steps = chart_steps(&process_steps());
        let scene = compose_process_pie(
            &steps,
            &InteractionState::Idle,
            &PieCanvas::default(),
            &Palette::default(),
            PROGRAM_TITLE,
        );

        for step in &steps {
            let style = segment_style(&scene, step.step_number);
            assert_eq!(style.opacity, None);
        }
        assert_eq!(segment_style(&scene, 1).fill.as_deref(), Some("#4A90E2"));
        assert!(scene.group("segment-12").is_none());
        assert!(scene.texts().contains(&"Program"));
    }

    #[test]
    fn given_hovered_step_when_composing_pie_then_neighbours_are_emphasized() {
        let steps = process_steps();
        let state = InteractionState::Hovered("Send knowledge check".into());
        let scene = compose_process_pie(&steps, &state, &PieCanvas::default(), &Palette::default(), PROGRAM_TITLE);

        assert_eq!(segment_style(&scene, 6).stroke.as_deref(), Some("#ffffff"));
        assert_eq!(segment_style(&scene, 5).stroke.as_deref(), Some("#ffffff"));
        assert_eq!(segment_style(&scene, 10).stroke.as_deref(), Some("#ffffff"));
        assert_eq!(segment_style(&scene, 1).opacity, Some(DIMMED_OPACITY));
    }

    #[test]
    fn given_role_when_composing_donut_then_rings_cover_all_skills() {
        let entry = skills_for(SkillRole::Developer);
        let scene = compose_skills_donut(entry, &PieCanvas::default(), &Palette::default());

        let ring = scene.group("skills").expect("skills ring");
        let wedges = ring.children.iter().filter(|e| matches!(e, Element::Path { .. })).count();
        assert_eq!(wedges, entry.skills.len());
        for area in AiArea::ALL {
            assert!(scene.group(area_slug(area)).is_some());
        }
        assert!(scene.texts().contains(&"Developer"));
    }

    #[test]
    fn given_area_when_colouring_skills_then_first_uses_base_colour() {
        let entry = skills_for(SkillRole::Developer);
        let palette = Palette::default();
        let scene = compose_skills_donut(entry, &PieCanvas::default(), &palette);

        let ring = scene.group("skills").unwrap();
        match &ring.children[0] {
            Element::Path { style, .. } => assert_eq!(style.fill.as_deref(), Some(palette.fundamentals.as_str())),
            other => panic!("expected path, got {other:?}"),
        }
    }
}
