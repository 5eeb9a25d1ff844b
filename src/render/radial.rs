//! Radial process diagram: nodes on a circle, arrows between them, and a
//! center disc holding either the program title or the selected step.

use tracing::debug;

use crate::config::{Palette, RadialCanvas};
use crate::domain::geometry::{label_anchor, label_origin, LabelAnchor};
use crate::domain::{
    build_connections, layout_nodes, Connection, InteractionState, Node, Point, ProcessStep, RouteKind,
    RoutingOptions, StepDetails,
};
use crate::render::color::adjust_brightness;
use crate::render::scene::{text_lines, Baseline, Def, Element, Group, Scene, Style, Text, TextAnchor};
use crate::render::text::{truncate, wrap_paragraphs, wrap_words, DESCRIPTION_CHARS, LABEL_CHARS, TITLE_CHARS};

pub const ARROW_MARKER: &str = "workflow-arrowhead";
pub const GLOW_FILTER: &str = "workflow-arrow-glow";

const LABEL_LINE_HEIGHT: f64 = 12.0;
const DIMMED_EDGE_OPACITY: f64 = 0.2;
const EDGE_OPACITY: f64 = 0.8;
const DIMMED_NODE_OPACITY: f64 = 0.3;

/// What the radial view draws.
#[derive(Debug, Clone, Copy)]
pub struct RadialView<'a> {
    pub steps: &'a [ProcessStep],
    pub state: &'a InteractionState,
    pub canvas: &'a RadialCanvas,
    pub palette: &'a Palette,
    pub title: &'a str,
    /// `(from, to)` pairs routed below the first node.
    pub alternates: &'a [(&'a str, &'a str)],
}

/// Compose the radial diagram for the current interaction state.
pub fn compose_radial(view: &RadialView) -> Scene {
    let canvas = view.canvas;
    let palette = view.palette;
    let center = canvas.center();

    let nodes = layout_nodes(view.steps, center, canvas.radius);
    let options = RoutingOptions {
        node_radius: canvas.node_radius,
        center,
        exclusion_radius: canvas.exclusion_radius,
        alternates: view.alternates,
    };
    let connections = build_connections(&nodes, &options);
    debug!(
        "compose_radial: {} nodes, {} connections, state {:?}",
        nodes.len(),
        connections.len(),
        view.state
    );

    let mut scene = Scene::new(canvas.width, canvas.height, palette.background.clone());
    scene.defs.push(Def::ArrowMarker {
        id: ARROW_MARKER.into(),
        color: palette.highlight.clone(),
    });
    scene.defs.push(Def::Glow {
        id: GLOW_FILTER.into(),
        std_deviation: 2.0,
    });

    // Arrows are drawn over the center disc, nodes over the arrows.
    scene.push(Element::Group(center_disc(view, center)));

    let mut arrows = Group::new().with_id("connections");
    for connection in &connections {
        arrows.push(connection_element(connection, view.state, palette));
    }
    scene.push(Element::Group(arrows));

    for node in &nodes {
        scene.push(Element::Group(node_group(node, view, center)));
    }

    scene.push(Element::Group(legend(canvas, palette)));
    scene
}

fn connection_element(connection: &Connection, state: &InteractionState, palette: &Palette) -> Element {
    let highlighted = state.active().is_some_and(|name| connection.touches(name));

    let style = match connection.route {
        RouteKind::BelowAnchor => Style::stroked(palette.edge.clone(), 2.0)
            .with_dasharray("5,5")
            .with_opacity(EDGE_OPACITY),
        RouteKind::Curved if highlighted => Style::stroked(palette.highlight.clone(), 3.0)
            .with_filter(GLOW_FILTER)
            .with_opacity(EDGE_OPACITY),
        RouteKind::Curved if state.active().is_some() => {
            Style::stroked(palette.edge.clone(), 2.0).with_opacity(DIMMED_EDGE_OPACITY)
        }
        RouteKind::Curved => Style::stroked(palette.edge.clone(), 2.0).with_opacity(EDGE_OPACITY),
    };

    Element::Path {
        d: connection.path(),
        style: style.with_marker_end(ARROW_MARKER),
    }
}

fn node_group(node: &Node, view: &RadialView, center: Point) -> Group {
    let palette = view.palette;
    let radius = view.canvas.node_radius;
    let step = node.step;
    let is_active = view.state.active() == Some(step.name.as_str());
    let terminal = step.connects_to.is_empty();

    let mut group = Group::new().with_id(node.id.clone()).with_class("node").with_class(step.role.css_class());
    if is_active {
        group = group.with_class("active");
    } else if view.state.active().is_some() {
        if view.state.emphasizes(view.steps, &step.name) {
            group = group.with_class("connected");
        } else {
            group = group.with_opacity(DIMMED_NODE_OPACITY);
        }
    }

    let base = if terminal {
        palette.completed.clone()
    } else {
        palette.role(step.role).to_string()
    };
    let style = if is_active {
        Style::filled(adjust_brightness(&base, 50.0)).with_stroke("#ffffff", 4.0)
    } else if terminal {
        Style::filled(base.clone()).with_stroke(base, 3.0)
    } else {
        Style::filled(base).with_stroke(palette.background.clone(), 2.0)
    };
    group.push(Element::Circle {
        center: node.position,
        radius,
        style,
    });

    let (marker, size) = if terminal {
        ("✓".to_string(), 18.0)
    } else {
        (step.step_number.to_string(), 12.0)
    };
    group.push(Element::Text(Text::new(node.position, marker, size, palette.text.clone()).bold()));

    let lines = wrap_words(&step.name, LABEL_CHARS);
    let anchor = label_anchor(node, center, view.steps.len());
    let origin = label_origin(node, anchor, radius);
    let count = lines.len() as f64;
    let (first, text_anchor, baseline) = match anchor {
        // Last line sits just above the node.
        LabelAnchor::Above => (
            Point::new(origin.x, origin.y - (count - 1.0) * LABEL_LINE_HEIGHT),
            TextAnchor::Middle,
            Baseline::Alphabetic,
        ),
        LabelAnchor::Below => (origin, TextAnchor::Middle, Baseline::Hanging),
        LabelAnchor::Start | LabelAnchor::End => (
            Point::new(origin.x, origin.y - (count - 1.0) * LABEL_LINE_HEIGHT / 2.0),
            if anchor == LabelAnchor::Start {
                TextAnchor::Start
            } else {
                TextAnchor::End
            },
            Baseline::Middle,
        ),
    };
    let template = Text::new(first, "", 10.0, palette.text.clone())
        .anchored(text_anchor)
        .baseline(baseline)
        .bold();
    group.children.extend(text_lines(&lines, first, LABEL_LINE_HEIGHT, &template));

    group
}

fn center_disc(view: &RadialView, center: Point) -> Group {
    let palette = view.palette;
    let mut group = Group::new().with_id("center");
    group.push(Element::Circle {
        center,
        radius: view.canvas.exclusion_radius,
        style: Style::filled(palette.background.clone())
            .with_stroke(adjust_brightness(&palette.background, 20.0), 2.0)
            .with_opacity(0.95),
    });

    match view.state.details(view.steps) {
        Some(details) => group.children.extend(details_elements(&details, center, palette)),
        None => group.push(Element::Text(
            Text::new(center, view.title, 20.0, palette.text.clone()).bold(),
        )),
    }
    group
}

/// Title, role badge, phase, description and next steps of the selected step.
fn details_elements(details: &StepDetails, center: Point, palette: &Palette) -> Vec<Element> {
    const TITLE_LINE_HEIGHT: f64 = 18.0;
    const DESCRIPTION_LINE_HEIGHT: f64 = 16.0;

    let top = center.y - 60.0;
    let title = wrap_words(&details.name, TITLE_CHARS);
    let below_title = top + title.len() as f64 * TITLE_LINE_HEIGHT;

    let mut elements = text_lines(
        &title,
        Point::new(center.x, top),
        TITLE_LINE_HEIGHT,
        &Text::new(center, "", 16.0, palette.text.clone()).bold(),
    );
    elements.push(Element::Text(
        Text::new(
            Point::new(center.x, below_title + 20.0),
            details.role.label(),
            14.0,
            palette.role(details.role),
        )
        .bold(),
    ));
    elements.push(Element::Text(
        Text::new(Point::new(center.x, below_title + 40.0), details.phase.clone(), 11.0, "#b0b0b0").italic(),
    ));
    let description = wrap_paragraphs(&details.description, DESCRIPTION_CHARS);
    let below_description = below_title + 60.0 + description.len() as f64 * DESCRIPTION_LINE_HEIGHT;
    elements.extend(text_lines(
        &description,
        Point::new(center.x, below_title + 60.0),
        DESCRIPTION_LINE_HEIGHT,
        &Text::new(center, "", 12.0, "#e0e0e0"),
    ));

    let next = details
        .connects_to
        .iter()
        .map(|name| truncate(&format!("→ {name}"), DESCRIPTION_CHARS))
        .collect::<Vec<_>>();
    elements.extend(text_lines(
        &next,
        Point::new(center.x, below_description + 8.0),
        DESCRIPTION_LINE_HEIGHT,
        &Text::new(center, "", 11.0, palette.highlight.clone()),
    ));
    elements
}

fn legend(canvas: &RadialCanvas, palette: &Palette) -> Group {
    let mut group = Group::new().with_id("legend");
    for (index, role) in crate::domain::Role::ALL.iter().enumerate() {
        let y = canvas.height - 50.0 + index as f64 * 25.0;
        group.push(Element::Circle {
            center: Point::new(30.0, y),
            radius: 8.0,
            style: Style::filled(palette.role(*role)),
        });
        group.push(Element::Text(
            Text::new(Point::new(45.0, y), role.label(), 12.0, palette.text.clone()).anchored(TextAnchor::Start),
        ));
    }
    group
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{process_steps, ALTERNATE_ROUTES, PROGRAM_TITLE, WORKFLOW_COMPLETED};
    use crate::domain::Role;

    fn compose(steps: &[ProcessStep], state: &InteractionState) -> Scene {
        let canvas = RadialCanvas::default();
        let palette = Palette::default();
        compose_radial(&RadialView {
            steps,
            state,
            canvas: &canvas,
            palette: &palette,
            title: PROGRAM_TITLE,
            alternates: ALTERNATE_ROUTES,
        })
    }

    fn connection_styles(scene: &Scene) -> Vec<Style> {
        let group = scene.group("connections").expect("connections group");
        group
            .children
            .iter()
            .filter_map(|e| match e {
                Element::Path { style, .. } => Some(style.clone()),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn given_idle_state_when_composing_then_center_shows_title() {
        let steps = process_steps();
        let scene = compose(&steps, &InteractionState::Idle);

        let center = scene.group("center").unwrap();
        assert!(center
            .children
            .iter()
            .any(|e| matches!(e, Element::Text(t) if t.content == PROGRAM_TITLE)));
        assert!(scene.group("node-1").is_some());
        assert!(scene.group("legend").is_some());
    }

    #[test]
    fn given_idle_state_when_composing_then_no_connection_glows() {
        let steps = process_steps();
        let scene = compose(&steps, &InteractionState::Idle);

        let styles = connection_styles(&scene);
        let edges: usize = steps.iter().map(|s| s.connects_to.len()).sum();
        assert_eq!(styles.len(), edges);
        assert!(styles.iter().all(|s| s.filter.is_none()));
    }

    #[test]
    fn given_selected_step_when_composing_then_its_edges_glow_and_others_dim() {
        let steps = process_steps();
        let state = InteractionState::Selected("Send knowledge check".into());
        let scene = compose(&steps, &state);

        let styles = connection_styles(&scene);
        let glowing = styles.iter().filter(|s| s.filter.as_deref() == Some(GLOW_FILTER)).count();
        assert_eq!(glowing, 2, "one incoming and one outgoing edge");
        assert!(styles
            .iter()
            .filter(|s| s.filter.is_none() && s.dasharray.is_none())
            .all(|s| s.opacity == Some(DIMMED_EDGE_OPACITY)));
    }

    #[test]
    fn given_selected_step_when_composing_then_center_shows_details() {
        let steps = process_steps();
        let state = InteractionState::Selected("Complete theoretical part".into());
        let scene = compose(&steps, &state);

        let texts = scene.group("center").map(|g| {
            g.children
                .iter()
                .filter_map(|e| match e {
                    Element::Text(t) => Some(t.content.clone()),
                    _ => None,
                })
                .collect::<Vec<_>>()
        });
        let texts = texts.unwrap();
        assert_eq!(texts[0], "Complete theoretical part");
        assert!(texts.contains(&Role::Contributor.label().to_string()));
        assert!(texts.contains(&"Theoretical Part (Self-paced)".to_string()));
        assert!(texts.contains(&String::new()), "paragraph break kept");
        assert!(texts.contains(&"→ Apply to Practical part".to_string()));
        assert!(!texts.contains(&"→ Workflow Completed".to_string()));
    }

    #[test]
    fn given_builtin_table_when_composing_then_draws_no_dashed_route() {
        let steps = process_steps();
        let scene = compose(&steps, &InteractionState::Idle);
        assert!(connection_styles(&scene).iter().all(|s| s.dasharray.is_none()));
    }

    #[test]
    fn given_node_nearest_bottom_when_composing_then_only_its_label_hangs_below() {
        let steps = process_steps();
        let scene = compose(&steps, &InteractionState::Idle);

        let hanging_label = |id: &str| {
            scene.group(id).unwrap().children.iter().any(
                |e| matches!(e, Element::Text(t) if t.baseline == Baseline::Hanging),
            )
        };
        let below: Vec<_> = steps
            .iter()
            .map(|s| format!("node-{}", s.step_number))
            .filter(|id| hanging_label(id))
            .collect();
        assert_eq!(below, vec!["node-6"]);
    }

    #[test]
    fn given_alternate_route_when_composing_then_stays_dashed_and_plain() {
        let mut steps = process_steps();
        steps[1].connects_to.push(WORKFLOW_COMPLETED.into());
        let state = InteractionState::Selected("Complete theoretical part".into());
        let scene = compose(&steps, &state);

        let dashed: Vec<_> = connection_styles(&scene)
            .into_iter()
            .filter(|s| s.dasharray.is_some())
            .collect();
        assert_eq!(dashed.len(), 1);
        assert!(dashed[0].filter.is_none());
        assert_eq!(dashed[0].stroke.as_deref(), Some("#666666"));
    }

    #[test]
    fn given_hovered_step_when_composing_then_unrelated_nodes_are_dimmed() {
        let steps = process_steps();
        let state = InteractionState::Hovered("Apply to program".into());
        let scene = compose(&steps, &state);

        assert!(scene.group("node-1").unwrap().has_class("active"));
        assert!(scene.group("node-2").unwrap().has_class("connected"));
        assert_eq!(scene.group("node-5").unwrap().opacity, Some(DIMMED_NODE_OPACITY));
    }

    #[test]
    fn given_terminal_step_when_composing_then_shows_check_mark() {
        let steps = process_steps();
        let scene = compose(&steps, &InteractionState::Idle);
        assert!(scene.group("node-12").unwrap().children.iter().any(
            |e| matches!(e, Element::Text(t) if t.content == "✓")
        ));
    }
}
