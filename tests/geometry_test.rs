//! Tests for radial layout and connector routing

use std::f64::consts::TAU;

use rstest::rstest;

use upskill::data::{process_steps, ALTERNATE_ROUTES, WORKFLOW_COMPLETED};
use upskill::domain::entities::Point;
use upskill::domain::geometry::label_anchor;
use upskill::domain::{build_connections, layout_nodes, ring_sectors, LabelAnchor, RouteKind, RoutingOptions};

const CENTER: Point = Point { x: 500.0, y: 450.0 };

fn options() -> RoutingOptions<'static> {
    RoutingOptions {
        node_radius: 35.0,
        center: CENTER,
        exclusion_radius: 180.0,
        alternates: ALTERNATE_ROUTES,
    }
}

#[rstest]
#[case(1)]
#[case(4)]
#[case(11)]
fn given_n_steps_when_laying_out_then_nodes_are_evenly_spaced_on_circle(#[case] count: usize) {
    let steps: Vec<_> = process_steps().into_iter().take(count).collect();

    let nodes = layout_nodes(&steps, CENTER, 280.0);

    assert_eq!(nodes.len(), count);
    for (i, node) in nodes.iter().enumerate() {
        assert!((node.position.distance_to(&CENTER) - 280.0).abs() < 1e-9);
        if i > 0 {
            let step = node.angle - nodes[i - 1].angle;
            assert!((step - TAU / count as f64).abs() < 1e-9);
        }
    }
}

#[test]
fn given_first_step_when_laying_out_then_sits_at_top() {
    let steps = process_steps();
    let nodes = layout_nodes(&steps, CENTER, 280.0);

    assert!((nodes[0].x() - 500.0).abs() < 1e-9);
    assert!((nodes[0].y() - 170.0).abs() < 1e-9);
}

#[test]
fn given_process_table_when_building_connections_then_one_per_edge() {
    let steps = process_steps();
    let nodes = layout_nodes(&steps, CENTER, 280.0);

    let connections = build_connections(&nodes, &options());

    let edges: usize = steps.iter().map(|s| s.connects_to.len()).sum();
    assert_eq!(connections.len(), edges);
}

#[test]
fn given_process_table_when_building_connections_then_all_curved() {
    let steps = process_steps();
    let nodes = layout_nodes(&steps, CENTER, 280.0);

    let connections = build_connections(&nodes, &options());

    assert!(connections.iter().all(|c| c.route == RouteKind::Curved));
}

#[test]
fn given_skip_edge_when_building_connections_then_routes_below_anchor() {
    let mut steps = process_steps();
    steps[1].connects_to.push(WORKFLOW_COMPLETED.into());
    let nodes = layout_nodes(&steps, CENTER, 280.0);

    let connections = build_connections(&nodes, &options());

    let below: Vec<_> = connections
        .iter()
        .filter(|c| c.route == RouteKind::BelowAnchor)
        .collect();
    assert_eq!(below.len(), 1);
    assert_eq!(below[0].from.step.name, "Complete theoretical part");
    assert_eq!(below[0].to.step.name, WORKFLOW_COMPLETED);
    for i in 0..=10 {
        let point = below[0].curve.point_at(f64::from(i) / 10.0);
        assert!(point.distance_to(&CENTER) >= 180.0, "t={i}/10 enters the center region");
    }
}

#[test]
fn given_dangling_and_self_targets_when_building_connections_then_dropped() {
    let mut steps = process_steps();
    steps[0].connects_to.push("No such step".into());
    let own_name = steps[1].name.clone();
    steps[1].connects_to.push(own_name);
    let nodes = layout_nodes(&steps, CENTER, 280.0);

    let connections = build_connections(&nodes, &options());

    assert!(connections.iter().all(|c| c.from.step.name != c.to.step.name));
    assert!(connections.iter().all(|c| c.to.step.name != "No such step"));
}

#[test]
fn given_top_node_when_placing_label_then_goes_above() {
    let steps = process_steps();
    let nodes = layout_nodes(&steps, CENTER, 280.0);

    assert_eq!(label_anchor(&nodes[0], CENTER, nodes.len()), LabelAnchor::Above);
}

#[test]
fn given_process_table_when_placing_labels_then_knowledge_check_goes_below() {
    let steps = process_steps();
    let nodes = layout_nodes(&steps, CENTER, 280.0);

    let below: Vec<_> = nodes
        .iter()
        .filter(|n| label_anchor(n, CENTER, nodes.len()) == LabelAnchor::Below)
        .map(|n| n.step.name.as_str())
        .collect();

    assert_eq!(below, vec!["Send knowledge check"]);
}

#[test]
fn given_weights_when_building_ring_then_sweeps_cover_full_circle() {
    let sectors = ring_sectors(&[1.0, 2.0, 1.0], CENTER, 150.0, 280.0);

    let total: f64 = sectors.iter().map(|s| s.sweep()).sum();
    assert_eq!(sectors.len(), 3);
    assert!((total - TAU).abs() < 1e-9);
    assert!((sectors[1].sweep() - TAU / 2.0).abs() < 1e-9);
}
