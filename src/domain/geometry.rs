//! Geometry engine: node placement, connector routing and ring sectors
//!
//! All functions are pure and work in screen space (y grows downwards), so an
//! increasing angle walks the circle clockwise on screen.

use std::f64::consts::{FRAC_PI_2, PI, TAU};

use tracing::debug;

use crate::domain::{Node, Point, ProcessStep};

/// Perpendicular offset of a connector's control point.
pub const CURVE_BOW: f64 = 30.0;

/// Gap kept between an alternate route and the anchor node / exclusion zone.
const ANCHOR_CLEARANCE: f64 = 20.0;

/// Extra push applied when the alternate route's control point sits under the anchor.
const ANCHOR_NUDGE: f64 = 10.0;

/// Gap between a node's circumference and its label.
pub const LABEL_GAP: f64 = 15.0;

const ALIGN_EPSILON: f64 = 1e-6;

/// Distribute steps evenly around a circle, clockwise from the top.
pub fn layout_nodes(steps: &[ProcessStep], center: Point, radius: f64) -> Vec<Node<'_>> {
    let count = steps.len() as f64;
    steps
        .iter()
        .enumerate()
        .map(|(index, step)| {
            let angle = -FRAC_PI_2 + (index as f64 / count) * TAU;
            Node {
                id: format!("node-{}", step.step_number),
                step,
                angle,
                position: polar(center, radius, angle),
            }
        })
        .collect()
}

/// Point at `radius` and `angle` around `center`.
pub fn polar(center: Point, radius: f64, angle: f64) -> Point {
    Point::new(center.x + radius * angle.cos(), center.y + radius * angle.sin())
}

/// Quadratic Bézier segment, the shape of every connector.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuadCurve {
    pub start: Point,
    pub control: Point,
    pub end: Point,
}

impl QuadCurve {
    /// SVG path data: `M sx sy Q cx cy ex ey`.
    pub fn path(&self) -> String {
        format!(
            "M {:.2} {:.2} Q {:.2} {:.2} {:.2} {:.2}",
            self.start.x, self.start.y, self.control.x, self.control.y, self.end.x, self.end.y
        )
    }

    /// Point on the curve at parameter `t` in `[0, 1]`.
    pub fn point_at(&self, t: f64) -> Point {
        let u = 1.0 - t;
        Point::new(
            u * u * self.start.x + 2.0 * u * t * self.control.x + t * t * self.end.x,
            u * u * self.start.y + 2.0 * u * t * self.control.y + t * t * self.end.y,
        )
    }
}

/// Unit vector from `a` to `b`; coincident points fall back to +x.
fn unit_direction(a: Point, b: Point) -> (f64, f64) {
    let distance = a.distance_to(&b);
    if distance <= f64::EPSILON {
        return (1.0, 0.0);
    }
    ((b.x - a.x) / distance, (b.y - a.y) / distance)
}

/// Curved connector between two node circumferences, bowed by [`CURVE_BOW`].
pub fn route_connection(from: &Node, to: &Node, node_radius: f64) -> QuadCurve {
    let (ux, uy) = unit_direction(from.position, to.position);

    let start = Point::new(from.x() + ux * node_radius, from.y() + uy * node_radius);
    let end = Point::new(to.x() - ux * node_radius, to.y() - uy * node_radius);

    let mid = Point::new((start.x + end.x) / 2.0, (start.y + end.y) / 2.0);
    let control = Point::new(mid.x - uy * CURVE_BOW, mid.y + ux * CURVE_BOW);

    QuadCurve {
        start,
        control,
        end,
    }
}

/// X coordinate where the horizontal line `y` meets the circle, on its right half.
fn circle_x_at(center: Point, radius: f64, y: f64) -> f64 {
    if radius <= 0.0 {
        return center.x;
    }
    let angle = ((y - center.y) / radius).clamp(-1.0, 1.0).asin();
    center.x + radius * angle.cos()
}

/// Alternate connector that passes below `anchor` and above the center exclusion zone.
///
/// Both endpoints sit on one horizontal line at the lower of the two node
/// bottoms, each at that line's intersection with its node circle.
pub fn route_below_anchor(
    from: &Node,
    to: &Node,
    node_radius: f64,
    anchor: Point,
    center: Point,
    exclusion_radius: f64,
) -> QuadCurve {
    let line_y = (from.y() + node_radius).max(to.y() + node_radius);
    let start_x = circle_x_at(from.position, node_radius, line_y);
    let end_x = circle_x_at(to.position, node_radius, line_y);

    let control_y = (anchor.y + node_radius + ANCHOR_CLEARANCE)
        .max(center.y - exclusion_radius - ANCHOR_CLEARANCE);

    let mut control_x = (start_x + end_x) / 2.0;
    let band_left = anchor.x - node_radius - ANCHOR_CLEARANCE;
    let band_right = anchor.x + node_radius + ANCHOR_CLEARANCE;
    if (band_left..=band_right).contains(&control_x) {
        control_x = if control_x < center.x {
            band_left - ANCHOR_NUDGE
        } else {
            band_right + ANCHOR_NUDGE
        };
    }

    QuadCurve {
        start: Point::new(start_x, line_y),
        control: Point::new(control_x, control_y),
        end: Point::new(end_x, line_y),
    }
}

/// How a connection was routed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteKind {
    Curved,
    BelowAnchor,
}

/// A directed arrow between two laid-out nodes.
#[derive(Debug, Clone, PartialEq)]
pub struct Connection<'a> {
    pub from: &'a Node<'a>,
    pub to: &'a Node<'a>,
    pub curve: QuadCurve,
    pub route: RouteKind,
}

impl Connection<'_> {
    pub fn path(&self) -> String {
        self.curve.path()
    }

    /// Whether either end of the connection is the named step.
    pub fn touches(&self, name: &str) -> bool {
        self.from.step.name == name || self.to.step.name == name
    }
}

/// Parameters for [`build_connections`].
#[derive(Debug, Clone, Copy)]
pub struct RoutingOptions<'r> {
    pub node_radius: f64,
    pub center: Point,
    /// Radius of the center region alternate routes must stay clear of.
    pub exclusion_radius: f64,
    /// `(from, to)` step-name pairs routed with [`route_below_anchor`].
    pub alternates: &'r [(&'r str, &'r str)],
}

impl RoutingOptions<'_> {
    fn is_alternate(&self, from: &str, to: &str) -> bool {
        self.alternates.iter().any(|(f, t)| *f == from && *t == to)
    }
}

/// One connection per `connects_to` entry, in node order.
///
/// Targets that match no node, and connections from a node to itself, are
/// dropped without error.
pub fn build_connections<'a>(nodes: &'a [Node<'a>], options: &RoutingOptions) -> Vec<Connection<'a>> {
    // The first node sits at the top of the circle; alternate routes pass under it.
    let anchor = nodes.first().map(|n| n.position).unwrap_or(options.center);

    let mut connections = Vec::new();
    for from in nodes {
        for target in &from.step.connects_to {
            let Some(to) = nodes.iter().find(|n| &n.step.name == target) else {
                debug!("build_connections: dropping unknown target '{}' of '{}'", target, from.step.name);
                continue;
            };
            if std::ptr::eq(from, to) {
                debug!("build_connections: dropping self-connection of '{}'", from.step.name);
                continue;
            }

            let (curve, route) = if options.is_alternate(&from.step.name, target) {
                (
                    route_below_anchor(
                        from,
                        to,
                        options.node_radius,
                        anchor,
                        options.center,
                        options.exclusion_radius,
                    ),
                    RouteKind::BelowAnchor,
                )
            } else {
                (route_connection(from, to, options.node_radius), RouteKind::Curved)
            };

            connections.push(Connection {
                from,
                to,
                curve,
                route,
            });
        }
    }
    connections
}

/// Where a node's label goes relative to the node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabelAnchor {
    Above,
    Below,
    /// Right of the node, text starting at the anchor.
    Start,
    /// Left of the node, text ending at the anchor.
    End,
}

/// Labels of the top node and of the node nearest the bottom go above/below,
/// the rest on the outer side.
///
/// With an odd `node_count` two nodes sit equally close to the bottom; the
/// one on the right, earlier in circle order, takes the label below.
pub fn label_anchor(node: &Node, center: Point, node_count: usize) -> LabelAnchor {
    let half_step = PI / node_count.max(1) as f64;
    let from_bottom = (node.angle - FRAC_PI_2).abs();

    if node.angle.cos().abs() < ALIGN_EPSILON && node.angle.sin() < 0.0 {
        LabelAnchor::Above
    } else if from_bottom < half_step - ALIGN_EPSILON
        || ((from_bottom - half_step).abs() <= ALIGN_EPSILON && node.angle < FRAC_PI_2)
    {
        LabelAnchor::Below
    } else if node.x() > center.x {
        LabelAnchor::Start
    } else {
        LabelAnchor::End
    }
}

/// Reference point of a node label for the given anchor.
pub fn label_origin(node: &Node, anchor: LabelAnchor, node_radius: f64) -> Point {
    let offset = node_radius + LABEL_GAP;
    match anchor {
        LabelAnchor::Above => Point::new(node.x(), node.y() - offset),
        LabelAnchor::Below => Point::new(node.x(), node.y() + offset),
        LabelAnchor::Start => Point::new(node.x() + offset, node.y()),
        LabelAnchor::End => Point::new(node.x() - offset, node.y()),
    }
}

/// Annular sector of a pie or donut ring; `inner == 0` gives a plain wedge.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sector {
    pub center: Point,
    pub inner: f64,
    pub outer: f64,
    /// Start angle in radians (screen space).
    pub start: f64,
    /// End angle in radians, `end >= start`.
    pub end: f64,
}

impl Sector {
    pub fn sweep(&self) -> f64 {
        self.end - self.start
    }

    pub fn mid_angle(&self) -> f64 {
        (self.start + self.end) / 2.0
    }

    /// Middle of the sector, where its label goes.
    pub fn centroid(&self) -> Point {
        polar(self.center, (self.inner + self.outer) / 2.0, self.mid_angle())
    }

    /// SVG path data for the sector outline.
    pub fn path(&self) -> String {
        if self.sweep() >= TAU - ALIGN_EPSILON {
            return self.full_ring_path();
        }

        let large_arc = u8::from(self.sweep() > PI);
        let outer_start = polar(self.center, self.outer, self.start);
        let outer_end = polar(self.center, self.outer, self.end);

        if self.inner <= 0.0 {
            return format!(
                "M {:.2} {:.2} L {:.2} {:.2} A {:.2} {:.2} 0 {} 1 {:.2} {:.2} Z",
                self.center.x,
                self.center.y,
                outer_start.x,
                outer_start.y,
                self.outer,
                self.outer,
                large_arc,
                outer_end.x,
                outer_end.y
            );
        }

        let inner_start = polar(self.center, self.inner, self.start);
        let inner_end = polar(self.center, self.inner, self.end);
        format!(
            "M {:.2} {:.2} A {:.2} {:.2} 0 {} 1 {:.2} {:.2} L {:.2} {:.2} A {:.2} {:.2} 0 {} 0 {:.2} {:.2} Z",
            outer_start.x,
            outer_start.y,
            self.outer,
            self.outer,
            large_arc,
            outer_end.x,
            outer_end.y,
            inner_end.x,
            inner_end.y,
            self.inner,
            self.inner,
            large_arc,
            inner_start.x,
            inner_start.y
        )
    }

    /// A single arc cannot close a circle, so full rings are drawn as two halves.
    fn full_ring_path(&self) -> String {
        let mut path = circle_path(self.center, self.outer, true);
        if self.inner > 0.0 {
            path.push(' ');
            path.push_str(&circle_path(self.center, self.inner, false));
        }
        path
    }
}

fn circle_path(center: Point, radius: f64, clockwise: bool) -> String {
    let top = Point::new(center.x, center.y - radius);
    let bottom = Point::new(center.x, center.y + radius);
    let sweep = u8::from(clockwise);
    format!(
        "M {:.2} {:.2} A {:.2} {:.2} 0 1 {} {:.2} {:.2} A {:.2} {:.2} 0 1 {} {:.2} {:.2} Z",
        top.x, top.y, radius, radius, sweep, bottom.x, bottom.y, radius, radius, sweep, top.x, top.y
    )
}

/// Split a ring into sectors proportional to `weights`, clockwise from the top.
///
/// Returns no sectors when the weights do not sum to a positive value.
pub fn ring_sectors(weights: &[f64], center: Point, inner: f64, outer: f64) -> Vec<Sector> {
    let total: f64 = weights.iter().filter(|w| **w > 0.0).sum();
    if total <= 0.0 {
        return Vec::new();
    }

    let mut cursor = -FRAC_PI_2;
    weights
        .iter()
        .map(|weight| {
            let sweep = weight.max(0.0) / total * TAU;
            let sector = Sector {
                center,
                inner,
                outer,
                start: cursor,
                end: cursor + sweep,
            };
            cursor += sweep;
            sector
        })
        .collect()
}
