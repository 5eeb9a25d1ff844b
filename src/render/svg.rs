//! SVG serialization of a [`Scene`].

use crate::render::scene::{Def, Element, Group, Scene, Style, Text};

/// Serialize `scene` as a standalone SVG document.
///
/// The viewBox is the scene's logical canvas and scales uniformly
/// (`xMidYMid meet`).
pub fn to_svg(scene: &Scene) -> String {
    let mut svg = String::new();
    svg.push_str(&format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{w:.2}\" height=\"{h:.2}\" viewBox=\"0 0 {w:.2} {h:.2}\" preserveAspectRatio=\"xMidYMid meet\">\n",
        w = scene.width,
        h = scene.height,
    ));
    svg.push_str(&format!(
        "<rect width=\"100%\" height=\"100%\" fill=\"{}\"/>\n",
        escape_xml(&scene.background)
    ));

    if !scene.defs.is_empty() {
        svg.push_str("<defs>\n");
        for def in &scene.defs {
            svg.push_str(&def_svg(def));
        }
        svg.push_str("</defs>\n");
    }

    for element in &scene.elements {
        element_svg(element, &mut svg);
    }

    svg.push_str("</svg>\n");
    svg
}

fn def_svg(def: &Def) -> String {
    match def {
        Def::ArrowMarker { id, color } => format!(
            "<marker id=\"{}\" markerWidth=\"10\" markerHeight=\"10\" refX=\"9\" refY=\"3\" orient=\"auto\"><polygon points=\"0 0, 10 3, 0 6\" fill=\"{}\"/></marker>\n",
            escape_xml(id),
            escape_xml(color)
        ),
        Def::Glow { id, std_deviation } => format!(
            "<filter id=\"{}\" x=\"-50%\" y=\"-50%\" width=\"200%\" height=\"200%\"><feGaussianBlur stdDeviation=\"{std_deviation}\" result=\"coloredBlur\"/><feMerge><feMergeNode in=\"coloredBlur\"/><feMergeNode in=\"SourceGraphic\"/></feMerge></filter>\n",
            escape_xml(id)
        ),
    }
}

fn element_svg(element: &Element, svg: &mut String) {
    match element {
        Element::Circle { center, radius, style } => svg.push_str(&format!(
            "<circle cx=\"{:.2}\" cy=\"{:.2}\" r=\"{:.2}\"{}/>\n",
            center.x,
            center.y,
            radius,
            style_attrs(style)
        )),
        Element::Path { d, style } => {
            svg.push_str(&format!("<path d=\"{}\"{}/>\n", escape_xml(d), style_attrs(style)))
        }
        Element::Text(text) => svg.push_str(&text_svg(text)),
        Element::Group(group) => group_svg(group, svg),
    }
}

fn group_svg(group: &Group, svg: &mut String) {
    svg.push_str("<g");
    if let Some(id) = &group.id {
        svg.push_str(&format!(" id=\"{}\"", escape_xml(id)));
    }
    if !group.classes.is_empty() {
        svg.push_str(&format!(" class=\"{}\"", escape_xml(&group.classes.join(" "))));
    }
    if let Some(opacity) = group.opacity {
        svg.push_str(&format!(" opacity=\"{opacity}\""));
    }
    svg.push_str(">\n");
    for child in &group.children {
        element_svg(child, svg);
    }
    svg.push_str("</g>\n");
}

fn style_attrs(style: &Style) -> String {
    let mut attrs = String::new();
    if let Some(fill) = &style.fill {
        attrs.push_str(&format!(" fill=\"{}\"", escape_xml(fill)));
    }
    if let Some(stroke) = &style.stroke {
        attrs.push_str(&format!(" stroke=\"{}\"", escape_xml(stroke)));
    }
    if let Some(width) = style.stroke_width {
        attrs.push_str(&format!(" stroke-width=\"{width}\""));
    }
    if let Some(opacity) = style.opacity {
        attrs.push_str(&format!(" opacity=\"{opacity}\""));
    }
    if let Some(dasharray) = &style.dasharray {
        attrs.push_str(&format!(" stroke-dasharray=\"{}\"", escape_xml(dasharray)));
    }
    if let Some(marker) = &style.marker_end {
        attrs.push_str(&format!(" marker-end=\"url(#{})\"", escape_xml(marker)));
    }
    if let Some(filter) = &style.filter {
        attrs.push_str(&format!(" filter=\"url(#{})\"", escape_xml(filter)));
    }
    attrs
}

fn text_svg(text: &Text) -> String {
    let mut attrs = format!(
        "x=\"{:.2}\" y=\"{:.2}\" fill=\"{}\" font-size=\"{}\" text-anchor=\"{}\" dominant-baseline=\"{}\"",
        text.position.x,
        text.position.y,
        escape_xml(&text.fill),
        text.size,
        text.anchor.as_str(),
        text.baseline.as_str()
    );
    if text.bold {
        attrs.push_str(" font-weight=\"bold\"");
    }
    if text.italic {
        attrs.push_str(" font-style=\"italic\"");
    }
    format!("<text {attrs}>{}</text>\n", escape_xml(&text.content))
}

pub fn escape_xml(input: &str) -> String {
    input
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}
