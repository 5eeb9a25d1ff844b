//! Declarative scene graph: what to draw, independent of the output format.

use crate::domain::Point;

/// Reusable definitions referenced by id from element styles.
#[derive(Debug, Clone, PartialEq)]
pub enum Def {
    /// Triangular arrow head for `marker-end`.
    ArrowMarker { id: String, color: String },
    /// Gaussian glow around highlighted strokes.
    Glow { id: String, std_deviation: f64 },
}

/// Paint attributes; `None` leaves the attribute out.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Style {
    pub fill: Option<String>,
    pub stroke: Option<String>,
    pub stroke_width: Option<f64>,
    pub opacity: Option<f64>,
    pub dasharray: Option<String>,
    /// Id of an [`Def::ArrowMarker`].
    pub marker_end: Option<String>,
    /// Id of a [`Def::Glow`].
    pub filter: Option<String>,
}

impl Style {
    pub fn filled(color: impl Into<String>) -> Self {
        Self {
            fill: Some(color.into()),
            ..Self::default()
        }
    }

    /// Unfilled stroke, the style of connectors.
    pub fn stroked(color: impl Into<String>, width: f64) -> Self {
        Self {
            fill: Some("none".into()),
            stroke: Some(color.into()),
            stroke_width: Some(width),
            ..Self::default()
        }
    }

    pub fn with_stroke(mut self, color: impl Into<String>, width: f64) -> Self {
        self.stroke = Some(color.into());
        self.stroke_width = Some(width);
        self
    }

    pub fn with_opacity(mut self, opacity: f64) -> Self {
        self.opacity = Some(opacity);
        self
    }

    pub fn with_dasharray(mut self, dasharray: impl Into<String>) -> Self {
        self.dasharray = Some(dasharray.into());
        self
    }

    pub fn with_marker_end(mut self, id: impl Into<String>) -> Self {
        self.marker_end = Some(id.into());
        self
    }

    pub fn with_filter(mut self, id: impl Into<String>) -> Self {
        self.filter = Some(id.into());
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextAnchor {
    Start,
    #[default]
    Middle,
    End,
}

impl TextAnchor {
    pub fn as_str(&self) -> &'static str {
        match self {
            TextAnchor::Start => "start",
            TextAnchor::Middle => "middle",
            TextAnchor::End => "end",
        }
    }
}

/// Vertical alignment of a text line relative to its `y`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Baseline {
    /// Text sits on `y`.
    Alphabetic,
    #[default]
    Middle,
    /// Text hangs below `y`.
    Hanging,
}

impl Baseline {
    pub fn as_str(&self) -> &'static str {
        match self {
            Baseline::Alphabetic => "alphabetic",
            Baseline::Middle => "middle",
            Baseline::Hanging => "hanging",
        }
    }
}

/// A single line of text.
#[derive(Debug, Clone, PartialEq)]
pub struct Text {
    pub position: Point,
    pub content: String,
    pub size: f64,
    pub fill: String,
    pub anchor: TextAnchor,
    pub baseline: Baseline,
    pub bold: bool,
    pub italic: bool,
}

impl Text {
    pub fn new(position: Point, content: impl Into<String>, size: f64, fill: impl Into<String>) -> Self {
        Self {
            position,
            content: content.into(),
            size,
            fill: fill.into(),
            anchor: TextAnchor::Middle,
            baseline: Baseline::Middle,
            bold: false,
            italic: false,
        }
    }

    pub fn anchored(mut self, anchor: TextAnchor) -> Self {
        self.anchor = anchor;
        self
    }

    pub fn baseline(mut self, baseline: Baseline) -> Self {
        self.baseline = baseline;
        self
    }

    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    pub fn italic(mut self) -> Self {
        self.italic = true;
        self
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Element {
    Circle { center: Point, radius: f64, style: Style },
    Path { d: String, style: Style },
    Text(Text),
    Group(Group),
}

/// Named container, the unit hosts attach interaction to.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Group {
    pub id: Option<String>,
    pub classes: Vec<String>,
    /// Group-wide opacity.
    pub opacity: Option<f64>,
    pub children: Vec<Element>,
}

impl Group {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.classes.push(class.into());
        self
    }

    pub fn with_opacity(mut self, opacity: f64) -> Self {
        self.opacity = Some(opacity);
        self
    }

    pub fn push(&mut self, element: Element) {
        self.children.push(element);
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }
}

/// A complete drawing on a fixed logical canvas.
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    pub width: f64,
    pub height: f64,
    pub background: String,
    pub defs: Vec<Def>,
    pub elements: Vec<Element>,
}

impl Scene {
    pub fn new(width: f64, height: f64, background: impl Into<String>) -> Self {
        Self {
            width,
            height,
            background: background.into(),
            defs: Vec::new(),
            elements: Vec::new(),
        }
    }

    pub fn push(&mut self, element: Element) {
        self.elements.push(element);
    }

    /// Find a group anywhere in the scene by id.
    pub fn group(&self, id: &str) -> Option<&Group> {
        fn search<'a>(elements: &'a [Element], id: &str) -> Option<&'a Group> {
            elements.iter().find_map(|element| match element {
                Element::Group(group) if group.id.as_deref() == Some(id) => Some(group),
                Element::Group(group) => search(&group.children, id),
                _ => None,
            })
        }
        search(&self.elements, id)
    }

    /// All text content in drawing order.
    pub fn texts(&self) -> Vec<&str> {
        fn collect<'a>(elements: &'a [Element], out: &mut Vec<&'a str>) {
            for element in elements {
                match element {
                    Element::Text(text) => out.push(&text.content),
                    Element::Group(group) => collect(&group.children, out),
                    _ => {}
                }
            }
        }
        let mut out = Vec::new();
        collect(&self.elements, &mut out);
        out
    }
}

/// Lines of text stacked `line_height` apart, starting at `origin`.
pub fn text_lines(lines: &[String], origin: Point, line_height: f64, template: &Text) -> Vec<Element> {
    lines
        .iter()
        .enumerate()
        .map(|(index, line)| {
            Element::Text(Text {
                position: Point::new(origin.x, origin.y + index as f64 * line_height),
                content: line.clone(),
                ..template.clone()
            })
        })
        .collect()
}
