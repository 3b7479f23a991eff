//! Typed drawing primitives produced by the chart renderers.
//!
//! A [`Scene`] is a plain value: renderers build it, tests inspect it,
//! and [`super::svg`] serializes it. Nothing here touches a display.

/// Horizontal anchoring of a text node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextAnchor {
    #[default]
    Start,
    Middle,
    End,
}

impl TextAnchor {
    pub(crate) fn as_svg(self) -> &'static str {
        match self {
            TextAnchor::Start => "start",
            TextAnchor::Middle => "middle",
            TextAnchor::End => "end",
        }
    }
}

/// One node of a chart's scene graph.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    /// Container with an optional `transform`, children drawn in order
    Group {
        transform: Option<String>,
        children: Vec<Node>,
    },
    Rect {
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        rx: Option<f64>,
        fill: Option<String>,
        class: Option<String>,
    },
    Circle {
        cx: f64,
        cy: f64,
        r: f64,
        fill: Option<String>,
        class: Option<String>,
    },
    Line {
        x1: f64,
        y1: f64,
        x2: f64,
        y2: f64,
        stroke: Option<String>,
        stroke_width: Option<f64>,
        class: Option<String>,
    },
    Path {
        d: String,
        fill: Option<String>,
        stroke: Option<String>,
        stroke_width: Option<f64>,
        stroke_linejoin: Option<String>,
        class: Option<String>,
    },
    Text {
        x: f64,
        y: f64,
        content: String,
        anchor: TextAnchor,
        transform: Option<String>,
        fill: Option<String>,
        font_size: Option<f64>,
        font_weight: Option<String>,
        class: Option<String>,
    },
}

impl Node {
    // ── Constructors ────────────────────────────────────────────────

    pub fn group(children: Vec<Node>) -> Self {
        Node::Group {
            transform: None,
            children,
        }
    }

    pub fn group_translated(dx: f64, dy: f64, children: Vec<Node>) -> Self {
        Node::Group {
            transform: Some(format!(
                "translate({}, {})",
                crate::charts::geometry::fmt_num(dx),
                crate::charts::geometry::fmt_num(dy)
            )),
            children,
        }
    }

    pub fn rect(x: f64, y: f64, width: f64, height: f64) -> Self {
        Node::Rect {
            x,
            y,
            width,
            height,
            rx: None,
            fill: None,
            class: None,
        }
    }

    pub fn circle(cx: f64, cy: f64, r: f64) -> Self {
        Node::Circle {
            cx,
            cy,
            r,
            fill: None,
            class: None,
        }
    }

    pub fn line(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Node::Line {
            x1,
            y1,
            x2,
            y2,
            stroke: None,
            stroke_width: None,
            class: None,
        }
    }

    pub fn path(d: impl Into<String>) -> Self {
        Node::Path {
            d: d.into(),
            fill: None,
            stroke: None,
            stroke_width: None,
            stroke_linejoin: None,
            class: None,
        }
    }

    pub fn text(x: f64, y: f64, content: impl Into<String>) -> Self {
        Node::Text {
            x,
            y,
            content: content.into(),
            anchor: TextAnchor::Start,
            transform: None,
            fill: None,
            font_size: None,
            font_weight: None,
            class: None,
        }
    }

    // ── Builder modifiers ───────────────────────────────────────────

    pub fn with_class(mut self, value: impl Into<String>) -> Self {
        match &mut self {
            Node::Group { .. } => {}
            Node::Rect { class, .. }
            | Node::Circle { class, .. }
            | Node::Line { class, .. }
            | Node::Path { class, .. }
            | Node::Text { class, .. } => *class = Some(value.into()),
        }
        self
    }

    pub fn with_fill(mut self, value: impl Into<String>) -> Self {
        match &mut self {
            Node::Rect { fill, .. }
            | Node::Circle { fill, .. }
            | Node::Path { fill, .. }
            | Node::Text { fill, .. } => *fill = Some(value.into()),
            Node::Group { .. } | Node::Line { .. } => {}
        }
        self
    }

    pub fn with_stroke(mut self, value: impl Into<String>, width: f64) -> Self {
        match &mut self {
            Node::Line {
                stroke,
                stroke_width,
                ..
            }
            | Node::Path {
                stroke,
                stroke_width,
                ..
            } => {
                *stroke = Some(value.into());
                *stroke_width = Some(width);
            }
            _ => {}
        }
        self
    }

    pub fn with_linejoin(mut self, value: impl Into<String>) -> Self {
        if let Node::Path {
            stroke_linejoin, ..
        } = &mut self
        {
            *stroke_linejoin = Some(value.into());
        }
        self
    }

    pub fn with_rounding(mut self, radius: f64) -> Self {
        if let Node::Rect { rx, .. } = &mut self {
            *rx = Some(radius);
        }
        self
    }

    pub fn with_anchor(mut self, value: TextAnchor) -> Self {
        if let Node::Text { anchor, .. } = &mut self {
            *anchor = value;
        }
        self
    }

    pub fn with_transform(mut self, value: impl Into<String>) -> Self {
        match &mut self {
            Node::Group { transform, .. } | Node::Text { transform, .. } => {
                *transform = Some(value.into())
            }
            _ => {}
        }
        self
    }

    pub fn with_font(mut self, size: Option<f64>, weight: Option<&str>) -> Self {
        if let Node::Text {
            font_size,
            font_weight,
            ..
        } = &mut self
        {
            *font_size = size;
            *font_weight = weight.map(str::to_string);
        }
        self
    }

    // ── Inspection helpers (used by tests and the serializer) ───────

    /// Children of a group; empty for leaf nodes.
    #[must_use]
    pub fn children(&self) -> &[Node] {
        match self {
            Node::Group { children, .. } => children,
            _ => &[],
        }
    }

    /// Depth-first count of leaf (non-group) nodes.
    #[must_use]
    pub fn leaf_count(&self) -> usize {
        match self {
            Node::Group { children, .. } => children.iter().map(Node::leaf_count).sum(),
            _ => 1,
        }
    }
}

/// A complete chart: outer dimensions plus the node tree.
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    /// SVG width attribute
    pub width: f64,

    /// SVG height attribute
    pub height: f64,

    /// Top-level nodes, drawn in order
    pub nodes: Vec<Node>,
}

impl Scene {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            nodes: Vec::new(),
        }
    }

    pub fn push(&mut self, node: Node) {
        self.nodes.push(node);
    }

    /// Depth-first count of leaf nodes across the whole scene.
    #[must_use]
    pub fn leaf_count(&self) -> usize {
        self.nodes.iter().map(Node::leaf_count).sum()
    }

    /// Depth-first search for the first text node whose content
    /// contains `needle`. Handy in tests.
    #[must_use]
    pub fn find_text(&self, needle: &str) -> Option<&Node> {
        fn walk<'a>(nodes: &'a [Node], needle: &str) -> Option<&'a Node> {
            for node in nodes {
                match node {
                    Node::Text { content, .. } if content.contains(needle) => return Some(node),
                    Node::Group { children, .. } => {
                        if let Some(found) = walk(children, needle) {
                            return Some(found);
                        }
                    }
                    _ => {}
                }
            }
            None
        }
        walk(&self.nodes, needle)
    }
}
