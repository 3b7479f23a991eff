pub mod mount;
pub mod scene;
pub mod svg;

use self::scene::Scene;
use self::svg::{scene_to_svg, xml_escape};

/// The output of one renderer: an SVG scene, ready-made HTML markup, or
/// an explicit "no data" placeholder.
///
/// The placeholder is a terminal state, not an error — charts degrade to
/// it instead of raising on empty series or zero totals.
#[derive(Debug, Clone, PartialEq)]
pub enum Rendering {
    /// A chart scene graph, serialized to SVG at mount time
    Svg(Scene),
    /// Panel markup, already escaped by its producer
    Html(String),
    /// Textual "no data" message
    Placeholder(String),
}

impl Rendering {
    pub fn placeholder(message: impl Into<String>) -> Self {
        Rendering::Placeholder(message.into())
    }

    /// True when this rendering is the "no data" terminal state.
    #[must_use]
    pub fn is_placeholder(&self) -> bool {
        matches!(self, Rendering::Placeholder(_))
    }

    /// Serialize to the markup string a mount point holds.
    #[must_use]
    pub fn to_markup(&self) -> String {
        match self {
            Rendering::Svg(scene) => scene_to_svg(scene),
            Rendering::Html(markup) => markup.clone(),
            Rendering::Placeholder(message) => {
                format!("<p class=\"no-data\">{}</p>", xml_escape(message))
            }
        }
    }
}
