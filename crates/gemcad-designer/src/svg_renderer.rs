//! SVG export of scene layers.
//!
//! Documents are written with a fixed canvas size and one element per line:
//!
//! ```text
//! <svg xmlns='http://www.w3.org/2000/svg' width='800' height='600'>
//! <rect x="10" y="10" width="40" height="30" stroke="#000000" stroke-width="1" fill="none"/>
//! </svg>
//! ```

use gemcad_core::constants::{EXPORT_HEIGHT, EXPORT_WIDTH};
use gemcad_core::SceneError;

use crate::model::{Element, Shape, Style};
use crate::scene::Scene;

/// Renders `elements` as a complete 800×600 document.
pub fn render_document(elements: &[Element]) -> String {
    let mut out = format!(
        "<svg xmlns='http://www.w3.org/2000/svg' width='{}' height='{}'>\n",
        EXPORT_WIDTH, EXPORT_HEIGHT
    );
    for element in elements {
        out.push_str(&render_element(element));
        out.push('\n');
    }
    out.push_str("</svg>");
    out
}

/// Exports the active layer into an 800×600 document.
pub fn export_svg(scene: &Scene) -> String {
    render_document(scene.active_elements())
}

/// Exports the named layer into an 800×600 document.
pub fn export_layer(scene: &Scene, layer: &str) -> Result<String, SceneError> {
    Ok(render_document(scene.elements(layer)?))
}

/// One element as a self-closing SVG tag.
pub fn render_element(element: &Element) -> String {
    let geometry = match &element.shape {
        Shape::Path(p) => format!("<path d=\"{}\"", escape(&p.d)),
        Shape::Rectangle(r) => format!(
            "<rect x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\"",
            r.x, r.y, r.width, r.height
        ),
        Shape::Ellipse(e) => format!(
            "<ellipse cx=\"{}\" cy=\"{}\" rx=\"{}\" ry=\"{}\"",
            e.center.x, e.center.y, e.rx, e.ry
        ),
        Shape::Circle(c) => format!(
            "<circle cx=\"{}\" cy=\"{}\" r=\"{}\"",
            c.center.x, c.center.y, c.radius
        ),
        Shape::Line(l) => format!(
            "<line x1=\"{}\" y1=\"{}\" x2=\"{}\" y2=\"{}\"",
            l.start.x, l.start.y, l.end.x, l.end.y
        ),
    };
    format!("{} {}/>", geometry, render_style(&element.style))
}

fn render_style(style: &Style) -> String {
    format!(
        "stroke=\"{}\" stroke-width=\"{}\" fill=\"{}\"",
        escape(&style.stroke),
        style.stroke_width,
        escape(style.fill.as_deref().unwrap_or("none"))
    )
}

fn escape(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}
