//! # SVG Import
//!
//! Reads the supported SVG subset (`path`, `rect`, `ellipse`, `circle`,
//! `line`) into scene elements.
//!
//! Import is lenient: shapes are collected at any nesting depth in document
//! order, unknown tags are skipped, and missing or unparseable numeric
//! attributes read as `0`. Only a document the parser rejects outright fails.

use gemcad_core::{Result, SvgError};
use svg::node::element::tag::Type as TagType;
use svg::parser::Event;

use crate::model::{
    DesignCircle, DesignEllipse, DesignLine, DesignPath, DesignRectangle, Element, Point, Shape,
    Style,
};
use crate::scene::Scene;

/// Tags that only group or describe content and are not counted as skipped.
const STRUCTURAL_TAGS: &[&str] = &["svg", "g", "defs", "title", "desc", "metadata"];

/// Counts reported after an import.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ImportSummary {
    /// Elements appended to the layer.
    pub imported: usize,
    /// Unsupported drawing tags that were ignored.
    pub skipped: usize,
}

/// SVG importer for converting SVG documents into scene elements
#[derive(Debug, Clone, Default)]
pub struct SvgImporter {
    default_style: Style,
}

impl SvgImporter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Style used for attributes the document leaves out.
    pub fn with_default_style(default_style: Style) -> Self {
        Self { default_style }
    }

    /// Parses `content` into elements without touching any scene.
    pub fn parse(&self, content: &str) -> std::result::Result<(Vec<Element>, ImportSummary), SvgError> {
        let parser = svg::read(content).map_err(|e| SvgError::Malformed {
            reason: e.to_string(),
        })?;

        let mut elements = Vec::new();
        let mut summary = ImportSummary::default();

        for event in parser {
            match event {
                Event::Error(error) => {
                    return Err(SvgError::Malformed {
                        reason: error.to_string(),
                    });
                }
                Event::Tag(name, TagType::Start | TagType::Empty, attributes) => {
                    let attr = |key: &str| attributes.get(key).map(|v| unescape(&v.to_string()));
                    match self.convert(name, &attr) {
                        Some(element) => elements.push(element),
                        None if STRUCTURAL_TAGS.contains(&name) => {}
                        None => summary.skipped += 1,
                    }
                }
                _ => {}
            }
        }

        summary.imported = elements.len();
        Ok((elements, summary))
    }

    /// Parses `content` and appends its shapes to `layer` as one undo step.
    ///
    /// On error the scene is left unchanged.
    pub fn import_into(&self, scene: &mut Scene, layer: &str, content: &str) -> Result<ImportSummary> {
        // Fail on an unknown layer before doing any parsing work.
        scene.elements(layer)?;
        let (elements, summary) = self.parse(content)?;
        scene.add_elements(layer, elements)?;
        tracing::info!(
            "Imported {} elements into layer '{}' ({} skipped)",
            summary.imported,
            layer,
            summary.skipped
        );
        Ok(summary)
    }

    fn convert(&self, name: &str, attr: &dyn Fn(&str) -> Option<String>) -> Option<Element> {
        let num = |key: &str| parse_number(attr(key).as_deref());
        let shape = match name {
            "path" => Shape::Path(DesignPath::new(attr("d").unwrap_or_default())),
            "rect" => Shape::Rectangle(DesignRectangle::new(
                num("x"),
                num("y"),
                num("width"),
                num("height"),
            )),
            "ellipse" => Shape::Ellipse(DesignEllipse::new(
                Point::new(num("cx"), num("cy")),
                num("rx"),
                num("ry"),
            )),
            "circle" => Shape::Circle(DesignCircle::new(
                Point::new(num("cx"), num("cy")),
                num("r"),
            )),
            "line" => Shape::Line(DesignLine::new(
                Point::new(num("x1"), num("y1")),
                Point::new(num("x2"), num("y2")),
            )),
            _ => return None,
        };
        Some(Element::new(shape, self.style(attr)))
    }

    fn style(&self, attr: &dyn Fn(&str) -> Option<String>) -> Style {
        let fill = match attr("fill") {
            Some(fill) if fill.trim() == "none" => None,
            Some(fill) => Some(fill),
            None => self.default_style.fill.clone(),
        };
        let stroke = attr("stroke").unwrap_or_else(|| self.default_style.stroke.clone());
        let stroke_width = attr("stroke-width")
            .and_then(|w| w.trim().parse::<f64>().ok())
            .unwrap_or(self.default_style.stroke_width);
        Style::new(stroke, stroke_width, fill)
    }
}

/// Resolves the predefined XML entities and character references in an
/// attribute value. Unknown or unterminated references are kept verbatim.
fn unescape(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut rest = value;
    while let Some(start) = rest.find('&') {
        out.push_str(&rest[..start]);
        rest = &rest[start..];
        let decoded = rest.find(';').and_then(|end| {
            let c = match &rest[1..end] {
                "amp" => '&',
                "lt" => '<',
                "gt" => '>',
                "quot" => '"',
                "apos" => '\'',
                reference => {
                    let code = reference.strip_prefix('#')?;
                    let code = match code.strip_prefix(['x', 'X']) {
                        Some(hex) => u32::from_str_radix(hex, 16).ok()?,
                        None => code.parse::<u32>().ok()?,
                    };
                    char::from_u32(code)?
                }
            };
            Some((c, end + 1))
        });
        match decoded {
            Some((c, len)) => {
                out.push(c);
                rest = &rest[len..];
            }
            None => {
                out.push('&');
                rest = &rest[1..];
            }
        }
    }
    out.push_str(rest);
    out
}

fn parse_number(value: Option<&str>) -> f64 {
    value
        .and_then(|v| v.trim().parse::<f64>().ok())
        .filter(|v| v.is_finite())
        .unwrap_or(0.0)
}
