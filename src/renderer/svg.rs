//! SVG preview of routed scenes
//!
//! Scene coordinates are flattened onto the configured [`Projection`]
//! plane with the up axis flipped into SVG's y-down space. The dropped axis
//! is ignored, so edges that differ only in depth overlap.
//!
//! [`Projection`]: super::Projection

use std::f64::consts::FRAC_PI_2;
use std::fmt::Write;

use crate::path::{Bounds3, Point3};
use crate::placement::ArrowPlacement;
use crate::scene::{Node, RoutedEdge, Scene};

use super::SvgConfig;

/// Collects preview layers and tracks their screen extent
pub struct SvgBuilder {
    config: SvgConfig,
    prefix: String,
    /// Nodes, edges and labels, drawn in that order
    layers: [Vec<String>; 3],
    extent: Option<Bounds3>,
}

const NODES: usize = 0;
const EDGES: usize = 1;
const LABELS: usize = 2;

impl SvgBuilder {
    pub fn new(config: SvgConfig) -> Self {
        let prefix = config.class_prefix.clone().unwrap_or_default();
        Self {
            config,
            prefix,
            layers: Default::default(),
            extent: None,
        }
    }

    fn grow(&mut self, x: f64, y: f64) {
        let p = Point3::new(x, y, 0.0);
        self.extent = Some(match self.extent {
            Some(b) => Bounds3 {
                min: b.min.min(p),
                max: b.max.max(p),
            },
            None => Bounds3 { min: p, max: p },
        });
    }

    fn push(&mut self, layer: usize, element: String) {
        let indent = if self.config.pretty_print { "  " } else { "" };
        self.layers[layer].push(format!("{indent}{element}"));
    }

    /// Node box footprint on the projection plane
    pub fn add_node(&mut self, node: &Node) {
        let (cx, cy) = self.config.to_screen(node.position);
        let (w, h) = self.config.projection.flatten(node.size);
        let (w, h) = (w.abs() * self.config.scale, h.abs() * self.config.scale);
        let (x, y) = (cx - w / 2.0, cy - h / 2.0);
        self.grow(x, y);
        self.grow(x + w, y + h);

        let element = format!(
            r#"<rect id="{}" class="{}node" x="{:.2}" y="{:.2}" width="{:.2}" height="{:.2}"/>"#,
            escape_xml(&node.id),
            self.prefix,
            x,
            y,
            w,
            h
        );
        self.push(NODES, element);
    }

    /// Sampled edge as an open polyline
    pub fn add_polyline(&mut self, polyline: &[Point3], thickness: f64) {
        let screen: Vec<(f64, f64)> = polyline.iter().map(|p| self.config.to_screen(*p)).collect();
        for &(x, y) in &screen {
            self.grow(x, y);
        }

        let element = format!(
            r#"<path class="{}edge" d="{}" fill="none" stroke-width="{:.2}"/>"#,
            self.prefix,
            path_to_d(&screen),
            (thickness * self.config.scale).max(1.0)
        );
        self.push(EDGES, element);
    }

    /// Triangle with its tip on the arrow position
    pub fn add_arrow(&mut self, arrow: &ArrowPlacement) {
        let (x, y) = self.config.to_screen(arrow.position);
        let (ax, ay) = self.config.to_screen(arrow.position + arrow.direction);
        // Same contract as the scene rotation, measured in y-down space
        let degrees = ((ay - y).atan2(ax - x) + FRAC_PI_2).to_degrees() + 0.0;
        let len = self.config.arrow_size;
        let half = len / 2.0;

        let element = format!(
            r#"<polygon class="{}arrow" points="0,0 {:.2},{:.2} {:.2},{:.2}" transform="translate({:.2} {:.2}) rotate({:.2})"/>"#,
            self.prefix,
            -half,
            len,
            half,
            len,
            x,
            y,
            degrees
        );
        self.push(EDGES, element);
    }

    pub fn add_label(&mut self, text: &str, position: Point3) {
        let (x, y) = self.config.to_screen(position);
        self.grow(x, y);

        let element = format!(
            r#"<text class="{}label" x="{:.2}" y="{:.2}" text-anchor="middle" dominant-baseline="middle">{}</text>"#,
            self.prefix,
            x,
            y,
            escape_xml(text)
        );
        self.push(LABELS, element);
    }

    /// Assemble the document; the view box hugs everything added plus the margin
    pub fn build(self) -> String {
        let nl = if self.config.pretty_print { "\n" } else { "" };
        let margin = self.config.margin;
        let (min, size) = self
            .extent
            .map(|b| (b.min, b.size()))
            .unwrap_or((Point3::ZERO, Point3::ZERO));

        let mut svg = String::new();
        if self.config.xml_declaration {
            svg.push_str(r#"<?xml version="1.0" encoding="UTF-8"?>"#);
            svg.push_str(nl);
        }
        let _ = write!(
            svg,
            r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="{:.2} {:.2} {:.2} {:.2}">{}"#,
            min.x - margin,
            min.y - margin,
            size.x + 2.0 * margin,
            size.y + 2.0 * margin,
            nl
        );
        for element in self.layers.iter().flatten() {
            svg.push_str(element);
            svg.push_str(nl);
        }
        svg.push_str("</svg>");
        svg
    }
}

/// Draw a scene's nodes and its routed edges
pub fn render_svg(scene: &Scene, edges: &[RoutedEdge], config: &SvgConfig) -> String {
    let mut builder = SvgBuilder::new(config.clone());

    for node in &scene.nodes {
        builder.add_node(node);
    }
    for edge in edges {
        let geometry = &edge.geometry;
        builder.add_polyline(&geometry.polyline, geometry.thickness);
        for arrow in geometry.start_arrow.iter().chain(&geometry.end_arrow) {
            builder.add_arrow(arrow);
        }
        if let Some(text) = &edge.label {
            builder.add_label(text, geometry.label);
        }
    }

    builder.build()
}

/// `M`/`L` path data for screen points
pub fn path_to_d(points: &[(f64, f64)]) -> String {
    let mut d = String::new();
    for (i, (x, y)) in points.iter().enumerate() {
        let command = if i == 0 { 'M' } else { 'L' };
        let sep = if i == 0 { "" } else { " " };
        let _ = write!(d, "{sep}{command}{x:.2} {y:.2}");
    }
    d
}

fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}
