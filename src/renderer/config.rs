//! Preview settings: projection plane, scale and output formatting

use crate::path::Point3;

/// Plane a 3D scene is flattened onto
///
/// The first named axis runs right on screen, the second runs up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Projection {
    /// x right, y up
    #[default]
    Xy,
    /// x right, z up
    Xz,
    /// z right, y up
    Zy,
}

impl Projection {
    /// Scene point in plane coordinates, second component pointing up
    pub fn flatten(self, point: Point3) -> (f64, f64) {
        match self {
            Projection::Xy => (point.x, point.y),
            Projection::Xz => (point.x, point.z),
            Projection::Zy => (point.z, point.y),
        }
    }
}

/// How a routed scene is drawn as SVG
#[derive(Debug, Clone)]
pub struct SvgConfig {
    pub projection: Projection,

    /// Pixels per scene unit
    pub scale: f64,

    /// Margin around the drawing, in pixels
    pub margin: f64,

    /// Emit the `<?xml ...?>` prolog
    pub xml_declaration: bool,

    /// One element per line, indented
    pub pretty_print: bool,

    /// Prepended to every CSS class (`er-` gives `er-edge`)
    pub class_prefix: Option<String>,

    /// Arrowhead length in pixels
    pub arrow_size: f64,
}

impl Default for SvgConfig {
    fn default() -> Self {
        Self {
            projection: Projection::Xy,
            scale: 40.0,
            margin: 20.0,
            xml_declaration: true,
            pretty_print: true,
            class_prefix: Some("er-".to_string()),
            arrow_size: 8.0,
        }
    }
}

impl SvgConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_projection(mut self, projection: Projection) -> Self {
        self.projection = projection;
        self
    }

    pub fn with_scale(mut self, scale: f64) -> Self {
        self.scale = scale;
        self
    }

    pub fn with_margin(mut self, margin: f64) -> Self {
        self.margin = margin;
        self
    }

    /// Fragment output for embedding: no prolog, no line breaks
    pub fn inline(mut self) -> Self {
        self.xml_declaration = false;
        self.pretty_print = false;
        self
    }

    pub fn with_class_prefix(mut self, prefix: Option<&str>) -> Self {
        self.class_prefix = prefix.map(str::to_string);
        self
    }

    /// Scene point to SVG user space, y pointing down
    pub fn to_screen(&self, point: Point3) -> (f64, f64) {
        let (u, v) = self.projection.flatten(point);
        // Adding zero turns -0.0 into 0.0 so it never prints as "-0.00"
        (u * self.scale + 0.0, -v * self.scale + 0.0)
    }
}
