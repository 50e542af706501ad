//! Edge Router - geometric edge routing between anchored endpoints in 3D
//!
//! This library provides a segment-based path model, straight, orthogonal
//! (step) and Bezier routers, arrow placement, TOML scene files and an SVG
//! preview renderer.
//!
//! # Example
//!
//! ```rust
//! use edge_router::{build_edge, AnchorSide, EdgeStyle, Point3, RouteRequest, RoutingMode};
//!
//! let request = RouteRequest::new(
//!     Point3::new(0.0, 0.0, 0.0),
//!     AnchorSide::Right,
//!     Point3::new(4.0, 2.0, 0.0),
//!     AnchorSide::Left,
//! );
//! let style = EdgeStyle::new().with_routing(RoutingMode::SmoothStep);
//! let edge = build_edge(&request, &style, None).unwrap();
//! assert_eq!(edge.polyline.first(), Some(&Point3::new(0.0, 0.0, 0.0)));
//! ```

pub mod path;
pub mod placement;
pub mod renderer;
pub mod routing;
pub mod scene;

pub use path::{Axis, Bounds3, EllipticalArc, Path, Point3, Segment};
pub use placement::{build_edge, place_arrow, try_build_edge, ArrowPlacement, EdgeGeometry};
pub use renderer::{render_svg, Projection, SvgConfig};
pub use routing::{
    edge_center, route, AnchorSide, EdgeRouter, EdgeStyle, RouteError, RouteRequest, RouteResult,
    RoutingMode,
};
pub use scene::{RoutedEdge, Scene, SceneError};

use thiserror::Error;

/// Errors that can occur during the render pipeline
#[derive(Debug, Error)]
pub enum RenderError {
    /// Error loading the scene
    #[error("scene error: {0}")]
    Scene(#[from] SceneError),

    /// No edge of a non-empty scene could be routed
    #[error("none of the {0} edges could be routed")]
    NothingRouted(usize),
}

/// Configuration for the complete render pipeline
#[derive(Debug, Clone, Default)]
pub struct RenderConfig {
    /// SVG output configuration
    pub svg: SvgConfig,
    /// Overrides the sample count of every edge
    pub divisions: Option<usize>,
}

impl RenderConfig {
    /// Create a new configuration with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the SVG configuration
    pub fn with_svg(mut self, config: SvgConfig) -> Self {
        self.svg = config;
        self
    }

    /// Override per-edge sample divisions
    pub fn with_divisions(mut self, divisions: usize) -> Self {
        self.divisions = Some(divisions);
        self
    }
}

/// Parse a scene and route every edge, applying pipeline overrides
///
/// Edges that cannot be routed are skipped; the pipeline only fails when
/// the scene has edges and none of them routed.
pub fn route_scene(source: &str, config: &RenderConfig) -> Result<(Scene, Vec<RoutedEdge>), RenderError> {
    route_loaded(Scene::from_str(source)?, config)
}

/// Like [`route_scene`], reading the scene from a TOML file
pub fn route_scene_file(
    path: &std::path::Path,
    config: &RenderConfig,
) -> Result<(Scene, Vec<RoutedEdge>), RenderError> {
    route_loaded(Scene::from_file(path)?, config)
}

fn route_loaded(mut scene: Scene, config: &RenderConfig) -> Result<(Scene, Vec<RoutedEdge>), RenderError> {
    if let Some(divisions) = config.divisions {
        for edge in &mut scene.edges {
            edge.style.divisions = divisions;
        }
    }

    let routed = scene.route_all(None);
    if routed.is_empty() && !scene.edges.is_empty() {
        return Err(RenderError::NothingRouted(scene.edges.len()));
    }
    Ok((scene, routed))
}

/// Render a TOML scene to SVG with default configuration
///
/// # Example
///
/// ```rust
/// use edge_router::render;
///
/// let svg = render(r#"
///     [[nodes]]
///     id = "client"
///
///     [[nodes]]
///     id = "server"
///     position = { x = 4.0 }
///
///     [[edges]]
///     from = "client"
///     to = "server"
///     label = "request"
/// "#).unwrap();
///
/// assert!(svg.contains("<svg"));
/// assert!(svg.contains("request"));
/// ```
pub fn render(source: &str) -> Result<String, RenderError> {
    render_with_config(source, &RenderConfig::default())
}

/// Render a TOML scene to SVG with custom configuration
pub fn render_with_config(source: &str, config: &RenderConfig) -> Result<String, RenderError> {
    let (scene, routed) = route_scene(source, config)?;
    Ok(render_svg(&scene, &routed, &config.svg))
}
