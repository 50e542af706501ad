//! SVG preview renderer for routed scenes
//!
//! Takes a [`Scene`](crate::scene::Scene) and its routed edges and produces an
//! SVG string with CSS classes for styling.

pub mod config;
pub mod svg;

pub use config::{Projection, SvgConfig};
pub use svg::{path_to_d, render_svg, SvgBuilder};
