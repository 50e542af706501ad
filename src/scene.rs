//! Scene files: nodes and the edges routed between them
//!
//! Scenes are TOML documents. A `[style]` table sets defaults for every
//! edge; each edge may override individual keys.
//!
//! ```toml
//! [style]
//! routing = "smooth_step"
//!
//! [[nodes]]
//! id = "api"
//! position = { x = 0.0, y = 0.0 }
//!
//! [[nodes]]
//! id = "db"
//! position = { x = 6.0, y = -3.0 }
//!
//! [[edges]]
//! from = "api"
//! to = "db"
//! from_side = "right"
//! to_side = "top"
//! label = "query"
//! style = { corner_radius = 0.25 }
//! ```

use std::path::Path as FsPath;

use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

use crate::path::Point3;
use crate::placement::{try_build_edge, EdgeGeometry};
use crate::routing::{AnchorSide, EdgeRouter, EdgeStyle, RouteRequest};

/// Errors that can occur when loading a scene
#[derive(Error, Debug)]
pub enum SceneError {
    #[error("Failed to read scene file: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to parse scene TOML: {0}")]
    ParseError(#[from] toml::de::Error),
    #[error("edge {edge} references undefined node '{node}'")]
    UnknownNode { edge: usize, node: String },
    #[error("invalid style for edge {edge}: {source}")]
    InvalidStyle {
        edge: usize,
        #[source]
        source: toml::de::Error,
    },
}

/// A box-shaped node that edges attach to
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Node {
    pub id: String,
    /// Center of the node
    #[serde(default)]
    pub position: Point3,
    /// Extent along each axis; anchors sit on the faces of this box
    #[serde(default = "default_node_size")]
    pub size: Point3,
}

fn default_node_size() -> Point3 {
    Point3::new(1.0, 1.0, 1.0)
}

impl Node {
    /// Attachment point on the face named by `side`
    pub fn anchor(&self, side: AnchorSide) -> Point3 {
        let dir = side.direction();
        let half = self.size * 0.5;
        self.position + Point3::new(dir.x * half.x, dir.y * half.y, dir.z * half.z)
    }
}

/// One edge of a scene, with its style fully resolved
#[derive(Debug, Clone, PartialEq)]
pub struct EdgeSpec {
    pub from: String,
    pub to: String,
    pub from_side: AnchorSide,
    pub to_side: AnchorSide,
    pub label: Option<String>,
    pub style: EdgeStyle,
}

/// A routed edge ready for rendering
#[derive(Debug, Clone, PartialEq)]
pub struct RoutedEdge {
    /// Index of the edge in the scene
    pub index: usize,
    pub label: Option<String>,
    pub geometry: EdgeGeometry,
}

/// Nodes and edges loaded from a scene file
#[derive(Debug, Clone, Default)]
pub struct Scene {
    pub name: Option<String>,
    pub nodes: Vec<Node>,
    pub edges: Vec<EdgeSpec>,
}

/// TOML structure for deserializing scenes
#[derive(Deserialize)]
struct TomlScene {
    name: Option<String>,
    #[serde(default)]
    style: toml::Table,
    #[serde(default)]
    nodes: Vec<Node>,
    #[serde(default)]
    edges: Vec<TomlEdge>,
}

#[derive(Deserialize)]
struct TomlEdge {
    from: String,
    to: String,
    #[serde(default)]
    from_side: AnchorSide,
    #[serde(default)]
    to_side: AnchorSide,
    label: Option<String>,
    #[serde(default)]
    style: toml::Table,
}

impl Scene {
    /// Load a scene from a TOML file
    pub fn from_file(path: &FsPath) -> Result<Self, SceneError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_str(&content)
    }

    /// Load a scene from a TOML string
    pub fn from_str(content: &str) -> Result<Self, SceneError> {
        let parsed: TomlScene = toml::from_str(content)?;

        let mut edges = Vec::with_capacity(parsed.edges.len());
        for (index, edge) in parsed.edges.into_iter().enumerate() {
            let mut table = parsed.style.clone();
            table.extend(edge.style);
            let style: EdgeStyle = toml::Value::Table(table)
                .try_into()
                .map_err(|source| SceneError::InvalidStyle { edge: index, source })?;

            edges.push(EdgeSpec {
                from: edge.from,
                to: edge.to,
                from_side: edge.from_side,
                to_side: edge.to_side,
                label: edge.label,
                style,
            });
        }

        let scene = Scene {
            name: parsed.name,
            nodes: parsed.nodes,
            edges,
        };
        scene.validate()?;
        Ok(scene)
    }

    /// Check that every edge endpoint names a node
    pub fn validate(&self) -> Result<(), SceneError> {
        for (index, edge) in self.edges.iter().enumerate() {
            for id in [&edge.from, &edge.to] {
                if self.node(id).is_none() {
                    return Err(SceneError::UnknownNode {
                        edge: index,
                        node: id.clone(),
                    });
                }
            }
        }
        Ok(())
    }

    pub fn node(&self, id: &str) -> Option<&Node> {
        self.nodes.iter().find(|n| n.id == id)
    }

    /// Routing request for an edge, anchored on its nodes' faces
    pub fn request(&self, edge: &EdgeSpec) -> Option<RouteRequest> {
        let from = self.node(&edge.from)?;
        let to = self.node(&edge.to)?;
        // Resolve center sides against node centers so the anchor lands on a face
        let (from_side, to_side) =
            AnchorSide::resolve_center(edge.from_side, edge.to_side, from.position, to.position);
        Some(RouteRequest::new(
            from.anchor(from_side),
            from_side,
            to.anchor(to_side),
            to_side,
        ))
    }

    /// Route every edge, skipping the ones that cannot be drawn
    pub fn route_all(&self, custom: Option<&dyn EdgeRouter>) -> Vec<RoutedEdge> {
        let routed: Vec<RoutedEdge> = self
            .edges
            .iter()
            .enumerate()
            .filter_map(|(index, edge)| {
                let request = self.request(edge)?;
                let geometry = try_build_edge(&request, &edge.style, custom)?;
                Some(RoutedEdge {
                    index,
                    label: edge.label.clone(),
                    geometry,
                })
            })
            .collect();

        debug!(
            routed = routed.len(),
            total = self.edges.len(),
            "routed scene edges"
        );
        routed
    }
}
