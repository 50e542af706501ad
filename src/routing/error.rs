//! Error types for edge routing

use thiserror::Error;

use super::RoutingMode;

/// Errors that stop a single edge from being drawn
///
/// Every variant is local to one edge: callers skip that edge and keep going.
/// Degenerate input (coincident endpoints, zero radius or offset) is not an
/// error; routers return a minimal valid path for it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouteError {
    /// Routing produced nothing to sample
    #[error("routing produced an empty path")]
    EmptyPath,

    /// A routing mode was requested that has no implementation
    #[error("no router implementation provided for {mode} routing")]
    UnimplementedRouter { mode: RoutingMode },
}

impl RouteError {
    /// Create an unimplemented router error
    pub fn unimplemented(mode: RoutingMode) -> Self {
        Self::UnimplementedRouter { mode }
    }
}
