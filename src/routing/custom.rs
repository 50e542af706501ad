//! Extension point for caller-supplied routing

use super::{EdgeStyle, RouteError, RouteRequest, RouteResult, RoutingMode};

/// A routing strategy supplied from outside the crate
///
/// Receives the same inputs as the built-in routers. The default
/// implementation reports that no router was provided.
pub trait EdgeRouter: Send + Sync {
    fn route(&self, request: &RouteRequest, style: &EdgeStyle) -> Result<RouteResult, RouteError> {
        let _ = (request, style);
        Err(RouteError::unimplemented(RoutingMode::Custom))
    }
}

/// Placeholder used when custom routing is requested without an implementation
#[derive(Debug, Clone, Copy, Default)]
pub struct UnprovidedRouter;

impl EdgeRouter for UnprovidedRouter {}

impl<F> EdgeRouter for F
where
    F: Fn(&RouteRequest, &EdgeStyle) -> Result<RouteResult, RouteError> + Send + Sync,
{
    fn route(&self, request: &RouteRequest, style: &EdgeStyle) -> Result<RouteResult, RouteError> {
        self(request, style)
    }
}
