/// HTTP serving for the minimal-surface generator.
///
/// The library implements routing and handlers; the binary starts up a
/// runtime and serves requests.
///
/// All dynamic paths take query parameters:
/// - surface: Surface-type selector. Defaults to "chen-gackstatter".
/// - res: Samples along each parameter range. Defaults to 50.
/// - order: Enneper order parameter. Defaults to 1.
/// - parallel: Whether Chen-Gackstatter evaluation fans out across workers.
/// - workers: Worker-pool width for the parallel path. Defaults to 4.
/// - colormap: Heightmap palette for the render path. Defaults to "thermal".
///
/// Dynamic paths are:
/// - `/`: HTML interface view. Form fields are filled by query params.
/// - `/surface/:surface`: Coordinate grids as JSON (title + row-major
///   nested arrays).
/// - `/render/:surface`: Heightmap preview of the Z grid, as PNG.
///
/// Static paths are:
/// - `/static/...`: Serve the provided static content (JS, CSS)
use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;

mod interface;
mod render;
mod static_content;
mod surface;

pub fn root_routes() -> Router {
    Router::new()
        .route("/", get(interface::interface))
        .route("/surface/:surface", get(surface::surface))
        .route("/render/:surface", get(render::render))
        .route("/static/:file", get(static_content::get))
        .layer(TraceLayer::new_for_http())
}

/// Query parameters shared by the interface, JSON, and render paths.
#[derive(serde::Deserialize, Clone, Debug)]
pub(crate) struct SurfaceQuery {
    #[serde(default = "SurfaceQuery::default_surface")]
    surface: String,
    #[serde(default = "SurfaceQuery::default_res")]
    res: usize,
    #[serde(default = "SurfaceQuery::default_order")]
    order: u32,
    #[serde(default = "SurfaceQuery::default_parallel")]
    parallel: bool,
    #[serde(default = "SurfaceQuery::default_workers")]
    workers: usize,
    #[serde(default = "SurfaceQuery::default_colormap")]
    colormap: String,
}

impl SurfaceQuery {
    fn default_surface() -> String {
        "chen-gackstatter".to_string()
    }
    fn default_res() -> usize {
        50
    }
    fn default_order() -> u32 {
        1
    }
    fn default_parallel() -> bool {
        true
    }
    fn default_workers() -> usize {
        ms_generate::DEFAULT_WORKERS
    }
    fn default_colormap() -> String {
        "thermal".to_string()
    }

    /// Build the engine request for the given surface-type selector,
    /// rejecting unknown selectors.
    pub(crate) fn to_request(
        &self,
        surface_type: &str,
    ) -> Result<ms_core::SurfaceRequest, ms_generate::Error> {
        ms_generate::request_for(
            surface_type,
            self.res,
            self.order,
            self.parallel,
            self.workers,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_defaults() {
        let query: SurfaceQuery = serde_urlencoded::from_str("").unwrap();
        assert_eq!(query.surface, "chen-gackstatter");
        assert_eq!(query.res, 50);
        assert_eq!(query.order, 1);
        assert!(query.parallel);
        assert_eq!(query.workers, 4);
        assert_eq!(query.colormap, "thermal");
    }

    #[test]
    fn test_query_overrides() {
        let query: SurfaceQuery = serde_urlencoded::from_str(
            "surface=enneper&res=80&order=3&parallel=false&colormap=gray",
        )
        .unwrap();
        assert_eq!(query.surface, "enneper");
        assert_eq!(query.res, 80);
        assert_eq!(query.order, 3);
        assert!(!query.parallel);
        assert_eq!(query.colormap, "gray");
    }

    #[test]
    fn test_to_request_rejects_unknown_selector() {
        let query: SurfaceQuery = serde_urlencoded::from_str("").unwrap();
        assert!(query.to_request("torus").is_err());
    }
}
