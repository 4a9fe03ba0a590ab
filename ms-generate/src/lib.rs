//! Surface request orchestration.
//!
//! Validates a [`SurfaceRequest`], builds the parameter grids over each
//! family's fixed domain, invokes the evaluation engine (chunked-parallel
//! for Chen-Gackstatter where the per-point elliptic functions dominate),
//! and hands back the coordinate grid triple with a descriptive title.

use std::f64::consts::PI;

use ms_core::grid::{self, Grid};
use ms_core::{chen_gackstatter::ChenGackstatter, enneper, SurfaceParams, SurfaceRequest};

/// Default width of the per-request worker pool.
pub const DEFAULT_WORKERS: usize = 4;

/// Largest accepted Enneper order parameter.
pub const MAX_ENNEPER_ORDER: u32 = 1000;

/// Errors that can occur while generating a surface.
#[derive(Clone, Debug)]
pub enum Error {
    /// The request is malformed; rejected before any computation starts.
    InvalidArgument(String),
    /// The computation itself failed.
    Internal(String),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::InvalidArgument(msg) => write!(f, "invalid argument: {}", msg),
            Error::Internal(msg) => write!(f, "internal error: {}", msg),
        }
    }
}

/// A computed surface: the three coordinate grids plus a title.
#[derive(Clone, Debug)]
pub struct Surface {
    pub title: String,
    pub x: Grid,
    pub y: Grid,
    pub z: Grid,
}

/// Build a [`SurfaceRequest`] from a surface-type selector string, as used
/// by the web and CLI layers. Unknown selectors are rejected here, before
/// any computation.
pub fn request_for(
    surface_type: &str,
    resolution: usize,
    order: u32,
    parallel: bool,
    workers: usize,
) -> Result<SurfaceRequest, Error> {
    let params = match surface_type {
        "chen-gackstatter" => SurfaceParams::ChenGackstatter { parallel, workers },
        "enneper" => SurfaceParams::Enneper { order },
        other => {
            return Err(Error::InvalidArgument(format!(
                "unknown surface type {:?} (expected one of {:?})",
                other,
                ms_core::surface_types()
            )))
        }
    };
    Ok(SurfaceRequest { resolution, params })
}

/// Generate the surface described by the request.
pub fn generate(request: &SurfaceRequest) -> Result<Surface, Error> {
    if request.resolution < 2 {
        return Err(Error::InvalidArgument(format!(
            "resolution must be at least 2, got {}",
            request.resolution
        )));
    }
    match request.params {
        SurfaceParams::ChenGackstatter { parallel, workers } => {
            generate_chen_gackstatter(request.resolution, parallel, workers)
        }
        SurfaceParams::Enneper { order } => generate_enneper(request.resolution, order),
    }
}

fn generate_chen_gackstatter(
    resolution: usize,
    parallel: bool,
    workers: usize,
) -> Result<Surface, Error> {
    if workers < 1 {
        return Err(Error::InvalidArgument(
            "worker count must be at least 1".to_string(),
        ));
    }
    tracing::info!(resolution, parallel, workers, "generating Chen-Gackstatter surface");

    // Radial range starts strictly above zero: r = 0 is a pole of the
    // elliptic functions.
    let r = grid::linspace(0.2, 0.8, resolution);
    let theta = grid::linspace(-PI, PI, resolution);
    let (r, theta) = grid::mesh_grid(&r, &theta);

    let surface = ChenGackstatter::new().map_err(Error::Internal)?;
    let (x, y, z) = if parallel {
        surface.evaluate_parallel(&r, &theta, workers)
    } else {
        surface.evaluate(&r, &theta)
    }
    .map_err(Error::Internal)?;

    Ok(Surface {
        title: "Chen-Gackstatter Minimal Surface".to_string(),
        x,
        y,
        z,
    })
}

fn generate_enneper(resolution: usize, order: u32) -> Result<Surface, Error> {
    if order < 1 {
        return Err(Error::InvalidArgument(format!(
            "order must be at least 1, got {}",
            order
        )));
    }
    if order > MAX_ENNEPER_ORDER {
        return Err(Error::InvalidArgument(format!(
            "order must be at most {}, got {}",
            MAX_ENNEPER_ORDER, order
        )));
    }
    tracing::info!(resolution, order, "generating Enneper surface");

    let range = grid::linspace(-1.5, 1.5, resolution);
    let (u, v) = grid::mesh_grid(&range, &range);
    let (x, y, z) = enneper::evaluate(&u, &v, order).map_err(Error::Internal)?;

    Ok(Surface {
        title: format!("Enneper Minimal Surface (order {})", order),
        x,
        y,
        z,
    })
}
