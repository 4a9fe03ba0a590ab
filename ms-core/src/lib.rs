//! Library code for the minimal-surface generator.

pub mod chen_gackstatter;
pub mod elliptic;
pub mod enneper;
pub mod grid;
pub mod image;

/// A pair of integer (width, height) dimensions.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Size {
    pub width: usize,
    pub height: usize,
}

/// The surface-type selectors understood by this library, as used in URLs
/// and on the command line.
pub fn surface_types() -> &'static [&'static str] {
    &["chen-gackstatter", "enneper"]
}

/// A request to compute one surface.
#[derive(Clone, Debug)]
pub struct SurfaceRequest {
    /// Number of samples along each parameter range; the output grids are
    /// `resolution x resolution`.
    pub resolution: usize,
    pub params: SurfaceParams,
}

/// Family-specific parameters of a surface request.
#[derive(Clone, Debug)]
pub enum SurfaceParams {
    ChenGackstatter { parallel: bool, workers: usize },
    Enneper { order: u32 },
}
