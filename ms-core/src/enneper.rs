//! The Enneper surface and its higher-order generalizations: a closed-form
//! polynomial parametrization, cheap enough that no parallel path exists.

use crate::grid::{self, Grid};

/// Map one Cartesian parameter pair to surface coordinates, for order
/// `n >= 1`.
pub fn point(u: f64, v: f64, n: u32) -> [f64; 3] {
    // Widen before doubling: 2n+1 overflows u32 for extreme orders.
    let power = (2 * u64::from(n) + 1).min(i32::MAX as u64) as i32;
    let x = u - u.powi(power) / power as f64 + u * v * v;
    let y = v - v.powi(power) / power as f64 + v * u * u;
    let z = u * u - v * v;
    [x, y, z]
}

/// Evaluate the surface over the whole parameter grid.
pub fn evaluate(u: &Grid, v: &Grid, order: u32) -> Result<(Grid, Grid, Grid), String> {
    grid::evaluate(u, v, |a, b| point(a, b, order))
}
