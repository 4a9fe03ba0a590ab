//! The Chen-Gackstatter surface: genus 1, three flat ends, built from the
//! Weierstrass p, p', and zeta functions on the lemniscatic lattice.

use num::Complex;
use rayon::prelude::*;
use std::f64::consts::PI;
use std::ops::Range;

use crate::elliptic::Elliptic;
use crate::grid::{self, Grid};

/// B(1/4, 1/4) = Gamma(1/4)^2 / sqrt(pi).
const BETA_QUARTER_QUARTER: f64 = 7.416298709205487;

/// The elliptic invariants of the Chen-Gackstatter lattice:
/// g2 = (B(1/4,1/4)/2)^4, g3 = 0.
pub fn invariants() -> (f64, f64) {
    ((BETA_QUARTER_QUARTER / 2.0).powi(4), 0.0)
}

/// Evaluator for the Chen-Gackstatter parametrization.
///
/// Holds the invariants and the lattice derived from them; both are fixed at
/// construction, so one evaluator can be shared read-only across workers.
#[derive(Clone, Debug)]
pub struct ChenGackstatter {
    g2: f64,
    elliptic: Elliptic,
}

impl ChenGackstatter {
    pub fn new() -> Result<Self, String> {
        let (g2, g3) = invariants();
        let elliptic = Elliptic::from_invariants(g2, g3)?;
        Ok(ChenGackstatter { g2, elliptic })
    }

    /// Map one polar parameter pair to surface coordinates.
    ///
    /// `r = 0` is a pole of the elliptic functions; parameter ranges must
    /// start strictly above zero.
    pub fn point(&self, r: f64, theta: f64) -> [f64; 3] {
        let z = Complex::from_polar(r, theta);
        let w_p = self.elliptic.p(z);
        let w_p_prime = self.elliptic.p_derivative(z);
        let w_zeta = self.elliptic.zeta(z);

        let pz = z * PI;
        let scaled_prime = w_p_prime * (PI / self.g2);
        let x = (pz - w_zeta - scaled_prime).re;
        let y = (pz + w_zeta - scaled_prime).im;
        // g2 > 0, so the scale factor is a real square root.
        let z_coord = (6.0 * PI / self.g2).sqrt() * w_p.re;
        [x, y, z_coord]
    }

    /// Evaluate the surface over the whole parameter grid, sequentially.
    pub fn evaluate(&self, r: &Grid, theta: &Grid) -> Result<(Grid, Grid, Grid), String> {
        grid::evaluate(r, theta, |a, b| self.point(a, b))
    }

    /// Evaluate the surface with the rows split across `workers` threads.
    ///
    /// Rows are partitioned into contiguous chunks, one per worker, with the
    /// last chunk absorbing any remainder; each chunk owns its row-slice of
    /// the parameter grids and shares the evaluator read-only. Results are
    /// reassembled in chunk order, so the output is identical to the
    /// sequential path. If any chunk fails, the whole evaluation fails.
    ///
    /// The thread pool is built per call; on small grids the dispatch
    /// overhead can exceed the sequential cost.
    pub fn evaluate_parallel(
        &self,
        r: &Grid,
        theta: &Grid,
        workers: usize,
    ) -> Result<(Grid, Grid, Grid), String> {
        let size = r.size();
        if size != theta.size() {
            return Err(format!(
                "parameter grid shape mismatch: {:?} != {:?}",
                size,
                theta.size()
            ));
        }
        let rows = size.height;
        let workers = workers.clamp(1, rows.max(1));

        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(workers)
            .build()
            .map_err(|err| format!("error creating thread pool: {}", err))?;

        let chunk_rows = rows / workers;
        let ranges: Vec<Range<usize>> = (0..workers)
            .map(|i| {
                let start = i * chunk_rows;
                // The last chunk absorbs the remainder rows.
                let end = if i + 1 == workers {
                    rows
                } else {
                    start + chunk_rows
                };
                start..end
            })
            .collect();

        tracing::debug!(rows, workers, chunk_rows, "dispatching chunked evaluation");
        let parts: Vec<(Grid, Grid, Grid)> = pool.install(|| {
            ranges
                .into_par_iter()
                .map(|range| {
                    let r_chunk = r.row_range(range.clone());
                    let theta_chunk = theta.row_range(range);
                    self.evaluate(&r_chunk, &theta_chunk)
                })
                .collect::<Result<Vec<_>, String>>()
        })?;

        let (mut xs, mut ys, mut zs) = (Vec::new(), Vec::new(), Vec::new());
        for (x, y, z) in parts {
            xs.push(x);
            ys.push(y);
            zs.push(z);
        }
        Ok((
            Grid::concat_rows(xs)?,
            Grid::concat_rows(ys)?,
            Grid::concat_rows(zs)?,
        ))
    }
}
