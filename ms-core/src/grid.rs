//! Row-major grids of real values, and the pointwise evaluation engine that
//! turns a pair of parameter grids into surface coordinates.

use std::ops::Range;

use crate::Size;

/// A row-major grid of `f64` values.
#[derive(Clone, Debug, PartialEq)]
pub struct Grid {
    size: Size,
    data: Vec<f64>,
}

impl Grid {
    /// Build a grid by evaluating `f(row, col)` at every index.
    pub fn from_fn(size: Size, mut f: impl FnMut(usize, usize) -> f64) -> Self {
        let mut data = Vec::with_capacity(size.width * size.height);
        for row in 0..size.height {
            for col in 0..size.width {
                data.push(f(row, col));
            }
        }
        Grid { size, data }
    }

    pub fn size(&self) -> Size {
        self.size
    }

    pub fn get(&self, row: usize, col: usize) -> f64 {
        self.data[row * self.size.width + col]
    }

    /// Iterate over all values in row-major order.
    pub fn values(&self) -> impl Iterator<Item = f64> + '_ {
        self.data.iter().copied()
    }

    pub fn rows(&self) -> impl Iterator<Item = &[f64]> {
        self.data.chunks(self.size.width)
    }

    /// Copy out a contiguous range of rows as a new grid.
    pub fn row_range(&self, rows: Range<usize>) -> Grid {
        let width = self.size.width;
        let data = self.data[rows.start * width..rows.end * width].to_vec();
        Grid {
            size: Size {
                width,
                height: rows.end - rows.start,
            },
            data,
        }
    }

    /// Stack grids vertically, in the order given.
    ///
    /// All parts must share a width; this is how per-chunk results are
    /// reassembled into the full-height grid.
    pub fn concat_rows(parts: Vec<Grid>) -> Result<Grid, String> {
        let width = match parts.first() {
            Some(g) => g.size.width,
            None => return Err("cannot concatenate zero grids".to_string()),
        };
        let mut height = 0;
        let mut data = Vec::new();
        for part in parts {
            if part.size.width != width {
                return Err(format!(
                    "grid width mismatch in concatenation: {} != {}",
                    part.size.width, width
                ));
            }
            height += part.size.height;
            data.extend_from_slice(&part.data);
        }
        Ok(Grid {
            size: Size { width, height },
            data,
        })
    }

    /// Convert to a nested sequence-of-rows, for serialization.
    pub fn to_rows(&self) -> Vec<Vec<f64>> {
        self.rows().map(|r| r.to_vec()).collect()
    }
}

/// `n` evenly-spaced samples over `[start, end]`, endpoints included.
pub fn linspace(start: f64, end: f64, n: usize) -> Vec<f64> {
    if n < 2 {
        return vec![start];
    }
    let step = (end - start) / (n - 1) as f64;
    (0..n).map(|i| start + step * i as f64).collect()
}

/// Outer product of two 1D ranges.
///
/// Returns `(a_grid, b_grid)` of shape `a.len() x b.len()`: the row index
/// follows `a`, the column index follows `b`.
pub fn mesh_grid(a: &[f64], b: &[f64]) -> (Grid, Grid) {
    let size = Size {
        width: b.len(),
        height: a.len(),
    };
    let a_grid = Grid::from_fn(size, |row, _| a[row]);
    let b_grid = Grid::from_fn(size, |_, col| b[col]);
    (a_grid, b_grid)
}

/// Apply a point mapping over a pair of parameter grids, producing the
/// (X, Y, Z) coordinate grids.
///
/// Both parameter grids must share a shape. A non-finite coordinate is a
/// domain violation on the caller's side (a pole included in the parameter
/// range) and is reported as an error rather than written into the output.
pub fn evaluate(
    param1: &Grid,
    param2: &Grid,
    point: impl Fn(f64, f64) -> [f64; 3],
) -> Result<(Grid, Grid, Grid), String> {
    let size = param1.size();
    if size != param2.size() {
        return Err(format!(
            "parameter grid shape mismatch: {:?} != {:?}",
            size,
            param2.size()
        ));
    }

    let n = size.width * size.height;
    let mut x = Vec::with_capacity(n);
    let mut y = Vec::with_capacity(n);
    let mut z = Vec::with_capacity(n);
    for (a, b) in param1.values().zip(param2.values()) {
        let [px, py, pz] = point(a, b);
        if !(px.is_finite() && py.is_finite() && pz.is_finite()) {
            return Err(format!(
                "non-finite coordinate at parameters ({}, {})",
                a, b
            ));
        }
        x.push(px);
        y.push(py);
        z.push(pz);
    }

    let wrap = |data| Grid { size, data };
    Ok((wrap(x), wrap(y), wrap(z)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_linspace_endpoints() {
        let v = linspace(0.2, 0.8, 4);
        assert_eq!(v.len(), 4);
        assert_eq!(v[0], 0.2);
        assert_eq!(v[3], 0.8);
        assert!((v[1] - 0.4).abs() < 1e-12);
    }

    #[test]
    fn test_mesh_grid_layout() {
        let (a, b) = mesh_grid(&[1.0, 2.0, 3.0], &[10.0, 20.0]);
        let size = Size {
            width: 2,
            height: 3,
        };
        assert_eq!(a.size(), size);
        assert_eq!(b.size(), size);
        // Row index follows the first range, column index the second.
        assert_eq!(a.get(0, 0), 1.0);
        assert_eq!(a.get(2, 1), 3.0);
        assert_eq!(b.get(0, 0), 10.0);
        assert_eq!(b.get(2, 1), 20.0);
    }

    #[test]
    fn test_evaluate_shape_mismatch() {
        let (a, _) = mesh_grid(&[1.0, 2.0], &[1.0, 2.0]);
        let (b, _) = mesh_grid(&[1.0, 2.0, 3.0], &[1.0, 2.0]);
        assert!(evaluate(&a, &b, |u, v| [u, v, 0.0]).is_err());
    }

    #[test]
    fn test_evaluate_rejects_non_finite() {
        let (a, b) = mesh_grid(&[0.0, 1.0], &[0.0, 1.0]);
        let result = evaluate(&a, &b, |u, v| [u, v, 1.0 / (u + v)]);
        let err = result.expect_err("pole at (0, 0) should be reported");
        assert!(err.contains("non-finite"), "unexpected message: {}", err);
    }

    #[test]
    fn test_row_range_and_concat() {
        let (a, _) = mesh_grid(&[1.0, 2.0, 3.0, 4.0, 5.0], &[0.0, 1.0, 2.0]);
        let top = a.row_range(0..2);
        let bottom = a.row_range(2..5);
        assert_eq!(top.size().height, 2);
        assert_eq!(bottom.size().height, 3);
        let whole = Grid::concat_rows(vec![top, bottom]).unwrap();
        assert_eq!(whole, a);
    }

    #[test]
    fn test_to_rows() {
        let (a, _) = mesh_grid(&[1.0, 2.0], &[0.0, 0.0, 0.0]);
        assert_eq!(a.to_rows(), vec![vec![1.0; 3], vec![2.0; 3]]);
    }
}
