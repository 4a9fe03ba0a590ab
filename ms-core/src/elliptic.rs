//! Weierstrass elliptic functions on a real rectangular period lattice.
//!
//! The half-periods are derived from the invariants (g2, g3) once, up front;
//! the per-point functions go through Jacobi theta series (DLMF 23.6) with
//! the nome `q = exp(i*pi*omega2/omega1)`. For a rectangular lattice the nome
//! is real and the series converge in a handful of terms.

use num::Complex;
use std::f64::consts::PI;

type C = Complex<f64>;

/// Terms kept in each theta series. The nome satisfies |q| <= exp(-pi) for
/// every rectangular lattice, so the tail beyond this is far below f64
/// precision for arguments within a period cell.
const THETA_TERMS: usize = 12;

/// Weierstrass p, p', and zeta at complex arguments, for a fixed lattice.
///
/// A value of this type is plain immutable data: construct it once per
/// evaluation and share it read-only across worker threads.
#[derive(Clone, Debug)]
pub struct Elliptic {
    omega1: f64,
    omega2_im: f64,
    q: f64,
    // Theta constants at v = 0; real because the nome is real.
    theta2_0: f64,
    theta3_0: f64,
    theta4_0: f64,
    theta1_d0: f64,
    // zeta(omega1), from the theta-constant identity.
    eta1: f64,
}

impl Elliptic {
    /// Derive the lattice from the invariants (g2, g3).
    ///
    /// Requires `g2^3 - 27*g3^2 > 0` (three distinct real lattice roots, a
    /// rectangular lattice); anything else is reported as an error.
    pub fn from_invariants(g2: f64, g3: f64) -> Result<Self, String> {
        let discriminant = g2.powi(3) - 27.0 * g3 * g3;
        if !(discriminant > 0.0) {
            return Err(format!(
                "invariants (g2={}, g3={}) do not define a rectangular lattice",
                g2, g3
            ));
        }
        let (e1, e2, e3) = lattice_roots(g2, g3);

        // Complete elliptic integrals via the arithmetic-geometric mean.
        let omega1 = PI / (2.0 * agm((e1 - e3).sqrt(), (e1 - e2).sqrt()));
        let omega2_im = PI / (2.0 * agm((e1 - e3).sqrt(), (e2 - e3).sqrt()));
        let q = (-PI * omega2_im / omega1).exp();

        // Theta constants at v = 0, from the defining series.
        let (mut t2, mut t3, mut t4) = (0.0, 0.0, 0.0);
        let (mut t1d, mut t1ddd) = (0.0, 0.0);
        let mut sign = 1.0;
        for n in 0..THETA_TERMS {
            let m = (2 * n + 1) as f64;
            let half_sq = q.powf((n as f64 + 0.5).powi(2));
            t2 += half_sq;
            t1d += sign * m * half_sq;
            t1ddd -= sign * m.powi(3) * half_sq;
            if n > 0 {
                let whole_sq = q.powf((n * n) as f64);
                t3 += whole_sq;
                t4 += sign * whole_sq;
            }
            sign = -sign;
        }
        let theta2_0 = 2.0 * t2;
        let theta3_0 = 1.0 + 2.0 * t3;
        let theta4_0 = 1.0 + 2.0 * t4;
        let theta1_d0 = 2.0 * t1d;
        let theta1_ddd0 = 2.0 * t1ddd;
        let eta1 = -(PI * PI / (12.0 * omega1)) * theta1_ddd0 / theta1_d0;

        Ok(Elliptic {
            omega1,
            omega2_im,
            q,
            theta2_0,
            theta3_0,
            theta4_0,
            theta1_d0,
            eta1,
        })
    }

    /// The half-periods (omega1, omega2) of the lattice.
    pub fn half_periods(&self) -> (C, C) {
        (
            C::new(self.omega1, 0.0),
            C::new(0.0, self.omega2_im),
        )
    }

    /// The Weierstrass p-function. Undefined at lattice points (z = 0).
    pub fn p(&self, z: C) -> C {
        let v = self.theta_arg(z);
        let c = PI / (2.0 * self.omega1);
        let ratio = self.theta2_0 * self.theta3_0 * self.theta4(v) / self.theta1(v);
        (ratio * ratio - (self.theta2_0.powi(4) + self.theta3_0.powi(4)) / 3.0) * (c * c)
    }

    /// Derivative of the p-function.
    pub fn p_derivative(&self, z: C) -> C {
        let v = self.theta_arg(z);
        let c = PI / (2.0 * self.omega1);
        let numerator =
            self.theta2(v) * self.theta3(v) * self.theta4(v) * self.theta1_d0.powi(3);
        let denominator =
            self.theta1(v).powi(3) * (self.theta2_0 * self.theta3_0 * self.theta4_0);
        numerator / denominator * (-2.0 * c * c * c)
    }

    /// The Weierstrass zeta function. Undefined at lattice points (z = 0).
    pub fn zeta(&self, z: C) -> C {
        let v = self.theta_arg(z);
        z * (self.eta1 / self.omega1) + self.theta1_d(v) / self.theta1(v) * (PI / (2.0 * self.omega1))
    }

    /// The theta-series argument v = pi*z / (2*omega1).
    fn theta_arg(&self, z: C) -> C {
        z * (PI / (2.0 * self.omega1))
    }

    fn theta1(&self, v: C) -> C {
        let mut sum = C::new(0.0, 0.0);
        let mut sign = 1.0;
        for n in 0..THETA_TERMS {
            let m = (2 * n + 1) as f64;
            sum += (v * m).sin() * (sign * self.q.powf((n as f64 + 0.5).powi(2)));
            sign = -sign;
        }
        sum * 2.0
    }

    fn theta1_d(&self, v: C) -> C {
        let mut sum = C::new(0.0, 0.0);
        let mut sign = 1.0;
        for n in 0..THETA_TERMS {
            let m = (2 * n + 1) as f64;
            sum += (v * m).cos() * (sign * m * self.q.powf((n as f64 + 0.5).powi(2)));
            sign = -sign;
        }
        sum * 2.0
    }

    fn theta2(&self, v: C) -> C {
        let mut sum = C::new(0.0, 0.0);
        for n in 0..THETA_TERMS {
            let m = (2 * n + 1) as f64;
            sum += (v * m).cos() * self.q.powf((n as f64 + 0.5).powi(2));
        }
        sum * 2.0
    }

    fn theta3(&self, v: C) -> C {
        let mut sum = C::new(1.0, 0.0);
        for n in 1..THETA_TERMS {
            sum += (v * (2 * n) as f64).cos() * (2.0 * self.q.powf((n * n) as f64));
        }
        sum
    }

    fn theta4(&self, v: C) -> C {
        let mut sum = C::new(1.0, 0.0);
        let mut sign = -1.0;
        for n in 1..THETA_TERMS {
            sum += (v * (2 * n) as f64).cos() * (sign * 2.0 * self.q.powf((n * n) as f64));
            sign = -sign;
        }
        sum
    }
}

/// The three real roots of `4t^3 - g2*t - g3 = 0`, in descending order.
///
/// Uses the trigonometric solution of the depressed cubic; valid whenever the
/// discriminant is positive, which the constructor checks.
fn lattice_roots(g2: f64, g3: f64) -> (f64, f64, f64) {
    let p = -g2 / 4.0;
    let q = -g3 / 4.0;
    let m = 2.0 * (-p / 3.0).sqrt();
    let phi = (3.0 * q / (p * m)).clamp(-1.0, 1.0).acos();
    let mut roots = [
        m * (phi / 3.0).cos(),
        m * ((phi - 2.0 * PI) / 3.0).cos(),
        m * ((phi - 4.0 * PI) / 3.0).cos(),
    ];
    roots.sort_by(|a, b| b.total_cmp(a));
    (roots[0], roots[1], roots[2])
}

/// Arithmetic-geometric mean of two positive reals.
fn agm(mut a: f64, mut b: f64) -> f64 {
    for _ in 0..64 {
        if (a - b).abs() <= f64::EPSILON * a {
            break;
        }
        let next = (a + b) / 2.0;
        b = (a * b).sqrt();
        a = next;
    }
    a
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chen_gackstatter;

    fn lemniscatic() -> Elliptic {
        let (g2, g3) = chen_gackstatter::invariants();
        Elliptic::from_invariants(g2, g3).unwrap()
    }

    #[test]
    fn test_half_periods_for_chen_gackstatter_invariants() {
        // For g2 = (B(1/4,1/4)/2)^4, g3 = 0, the lattice is the unit square:
        // half-periods exactly (1/2, i/2).
        let (omega1, omega2) = lemniscatic().half_periods();
        assert!((omega1.re - 0.5).abs() < 1e-12, "omega1 = {}", omega1);
        assert!(omega1.im.abs() < 1e-12);
        assert!((omega2.im - 0.5).abs() < 1e-12, "omega2 = {}", omega2);
        assert!(omega2.re.abs() < 1e-12);
    }

    #[test]
    fn test_differential_equation() {
        // p'(z)^2 = 4 p(z)^3 - g2 p(z) - g3 everywhere off the lattice.
        let (g2, g3) = chen_gackstatter::invariants();
        let ell = lemniscatic();
        for &(re, im) in &[(0.31, 0.22), (0.1, -0.05), (-0.4, 0.33), (0.2, 0.0)] {
            let z = Complex::new(re, im);
            let p = ell.p(z);
            let dp = ell.p_derivative(z);
            let residual = dp * dp - (p * p * p * 4.0 - p * g2 - g3);
            let scale = dp.norm().max(1.0);
            assert!(
                residual.norm() / (scale * scale) < 1e-10,
                "residual {} at z = {}",
                residual,
                z
            );
        }
    }

    #[test]
    fn test_p_at_half_period_is_largest_root() {
        let (g2, _) = chen_gackstatter::invariants();
        let ell = lemniscatic();
        let (omega1, _) = ell.half_periods();
        let e1 = g2.sqrt() / 2.0;
        let p = ell.p(omega1);
        assert!((p.re - e1).abs() < 1e-9 * e1, "p(omega1) = {}", p);
        assert!(p.im.abs() < 1e-9);
    }

    #[test]
    fn test_zeta_derivative_is_minus_p() {
        let ell = lemniscatic();
        let z = Complex::new(0.27, 0.18);
        let h = 1e-6;
        let numeric = (ell.zeta(z + Complex::new(h, 0.0)) - ell.zeta(z - Complex::new(h, 0.0)))
            / (2.0 * h);
        let expected = -ell.p(z);
        assert!(
            (numeric - expected).norm() < 1e-5,
            "zeta' = {}, -p = {}",
            numeric,
            expected
        );
    }

    #[test]
    fn test_p_pole_expansion_near_zero() {
        // p(z) ~ 1/z^2 near the origin.
        let ell = lemniscatic();
        let z = Complex::new(1e-4, 0.0);
        let scaled = ell.p(z) * z * z;
        assert!((scaled.re - 1.0).abs() < 1e-6);
        assert!(scaled.im.abs() < 1e-6);
    }

    #[test]
    fn test_rejects_non_rectangular_lattice() {
        assert!(Elliptic::from_invariants(0.0, 1.0).is_err());
        assert!(Elliptic::from_invariants(3.0, 1.0).is_err());
    }
}
