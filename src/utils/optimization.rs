//! Scalar optimization utilities for parameter estimation.

use crate::error::{AnalysisError, Result};

const GOLDEN: f64 = 1.618_034;
const GOLDEN_SECTION: f64 = 0.381_966_0;
const TINY: f64 = 1e-21;
const MIN_TOLERANCE: f64 = 1e-11;

/// Result of Brent's scalar minimization.
#[derive(Debug, Clone)]
pub struct BrentResult {
    /// The optimal point found.
    pub optimal_point: f64,
    /// The objective function value at the optimal point.
    pub optimal_value: f64,
    /// Number of Brent iterations performed (bracketing excluded).
    pub iterations: usize,
    /// Whether the tolerance was reached before `max_iter`.
    pub converged: bool,
}

/// Configuration for Brent's method.
#[derive(Debug, Clone)]
pub struct BrentConfig {
    /// Maximum number of Brent iterations.
    pub max_iter: usize,
    /// Relative convergence tolerance on the abscissa.
    pub tolerance: f64,
    /// Maximum number of bracket expansion steps.
    pub bracket_max_iter: usize,
    /// Largest parabolic extrapolation step, as a multiple of the last step.
    pub grow_limit: f64,
}

impl Default for BrentConfig {
    fn default() -> Self {
        Self {
            max_iter: 500,
            tolerance: 1.48e-8,
            bracket_max_iter: 1000,
            grow_limit: 110.0,
        }
    }
}

/// Three points `a`, `b`, `c` with `f(b)` below both `f(a)` and `f(c)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bracket {
    pub a: f64,
    pub b: f64,
    pub c: f64,
    pub fa: f64,
    pub fb: f64,
    pub fc: f64,
}

/// Search downhill from `xa`, `xb` for a bracket around a local minimum.
///
/// Steps grow by the golden ratio, with parabolic extrapolation whenever it
/// lands in a useful place. Fails if the objective turns non-finite or the
/// search does not close within `config.bracket_max_iter` steps.
pub fn bracket_minimum<F>(objective: &F, xa: f64, xb: f64, config: &BrentConfig) -> Result<Bracket>
where
    F: Fn(f64) -> f64,
{
    let (mut xa, mut xb) = (xa, xb);
    let (mut fa, mut fb) = (objective(xa), objective(xb));
    if fa < fb {
        std::mem::swap(&mut xa, &mut xb);
        std::mem::swap(&mut fa, &mut fb);
    }
    let mut xc = xb + GOLDEN * (xb - xa);
    let mut fc = objective(xc);

    let mut iterations = 0;
    while fc < fb {
        iterations += 1;
        if iterations > config.bracket_max_iter {
            return Err(AnalysisError::ComputationError(format!(
                "no bracket found after {} expansion steps",
                config.bracket_max_iter
            )));
        }

        let tmp1 = (xb - xa) * (fb - fc);
        let tmp2 = (xb - xc) * (fb - fa);
        let val = tmp2 - tmp1;
        let denom = if val.abs() < TINY { 2.0 * TINY } else { 2.0 * val };
        let mut w = xb - ((xb - xc) * tmp2 - (xb - xa) * tmp1) / denom;
        let wlim = xb + config.grow_limit * (xc - xb);
        let mut fw;

        if (w - xc) * (xb - w) > 0.0 {
            // Parabolic minimum between b and c
            fw = objective(w);
            if fw < fc {
                xa = xb;
                xb = w;
                fa = fb;
                fb = fw;
                break;
            } else if fw > fb {
                xc = w;
                fc = fw;
                break;
            }
            w = xc + GOLDEN * (xc - xb);
            fw = objective(w);
        } else if (w - wlim) * (wlim - xc) >= 0.0 {
            w = wlim;
            fw = objective(w);
        } else if (w - wlim) * (xc - w) > 0.0 {
            fw = objective(w);
            if fw < fc {
                xb = xc;
                xc = w;
                w = xc + GOLDEN * (xc - xb);
                fb = fc;
                fc = fw;
                fw = objective(w);
            }
        } else {
            w = xc + GOLDEN * (xc - xb);
            fw = objective(w);
        }

        xa = xb;
        xb = xc;
        xc = w;
        fa = fb;
        fb = fc;
        fc = fw;
    }

    if !fb.is_finite() {
        return Err(AnalysisError::ComputationError(
            "objective is not finite at the bracketed minimum".to_string(),
        ));
    }

    Ok(Bracket {
        a: xa,
        b: xb,
        c: xc,
        fa,
        fb,
        fc,
    })
}

/// Minimize a scalar function with Brent's method.
///
/// A bracket is first searched for starting from `xa`, `xb`; the minimum
/// is then refined by combined golden-section and parabolic steps.
///
/// # Example
/// ```
/// use skew_boxcox::utils::optimization::{brent_minimize, BrentConfig};
///
/// let result = brent_minimize(|x| (x - 1.5).powi(2), -2.0, 2.0, &BrentConfig::default()).unwrap();
///
/// assert!(result.converged);
/// assert!((result.optimal_point - 1.5).abs() < 1e-6);
/// ```
pub fn brent_minimize<F>(objective: F, xa: f64, xb: f64, config: &BrentConfig) -> Result<BrentResult>
where
    F: Fn(f64) -> f64,
{
    let bracket = bracket_minimum(&objective, xa, xb, config)?;

    let (mut a, mut b) = if bracket.a < bracket.c {
        (bracket.a, bracket.c)
    } else {
        (bracket.c, bracket.a)
    };
    let mut x = bracket.b;
    let mut w = x;
    let mut v = x;
    let mut fx = bracket.fb;
    let mut fw = fx;
    let mut fv = fx;
    let mut delta_x: f64 = 0.0;
    let mut rat: f64 = 0.0;

    let mut iterations = 0;
    let mut converged = false;

    while iterations < config.max_iter {
        let tol1 = config.tolerance * x.abs() + MIN_TOLERANCE;
        let tol2 = 2.0 * tol1;
        let xmid = 0.5 * (a + b);

        // Check convergence
        if (x - xmid).abs() < tol2 - 0.5 * (b - a) {
            converged = true;
            break;
        }

        if delta_x.abs() <= tol1 {
            delta_x = if x >= xmid { a - x } else { b - x };
            rat = GOLDEN_SECTION * delta_x;
        } else {
            // Try a parabolic step through x, w, v
            let tmp1 = (x - w) * (fx - fv);
            let mut tmp2 = (x - v) * (fx - fw);
            let mut p = (x - v) * tmp2 - (x - w) * tmp1;
            tmp2 = 2.0 * (tmp2 - tmp1);
            if tmp2 > 0.0 {
                p = -p;
            }
            tmp2 = tmp2.abs();
            let previous_step = delta_x;
            delta_x = rat;

            if p > tmp2 * (a - x) && p < tmp2 * (b - x) && p.abs() < (0.5 * tmp2 * previous_step).abs()
            {
                rat = p / tmp2;
                let u = x + rat;
                if (u - a) < tol2 || (b - u) < tol2 {
                    rat = if xmid - x >= 0.0 { tol1 } else { -tol1 };
                }
            } else {
                delta_x = if x >= xmid { a - x } else { b - x };
                rat = GOLDEN_SECTION * delta_x;
            }
        }

        let u = if rat.abs() < tol1 {
            if rat >= 0.0 {
                x + tol1
            } else {
                x - tol1
            }
        } else {
            x + rat
        };
        let fu = objective(u);

        if fu > fx {
            if u < x {
                a = u;
            } else {
                b = u;
            }
            if fu <= fw || w == x {
                v = w;
                w = u;
                fv = fw;
                fw = fu;
            } else if fu <= fv || v == x || v == w {
                v = u;
                fv = fu;
            }
        } else {
            if u >= x {
                a = x;
            } else {
                b = x;
            }
            v = w;
            w = x;
            x = u;
            fv = fw;
            fw = fx;
            fx = fu;
        }

        iterations += 1;
    }

    Ok(BrentResult {
        optimal_point: x,
        optimal_value: fx,
        iterations,
        converged,
    })
}
