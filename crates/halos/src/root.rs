//! Bracketing root finder.
//!
//! Brent's method: inverse quadratic interpolation and secant steps where they
//! make progress, bisection where they do not. Given a bracket with a sign
//! change it always converges, and for smooth functions it converges
//! superlinearly.

use thiserror::Error;
use tracing::trace;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum RootError {
    #[error("f({lower}) = {f_lower} and f({upper}) = {f_upper} have the same sign")]
    NoSignChange {
        lower: f64,
        upper: f64,
        f_lower: f64,
        f_upper: f64,
    },
    #[error("no convergence after {0} iterations")]
    MaxIterations(usize),
    #[error("function is not finite at x = {0}")]
    NonFinite(f64),
    #[error("invalid bracket [{0}, {1}]")]
    InvalidBracket(f64, f64),
}

/// A converged root.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Root {
    pub x: f64,
    /// f(x) at the returned root
    pub residual: f64,
    pub iterations: usize,
}

/// Brent's method with absolute and relative x-tolerances.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Brent {
    pub xtol: f64,
    pub rtol: f64,
    pub max_iterations: usize,
}

impl Default for Brent {
    fn default() -> Self {
        Self {
            xtol: 2e-12,
            rtol: 4.0 * f64::EPSILON,
            max_iterations: 100,
        }
    }
}

impl Brent {
    /// Finds x in [lower, upper] with f(x) = 0.
    ///
    /// `f(lower)` and `f(upper)` must differ in sign (or one must be zero).
    pub fn solve<F>(&self, mut f: F, lower: f64, upper: f64) -> Result<Root, RootError>
    where
        F: FnMut(f64) -> f64,
    {
        if !lower.is_finite() || !upper.is_finite() || lower >= upper {
            return Err(RootError::InvalidBracket(lower, upper));
        }

        let mut x_prev = lower;
        let mut x_cur = upper;
        let mut f_prev = eval(&mut f, x_prev)?;
        let mut f_cur = eval(&mut f, x_cur)?;

        if f_prev == 0.0 {
            return Ok(Root {
                x: x_prev,
                residual: f_prev,
                iterations: 0,
            });
        }
        if f_cur == 0.0 {
            return Ok(Root {
                x: x_cur,
                residual: f_cur,
                iterations: 0,
            });
        }
        if f_prev.signum() == f_cur.signum() {
            return Err(RootError::NoSignChange {
                lower,
                upper,
                f_lower: f_prev,
                f_upper: f_cur,
            });
        }

        // x_blk is the contrapoint: f(x_blk) and f(x_cur) always differ in sign
        let mut x_blk = 0.0;
        let mut f_blk = 0.0;
        let mut s_prev = 0.0;
        let mut s_cur = 0.0;

        for iteration in 1..=self.max_iterations {
            if f_prev != 0.0 && f_cur != 0.0 && f_prev.signum() != f_cur.signum() {
                x_blk = x_prev;
                f_blk = f_prev;
                s_prev = x_cur - x_prev;
                s_cur = s_prev;
            }
            if f_blk.abs() < f_cur.abs() {
                x_prev = x_cur;
                x_cur = x_blk;
                x_blk = x_prev;

                f_prev = f_cur;
                f_cur = f_blk;
                f_blk = f_prev;
            }

            let delta = (self.xtol + self.rtol * x_cur.abs()) / 2.0;
            let s_bisect = (x_blk - x_cur) / 2.0;
            if f_cur == 0.0 || s_bisect.abs() < delta {
                return Ok(Root {
                    x: x_cur,
                    residual: f_cur,
                    iterations: iteration,
                });
            }

            if s_prev.abs() > delta && f_cur.abs() < f_prev.abs() {
                let s_try = if x_prev == x_blk {
                    // secant
                    -f_cur * (x_cur - x_prev) / (f_cur - f_prev)
                } else {
                    // inverse quadratic interpolation
                    let d_prev = (f_prev - f_cur) / (x_prev - x_cur);
                    let d_blk = (f_blk - f_cur) / (x_blk - x_cur);
                    -f_cur * (f_blk * d_blk - f_prev * d_prev) / (d_blk * d_prev * (f_blk - f_prev))
                };

                if 2.0 * s_try.abs() < s_prev.abs().min(3.0 * s_bisect.abs() - delta) {
                    s_prev = s_cur;
                    s_cur = s_try;
                } else {
                    s_prev = s_bisect;
                    s_cur = s_bisect;
                }
            } else {
                s_prev = s_bisect;
                s_cur = s_bisect;
            }

            x_prev = x_cur;
            f_prev = f_cur;
            if s_cur.abs() > delta {
                x_cur += s_cur;
            } else {
                x_cur += if s_bisect > 0.0 { delta } else { -delta };
            }

            f_cur = eval(&mut f, x_cur)?;
            trace!(iteration, x = x_cur, f = f_cur, "brent step");
        }

        Err(RootError::MaxIterations(self.max_iterations))
    }
}

fn eval<F: FnMut(f64) -> f64>(f: &mut F, x: f64) -> Result<f64, RootError> {
    let value = f(x);
    if !value.is_finite() {
        return Err(RootError::NonFinite(x));
    }
    Ok(value)
}
