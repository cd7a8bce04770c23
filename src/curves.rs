//! Concrete forms of the amplification curves under investigation.
//!
//! `f0` is the formula as deployed: liquidity `l`, amplification ratio `r`,
//! weight `w`, and divisor `d`. The contest finding reduces it (at `d == 2`)
//! to the single-variable candidate `f`, which is compared against the
//! straight-line reference `g` a naive reading of the pool math would expect.

/// Base calculation: `(l*w) / (d - r*(d - 1))`.
pub fn f0(l: f64, r: f64, w: f64, d: f64) -> f64 {
    (l * w) / (d - r * (d - 1.0))
}

/// Simplified calculation: `1 / (2 - x)`. Singular at `x == 2`; callers keep
/// inputs inside `(0, 1)` (or the plot domain), so the pole is not guarded.
pub fn f(x: f64) -> f64 {
    1.0 / (2.0 - x)
}

/// Reference line: `1/2 + x/2`.
pub fn g(x: f64) -> f64 {
    0.5 + x / 2.0
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-12;

    #[test]
    fn test_f0_at_d2_matches_simplified_form() {
        // f0(1, x, 1, 2) = 1/(2 - x) = f(x)
        for i in 0..20 {
            let x = 0.04 * (i as f64) + 0.01;
            assert!((f0(1.0, x, 1.0, 2.0) - f(x)).abs() < EPS);
        }
    }

    #[test]
    fn test_f0_scales_linearly_in_l_and_w() {
        let base = f0(1.0, 0.5, 1.0, 2.0);
        assert!((f0(3.0, 0.5, 1.0, 2.0) - 3.0 * base).abs() < EPS);
        assert!((f0(1.0, 0.5, 7.0, 2.0) - 7.0 * base).abs() < EPS);
    }

    #[test]
    fn test_curves_agree_at_domain_endpoints() {
        // f and g intersect at x = 0 and x = 1.
        assert!((f(0.0) - g(0.0)).abs() < EPS);
        assert!((f(1.0) - g(1.0)).abs() < EPS);
    }
}
