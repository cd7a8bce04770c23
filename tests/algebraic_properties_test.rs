use amp_probe::curves::{f, g};

const EPS: f64 = 1e-9;

fn sampled_pairs() -> Vec<(f64, f64)> {
    // Strictly ordered pairs inside (0, 1).
    let mut pairs = Vec::new();
    for i in 1..20 {
        for j in (i + 1)..20 {
            pairs.push((0.05 * i as f64, 0.05 * j as f64));
        }
    }
    pairs
}

#[test]
fn test_both_curves_are_strictly_monotone() {
    for (x, y) in sampled_pairs() {
        assert!(f(x) < f(y), "f not monotone at ({x}, {y})");
        assert!(g(x) < g(y), "g not monotone at ({x}, {y})");
    }
}

#[test]
fn test_homogeneity_fails_for_f() {
    // The contest finding: scaling the input by a does NOT scale the output by a.
    let (x, a) = (0.4, 1.5);
    let scaled_input = f(a * x);
    let scaled_output = a * f(x);
    assert!((scaled_input - 1.0 / 1.4).abs() < EPS);
    assert!((scaled_output - 0.9375).abs() < EPS);
    assert!((scaled_input - scaled_output).abs() > 0.1);
}

#[test]
fn test_homogeneity_fails_for_g() {
    let (x, a) = (0.4, 1.5);
    assert!((g(a * x) - 0.8).abs() < EPS);
    assert!((a * g(x) - 1.05).abs() < EPS);
    assert!((g(a * x) - a * g(x)).abs() > 0.1);
}

#[test]
fn test_additivity_fails_for_f() {
    let (x, y) = (0.2, 0.3);
    let joint = f(x + y);
    let split = f(x) + f(y);
    assert!((joint - 2.0 / 3.0).abs() < EPS);
    assert!((split - (1.0 / 1.8 + 1.0 / 1.7)).abs() < EPS);
    assert!((joint - split).abs() > 0.4);
}

#[test]
fn test_additivity_fails_for_g() {
    let (x, y) = (0.2, 0.3);
    assert!((g(x + y) - 0.75).abs() < EPS);
    assert!((g(x) + g(y) - 1.25).abs() < EPS);
    assert!((g(x + y) - (g(x) + g(y))).abs() > 0.4);
}
