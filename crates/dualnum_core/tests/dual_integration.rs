//! Integration tests for the dual number type and its consumers.
//!
//! Results are cross-checked against num-dual's `Dual64`, which implements the
//! same first-order algebra independently.

#![cfg(feature = "num-dual-mode")]

use approx::assert_relative_eq;
use dualnum_core::math::bessel::cyl_bessel_j;
use dualnum_core::math::elementary;
use dualnum_core::math::solvers::{NewtonRaphsonSolver, SolverConfig};
use dualnum_core::types::Dual;
use num_dual::{Dual64, DualNum};
use proptest::prelude::*;

fn ours(nd: Dual64) -> Dual<f64> {
    Dual::from_components(&nd)
}

fn assert_close(actual: Dual<f64>, expected: Dual<f64>) {
    assert_relative_eq!(actual.value(), expected.value(), epsilon = 1e-12, max_relative = 1e-12);
    assert_relative_eq!(
        actual.derivative(),
        expected.derivative(),
        epsilon = 1e-12,
        max_relative = 1e-12
    );
}

// ========================================
// Arithmetic against num-dual
// ========================================

#[test]
fn test_arithmetic_matches_num_dual() {
    let (x, y) = (Dual::new(2.0_f64, 1.0), Dual::new(3.0_f64, -0.5));
    let (nx, ny) = (Dual64::new(2.0, 1.0), Dual64::new(3.0, -0.5));

    assert_close(x + y, ours(nx + ny));
    assert_close(x - y, ours(nx - ny));
    assert_close(x * y, ours(nx * ny));
    assert_close(x / y, ours(nx / ny));
    assert_close(-x, ours(-nx));
    assert_close(x.inverted(), ours(nx.recip()));
}

#[test]
fn test_functions_match_num_dual() {
    let a = 0.7;
    let x = Dual::new(a, 1.3);
    let nx = Dual64::new(a, 1.3);

    assert_close(x.sqrt(), ours(nx.sqrt()));
    assert_close(x.cbrt(), ours(nx.cbrt()));
    assert_close(x.sin(), ours(nx.sin()));
    assert_close(x.cos(), ours(nx.cos()));
    assert_close(x.tan(), ours(nx.tan()));
    assert_close(x.asin(), ours(nx.asin()));
    assert_close(x.acos(), ours(nx.acos()));
    assert_close(x.atan(), ours(nx.atan()));
    assert_close(x.sinh(), ours(nx.sinh()));
    assert_close(x.cosh(), ours(nx.cosh()));
    assert_close(x.tanh(), ours(nx.tanh()));
    assert_close(x.asinh(), ours(nx.asinh()));
    assert_close(x.atanh(), ours(nx.atanh()));
    assert_close(x.exp(), ours(nx.exp()));
    assert_close(x.exp_m1(), ours(nx.exp_m1()));
    assert_close(x.ln(), ours(nx.ln()));
    assert_close(x.ln_1p(), ours(nx.ln_1p()));
    assert_close(x.log10(), ours(nx.log10()));
    assert_close(x.log2(), ours(nx.log2()));
    assert_close(x.powi(3), ours(nx.powi(3)));
    assert_close(x.powf(2.5), ours(nx.powf(2.5)));
}

// ========================================
// End-to-end scenarios
// ========================================

#[test]
fn test_polynomial_value_and_slope() {
    // 4x³ + 3x² + 2x + 1 at x = 1: value 10, slope 12 + 6 + 2 = 20
    let x = Dual::new(1.0_f64, 1.0);
    let y = 4.0 * x * x * x + 3.0 * x * x + 2.0 * x + 1.0;
    assert_eq!(y, Dual::new(10.0, 20.0));
}

#[test]
fn test_powf_cube() {
    assert_eq!(Dual::new(2.0_f64, 1.0).powf(3.0), Dual::new(8.0, 12.0));
}

#[test]
fn test_newton_square_root_of_ten() {
    let solver = NewtonRaphsonSolver::new(SolverConfig::default());
    let n = Dual::constant(10.0);

    let report = solver.solve_ad(|x: Dual<f64>| x * x - n, 10.0).unwrap();
    assert_relative_eq!(report.root, 3.16227766016838, epsilon = 1e-14);
    assert!(report.iterations < 10);
}

#[test]
fn test_newton_first_zero_of_j0() {
    let solver = NewtonRaphsonSolver::new(SolverConfig::default());

    let root = solver
        .find_root_ad(|x: Dual<f64>| cyl_bessel_j(0.0, x), 2.0)
        .unwrap();
    assert_relative_eq!(root, 2.404825557695773, epsilon = 1e-14);
}

#[test]
fn test_gradient_by_two_seeds() {
    // f(x, y) = x·sin(y); two forward passes give both partials
    let (a, b) = (1.5, 0.4);
    let f = |x: Dual<f64>, y: Dual<f64>| x * elementary::sin(y);

    let dfdx = f(Dual::variable(a), Dual::constant(b)).derivative();
    let dfdy = f(Dual::constant(a), Dual::variable(b)).derivative();
    assert_relative_eq!(dfdx, b.sin(), epsilon = 1e-15);
    assert_relative_eq!(dfdy, a * b.cos(), epsilon = 1e-15);
}

// ========================================
// Property tests
// ========================================

proptest! {
    #[test]
    fn prop_composite_matches_num_dual(a in 0.1f64..5.0, b in -3.0f64..3.0) {
        let x = Dual::new(a, b);
        let nx = Dual64::new(a, b);

        let ours_value = (x * x + 1.0).ln() * x.exp() / x.sqrt();
        let theirs = (nx * nx + 1.0).ln() * nx.exp() / nx.sqrt();

        prop_assert!((ours_value.value() - theirs.re).abs() <= 1e-12 * theirs.re.abs().max(1.0));
        prop_assert!((ours_value.derivative() - theirs.eps).abs() <= 1e-11 * theirs.eps.abs().max(1.0));
    }

    #[test]
    fn prop_chain_rule_scales_linearly(a in -2.0f64..2.0, b in -5.0f64..5.0) {
        let seeded = (Dual::variable(a).sin() * 3.0).exp();
        let scaled = (Dual::new(a, b).sin() * 3.0).exp();
        let expected = b * seeded.derivative();
        prop_assert!((scaled.derivative() - expected).abs() <= 1e-12 * expected.abs().max(1.0));
    }
}
