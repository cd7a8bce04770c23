//! Constraint model builders.
//!
//! A candidate simplification is admissible as "just a rescaled pool share"
//! iff all three hold simultaneously over the bounded domain:
//!     Monotonicity:  h(x) < h(y)        for x < y
//!     Homogeneity:   h(a*x) == a*h(x)
//!     Additivity:    h(x+y) == h(x) + h(y)
//! Each builder declares fresh reals, pins them into open intervals, wires the
//! property constraints for one curve, and returns the solver handle. The
//! caller owns the z3 `Context`; the handle borrows it.

use tracing::info;
use z3::ast::{Ast, Bool, Real};
use z3::{Context, Solver};

use crate::symbolic::{configure_solver, f0_sym, f_sym, g_sym, ratio};

fn property_model<'ctx, H>(ctx: &'ctx Context, timeout_ms: u64, h: H) -> Solver<'ctx>
where
    H: Fn(&'ctx Context, &Real<'ctx>) -> Real<'ctx>,
{
    let x = Real::new_const(ctx, "x");
    let a = Real::new_const(ctx, "a");
    let y = Real::new_const(ctx, "y");

    let zero = ratio(ctx, 0, 1);
    let one = ratio(ctx, 1, 1);
    let two = ratio(ctx, 2, 1);

    let solver = Solver::new(ctx);
    configure_solver(ctx, &solver, timeout_ms);

    solver.assert(&x.lt(&y));
    solver.assert(&Bool::and(ctx, &[&x.gt(&zero), &x.lt(&one)]));
    solver.assert(&Bool::and(ctx, &[&a.gt(&one), &a.lt(&two)]));
    solver.assert(&Bool::and(ctx, &[&y.gt(&zero), &y.lt(&one)]));

    // monotonicity
    solver.assert(&h(ctx, &x).lt(&h(ctx, &y)));
    // homogeneity
    let ax = Real::mul(ctx, &[&a, &x]);
    solver.assert(&h(ctx, &ax)._eq(&Real::mul(ctx, &[&a, &h(ctx, &x)])));
    // additivity
    let xy = Real::add(ctx, &[&x, &y]);
    solver.assert(&h(ctx, &xy)._eq(&Real::add(ctx, &[&h(ctx, &x), &h(ctx, &y)])));

    solver
}

/// Model for the simplified candidate `f`. Expected UNSAT: `f` cannot be
/// monotone, homogeneous, and additive at once, which is the contest finding.
pub fn simplified_model<'ctx>(ctx: &'ctx Context, timeout_ms: u64) -> Solver<'ctx> {
    property_model(ctx, timeout_ms, f_sym)
}

/// Model for the straight-line reference `g`, built with the identical
/// constraint structure so the two verdicts are directly comparable.
pub fn reference_model<'ctx>(ctx: &'ctx Context, timeout_ms: u64) -> Solver<'ctx> {
    property_model(ctx, timeout_ms, g_sym)
}

/// Diagnostic model over the unsimplified formula `f0`. Logs the z3-simplified
/// symbolic form, then returns a solver carrying only the reduction premises
/// `d == 2` and `0 < r < 1`. Intentionally a print-only diagnostic: the
/// property constraints are exercised against the reduced forms `f`/`g`, not
/// against `f0` directly.
pub fn base_model<'ctx>(ctx: &'ctx Context, timeout_ms: u64) -> Solver<'ctx> {
    let l = Real::new_const(ctx, "l");
    let r = Real::new_const(ctx, "r");
    let w = Real::new_const(ctx, "w");
    let d = Real::new_const(ctx, "d");

    let zero = ratio(ctx, 0, 1);
    let one = ratio(ctx, 1, 1);
    let two = ratio(ctx, 2, 1);

    let solver = Solver::new(ctx);
    configure_solver(ctx, &solver, timeout_ms);
    solver.assert(&d._eq(&two));
    solver.assert(&Bool::and(ctx, &[&r.gt(&zero), &r.lt(&one)]));

    info!(
        "[BASE] simplified form of f0: {}",
        f0_sym(ctx, &l, &r, &w, &d).simplify()
    );
    solver
}
