//! z3 plumbing: symbolic counterparts of the curves over real arithmetic,
//! rational literal helpers, and solver tuning.

use z3::ast::Real;
use z3::{Context, Params, Solver, Symbol};

pub const DEFAULT_SOLVER_TIMEOUT_MS: u64 = 60_000;

/// Exact rational literal `num/den`.
pub fn ratio<'ctx>(ctx: &'ctx Context, num: i32, den: i32) -> Real<'ctx> {
    Real::from_real(ctx, num, den)
}

/// Symbolic base calculation: `(l*w) / (d - r*(d - 1))`.
pub fn f0_sym<'ctx>(
    ctx: &'ctx Context,
    l: &Real<'ctx>,
    r: &Real<'ctx>,
    w: &Real<'ctx>,
    d: &Real<'ctx>,
) -> Real<'ctx> {
    let one = ratio(ctx, 1, 1);
    let d_minus_one = Real::sub(ctx, &[d, &one]);
    let denom = Real::sub(ctx, &[d, &Real::mul(ctx, &[r, &d_minus_one])]);
    Real::div(&Real::mul(ctx, &[l, w]), &denom)
}

/// Symbolic simplified calculation: `1 / (2 - x)`.
pub fn f_sym<'ctx>(ctx: &'ctx Context, x: &Real<'ctx>) -> Real<'ctx> {
    let one = ratio(ctx, 1, 1);
    let two = ratio(ctx, 2, 1);
    Real::div(&one, &Real::sub(ctx, &[&two, x]))
}

/// Symbolic reference line: `1/2 + x/2`.
pub fn g_sym<'ctx>(ctx: &'ctx Context, x: &Real<'ctx>) -> Real<'ctx> {
    let half = ratio(ctx, 1, 2);
    Real::add(ctx, &[&half, &Real::mul(ctx, &[&half, x])])
}

/// Apply the standard tuning to a model solver: bounded wall clock,
/// deterministic seed, and the nonlinear-real-arithmetic logic the property
/// constraints live in.
pub fn configure_solver(ctx: &Context, solver: &Solver, timeout_ms: u64) {
    let mut params = Params::new(ctx);
    params.set_u32("timeout", timeout_ms.min(u32::MAX as u64) as u32);
    params.set_symbol("logic", Symbol::String("QF_NRA".into()));
    params.set_u32("random_seed", 42); // Deterministic by default
    solver.set_params(&params);
}
