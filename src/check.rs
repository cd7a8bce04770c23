//! Satisfiability check and verdict reporting.
//!
//! Pass-through to the solver's decision procedure. Verdict banners and the
//! witness go to stdout so they survive log filtering; diagnostics go through
//! `tracing`.

use std::time::Instant;

use tracing::debug;
use z3::{SatResult, Solver};

/// Outcome of one model check. `Unknown` is z3's third answer, typically a
/// timeout; it is reported but never treated as a verdict.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    Sat { witness: String },
    Unsat,
    Unknown { reason: String },
}

impl Verdict {
    pub fn is_sat(&self) -> bool {
        matches!(self, Verdict::Sat { .. })
    }

    pub fn is_unsat(&self) -> bool {
        matches!(self, Verdict::Unsat)
    }
}

/// Print the full constraint set, run the decision procedure, and report.
pub fn check_model(label: &str, solver: &Solver) -> Verdict {
    println!("\n\n>>> MODEL [{label}] :");
    for assertion in solver.get_assertions() {
        println!("  {assertion}");
    }
    println!();

    let started = Instant::now();
    let result = solver.check();
    debug!(
        "[CHECK] {} decided in {}ms",
        label,
        started.elapsed().as_millis()
    );

    match result {
        SatResult::Sat => {
            let witness = solver
                .get_model()
                .map(|m| m.to_string())
                .unwrap_or_default();
            println!("*** SATISFIABLE ***");
            print!("{witness}");
            println!("*******************");
            Verdict::Sat { witness }
        }
        SatResult::Unsat => {
            println!("### UNSATISFIABLE ###");
            println!("#####################");
            Verdict::Unsat
        }
        SatResult::Unknown => {
            let reason = solver
                .get_reason_unknown()
                .unwrap_or_else(|| "unspecified".to_string());
            println!("??? UNKNOWN ({reason}) ???");
            Verdict::Unknown { reason }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use z3::ast::{Ast, Real};
    use z3::{Config, Context};

    #[test]
    fn test_verdict_for_trivially_unsat_model() {
        let cfg = Config::new();
        let ctx = Context::new(&cfg);
        let solver = Solver::new(&ctx);
        let x = Real::new_const(&ctx, "x");
        solver.assert(&x._eq(&x).not());
        assert!(check_model("trivial_unsat", &solver).is_unsat());
    }

    #[test]
    fn test_sat_verdict_carries_witness() {
        let cfg = Config::new();
        let ctx = Context::new(&cfg);
        let solver = Solver::new(&ctx);
        let x = Real::new_const(&ctx, "x");
        solver.assert(&x._eq(&Real::from_real(&ctx, 3, 4)));
        match check_model("trivial_sat", &solver) {
            Verdict::Sat { witness } => assert!(witness.contains('x')),
            other => panic!("expected Sat, got {other:?}"),
        }
    }
}
