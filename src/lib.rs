//! Amp Probe library surface.
//!
//! Investigation tooling for an LP amplification formula flagged during a
//! smart-contract audit contest. The workflow is centered on three constraint
//! models over symbolic reals (`model`), a satisfiability check with verdict
//! reporting (`check`), and a curve comparison chart (`plot`).

pub mod check;
pub mod config;
pub mod curves;
pub mod error;
pub mod model;
pub mod plot;
pub mod symbolic;
