//! Investigation run: check the property models for the simplified candidate
//! and the reference line, then render the comparison chart.

use anyhow::Result;
use z3::Context;

use amp_probe::check::check_model;
use amp_probe::config::Config;
use amp_probe::model::{base_model, reference_model, simplified_model};
use amp_probe::plot::{render, sample_curves};

fn main() -> Result<()> {
    // Default to `info` when `RUST_LOG` is unset or invalid to avoid silent startup.
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr) // Keep verdict output on stdout clean
        .init();

    let config = Config::from_env()?;
    tracing::info!(
        "[STARTUP] solver timeout {}ms, plot path {}",
        config.solver_timeout_ms,
        config.plot_path.display()
    );

    let z3_config = z3::Config::new();
    let ctx = Context::new(&z3_config);

    // Base-formula diagnostic: logs the simplified form of f0 under d == 2.
    check_model("base", &base_model(&ctx, config.solver_timeout_ms));

    // The contest claim: f cannot be monotone, homogeneous, and additive at once.
    check_model(
        "simplified",
        &simplified_model(&ctx, config.solver_timeout_ms),
    );
    check_model(
        "reference",
        &reference_model(&ctx, config.solver_timeout_ms),
    );

    render(&sample_curves(), &config.plot_path)?;
    Ok(())
}
