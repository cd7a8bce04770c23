use std::env;
use std::path::PathBuf;

use crate::error::{ConfigError, Result};
use crate::symbolic::DEFAULT_SOLVER_TIMEOUT_MS;

const SOLVER_TIMEOUT_MIN_MS: u64 = 1_000;
const SOLVER_TIMEOUT_MAX_MS: u64 = 600_000;
const DEFAULT_PLOT_PATH: &str = "amp_curves.svg";

#[derive(Debug, Clone)]
pub struct Config {
    pub plot_path: PathBuf,
    pub solver_timeout_ms: u64,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let plot_path = env::var("AMP_PLOT_PATH")
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| DEFAULT_PLOT_PATH.to_string());
        if !plot_path.ends_with(".svg") {
            return Err(ConfigError::InvalidConfig(format!(
                "AMP_PLOT_PATH must name an .svg file, got `{plot_path}`"
            ))
            .into());
        }

        let solver_timeout_ms = env::var("AMP_SOLVER_TIMEOUT_MS")
            .ok()
            .and_then(|raw| raw.trim().parse::<u64>().ok())
            .map(|v| v.clamp(SOLVER_TIMEOUT_MIN_MS, SOLVER_TIMEOUT_MAX_MS))
            .unwrap_or(DEFAULT_SOLVER_TIMEOUT_MS);

        Ok(Self {
            plot_path: PathBuf::from(plot_path),
            solver_timeout_ms,
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            plot_path: PathBuf::from(DEFAULT_PLOT_PATH),
            solver_timeout_ms: DEFAULT_SOLVER_TIMEOUT_MS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    // Env vars are process-global; serialize the tests that touch them.
    static ENV_LOCK: Mutex<()> = Mutex::new(());

    #[test]
    fn test_timeout_clamped_and_defaulted() {
        let _guard = ENV_LOCK.lock().unwrap();
        std::env::set_var("AMP_SOLVER_TIMEOUT_MS", "5");
        let cfg = Config::from_env().unwrap();
        assert_eq!(cfg.solver_timeout_ms, SOLVER_TIMEOUT_MIN_MS);

        std::env::set_var("AMP_SOLVER_TIMEOUT_MS", "not-a-number");
        let cfg = Config::from_env().unwrap();
        assert_eq!(cfg.solver_timeout_ms, DEFAULT_SOLVER_TIMEOUT_MS);
        std::env::remove_var("AMP_SOLVER_TIMEOUT_MS");
    }

    #[test]
    fn test_plot_path_must_be_svg() {
        let _guard = ENV_LOCK.lock().unwrap();
        std::env::set_var("AMP_PLOT_PATH", "curves.png");
        assert!(Config::from_env().is_err());
        std::env::remove_var("AMP_PLOT_PATH");
    }
}
