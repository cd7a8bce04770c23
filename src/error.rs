use thiserror::Error;

pub type Result<T> = std::result::Result<T, AmpError>;

#[derive(Debug, Error)]
pub enum AmpError {
    #[error("math error: {0}")]
    Math(#[from] SolverError),
    #[error("render error: {0}")]
    Render(#[from] PlotError),
    #[error("config error: {0}")]
    Config(#[from] ConfigError),
}

#[derive(Debug, Error)]
pub enum SolverError {
    #[error("z3 operation failed: {0}")]
    Operation(String),
    #[error("solver returned unknown: {0}")]
    Unknown(String),
}

#[derive(Debug, Error)]
pub enum PlotError {
    #[error("drawing backend failed: {0}")]
    Backend(String),
    #[error("empty sample set for series `{0}`")]
    EmptySeries(String),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required configuration: {0}")]
    MissingConfig(String),
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}
