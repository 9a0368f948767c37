//! Runtime detection and tracing bootstrap.

use tracing_subscriber::{fmt, EnvFilter};

/// Set by the Lambda execution environment.
pub const LAMBDA_RUNTIME_ENV: &str = "AWS_LAMBDA_RUNTIME_API";

const DEFAULT_FILTER: &str = "info";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuntimeMode {
    /// Invoked by the Lambda runtime with API Gateway v2 HTTP events.
    Lambda,
    /// Plain HTTP server on `server.listen`.
    Local,
}

impl RuntimeMode {
    pub fn detect() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        match lookup(LAMBDA_RUNTIME_ENV) {
            Some(v) if !v.trim().is_empty() => RuntimeMode::Lambda,
            _ => RuntimeMode::Local,
        }
    }
}

/// Install the global subscriber. `RUST_LOG` overrides the default `info` filter.
pub fn init_tracing(mode: RuntimeMode) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    match mode {
        // CloudWatch stamps every line already.
        RuntimeMode::Lambda => fmt()
            .with_env_filter(filter)
            .with_ansi(false)
            .without_time()
            .init(),
        RuntimeMode::Local => fmt().with_env_filter(filter).init(),
    }
}
