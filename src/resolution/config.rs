use thiserror::Error;

use super::resolve::Cancellation;

pub const DEFAULT_MAX_ITERATIONS: usize = 10_000;
pub const DEFAULT_MAX_SUPPORT: usize = 4_096;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("max_iterations must be >= 1")]
    ZeroIterations,
    #[error("max_support must be >= 1")]
    ZeroSupport,
}

/// Resource bounds and rule selection for one refutation run.
///
/// `None` budgets are unbounded; the natural termination rules then have to
/// fire on their own.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolutionConfig {
    pub max_iterations: Option<usize>,
    pub max_support: Option<usize>,
    pub cancellation: Cancellation,
    pub record_trace: bool,
}

impl ResolutionConfig {
    pub fn unbounded() -> Self {
        Self {
            max_iterations: None,
            max_support: None,
            ..Self::default()
        }
    }

    pub fn with_max_iterations(mut self, max: usize) -> Self {
        self.max_iterations = Some(max);
        self
    }

    pub fn with_max_support(mut self, max: usize) -> Self {
        self.max_support = Some(max);
        self
    }

    pub fn with_cancellation(mut self, cancellation: Cancellation) -> Self {
        self.cancellation = cancellation;
        self
    }

    pub fn with_trace(mut self, record: bool) -> Self {
        self.record_trace = record;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_iterations == Some(0) {
            return Err(ConfigError::ZeroIterations);
        }
        if self.max_support == Some(0) {
            return Err(ConfigError::ZeroSupport);
        }
        Ok(())
    }
}

impl Default for ResolutionConfig {
    fn default() -> Self {
        Self {
            max_iterations: Some(DEFAULT_MAX_ITERATIONS),
            max_support: Some(DEFAULT_MAX_SUPPORT),
            cancellation: Cancellation::All,
            record_trace: false,
        }
    }
}
