use serde::{Deserialize, Serialize};
use std::time::Duration;

use super::PreloadOptionsError;

pub const DEFAULT_PRELOAD_TIMEOUT: Duration = Duration::from_secs(2);
pub const DEFAULT_MAX_PARALLEL: usize = 8;
/// Longest accepted pass budget; the deadline must stay representable.
pub const MAX_PRELOAD_TIMEOUT: Duration = Duration::from_secs(24 * 60 * 60);

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct PreloadOptions {
    /// Budget for one preload pass, shared by every sub-call.
    pub timeout: Duration,
    /// Upper bound on sub-calls running at the same time.
    pub max_parallel: usize,
    /// Request paths under these prefixes are never preloaded.
    pub skip_prefixes: Vec<String>,
}

impl Default for PreloadOptions {
    fn default() -> Self {
        Self {
            timeout: DEFAULT_PRELOAD_TIMEOUT,
            max_parallel: DEFAULT_MAX_PARALLEL,
            skip_prefixes: vec![
                "/assets/".to_string(),
                "/rpc".to_string(),
                "/__preload".to_string(),
            ],
        }
    }
}

impl PreloadOptions {
    pub fn builder() -> PreloadOptionsBuilder {
        PreloadOptionsBuilder::default()
    }

    pub fn validate(&self) -> Result<(), PreloadOptionsError> {
        if self.timeout.is_zero() {
            return Err(PreloadOptionsError::ZeroTimeout);
        }
        if self.timeout > MAX_PRELOAD_TIMEOUT {
            return Err(PreloadOptionsError::TimeoutTooLarge {
                provided: self.timeout,
                max: MAX_PRELOAD_TIMEOUT,
            });
        }
        if self.max_parallel == 0 {
            return Err(PreloadOptionsError::MaxParallelInvalid { provided: 0 });
        }
        Ok(())
    }

    pub fn is_skipped(&self, path: &str) -> bool {
        self.skip_prefixes
            .iter()
            .any(|prefix| path.starts_with(prefix.as_str()))
    }
}

#[derive(Debug, Default, Clone)]
pub struct PreloadOptionsBuilder {
    options: PreloadOptions,
}

impl PreloadOptionsBuilder {
    pub fn timeout(mut self, value: Duration) -> Self {
        self.options.timeout = value;
        self
    }

    pub fn max_parallel(mut self, value: usize) -> Self {
        self.options.max_parallel = value;
        self
    }

    pub fn skip_prefixes<I, S>(mut self, prefixes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.options.skip_prefixes = prefixes.into_iter().map(Into::into).collect();
        self
    }

    pub fn build(self) -> Result<PreloadOptions, PreloadOptionsError> {
        let options = self.options;
        options.validate()?;
        Ok(options)
    }
}
