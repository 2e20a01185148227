use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const DEFAULT_CACHE_CAPACITY_HINT: usize = 64;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct RouterConfig {
    /// Memoize resolved metadata per exact pathname.
    pub cache_metadata: bool,
    /// Initial capacity of the metadata cache map.
    pub cache_capacity_hint: usize,
    /// Emit debug events for cache hits and misses.
    pub debug: bool,
}

impl Default for RouterConfig {
    fn default() -> Self {
        Self {
            cache_metadata: true,
            cache_capacity_hint: DEFAULT_CACHE_CAPACITY_HINT,
            debug: false,
        }
    }
}

impl RouterConfig {
    pub fn builder() -> RouterConfigBuilder {
        RouterConfigBuilder::default()
    }

    pub fn validate(&self) -> Result<(), RouterConfigError> {
        if self.cache_capacity_hint == 0 {
            return Err(RouterConfigError::CacheCapacityInvalid { provided: 0 });
        }
        Ok(())
    }
}

#[derive(Debug, Default, Clone)]
pub struct RouterConfigBuilder {
    config: RouterConfig,
}

impl RouterConfigBuilder {
    pub fn cache_metadata(mut self, value: bool) -> Self {
        self.config.cache_metadata = value;
        self
    }

    pub fn cache_capacity_hint(mut self, value: usize) -> Self {
        self.config.cache_capacity_hint = value;
        self
    }

    pub fn debug(mut self, value: bool) -> Self {
        self.config.debug = value;
        self
    }

    pub fn build(self) -> Result<RouterConfig, RouterConfigError> {
        let config = self.config;
        config.validate()?;
        Ok(config)
    }
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RouterConfigError {
    #[error("cache_capacity_hint must be at least 1 (got {provided})")]
    CacheCapacityInvalid { provided: usize },
}

pub type RouterOptions = RouterConfig;
pub type RouterOptionsBuilder = RouterConfigBuilder;
pub type RouterOptionsError = RouterConfigError;
