use crate::types::ParamMap;
use serde::{Deserialize, Serialize};

/// Preload declaration for one route pattern.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteSpec {
    pub pattern: String,
    #[serde(default, alias = "rpcs")]
    pub subcalls: Vec<RpcSpec>,
}

impl RouteSpec {
    pub fn new(pattern: impl Into<String>) -> Self {
        Self {
            pattern: pattern.into(),
            subcalls: Vec::new(),
        }
    }

    pub fn with_call(mut self, call: RpcSpec) -> Self {
        self.subcalls.push(call);
        self
    }
}

/// A remote call to run ahead of rendering. Parameter values may reference
/// route parameters as `:name`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RpcSpec {
    pub method: String,
    #[serde(default)]
    pub params: Option<ParamMap>,
}

impl RpcSpec {
    pub fn new(method: impl Into<String>) -> Self {
        Self {
            method: method.into(),
            params: None,
        }
    }

    pub fn param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.params
            .get_or_insert_with(ParamMap::new)
            .insert(key.into(), value.into());
        self
    }
}
