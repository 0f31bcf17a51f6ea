//! Success response envelope
//!
//! Every successful data response is wrapped as
//! `{"success": true, "data": <upstream payload>, "meta": {...}}` with the
//! resolved endpoint, the echoed request parameters, and whether the payload
//! came from the cache.

use std::{collections::BTreeMap, sync::Arc};

use serde::Serialize;
use serde_json::Value;

/// Response metadata
#[derive(Debug, Clone, Serialize)]
pub struct Meta {
    /// The resolved endpoint path, e.g. `/races/2024/5`
    pub endpoint: String,
    /// Echoed request parameters, in their public camelCase spelling
    #[serde(flatten)]
    pub params: BTreeMap<&'static str, String>,
    /// Whether the payload was served from the cache
    pub cached: bool,
}

/// Success envelope wrapping an unmodified upstream payload
#[derive(Debug, Clone, Serialize)]
pub struct ApiSuccess {
    pub success: bool,
    pub data: Arc<Value>,
    pub meta: Meta,
}

impl ApiSuccess {
    /// Wrap a payload with its request metadata
    #[must_use]
    pub fn new(
        data: Arc<Value>,
        endpoint: String,
        params: BTreeMap<&'static str, String>,
        cached: bool,
    ) -> Self {
        Self {
            success: true,
            data,
            meta: Meta {
                endpoint,
                params,
                cached,
            },
        }
    }
}
