// Copyright 2024 RustFS Team
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, KeystoneError>;

/// Keystone integration errors
#[derive(Debug, Error)]
pub enum KeystoneError {
    /// Missing or contradictory authentication options
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Keystone rejected the credentials or returned an unexpected status
    #[error("Authentication failed: {0}")]
    AuthenticationFailed(String),

    /// HTTP request error
    #[error("HTTP error: {0}")]
    HttpError(String),

    /// Network timeout
    #[error("Request timeout")]
    Timeout,

    /// Response parsing error
    #[error("Parse error: {0}")]
    ParseError(String),

    /// No catalog entry matches the requested service
    #[error("No endpoint found for service type(s) {service_types} (interface: {interface}, region: {region})")]
    EndpointNotFound {
        service_types: String,
        interface: String,
        region: String,
    },

    /// Several regions offer the service and none was configured
    #[error("Ambiguous endpoint for service type {service_type}: {count} candidates, set OS_REGION_NAME")]
    AmbiguousEndpoint { service_type: String, count: usize },
}

impl KeystoneError {
    /// Check if error is authentication related
    pub fn is_auth_error(&self) -> bool {
        matches!(self, KeystoneError::AuthenticationFailed(_) | KeystoneError::ConfigError(_))
    }

    /// Check if error is an endpoint lookup failure
    pub fn is_catalog_error(&self) -> bool {
        matches!(self, KeystoneError::EndpointNotFound { .. } | KeystoneError::AmbiguousEndpoint { .. })
    }
}

impl From<reqwest::Error> for KeystoneError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            KeystoneError::Timeout
        } else if e.is_decode() {
            KeystoneError::ParseError(e.to_string())
        } else {
            KeystoneError::HttpError(e.to_string())
        }
    }
}
