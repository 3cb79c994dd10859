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

use stackscrape_keystone::KeystoneError;
use stackscrape_signer::SignerError;
use std::time::Duration;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ReaderError>;

/// Failure of a single reader call. Fails its family only.
#[derive(Debug, Error)]
pub enum ReaderError {
    /// Service lookup or the extra authentication it needed
    #[error("Endpoint error: {0}")]
    Endpoint(#[from] KeystoneError),

    /// The service answered with a non-success status
    #[error("{service} query failed with status {status}: {message}")]
    Query {
        service: &'static str,
        status: u16,
        message: String,
    },

    /// Transport failure before a response was received
    #[error("{service} request failed: {message}")]
    Http { service: &'static str, message: String },

    /// The response did not have the expected shape
    #[error("Unexpected {what} data: {detail}")]
    DataShape { what: &'static str, detail: String },

    #[error("Signing error: {0}")]
    Signing(#[from] SignerError),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl ReaderError {
    pub(crate) fn http(service: &'static str, e: reqwest::Error) -> Self {
        let message = if e.is_timeout() {
            "request timed out".to_string()
        } else {
            e.to_string()
        };
        ReaderError::Http { service, message }
    }

    pub(crate) fn data_shape(what: &'static str, detail: impl ToString) -> Self {
        ReaderError::DataShape {
            what,
            detail: detail.to_string(),
        }
    }
}

/// Failure of a whole collection cycle
#[derive(Debug, Error)]
pub enum CollectError {
    /// No session could be established; nothing was collected
    #[error("Failed to authenticate to OpenStack API after {elapsed:?}: {source}")]
    Authentication { source: KeystoneError, elapsed: Duration },

    #[error("Collection cancelled")]
    Cancelled,
}
