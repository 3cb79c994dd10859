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

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use stackscrape_collector::CollectError;
use stackscrape_keystone::KeystoneError;
use stackscrape_obs::TelemetryError;
use std::time::Duration;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Start-up and serving failures of the exporter process
#[derive(Debug, Error)]
pub enum Error {
    #[error("Failed to initialize logging: {0}")]
    Logging(#[from] TelemetryError),

    #[error("Failed to create HTTP client: {0}")]
    Client(#[from] KeystoneError),

    #[error("Failed to bind {addr}: {source}")]
    Bind { addr: String, source: std::io::Error },

    #[error("Server error: {0}")]
    Serve(std::io::Error),
}

/// A scrape that produced no metrics
#[derive(Debug, Error)]
pub enum ScrapeError {
    #[error(transparent)]
    Collect(#[from] CollectError),

    #[error("Collection did not finish within {0:?}")]
    Timeout(Duration),
}

impl ScrapeError {
    pub fn status(&self) -> StatusCode {
        match self {
            ScrapeError::Collect(_) => StatusCode::SERVICE_UNAVAILABLE,
            ScrapeError::Timeout(_) => StatusCode::GATEWAY_TIMEOUT,
        }
    }
}

impl IntoResponse for ScrapeError {
    fn into_response(self) -> Response {
        (self.status(), format!("{self}\n")).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(ScrapeError::from(CollectError::Cancelled).status(), StatusCode::SERVICE_UNAVAILABLE);

        let auth = CollectError::Authentication {
            source: KeystoneError::AuthenticationFailed("401".to_string()),
            elapsed: Duration::from_millis(3),
        };
        assert_eq!(ScrapeError::from(auth).status(), StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(ScrapeError::Timeout(Duration::from_secs(1)).status(), StatusCode::GATEWAY_TIMEOUT);
    }

    #[test]
    fn test_response_body_is_one_line() {
        let message = ScrapeError::Timeout(Duration::from_secs(2)).to_string();
        assert_eq!(message, "Collection did not finish within 2s");
        assert!(!message.contains('\n'));
    }
}
