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

use crate::error::ScrapeError;
use axum::Router;
use axum::extract::State;
use axum::http::HeaderMap;
use axum::http::header::CONTENT_TYPE;
use axum::response::{Html, IntoResponse, Response};
use axum::routing::get;
use stackscrape_collector::Collector;
use stackscrape_config::{METRICS_CONTENT_TYPE, METRICS_PATH, SCRAPE_TIMEOUT_HEADER};
use std::sync::Arc;
use std::time::Duration;
use tokio_util::sync::CancellationToken;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

const LANDING_PAGE: &str = "<html><head><title>OpenStack Exporter</title></head><body><h1>OpenStack Exporter</h1><p><a href='/metrics'>Metrics</a></p></body></html>";

#[derive(Clone)]
pub(crate) struct AppState {
    pub collector: Arc<Collector>,
    /// Deadline used when the scraper announces none
    pub scrape_timeout: Duration,
    /// Cancelled on shutdown; every scrape runs under a child token
    pub shutdown: CancellationToken,
}

pub(crate) fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(landing_page))
        .route(METRICS_PATH, get(metrics))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}

async fn landing_page() -> Html<&'static str> {
    Html(LANDING_PAGE)
}

/// Deadline announced by Prometheus, falling back to `default`
fn scrape_timeout(headers: &HeaderMap, default: Duration) -> Duration {
    headers
        .get(SCRAPE_TIMEOUT_HEADER)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.trim().parse::<f64>().ok())
        .filter(|secs| *secs > 0.0)
        .and_then(|secs| Duration::try_from_secs_f64(secs).ok())
        .unwrap_or(default)
}

async fn metrics(State(state): State<AppState>, headers: HeaderMap) -> Response {
    let timeout = scrape_timeout(&headers, state.scrape_timeout);
    let cancel = state.shutdown.child_token();

    let result = match tokio::time::timeout(timeout, state.collector.collect(&cancel)).await {
        Ok(result) => result.map_err(ScrapeError::from),
        Err(_) => {
            cancel.cancel();
            Err(ScrapeError::Timeout(timeout))
        }
    };

    match result {
        Ok(snapshot) => {
            info!(
                dialect = %snapshot.dialect,
                observations = snapshot.observations.len(),
                failures = snapshot.failures.len(),
                elapsed = ?snapshot.elapsed,
                "Scrape served"
            );
            ([(CONTENT_TYPE, METRICS_CONTENT_TYPE)], snapshot.render()).into_response()
        }
        Err(e) => {
            warn!(error = %e, "Scrape failed");
            e.into_response()
        }
    }
}
