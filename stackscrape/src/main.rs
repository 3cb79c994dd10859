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

//! stackscrape: Prometheus exporter for OpenStack project quotas and usage.
//!
//! Every `GET /metrics` authenticates against Keystone with the `OS_*`
//! environment and collects a fresh snapshot; nothing is cached between
//! scrapes.

mod config;
mod error;
mod server;

use crate::config::Opt;
use crate::error::{Error, Result};
use crate::server::{AppState, router, wait_for_shutdown};
use clap::Parser;
use stackscrape_collector::Collector;
use stackscrape_config::{APP_NAME, METRICS_PATH, VERSION};
use stackscrape_keystone::{KeystoneAuthenticator, KeystoneClient};
use stackscrape_obs::init_logging;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio_util::sync::CancellationToken;
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<()> {
    let opt = Opt::parse();

    // Hold the guard until exit so buffered records are flushed
    let _guard = init_logging(&opt.logging_config())?;

    info!(app = APP_NAME, version = VERSION, "Starting exporter");
    if let Err(e) = run(opt).await {
        error!(error = %e, "Exporter stopped");
        return Err(e);
    }

    info!("Exporter stopped");
    Ok(())
}

async fn run(opt: Opt) -> Result<()> {
    let client = KeystoneClient::new(&opt.client_options())?;
    let provider = Arc::new(KeystoneAuthenticator::from_env(client));
    let collector = Arc::new(Collector::openstack(provider, opt.exporter_settings()));

    let shutdown = CancellationToken::new();
    let app = router(AppState {
        collector,
        scrape_timeout: opt.scrape_timeout(),
        shutdown: shutdown.clone(),
    });

    let addr = format!("{}:{}", opt.address, opt.port);
    let listener = TcpListener::bind((opt.address.as_str(), opt.port))
        .await
        .map_err(|source| Error::Bind { addr: addr.clone(), source })?;
    let local_addr = listener.local_addr().map_err(|source| Error::Bind { addr, source })?;

    info!(
        address = %local_addr,
        metrics_path = METRICS_PATH,
        volume_limit = opt.volume_limit,
        obs_concurrency = opt.obs_concurrency,
        insecure = opt.insecure,
        "Listening"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(wait_for_shutdown(shutdown))
        .await
        .map_err(Error::Serve)
}
