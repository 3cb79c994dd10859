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

use tokio_util::sync::CancellationToken;
use tracing::{info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ShutdownSignal {
    CtrlC,
    Sigterm,
}

#[cfg(unix)]
async fn recv_signal() -> ShutdownSignal {
    use tokio::signal::unix::{SignalKind, signal};

    let mut sigterm = match signal(SignalKind::terminate()) {
        Ok(sigterm) => sigterm,
        Err(e) => {
            warn!(error = %e, "Failed to install SIGTERM handler, waiting for Ctrl-C only");
            let _ = tokio::signal::ctrl_c().await;
            return ShutdownSignal::CtrlC;
        }
    };

    tokio::select! {
        _ = tokio::signal::ctrl_c() => ShutdownSignal::CtrlC,
        _ = sigterm.recv() => ShutdownSignal::Sigterm,
    }
}

#[cfg(not(unix))]
async fn recv_signal() -> ShutdownSignal {
    let _ = tokio::signal::ctrl_c().await;
    ShutdownSignal::CtrlC
}

/// Resolve on Ctrl-C or SIGTERM, cancelling `token` so running scrapes stop
pub(crate) async fn wait_for_shutdown(token: CancellationToken) {
    let signal = recv_signal().await;
    info!(?signal, "Shutdown signal received");
    token.cancel();
}
