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

//! Stdout logging backend.
//!
//! | Format | Result                                                  |
//! |--------|---------------------------------------------------------|
//! | text   | single-line records, ANSI colours when stdout is a tty  |
//! | json   | one JSON object per line with current span and span list |

use super::LogGuard;
use super::filter::build_env_filter;
use crate::{LogFormat, LoggingConfig, TelemetryError};
use std::io::IsTerminal;
use tracing::info;
use tracing_error::ErrorLayer;
use tracing_subscriber::{
    EnvFilter,
    fmt::{format::FmtSpan, time::UtcTime},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

/// Install a non-blocking stdout subscriber as the global default.
pub(super) fn init_stdout_logging(config: &LoggingConfig) -> Result<LogGuard, TelemetryError> {
    let env_directives = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    let env_filter = build_env_filter(&config.level, env_directives.as_deref());
    let (nb, guard) = tracing_appender::non_blocking(std::io::stdout());

    let (json_layer, text_layer) = match config.format {
        LogFormat::Json => (
            Some(
                tracing_subscriber::fmt::layer()
                    .with_timer(UtcTime::rfc_3339())
                    .with_target(true)
                    .with_ansi(false)
                    .with_file(true)
                    .with_line_number(true)
                    .with_writer(nb)
                    .json()
                    .with_current_span(true)
                    .with_span_list(true)
                    .with_span_events(FmtSpan::CLOSE),
            ),
            None,
        ),
        LogFormat::Text => (
            None,
            Some(
                tracing_subscriber::fmt::layer()
                    .with_timer(UtcTime::rfc_3339())
                    .with_target(true)
                    .with_ansi(std::io::stdout().is_terminal())
                    .with_writer(nb),
            ),
        ),
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(ErrorLayer::default())
        .with(json_layer)
        .with(text_layer)
        .try_init()
        .map_err(|e| TelemetryError::SubscriberInit(e.to_string()))?;

    info!("Init stdout logging (level: {}, format: {})", config.level, config.format);

    Ok(LogGuard { _stdout_guard: guard })
}
