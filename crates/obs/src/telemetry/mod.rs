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

mod filter;
mod local;

use crate::{LoggingConfig, TelemetryError};
use tracing_appender::non_blocking::WorkerGuard;

/// Keeps the non-blocking writer alive.
///
/// Dropping the guard flushes buffered records; hold it for the lifetime of
/// the process.
#[derive(Debug)]
pub struct LogGuard {
    _stdout_guard: WorkerGuard,
}

/// Install the global tracing subscriber.
///
/// # Errors
/// Returns [`TelemetryError::SubscriberInit`] when a global subscriber is
/// already installed.
pub fn init_logging(config: &LoggingConfig) -> Result<LogGuard, TelemetryError> {
    local::init_stdout_logging(config)
}
