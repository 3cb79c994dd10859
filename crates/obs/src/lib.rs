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

//! Logging for stackscrape.
//!
//! Installs a `tracing` subscriber writing to stdout in either text or JSON
//! form. `RUST_LOG` overrides the configured level.
//!
//! ## Usage
//!
//! ```no_run
//! use stackscrape_obs::{LoggingConfig, init_logging};
//!
//! let _guard = init_logging(&LoggingConfig::default()).expect("logging");
//! tracing::info!("ready");
//! ```

mod config;
mod error;
mod telemetry;

pub use config::{LogFormat, LoggingConfig};
pub use error::TelemetryError;
pub use telemetry::{LogGuard, init_logging};
