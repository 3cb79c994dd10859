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

//! Log filtering utilities for tracing subscribers.

use smallvec::SmallVec;
use tracing_subscriber::EnvFilter;

/// Build an `EnvFilter` from the given log level string.
///
/// A non-empty `env_directives` (the value of `RUST_LOG`) takes precedence
/// over `logger_level`. For non-verbose levels (`info`, `warn`, `error`),
/// the HTTP stack crates (`hyper`, `h2`, `reqwest`, `tower`) are silenced.
///
/// # Arguments
/// * `logger_level` - The desired log level string (e.g., `"info"`, `"debug"`).
/// * `env_directives` - Directives read from the environment, if any.
///
/// # Returns
/// A configured `EnvFilter` ready to be attached to a `tracing_subscriber` registry.
pub(super) fn build_env_filter(logger_level: &str, env_directives: Option<&str>) -> EnvFilter {
    let mut filter = env_directives
        .filter(|d| !d.trim().is_empty())
        .and_then(|d| EnvFilter::try_new(d).ok())
        .unwrap_or_else(|| EnvFilter::try_new(logger_level).unwrap_or_else(|_| EnvFilter::new("info")));

    if !matches!(logger_level, "trace" | "debug") {
        let directives: SmallVec<[&str; 4]> = smallvec::smallvec!["hyper", "h2", "reqwest", "tower"];
        for directive in directives {
            if let Ok(d) = format!("{directive}=off").parse() {
                filter = filter.add_directive(d);
            }
        }
    }

    filter
}
