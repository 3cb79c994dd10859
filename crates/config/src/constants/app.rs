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

use const_str::concat;

/// Application name
/// Default value: stackscrape
pub const APP_NAME: &str = "stackscrape";

/// Application version
/// Taken from the package manifest at build time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// User agent sent with every control-plane request
/// Default value: stackscrape/<version>
pub const USER_AGENT: &str = concat!(APP_NAME, "/", VERSION);

/// Default port the exporter listens on
/// Default value: 9595
/// Environment variable: STACKSCRAPE_PORT
/// Command line argument: --port
pub const DEFAULT_PORT: u16 = 9595;

/// Default bind address for the exporter
/// Default value: 0.0.0.0
/// Environment variable: STACKSCRAPE_ADDRESS
/// Command line argument: --address
pub const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0";

/// Default address for the exporter
/// Default value: 0.0.0.0:9595
pub const DEFAULT_ADDRESS: &str = concat!(DEFAULT_BIND_ADDRESS, ":", DEFAULT_PORT);

/// Default logger level
/// Default value: info
/// Environment variable: STACKSCRAPE_LOG_LEVEL
/// Command line argument: --log.level
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Default logger format, either `text` or `json`
/// Default value: text
/// Environment variable: STACKSCRAPE_LOG_FORMAT
/// Command line argument: --log.format
pub const DEFAULT_LOG_FORMAT: &str = "text";

/// Path the metrics are served on
pub const METRICS_PATH: &str = "/metrics";

/// Prometheus text exposition content type
pub const METRICS_CONTENT_TYPE: &str = "text/plain; version=0.0.4; charset=utf-8";
