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

/// Volume ceiling reported as `openstack_max_total_volumes` on Open Telekom Cloud,
/// where the block storage limits API is not queried
/// Default value: -1
/// Environment variable: STACKSCRAPE_VOLUME_LIMIT
/// Command line argument: --volume.limit
pub const DEFAULT_VOLUME_LIMIT: f64 = -1.0;

/// Maximum number of concurrent per-bucket storage queries against OBS
/// Default value: 4
/// Environment variable: STACKSCRAPE_OBS_CONCURRENCY
/// Command line argument: --obs.concurrency
pub const DEFAULT_OBS_CONCURRENCY: usize = 4;

/// Timeout for a single control-plane HTTP request, in seconds
/// Default value: 30
/// Environment variable: STACKSCRAPE_HTTP_TIMEOUT
/// Command line argument: --http.timeout
pub const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 30;

/// Upper bound for one collection cycle when the scraper does not send
/// `X-Prometheus-Scrape-Timeout-Seconds`, in seconds
/// Default value: 60
/// Environment variable: STACKSCRAPE_SCRAPE_TIMEOUT
/// Command line argument: --scrape.timeout
pub const DEFAULT_SCRAPE_TIMEOUT_SECS: u64 = 60;

/// Header Prometheus uses to announce its scrape timeout
pub const SCRAPE_TIMEOUT_HEADER: &str = "x-prometheus-scrape-timeout-seconds";

/// Marker in the auth URL identifying Open Telekom Cloud
pub const OTC_AUTH_URL_MARKER: &str = "otc";
