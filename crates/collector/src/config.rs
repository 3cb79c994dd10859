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

use stackscrape_config::{DEFAULT_OBS_CONCURRENCY, DEFAULT_VOLUME_LIMIT};

/// Exporter knobs that shape a snapshot, independent of the cloud credentials
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExporterSettings {
    /// Reported as `openstack_max_total_volumes` on OBS clouds
    pub volume_limit: f64,
    /// In-flight per-bucket requests against OBS
    pub obs_concurrency: usize,
}

impl Default for ExporterSettings {
    fn default() -> Self {
        Self {
            volume_limit: DEFAULT_VOLUME_LIMIT,
            obs_concurrency: DEFAULT_OBS_CONCURRENCY,
        }
    }
}
