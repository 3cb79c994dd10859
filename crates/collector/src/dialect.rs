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

use stackscrape_config::OTC_AUTH_URL_MARKER;
use std::fmt;

/// Cloud flavour, decided from the auth URL once per cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dialect {
    /// Stock OpenStack: Swift object storage, Cinder volume limits
    Swift,
    /// Open Telekom Cloud: OBS object storage, no volume limits query
    Obs,
}

impl Dialect {
    pub fn from_auth_url(auth_url: &str) -> Self {
        if auth_url.contains(OTC_AUTH_URL_MARKER) {
            Dialect::Obs
        } else {
            Dialect::Swift
        }
    }

    /// Whether the block-storage limits API is queried on this cloud
    pub fn queries_volume_limits(&self) -> bool {
        matches!(self, Dialect::Swift)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Dialect::Swift => "swift",
            Dialect::Obs => "obs",
        }
    }
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
