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

use crate::{KeystoneError, Result};
use serde::Deserialize;
use url::Url;

/// Service catalog returned with a scoped Keystone v3 token
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(transparent)]
pub struct ServiceCatalog {
    entries: Vec<CatalogEntry>,
}

/// One service in the catalog
#[derive(Debug, Clone, Deserialize)]
pub struct CatalogEntry {
    #[serde(rename = "type")]
    pub service_type: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub endpoints: Vec<Endpoint>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Endpoint {
    #[serde(default)]
    pub id: String,
    pub interface: String,
    #[serde(default)]
    pub region: Option<String>,
    #[serde(default)]
    pub region_id: Option<String>,
    pub url: String,
}

impl Endpoint {
    fn in_region(&self, region: Option<&str>) -> bool {
        region.is_none_or(|r| self.region.as_deref() == Some(r) || self.region_id.as_deref() == Some(r))
    }
}

/// Endpoint selection criteria
#[derive(Debug, Clone, Copy)]
pub struct EndpointQuery<'a> {
    /// Accepted service types, most preferred first
    pub service_types: &'a [&'a str],
    pub interface: &'a str,
    pub region: Option<&'a str>,
}

impl ServiceCatalog {
    pub fn new(entries: Vec<CatalogEntry>) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Resolve the base URL of a service.
    ///
    /// Service types are tried in order; the first type with at least one
    /// matching endpoint decides the result. Without a region, a type
    /// offering several distinct URLs is ambiguous.
    pub fn resolve(&self, query: &EndpointQuery<'_>) -> Result<Url> {
        for service_type in query.service_types {
            let mut urls: Vec<&str> = Vec::new();
            for endpoint in self
                .entries
                .iter()
                .filter(|entry| entry.service_type == *service_type)
                .flat_map(|entry| entry.endpoints.iter())
                .filter(|ep| ep.interface.eq_ignore_ascii_case(query.interface) && ep.in_region(query.region))
            {
                if !urls.contains(&endpoint.url.as_str()) {
                    urls.push(endpoint.url.as_str());
                }
            }

            match urls.as_slice() {
                [] => continue,
                [url] => {
                    return Url::parse(url).map_err(|e| KeystoneError::ParseError(format!("Invalid endpoint URL {url}: {e}")));
                }
                _ => {
                    return Err(KeystoneError::AmbiguousEndpoint {
                        service_type: service_type.to_string(),
                        count: urls.len(),
                    });
                }
            }
        }

        Err(KeystoneError::EndpointNotFound {
            service_types: query.service_types.join(","),
            interface: query.interface.to_string(),
            region: query.region.unwrap_or("any").to_string(),
        })
    }
}

/// Append a relative path to a service base URL, keeping the base path intact
pub fn join_path(base: &Url, path: &str) -> Result<Url> {
    let joined = format!("{}/{}", base.as_str().trim_end_matches('/'), path.trim_start_matches('/'));
    Url::parse(&joined).map_err(|e| KeystoneError::ParseError(format!("Invalid URL {joined}: {e}")))
}
