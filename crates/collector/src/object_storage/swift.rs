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

use super::ObjectStorageReader;
use crate::http::send_checked;
use crate::{ReaderError, Result};
use async_trait::async_trait;
use reqwest::StatusCode;
use serde::Deserialize;
use stackscrape_keystone::Session;
use stackscrape_metrics::Container;
use tracing::debug;
use url::Url;

pub const SWIFT_SERVICE_TYPES: &[&str] = &["object-store"];

const SERVICE: &str = "object-store";

/// Swift account listing
#[derive(Debug, Clone, Default)]
pub struct SwiftReader;

#[derive(Deserialize)]
struct ContainerEntry {
    name: String,
    bytes: u64,
}

fn page_url(endpoint: &Url, marker: Option<&str>) -> Url {
    let mut url = endpoint.clone();
    {
        let mut query = url.query_pairs_mut();
        query.append_pair("format", "json");
        if let Some(marker) = marker {
            query.append_pair("marker", marker);
        }
    }
    url
}

impl SwiftReader {
    async fn fetch_page(&self, session: &Session, url: Url) -> Result<Vec<ContainerEntry>> {
        let response = send_checked(session.get(url), SERVICE).await?;
        if response.status() == StatusCode::NO_CONTENT {
            return Ok(Vec::new());
        }

        let body = response.bytes().await.map_err(|e| ReaderError::http(SERVICE, e))?;
        if body.is_empty() {
            return Ok(Vec::new());
        }
        serde_json::from_slice(&body).map_err(|e| ReaderError::data_shape("container listing", e))
    }
}

#[async_trait]
impl ObjectStorageReader for SwiftReader {
    async fn list_containers(&self, session: &Session) -> Result<Vec<Container>> {
        let endpoint = session.endpoint(SWIFT_SERVICE_TYPES)?;
        let mut containers: Vec<Container> = Vec::new();
        let mut pages = 0usize;

        debug!(%endpoint, "Getting all containers");
        loop {
            let marker = containers.last().map(|c| c.name.clone());
            let page = self.fetch_page(session, page_url(&endpoint, marker.as_deref())).await?;
            pages += 1;

            let Some(last) = page.last() else {
                break;
            };
            if marker.as_deref() == Some(last.name.as_str()) {
                return Err(ReaderError::data_shape("container listing", format!("marker {} did not advance", last.name)));
            }

            containers.extend(page.into_iter().map(|c| Container {
                name: c.name,
                bytes: c.bytes,
            }));
        }

        debug!(count = containers.len(), pages, "Containers listed");
        Ok(containers)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_url() {
        let endpoint = Url::parse("https://swift.example.com/v1/AUTH_p1").unwrap();
        assert_eq!(page_url(&endpoint, None).as_str(), "https://swift.example.com/v1/AUTH_p1?format=json");
        assert_eq!(
            page_url(&endpoint, Some("logs 2024")).as_str(),
            "https://swift.example.com/v1/AUTH_p1?format=json&marker=logs+2024"
        );
    }

    #[test]
    fn test_parse_listing() {
        let entries: Vec<ContainerEntry> = serde_json::from_str(
            r#"[{"name": "backups", "count": 3, "bytes": 1024, "last_modified": "2024-01-01T00:00:00"},
                {"name": "empty", "count": 0, "bytes": 0}]"#,
        )
        .unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].name, "backups");
        assert_eq!(entries[0].bytes, 1024);
    }

    #[test]
    fn test_invalid_byte_counts_rejected() {
        assert!(serde_json::from_str::<Vec<ContainerEntry>>(r#"[{"name": "x", "bytes": -1}]"#).is_err());
        assert!(serde_json::from_str::<Vec<ContainerEntry>>(r#"[{"name": "x", "count": 2}]"#).is_err());
    }
}
