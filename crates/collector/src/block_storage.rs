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

//! Block-storage (Cinder) reader.

use crate::http::{Link, get_json, next_link};
use crate::{ReaderError, Result};
use async_trait::async_trait;
use serde::Deserialize;
use stackscrape_keystone::{BlockStorageVersion, Session, join_path};
use stackscrape_metrics::{Volume, VolumeLimits};
use std::collections::HashSet;
use tracing::debug;

pub const VOLUME_V3_SERVICE_TYPES: &[&str] = &["block-storage", "volumev3"];
pub const VOLUME_V2_SERVICE_TYPES: &[&str] = &["volumev2", "block-storage"];

const SERVICE: &str = "block-storage";

/// Catalog aliases for the limits query under the given API version
pub fn limits_service_types(version: BlockStorageVersion) -> &'static [&'static str] {
    match version {
        BlockStorageVersion::V2 => VOLUME_V2_SERVICE_TYPES,
        BlockStorageVersion::V3 => VOLUME_V3_SERVICE_TYPES,
    }
}

#[async_trait]
pub trait BlockStorageReader: Send + Sync {
    /// Every volume of the project, always through the v3 API
    async fn list_volumes(&self, session: &Session) -> Result<Vec<Volume>>;

    /// Absolute volume limits, v2 or v3 depending on the session options
    async fn volume_limits(&self, session: &Session) -> Result<VolumeLimits>;
}

#[derive(Debug, Clone, Default)]
pub struct CinderReader;

#[derive(Deserialize)]
struct LimitsResponse {
    limits: LimitsBody,
}

#[derive(Deserialize)]
struct LimitsBody {
    absolute: AbsoluteLimits,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct AbsoluteLimits {
    max_total_volumes: i64,
    max_total_volume_gigabytes: i64,
    total_volumes_used: i64,
    total_gigabytes_used: i64,
}

impl From<AbsoluteLimits> for VolumeLimits {
    fn from(a: AbsoluteLimits) -> Self {
        VolumeLimits {
            max_total_volumes: a.max_total_volumes,
            max_total_volume_gigabytes: a.max_total_volume_gigabytes,
            total_volumes_used: a.total_volumes_used,
            total_gigabytes_used: a.total_gigabytes_used,
        }
    }
}

#[derive(Deserialize)]
struct VolumesPage {
    volumes: Vec<VolumeEntry>,
    #[serde(default)]
    volumes_links: Vec<Link>,
}

#[derive(Deserialize)]
struct VolumeEntry {
    id: String,
    status: String,
}

#[async_trait]
impl BlockStorageReader for CinderReader {
    async fn list_volumes(&self, session: &Session) -> Result<Vec<Volume>> {
        let endpoint = session.endpoint(VOLUME_V3_SERVICE_TYPES)?;
        let mut next = Some(join_path(&endpoint, "volumes/detail")?);
        let mut visited = HashSet::new();
        let mut volumes = Vec::new();

        debug!("Getting all volumes");
        while let Some(url) = next.take() {
            if !visited.insert(url.clone()) {
                return Err(ReaderError::data_shape("volumes pagination", format!("link loop at {url}")));
            }

            let page: VolumesPage = get_json(session, url, SERVICE).await?;
            next = next_link(&page.volumes_links)?;
            volumes.extend(page.volumes.into_iter().map(|v| Volume { id: v.id, status: v.status }));
        }

        debug!(count = volumes.len(), pages = visited.len(), "Volumes listed");
        Ok(volumes)
    }

    async fn volume_limits(&self, session: &Session) -> Result<VolumeLimits> {
        let version = session.options().block_storage_version;
        let endpoint = session.endpoint(limits_service_types(version))?;
        let url = join_path(&endpoint, "limits")?;

        debug!(%url, ?version, "Getting volume limits");
        let response: LimitsResponse = get_json(session, url, SERVICE).await?;
        Ok(response.limits.absolute.into())
    }
}
