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

//! Compute (Nova) reader.

use crate::http::{Link, get_json, next_link};
use crate::{ReaderError, Result};
use async_trait::async_trait;
use serde::Deserialize;
use serde_json::Value;
use stackscrape_keystone::{Session, join_path};
use stackscrape_metrics::{ComputeLimits, Instance};
use std::collections::HashSet;
use tracing::debug;

pub const COMPUTE_SERVICE_TYPES: &[&str] = &["compute"];

const SERVICE: &str = "compute";

#[async_trait]
pub trait ComputeReader: Send + Sync {
    /// Absolute compute limits of the session's project
    async fn compute_limits(&self, session: &Session) -> Result<ComputeLimits>;

    /// Every instance of the project, across all pages
    async fn list_instances(&self, session: &Session) -> Result<Vec<Instance>>;
}

#[derive(Debug, Clone, Default)]
pub struct NovaReader;

#[derive(Deserialize)]
struct LimitsResponse {
    limits: LimitsBody,
}

#[derive(Deserialize)]
struct LimitsBody {
    absolute: AbsoluteLimits,
}

#[derive(Deserialize)]
struct AbsoluteLimits {
    #[serde(rename = "maxTotalCores")]
    max_total_cores: i64,
    #[serde(rename = "maxTotalInstances")]
    max_total_instances: i64,
    #[serde(rename = "maxTotalRAMSize")]
    max_total_ram_size: i64,
    #[serde(rename = "totalCoresUsed")]
    total_cores_used: i64,
    #[serde(rename = "totalInstancesUsed")]
    total_instances_used: i64,
    #[serde(rename = "totalRAMUsed")]
    total_ram_used: i64,
}

#[derive(Deserialize)]
struct ServersPage {
    servers: Vec<ServerEntry>,
    #[serde(default)]
    servers_links: Vec<Link>,
}

#[derive(Deserialize)]
struct ServerEntry {
    id: String,
    status: String,
    #[serde(default)]
    flavor: Value,
}

impl TryFrom<ServerEntry> for Instance {
    type Error = ReaderError;

    fn try_from(server: ServerEntry) -> Result<Self> {
        let flavor_id = server
            .flavor
            .get("id")
            .and_then(Value::as_str)
            .ok_or_else(|| ReaderError::data_shape("server flavor", format!("server {} has no flavor id", server.id)))?
            .to_string();

        Ok(Instance {
            id: server.id,
            flavor_id,
            status: server.status,
        })
    }
}

impl From<AbsoluteLimits> for ComputeLimits {
    fn from(a: AbsoluteLimits) -> Self {
        ComputeLimits {
            max_total_cores: a.max_total_cores,
            max_total_instances: a.max_total_instances,
            max_total_ram_size: a.max_total_ram_size,
            total_cores_used: a.total_cores_used,
            total_instances_used: a.total_instances_used,
            total_ram_used: a.total_ram_used,
        }
    }
}

#[async_trait]
impl ComputeReader for NovaReader {
    async fn compute_limits(&self, session: &Session) -> Result<ComputeLimits> {
        let endpoint = session.endpoint(COMPUTE_SERVICE_TYPES)?;
        let url = join_path(&endpoint, "limits")?;

        debug!(%url, "Getting compute limits");
        let response: LimitsResponse = get_json(session, url, SERVICE).await?;
        Ok(response.limits.absolute.into())
    }

    async fn list_instances(&self, session: &Session) -> Result<Vec<Instance>> {
        let endpoint = session.endpoint(COMPUTE_SERVICE_TYPES)?;
        let mut next = Some(join_path(&endpoint, "servers/detail")?);
        let mut visited = HashSet::new();
        let mut instances = Vec::new();

        debug!("Getting all servers");
        while let Some(url) = next.take() {
            if !visited.insert(url.clone()) {
                return Err(ReaderError::data_shape("servers pagination", format!("link loop at {url}")));
            }

            let page: ServersPage = get_json(session, url, SERVICE).await?;
            next = next_link(&page.servers_links)?;
            for server in page.servers {
                instances.push(Instance::try_from(server)?);
            }
        }

        debug!(count = instances.len(), pages = visited.len(), "Servers listed");
        Ok(instances)
    }
}
