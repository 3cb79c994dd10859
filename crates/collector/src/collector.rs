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

//! Collection cycle: authenticate, query every family concurrently, then
//! assemble the observations in a fixed order.

use crate::snapshot::{Family, FamilyFailure, Snapshot};
use crate::{CollectError, Dialect, ExporterSettings, Readers, Result};
use stackscrape_keystone::SessionProvider;
use stackscrape_metrics::PrometheusMetric;
use stackscrape_metrics::collectors::{
    collect_compute_limit_metrics, collect_container_metrics, collect_duration_metric, collect_instance_metrics,
    collect_volume_ceiling_metrics, collect_volume_limit_metrics, collect_volume_metrics,
};
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, Instant};
use tokio_util::sync::CancellationToken;
use tracing::{Instrument, debug, error, info_span, warn};

pub struct Collector {
    provider: Arc<dyn SessionProvider>,
    readers: Readers,
    settings: ExporterSettings,
    cycles: AtomicU64,
}

impl Collector {
    pub fn new(provider: Arc<dyn SessionProvider>, readers: Readers, settings: ExporterSettings) -> Self {
        Self {
            provider,
            readers,
            settings,
            cycles: AtomicU64::new(0),
        }
    }

    /// Collector using the HTTP readers, sharing `provider` with the OBS reader
    pub fn openstack(provider: Arc<dyn SessionProvider>, settings: ExporterSettings) -> Self {
        let readers = Readers::openstack(provider.clone(), settings.obs_concurrency);
        Self::new(provider, readers, settings)
    }

    pub fn settings(&self) -> &ExporterSettings {
        &self.settings
    }

    /// Number of cycles started so far
    pub fn cycles(&self) -> u64 {
        self.cycles.load(Ordering::Relaxed)
    }

    /// Run one collection cycle.
    ///
    /// Cancelling `cancel` drops every outstanding request and returns
    /// [`CollectError::Cancelled`].
    pub async fn collect(&self, cancel: &CancellationToken) -> std::result::Result<Snapshot, CollectError> {
        let cycle = self.cycles.fetch_add(1, Ordering::Relaxed) + 1;
        let span = info_span!("collect", cycle);

        tokio::select! {
            biased;
            _ = cancel.cancelled() => {
                warn!(cycle, "Collection cancelled");
                Err(CollectError::Cancelled)
            }
            result = self.run_cycle().instrument(span) => result,
        }
    }

    async fn run_cycle(&self) -> std::result::Result<Snapshot, CollectError> {
        let started = Instant::now();
        debug!(state = "start", "Starting collection");

        let session = match self.provider.authenticate().await {
            Ok(session) => session,
            Err(source) => {
                let elapsed = started.elapsed();
                error!(state = "failed", error = %source, ?elapsed, "Failed to authenticate to OpenStack API");
                return Err(CollectError::Authentication { source, elapsed });
            }
        };

        let dialect = Dialect::from_auth_url(session.auth_url());
        debug!(state = "authenticated", %dialect, "Authenticated");

        let compute = &self.readers.compute;
        let block_storage = &self.readers.block_storage;
        let object_storage = self.readers.object_storage(dialect);

        let volume_limits = async {
            if dialect.queries_volume_limits() {
                Some(block_storage.volume_limits(&session).await)
            } else {
                None
            }
        };

        let (compute_limits, instances, volumes, volume_limits, containers) = tokio::join!(
            compute.compute_limits(&session),
            compute.list_instances(&session),
            block_storage.list_volumes(&session),
            volume_limits,
            object_storage.list_containers(&session),
        );

        let mut assembly = Assembly::default();

        if let Some(limits) = assembly.take(Family::ComputeLimits, compute_limits) {
            assembly.extend(collect_compute_limit_metrics(&limits));
        }
        if let Some(instances) = assembly.take(Family::Instances, instances) {
            assembly.extend(collect_instance_metrics(&instances));
        }
        debug!(state = "compute_collected", "Compute collected");

        let volumes = assembly.take(Family::Volumes, volumes);
        if let Some(volumes) = &volumes {
            assembly.extend(collect_volume_metrics(volumes));
        }
        match volume_limits {
            Some(result) => {
                if let Some(limits) = assembly.take(Family::VolumeLimits, result) {
                    assembly.extend(collect_volume_limit_metrics(&limits));
                }
            }
            None => {
                if let Some(volumes) = &volumes {
                    assembly.extend(collect_volume_ceiling_metrics(self.settings.volume_limit, volumes.len()));
                }
            }
        }
        debug!(state = "volumes_collected", "Volumes collected");

        if let Some(containers) = assembly.take(Family::Containers, containers) {
            assembly.extend(collect_container_metrics(&containers));
        }
        debug!(state = "containers_collected", "Containers collected");

        let elapsed = started.elapsed();
        Ok(assembly.finish(dialect, elapsed))
    }
}

impl std::fmt::Debug for Collector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Collector")
            .field("settings", &self.settings)
            .field("cycles", &self.cycles())
            .finish_non_exhaustive()
    }
}

#[derive(Default)]
struct Assembly {
    observations: Vec<PrometheusMetric>,
    failures: Vec<FamilyFailure>,
}

impl Assembly {
    /// Keep the value of a successful family, record the failure otherwise
    fn take<T>(&mut self, family: Family, result: Result<T>) -> Option<T> {
        match result {
            Ok(value) => Some(value),
            Err(error) => {
                error!(%family, %error, "Failed to collect");
                self.failures.push(FamilyFailure { family, error });
                None
            }
        }
    }

    fn extend(&mut self, metrics: Vec<PrometheusMetric>) {
        self.observations.extend(metrics);
    }

    fn finish(mut self, dialect: Dialect, elapsed: Duration) -> Snapshot {
        self.observations.push(collect_duration_metric(elapsed));
        debug!(
            state = "done",
            observations = self.observations.len(),
            failures = self.failures.len(),
            ?elapsed,
            "Collection finished"
        );

        Snapshot {
            observations: self.observations,
            failures: self.failures,
            dialect,
            elapsed,
        }
    }
}
