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

//! Block-storage (Cinder) metrics collector.

use crate::aggregate::count_by_status;
use crate::format::PrometheusMetric;
use crate::{Volume, VolumeLimits};

const METRIC_MAX_TOTAL_VOLUME_GIGABYTES: &str = "openstack_max_total_volume_gigabytes";
const METRIC_MAX_TOTAL_VOLUMES: &str = "openstack_max_total_volumes";
const METRIC_TOTAL_VOLUME_GIGABYTES_USED: &str = "openstack_total_volume_gigabytes_used";
const METRIC_TOTAL_VOLUMES_USED: &str = "openstack_total_volumes_used";
const METRIC_PER_STATUS: &str = "openstack_per_status_volume_count";

const HELP_MAX_TOTAL_VOLUME_GIGABYTES: &str = "The limit of total volume size in the project";
const HELP_MAX_TOTAL_VOLUMES: &str = "The limit of total volumes in the project";
const HELP_TOTAL_VOLUME_GIGABYTES_USED: &str = "The current total of gigabytes used in volumes";
const HELP_TOTAL_VOLUMES_USED: &str = "The current number of volumes";
const HELP_PER_STATUS: &str = "Number of volumes per status";

/// Collects per-status volume counts.
#[must_use]
pub fn collect_volume_metrics(volumes: &[Volume]) -> Vec<PrometheusMetric> {
    count_by_status(volumes)
        .into_iter()
        .map(|(status, count)| PrometheusMetric::gauge(METRIC_PER_STATUS, HELP_PER_STATUS, count as f64).with_label("status", status))
        .collect()
}

/// Collects the absolute block-storage limits of the project.
///
/// # Metrics Produced
///
/// - `openstack_max_total_volume_gigabytes`
/// - `openstack_max_total_volumes`
/// - `openstack_total_volume_gigabytes_used`
/// - `openstack_total_volumes_used`
#[must_use]
pub fn collect_volume_limit_metrics(limits: &VolumeLimits) -> Vec<PrometheusMetric> {
    vec![
        PrometheusMetric::gauge(
            METRIC_MAX_TOTAL_VOLUME_GIGABYTES,
            HELP_MAX_TOTAL_VOLUME_GIGABYTES,
            limits.max_total_volume_gigabytes as f64,
        ),
        PrometheusMetric::gauge(METRIC_MAX_TOTAL_VOLUMES, HELP_MAX_TOTAL_VOLUMES, limits.max_total_volumes as f64),
        PrometheusMetric::gauge(
            METRIC_TOTAL_VOLUME_GIGABYTES_USED,
            HELP_TOTAL_VOLUME_GIGABYTES_USED,
            limits.total_gigabytes_used as f64,
        ),
        PrometheusMetric::gauge(METRIC_TOTAL_VOLUMES_USED, HELP_TOTAL_VOLUMES_USED, limits.total_volumes_used as f64),
    ]
}

/// Volume ceiling and usage for clouds whose limits API is not queried.
///
/// The ceiling is the configured value; usage is the length of the volume
/// list. No gigabyte samples are produced.
#[must_use]
pub fn collect_volume_ceiling_metrics(volume_limit: f64, volume_count: usize) -> Vec<PrometheusMetric> {
    vec![
        PrometheusMetric::gauge(METRIC_MAX_TOTAL_VOLUMES, HELP_MAX_TOTAL_VOLUMES, volume_limit),
        PrometheusMetric::gauge(METRIC_TOTAL_VOLUMES_USED, HELP_TOTAL_VOLUMES_USED, volume_count as f64),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn volume(id: &str, status: &str) -> Volume {
        Volume {
            id: id.to_string(),
            status: status.to_string(),
        }
    }

    #[test]
    fn test_collect_volume_metrics() {
        let volumes = vec![volume("1", "in-use"), volume("2", "available"), volume("3", "in-use")];
        let metrics = collect_volume_metrics(&volumes);

        assert_eq!(metrics.len(), 2);
        assert_eq!(metrics[0].name, METRIC_PER_STATUS);
        assert_eq!(metrics[0].label("status"), Some("available"));
        assert_eq!(metrics[0].value, 1.0);
        assert_eq!(metrics[1].label("status"), Some("in-use"));
        assert_eq!(metrics[1].value, 2.0);
    }

    #[test]
    fn test_collect_volume_limit_metrics() {
        let limits = VolumeLimits {
            max_total_volumes: 10,
            max_total_volume_gigabytes: 1000,
            total_volumes_used: 3,
            total_gigabytes_used: 120,
        };
        let metrics = collect_volume_limit_metrics(&limits);
        let pairs: Vec<(&str, f64)> = metrics.iter().map(|m| (m.name, m.value)).collect();
        assert_eq!(
            pairs,
            [
                (METRIC_MAX_TOTAL_VOLUME_GIGABYTES, 1000.0),
                (METRIC_MAX_TOTAL_VOLUMES, 10.0),
                (METRIC_TOTAL_VOLUME_GIGABYTES_USED, 120.0),
                (METRIC_TOTAL_VOLUMES_USED, 3.0)
            ]
        );
    }

    #[test]
    fn test_collect_volume_ceiling_metrics() {
        let metrics = collect_volume_ceiling_metrics(-1.0, 3);
        assert_eq!(metrics.len(), 2);
        assert_eq!((metrics[0].name, metrics[0].value), (METRIC_MAX_TOTAL_VOLUMES, -1.0));
        assert_eq!((metrics[1].name, metrics[1].value), (METRIC_TOTAL_VOLUMES_USED, 3.0));
        assert!(metrics.iter().all(|m| !m.name.contains("gigabytes")));
    }
}
