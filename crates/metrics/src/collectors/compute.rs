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

//! Compute (Nova) metrics collector.

use crate::aggregate::{count_by_flavor, count_by_status};
use crate::format::PrometheusMetric;
use crate::{ComputeLimits, Instance};

const METRIC_MAX_TOTAL_CORES: &str = "openstack_max_total_cores";
const METRIC_MAX_TOTAL_INSTANCES: &str = "openstack_max_total_instances";
const METRIC_MAX_TOTAL_RAM_SIZE: &str = "openstack_max_total_ram_size";
const METRIC_TOTAL_CORES_USED: &str = "openstack_total_cores_used";
const METRIC_TOTAL_INSTANCES_USED: &str = "openstack_total_instances_used";
const METRIC_TOTAL_RAM_USED: &str = "openstack_total_ram_used";
const METRIC_PER_FLAVOR: &str = "openstack_per_flavor_instance_count";
const METRIC_PER_STATUS: &str = "openstack_per_status_instance_count";

const HELP_MAX_TOTAL_CORES: &str = "The limit of cores that can be assigned to instances in the project";
const HELP_MAX_TOTAL_INSTANCES: &str = "The limit of total instances in the project";
const HELP_MAX_TOTAL_RAM_SIZE: &str = "The limit of RAM that can be assigned to instances in the project";
const HELP_TOTAL_CORES_USED: &str = "The current number of cores used";
const HELP_TOTAL_INSTANCES_USED: &str = "The current number of instances";
const HELP_TOTAL_RAM_USED: &str = "The current number RAM used";
const HELP_PER_FLAVOR: &str = "Number of instances per flavor";
const HELP_PER_STATUS: &str = "Number of instances per status";

const LIMIT_METRIC_COUNT: usize = 6;

/// Collects the absolute compute limits of the project.
///
/// # Metrics Produced
///
/// - `openstack_max_total_cores`
/// - `openstack_max_total_instances`
/// - `openstack_max_total_ram_size`
/// - `openstack_total_cores_used`
/// - `openstack_total_instances_used`
/// - `openstack_total_ram_used`
///
/// # Example
///
/// ```
/// use stackscrape_metrics::ComputeLimits;
/// use stackscrape_metrics::collectors::collect_compute_limit_metrics;
///
/// let limits = ComputeLimits { max_total_cores: 20, total_cores_used: 4, ..Default::default() };
/// let metrics = collect_compute_limit_metrics(&limits);
/// assert_eq!(metrics.len(), 6);
/// ```
#[must_use]
pub fn collect_compute_limit_metrics(limits: &ComputeLimits) -> Vec<PrometheusMetric> {
    let mut metrics = Vec::with_capacity(LIMIT_METRIC_COUNT);

    metrics.push(PrometheusMetric::gauge(
        METRIC_MAX_TOTAL_CORES,
        HELP_MAX_TOTAL_CORES,
        limits.max_total_cores as f64,
    ));
    metrics.push(PrometheusMetric::gauge(
        METRIC_MAX_TOTAL_INSTANCES,
        HELP_MAX_TOTAL_INSTANCES,
        limits.max_total_instances as f64,
    ));
    metrics.push(PrometheusMetric::gauge(
        METRIC_MAX_TOTAL_RAM_SIZE,
        HELP_MAX_TOTAL_RAM_SIZE,
        limits.max_total_ram_size as f64,
    ));
    metrics.push(PrometheusMetric::gauge(
        METRIC_TOTAL_CORES_USED,
        HELP_TOTAL_CORES_USED,
        limits.total_cores_used as f64,
    ));
    metrics.push(PrometheusMetric::gauge(
        METRIC_TOTAL_INSTANCES_USED,
        HELP_TOTAL_INSTANCES_USED,
        limits.total_instances_used as f64,
    ));
    metrics.push(PrometheusMetric::gauge(
        METRIC_TOTAL_RAM_USED,
        HELP_TOTAL_RAM_USED,
        limits.total_ram_used as f64,
    ));

    metrics
}

/// Collects per-flavor and per-status instance counts.
///
/// Flavor samples come first, then status samples, each in key order.
/// An empty instance list yields no samples.
#[must_use]
pub fn collect_instance_metrics(instances: &[Instance]) -> Vec<PrometheusMetric> {
    let flavors = count_by_flavor(instances);
    let statuses = count_by_status(instances);

    let mut metrics = Vec::with_capacity(flavors.len() + statuses.len());
    for (flavor, count) in flavors {
        metrics.push(PrometheusMetric::gauge(METRIC_PER_FLAVOR, HELP_PER_FLAVOR, count as f64).with_label("flavor", flavor));
    }
    for (status, count) in statuses {
        metrics.push(PrometheusMetric::gauge(METRIC_PER_STATUS, HELP_PER_STATUS, count as f64).with_label("status", status));
    }

    metrics
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MetricType;

    #[test]
    fn test_collect_compute_limit_metrics() {
        let limits = ComputeLimits {
            max_total_cores: 20,
            max_total_instances: 10,
            max_total_ram_size: 51200,
            total_cores_used: 6,
            total_instances_used: 3,
            total_ram_used: 12288,
        };

        let metrics = collect_compute_limit_metrics(&limits);
        let names: Vec<&str> = metrics.iter().map(|m| m.name).collect();
        assert_eq!(
            names,
            [
                METRIC_MAX_TOTAL_CORES,
                METRIC_MAX_TOTAL_INSTANCES,
                METRIC_MAX_TOTAL_RAM_SIZE,
                METRIC_TOTAL_CORES_USED,
                METRIC_TOTAL_INSTANCES_USED,
                METRIC_TOTAL_RAM_USED
            ]
        );
        assert_eq!(metrics[2].value, 51200.0);
        assert_eq!(metrics[5].value, 12288.0);
        assert!(metrics.iter().all(|m| m.metric_type == MetricType::Gauge && m.labels.is_empty()));
    }

    #[test]
    fn test_unlimited_quota_is_negative() {
        let limits = ComputeLimits {
            max_total_instances: -1,
            ..Default::default()
        };
        let metrics = collect_compute_limit_metrics(&limits);
        assert_eq!(metrics[1].value, -1.0);
    }

    #[test]
    fn test_collect_instance_metrics() {
        let instances = vec![
            Instance {
                id: "1".to_string(),
                flavor_id: "a".to_string(),
                status: "ACTIVE".to_string(),
            },
            Instance {
                id: "2".to_string(),
                flavor_id: "b".to_string(),
                status: "ERROR".to_string(),
            },
            Instance {
                id: "3".to_string(),
                flavor_id: "a".to_string(),
                status: "ACTIVE".to_string(),
            },
        ];

        let metrics = collect_instance_metrics(&instances);
        assert_eq!(metrics.len(), 4);

        assert_eq!(metrics[0].name, METRIC_PER_FLAVOR);
        assert_eq!(metrics[0].label("flavor"), Some("a"));
        assert_eq!(metrics[0].value, 2.0);
        assert_eq!(metrics[1].label("flavor"), Some("b"));
        assert_eq!(metrics[1].value, 1.0);

        assert_eq!(metrics[2].name, METRIC_PER_STATUS);
        assert_eq!(metrics[2].label("status"), Some("ACTIVE"));
        assert_eq!(metrics[2].value, 2.0);
        assert_eq!(metrics[3].label("status"), Some("ERROR"));
    }

    #[test]
    fn test_no_instances() {
        assert!(collect_instance_metrics(&[]).is_empty());
    }
}
