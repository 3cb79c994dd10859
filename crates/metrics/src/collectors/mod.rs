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

//! Prometheus metric collectors for OpenStack resources.
//!
//! Each collector turns one kind of resource record into gauges:
//!
//! - [`compute`]: project compute limits, instances per flavor and status
//! - [`volume`]: volumes per status, block-storage limits or the configured ceiling
//! - [`container`]: bytes stored per object-storage container
//!
//! Collectors accept the plain records from [`crate::resources`] so they can
//! be fed from any API dialect.
//!
//! # Example
//!
//! ```
//! use stackscrape_metrics::collectors::{collect_container_metrics, collect_duration_metric};
//! use stackscrape_metrics::{Container, render_metrics};
//! use std::time::Duration;
//!
//! let mut metrics = collect_container_metrics(&[Container { name: "logs".to_string(), bytes: 2048 }]);
//! metrics.push(collect_duration_metric(Duration::from_millis(1500)));
//!
//! let text = render_metrics(&metrics);
//! assert!(text.contains("openstack_container_bytes_used{container=\"logs\"} 2048"));
//! assert!(text.contains("openstack_collect_duration_seconds 1.5"));
//! ```

mod compute;
mod container;
mod volume;

pub use compute::{collect_compute_limit_metrics, collect_instance_metrics};
pub use container::collect_container_metrics;
pub use volume::{collect_volume_ceiling_metrics, collect_volume_limit_metrics, collect_volume_metrics};

use crate::format::PrometheusMetric;
use std::time::Duration;

const METRIC_COLLECT_DURATION: &str = "openstack_collect_duration_seconds";
const HELP_COLLECT_DURATION: &str = "The time it took to collect the metrics in seconds";

/// Wall-clock duration of one collection cycle
#[must_use]
pub fn collect_duration_metric(elapsed: Duration) -> PrometheusMetric {
    PrometheusMetric::gauge(METRIC_COLLECT_DURATION, HELP_COLLECT_DURATION, elapsed.as_secs_f64())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collect_duration_metric() {
        let metric = collect_duration_metric(Duration::from_millis(250));
        assert_eq!(metric.name, METRIC_COLLECT_DURATION);
        assert_eq!(metric.value, 0.25);
        assert!(metric.labels.is_empty());
    }
}
