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

use crate::Container;
use crate::format::PrometheusMetric;

const METRIC_BYTES_USED: &str = "openstack_container_bytes_used";
const HELP_BYTES_USED: &str = "The total of bytes stored in the container";

/// One `openstack_container_bytes_used{container}` sample per container,
/// in the order the containers were listed.
#[must_use]
pub fn collect_container_metrics(containers: &[Container]) -> Vec<PrometheusMetric> {
    containers
        .iter()
        .map(|c| PrometheusMetric::gauge(METRIC_BYTES_USED, HELP_BYTES_USED, c.bytes as f64).with_label("container", c.name.clone()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collect_container_metrics() {
        let containers = vec![
            Container {
                name: "y".to_string(),
                bytes: 250,
            },
            Container {
                name: "x".to_string(),
                bytes: 100,
            },
        ];

        let metrics = collect_container_metrics(&containers);
        assert_eq!(metrics.len(), 2);
        assert_eq!(metrics[0].label("container"), Some("y"));
        assert_eq!(metrics[0].value, 250.0);
        assert_eq!(metrics[1].label("container"), Some("x"));
        assert_eq!(metrics[1].value, 100.0);
    }
}
