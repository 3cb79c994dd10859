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

use crate::{Dialect, ReaderError};
use stackscrape_metrics::{PrometheusMetric, render_metrics};
use std::fmt;
use std::time::Duration;

/// Observations produced by one reader call; the unit of failure isolation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Family {
    ComputeLimits,
    Instances,
    Volumes,
    VolumeLimits,
    Containers,
}

impl Family {
    pub fn as_str(&self) -> &'static str {
        match self {
            Family::ComputeLimits => "compute_limits",
            Family::Instances => "instances",
            Family::Volumes => "volumes",
            Family::VolumeLimits => "volume_limits",
            Family::Containers => "containers",
        }
    }
}

impl fmt::Display for Family {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug)]
pub struct FamilyFailure {
    pub family: Family,
    pub error: ReaderError,
}

/// Result of one collection cycle.
///
/// Observations of a failed family are absent, never zero.
#[derive(Debug)]
pub struct Snapshot {
    pub observations: Vec<PrometheusMetric>,
    pub failures: Vec<FamilyFailure>,
    pub dialect: Dialect,
    pub elapsed: Duration,
}

impl Snapshot {
    /// Prometheus text exposition of the observations
    pub fn render(&self) -> String {
        render_metrics(&self.observations)
    }

    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }

    pub fn has_failed(&self, family: Family) -> bool {
        self.failures.iter().any(|f| f.family == family)
    }

    pub fn metrics_named<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a PrometheusMetric> + 'a {
        self.observations.iter().filter(move |m| m.name == name)
    }

    /// Value of the first unlabelled sample called `name`
    pub fn value_of(&self, name: &str) -> Option<f64> {
        self.metrics_named(name).find(|m| m.labels.is_empty()).map(|m| m.value)
    }
}
