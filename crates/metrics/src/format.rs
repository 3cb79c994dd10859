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

//! Prometheus text exposition format renderer.
//!
//! Samples sharing a name must be adjacent in the input; `HELP` and `TYPE`
//! are written once, before the first sample of each name.

use crate::MetricType;
use std::borrow::Cow;
use std::collections::HashSet;
use std::fmt::Write;

/// A single Prometheus metric with labels and value.
///
/// Name and help text are `&'static str` since every metric this crate
/// produces is a compile-time constant; label values come from the control
/// plane and are usually owned.
#[derive(Debug, Clone, PartialEq)]
pub struct PrometheusMetric {
    /// The metric name (e.g., "openstack_total_cores_used").
    pub name: &'static str,
    pub metric_type: MetricType,
    /// Human-readable description shown in Prometheus UI.
    pub help: &'static str,
    /// Key-value label pairs for this metric instance.
    pub labels: Vec<(&'static str, Cow<'static, str>)>,
    pub value: f64,
}

impl PrometheusMetric {
    /// Creates a new metric with the given name, type, help text, and value.
    #[inline]
    pub const fn new(name: &'static str, metric_type: MetricType, help: &'static str, value: f64) -> Self {
        Self {
            name,
            metric_type,
            help,
            labels: Vec::new(),
            value,
        }
    }

    /// Shorthand for a gauge
    #[inline]
    pub const fn gauge(name: &'static str, help: &'static str, value: f64) -> Self {
        Self::new(name, MetricType::Gauge, help, value)
    }

    /// Adds a single label to this metric.
    #[inline]
    pub fn with_label(mut self, key: &'static str, value: impl Into<Cow<'static, str>>) -> Self {
        self.labels.push((key, value.into()));
        self
    }

    /// Value of the label `key`, if present
    pub fn label(&self, key: &str) -> Option<&str> {
        self.labels.iter().find(|(k, _)| *k == key).map(|(_, v)| v.as_ref())
    }
}

/// Render metrics in Prometheus text exposition format
pub fn render_metrics(metrics: &[PrometheusMetric]) -> String {
    let mut output = String::new();
    let mut seen_metrics: HashSet<&str> = HashSet::new();

    for metric in metrics {
        // Add HELP and TYPE only once per metric name
        if seen_metrics.insert(metric.name) {
            let _ = writeln!(output, "# HELP {} {}", metric.name, escape_help(metric.help));
            let _ = writeln!(output, "# TYPE {} {}", metric.name, metric.metric_type.as_str());
        }

        if metric.labels.is_empty() {
            let _ = writeln!(output, "{} {}", metric.name, format_value(metric.value));
        } else {
            let labels: Vec<String> = metric
                .labels
                .iter()
                .map(|(k, v)| format!("{}=\"{}\"", k, escape_label_value(v)))
                .collect();
            let _ = writeln!(output, "{}{{{}}} {}", metric.name, labels.join(","), format_value(metric.value));
        }
    }

    output
}

/// Escape label values for the text exposition format
fn escape_label_value(s: &str) -> String {
    s.replace('\\', "\\\\").replace('"', "\\\"").replace('\n', "\\n")
}

/// Escape help text
fn escape_help(s: &str) -> String {
    s.replace('\\', "\\\\").replace('\n', "\\n")
}

/// Format float value for Prometheus
fn format_value(v: f64) -> String {
    if v.is_nan() {
        "NaN".to_string()
    } else if v.is_infinite() {
        if v.is_sign_positive() { "+Inf" } else { "-Inf" }.to_string()
    } else if v.fract() == 0.0 && v.abs() < 1e15 {
        format!("{:.0}", v)
    } else {
        format!("{}", v)
    }
}
