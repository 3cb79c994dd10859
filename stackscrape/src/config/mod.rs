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

use clap::builder::FalseyValueParser;
use clap::{ArgAction, Parser};
use stackscrape_collector::ExporterSettings;
use stackscrape_config::{
    APP_NAME, DEFAULT_BIND_ADDRESS, DEFAULT_HTTP_TIMEOUT_SECS, DEFAULT_LOG_FORMAT, DEFAULT_LOG_LEVEL, DEFAULT_OBS_CONCURRENCY,
    DEFAULT_PORT, DEFAULT_SCRAPE_TIMEOUT_SECS, DEFAULT_VOLUME_LIMIT, ENV_OS_INSECURE, VERSION,
};
use stackscrape_keystone::ClientOptions;
use stackscrape_obs::{LogFormat, LoggingConfig};
use std::time::Duration;

/// Exporter command line.
///
/// Cloud credentials are not options: they come from the `OS_*`
/// environment, re-read on every scrape.
#[derive(Debug, Clone, Parser)]
#[command(name = APP_NAME, version = VERSION, about = "Prometheus exporter for OpenStack project quotas and resource usage")]
pub struct Opt {
    /// Port to listen on
    #[arg(long, env = "STACKSCRAPE_PORT", default_value_t = DEFAULT_PORT)]
    pub port: u16,

    /// Address to bind, an IP or hostname
    #[arg(long, env = "STACKSCRAPE_ADDRESS", default_value = DEFAULT_BIND_ADDRESS)]
    pub address: String,

    /// Value reported as openstack_max_total_volumes on Open Telekom Cloud
    #[arg(
        long = "volume.limit",
        env = "STACKSCRAPE_VOLUME_LIMIT",
        default_value_t = DEFAULT_VOLUME_LIMIT,
        allow_negative_numbers = true
    )]
    pub volume_limit: f64,

    /// Concurrent per-bucket requests against OBS
    #[arg(long = "obs.concurrency", env = "STACKSCRAPE_OBS_CONCURRENCY", default_value_t = DEFAULT_OBS_CONCURRENCY)]
    pub obs_concurrency: usize,

    /// Timeout of a single control-plane request, in seconds
    #[arg(long = "http.timeout", env = "STACKSCRAPE_HTTP_TIMEOUT", default_value_t = DEFAULT_HTTP_TIMEOUT_SECS)]
    pub http_timeout: u64,

    /// Scrape deadline when Prometheus does not announce one, in seconds
    #[arg(long = "scrape.timeout", env = "STACKSCRAPE_SCRAPE_TIMEOUT", default_value_t = DEFAULT_SCRAPE_TIMEOUT_SECS)]
    pub scrape_timeout: u64,

    /// Log level or filter directive
    #[arg(long = "log.level", env = "STACKSCRAPE_LOG_LEVEL", default_value = DEFAULT_LOG_LEVEL)]
    pub log_level: String,

    /// Log output format: text or json
    #[arg(long = "log.format", env = "STACKSCRAPE_LOG_FORMAT", default_value = DEFAULT_LOG_FORMAT)]
    pub log_format: LogFormat,

    /// Skip TLS certificate verification towards the cloud
    #[arg(long, env = ENV_OS_INSECURE, action = ArgAction::SetTrue, value_parser = FalseyValueParser::new())]
    pub insecure: bool,
}

impl Opt {
    pub fn logging_config(&self) -> LoggingConfig {
        LoggingConfig {
            level: self.log_level.clone(),
            format: self.log_format,
        }
    }

    pub fn client_options(&self) -> ClientOptions {
        ClientOptions {
            timeout: Duration::from_secs(self.http_timeout),
            verify_ssl: !self.insecure,
        }
    }

    pub fn exporter_settings(&self) -> ExporterSettings {
        ExporterSettings {
            volume_limit: self.volume_limit,
            obs_concurrency: self.obs_concurrency,
        }
    }

    pub fn scrape_timeout(&self) -> Duration {
        Duration::from_secs(self.scrape_timeout)
    }
}
