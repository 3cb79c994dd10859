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

//! On-demand OpenStack resource collection.
//!
//! A [`Collector`] runs one cycle per call: it authenticates, queries
//! compute, block storage and object storage concurrently against the one
//! session, and assembles a [`Snapshot`] of gauge observations in a fixed
//! order. A failing reader call only removes its own family from the
//! snapshot.
//!
//! # Example
//!
//! ```no_run
//! use stackscrape_collector::{Collector, ExporterSettings};
//! use stackscrape_keystone::{ClientOptions, KeystoneAuthenticator, KeystoneClient};
//! use std::sync::Arc;
//! use tokio_util::sync::CancellationToken;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = KeystoneClient::new(&ClientOptions::default())?;
//! let provider = Arc::new(KeystoneAuthenticator::from_env(client));
//! let collector = Collector::openstack(provider, ExporterSettings::default());
//!
//! let snapshot = collector.collect(&CancellationToken::new()).await?;
//! print!("{}", snapshot.render());
//! # Ok(())
//! # }
//! ```

pub mod block_storage;
mod collector;
pub mod compute;
mod config;
mod dialect;
mod error;
mod http;
pub mod object_storage;
mod readers;
mod snapshot;

pub use block_storage::{BlockStorageReader, CinderReader};
pub use collector::Collector;
pub use compute::{ComputeReader, NovaReader};
pub use config::ExporterSettings;
pub use dialect::Dialect;
pub use error::{CollectError, ReaderError, Result};
pub use object_storage::{ObjectStorageReader, ObsReader, SwiftReader};
pub use readers::Readers;
pub use snapshot::{Family, FamilyFailure, Snapshot};
