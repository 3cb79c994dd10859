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

use crate::Dialect;
use crate::block_storage::{BlockStorageReader, CinderReader};
use crate::compute::{ComputeReader, NovaReader};
use crate::object_storage::{ObjectStorageReader, ObsReader, SwiftReader};
use stackscrape_keystone::SessionProvider;
use std::sync::Arc;

/// The reader set a collector queries.
///
/// Both object-storage dialects are held; the cycle picks one with
/// [`Readers::object_storage`] once the auth URL is known.
#[derive(Clone)]
pub struct Readers {
    pub compute: Arc<dyn ComputeReader>,
    pub block_storage: Arc<dyn BlockStorageReader>,
    pub swift: Arc<dyn ObjectStorageReader>,
    pub obs: Arc<dyn ObjectStorageReader>,
}

impl Readers {
    /// HTTP readers for a real OpenStack cloud
    pub fn openstack(provider: Arc<dyn SessionProvider>, obs_concurrency: usize) -> Self {
        Self {
            compute: Arc::new(NovaReader),
            block_storage: Arc::new(CinderReader),
            swift: Arc::new(SwiftReader),
            obs: Arc::new(ObsReader::new(provider, obs_concurrency)),
        }
    }

    pub fn object_storage(&self, dialect: Dialect) -> &dyn ObjectStorageReader {
        match dialect {
            Dialect::Swift => self.swift.as_ref(),
            Dialect::Obs => self.obs.as_ref(),
        }
    }
}

impl std::fmt::Debug for Readers {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Readers").finish_non_exhaustive()
    }
}
