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

//! Object-storage readers, one per [`Dialect`](crate::Dialect).

mod obs;
mod swift;

pub use obs::{OBS_SERVICE_TYPES, ObsReader};
pub use swift::{SWIFT_SERVICE_TYPES, SwiftReader};

use crate::Result;
use async_trait::async_trait;
use stackscrape_keystone::Session;
use stackscrape_metrics::Container;

#[async_trait]
pub trait ObjectStorageReader: Send + Sync {
    /// Every container (or bucket) with its stored bytes, in listing order
    async fn list_containers(&self, session: &Session) -> Result<Vec<Container>>;
}
