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

//! Grouping of resource lists into counts.
//!
//! Keys are compared by exact string equality. The returned maps iterate in
//! key order so rendered output is stable between scrapes.

use crate::{Instance, Volume};
use std::collections::BTreeMap;

/// Resources that report a lifecycle status
pub trait HasStatus {
    fn status(&self) -> &str;
}

impl HasStatus for Instance {
    fn status(&self) -> &str {
        &self.status
    }
}

impl HasStatus for Volume {
    fn status(&self) -> &str {
        &self.status
    }
}

/// Number of instances per flavor id
pub fn count_by_flavor(instances: &[Instance]) -> BTreeMap<String, u64> {
    count_by(instances, |i| i.flavor_id.as_str())
}

/// Number of resources per status
pub fn count_by_status<T: HasStatus>(items: &[T]) -> BTreeMap<String, u64> {
    count_by(items, T::status)
}

fn count_by<T, F>(items: &[T], key: F) -> BTreeMap<String, u64>
where
    F: Fn(&T) -> &str,
{
    let mut counts: BTreeMap<String, u64> = BTreeMap::new();
    for item in items {
        let key = key(item);
        match counts.get_mut(key) {
            Some(count) => *count += 1,
            None => {
                counts.insert(key.to_string(), 1);
            }
        }
    }
    counts
}
