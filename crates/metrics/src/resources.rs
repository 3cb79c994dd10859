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

//! Plain resource records read from the control plane.
//!
//! Readers populate these from their wire formats; aggregators and
//! collectors consume them without knowing which API produced them.

/// A compute instance (Nova server)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Instance {
    pub id: String,
    pub flavor_id: String,
    pub status: String,
}

/// A block-storage volume (Cinder volume)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Volume {
    pub id: String,
    pub status: String,
}

/// An object-storage container or bucket
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Container {
    pub name: String,
    pub bytes: u64,
}

/// Absolute compute limits of the project
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ComputeLimits {
    pub max_total_cores: i64,
    pub max_total_instances: i64,
    pub max_total_ram_size: i64,
    pub total_cores_used: i64,
    pub total_instances_used: i64,
    pub total_ram_used: i64,
}

/// Absolute block-storage limits of the project
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct VolumeLimits {
    pub max_total_volumes: i64,
    pub max_total_volume_gigabytes: i64,
    pub total_volumes_used: i64,
    pub total_gigabytes_used: i64,
}
