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

//! Request signing for the Open Telekom Cloud OBS object storage API.
//!
//! OBS uses an HMAC-SHA1 header signature close to the legacy S3 V2 scheme,
//! with its own `OBS` algorithm tag and `x-obs-` header prefix.

pub mod constants;
pub mod crypto;
pub mod error;
pub mod request_signature_obs;

pub use error::{Result, SignerError};
pub use request_signature_obs::{canonical_resource, http_date, sign_obs, string_to_sign};
