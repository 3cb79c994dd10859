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

use thiserror::Error;

pub type Result<T> = std::result::Result<T, SignerError>;

#[derive(Debug, Error)]
pub enum SignerError {
    #[error("Access key and secret key are required")]
    MissingCredentials,

    #[error("Invalid signing key: {0}")]
    InvalidKey(String),

    #[error("Invalid header value: {0}")]
    InvalidHeader(String),

    #[error("Date formatting failed: {0}")]
    Format(String),
}
