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

//! OpenStack client environment variables.
//!
//! These follow the names used by the OpenStack command line clients so an
//! `openrc` file can be sourced unchanged.

/// Identity endpoint, e.g. `https://keystone.example.com:5000/v3`
pub const ENV_OS_AUTH_URL: &str = "OS_AUTH_URL";

pub const ENV_OS_USERID: &str = "OS_USERID";
pub const ENV_OS_USERNAME: &str = "OS_USERNAME";
pub const ENV_OS_PASSWORD: &str = "OS_PASSWORD";

/// Project scope; `OS_PROJECT_*` wins over the legacy `OS_TENANT_*` names
pub const ENV_OS_PROJECT_ID: &str = "OS_PROJECT_ID";
pub const ENV_OS_PROJECT_NAME: &str = "OS_PROJECT_NAME";
pub const ENV_OS_TENANT_ID: &str = "OS_TENANT_ID";
pub const ENV_OS_TENANT_NAME: &str = "OS_TENANT_NAME";

/// Domain used for both the user and the project unless overridden below
pub const ENV_OS_DOMAIN_ID: &str = "OS_DOMAIN_ID";
pub const ENV_OS_DOMAIN_NAME: &str = "OS_DOMAIN_NAME";
pub const ENV_OS_USER_DOMAIN_ID: &str = "OS_USER_DOMAIN_ID";
pub const ENV_OS_USER_DOMAIN_NAME: &str = "OS_USER_DOMAIN_NAME";
pub const ENV_OS_PROJECT_DOMAIN_ID: &str = "OS_PROJECT_DOMAIN_ID";
pub const ENV_OS_PROJECT_DOMAIN_NAME: &str = "OS_PROJECT_DOMAIN_NAME";

pub const ENV_OS_APPLICATION_CREDENTIAL_ID: &str = "OS_APPLICATION_CREDENTIAL_ID";
pub const ENV_OS_APPLICATION_CREDENTIAL_NAME: &str = "OS_APPLICATION_CREDENTIAL_NAME";
pub const ENV_OS_APPLICATION_CREDENTIAL_SECRET: &str = "OS_APPLICATION_CREDENTIAL_SECRET";

/// Region used to pick endpoints from the service catalog
pub const ENV_OS_REGION_NAME: &str = "OS_REGION_NAME";

/// Endpoint interface (`public`, `internal` or `admin`)
/// Default value: public
pub const ENV_OS_INTERFACE: &str = "OS_INTERFACE";

/// Block storage API version used for the limits query, `2` or `3`
/// Default value: 3
pub const ENV_OS_BLOCKSTORAGE_V: &str = "OS_BLOCKSTORAGE_V";

/// Access/secret key pair used by the OBS object storage dialect
pub const ENV_OS_ACCESS_KEY: &str = "OS_ACCESS_KEY";
pub const ENV_OS_SECRET_KEY: &str = "OS_SECRET_KEY";

/// Skip TLS certificate verification when `true`
/// Default value: false
pub const ENV_OS_INSECURE: &str = "OS_INSECURE";

pub const DEFAULT_OS_INTERFACE: &str = "public";
pub const DEFAULT_OS_BLOCKSTORAGE_V: &str = "3";
