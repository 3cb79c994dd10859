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

use crate::{KeystoneError, Result};
use stackscrape_config::{
    DEFAULT_OS_BLOCKSTORAGE_V, DEFAULT_OS_INTERFACE, ENV_OS_ACCESS_KEY, ENV_OS_APPLICATION_CREDENTIAL_ID,
    ENV_OS_APPLICATION_CREDENTIAL_NAME, ENV_OS_APPLICATION_CREDENTIAL_SECRET, ENV_OS_AUTH_URL, ENV_OS_BLOCKSTORAGE_V,
    ENV_OS_DOMAIN_ID, ENV_OS_DOMAIN_NAME, ENV_OS_INTERFACE, ENV_OS_PASSWORD, ENV_OS_PROJECT_DOMAIN_ID,
    ENV_OS_PROJECT_DOMAIN_NAME, ENV_OS_PROJECT_ID, ENV_OS_PROJECT_NAME, ENV_OS_REGION_NAME, ENV_OS_SECRET_KEY,
    ENV_OS_TENANT_ID, ENV_OS_TENANT_NAME, ENV_OS_USER_DOMAIN_ID, ENV_OS_USER_DOMAIN_NAME, ENV_OS_USERID, ENV_OS_USERNAME,
};
use url::Url;

/// Block storage API version used for the limits query
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BlockStorageVersion {
    V2,
    #[default]
    V3,
}

impl BlockStorageVersion {
    /// Anything other than `2` selects v3.
    pub fn parse(value: &str) -> Self {
        match value.trim().trim_start_matches(['v', 'V']) {
            "2" | "2.0" => Self::V2,
            _ => Self::V3,
        }
    }
}

/// Authentication and endpoint selection options.
///
/// Mirrors the `OS_*` variables understood by the OpenStack clients. The
/// options are captured once per collection cycle and travel with the
/// [`Session`](crate::Session) they produced.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuthOptions {
    /// Keystone auth URL, with or without the `/v3` suffix
    pub auth_url: String,

    pub user_id: Option<String>,
    pub username: Option<String>,
    pub password: Option<String>,
    pub user_domain_id: Option<String>,
    pub user_domain_name: Option<String>,

    pub project_id: Option<String>,
    pub project_name: Option<String>,
    pub project_domain_id: Option<String>,
    pub project_domain_name: Option<String>,

    /// Domain scope, used when no project is given
    pub domain_id: Option<String>,
    pub domain_name: Option<String>,

    pub application_credential_id: Option<String>,
    pub application_credential_name: Option<String>,
    pub application_credential_secret: Option<String>,

    /// Region name; `None` accepts endpoints of any region
    pub region: Option<String>,

    /// Endpoint interface (default: "public")
    pub interface: String,

    pub block_storage_version: BlockStorageVersion,

    /// Access/secret key pair for the OBS object storage dialect
    pub access_key: Option<String>,
    pub secret_key: Option<String>,
}

impl AuthOptions {
    /// Load options from the process environment
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load options through an arbitrary variable lookup.
    ///
    /// Empty values are treated as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let auth_url = get(ENV_OS_AUTH_URL).ok_or_else(|| KeystoneError::ConfigError(format!("{ENV_OS_AUTH_URL} not set")))?;

        let domain_id = get(ENV_OS_DOMAIN_ID);
        let domain_name = get(ENV_OS_DOMAIN_NAME);

        let options = Self {
            auth_url,
            user_id: get(ENV_OS_USERID),
            username: get(ENV_OS_USERNAME),
            password: get(ENV_OS_PASSWORD),
            user_domain_id: get(ENV_OS_USER_DOMAIN_ID).or_else(|| domain_id.clone()),
            user_domain_name: get(ENV_OS_USER_DOMAIN_NAME).or_else(|| domain_name.clone()),
            project_id: get(ENV_OS_PROJECT_ID).or_else(|| get(ENV_OS_TENANT_ID)),
            project_name: get(ENV_OS_PROJECT_NAME).or_else(|| get(ENV_OS_TENANT_NAME)),
            project_domain_id: get(ENV_OS_PROJECT_DOMAIN_ID).or_else(|| domain_id.clone()),
            project_domain_name: get(ENV_OS_PROJECT_DOMAIN_NAME).or_else(|| domain_name.clone()),
            domain_id,
            domain_name,
            application_credential_id: get(ENV_OS_APPLICATION_CREDENTIAL_ID),
            application_credential_name: get(ENV_OS_APPLICATION_CREDENTIAL_NAME),
            application_credential_secret: get(ENV_OS_APPLICATION_CREDENTIAL_SECRET),
            region: get(ENV_OS_REGION_NAME),
            interface: get(ENV_OS_INTERFACE).unwrap_or_else(|| DEFAULT_OS_INTERFACE.to_string()),
            block_storage_version: BlockStorageVersion::parse(
                &get(ENV_OS_BLOCKSTORAGE_V).unwrap_or_else(|| DEFAULT_OS_BLOCKSTORAGE_V.to_string()),
            ),
            access_key: get(ENV_OS_ACCESS_KEY),
            secret_key: get(ENV_OS_SECRET_KEY),
        };

        options.validate()?;
        Ok(options)
    }

    /// True when an application credential secret is configured
    pub fn uses_application_credential(&self) -> bool {
        self.application_credential_secret.is_some()
    }

    /// Endpoint interface normalised to the v3 catalog spelling
    /// (`publicURL` → `public`).
    pub fn interface(&self) -> &str {
        let interface = self.interface.trim();
        let interface = interface.strip_suffix("URL").unwrap_or(interface);
        if interface.is_empty() { DEFAULT_OS_INTERFACE } else { interface }
    }

    /// Keystone v3 token endpoint derived from the auth URL
    pub fn token_url(&self) -> Result<Url> {
        let mut base = self.auth_url.trim().trim_end_matches('/').to_string();
        if !base.ends_with("/v3") {
            base.push_str("/v3");
        }
        base.push_str("/auth/tokens");

        Url::parse(&base).map_err(|e| KeystoneError::ConfigError(format!("Invalid auth URL {}: {e}", self.auth_url)))
    }

    /// Validate that the options describe exactly one usable identity
    pub fn validate(&self) -> Result<()> {
        if self.auth_url.trim().is_empty() {
            return Err(KeystoneError::ConfigError("auth_url is required".to_string()));
        }
        self.token_url()?;

        if self.uses_application_credential() {
            if self.application_credential_id.is_some() {
                return Ok(());
            }
            if self.application_credential_name.is_none() {
                return Err(KeystoneError::ConfigError(format!(
                    "{ENV_OS_APPLICATION_CREDENTIAL_ID} or {ENV_OS_APPLICATION_CREDENTIAL_NAME} is required"
                )));
            }
            return self.validate_user();
        }

        if self.password.is_none() {
            return Err(KeystoneError::ConfigError(format!("{ENV_OS_PASSWORD} not set")));
        }
        self.validate_user()?;

        if self.project_id.is_none()
            && self.project_name.is_some()
            && self.project_domain_id.is_none()
            && self.project_domain_name.is_none()
        {
            return Err(KeystoneError::ConfigError(format!(
                "{ENV_OS_PROJECT_NAME} requires {ENV_OS_PROJECT_DOMAIN_ID}, {ENV_OS_PROJECT_DOMAIN_NAME} or {ENV_OS_DOMAIN_NAME}"
            )));
        }

        Ok(())
    }

    fn validate_user(&self) -> Result<()> {
        if self.user_id.is_some() {
            return Ok(());
        }
        if self.username.is_none() {
            return Err(KeystoneError::ConfigError(format!("{ENV_OS_USERID} or {ENV_OS_USERNAME} is required")));
        }
        if self.user_domain_id.is_none() && self.user_domain_name.is_none() {
            return Err(KeystoneError::ConfigError(format!(
                "{ENV_OS_USERNAME} requires {ENV_OS_USER_DOMAIN_ID}, {ENV_OS_USER_DOMAIN_NAME} or {ENV_OS_DOMAIN_NAME}"
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        move |key| map.get(key).cloned()
    }

    fn password_env() -> Vec<(&'static str, &'static str)> {
        vec![
            ("OS_AUTH_URL", "http://keystone:5000/v3"),
            ("OS_USERNAME", "exporter"),
            ("OS_PASSWORD", "secret"),
            ("OS_DOMAIN_NAME", "Default"),
            ("OS_PROJECT_NAME", "monitoring"),
        ]
    }

    #[test]
    fn test_from_lookup_password() {
        let options = AuthOptions::from_lookup(lookup(&password_env())).unwrap();
        assert_eq!(options.auth_url, "http://keystone:5000/v3");
        assert_eq!(options.username.as_deref(), Some("exporter"));
        assert_eq!(options.user_domain_name.as_deref(), Some("Default"));
        assert_eq!(options.project_domain_name.as_deref(), Some("Default"));
        assert_eq!(options.interface(), "public");
        assert_eq!(options.block_storage_version, BlockStorageVersion::V3);
        assert!(options.region.is_none());
    }

    #[test]
    fn test_project_overrides_tenant() {
        let mut env = password_env();
        env.push(("OS_TENANT_ID", "tenant-1"));
        env.push(("OS_PROJECT_ID", "project-1"));
        env.push(("OS_TENANT_NAME", "legacy"));
        let options = AuthOptions::from_lookup(lookup(&env)).unwrap();
        assert_eq!(options.project_id.as_deref(), Some("project-1"));
        assert_eq!(options.project_name.as_deref(), Some("monitoring"));
    }

    #[test]
    fn test_tenant_fallback() {
        let env = [
            ("OS_AUTH_URL", "http://keystone:5000"),
            ("OS_USERID", "u-1"),
            ("OS_PASSWORD", "secret"),
            ("OS_TENANT_ID", "tenant-1"),
        ];
        let options = AuthOptions::from_lookup(lookup(&env)).unwrap();
        assert_eq!(options.project_id.as_deref(), Some("tenant-1"));
    }

    #[test]
    fn test_specific_domains_win_over_generic() {
        let mut env = password_env();
        env.push(("OS_USER_DOMAIN_NAME", "users"));
        env.push(("OS_PROJECT_DOMAIN_ID", "p-dom"));
        let options = AuthOptions::from_lookup(lookup(&env)).unwrap();
        assert_eq!(options.user_domain_name.as_deref(), Some("users"));
        assert_eq!(options.project_domain_id.as_deref(), Some("p-dom"));
        assert_eq!(options.project_domain_name.as_deref(), Some("Default"));
    }

    #[test]
    fn test_missing_auth_url() {
        let err = AuthOptions::from_lookup(lookup(&[("OS_USERNAME", "x")])).unwrap_err();
        assert!(matches!(err, KeystoneError::ConfigError(msg) if msg.contains("OS_AUTH_URL")));
    }

    #[test]
    fn test_missing_password() {
        let env = [("OS_AUTH_URL", "http://keystone:5000"), ("OS_USERID", "u-1")];
        let err = AuthOptions::from_lookup(lookup(&env)).unwrap_err();
        assert!(matches!(err, KeystoneError::ConfigError(msg) if msg.contains("OS_PASSWORD")));
    }

    #[test]
    fn test_username_requires_domain() {
        let env = [
            ("OS_AUTH_URL", "http://keystone:5000"),
            ("OS_USERNAME", "exporter"),
            ("OS_PASSWORD", "secret"),
        ];
        assert!(AuthOptions::from_lookup(lookup(&env)).is_err());
    }

    #[test]
    fn test_empty_values_are_unset() {
        let mut env = password_env();
        env.push(("OS_REGION_NAME", "  "));
        let options = AuthOptions::from_lookup(lookup(&env)).unwrap();
        assert!(options.region.is_none());
    }

    #[test]
    fn test_application_credential_needs_no_password() {
        let env = [
            ("OS_AUTH_URL", "http://keystone:5000"),
            ("OS_APPLICATION_CREDENTIAL_ID", "ac-1"),
            ("OS_APPLICATION_CREDENTIAL_SECRET", "s3cr3t"),
        ];
        let options = AuthOptions::from_lookup(lookup(&env)).unwrap();
        assert!(options.uses_application_credential());
    }

    #[test]
    fn test_token_url() {
        let mut options = AuthOptions {
            auth_url: "http://keystone:5000".to_string(),
            ..Default::default()
        };
        assert_eq!(options.token_url().unwrap().as_str(), "http://keystone:5000/v3/auth/tokens");

        options.auth_url = "https://iam.eu-de.otc.t-systems.com/v3".to_string();
        assert_eq!(options.token_url().unwrap().as_str(), "https://iam.eu-de.otc.t-systems.com/v3/auth/tokens");

        options.auth_url = "http://keystone:5000/v3/".to_string();
        assert_eq!(options.token_url().unwrap().as_str(), "http://keystone:5000/v3/auth/tokens");

        options.auth_url = "not a url".to_string();
        assert!(options.token_url().is_err());
    }

    #[test]
    fn test_block_storage_version() {
        assert_eq!(BlockStorageVersion::parse("2"), BlockStorageVersion::V2);
        assert_eq!(BlockStorageVersion::parse("v2"), BlockStorageVersion::V2);
        assert_eq!(BlockStorageVersion::parse("3"), BlockStorageVersion::V3);
        assert_eq!(BlockStorageVersion::parse("anything"), BlockStorageVersion::V3);
    }

    #[test]
    fn test_interface_normalisation() {
        let mut options = AuthOptions {
            interface: "internalURL".to_string(),
            ..Default::default()
        };
        assert_eq!(options.interface(), "internal");
        options.interface = String::new();
        assert_eq!(options.interface(), "public");
    }
}
