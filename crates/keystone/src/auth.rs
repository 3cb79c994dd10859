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

use crate::{AuthOptions, KeystoneClient, Result, Session};
use async_trait::async_trait;
use std::sync::Arc;
use tracing::{debug, warn};

/// Source of authenticated sessions.
///
/// Every call performs a fresh authentication; no token is cached across
/// calls.
#[async_trait]
pub trait SessionProvider: Send + Sync {
    async fn authenticate(&self) -> Result<Session>;
}

/// Where the authenticator takes its options from
#[derive(Debug, Clone)]
pub enum OptionsSource {
    /// Re-read the `OS_*` environment on every call
    Environment,
    Fixed(Arc<AuthOptions>),
}

/// Keystone password / application credential authenticator
#[derive(Debug, Clone)]
pub struct KeystoneAuthenticator {
    client: KeystoneClient,
    source: OptionsSource,
}

impl KeystoneAuthenticator {
    pub fn from_env(client: KeystoneClient) -> Self {
        Self {
            client,
            source: OptionsSource::Environment,
        }
    }

    pub fn with_options(client: KeystoneClient, options: AuthOptions) -> Self {
        Self {
            client,
            source: OptionsSource::Fixed(Arc::new(options)),
        }
    }

    fn load_options(&self) -> Result<Arc<AuthOptions>> {
        match &self.source {
            OptionsSource::Environment => {
                debug!("Parsing environment variables");
                AuthOptions::from_env().map(Arc::new)
            }
            OptionsSource::Fixed(options) => Ok(options.clone()),
        }
    }
}

#[async_trait]
impl SessionProvider for KeystoneAuthenticator {
    async fn authenticate(&self) -> Result<Session> {
        let options = self.load_options()?;

        debug!(auth_url = %options.auth_url, "Authenticating to OpenStack API");
        let session = self.client.issue_token(options).await?;

        if session.catalog().is_empty() {
            warn!("Keystone returned an empty service catalog, check the project scope");
        }
        debug!(services = session.catalog().entries().len(), region = ?session.region(), "Authenticated");

        Ok(session)
    }
}
