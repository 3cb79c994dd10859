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

use crate::catalog::{EndpointQuery, ServiceCatalog};
use crate::{AuthOptions, Result};
use reqwest::header::ACCEPT;
use reqwest::{Client, RequestBuilder};
use std::fmt;
use std::sync::Arc;
use time::OffsetDateTime;
use url::Url;

pub const AUTH_TOKEN_HEADER: &str = "X-Auth-Token";
pub const SUBJECT_TOKEN_HEADER: &str = "X-Subject-Token";

/// An authenticated, project-scoped session.
///
/// Produced once per collection cycle and shared read-only by every reader
/// of that cycle. Cloning is cheap.
#[derive(Clone)]
pub struct Session {
    token: Arc<str>,
    catalog: Arc<ServiceCatalog>,
    options: Arc<AuthOptions>,
    expires_at: Option<OffsetDateTime>,
    http: Client,
}

impl Session {
    pub fn new(
        token: impl Into<Arc<str>>,
        catalog: ServiceCatalog,
        options: Arc<AuthOptions>,
        expires_at: Option<OffsetDateTime>,
        http: Client,
    ) -> Self {
        Self {
            token: token.into(),
            catalog: Arc::new(catalog),
            options,
            expires_at,
            http,
        }
    }

    pub fn token(&self) -> &str {
        &self.token
    }

    pub fn auth_url(&self) -> &str {
        &self.options.auth_url
    }

    pub fn region(&self) -> Option<&str> {
        self.options.region.as_deref()
    }

    /// Options the session was issued from
    pub fn options(&self) -> &AuthOptions {
        &self.options
    }

    pub fn catalog(&self) -> &ServiceCatalog {
        &self.catalog
    }

    pub fn expires_at(&self) -> Option<OffsetDateTime> {
        self.expires_at
    }

    pub fn is_expired(&self) -> bool {
        self.expires_at.is_some_and(|at| OffsetDateTime::now_utc() >= at)
    }

    /// Shared HTTP client, also used for unauthenticated calls
    pub fn http(&self) -> &Client {
        &self.http
    }

    /// Resolve a service base URL using the session's interface and region
    pub fn endpoint(&self, service_types: &[&str]) -> Result<Url> {
        self.catalog.resolve(&EndpointQuery {
            service_types,
            interface: self.options.interface(),
            region: self.region(),
        })
    }

    /// Start an authenticated JSON GET request
    pub fn get(&self, url: Url) -> RequestBuilder {
        self.http
            .get(url)
            .header(AUTH_TOKEN_HEADER, self.token.as_ref())
            .header(ACCEPT, "application/json")
    }
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("auth_url", &self.options.auth_url)
            .field("region", &self.options.region)
            .field("services", &self.catalog.entries().len())
            .field("expires_at", &self.expires_at)
            .finish_non_exhaustive()
    }
}
