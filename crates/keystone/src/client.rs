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

use crate::catalog::{CatalogEntry, ServiceCatalog};
use crate::session::SUBJECT_TOKEN_HEADER;
use crate::{AuthOptions, KeystoneError, Result, Session};
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use serde_json::{Value, json};
use stackscrape_config::USER_AGENT;
use std::sync::Arc;
use std::time::Duration;
use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;
use tracing::{debug, error};

/// HTTP settings shared by every control-plane request
#[derive(Debug, Clone)]
pub struct ClientOptions {
    pub timeout: Duration,
    pub verify_ssl: bool,
}

impl Default for ClientOptions {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(stackscrape_config::DEFAULT_HTTP_TIMEOUT_SECS),
            verify_ssl: true,
        }
    }
}

/// Keystone client issuing v3 tokens
#[derive(Debug, Clone)]
pub struct KeystoneClient {
    client: Client,
}

#[derive(Deserialize)]
struct TokenResponse {
    token: TokenBody,
}

#[derive(Deserialize)]
struct TokenBody {
    #[serde(default)]
    expires_at: Option<String>,
    #[serde(default)]
    catalog: Vec<CatalogEntry>,
}

impl KeystoneClient {
    /// Create new Keystone client
    pub fn new(options: &ClientOptions) -> Result<Self> {
        let client = Client::builder()
            .danger_accept_invalid_certs(!options.verify_ssl)
            .timeout(options.timeout)
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| KeystoneError::ConfigError(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self { client })
    }

    /// Underlying HTTP client, shared with the sessions it produces
    pub fn http(&self) -> &Client {
        &self.client
    }

    /// Exchange credentials for a scoped token and its service catalog
    pub async fn issue_token(&self, options: Arc<AuthOptions>) -> Result<Session> {
        let url = options.token_url()?;
        let payload = build_auth_payload(&options);

        debug!("Requesting token from Keystone: {}", url);

        let response = self.client.post(url).json(&payload).send().await.map_err(|e| {
            error!("Failed to send token request: {}", e);
            KeystoneError::from(e)
        })?;

        let status = response.status();
        debug!("Token response status: {}", status);

        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            return Err(KeystoneError::AuthenticationFailed(format!("Keystone rejected credentials: {status}")));
        }

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(KeystoneError::AuthenticationFailed(format!(
                "Token request failed with status {status}: {}",
                body.chars().take(256).collect::<String>()
            )));
        }

        let token = response
            .headers()
            .get(SUBJECT_TOKEN_HEADER)
            .and_then(|v| v.to_str().ok())
            .ok_or_else(|| KeystoneError::ParseError("Missing X-Subject-Token header".to_string()))?
            .to_string();

        let body: TokenResponse = response.json().await.map_err(|e| KeystoneError::ParseError(e.to_string()))?;

        let expires_at = body
            .token
            .expires_at
            .as_deref()
            .and_then(|s| OffsetDateTime::parse(s, &Rfc3339).ok());

        Ok(Session::new(
            token,
            ServiceCatalog::new(body.token.catalog),
            options,
            expires_at,
            self.client.clone(),
        ))
    }
}

/// Build the `POST /v3/auth/tokens` request body
pub(crate) fn build_auth_payload(options: &AuthOptions) -> Value {
    if options.uses_application_credential() {
        let mut credential = json!({ "secret": options.application_credential_secret });
        if let Some(id) = &options.application_credential_id {
            credential["id"] = json!(id);
        } else {
            credential["name"] = json!(options.application_credential_name);
            credential["user"] = user_ref(options);
        }

        // Application credentials carry their own scope
        return json!({
            "auth": {
                "identity": {
                    "methods": ["application_credential"],
                    "application_credential": credential
                }
            }
        });
    }

    let mut user = user_ref(options);
    user["password"] = json!(options.password);

    let mut payload = json!({
        "auth": {
            "identity": {
                "methods": ["password"],
                "password": { "user": user }
            }
        }
    });

    if let Some(scope) = scope(options) {
        payload["auth"]["scope"] = scope;
    }

    payload
}

fn user_ref(options: &AuthOptions) -> Value {
    if let Some(id) = &options.user_id {
        return json!({ "id": id });
    }
    json!({
        "name": options.username,
        "domain": domain_ref(options.user_domain_id.as_deref(), options.user_domain_name.as_deref())
    })
}

fn domain_ref(id: Option<&str>, name: Option<&str>) -> Value {
    match (id, name) {
        (Some(id), _) => json!({ "id": id }),
        (None, Some(name)) => json!({ "name": name }),
        (None, None) => Value::Null,
    }
}

fn scope(options: &AuthOptions) -> Option<Value> {
    if let Some(id) = &options.project_id {
        return Some(json!({ "project": { "id": id } }));
    }
    if let Some(name) = &options.project_name {
        return Some(json!({
            "project": {
                "name": name,
                "domain": domain_ref(options.project_domain_id.as_deref(), options.project_domain_name.as_deref())
            }
        }));
    }
    match (&options.domain_id, &options.domain_name) {
        (None, None) => None,
        (id, name) => Some(json!({ "domain": domain_ref(id.as_deref(), name.as_deref()) })),
    }
}
