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

//! Request helpers shared by the readers.

use crate::{ReaderError, Result};
use reqwest::{RequestBuilder, Response};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use stackscrape_keystone::Session;
use tracing::debug;
use url::Url;

const MAX_ERROR_BODY: usize = 256;

/// Pagination link as returned in `*_links` arrays
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct Link {
    #[serde(default)]
    pub href: String,
    #[serde(default)]
    pub rel: String,
}

/// Target of the `next` link, if any
pub(crate) fn next_link(links: &[Link]) -> Result<Option<Url>> {
    match links.iter().find(|l| l.rel == "next") {
        Some(link) => Url::parse(&link.href)
            .map(Some)
            .map_err(|e| ReaderError::data_shape("pagination link", format!("{}: {e}", link.href))),
        None => Ok(None),
    }
}

/// Send a request and turn non-success statuses into [`ReaderError::Query`]
pub(crate) async fn send_checked(request: RequestBuilder, service: &'static str) -> Result<Response> {
    let response = request.send().await.map_err(|e| ReaderError::http(service, e))?;
    let status = response.status();
    debug!(service, status = status.as_u16(), url = %response.url(), "Response received");

    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(ReaderError::Query {
            service,
            status: status.as_u16(),
            message: body.trim().chars().take(MAX_ERROR_BODY).collect(),
        });
    }

    Ok(response)
}

/// Authenticated GET decoding a JSON body
pub(crate) async fn get_json<T: DeserializeOwned>(session: &Session, url: Url, service: &'static str) -> Result<T> {
    let response = send_checked(session.get(url), service).await?;
    let body = response.bytes().await.map_err(|e| ReaderError::http(service, e))?;
    serde_json::from_slice(&body).map_err(|e| ReaderError::data_shape(service, e))
}
