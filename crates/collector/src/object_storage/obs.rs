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

//! Open Telekom Cloud OBS bucket listing.
//!
//! OBS does not accept Keystone tokens. Requests carry an `OBS` signature
//! made with the project's access/secret key pair; Keystone is only used to
//! find the endpoint.

use super::ObjectStorageReader;
use crate::http::send_checked;
use crate::{ReaderError, Result};
use async_trait::async_trait;
use futures::{StreamExt, TryStreamExt, stream};
use http::{HeaderMap, Method};
use serde::Deserialize;
use stackscrape_keystone::{Session, SessionProvider};
use stackscrape_metrics::Container;
use stackscrape_signer::{canonical_resource, sign_obs};
use std::sync::Arc;
use time::OffsetDateTime;
use tracing::debug;
use url::{Host, Url};

pub const OBS_SERVICE_TYPES: &[&str] = &["object"];

const SERVICE: &str = "obs";
const STORAGE_INFO: &str = "storageinfo";

pub struct ObsReader {
    provider: Arc<dyn SessionProvider>,
    concurrency: usize,
}

impl ObsReader {
    /// `concurrency` bounds the in-flight per-bucket requests; 0 counts as 1.
    pub fn new(provider: Arc<dyn SessionProvider>, concurrency: usize) -> Self {
        Self {
            provider,
            concurrency: concurrency.max(1),
        }
    }
}

impl std::fmt::Debug for ObsReader {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ObsReader").field("concurrency", &self.concurrency).finish()
    }
}

#[derive(Deserialize, Default)]
#[serde(default, rename_all = "PascalCase")]
struct ListAllMyBucketsResult {
    buckets: Buckets,
}

#[derive(Deserialize, Default)]
#[serde(default)]
struct Buckets {
    #[serde(rename = "Bucket")]
    bucket: Vec<Bucket>,
}

#[derive(Deserialize)]
#[serde(rename_all = "PascalCase")]
struct Bucket {
    name: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "PascalCase")]
struct GetBucketStorageInfoResult {
    size: u64,
}

/// Signed OBS requests against one endpoint
struct ObsClient<'a> {
    http: &'a reqwest::Client,
    endpoint: Url,
    access_key: &'a str,
    secret_key: &'a str,
}

impl ObsClient<'_> {
    async fn signed_get(&self, url: Url, resource: &str) -> Result<String> {
        let mut headers = HeaderMap::new();
        sign_obs(&Method::GET, &mut headers, resource, self.access_key, self.secret_key, OffsetDateTime::now_utc())?;

        let response = send_checked(self.http.get(url).headers(headers), SERVICE).await?;
        response.text().await.map_err(|e| ReaderError::http(SERVICE, e))
    }

    async fn list_buckets(&self) -> Result<Vec<String>> {
        let body = self.signed_get(self.endpoint.clone(), &canonical_resource(None, None)).await?;
        let result: ListAllMyBucketsResult =
            quick_xml::de::from_str(&body).map_err(|e| ReaderError::data_shape("bucket listing", e))?;

        Ok(result.buckets.bucket.into_iter().map(|b| b.name).collect())
    }

    async fn bucket_size(&self, bucket: String) -> Result<Container> {
        let url = bucket_url(&self.endpoint, &bucket)?;
        let body = self
            .signed_get(url, &canonical_resource(Some(&bucket), Some(STORAGE_INFO)))
            .await?;
        let info: GetBucketStorageInfoResult =
            quick_xml::de::from_str(&body).map_err(|e| ReaderError::data_shape("bucket storage info", e))?;

        debug!(bucket, size = info.size, "Bucket storage info");
        Ok(Container {
            name: bucket,
            bytes: info.size,
        })
    }
}

/// `?storageinfo` URL of a bucket.
///
/// IP endpoints are addressed path style, named hosts virtual-hosted style.
fn bucket_url(endpoint: &Url, bucket: &str) -> Result<Url> {
    let mut url = endpoint.clone();
    match endpoint.host() {
        Some(Host::Domain(domain)) => {
            url.set_host(Some(&format!("{bucket}.{domain}")))
                .map_err(|e| ReaderError::data_shape("bucket name", format!("{bucket}: {e}")))?;
            url.set_path("/");
        }
        Some(Host::Ipv4(_)) | Some(Host::Ipv6(_)) => {
            let path = format!("{}/{bucket}", endpoint.path().trim_end_matches('/'));
            url.set_path(&path);
        }
        None => return Err(ReaderError::data_shape("obs endpoint", format!("{endpoint} has no host"))),
    }
    url.set_query(Some(STORAGE_INFO));
    Ok(url)
}

#[async_trait]
impl ObjectStorageReader for ObsReader {
    async fn list_containers(&self, session: &Session) -> Result<Vec<Container>> {
        let options = session.options();
        let (Some(access_key), Some(secret_key)) = (options.access_key.as_deref(), options.secret_key.as_deref()) else {
            return Err(ReaderError::Config("OBS needs both an access key and a secret key".to_string()));
        };

        let obs_session = self.provider.authenticate().await?;
        let endpoint = obs_session.endpoint(OBS_SERVICE_TYPES)?;
        debug!(%endpoint, "Getting all buckets");

        let client = ObsClient {
            http: obs_session.http(),
            endpoint,
            access_key,
            secret_key,
        };

        let buckets = client.list_buckets().await?;
        debug!(count = buckets.len(), concurrency = self.concurrency, "Buckets listed");

        stream::iter(buckets)
            .map(|bucket| client.bucket_size(bucket))
            .buffered(self.concurrency)
            .try_collect()
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_bucket_listing() {
        let body = r#"<?xml version="1.0" encoding="UTF-8"?>
<ListAllMyBucketsResult xmlns="http://obs.otc.t-systems.com/doc/2015-06-30/">
  <Owner><ID>owner-id</ID></Owner>
  <Buckets>
    <Bucket><Name>x</Name><CreationDate>2024-01-01T00:00:00.000Z</CreationDate><Location>eu-de</Location></Bucket>
    <Bucket><Name>y</Name><CreationDate>2024-01-02T00:00:00.000Z</CreationDate></Bucket>
  </Buckets>
</ListAllMyBucketsResult>"#;
        let result: ListAllMyBucketsResult = quick_xml::de::from_str(body).unwrap();
        let names: Vec<_> = result.buckets.bucket.iter().map(|b| b.name.as_str()).collect();
        assert_eq!(names, ["x", "y"]);
    }

    #[test]
    fn test_parse_empty_bucket_listing() {
        let body = r#"<ListAllMyBucketsResult><Owner><ID>o</ID></Owner><Buckets></Buckets></ListAllMyBucketsResult>"#;
        let result: ListAllMyBucketsResult = quick_xml::de::from_str(body).unwrap();
        assert!(result.buckets.bucket.is_empty());
    }

    #[test]
    fn test_parse_storage_info() {
        let body = r#"<?xml version="1.0" encoding="UTF-8"?>
<GetBucketStorageInfoResult xmlns="http://obs.otc.t-systems.com/doc/2015-06-30/">
  <Size>250</Size>
  <ObjectNumber>7</ObjectNumber>
</GetBucketStorageInfoResult>"#;
        let info: GetBucketStorageInfoResult = quick_xml::de::from_str(body).unwrap();
        assert_eq!(info.size, 250);
    }

    #[test]
    fn test_storage_info_without_size_is_rejected() {
        let body = "<GetBucketStorageInfoResult><ObjectNumber>7</ObjectNumber></GetBucketStorageInfoResult>";
        assert!(quick_xml::de::from_str::<GetBucketStorageInfoResult>(body).is_err());
    }

    #[test]
    fn test_bucket_url_virtual_hosted() {
        let endpoint = Url::parse("https://obs.eu-de.otc.t-systems.com").unwrap();
        let url = bucket_url(&endpoint, "photos").unwrap();
        assert_eq!(url.as_str(), "https://photos.obs.eu-de.otc.t-systems.com/?storageinfo");
    }

    #[test]
    fn test_bucket_url_path_style() {
        let endpoint = Url::parse("http://127.0.0.1:9000/").unwrap();
        let url = bucket_url(&endpoint, "photos").unwrap();
        assert_eq!(url.as_str(), "http://127.0.0.1:9000/photos?storageinfo");

        let endpoint = Url::parse("http://[::1]:9000").unwrap();
        let url = bucket_url(&endpoint, "logs").unwrap();
        assert_eq!(url.as_str(), "http://[::1]:9000/logs?storageinfo");
    }

    #[test]
    fn test_zero_concurrency_is_clamped() {
        struct NoSession;

        #[async_trait]
        impl SessionProvider for NoSession {
            async fn authenticate(&self) -> stackscrape_keystone::Result<Session> {
                Err(stackscrape_keystone::KeystoneError::AuthenticationFailed("unused".to_string()))
            }
        }

        let reader = ObsReader::new(Arc::new(NoSession), 0);
        assert_eq!(reader.concurrency, 1);
    }
}
