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

//! In-process mock control plane: Keystone, Nova, Cinder and Swift on one
//! server, OBS on a second one.

use axum::extract::{Path, Query, RawQuery, State};
use axum::http::header::{AUTHORIZATION, CONTENT_TYPE, DATE};
use axum::http::{HeaderMap, Method, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::{Value, json};
use stackscrape_collector::{Collector, ExporterSettings};
use stackscrape_keystone::{AuthOptions, ClientOptions, KeystoneAuthenticator, KeystoneClient};
use stackscrape_signer::sign_obs;
use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use time::OffsetDateTime;

pub const TOKEN: &str = "tok-1";
pub const ACCESS_KEY: &str = "AKID";
pub const SECRET_KEY: &str = "SECRETKEY";

#[derive(Debug, Clone, Copy, Default)]
pub struct MockOptions {
    pub compute_fails: bool,
    /// Compute limits answer with an empty `absolute` object
    pub empty_compute_limits: bool,
}

pub struct MockCloud {
    pub base: String,
    pub obs_base: String,
    obs_requests: Arc<AtomicUsize>,
}

struct CloudState {
    base: String,
    obs_base: String,
    options: MockOptions,
}

struct ObsState {
    requests: Arc<AtomicUsize>,
}

impl MockCloud {
    pub async fn start(options: MockOptions) -> Self {
        let obs_requests = Arc::new(AtomicUsize::new(0));
        let obs_base = spawn(
            Router::new()
                .route("/", get(list_buckets))
                .route("/{bucket}", get(bucket_storage_info))
                .with_state(Arc::new(ObsState {
                    requests: obs_requests.clone(),
                })),
        )
        .await;

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let base = format!("http://{}", listener.local_addr().unwrap());
        let state = Arc::new(CloudState {
            base: base.clone(),
            obs_base: obs_base.clone(),
            options,
        });
        let app = Router::new()
            .route("/v3/auth/tokens", post(issue_token))
            .route("/otc/v3/auth/tokens", post(issue_token))
            .route("/compute/v2.1/limits", get(compute_limits))
            .route("/compute/v2.1/servers/detail", get(list_servers))
            .route("/volume/v3/p1/volumes/detail", get(list_volumes))
            .route("/volume/v3/p1/limits", get(volume_limits_v3))
            .route("/volume/v2/p1/limits", get(volume_limits_v2))
            .route("/swift/v1/AUTH_p1", get(list_containers))
            .with_state(state);
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self {
            base,
            obs_base,
            obs_requests,
        }
    }

    /// Options for a stock OpenStack cloud
    pub fn swift_options(&self) -> AuthOptions {
        options(&self.base)
    }

    /// Options whose auth URL marks the cloud as Open Telekom Cloud
    pub fn otc_options(&self) -> AuthOptions {
        AuthOptions {
            access_key: Some(ACCESS_KEY.to_string()),
            secret_key: Some(SECRET_KEY.to_string()),
            ..options(&format!("{}/otc", self.base))
        }
    }

    pub fn obs_requests(&self) -> usize {
        self.obs_requests.load(Ordering::SeqCst)
    }
}

pub fn collector(options: AuthOptions, settings: ExporterSettings) -> Collector {
    let client = KeystoneClient::new(&ClientOptions::default()).unwrap();
    Collector::openstack(Arc::new(KeystoneAuthenticator::with_options(client, options)), settings)
}

fn options(auth_url: &str) -> AuthOptions {
    AuthOptions {
        auth_url: auth_url.to_string(),
        username: Some("exporter".to_string()),
        password: Some("secret".to_string()),
        user_domain_name: Some("Default".to_string()),
        project_id: Some("p1".to_string()),
        interface: "public".to_string(),
        ..Default::default()
    }
}

async fn spawn(app: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}")
}

fn endpoint(service_type: &str, url: String) -> Value {
    json!({
        "type": service_type,
        "name": service_type,
        "endpoints": [
            {"id": format!("{service_type}-public"), "interface": "public", "region": "RegionOne", "url": url},
            {"id": format!("{service_type}-internal"), "interface": "internal", "region": "RegionOne", "url": "http://internal.invalid"}
        ]
    })
}

async fn issue_token(State(state): State<Arc<CloudState>>, Json(body): Json<Value>) -> Response {
    if body["auth"]["identity"]["password"]["user"]["password"] != "secret" {
        return (StatusCode::UNAUTHORIZED, Json(json!({"error": {"code": 401, "message": "bad credentials"}}))).into_response();
    }

    let base = &state.base;
    let catalog = json!([
        endpoint("compute", format!("{base}/compute/v2.1")),
        endpoint("block-storage", format!("{base}/volume/v3/p1")),
        endpoint("volumev2", format!("{base}/volume/v2/p1")),
        endpoint("object-store", format!("{base}/swift/v1/AUTH_p1")),
        endpoint("object", format!("{}/", state.obs_base)),
    ]);
    let token = json!({"token": {"expires_at": "2030-01-01T00:00:00.000000Z", "catalog": catalog}});
    (StatusCode::CREATED, [("X-Subject-Token", TOKEN)], Json(token)).into_response()
}

fn authorized(headers: &HeaderMap) -> bool {
    headers.get("x-auth-token").and_then(|v| v.to_str().ok()) == Some(TOKEN)
}

async fn compute_limits(State(state): State<Arc<CloudState>>, headers: HeaderMap) -> Response {
    if !authorized(&headers) {
        return StatusCode::UNAUTHORIZED.into_response();
    }
    if state.options.compute_fails {
        return (StatusCode::INTERNAL_SERVER_ERROR, "nova is down").into_response();
    }
    if state.options.empty_compute_limits {
        return Json(json!({"limits": {"rate": [], "absolute": {}}})).into_response();
    }
    Json(json!({
        "limits": {
            "rate": [],
            "absolute": {
                "maxTotalCores": 20,
                "maxTotalInstances": 10,
                "maxTotalRAMSize": 51200,
                "totalCoresUsed": 4,
                "totalInstancesUsed": 3,
                "totalRAMUsed": 6144
            }
        }
    }))
    .into_response()
}

async fn list_servers(
    State(state): State<Arc<CloudState>>,
    headers: HeaderMap,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    if !authorized(&headers) {
        return StatusCode::UNAUTHORIZED.into_response();
    }
    if state.options.compute_fails {
        return (StatusCode::INTERNAL_SERVER_ERROR, "nova is down").into_response();
    }

    let page = match params.get("marker").map(String::as_str) {
        None => json!({
            "servers": [
                {"id": "s1", "status": "ACTIVE", "flavor": {"id": "a"}},
                {"id": "s2", "status": "ACTIVE", "flavor": {"id": "a"}}
            ],
            "servers_links": [
                {"href": format!("{}/compute/v2.1/servers/detail?marker=s2", state.base), "rel": "next"}
            ]
        }),
        Some("s2") => json!({
            "servers": [{"id": "s3", "status": "ERROR", "flavor": {"id": "b"}}]
        }),
        Some(_) => json!({"servers": []}),
    };
    Json(page).into_response()
}

async fn list_volumes(
    State(state): State<Arc<CloudState>>,
    headers: HeaderMap,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    if !authorized(&headers) {
        return StatusCode::UNAUTHORIZED.into_response();
    }

    let page = match params.get("marker").map(String::as_str) {
        None => json!({
            "volumes": [
                {"id": "v1", "status": "available"},
                {"id": "v2", "status": "in-use"}
            ],
            "volumes_links": [
                {"href": format!("{}/volume/v3/p1/volumes/detail?marker=v2", state.base), "rel": "next"}
            ]
        }),
        Some("v2") => json!({"volumes": [{"id": "v3", "status": "in-use"}], "volumes_links": []}),
        Some(_) => json!({"volumes": []}),
    };
    Json(page).into_response()
}

fn volume_limits(max_total_volumes: i64) -> Response {
    Json(json!({
        "limits": {
            "rate": [],
            "absolute": {
                "maxTotalVolumes": max_total_volumes,
                "maxTotalVolumeGigabytes": 1000,
                "totalVolumesUsed": 3,
                "totalGigabytesUsed": 120
            }
        }
    }))
    .into_response()
}

async fn volume_limits_v3(headers: HeaderMap) -> Response {
    if !authorized(&headers) {
        return StatusCode::UNAUTHORIZED.into_response();
    }
    volume_limits(10)
}

async fn volume_limits_v2(headers: HeaderMap) -> Response {
    if !authorized(&headers) {
        return StatusCode::UNAUTHORIZED.into_response();
    }
    volume_limits(20)
}

async fn list_containers(headers: HeaderMap, Query(params): Query<HashMap<String, String>>) -> Response {
    if !authorized(&headers) {
        return StatusCode::UNAUTHORIZED.into_response();
    }
    if params.get("format").map(String::as_str) != Some("json") {
        return StatusCode::BAD_REQUEST.into_response();
    }

    match params.get("marker").map(String::as_str) {
        None => Json(json!([
            {"name": "backups", "count": 2, "bytes": 1024},
            {"name": "logs", "count": 0, "bytes": 0}
        ]))
        .into_response(),
        Some("logs") => Json(json!([{"name": "media", "count": 1, "bytes": 4096}])).into_response(),
        Some(_) => StatusCode::NO_CONTENT.into_response(),
    }
}

/// Recompute the OBS signature for the request's own `Date`
fn signed(headers: &HeaderMap, resource: &str) -> bool {
    let (Some(date), Some(authorization)) = (headers.get(DATE), headers.get(AUTHORIZATION)) else {
        return false;
    };

    let mut expected = HeaderMap::new();
    expected.insert(DATE, date.clone());
    if sign_obs(&Method::GET, &mut expected, resource, ACCESS_KEY, SECRET_KEY, OffsetDateTime::now_utc()).is_err() {
        return false;
    }
    expected.get(AUTHORIZATION) == Some(authorization)
}

fn xml(body: String) -> Response {
    (StatusCode::OK, [(CONTENT_TYPE, "application/xml")], body).into_response()
}

async fn list_buckets(State(state): State<Arc<ObsState>>, headers: HeaderMap) -> Response {
    state.requests.fetch_add(1, Ordering::SeqCst);
    if !signed(&headers, "/") {
        return StatusCode::FORBIDDEN.into_response();
    }

    xml(r#"<?xml version="1.0" encoding="UTF-8"?>
<ListAllMyBucketsResult xmlns="http://obs.otc.t-systems.com/doc/2015-06-30/">
  <Owner><ID>owner</ID></Owner>
  <Buckets>
    <Bucket><Name>x</Name><CreationDate>2024-01-01T00:00:00.000Z</CreationDate></Bucket>
    <Bucket><Name>y</Name><CreationDate>2024-01-02T00:00:00.000Z</CreationDate></Bucket>
  </Buckets>
</ListAllMyBucketsResult>"#
        .to_string())
}

async fn bucket_storage_info(
    State(state): State<Arc<ObsState>>,
    Path(bucket): Path<String>,
    RawQuery(query): RawQuery,
    headers: HeaderMap,
) -> Response {
    state.requests.fetch_add(1, Ordering::SeqCst);
    if query.as_deref() != Some("storageinfo") {
        return StatusCode::BAD_REQUEST.into_response();
    }
    if !signed(&headers, &format!("/{bucket}/?storageinfo")) {
        return StatusCode::FORBIDDEN.into_response();
    }

    let size = match bucket.as_str() {
        "x" => 100,
        "y" => 250,
        _ => return StatusCode::NOT_FOUND.into_response(),
    };
    xml(format!(
        "<GetBucketStorageInfoResult><Size>{size}</Size><ObjectNumber>1</ObjectNumber></GetBucketStorageInfoResult>"
    ))
}
