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

use std::collections::BTreeMap;
use std::fmt::Write;

use http::header::{AUTHORIZATION, CONTENT_TYPE, DATE};
use http::{HeaderMap, HeaderValue, Method};
use time::OffsetDateTime;

use super::constants::{CONTENT_MD5, HTTP_DATE_FORMAT, OBS_HEADER_PREFIX, SIGN_OBS_ALGORITHM};
use super::crypto::{base64_encode, hmac_sha1};
use crate::{Result, SignerError};

/// RFC 1123 date in GMT, as carried by the `Date` header
pub fn http_date(t: OffsetDateTime) -> Result<String> {
    t.to_offset(time::UtcOffset::UTC)
        .format(HTTP_DATE_FORMAT)
        .map_err(|e| SignerError::Format(e.to_string()))
}

/// Canonical resource for a request.
///
/// `/` addresses the service itself; bucket requests sign `/{bucket}/`
/// followed by the sub-resource, e.g. `/photos/?storageinfo`.
pub fn canonical_resource(bucket: Option<&str>, sub_resource: Option<&str>) -> String {
    let mut resource = String::from("/");
    if let Some(bucket) = bucket {
        resource.push_str(bucket);
        resource.push('/');
    }
    if let Some(sub) = sub_resource {
        resource.push('?');
        resource.push_str(sub);
    }
    resource
}

pub fn string_to_sign(method: &Method, headers: &HeaderMap, resource: &str) -> String {
    let mut buf = String::new();
    write_sign_obs_headers(&mut buf, method, headers);
    write_canonicalized_headers(&mut buf, headers);
    buf.push_str(resource);
    buf
}

fn header_str<'a>(headers: &'a HeaderMap, name: &str) -> &'a str {
    headers.get(name).and_then(|v| v.to_str().ok()).unwrap_or_default()
}

fn write_sign_obs_headers(buf: &mut String, method: &Method, headers: &HeaderMap) {
    buf.push_str(method.as_str());
    buf.push('\n');
    buf.push_str(header_str(headers, CONTENT_MD5));
    buf.push('\n');
    buf.push_str(header_str(headers, CONTENT_TYPE.as_str()));
    buf.push('\n');
    buf.push_str(header_str(headers, DATE.as_str()));
    buf.push('\n');
}

fn write_canonicalized_headers(buf: &mut String, headers: &HeaderMap) {
    // HeaderName is already lower-case
    let mut vals = BTreeMap::<&str, Vec<&str>>::new();
    for (k, v) in headers.iter() {
        if k.as_str().starts_with(OBS_HEADER_PREFIX) {
            vals.entry(k.as_str())
                .or_default()
                .push(v.to_str().map(str::trim).unwrap_or_default());
        }
    }
    for (k, vv) in vals {
        let _ = writeln!(buf, "{}:{}", k, vv.join(","));
    }
}

/// Sign a request in place.
///
/// Inserts a `Date` header when none is present, then sets
/// `Authorization: OBS {access_key}:{signature}`.
pub fn sign_obs(
    method: &Method,
    headers: &mut HeaderMap,
    resource: &str,
    access_key: &str,
    secret_key: &str,
    now: OffsetDateTime,
) -> Result<()> {
    if access_key.is_empty() || secret_key.is_empty() {
        return Err(SignerError::MissingCredentials);
    }

    if header_str(headers, DATE.as_str()).is_empty() {
        let date = http_date(now)?;
        headers.insert(DATE, HeaderValue::from_str(&date).map_err(|e| SignerError::InvalidHeader(e.to_string()))?);
    }

    let string_to_sign = string_to_sign(method, headers, resource);
    let signature = base64_encode(&hmac_sha1(secret_key, string_to_sign)?);

    let auth_header = format!("{SIGN_OBS_ALGORITHM} {access_key}:{signature}");
    headers.insert(
        AUTHORIZATION,
        HeaderValue::from_str(&auth_header).map_err(|e| SignerError::InvalidHeader(e.to_string()))?,
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::datetime;

    const NOW: OffsetDateTime = datetime!(2024-10-15 08:30:00 UTC);

    #[test]
    fn test_http_date() {
        assert_eq!(http_date(NOW).unwrap(), "Tue, 15 Oct 2024 08:30:00 GMT");
        assert_eq!(
            http_date(datetime!(2024-10-15 10:30:00 +02:00)).unwrap(),
            "Tue, 15 Oct 2024 08:30:00 GMT"
        );
    }

    #[test]
    fn test_canonical_resource() {
        assert_eq!(canonical_resource(None, None), "/");
        assert_eq!(canonical_resource(Some("bucket-x"), Some("storageinfo")), "/bucket-x/?storageinfo");
        assert_eq!(canonical_resource(Some("b"), None), "/b/");
    }

    #[test]
    fn test_sign_list_buckets() {
        let mut headers = HeaderMap::new();
        sign_obs(&Method::GET, &mut headers, "/", "AKID", "SECRETKEY", NOW).unwrap();

        assert_eq!(headers.get(DATE).unwrap(), "Tue, 15 Oct 2024 08:30:00 GMT");
        assert_eq!(headers.get(AUTHORIZATION).unwrap(), "OBS AKID:eHip9Pz1fErjdw9Lnkjo2umJ7ew=");
    }

    #[test]
    fn test_sign_storage_info() {
        let mut headers = HeaderMap::new();
        let resource = canonical_resource(Some("bucket-x"), Some("storageinfo"));
        sign_obs(&Method::GET, &mut headers, &resource, "AKID", "SECRETKEY", NOW).unwrap();

        assert_eq!(headers.get(AUTHORIZATION).unwrap(), "OBS AKID:2N90X/NzO0bRnpY1AKLdm2RT91A=");
    }

    #[test]
    fn test_string_to_sign_with_obs_headers() {
        let mut headers = HeaderMap::new();
        headers.insert("Content-MD5", HeaderValue::from_static("rAnd0mMd5=="));
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/xml"));
        headers.insert(DATE, HeaderValue::from_static("Tue, 15 Oct 2024 08:30:00 GMT"));
        headers.append("X-Obs-Meta-A", HeaderValue::from_static("1"));
        headers.append("x-obs-meta-a", HeaderValue::from_static(" 2 "));
        headers.insert("x-obs-acl", HeaderValue::from_static("private"));
        headers.insert("x-amz-ignored", HeaderValue::from_static("nope"));

        let sts = string_to_sign(&Method::PUT, &headers, "/b/");
        assert_eq!(
            sts,
            "PUT\nrAnd0mMd5==\napplication/xml\nTue, 15 Oct 2024 08:30:00 GMT\nx-obs-acl:private\nx-obs-meta-a:1,2\n/b/"
        );

        sign_obs(&Method::PUT, &mut headers, "/b/", "AKID", "SECRETKEY", NOW).unwrap();
        assert_eq!(headers.get(AUTHORIZATION).unwrap(), "OBS AKID:AFEgLlqDJgX13ufigwFxDOwJsic=");
    }

    #[test]
    fn test_missing_credentials() {
        let mut headers = HeaderMap::new();
        let err = sign_obs(&Method::GET, &mut headers, "/", "", "SECRETKEY", NOW).unwrap_err();
        assert!(matches!(err, SignerError::MissingCredentials));
        assert!(headers.get(AUTHORIZATION).is_none());
    }
}
