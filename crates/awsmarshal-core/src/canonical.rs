//! Canonical request construction for AWS Signature Version 4.
//!
//! ```text
//! HTTPRequestMethod\n
//! CanonicalURI\n
//! CanonicalQueryString\n
//! CanonicalHeaders\n\n
//! SignedHeaders\n
//! HashedPayload
//! ```

use std::collections::BTreeMap;

use bytes::Bytes;
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, percent_decode_str, utf8_percent_encode};

/// Everything except the RFC 3986 unreserved characters is encoded.
pub const URI_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// How path segments are encoded in the canonical URI.
///
/// S3 encodes each segment once. Every other service encodes the
/// already-encoded path a second time, so `%20` becomes `%2520`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UriEncoding {
    /// Encode the wire path again.
    #[default]
    Double,
    /// Normalize the wire path without re-encoding (S3).
    Single,
}

/// Headers never included in the signature.
const UNSIGNED_HEADERS: &[&str] = &["authorization", "user-agent", "content-length"];

/// The canonical form of a request, plus the list of headers it signs.
#[derive(Debug, Clone)]
pub struct CanonicalRequest {
    method: String,
    uri: String,
    query: String,
    headers: BTreeMap<String, String>,
    payload_hash: String,
}

impl CanonicalRequest {
    /// Canonicalizes `request`. Every header present is signed except the
    /// transport-managed ones in [`UNSIGNED_HEADERS`].
    #[must_use]
    pub fn from_request(
        request: &http::Request<Bytes>,
        payload_hash: &str,
        encoding: UriEncoding,
    ) -> Self {
        let mut headers: BTreeMap<String, String> = BTreeMap::new();
        for (name, value) in request.headers() {
            let name = name.as_str().to_ascii_lowercase();
            if UNSIGNED_HEADERS.contains(&name.as_str()) {
                continue;
            }
            let Ok(value) = value.to_str() else {
                continue;
            };
            let value = collapse_whitespace(value.trim());
            headers
                .entry(name)
                .and_modify(|existing| {
                    existing.push(',');
                    existing.push_str(&value);
                })
                .or_insert(value);
        }

        Self {
            method: request.method().as_str().to_owned(),
            uri: canonical_uri(request.uri().path(), encoding),
            query: canonical_query_string(request.uri().query().unwrap_or_default()),
            headers,
            payload_hash: payload_hash.to_owned(),
        }
    }

    /// Semicolon-separated, sorted, lowercase names of the signed headers.
    #[must_use]
    pub fn signed_headers(&self) -> String {
        self.headers.keys().map(String::as_str).collect::<Vec<_>>().join(";")
    }

    /// Renders the canonical request string.
    #[must_use]
    pub fn to_canonical_string(&self) -> String {
        let headers = self
            .headers
            .iter()
            .map(|(k, v)| format!("{k}:{v}"))
            .collect::<Vec<_>>()
            .join("\n");
        format!(
            "{}\n{}\n{}\n{headers}\n\n{}\n{}",
            self.method,
            self.uri,
            self.query,
            self.signed_headers(),
            self.payload_hash
        )
    }
}

/// Encodes each path segment, keeping `/`. Empty paths become `/`.
#[must_use]
pub fn canonical_uri(path: &str, encoding: UriEncoding) -> String {
    if path.is_empty() || path == "/" {
        return "/".to_owned();
    }
    path.split('/')
        .map(|segment| {
            let decoded = percent_decode_str(segment).decode_utf8_lossy();
            let once = utf8_percent_encode(&decoded, URI_ENCODE_SET).to_string();
            match encoding {
                UriEncoding::Single => once,
                UriEncoding::Double => utf8_percent_encode(&once, URI_ENCODE_SET).to_string(),
            }
        })
        .collect::<Vec<_>>()
        .join("/")
}

/// Sorts the already-encoded query parameters by name, then value.
#[must_use]
pub fn canonical_query_string(query: &str) -> String {
    let mut params: Vec<(&str, &str)> = query
        .split('&')
        .filter(|s| !s.is_empty())
        .map(|param| param.split_once('=').unwrap_or((param, "")))
        .collect();
    params.sort_unstable();
    params
        .iter()
        .map(|(k, v)| format!("{k}={v}"))
        .collect::<Vec<_>>()
        .join("&")
}

fn collapse_whitespace(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut prev_was_space = false;
    for ch in s.chars() {
        if ch.is_whitespace() {
            if !prev_was_space {
                result.push(' ');
            }
            prev_was_space = true;
        } else {
            result.push(ch);
            prev_was_space = false;
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use sha2::{Digest, Sha256};

    use super::*;

    const EMPTY_SHA256: &str = "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855";

    fn get_object_request() -> http::Request<Bytes> {
        http::Request::builder()
            .method("GET")
            .uri("https://examplebucket.s3.amazonaws.com/test.txt")
            .header("Host", "examplebucket.s3.amazonaws.com")
            .header("Range", "bytes=0-9")
            .header("x-amz-content-sha256", EMPTY_SHA256)
            .header("x-amz-date", "20130524T000000Z")
            .header("User-Agent", "awsmarshal")
            .body(Bytes::new())
            .unwrap()
    }

    #[test]
    fn test_should_canonicalize_published_get_object_example() {
        let canonical = CanonicalRequest::from_request(&get_object_request(), EMPTY_SHA256, UriEncoding::Single);
        assert_eq!(
            canonical.signed_headers(),
            "host;range;x-amz-content-sha256;x-amz-date"
        );
        let text = canonical.to_canonical_string();
        assert!(text.starts_with("GET\n/test.txt\n\nhost:examplebucket.s3.amazonaws.com\n"));
        assert_eq!(
            hex::encode(Sha256::digest(text.as_bytes())),
            "7344ae5b7ee6c3e7e6b0fe0640412a37625d1fbfff95c48bbb2dc43964946972"
        );
    }

    #[test]
    fn test_should_encode_path_segments_once_for_s3() {
        let single = UriEncoding::Single;
        assert_eq!(canonical_uri("", single), "/");
        assert_eq!(canonical_uri("/policies/policy-01", single), "/policies/policy-01");
        assert_eq!(canonical_uri("/groups/a%20b", single), "/groups/a%20b");
        assert_eq!(canonical_uri("/groups/a b", single), "/groups/a%20b");
    }

    #[test]
    fn test_should_encode_path_segments_twice_for_other_services() {
        let double = UriEncoding::Double;
        assert_eq!(canonical_uri("/", double), "/");
        assert_eq!(canonical_uri("/policies/policy-01/", double), "/policies/policy-01/");
        assert_eq!(
            canonical_uri("/canary/home%20page/start", double),
            "/canary/home%2520page/start"
        );
        assert_eq!(canonical_uri("/packaging_groups/a%3Ab", double), "/packaging_groups/a%253Ab");
        assert_eq!(canonical_uri("/groups/a b", double), "/groups/a%2520b");
    }

    #[test]
    fn test_should_sign_reserved_characters_differently_per_encoding() {
        let request = http::Request::builder()
            .method("GET")
            .uri("https://synthetics.us-east-1.amazonaws.com/canary/a%20b")
            .header("Host", "synthetics.us-east-1.amazonaws.com")
            .body(Bytes::new())
            .unwrap();
        let double = CanonicalRequest::from_request(&request, EMPTY_SHA256, UriEncoding::Double);
        let single = CanonicalRequest::from_request(&request, EMPTY_SHA256, UriEncoding::Single);
        assert!(double.to_canonical_string().starts_with("GET\n/canary/a%2520b\n"));
        assert!(single.to_canonical_string().starts_with("GET\n/canary/a%20b\n"));
    }

    #[test]
    fn test_should_sort_query_parameters() {
        assert_eq!(canonical_query_string("b=2&a=1&a=0"), "a=0&a=1&b=2");
        assert_eq!(canonical_query_string(""), "");
    }

    #[test]
    fn test_should_collapse_header_whitespace() {
        assert_eq!(collapse_whitespace("a   b \t c"), "a b c");
    }
}
