use base64::prelude::*;
use hyper::http::request::Parts;
use hyper::{HeaderMap, Method, Uri, header};
use std::net::SocketAddr;

/// Immutable descriptor of one inbound request: method, URI, headers and the
/// peer address. Built once when the request enters the pipeline; read by the
/// router and by every middleware and handler.
#[derive(Debug, Clone)]
pub struct Request {
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    remote_addr: SocketAddr,
}

/// A username/password pair extracted from a Basic `Authorization` header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Request {
    pub fn new(method: Method, uri: Uri, headers: HeaderMap, remote_addr: SocketAddr) -> Self {
        Self {
            method,
            uri,
            headers,
            remote_addr,
        }
    }

    /// Builds a request descriptor from a hyper request head. The body is
    /// not carried; no handler in this crate reads one.
    pub fn from_parts(parts: Parts, remote_addr: SocketAddr) -> Self {
        Self {
            method: parts.method,
            uri: parts.uri,
            headers: parts.headers,
            remote_addr,
        }
    }

    pub fn method(&self) -> &Method {
        &self.method
    }

    pub fn uri(&self) -> &Uri {
        &self.uri
    }

    pub fn path(&self) -> &str {
        self.uri.path()
    }

    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    pub fn remote_addr(&self) -> SocketAddr {
        self.remote_addr
    }

    /// Parses the Basic `Authorization` header, if any.
    ///
    /// Returns `None` when the header is absent or malformed in any way:
    /// wrong scheme, invalid base64, non-UTF-8 payload or a payload without
    /// the `user:password` separator.
    pub fn basic_auth(&self) -> Option<Credentials> {
        let value = self.headers.get(header::AUTHORIZATION)?.to_str().ok()?;
        let encoded = value.strip_prefix("Basic ")?;
        let decoded = BASE64_STANDARD.decode(encoded.trim()).ok()?;
        let decoded = String::from_utf8(decoded).ok()?;
        let (username, password) = decoded.split_once(':')?;
        Some(Credentials {
            username: username.to_string(),
            password: password.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hyper::header::HeaderValue;

    fn request_with_authorization(value: Option<&str>) -> Request {
        let mut headers = HeaderMap::new();
        if let Some(value) = value {
            headers.insert(header::AUTHORIZATION, HeaderValue::from_str(value).unwrap());
        }
        Request::new(
            Method::GET,
            Uri::from_static("/secret"),
            headers,
            "127.0.0.1:9999".parse().unwrap(),
        )
    }

    #[test]
    fn basic_auth_parses_well_formed_header() {
        let encoded = BASE64_STANDARD.encode("alice:hunter2");
        let req = request_with_authorization(Some(&format!("Basic {encoded}")));
        assert_eq!(
            req.basic_auth(),
            Some(Credentials {
                username: "alice".to_string(),
                password: "hunter2".to_string(),
            })
        );
    }

    #[test]
    fn basic_auth_allows_empty_password() {
        let encoded = BASE64_STANDARD.encode("bob:");
        let req = request_with_authorization(Some(&format!("Basic {encoded}")));
        let creds = req.basic_auth().unwrap();
        assert_eq!(creds.username, "bob");
        assert_eq!(creds.password, "");
    }

    #[test]
    fn basic_auth_missing_header_is_none() {
        let req = request_with_authorization(None);
        assert_eq!(req.basic_auth(), None);
    }

    #[test]
    fn basic_auth_rejects_other_schemes() {
        let req = request_with_authorization(Some("Bearer some-token"));
        assert_eq!(req.basic_auth(), None);
    }

    #[test]
    fn basic_auth_rejects_invalid_base64() {
        let req = request_with_authorization(Some("Basic %%%not-base64%%%"));
        assert_eq!(req.basic_auth(), None);
    }

    #[test]
    fn basic_auth_rejects_payload_without_colon() {
        let encoded = BASE64_STANDARD.encode("no-separator");
        let req = request_with_authorization(Some(&format!("Basic {encoded}")));
        assert_eq!(req.basic_auth(), None);
    }
}
