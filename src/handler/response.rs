use bytes::BytesMut;
use http_body_util::Full;
use hyper::{
    HeaderMap, Response as HyperResponse, StatusCode,
    body::Bytes,
    header::{self, HeaderValue},
};

/// Per-request response sink: a status code (200 by default), an
/// append-oriented body buffer and a header map. Owned exclusively by the
/// pipeline processing one request; never shared across requests.
#[derive(Debug, Clone)]
pub struct Response {
    status: StatusCode,
    body: BytesMut,
    headers: HeaderMap,
    ended: bool,
}

impl Default for Response {
    fn default() -> Self {
        Self::new()
    }
}

impl Response {
    pub fn new() -> Self {
        Response {
            status: StatusCode::OK,
            body: BytesMut::with_capacity(512),
            headers: HeaderMap::with_capacity(8),
            ended: false,
        }
    }

    pub fn status(&mut self, status: StatusCode) -> &mut Self {
        self.status = status;
        self
    }

    pub fn status_code(&self) -> StatusCode {
        self.status
    }

    pub fn set(&mut self, key: header::HeaderName, val: HeaderValue) -> &mut Self {
        self.headers.insert(key, val);
        self
    }

    pub fn get(&self, key: &header::HeaderName) -> Option<&HeaderValue> {
        self.headers.get(key)
    }

    /// Appends to the body without ending the response.
    pub fn write(&mut self, data: impl AsRef<[u8]>) -> &mut Self {
        self.body.extend_from_slice(data.as_ref());
        self
    }

    /// Replaces the body with `data`, sets Content-Length and a Content-Type
    /// guess if none was set, and ends the response.
    pub fn send(&mut self, data: impl AsRef<[u8]>) -> &mut Self {
        let data = data.as_ref();

        self.body.clear();
        self.body.reserve(data.len());
        self.body.extend_from_slice(data);

        self.set(header::CONTENT_LENGTH, HeaderValue::from(data.len()));

        if self.headers.get(header::CONTENT_TYPE).is_none() {
            if std::str::from_utf8(data).is_ok() {
                self.set(
                    header::CONTENT_TYPE,
                    HeaderValue::from_static("text/plain; charset=utf-8"),
                );
            } else {
                self.set(
                    header::CONTENT_TYPE,
                    HeaderValue::from_static("application/octet-stream"),
                );
            }
        }

        self.end()
    }

    pub fn r#type(&mut self, mime: HeaderValue) -> &mut Self {
        self.set(header::CONTENT_TYPE, mime);
        self
    }

    #[inline]
    pub fn end(&mut self) -> &mut Self {
        self.ended = true;
        self
    }

    pub fn body(&self) -> &[u8] {
        &self.body
    }

    pub fn into_hyper(mut self) -> HyperResponse<Full<Bytes>> {
        if !self.ended {
            self.end();
        }

        let headers = std::mem::take(&mut self.headers);

        let mut response = HyperResponse::new(Full::new(self.body.freeze()));
        *response.status_mut() = self.status;
        *response.headers_mut() = headers;
        response
    }
}

impl From<Response> for HyperResponse<Full<Bytes>> {
    fn from(resp: Response) -> Self {
        resp.into_hyper()
    }
}
