//! Classification of inbound requests as AJAX JSON submissions.

use axum::http::{header, request::Parts, HeaderName, Method};

/// Header browsers' XHR layers attach to AJAX requests.
pub const REQUESTED_WITH: &str = "x-requested-with";

/// Minimal view of an inbound request the envelope needs for classification.
pub trait SubmitRequest {
    fn method(&self) -> &Method;
    /// `X-Requested-With: XMLHttpRequest`
    fn is_ajax(&self) -> bool;
    /// Accept or Content-Type negotiates JSON.
    fn accepts_json(&self) -> bool;
}

impl SubmitRequest for Parts {
    fn method(&self) -> &Method {
        &self.method
    }

    fn is_ajax(&self) -> bool {
        self.headers
            .get(REQUESTED_WITH)
            .and_then(|v| v.to_str().ok())
            .map(|v| v.eq_ignore_ascii_case("xmlhttprequest"))
            .unwrap_or(false)
    }

    fn accepts_json(&self) -> bool {
        header_has_json(self, header::ACCEPT) || header_has_json(self, header::CONTENT_TYPE)
    }
}

fn header_has_json(parts: &Parts, name: HeaderName) -> bool {
    parts
        .headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .map(|v| {
            let v = v.to_ascii_lowercase();
            v.contains("application/json") || v.contains("+json")
        })
        .unwrap_or(false)
}
