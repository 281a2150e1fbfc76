//! Response envelope: the per-request store of output fields and the
//! serialize list naming which of them the JSON response must carry.

use crate::config::EnvelopeConfig;
use crate::error::EnvelopeError;
use crate::field_errors::FieldErrors;
use crate::identity::{UrlResolver, UrlTarget};
use crate::submit::SubmitRequest;
use axum::{
    http::{Method, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde_json::{Map, Value};

/// Boilerplate fields for a generic OK response, in serialize order.
fn default_fields() -> [(&'static str, Value); 5] {
    [
        ("error", Value::Bool(false)),
        ("field_errors", Value::Object(Map::new())),
        ("message", Value::String("OK".to_string())),
        ("_redirect", Value::Bool(false)),
        ("content", Value::Null),
    ]
}

/// External template-rendering collaborator used by [`Envelope::send_content`].
pub trait TemplateRenderer {
    fn render(&self, template: &str, vars: &Map<String, Value>) -> Result<String, EnvelopeError>;
}

/// Per-request JSON response envelope.
///
/// Scoped to exactly one request/response cycle: created once JSON handling
/// is confirmed or forced, mutated by action code, consumed at emission time
/// via [`IntoResponse`].
#[derive(Debug, Clone)]
pub struct Envelope {
    fields: Map<String, Value>,
    serialize: Vec<String>,
    status: StatusCode,
    force_json: bool,
    config: EnvelopeConfig,
}

impl Default for Envelope {
    fn default() -> Self {
        Self::new(EnvelopeConfig::default())
    }
}

impl Envelope {
    pub fn new(config: EnvelopeConfig) -> Self {
        Envelope {
            fields: Map::new(),
            serialize: Vec::new(),
            status: StatusCode::OK,
            force_json: false,
            config,
        }
    }

    /// Seed every default field not already present and rebuild the
    /// serialize list: defaults in fixed order, then previously registered
    /// custom keys in registration order. Never overwrites a field the
    /// action already set; idempotent.
    pub fn prepare_vars(&mut self) {
        let defaults = default_fields();
        let mut serialize: Vec<String> = defaults.iter().map(|(k, _)| k.to_string()).collect();
        for key in &self.serialize {
            if !serialize.contains(key) {
                serialize.push(key.clone());
            }
        }
        for (key, value) in defaults {
            if !self.fields.contains_key(key) {
                self.fields.insert(key.to_string(), value);
            }
        }
        self.serialize = serialize;
    }

    /// Write one field and register it for serialization.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<Value>) {
        let name = name.into();
        self.fields.insert(name.clone(), value.into());
        if !self.serialize.contains(&name) {
            self.serialize.push(name);
        }
    }

    /// Write many fields at once, registering each for serialization.
    pub fn set_many(&mut self, fields: Map<String, Value>) {
        for (name, value) in fields {
            self.set(name, value);
        }
    }

    /// `set("message", ...)` shortcut.
    pub fn set_message(&mut self, message: impl Into<String>) {
        self.set("message", message.into());
    }

    /// Report an error to the client. `http_error` falls back to
    /// `EnvelopeConfig::http_error_status_on_error` when `None`; when it
    /// resolves true the response status becomes 400. The `error` key holds
    /// the message itself when `error_message_in_error_key` is set,
    /// otherwise `true`.
    pub fn set_error(&mut self, message: impl Into<String>, http_error: Option<bool>) {
        let message = message.into();
        if http_error.unwrap_or(self.config.http_error_status_on_error) {
            self.status = StatusCode::BAD_REQUEST;
        }
        if self.config.error_message_in_error_key {
            self.set("error", message.clone());
        } else {
            self.set("error", true);
        }
        self.set("message", message);
    }

    /// Surface entity validation errors: the raw nested structure goes to
    /// `field_errors` for machine consumption, the flattened message to
    /// `set_error`. A structure with no fields at all is a no-op.
    pub fn entity_error_vars(&mut self, errors: &FieldErrors) {
        let Some(message) = errors.message() else {
            tracing::warn!("entity_error_vars called without any field errors");
            return;
        };
        self.set("field_errors", errors.to_value());
        self.set_error(message, None);
    }

    /// Write a client-side redirect directive to `_redirect`, resolved to an
    /// absolute URL. The client must be configured to handle it.
    pub fn redirect<R: UrlResolver>(&mut self, resolver: &R, target: &UrlTarget) {
        let url = resolver.resolve(target, true);
        tracing::debug!(url = %url, "redirect");
        self.set("_redirect", url);
    }

    /// Render the named template against the current fields and write the
    /// result to `content`.
    pub fn send_content<T: TemplateRenderer>(
        &mut self,
        renderer: &T,
        template: &str,
    ) -> Result<(), EnvelopeError> {
        let content = renderer.render(template, &self.fields)?;
        self.set("content", content);
        Ok(())
    }

    /// True iff the request is a POST/PUT AJAX request that negotiates JSON
    /// (or JSON rendering has been forced for this response). When true and
    /// `auto_prepare`, seeds the defaults too.
    pub fn is_json_submit<R: SubmitRequest>(&mut self, request: &R, auto_prepare: bool) -> bool {
        let method = request.method();
        let submit = (method == Method::POST || method == Method::PUT)
            && request.is_ajax()
            && (request.accepts_json() || self.force_json);
        if submit && auto_prepare {
            self.prepare_vars();
        }
        submit
    }

    /// Ensure the request is a JSON submission, seeding defaults as a side
    /// effect; otherwise fail with a bad-request error for the transport
    /// layer to emit.
    pub fn require_json_submit<R: SubmitRequest>(
        &mut self,
        request: &R,
    ) -> Result<(), EnvelopeError> {
        if self.is_json_submit(request, true) {
            Ok(())
        } else {
            Err(EnvelopeError::BadRequest(
                "expected an ajax json submission".to_string(),
            ))
        }
    }

    /// Force JSON rendering for this response regardless of what the
    /// inbound request declared, then seed the defaults.
    pub fn force_json(&mut self) {
        self.force_json = true;
        self.prepare_vars();
    }

    /// Status the transport layer must respond with.
    pub fn status(&self) -> StatusCode {
        self.status
    }

    /// Current value of a field, serialized or not.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.fields.get(name)
    }

    /// Field names obligated to appear in the JSON output, in order.
    pub fn serialize_list(&self) -> &[String] {
        &self.serialize
    }

    /// The output object: serialize-listed fields, in serialize order.
    pub fn body(&self) -> Map<String, Value> {
        let mut body = Map::new();
        for key in &self.serialize {
            if let Some(value) = self.fields.get(key) {
                body.insert(key.clone(), value.clone());
            }
        }
        body
    }
}

impl IntoResponse for Envelope {
    fn into_response(self) -> Response {
        let body = self.body();
        (self.status, Json(Value::Object(body))).into_response()
    }
}
