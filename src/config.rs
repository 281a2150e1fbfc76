//! Integration-time toggles, read on every `set_error`.

/// Built once at startup and copied into each per-request envelope;
/// read-only for the lifetime of the process.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnvelopeConfig {
    /// Also force HTTP status 400 when an error is reported.
    pub http_error_status_on_error: bool,
    /// Put the message string in the `error` key instead of a boolean flag.
    pub error_message_in_error_key: bool,
}
