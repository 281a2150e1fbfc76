//! Example consumer: a small axum app that uses json-envelope as a dependency.
//!
//! Run from repo root: `cargo run -p example-consumer`
//! Or from this directory: `cargo run`
//!
//! Try it:
//!   curl -X POST localhost:3000/appointments \
//!     -H 'X-Requested-With: XMLHttpRequest' \
//!     -H 'Content-Type: application/json' \
//!     -d '{"title": "Checkup"}'

use axum::{extract::State, http::request::Parts, routing::post, Json, Router};
use json_envelope::{
    long_identifier, route, Envelope, EnvelopeConfig, EnvelopeError, FieldErrors, HasFieldErrors,
    Identifiable, UrlResolver, UrlTarget,
};
use serde::Deserialize;
use tokio::net::TcpListener;

#[derive(Deserialize)]
struct AppointmentInput {
    #[serde(default)]
    title: String,
}

struct Appointment {
    id: Option<i64>,
    title: String,
}

impl Identifiable for Appointment {
    fn id(&self) -> Option<i64> {
        self.id
    }

    fn type_name(&self) -> &str {
        "Appointment"
    }
}

impl HasFieldErrors for Appointment {
    fn field_errors(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();
        if self.title.is_empty() {
            errors = errors.field("title", ["This field is required"]);
        }
        errors
    }
}

/// Path-pattern router standing in for a real routing table.
struct AppRouter;

impl UrlResolver for AppRouter {
    fn resolve(&self, target: &UrlTarget, absolute: bool) -> String {
        let path = match target {
            UrlTarget::Path(path) => path.clone(),
            UrlTarget::Route(route) => format!(
                "/{}/{}/{}",
                route.controller.to_lowercase(),
                route.action,
                route.id
            ),
        };
        if absolute {
            format!("http://localhost:3000{}", path)
        } else {
            path
        }
    }
}

async fn create_appointment(
    State(config): State<EnvelopeConfig>,
    parts: Parts,
    Json(input): Json<AppointmentInput>,
) -> Result<Envelope, EnvelopeError> {
    let mut envelope = Envelope::new(config);
    envelope.require_json_submit(&parts)?;

    let appointment = Appointment {
        id: Some(2917),
        title: input.title,
    };
    let errors = appointment.field_errors();
    if !errors.is_empty() {
        envelope.entity_error_vars(&errors);
        return Ok(envelope);
    }

    envelope.set_message(format!(
        "Saved {}",
        long_identifier(&appointment).unwrap_or_default()
    ));
    if let Some(view_route) = route(&appointment) {
        envelope.redirect(&AppRouter, &UrlTarget::Route(view_route));
    }
    Ok(envelope)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("json_envelope=debug,example_consumer=info")),
        )
        .init();

    let config = EnvelopeConfig {
        http_error_status_on_error: false,
        error_message_in_error_key: false,
    };

    let app = Router::new()
        .route("/appointments", post(create_appointment))
        .with_state(config);

    let listener = TcpListener::bind("127.0.0.1:3000").await?;
    tracing::info!("Example consumer listening on http://{}", listener.local_addr()?);
    axum::serve(listener, app).await?;
    Ok(())
}
