//! RSVP Email Lambda - Sends a confirmation email for each RSVP form submission.
//!
//! Methods:
//! - OPTIONS - CORS preflight
//! - HEAD - liveness probe
//! - POST - validate the RSVP and forward a confirmation email to Resend

use lambda_http::http::header::CONTENT_TYPE;
use lambda_http::http::{Method, StatusCode};
use lambda_http::{run, service_fn, Body, Error, Request, Response};
use shared::http::{empty_response, error_response, json_response, MessageBody};
use shared::{
    confirmation_html, is_json_content_type, Config, CorsPolicy, OutboundEmail, ResendClient,
    RsvpSubmission,
};
use std::sync::Arc;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

/// Application state shared across requests.
struct AppState {
    config: Config,
    email_client: ResendClient,
}

impl AppState {
    async fn new() -> Result<Self, Error> {
        let config = Config::from_env()?;
        let api_key = shared::resolve_api_key(&config.api_key).await?;

        Self::with_api_key(config, api_key).map_err(Into::into)
    }

    fn with_api_key(config: Config, api_key: String) -> shared::Result<Self> {
        let email_client = ResendClient::new(&config, api_key)?;
        Ok(Self {
            config,
            email_client,
        })
    }
}

async fn handler(state: Arc<AppState>, event: Request) -> Result<Response<Body>, Error> {
    let cors = CorsPolicy::from_headers(event.headers());

    info!(method = %event.method(), "RSVP request");

    let response = match *event.method() {
        Method::OPTIONS => empty_response(StatusCode::NO_CONTENT, cors.preflight_headers()),
        Method::HEAD => empty_response(StatusCode::NO_CONTENT, cors.base_headers()),
        Method::POST => match submit(&state, &event, &cors).await {
            Ok(response) => response,
            Err(e) => {
                if e.is_client_error() {
                    warn!(error = %e, "Rejected RSVP");
                } else {
                    error!(error = %e, detail = ?e.detail(), "Failed to send RSVP email");
                }
                error_response(&e, cors.base_headers())
            }
        },
        _ => {
            warn!(method = %event.method(), "Method not allowed");
            error_response(&shared::Error::MethodNotAllowed, cors.base_headers())
        }
    };

    Ok(response)
}

async fn submit(
    state: &AppState,
    event: &Request,
    cors: &CorsPolicy,
) -> shared::Result<Response<Body>> {
    let content_type = event
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("");
    if !is_json_content_type(content_type) {
        return Err(shared::Error::UnsupportedMediaType);
    }

    let rsvp = RsvpSubmission::from_json(event.body().as_ref())?;

    info!(
        guest_count = %rsvp.guest_count,
        non_veg = %rsvp.non_veg,
        veg = %rsvp.veg,
        has_comments = rsvp.comments().is_some(),
        "Valid RSVP received"
    );

    let email = OutboundEmail {
        from: state.config.sender(),
        to: vec![rsvp.email.clone()],
        subject: state.config.subject.clone(),
        html: confirmation_html(&rsvp, &state.config.sender_name),
    };

    state.email_client.send(&email).await?;

    json_response(
        StatusCode::OK,
        &MessageBody {
            message: "Email sent successfully!".to_string(),
        },
        cors.base_headers(),
    )
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .init();

    let state = Arc::new(AppState::new().await?);

    run(service_fn(move |event| {
        let state = Arc::clone(&state);
        async move { handler(state, event).await }
    }))
    .await
}
