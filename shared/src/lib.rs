//! Shared library for the RSVP Lambda function.
//!
//! This crate provides the request model, response helpers, and email provider client
//! used by the RSVP handler.

pub mod config;
pub mod cors;
pub mod email;
pub mod error;
pub mod http;
pub mod models;
pub mod render;
pub mod secrets;

pub use config::{ApiKeySource, Config};
pub use cors::CorsPolicy;
pub use email::{OutboundEmail, ResendClient};
pub use error::{Error, Result};
pub use models::{is_json_content_type, RsvpSubmission, REQUIRED_FIELDS};
pub use render::confirmation_html;
pub use secrets::{get_api_key, get_secret, resolve_api_key};
