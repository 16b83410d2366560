use axum::body::Body;
use axum::extract::DefaultBodyLimit;
use axum::http::{Request, Response};
use axum::routing::{get, post};
use axum::Router;
use std::time::Duration;
use tower_http::trace::TraceLayer;
use tracing::{info, info_span, Span};

use crate::client::client_ip;
use crate::handlers::{
    create_short_url_handler, fallback_handler, health_handler, redirect_handler, stats_handler,
};
use crate::state::AppState;

/// Largest accepted request body.
pub const BODY_LIMIT_BYTES: usize = 20 * 1024;

/// Top-level path segments owned by fixed routes. A short code with one of
/// these names could never be reached through `GET /{shortcode}`.
pub const RESERVED_PATHS: &[&str] = &["health", "shorturls"];

pub struct App {}

impl App {
    pub fn router(state: AppState) -> Router {
        Router::new()
            .route("/health", get(health_handler))
            .route("/shorturls", post(create_short_url_handler))
            .route("/shorturls/{shortcode}", get(stats_handler))
            .route("/{shortcode}", get(redirect_handler))
            .fallback(fallback_handler)
            .method_not_allowed_fallback(fallback_handler)
            .with_state(state)
            .layer(DefaultBodyLimit::max(BODY_LIMIT_BYTES))
            .layer(
                TraceLayer::new_for_http()
                    .make_span_with(|req: &Request<Body>| {
                        info_span!("http", method = %req.method(), path = %req.uri().path())
                    })
                    .on_request(|req: &Request<Body>, _span: &Span| {
                        let ip = client_ip(req.headers(), req.extensions())
                            .map(|ip| ip.to_string())
                            .unwrap_or_else(|| "unknown".to_string());
                        info!(method = %req.method(), path = %req.uri().path(), ip = %ip, "incoming_request");
                    })
                    .on_response(|res: &Response<Body>, latency: Duration, _span: &Span| {
                        info!(
                            status = res.status().as_u16(),
                            duration_ms = latency.as_millis() as u64,
                            "request_completed"
                        );
                    }),
            )
    }
}
