use crate::client::ClientInfo;
use crate::error::{AppError, Result};
use crate::model::{CreateShortUrlRequest, CreateShortUrlResponse, ShortUrlStatsResponse};
use crate::state::AppState;
use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, State};
use axum::http::{header, HeaderMap, HeaderValue, StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use axum::Json;
use linklet_core::time::iso8601;
use linklet_core::ShortCode;

pub async fn create_short_url_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    uri: Uri,
    body: std::result::Result<Json<CreateShortUrlRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<CreateShortUrlResponse>)> {
    let Json(request) = body?;
    let params = request.into_params()?;
    let record = state.shortener().shorten(params).await?;

    let base_url = match state.base_url() {
        Some(base) => base.to_string(),
        None => request_base_url(&headers, &uri),
    };

    let response = CreateShortUrlResponse {
        short_link: record.shortcode.to_url(&base_url),
        expiry: iso8601(record.expiry),
    };
    Ok((StatusCode::CREATED, Json(response)))
}

pub async fn stats_handler(
    State(state): State<AppState>,
    shortcode: std::result::Result<Path<String>, PathRejection>,
) -> Result<Json<ShortUrlStatsResponse>> {
    let code = path_code(shortcode)?;
    let record = state
        .shortener()
        .lookup(&code)
        .await?
        .ok_or(AppError::NotFound)?;

    let active = record.is_active_at(state.clock().now());
    Ok(Json(ShortUrlStatsResponse::new(&record, active)))
}

pub async fn redirect_handler(
    State(state): State<AppState>,
    ClientInfo(context): ClientInfo,
    shortcode: std::result::Result<Path<String>, PathRejection>,
) -> Result<Response> {
    let code = path_code(shortcode)?;
    let original_url = state.redirector().redirect(&code, context).await?;

    let location = location_header(&original_url)?;
    Ok((StatusCode::FOUND, [(header::LOCATION, location)]).into_response())
}

pub async fn fallback_handler() -> AppError {
    AppError::NotFound
}

/// A segment that does not decode, or fails validation, can never name a
/// stored code.
fn path_code(segment: std::result::Result<Path<String>, PathRejection>) -> Result<ShortCode> {
    let Path(segment) = segment.map_err(|_| AppError::NotFound)?;
    ShortCode::new(segment).map_err(|_| AppError::NotFound)
}

/// `http://<host>` of the current request, used when no public base URL is
/// configured.
fn request_base_url(headers: &HeaderMap, uri: &Uri) -> String {
    let host = headers
        .get(header::HOST)
        .and_then(|value| value.to_str().ok())
        .filter(|host| !host.is_empty())
        .or_else(|| uri.authority().map(|authority| authority.as_str()))
        .unwrap_or("localhost");
    format!("http://{host}")
}

fn location_header(original_url: &str) -> Result<HeaderValue> {
    if original_url.is_ascii() {
        if let Ok(value) = HeaderValue::from_str(original_url) {
            return Ok(value);
        }
    }
    // Stored URLs passed WHATWG parsing; their serialized form is ASCII.
    url::Url::parse(original_url)
        .ok()
        .and_then(|url| HeaderValue::from_str(url.as_str()).ok())
        .ok_or_else(|| AppError::Internal(format!("unencodable location: {original_url}")))
}
