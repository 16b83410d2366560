use crate::error::AppError;
use linklet_core::time::iso8601;
use linklet_core::{is_valid_url, ClickEvent, ShortLinkRecord, ShortenParams, Validity};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Body of `POST /shorturls`.
///
/// Fields are kept loosely typed so that a wrong type is reported with the
/// matching domain error instead of a generic deserialization failure.
#[derive(Debug, Default, Deserialize)]
pub struct CreateShortUrlRequest {
    #[serde(default)]
    pub url: Option<Value>,
    #[serde(default)]
    pub validity: Option<Value>,
    #[serde(default)]
    pub shortcode: Option<Value>,
}

impl CreateShortUrlRequest {
    pub fn into_params(self) -> Result<ShortenParams, AppError> {
        let url = match self.url {
            Some(Value::String(url)) if is_valid_url(&url) => url,
            _ => return Err(AppError::InvalidUrl),
        };

        let custom_code = match self.shortcode {
            None | Some(Value::Null) => None,
            Some(Value::String(code)) => Some(code),
            Some(_) => return Err(AppError::InvalidShortCode),
        };

        Ok(ShortenParams {
            original_url: url,
            validity: parse_validity(self.validity.as_ref()),
            custom_code,
        })
    }
}

/// Accepts numbers and numeric strings; anything else means "default".
fn parse_validity(value: Option<&Value>) -> Validity {
    let minutes = match value {
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::String(s)) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    minutes.map_or(Validity::Default, Validity::from_minutes)
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateShortUrlResponse {
    pub short_link: String,
    pub expiry: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClickResponse {
    pub timestamp: String,
    pub referrer: Option<String>,
    pub user_agent: Option<String>,
    pub country: String,
}

impl From<&ClickEvent> for ClickResponse {
    fn from(click: &ClickEvent) -> Self {
        Self {
            timestamp: iso8601(click.timestamp),
            referrer: click.referrer.clone(),
            user_agent: click.user_agent.clone(),
            country: click.country.clone(),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShortUrlStatsResponse {
    pub shortcode: String,
    pub original_url: String,
    pub created_at: String,
    pub expiry: String,
    pub total_clicks: u64,
    pub clicks: Vec<ClickResponse>,
    pub active: bool,
}

impl ShortUrlStatsResponse {
    pub fn new(record: &ShortLinkRecord, active: bool) -> Self {
        Self {
            shortcode: record.shortcode.to_string(),
            original_url: record.original_url.clone(),
            created_at: iso8601(record.created_at),
            expiry: iso8601(record.expiry),
            total_clicks: record.hit_count(),
            clicks: record.clicks().iter().map(ClickResponse::from).collect(),
            active,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub ok: bool,
}
