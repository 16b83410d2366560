use axum::extract::{ConnectInfo, FromRequestParts};
use axum::http::request::Parts;
use axum::http::{header, Extensions, HeaderMap};
use linklet_redirector::ClickContext;
use std::convert::Infallible;
use std::net::{IpAddr, SocketAddr};

const X_FORWARDED_FOR: &str = "x-forwarded-for";

/// Best guess at the requester's address: the first hop listed in
/// `X-Forwarded-For`, else the TCP peer.
pub fn client_ip(headers: &HeaderMap, extensions: &Extensions) -> Option<IpAddr> {
    forwarded_for(headers).or_else(|| {
        extensions
            .get::<ConnectInfo<SocketAddr>>()
            .map(|ConnectInfo(addr)| addr.ip())
    })
}

fn forwarded_for(headers: &HeaderMap) -> Option<IpAddr> {
    let value = headers.get(X_FORWARDED_FOR)?.to_str().ok()?;
    let first = value.split(',').next()?.trim();
    first
        .parse::<IpAddr>()
        .ok()
        .or_else(|| first.parse::<SocketAddr>().ok().map(|addr| addr.ip()))
}

fn header_string(headers: &HeaderMap, name: header::HeaderName) -> Option<String> {
    headers
        .get(name)
        .and_then(|value| value.to_str().ok())
        .map(str::to_owned)
}

/// Extracts the click metadata of a redirect request.
#[derive(Debug, Clone)]
pub struct ClientInfo(pub ClickContext);

impl<S> FromRequestParts<S> for ClientInfo
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(ClientInfo(ClickContext {
            ip: client_ip(&parts.headers, &parts.extensions),
            referrer: header_string(&parts.headers, header::REFERER),
            user_agent: header_string(&parts.headers, header::USER_AGENT),
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn forwarded_for_takes_first_hop() {
        let mut headers = HeaderMap::new();
        headers.insert(
            X_FORWARDED_FOR,
            HeaderValue::from_static("203.0.113.5, 10.0.0.1"),
        );
        assert_eq!(
            client_ip(&headers, &Extensions::new()),
            Some("203.0.113.5".parse().unwrap())
        );
    }

    #[test]
    fn falls_back_to_peer_address() {
        let mut extensions = Extensions::new();
        extensions.insert(ConnectInfo::<SocketAddr>("198.51.100.7:5555".parse().unwrap()));
        assert_eq!(
            client_ip(&HeaderMap::new(), &extensions),
            Some("198.51.100.7".parse().unwrap())
        );
    }

    #[test]
    fn garbage_forwarded_for_is_ignored() {
        let mut headers = HeaderMap::new();
        headers.insert(X_FORWARDED_FOR, HeaderValue::from_static("unknown"));
        assert_eq!(client_ip(&headers, &Extensions::new()), None);
    }
}
