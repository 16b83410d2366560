use url::Url;

/// Returns `true` if `candidate` is an absolute URL with an `http` or
/// `https` scheme.
///
/// Parsing follows the WHATWG URL standard, so scheme matching is
/// case-insensitive (`HTTPS://example.com` is accepted) and malformed input
/// simply yields `false`.
pub fn is_valid_url(candidate: &str) -> bool {
    match Url::parse(candidate) {
        Ok(url) => matches!(url.scheme(), "http" | "https") && url.has_host(),
        Err(_) => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_http_and_https() {
        assert!(is_valid_url("https://example.com/page"));
        assert!(is_valid_url("http://example.com"));
        assert!(is_valid_url("https://example.com:8443/a?b=c#d"));
        assert!(is_valid_url("HTTPS://EXAMPLE.COM"));
    }

    #[test]
    fn rejects_other_schemes() {
        assert!(!is_valid_url("ftp://example.com"));
        assert!(!is_valid_url("mailto:someone@example.com"));
        assert!(!is_valid_url("javascript:alert(1)"));
        assert!(!is_valid_url("file:///etc/passwd"));
    }

    #[test]
    fn rejects_malformed_input() {
        assert!(!is_valid_url(""));
        assert!(!is_valid_url("not-a-valid-url"));
        assert!(!is_valid_url("example.com/page"));
        assert!(!is_valid_url("https://"));
        assert!(!is_valid_url("http://exa mple.com"));
    }
}
