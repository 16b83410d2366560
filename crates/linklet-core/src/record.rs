use crate::shortcode::ShortCode;
use jiff::Timestamp;
use serde::{Deserialize, Serialize};

/// One redirect served for a short code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClickEvent {
    pub timestamp: Timestamp,
    /// Value of the `Referer` header, if any.
    pub referrer: Option<String>,
    pub user_agent: Option<String>,
    /// Country code resolved from the requester IP, or `"Unknown"`.
    pub country: String,
}

/// A stored short link together with its click history.
///
/// `hit_count` always equals `clicks.len()`; both only change through
/// [`ShortLinkRecord::push_click`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShortLinkRecord {
    pub shortcode: ShortCode,
    pub original_url: String,
    pub created_at: Timestamp,
    pub expiry: Timestamp,
    hit_count: u64,
    last_access: Option<Timestamp>,
    clicks: Vec<ClickEvent>,
}

impl ShortLinkRecord {
    /// Creates a record with no recorded clicks.
    pub fn new(
        shortcode: ShortCode,
        original_url: impl Into<String>,
        created_at: Timestamp,
        expiry: Timestamp,
    ) -> Self {
        Self {
            shortcode,
            original_url: original_url.into(),
            created_at,
            expiry,
            hit_count: 0,
            last_access: None,
            clicks: Vec::new(),
        }
    }

    pub fn hit_count(&self) -> u64 {
        self.hit_count
    }

    pub fn last_access(&self) -> Option<Timestamp> {
        self.last_access
    }

    /// Click history, oldest first.
    pub fn clicks(&self) -> &[ClickEvent] {
        &self.clicks
    }

    /// A record is active while `now` is strictly before its expiry.
    pub fn is_active_at(&self, now: Timestamp) -> bool {
        now < self.expiry
    }

    /// Redirects are refused once `now` is past the expiry. At the expiry
    /// instant itself the record is no longer active but not yet expired.
    pub fn is_expired_at(&self, now: Timestamp) -> bool {
        now > self.expiry
    }

    /// Appends a click and updates the counters in one step.
    pub fn push_click(&mut self, click: ClickEvent) {
        self.hit_count += 1;
        self.last_access = Some(click.timestamp);
        self.clicks.push(click);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jiff::SignedDuration;

    fn record(created_at: Timestamp, validity: SignedDuration) -> ShortLinkRecord {
        ShortLinkRecord::new(
            ShortCode::new_unchecked("abc1234"),
            "https://example.com",
            created_at,
            created_at + validity,
        )
    }

    fn click(at: Timestamp) -> ClickEvent {
        ClickEvent {
            timestamp: at,
            referrer: None,
            user_agent: Some("curl/8.0".to_string()),
            country: "Unknown".to_string(),
        }
    }

    #[test]
    fn new_record_has_no_clicks() {
        let now = Timestamp::from_second(1_000).unwrap();
        let rec = record(now, SignedDuration::from_mins(30));

        assert_eq!(rec.hit_count(), 0);
        assert_eq!(rec.last_access(), None);
        assert!(rec.clicks().is_empty());
    }

    #[test]
    fn active_until_expiry() {
        let created = Timestamp::from_second(1_000).unwrap();
        let rec = record(created, SignedDuration::from_mins(1));

        assert!(rec.is_active_at(created));
        assert!(rec.is_active_at(created + SignedDuration::from_secs(59)));
        assert!(!rec.is_active_at(created + SignedDuration::from_secs(60)));
        assert!(!rec.is_active_at(created + SignedDuration::from_secs(61)));
    }

    #[test]
    fn expired_only_after_expiry() {
        let created = Timestamp::from_second(1_000).unwrap();
        let rec = record(created, SignedDuration::from_mins(1));
        let expiry = created + SignedDuration::from_mins(1);

        assert!(!rec.is_expired_at(created + SignedDuration::from_secs(59)));
        assert!(!rec.is_expired_at(expiry));
        assert!(!rec.is_active_at(expiry));
        assert!(rec.is_expired_at(expiry + SignedDuration::from_millis(1)));
    }

    #[test]
    fn push_click_keeps_counters_in_step() {
        let created = Timestamp::from_second(1_000).unwrap();
        let mut rec = record(created, SignedDuration::from_mins(30));

        let first = created + SignedDuration::from_secs(5);
        let second = created + SignedDuration::from_secs(9);
        rec.push_click(click(first));
        rec.push_click(click(second));

        assert_eq!(rec.hit_count(), 2);
        assert_eq!(rec.hit_count() as usize, rec.clicks().len());
        assert_eq!(rec.last_access(), Some(second));
        assert_eq!(rec.clicks()[0].timestamp, first);
        assert_eq!(rec.clicks()[1].timestamp, second);
    }
}
