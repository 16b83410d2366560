use async_trait::async_trait;
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use linklet_core::error::{Result, StorageError};
use linklet_core::{ClickEvent, ReadRegistry, Registry, ShortCode, ShortLinkRecord};
use tracing::trace;

/// In-memory implementation of the registry using DashMap.
///
/// DashMap shards its locks, so requests touching different codes do not
/// block each other. Every mutation of a single record happens while the
/// shard's write guard is held, which is what makes `create` an atomic
/// insert-if-absent and keeps `hit_count` and `clicks` in step for readers.
#[derive(Debug, Default)]
pub struct InMemoryRegistry {
    storage: DashMap<ShortCode, ShortLinkRecord>,
}

impl InMemoryRegistry {
    /// Creates a new, empty registry.
    pub fn new() -> Self {
        Self {
            storage: DashMap::new(),
        }
    }

    /// Number of registered short codes.
    pub fn len(&self) -> usize {
        self.storage.len()
    }

    pub fn is_empty(&self) -> bool {
        self.storage.is_empty()
    }
}

#[async_trait]
impl ReadRegistry for InMemoryRegistry {
    async fn get(&self, code: &ShortCode) -> Result<Option<ShortLinkRecord>> {
        Ok(self.storage.get(code).map(|entry| entry.value().clone()))
    }

    async fn exists(&self, code: &ShortCode) -> Result<bool> {
        Ok(self.storage.contains_key(code))
    }
}

#[async_trait]
impl Registry for InMemoryRegistry {
    async fn create(&self, record: ShortLinkRecord) -> Result<()> {
        match self.storage.entry(record.shortcode.clone()) {
            Entry::Occupied(entry) => Err(StorageError::Conflict(entry.key().to_string())),
            Entry::Vacant(entry) => {
                trace!(code = %record.shortcode, "registering short code");
                entry.insert(record);
                Ok(())
            }
        }
    }

    async fn record_click(&self, code: &ShortCode, click: ClickEvent) -> Result<bool> {
        let Some(mut entry) = self.storage.get_mut(code) else {
            trace!(code = %code, "click for unknown short code ignored");
            return Ok(false);
        };

        entry.push_click(click);
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jiff::{SignedDuration, Timestamp};
    use std::sync::Arc;

    fn code(s: &str) -> ShortCode {
        ShortCode::new_unchecked(s)
    }

    fn record(c: &str, url: &str) -> ShortLinkRecord {
        let now = Timestamp::now();
        ShortLinkRecord::new(code(c), url, now, now + SignedDuration::from_mins(30))
    }

    fn click(country: &str) -> ClickEvent {
        ClickEvent {
            timestamp: Timestamp::now(),
            referrer: Some("https://referrer.example".to_string()),
            user_agent: Some("test-agent".to_string()),
            country: country.to_string(),
        }
    }

    #[tokio::test]
    async fn create_and_get() {
        let registry = InMemoryRegistry::new();

        registry
            .create(record("abc123", "https://example.com"))
            .await
            .unwrap();

        let result = registry.get(&code("abc123")).await.unwrap().unwrap();
        assert_eq!(result.original_url, "https://example.com");
        assert_eq!(result.hit_count(), 0);
        assert_eq!(registry.len(), 1);
    }

    #[tokio::test]
    async fn get_nonexistent() {
        let registry = InMemoryRegistry::new();

        let result = registry.get(&code("nope")).await.unwrap();
        assert!(result.is_none());
        assert!(registry.is_empty());
    }

    #[tokio::test]
    async fn create_conflict_keeps_first_record() {
        let registry = InMemoryRegistry::new();

        registry
            .create(record("abc123", "https://example.com"))
            .await
            .unwrap();

        let err = registry
            .create(record("abc123", "https://other.com"))
            .await
            .unwrap_err();

        assert_eq!(err, StorageError::Conflict("abc123".to_string()));
        let kept = registry.get(&code("abc123")).await.unwrap().unwrap();
        assert_eq!(kept.original_url, "https://example.com");
    }

    #[tokio::test]
    async fn expired_records_stay_visible() {
        let registry = InMemoryRegistry::new();
        let past = Timestamp::now() - SignedDuration::from_hours(2);
        let expired = ShortLinkRecord::new(
            code("old-one"),
            "https://example.com",
            past,
            past + SignedDuration::from_mins(1),
        );

        registry.create(expired).await.unwrap();

        assert!(registry.exists(&code("old-one")).await.unwrap());
        assert!(registry.get(&code("old-one")).await.unwrap().is_some());
        // expired codes are not reusable either
        assert!(registry
            .create(record("old-one", "https://new.com"))
            .await
            .is_err());
    }

    #[tokio::test]
    async fn exists_checks() {
        let registry = InMemoryRegistry::new();

        assert!(!registry.exists(&code("abc123")).await.unwrap());

        registry
            .create(record("abc123", "https://example.com"))
            .await
            .unwrap();

        assert!(registry.exists(&code("abc123")).await.unwrap());
    }

    #[tokio::test]
    async fn record_click_appends_in_order() {
        let registry = InMemoryRegistry::new();
        registry
            .create(record("abc123", "https://example.com"))
            .await
            .unwrap();

        assert!(registry
            .record_click(&code("abc123"), click("US"))
            .await
            .unwrap());
        assert!(registry
            .record_click(&code("abc123"), click("DE"))
            .await
            .unwrap());

        let rec = registry.get(&code("abc123")).await.unwrap().unwrap();
        assert_eq!(rec.hit_count(), 2);
        let countries: Vec<_> = rec.clicks().iter().map(|c| c.country.as_str()).collect();
        assert_eq!(countries, ["US", "DE"]);
        assert_eq!(rec.last_access(), Some(rec.clicks()[1].timestamp));
    }

    #[tokio::test]
    async fn record_click_on_unknown_code_is_noop() {
        let registry = InMemoryRegistry::new();

        let recorded = registry
            .record_click(&code("missing"), click("US"))
            .await
            .unwrap();

        assert!(!recorded);
        assert!(registry.is_empty());
    }

    #[tokio::test]
    async fn get_is_idempotent() {
        let registry = InMemoryRegistry::new();
        registry
            .create(record("abc123", "https://example.com"))
            .await
            .unwrap();
        registry
            .record_click(&code("abc123"), click("FR"))
            .await
            .unwrap();

        let first = registry.get(&code("abc123")).await.unwrap();
        let second = registry.get(&code("abc123")).await.unwrap();
        assert_eq!(first, second);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn concurrent_clicks_are_not_lost() {
        let registry = Arc::new(InMemoryRegistry::new());
        registry
            .create(record("hot-code", "https://example.com"))
            .await
            .unwrap();

        let mut handles = vec![];
        for _ in 0..16 {
            let registry = Arc::clone(&registry);
            handles.push(tokio::spawn(async move {
                for _ in 0..50 {
                    registry
                        .record_click(&code("hot-code"), click("Unknown"))
                        .await
                        .unwrap();
                }
            }));
        }

        // readers running alongside must never see the counters disagree
        let reader = {
            let registry = Arc::clone(&registry);
            tokio::spawn(async move {
                for _ in 0..200 {
                    let rec = registry.get(&code("hot-code")).await.unwrap().unwrap();
                    assert_eq!(rec.hit_count() as usize, rec.clicks().len());
                    tokio::task::yield_now().await;
                }
            })
        };

        for handle in handles {
            handle.await.unwrap();
        }
        reader.await.unwrap();

        let rec = registry.get(&code("hot-code")).await.unwrap().unwrap();
        assert_eq!(rec.hit_count(), 800);
        assert_eq!(rec.clicks().len(), 800);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn concurrent_create_same_code_has_one_winner() {
        let registry = Arc::new(InMemoryRegistry::new());
        let mut handles = vec![];

        for i in 0..32u32 {
            let registry = Arc::clone(&registry);
            handles.push(tokio::spawn(async move {
                registry
                    .create(record("contested", &format!("https://example{}.com", i)))
                    .await
                    .is_ok()
            }));
        }

        let mut winners = 0;
        for handle in handles {
            if handle.await.unwrap() {
                winners += 1;
            }
        }

        assert_eq!(winners, 1);
        assert_eq!(registry.len(), 1);
    }

    #[tokio::test]
    async fn concurrent_access() {
        let registry = Arc::new(InMemoryRegistry::new());
        let mut handles = vec![];

        for i in 0..10u64 {
            let registry = Arc::clone(&registry);
            handles.push(tokio::spawn(async move {
                let c = format!("code-{:03}", i);
                registry
                    .create(record(&c, &format!("https://example{}.com", i)))
                    .await
                    .unwrap();
            }));
        }

        for handle in handles {
            handle.await.unwrap();
        }

        for i in 0..10u64 {
            let c = code(&format!("code-{:03}", i));
            let result = registry.get(&c).await.unwrap().unwrap();
            assert_eq!(result.original_url, format!("https://example{}.com", i));
        }
    }
}
