//! Prompt → reply memoization.
//!
//! `ResponseCache` is keyed by the exact prompt text. `CachedGenerator` wraps any
//! `TextGenerator` and consults the cache before calling through. Failures are
//! never cached, so a later identical submission gets a fresh attempt.

use std::collections::HashMap;
use std::num::NonZeroUsize;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use lru::LruCache;
use tokio::sync::Mutex;
use tracing::debug;

use crate::llm_client::{LlmError, TextGenerator};

/// Retention policy for cached replies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CachePolicy {
    /// Keep every reply for the process lifetime.
    Unbounded,
    /// Keep at most N replies, evicting the least recently used.
    Lru(NonZeroUsize),
    /// Never store anything.
    Disabled,
}

enum Store {
    Unbounded(HashMap<String, String>),
    Lru(LruCache<String, String>),
    Disabled,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CacheStats {
    pub hits: u64,
    pub misses: u64,
}

pub struct ResponseCache {
    store: Mutex<Store>,
    hits: AtomicU64,
    misses: AtomicU64,
}

impl ResponseCache {
    pub fn new(policy: CachePolicy) -> Self {
        let store = match policy {
            CachePolicy::Unbounded => Store::Unbounded(HashMap::new()),
            CachePolicy::Lru(capacity) => Store::Lru(LruCache::new(capacity)),
            CachePolicy::Disabled => Store::Disabled,
        };
        Self {
            store: Mutex::new(store),
            hits: AtomicU64::new(0),
            misses: AtomicU64::new(0),
        }
    }

    pub async fn get(&self, prompt: &str) -> Option<String> {
        let mut store = self.store.lock().await;
        let found = match &mut *store {
            Store::Unbounded(map) => map.get(prompt).cloned(),
            Store::Lru(lru) => lru.get(prompt).cloned(),
            Store::Disabled => None,
        };
        let counter = if found.is_some() { &self.hits } else { &self.misses };
        counter.fetch_add(1, Ordering::Relaxed);
        found
    }

    pub async fn put(&self, prompt: String, reply: String) {
        let mut store = self.store.lock().await;
        match &mut *store {
            Store::Unbounded(map) => {
                map.insert(prompt, reply);
            }
            Store::Lru(lru) => {
                lru.put(prompt, reply);
            }
            Store::Disabled => {}
        }
    }

    pub async fn entry_count(&self) -> usize {
        match &*self.store.lock().await {
            Store::Unbounded(map) => map.len(),
            Store::Lru(lru) => lru.len(),
            Store::Disabled => 0,
        }
    }

    pub fn stats(&self) -> CacheStats {
        CacheStats {
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
        }
    }
}

/// A `TextGenerator` that memoizes successful replies of the wrapped generator.
pub struct CachedGenerator {
    inner: Arc<dyn TextGenerator>,
    cache: ResponseCache,
}

impl CachedGenerator {
    pub fn new(inner: Arc<dyn TextGenerator>, policy: CachePolicy) -> Self {
        Self {
            inner,
            cache: ResponseCache::new(policy),
        }
    }

    #[cfg(test)]
    pub fn cache(&self) -> &ResponseCache {
        &self.cache
    }
}

#[async_trait]
impl TextGenerator for CachedGenerator {
    async fn generate(&self, prompt: &str) -> Result<String, LlmError> {
        if let Some(reply) = self.cache.get(prompt).await {
            let stats = self.cache.stats();
            debug!(
                "Cache hit for prompt ({} chars): hits={}, misses={}",
                prompt.len(),
                stats.hits,
                stats.misses
            );
            return Ok(reply);
        }

        let reply = self.inner.generate(prompt).await?;
        self.cache.put(prompt.to_string(), reply.clone()).await;
        debug!("Cached reply, {} entries held", self.cache.entry_count().await);
        Ok(reply)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::AtomicUsize;

    /// Echoes the prompt back, failing for prompts that start with "fail".
    struct EchoGenerator {
        calls: AtomicUsize,
    }

    #[async_trait]
    impl TextGenerator for EchoGenerator {
        async fn generate(&self, prompt: &str) -> Result<String, LlmError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if prompt.starts_with("fail") {
                return Err(LlmError::EmptyContent);
            }
            Ok(format!("reply to {prompt}"))
        }
    }

    fn echo() -> Arc<EchoGenerator> {
        Arc::new(EchoGenerator {
            calls: AtomicUsize::new(0),
        })
    }

    #[tokio::test]
    async fn test_identical_prompt_calls_through_once() {
        let inner = echo();
        let cached = CachedGenerator::new(inner.clone(), CachePolicy::Unbounded);

        assert_eq!(cached.generate("a").await.unwrap(), "reply to a");
        assert_eq!(cached.generate("a").await.unwrap(), "reply to a");

        assert_eq!(inner.calls.load(Ordering::SeqCst), 1);
        assert_eq!(cached.cache().stats(), CacheStats { hits: 1, misses: 1 });
    }

    #[tokio::test]
    async fn test_failures_are_not_cached() {
        let inner = echo();
        let cached = CachedGenerator::new(inner.clone(), CachePolicy::Unbounded);

        assert!(cached.generate("fail once").await.is_err());
        assert!(cached.generate("fail once").await.is_err());

        assert_eq!(inner.calls.load(Ordering::SeqCst), 2);
        assert_eq!(cached.cache().entry_count().await, 0);
    }

    #[tokio::test]
    async fn test_disabled_policy_always_calls_through() {
        let inner = echo();
        let cached = CachedGenerator::new(inner.clone(), CachePolicy::Disabled);

        cached.generate("a").await.unwrap();
        cached.generate("a").await.unwrap();

        assert_eq!(inner.calls.load(Ordering::SeqCst), 2);
        assert_eq!(cached.cache().entry_count().await, 0);
    }

    #[tokio::test]
    async fn test_lru_policy_evicts_least_recently_used() {
        let cache = ResponseCache::new(CachePolicy::Lru(NonZeroUsize::new(2).unwrap()));
        cache.put("a".into(), "1".into()).await;
        cache.put("b".into(), "2".into()).await;
        assert_eq!(cache.get("a").await.as_deref(), Some("1"));
        cache.put("c".into(), "3".into()).await;

        assert_eq!(cache.entry_count().await, 2);
        assert!(cache.get("b").await.is_none());
        assert_eq!(cache.get("a").await.as_deref(), Some("1"));
        assert_eq!(cache.get("c").await.as_deref(), Some("3"));
    }

    #[tokio::test]
    async fn test_unbounded_policy_keeps_everything() {
        let cache = ResponseCache::new(CachePolicy::Unbounded);
        for i in 0..100 {
            cache.put(format!("prompt {i}"), i.to_string()).await;
        }
        assert_eq!(cache.entry_count().await, 100);
        assert_eq!(cache.get("prompt 0").await.as_deref(), Some("0"));
    }
}
