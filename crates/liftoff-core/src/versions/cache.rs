//! Concurrent cache of resolved library versions

use super::fetcher::{VersionSource, FETCH_TIMEOUT};
use super::Artifact;
use crate::error::VersionError;
use dashmap::DashMap;
use std::sync::Arc;
use tokio::task::JoinSet;
use tokio::time::timeout;

/// Latest versions keyed by `group:name`.
///
/// Filled in the background before generation starts. Two tasks filling the
/// same key race harmlessly since both write the same answer. Generation only
/// reads from the cache and falls back to a library's built-in version for
/// anything missing.
#[derive(Debug, Default)]
pub struct VersionCache {
    versions: DashMap<String, String>,
}

impl VersionCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, artifact: &Artifact) -> Option<String> {
        self.versions.get(&artifact.key()).map(|v| v.value().clone())
    }

    pub fn insert(&self, artifact: &Artifact, version: impl Into<String>) {
        self.versions.insert(artifact.key(), version.into());
    }

    /// Cached version, or `fallback` when the lookup never ran or failed
    pub fn resolve(&self, artifact: &Artifact, fallback: &str) -> String {
        self.get(artifact).unwrap_or_else(|| fallback.to_string())
    }

    pub fn len(&self) -> usize {
        self.versions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.versions.is_empty()
    }

    /// Look up every searchable artifact concurrently, one task each.
    /// Failures are logged and leave the key empty. Returns the number of
    /// versions cached by this call.
    pub async fn prefetch<I>(&self, source: Arc<dyn VersionSource>, artifacts: I) -> usize
    where
        I: IntoIterator<Item = Artifact>,
    {
        let mut tasks = JoinSet::new();
        for artifact in artifacts {
            if !artifact.is_searchable() || self.versions.contains_key(&artifact.key()) {
                continue;
            }
            let source = Arc::clone(&source);
            tasks.spawn(async move {
                let result = match timeout(FETCH_TIMEOUT, source.latest_version(&artifact)).await {
                    Ok(result) => result,
                    Err(_) => Err(VersionError::Timeout(artifact.key())),
                };
                (artifact, result)
            });
        }

        let mut fetched = 0;
        while let Some(joined) = tasks.join_next().await {
            match joined {
                Ok((artifact, Ok(version))) => {
                    tracing::debug!(%artifact, %version, "resolved latest version");
                    self.insert(&artifact, version);
                    fetched += 1;
                }
                Ok((artifact, Err(e))) => {
                    tracing::warn!(%artifact, error = %e, "version lookup failed, using fallback");
                }
                Err(e) => {
                    tracing::warn!(error = %e, "version lookup task panicked");
                }
            }
        }
        fetched
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;

    const VIS_UI: Artifact = Artifact::maven("com.kotcrab.vis", "vis-ui");
    const PIE_MENU: Artifact = Artifact::jitpack("com.github.payne911", "PieMenu");

    struct FixedSource(&'static str);

    #[async_trait]
    impl VersionSource for FixedSource {
        async fn latest_version(&self, _artifact: &Artifact) -> Result<String, VersionError> {
            Ok(self.0.to_string())
        }
    }

    struct OfflineSource;

    #[async_trait]
    impl VersionSource for OfflineSource {
        async fn latest_version(&self, artifact: &Artifact) -> Result<String, VersionError> {
            Err(VersionError::Timeout(artifact.key()))
        }
    }

    #[test]
    fn test_resolve_falls_back_when_missing() {
        let cache = VersionCache::new();
        assert_eq!(cache.resolve(&VIS_UI, "1.5.3"), "1.5.3");

        cache.insert(&VIS_UI, "1.5.4");
        assert_eq!(cache.resolve(&VIS_UI, "1.5.3"), "1.5.4");
    }

    #[tokio::test]
    async fn test_prefetch_fills_searchable_artifacts_only() {
        let cache = VersionCache::new();
        let fetched = cache
            .prefetch(Arc::new(FixedSource("9.9.9")), [VIS_UI, PIE_MENU])
            .await;

        assert_eq!(fetched, 1);
        assert_eq!(cache.get(&VIS_UI).as_deref(), Some("9.9.9"));
        assert!(cache.get(&PIE_MENU).is_none());
    }

    #[tokio::test]
    async fn test_prefetch_failure_leaves_cache_empty() {
        let cache = VersionCache::new();
        let fetched = cache.prefetch(Arc::new(OfflineSource), [VIS_UI]).await;

        assert_eq!(fetched, 0);
        assert!(cache.is_empty());
        assert_eq!(cache.resolve(&VIS_UI, "1.5.3"), "1.5.3");
    }

    #[tokio::test]
    async fn test_prefetch_skips_cached_keys() {
        let cache = VersionCache::new();
        cache.insert(&VIS_UI, "1.0.0");
        let fetched = cache
            .prefetch(Arc::new(FixedSource("9.9.9")), [VIS_UI])
            .await;

        assert_eq!(fetched, 0);
        assert_eq!(cache.get(&VIS_UI).as_deref(), Some("1.0.0"));
    }
}
