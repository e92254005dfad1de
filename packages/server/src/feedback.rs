//! Append-only feedback store with JSON file persistence.
//!
//! Records are loaded once at startup and the whole file is rewritten on
//! every submission. A missing or unreadable file starts an empty store.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use chrono::Local;
use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;
use tracing::{info, warn};
use uuid::Uuid;

/// One thumbs-up/down submission.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedbackEntry {
    pub id: String,
    pub url: String,
    pub persona: String,
    pub feedback: String,
    pub timestamp: String,
    pub created_at: String,
}

/// Per-persona aggregate counts.
#[derive(Debug, Clone, Default, Serialize)]
pub struct PersonaStats {
    pub positive: u64,
    pub negative: u64,
    pub total: u64,
    pub positive_rate: f64,
}

/// Aggregate statistics over all stored feedback.
#[derive(Debug, Serialize)]
pub struct FeedbackStats {
    pub total_feedback: u64,
    pub positive_count: u64,
    pub negative_count: u64,
    pub positive_rate: f64,
    pub negative_rate: f64,
    pub persona_stats: HashMap<String, PersonaStats>,
    pub recent_feedback: Vec<FeedbackEntry>,
    pub last_updated: String,
}

pub struct FeedbackStore {
    path: PathBuf,
    entries: RwLock<Vec<FeedbackEntry>>,
}

impl FeedbackStore {
    /// Open a store backed by the given file, loading any existing records.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let entries = load_entries(&path);
        info!(path = %path.display(), count = entries.len(), "Feedback store loaded");

        Self {
            path,
            entries: RwLock::new(entries),
        }
    }

    /// Append a feedback record and persist the full list. Returns the new
    /// record's id.
    pub async fn record(&self, url: &str, persona: &str, feedback: &str) -> anyhow::Result<String> {
        let now = Local::now();
        let entry = FeedbackEntry {
            id: Uuid::new_v4().to_string(),
            url: url.to_string(),
            persona: persona.to_string(),
            feedback: feedback.to_string(),
            timestamp: now.to_rfc3339(),
            created_at: now.format("%Y-%m-%d %H:%M:%S").to_string(),
        };
        let id = entry.id.clone();

        let mut entries = self.entries.write().await;
        entries.push(entry);

        let serialized = serde_json::to_string_pretty(&*entries)?;
        tokio::fs::write(&self.path, serialized).await?;

        info!(id = %id, persona, feedback, "Feedback recorded");
        Ok(id)
    }

    /// Compute aggregate statistics over all stored records.
    pub async fn stats(&self) -> FeedbackStats {
        let entries = self.entries.read().await;
        let total = entries.len() as u64;

        let positive = entries.iter().filter(|e| e.feedback == "positive").count() as u64;
        let negative = entries.iter().filter(|e| e.feedback == "negative").count() as u64;

        let mut persona_stats: HashMap<String, PersonaStats> = HashMap::new();
        for entry in entries.iter() {
            let stats = persona_stats.entry(entry.persona.clone()).or_default();
            stats.total += 1;
            match entry.feedback.as_str() {
                "positive" => stats.positive += 1,
                "negative" => stats.negative += 1,
                _ => {}
            }
        }
        for stats in persona_stats.values_mut() {
            if stats.total > 0 {
                stats.positive_rate = round1(stats.positive as f64 / stats.total as f64 * 100.0);
            }
        }

        // Most recent first, capped at 10
        let mut recent: Vec<FeedbackEntry> = entries.clone();
        recent.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        recent.truncate(10);

        FeedbackStats {
            total_feedback: total,
            positive_count: positive,
            negative_count: negative,
            positive_rate: rate(positive, total),
            negative_rate: rate(negative, total),
            persona_stats,
            recent_feedback: recent,
            last_updated: Local::now().to_rfc3339(),
        }
    }

    /// Number of stored records.
    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }
}

fn load_entries(path: &Path) -> Vec<FeedbackEntry> {
    match std::fs::read_to_string(path) {
        Ok(raw) => serde_json::from_str(&raw).unwrap_or_else(|e| {
            warn!(path = %path.display(), error = %e, "Ignoring malformed feedback file");
            Vec::new()
        }),
        Err(_) => Vec::new(),
    }
}

fn rate(count: u64, total: u64) -> f64 {
    if total == 0 {
        return 0.0;
    }
    round1(count as f64 / total as f64 * 100.0)
}

/// Round to one decimal place for stable JSON output.
fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_store() -> (tempfile::TempDir, FeedbackStore) {
        let dir = tempfile::tempdir().unwrap();
        let store = FeedbackStore::open(dir.path().join("feedback_data.json"));
        (dir, store)
    }

    #[tokio::test]
    async fn test_empty_stats() {
        let (_dir, store) = temp_store();
        let stats = store.stats().await;

        assert_eq!(stats.total_feedback, 0);
        assert_eq!(stats.positive_rate, 0.0);
        assert!(stats.persona_stats.is_empty());
        assert!(stats.recent_feedback.is_empty());
    }

    #[tokio::test]
    async fn test_record_and_stats() {
        let (_dir, store) = temp_store();

        store
            .record("https://x.atlassian.net/wiki/spaces/A/pages/1/T", "developer", "positive")
            .await
            .unwrap();
        store
            .record("https://x.atlassian.net/wiki/spaces/A/pages/1/T", "developer", "negative")
            .await
            .unwrap();
        store
            .record("https://x.atlassian.net/wiki/spaces/A/pages/2/T", "designer", "positive")
            .await
            .unwrap();

        let stats = store.stats().await;
        assert_eq!(stats.total_feedback, 3);
        assert_eq!(stats.positive_count, 2);
        assert_eq!(stats.negative_count, 1);
        assert_eq!(stats.positive_rate, 66.7);
        assert_eq!(stats.negative_rate, 33.3);

        let dev = &stats.persona_stats["developer"];
        assert_eq!(dev.total, 2);
        assert_eq!(dev.positive_rate, 50.0);
    }

    #[tokio::test]
    async fn test_persists_across_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("feedback_data.json");

        let store = FeedbackStore::open(&path);
        let id = store.record("u", "general", "positive").await.unwrap();

        let reopened = FeedbackStore::open(&path);
        assert_eq!(reopened.len().await, 1);
        let stats = reopened.stats().await;
        assert_eq!(stats.recent_feedback[0].id, id);
    }

    #[tokio::test]
    async fn test_malformed_file_starts_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("feedback_data.json");
        std::fs::write(&path, "not json").unwrap();

        let store = FeedbackStore::open(&path);
        assert!(store.is_empty().await);
    }

    #[tokio::test]
    async fn test_recent_feedback_capped_at_ten() {
        let (_dir, store) = temp_store();
        for i in 0..12 {
            store
                .record(&format!("url-{i}"), "general", "positive")
                .await
                .unwrap();
        }

        let stats = store.stats().await;
        assert_eq!(stats.total_feedback, 12);
        assert_eq!(stats.recent_feedback.len(), 10);
    }
}
