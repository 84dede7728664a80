use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use uuid::Uuid;

/// Identifier source for conversation log entries
pub trait IdGenerator: Send + Sync {
    /// Unique id for one log entry (lowercase hyphenated UUID v4)
    fn entry_id(&self) -> String;

    /// Conversation id for callers that did not send one
    fn anonymous_conversation_id(&self, epoch_seconds: i64) -> String {
        format!("anonymous-{}", epoch_seconds)
    }
}

#[derive(Debug, Clone, Default)]
pub struct RandomIdGenerator;

impl RandomIdGenerator {
    pub fn new() -> Self {
        Self
    }
}

impl IdGenerator for RandomIdGenerator {
    fn entry_id(&self) -> String {
        Uuid::new_v4().to_string()
    }
}

/// Replays a fixed list of ids, wrapping around when exhausted
#[derive(Debug, Clone)]
pub struct FixedIdGenerator {
    ids: Vec<String>,
    index: Arc<AtomicUsize>,
}

impl FixedIdGenerator {
    pub fn new(ids: Vec<String>) -> Self {
        Self {
            ids,
            index: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn single(id: impl Into<String>) -> Self {
        Self::new(vec![id.into()])
    }

    pub fn from_strings(ids: &[&str]) -> Self {
        Self::new(ids.iter().map(|s| s.to_string()).collect())
    }

    /// Number of ids handed out so far
    pub fn issued(&self) -> usize {
        self.index.load(Ordering::SeqCst)
    }
}

impl IdGenerator for FixedIdGenerator {
    fn entry_id(&self) -> String {
        if self.ids.is_empty() {
            return String::new();
        }
        let index = self.index.fetch_add(1, Ordering::SeqCst);
        self.ids[index % self.ids.len()].clone()
    }
}
