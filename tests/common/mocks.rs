use async_trait::async_trait;
use inventory_assistant::{
    Error, Result,
    inventory::{InventoryState, InventoryStore, Item, MemoryStore},
    llm::{LlmClient, StructuredRequest},
};
use std::sync::{
    Arc, Mutex,
    atomic::{AtomicUsize, Ordering},
};

/// Mock LLM client for testing
#[derive(Debug)]
pub struct MockLlmClient {
    pub replies: Arc<Mutex<Vec<String>>>,
    pub requests: Arc<Mutex<Vec<StructuredRequest>>>,
    pub error: Option<String>,
}

impl MockLlmClient {
    pub fn new() -> Self {
        Self {
            replies: Arc::new(Mutex::new(Vec::new())),
            requests: Arc::new(Mutex::new(Vec::new())),
            error: None,
        }
    }

    pub fn with_replies(self, replies: Vec<String>) -> Self {
        *self.replies.lock().unwrap() = replies;
        self
    }

    pub fn with_error(mut self, error: String) -> Self {
        self.error = Some(error);
        self
    }

    pub fn add_reply(&self, reply: impl Into<String>) {
        self.replies.lock().unwrap().push(reply.into());
    }

    pub fn get_requests(&self) -> Vec<StructuredRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl LlmClient for MockLlmClient {
    async fn generate_structured(&self, request: StructuredRequest) -> Result<String> {
        self.requests.lock().unwrap().push(request);

        if let Some(ref error) = self.error {
            return Err(Error::llm(error.clone()));
        }

        let mut replies = self.replies.lock().unwrap();
        if replies.is_empty() {
            return Err(Error::llm("No more mock replies available"));
        }

        Ok(replies.remove(0))
    }
}

impl Default for MockLlmClient {
    fn default() -> Self {
        Self::new()
    }
}

/// In-memory store that counts how often it is called.
pub struct CountingStore {
    inner: MemoryStore,
    pub reads: AtomicUsize,
    pub updates: AtomicUsize,
}

impl CountingStore {
    pub fn new(seed: InventoryState) -> Self {
        Self {
            inner: MemoryStore::new(seed),
            reads: AtomicUsize::new(0),
            updates: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.reads.load(Ordering::SeqCst) + self.updates.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl InventoryStore for CountingStore {
    async fn read(&self) -> Result<InventoryState> {
        self.reads.fetch_add(1, Ordering::SeqCst);
        self.inner.read().await
    }

    async fn update(&self, item: Item, change: i64) -> Result<InventoryState> {
        self.updates.fetch_add(1, Ordering::SeqCst);
        self.inner.update(item, change).await
    }
}
