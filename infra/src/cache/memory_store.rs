//! In-process verification code store
//!
//! Entries carry a deadline on the tokio clock. An expired entry behaves
//! as absent. Expired entries are swept on every write, so the map never
//! holds more than the codes issued within one TTL.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;
use tokio::time::Instant;
use tracing::debug;

use tutora_core::CodeStore;
use tutora_shared::phone::mask_phone_number;

#[derive(Debug, Clone)]
struct StoredCode {
    code: String,
    deadline: Instant,
}

impl StoredCode {
    fn is_live(&self, now: Instant) -> bool {
        now < self.deadline
    }
}

fn purge_expired(codes: &mut HashMap<String, StoredCode>, now: Instant) -> usize {
    let before = codes.len();
    codes.retain(|_, stored| stored.is_live(now));
    before - codes.len()
}

/// Verification code store held in process memory
#[derive(Clone)]
pub struct InMemoryCodeStore {
    codes: Arc<RwLock<HashMap<String, StoredCode>>>,
    ttl: Duration,
}

impl InMemoryCodeStore {
    pub fn new(ttl: Duration) -> Self {
        Self {
            codes: Arc::new(RwLock::new(HashMap::new())),
            ttl,
        }
    }

    pub fn with_ttl_seconds(ttl_seconds: u64) -> Self {
        Self::new(Duration::from_secs(ttl_seconds))
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Number of entries, expired ones included until the next write
    pub async fn len(&self) -> usize {
        self.codes.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.codes.read().await.is_empty()
    }

    /// Return the live code for a phone, purging it if expired
    async fn live_code(&self, phone: &str) -> Option<String> {
        let now = Instant::now();
        {
            let codes = self.codes.read().await;
            match codes.get(phone) {
                Some(stored) if stored.is_live(now) => return Some(stored.code.clone()),
                Some(_) => {}
                None => return None,
            }
        }

        let mut codes = self.codes.write().await;
        if codes.get(phone).is_some_and(|stored| !stored.is_live(now)) {
            codes.remove(phone);
            debug!(phone = %mask_phone_number(phone), "Expired verification code purged");
        }
        None
    }
}

#[async_trait]
impl CodeStore for InMemoryCodeStore {
    async fn store_code(&self, phone: &str, code: &str) -> Result<(), String> {
        let now = Instant::now();
        let stored = StoredCode {
            code: code.to_string(),
            deadline: now + self.ttl,
        };

        let mut codes = self.codes.write().await;
        let purged = purge_expired(&mut codes, now);
        if purged > 0 {
            debug!(purged, "Expired verification codes purged");
        }
        codes.insert(phone.to_string(), stored);
        Ok(())
    }

    async fn verify_code(&self, phone: &str, submitted: &str) -> Result<bool, String> {
        Ok(self.live_code(phone).await.as_deref() == Some(submitted))
    }

    async fn remove_code(&self, phone: &str) -> Result<(), String> {
        self.codes.write().await.remove(phone);
        Ok(())
    }

    async fn has_code(&self, phone: &str) -> Result<bool, String> {
        Ok(self.live_code(phone).await.is_some())
    }
}
