//! Mock Payment Processor
//!
//! In-memory stand-in for the processor, for tests and offline demos.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::error::{PaymentError, Result};
use crate::intent::{CreateIntentRequest, CreatedIntent, IntentStatus, IntentView, PaymentProcessor};

/// Mock processor keeping intents in memory
///
/// New intents start in `requires_confirmation`.
pub struct MockProcessor {
    intents: RwLock<HashMap<String, IntentView>>,
    last_create: RwLock<Option<CreateIntentRequest>>,
    create_calls: AtomicUsize,
    retrieve_calls: AtomicUsize,
    fail_creates: AtomicBool,
    fail_retrievals: AtomicBool,
}

impl Default for MockProcessor {
    fn default() -> Self {
        Self::new()
    }
}

impl MockProcessor {
    pub fn new() -> Self {
        Self {
            intents: RwLock::new(HashMap::new()),
            last_create: RwLock::new(None),
            create_calls: AtomicUsize::new(0),
            retrieve_calls: AtomicUsize::new(0),
            fail_creates: AtomicBool::new(false),
            fail_retrievals: AtomicBool::new(false),
        }
    }

    /// Insert an intent under a fixed identifier
    pub async fn seed(&self, id: impl Into<String>, view: IntentView) {
        self.intents.write().await.insert(id.into(), view);
    }

    /// Move an existing intent to a new status, as the processor would after confirmation
    pub async fn set_status(&self, id: &str, status: IntentStatus) -> bool {
        match self.intents.write().await.get_mut(id) {
            Some(view) => {
                view.status = status;
                true
            }
            None => false,
        }
    }

    /// Make every subsequent create call fail
    pub fn fail_creates(&self, fail: bool) {
        self.fail_creates.store(fail, Ordering::SeqCst);
    }

    /// Make every subsequent retrieve call fail with a transport-style error
    pub fn fail_retrievals(&self, fail: bool) {
        self.fail_retrievals.store(fail, Ordering::SeqCst);
    }

    pub fn create_calls(&self) -> usize {
        self.create_calls.load(Ordering::SeqCst)
    }

    pub fn retrieve_calls(&self) -> usize {
        self.retrieve_calls.load(Ordering::SeqCst)
    }

    pub async fn last_create(&self) -> Option<CreateIntentRequest> {
        self.last_create.read().await.clone()
    }
}

#[async_trait]
impl PaymentProcessor for MockProcessor {
    async fn create_intent(&self, request: &CreateIntentRequest) -> Result<CreatedIntent> {
        self.create_calls.fetch_add(1, Ordering::SeqCst);
        *self.last_create.write().await = Some(request.clone());

        if self.fail_creates.load(Ordering::SeqCst) {
            return Err(PaymentError::Upstream("mock processor unavailable".into()));
        }

        let id = format!("pi_{}", uuid::Uuid::new_v4().simple());
        let client_secret = format!("{}_secret_{}", id, uuid::Uuid::new_v4().simple());

        self.intents.write().await.insert(
            id.clone(),
            IntentView {
                amount: request.amount,
                description: request.description.clone(),
                client_secret: client_secret.clone(),
                status: IntentStatus::RequiresConfirmation,
            },
        );

        Ok(CreatedIntent { id, client_secret })
    }

    async fn retrieve_intent(&self, id: &str) -> Result<IntentView> {
        self.retrieve_calls.fetch_add(1, Ordering::SeqCst);

        if self.fail_retrievals.load(Ordering::SeqCst) {
            return Err(PaymentError::Upstream("mock connection reset".into()));
        }

        self.intents
            .read()
            .await
            .get(id)
            .cloned()
            .ok_or_else(|| PaymentError::NotFound(id.to_string()))
    }

    fn name(&self) -> &str {
        "MockProcessor"
    }
}
