use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::Mutex;

use crate::domain::entities::{PaymentMethod, PaymentRecord, Session};
use crate::domain::ports::{Clock, PaymentMethodStore, PaymentStore, SessionStore};

// Application state holding the injected stores.
#[derive(Clone)]
pub struct AppState {
    pub sessions: Arc<dyn SessionStore>,
    pub payments: Arc<dyn PaymentStore>,
    pub payment_methods: Arc<dyn PaymentMethodStore>,
}

impl AppState {
    // Process-memory stores; everything is lost on restart.
    pub fn in_memory() -> Self {
        Self {
            sessions: Arc::new(InMemorySessionStore::default()),
            payments: Arc::new(InMemoryPaymentStore::default()),
            payment_methods: Arc::new(InMemoryPaymentMethodStore::default()),
        }
    }
}

// In-memory session store adapter.
#[derive(Clone, Default)]
pub struct InMemorySessionStore {
    pub sessions: Arc<Mutex<HashMap<String, Session>>>,
}

#[async_trait]
impl SessionStore for InMemorySessionStore {
    async fn insert(&self, token: String, session: Session) -> Result<(), String> {
        let mut sessions = self.sessions.lock().await;
        sessions.insert(token, session);
        Ok(())
    }

    async fn get(&self, token: &str) -> Result<Option<Session>, String> {
        let sessions = self.sessions.lock().await;
        Ok(sessions.get(token).cloned())
    }

    async fn remove(&self, token: &str) -> Result<bool, String> {
        let mut sessions = self.sessions.lock().await;
        Ok(sessions.remove(token).is_some())
    }
}

// In-memory payment ledger adapter.
#[derive(Clone, Default)]
pub struct InMemoryPaymentStore {
    pub payments: Arc<Mutex<HashMap<String, PaymentRecord>>>,
}

#[async_trait]
impl PaymentStore for InMemoryPaymentStore {
    async fn insert(&self, payment_id: String, record: PaymentRecord) -> Result<(), String> {
        let mut payments = self.payments.lock().await;
        payments.insert(payment_id, record);
        Ok(())
    }

    async fn get(&self, payment_id: &str) -> Result<Option<PaymentRecord>, String> {
        let payments = self.payments.lock().await;
        Ok(payments.get(payment_id).cloned())
    }
}

// In-memory saved-card adapter, one ordered list per user.
#[derive(Clone, Default)]
pub struct InMemoryPaymentMethodStore {
    pub methods: Arc<Mutex<HashMap<String, Vec<PaymentMethod>>>>,
}

#[async_trait]
impl PaymentMethodStore for InMemoryPaymentMethodStore {
    async fn append(&self, user_id: &str, method: PaymentMethod) -> Result<(), String> {
        let mut methods = self.methods.lock().await;
        methods.entry(user_id.to_string()).or_default().push(method);
        Ok(())
    }

    async fn list(&self, user_id: &str) -> Result<Vec<PaymentMethod>, String> {
        let methods = self.methods.lock().await;
        Ok(methods.get(user_id).cloned().unwrap_or_default())
    }
}

// System clock adapter used by payment use cases.
#[derive(Clone)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}
