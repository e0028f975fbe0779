use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::sync::Arc;

use crate::domain::entities::{PaymentMethod, PaymentRecord, Session};

// Port for session storage used by auth use cases.
#[async_trait]
pub trait SessionStore: Send + Sync {
    async fn insert(&self, token: String, session: Session) -> Result<(), String>;
    async fn get(&self, token: &str) -> Result<Option<Session>, String>;
    async fn remove(&self, token: &str) -> Result<bool, String>;
}

// Port for the write-once payment ledger.
#[async_trait]
pub trait PaymentStore: Send + Sync {
    async fn insert(&self, payment_id: String, record: PaymentRecord) -> Result<(), String>;
    async fn get(&self, payment_id: &str) -> Result<Option<PaymentRecord>, String>;
}

// Port for per-user saved payment methods.
#[async_trait]
pub trait PaymentMethodStore: Send + Sync {
    async fn append(&self, user_id: &str, method: PaymentMethod) -> Result<(), String>;
    async fn list(&self, user_id: &str) -> Result<Vec<PaymentMethod>, String>;
}

// Port for retrieving the current time.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

// Shared handles forward to the wrapped store so app state can hold trait objects.
#[async_trait]
impl<T: SessionStore + ?Sized> SessionStore for Arc<T> {
    async fn insert(&self, token: String, session: Session) -> Result<(), String> {
        (**self).insert(token, session).await
    }

    async fn get(&self, token: &str) -> Result<Option<Session>, String> {
        (**self).get(token).await
    }

    async fn remove(&self, token: &str) -> Result<bool, String> {
        (**self).remove(token).await
    }
}

#[async_trait]
impl<T: PaymentStore + ?Sized> PaymentStore for Arc<T> {
    async fn insert(&self, payment_id: String, record: PaymentRecord) -> Result<(), String> {
        (**self).insert(payment_id, record).await
    }

    async fn get(&self, payment_id: &str) -> Result<Option<PaymentRecord>, String> {
        (**self).get(payment_id).await
    }
}

#[async_trait]
impl<T: PaymentMethodStore + ?Sized> PaymentMethodStore for Arc<T> {
    async fn append(&self, user_id: &str, method: PaymentMethod) -> Result<(), String> {
        (**self).append(user_id, method).await
    }

    async fn list(&self, user_id: &str) -> Result<Vec<PaymentMethod>, String> {
        (**self).list(user_id).await
    }
}
