use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::{DateTime, TimeZone, Utc};

use crate::domain::entities::{PaymentMethod, PaymentRecord, Session};
use crate::domain::ports::{Clock, PaymentMethodStore, PaymentStore, SessionStore};

pub(crate) type SessionTable = Arc<Mutex<HashMap<String, Session>>>;

// Shared fixed time source for deterministic use-case tests.
pub(crate) struct FixedClock(pub(crate) DateTime<Utc>);

impl FixedClock {
    pub(crate) fn at(year: i32, month: u32, day: u32) -> Self {
        let now = Utc
            .with_ymd_and_hms(year, month, day, 12, 0, 0)
            .single()
            .expect("valid fixed clock date");
        Self(now)
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

#[derive(Clone, Copy, Default)]
pub(crate) struct FailureFlags {
    pub insert: bool,
    pub get: bool,
    pub remove: bool,
}

#[derive(Clone)]
pub(crate) struct RecordingStore {
    sessions: SessionTable,
    failures: FailureFlags,
}

impl RecordingStore {
    pub(crate) fn new() -> Self {
        Self {
            sessions: Arc::new(Mutex::new(HashMap::new())),
            failures: FailureFlags::default(),
        }
    }

    pub(crate) fn with_failures(mut self, failures: FailureFlags) -> Self {
        self.failures = failures;
        self
    }

    pub(crate) fn insert_test_session(&self, token: impl Into<String>, session: Session) {
        let mut guard = self.sessions.lock().expect("sessions mutex poisoned");
        guard.insert(token.into(), session);
    }

    pub(crate) fn get_test_session(&self, token: &str) -> Option<Session> {
        let guard = self.sessions.lock().expect("sessions mutex poisoned");
        guard.get(token).cloned()
    }

    pub(crate) fn session_count(&self) -> usize {
        self.sessions.lock().expect("sessions mutex poisoned").len()
    }
}

#[async_trait]
impl SessionStore for RecordingStore {
    async fn insert(&self, token: String, session: Session) -> Result<(), String> {
        if self.failures.insert {
            return Err("insert failed".to_string());
        }

        let mut guard = self.sessions.lock().expect("sessions mutex poisoned");
        guard.insert(token, session);
        Ok(())
    }

    async fn get(&self, token: &str) -> Result<Option<Session>, String> {
        if self.failures.get {
            return Err("get failed".to_string());
        }

        let guard = self.sessions.lock().expect("sessions mutex poisoned");
        Ok(guard.get(token).cloned())
    }

    async fn remove(&self, token: &str) -> Result<bool, String> {
        if self.failures.remove {
            return Err("remove failed".to_string());
        }

        let mut guard = self.sessions.lock().expect("sessions mutex poisoned");
        Ok(guard.remove(token).is_some())
    }
}

#[derive(Clone, Default)]
pub(crate) struct RecordingPaymentStore {
    payments: Arc<Mutex<HashMap<String, PaymentRecord>>>,
    fail_insert: bool,
}

impl RecordingPaymentStore {
    // Store whose every insert reports an infrastructure failure.
    pub(crate) fn failing() -> Self {
        Self {
            fail_insert: true,
            ..Self::default()
        }
    }

    pub(crate) fn payment_count(&self) -> usize {
        self.payments.lock().expect("payments mutex poisoned").len()
    }
}

#[async_trait]
impl PaymentStore for RecordingPaymentStore {
    async fn insert(&self, payment_id: String, record: PaymentRecord) -> Result<(), String> {
        if self.fail_insert {
            return Err("insert failed".to_string());
        }

        let mut guard = self.payments.lock().expect("payments mutex poisoned");
        guard.insert(payment_id, record);
        Ok(())
    }

    async fn get(&self, payment_id: &str) -> Result<Option<PaymentRecord>, String> {
        let guard = self.payments.lock().expect("payments mutex poisoned");
        Ok(guard.get(payment_id).cloned())
    }
}

#[derive(Clone, Default)]
pub(crate) struct RecordingMethodStore {
    methods: Arc<Mutex<HashMap<String, Vec<PaymentMethod>>>>,
    fail_append: bool,
}

impl RecordingMethodStore {
    // Store whose every append reports an infrastructure failure.
    pub(crate) fn failing() -> Self {
        Self {
            fail_append: true,
            ..Self::default()
        }
    }
}

#[async_trait]
impl PaymentMethodStore for RecordingMethodStore {
    async fn append(&self, user_id: &str, method: PaymentMethod) -> Result<(), String> {
        if self.fail_append {
            return Err("append failed".to_string());
        }

        let mut guard = self.methods.lock().expect("methods mutex poisoned");
        guard.entry(user_id.to_string()).or_default().push(method);
        Ok(())
    }

    async fn list(&self, user_id: &str) -> Result<Vec<PaymentMethod>, String> {
        let guard = self.methods.lock().expect("methods mutex poisoned");
        Ok(guard.get(user_id).cloned().unwrap_or_default())
    }
}
