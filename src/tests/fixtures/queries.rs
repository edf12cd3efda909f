// Test doubles around the appointment read port.

use crate::modules::reports::adapters::outbound::appointments_in_memory::InMemoryAppointments;
use crate::modules::reports::application::queries_port::AppointmentQueries;
use crate::modules::reports::core::appointment::AppointmentRecord;
use crate::modules::reports::core::date_filter::DateFilter;
use crate::shell::state::AppState;
use async_trait::async_trait;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Records how many snapshots were requested, and with which filters.
pub struct CountingQueries {
    inner: InMemoryAppointments,
    calls: AtomicUsize,
    last_filter: std::sync::Mutex<Option<DateFilter>>,
}

impl CountingQueries {
    pub fn new(rows: Vec<AppointmentRecord>) -> Self {
        Self {
            inner: InMemoryAppointments::with_rows(rows),
            calls: AtomicUsize::new(0),
            last_filter: std::sync::Mutex::new(None),
        }
    }

    pub fn offline() -> Self {
        let mut queries = Self::new(Vec::new());
        queries.inner.toggle_offline();
        queries
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn last_filter(&self) -> Option<DateFilter> {
        *self.last_filter.lock().unwrap()
    }
}

#[async_trait]
impl AppointmentQueries for CountingQueries {
    async fn fetch(&self, filter: &DateFilter) -> anyhow::Result<Vec<AppointmentRecord>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_filter.lock().unwrap() = Some(*filter);
        self.inner.fetch(filter).await
    }
}

pub fn make_test_state(rows: Vec<AppointmentRecord>) -> AppState {
    AppState::new(Arc::new(InMemoryAppointments::with_rows(rows)))
}

pub fn make_offline_state() -> AppState {
    let mut store = InMemoryAppointments::new();
    store.toggle_offline();
    AppState::new(Arc::new(store))
}
