// In memory appointment store.
//
// Purpose
// - Serve report snapshots without a database, for tests and local development.
//
// Responsibilities
// - Keep appointment rows in insertion order.
// - Optionally load rows from a JSON seed file at startup.

use crate::modules::reports::application::queries_port::AppointmentQueries;
use crate::modules::reports::core::appointment::AppointmentRecord;
use crate::modules::reports::core::date_filter::DateFilter;
use anyhow::Context;
use std::path::Path;
use tokio::sync::RwLock;

#[derive(Default)]
pub struct InMemoryAppointments {
    rows: RwLock<Vec<AppointmentRecord>>,
    is_offline: bool,
}

impl InMemoryAppointments {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_rows(rows: Vec<AppointmentRecord>) -> Self {
        Self {
            rows: RwLock::new(rows),
            is_offline: false,
        }
    }

    /// Reads a JSON array of appointment records.
    pub fn from_json_file(path: &Path) -> anyhow::Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("reading appointment seed {}", path.display()))?;
        let rows: Vec<AppointmentRecord> = serde_json::from_str(&raw)
            .with_context(|| format!("parsing appointment seed {}", path.display()))?;
        Ok(Self::with_rows(rows))
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }

    pub async fn len(&self) -> usize {
        self.rows.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.rows.read().await.is_empty()
    }
}

#[async_trait::async_trait]
impl AppointmentQueries for InMemoryAppointments {
    async fn fetch(&self, filter: &DateFilter) -> anyhow::Result<Vec<AppointmentRecord>> {
        if self.is_offline {
            return Err(anyhow::anyhow!("Appointments repository offline"));
        }

        let guard = self.rows.read().await;
        Ok(guard
            .iter()
            .filter(|row| filter.matches(row.date))
            .cloned()
            .collect())
    }
}

#[cfg(test)]
pub mod appointments_in_memory_tests {
    use super::*;
    use crate::tests::fixtures::appointments::{AppointmentRecordBuilder, day};
    use rstest::{fixture, rstest};
    use std::io::Write;

    #[fixture]
    fn before_each() -> InMemoryAppointments {
        InMemoryAppointments::with_rows(vec![
            AppointmentRecordBuilder::new().id(1).date(day(2024, 1, 14)).build(),
            AppointmentRecordBuilder::new().id(2).date(day(2024, 1, 15)).build(),
            AppointmentRecordBuilder::new()
                .id(3)
                .date(day(2024, 1, 15))
                .deleted()
                .build(),
            AppointmentRecordBuilder::new().id(4).date(day(2024, 1, 20)).build(),
        ])
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_return_rows_on_the_given_day_including_deleted_ones(
        before_each: InMemoryAppointments,
    ) {
        let rows = before_each
            .fetch(&DateFilter::On(day(2024, 1, 15)))
            .await
            .unwrap();
        let ids: Vec<i64> = rows.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![2, 3]);
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_return_rows_within_an_inclusive_range(before_each: InMemoryAppointments) {
        let rows = before_each
            .fetch(&DateFilter::Between {
                start: day(2024, 1, 15),
                end: day(2024, 1, 20),
            })
            .await
            .unwrap();
        let ids: Vec<i64> = rows.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![2, 3, 4]);
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_count_every_stored_row(before_each: InMemoryAppointments) {
        assert_eq!(before_each.len().await, 4);
        assert!(!before_each.is_empty().await);
        assert!(InMemoryAppointments::new().is_empty().await);
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_fail_if_the_repository_is_offline(mut before_each: InMemoryAppointments) {
        before_each.toggle_offline();
        let result = before_each.fetch(&DateFilter::On(day(2024, 1, 15))).await;
        assert!(result.is_err());
        assert!(
            result
                .unwrap_err()
                .to_string()
                .contains("Appointments repository offline")
        );
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_load_rows_from_a_json_seed_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[{{"id":9,"date":"2024-01-15","payment":"100.00","payment_type":"EFECTIVO"}}]"#
        )
        .unwrap();

        let store = InMemoryAppointments::from_json_file(file.path()).unwrap();
        let rows = store
            .fetch(&DateFilter::On(day(2024, 1, 15)))
            .await
            .unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].payment_type.as_deref(), Some("EFECTIVO"));
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_report_which_seed_file_could_not_be_parsed() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not-json").unwrap();

        let error = InMemoryAppointments::from_json_file(file.path())
            .err()
            .expect("seed should be rejected");
        assert!(format!("{error:#}").contains("parsing appointment seed"));
    }
}
