// Read port the reports need from the persistence layer.
//
// Purpose
// - Fetch a snapshot of appointments whose date matches a filter, in one bulk read.
//
// Boundaries
// - Implementations may return soft-deleted rows; the reports filter them out themselves.

use crate::modules::reports::core::appointment::AppointmentRecord;
use crate::modules::reports::core::date_filter::DateFilter;
use async_trait::async_trait;

#[async_trait]
pub trait AppointmentQueries: Send + Sync {
    async fn fetch(&self, filter: &DateFilter) -> anyhow::Result<Vec<AppointmentRecord>>;
}
