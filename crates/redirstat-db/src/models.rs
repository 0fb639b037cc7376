use chrono::{DateTime, Utc};
use redirstat_core::CounterRecord;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Raw row of the statistics table, as fetched. Converted into a
/// validated [`CounterRecord`] at the source boundary.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct CounterRow {
    pub project: String,
    pub package: String,
    pub repository: String,
    pub arch: String,
    pub count: i64,
    pub filename: String,
    pub filetype: String,
    pub version: String,
    pub release: String,
    pub created_at: DateTime<Utc>,
    pub counted_at: DateTime<Utc>,
}

impl From<CounterRow> for CounterRecord {
    fn from(row: CounterRow) -> Self {
        CounterRecord {
            project: row.project,
            package: row.package,
            repository: row.repository,
            arch: row.arch,
            count: row.count,
            filename: row.filename,
            filetype: row.filetype,
            version: row.version,
            release: row.release,
            created_at: row.created_at,
            counted_at: row.counted_at,
        }
    }
}
