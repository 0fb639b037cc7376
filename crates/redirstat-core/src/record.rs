use crate::{Error, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One row of the redirector's statistics table: an observed download
/// count for a specific file/version/architecture combination.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CounterRecord {
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

impl CounterRecord {
    /// Check the fields a row must carry to be exportable. Called at the
    /// data-source boundary so malformed rows fail there, naming the row,
    /// and never reach the serializer.
    pub fn validate(&self) -> Result<()> {
        if self.count < 0 {
            return Err(self.invalid(format!("negative count {}", self.count)));
        }

        for (field, value) in [
            ("project", &self.project),
            ("package", &self.package),
            ("repository", &self.repository),
            ("arch", &self.arch),
            ("filename", &self.filename),
        ] {
            if value.is_empty() {
                return Err(self.invalid(format!("empty {} field", field)));
            }
        }

        Ok(())
    }

    /// Grouping key of this record: (project, package, repository, arch).
    pub fn grouping_key(&self) -> (&str, &str, &str, &str) {
        (
            &self.project,
            &self.package,
            &self.repository,
            &self.arch,
        )
    }

    /// Short identification used in diagnostics.
    pub fn describe(&self) -> String {
        format!(
            "{}/{}/{}/{} {}",
            self.project, self.package, self.repository, self.arch, self.filename
        )
    }

    fn invalid(&self, reason: String) -> Error {
        Error::InvalidRecord {
            record: self.describe(),
            reason,
        }
    }
}
