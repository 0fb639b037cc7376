use crate::{models::CounterRow, Error, Result};
use async_trait::async_trait;
use redirstat_core::CounterRecord;
use sqlx::{
    mysql::{MySqlConnectOptions, MySqlPoolOptions},
    MySql, Pool,
};

/// Connection parameters for the redirector database.
#[derive(Debug, Clone)]
pub struct DbConfig {
    pub host: String,
    pub port: u16,
    pub user: String,
    pub password: String,
    pub database: String,
    pub table: String,
}

impl DbConfig {
    fn connect_options(&self) -> MySqlConnectOptions {
        MySqlConnectOptions::new()
            .host(&self.host)
            .port(self.port)
            .username(&self.user)
            .password(&self.password)
            .database(&self.database)
    }
}

/// Anything that can produce the full counter row set for an export run.
#[async_trait]
pub trait CounterSource {
    async fn fetch_counters(&self) -> Result<Vec<CounterRecord>>;
}

#[derive(Clone)]
pub struct Database {
    pool: Pool<MySql>,
    table: String,
}

impl Database {
    /// Create new database connection
    pub async fn connect(config: &DbConfig) -> Result<Self> {
        let pool = MySqlPoolOptions::new()
            .max_connections(1)
            .connect_with(config.connect_options())
            .await
            .map_err(Error::Connection)?;

        Ok(Self {
            pool,
            table: config.table.clone(),
        })
    }
}

#[async_trait]
impl CounterSource for Database {
    /// Fetch all rows of the statistics table, in store order. Each row
    /// is validated here so a malformed row fails the run naming the
    /// record, before anything is serialized.
    async fn fetch_counters(&self) -> Result<Vec<CounterRecord>> {
        // The table name is operator configuration; identifiers cannot
        // be bound as query parameters.
        let query = format!(
            "SELECT project, package, repository, arch, \
             CAST(`count` AS SIGNED) AS `count`, \
             filename, filetype, version, `release`, created_at, counted_at \
             FROM `{}`",
            self.table
        );

        let rows = sqlx::query_as::<_, CounterRow>(&query)
            .fetch_all(&self.pool)
            .await
            .map_err(Error::Query)?;

        tracing::debug!("Fetched {} rows from {}", rows.len(), self.table);

        let mut records = Vec::with_capacity(rows.len());
        for row in rows {
            let record = CounterRecord::from(row);
            record.validate()?;
            records.push(record);
        }

        Ok(records)
    }
}
