use anyhow::{Context, Result};
use std::path::Path;

use crate::cli::{Cli, Commands};
use redirstat_core::StatsTree;
use redirstat_db::{CounterSource, Database, DbConfig};
use redirstat_publish::{ApiConfig, Publisher};

/// Run the export pipeline: fetch -> aggregate -> serialize, then either
/// print the document (dump) or write it locally and upload it (export).
/// Strictly sequential; a failed stage aborts the run with a non-zero
/// exit status at the binary edge.
pub async fn execute(cli: Cli) -> Result<()> {
    let db_config = DbConfig {
        host: cli.db_host,
        port: cli.db_port,
        user: cli.db_user,
        password: cli.db_password,
        database: cli.db_name,
        table: cli.db_table,
    };

    // A data-source failure aborts here, before any file write or HTTP
    // call.
    let database = Database::connect(&db_config)
        .await
        .context("cannot connect to the redirector database")?;

    match cli.command {
        Commands::Export {
            api_url,
            api_user,
            api_password,
            output,
        } => {
            let publisher = Publisher::new(ApiConfig {
                url: api_url,
                user: api_user,
                password: api_password,
            });

            export(&database, &publisher, &output).await
        }

        Commands::Dump => {
            let xml = build_document(&database).await?;
            print!("{}", xml);
            Ok(())
        }
    }
}

async fn export(
    source: &impl CounterSource,
    publisher: &Publisher,
    output: &Path,
) -> Result<()> {
    let xml = build_document(source).await?;

    publisher.write_local(output, &xml)?;
    println!("Wrote {}", output.display());

    let response = publisher.upload(&xml).await?;
    println!("API response: {}", response.status);
    if !response.body.is_empty() {
        println!("{}", response.body);
    }

    Ok(())
}

/// Fetch the full row set, aggregate it, and serialize the document.
async fn build_document(source: &impl CounterSource) -> Result<String> {
    let records = source
        .fetch_counters()
        .await
        .context("cannot read statistics table")?;

    let row_count = records.len();
    let tree = StatsTree::from_records(records);
    tracing::info!(
        "Aggregated {} rows into {} projects",
        row_count,
        tree.projects().len()
    );

    Ok(tree.to_xml())
}
