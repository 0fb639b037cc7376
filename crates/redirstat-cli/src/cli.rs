use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "redirstat")]
#[command(about = "Export download-redirector statistics as XML", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Database host
    #[arg(long, env = "REDIRSTAT_DB_HOST", default_value = "localhost")]
    pub db_host: String,

    /// Database port
    #[arg(long, env = "REDIRSTAT_DB_PORT", default_value = "3306")]
    pub db_port: u16,

    /// Database user
    #[arg(long, env = "REDIRSTAT_DB_USER", default_value = "root")]
    pub db_user: String,

    /// Database password
    #[arg(long, env = "REDIRSTAT_DB_PASSWORD", default_value = "")]
    pub db_password: String,

    /// Database name
    #[arg(long, env = "REDIRSTAT_DB_NAME", default_value = "redirector")]
    pub db_name: String,

    /// Statistics table to export
    #[arg(long, env = "REDIRSTAT_DB_TABLE", default_value = "redirect_stats")]
    pub db_table: String,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Export the statistics table and upload it to the API
    Export {
        /// API endpoint for the HTTP PUT
        #[arg(long, env = "REDIRSTAT_API_URL")]
        api_url: String,

        /// API user for basic auth
        #[arg(long, env = "REDIRSTAT_API_USER")]
        api_user: String,

        /// API password for basic auth
        #[arg(long, env = "REDIRSTAT_API_PASSWORD")]
        api_password: String,

        /// Local artifact path, overwritten each run
        #[arg(long, default_value = "/tmp/redirect_stats.xml")]
        output: PathBuf,
    },

    /// Print the XML document on stdout without writing or uploading
    Dump,
}
