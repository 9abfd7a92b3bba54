use std::time::Duration;

use clap::{Parser, Subcommand};
use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{CellAlignment, ContentArrangement, Table};
use reports::{FetchError, ReportRow, ReportsResponse};
use reqwest::header::AUTHORIZATION;


#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("missing bearer token; pass --token or set REPORTS_TOKEN")]
    MissingToken,
    #[error("http request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("{}", .0.user_message())]
    Fetch(#[from] FetchError),
    #[error("health check failed: HTTP {0}")]
    Unhealthy(u16),
    #[error("invalid JSON payload: {0}")]
    InvalidJson(#[from] serde_json::Error),
}

#[derive(Parser, Debug)]
#[command(name = "reports-cli", about = "Usage report API command line client")]
struct Cli {
    #[arg(long, env = "REPORTS_API_URL", default_value = "http://localhost:8000")]
    api_url: String,

    #[arg(long, env = "REPORTS_TOKEN", hide_env_values = true)]
    token: Option<String>,

    #[arg(long, default_value_t = 30)]
    timeout_secs: u64,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Check that the portal host answers `/healthz`.
    Ping {
        #[arg(long, env = "REPORTS_HOST_URL", default_value = "http://127.0.0.1:3000")]
        host_url: String,
    },
    /// Fetch the report listing for the bearer token.
    Reports {
        /// Print the listing as JSON instead of a table.
        #[arg(long, default_value_t = false)]
        json: bool,
    },
}

#[tokio::main]
async fn main() -> Result<(), CliError> {
    let cli = Cli::parse();
    let client = reqwest::Client::builder()
        .timeout(Duration::from_secs(cli.timeout_secs))
        .build()?;

    match cli.command {
        Command::Ping { host_url } => run_ping(&client, &host_url).await,
        Command::Reports { json } => {
            let token = cli.token.as_deref().ok_or(CliError::MissingToken)?;
            let rows = fetch_reports(&client, &cli.api_url, token).await?;
            if json {
                print_json(rows)
            } else {
                println!("{}", render_table(&rows));
                Ok(())
            }
        }
    }
}

async fn run_ping(client: &reqwest::Client, host_url: &str) -> Result<(), CliError> {
    let url = format!("{}/healthz", host_url.trim_end_matches('/'));
    let status = client.get(url).send().await?.status();
    if !status.is_success() {
        return Err(CliError::Unhealthy(status.as_u16()));
    }
    println!("ok");
    Ok(())
}

async fn fetch_reports(client: &reqwest::Client, api_url: &str, token: &str) -> Result<Vec<ReportRow>, CliError> {
    let response = client
        .get(reports::reports_url(api_url))
        .header(AUTHORIZATION, reports::bearer(token))
        .send()
        .await
        .map_err(|e| FetchError::Network(e.to_string()))?;
    let status = response.status().as_u16();
    let body = response.text().await?;
    Ok(reports::interpret_response(status, &body)?)
}

fn print_json(rows: Vec<ReportRow>) -> Result<(), CliError> {
    let body = ReportsResponse { reports: Some(rows) };
    println!("{}", serde_json::to_string_pretty(&body)?);
    Ok(())
}

/// Bordered table with a Device / Report ID / Value header, one line per row.
fn render_table(rows: &[ReportRow]) -> String {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["Device", "Report ID", "Value"]);
    for row in rows {
        table.add_row(vec![row.device.clone(), row.report_id.clone(), row.value_text()]);
    }
    if let Some(column) = table.column_mut(2) {
        column.set_cell_alignment(CellAlignment::Right);
    }
    table.to_string()
}
