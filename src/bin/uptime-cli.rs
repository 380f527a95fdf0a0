use clap::{Parser, Subcommand};
use serde_json::{json, Value};

#[derive(Parser)]
#[command(name = "uptime-cli")]
#[command(about = "Management CLI for the uptime checker API", long_about = None)]
struct Cli {
    #[arg(short, long, default_value = "http://localhost:8080")]
    url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Register a site
    Add {
        /// Display name
        name: String,
        /// Target URL
        target: String,
        /// Expected HTTP status (default 200)
        #[arg(long, default_value_t = 0)]
        expected_status: u16,
        /// Seconds between checks (default 30)
        #[arg(long, default_value_t = 0)]
        interval: u64,
    },
    /// List registered sites
    List,
    /// Show recent results for a site
    Logs {
        id: String,
        #[arg(short, long, default_value_t = 50)]
        limit: usize,
    },
    /// Check API health
    Health,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let client = reqwest::Client::new();

    let res = match cli.command {
        Commands::Add {
            name,
            target,
            expected_status,
            interval,
        } => {
            client
                .post(format!("{}/sites", cli.url))
                .json(&json!({
                    "name": name,
                    "url": target,
                    "expected_status": expected_status,
                    "check_interval": interval,
                }))
                .send()
                .await?
        }
        Commands::List => client.get(format!("{}/sites", cli.url)).send().await?,
        Commands::Logs { id, limit } => {
            client
                .get(format!("{}/sites/{}/logs", cli.url, id))
                .query(&[("limit", limit)])
                .send()
                .await?
        }
        Commands::Health => client.get(format!("{}/health", cli.url)).send().await?,
    };

    print_response(res).await
}

async fn print_response(res: reqwest::Response) -> Result<(), Box<dyn std::error::Error>> {
    let status = res.status();
    if !status.is_success() {
        eprintln!("Error: API returned status {}", status);
        if let Ok(text) = res.text().await {
            eprintln!("Response: {}", text);
        }
        return Ok(());
    }

    let json: Value = res.json().await?;
    println!("{}", serde_json::to_string_pretty(&json)?);
    Ok(())
}
