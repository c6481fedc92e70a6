use clap::{Parser, Subcommand};
use serde_json::json;

#[derive(Parser)]
#[command(
    name = "switchboard",
    version,
    about = "Switchboard CLI — resolve chat queries to dashboard widgets via the API"
)]
struct Cli {
    /// API base URL
    #[arg(long, env = "SWITCHBOARD_API_URL", default_value = "http://localhost:3000")]
    api_url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check API health
    Health,
    /// List all known personas and their modes
    Personas,
    /// Resolve a query for a persona
    Query {
        /// Persona id (e.g. "cor", "atc-support")
        #[arg(long)]
        persona: String,
        /// Operating mode override (defaults to the persona's own mode)
        #[arg(long)]
        mode: Option<String>,
        /// The query text
        query: String,
    },
    /// Show the full ranked candidate list for a query
    Explain {
        /// Persona id (e.g. "cor", "atc-support")
        #[arg(long)]
        persona: String,
        /// Operating mode override (defaults to the persona's own mode)
        #[arg(long)]
        mode: Option<String>,
        /// The query text
        query: String,
    },
}

fn client() -> reqwest::Client {
    reqwest::Client::new()
}

fn exit_error(message: &str) -> ! {
    let err = json!({
        "error": "cli_error",
        "message": message
    });
    eprintln!("{}", serde_json::to_string_pretty(&err).unwrap());
    std::process::exit(1);
}

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Health => get_json(&cli.api_url, "/health", &[]).await,
        Commands::Personas => get_json(&cli.api_url, "/api/personas", &[]).await,
        Commands::Query {
            persona,
            mode,
            query,
        } => {
            let params = query_params(&persona, &query, mode.as_deref());
            get_json(&cli.api_url, "/api/test-query", &params).await
        }
        Commands::Explain {
            persona,
            mode,
            query,
        } => {
            let params = query_params(&persona, &query, mode.as_deref());
            get_json(&cli.api_url, "/api/test-query/explain", &params).await
        }
    };

    if let Err(e) = result {
        exit_error(&e.to_string());
    }
}

fn query_params(persona: &str, query: &str, mode: Option<&str>) -> Vec<(String, String)> {
    let mut params = vec![
        ("persona".to_string(), persona.to_string()),
        ("query".to_string(), query.to_string()),
    ];
    if let Some(m) = mode {
        params.push(("mode".to_string(), m.to_string()));
    }
    params
}

async fn get_json(
    api_url: &str,
    path: &str,
    params: &[(String, String)],
) -> Result<(), Box<dyn std::error::Error>> {
    let resp = client()
        .get(format!("{api_url}{path}"))
        .query(&params)
        .send()
        .await?;

    let status = resp.status();
    let body: serde_json::Value = resp.json().await?;

    if !status.is_success() {
        eprintln!("{}", serde_json::to_string_pretty(&body)?);
        std::process::exit(1);
    }

    println!("{}", serde_json::to_string_pretty(&body)?);
    Ok(())
}
