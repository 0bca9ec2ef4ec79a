//! Chehum — campaign search parsing and review-deadline service.

use std::sync::Arc;

use tracing::info;
use tracing_subscriber::EnvFilter;

use chehum_core::ChehumConfig;
use chehum_server::{build_router, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args: Vec<String> = std::env::args().collect();
    let config = ChehumConfig::from_env()?;

    // Handle CLI subcommands
    if args.len() > 1 {
        match args[1].as_str() {
            "parse" => {
                let query = args[2..].join(" ");
                let state = AppState::new(config)?;
                let extracted = state.parser.extract_filters(&query);
                let output = serde_json::json!({
                    "parsed": state.parser.parse(&query),
                    "cleanQuery": extracted.clean_query,
                });
                println!("{}", serde_json::to_string_pretty(&output)?);
                return Ok(());
            }
            "--help" | "-h" | "help" => {
                println!("Chehum — campaign search and review-deadline service");
                println!();
                println!("Usage: chehum [command]");
                println!();
                println!("Commands:");
                println!("  (none)                   Start the server");
                println!("  parse <query>            Print the filters parsed from a query");
                println!("  help                     Show this help message");
                return Ok(());
            }
            _ => {
                eprintln!("Unknown command: {}. Use 'chehum help' for usage.", args[1]);
                std::process::exit(1);
            }
        }
    }

    let port = config.port;
    let offset = config.utc_offset_hours;
    let state = Arc::new(AppState::new(config)?);
    info!("Today is {} (UTC{:+})", state.estimator.today(), offset);

    let app = build_router(state);

    let addr = format!("0.0.0.0:{}", port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Chehum server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
