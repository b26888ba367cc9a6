use clap::Parser;

mod app;
mod auth;
mod cli;
mod config;
mod error;
mod extract;
mod photos;
mod state;
mod users;

use crate::cli::{Cli, Command};
use crate::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let env_filter = std::env::var("RUST_LOG")
        .unwrap_or_else(|_| "lens_gallery=debug,axum=info,tower_http=info".to_string());
    let json_logs = std::env::var("LOG_FORMAT")
        .map(|v| v == "json")
        .unwrap_or(false);

    if json_logs {
        tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_target(false)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(env_filter).init();
    }

    let args = Cli::parse();
    let state = AppState::init().await?;

    match args.command.unwrap_or(Command::Serve) {
        Command::Serve => {
            if let Err(e) = sqlx::migrate!("./migrations").run(&state.db).await {
                tracing::warn!(error = %e, "migration failed; continuing");
            }
            app::serve(app::build_app(state)).await
        }
        command => cli::execute(state, command).await,
    }
}
