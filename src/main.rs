use anyhow::Result;
use dotenv::dotenv;
use todolist::commands::Cli;
use todolist::libs::messages::macros::is_debug_mode;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();

    if is_debug_mode() {
        tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("todolist=debug")))
            .with_target(false)
            .init();
    }

    Cli::menu().await
}
