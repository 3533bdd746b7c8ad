mod cli;
mod commands;
mod dotenv;
mod repl;
mod startup;
mod terminal;

use std::path::Path;

use anyhow::Context;
use groqchat_ai::groq::API_KEY_ENV;
use tracing_subscriber::EnvFilter;

use crate::terminal::TerminalView;

fn init_logging(cli_directive: Option<&str>, config_directive: &str) {
    let filter = cli_directive
        .and_then(|d| EnvFilter::try_new(d).ok())
        .or_else(|| EnvFilter::try_from_default_env().ok())
        .or_else(|| EnvFilter::try_new(config_directive).ok())
        .unwrap_or_else(|| EnvFilter::new("groqchat=warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    // .env before anything reads the environment
    let dotenv_path = dotenv::load_dotenv();

    let args = cli::parse();

    let (config, fallback) = startup::load_settings(args.config.as_deref().map(Path::new))
        .context("failed to load config")?;

    init_logging(args.log_level.as_deref(), &config.logging.level);

    tracing::info!("groqchat v{} starting", env!("CARGO_PKG_VERSION"));
    if let Some(path) = dotenv_path {
        tracing::debug!("loaded environment from {}", path.display());
    }
    if let Some(e) = fallback {
        tracing::warn!("Config load failed, using defaults: {e}");
    }

    if args.print_config {
        println!("{}", groqchat_config::config_to_json(&config));
        return Ok(());
    }

    let model = startup::resolve_model(args.model.as_deref(), &config.provider)?;
    let api_key = startup::resolve_api_key(std::env::var(API_KEY_ENV).ok(), &config.provider);
    let mut session = startup::build_session(&config, api_key, model);

    let mut view = TerminalView::new(std::io::stdout(), &config.ui);
    repl::run(&mut session, &mut view).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
