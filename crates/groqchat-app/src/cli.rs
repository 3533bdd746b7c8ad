use clap::Parser;

/// groqchat: a single-screen terminal chatbot streaming answers from Groq.
#[derive(Parser, Debug)]
#[command(name = "groqchat", version, about)]
pub struct Args {
    /// Config file path override.
    #[arg(long)]
    pub config: Option<String>,

    /// Model to start with: llama-3.3-70b-versatile, gemma2-9b-it, 1 or 2.
    #[arg(short = 'm', long)]
    pub model: Option<String>,

    /// Log filter directive override (e.g. "groqchat=debug").
    #[arg(long)]
    pub log_level: Option<String>,

    /// Print the effective configuration as JSON and exit.
    #[arg(long)]
    pub print_config: bool,
}

pub fn parse() -> Args {
    Args::parse()
}
