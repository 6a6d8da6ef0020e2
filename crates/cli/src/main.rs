mod render_cmd;
mod source;
mod summary_cmd;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "chatreplay",
    about = "Render YouTube live-chat replay dumps as readable transcripts"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a chat dump as a transcript
    Render(render_cmd::RenderArgs),

    /// Show only the summary line and per-category counts
    Summary(summary_cmd::SummaryArgs),
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Render(args) => render_cmd::run(args).await,
        Commands::Summary(args) => summary_cmd::run(args).await,
    };

    if let Err(e) = result {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}
