use clap::{ArgAction, Parser};
use coffee_machine::application::machine::CoffeeMachine;
use coffee_machine::application::session::Session;
use coffee_machine::domain::ports::ConsoleBox;
use coffee_machine::infrastructure::stream::StreamConsole;
use miette::{IntoDiagnostic, Result};
use std::path::PathBuf;
use tokio::fs::File;
use tokio::io::BufReader;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// File of commands to run, one per line. Reads standard input if omitted.
    script: Option<PathBuf>,

    /// Print each command as `> command` before the machine's reply.
    #[arg(long)]
    echo: bool,

    /// Log more to stderr (-v info, -vv debug, -vvv trace). RUST_LOG overrides.
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

/// Logs go to stderr so stdout carries nothing but the machine's own output.
fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let console: ConsoleBox = if let Some(script) = cli.script {
        let file = File::open(script).await.into_diagnostic()?;
        Box::new(StreamConsole::new(BufReader::new(file), tokio::io::stdout()))
    } else {
        Box::new(StreamConsole::stdio())
    };

    let mut session = Session::new(CoffeeMachine::new(), console).with_echo(cli.echo);
    let end = session.run().await.into_diagnostic()?;
    tracing::debug!(?end, "bye");

    Ok(())
}
