mod cli;

use crate::cli::Arguments;
use clap::Parser;
use std::io;
use stopwatch::console::Session;
use stopwatch::Stopwatch;
use tracing_log::LogTracer;

fn main() {
    let arguments = cli::Arguments::parse();
    set_log_level(&arguments).expect("Failed to configure logging");

    tracing::debug!(?arguments, "starting stopwatch console");

    if let Err(e) = run(arguments) {
        tracing::error!(%e, "Unable to run the stopwatch console");
        std::process::exit(1);
    }
}

fn set_log_level(arguments: &Arguments) -> anyhow::Result<()> {
    LogTracer::init()?;

    let level = match arguments.verbosity {
        0 => tracing::Level::ERROR,
        1 => tracing::Level::WARN,
        2 => tracing::Level::INFO,
        3 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };

    let subscriber = tracing_subscriber::FmtSubscriber::builder()
        .with_max_level(level)
        .with_file(true)
        .with_line_number(true)
        .with_thread_ids(true)
        .with_writer(io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    Ok(())
}

fn run(arguments: Arguments) -> anyhow::Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();

    let mut session = Session::new(Stopwatch::new(), stdout.lock(), arguments.format)
        .with_prompt(arguments.prompt);

    session.run(stdin.lock())?;

    let snapshot = session.stopwatch().snapshot();
    tracing::info!(%snapshot, "Session ended");

    Ok(())
}
