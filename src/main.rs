use anyhow::{Context, Result};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use daylog::color::ConsoleColor;
use daylog::{FileLogger, LogPlacement, TracingSink};

fn main() -> Result<()> {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "daylog=info".into());

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let mut log = FileLogger::builder()
        .placement(LogPlacement::ParentSibling)
        .diagnostics(TracingSink)
        .build()
        .context("Failed to set up log files")?;
    tracing::info!("Logging to: {}", log.directory().display());

    log.write_line("Hello, this is a test, ");
    log.write_warning_line("Hello, this is a warning.");
    log.write_error_line("Hello, this is an error.");
    log.write("This is the second line of the file.");
    log.close();

    println!("{}", ConsoleColor::Green.paint("Finished"));

    Ok(())
}
