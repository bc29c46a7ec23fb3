//! git-log-exporter - Per-repository commit history reports
//!
//! Binary entry point.

use clap::Parser;
use simple_logger::SimpleLogger;

use git_log_exporter::config::Cli;
use git_log_exporter::export::Exporter;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    SimpleLogger::new()
        .with_level(log::LevelFilter::Info)
        .init()?;

    let cli = Cli::parse();
    let exporter = Exporter::new(cli.into_config());
    exporter.run()?;

    Ok(())
}
