use clap::Parser;

mod cli;
mod commands;
mod config;

fn main() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();
    let config = match &cli.config {
        Some(path) => config::CliConfig::load(path)?,
        None => config::CliConfig::default(),
    };

    let level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        config.log_level.as_level()
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    if !config.color {
        colored::control::set_override(false);
    }
    commands::run_command(cli, &config)
}
