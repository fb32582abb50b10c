use anyhow::Result;
use clap::Parser;

mod cli_args;
mod commands;
mod config;
mod git;
mod llm;
mod logging;
mod output;
mod text;

use cli_args::{Cli, Command};
use config::Config;
use llm::gemini::GeminiClient;

fn main() {
    let cli = Cli::parse();
    logging::init_logger(cli.verbose);

    if let Err(err) = run(&cli) {
        output::print_error(&format!("{err:#}"));
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    match &cli.command {
        Command::Commit {
            output,
            auto_commit,
        } => {
            let cfg = Config::from_sources(cli)?;
            let client = GeminiClient::new(&cfg);
            commands::commit::run(&client, &cfg, output.as_deref(), *auto_commit)
        }
        Command::Pr { output, title_only } => {
            let cfg = Config::from_sources(cli)?;
            let client = GeminiClient::new(&cfg);
            commands::pr::run(&client, &cfg, output.as_deref(), *title_only)
        }
        Command::Save { output } => commands::save::run(output),
    }
}
