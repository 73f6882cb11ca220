mod cli;
mod commands;
mod infra;
mod shared;

use clap::Parser;
use cli::Cli;

use shared::config::{generate_schema, load_config};
use shared::env_var::EnvVars;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let Cli {
        credits,
        verbose,
        config_schema,
    } = Cli::parse();

    if config_schema {
        println!("{}", serde_json::to_string_pretty(&generate_schema())?);
        return Ok(());
    }

    let env = EnvVars::load();
    shared::logging::init(verbose, env.log.as_deref());

    let config = load_config()?;
    commands::credits::run(&credits, &config, &env).await?;
    Ok(())
}
