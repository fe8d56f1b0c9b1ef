use clap::Parser;
use config::Config;
use race_scorer::{
    cli::{Cli, Command},
    commands,
};
use std::io::{self, Write};
use tracing::debug;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let filter = EnvFilter::builder()
        .with_default_directive(cli.verbosity.tracing_level_filter().into())
        .from_env_lossy();
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_level(true)
        .with_file(true)
        .with_line_number(true)
        .init();

    debug!(config = ?cli);

    let config = match &cli.conffile {
        Some(path) => Config::load(path)?,
        _ => Config::from_env()?,
    };

    let mut out = io::stdout().lock();
    match cli.command {
        Command::Score {
            prediction,
            result,
            base_points,
        } => {
            let breakdown = commands::score(&config, &prediction, result.as_deref(), base_points)?;
            commands::write_json(&mut out, &breakdown)?;
        }
        Command::Race {
            sheet,
            json,
            strict,
        } => {
            let leaderboard = commands::race(&config, &sheet, strict)?;
            if json {
                commands::write_json(&mut out, &leaderboard)?;
            } else {
                commands::write_leaderboard(&mut out, &leaderboard)?;
            }
        }
        Command::Season { sheets, json } => {
            let season = commands::season(&config, &sheets)?;
            if json {
                commands::write_json(&mut out, &season)?;
            } else {
                commands::write_season(&mut out, &season)?;
            }
        }
        Command::Teams {
            roster,
            sheets,
            json,
        } => {
            let teams = commands::teams(&config, &roster, &sheets)?;
            if json {
                commands::write_json(&mut out, &teams)?;
            } else {
                commands::write_teams(&mut out, &teams)?;
            }
        }
        Command::Config => {
            out.write_all(config.to_toml()?.as_bytes())?;
        }
    }
    out.flush()?;

    Ok(())
}
