// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

use std::env;
use std::path::PathBuf;

use anyhow::{anyhow, Result};
use setlist::config::AppConfig;
use setlist::logging;
use setlist::ui::{App, UiState};
use tracing::info;

fn print_usage() {
    println!("SETLIST - Song List Editor");
    println!();
    println!("Usage: setlist [OPTIONS]");
    println!();
    println!("Options:");
    println!("  --config <PATH>   Load settings from a TOML file");
    println!("  --song <TITLE>    Start with this song (repeatable)");
    println!("  --dump-config     Print the effective configuration and exit");
    println!("  --help            Show this help message");
}

/// Parsed command line
#[derive(Debug, Default)]
struct Args {
    config: Option<PathBuf>,
    songs: Vec<String>,
    dump_config: bool,
    help: bool,
}

fn parse_args(args: &[String]) -> Result<Args> {
    let mut parsed = Args::default();
    let mut iter = args.iter();

    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--config" => {
                let path = iter
                    .next()
                    .ok_or_else(|| anyhow!("--config requires a file path"))?;
                parsed.config = Some(PathBuf::from(path));
            }
            "--song" => {
                let title = iter
                    .next()
                    .ok_or_else(|| anyhow!("--song requires a title"))?;
                parsed.songs.push(title.clone());
            }
            "--dump-config" => parsed.dump_config = true,
            "--help" | "-h" => parsed.help = true,
            other => return Err(anyhow!("Unknown option: {}", other)),
        }
    }

    Ok(parsed)
}

fn main() -> Result<()> {
    let argv: Vec<String> = env::args().skip(1).collect();
    let args = match parse_args(&argv) {
        Ok(args) => args,
        Err(e) => {
            eprintln!("Error: {}", e);
            print_usage();
            std::process::exit(1);
        }
    };

    if args.help {
        print_usage();
        return Ok(());
    }

    let mut config = match &args.config {
        Some(path) => AppConfig::load(path)?,
        None => AppConfig::default(),
    };
    config.list.songs.extend(args.songs);

    if args.dump_config {
        print!("{}", config.to_toml()?);
        return Ok(());
    }

    logging::init(&config.logging)?;
    info!(config = ?args.config, "starting setlist");

    let state = UiState::new(config.list.songs.clone());
    let app = App::new(state, config)?;
    let songs = app.run()?;

    for (i, title) in songs.iter().enumerate() {
        println!("{:>3}. {}", i + 1, title);
    }

    Ok(())
}
