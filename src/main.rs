#![deny(clippy::all)]
use color_eyre::eyre::Result;
use mdb_cli::clap::{CommandFactory, Parser};
use mdb_cli::cli::extra::{get_apis, media_types_of};
use mdb_cli::cli::{Cli, Commands};
use mdb_common::note::NoteRenderer;
use mdb_common::Providers;
use mdb_providers::prelude::ApiConfig;
use owo_colors::OwoColorize;
use std::process::exit;

#[tokio::main]
async fn main() -> Result<()> {
    let args: Cli = Cli::parse();

    env_logger::builder().format_timestamp(None).init();
    color_eyre::install()?;

    let settings = args.load_config()?;

    if args.list_providers {
        print_providers()?;
    }

    let Some(mode) = &args.mode else {
        Cli::command().print_help()?;
        return Ok(());
    };

    let renderer = NoteRenderer::new(settings);

    match mode {
        Commands::Search(com) => com.run().await?,
        Commands::Get(com) => com.run(&args, &renderer).await?,
        Commands::Add(com) => com.run(&args, &renderer).await?,
    }

    Ok(())
}

fn key_status(api: &ApiConfig) -> String {
    match (api.requires_key, api.api_key().is_some()) {
        (false, _) => "not needed".green().to_string(),
        (true, true) => "set".green().to_string(),
        (true, false) => "missing".red().bold().to_string(),
    }
}

fn print_providers() -> Result<()> {
    println!(
        "{}\n----------------",
        "Available Providers:".underline().bold().blue()
    );

    let apis = get_apis()?;

    for provider in Providers::ALL {
        let Some(data) = apis.get(provider.as_str()) else {
            continue;
        };

        let media_types = media_types_of(provider).map_or_else(
            || "not compiled in".red().to_string(),
            |types| format!("{:?}", types.types()),
        );

        println!(
            "{:<16} - {}:\n - {} {}\n - {} {}\n - {} {}\n - {} {}\n - {} {}\n",
            format!("[{}]", data.name),
            data.pretty_name.bold().green(),
            "Media types:".bold().blue(),
            media_types,
            "Search URL:".bold().blue(),
            data.search_url.bold().purple().underline(),
            "Details URL:".bold().blue(),
            data.base_url.bold().purple().underline(),
            "API key:".bold().blue(),
            key_status(data),
            "Enabled:".bold().blue(),
            data.enabled.bold().yellow(),
        )
    }

    exit(0)
}
