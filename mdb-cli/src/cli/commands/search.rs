use clap::Args;
use mdb_common::{MediaType, Providers};
use owo_colors::OwoColorize;

use crate::{
    cli::extra::{describe, get_apis, search_all, select_providers, settle_searches},
    error::CliError,
    progress_bars::RequestSpinner,
    MediaTypeArg, ProviderArg,
};

#[derive(Debug, Args)]
pub struct Search {
    /// Title to search for
    #[clap(value_parser, required = true)]
    pub title: Vec<String>,

    /// Only query providers returning these media types
    #[clap(short = 't', long = "type", value_name = "TYPE", ignore_case = true)]
    pub types: Vec<MediaTypeArg>,

    /// Only query these providers
    #[clap(short = 'p', long = "provider", value_name = "PROVIDER", ignore_case = true)]
    pub providers: Vec<ProviderArg>,
}

impl Search {
    pub fn title(&self) -> String {
        self.title.join(" ")
    }

    pub fn media_types(&self) -> Vec<MediaType> {
        self.types.iter().map(|t| **t).collect()
    }

    pub fn wanted_providers(&self) -> Vec<Providers> {
        self.providers.iter().map(|p| **p).collect()
    }

    pub async fn run(&self) -> Result<(), CliError> {
        let title = self.title();
        let apis = select_providers(get_apis()?, &self.media_types(), &self.wanted_providers())?;

        let spinner = RequestSpinner::new(format!("Searching for {}", title.bold()));
        let results = search_all(&apis, &title, &spinner).await;
        spinner.finish();
        let results = settle_searches(results, &self.wanted_providers())?;

        if results.iter().all(|(_, models)| models.is_empty()) {
            return Err(CliError::NoResults { title });
        }

        for (api, models) in results {
            if models.is_empty() {
                continue;
            }

            println!(
                "{} {}",
                api.pretty_name.underline().bold().blue(),
                format!("[{}]", api.name).purple()
            );

            for model in &models {
                println!(" - {}", describe(model));
            }
            println!();
        }

        Ok(())
    }
}
