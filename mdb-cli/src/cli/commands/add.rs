use clap::Args;
use dialoguer::{theme::ColorfulTheme, Select};
use mdb_common::{note::NoteRenderer, MediaType, Providers};
use owo_colors::OwoColorize;

use crate::{
    cli::{
        extra::{
            describe, get_apis, get_provider, search_all, select_providers, settle_searches,
            write_note,
        },
        Cli,
    },
    error::CliError,
    progress_bars::RequestSpinner,
    MediaTypeArg, ProviderArg,
};

#[derive(Debug, Args)]
pub struct Add {
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

impl Add {
    pub async fn run(&self, args: &Cli, renderer: &NoteRenderer) -> Result<(), CliError> {
        let title = self.title.join(" ");
        let types: Vec<MediaType> = self.types.iter().map(|t| **t).collect();
        let wanted: Vec<Providers> = self.providers.iter().map(|p| **p).collect();
        let apis = select_providers(get_apis()?, &types, &wanted)?;

        let spinner = RequestSpinner::new(format!("Searching for {}", title.bold()));
        let results = search_all(&apis, &title, &spinner).await;
        spinner.finish();
        let results = settle_searches(results, &wanted)?;

        // Search results of other media types are dropped when `-t` is given.
        let choices: Vec<_> = results
            .into_iter()
            .flat_map(|(api, models)| models.into_iter().map(move |model| (api, model)))
            .filter(|(_, model)| types.is_empty() || types.contains(&model.media_type()))
            .collect();

        if choices.is_empty() {
            return Err(CliError::NoResults { title });
        }

        let labels: Vec<String> = choices
            .iter()
            .map(|(api, model)| format!("{} - {}", api.pretty_name, describe(model)))
            .collect();

        let Some(picked) = Select::with_theme(&ColorfulTheme::default())
            .with_prompt("Pick a result")
            .items(&labels)
            .default(0)
            .interact_opt()?
        else {
            println!("{}", "Nothing selected".bold().blue());
            return Ok(());
        };

        let (api, choice) = &choices[picked];

        let spinner = RequestSpinner::new(format!(
            "Fetching {} from {}",
            choice.title().bold(),
            api.pretty_name.blue()
        ));
        let model = get_provider(api, choice.id()).await;
        spinner.finish();

        let note = renderer.render(&model?)?;

        match write_note(&args.generate_save_path()?, &note, args.overwrite).await? {
            Some(path) => println!(
                "{} {}",
                "Saved".bold().green(),
                path.display().bold().blue().italic()
            ),
            None => println!("{}", "Note not written".bold().blue()),
        }

        Ok(())
    }
}
