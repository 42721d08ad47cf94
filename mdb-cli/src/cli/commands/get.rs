use clap::Args;
use mdb_common::note::NoteRenderer;
use owo_colors::OwoColorize;

use crate::{
    cli::{
        extra::{get_provider, provider_config, write_note},
        Cli,
    },
    error::CliError,
    progress_bars::RequestSpinner,
    ProviderArg,
};

#[derive(Debug, Args)]
pub struct Get {
    /// Provider the id belongs to
    #[clap(value_name = "PROVIDER", ignore_case = true)]
    pub provider: ProviderArg,

    /// Id of the item as used by the provider
    #[clap(value_name = "ID")]
    pub id: String,

    /// Print the note to stdout instead of writing it
    #[clap(long, action)]
    pub print: bool,
}

impl Get {
    pub async fn run(&self, args: &Cli, renderer: &NoteRenderer) -> Result<(), CliError> {
        let api = provider_config(*self.provider)?;

        let spinner = RequestSpinner::new(format!(
            "Fetching {} from {}",
            self.id.bold(),
            api.pretty_name.blue()
        ));
        let model = get_provider(api, &self.id).await;
        spinner.finish();

        let note = renderer.render(&model?)?;

        if self.print {
            println!("{}", note.content);
            return Ok(());
        }

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
