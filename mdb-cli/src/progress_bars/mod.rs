use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use mdb_common::Providers;
use owo_colors::OwoColorize;
use std::time::Duration;

const SPINNER_TEMPLATE: &str = "{spinner:.green.bold} {elapsed:.bold} {msg}";
const TICK_CHARS: &str = "⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏ ";

/// Spinner shown on stderr while provider requests are in flight.
#[derive(Debug)]
pub struct RequestSpinner {
    bar: ProgressBar,
}

impl RequestSpinner {
    pub fn new(message: impl Into<String>) -> Self {
        let bar = ProgressBar::new_spinner()
            .with_style(spinner_style())
            .with_message(message.into());
        bar.set_draw_target(ProgressDrawTarget::stderr());
        bar.enable_steady_tick(Duration::from_millis(100));

        Self { bar }
    }

    /// Prints a finished provider above the spinner.
    pub fn provider_done(&self, provider: Providers, results: usize) {
        self.bar.println(format!(
            "{} {} {}",
            provider.pretty_name().blue().italic(),
            results.green().bold(),
            "results".green().bold()
        ));
    }

    pub fn finish(&self) {
        self.bar.finish_and_clear();
    }
}

fn spinner_style() -> ProgressStyle {
    ProgressStyle::default_spinner()
        .template(SPINNER_TEMPLATE)
        .unwrap()
        .tick_chars(TICK_CHARS)
}
