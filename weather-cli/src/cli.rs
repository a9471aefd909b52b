use clap::{Parser, Subcommand};
use inquire::Text;
use smartweather_core::{
    Config, FileStore, HttpBackend, LookupOutcome, RecentCache, WeatherPipeline,
};

use crate::{interactive, render};

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "smartweather", version, about = "Smart Weather lookup client")]
pub struct Cli {
    /// Weather backend endpoint, overrides the configured one.
    #[arg(long, global = true, env = "SMARTWEATHER_BACKEND_URL")]
    pub backend_url: Option<String>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Look up a city and add it to the recent searches.
    Show {
        /// City name, e.g. `New York`.
        city: Vec<String>,
    },

    /// List recent searches.
    Recent {
        /// Look up the N-th recent search (1-based) without reordering history.
        #[arg(long, value_name = "N", conflicts_with = "clear")]
        open: Option<usize>,

        /// Forget all recent searches.
        #[arg(long)]
        clear: bool,
    },

    /// List the preset top cities, or look one up.
    Top {
        city: Vec<String>,
    },

    /// Prompt-driven session (the default).
    Interactive,

    /// Configure the backend endpoint.
    Configure,
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        let mut config = Config::load()?;
        if let Some(url) = &self.backend_url {
            config.set_backend_url(url);
        }

        match self.command.unwrap_or(Command::Interactive) {
            Command::Configure => configure(config)?,
            Command::Show { city } => {
                let mut pipeline = open_pipeline(&config)?;
                pipeline.search(&city.join(" ")).await;
                print!("{}", render::view(pipeline.view()));
            }
            Command::Recent { open, clear } => {
                let mut pipeline = open_pipeline(&config)?;
                if clear {
                    pipeline.recent_mut().clear()?;
                    println!("Recent searches cleared.");
                } else if let Some(n) = open {
                    let outcome = match n.checked_sub(1) {
                        Some(index) => pipeline.replay_recent(index).await,
                        None => None,
                    };
                    match outcome {
                        Some(_) => print!("{}", render::view(pipeline.view())),
                        None => eprintln!("No recent search #{n}."),
                    }
                } else {
                    print!("{}", render::recent_list(pipeline.recent().entries()));
                }
            }
            Command::Top { city } => {
                let mut pipeline = open_pipeline(&config)?;
                let outcome = if city.is_empty() {
                    LookupOutcome::Skipped
                } else {
                    pipeline.replay_preset(&city.join(" ")).await
                };
                match outcome {
                    LookupOutcome::Skipped => print!("{}", render::top_list(pipeline.top_cities())),
                    _ => print!("{}", render::view(pipeline.view())),
                }
            }
            Command::Interactive => {
                let mut pipeline = open_pipeline(&config)?;
                interactive::run(&mut pipeline).await?;
            }
        }

        Ok(())
    }
}

fn open_pipeline(config: &Config) -> anyhow::Result<WeatherPipeline<FileStore>> {
    let backend = match config.request_timeout() {
        Some(timeout) => HttpBackend::with_timeout(config.backend_url(), timeout)?,
        None => HttpBackend::new(config.backend_url()),
    };

    let data_dir = config.data_dir()?;
    tracing::debug!(
        backend = config.backend_url(),
        data_dir = %data_dir.display(),
        "opening pipeline"
    );

    let recent = RecentCache::load(FileStore::new(data_dir));
    Ok(WeatherPipeline::new(Box::new(backend), recent, config.top_cities()))
}

fn configure(mut config: Config) -> anyhow::Result<()> {
    let url = Text::new("Weather backend URL:")
        .with_default(config.backend_url())
        .with_help_message("Leave empty to use the built-in default")
        .prompt()?;

    config.set_backend_url(&url);
    config.save()?;

    println!("Saved configuration to {}", Config::config_file_path()?.display());
    Ok(())
}
