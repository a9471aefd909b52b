use std::fmt;

use inquire::{InquireError, Select, Text};
use smartweather_core::{KeyValueStore, WeatherPipeline};

use crate::render;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuItem {
    Search,
    Recent,
    Top,
    Quit,
}

impl fmt::Display for MenuItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            MenuItem::Search => "Search a city",
            MenuItem::Recent => "Recent searches",
            MenuItem::Top => "Top cities",
            MenuItem::Quit => "Quit",
        })
    }
}

/// Menu loop until the user quits or hits Ctrl-C. Esc inside a sub-prompt
/// returns to the menu.
pub async fn run<S: KeyValueStore>(pipeline: &mut WeatherPipeline<S>) -> anyhow::Result<()> {
    let items = vec![MenuItem::Search, MenuItem::Recent, MenuItem::Top, MenuItem::Quit];

    loop {
        let choice = match Select::new("Smart Weather", items.clone()).prompt() {
            Ok(choice) => choice,
            Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => break,
            Err(err) => return Err(err.into()),
        };

        let step = match choice {
            MenuItem::Search => search(pipeline).await,
            MenuItem::Recent => recent(pipeline).await,
            MenuItem::Top => top(pipeline).await,
            MenuItem::Quit => break,
        };

        match step {
            Ok(()) | Err(InquireError::OperationCanceled) => {}
            Err(InquireError::OperationInterrupted) => break,
            Err(err) => return Err(err.into()),
        }
    }

    Ok(())
}

async fn search<S: KeyValueStore>(pipeline: &mut WeatherPipeline<S>) -> Result<(), InquireError> {
    let city = Text::new("Enter city:").prompt()?;
    pipeline.search(&city).await;
    print!("{}", render::view(pipeline.view()));
    Ok(())
}

async fn recent<S: KeyValueStore>(pipeline: &mut WeatherPipeline<S>) -> Result<(), InquireError> {
    let lines: Vec<String> = pipeline.recent().entries().iter().map(render::recent_line).collect();
    if lines.is_empty() {
        print!("{}", render::recent_list(&[]));
        return Ok(());
    }

    let picked = Select::new("Recent searches", lines).raw_prompt()?;
    pipeline.replay_recent(picked.index).await;
    print!("{}", render::view(pipeline.view()));
    Ok(())
}

async fn top<S: KeyValueStore>(pipeline: &mut WeatherPipeline<S>) -> Result<(), InquireError> {
    let cities = pipeline.top_cities().to_vec();
    if cities.is_empty() {
        return Ok(());
    }

    let city = Select::new("Top cities", cities).with_help_message("Tap to view weather").prompt()?;
    pipeline.replay_preset(&city).await;
    print!("{}", render::view(pipeline.view()));
    Ok(())
}
