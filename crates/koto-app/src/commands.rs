use std::sync::Arc;

use koto_config::generator::GeneratorConfig;
use koto_core::parse_input;
use koto_core::render::{render_html, render_text};
use koto_core::state::AppState;
use koto_generator::EntryGenerator;
use koto_lang_japanese::GeminiGenerator;
use koto_store::VocabularyStore;

use crate::cli::Command;
use crate::display::{format_entry, format_entry_detail};

pub mod add;
pub mod edit;

use add::handle_add;
use edit::{handle_regenerate, handle_set_reading};

/// Run one CLI command and return what should be printed
pub async fn run(state: Arc<AppState>, command: Command) -> anyhow::Result<String> {
    match command {
        Command::Render {
            content,
            focus,
            reading,
            html,
        } => {
            let focus = focus.as_deref();
            Ok(if html {
                render_html(&content, focus, &reading)
            } else {
                render_text(&content, focus, &reading)
            })
        }
        Command::Parse { query } => Ok(serde_json::to_string_pretty(&parse_input(&query))?),
        Command::Add {
            query,
            meaning,
            no_generate,
        } => {
            let mut store = open_store(&state).await?;
            let generator = generator(&state).await;
            let entry = handle_add(
                &mut store,
                generator.as_deref(),
                &query,
                meaning,
                no_generate,
            )
            .await?;
            Ok(format_entry(&entry, false))
        }
        Command::List { html } => {
            let store = open_store(&state).await?;
            Ok(list_entries(store.list(), html))
        }
        Command::Search { query, html } => {
            let store = open_store(&state).await?;
            Ok(list_entries(store.search(&query), html))
        }
        Command::Show { id } => {
            let store = open_store(&state).await?;
            Ok(format_entry_detail(store.find(&id)?))
        }
        Command::Delete { id } => {
            let mut store = open_store(&state).await?;
            let id = store.find(&id)?.id;
            store.delete(id)?;
            Ok(format!("Deleted {id}"))
        }
        Command::SetReading { id, index, value } => {
            let mut store = open_store(&state).await?;
            let entry = handle_set_reading(&mut store, &id, index, &value)?;
            Ok(format_entry_detail(&entry))
        }
        Command::Regenerate { id } => {
            let mut store = open_store(&state).await?;
            let generator = generator(&state)
                .await
                .ok_or_else(|| anyhow::anyhow!("No generator configured, set GEMINI_API_KEY"))?;
            let entry = handle_regenerate(&mut store, generator.as_ref(), &id).await?;
            Ok(format_entry_detail(&entry))
        }
    }
}

async fn open_store(state: &AppState) -> anyhow::Result<VocabularyStore> {
    VocabularyStore::open(state.store_path().await)
}

async fn generator(state: &AppState) -> Option<Box<dyn EntryGenerator>> {
    build_generator(&state.generator_config().await)
}

fn list_entries(entries: Vec<&koto_types::VocabularyEntry>, html: bool) -> String {
    if entries.is_empty() {
        return "No entries".to_string();
    }
    entries
        .into_iter()
        .map(|entry| format_entry(entry, html))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Generator for the configured provider, `None` when generation is off
pub fn build_generator(config: &GeneratorConfig) -> Option<Box<dyn EntryGenerator>> {
    if !config.enabled() {
        tracing::debug!("No API key, entry generation disabled");
        return None;
    }

    match config.provider.as_str() {
        "gemini" => Some(Box::new(GeminiGenerator::new(
            config.api_key.clone(),
            config.api_url.clone(),
            config.model.clone(),
        ))),
        other => {
            tracing::warn!("Unknown generator provider '{}', generation disabled", other);
            None
        }
    }
}
