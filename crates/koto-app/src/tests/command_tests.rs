use std::sync::Arc;

use koto_config::Config;
use koto_core::state::AppState;

use crate::cli::Command;
use crate::commands::{build_generator, run};

fn state(dir: &tempfile::TempDir) -> Arc<AppState> {
    let mut config = Config::default();
    config.store.path = dir.path().join("koto.json");
    Arc::new(AppState::new(config))
}

#[tokio::test]
async fn render_command_prints_brackets_and_html() {
    let dir = tempfile::tempdir().unwrap();

    let text = run(
        state(&dir),
        Command::Render {
            content: "後の祭り".to_string(),
            focus: Some("後".to_string()),
            reading: "あと".to_string(),
            html: false,
        },
    )
    .await
    .unwrap();
    assert_eq!(text, "後[あと]の祭り");

    let html = run(
        state(&dir),
        Command::Render {
            content: "こんにちは".to_string(),
            focus: Some("さようなら".to_string()),
            reading: "さようなら".to_string(),
            html: true,
        },
    )
    .await
    .unwrap();
    assert_eq!(html, "こんにちは");
}

#[tokio::test]
async fn parse_command_outputs_json() {
    let dir = tempfile::tempdir().unwrap();

    let out = run(
        state(&dir),
        Command::Parse {
            query: "春[はる]".to_string(),
        },
    )
    .await
    .unwrap();

    let value: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(value["target"], "春");
    assert_eq!(value["reading"], "はる");
    assert!(value["sentence"].is_null());
}

#[tokio::test]
async fn add_list_delete_round() {
    let dir = tempfile::tempdir().unwrap();
    let state = state(&dir);

    let added = run(
        state.clone(),
        Command::Add {
            query: "春[はる]".to_string(),
            meaning: Some("四季の一つ。".to_string()),
            no_generate: true,
        },
    )
    .await
    .unwrap();
    assert!(added.contains("春[はる]"));

    let listed = run(state.clone(), Command::List { html: true }).await.unwrap();
    assert!(listed.contains("<ruby class=\"focus\">春<rt>はる</rt></ruby>"));

    let id: String = added.chars().take(8).collect();
    run(state.clone(), Command::Delete { id }).await.unwrap();

    let listed = run(state, Command::List { html: false }).await.unwrap();
    assert_eq!(listed, "No entries");
}

#[test]
fn generator_needs_key_and_known_provider() {
    let mut config = Config::default().generator;
    assert!(build_generator(&config).is_none());

    config.api_key = "key".to_string();
    assert_eq!(build_generator(&config).unwrap().metadata().name, "Gemini");

    config.provider = "other".to_string();
    assert!(build_generator(&config).is_none());
}
