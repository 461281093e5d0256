use koto_core::Reading;
use koto_core::token::{TokenEditError, validate};
use koto_store::VocabularyStore;
use koto_types::{FuriganaToken, VocabularyInput};

use super::{StubGenerator, medal_tokens};
use crate::commands::edit::{handle_regenerate, handle_set_reading};

fn store_with(reading: &str) -> (tempfile::TempDir, VocabularyStore, String) {
    let dir = tempfile::tempdir().unwrap();
    let mut store = VocabularyStore::open(dir.path().join("koto.json")).unwrap();
    let entry = store
        .create(VocabularyInput {
            content: "金メダル級".to_string(),
            focused_term: None,
            reading: reading.to_string(),
            meaning: "すごいこと。".to_string(),
        })
        .unwrap();
    (dir, store, entry.id.to_string())
}

#[test]
fn set_reading_replaces_token_sequence() {
    let (_dir, mut store, id) = store_with(&Reading::from(medal_tokens()).to_stored());

    let entry = handle_set_reading(&mut store, &id, 2, "くらい").unwrap();

    let tokens = Reading::parse(&entry.reading).tokens_or_empty();
    assert_eq!(tokens[2], FuriganaToken::new("級", Some("くらい")));
    assert_eq!(tokens[0], FuriganaToken::new("金", Some("きん")));
}

#[test]
fn blank_value_clears_reading() {
    let (_dir, mut store, id) = store_with(&Reading::from(medal_tokens()).to_stored());

    let entry = handle_set_reading(&mut store, &id[..8], 0, " ").unwrap();

    assert_eq!(Reading::parse(&entry.reading).tokens_or_empty()[0].furigana, None);
}

#[test]
fn set_reading_rejects_bad_targets() {
    let (_dir, mut store, id) = store_with(&Reading::from(medal_tokens()).to_stored());
    assert!(handle_set_reading(&mut store, &id, 3, "x").is_err());

    let (_dir, mut store, id) = store_with("きんめだるきゅう");
    assert!(handle_set_reading(&mut store, &id, 0, "x").is_err());
}

#[test]
fn set_reading_refuses_kana_token() {
    let (_dir, mut store, id) = store_with(&Reading::from(medal_tokens()).to_stored());

    let err = handle_set_reading(&mut store, &id, 1, "めだる").unwrap_err();

    assert_eq!(
        err.downcast_ref::<TokenEditError>(),
        Some(&TokenEditError::KanaToken {
            index: 1,
            text: "メダル".to_string(),
        })
    );
    let stored = Reading::parse(&store.find(&id).unwrap().reading).tokens_or_empty();
    assert_eq!(stored, medal_tokens());
    assert!(validate(&stored, "金メダル級").is_empty());
}

#[tokio::test]
async fn regenerate_upgrades_legacy_reading() {
    let (_dir, mut store, id) = store_with("きんめだるきゅう");
    let generator = StubGenerator::answering(medal_tokens(), "金メダルほどすごい。");

    let entry = handle_regenerate(&mut store, &generator, &id).await.unwrap();

    assert_eq!(Reading::parse(&entry.reading), Reading::Tokens(medal_tokens()));
    assert_eq!(entry.meaning, "金メダルほどすごい。");
    assert_eq!(entry.content, "金メダル級");
}

#[tokio::test]
async fn regenerate_keeps_entry_on_failure() {
    let (_dir, mut store, id) = store_with("きんめだるきゅう");

    assert!(
        handle_regenerate(&mut store, &StubGenerator::failing(), &id)
            .await
            .is_err()
    );
    assert_eq!(store.find(&id).unwrap().reading, "きんめだるきゅう");
}
