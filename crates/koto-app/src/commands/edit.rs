use anyhow::Context;
use koto_core::Reading;
use koto_core::token::with_token_reading;
use koto_generator::{EntryGenerator, GenerationRequest};
use koto_store::VocabularyStore;
use koto_types::{VocabularyEntry, VocabularyInput};

/// Edit one token reading, storing the whole new sequence
pub fn handle_set_reading(
    store: &mut VocabularyStore,
    id: &str,
    index: usize,
    value: &str,
) -> anyhow::Result<VocabularyEntry> {
    let entry = store.find(id)?.clone();

    let tokens = Reading::parse(&entry.reading).tokens_or_empty();
    if tokens.is_empty() {
        anyhow::bail!(
            "Entry {} has a legacy flat reading, run `koto regenerate` first",
            entry.id
        );
    }

    let edited = with_token_reading(&tokens, index, value.trim())?;

    store.update(
        entry.id,
        VocabularyInput {
            content: entry.content,
            focused_term: entry.focused_term,
            reading: Reading::from(edited).to_stored(),
            meaning: entry.meaning,
        },
    )
}

/// Replace reading and meaning with freshly generated ones
pub async fn handle_regenerate(
    store: &mut VocabularyStore,
    generator: &dyn EntryGenerator,
    id: &str,
) -> anyhow::Result<VocabularyEntry> {
    let entry = store.find(id)?.clone();
    let request = GenerationRequest::new(entry.content.clone(), entry.focused_term.clone());

    let generated = generator
        .generate(&request)
        .await
        .with_context(|| format!("Failed to generate entry for '{}'", request.target()))?;

    if generated.reading.is_empty() {
        anyhow::bail!("Generator returned no tokens for '{}'", request.target());
    }

    store.update(
        entry.id,
        VocabularyInput {
            content: entry.content,
            focused_term: entry.focused_term,
            reading: Reading::from(generated.reading).to_stored(),
            meaning: generated.meaning,
        },
    )
}
