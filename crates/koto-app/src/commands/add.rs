use koto_core::entry::check_input;
use koto_core::preprocess::{DefaultPreprocessor, Preprocessor};
use koto_core::{Reading, normalize_tokens, parse_input};
use koto_generator::{EntryGenerator, GenerationRequest};
use koto_store::VocabularyStore;
use koto_types::{FuriganaToken, VocabularyEntry, VocabularyInput};

pub async fn handle_add(
    store: &mut VocabularyStore,
    generator: Option<&dyn EntryGenerator>,
    query: &str,
    meaning: Option<String>,
    no_generate: bool,
) -> anyhow::Result<VocabularyEntry> {
    let query = DefaultPreprocessor.process(query);
    let parsed = parse_input(&query);
    tracing::debug!("Parsed query: {:?}", parsed);

    let (content, focused_term) = match parsed.sentence {
        Some(sentence) => (sentence, Some(parsed.target)),
        None => (parsed.target, None),
    };
    let request = GenerationRequest::new(content.clone(), focused_term.clone());

    let generated = match generator {
        Some(generator) if !no_generate => match generator.generate(&request).await {
            Ok(entry) => Some(entry),
            Err(e) => {
                tracing::error!("Entry generation failed, falling back to manual input: {}", e);
                None
            }
        },
        _ => None,
    };

    let (mut tokens, generated_meaning) = match generated {
        Some(entry) => (entry.reading, Some(entry.meaning)),
        None => (Vec::new(), None),
    };

    // an explicit `word[reading]` beats whatever was generated
    if let Some(reading) = parsed.reading {
        tokens = normalize_tokens(vec![FuriganaToken::new(request.target(), Some(&reading))]);
    }

    let input = VocabularyInput {
        content,
        focused_term,
        reading: Reading::from(tokens).to_stored(),
        meaning: meaning.or(generated_meaning).unwrap_or_default(),
    };
    check_input(&input)?;

    store.create(input)
}
