use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::Utc;
use koto_core::Reading;
use koto_types::{VocabularyEntry, VocabularyInput};
use serde::{Deserialize, Serialize};
use tempfile::NamedTempFile;
use uuid::Uuid;

/// On-disk layout
#[derive(Serialize, Deserialize, Default)]
struct StoreFile {
    entries: Vec<VocabularyEntry>,
}

/// Vocabulary notes kept in a single JSON file.
///
/// Every mutation is written back before it returns.
pub struct VocabularyStore {
    path: PathBuf,
    entries: Vec<VocabularyEntry>,
}

impl VocabularyStore {
    /// Load the store, a missing file is an empty store
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();

        let entries = if path.exists() {
            let file = File::open(&path)
                .with_context(|| format!("Failed to open store {}", path.display()))?;
            let data: StoreFile = serde_json::from_reader(BufReader::new(file))
                .with_context(|| format!("Failed to parse store {}", path.display()))?;
            tracing::info!("Loaded {} entries from {}", data.entries.len(), path.display());
            data.entries
        } else {
            tracing::info!("No store at {}, starting empty", path.display());
            Vec::new()
        };

        Ok(Self { path, entries })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn create(&mut self, input: VocabularyInput) -> Result<VocabularyEntry> {
        let now = Utc::now();
        let entry = VocabularyEntry {
            id: Uuid::new_v4(),
            content: input.content,
            focused_term: input.focused_term.filter(|t| !t.is_empty()),
            reading: input.reading,
            meaning: input.meaning,
            created_at: now,
            updated_at: now,
        };

        self.entries.push(entry.clone());
        self.save()?;
        tracing::info!("Created entry {}", entry.id);

        Ok(entry)
    }

    /// Replace content, focused term, reading and meaning wholesale
    pub fn update(&mut self, id: Uuid, input: VocabularyInput) -> Result<VocabularyEntry> {
        let entry = self
            .entries
            .iter_mut()
            .find(|e| e.id == id)
            .with_context(|| format!("No entry with id {id}"))?;

        entry.content = input.content;
        entry.focused_term = input.focused_term.filter(|t| !t.is_empty());
        entry.reading = input.reading;
        entry.meaning = input.meaning;
        entry.updated_at = Utc::now();
        let entry = entry.clone();

        self.save()?;
        tracing::info!("Updated entry {}", id);

        Ok(entry)
    }

    pub fn delete(&mut self, id: Uuid) -> Result<()> {
        let before = self.entries.len();
        self.entries.retain(|e| e.id != id);
        if self.entries.len() == before {
            anyhow::bail!("No entry with id {id}");
        }

        self.save()?;
        tracing::info!("Deleted entry {}", id);

        Ok(())
    }

    pub fn get(&self, id: Uuid) -> Option<&VocabularyEntry> {
        self.entries.iter().find(|e| e.id == id)
    }

    /// Resolve a full id or an unambiguous prefix of one
    pub fn find(&self, id: &str) -> Result<&VocabularyEntry> {
        if let Ok(id) = Uuid::parse_str(id) {
            return self.get(id).with_context(|| format!("No entry with id {id}"));
        }

        let mut matches = self
            .entries
            .iter()
            .filter(|e| e.id.to_string().starts_with(id));

        match (matches.next(), matches.next()) {
            (Some(entry), None) => Ok(entry),
            (Some(_), Some(_)) => anyhow::bail!("Id prefix {id} is ambiguous"),
            (None, _) => anyhow::bail!("No entry with id {id}"),
        }
    }

    /// All entries, newest first
    pub fn list(&self) -> Vec<&VocabularyEntry> {
        let mut entries: Vec<&VocabularyEntry> = self.entries.iter().rev().collect();
        entries.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        entries
    }

    /// Entries whose content, reading or meaning contains `query`, newest first.
    ///
    /// Token readings are matched on their joined phonetic spelling, never on
    /// the stored JSON.
    pub fn search(&self, query: &str) -> Vec<&VocabularyEntry> {
        let query = query.trim();
        self.list()
            .into_iter()
            .filter(|e| {
                query.is_empty()
                    || e.content.contains(query)
                    || Reading::parse(&e.reading).phonetic().contains(query)
                    || e.meaning.contains(query)
            })
            .collect()
    }

    /// Atomic write: temp file in the same directory, then rename
    fn save(&self) -> Result<()> {
        let parent = match self.path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p,
            _ => Path::new("."),
        };
        fs::create_dir_all(parent)?;

        let data = StoreFile {
            entries: self.entries.clone(),
        };

        let temp = NamedTempFile::new_in(parent)?;
        {
            let mut writer = BufWriter::new(&temp);
            serde_json::to_writer_pretty(&mut writer, &data)?;
            writer.flush()?;
        }
        temp.persist(&self.path)
            .with_context(|| format!("Failed to write store {}", self.path.display()))?;

        Ok(())
    }
}
