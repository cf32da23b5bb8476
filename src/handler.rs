use chrono::Local;

use crate::{
    clipboard::ClipboardSink,
    error::Result,
    prompt::Prompt,
    sanitize,
    storage::{Entry, LoadStatus, Storage, Store},
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AddOutcome {
    Added(String),
    Overwritten(String),
    EmptyText,
    EmptyKey,
    Cancelled,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeleteOutcome {
    Deleted(String),
    NotFound(String),
    Cancelled,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CopyOutcome {
    Copied(String),
    NotFound(String),
}

/// Today's date as `YYYY-MM-DD`.
pub fn today() -> String {
    Local::now().date_naive().format("%Y-%m-%d").to_string()
}

pub struct Handler {
    storage: Storage,
    store: Store,
}

impl Handler {
    pub fn new(storage: Storage, store: Store) -> Self {
        Self { storage, store }
    }

    pub fn open(storage: Storage) -> Result<(Self, LoadStatus)> {
        let (store, status) = storage.load()?;
        Ok((Self::new(storage, store), status))
    }

    pub fn store(&self) -> &Store {
        &self.store
    }

    pub fn storage(&self) -> &Storage {
        &self.storage
    }

    pub fn add(&mut self, prompt: &mut dyn Prompt) -> Result<AddOutcome> {
        let mut text = prompt.read_line("Input text for your command: ")?.trim().to_string();
        if text.is_empty() {
            prompt.say("Text cannot be empty.");
            return Ok(AddOutcome::EmptyText);
        }

        if sanitize::has_unwanted(&text) {
            let cleaned = sanitize::strip(&text);
            if !sanitize::confirm(prompt, &text, &cleaned)? {
                prompt.say("Entry cancelled.");
                return Ok(AddOutcome::Cancelled);
            }
            if cleaned.trim().is_empty() {
                prompt.say("Text cannot be empty.");
                return Ok(AddOutcome::EmptyText);
            }
            text = cleaned;
        }

        let mut key = prompt.read_line("Add a key for your text: ")?.trim().to_string();
        if key.is_empty() {
            prompt.say("Key cannot be empty.");
            return Ok(AddOutcome::EmptyKey);
        }

        if sanitize::has_unwanted_key(&key) {
            let cleaned = sanitize::strip_key(&key);
            if !sanitize::confirm(prompt, &key, &cleaned)? {
                prompt.say("Entry cancelled.");
                return Ok(AddOutcome::Cancelled);
            }
            key = cleaned;
            if key.is_empty() {
                prompt.say("Key cannot be empty.");
                return Ok(AddOutcome::EmptyKey);
            }
        }

        let info = prompt.read_line("Add some info about your command (optional): ")?;
        let info = sanitize::strip(info.trim());

        let existed = self.store.contains_key(&key);
        if existed
            && !prompt.confirm(&format!(
                "Key \"{key}\" already exists. Overwrite? (y/n): "
            ))?
        {
            prompt.say("Cancelled.");
            return Ok(AddOutcome::Cancelled);
        }

        let entry = Entry {
            text,
            info,
            date: Some(today()),
        };
        self.store.insert(key.clone(), entry);
        self.storage.save(&self.store)?;

        prompt.say(&format!("Entry for key \"{key}\" added successfully."));
        Ok(if existed {
            AddOutcome::Overwritten(key)
        } else {
            AddOutcome::Added(key)
        })
    }

    pub fn list(&self, prompt: &mut dyn Prompt) {
        if self.store.is_empty() {
            prompt.say("No entries found.");
            return;
        }

        prompt.say("Saved entries:");
        for (key, entry) in self.store.iter() {
            let date = entry.date.as_deref().unwrap_or("no date");
            prompt.say(&format!("{key} - {} ({date})", entry.info));
        }
    }

    pub fn delete(&mut self, key: &str, prompt: &mut dyn Prompt) -> Result<DeleteOutcome> {
        let key = key.trim();
        if !self.store.contains_key(key) {
            prompt.say(&format!("Key \"{key}\" does not exist."));
            return Ok(DeleteOutcome::NotFound(key.to_string()));
        }

        if !prompt.confirm(&format!(
            "Are you sure you want to delete \"{key}\"? (y/n): "
        ))? {
            prompt.say("Deletion cancelled.");
            return Ok(DeleteOutcome::Cancelled);
        }

        self.store.remove(key);
        self.storage.save(&self.store)?;

        prompt.say(&format!("Entry for key \"{key}\" deleted."));
        Ok(DeleteOutcome::Deleted(key.to_string()))
    }

    pub fn copy(
        &self,
        key: &str,
        clipboard: &mut dyn ClipboardSink,
        prompt: &mut dyn Prompt,
    ) -> Result<CopyOutcome> {
        let Some(entry) = self.store.get(key) else {
            prompt.say(&format!("Key \"{key}\" not found."));
            return Ok(CopyOutcome::NotFound(key.to_string()));
        };

        clipboard.copy(&entry.text)?;

        prompt.say(&entry.text);
        prompt.say(&format!("Copied text for key \"{key}\" to clipboard."));
        Ok(CopyOutcome::Copied(key.to_string()))
    }
}
