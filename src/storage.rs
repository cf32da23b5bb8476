use std::{
    fmt,
    fs,
    io::ErrorKind,
    path::{Path, PathBuf},
};

use serde::{
    Deserialize, Deserializer, Serialize, Serializer,
    de::{MapAccess, Visitor},
    ser::SerializeMap,
};

use serde_json::Value;

use crate::error::Result;

/// One saved snippet. The key lives in the owning [`Store`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    pub text: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub info: String,
    #[serde(
        default,
        deserialize_with = "string_or_none",
        skip_serializing_if = "Option::is_none"
    )]
    pub date: Option<String>,
}

fn null_as_empty<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> std::result::Result<String, D::Error> {
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// The date is informational only, so anything but a string is dropped.
fn string_or_none<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> std::result::Result<Option<String>, D::Error> {
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => Some(s),
        _ => None,
    })
}

/// Key to entry mapping in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Store {
    entries: Vec<(String, Entry)>,
}

impl Store {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn position(&self, key: &str) -> Option<usize> {
        self.entries.iter().position(|(k, _)| k == key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.position(key).is_some()
    }

    pub fn get(&self, key: &str) -> Option<&Entry> {
        self.position(key).map(|i| &self.entries[i].1)
    }

    /// Overwriting keeps the key at its original position.
    pub fn insert(&mut self, key: impl Into<String>, entry: Entry) -> Option<Entry> {
        let key = key.into();
        match self.position(&key) {
            Some(i) => Some(std::mem::replace(&mut self.entries[i].1, entry)),
            None => {
                self.entries.push((key, entry));
                None
            }
        }
    }

    pub fn remove(&mut self, key: &str) -> Option<Entry> {
        self.position(key).map(|i| self.entries.remove(i).1)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Entry)> {
        self.entries.iter().map(|(k, e)| (k.as_str(), e))
    }
}

impl Serialize for Store {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, entry) in &self.entries {
            map.serialize_entry(key, entry)?;
        }
        map.end()
    }
}

struct StoreVisitor;

impl<'de> Visitor<'de> for StoreVisitor {
    type Value = Store;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("an object of snippet entries")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> std::result::Result<Store, A::Error> {
        let mut store = Store::new();
        while let Some((key, entry)) = access.next_entry::<String, Entry>()? {
            store.insert(key, entry);
        }
        Ok(store)
    }
}

impl<'de> Deserialize<'de> for Store {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        deserializer.deserialize_map(StoreVisitor)
    }
}

/// How [`Storage::load`] obtained its store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadStatus {
    Existing,
    /// No data file yet.
    Fresh,
    /// The data file exists but could not be parsed; an empty store was substituted.
    RecoveredEmpty { reason: String },
}

pub struct Storage {
    file_path: PathBuf,
}

impl Storage {
    pub fn new(file_path: impl Into<PathBuf>) -> Self {
        Self {
            file_path: file_path.into(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.file_path
    }

    pub fn load(&self) -> Result<(Store, LoadStatus)> {
        let bytes = match fs::read(&self.file_path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                log::debug!("no data file at {}", self.file_path.display());
                return Ok((Store::new(), LoadStatus::Fresh));
            }
            Err(e) => return Err(e.into()),
        };

        match serde_json::from_slice::<Store>(&bytes) {
            Ok(store) => {
                log::debug!(
                    "loaded {} entries from {}",
                    store.len(),
                    self.file_path.display()
                );
                Ok((store, LoadStatus::Existing))
            }
            Err(e) => {
                log::warn!("{} is malformed: {e}", self.file_path.display());
                Ok((
                    Store::new(),
                    LoadStatus::RecoveredEmpty {
                        reason: e.to_string(),
                    },
                ))
            }
        }
    }

    /// Rewrites the whole file.
    pub fn save(&self, store: &Store) -> Result<()> {
        if let Some(dir) = self.file_path.parent() {
            if !dir.as_os_str().is_empty() {
                fs::create_dir_all(dir)?;
            }
        }

        let content = serde_json::to_string_pretty(store)?;
        fs::write(&self.file_path, content)?;
        log::debug!(
            "saved {} entries to {}",
            store.len(),
            self.file_path.display()
        );
        Ok(())
    }

    /// Copies the current file aside to `<file>.corrupt` and returns the copy's path.
    pub fn quarantine(&self) -> Result<PathBuf> {
        let mut name = self.file_path.clone().into_os_string();
        name.push(".corrupt");
        let backup = PathBuf::from(name);
        fs::copy(&self.file_path, &backup)?;
        Ok(backup)
    }
}
