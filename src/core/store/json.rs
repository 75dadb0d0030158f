//! Translation store backed by a directory of JSON files.
//!
//! Layout:
//!
//! ```text
//! locales/
//! ├── common.json        # root files: locale-less entries
//! ├── en/
//! │   └── welcome.json   # single file: `en.hello` and `en.welcome.hello`
//! └── fa/
//!     ├── auth.json      # several files: one section per file
//!     └── errors.json    # `fa.auth.login`, `fa.errors.required`
//! ```
//!
//! Files are parsed once per [`JsonStore::load`] and flattened into
//! `locale -> dotted key -> message`, so lookups are plain map hits.

use std::{
    collections::{HashMap, hash_map::Entry},
    fs, io,
    path::{Path, PathBuf},
};

use serde_json::Value;
use walkdir::WalkDir;

use super::MessageStore;
use crate::core::LoadError;

/// Flattened messages of one locale, keyed by dotted path.
type LocaleEntries = HashMap<String, Message>;

#[derive(Debug, Clone)]
struct Message {
    text: String,
    /// Rendered from an object or array rather than a scalar.
    nested: bool,
}

/// A parsed `.json` file: file stem and content.
type JsonFile = (String, Value);

/// Messages loaded from a directory tree of `.json` files, plus messages
/// registered at runtime which take priority over the files.
#[derive(Debug, Clone)]
pub struct JsonStore {
    root: PathBuf,
    /// Content loaded from disk.
    locales: HashMap<String, LocaleEntries>,
    /// Runtime registrations, checked before `locales`.
    overrides: HashMap<String, HashMap<String, String>>,
}

impl JsonStore {
    /// Create a store for `root` and load it immediately.
    pub fn open(root: impl Into<PathBuf>) -> Result<Self, LoadError> {
        let mut store = Self {
            root: root.into(),
            locales: HashMap::new(),
            overrides: HashMap::new(),
        };
        store.load()?;
        Ok(store)
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// (Re)load every file under the root directory.
    ///
    /// The loaded content is replaced as a whole; registered overrides are
    /// kept. On error the previous content stays in place.
    pub fn load(&mut self) -> Result<(), LoadError> {
        let locales = load_locales(&self.root)?;
        tracing::debug!(
            root = %self.root.display(),
            locales = locales.len(),
            "Loaded translation directory"
        );
        self.locales = locales;
        Ok(())
    }

    /// Locales known to the store, sorted: top-level entries of the loaded
    /// files and locales that only have registered messages.
    pub fn locales(&self) -> Vec<&str> {
        let mut locales: Vec<&str> = self
            .locales
            .keys()
            .chain(self.overrides.keys())
            .map(String::as_str)
            .collect();
        locales.sort_unstable();
        locales.dedup();
        locales
    }

    /// Every key resolvable for `locale` without fallback, sorted.
    pub fn keys(&self, locale: &str) -> Vec<&str> {
        let loaded = self.locales.get(locale).into_iter().flat_map(|e| e.keys());
        let registered = self.overrides.get(locale).into_iter().flat_map(|e| e.keys());
        let mut keys: Vec<&str> = loaded.chain(registered).map(String::as_str).collect();
        keys.sort_unstable();
        keys.dedup();
        keys
    }

    /// Scalar messages of `locale` as `(key, message)`, sorted by key.
    ///
    /// Keys that address whole objects or arrays are left out.
    pub fn messages(&self, locale: &str) -> Vec<(&str, &str)> {
        self.keys(locale)
            .into_iter()
            .filter_map(|key| {
                if let Some(text) = self.overrides.get(locale).and_then(|e| e.get(key)) {
                    return Some((key, text.as_str()));
                }
                let message = self.locales.get(locale)?.get(key)?;
                (!message.nested).then_some((key, message.text.as_str()))
            })
            .collect()
    }
}

impl MessageStore for JsonStore {
    fn register(&mut self, locale: &str, key: &str, message: &str) {
        self.overrides
            .entry(locale.to_string())
            .or_default()
            .insert(key.to_string(), message.to_string());
    }

    fn lookup(&self, locale: &str, key: &str) -> Option<&str> {
        if let Some(message) = self.overrides.get(locale).and_then(|e| e.get(key)) {
            return Some(message);
        }
        self.locales
            .get(locale)?
            .get(key)
            .map(|m| m.text.as_str())
    }
}

fn load_locales(root: &Path) -> Result<HashMap<String, LocaleEntries>, LoadError> {
    let mut locales: HashMap<String, LocaleEntries> = HashMap::new();

    for dir in locale_dirs(root)? {
        let Some(locale) = dir.file_name().map(|n| n.to_string_lossy().to_string()) else {
            continue;
        };
        let files = read_json_files(&dir)?;
        let mut entries = LocaleEntries::new();
        match files.as_slice() {
            // A lone file is addressable both with and without its section name.
            [(stem, value)] => {
                flatten_json(value, String::new(), &mut entries);
                flatten_json(value, stem.clone(), &mut entries);
            }
            _ => {
                for (stem, value) in &files {
                    flatten_json(value, stem.clone(), &mut entries);
                }
            }
        }
        locales.insert(locale, entries);
    }

    let root_files = read_json_files(root)?;
    let top_level: Vec<(String, &Value)> = match root_files.as_slice() {
        [(stem, value)] => {
            let Value::Object(map) = value else {
                return Err(LoadError::NotAnObject {
                    path: root.join(format!("{stem}.json")),
                });
            };
            map.iter().map(|(k, v)| (k.clone(), v)).collect()
        }
        _ => root_files.iter().map(|(stem, v)| (stem.clone(), v)).collect(),
    };

    // Locale directories take precedence over root entries of the same name.
    for (name, value) in top_level {
        if let Entry::Vacant(slot) = locales.entry(name) {
            let mut entries = LocaleEntries::new();
            flatten_json(value, String::new(), &mut entries);
            slot.insert(entries);
        }
    }

    Ok(locales)
}

/// Immediate subdirectories of `root`, sorted by name.
fn locale_dirs(root: &Path) -> Result<Vec<PathBuf>, LoadError> {
    let metadata = fs::metadata(root).map_err(|source| LoadError::Io {
        path: root.to_path_buf(),
        source,
    })?;
    if !metadata.is_dir() {
        return Err(LoadError::Io {
            path: root.to_path_buf(),
            source: io::Error::new(io::ErrorKind::NotADirectory, "not a directory"),
        });
    }

    let dirs = list_dir(root)?
        .into_iter()
        .filter(|(_, metadata)| metadata.is_dir())
        .map(|(path, _)| path)
        .collect();
    Ok(dirs)
}

/// Parse every `.json` file directly inside `dir`, sorted by file name.
fn read_json_files(dir: &Path) -> Result<Vec<JsonFile>, LoadError> {
    let mut files = Vec::new();
    for (path, metadata) in list_dir(dir)? {
        let path = path.as_path();
        if !metadata.is_file() || path.extension().and_then(|e| e.to_str()) != Some("json") {
            continue;
        }
        let Some(stem) = path.file_stem().map(|s| s.to_string_lossy().to_string()) else {
            continue;
        };

        let content = fs::read_to_string(path).map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let value: Value =
            serde_json::from_str(&content).map_err(|source| LoadError::InvalidJson {
                path: path.to_path_buf(),
                source,
            })?;

        tracing::debug!(path = %path.display(), "Loaded translation file");
        files.push((stem, value));
    }
    Ok(files)
}

/// Entries directly inside `dir`, sorted by name, with symlinks resolved.
///
/// Links whose target cannot be read are skipped rather than failing the load.
fn list_dir(dir: &Path) -> Result<Vec<(PathBuf, fs::Metadata)>, LoadError> {
    let walker = WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name();

    let mut entries = Vec::new();
    for entry in walker {
        let entry = entry.map_err(|err| walk_error(dir, err))?;
        let metadata = if entry.path_is_symlink() {
            match fs::metadata(entry.path()) {
                Ok(metadata) => metadata,
                Err(err) => {
                    tracing::debug!(path = %entry.path().display(), %err, "Skipping broken link");
                    continue;
                }
            }
        } else {
            entry.metadata().map_err(|err| walk_error(dir, err))?
        };
        entries.push((entry.into_path(), metadata));
    }
    Ok(entries)
}

fn walk_error(dir: &Path, err: walkdir::Error) -> LoadError {
    let path = err.path().unwrap_or(dir).to_path_buf();
    LoadError::Io {
        path,
        source: err.into(),
    }
}

/// Flatten `value` into `entries` under dotted keys.
///
/// Every object and array along the way is addressable as well and yields
/// its compact JSON text. Array items are addressed by index
/// (`items.0.title`). An existing key is never overwritten.
fn flatten_json(value: &Value, prefix: String, entries: &mut LocaleEntries) {
    match value {
        Value::Object(map) => {
            // Nested paths win over literal dotted keys (`{"a.b": .., "a": {"b": ..}}`),
            // as they would in a path query.
            let (plain, dotted): (Vec<_>, Vec<_>) = map.iter().partition(|(k, _)| !k.contains('.'));
            for (key, val) in plain.into_iter().chain(dotted) {
                let new_prefix = if prefix.is_empty() {
                    key.clone()
                } else {
                    format!("{}.{}", prefix, key)
                };
                flatten_json(val, new_prefix, entries);
            }
        }
        Value::Array(arr) => {
            for (index, val) in arr.iter().enumerate() {
                let new_prefix = if prefix.is_empty() {
                    index.to_string()
                } else {
                    format!("{}.{}", prefix, index)
                };
                flatten_json(val, new_prefix, entries);
            }
        }
        _ => {}
    }

    if !prefix.is_empty() {
        entries.entry(prefix).or_insert_with(|| Message {
            text: render(value),
            nested: matches!(value, Value::Object(_) | Value::Array(_)),
        });
    }
}

fn render(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}
