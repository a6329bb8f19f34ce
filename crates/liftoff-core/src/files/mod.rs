//! Files emitted into the generated project

pub mod copier;

use crate::error::{GenerationError, Result};
use std::path::{Path, PathBuf};

pub use copier::{collect_resources, copy_resource};

/// An ordered `key=value` bag; re-inserting a key replaces its value in place
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Properties {
    entries: Vec<(String, String)>,
}

impl Properties {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((key, value)),
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// One `key=value` line per entry, followed by a blank line
    pub fn render(&self) -> String {
        let mut content = String::new();
        for (key, value) in &self.entries {
            content.push_str(key);
            content.push('=');
            content.push_str(value);
            content.push('\n');
        }
        content.push('\n');
        content
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Properties {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut properties = Properties::new();
        for (k, v) in iter {
            properties.insert(k, v);
        }
        properties
    }
}

/// `include 'a', 'b'` for the given module ids, in the order supplied
pub fn render_settings<I, S>(modules: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let quoted: Vec<String> = modules
        .into_iter()
        .map(|m| format!("'{}'", m.as_ref()))
        .collect();
    format!("include {}\n", quoted.join(", "))
}

/// A single artifact in the output tree, addressed by its path relative to
/// the project root
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProjectFile {
    Directory {
        path: PathBuf,
    },
    Source {
        path: PathBuf,
        content: String,
    },
    /// Copied byte-for-byte from the bundled resources directory
    Copied {
        path: PathBuf,
        resource: PathBuf,
    },
    Properties {
        path: PathBuf,
        properties: Properties,
    },
    Settings {
        path: PathBuf,
        modules: Vec<String>,
    },
}

impl ProjectFile {
    pub fn directory(path: impl Into<PathBuf>) -> Self {
        Self::Directory { path: path.into() }
    }

    pub fn source(path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        Self::Source {
            path: path.into(),
            content: content.into(),
        }
    }

    pub fn copied(path: impl Into<PathBuf>, resource: impl Into<PathBuf>) -> Self {
        Self::Copied {
            path: path.into(),
            resource: resource.into(),
        }
    }

    pub fn properties(path: impl Into<PathBuf>, properties: Properties) -> Self {
        Self::Properties {
            path: path.into(),
            properties,
        }
    }

    pub fn settings(modules: Vec<String>) -> Self {
        Self::Settings {
            path: PathBuf::from("settings.gradle"),
            modules,
        }
    }

    pub fn path(&self) -> &Path {
        match self {
            Self::Directory { path }
            | Self::Source { path, .. }
            | Self::Copied { path, .. }
            | Self::Properties { path, .. }
            | Self::Settings { path, .. } => path,
        }
    }

    /// Rendered text for files whose content is known without touching disk
    pub fn text(&self) -> Option<String> {
        match self {
            Self::Source { content, .. } => Some(content.clone()),
            Self::Properties { properties, .. } => Some(properties.render()),
            Self::Settings { modules, .. } => Some(render_settings(modules)),
            Self::Directory { .. } | Self::Copied { .. } => None,
        }
    }

    /// Write this file under `destination`, overwriting whatever is there
    pub fn save(&self, destination: &Path, resources: &Path) -> Result<()> {
        let target = destination.join(self.path());
        match self {
            Self::Directory { .. } => {
                std::fs::create_dir_all(&target).map_err(|e| GenerationError::io(&target, e))
            }
            Self::Copied { resource, .. } => copy_resource(&resources.join(resource), &target),
            _ => {
                let content = self.text().unwrap_or_default();
                write_file(&target, content.as_bytes())
            }
        }
    }
}

/// Write bytes, creating parent directories as needed
pub fn write_file(target: &Path, bytes: &[u8]) -> Result<()> {
    if let Some(parent) = target.parent() {
        std::fs::create_dir_all(parent).map_err(|e| GenerationError::io(parent, e))?;
    }
    std::fs::write(target, bytes).map_err(|e| GenerationError::io(target, e))
}
