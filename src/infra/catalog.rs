use anyhow::{Context, Result, ensure};
use serde::Serialize;
use std::collections::BTreeMap;
use std::path::Path;

/// Cities available without a catalog file.
const BUILTIN_CITIES: &[&str] = &["Chicago", "New York City", "Washington"];

/// One known city and the trip log that backs it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CityEntry {
    pub name: String,
    pub file: String,
}

/// Maps city names to trip log file names.
///
/// A catalog file is a plain JSON object:
/// ```json
/// {
///   "Chicago": "chicago.csv",
///   "Boston": "boston_2019.csv.gz"
/// }
/// ```
/// Lookups ignore case, surrounding whitespace, and treat `_` as a space, so
/// `new_york_city` finds "New York City".
#[derive(Debug, Clone)]
pub struct CityCatalog {
    entries: Vec<CityEntry>,
}

impl CityCatalog {
    /// Chicago, New York City and Washington, each mapped by [`file_name_for`].
    pub fn builtin() -> Self {
        Self::from_entries(
            BUILTIN_CITIES
                .iter()
                .map(|city| (city.to_string(), file_name_for(city))),
        )
    }

    pub fn from_entries(entries: impl IntoIterator<Item = (String, String)>) -> Self {
        let mut entries: Vec<_> = entries
            .into_iter()
            .map(|(name, file)| CityEntry { name, file })
            .collect();
        entries.sort_by(|a, b| a.name.cmp(&b.name));
        Self { entries }
    }

    /// Loads the catalog from a JSON file at `path`.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("reading city catalog {}", path.display()))?;
        Self::from_json(&content)
            .with_context(|| format!("parsing city catalog {}", path.display()))
    }

    /// Parses a catalog from JSON. A catalog without cities is an error.
    pub fn from_json(content: &str) -> Result<Self> {
        let entries: BTreeMap<String, String> = serde_json::from_str(content)?;
        let catalog = Self::from_entries(entries);
        ensure!(!catalog.is_empty(), "city catalog lists no cities");
        Ok(catalog)
    }

    /// Returns the catalog entry for `city`, if one is configured.
    pub fn get(&self, city: &str) -> Option<&CityEntry> {
        let wanted = normalize(city);
        self.entries.iter().find(|e| normalize(&e.name) == wanted)
    }

    /// Returns the trip log file for `city`, if one is configured.
    pub fn file_for(&self, city: &str) -> Option<&str> {
        self.get(city).map(|e| e.file.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = &CityEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Conventional file name for a city: `New York City` → `new_york_city.csv`.
pub fn file_name_for(city: &str) -> String {
    format!("{}.csv", city.trim().to_lowercase().replace(' ', "_"))
}

fn normalize(city: &str) -> String {
    city.trim().to_lowercase().replace('_', " ")
}
