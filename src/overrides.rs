//! Override parameter store
//!
//! Parses the tabular override file into a per-path-template mapping.
//! Each row is `[path(+optional "?k=v&k2=v2" suffix), method, body]`.
//! Parsing is all-or-nothing: a short row or a malformed query pair fails
//! the whole load, never a single row.

use std::collections::BTreeMap;
use std::io::Read;
use std::path::Path;

use serde_json::Value;

use crate::common::{Error, Result};

/// Concrete substitution for one path template
#[derive(Debug, Clone, PartialEq)]
pub struct OverrideEntry {
    pub method: String,
    /// Flat query mapping; a duplicate key keeps its last value
    pub query: BTreeMap<String, Value>,
    /// Request-body placeholder, carried verbatim from the file
    pub body: String,
    /// Path with the query suffix stripped
    pub path: String,
}

/// Override entries keyed by path template
///
/// Backed by a `BTreeMap` so scans over the entries are deterministic
/// regardless of row order in the source file.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct OverrideStore {
    entries: BTreeMap<String, OverrideEntry>,
}

impl OverrideStore {
    /// Parse an override CSV file.
    pub fn from_csv(path: &Path) -> Result<Self> {
        let file = std::fs::File::open(path).map_err(|e| Error::OverrideRead {
            path: path.display().to_string(),
            error: e.to_string(),
        })?;
        Self::from_reader(file)
    }

    /// Parse override rows from any reader.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_reader(reader);

        let mut entries = BTreeMap::new();
        for record in csv_reader.records() {
            let record = record.map_err(|e| Error::OverrideParse(e.to_string()))?;
            let line = record.position().map(|p| p.line()).unwrap_or(0);

            let (raw_path, method, body) = match (record.get(0), record.get(1), record.get(2)) {
                (Some(p), Some(m), Some(b)) => (p, m, b),
                _ => {
                    return Err(Error::OverrideRow {
                        line,
                        found: record.len(),
                    })
                }
            };

            let (path, query) = split_query(raw_path, line)?;
            entries.insert(
                path.clone(),
                OverrideEntry {
                    method: method.to_string(),
                    query,
                    body: body.to_string(),
                    path,
                },
            );
        }

        Ok(Self { entries })
    }

    pub fn get(&self, path: &str) -> Option<&OverrideEntry> {
        self.entries.get(path)
    }

    /// Entries in path order.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &OverrideEntry)> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Split `path?k=v&k2=v2` into the bare path and its query mapping.
///
/// No percent-escaping is performed; values are taken verbatim.
fn split_query(raw: &str, line: u64) -> Result<(String, BTreeMap<String, Value>)> {
    let mut query = BTreeMap::new();
    let Some((path, suffix)) = raw.split_once('?') else {
        return Ok((raw.to_string(), query));
    };

    for pair in suffix.split('&') {
        let Some((key, value)) = pair.split_once('=') else {
            return Err(Error::OverrideQuery {
                line,
                pair: pair.to_string(),
            });
        };
        query.insert(key.to_string(), Value::String(value.to_string()));
    }

    Ok((path.to_string(), query))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn parse(csv: &str) -> Result<OverrideStore> {
        OverrideStore::from_reader(csv.as_bytes())
    }

    #[test]
    fn parses_rows_into_entries() {
        let store = parse("/users/42?status=active,GET,none\n/items,POST,payload\n").unwrap();
        assert_eq!(store.len(), 2);

        let users = store.get("/users/42").unwrap();
        assert_eq!(users.method, "GET");
        assert_eq!(users.body, "none");
        assert_eq!(users.query.get("status"), Some(&json!("active")));

        let items = store.get("/items").unwrap();
        assert!(items.query.is_empty());
    }

    #[test]
    fn last_duplicate_query_key_wins() {
        let store = parse("/users?page=1&page=2,GET,none\n").unwrap();
        let entry = store.get("/users").unwrap();
        assert_eq!(entry.query.get("page"), Some(&json!("2")));
    }

    #[test]
    fn query_pair_without_equals_fails_the_whole_parse() {
        let err = parse("/ok,GET,none\n/users?broken,GET,none\n").unwrap_err();
        assert!(matches!(err, Error::OverrideQuery { pair, .. } if pair == "broken"));
    }

    #[test]
    fn short_row_fails_the_whole_parse() {
        let err = parse("/users,GET\n").unwrap_err();
        assert!(matches!(err, Error::OverrideRow { found: 2, .. }));
    }

    #[test]
    fn missing_file_is_a_read_error() {
        let err = OverrideStore::from_csv(Path::new("/nonexistent/overrides.csv")).unwrap_err();
        assert!(matches!(err, Error::OverrideRead { .. }));
    }

    #[test]
    fn iteration_order_is_deterministic() {
        let store = parse("/zebra,GET,a\n/alpha,GET,b\n").unwrap();
        let paths: Vec<_> = store.iter().map(|(p, _)| p.as_str()).collect();
        assert_eq!(paths, ["/alpha", "/zebra"]);
    }
}
