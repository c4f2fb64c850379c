//! Shareable location
//!
//! The folder view mirrors its query into a URL-like location so the
//! current ordering can be copied and reopened (`--location`).

use std::collections::BTreeMap;
use std::fmt;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Location {
    pub path: String,
    query: BTreeMap<String, String>,
}

impl Location {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            query: BTreeMap::new(),
        }
    }

    /// Parse `path?key=value&...`. Malformed pairs without '=' are kept
    /// with an empty value; undecodable values are kept raw.
    pub fn parse(input: &str) -> Self {
        let (path, query_str) = match input.split_once('?') {
            Some((path, query)) => (path, query),
            None => (input, ""),
        };

        let query = query_str
            .split('&')
            .filter(|pair| !pair.is_empty())
            .map(|pair| {
                let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
                (decode(key), decode(value))
            })
            .collect();

        Self {
            path: path.to_string(),
            query,
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.query.get(key).map(String::as_str)
    }

    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.query.insert(key.into(), value.into());
    }
}

fn decode(s: &str) -> String {
    urlencoding::decode(s)
        .map(|d| d.into_owned())
        .unwrap_or_else(|_| s.to_string())
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.path)?;
        for (idx, (key, value)) in self.query.iter().enumerate() {
            let sep = if idx == 0 { '?' } else { '&' };
            write!(
                f,
                "{}{}={}",
                sep,
                urlencoding::encode(key),
                urlencoding::encode(value)
            )?;
        }
        Ok(())
    }
}

/// Location path for a listing root, e.g. `/folders/projects/docs`
pub fn folder_path(root: &std::path::Path) -> String {
    let display = root.display().to_string();
    let trimmed = display.trim_start_matches('/').trim_end_matches('/');
    if trimmed.is_empty() {
        "/folders".to_string()
    } else {
        format!("/folders/{}", trimmed)
    }
}
