//! `key: value` hints carried by the first line of a document,
//! e.g. `// language: C; theme: default`.

use rustc_hash::FxHashMap;

const COMMENT_PREFIXES: [&str; 5] = ["//", "/*", "#", "--", ";"];

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocumentMetadata {
    entries: FxHashMap<String, String>,
}

impl DocumentMetadata {
    pub fn parse(first_line: &str) -> Self {
        let mut body = first_line.trim();
        if let Some(prefix) = COMMENT_PREFIXES.iter().find(|p| body.starts_with(**p)) {
            body = &body[prefix.len()..];
        }
        body = body.trim_end().strip_suffix("*/").unwrap_or(body);

        let entries = body
            .split([';', ','])
            .filter_map(|piece| {
                let (key, value) = piece.split_once(':')?;
                let key = key.trim();
                let value = value.trim();
                let valid_key = !key.is_empty()
                    && key
                        .chars()
                        .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
                (valid_key && !value.is_empty())
                    .then(|| (key.to_ascii_lowercase(), value.to_string()))
            })
            .collect();

        Self { entries }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn language_hint(&self) -> Option<&str> {
        self.get("language").or_else(|| self.get("lang"))
    }

    pub fn theme_hint(&self) -> Option<&str> {
        self.get("theme")
    }
}
