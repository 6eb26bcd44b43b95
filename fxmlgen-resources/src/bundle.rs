//! Display title lookup.
//!
//! Generated code resolves titles itself at run time; here the lookup is
//! only used to verify that a bundle covers every generated key.

use std::{
    collections::HashMap,
    hash::BuildHasher,
    path::{Path, PathBuf},
};

use indexmap::IndexMap;

use crate::BundleError;

/// Resolves a bundle key to its display string.
pub trait TitleResolver {
    fn resolve(&self, key: &str) -> Option<String>;
}

impl<S: BuildHasher> TitleResolver for HashMap<String, String, S> {
    fn resolve(&self, key: &str) -> Option<String> {
        self.get(key).cloned()
    }
}

/// A Java `.properties` file loaded into memory.
#[derive(Debug, Clone, Default)]
pub struct PropertiesBundle {
    path: Option<PathBuf>,
    entries: IndexMap<String, String>,
}

impl TitleResolver for PropertiesBundle {
    fn resolve(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }
}

impl PropertiesBundle {
    /// Open and parse a `.properties` file.
    ///
    /// The file is read as UTF-8, falling back to ISO-8859-1 when it is not
    /// valid UTF-8, as `PropertyResourceBundle` does.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, BundleError> {
        let path = path.as_ref().to_path_buf();
        let bytes = std::fs::read(&path).map_err(|e| BundleError::Io {
            path: path.clone(),
            source: e,
        })?;
        let mut bundle = Self::parse(&decode(bytes));
        bundle.path = Some(path);
        Ok(bundle)
    }

    /// Find `<base_name>.properties` in the first root that has one.
    pub fn find<P: AsRef<Path>>(
        roots: impl IntoIterator<Item = P>,
        base_name: &str,
    ) -> Result<Option<Self>, BundleError> {
        let file_name = format!("{}.properties", base_name);
        for root in roots {
            let candidate = root.as_ref().join(&file_name);
            if candidate.is_file() {
                return Self::open(candidate).map(Some);
            }
        }
        Ok(None)
    }

    /// Parse `.properties` text.
    ///
    /// Handles `#`/`!` comments, `=`, `:` and whitespace separators, line
    /// continuations and the usual backslash escapes.
    pub fn parse(src: &str) -> Self {
        let mut entries = IndexMap::new();
        let mut lines = src.lines();

        while let Some(line) = lines.next() {
            let mut logical = line.trim_start().to_string();
            if logical.is_empty() || logical.starts_with('#') || logical.starts_with('!') {
                continue;
            }

            while ends_with_continuation(&logical) {
                logical.pop();
                match lines.next() {
                    Some(next) => logical.push_str(next.trim_start()),
                    None => break,
                }
            }

            let (key, value) = split_pair(&logical);
            entries.insert(unescape(key), unescape(value));
        }

        Self {
            path: None,
            entries,
        }
    }

    /// Where the bundle was loaded from, if it came from disk.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }
}

fn decode(bytes: Vec<u8>) -> String {
    String::from_utf8(bytes).unwrap_or_else(|err| {
        // Every byte is its own code point in ISO-8859-1.
        err.into_bytes().into_iter().map(char::from).collect()
    })
}

fn ends_with_continuation(line: &str) -> bool {
    let trailing = line.chars().rev().take_while(|c| *c == '\\').count();
    trailing % 2 == 1
}

/// Split a logical line at the first unescaped separator.
fn split_pair(line: &str) -> (&str, &str) {
    let mut escaped = false;
    let mut key_end = line.len();
    for (i, c) in line.char_indices() {
        if escaped {
            escaped = false;
            continue;
        }
        match c {
            '\\' => escaped = true,
            '=' | ':' | ' ' | '\t' | '\u{c}' => {
                key_end = i;
                break;
            }
            _ => {}
        }
    }

    let key = &line[..key_end];
    let rest = line[key_end..].trim_start_matches([' ', '\t', '\u{c}']);
    let rest = rest
        .strip_prefix(['=', ':'])
        .map(|r| r.trim_start_matches([' ', '\t', '\u{c}']))
        .unwrap_or(rest);
    (key, rest)
}

fn unescape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut chars = s.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('t') => out.push('\t'),
            Some('n') => out.push('\n'),
            Some('r') => out.push('\r'),
            Some('f') => out.push('\u{c}'),
            Some('u') => {
                let hex: String = chars.by_ref().take(4).collect();
                match u32::from_str_radix(&hex, 16).ok().and_then(char::from_u32) {
                    Some(decoded) => out.push(decoded),
                    None => {
                        out.push_str("\\u");
                        out.push_str(&hex);
                    }
                }
            }
            Some(other) => out.push(other),
            None => {}
        }
    }
    out
}
