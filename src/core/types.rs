// src/core/types.rs
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// One data line of the source table, after parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PinyinRecord {
    /// 1-based line number, kept for diagnostics.
    pub line: usize,
    pub code_point: u32,
    /// Romanized readings in source order, duplicates kept.
    /// e.g., ["zhong1", "zhong4"] for "中".
    pub variants: Vec<String>,
}

/// The generated lookup table: character -> pronunciation variants.
/// Keys keep the position of their first insertion.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PinyinDict {
    entries: IndexMap<char, Vec<String>>,
}

impl PinyinDict {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores the variants for `ch`, returning whatever was there before.
    pub fn insert(&mut self, ch: char, variants: Vec<String>) -> Option<Vec<String>> {
        self.entries.insert(ch, variants)
    }

    pub fn get(&self, ch: char) -> Option<&[String]> {
        self.entries.get(&ch).map(Vec::as_slice)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (char, &[String])> {
        self.entries.iter().map(|(&ch, v)| (ch, v.as_slice()))
    }
}
