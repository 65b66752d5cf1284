//! Draw result types
//!
//! Shared between the CLI and library consumers:
//! - DrawResult: one draw's published result (metadata + prize table)
//! - PrizeTable / PrizeEntry: the prize tiers exactly as published

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// One draw's published result, as served by the results API
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DrawResult {
    pub name: String,      // e.g. SUVARNA KERALAM
    pub code: String,      // e.g. SK-37
    pub draw_date: String, // e.g. 23/01/2026
    pub prizes: PrizeTable,
}

/// A single prize tier: its published label and winning numbers
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PrizeEntry {
    pub label: String,
    pub numbers: Vec<String>,
}

impl PrizeEntry {
    pub fn new(label: impl Into<String>, numbers: Vec<String>) -> Self {
        Self {
            label: label.into(),
            numbers,
        }
    }

    /// Representative number for listings (first in published order)
    pub fn headline_number(&self) -> Option<&str> {
        self.numbers.first().map(String::as_str)
    }
}

/// The prize tiers of one draw, in published order.
///
/// On the wire this is a JSON object keyed by tier label. The document
/// order of the keys is kept: it decides both display order and which
/// tier a ticket is reported to have won.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PrizeTable(Vec<PrizeEntry>);

impl PrizeTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, entry: PrizeEntry) {
        self.0.push(entry);
    }

    pub fn iter(&self) -> impl Iterator<Item = &PrizeEntry> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// First tier whose label contains `token` (case-insensitive)
    pub fn find_tier(&self, token: &str) -> Option<&PrizeEntry> {
        let token = token.to_lowercase();
        self.0
            .iter()
            .find(|entry| entry.label.to_lowercase().contains(&token))
    }

    pub fn first_prize(&self) -> Option<&PrizeEntry> {
        self.find_tier("1st")
    }

    pub fn consolation(&self) -> Option<&PrizeEntry> {
        self.find_tier("consolation")
    }
}

impl FromIterator<PrizeEntry> for PrizeTable {
    fn from_iter<I: IntoIterator<Item = PrizeEntry>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl Serialize for PrizeTable {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for entry in &self.0 {
            map.serialize_entry(&entry.label, &entry.numbers)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for PrizeTable {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        struct TableVisitor;

        impl<'de> Visitor<'de> for TableVisitor {
            type Value = PrizeTable;

            fn expecting(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str("a map of prize label to winning numbers")
            }

            fn visit_map<A: MapAccess<'de>>(
                self,
                mut access: A,
            ) -> std::result::Result<Self::Value, A::Error> {
                let mut entries = Vec::with_capacity(access.size_hint().unwrap_or(0));
                while let Some((label, numbers)) = access.next_entry::<String, Vec<String>>()? {
                    entries.push(PrizeEntry { label, numbers });
                }
                Ok(PrizeTable(entries))
            }
        }

        deserializer.deserialize_map(TableVisitor)
    }
}
