//! The per-document aspect → opinions result.

use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::lexicon::AspectId;

/// Aspect → opinion phrases, in first-insertion order.
///
/// When built through [`insert`](Self::insert), no phrase in an aspect's
/// list is ever a substring of another phrase in the same list. Aspects only
/// appear once they hold at least one phrase.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AspectOpinionMap {
    entries: Vec<(AspectId, Vec<String>)>,
}

impl AspectOpinionMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `phrase` to `aspect`'s list, returning whether the list changed.
    ///
    /// A phrase already contained in an existing entry is rejected. A phrase
    /// that contains existing entries replaces them, taking the position of
    /// the first one.
    pub fn insert(&mut self, aspect: AspectId, phrase: impl Into<String>) -> bool {
        let phrase = phrase.into();
        if phrase.is_empty() {
            return false;
        }
        let phrases = match self.entries.iter_mut().find(|(a, _)| *a == aspect) {
            Some((_, phrases)) => phrases,
            None => {
                self.entries.push((aspect, vec![phrase]));
                return true;
            }
        };
        if phrases.iter().any(|existing| existing.contains(phrase.as_str())) {
            return false;
        }
        match phrases.iter().position(|existing| phrase.contains(existing.as_str())) {
            Some(first) => {
                phrases.retain(|existing| !phrase.contains(existing.as_str()));
                phrases.insert(first, phrase);
            }
            None => phrases.push(phrase),
        }
        true
    }

    /// Append `phrase` unless the identical string is already listed.
    ///
    /// Unlike [`insert`](Self::insert), overlapping phrases are all kept, so
    /// a map built this way may hold "good" beside "very good". Gold
    /// annotations are collected this way.
    pub fn push_exact(&mut self, aspect: AspectId, phrase: impl Into<String>) -> bool {
        let phrase = phrase.into();
        if phrase.is_empty() {
            return false;
        }
        match self.entries.iter_mut().find(|(a, _)| *a == aspect) {
            Some((_, phrases)) if phrases.contains(&phrase) => false,
            Some((_, phrases)) => {
                phrases.push(phrase);
                true
            }
            None => {
                self.entries.push((aspect, vec![phrase]));
                true
            }
        }
    }

    pub fn extend<I, S>(&mut self, aspect: AspectId, phrases: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for phrase in phrases {
            self.insert(aspect, phrase);
        }
    }

    pub fn get(&self, aspect: AspectId) -> &[String] {
        self.entries
            .iter()
            .find(|(a, _)| *a == aspect)
            .map(|(_, phrases)| phrases.as_slice())
            .unwrap_or(&[])
    }

    /// Whether any phrase recorded for `aspect` contains `text`.
    pub fn contains_phrase(&self, aspect: AspectId, text: &str) -> bool {
        self.get(aspect).iter().any(|phrase| phrase.contains(text))
    }

    pub fn aspects(&self) -> impl Iterator<Item = AspectId> + '_ {
        self.entries.iter().map(|(aspect, _)| *aspect)
    }

    pub fn iter(&self) -> impl Iterator<Item = (AspectId, &[String])> + '_ {
        self.entries
            .iter()
            .map(|(aspect, phrases)| (*aspect, phrases.as_slice()))
    }

    /// Number of aspects with at least one phrase.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn phrase_count(&self) -> usize {
        self.entries.iter().map(|(_, phrases)| phrases.len()).sum()
    }
}

impl<S: Into<String>> FromIterator<(AspectId, S)> for AspectOpinionMap {
    fn from_iter<I: IntoIterator<Item = (AspectId, S)>>(iter: I) -> Self {
        let mut map = AspectOpinionMap::new();
        for (aspect, phrase) in iter {
            map.insert(aspect, phrase);
        }
        map
    }
}

/// ```text
/// pizza: "incredible", "very good"
/// lasagna: "undercooked"
/// ```
impl fmt::Display for AspectOpinionMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (idx, (aspect, phrases)) in self.entries.iter().enumerate() {
            if idx > 0 {
                writeln!(f)?;
            }
            write!(f, "{}:", aspect)?;
            for (phrase_idx, phrase) in phrases.iter().enumerate() {
                let sep = if phrase_idx == 0 { " " } else { ", " };
                write!(f, "{}{:?}", sep, phrase)?;
            }
        }
        Ok(())
    }
}

impl Serialize for AspectOpinionMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (aspect, phrases) in &self.entries {
            map.serialize_entry(aspect, phrases)?;
        }
        map.end()
    }
}

struct AspectOpinionMapVisitor;

impl<'de> Visitor<'de> for AspectOpinionMapVisitor {
    type Value = AspectOpinionMap;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a map from aspect id to a list of opinion phrases")
    }

    fn visit_map<M: MapAccess<'de>>(self, mut access: M) -> Result<Self::Value, M::Error> {
        let mut map = AspectOpinionMap::new();
        while let Some((aspect, phrases)) = access.next_entry::<AspectId, Vec<String>>()? {
            map.extend(aspect, phrases);
        }
        Ok(map)
    }
}

impl<'de> Deserialize<'de> for AspectOpinionMap {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(AspectOpinionMapVisitor)
    }
}
