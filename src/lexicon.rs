//! The closed aspect vocabulary.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

/// Canonical aspect ids; the only keys an [`AspectOpinionMap`](crate::AspectOpinionMap) can hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AspectId {
    Pizza,
    Gnocchi,
    Bruschetta,
    Gelato,
    Lasagna,
}

impl AspectId {
    pub const ALL: [AspectId; 5] = [
        AspectId::Pizza,
        AspectId::Gnocchi,
        AspectId::Bruschetta,
        AspectId::Gelato,
        AspectId::Lasagna,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            AspectId::Pizza => "pizza",
            AspectId::Gnocchi => "gnocchi",
            AspectId::Bruschetta => "bruschetta",
            AspectId::Gelato => "gelato",
            AspectId::Lasagna => "lasagna",
        }
    }
}

impl FromStr for AspectId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        AspectId::ALL
            .iter()
            .copied()
            .find(|aspect| aspect.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| s.to_string())
    }
}

impl fmt::Display for AspectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Grammatical number of a surface form, used to pair it with a copula.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GrammaticalNumber {
    Singular,
    Plural,
    /// Same form for both numbers ("gnocchi")
    Invariant,
}

impl GrammaticalNumber {
    pub fn takes_copula(&self, copula: &str) -> bool {
        let copula = copula.to_lowercase();
        match self {
            GrammaticalNumber::Singular => copula == "is" || copula == "was",
            GrammaticalNumber::Plural => copula == "are" || copula == "were",
            GrammaticalNumber::Invariant => {
                matches!(copula.as_str(), "is" | "was" | "are" | "were")
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LexiconEntry {
    pub surface: String,
    pub aspect: AspectId,
    pub number: GrammaticalNumber,
}

impl LexiconEntry {
    pub fn new(surface: &str, aspect: AspectId, number: GrammaticalNumber) -> Self {
        Self {
            surface: surface.to_lowercase(),
            aspect,
            number,
        }
    }
}

/// Surface form → aspect table. Lookups are case-folded and exact.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(from = "Vec<LexiconEntry>", into = "Vec<LexiconEntry>")]
pub struct Lexicon {
    entries: Vec<LexiconEntry>,
    index: HashMap<String, usize>,
}

static STANDARD: Lazy<Lexicon> = Lazy::new(|| {
    use AspectId::*;
    use GrammaticalNumber::*;
    Lexicon::from(vec![
        LexiconEntry::new("pizza", Pizza, Singular),
        LexiconEntry::new("pizzas", Pizza, Plural),
        LexiconEntry::new("gnocchi", Gnocchi, Invariant),
        LexiconEntry::new("bruschetta", Bruschetta, Singular),
        LexiconEntry::new("bruschettas", Bruschetta, Plural),
        LexiconEntry::new("gelato", Gelato, Singular),
        LexiconEntry::new("gelatos", Gelato, Plural),
        LexiconEntry::new("lasagna", Lasagna, Singular),
        LexiconEntry::new("lasagne", Lasagna, Plural),
    ])
});

impl Lexicon {
    /// The five-dish restaurant lexicon.
    pub fn standard() -> Lexicon {
        STANDARD.clone()
    }

    pub fn canonicalize(&self, surface: &str) -> Option<AspectId> {
        self.entry(surface).map(|entry| entry.aspect)
    }

    pub fn entry(&self, surface: &str) -> Option<&LexiconEntry> {
        self.index
            .get(&surface.to_lowercase())
            .map(|&idx| &self.entries[idx])
    }

    pub fn entries(&self) -> &[LexiconEntry] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for Lexicon {
    fn default() -> Self {
        Lexicon::standard()
    }
}

impl PartialEq for Lexicon {
    fn eq(&self, other: &Self) -> bool {
        self.entries == other.entries
    }
}

impl From<Vec<LexiconEntry>> for Lexicon {
    /// Later duplicates of a surface form are dropped.
    fn from(entries: Vec<LexiconEntry>) -> Self {
        let mut kept = Vec::with_capacity(entries.len());
        let mut index = HashMap::new();
        for mut entry in entries {
            entry.surface = entry.surface.to_lowercase();
            if index.contains_key(&entry.surface) {
                continue;
            }
            index.insert(entry.surface.clone(), kept.len());
            kept.push(entry);
        }
        Lexicon {
            entries: kept,
            index,
        }
    }
}

impl From<Lexicon> for Vec<LexiconEntry> {
    fn from(lexicon: Lexicon) -> Self {
        lexicon.entries
    }
}
