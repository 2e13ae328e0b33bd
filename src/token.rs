//! Annotated tokens: the nodes of the dependency graph the extractor walks.
//!
//! ```text
//! The     pizza     was     incredible  .
//!         ╰───╯NOUN nsubj->was
//!                           ╰────────╯ADJ acomp->was
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Coarse part-of-speech tag (Universal POS inventory).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum PosTag {
    Adj,
    Adp,
    Adv,
    Aux,
    Cconj,
    Det,
    Intj,
    Noun,
    Num,
    Part,
    Pron,
    Propn,
    Punct,
    Sconj,
    Sym,
    Verb,
    X,
    Space,
}

impl PosTag {
    pub fn as_str(&self) -> &'static str {
        match self {
            PosTag::Adj => "ADJ",
            PosTag::Adp => "ADP",
            PosTag::Adv => "ADV",
            PosTag::Aux => "AUX",
            PosTag::Cconj => "CCONJ",
            PosTag::Det => "DET",
            PosTag::Intj => "INTJ",
            PosTag::Noun => "NOUN",
            PosTag::Num => "NUM",
            PosTag::Part => "PART",
            PosTag::Pron => "PRON",
            PosTag::Propn => "PROPN",
            PosTag::Punct => "PUNCT",
            PosTag::Sconj => "SCONJ",
            PosTag::Sym => "SYM",
            PosTag::Verb => "VERB",
            PosTag::X => "X",
            PosTag::Space => "SPACE",
        }
    }
}

impl FromStr for PosTag {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tag = match s.to_ascii_uppercase().as_str() {
            "ADJ" => PosTag::Adj,
            "ADP" => PosTag::Adp,
            "ADV" => PosTag::Adv,
            "AUX" => PosTag::Aux,
            // spaCy 2 emitted CCONJ, older models used CONJ
            "CCONJ" | "CONJ" => PosTag::Cconj,
            "DET" => PosTag::Det,
            "INTJ" => PosTag::Intj,
            "NOUN" => PosTag::Noun,
            "NUM" => PosTag::Num,
            "PART" => PosTag::Part,
            "PRON" => PosTag::Pron,
            "PROPN" => PosTag::Propn,
            "PUNCT" => PosTag::Punct,
            "SCONJ" => PosTag::Sconj,
            "SYM" => PosTag::Sym,
            "VERB" => PosTag::Verb,
            "X" => PosTag::X,
            "SPACE" => PosTag::Space,
            other => return Err(other.to_string()),
        };
        Ok(tag)
    }
}

impl fmt::Display for PosTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Dependency relation of a token to its head.
///
/// Covers the ClearNLP label inventory produced by English spaCy models.
/// Labels outside the inventory are kept verbatim in [`DepRel::Other`] so
/// that unusual parses never fail to load; no extraction rule matches them.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum DepRel {
    Root,
    Acl,
    Acomp,
    Advcl,
    Advmod,
    Agent,
    Amod,
    Appos,
    Attr,
    Aux,
    Auxpass,
    Case,
    Cc,
    Ccomp,
    Compound,
    Conj,
    Csubj,
    Csubjpass,
    Dative,
    Dep,
    Det,
    Dobj,
    Expl,
    Intj,
    Mark,
    Meta,
    Neg,
    Nmod,
    Npadvmod,
    Nsubj,
    Nsubjpass,
    Nummod,
    Oprd,
    Parataxis,
    Pcomp,
    Pobj,
    Poss,
    Preconj,
    Predet,
    Prep,
    Prt,
    Punct,
    Quantmod,
    Relcl,
    Xcomp,
    Other(String),
}

impl DepRel {
    pub fn as_str(&self) -> &str {
        match self {
            DepRel::Root => "ROOT",
            DepRel::Acl => "acl",
            DepRel::Acomp => "acomp",
            DepRel::Advcl => "advcl",
            DepRel::Advmod => "advmod",
            DepRel::Agent => "agent",
            DepRel::Amod => "amod",
            DepRel::Appos => "appos",
            DepRel::Attr => "attr",
            DepRel::Aux => "aux",
            DepRel::Auxpass => "auxpass",
            DepRel::Case => "case",
            DepRel::Cc => "cc",
            DepRel::Ccomp => "ccomp",
            DepRel::Compound => "compound",
            DepRel::Conj => "conj",
            DepRel::Csubj => "csubj",
            DepRel::Csubjpass => "csubjpass",
            DepRel::Dative => "dative",
            DepRel::Dep => "dep",
            DepRel::Det => "det",
            DepRel::Dobj => "dobj",
            DepRel::Expl => "expl",
            DepRel::Intj => "intj",
            DepRel::Mark => "mark",
            DepRel::Meta => "meta",
            DepRel::Neg => "neg",
            DepRel::Nmod => "nmod",
            DepRel::Npadvmod => "npadvmod",
            DepRel::Nsubj => "nsubj",
            DepRel::Nsubjpass => "nsubjpass",
            DepRel::Nummod => "nummod",
            DepRel::Oprd => "oprd",
            DepRel::Parataxis => "parataxis",
            DepRel::Pcomp => "pcomp",
            DepRel::Pobj => "pobj",
            DepRel::Poss => "poss",
            DepRel::Preconj => "preconj",
            DepRel::Predet => "predet",
            DepRel::Prep => "prep",
            DepRel::Prt => "prt",
            DepRel::Punct => "punct",
            DepRel::Quantmod => "quantmod",
            DepRel::Relcl => "relcl",
            DepRel::Xcomp => "xcomp",
            DepRel::Other(label) => label,
        }
    }

    /// Relations that modify an adjective inside an opinion phrase.
    pub fn is_phrase_modifier(&self) -> bool {
        matches!(
            self,
            DepRel::Advmod | DepRel::Npadvmod | DepRel::Cc | DepRel::Conj
        )
    }
}

impl From<&str> for DepRel {
    fn from(label: &str) -> Self {
        match label {
            "ROOT" | "root" => DepRel::Root,
            "acl" => DepRel::Acl,
            "acomp" => DepRel::Acomp,
            "advcl" => DepRel::Advcl,
            "advmod" => DepRel::Advmod,
            "agent" => DepRel::Agent,
            "amod" => DepRel::Amod,
            "appos" => DepRel::Appos,
            "attr" => DepRel::Attr,
            "aux" => DepRel::Aux,
            "auxpass" => DepRel::Auxpass,
            "case" => DepRel::Case,
            "cc" => DepRel::Cc,
            "ccomp" => DepRel::Ccomp,
            "compound" => DepRel::Compound,
            "conj" => DepRel::Conj,
            "csubj" => DepRel::Csubj,
            "csubjpass" => DepRel::Csubjpass,
            "dative" => DepRel::Dative,
            "dep" => DepRel::Dep,
            "det" => DepRel::Det,
            "dobj" => DepRel::Dobj,
            "expl" => DepRel::Expl,
            "intj" => DepRel::Intj,
            "mark" => DepRel::Mark,
            "meta" => DepRel::Meta,
            "neg" => DepRel::Neg,
            "nmod" => DepRel::Nmod,
            "npadvmod" => DepRel::Npadvmod,
            "nsubj" => DepRel::Nsubj,
            "nsubjpass" => DepRel::Nsubjpass,
            "nummod" => DepRel::Nummod,
            "oprd" => DepRel::Oprd,
            "parataxis" => DepRel::Parataxis,
            "pcomp" => DepRel::Pcomp,
            "pobj" => DepRel::Pobj,
            "poss" => DepRel::Poss,
            "preconj" => DepRel::Preconj,
            "predet" => DepRel::Predet,
            "prep" => DepRel::Prep,
            "prt" => DepRel::Prt,
            "punct" => DepRel::Punct,
            "quantmod" => DepRel::Quantmod,
            "relcl" => DepRel::Relcl,
            "xcomp" => DepRel::Xcomp,
            other => DepRel::Other(other.to_string()),
        }
    }
}

impl From<String> for DepRel {
    fn from(label: String) -> Self {
        DepRel::from(label.as_str())
    }
}

impl From<DepRel> for String {
    fn from(rel: DepRel) -> Self {
        rel.as_str().to_string()
    }
}

impl fmt::Display for DepRel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A half-open range of token indices, `start..end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TokenSpan {
    pub start: usize,
    pub end: usize,
}

impl TokenSpan {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    pub fn contains(&self, index: usize) -> bool {
        self.start <= index && index < self.end
    }

    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// A single annotated token.
///
/// Tokens are built once by a [`Document`](crate::Document) constructor and
/// never mutated afterwards. The sentence root points at itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Token {
    /// Position in the document (0-based)
    pub index: usize,
    pub text: String,
    pub lemma: String,
    pub pos: PosTag,
    pub dep: DepRel,
    /// Index of the syntactic head; equal to `index` for sentence roots
    pub head: usize,
    /// Children preceding this token, in textual order
    pub lefts: Vec<usize>,
    /// Children following this token, in textual order
    pub rights: Vec<usize>,
    pub is_sent_start: bool,
    /// Byte offset into the document's raw text, when it could be aligned
    pub offset: Option<usize>,
}

impl Token {
    /// All children in textual order (lefts, then rights).
    pub fn children(&self) -> impl Iterator<Item = usize> + '_ {
        self.lefts.iter().chain(self.rights.iter()).copied()
    }

    pub fn is_root(&self) -> bool {
        self.head == self.index
    }

    pub fn lower_text(&self) -> String {
        self.text.to_lowercase()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pos_tag_parses_case_insensitively() {
        assert_eq!("adj".parse::<PosTag>(), Ok(PosTag::Adj));
        assert_eq!("CONJ".parse::<PosTag>(), Ok(PosTag::Cconj));
        assert_eq!("bogus".parse::<PosTag>(), Err("BOGUS".to_string()));
    }

    #[test]
    fn dep_rel_keeps_unknown_labels() {
        assert_eq!(DepRel::from("nsubj"), DepRel::Nsubj);
        assert_eq!(DepRel::from("root"), DepRel::Root);
        assert_eq!(
            DepRel::from("obl:tmod"),
            DepRel::Other("obl:tmod".to_string())
        );
        assert_eq!(DepRel::from("obl:tmod").as_str(), "obl:tmod");
    }

    #[test]
    fn dep_rel_serde_uses_labels() {
        let json = serde_json::to_string(&DepRel::Npadvmod).unwrap();
        assert_eq!(json, "\"npadvmod\"");
        let rel: DepRel = serde_json::from_str("\"ROOT\"").unwrap();
        assert_eq!(rel, DepRel::Root);
    }

    #[test]
    fn phrase_modifiers() {
        assert!(DepRel::Advmod.is_phrase_modifier());
        assert!(DepRel::Conj.is_phrase_modifier());
        assert!(!DepRel::Neg.is_phrase_modifier());
        assert!(!DepRel::Amod.is_phrase_modifier());
    }

    #[test]
    fn token_span_contains() {
        let span = TokenSpan::new(2, 4);
        assert!(span.contains(2));
        assert!(span.contains(3));
        assert!(!span.contains(4));
        assert_eq!(span.len(), 2);
        assert!(TokenSpan::new(3, 3).is_empty());
    }
}
