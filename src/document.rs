//! Annotated documents: tokens, raw text and coreference clusters.
//!
//! A [`Document`] is the read-only input of the extractor. It is built from
//! flat [`TokenRecord`]s (one per token, head given as an absolute index);
//! construction validates heads and derives the left/right child lists.

use serde::{Deserialize, Serialize};

use crate::error::{AnnotateError, AnnotateResult};
use crate::lexicon::{AspectId, Lexicon};
use crate::token::{DepRel, PosTag, Token, TokenSpan};

/// Flat annotator output for a single token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenRecord {
    pub text: String,
    #[serde(default)]
    pub lemma: String,
    pub pos: PosTag,
    pub dep: DepRel,
    /// Absolute index of the head token; a root points at itself
    pub head: usize,
    #[serde(default)]
    pub sent_start: bool,
    /// Offset into the raw text, if the annotator reports one. Byte and
    /// character offsets are both accepted; an offset that points at neither
    /// is ignored and the token is aligned by scanning.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub idx: Option<usize>,
}

impl TokenRecord {
    pub fn new(text: &str, pos: PosTag, dep: DepRel, head: usize) -> Self {
        Self {
            text: text.to_string(),
            lemma: text.to_lowercase(),
            pos,
            dep,
            head,
            sent_start: false,
            idx: None,
        }
    }

    pub fn with_lemma(mut self, lemma: &str) -> Self {
        self.lemma = lemma.to_string();
        self
    }

    pub fn sentence_start(mut self) -> Self {
        self.sent_start = true;
        self
    }
}

/// A coreference cluster: a representative mention and all member mentions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CorefCluster {
    pub main: TokenSpan,
    pub mentions: Vec<TokenSpan>,
}

impl CorefCluster {
    /// Whether the token is covered by the main mention or any member mention.
    pub fn covers(&self, index: usize) -> bool {
        self.main.contains(index) || self.mentions.iter().any(|span| span.contains(index))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct DocumentRecord {
    text: String,
    tokens: Vec<TokenRecord>,
    #[serde(default)]
    clusters: Vec<CorefCluster>,
}

/// An annotated document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "DocumentRecord", into = "DocumentRecord")]
pub struct Document {
    text: String,
    tokens: Vec<Token>,
    clusters: Vec<CorefCluster>,
}

impl Document {
    /// Build a document from flat token records.
    ///
    /// The first token always starts a sentence. Tokens without an `idx` are
    /// aligned against `text` by scanning forward for their surface form.
    pub fn from_records(
        text: &str,
        records: Vec<TokenRecord>,
        clusters: Vec<CorefCluster>,
    ) -> AnnotateResult<Self> {
        let len = records.len();
        for (index, record) in records.iter().enumerate() {
            if record.head >= len {
                return Err(AnnotateError::HeadOutOfRange {
                    token: index,
                    head: record.head,
                    len,
                });
            }
        }
        for cluster in &clusters {
            for span in std::iter::once(&cluster.main).chain(cluster.mentions.iter()) {
                if span.is_empty() || span.end > len {
                    return Err(AnnotateError::SpanOutOfRange {
                        start: span.start,
                        end: span.end,
                        len,
                    });
                }
            }
        }

        let mut lefts = vec![Vec::new(); len];
        let mut rights = vec![Vec::new(); len];
        for (index, record) in records.iter().enumerate() {
            if record.head < index {
                rights[record.head].push(index);
            } else if record.head > index {
                lefts[record.head].push(index);
            }
        }

        let mut cursor = 0;
        let tokens = records
            .into_iter()
            .zip(lefts.into_iter().zip(rights))
            .enumerate()
            .map(|(index, (record, (lefts, rights)))| {
                let offset = record
                    .idx
                    .and_then(|idx| resolve_idx(text, idx, &record.text))
                    .or_else(|| {
                        let found = text.get(cursor..)?.find(&record.text)? + cursor;
                        Some(found)
                    });
                if let Some(offset) = offset {
                    cursor = offset + record.text.len();
                }
                Token {
                    index,
                    text: record.text,
                    lemma: record.lemma,
                    pos: record.pos,
                    dep: record.dep,
                    head: record.head,
                    lefts,
                    rights,
                    is_sent_start: record.sent_start || index == 0,
                    offset,
                }
            })
            .collect();

        Ok(Self {
            text: text.to_string(),
            tokens,
            clusters,
        })
    }

    /// Parse a document from its JSON wire form.
    pub fn from_json(json: &str) -> AnnotateResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    pub fn clusters(&self) -> &[CorefCluster] {
        &self.clusters
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// The token at `index`.
    ///
    /// Every index stored inside a token (head, children) is valid for the
    /// document that produced it.
    pub fn token(&self, index: usize) -> &Token {
        &self.tokens[index]
    }

    pub fn get(&self, index: usize) -> Option<&Token> {
        self.tokens.get(index)
    }

    pub fn head_of(&self, token: &Token) -> &Token {
        self.token(token.head)
    }

    pub fn children_of<'a>(&'a self, token: &'a Token) -> impl Iterator<Item = &'a Token> + 'a {
        token.children().map(move |index| self.token(index))
    }

    pub fn lefts_of<'a>(&'a self, token: &'a Token) -> impl Iterator<Item = &'a Token> + 'a {
        token.lefts.iter().map(move |&index| self.token(index))
    }

    pub fn rights_of<'a>(&'a self, token: &'a Token) -> impl Iterator<Item = &'a Token> + 'a {
        token.rights.iter().map(move |&index| self.token(index))
    }

    /// The token whose surface form starts at byte `offset`.
    pub fn token_at_offset(&self, offset: usize) -> Option<&Token> {
        self.tokens.iter().find(|token| token.offset == Some(offset))
    }

    /// Tokens of a span, clamped to the document.
    pub fn span_tokens(&self, span: TokenSpan) -> &[Token] {
        let end = span.end.min(self.tokens.len());
        let start = span.start.min(end);
        &self.tokens[start..end]
    }

    /// The aspect named by the main mention of the first cluster covering `index`.
    pub fn cluster_aspect(&self, index: usize, lexicon: &Lexicon) -> Option<AspectId> {
        self.clusters
            .iter()
            .filter(|cluster| cluster.covers(index))
            .find_map(|cluster| {
                self.span_tokens(cluster.main)
                    .iter()
                    .find_map(|token| lexicon.canonicalize(&token.text))
            })
    }
}

/// Byte offset of a token reported at `idx`, read first as a byte offset and
/// then as a character offset. `None` when neither points at `surface`.
fn resolve_idx(text: &str, idx: usize, surface: &str) -> Option<usize> {
    if text.get(idx..).map_or(false, |rest| rest.starts_with(surface)) {
        return Some(idx);
    }
    let (byte, _) = text.char_indices().nth(idx)?;
    text[byte..].starts_with(surface).then_some(byte)
}

impl TryFrom<DocumentRecord> for Document {
    type Error = AnnotateError;

    fn try_from(record: DocumentRecord) -> Result<Self, Self::Error> {
        Document::from_records(&record.text, record.tokens, record.clusters)
    }
}

impl From<Document> for DocumentRecord {
    fn from(document: Document) -> Self {
        let tokens = document
            .tokens
            .into_iter()
            .map(|token| TokenRecord {
                text: token.text,
                lemma: token.lemma,
                pos: token.pos,
                dep: token.dep,
                head: token.head,
                sent_start: token.is_sent_start,
                idx: token.offset,
            })
            .collect();
        DocumentRecord {
            text: document.text,
            tokens,
            clusters: document.clusters,
        }
    }
}
