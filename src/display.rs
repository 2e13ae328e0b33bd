use std::fmt::Write;

use unicode_width::UnicodeWidthStr;

use crate::document::Document;
use crate::token::{PosTag, TokenSpan};

/// A labelled token range, `first..=last`.
struct IncludedLabel {
    first: usize,
    last: usize,
    label: String,
}

/// Renders a document on one line with labelled underlines beneath it.
///
/// ```text
/// It  was  delicious  .
/// ╰╯PRON nsubj->was
///     ╰─╯AUX ROOT
///          ╰───────╯ADJ acomp->was
/// ```
pub struct DocumentDisplay<'a> {
    document: &'a Document,
    include_labels: Vec<IncludedLabel>,
}

impl<'a> std::fmt::Display for DocumentDisplay<'a> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        const SPACE_PADDING: usize = 2;
        let mut token_idx_to_start_display_char_idx = Vec::new();
        let mut token_idx_to_end_display_char_idx = Vec::new();

        let mut opening_line = String::new();
        for (idx, token) in self.document.tokens().iter().enumerate() {
            if idx > 0 {
                opening_line.extend(std::iter::repeat(' ').take(SPACE_PADDING));
            }
            token_idx_to_start_display_char_idx.push(UnicodeWidthStr::width(&*opening_line));
            opening_line.push_str(&token.text);
            token_idx_to_end_display_char_idx.push(UnicodeWidthStr::width(&*opening_line));
        }

        f.write_str(&opening_line)?;

        for included in self.include_labels.iter() {
            f.write_char('\n')?;

            let start_char_idx = token_idx_to_start_display_char_idx[included.first];
            for _ in 0..start_char_idx {
                f.write_char(' ')?;
            }

            f.write_char('╰')?;

            let end_char_idx = token_idx_to_end_display_char_idx[included.last];
            let char_len = end_char_idx - start_char_idx;
            for _ in (start_char_idx + 1)..end_char_idx.saturating_sub(1) {
                f.write_char('─')?;
            }

            if char_len > 1 {
                f.write_char('╯')?;
            }

            f.write_str(&included.label)?;
        }

        Ok(())
    }
}

impl<'a> DocumentDisplay<'a> {
    pub fn new(document: &'a Document) -> Self {
        DocumentDisplay {
            document,
            include_labels: Vec::new(),
        }
    }

    /// Label every non-punctuation token with its tag, relation and head.
    pub fn include_syntax(&mut self) {
        for token in self.document.tokens() {
            if token.pos == PosTag::Punct {
                continue;
            }
            let label = if token.is_root() {
                format!("{} ROOT", token.pos)
            } else {
                format!(
                    "{} {}->{}",
                    token.pos,
                    token.dep,
                    self.document.head_of(token).text
                )
            };
            self.include_labels.push(IncludedLabel {
                first: token.index,
                last: token.index,
                label,
            });
        }
    }

    /// Label every coreference mention with its cluster number; the main
    /// mention is marked with `*`.
    pub fn include_clusters(&mut self) {
        for (cluster_idx, cluster) in self.document.clusters().iter().enumerate() {
            self.include_span(cluster.main, format!("coref#{}*", cluster_idx));
            for mention in cluster.mentions.iter().filter(|m| **m != cluster.main) {
                self.include_span(*mention, format!("coref#{}", cluster_idx));
            }
        }
    }

    pub fn include_span(&mut self, span: TokenSpan, label: impl Into<String>) {
        let len = self.document.len();
        if span.is_empty() || span.end > len {
            return;
        }
        self.include_labels.push(IncludedLabel {
            first: span.start,
            last: span.end - 1,
            label: label.into(),
        });
    }

    pub fn mark(&mut self, token: usize, label: impl Into<String>) {
        self.include_span(TokenSpan::new(token, token + 1), label);
    }

    /// Takes self
    pub fn with_syntax(mut self) -> Self {
        self.include_syntax();
        self
    }

    /// Takes self
    pub fn with_clusters(mut self) -> Self {
        self.include_clusters();
        self
    }

    /// Takes self
    pub fn with_mark(mut self, token: usize, label: impl Into<String>) -> Self {
        self.mark(token, label);
        self
    }
}
