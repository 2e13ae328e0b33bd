//! CoNLL-U reader.
//!
//! Reads the ten-column dependency treebank format into [`Document`]s. A
//! `# newdoc` comment starts a new document; without one the whole input is a
//! single document. Sentence text comes from `# text = ...` when present, and
//! is otherwise rebuilt from the forms (honouring `SpaceAfter=No`).
//!
//! ```text
//! # newdoc
//! # text = It was delicious.
//! 1   It          it          PRON   PRP  _  2  nsubj  _  _
//! 2   was         be          AUX    VBD  _  0  ROOT   _  _
//! 3   delicious   delicious   ADJ    JJ   _  2  acomp  _  SpaceAfter=No
//! 4   .           .           PUNCT  .    _  2  punct  _  _
//! ```

use crate::document::{Document, TokenRecord};
use crate::error::{AnnotateError, AnnotateResult};
use crate::token::{DepRel, PosTag};

const MIN_COLUMNS: usize = 8;

#[derive(Default)]
struct SentenceBuf {
    text: Option<String>,
    /// (line, record with a sentence-relative head, space after)
    rows: Vec<(usize, TokenRecord, bool)>,
}

#[derive(Default)]
struct DocumentBuf {
    sentences: Vec<String>,
    records: Vec<TokenRecord>,
}

impl DocumentBuf {
    fn push_sentence(&mut self, sentence: SentenceBuf) -> AnnotateResult<()> {
        if sentence.rows.is_empty() {
            return Ok(());
        }
        let base = self.records.len();
        let len = sentence.rows.len();
        let text = match sentence.text {
            Some(text) => text,
            None => rebuild_text(&sentence.rows),
        };
        for (position, (line, mut record, _)) in sentence.rows.into_iter().enumerate() {
            // heads are 1-based within the sentence, 0 marks the root
            record.head = match record.head {
                0 => base + position,
                head if head <= len => base + head - 1,
                head => {
                    return Err(AnnotateError::Conll {
                        line,
                        message: format!("head {} outside a sentence of {} tokens", head, len),
                    })
                }
            };
            record.sent_start = position == 0;
            self.records.push(record);
        }
        self.sentences.push(text);
        Ok(())
    }

    fn finish(self) -> AnnotateResult<Option<Document>> {
        if self.records.is_empty() {
            return Ok(None);
        }
        let text = self.sentences.join(" ");
        Document::from_records(&text, self.records, Vec::new()).map(Some)
    }
}

fn rebuild_text(rows: &[(usize, TokenRecord, bool)]) -> String {
    let mut text = String::new();
    for (_, record, space_after) in rows {
        text.push_str(&record.text);
        if *space_after {
            text.push(' ');
        }
    }
    text.trim_end().to_string()
}

/// Parse CoNLL-U input into documents.
///
/// Multiword token ranges (`1-2`) and empty nodes (`1.1`) are skipped; only
/// syntactic words take part in the tree.
pub fn parse_conllu(input: &str) -> AnnotateResult<Vec<Document>> {
    let mut documents = Vec::new();
    let mut document = DocumentBuf::default();
    let mut sentence = SentenceBuf::default();

    for (line_idx, raw) in input.lines().enumerate() {
        let line_num = line_idx + 1;
        let line = raw.trim_end();

        if line.trim().is_empty() {
            document.push_sentence(std::mem::take(&mut sentence))?;
            continue;
        }

        if let Some(comment) = line.strip_prefix('#') {
            let comment = comment.trim();
            if comment.starts_with("newdoc") {
                document.push_sentence(std::mem::take(&mut sentence))?;
                if let Some(done) = std::mem::take(&mut document).finish()? {
                    documents.push(done);
                }
            } else if let Some(text) = comment.strip_prefix("text") {
                if let Some(text) = text.trim_start().strip_prefix('=') {
                    sentence.text = Some(text.trim().to_string());
                }
            }
            continue;
        }

        let columns: Vec<&str> = if line.contains('\t') {
            line.split('\t').collect()
        } else {
            line.split_whitespace().collect()
        };
        if columns.len() < MIN_COLUMNS {
            return Err(AnnotateError::Conll {
                line: line_num,
                message: format!(
                    "expected at least {} columns, found {}",
                    MIN_COLUMNS,
                    columns.len()
                ),
            });
        }

        let id = columns[0];
        if id.contains('-') || id.contains('.') {
            continue;
        }
        let expected = sentence.rows.len() + 1;
        match id.parse::<usize>() {
            Ok(found) if found == expected => {}
            _ => {
                return Err(AnnotateError::Conll {
                    line: line_num,
                    message: format!("expected token id {}, found `{}`", expected, id),
                })
            }
        }

        let pos = columns[3]
            .parse::<PosTag>()
            .map_err(|tag| AnnotateError::UnknownPosTag {
                line: line_num,
                tag,
            })?;
        let head = columns[6]
            .parse::<usize>()
            .map_err(|_| AnnotateError::Conll {
                line: line_num,
                message: format!("invalid head `{}`", columns[6]),
            })?;
        let lemma = match columns[2] {
            "_" => columns[1].to_lowercase(),
            lemma => lemma.to_string(),
        };
        let space_after = !columns
            .get(9)
            .map_or(false, |misc| misc.split('|').any(|field| field == "SpaceAfter=No"));

        let record = TokenRecord {
            text: columns[1].to_string(),
            lemma,
            pos,
            dep: DepRel::from(columns[7]),
            head,
            sent_start: false,
            idx: None,
        };
        sentence.rows.push((line_num, record, space_after));
    }

    document.push_sentence(sentence)?;
    if let Some(done) = document.finish()? {
        documents.push(done);
    }
    Ok(documents)
}

#[cfg(test)]
mod tests {
    use super::*;

    const TWO_SENTENCES: &str = "\
# newdoc
# text = The pizza was cold.
1\tThe\tthe\tDET\tDT\t_\t2\tdet\t_\t_
2\tpizza\tpizza\tNOUN\tNN\t_\t3\tnsubj\t_\t_
3\twas\tbe\tAUX\tVBD\t_\t0\tROOT\t_\t_
4\tcold\tcold\tADJ\tJJ\t_\t3\tacomp\t_\tSpaceAfter=No
5\t.\t.\tPUNCT\t.\t_\t3\tpunct\t_\t_

1\tIt\tit\tPRON\tPRP\t_\t2\tnsubj\t_\t_
2\twas\tbe\tAUX\tVBD\t_\t0\tROOT\t_\t_
3\tbad\tbad\tADJ\tJJ\t_\t2\tacomp\t_\tSpaceAfter=No
4\t.\t.\tPUNCT\t.\t_\t2\tpunct\t_\t_
";

    #[test]
    fn heads_become_document_indices() {
        let docs = parse_conllu(TWO_SENTENCES).unwrap();
        assert_eq!(docs.len(), 1);
        let doc = &docs[0];
        assert_eq!(doc.len(), 9);
        assert_eq!(doc.token(1).head, 2);
        assert!(doc.token(2).is_root());
        assert_eq!(doc.token(5).head, 6);
        assert!(doc.token(6).is_root());
        assert!(doc.token(5).is_sent_start);
        assert!(!doc.token(6).is_sent_start);
    }

    #[test]
    fn text_is_taken_from_comment_or_rebuilt() {
        let docs = parse_conllu(TWO_SENTENCES).unwrap();
        assert_eq!(docs[0].text(), "The pizza was cold. It was bad.");
        assert_eq!(docs[0].token(5).offset, Some(20));
    }

    #[test]
    fn newdoc_splits_documents() {
        let input = "\
# newdoc
1 Pizza pizza NOUN NN _ 0 ROOT _ _

# newdoc
1 Gelato gelato NOUN NN _ 0 ROOT _ _
";
        let docs = parse_conllu(input).unwrap();
        assert_eq!(docs.len(), 2);
        assert_eq!(docs[1].text(), "Gelato");
    }

    #[test]
    fn multiword_ranges_are_skipped() {
        let input = "\
1-2\tdon't\t_\t_\t_\t_\t_\t_\t_\t_
1\tdo\tdo\tAUX\tVBP\t_\t3\taux\t_\t_
2\tn't\tnot\tPART\tRB\t_\t3\tneg\t_\t_
3\tgo\tgo\tVERB\tVB\t_\t0\tROOT\t_\t_
";
        let docs = parse_conllu(input).unwrap();
        assert_eq!(docs[0].len(), 3);
        assert_eq!(docs[0].token(1).dep, DepRel::Neg);
    }

    #[test]
    fn short_rows_are_rejected() {
        let err = parse_conllu("1\tpizza\tpizza\tNOUN\n").unwrap_err();
        assert!(matches!(err, AnnotateError::Conll { line: 1, .. }));
    }

    #[test]
    fn unknown_pos_reports_line() {
        let input = "# text = x\n1\tx\tx\tBOGUS\t_\t_\t0\tROOT\t_\t_\n";
        let err = parse_conllu(input).unwrap_err();
        assert!(matches!(err, AnnotateError::UnknownPosTag { line: 2, .. }));
    }

    #[test]
    fn head_outside_sentence_is_rejected() {
        let input = "1\tpizza\tpizza\tNOUN\tNN\t_\t4\tROOT\t_\t_\n";
        let err = parse_conllu(input).unwrap_err();
        assert!(matches!(err, AnnotateError::Conll { line: 1, .. }));
    }

    #[test]
    fn empty_input_has_no_documents() {
        assert!(parse_conllu("").unwrap().is_empty());
        assert!(parse_conllu("# newdoc\n\n").unwrap().is_empty());
    }
}
