//! The annotation boundary.
//!
//! Tagging, parsing and coreference happen outside this crate. Anything that
//! can turn text into a [`Document`] implements [`Annotator`]; closures do so
//! automatically. [`AnnotationStore`] serves documents that were annotated
//! ahead of time and stored as JSON or CoNLL-U.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use crate::conllu::parse_conllu;
use crate::document::Document;
use crate::error::{AnnotateError, AnnotateResult};

pub trait Annotator {
    fn annotate(&self, text: &str) -> AnnotateResult<Document>;
}

impl<F> Annotator for F
where
    F: Fn(&str) -> AnnotateResult<Document>,
{
    fn annotate(&self, text: &str) -> AnnotateResult<Document> {
        self(text)
    }
}

/// Pre-annotated documents keyed by their raw text.
#[derive(Debug, Default, Clone)]
pub struct AnnotationStore {
    documents: HashMap<String, Document>,
}

impl AnnotationStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, document: Document) {
        self.documents.insert(document.text().to_string(), document);
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    /// Build a store from a JSON array of documents.
    pub fn from_json_str(json: &str) -> AnnotateResult<Self> {
        let documents: Vec<Document> = serde_json::from_str(json)?;
        Ok(documents.into_iter().collect())
    }

    /// Build a store from CoNLL-U input, one document per `# newdoc`.
    pub fn from_conllu_str(input: &str) -> AnnotateResult<Self> {
        Ok(parse_conllu(input)?.into_iter().collect())
    }

    pub fn load_json(path: &Path) -> AnnotateResult<Self> {
        Self::from_json_str(&read(path)?)
    }

    pub fn load_conllu(path: &Path) -> AnnotateResult<Self> {
        Self::from_conllu_str(&read(path)?)
    }
}

fn read(path: &Path) -> AnnotateResult<String> {
    fs::read_to_string(path).map_err(|source| AnnotateError::Io {
        path: path.display().to_string(),
        source,
    })
}

impl FromIterator<Document> for AnnotationStore {
    fn from_iter<I: IntoIterator<Item = Document>>(iter: I) -> Self {
        let mut store = AnnotationStore::new();
        for document in iter {
            store.insert(document);
        }
        store
    }
}

impl Annotator for AnnotationStore {
    fn annotate(&self, text: &str) -> AnnotateResult<Document> {
        self.documents
            .get(text)
            .cloned()
            .ok_or_else(|| AnnotateError::NotAnnotated {
                preview: text.chars().take(40).collect(),
            })
    }
}

/// Annotate every text, stopping at the first failure.
pub fn annotate_all<A: Annotator + ?Sized>(
    annotator: &A,
    texts: &[&str],
) -> AnnotateResult<Vec<Document>> {
    texts.iter().map(|text| annotator.annotate(text)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::TokenRecord;
    use crate::token::{DepRel, PosTag};
    use std::io::Write;

    const CONLLU: &str = "\
# newdoc
# text = Pizza rocks.
1\tPizza\tpizza\tNOUN\tNN\t_\t2\tnsubj\t_\t_
2\trocks\trock\tVERB\tVBZ\t_\t0\tROOT\t_\tSpaceAfter=No
3\t.\t.\tPUNCT\t.\t_\t2\tpunct\t_\t_

# newdoc
# text = Gelato.
1\tGelato\tgelato\tNOUN\tNN\t_\t0\tROOT\t_\tSpaceAfter=No
2\t.\t.\tPUNCT\t.\t_\t1\tpunct\t_\t_
";

    #[test]
    fn store_serves_known_texts() {
        let store = AnnotationStore::from_conllu_str(CONLLU).unwrap();
        assert_eq!(store.len(), 2);
        let doc = store.annotate("Gelato.").unwrap();
        assert_eq!(doc.len(), 2);
        let err = store.annotate("Unseen text").unwrap_err();
        assert!(matches!(err, AnnotateError::NotAnnotated { .. }));
    }

    #[test]
    fn closures_are_annotators() {
        let annotator = |text: &str| {
            Document::from_records(
                text,
                vec![TokenRecord::new(text, PosTag::Noun, DepRel::Root, 0)],
                vec![],
            )
        };
        let docs = annotate_all(&annotator, &["pizza", "gelato"]).unwrap();
        assert_eq!(docs.len(), 2);
        assert_eq!(docs[1].token(0).text, "gelato");
    }

    #[test]
    fn loads_json_from_disk() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[{{"text": "Pizza", "tokens": [{{"text": "Pizza", "pos": "NOUN", "dep": "ROOT", "head": 0}}]}}]"#
        )
        .unwrap();
        let store = AnnotationStore::load_json(file.path()).unwrap();
        assert!(store.annotate("Pizza").is_ok());
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = AnnotationStore::load_conllu(Path::new("/nonexistent/reviews.conllu")).unwrap_err();
        assert!(matches!(err, AnnotateError::Io { .. }));
    }
}
