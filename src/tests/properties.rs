use super::fixtures::{review, reviews};
use crate::{
    extract, Annotator, AspectId, Document, ExtractorConfig, FallbackMode, OpinionExtractor,
};

const TEXTS: &[&str] = &[
    "The pizza was incredible while the lasagna was undercooked.",
    "Pizza and gelato were both great.",
    "I had the pizza, lasagna and gelato. The first two were ok and the gelato was great.",
    "Never go here. Cold bruschetta and undercooked lasagna.",
    "We shared the gnocchi. It was mindnumbingly good.",
    "OMFG that horrible lasagna.",
    "They served cold & hard bruschetta.",
    "The pizza and lasagna arrived together. They were amazing.",
    "Gelato and bruschetta for dessert. Everything was fresh.",
    "The pizza came first. We waited an hour. It was cold.",
    "We ordered pizza and gelato. 2 were cold.",
    "We ordered pizza and gelato. Two were cold.",
    "The pizza, lasagna and gelato came. The first dozen were cold.",
    "Pizzas were soggy.",
    "The lasagna was not bad.",
    "The gelato was great. We left. (It was sweet.)",
];

fn documents() -> Vec<Document> {
    TEXTS.iter().map(|text| review(text)).collect()
}

#[test]
fn output_follows_input_order() {
    let docs = documents();
    let config = ExtractorConfig::default();
    let extractor = OpinionExtractor::new(&config).unwrap();
    let batch = extract(&docs, &config).unwrap();
    assert_eq!(batch.len(), docs.len());
    for (doc, map) in docs.iter().zip(&batch) {
        assert_eq!(&extractor.extract_document(doc), map, "{}", doc.text());
    }

    let mut reversed = docs.clone();
    reversed.reverse();
    let mut reversed_batch = extract(&reversed, &config).unwrap();
    reversed_batch.reverse();
    assert_eq!(reversed_batch, batch);
}

#[test]
fn extraction_is_idempotent() {
    let extractor = OpinionExtractor::new(&ExtractorConfig::default()).unwrap();
    for doc in documents() {
        let first = extractor.extract_document(&doc);
        let second = extractor.extract_document(&doc);
        assert_eq!(first, second, "{}", doc.text());
    }
}

#[test]
fn no_phrase_contains_another_of_the_same_aspect() {
    for mode in [FallbackMode::Text, FallbackMode::Tokens] {
        let config = ExtractorConfig::default().with_fallback(mode);
        for map in extract(&documents(), &config).unwrap() {
            for (_, phrases) in map.iter() {
                for (i, a) in phrases.iter().enumerate() {
                    for (j, b) in phrases.iter().enumerate() {
                        assert!(i == j || !a.contains(b.as_str()), "{:?} contains {:?}", a, b);
                    }
                }
            }
        }
    }
}

#[test]
fn aspects_come_from_the_lexicon() {
    for map in extract(&documents(), &ExtractorConfig::default()).unwrap() {
        assert!(map.aspects().all(|aspect| AspectId::ALL.contains(&aspect)));
    }
}

#[test]
fn state_does_not_leak_between_documents() {
    // a pronoun-only review after one that mentions pizza
    let pronoun_only = review("The pizza came first. We waited an hour. It was cold.");
    let docs = vec![review("The pizza was incredible while the lasagna was undercooked."), pronoun_only];
    let maps = extract(&docs, &ExtractorConfig::default()).unwrap();
    assert!(maps[1].is_empty());
}

#[test]
fn empty_document_yields_empty_map() {
    let doc = Document::from_records("", vec![], vec![]).unwrap();
    let maps = extract(&[doc], &ExtractorConfig::default()).unwrap();
    assert_eq!(maps.len(), 1);
    assert!(maps[0].is_empty());
    assert!(extract(&[], &ExtractorConfig::default()).unwrap().is_empty());
}

#[test]
fn every_stored_review_is_served() {
    for text in TEXTS {
        assert!(reviews().annotate(text).is_ok(), "{}", text);
    }
}
