//! Report formatting.

use crate::metrics::Scores;

/// Two-line precision/recall summary.
pub fn format_summary(scores: &Scores) -> String {
    format!(
        "Exact Precision {} | Exact Recall {}\nInexact Precision {} | Inexact Recall {}",
        scores.exact_precision, scores.exact_recall, scores.inexact_precision, scores.inexact_recall
    )
}

/// Summary followed by the raw counts behind each ratio.
pub fn format_report(scores: &Scores) -> String {
    let mut output = format_summary(scores);
    for (label, counts) in [("exact", &scores.exact), ("inexact", &scores.inexact)] {
        output.push_str(&format!(
            "\n  {}: tp={} fp={} fn={}",
            label, counts.true_positives, counts.false_positives, counts.false_negatives
        ));
    }
    output
}
