//! Where aspects were named directly, by sentence rank.

use crate::lexicon::AspectId;

/// Mentions older than this many sentences are not antecedent candidates.
pub const DEFAULT_MENTION_WINDOW: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Mention {
    /// 1-based sentence rank within the document
    pub rank: usize,
    pub aspect: AspectId,
}

/// Append-only mention log for one document.
#[derive(Debug, Clone)]
pub struct MentionTracker {
    mentions: Vec<Mention>,
    window: usize,
}

impl Default for MentionTracker {
    fn default() -> Self {
        Self::new(DEFAULT_MENTION_WINDOW)
    }
}

impl MentionTracker {
    pub fn new(window: usize) -> Self {
        Self {
            mentions: Vec::new(),
            window,
        }
    }

    pub fn record(&mut self, rank: usize, aspect: AspectId) {
        debug_assert!(
            self.last().map_or(true, |last| last.rank <= rank),
            "mention ranks must not decrease"
        );
        self.mentions.push(Mention { rank, aspect });
    }

    pub fn last(&self) -> Option<&Mention> {
        self.mentions.last()
    }

    pub fn mentions(&self) -> &[Mention] {
        &self.mentions
    }

    pub fn is_empty(&self) -> bool {
        self.mentions.is_empty()
    }

    /// Whether the most recent mention is close enough to `current_rank`.
    pub fn is_neighboring(&self, current_rank: usize) -> bool {
        self.last()
            .map_or(false, |last| current_rank.saturating_sub(last.rank) < self.window)
    }

    /// The most recent mention and the run of mentions sharing its rank,
    /// in textual order.
    pub fn last_group(&self) -> &[Mention] {
        let rank = match self.last() {
            Some(last) => last.rank,
            None => return &[],
        };
        let start = self
            .mentions
            .iter()
            .rposition(|mention| mention.rank != rank)
            .map_or(0, |idx| idx + 1);
        &self.mentions[start..]
    }

    /// [`last_group`](Self::last_group), if it is neighboring `current_rank`.
    pub fn neighboring_group(&self, current_rank: usize) -> Option<&[Mention]> {
        if self.is_neighboring(current_rank) {
            Some(self.last_group())
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use AspectId::*;

    fn aspects(group: &[Mention]) -> Vec<AspectId> {
        group.iter().map(|m| m.aspect).collect()
    }

    #[test]
    fn group_is_the_trailing_same_rank_run() {
        let mut tracker = MentionTracker::default();
        tracker.record(1, Gnocchi);
        tracker.record(2, Pizza);
        tracker.record(2, Lasagna);
        tracker.record(2, Gelato);
        assert_eq!(aspects(tracker.last_group()), vec![Pizza, Lasagna, Gelato]);
    }

    #[test]
    fn window_covers_same_and_previous_sentence() {
        let mut tracker = MentionTracker::default();
        assert!(!tracker.is_neighboring(1));
        tracker.record(2, Pizza);
        assert!(tracker.is_neighboring(2));
        assert!(tracker.is_neighboring(3));
        assert!(!tracker.is_neighboring(4));
        assert_eq!(tracker.neighboring_group(4), None);
        assert_eq!(aspects(tracker.neighboring_group(3).unwrap()), vec![Pizza]);
    }

    #[test]
    fn wider_window() {
        let mut tracker = MentionTracker::new(3);
        tracker.record(1, Gelato);
        assert!(tracker.is_neighboring(3));
        assert!(!tracker.is_neighboring(4));
    }

    #[test]
    fn empty_tracker_has_no_group() {
        let tracker = MentionTracker::default();
        assert!(tracker.last_group().is_empty());
        assert!(tracker.is_empty());
    }
}
