use serde_derive::{Deserialize, Serialize};

/// Qualitative certainty of a matched rule, not a probability.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[serde(rename_all = "lowercase")]
pub enum Confidence {
    Low,
    Medium,
    High,
}

/// Result of one classifier call: a label from that classifier's closed
/// vocabulary, a confidence, and classifier-specific detail (path
/// characteristics, an endpoint, ...).
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct Classification<L, X = ()> {
    pub label: L,
    pub confidence: Confidence,
    pub detail: X,
}

impl<L, X> Classification<L, X> {
    #[inline]
    pub fn new(label: L, confidence: Confidence, detail: X) -> Self {
        Self {
            label,
            confidence,
            detail,
        }
    }
}

/// One row of an ordered decision table.
///
/// Row order *is* the classifier: earlier rows encode more specific
/// patterns, and the first row whose predicate holds wins. Reordering rows
/// changes observable labels, so tables are declared as literal slices.
pub struct Rule<C, L> {
    pub applies: fn(&C) -> bool,
    pub label: fn(&C) -> L,
    pub confidence: Confidence,
}

pub fn first_match<C, L>(rules: &[Rule<C, L>], cx: &C) -> Option<(L, Confidence)> {
    rules
        .iter()
        .find(|rule| (rule.applies)(cx))
        .map(|rule| ((rule.label)(cx), rule.confidence))
}
