//! Suggestion for a spelling correction.
use serde::{Deserialize, Serialize};
use smol_str::SmolStr;
use std::cmp::Ordering;

#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
/// Suggestion for a spelling correction
pub struct Suggestion {
    /// the suggested word-form
    pub value: SmolStr,
    /// edit distance between the input and the word-form
    pub distance: usize,
}

impl Suggestion {
    /// creates a spelling correction suggestion
    pub fn new(value: SmolStr, distance: usize) -> Suggestion {
        Suggestion { value, distance }
    }

    /// gets the suggested word-form
    pub fn value(&self) -> &str {
        &self.value
    }

    /// gets the edit distance of the suggestion
    pub fn distance(&self) -> usize {
        self.distance
    }
}

// Ordered by word-form so output is stable; distance is never used to rank.
impl PartialOrd for Suggestion {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Suggestion {
    fn cmp(&self, other: &Self) -> Ordering {
        self.value
            .cmp(&other.value)
            .then(self.distance.cmp(&other.distance))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sorts_by_value() {
        let mut suggestions = vec![
            Suggestion::new("zoo".into(), 0),
            Suggestion::new("ape".into(), 2),
            Suggestion::new("moo".into(), 1),
        ];
        suggestions.sort();

        let values = suggestions.iter().map(Suggestion::value).collect::<Vec<_>>();
        assert_eq!(values, vec!["ape", "moo", "zoo"]);
    }

    #[test]
    fn serializes_as_plain_object() {
        let json = serde_json::to_string(&Suggestion::new("cat".into(), 1)).unwrap();
        assert_eq!(json, r#"{"value":"cat","distance":1}"#);
    }
}
