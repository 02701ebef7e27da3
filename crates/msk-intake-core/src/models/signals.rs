//! Signals pulled out of free-text interview notes.

use serde::{Deserialize, Serialize};

/// Optional structured facts found in the notes.
///
/// A field is `None` when its pattern did not match; it is never `Some("")`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ExtractedSignals {
    /// Pain intensity as written (e.g., "7/10")
    pub pain_score: Option<String>,
    /// Symptom duration as written (e.g., "3 weeks")
    pub duration: Option<String>,
    /// Activities or positions that make symptoms worse
    pub aggravating: Option<String>,
    /// Activities or positions that ease symptoms
    pub easing: Option<String>,
}

impl ExtractedSignals {
    /// Number of signals present.
    pub fn present_count(&self) -> usize {
        [
            &self.pain_score,
            &self.duration,
            &self.aggravating,
            &self.easing,
        ]
        .iter()
        .filter(|field| field.is_some())
        .count()
    }

    /// True when no signal was found.
    pub fn is_empty(&self) -> bool {
        self.present_count() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_present_count() {
        let mut signals = ExtractedSignals::default();
        assert!(signals.is_empty());

        signals.duration = Some("2 days".into());
        signals.easing = Some("rest".into());
        assert_eq!(signals.present_count(), 2);
        assert!(!signals.is_empty());
    }

    #[test]
    fn test_absent_fields_serialize_as_null() {
        let signals = ExtractedSignals {
            pain_score: Some("4/10".into()),
            ..Default::default()
        };
        let json = serde_json::to_value(&signals).unwrap();
        assert_eq!(json["pain_score"], "4/10");
        assert!(json["duration"].is_null());
    }
}
