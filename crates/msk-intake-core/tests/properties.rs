//! Property tests for composition and extraction.

use msk_intake_core::catalog;
use msk_intake_core::narrative::{build_summary, compose, first_line, SUMMARY_LINE_LIMIT};
use msk_intake_core::{generate_case, ExtractedSignals, SignalExtractor};
use proptest::prelude::*;

proptest! {
    #[test]
    fn prop_first_line_never_exceeds_limit(text in ".{0,400}") {
        let line = first_line(&text, SUMMARY_LINE_LIMIT);
        prop_assert!(line.chars().count() <= SUMMARY_LINE_LIMIT);
        prop_assert!(!line.contains('\n'));
        prop_assert!(text.starts_with(line));
    }

    #[test]
    fn prop_summary_never_panics(text in "\\PC{0,300}") {
        let summary = build_summary(&text, &ExtractedSignals::default());
        prop_assert!(summary.starts_with("Primary concern captured from interview: "));
        prop_assert!(summary.ends_with("safety screening."));
    }

    #[test]
    fn prop_compose_is_idempotent(text in "[a-zA-Z0-9 /.,;\n]{0,200}") {
        let signals = SignalExtractor::extract(&text);
        let profile = catalog::builtin().match_profile(&text);

        let first = compose(&text, &signals, profile);
        let second = compose(&text, &signals, profile);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn prop_extracted_signals_are_never_blank(text in "\\PC{0,300}") {
        let signals = SignalExtractor::extract(&text);
        for value in [&signals.pain_score, &signals.duration, &signals.aggravating, &signals.easing]
            .into_iter()
            .flatten()
        {
            prop_assert!(!value.trim().is_empty());
        }
    }

    #[test]
    fn prop_blank_notes_rejected(text in "[ \t\n\r]{0,20}") {
        prop_assert!(generate_case(&text).is_err());
    }
}
