//! Signal extraction from interview notes.
//!
//! Four independent pattern searches, each keeping only its first match:
//! pain score, duration, aggravating factors, easing factors.

mod patterns;

use regex::Regex;
use tracing::debug;

use crate::models::ExtractedSignals;

/// Conjunctions left dangling when a factor clause is cut short.
const TRAILING_CONJUNCTIONS: &[&str] = &["and", "but", "or"];

/// Pattern-based signal extractor.
pub struct SignalExtractor;

impl SignalExtractor {
    /// Extract all signals from the notes.
    pub fn extract(text: &str) -> ExtractedSignals {
        let signals = ExtractedSignals {
            pain_score: extract_pain_score(text),
            duration: extract_duration(text),
            aggravating: extract_factor(patterns::aggravating(), text),
            easing: extract_factor(patterns::easing(), text),
        };
        debug!(present = signals.present_count(), "extracted signals");
        signals
    }
}

/// Shorthand for [`SignalExtractor::extract`].
pub fn extract_signals(text: &str) -> ExtractedSignals {
    SignalExtractor::extract(text)
}

fn extract_pain_score(text: &str) -> Option<String> {
    patterns::pain_score()
        .find(text)
        .map(|m| m.as_str().to_string())
}

fn extract_duration(text: &str) -> Option<String> {
    patterns::duration()
        .find(text)
        .map(|m| m.as_str().to_string())
}

/// Capture the clause after a trigger phrase.
///
/// The clause stops at the first period, semicolon or newline, or where
/// another factor trigger opens a new clause after a comma or conjunction
/// ("worse with sitting, better with walking"). A trigger nested inside the
/// clause ("activity that increases with load") does not end it.
fn extract_factor(pattern: &Regex, text: &str) -> Option<String> {
    let captured = pattern.captures(text)?.get(1)?.as_str();

    let clause = patterns::factor_trigger()
        .find_iter(captured)
        .map(|next| &captured[..next.start()])
        .find(|head| opens_new_clause(head))
        .unwrap_or(captured);

    let cleaned = clean_clause(clause);
    if cleaned.is_empty() {
        None
    } else {
        Some(cleaned.to_string())
    }
}

/// True when the text before a trigger ends in a comma or a whole-word conjunction.
fn opens_new_clause(head: &str) -> bool {
    let head = head.trim_end();
    head.ends_with(',') || trailing_conjunction(head).is_some()
}

/// Text before a trailing whole-word conjunction, if there is one.
fn trailing_conjunction(text: &str) -> Option<&str> {
    TRAILING_CONJUNCTIONS.iter().find_map(|word| {
        let head = strip_suffix_ignore_case(text, word)?;
        // Only a whole word counts: "sitting and" but not "stand".
        if head.is_empty() || head.ends_with(|c: char| c == ',' || c.is_whitespace()) {
            Some(head)
        } else {
            None
        }
    })
}

/// Trim whitespace, trailing commas and a dangling conjunction.
fn clean_clause(clause: &str) -> &str {
    let mut clause = clause.trim();
    loop {
        let trimmed = clause.trim_end_matches(|c: char| c == ',' || c.is_whitespace());
        match trailing_conjunction(trimmed) {
            Some(head) => clause = head,
            None => return trimmed,
        }
    }
}

fn strip_suffix_ignore_case<'a>(text: &'a str, suffix: &str) -> Option<&'a str> {
    let split = text.len().checked_sub(suffix.len())?;
    if !text.is_char_boundary(split) {
        return None;
    }
    let (head, tail) = text.split_at(split);
    tail.eq_ignore_ascii_case(suffix).then_some(head)
}
