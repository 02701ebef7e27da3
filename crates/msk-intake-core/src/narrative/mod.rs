//! Case summary and SOAP note composition.
//!
//! Composition is a pure function of the notes, the extracted signals and
//! the selected profile: the same inputs always produce the same text.

mod templates;

pub use templates::{ASSESSMENT, SUMMARY_LINE_LIMIT};

use crate::models::{CaseOutput, ExtractedSignals, RegionProfile, SoapNote};

/// Build the full case output.
pub fn compose(text: &str, signals: &ExtractedSignals, profile: &RegionProfile) -> CaseOutput {
    CaseOutput {
        summary: build_summary(text, signals),
        region: profile.region.clone(),
        assessments: profile.assessments.clone(),
        exams: profile.exams.clone(),
        red_flags: profile.red_flags.clone(),
        soap: build_soap(signals, profile),
    }
}

/// One-paragraph summary: lead-in, first note line, present signals, closing.
pub fn build_summary(text: &str, signals: &ExtractedSignals) -> String {
    let one_liner = first_line(text, SUMMARY_LINE_LIMIT);
    let concern = if one_liner.is_empty() {
        templates::SUMMARY_FALLBACK
    } else {
        one_liner
    };

    let mut parts = vec![format!("{} {}", templates::SUMMARY_LEAD, concern)];
    parts.extend(signal_sentences(
        signals,
        templates::summary_duration,
        templates::summary_pain,
        templates::summary_aggravating,
        templates::summary_easing,
    ));
    parts.push(templates::SUMMARY_CLOSING.to_string());

    parts.join(" ")
}

/// SOAP draft from the signals and the selected profile.
pub fn build_soap(signals: &ExtractedSignals, profile: &RegionProfile) -> SoapNote {
    let mut subjective = vec![templates::SUBJECTIVE_LEAD.to_string()];
    subjective.extend(signal_sentences(
        signals,
        templates::subjective_duration,
        templates::subjective_pain,
        templates::subjective_aggravating,
        templates::subjective_easing,
    ));

    SoapNote {
        subjective: subjective.join(" "),
        objective: templates::objective(profile.leading_exams(templates::SOAP_LEADING_ITEMS)),
        assessment: ASSESSMENT.to_string(),
        plan: templates::plan(profile.leading_assessments(templates::SOAP_LEADING_ITEMS)),
    }
}

/// Text before the first newline, cut to at most `limit` characters.
///
/// A carriage return ending the line (CRLF notes) is dropped.
pub fn first_line(text: &str, limit: usize) -> &str {
    let line = text
        .split('\n')
        .next()
        .unwrap_or_default()
        .trim_end_matches('\r');
    match line.char_indices().nth(limit) {
        Some((cut, _)) => &line[..cut],
        None => line,
    }
}

/// Sentences for present signals in fixed order: duration, pain, aggravating, easing.
fn signal_sentences(
    signals: &ExtractedSignals,
    duration: fn(&str) -> String,
    pain: fn(&str) -> String,
    aggravating: fn(&str) -> String,
    easing: fn(&str) -> String,
) -> Vec<String> {
    [
        (&signals.duration, duration),
        (&signals.pain_score, pain),
        (&signals.aggravating, aggravating),
        (&signals.easing, easing),
    ]
    .into_iter()
    .filter_map(|(value, sentence)| value.as_deref().map(sentence))
    .collect()
}
