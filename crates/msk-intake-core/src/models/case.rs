//! Generated case output.

use serde::{Deserialize, Serialize};

use super::signals::ExtractedSignals;

/// Four-part SOAP note draft.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SoapNote {
    pub subjective: String,
    pub objective: String,
    pub assessment: String,
    pub plan: String,
}

/// Everything produced for one set of interview notes.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CaseOutput {
    /// One-paragraph case summary
    pub summary: String,
    /// Region of the selected profile
    pub region: String,
    /// Recommended outcome measures (copied from the profile)
    pub assessments: Vec<String>,
    /// Recommended exam items (copied from the profile)
    pub exams: Vec<String>,
    /// Red flags to screen for (copied from the profile)
    pub red_flags: Vec<String>,
    /// SOAP note draft
    pub soap: SoapNote,
}

/// Result of one generate action: the trimmed notes and everything derived from them.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GeneratedCase {
    /// Notes after trimming
    pub notes: String,
    /// Signals found in the notes
    pub signals: ExtractedSignals,
    /// Composed case output
    pub output: CaseOutput,
}
