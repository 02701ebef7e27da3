//! Region profile models.

use serde::{Deserialize, Serialize};

/// Region identifier used by the fallback profile.
pub const DEFAULT_REGION: &str = "general";

/// Recommendations bundled for one body region.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RegionProfile {
    /// Short region identifier (e.g., "lumbar", "knee")
    pub region: String,
    /// Lower-case trigger phrases, matched as substrings
    #[serde(default)]
    pub keywords: Vec<String>,
    /// Outcome measures and scales to administer, in priority order
    pub assessments: Vec<String>,
    /// Physical exam maneuvers, in priority order
    pub exams: Vec<String>,
    /// Findings that warrant urgent referral
    pub red_flags: Vec<String>,
}

impl RegionProfile {
    /// Create an empty profile for a region.
    pub fn new(region: impl Into<String>) -> Self {
        Self {
            region: region.into(),
            keywords: Vec::new(),
            assessments: Vec::new(),
            exams: Vec::new(),
            red_flags: Vec::new(),
        }
    }

    /// Check whether any keyword occurs in already lower-cased text.
    pub fn matches(&self, lower_text: &str) -> bool {
        self.keywords
            .iter()
            .any(|keyword| lower_text.contains(keyword.as_str()))
    }

    /// A profile without keywords can only be selected as the fallback.
    pub fn is_default(&self) -> bool {
        self.keywords.is_empty()
    }

    /// Up to `n` leading exam items.
    pub fn leading_exams(&self, n: usize) -> &[String] {
        &self.exams[..n.min(self.exams.len())]
    }

    /// Up to `n` leading assessment tools.
    pub fn leading_assessments(&self, n: usize) -> &[String] {
        &self.assessments[..n.min(self.assessments.len())]
    }
}
