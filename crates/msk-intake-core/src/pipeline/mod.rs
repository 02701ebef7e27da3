//! Note processing pipeline.
//!
//! Pipeline: Trim/guard → Signal Extraction + Profile Matching → Composition

use thiserror::Error;
use tracing::warn;

use crate::catalog::{self, ProfileCatalog};
use crate::extraction::SignalExtractor;
use crate::models::{CaseOutput, GeneratedCase};
use crate::narrative;

/// Message shown when generate is triggered without notes.
pub const EMPTY_NOTES_MESSAGE: &str = "Please enter patient conversation notes first.";

/// Pipeline errors.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum PipelineError {
    #[error("Please enter patient conversation notes first.")]
    EmptyNotes,
}

pub type PipelineResult<T> = Result<T, PipelineError>;

/// Runs extraction, matching and composition against one catalog.
pub struct Pipeline<'a> {
    catalog: &'a ProfileCatalog,
}

impl Default for Pipeline<'static> {
    fn default() -> Self {
        Self::new(catalog::builtin())
    }
}

impl<'a> Pipeline<'a> {
    /// Create a pipeline over a catalog.
    pub fn new(catalog: &'a ProfileCatalog) -> Self {
        Self { catalog }
    }

    /// Trim the notes, reject empty input, then run the pipeline.
    pub fn generate(&self, notes: &str) -> PipelineResult<GeneratedCase> {
        let notes = notes.trim();
        if notes.is_empty() {
            warn!("generate requested without notes");
            return Err(PipelineError::EmptyNotes);
        }

        let signals = SignalExtractor::extract(notes);
        let profile = self.catalog.match_profile(notes);
        let output = narrative::compose(notes, &signals, profile);

        Ok(GeneratedCase {
            notes: notes.to_string(),
            signals,
            output,
        })
    }

    /// Run the pipeline on text as given, without trimming or the empty guard.
    pub fn run(&self, text: &str) -> CaseOutput {
        let signals = SignalExtractor::extract(text);
        let profile = self.catalog.match_profile(text);
        narrative::compose(text, &signals, profile)
    }

    /// Get the catalog for direct access.
    pub fn catalog(&self) -> &ProfileCatalog {
        self.catalog
    }
}
