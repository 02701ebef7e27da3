//! MSK Intake Core Library
//!
//! Turns free-text musculoskeletal interview notes into a structured case
//! draft: region-specific recommendations, a case summary and a SOAP note.
//!
//! # Architecture
//!
//! ```text
//! Interview notes ──trim / empty guard──┐
//!                                       │
//!                   ┌───────────────────┴───────────────────┐
//!                   ▼                                       ▼
//!           Signal Extraction                       Profile Matching
//!     (pain, duration, aggravating,           (first catalog entry with
//!            easing factors)                      a keyword hit wins)
//!                   │                                       │
//!                   └───────────────────┬───────────────────┘
//!                                       ▼
//!                           Narrative Composition
//!                        (summary + SOAP note draft)
//!                                       │
//!                                       ▼
//!                             JSON / text export
//! ```
//!
//! # Core Principle
//!
//! **Output is a documentation draft.** Every recommendation list is static
//! catalog data; nothing is inferred beyond keyword and pattern hits.
//!
//! # Modules
//!
//! - [`models`]: Domain types (RegionProfile, ExtractedSignals, CaseOutput, etc.)
//! - [`catalog`]: Region profile catalog and keyword matching
//! - [`extraction`]: Pattern-based signal extraction
//! - [`narrative`]: Summary and SOAP note composition
//! - [`pipeline`]: Guarded end-to-end generation
//! - [`export`]: JSON and plain-text export

pub mod catalog;
pub mod export;
pub mod extraction;
pub mod models;
pub mod narrative;
pub mod pipeline;

// Re-export commonly used types
pub use catalog::{CatalogError, ProfileCatalog};
pub use export::CaseExport;
pub use extraction::{extract_signals, SignalExtractor};
pub use models::{CaseOutput, ExtractedSignals, GeneratedCase, RegionProfile, SoapNote};
pub use narrative::compose;
pub use pipeline::{Pipeline, PipelineError};

/// Generate a case from notes using the built-in catalog.
pub fn generate_case(notes: &str) -> Result<GeneratedCase, PipelineError> {
    Pipeline::default().generate(notes)
}

// UniFFI setup - using proc macros
uniffi::setup_scaffolding!();

use std::sync::{Arc, Mutex};

use tracing::info;

// =========================================================================
// FFI Error Type
// =========================================================================

#[derive(Debug, thiserror::Error, uniffi::Error)]
pub enum IntakeError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Invalid catalog: {0}")]
    InvalidCatalog(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),

    #[error("Lock poisoned: {0}")]
    LockPoisoned(String),
}

impl From<PipelineError> for IntakeError {
    fn from(e: PipelineError) -> Self {
        IntakeError::InvalidInput(e.to_string())
    }
}

impl From<CatalogError> for IntakeError {
    fn from(e: CatalogError) -> Self {
        IntakeError::InvalidCatalog(e.to_string())
    }
}

impl From<serde_json::Error> for IntakeError {
    fn from(e: serde_json::Error) -> Self {
        IntakeError::SerializationError(e.to_string())
    }
}

impl<T> From<std::sync::PoisonError<T>> for IntakeError {
    fn from(e: std::sync::PoisonError<T>) -> Self {
        IntakeError::LockPoisoned(e.to_string())
    }
}

// =========================================================================
// Factory Functions (exported to FFI)
// =========================================================================

/// Create an assistant backed by the built-in catalog.
#[uniffi::export]
pub fn new_note_assistant() -> Arc<NoteAssistant> {
    Arc::new(NoteAssistant::new(ProfileCatalog::default()))
}

/// Create an assistant backed by a custom JSON catalog.
#[uniffi::export]
pub fn note_assistant_with_catalog(
    catalog_json: String,
) -> Result<Arc<NoteAssistant>, IntakeError> {
    let catalog = ProfileCatalog::from_json(&catalog_json)?;
    Ok(Arc::new(NoteAssistant::new(catalog)))
}

/// One-shot generation returning the JSON export.
#[uniffi::export]
pub fn generate_case_json(notes: String) -> Result<String, IntakeError> {
    let case = generate_case(&notes)?;
    Ok(CaseExport::from_case(&case).to_json()?)
}

// =========================================================================
// Main API Object
// =========================================================================

/// Holds the most recent generated case between generate and clear.
#[derive(uniffi::Object)]
pub struct NoteAssistant {
    catalog: ProfileCatalog,
    current: Mutex<Option<GeneratedCase>>,
}

impl NoteAssistant {
    /// Create an assistant over a catalog.
    pub fn new(catalog: ProfileCatalog) -> Self {
        Self {
            catalog,
            current: Mutex::new(None),
        }
    }
}

#[uniffi::export]
impl NoteAssistant {
    /// Generate from notes, replacing any previous result.
    ///
    /// Blank notes are rejected and leave the previous result untouched.
    pub fn generate(&self, notes: String) -> Result<FfiCaseOutput, IntakeError> {
        let case = Pipeline::new(&self.catalog).generate(&notes)?;
        info!(region = %case.output.region, signals = case.signals.present_count(), "generated case");

        let output = FfiCaseOutput::from(&case);
        *self.current.lock()? = Some(case);
        Ok(output)
    }

    /// The most recent result, if any.
    pub fn current(&self) -> Result<Option<FfiCaseOutput>, IntakeError> {
        let current = self.current.lock()?;
        Ok(current.as_ref().map(FfiCaseOutput::from))
    }

    /// Drop the held result.
    pub fn clear(&self) -> Result<(), IntakeError> {
        *self.current.lock()? = None;
        info!("cleared case");
        Ok(())
    }

    /// Export the held result as JSON.
    pub fn export_json(&self) -> Result<Option<String>, IntakeError> {
        let current = self.current.lock()?;
        match current.as_ref() {
            Some(case) => Ok(Some(CaseExport::from_case(case).to_json()?)),
            None => Ok(None),
        }
    }

    /// Regions in match order.
    pub fn regions(&self) -> Vec<String> {
        self.catalog
            .profiles()
            .iter()
            .map(|p| p.region.clone())
            .collect()
    }
}

// =========================================================================
// FFI Types
// =========================================================================

/// FFI-safe extracted signals.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiSignals {
    pub pain_score: Option<String>,
    pub duration: Option<String>,
    pub aggravating: Option<String>,
    pub easing: Option<String>,
}

impl From<ExtractedSignals> for FfiSignals {
    fn from(signals: ExtractedSignals) -> Self {
        Self {
            pain_score: signals.pain_score,
            duration: signals.duration,
            aggravating: signals.aggravating,
            easing: signals.easing,
        }
    }
}

/// FFI-safe SOAP note.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiSoapNote {
    pub subjective: String,
    pub objective: String,
    pub assessment: String,
    pub plan: String,
}

impl From<SoapNote> for FfiSoapNote {
    fn from(soap: SoapNote) -> Self {
        Self {
            subjective: soap.subjective,
            objective: soap.objective,
            assessment: soap.assessment,
            plan: soap.plan,
        }
    }
}

/// FFI-safe case output.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiCaseOutput {
    pub summary: String,
    pub region: String,
    pub assessments: Vec<String>,
    pub exams: Vec<String>,
    pub red_flags: Vec<String>,
    pub soap: FfiSoapNote,
    pub signals: FfiSignals,
}

impl From<&GeneratedCase> for FfiCaseOutput {
    fn from(case: &GeneratedCase) -> Self {
        let output = case.output.clone();
        Self {
            summary: output.summary,
            region: output.region,
            assessments: output.assessments,
            exams: output.exams,
            red_flags: output.red_flags,
            soap: output.soap.into(),
            signals: case.signals.clone().into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_assistant_generate_and_clear() {
        let assistant = new_note_assistant();
        assert!(assistant.current().unwrap().is_none());

        let output = assistant
            .generate("Sciatica down the left leg for 6 months".into())
            .unwrap();
        assert_eq!(output.region, "lumbar");
        assert_eq!(output.signals.duration.as_deref(), Some("6 months"));
        assert!(assistant.current().unwrap().is_some());

        assistant.clear().unwrap();
        assert!(assistant.current().unwrap().is_none());
        assert!(assistant.export_json().unwrap().is_none());
    }

    #[test]
    fn test_assistant_replaces_previous_result() {
        let assistant = new_note_assistant();
        assistant.generate("Knee pain 3/10".into()).unwrap();
        assistant.generate("Rotator cuff strain".into()).unwrap();

        let current = assistant.current().unwrap().unwrap();
        assert_eq!(current.region, "shoulder");
        assert_eq!(current.signals.pain_score, None);
    }

    #[test]
    fn test_assistant_blank_notes_keep_previous_result() {
        let assistant = new_note_assistant();
        assistant.generate("Neck pain".into()).unwrap();

        let err = assistant.generate("   ".into()).unwrap_err();
        assert!(matches!(err, IntakeError::InvalidInput(_)));
        assert_eq!(assistant.current().unwrap().unwrap().region, "cervical");
    }

    #[test]
    fn test_assistant_with_custom_catalog() {
        let json = r#"{
            "profiles": [{"region": "ankle", "keywords": ["ankle"], "assessments": ["FAAM"], "exams": ["Drawer"], "red_flags": []}],
            "default": {"region": "general", "assessments": [], "exams": [], "red_flags": []}
        }"#;
        let assistant = note_assistant_with_catalog(json.into()).unwrap();
        assert_eq!(assistant.regions(), vec!["ankle"]);
        assert_eq!(assistant.generate("Ankle sprain".into()).unwrap().region, "ankle");

        let err = note_assistant_with_catalog("{}".into()).err().unwrap();
        assert!(matches!(err, IntakeError::InvalidCatalog(_)));
    }

    #[test]
    fn test_generate_case_json() {
        let json = generate_case_json("Lumbar stiffness".into()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["region"], "lumbar");

        assert!(matches!(
            generate_case_json(String::new()),
            Err(IntakeError::InvalidInput(_))
        ));
    }
}
