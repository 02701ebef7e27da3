//! Case export envelope.

use serde::{Deserialize, Serialize};

use crate::models::{CaseOutput, ExtractedSignals, GeneratedCase};

/// A generated case stamped for hand-off to a charting system.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CaseExport {
    /// Export identifier
    pub case_id: String,
    /// Export timestamp (RFC 3339)
    pub generated_at: String,
    /// Region of the selected profile
    pub region: String,
    /// Signals found in the notes
    pub signals: ExtractedSignals,
    /// Composed output
    pub output: CaseOutput,
}

impl CaseExport {
    /// Wrap a generated case with a fresh identifier and timestamp.
    pub fn from_case(case: &GeneratedCase) -> Self {
        Self {
            case_id: uuid::Uuid::new_v4().to_string(),
            generated_at: chrono::Utc::now().to_rfc3339(),
            region: case.output.region.clone(),
            signals: case.signals.clone(),
            output: case.output.clone(),
        }
    }

    /// Export to JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Export as a sectioned plain-text report.
    pub fn to_text(&self) -> String {
        let output = &self.output;
        let mut text = String::new();

        text.push_str(&format!("Case {} ({})\n", self.case_id, self.generated_at));
        text.push_str(&format!("Region focus: {}\n\n", self.region));

        push_section(&mut text, "Case Summary");
        text.push_str(&output.summary);
        text.push_str("\n\n");

        push_list(&mut text, "Recommended Assessments", &output.assessments);
        push_list(&mut text, "Physical Exam", &output.exams);
        push_list(&mut text, "Red Flags", &output.red_flags);

        push_section(&mut text, "SOAP Note");
        for (label, body) in [
            ("S", &output.soap.subjective),
            ("O", &output.soap.objective),
            ("A", &output.soap.assessment),
            ("P", &output.soap.plan),
        ] {
            text.push_str(&format!("{}: {}\n", label, body));
        }

        text
    }
}

fn push_section(text: &mut String, title: &str) {
    text.push_str(title);
    text.push('\n');
    text.push_str(&"-".repeat(title.len()));
    text.push('\n');
}

fn push_list(text: &mut String, title: &str, items: &[String]) {
    push_section(text, title);
    for item in items {
        text.push_str(&format!("- {}\n", item));
    }
    text.push('\n');
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generate_case;

    fn sample() -> GeneratedCase {
        generate_case("Right knee pain 4/10 for 2 weeks, worse with stairs.").unwrap()
    }

    #[test]
    fn test_export_json_fields() {
        let export = CaseExport::from_case(&sample());
        let json: serde_json::Value = serde_json::from_str(&export.to_json().unwrap()).unwrap();

        assert_eq!(json["region"], "knee");
        assert_eq!(json["signals"]["pain_score"], "4/10");
        assert_eq!(json["signals"]["easing"], serde_json::Value::Null);
        assert_eq!(json["output"]["soap"]["assessment"], crate::narrative::ASSESSMENT);
        assert!(uuid::Uuid::parse_str(json["case_id"].as_str().unwrap()).is_ok());
    }

    #[test]
    fn test_export_text_sections() {
        let export = CaseExport::from_case(&sample());
        let text = export.to_text();

        assert!(text.contains("Region focus: knee"));
        assert!(text.contains("Recommended Assessments\n"));
        assert!(text.contains("- Lower Extremity Functional Scale (LEFS)\n"));
        assert!(text.contains("- Hot swollen joint with fever (possible infection)\n"));
        assert!(text.contains("S: Patient-reported history transcribed from interview. Symptoms ongoing for 2 weeks."));
        assert!(text.contains("\nA: Presentation appears mechanically influenced"));
    }

    #[test]
    fn test_exports_get_distinct_ids() {
        let case = sample();
        let a = CaseExport::from_case(&case);
        let b = CaseExport::from_case(&case);
        assert_ne!(a.case_id, b.case_id);
        assert_eq!(a.output, b.output);
    }
}
