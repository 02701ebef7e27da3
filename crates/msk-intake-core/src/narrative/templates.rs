//! Fixed sentences used when drafting the summary and SOAP note.

/// Maximum characters of the first note line carried into the summary.
pub const SUMMARY_LINE_LIMIT: usize = 180;

/// Summary lead-in, followed by the first note line.
pub const SUMMARY_LEAD: &str = "Primary concern captured from interview:";

/// Stands in for an empty first line.
pub const SUMMARY_FALLBACK: &str = "No details provided.";

/// Always the last summary sentence.
pub const SUMMARY_CLOSING: &str =
    "Prioritize function-limiting activities, goals, and safety screening.";

/// First sentence of the subjective section.
pub const SUBJECTIVE_LEAD: &str = "Patient-reported history transcribed from interview.";

/// Objective section, before the suggested exams.
pub const OBJECTIVE_LEAD: &str = "Plan objective exam around observed movement, ROM, strength, and relevant regional/neuro testing. Suggested starting exams:";

/// Assessment section; identical for every case.
pub const ASSESSMENT: &str = "Presentation appears mechanically influenced based on interview context, pending full objective testing. Differential considerations and irritability level should be refined after exam.";

/// Number of leading exams and assessments quoted in the SOAP note.
pub const SOAP_LEADING_ITEMS: usize = 2;

pub fn summary_duration(duration: &str) -> String {
    format!("Reported duration: {}.", duration)
}

pub fn summary_pain(pain: &str) -> String {
    format!("Pain intensity noted: {}.", pain)
}

pub fn summary_aggravating(factors: &str) -> String {
    format!("Aggravating factors include {}.", factors)
}

pub fn summary_easing(factors: &str) -> String {
    format!("Easing factors include {}.", factors)
}

pub fn subjective_duration(duration: &str) -> String {
    format!("Symptoms ongoing for {}.", duration)
}

pub fn subjective_pain(pain: &str) -> String {
    format!("Pain reported at {}.", pain)
}

pub fn subjective_aggravating(factors: &str) -> String {
    format!("Worse with {}.", factors)
}

pub fn subjective_easing(factors: &str) -> String {
    format!("Improved with {}.", factors)
}

/// Objective section quoting the leading exams.
pub fn objective(exams: &[String]) -> String {
    format!("{} {}.", OBJECTIVE_LEAD, exams.join("; "))
}

/// Plan section quoting the leading assessment tools.
pub fn plan(assessments: &[String]) -> String {
    format!(
        "Perform prioritized tests ({}), complete red-flag screen, set measurable functional goals, and begin individualized treatment/education based on exam findings.",
        assessments.join(", ")
    )
}
