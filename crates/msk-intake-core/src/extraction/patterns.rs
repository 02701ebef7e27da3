//! Compiled signal patterns.
//!
//! Each pattern is compiled on first use and shared for the life of the
//! process.

use std::sync::OnceLock;

use regex::Regex;

/// "7/10", "10/10" or a bare "10". A lone single digit is not a score.
const PAIN_SCORE: &str = r"\b(?:(?:10|[0-9])/10|10)\b";

/// "3 weeks", "2days", "1 Year".
const DURATION: &str = r"(?i)\b[0-9]+\s*(?:days?|weeks?|months?|years?)\b";

/// Free text after an aggravating trigger, up to the next sentence break.
const AGGRAVATING: &str = r"(?i)\b(?:worse with|aggravated by|increases with)\s+([^.;\n]+)";

/// Free text after an easing trigger, up to the next sentence break.
const EASING: &str = r"(?i)\b(?:better with|relieved by|eases with)\s+([^.;\n]+)";

/// Any factor trigger; marks where a following clause begins.
const FACTOR_TRIGGER: &str =
    r"(?i)\b(?:worse with|aggravated by|increases with|better with|relieved by|eases with)\b";

static PAIN_SCORE_RE: OnceLock<Regex> = OnceLock::new();
static DURATION_RE: OnceLock<Regex> = OnceLock::new();
static AGGRAVATING_RE: OnceLock<Regex> = OnceLock::new();
static EASING_RE: OnceLock<Regex> = OnceLock::new();
static FACTOR_TRIGGER_RE: OnceLock<Regex> = OnceLock::new();

fn compiled(cell: &'static OnceLock<Regex>, source: &str) -> &'static Regex {
    // Sources are string constants covered by the tests below.
    cell.get_or_init(|| Regex::new(source).expect("static signal pattern must compile"))
}

pub(super) fn pain_score() -> &'static Regex {
    compiled(&PAIN_SCORE_RE, PAIN_SCORE)
}

pub(super) fn duration() -> &'static Regex {
    compiled(&DURATION_RE, DURATION)
}

pub(super) fn aggravating() -> &'static Regex {
    compiled(&AGGRAVATING_RE, AGGRAVATING)
}

pub(super) fn easing() -> &'static Regex {
    compiled(&EASING_RE, EASING)
}

pub(super) fn factor_trigger() -> &'static Regex {
    compiled(&FACTOR_TRIGGER_RE, FACTOR_TRIGGER)
}
