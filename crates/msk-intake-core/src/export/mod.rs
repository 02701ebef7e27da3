//! Export of generated cases as JSON or a plain-text report.

mod report;

pub use report::*;
