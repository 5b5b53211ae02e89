//! Plain-text results report sent to the respondent.

use std::fmt::Write;

use crate::domain::foundation::Timestamp;
use crate::domain::scoring::AssessmentResult;

const TITLE: &str = "CONSCIOUSNESS ASSESSMENT RESULTS";

/// Respondent-supplied text that appears in the report.
#[derive(Debug, Clone, Copy)]
pub struct ReportContext<'a> {
    pub email: &'a str,
    pub reflection: &'a str,
    pub completed_at: &'a Timestamp,
}

/// Renders results as the body of the results email.
pub struct ReportFormatter;

impl ReportFormatter {
    pub fn render(result: &AssessmentResult, context: ReportContext<'_>) -> String {
        let max_total: u32 = result.dimension_scores.iter().map(|d| d.max_score).sum();
        let mut out = String::new();

        // Writing into a String cannot fail.
        let _ = writeln!(out, "{}", TITLE);
        let _ = writeln!(out, "{}", "=".repeat(TITLE.len()));
        out.push('\n');

        let _ = writeln!(out, "User Email: {}", context.email);
        let _ = writeln!(out, "Total Score: {}/{}", result.total_score, max_total);
        let _ = writeln!(out, "Readiness Level: {}", result.readiness_level.label());
        let _ = writeln!(out, "{}", result.readiness_level.description());
        out.push('\n');

        out.push_str("DIMENSION SCORES:\n");
        for dimension in &result.dimension_scores {
            let _ = writeln!(
                out,
                "• {}: {}/{} ({})",
                dimension.name,
                dimension.score,
                dimension.max_score,
                dimension.percentage()
            );
        }
        out.push('\n');

        let _ = writeln!(out, "WEAKEST AREA: {}", result.weakest_area.name);
        out.push('\n');

        out.push_str("SWOT ANALYSIS:\n");
        let _ = writeln!(out, "Strengths: {}", result.swot.strengths.join(", "));
        let _ = writeln!(out, "Weaknesses: {}", result.swot.weaknesses.join(", "));
        out.push('\n');

        out.push_str("REFLECTION ON CONSISTENCY:\n");
        let _ = writeln!(out, "\"{}\"", context.reflection);
        out.push('\n');

        out.push_str("OPPORTUNITIES:\n");
        write_numbered(&mut out, &result.swot.opportunities);
        out.push('\n');

        out.push_str("THREATS:\n");
        write_numbered(&mut out, &result.swot.threats);
        out.push('\n');

        let _ = write!(
            out,
            "Assessment completed at: {}",
            context.completed_at.to_report_string()
        );
        out
    }
}

fn write_numbered(out: &mut String, items: &[String]) {
    for (i, item) in items.iter().enumerate() {
        let _ = writeln!(out, "{}. {}", i + 1, item);
    }
}
