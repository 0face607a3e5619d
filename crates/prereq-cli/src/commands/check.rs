//! `prereq check` command implementation.
//!
//! Reports any course that is required somewhere but never declared, and
//! fails with the first circular prerequisite chain, if any. The chain itself
//! is reported once, through the returned error.

use prereq_core::error::{PrereqError, PrereqResult};
use prereq_resolver::Cycle;
use serde_json::json;

use super::CommandContext;

/// One line of the text report
#[derive(Debug, Clone, PartialEq)]
pub enum ReportLine {
    Warning(String),
    Success(String),
}

/// Execute the `prereq check` command
pub async fn execute(ctx: &CommandContext) -> PrereqResult<()> {
    let (catalog, _) = ctx.load_catalog(false).await?;
    let graph = catalog.to_graph()?;
    let undeclared: Vec<&str> = graph.implicit_leaves().into_iter().collect();
    let cycle = graph.find_cycle();

    if ctx.json {
        ctx.output.json(&json!({
            "courses": graph.len(),
            "undeclared": undeclared,
            "cycle": cycle.as_ref().map(|cycle| cycle.members()),
        }))?;
    } else {
        for line in text_report(graph.len() + undeclared.len(), &undeclared, cycle.as_ref()) {
            match line {
                ReportLine::Warning(message) => ctx.output.warn(&message),
                ReportLine::Success(message) => ctx.output.success(&message),
            }
        }
    }

    match cycle {
        Some(cycle) => Err(PrereqError::circular(cycle.into_members())),
        None => Ok(()),
    }
}

/// Lines printed before the command returns
///
/// A cycle adds nothing here: the caller prints the returned error.
pub fn text_report(course_count: usize, undeclared: &[&str], cycle: Option<&Cycle>) -> Vec<ReportLine> {
    let mut lines: Vec<ReportLine> = undeclared
        .iter()
        .map(|name| {
            ReportLine::Warning(format!(
                "'{}' is listed as a prerequisite but never declared; treating it as a zero-cost course",
                name
            ))
        })
        .collect();

    if cycle.is_none() {
        lines.push(ReportLine::Success(format!(
            "No circular prerequisites among {} courses",
            course_count
        )));
    }

    lines
}
